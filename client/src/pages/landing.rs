//! Public landing page: hero, feature cards, docs links, tech stack.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the unauthenticated entry route. Its only decision is where
//! "Visit app" points, based on whether the JWT cookie is present when the
//! page renders. It never reads the auth provider's state; the provider is
//! only forwarded to the navbar.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::config::DocsLinks;
use crate::state::auth::AuthContext;
use crate::util::credentials::request_cookie_token;

pub const DASHBOARD_PATH: &str = "/dashboard";
pub const SIGN_IN_PATH: &str = "/auth/signin";
pub const SIGN_UP_PATH: &str = "/auth/signup";

/// "Visit app" target: the dashboard when a non-empty token is present,
/// sign-in otherwise.
#[must_use]
pub fn link_target(token: Option<&str>) -> &'static str {
    match token {
        Some(token) if !token.is_empty() => DASHBOARD_PATH,
        _ => SIGN_IN_PATH,
    }
}

/// Marketing card copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
}

pub const FEATURES: [Feature; 3] = [
    Feature {
        icon: "paper-plane",
        title: "Invite",
        blurb: "Invite other collaborators and work together in real-time",
    },
    Feature {
        icon: "sticky-note",
        title: "Organize",
        blurb: "Capture ideas, tasks, and goals on digital sticky notes",
    },
    Feature {
        icon: "file-code",
        title: "Automate",
        blurb: "Automatically group similar posts together and summarize content",
    },
];

/// Logos shown under "Boards is built with", in display order.
pub const TECH_STACK: [&str; 8] = [
    "golang",
    "nextjs",
    "postgresql",
    "redis",
    "docker",
    "kubernetes",
    "aws",
    "rabbitmq",
];

const TECH_STACK_ROW: usize = 4;

/// Landing page. The cookie is read once, synchronously, before the view is
/// built.
#[component]
pub fn LandingPage(auth: AuthContext) -> impl IntoView {
    let token = request_cookie_token();
    let visit_href = link_target(token.as_deref());
    let docs = DocsLinks::from_build_env();

    let features = FEATURES
        .iter()
        .map(|feature| {
            view! {
                <div class="card feature-card">
                    <div class="card-body">
                        <span class=format!("icon icon--{}", feature.icon) aria-hidden="true"></span>
                        <h2 class="card-title">{feature.title}</h2>
                        <p class="feature-card__blurb">{feature.blurb}</p>
                    </div>
                </div>
            }
        })
        .collect_view();

    let stack_rows = TECH_STACK
        .chunks(TECH_STACK_ROW)
        .map(|row| {
            let logos = row
                .iter()
                .map(|name| view! { <img src=format!("/{name}.png") width="50" alt=*name/> })
                .collect_view();
            view! { <div class="tech-stack__row">{logos}</div> }
        })
        .collect_view();

    view! {
        <Navbar auth/>
        <div class="landing-page">
            <section class="hero">
                <div class="hero-content">
                    <div>
                        <h1 class="hero__title">"Boards"</h1>
                        <p class="hero__tagline">"Collaborate with others and turn your ideas into actions"</p>
                        <div class="hero__actions">
                            <a href=SIGN_UP_PATH class="btn btn-primary">"Sign Up"</a>
                            <a href=visit_href class="btn btn-secondary btn-outline">"Visit app"</a>
                        </div>
                    </div>
                    <img src="/Hero.png" class="hero__image" alt="Boards app"/>
                </div>
            </section>
            <section class="landing-page__body">
                <div class="feature-grid">{features}</div>
                <div class="landing-page__columns">
                    <div class="docs">
                        <h2>"Documentation"</h2>
                        <p>
                            "Interested in the backend components? Take a look at the documentation for the REST API or WebSocket events."
                        </p>
                        <div class="docs__links">
                            <a class="btn btn-primary" href=docs.api target="_blank">"API Docs"</a>
                            <a class="btn btn-outline" href=docs.websocket target="_blank">"WebSocket Docs"</a>
                        </div>
                    </div>
                    <div class="tech-stack">
                        <h2>"Boards is built with"</h2>
                        {stack_rows}
                    </div>
                </div>
            </section>
        </div>
        <Footer/>
    }
}
