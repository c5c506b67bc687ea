//! Top navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! The one in-crate consumer of the auth provider: it swaps the sign-in link
//! for a sign-out action once the post-mount credential check succeeds.

use leptos::prelude::*;

use crate::pages::landing::SIGN_IN_PATH;
use crate::state::auth::AuthContext;
use crate::util::credentials::BrowserStorage;

/// Fixed navbar height; the hero fills the remaining viewport.
pub const NAVBAR_HEIGHT_PX: u32 = 64;

#[component]
pub fn Navbar(auth: AuthContext) -> impl IntoView {
    let on_sign_out = move |_| auth.sign_out(&BrowserStorage);

    view! {
        <nav class="navbar" style=format!("height: {NAVBAR_HEIGHT_PX}px")>
            <a href="/" class="navbar__brand">"Boards"</a>
            <Show
                when=move || auth.is_authenticated()
                fallback=|| view! { <a href=SIGN_IN_PATH class="btn btn-ghost">"Sign in"</a> }
            >
                <span class="navbar__user">
                    {move || auth.state().with(|s| s.user.as_ref().map(|u| u.display_name().to_owned()))}
                </span>
                <button class="btn btn-ghost" on:click=on_sign_out>"Sign out"</button>
            </Show>
        </nav>
    }
}
