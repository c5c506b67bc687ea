use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <span>"Boards"</span>
            <span class="footer__tagline">"Digital sticky notes for teams"</span>
        </footer>
    }
}
