use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="page__footer">
            <span>"Built with Leptos. No trackers, no cookies."</span>
        </footer>
    }
}
