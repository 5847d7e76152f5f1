use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="page__header">
            <div class="page__identity">
                <span class="page__name">"Artem Kovalev"</span>
                <span class="page__role">"Systems & web engineer"</span>
            </div>
            <nav class="page__links" aria-label="Profiles">
                <a class="page__link" href="https://github.com/akovalev" rel="noreferrer">
                    {icon("github")}
                    <span>"GitHub"</span>
                </a>
                <a class="page__link" href="mailto:artem@kovalev.dev">
                    {icon("mail")}
                    <span>"Email"</span>
                </a>
            </nav>
        </header>
    }
}
