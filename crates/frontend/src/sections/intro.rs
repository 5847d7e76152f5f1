use crate::layout::tabs::TabPanel;
use leptos::prelude::*;

#[component]
pub fn IntroPanel() -> impl IntoView {
    view! {
        <TabPanel id="panel-intro">
            <h1>"Hi, I build fast things for slow networks."</h1>
            <p>
                "I am a systems and web engineer focused on terminal tooling, "
                "data plumbing and the occasional browser experiment. Most of "
                "my recent work is Rust compiled to WebAssembly or running in "
                "a PTY near you."
            </p>
            <h2>"Currently comfortable with"</h2>
            <ul class="skills">
                <li>"Rust, async and otherwise"</li>
                <li>"WebAssembly front ends (Leptos)"</li>
                <li>"PostgreSQL and the shape of slow queries"</li>
                <li>"CI that finishes before the coffee does"</li>
            </ul>
        </TabPanel>
    }
}
