use crate::layout::tabs::TabPanel;
use crate::shared::demo_player::DemoLink;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn ProjectsPanel() -> impl IntoView {
    view! {
        <TabPanel id="panel-projects">
            <h1>"Projects"</h1>
            <div class="projects">
                <article class="project-card">
                    <h2>"tidewatch"</h2>
                    <p>
                        "Terminal dashboard for tide and weather data, rendered "
                        "at 60fps over SSH. Rust, ratatui, one very patient "
                        "Raspberry Pi."
                    </p>
                    <div class="project-card__links">
                        <a class="project-card__link" href="https://github.com/akovalev/tidewatch" rel="noreferrer">
                            {icon("github")}
                            <span>"Source"</span>
                        </a>
                        <DemoLink
                            src="media/tidewatch-demo.mp4"
                            poster="media/tidewatch-poster.jpg"
                            caption="tidewatch: live tiles over SSH"
                        >
                            <span>"Watch demo"</span>
                        </DemoLink>
                    </div>
                </article>

                <article class="project-card">
                    <h2>"hullscan"</h2>
                    <p>
                        "Static analyzer for container images that flags "
                        "layers dragging in more than they declare. Found its "
                        "first real CVE three weeks after release."
                    </p>
                    <div class="project-card__links">
                        <a class="project-card__link" href="https://github.com/akovalev/hullscan" rel="noreferrer">
                            {icon("github")}
                            <span>"Source"</span>
                        </a>
                        <DemoLink
                            src="media/hullscan-demo.mp4"
                            caption="hullscan: scanning a 2GB image"
                        >
                            <span>"Watch demo"</span>
                        </DemoLink>
                    </div>
                </article>

                <article class="project-card">
                    <h2>"this page"</h2>
                    <p>
                        "The site you are reading: a Leptos app small enough "
                        "to audit in one sitting, with an accessible tab "
                        "widget and a shared-player demo modal."
                    </p>
                    <div class="project-card__links">
                        <a class="project-card__link" href="https://github.com/akovalev/portfolio" rel="noreferrer">
                            {icon("external-link")}
                            <span>"Source"</span>
                        </a>
                    </div>
                </article>
            </div>
        </TabPanel>
    }
}
