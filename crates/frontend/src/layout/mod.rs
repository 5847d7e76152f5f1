pub mod footer;
pub mod header;
pub mod tabs;

use footer::Footer;
use header::Header;
use leptos::prelude::*;

/// Page shell.
///
/// Layout structure:
/// ```text
/// +------------------------------------------+
/// |                 Header                    |
/// +------------------------------------------+
/// |            Main (tabbed content)          |
/// +------------------------------------------+
/// |                 Footer                    |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="page">
            <Header />

            <main class="page__main">
                {children()}
            </main>

            <Footer />
        </div>
    }
}
