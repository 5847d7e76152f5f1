//! Project demo player: anchor links that open a modal with one shared
//! `<video>` element. The modal stays mounted and hidden between demos so the
//! element survives open/close cycles.

use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::KeyboardEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoClip {
    pub src: String,
    pub poster: Option<String>,
    pub caption: Option<String>,
}

/// Open/close state of the demo player, provided via context. No state is
/// shared with the tab controller.
#[derive(Clone, Copy)]
pub struct DemoPlayerService {
    current: RwSignal<Option<DemoClip>>,
}

impl DemoPlayerService {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
        }
    }

    pub fn open(&self, clip: DemoClip) {
        self.current.set(Some(clip));
    }

    pub fn close(&self) {
        self.current.set(None);
    }

    pub fn is_open(&self) -> bool {
        self.current.with(|clip| clip.is_some())
    }

    fn clip(&self) -> Option<DemoClip> {
        self.current.get()
    }

    fn caption(&self) -> Option<String> {
        self.current
            .with(|clip| clip.as_ref().and_then(|c| c.caption.clone()))
    }
}

/// Anchor that opens the demo player instead of navigating. The media path,
/// poster and caption ride along as `data-demo-*` attributes; without a
/// mounted [`DemoPlayerService`] the anchor stays a plain link to the file.
#[component]
pub fn DemoLink(
    /// Path to the demo media file
    #[prop(into)]
    src: String,
    /// Optional poster image shown before playback
    #[prop(optional, into)]
    poster: Option<String>,
    /// Optional caption shown in the modal header
    #[prop(optional, into)]
    caption: Option<String>,
    children: Children,
) -> impl IntoView {
    let player = use_context::<DemoPlayerService>();
    if player.is_none() {
        leptos::logging::warn!("DemoPlayerService not provided; demo links are inert");
    }

    let clip = DemoClip {
        src: src.clone(),
        poster: poster.clone(),
        caption: caption.clone(),
    };
    let on_click = move |ev: ev::MouseEvent| {
        if let Some(player) = player {
            ev.prevent_default();
            player.open(clip.clone());
        }
    };

    view! {
        <a
            class="demo-link"
            href=src.clone()
            data-demo-src=src
            data-demo-poster=poster
            data-demo-caption=caption
            on:click=on_click
        >
            {icon("play")}
            {children()}
        </a>
    }
}

#[component]
pub fn DemoModal() -> impl IntoView {
    let Some(player) = use_context::<DemoPlayerService>() else {
        leptos::logging::warn!("DemoPlayerService not provided; demo modal disabled");
        return view! { <></> }.into_any();
    };

    let video_ref = NodeRef::<leptos::html::Video>::new();

    // Close on Escape while open.
    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if keyboard_event.key() == "Escape" && player.is_open() {
                    player.close();
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    });

    // Keep the shared <video> element in sync with the requested clip.
    Effect::new(move |_| {
        let clip = player.clip();
        let Some(video) = video_ref.get() else { return };

        match clip {
            Some(clip) => {
                // Swapping src reloads the media even for the same file, so
                // skip the swap when the resolved URL is unchanged.
                let next_src = resolve_src(&clip.src);
                if video.current_src() != next_src {
                    video.set_src(&clip.src);
                    video.load();
                }
                video.set_poster(clip.poster.as_deref().unwrap_or(""));

                if let Ok(promise) = video.play() {
                    spawn_local(async move {
                        // Autoplay may be rejected; the demo then waits for
                        // the user to press play.
                        let _ = JsFuture::from(promise).await;
                    });
                }
            }
            None => {
                let _ = video.pause();
            }
        }
    });

    let handle_overlay_click = move |_| {
        player.close();
    };

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let handle_close = move |_| {
        player.close();
    };

    view! {
        <div
            class="modal-overlay demo-modal"
            prop:hidden=move || !player.is_open()
            on:click=handle_overlay_click
        >
            <div class="modal" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">
                        {move || player.caption().unwrap_or_else(|| "Demo".to_string())}
                    </h2>
                    <div class="modal-header-actions">
                        <button class="button button--icon modal__close" on:click=handle_close>
                            {icon("x")}
                        </button>
                    </div>
                </div>
                <div class="modal-body">
                    <video class="demo-modal__video" node_ref=video_ref controls=true></video>
                </div>
            </div>
        </div>
    }
    .into_any()
}

/// Resolves a media path against the document base URL so the comparison with
/// `video.currentSrc` (always absolute) is meaningful.
fn resolve_src(src: &str) -> String {
    let base = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|document| document.base_uri().ok())
        .flatten();
    match base.and_then(|base| web_sys::Url::new_with_base(src, &base).ok()) {
        Some(url) => url.href(),
        None => src.to_string(),
    }
}
