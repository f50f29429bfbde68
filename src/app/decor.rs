use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::motion::ParallaxMotion;

use super::hooks::use_page_progress;

/// Thin reading-progress bar pinned to the top of the viewport.
#[component]
pub fn ScrollProgress() -> impl IntoView {
    let progress = use_page_progress();
    view! {
        <div
            aria-hidden="true"
            class="fixed left-0 right-0 top-0 z-[70] h-[3px] origin-left bg-violet-500"
            style=move || format!("transform: scaleX({})", progress.get())
        ></div>
    }
}

/// Fixed background blobs that drift upward as the page scrolls. Input
/// transparent; purely decorative.
#[component]
pub fn ParallaxBackdrop() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let drift = Memo::new(move |_| ParallaxMotion::at(scroll_y.get()));
    view! {
        <div aria-hidden="true" class="pointer-events-none fixed inset-0 -z-10 overflow-hidden">
            <div
                class="absolute left-[-10%] top-[-10%] h-[40vh] w-[40vw] rounded-full bg-violet-500/10 blur-3xl"
                style=move || format!("transform: translateY({}px)", drift().near_px)
            ></div>
            <div
                class="absolute right-[-10%] top-[10%] h-[50vh] w-[35vw] rounded-full bg-blue-500/10 blur-3xl"
                style=move || format!("transform: translateY({}px)", drift().far_px)
            ></div>
        </div>
    }
}
