use leptos::prelude::*;
use leptos_use::{use_document, use_media_query, use_window, use_window_scroll};

use crate::motion;

/// Current state of the system reduce-motion preference. Tracks change
/// notifications for the lifetime of the calling scope; where the signal is
/// unavailable (including during SSR) this reads false, i.e. motion allowed.
pub fn use_reduced_motion() -> Signal<bool> {
    use_media_query("(prefers-reduced-motion: reduce)")
}

/// Normalized scroll progress over the whole document, 0.0 at the top and
/// 1.0 with the viewport at the end. Each caller gets an independent
/// derivation; trackers never share state.
pub fn use_page_progress() -> Signal<f64> {
    let (_, scroll_y) = use_window_scroll();
    let window = use_window();
    let document = use_document();
    Signal::derive(move || {
        let doc_height = document
            .as_ref()
            .and_then(|d| d.document_element())
            .map(|el| el.scroll_height() as f64)
            .unwrap_or_default();
        let viewport_height = window
            .as_ref()
            .and_then(|w| w.inner_height().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or_default();
        motion::page_progress(scroll_y.get(), doc_height, viewport_height)
    })
}
