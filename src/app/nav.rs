use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::content::CONTENT;
use crate::motion::NavState;

#[component]
pub fn Nav() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let state = Memo::new(move |_| NavState::from_offset(scroll_y.get()));

    let link_class = "rounded-lg px-3 py-2 text-sm text-neutral-300 hover:bg-white/5 focus:outline-none focus:ring-2 focus:ring-violet-400";

    view! {
        <div class=move || {
            if state().is_solid() {
                "sticky top-0 z-50 w-full backdrop-blur bg-neutral-950/70 border-b border-white/10"
            } else {
                "sticky top-0 z-50 w-full backdrop-blur bg-transparent"
            }
        }>
            <div class="mx-auto flex max-w-6xl items-center justify-between px-6 py-3">
                <a href="#top" class="font-semibold tracking-tight">
                    {CONTENT.name.clone()}
                </a>
                <nav class="flex items-center gap-2">
                    <a class=link_class href="#projects">
                        "Projects"
                    </a>
                    <a class=link_class href="#about">
                        "About"
                    </a>
                    <a
                        class="inline-flex items-center gap-1 rounded-lg bg-white/5 px-3 py-2 text-sm font-medium text-neutral-100 hover:bg-white/10 focus:outline-none focus:ring-2 focus:ring-violet-400"
                        href=format!("mailto:{}", CONTENT.email)
                    >
                        "Hire me " <span class="opacity-70">"\u{2197}"</span>
                    </a>
                </nav>
            </div>
        </div>
    }
}
