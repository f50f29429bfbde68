use leptos::either::Either;
use leptos::{ev, html, prelude::*};
use leptos_use::{use_event_listener, use_window};

use crate::content::{search_projects, Profile, CONTENT};

/// Keyboard-invoked project search. "/" opens it from anywhere on the page,
/// Escape or a backdrop click closes it; the query survives dismissal.
#[component]
pub fn CommandPalette() -> impl IntoView {
    let content: &'static Profile = &CONTENT;
    let (open, set_open) = signal(false);
    let (query, set_query) = signal(String::new());
    let input_ref = NodeRef::<html::Input>::new();

    let matches = Memo::new(move |_| query.with(|q| search_projects(&content.projects, q)));

    // Only intercept "/" while closed so the key can still be typed into
    // the palette's own input.
    let _ = use_event_listener(use_window(), ev::keydown, move |ev| {
        match ev.key().as_str() {
            "/" if !open.get_untracked() => {
                ev.prevent_default();
                set_open(true);
            }
            "Escape" if open.get_untracked() => set_open(false),
            _ => {}
        }
    });

    Effect::new(move |_| {
        if open() {
            if let Some(el) = input_ref.get() {
                let _ = el.focus();
            }
        }
    });

    let jump_to_gallery = move |_| {
        set_open(false);
        if let Some(el) = document().get_element_by_id("projects") {
            el.scroll_into_view();
        }
    };

    view! {
        {move || {
            open()
                .then(|| {
                    view! {
                        <div class="fixed inset-0 z-[80] grid place-items-start p-6">
                            <div class="absolute inset-0 bg-black/60" on:click=move |_| set_open(false)></div>
                            <div class="relative z-[81] w-full max-w-xl rounded-2xl border border-white/10 bg-neutral-950 p-4 shadow-2xl">
                                <input
                                    node_ref=input_ref
                                    type="text"
                                    placeholder="Search projects..."
                                    prop:value=move || query()
                                    on:input=move |ev| set_query(event_target_value(&ev))
                                    class="w-full rounded-lg border border-white/10 bg-neutral-900 px-3 py-2 outline-none placeholder:text-neutral-500"
                                />
                                <ul class="mt-2 divide-y divide-white/5">
                                    {move || {
                                        let found = matches();
                                        if found.is_empty() {
                                            Either::Left(
                                                view! { <li class="py-3 text-neutral-500">"No results"</li> },
                                            )
                                        } else {
                                            Either::Right(
                                                found
                                                    .into_iter()
                                                    .map(|p| {
                                                        view! {
                                                            <li class="flex items-center justify-between py-2">
                                                                <span>{p.name.clone()}</span>
                                                                <button
                                                                    class="rounded-md px-2 py-1 text-sm text-violet-300 hover:bg-white/5"
                                                                    on:click=jump_to_gallery
                                                                >
                                                                    "focus"
                                                                </button>
                                                            </li>
                                                        }
                                                    })
                                                    .collect_view(),
                                            )
                                        }
                                    }}
                                </ul>
                            </div>
                        </div>
                    }
                })
        }}
    }
}
