use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};

use crate::content::Project;

/// Blocking overlay with the full narrative for one project. Page scroll is
/// locked while mounted and released on unmount. Dismissed by the close
/// button, a backdrop click, or Escape.
#[component]
pub fn CaseStudy<F>(project: &'static Project, on_close: F) -> impl IntoView
where
    F: Fn() + Clone + 'static,
{
    lock_body_scroll();

    {
        let on_close = on_close.clone();
        let _ = use_event_listener(use_window(), ev::keydown, move |ev| {
            if ev.key() == "Escape" {
                on_close();
            }
        });
    }

    let close_backdrop = {
        let on_close = on_close.clone();
        move |_| on_close()
    };
    let close_button = move |_| on_close();

    view! {
        <div role="dialog" aria-modal="true" class="fixed inset-0 z-[60] grid place-items-center p-4">
            <div class="absolute inset-0 bg-black/70" on:click=close_backdrop></div>
            <div class="relative z-[61] max-h-[90vh] w-full max-w-3xl overflow-y-auto rounded-3xl border border-white/10 bg-neutral-950 p-6 shadow-2xl">
                <div class="flex items-start justify-between gap-4">
                    <div>
                        <h3 class="text-2xl font-bold">{project.name.clone()}</h3>
                        <p class="text-neutral-300">{project.tagline.clone()}</p>
                    </div>
                    <button
                        on:click=close_button
                        class="rounded-lg border border-white/15 px-3 py-1.5 text-sm text-neutral-300 hover:bg-white/5"
                    >
                        "Close"
                    </button>
                </div>

                <div class="mt-4 grid gap-3 sm:grid-cols-3">
                    <InfoTile label="Role" value=project.role.clone() />
                    <InfoTile label="Tech" value=project.tags.join(" \u{b7} ") />
                    <InfoTile label="Result" value=project.result.clone() />
                </div>

                <NarrativeBlock title="Problem" body=project.problem.clone() />
                <NarrativeBlock title="Approach" body=project.approach.clone() />
                <NarrativeBlock title="Outcome" body=project.result.clone() />

                {(!project.links.artifacts.is_empty())
                    .then(|| {
                        view! {
                            <div class="mt-6 grid grid-cols-2 gap-3">
                                {project
                                    .links
                                    .artifacts
                                    .iter()
                                    .map(|src| {
                                        view! {
                                            <img
                                                src=src.clone()
                                                alt="artifact"
                                                class="rounded-xl border border-white/10"
                                            />
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })}

                <div class="mt-6 flex flex-wrap gap-3">
                    {project
                        .links
                        .live
                        .as_ref()
                        .map(|url| {
                            view! {
                                <a
                                    href=url.clone()
                                    class="inline-flex items-center gap-2 rounded-xl bg-violet-500 px-4 py-2 font-semibold text-white hover:brightness-110"
                                >
                                    "Live demo \u{2197}"
                                </a>
                            }
                        })}
                    {project
                        .links
                        .repo
                        .as_ref()
                        .map(|url| {
                            view! {
                                <a
                                    href=url.clone()
                                    target="_blank"
                                    rel="noreferrer"
                                    class="inline-flex items-center gap-2 rounded-xl border border-white/15 px-4 py-2 font-semibold text-neutral-100 hover:bg-white/5"
                                >
                                    "Repo"
                                </a>
                            }
                        })}
                </div>
            </div>
        </div>
    }
}

/// Suppresses page scrolling for the lifetime of the calling scope. The
/// overflow value captured at lock time is restored on release, so repeated
/// open/close cycles always land back on the pre-modal value.
fn lock_body_scroll() {
    let prior = StoredValue::new(None::<String>);

    Effect::new(move |_| {
        let Some(body) = document().body() else {
            return;
        };
        let style = body.style();
        let current = style.get_property_value("overflow").unwrap_or_default();
        prior.set_value(Some(current));
        let _ = style.set_property("overflow", "hidden");
    });

    on_cleanup(move || {
        // take, so a release without a matching acquire is a no-op
        if let Some(previous) = prior.try_update_value(|v| v.take()).flatten() {
            if let Some(body) = document().body() {
                let _ = body.style().set_property("overflow", &previous);
            }
        }
    });
}

#[component]
fn InfoTile(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="rounded-xl border border-white/10 bg-white/5 p-3 text-sm text-neutral-300">
            <span class="block text-neutral-400">{label}</span>
            <span class="font-medium text-neutral-100">{value}</span>
        </div>
    }
}

#[component]
fn NarrativeBlock(title: &'static str, body: String) -> impl IntoView {
    view! {
        <section class="mt-6">
            <h4 class="text-lg font-semibold">{title}</h4>
            <p class="mt-2 leading-relaxed text-neutral-300">{body}</p>
        </section>
    }
}
