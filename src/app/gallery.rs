use leptos::task::spawn_local;
use leptos::{html, prelude::*};
use wasm_bindgen_futures::JsFuture;

use crate::content::{Profile, Project, CONTENT};

use super::case_study::CaseStudy;
use super::hooks::use_reduced_motion;

#[component]
pub fn ProjectGallery() -> impl IntoView {
    let content: &'static Profile = &CONTENT;
    let reduced_motion = use_reduced_motion();

    view! {
        <section id="projects" class="mx-auto max-w-6xl px-6 py-10">
            <div class="mb-6 flex items-center justify-between">
                <h2 class="text-2xl font-bold">"Selected work"</h2>
                <span class="text-sm text-neutral-400">
                    "press " <kbd class="rounded bg-white/10 px-1">"/"</kbd> " to search"
                </span>
            </div>

            <div class="grid grid-cols-1 gap-6 md:grid-cols-2">
                {content
                    .projects
                    .iter()
                    .enumerate()
                    .map(|(i, project)| {
                        view! {
                            // staggered entrance; skipped entirely under reduced motion
                            <div
                                class=move || {
                                    if reduced_motion() { "" } else { "animate-fade-rise" }
                                }
                                style=move || {
                                    if reduced_motion() {
                                        String::new()
                                    } else {
                                        format!("animation-delay: {}ms", i * 60)
                                    }
                                }
                            >
                                <ProjectCard project=project />
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let (open, set_open) = signal(false);
    let video_ref = NodeRef::<html::Video>::new();

    let start_preview = move |_| {
        if let Some(video) = video_ref.get_untracked() {
            if let Ok(playback) = video.play() {
                // Best-effort: the browser may deny autoplay, in which case
                // the cover image simply stays visible.
                spawn_local(async move {
                    let _ = JsFuture::from(playback).await;
                });
            }
        }
    };
    let stop_preview = move |_| {
        if let Some(video) = video_ref.get_untracked() {
            let _ = video.pause();
            video.set_current_time(0.0);
        }
    };

    view! {
        <article class="group relative overflow-hidden rounded-2xl border border-white/10 bg-white/5">
            <button
                on:click=move |_| set_open(true)
                on:mouseenter=start_preview
                on:mouseleave=stop_preview
                class="block w-full text-left focus:outline-none focus:ring-2 focus:ring-violet-400"
                aria-label=format!("Open case study for {}", project.name)
            >
                <div class="relative aspect-[16/10] w-full overflow-hidden">
                    <img
                        src=project.cover.clone()
                        alt=""
                        class="h-full w-full object-cover transition group-hover:scale-[1.03]"
                    />
                    {project
                        .hover_video
                        .as_ref()
                        .map(|src| {
                            view! {
                                <video
                                    node_ref=video_ref
                                    muted=true
                                    playsinline=true
                                    preload="metadata"
                                    src=src.clone()
                                    class="pointer-events-none absolute inset-0 h-full w-full object-cover opacity-0 transition-opacity duration-300 group-hover:opacity-100"
                                ></video>
                            }
                        })}
                    <div class="absolute inset-0 bg-gradient-to-t from-black/50 via-transparent to-transparent"></div>
                    <div class="absolute bottom-3 left-3 right-3 flex items-end justify-between gap-3">
                        <div>
                            <h3 class="text-lg font-semibold text-white drop-shadow">
                                {project.name.clone()}
                            </h3>
                            <p class="text-sm text-neutral-200/90 drop-shadow">
                                {project.tagline.clone()}
                            </p>
                        </div>
                        <span class="rounded-full bg-white/10 px-2 py-1 text-[11px] text-white">
                            "Case study"
                        </span>
                    </div>
                </div>
            </button>

            <div class="flex flex-wrap gap-2 px-4 py-3">
                {project
                    .tags
                    .iter()
                    .map(|t| {
                        view! {
                            <span class="rounded-full border border-white/10 px-2 py-1 text-xs text-neutral-300">
                                {t.clone()}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>

            {move || {
                open()
                    .then(|| {
                        view! { <CaseStudy project=project on_close=move || set_open(false) /> }
                    })
            }}
        </article>
    }
}
