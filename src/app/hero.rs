use leptos::prelude::*;

use crate::content::CONTENT;
use crate::motion::HeroMotion;

use super::hooks::{use_page_progress, use_reduced_motion};

#[component]
pub fn Hero() -> impl IntoView {
    let reduced_motion = use_reduced_motion();
    let progress = use_page_progress();

    // Animated path: scroll-derived transform. Static path: no transform,
    // final state immediately.
    let motion_style = move || {
        if reduced_motion() {
            return String::new();
        }
        let m = HeroMotion::at(progress.get());
        format!(
            "transform: translateY({}px) skewY({}deg); opacity: {}",
            m.shift_px, m.skew_deg, m.opacity
        )
    };

    let pill_class =
        "rounded-full border border-white/10 bg-white/5 px-3 py-1 text-sm text-neutral-300";

    view! {
        <section class="relative overflow-hidden">
            <div style=motion_style class="mx-auto max-w-6xl px-6 pt-24 pb-12">
                <div class="flex flex-col gap-6 md:flex-row md:items-end md:justify-between">
                    <div>
                        <h1 class="text-4xl font-extrabold tracking-tight md:text-6xl">
                            {CONTENT.title.clone()}
                        </h1>
                        <p class="mt-4 max-w-xl text-neutral-300">{CONTENT.blurb.clone()}</p>
                        <div class="mt-6 flex flex-wrap items-center gap-3">
                            {CONTENT
                                .metrics
                                .iter()
                                .map(|m| {
                                    view! {
                                        <span class=pill_class>
                                            <strong class="mr-1 font-semibold text-neutral-100">
                                                {m.value.clone()}
                                            </strong>
                                            {m.label.clone()}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="mt-8 flex flex-wrap gap-3">
                            <a
                                href=format!("mailto:{}", CONTENT.email)
                                class="inline-flex items-center gap-2 rounded-xl bg-violet-500 px-4 py-2 font-semibold text-white transition hover:brightness-110 focus:outline-none focus:ring-2 focus:ring-violet-400"
                            >
                                "Email"
                            </a>
                            <a
                                href=CONTENT.resume_url.clone()
                                download=""
                                class="inline-flex items-center gap-2 rounded-xl border border-white/15 px-4 py-2 font-semibold text-neutral-100 hover:bg-white/5 focus:outline-none focus:ring-2 focus:ring-violet-400"
                            >
                                "CV"
                            </a>
                            {CONTENT
                                .social_url("upwork")
                                .map(|url| {
                                    view! {
                                        <a
                                            href=url
                                            target="_blank"
                                            rel="noreferrer"
                                            class="inline-flex items-center gap-2 rounded-xl border border-violet-400/40 bg-violet-400/10 px-4 py-2 font-semibold text-violet-200 hover:bg-violet-400/20 focus:outline-none focus:ring-2 focus:ring-violet-400"
                                        >
                                            "Hire on Upwork \u{2197}"
                                        </a>
                                    }
                                })}
                        </div>
                    </div>
                    <Headshot />
                </div>

                // Skill pills
                <ul class="mt-10 flex flex-wrap gap-2">
                    {CONTENT
                        .skills
                        .iter()
                        .map(|s| view! { <li class=pill_class>{s.clone()}</li> })
                        .collect_view()}
                </ul>
            </div>
        </section>
    }
}

/// Decorative headshot panel with a slowly rotating conic-gradient sheen.
#[component]
fn Headshot() -> impl IntoView {
    let reduced_motion = use_reduced_motion();
    view! {
        <div class=move || {
            if reduced_motion() {
                "relative aspect-[4/3] w-full max-w-md overflow-hidden rounded-3xl border border-white/10 bg-gradient-to-b from-white/5 to-transparent shadow-2xl"
            } else {
                "animate-fade-rise relative aspect-[4/3] w-full max-w-md overflow-hidden rounded-3xl border border-white/10 bg-gradient-to-b from-white/5 to-transparent shadow-2xl"
            }
        }>
            <img
                alt="Headshot"
                src="https://images.unsplash.com/photo-1522075469751-3a6694fb2f61?q=80&w=1600&auto=format&fit=crop"
                class="h-full w-full object-cover"
            />
            <div
                aria-hidden="true"
                class="pointer-events-none absolute inset-0 opacity-50 [mask-image:radial-gradient(60%_60%_at_50%_30%,#000_30%,transparent_70%)]"
            >
                <div class="absolute -inset-12 animate-[spin_12s_linear_infinite] bg-[conic-gradient(from_0deg,transparent,rgba(124,92,255,0.35),transparent_30%)]"></div>
            </div>
        </div>
    }
}
