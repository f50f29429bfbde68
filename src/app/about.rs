use leptos::prelude::*;

use crate::content::CONTENT;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="mx-auto max-w-6xl px-6 py-12">
            <div class="grid gap-8 md:grid-cols-3">
                <div class="md:col-span-1">
                    <h2 class="text-2xl font-bold">"About"</h2>
                    <p class="mt-3 text-neutral-300">
                        "I'm " {CONTENT.name.clone()}
                        ", a motion designer and editor focused on fast-turn, high-impact videos. I combine strong typography, rhythm, and sound design to make brands feel alive."
                    </p>
                </div>
                <div class="md:col-span-2">
                    <div class="rounded-2xl border border-white/10 bg-white/5 p-4">
                        <h3 class="font-semibold">"Services"</h3>
                        <ul class="mt-2 grid grid-cols-1 gap-2 text-neutral-300 sm:grid-cols-2">
                            <li>"\u{2022} Product teasers & launch videos"</li>
                            <li>"\u{2022} UGC ads & social edits (Reels/Shorts)"</li>
                            <li>"\u{2022} Logo idents & title animations"</li>
                            <li>"\u{2022} Podcast to Shorts pipeline (templates)"</li>
                        </ul>
                        <div class="mt-4 flex flex-wrap gap-3">
                            <a
                                href=format!("mailto:{}", CONTENT.email)
                                class="inline-flex items-center gap-2 rounded-xl bg-violet-500 px-4 py-2 font-semibold text-white hover:brightness-110"
                            >
                                "Get in touch"
                            </a>
                            {CONTENT
                                .social_url("upwork")
                                .map(|url| {
                                    view! {
                                        <a
                                            href=url
                                            target="_blank"
                                            rel="noreferrer"
                                            class="inline-flex items-center gap-2 rounded-xl border border-white/15 px-4 py-2 font-semibold text-neutral-100 hover:bg-white/5"
                                        >
                                            "Hire on Upwork \u{2197}"
                                        </a>
                                    }
                                })}
                        </div>
                    </div>
                </div>
            </div>

            // Showreel embed
            <div class="mt-10 overflow-hidden rounded-2xl border border-white/10">
                <video
                    class="h-full w-full"
                    src="/showreel.mp4"
                    poster="https://images.unsplash.com/photo-1461749280684-dccba630e2f6?q=80&w=1600&auto=format&fit=crop"
                    controls=true
                    preload="metadata"
                ></video>
            </div>
        </section>
    }
}
