use leptos::prelude::*;

use crate::content::CONTENT;

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="mx-auto max-w-6xl px-6 pb-20 pt-8 text-neutral-400">
            <div class="flex flex-col items-start justify-between gap-4 md:flex-row md:items-center">
                <p>
                    "\u{a9} " {env!("BUILD_YEAR")} " " {CONTENT.name.clone()}
                    ". Motion design & video editing."
                </p>
                <div class="flex flex-wrap items-center gap-4">
                    {CONTENT
                        .socials
                        .iter()
                        .filter_map(|social| {
                            // entries without a url are simply not shown
                            social
                                .url
                                .as_ref()
                                .map(|url| {
                                    view! {
                                        <a
                                            href=url.clone()
                                            target="_blank"
                                            rel="noreferrer"
                                            class="capitalize hover:text-neutral-200 focus:outline-none focus:ring-2 focus:ring-violet-400"
                                        >
                                            {social.network.clone()}
                                        </a>
                                    }
                                })
                        })
                        .collect_view()}
                    <a
                        href=format!("mailto:{}", CONTENT.email)
                        class="hover:text-neutral-200 focus:outline-none focus:ring-2 focus:ring-violet-400"
                    >
                        "Email"
                    </a>
                </div>
            </div>
        </footer>
    }
}
