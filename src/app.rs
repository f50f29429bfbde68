mod about;
mod case_study;
mod decor;
mod footer;
mod gallery;
mod hero;
mod hooks;
mod nav;
mod palette;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::CONTENT;

use about::About;
use decor::{ParallaxBackdrop, ScrollProgress};
use footer::SiteFooter;
use gallery::ProjectGallery;
use hero::Hero;
use nav::Nav;
use palette::CommandPalette;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // sets the document title
        <Title formatter=|title| format!("{} - {title}", CONTENT.name) />

        <Router>
            <div class="min-h-screen bg-neutral-950 text-neutral-100">
                // Top gradient / noise overlay
                <div
                    aria-hidden="true"
                    class="pointer-events-none fixed inset-0 [background-image:radial-gradient(50%_50%_at_50%_0%,rgba(124,92,255,.18),rgba(0,0,0,0)_60%)]"
                ></div>
                <ScrollProgress />
                <ParallaxBackdrop />
                <Nav />
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <CommandPalette />
            </div>
        </Router>
    }
}

/// Renders the single page: hero, project gallery, about, footer.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Motion Design & Video Editing" />
        <Hero />
        <ProjectGallery />
        <About />
        <SiteFooter />
    }
}
