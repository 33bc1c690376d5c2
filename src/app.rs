mod contact;
mod cursor;
mod experience;
mod glass;
mod hero;
mod nav;
mod projects;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use contact::ContactSection;
use cursor::CustomCursor;
use experience::ExperienceSection;
use hero::HeroSection;
use nav::NavBar;
use projects::ProjectsSection;
use skills::SkillsSection;

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
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-[#050507] text-white antialiased">
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
        <Title formatter=|title| format!("Vibhor Agarwal - {title}") />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Senior Software Engineer" />
        <div class="min-h-screen relative selection:bg-sky-500/30">
            <CustomCursor />

            // ambient floating color fields behind every section
            <div class="fixed inset-0 pointer-events-none z-[-1] overflow-hidden">
                <div class="absolute top-[10%] left-[5%] w-[30vw] h-[30vw] bg-sky-500/5 blur-[120px] rounded-full animate-pulse"></div>
                <div class="absolute bottom-[10%] right-[5%] w-[40vw] h-[40vw] bg-indigo-500/5 blur-[150px] rounded-full"></div>
            </div>

            <NavBar />

            <main class="max-w-6xl mx-auto px-6 relative">
                <HeroSection />
                <ExperienceSection />
                <ProjectsSection />
                <SkillsSection />
                <ContactSection />
            </main>

            <Footer />
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-10 border-t border-white/5 text-center bg-black/60 backdrop-blur-3xl">
            <p class="text-zinc-600 font-mono text-[9px] uppercase tracking-[0.4em]">
                {format!(
                    "Vibhor Agarwal // Senior Engineer // Last_Updated: {}",
                    env!("BUILD_STAMP"),
                )}
            </p>
        </footer>
    }
}
