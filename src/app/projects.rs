use leptos::prelude::*;
use leptos_use::{use_event_listener, use_window};

use super::glass::{GlassCard, SectionHeader};
use crate::content::{Project, PROJECTS};

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let (selected, set_selected) = signal(None::<usize>);

    view! {
        <section id="projects" class="mb-24 scroll-mt-32 relative py-12">
            <div class="absolute inset-0 bg-grid-isometric opacity-30 z-[-1]"></div>
            <SectionHeader
                title="Internal Product Echoes"
                subtitle="Engineered internal prototypes and high-scale production platforms. These systems are protected under NDA."
            />
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                {PROJECTS
                    .iter()
                    .enumerate()
                    .map(|(idx, project)| {
                        let open = Callback::new(move |_| set_selected(Some(idx)));
                        view! { <ProjectCard project on_open=open /> }
                    })
                    .collect_view()}
            </div>
            {move || {
                selected
                    .get()
                    .map(|idx| {
                        view! {
                            <ProjectModal
                                project=&PROJECTS[idx]
                                on_close=Callback::new(move |_| set_selected(None))
                            />
                        }
                    })
            }}
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project, on_open: Callback<()>) -> impl IntoView {
    view! {
        <GlassCard
            class="flex flex-col group p-0 overflow-hidden min-h-[350px] bg-black/40 border-white/5 hover:border-sky-500/30 transition-all duration-700"
            on_click=on_open
        >
            <div class="h-40 bg-zinc-900/50 relative overflow-hidden border-b border-white/5 flex items-center justify-center">
                <div class="absolute inset-0 opacity-20 bg-[radial-gradient(circle_at_center,#38bdf8_0%,transparent_70%)] group-hover:opacity-40 transition-opacity"></div>
                <div class="z-10 text-center px-6">
                    <p class="text-zinc-600 text-[8px] font-mono mb-2 uppercase tracking-[0.4em]">
                        "Sub_System.Instance"
                    </p>
                    <h4 class="text-2xl font-black tracking-tighter text-white uppercase group-hover:scale-105 transition-transform duration-500">
                        {project.title}
                    </h4>
                </div>
                <div class="absolute bottom-4 right-6 flex items-center gap-2">
                    <div class="w-1 h-1 rounded-full bg-sky-500 animate-pulse"></div>
                    <span class="text-[8px] font-mono text-zinc-500 uppercase tracking-widest">
                        "Internal_Only"
                    </span>
                </div>
            </div>
            <div class="p-8 flex flex-col flex-grow relative">
                <p class="text-zinc-400 text-sm leading-relaxed mb-10 group-hover:text-zinc-200 transition-colors">
                    {project.description}
                </p>
                <div class="mt-auto">
                    <div class="flex flex-col gap-3">
                        <span class="text-[9px] font-bold text-zinc-600 uppercase tracking-widest">
                            "Stack.json"
                        </span>
                        <div class="flex flex-wrap gap-4">
                            {project
                                .tech
                                .iter()
                                .map(|tech| {
                                    view! {
                                        <span class="text-[10px] font-mono text-sky-500/60 uppercase group-hover:text-sky-400 transition-colors">
                                            {*tech}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </GlassCard>
    }
}

const OBJECTIVES: [&str; 3] = [
    "High-concurrency data processing pipeline.",
    "Enterprise-grade security and authentication.",
    "Scalable microservices architecture.",
];

#[component]
fn ProjectModal(project: &'static Project, on_close: Callback<()>) -> impl IntoView {
    // Escape closes the dialog
    let _ = use_event_listener(use_window(), leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            on_close.run(());
        }
    });

    view! {
        <div class="fixed inset-0 z-[200] flex items-center justify-center p-4 md:p-8">
            <div
                class="absolute inset-0 bg-black/70 backdrop-blur-xl"
                on:click=move |_| on_close.run(())
            ></div>

            <div class="w-full max-w-5xl max-h-[90vh] glass-dark rounded-3xl overflow-hidden border border-white/10 relative z-10 flex flex-col md:flex-row shadow-[0_0_120px_rgba(0,0,0,0.6)]">
                <button
                    on:click=move |_| on_close.run(())
                    class="absolute top-6 right-6 z-30 w-10 h-10 rounded-full glass border border-white/10 flex items-center justify-center hover:bg-white/10 transition-colors group"
                >
                    <svg
                        class="w-5 h-5 text-white/50 group-hover:text-white"
                        fill="none"
                        viewBox="0 0 24 24"
                        stroke="currentColor"
                    >
                        <path
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            stroke-width="2"
                            d="M6 18L18 6M6 6l12 12"
                        ></path>
                    </svg>
                </button>

                <div class="md:w-[45%] h-56 md:h-auto bg-zinc-900/40 border-b md:border-b-0 md:border-r border-white/5 relative flex items-center justify-center overflow-hidden z-10">
                    <div class="absolute inset-0 bg-gradient-to-br from-sky-500/10 to-transparent"></div>
                    <div class="relative z-10 text-center p-8">
                        <p class="text-[10px] font-mono text-sky-500 font-bold uppercase tracking-[0.4em] mb-4">
                            "Module.Active"
                        </p>
                        <h2 class="text-4xl md:text-5xl font-black text-white tracking-tighter uppercase leading-none break-words">
                            {project.title}
                        </h2>
                    </div>
                </div>

                <div class="md:w-[55%] p-8 md:p-14 overflow-y-auto relative z-10">
                    <div class="space-y-10">
                        <section>
                            <ModalHeading label="System_Overview" />
                            <p class="text-zinc-300 text-base leading-relaxed font-light">
                                {project.description}
                            </p>
                        </section>

                        <section>
                            <ModalHeading label="Technical_Stack" />
                            <div class="flex flex-wrap gap-2.5">
                                {project
                                    .tech
                                    .iter()
                                    .map(|tech| {
                                        view! {
                                            <span class="px-4 py-2 bg-white/[0.03] border border-white/5 rounded-xl text-[10px] font-bold text-sky-400 uppercase tracking-wider hover:border-sky-500/30 transition-colors">
                                                {*tech}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </section>

                        <section>
                            <ModalHeading label="Core_Objectives" />
                            <ul class="space-y-4">
                                {OBJECTIVES
                                    .iter()
                                    .enumerate()
                                    .map(|(i, objective)| {
                                        view! {
                                            <li class="flex gap-4 text-sm text-zinc-400 group">
                                                <span class="text-sky-500/50 font-mono mt-0.5 text-[10px]">
                                                    {format!("[{:02}]", i + 1)}
                                                </span>
                                                <span class="group-hover:text-zinc-200 transition-colors font-light">
                                                    {*objective}
                                                </span>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </section>

                        {project
                            .link
                            .map(|link| {
                                view! {
                                    <a
                                        href=link
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="block w-full text-center py-5 border border-sky-500/20 rounded-2xl text-sky-400 text-[11px] font-black uppercase tracking-widest hover:border-sky-500/40 transition-all shadow-[0_10px_30px_rgba(0,0,0,0.2)]"
                                    >
                                        "Access Production Site ➜"
                                    </a>
                                }
                            })}

                        <div class="pt-8 border-t border-white/5 flex flex-col items-center gap-2">
                            <p class="text-[9px] font-mono text-zinc-600 uppercase tracking-[0.3em]">
                                {format!("Ref: {}", project.ref_code())}
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ModalHeading(label: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center gap-3 mb-5">
            <div class="w-1.5 h-1.5 bg-sky-500 rounded-full shadow-[0_0_8px_#38bdf8]"></div>
            <h3 class="text-[11px] font-black text-zinc-500 uppercase tracking-[0.3em]">{label}</h3>
        </div>
    }
}
