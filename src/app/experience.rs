use leptos::prelude::*;

use super::glass::{GlassCard, SectionHeader};
use crate::content::{Experience, EXPERIENCES};

#[component]
pub fn ExperienceSection() -> impl IntoView {
    view! {
        <section id="experience" class="mb-24 scroll-mt-32 relative">
            <SectionHeader
                title="Experience Log"
                subtitle="Deep-dives into systems architecture and high-scale product delivery."
            />

            <div class="space-y-12 relative">
                <div class="absolute left-8 md:left-1/2 top-0 bottom-0 w-[1px] bg-gradient-to-b from-transparent via-sky-500/20 to-transparent hidden md:block">
                    <div class="absolute inset-0 scan-line opacity-50"></div>
                </div>

                {EXPERIENCES
                    .iter()
                    .enumerate()
                    .map(|(idx, exp)| view! { <ExperienceEntry exp idx /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ExperienceEntry(exp: &'static Experience, idx: usize) -> impl IntoView {
    let is_current = exp.is_current();
    let row_class = if idx % 2 == 0 {
        "relative flex flex-col md:flex-row gap-10"
    } else {
        "relative flex flex-col md:flex-row-reverse gap-10"
    };
    let card_class = if is_current {
        "relative overflow-hidden transition-all duration-500 lightning-border !bg-transparent border-0"
    } else {
        "relative overflow-hidden transition-all duration-500 border-white/5 hover:border-sky-500/20"
    };
    let marker_class = if is_current {
        "w-3 h-3 rounded-full bg-zinc-900 border border-sky-500 shadow-[0_0_10px_#38bdf8] z-10 transition-all duration-500"
    } else {
        "w-3 h-3 rounded-full bg-zinc-900 border border-white/20 z-10 transition-all duration-500"
    };

    view! {
        <div class=row_class>
            <div class="md:w-[45%]">
                <GlassCard class=card_class>
                    <div class="flex justify-between items-start mb-6">
                        <div>
                            <h3 class="text-xl font-black text-white group-hover:text-sky-400 transition-colors uppercase tracking-tight flex items-center gap-3">
                                {exp.company}
                                {is_current
                                    .then(|| {
                                        view! {
                                            <span class="inline-block w-2 h-2 rounded-full bg-sky-500 shadow-[0_0_8px_#38bdf8] animate-pulse"></span>
                                        }
                                    })}
                            </h3>
                            <p class="text-zinc-500 text-[10px] font-mono font-bold tracking-widest mt-1 uppercase">
                                {exp.role}
                            </p>
                        </div>
                        <div class="text-[9px] font-mono text-zinc-600 bg-white/5 px-2 py-1 rounded border border-white/5">
                            {exp.period}
                        </div>
                    </div>

                    <ul class="space-y-3 mb-8">
                        {exp.description
                            .iter()
                            .enumerate()
                            .map(|(i, desc)| {
                                view! {
                                    <li class="text-xs text-zinc-400 leading-relaxed flex gap-3 group-hover:text-zinc-300 transition-colors">
                                        <span class="text-sky-500/40 font-mono">
                                            {format!("{:02}", i + 1)}
                                        </span>
                                        {*desc}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>

                    <div class="flex flex-wrap gap-1.5 mb-8">
                        {exp.skills
                            .iter()
                            .map(|skill| {
                                view! {
                                    <span class="px-2 py-0.5 bg-white/5 border border-white/5 rounded text-[8px] font-black text-zinc-600 uppercase tracking-tighter hover:text-sky-500 hover:border-sky-500/30 transition-all cursor-default">
                                        {*skill}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>

                    {exp.performance_metrics
                        .map(|metrics| {
                            view! {
                                <div class="p-4 bg-sky-500/[0.03] border border-sky-500/10 rounded-xl flex items-center gap-4 group-hover:bg-sky-500/[0.05] transition-all data-glow">
                                    <div class="w-10 h-10 rounded-lg bg-sky-500/10 flex items-center justify-center shrink-0">
                                        <svg
                                            class="w-5 h-5 text-sky-500"
                                            fill="none"
                                            stroke="currentColor"
                                            viewBox="0 0 24 24"
                                        >
                                            <path
                                                stroke-linecap="round"
                                                stroke-linejoin="round"
                                                stroke-width="2"
                                                d="M13 10V3L4 14h7v7l9-11h-7z"
                                            ></path>
                                        </svg>
                                    </div>
                                    <p class="text-[10px] font-mono font-bold text-sky-400 uppercase tracking-wide leading-tight">
                                        {metrics}
                                    </p>
                                </div>
                            }
                        })}
                </GlassCard>
            </div>
            <div class="hidden md:flex md:w-[10%] justify-center items-center">
                <div class=marker_class></div>
            </div>
            <div class="hidden md:block md:w-[45%]"></div>
        </div>
    }
}
