use leptos::prelude::*;

use super::glass::{GlassCard, SectionHeader};
use crate::content::SKILL_GROUPS;

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <section id="skills" class="mb-24 scroll-mt-32 relative">
            <SectionHeader
                title="Technical Stack"
                subtitle="Core proficiencies across the full product development lifecycle."
            />
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                {SKILL_GROUPS
                    .iter()
                    .map(|group| {
                        view! {
                            <GlassCard class="p-6 group/skill hover:bg-sky-500/[0.02] border-white/5 transition-all duration-500">
                                <div class="flex items-center gap-3 mb-6">
                                    <div class="w-2 h-2 rounded-full bg-sky-500 shadow-[0_0_8px_#38bdf8]"></div>
                                    <h4 class="text-[10px] font-black text-sky-500 uppercase tracking-[0.3em]">
                                        {group.category}
                                    </h4>
                                </div>
                                <div class="space-y-4">
                                    {group
                                        .items
                                        .iter()
                                        .map(|item| {
                                            view! {
                                                <div class="flex flex-col gap-2 group/item">
                                                    <div class="flex justify-between items-center">
                                                        <span class="text-zinc-300 text-[11px] font-medium group-hover/item:text-white transition-colors uppercase tracking-tight">
                                                            {*item}
                                                        </span>
                                                        <span class="text-[8px] font-mono text-zinc-700 opacity-0 group-hover/item:opacity-100 transition-opacity">
                                                            "OK"
                                                        </span>
                                                    </div>
                                                    <div class="w-full h-[1px] bg-white/[0.03] rounded-full overflow-hidden relative">
                                                        <div class="absolute inset-0 scan-line opacity-10"></div>
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </GlassCard>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
