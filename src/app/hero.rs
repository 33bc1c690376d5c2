use leptos::prelude::*;
use leptos_use::{use_mouse, use_window_size, UseMouseReturn, UseWindowSizeReturn};

use super::glass::GlassCard;
use super::nav::scroll_to_section;

#[component]
pub fn HeroSection() -> impl IntoView {
    let UseMouseReturn { x, y, .. } = use_mouse();
    let UseWindowSizeReturn { width, height } = use_window_size();

    // hero card drifts toward the pointer
    let parallax = move || {
        let (w, h) = (width.get(), height.get());
        if !w.is_finite() || !h.is_finite() {
            return "translate(0px, 0px)".to_string();
        }
        let dx = (x.get() - w / 2.0) / 80.0;
        let dy = (y.get() - h / 2.0) / 80.0;
        format!("translate({dx}px, {dy}px)")
    };

    view! {
        <section
            id="about"
            class="min-h-[80vh] flex flex-col justify-center items-center mb-16 pt-20 scroll-mt-32"
        >
            <div class="section-glow top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2"></div>
            <div style:transform=parallax class="transition-transform duration-300 ease-out w-full">
                <GlassCard class="max-w-5xl mx-auto p-10 md:p-14 border-white/10 relative overflow-hidden">
                    <div class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-full h-full pointer-events-none overflow-hidden opacity-20">
                        <div class="radar-pulse w-full h-full left-0 top-0" style="animation-delay: 0s"></div>
                        <div class="radar-pulse w-full h-full left-0 top-0" style="animation-delay: 2s"></div>
                    </div>

                    <div class="relative z-10 flex flex-col lg:flex-row gap-10 lg:gap-16 items-start lg:items-center">
                        <div class="relative shrink-0 mx-auto lg:mx-0">
                            <div class="relative w-44 h-44 md:w-56 md:h-56 rounded-3xl overflow-hidden border border-white/10 glass shadow-2xl">
                                <img
                                    src="https://api.dicebear.com/7.x/avataaars/svg?seed=Vibhor&backgroundColor=050507&baseColor=f1f1f1"
                                    alt="Vibhor"
                                    class="w-full h-full object-cover grayscale brightness-90 hover:grayscale-0 transition-all duration-700"
                                />
                                <div class="absolute inset-0 scan-line"></div>
                                <div class="absolute bottom-0 inset-x-0 p-2 bg-sky-500/10 backdrop-blur-xl border-t border-sky-500/20 text-center">
                                    <span class="text-[8px] font-mono font-bold text-sky-400 uppercase tracking-widest">
                                        "Auth: Verified"
                                    </span>
                                </div>
                            </div>
                        </div>

                        <div class="flex-grow text-center lg:text-left">
                            <div class="inline-flex items-center gap-2 px-3 py-1 rounded-full bg-white/5 border border-white/10 text-zinc-400 text-[9px] font-bold uppercase tracking-[0.2em] mb-6">
                                <span class="w-1 h-1 rounded-full bg-sky-500"></span>
                                " Senior Software Engineer"
                            </div>
                            <h1 class="text-5xl md:text-7xl font-black text-gradient mb-4 tracking-tighter leading-[0.9]">
                                "Vibhor Agarwal"
                            </h1>
                            <p class="text-sm md:text-base text-zinc-400 font-light mb-8 leading-relaxed max-w-3xl">
                                "Senior Software Engineer with "
                                <span class="text-white font-medium">"5+ years of experience"</span>
                                " building scalable, high-performance web applications using "
                                <span class="text-sky-400">
                                    "React.js, Next.js, Node.js, Express.js, JavaScript, Tailwind CSS, Redux"
                                </span>
                                ". Proven record delivering enterprise and startup-grade products. Led full-stack development of a live crypto-fiat on-ramp platform at "
                                <span class="text-white font-medium">"TransFi"</span>
                                " and currently driving frontend engineering initiatives at "
                                <span class="text-white font-medium">"StatusNeo"</span>
                                ". Strong in "
                                <span class="italic">
                                    "clean architecture, SSR, state management, lazy loading, code-splitting, and performance optimization"
                                </span>
                                "."
                            </p>
                            <div class="flex flex-wrap justify-center lg:justify-start gap-4">
                                <a
                                    href="#experience"
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        scroll_to_section("experience");
                                    }
                                    class="px-8 py-3.5 bg-sky-500 text-white text-xs font-black uppercase tracking-widest rounded-xl hover:bg-sky-400 shadow-lg shadow-sky-500/20 transition-all active:scale-95"
                                >
                                    "Work Trace"
                                </a>
                            </div>
                        </div>
                    </div>
                </GlassCard>
            </div>
        </section>
    }
}
