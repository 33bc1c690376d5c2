use leptos::prelude::*;
use wasm_bindgen::JsValue;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Smooth-scrolls to a section landmark and records the anchor in the
/// address bar without triggering a navigation.
pub fn scroll_to_section(id: &str) {
    let Some(target) = document().get_element_by_id(id) else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    if let Ok(history) = window().history() {
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&format!("#{id}")));
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="fixed top-0 left-0 w-full z-50 flex justify-center p-6 pointer-events-none">
            <div class="glass-dark px-5 py-2.5 rounded-full flex items-center gap-8 pointer-events-auto shadow-2xl border border-white/5 backdrop-blur-3xl">
                <div class="flex items-center gap-2 pr-5 border-r border-white/10 group cursor-default">
                    <div class="w-1.5 h-1.5 rounded-full bg-emerald-500 shadow-[0_0_8px_#10b981]"></div>
                    <span class="text-[10px] font-bold uppercase tracking-widest text-emerald-500 group-hover:text-emerald-400 transition-colors">
                        "Operational"
                    </span>
                </div>
                {["About", "Experience", "Projects", "Skills"]
                    .into_iter()
                    .map(|item| {
                        let id = item.to_lowercase();
                        let href = format!("#{id}");
                        view! {
                            <a
                                href=href
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    scroll_to_section(&id);
                                }
                                class="text-[11px] font-bold text-zinc-500 hover:text-white transition-all uppercase tracking-tighter"
                            >
                                {item}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}
