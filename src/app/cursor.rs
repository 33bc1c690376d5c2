use leptos::prelude::*;
use leptos_use::{use_document, use_event_listener, use_mouse, use_window, UseMouseReturn};
use wasm_bindgen::JsCast;

/// Ring-and-dot cursor that follows the pointer and grows over interactive
/// elements. Decorative only; hidden from coarse pointers by the stylesheet.
#[component]
pub fn CustomCursor() -> impl IntoView {
    let UseMouseReturn { x, y, .. } = use_mouse();
    let (hovering, set_hovering) = signal(false);
    let (visible, set_visible) = signal(false);

    let _ = use_event_listener(use_window(), leptos::ev::mousemove, move |_| {
        set_visible(true);
    });
    let _ = use_event_listener(use_window(), leptos::ev::mouseover, move |ev| {
        let interactive = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest("a, button, .glass").ok().flatten())
            .is_some();
        set_hovering(interactive);
    });
    let _ = use_event_listener(use_document(), leptos::ev::mouseleave, move |_| {
        set_visible(false);
    });
    let _ = use_event_listener(use_document(), leptos::ev::mouseenter, move |_| {
        set_visible(true);
    });

    let ring_style = move || {
        let size = if hovering.get() { 60.0 } else { 40.0 };
        format!(
            "transform: translate3d({}px, {}px, 0); width: {size}px; height: {size}px; opacity: {}",
            x.get() - size / 2.0,
            y.get() - size / 2.0,
            if visible.get() { 1.0 } else { 0.0 },
        )
    };
    let ring_class = move || {
        let accent = if hovering.get() {
            "border-sky-400/60 bg-sky-500/5"
        } else {
            "border-white/15"
        };
        format!(
            "fixed top-0 left-0 rounded-full border transition-[width,height,opacity,border-color] duration-200 ease-out {accent}",
        )
    };

    let dot_style = move || {
        let scale = if hovering.get() { 2.5 } else { 1.0 };
        format!(
            "transform: translate3d({}px, {}px, 0) scale({scale}); opacity: {}",
            x.get() - 3.0,
            y.get() - 3.0,
            if visible.get() { 1.0 } else { 0.0 },
        )
    };
    let dot_class = move || {
        let fill = if hovering.get() { "bg-sky-400" } else { "bg-white" };
        format!(
            "fixed top-0 left-0 w-[6px] h-[6px] rounded-full shadow-[0_0_10px_rgba(56,189,248,0.5)] {fill}",
        )
    };

    view! {
        <div class="fixed inset-0 pointer-events-none z-[9999] hidden md:block">
            <div class=ring_class style=ring_style></div>
            <div class=dot_class style=dot_style></div>
        </div>
    }
}
