use leptos::prelude::*;

/// Frosted panel used by every section; forwards an optional click handler
/// for cards that open the project modal.
#[component]
pub fn GlassCard(
    #[prop(optional, into)] class: String,
    #[prop(optional)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let clickable = if on_click.is_some() {
        "cursor-pointer active:scale-[0.98]"
    } else {
        ""
    };
    view! {
        <div
            class=format!(
                "glass rounded-2xl p-6 transition-all duration-300 hover:bg-white/[0.05] hover:border-white/20 group {class} {clickable}",
            )
            on:click=move |_| {
                if let Some(on_click) = on_click {
                    on_click.run(());
                }
            }
        >
            {children()}
        </div>
    }
}

#[component]
pub fn SectionHeader(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="mb-12">
            <h2 class="text-3xl font-bold text-gradient mb-2">{title}</h2>
            {subtitle.map(|subtitle| view! { <p class="text-zinc-400 max-w-2xl">{subtitle}</p> })}
            <div class="h-1 w-20 bg-gradient-to-r from-sky-500 to-transparent rounded-full mt-4"></div>
        </div>
    }
}
