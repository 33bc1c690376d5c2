use leptos::either::Either;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use super::glass::GlassCard;
use crate::contact::{ContactState, Field, RelayConfig, StateCell, SubmissionStatus};

const INPUT_CLASSES: &str = "w-full bg-white/[0.03] border border-white/10 rounded-xl px-4 py-3 text-sm text-white placeholder:text-zinc-600 focus:outline-none focus:border-sky-500/50 focus:bg-white/[0.05] transition-all duration-300 disabled:opacity-50";

impl StateCell for RwSignal<ContactState> {
    fn mutate(&self, f: impl FnOnce(&mut ContactState)) {
        // the revert timer can outlive the page; a disposed signal is a no-op
        let _ = self.try_update(f);
    }

    fn read<T>(&self, f: impl FnOnce(&ContactState) -> T) -> T {
        self.with_untracked(f)
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let state = RwSignal::new(ContactState::default());
    let config = StoredValue::new(RelayConfig::from_build_env());

    let status = move || state.with(|s| s.status);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            use crate::contact::relay::{BrowserPacer, EmailJsRelay};
            use crate::contact::submit;
            let config = config.get_value();
            leptos::task::spawn_local(async move {
                submit(&state, &config, &EmailJsRelay::new(), &BrowserPacer).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&state, &config);
    };

    view! {
        <section id="contact" class="pb-16 scroll-mt-32">
            <GlassCard class="p-14 md:p-20 text-center relative overflow-hidden border-sky-500/10 shadow-[0_0_80px_rgba(56,189,248,0.05)]">
                <div class="absolute inset-0 bg-[radial-gradient(circle_at_center,rgba(56,189,248,0.05)_0%,transparent_70%)] opacity-60 pointer-events-none"></div>
                <div class="relative z-10">
                    <span class="text-sky-500 font-mono text-[10px] font-bold uppercase tracking-[0.5em] mb-4 block">
                        "Handshake.Request"
                    </span>
                    <h2 class="text-4xl md:text-6xl font-black mb-10 text-gradient tracking-tighter uppercase leading-[0.9]">
                        "Ready for the" <br /> "Next Engineering Hub."
                    </h2>
                    {move || {
                        if status() == SubmissionStatus::Success {
                            Either::Left(view! { <SuccessPanel state /> })
                        } else {
                            Either::Right(view! { <ContactForm state on_submit /> })
                        }
                    }}
                </div>
            </GlassCard>
        </section>
    }
}

/// Shown after a delivered submission until the user resets the form.
#[component]
fn SuccessPanel(state: RwSignal<ContactState>) -> impl IntoView {
    view! {
        <div class="mt-10 p-10 border border-emerald-500/20 bg-emerald-500/5 rounded-2xl text-center">
            <div class="w-16 h-16 bg-emerald-500/10 rounded-full flex items-center justify-center mx-auto mb-6 relative">
                <div class="absolute inset-0 border border-emerald-500/30 rounded-full animate-ping opacity-20"></div>
                <svg
                    class="w-8 h-8 text-emerald-500"
                    fill="none"
                    stroke="currentColor"
                    viewBox="0 0 24 24"
                >
                    <path
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        stroke-width="2"
                        d="M3 8l7.89 5.26a2 2 0 002.22 0L21 8M5 19h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z"
                    ></path>
                </svg>
            </div>
            <h3 class="text-xl font-black text-white uppercase tracking-tight mb-2">
                "Packet Delivered"
            </h3>
            <p class="text-zinc-400 text-sm mb-6 leading-relaxed">
                "The secure tunnel was established successfully."
            </p>
            <button
                on:click=move |_| state.update(|s| s.reset())
                class="px-6 py-2 border border-white/10 rounded-lg text-[10px] font-bold text-zinc-500 uppercase tracking-[0.2em] hover:text-white hover:border-white/20 transition-all"
            >
                "Reset Connection"
            </button>
        </div>
    }
}

#[component]
fn ContactForm(
    state: RwSignal<ContactState>,
    on_submit: impl FnMut(SubmitEvent) + 'static,
) -> impl IntoView {
    let transmitting = move || state.with(|s| s.status == SubmissionStatus::Transmitting);
    let errored = move || state.with(|s| s.status == SubmissionStatus::Error);
    let last_log = move || state.with(|s| s.log.last().unwrap_or_default().to_string());

    let field_input = move |field: Field| {
        move |ev: web_sys::Event| {
            state.update(|s| s.update_field(field, event_target_value(&ev)));
        }
    };

    view! {
        <div class="mt-10 max-w-2xl mx-auto">
            <form on:submit=on_submit class="text-left space-y-4">
                {move || {
                    errored()
                        .then(|| {
                            view! {
                                <div class="p-4 bg-red-500/10 border border-red-500/20 rounded-xl text-red-400 text-[11px] font-mono mb-4 uppercase tracking-wider flex flex-col gap-1">
                                    <div class="flex items-center gap-3">
                                        <span class="w-2 h-2 bg-red-500 rounded-full animate-pulse"></span>
                                        <span>"System Alert: Handshake Failed"</span>
                                    </div>
                                    <div class="text-[9px] opacity-60 ml-5 lowercase">
                                        {last_log()}
                                    </div>
                                </div>
                            }
                        })
                }}

                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <div class="space-y-1">
                        <FieldLabel label="Identity.Name" />
                        <input
                            required
                            disabled=transmitting
                            type="text"
                            name="name"
                            placeholder="Your Name"
                            prop:value=move || state.with(|s| s.draft.name.clone())
                            on:input=field_input(Field::Name)
                            class=INPUT_CLASSES
                        />
                    </div>
                    <div class="space-y-1">
                        <FieldLabel label="Identity.Email" />
                        <input
                            required
                            disabled=transmitting
                            type="email"
                            name="email"
                            placeholder="your@email.com"
                            prop:value=move || state.with(|s| s.draft.email.clone())
                            on:input=field_input(Field::Email)
                            class=INPUT_CLASSES
                        />
                    </div>
                </div>
                <div class="space-y-1">
                    <FieldLabel label="Packet.Subject" />
                    <input
                        required
                        disabled=transmitting
                        type="text"
                        name="subject"
                        placeholder="Technical Inquiry"
                        prop:value=move || state.with(|s| s.draft.subject.clone())
                        on:input=field_input(Field::Subject)
                        class=INPUT_CLASSES
                    />
                </div>
                <div class="space-y-1">
                    <FieldLabel label="Packet.Payload" />
                    <textarea
                        required
                        disabled=transmitting
                        name="message"
                        rows=4
                        placeholder="Message details..."
                        prop:value=move || state.with(|s| s.draft.message.clone())
                        on:input=field_input(Field::Message)
                        class=format!("{INPUT_CLASSES} resize-none")
                    ></textarea>
                </div>

                {move || {
                    let entries = state
                        .with(|s| s.log.entries().map(str::to_string).collect::<Vec<_>>());
                    (!entries.is_empty())
                        .then(|| {
                            view! {
                                <div class="p-3 bg-black/40 rounded-lg border border-white/5 space-y-1">
                                    {entries
                                        .into_iter()
                                        .map(|entry| {
                                            view! {
                                                <div class="text-[9px] font-mono text-zinc-500 tracking-tighter">
                                                    <span class="text-sky-500/50 mr-2">"➜"</span>
                                                    {entry}
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                        })
                }}

                <button
                    type="submit"
                    disabled=transmitting
                    class="w-full mt-4 group relative px-8 py-4 bg-sky-500 text-white text-xs font-black uppercase tracking-widest rounded-xl hover:bg-sky-400 transition-all active:scale-95 shadow-lg shadow-sky-500/20 disabled:opacity-50 overflow-hidden"
                >
                    <span class=move || {
                        if transmitting() { "opacity-0" } else { "opacity-100" }
                    }>"Deploy Packet"</span>
                    {move || {
                        transmitting()
                            .then(|| {
                                view! {
                                    <div class="absolute inset-0 flex items-center justify-center">
                                        <div class="w-5 h-5 border-2 border-white/30 border-t-white rounded-full animate-spin"></div>
                                    </div>
                                }
                            })
                    }}
                </button>
            </form>
        </div>
    }
}

#[component]
fn FieldLabel(label: &'static str) -> impl IntoView {
    view! {
        <label class="text-[10px] font-mono font-bold text-zinc-500 uppercase ml-1">{label}</label>
    }
}
