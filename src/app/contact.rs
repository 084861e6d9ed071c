use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use super::toast::{self, use_toaster};
use crate::content;
use crate::form::{handle_submit, ContactDraft, DispatchError, Field, FormStore};

/// How long the simulated dispatch takes to resolve.
const SEND_DELAY_MS: u32 = 1_000;

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Stands in for the future POST to a message endpoint: logs the payload
/// it would send, then resolves after the dispatch delay.
async fn send_message(draft: ContactDraft) -> Result<(), DispatchError> {
    match serde_json::to_string(&draft) {
        Ok(payload) => log::debug!("dispatching contact message: {payload}"),
        Err(err) => return Err(DispatchError::Failed(err.to_string())),
    }
    toast::sleep_ms(SEND_DELAY_MS).await;
    Ok(())
}

#[component]
pub fn Contact() -> impl IntoView {
    let store = FormStore::new();
    let toaster = use_toaster();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        leptos::task::spawn_local(async move {
            handle_submit(store, move |n| toaster.notify(n), now_ms(), send_message).await;
        });
    };

    view! {
        <section id="contact" class="py-20 hero-gradient">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h2 class="text-3xl sm:text-4xl font-bold text-primary mb-4">
                        "Let's Work Together"
                    </h2>
                    <p class="text-lg text-muted-foreground max-w-2xl mx-auto">
                        "Have a project in mind or just want to chat about technology? I'd love to hear from you."
                    </p>
                </div>

                <div class="grid lg:grid-cols-2 gap-12">
                    <ContactInfo />

                    <div class="bg-card border border-border rounded-lg p-8 shadow-lg">
                        <h3 class="text-2xl font-semibold text-primary mb-6">"Send me a message"</h3>

                        <form on:submit=on_submit class="space-y-6">
                            <div class="grid md:grid-cols-2 gap-4">
                                <FieldInput
                                    store
                                    field=Field::Name
                                    label="Name"
                                    input_type="text"
                                    placeholder="Your name"
                                    maxlength="50"
                                />
                                <FieldInput
                                    store
                                    field=Field::Email
                                    label="Email"
                                    input_type="email"
                                    placeholder="your.email@example.com"
                                    maxlength="100"
                                />
                            </div>

                            <FieldInput
                                store
                                field=Field::Subject
                                label="Subject"
                                input_type="text"
                                placeholder="What's this about?"
                                maxlength="100"
                            />

                            <MessageInput store />

                            <button
                                type="submit"
                                disabled=move || store.is_busy()
                                class="btn-coral w-full"
                            >
                                {move || if store.is_busy() { "Sending..." } else { "Send Message" }}
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}

fn field_class(has_error: bool) -> &'static str {
    if has_error {
        "w-full px-4 py-2 rounded-md bg-background text-foreground border border-destructive focus:outline-none focus:ring-2 focus:ring-primary"
    } else {
        "w-full px-4 py-2 rounded-md bg-background text-foreground border border-border focus:outline-none focus:ring-2 focus:ring-primary"
    }
}

#[component]
fn FieldError(store: FormStore, field: Field) -> impl IntoView {
    view! {
        {move || {
            store
                .error(field)
                .map(|msg| {
                    view! {
                        <p id=format!("{}-error", field.key()) class="text-sm text-destructive mt-1">
                            {msg}
                        </p>
                    }
                })
        }}
    }
}

#[component]
fn FieldInput(
    store: FormStore,
    field: Field,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    maxlength: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <label for=field.key() class="block text-sm font-medium text-foreground mb-2">
                {label}
                " *"
            </label>
            <input
                id=field.key()
                name=field.key()
                type=input_type
                required=true
                maxlength=maxlength
                placeholder=placeholder
                prop:value=move || store.value(field)
                on:input=move |ev| store.edit(field, &event_target_value(&ev))
                class=move || field_class(store.error(field).is_some())
            />
            <FieldError store field />
        </div>
    }
}

#[component]
fn MessageInput(store: FormStore) -> impl IntoView {
    let field = Field::Message;
    view! {
        <div>
            <label for=field.key() class="block text-sm font-medium text-foreground mb-2">
                "Message *"
            </label>
            <textarea
                id=field.key()
                name=field.key()
                required=true
                maxlength="1000"
                rows=6
                placeholder="Tell me about your project or just say hello!"
                prop:value=move || store.value(field)
                on:input=move |ev| store.edit(field, &event_target_value(&ev))
                class=move || format!("{} resize-none", field_class(store.error(field).is_some()))
            ></textarea>
            <FieldError store field />
        </div>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <div>
                <h3 class="text-2xl font-semibold text-primary mb-6">"Get in Touch"</h3>
                <p class="text-muted-foreground leading-relaxed mb-8">
                    "I'm always open to discussing new opportunities, interesting projects, or just having a conversation about the latest in web development. Don't hesitate to reach out!"
                </p>
            </div>

            <div class="space-y-4">
                {content::CONTACT_DETAILS
                    .iter()
                    .map(|info| {
                        view! {
                            <a
                                href=info.href
                                class="flex items-center space-x-4 p-4 bg-card border border-border rounded-lg hover:shadow-lg transition-all duration-300 hover:border-primary/50 group"
                            >
                                <div class="flex-shrink-0 w-12 h-12 bg-primary/10 rounded-lg flex items-center justify-center text-primary group-hover:bg-primary group-hover:text-white transition-colors">
                                    <i class=info.icon></i>
                                </div>
                                <div>
                                    <h4 class="font-medium text-foreground">{info.label}</h4>
                                    <p class="text-muted-foreground">{info.content}</p>
                                </div>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>

            <div>
                <h4 class="text-lg font-semibold text-foreground mb-4">
                    "Connect on Social Media"
                </h4>
                <div class="flex space-x-4">
                    {content::SOCIAL_LINKS
                        .iter()
                        .map(|social| {
                            view! {
                                <a
                                    href=social.url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=social.name
                                    class="flex items-center justify-center w-12 h-12 bg-card border border-border rounded-lg transition-all duration-300 hover:shadow-lg hover:scale-110 hover:text-primary"
                                >
                                    <i class=social.icon></i>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="bg-card border border-border rounded-lg p-6">
                <div class="flex items-center space-x-3 mb-3">
                    <div class="w-3 h-3 bg-green-500 rounded-full animate-pulse"></div>
                    <h4 class="font-semibold text-foreground">"Available for Projects"</h4>
                </div>
                <p class="text-muted-foreground text-sm">
                    "I'm currently available for freelance projects and full-time opportunities. Let's discuss how we can work together!"
                </p>
            </div>
        </div>
    }
}
