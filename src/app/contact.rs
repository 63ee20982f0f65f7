use std::time::Duration;

use leptos::prelude::*;

#[cfg(feature = "ssr")]
use crate::contact::{ContactError, RelayClient};
use crate::contact::{
    field_error, ContactMessage, Field, ValidationError, NETWORK_MESSAGE, REJECTED_MESSAGE,
    SUCCESS_MESSAGE, SUCCESS_TITLE,
};

const TOAST_DURATION: Duration = Duration::from_secs(5);

#[server]
pub async fn send_message(
    name: String,
    email: String,
    subject: String,
    message: String,
) -> Result<(), ServerFnError> {
    let relay = use_context::<RelayClient>().ok_or_else(|| {
        tracing::error!("contact relay missing from request context");
        ServerFnError::new(REJECTED_MESSAGE)
    })?;
    let message = ContactMessage {
        name,
        email,
        subject,
        message,
    };
    relay.send(&message).await.map_err(|e| {
        match e {
            ContactError::NotConfigured => tracing::error!(error = %e, "contact relay unusable"),
            _ => tracing::warn!(error = %e, "contact message not delivered"),
        }
        ServerFnError::new(e.user_message())
    })
}

fn failure_message(err: &ServerFnError) -> String {
    match err {
        ServerFnError::Request(_) => NETWORK_MESSAGE.to_string(),
        ServerFnError::ServerError(msg) => msg.clone(),
        _ => REJECTED_MESSAGE.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Toast {
    Sent,
    Failed(String),
}

/// The visible toast, with a generation bumped on every show so a pending
/// dismiss from an earlier toast leaves a newer one alone.
#[derive(Debug, Clone, Default, PartialEq)]
struct ToastSlot {
    current: Option<Toast>,
    generation: u64,
}

impl ToastSlot {
    fn show(&mut self, toast: Toast) -> u64 {
        self.generation += 1;
        self.current = Some(toast);
        self.generation
    }

    fn dismiss(&mut self, generation: u64) {
        if self.generation == generation {
            self.current = None;
        }
    }
}

#[component]
fn FieldError(errors: Memo<Vec<ValidationError>>, field: Field) -> impl IntoView {
    move || {
        errors.with(|e| field_error(e, field)).map(|err| {
            view! { <p class="text-sm text-red-500 mt-1">{err.to_string()}</p> }
        })
    }
}

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-md border border-border bg-background dark:bg-navy-light focus:outline-none focus:ring-2 focus:ring-teal";

#[component]
pub fn ContactForm() -> impl IntoView {
    let send = ServerAction::<SendMessage>::new();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let submitted = RwSignal::new(false);
    let toast = RwSignal::new(ToastSlot::default());

    let draft = move || ContactMessage {
        name: name.get(),
        email: email.get(),
        subject: subject.get(),
        message: message.get(),
    };
    // errors only show once the visitor has tried to send
    let errors = Memo::new(move |_| {
        if submitted.get() {
            draft().validate().err().unwrap_or_default()
        } else {
            Vec::new()
        }
    });

    Effect::watch(
        move || send.value().get(),
        move |result, _, _| {
            let next = match result {
                Some(Ok(())) => {
                    for field in [name, email, subject, message] {
                        field.set(String::new());
                    }
                    submitted.set(false);
                    Toast::Sent
                }
                Some(Err(e)) => {
                    log::warn!("contact form failed: {e}");
                    Toast::Failed(failure_message(e))
                }
                None => return,
            };
            let generation = toast.try_update(|slot| slot.show(next)).unwrap_or_default();
            set_timeout(
                move || toast.update(|slot| slot.dismiss(generation)),
                TOAST_DURATION,
            );
        },
        false,
    );

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submitted.set(true);
        let msg = draft();
        if msg.validate().is_err() || send.pending().get_untracked() {
            return;
        }
        send.dispatch(SendMessage {
            name: msg.name,
            email: msg.email,
            subject: msg.subject,
            message: msg.message,
        });
    };

    view! {
        <form class="space-y-5" on:submit=on_submit novalidate>
            <div class="grid sm:grid-cols-2 gap-5">
                <div>
                    <label for="contact_name" class="block text-sm font-medium mb-2">"Name"</label>
                    <input
                        id="contact_name"
                        class=INPUT_CLASS
                        placeholder="Your name"
                        prop:value=name
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <FieldError errors field=Field::Name />
                </div>
                <div>
                    <label for="contact_email" class="block text-sm font-medium mb-2">"Email"</label>
                    <input
                        id="contact_email"
                        type="email"
                        class=INPUT_CLASS
                        placeholder="your.email@example.com"
                        prop:value=email
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <FieldError errors field=Field::Email />
                </div>
            </div>
            <div>
                <label for="contact_subject" class="block text-sm font-medium mb-2">"Subject"</label>
                <input
                    id="contact_subject"
                    class=INPUT_CLASS
                    placeholder="What's this about?"
                    prop:value=subject
                    on:input=move |ev| subject.set(event_target_value(&ev))
                />
                <FieldError errors field=Field::Subject />
            </div>
            <div>
                <label for="contact_message" class="block text-sm font-medium mb-2">"Message"</label>
                <textarea
                    id="contact_message"
                    rows="6"
                    class=INPUT_CLASS
                    placeholder="Your message..."
                    prop:value=message
                    on:input=move |ev| message.set(event_target_value(&ev))
                ></textarea>
                <FieldError errors field=Field::Message />
            </div>
            <button
                type="submit"
                class="w-full px-6 py-3 rounded-md bg-teal text-navy font-medium hover:bg-teal/90 disabled:opacity-60 disabled:cursor-not-allowed transition-colors"
                disabled=move || send.pending().get()
            >
                {move || if send.pending().get() { "Sending..." } else { "Send Message" }}
            </button>
        </form>
        {move || {
            toast
                .with(|slot| slot.current.clone())
                .map(|t| {
                    let (class, title, body) = match t {
                        Toast::Sent => {
                            ("border-teal", SUCCESS_TITLE.to_string(), SUCCESS_MESSAGE.to_string())
                        }
                        Toast::Failed(msg) => ("border-red-500", "Error".to_string(), msg),
                    };
                    view! {
                        <div
                            role="status"
                            class=format!(
                                "fixed bottom-6 right-6 z-50 max-w-sm p-4 rounded-md border-l-4 bg-card dark:bg-navy-light shadow-lg {class}",
                            )
                        >
                            <p class="font-semibold">{title}</p>
                            <p class="text-sm text-muted-foreground">{body}</p>
                        </div>
                    }
                })
        }}
    }
}
