use crate::config::app_config;
use crate::session::{
    ChatSession, ScheduledReply, ScrollCoordinator, WidthBucket, format_timestamp,
};
use crate::types::Role;
use dioxus::events::Key;
use dioxus::prelude::*;

const QUICK_ACTIONS: &[&str] = &["Temperature", "Salinity", "Currents"];

fn avatar_label(role: Role) -> &'static str {
    match role {
        Role::User => "U",
        Role::Assistant => "~",
    }
}

/// Runs the reply timer on the view's scope; the task dies with the scope and
/// the session drops replies whose timer it no longer tracks.
fn spawn_reply(mut session: Signal<ChatSession>, scheduled: ScheduledReply) {
    spawn(async move {
        if let Some(reply) = scheduled.wait().await {
            session.with_mut(|s| {
                s.deliver(reply);
            });
        }
    });
}

/// Chat panel. `initial_message` is the page-supplied seed question; an empty
/// string means none was given.
#[component]
pub fn ChatView(initial_message: ReadOnlySignal<String>) -> Element {
    let mut session = use_signal(|| ChatSession::new(app_config().reply_delay));
    let mut input = use_signal(String::new);
    let mut scroll = use_signal(ScrollCoordinator::new);

    // First paint done: timestamps may now use the local clock.
    use_effect(move || session.with_mut(ChatSession::mark_hydrated));

    use_effect(move || {
        let value = initial_message();
        if let Some(scheduled) = session.with_mut(|s| s.admit_initial(Some(value.as_str()))) {
            spawn_reply(session, scheduled);
        }
    });

    use_effect(move || {
        let request = {
            let current = session.read();
            scroll.with_mut(|coordinator| coordinator.observe(current.timeline()))
        };
        if let Some(request) = request {
            let _ = document::eval(&request.to_script());
        }
    });

    let mut send_message = move |text: String| {
        if let Some(scheduled) = session.with_mut(|s| s.submit(&text)) {
            input.set(String::new());
            spawn_reply(session, scheduled);
        }
    };

    let (messages, hydrated) = {
        let current = session.read();
        (current.messages().to_vec(), current.is_hydrated())
    };

    rsx! {
        div { class: "main-container",
            div { class: "chat-title", "AI Ocean Explorer" }
            div { class: "chat-wrap",
                div { id: "chat-list", class: "chat-list",
                    for msg in messages.iter() {
                        div { key: "{msg.id}", id: msg.dom_id(), class: format_args!("message-row {}", msg.role.as_str()),
                            div { class: format_args!("avatar {}", msg.role.as_str()), "{avatar_label(msg.role)}" }
                            div { class: format_args!("message-stack {}", WidthBucket::classify(&msg.content).css_class()),
                                div { class: format_args!("bubble {}", msg.role.as_str()), "{msg.content}" }
                                div { class: format_args!(
                                        "message-meta {}",
                                        match msg.role { Role::User => "align-end", Role::Assistant => "align-start" }
                                    ),
                                    span { class: "message-timestamp", "{format_timestamp(msg, hydrated)}" }
                                }
                                if !msg.suggestions.is_empty() {
                                    div { class: "suggestions",
                                        p { class: "text-muted", "Try asking:" }
                                        div { class: "chip-row",
                                            for suggestion in msg.suggestions.iter() {
                                                ComposerChip { label: suggestion.clone(), input }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            form { class: "composer no-divider",
                div { class: "composer-inner",
                    div { class: "hstack", style: "gap: 0.5rem; width: 100%; align-items: flex-end;",
                        textarea {
                            rows: "1",
                            placeholder: "Ask about ocean data, float measurements, or marine conditions...",
                            value: "{input}", oninput: move |ev| input.set(ev.value()),
                            onkeydown: move |ev| {
                                if ev.key() == Key::Enter && !ev.modifiers().shift() {
                                    ev.prevent_default();
                                    let text = input();
                                    send_message(text);
                                }
                            },
                            autofocus: true,
                        }
                        button {
                            class: "btn btn-primary", r#type: "button",
                            disabled: input().trim().is_empty(),
                            onclick: move |_| {
                                let text = input();
                                send_message(text);
                            },
                            "Send"
                        }
                    }
                    div { class: "quick-actions hstack",
                        span { class: "text-muted", "Quick actions:" }
                        for action in QUICK_ACTIONS.iter() {
                            ComposerChip { label: action.to_string(), input }
                        }
                    }
                }
            }
        }
    }
}

/// Chip that fills the composer with its label without sending.
#[component]
fn ComposerChip(label: String, input: Signal<String>) -> Element {
    let mut input = input;
    let fill = label.clone();
    rsx! {
        button {
            class: "chip",
            r#type: "button",
            onclick: move |_| input.set(fill.clone()),
            "{label}"
        }
    }
}
