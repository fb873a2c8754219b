use dioxus::events::Key;
use dioxus::prelude::*;

const START_TOPICS: &[&str] = &["salinity", "floats", "trends"];

/// Landing prompt; hands the first question to the dashboard as its initial message.
#[component]
pub fn StartView(on_start: EventHandler<String>) -> Element {
    let mut input = use_signal(String::new);

    let start = move |text: String| {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return;
        }
        tracing::debug!("starting dashboard with initial message");
        on_start.call(trimmed.to_string());
    };

    rsx! {
        div { class: "start-page",
            div { class: "start-content",
                h1 { class: "start-title", "Varuna Lens" }
                h2 { class: "start-greeting", "Good Morning, Explorer" }
                p { class: "text-muted", "Dive in, ask me about salinity, floats, or trends" }
                div { class: "start-search hstack",
                    input {
                        r#type: "text",
                        placeholder: "Ask me anything...",
                        value: "{input}",
                        oninput: move |ev| input.set(ev.value()),
                        onkeydown: move |ev| {
                            if ev.key() == Key::Enter {
                                ev.prevent_default();
                                start(input());
                            }
                        },
                        autofocus: true,
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: input().trim().is_empty(),
                        onclick: move |_| start(input()),
                        "Send"
                    }
                }
                div { class: "chip-row",
                    for topic in START_TOPICS.iter().copied() {
                        button {
                            class: "chip",
                            r#type: "button",
                            onclick: move |_| {
                                input.set(topic.to_string());
                                start(topic.to_string());
                            },
                            "{topic}"
                        }
                    }
                }
            }
        }
    }
}
