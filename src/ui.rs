use crate::config::app_config;
use crate::views::{ChatView, StartView};
use dioxus::prelude::*;

const VARUNA_CSS: Asset = asset!("/assets/varuna.css");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Screen {
    Start,
    Dashboard,
}

#[component]
pub fn App() -> Element {
    let config = app_config();
    let mut initial_message = use_signal(|| config.initial_message.clone());
    let mut screen = use_signal(|| {
        if config.initial_message.is_some() {
            Screen::Dashboard
        } else {
            Screen::Start
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: VARUNA_CSS }
        {match screen() {
            Screen::Start => rsx! {
                StartView {
                    on_start: move |message: String| {
                        initial_message.set(Some(message));
                        screen.set(Screen::Dashboard);
                    },
                }
            },
            Screen::Dashboard => rsx! {
                Dashboard { initial_message: initial_message().unwrap_or_default(), screen }
            },
        }}
    }
}

#[component]
fn Dashboard(initial_message: String, screen: Signal<Screen>) -> Element {
    let mut screen = screen;
    rsx! {
        div { class: "header no-divider",
            div { class: "header-content",
                h1 { class: "header-wordmark", "Varuna Lens" }
                button {
                    class: "btn btn-ghost",
                    r#type: "button",
                    onclick: move |_| screen.set(Screen::Start),
                    "New search"
                }
            }
        }
        div { class: "dashboard",
            div { class: "chat-pane",
                ChatView { initial_message }
            }
        }
    }
}
