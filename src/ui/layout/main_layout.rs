// src/ui/layout/main_layout.rs - Header, content, footer and toast stack

use dioxus::prelude::*;

use super::{Footer, Header, LayoutProps};
use crate::ui::state::{use_store_state_with_dispatch, StoreAction};

/// Main application layout
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    rsx! {
        div {
            class: "min-h-screen flex flex-col bg-white",
            Header {}
            main {
                class: format!("flex-1 {}", props.class),
                {props.children}
            }
            if props.show_footer {
                Footer {}
            }
            Toasts {}
        }
    }
}

/// Bottom-right stack of pending notifications, newest last
#[component]
pub fn Toasts() -> Element {
    let (state, dispatch) = use_store_state_with_dispatch();

    if state.notifications.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "fixed bottom-4 right-4 z-50 flex flex-col gap-2 w-80 max-w-full",
            role: "status",
            aria_live: "polite",
            for notification in state.notifications {
                div {
                    key: "{notification.id}",
                    class: format!("flex items-start gap-3 rounded-lg px-4 py-3 shadow-lg {}", notification.notification_type.style().0),
                    span {
                        class: "font-bold",
                        "{notification.notification_type.style().1}"
                    }
                    p {
                        class: "flex-1 text-sm",
                        "{notification.message}"
                    }
                    button {
                        r#type: "button",
                        class: "text-white/80 hover:text-white",
                        aria_label: "Fermer",
                        onclick: move |_| dispatch(StoreAction::DismissNotification(notification.id)),
                        "×"
                    }
                }
            }
        }
    }
}
