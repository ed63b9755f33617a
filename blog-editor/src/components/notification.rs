//! Notification toast

use dioxus::prelude::*;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
}

impl NotificationKind {
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Error => "✕",
            Self::Warning => "!",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// Lets a hide timer tell whether its toast was replaced meanwhile
    pub id: Uuid,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn new(kind: NotificationKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            title: title.into(),
            message: message.into(),
        }
    }
}

#[component]
pub fn Toast(notification: Option<Notification>) -> Element {
    let Some(note) = notification else {
        return rsx! {
            div { class: "notification", role: "status" }
        };
    };

    rsx! {
        div {
            class: "notification {note.kind.class()} visible",
            role: "status",
            span { class: "notification-icon", "{note.kind.icon()}" }
            div {
                class: "notification-body",
                div { class: "notification-title", "{note.title}" }
                div { class: "notification-message", "{note.message}" }
            }
        }
    }
}
