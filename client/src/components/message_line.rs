//! Inline dismissable message line for form feedback.

#[cfg(test)]
#[path = "message_line_test.rs"]
mod message_line_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Info, text: text.into() }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, text: text.into() }
    }

    pub fn class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Info => "message-line",
            NoticeKind::Success => "message-line message-line--success",
            NoticeKind::Error => "message-line message-line--error",
        }
    }
}

/// Shows `notice` until it is replaced or dismissed.
#[component]
pub fn MessageLine(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    move || {
        notice.get().map(|n| {
            let role = if n.kind == NoticeKind::Error { "alert" } else { "status" };
            let class = n.class();
            view! {
                <div class=class role=role>
                    <span>{n.text}</span>
                    <button class="message-line__close" aria-label="Dismiss" on:click=move |_| notice.set(None)>
                        "×"
                    </button>
                </div>
            }
        })
    }
}
