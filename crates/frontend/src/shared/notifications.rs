//! Toast notifications. One toast at a time: showing a new one replaces the
//! current one; each toast dismisses itself after its timeout.

use crate::shared::config::NotificationsConfig;
use crate::shared::icons::{icon, request_icon_refresh};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NotificationKind {
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Success => "check-circle",
            NotificationKind::Error => "x-circle",
            NotificationKind::Warning => "alert-triangle",
            NotificationKind::Info => "info",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "notification notification-success",
            NotificationKind::Error => "notification notification-error",
            NotificationKind::Warning => "notification notification-warning",
            NotificationKind::Info => "notification notification-info",
        }
    }

    /// Successes go away sooner than anything that needs reading
    pub fn timeout_ms(&self, config: &NotificationsConfig) -> u32 {
        match self {
            NotificationKind::Success => config.success_timeout_ms,
            _ => config.other_timeout_ms,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    /// Message lines; `\n` in the message becomes a line break
    pub fn lines(&self) -> Vec<String> {
        self.message.split('\n').map(str::to_string).collect()
    }
}

#[derive(Clone, Copy)]
pub struct NotificationService {
    current: RwSignal<Option<Notification>>,
    next_id: StoredValue<u64>,
    config: StoredValue<NotificationsConfig>,
}

impl NotificationService {
    pub fn new(config: NotificationsConfig) -> Self {
        Self {
            current: RwSignal::new(None),
            next_id: StoredValue::new(1),
            config: StoredValue::new(config),
        }
    }

    pub fn show(&self, message: impl Into<String>, kind: NotificationKind) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        let message = message.into();
        log::debug!("notification #{} ({:?}): {}", id, kind, message);
        self.current.set(Some(Notification { id, kind, message }));

        let timeout = self.config.with_value(|c| kind.timeout_ms(c));
        let svc = *self;
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(timeout).await;
            svc.dismiss_if(id);
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, NotificationKind::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message, NotificationKind::Error);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(message, NotificationKind::Info);
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }

    /// A timer only removes the toast it was started for
    fn dismiss_if(&self, id: u64) {
        if self
            .current
            .with_untracked(|n| n.as_ref().is_some_and(|n| n.id == id))
        {
            self.current.set(None);
        }
    }
}

#[component]
pub fn NotificationHost() -> impl IntoView {
    let svc = use_context::<NotificationService>()
        .expect("NotificationService not provided in context (provide it in app root)");

    // New toast markup carries icon placeholders.
    Effect::new(move |_| {
        if svc.current.with(|n| n.is_some()) {
            request_icon_refresh();
        }
    });

    view! {
        {move || svc.current.get().map(|n| {
            let lines = n.lines();
            let last = lines.len().saturating_sub(1);
            view! {
                <div class=n.kind.css_class()>
                    <div class="notification-content">
                        {icon(n.kind.icon())}
                        <span>
                            {lines.into_iter().enumerate().map(|(i, line)| view! {
                                {line}
                                {(i < last).then(|| view! { <br/> })}
                            }).collect_view()}
                        </span>
                    </div>
                    <button class="notification-close" on:click=move |_| svc.dismiss()>
                        {icon("x")}
                    </button>
                </div>
            }
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_icons() {
        assert_eq!(NotificationKind::Success.icon(), "check-circle");
        assert_eq!(NotificationKind::Error.icon(), "x-circle");
        assert_eq!(NotificationKind::Warning.icon(), "alert-triangle");
        assert_eq!(NotificationKind::Info.icon(), "info");
    }

    #[test]
    fn test_success_dismisses_sooner() {
        let config = NotificationsConfig::default();
        assert_eq!(NotificationKind::Success.timeout_ms(&config), 5000);
        assert_eq!(NotificationKind::Error.timeout_ms(&config), 8000);
        assert_eq!(NotificationKind::Info.timeout_ms(&config), 8000);
    }

    #[test]
    fn test_message_lines() {
        let n = Notification {
            id: 1,
            kind: NotificationKind::Success,
            message: "OS criada\n\nNúmero: 2025-0901".into(),
        };
        assert_eq!(n.lines(), vec!["OS criada", "", "Número: 2025-0901"]);
    }
}
