//! Transient toast notifications.
//!
//! Every request failure is converted into a toast at this boundary — no
//! error propagates further up or crashes a view, and nothing is retried.

use crate::dataflow::{relay, ActorVec, Relay};
use futures::{select, StreamExt};
use shared::{ApiFailure, RequestKind};
use std::sync::atomic::{AtomicUsize, Ordering};
use zoon::*;

static TOAST_ID_COUNTER: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Error,
    Info,
    Success,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: String,
    pub title: String,
    pub message: String,
    pub variant: ToastVariant,
    pub auto_dismiss_ms: u64,
}

impl Toast {
    fn next_id() -> String {
        format!("toast_{}", TOAST_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: Self::next_id(),
            title: title.into(),
            message: message.into(),
            variant: ToastVariant::Error,
            auto_dismiss_ms: 5000,
        }
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: Self::next_id(),
            title: title.into(),
            message: message.into(),
            variant: ToastVariant::Success,
            auto_dismiss_ms: 4000,
        }
    }

    pub fn api_failure(request: RequestKind, failure: &ApiFailure) -> Self {
        Self::error(
            format!("{} failed", request.label()),
            make_failure_user_friendly(failure),
        )
    }
}

/// Turn a wire-level failure into something a coach can read.
pub fn make_failure_user_friendly(failure: &ApiFailure) -> String {
    match failure {
        ApiFailure::Transport(_) => {
            "Connection error. Please check your network connection.".to_string()
        }
        ApiFailure::Server { status, message } => {
            if message.trim().is_empty() {
                format!("The service rejected the request (status {status}).")
            } else {
                message.trim().to_string()
            }
        }
    }
}

/// Toast domain: an ActorVec of active toasts plus add/dismiss relays.
/// Each added toast schedules its own auto-dismiss timer unless
/// `auto_dismiss_ms` is zero.
#[derive(Clone)]
pub struct Notifications {
    pub active_toasts: ActorVec<Toast>,
    pub toast_added_relay: Relay<Toast>,
    pub toast_dismissed_relay: Relay<String>,
}

impl Notifications {
    pub async fn new() -> Self {
        let (toast_added_relay, mut toast_added_stream) = relay::<Toast>();
        let (toast_dismissed_relay, mut toast_dismissed_stream) = relay::<String>();

        let dismiss_relay_for_timers = toast_dismissed_relay.clone();
        let active_toasts = ActorVec::new(vec![], async move |toasts| {
            loop {
                select! {
                    toast = toast_added_stream.next() => {
                        if let Some(toast) = toast {
                            if toast.auto_dismiss_ms > 0 {
                                let dismiss_relay = dismiss_relay_for_timers.clone();
                                let toast_id = toast.id.clone();
                                let dismiss_ms = toast.auto_dismiss_ms;
                                Task::start(async move {
                                    Timer::sleep(dismiss_ms as u32).await;
                                    dismiss_relay.send(toast_id);
                                });
                            }
                            toasts.lock_mut().push_cloned(toast);
                        }
                    }
                    dismissed_id = toast_dismissed_stream.next() => {
                        if let Some(id) = dismissed_id {
                            toasts.lock_mut().retain(|toast| toast.id != id);
                        }
                    }
                }
            }
        });

        Self {
            active_toasts,
            toast_added_relay,
            toast_dismissed_relay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_failures_get_a_generic_network_message() {
        let failure = ApiFailure::Transport("dns lookup failed".to_string());
        assert_eq!(
            make_failure_user_friendly(&failure),
            "Connection error. Please check your network connection."
        );
    }

    #[test]
    fn server_failures_surface_the_server_message() {
        let failure = ApiFailure::Server {
            status: 403,
            message: "approval requires admin role".to_string(),
        };
        assert_eq!(make_failure_user_friendly(&failure), "approval requires admin role");
    }

    #[test]
    fn blank_server_message_falls_back_to_status() {
        let failure = ApiFailure::Server {
            status: 502,
            message: "  ".to_string(),
        };
        assert_eq!(
            make_failure_user_friendly(&failure),
            "The service rejected the request (status 502)."
        );
    }

    #[test]
    fn api_failure_toast_is_an_error_titled_by_request() {
        let toast = Toast::api_failure(
            RequestKind::RecoveryProtocolApproval,
            &ApiFailure::Transport("offline".to_string()),
        );
        assert_eq!(toast.variant, ToastVariant::Error);
        assert_eq!(toast.title, "Approving recovery protocol failed");
    }
}
