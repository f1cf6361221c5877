use dioxus::prelude::*;
use ledger_editor::host::{Navigator as PageNavigator, Notifier};
use tracing::{debug, warn};

use crate::Route;

const MAX_TOASTS: usize = 3;

#[derive(Clone, Copy, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Drives the Dioxus router on behalf of a page controller.
#[derive(Clone, Copy)]
pub struct RouterNavigator {
    navigator: Navigator,
}

impl RouterNavigator {
    pub fn new(navigator: Navigator) -> Self {
        Self { navigator }
    }
}

impl PageNavigator for RouterNavigator {
    fn navigate_by_url(&mut self, url: &str, skip_location_change: bool) {
        let Ok(route) = url.parse::<Route>() else {
            warn!(url, "navigation to unknown route ignored");
            return;
        };
        // The router has no history-free navigation. An intermediate hop would
        // overwrite the page being left, so it is skipped; the form pages
        // rebuild themselves when the final route is unchanged.
        if skip_location_change {
            debug!(url, "transient navigation skipped");
            return;
        }
        self.navigator.push(route);
    }
}

/// Toasts go to the shared toast list; alerts and confirms use the browser.
#[derive(Clone, Copy)]
pub struct PageNotifier {
    toasts: Signal<Vec<Toast>>,
}

impl PageNotifier {
    pub fn new(toasts: Signal<Vec<Toast>>) -> Self {
        Self { toasts }
    }

    fn push(&mut self, kind: ToastKind, message: &str) {
        let mut toasts = self.toasts.write();
        let id = toasts.last().map_or(0, |t| t.id + 1);
        toasts.push(Toast {
            id,
            kind,
            message: message.to_string(),
        });
        if toasts.len() > MAX_TOASTS {
            toasts.remove(0);
        }
    }
}

impl Notifier for PageNotifier {
    fn success(&mut self, message: &str) {
        self.push(ToastKind::Success, message);
    }

    fn error(&mut self, message: &str) {
        self.push(ToastKind::Error, message);
    }

    fn alert(&mut self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn confirm(&mut self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}
