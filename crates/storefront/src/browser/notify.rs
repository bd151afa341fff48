//! Alerts through `window.alert`.

use crate::notify::{Alert, Notifier};

/// Notifier that shows alerts with `window.alert`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn alert(&self, alert: &Alert) {
        let Some(window) = web_sys::window() else {
            tracing::warn!(%alert, "no window to alert in");
            return;
        };
        if let Err(err) = window.alert_with_message(&alert.to_string()) {
            tracing::warn!(?err, "window.alert failed");
        }
    }
}
