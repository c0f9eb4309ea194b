//! User-visible alerts
//!
//! Alerts are prepended to one of two areas and expire in two steps: after
//! the visible period they start fading, after the fade they are removed.
//! The stack itself holds no clocks; the shell drives both steps.

use std::collections::VecDeque;

pub type AlertId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

impl AlertKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            AlertKind::Success => "alert alert-success",
            AlertKind::Error => "alert alert-error",
        }
    }
}

/// Area an alert is shown in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertTarget {
    /// Main application alert container
    Main,
    /// Alert area of the login screen
    Login,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertPhase {
    Visible,
    Fading,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub id: AlertId,
    pub kind: AlertKind,
    pub message: String,
    pub phase: AlertPhase,
}

#[derive(Debug, Default)]
pub struct AlertStack {
    next_id: AlertId,
    main: VecDeque<Alert>,
    login: VecDeque<Alert>,
    unscheduled: Vec<AlertId>,
}

impl AlertStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend an alert; returns its id
    pub fn push(&mut self, target: AlertTarget, kind: AlertKind, message: impl Into<String>) -> AlertId {
        self.next_id += 1;
        let alert = Alert {
            id: self.next_id,
            kind,
            message: message.into(),
            phase: AlertPhase::Visible,
        };
        match kind {
            AlertKind::Error => log::debug!("alert (error): {}", alert.message),
            AlertKind::Success => log::debug!("alert (success): {}", alert.message),
        }
        self.area_mut(target).push_front(alert);
        self.unscheduled.push(self.next_id);
        self.next_id
    }

    pub fn error(&mut self, message: impl Into<String>) -> AlertId {
        self.push(AlertTarget::Main, AlertKind::Error, message)
    }

    pub fn success(&mut self, message: impl Into<String>) -> AlertId {
        self.push(AlertTarget::Main, AlertKind::Success, message)
    }

    /// Ids pushed since the last call, for expiry scheduling
    pub fn take_unscheduled(&mut self) -> Vec<AlertId> {
        std::mem::take(&mut self.unscheduled)
    }

    /// Start the fade-out; false if the alert is already gone
    pub fn fade(&mut self, id: AlertId) -> bool {
        match self.main.iter_mut().chain(self.login.iter_mut()).find(|a| a.id == id) {
            Some(alert) => {
                alert.phase = AlertPhase::Fading;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: AlertId) -> bool {
        let before = self.main.len() + self.login.len();
        self.main.retain(|a| a.id != id);
        self.login.retain(|a| a.id != id);
        before != self.main.len() + self.login.len()
    }

    /// Alerts of an area, newest first
    pub fn alerts(&self, target: AlertTarget) -> impl Iterator<Item = &Alert> {
        match target {
            AlertTarget::Main => self.main.iter(),
            AlertTarget::Login => self.login.iter(),
        }
    }

    pub fn len(&self) -> usize {
        self.main.len() + self.login.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Markup of an area
    pub fn render(&self, target: AlertTarget) -> String {
        self.alerts(target)
            .map(|a| {
                let style = match a.phase {
                    AlertPhase::Visible => "",
                    AlertPhase::Fading => " style=\"opacity: 0;\"",
                };
                format!(
                    "<div class=\"{}\"{}>{}</div>",
                    a.kind.css_class(),
                    style,
                    bankdesk_utils::escape_html(&a.message)
                )
            })
            .collect()
    }

    fn area_mut(&mut self, target: AlertTarget) -> &mut VecDeque<Alert> {
        match target {
            AlertTarget::Main => &mut self.main,
            AlertTarget::Login => &mut self.login,
        }
    }
}
