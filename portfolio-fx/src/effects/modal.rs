//! "Send message" dialog.
//!
//! Two states, Closed (initial) and Open. Every closing path clears the
//! three form fields; submitting also raises a transient notification. The
//! submission never leaves the page.

use std::fmt;

/// Class toggled on the modal element while it is open.
pub const MODAL_OPEN_CLASS: &str = "show";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

/// Why the dialog closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    CloseButton,
    Cancel,
    Backdrop,
    Submitted,
}

impl fmt::Display for CloseReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CloseReason::CloseButton => "close button",
            CloseReason::Cancel => "cancel",
            CloseReason::Backdrop => "backdrop click",
            CloseReason::Submitted => "submit",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MessageForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl MessageForm {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

/// Identifies one `show()` of the notification. Only the ticket from the
/// latest show can hide it, so an older hide timer never cuts a newer
/// notification short.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTicket(u64);

#[derive(Debug, Default)]
pub struct Notification {
    visible: bool,
    generation: u64,
}

impl Notification {
    pub fn show(&mut self) -> NotificationTicket {
        self.generation += 1;
        self.visible = true;
        NotificationTicket(self.generation)
    }

    /// Hide if `ticket` is from the latest show. Returns whether it hid.
    pub fn hide(&mut self, ticket: NotificationTicket) -> bool {
        if ticket.0 != self.generation || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// CSS `display` value for the current visibility.
    pub fn display(&self) -> &'static str {
        if self.visible {
            "block"
        } else {
            "none"
        }
    }
}

#[derive(Debug, Default)]
pub struct MessageModal {
    state: ModalState,
    form: MessageForm,
    notification: Notification,
}

impl MessageModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == ModalState::Open
    }

    pub fn form(&self) -> &MessageForm {
        &self.form
    }

    /// Mirror what the user typed into the fields.
    pub fn set_form(&mut self, form: MessageForm) {
        self.form = form;
    }

    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    pub fn open(&mut self) {
        self.state = ModalState::Open;
    }

    /// Close and clear the fields. Closing an already-closed dialog still
    /// clears them.
    pub fn close(&mut self, reason: CloseReason) {
        if self.is_open() {
            log::debug!("message modal closed ({reason})");
        }
        self.state = ModalState::Closed;
        self.form.clear();
    }

    /// A click anywhere in the window. Only a click whose target is the
    /// backdrop itself closes the dialog. Returns whether it closed.
    pub fn on_window_click(&mut self, target_is_backdrop: bool) -> bool {
        if !target_is_backdrop {
            return false;
        }
        self.close(CloseReason::Backdrop);
        true
    }

    /// Simulated send: show the notification, close, clear. The returned
    /// ticket hides the notification when its timer fires.
    pub fn submit(&mut self) -> NotificationTicket {
        let ticket = self.notification.show();
        log::info!("message form submitted (not delivered anywhere)");
        self.close(CloseReason::Submitted);
        ticket
    }

    pub fn hide_notification(&mut self, ticket: NotificationTicket) -> bool {
        self.notification.hide(ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> MessageModal {
        let mut modal = MessageModal::new();
        modal.open();
        modal.set_form(MessageForm::new("Ann", "a@x.com", "Hi"));
        modal
    }

    #[test]
    fn starts_closed_and_opens() {
        let mut modal = MessageModal::new();
        assert_eq!(modal.state(), ModalState::Closed);
        modal.open();
        assert_eq!(modal.state(), ModalState::Open);
        modal.open();
        assert!(modal.is_open());
    }

    #[test]
    fn every_close_path_clears_fields() {
        for reason in [CloseReason::CloseButton, CloseReason::Cancel, CloseReason::Backdrop] {
            let mut modal = filled();
            modal.close(reason);
            assert_eq!(modal.state(), ModalState::Closed, "{reason}");
            assert!(modal.form().is_empty(), "{reason}");
        }
    }

    #[test]
    fn clicks_inside_dialog_do_not_close() {
        let mut modal = filled();
        assert!(!modal.on_window_click(false));
        assert!(modal.is_open());
        assert_eq!(modal.form().name, "Ann");

        assert!(modal.on_window_click(true));
        assert!(!modal.is_open());
        assert!(modal.form().is_empty());
    }

    #[test]
    fn submit_notifies_closes_and_clears() {
        let mut modal = filled();
        let ticket = modal.submit();
        assert!(modal.notification().is_visible());
        assert_eq!(modal.notification().display(), "block");
        assert_eq!(modal.state(), ModalState::Closed);
        assert_eq!(modal.form(), &MessageForm::default());

        assert!(modal.hide_notification(ticket));
        assert!(!modal.notification().is_visible());
        assert_eq!(modal.notification().display(), "none");
    }

    #[test]
    fn stale_hide_does_not_cut_newer_notification() {
        let mut modal = filled();
        let first = modal.submit();
        modal.open();
        let second = modal.submit();
        assert!(!modal.hide_notification(first));
        assert!(modal.notification().is_visible());
        assert!(modal.hide_notification(second));
        assert!(!modal.hide_notification(second));
    }

    #[test]
    fn close_reason_display() {
        assert_eq!(CloseReason::Backdrop.to_string(), "backdrop click");
        assert_eq!(CloseReason::Submitted.to_string(), "submit");
    }
}
