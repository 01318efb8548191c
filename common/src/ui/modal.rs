/// Value written to `body.style.overflow` while a dialog is open.
pub const SCROLL_LOCKED: &str = "hidden";

/// Why a dialog was asked to close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    CloseButton,
    Backdrop,
    EscapeKey,
    /// Closed by the page itself, e.g. after a successful submission.
    Programmatic,
}

/// Open/closed state of a modal dialog and the background scroll lock that
/// goes with it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalState {
    open: bool,
}

impl ModalState {
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Returns `true` when the state actually changed.
    pub fn open(&mut self) -> bool {
        let changed = !self.open;
        self.open = true;
        changed
    }

    /// Returns `true` when the state actually changed.
    pub fn close(&mut self, _reason: CloseReason) -> bool {
        let changed = self.open;
        self.open = false;
        changed
    }

    /// Closes on `Escape`; any other key is ignored.
    pub fn handle_key(&mut self, key: &str) -> bool {
        key == "Escape" && self.close(CloseReason::EscapeKey)
    }

    /// The `overflow` value the document body should carry.
    pub fn body_overflow(self) -> &'static str {
        if self.open { SCROLL_LOCKED } else { "" }
    }
}

/// Which of the page's dialogs is open, by id. At most one is open at a time.
///
/// Closing is always addressed to a specific dialog, so a late request from a
/// dialog that is no longer open cannot close the one that replaced it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenDialog {
    id: Option<String>,
}

impl OpenDialog {
    pub fn open(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.id.as_deref() == Some(id)
    }

    /// Closes `id` if it is the open dialog. Returns `true` when it was.
    pub fn close(&mut self, id: &str) -> bool {
        if self.is_open(id) {
            self.id = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_locks_background_scroll() {
        let mut modal = ModalState::default();
        assert_eq!(modal.body_overflow(), "");
        assert!(modal.open());
        assert_eq!(modal.body_overflow(), "hidden");
    }

    #[test]
    fn every_dismissal_restores_scroll() {
        for reason in [
            CloseReason::CloseButton,
            CloseReason::Backdrop,
            CloseReason::EscapeKey,
            CloseReason::Programmatic,
        ] {
            let mut modal = ModalState::default();
            modal.open();
            assert!(modal.close(reason));
            assert!(!modal.is_open());
            assert_eq!(modal.body_overflow(), "");
        }
    }

    #[test]
    fn escape_closes_other_keys_do_not() {
        let mut modal = ModalState::default();
        modal.open();
        assert!(!modal.handle_key("Enter"));
        assert!(modal.is_open());
        assert!(modal.handle_key("Escape"));
        assert!(!modal.is_open());
    }

    #[test]
    fn repeated_transitions_report_no_change() {
        let mut modal = ModalState::default();
        assert!(!modal.close(CloseReason::Backdrop));
        assert!(modal.open());
        assert!(!modal.open());
        assert!(modal.handle_key("Escape"));
        assert!(!modal.handle_key("Escape"));
    }

    #[test]
    fn late_close_from_another_dialog_is_ignored() {
        let mut dialogs = OpenDialog::default();
        dialogs.open("modalForm");
        assert!(dialogs.close("modalForm"));
        dialogs.open("viewingForm");
        // the first dialog's success timer fires after it was dismissed
        assert!(!dialogs.close("modalForm"));
        assert!(dialogs.is_open("viewingForm"));
        assert!(dialogs.close("viewingForm"));
        assert!(!dialogs.is_open("viewingForm"));
    }

    #[test]
    fn opening_replaces_the_current_dialog() {
        let mut dialogs = OpenDialog::default();
        dialogs.open("modalForm");
        dialogs.open("viewingForm");
        assert!(!dialogs.is_open("modalForm"));
        assert!(dialogs.is_open("viewingForm"));
    }
}
