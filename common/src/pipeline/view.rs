use std::cell::Cell;
use std::time::Duration;

use crate::lead::ValidationError;

/// The visible side of one lead form.
///
/// Methods take `&self` because implementations usually forward to a UI event
/// loop rather than mutate in place.
pub trait FormView {
    /// Hides any success or error message left from a previous attempt.
    fn clear_messages(&self);

    /// Reports a rejected field, inline or as a blocking alert depending on
    /// the variant, and focuses the field.
    fn show_invalid(&self, error: ValidationError);

    /// Disables the submit control and shows the busy label, or restores both.
    fn set_busy(&self, busy: bool);

    fn show_success(&self);

    fn show_error(&self, message: &str);

    /// Empties every field.
    fn reset_fields(&self);

    /// Hides the success message after `after`, closing the enclosing modal
    /// too when `close_modal` is set.
    fn schedule_dismiss(&self, after: Duration, close_modal: bool);
}

/// Keeps a form in its loading state for as long as it lives.
///
/// Dropping the guard re-enables the submit control and clears the in-flight
/// flag, including when the submission future itself is dropped mid-flight.
pub(crate) struct BusyGuard<'a, V: FormView + ?Sized> {
    view: &'a V,
    in_flight: &'a Cell<bool>,
}

impl<'a, V: FormView + ?Sized> BusyGuard<'a, V> {
    pub(crate) fn engage(view: &'a V, in_flight: &'a Cell<bool>) -> Self {
        in_flight.set(true);
        view.set_busy(true);
        Self { view, in_flight }
    }
}

impl<V: FormView + ?Sized> Drop for BusyGuard<'_, V> {
    fn drop(&mut self) {
        self.in_flight.set(false);
        self.view.set_busy(false);
    }
}
