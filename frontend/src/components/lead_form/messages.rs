use std::time::Duration;

use common::lead::{Field, ValidationError};

#[derive(Clone)]
pub enum Msg {
    UpdateField(Field, String),
    Submit,
    ClearMessages,
    ShowInvalid(ValidationError),
    SetBusy(bool),
    ShowSuccess,
    ShowError(String),
    ResetFields,
    ScheduleDismiss { after: Duration, close_modal: bool },
    Dismiss { close_modal: bool },
}
