//! Component state for the donation form.
//!
//! The submission lifecycle is a small state machine: `Idle` until the user
//! presses save, `Submitting` while the request is in flight (the save button
//! is disabled to serialize submissions from this form instance), then
//! `Success` or `Error`. Any field edit drops the machine back to `Idle`.

use common::model::donation::DonationRecord;

use super::helpers::today_iso;

/// Submission lifecycle of the form.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitState {
    Idle,
    Submitting,
    Success,
    /// Details are logged to the console only; the banner stays generic.
    Error,
}

/// Main state container for the `DonationFormComponent`.
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct DonationFormComponent {
    /// The donation being edited; field edits write straight into it.
    pub record: DonationRecord,

    /// Current position in the submission state machine.
    pub submit_state: SubmitState,

    /// Messages from the last failed client-side validation pass.
    pub validation_errors: Vec<String>,

    /// True while a receipt request is in flight.
    pub receipt_busy: bool,

    /// True once the staff access code has been verified. In staff mode the
    /// save action is hidden; only receipt generation is offered.
    pub staff_unlocked: bool,

    /// Current content of the staff access code input.
    pub staff_code: String,

    /// Error from the last staff verification attempt, if any.
    pub staff_error: Option<String>,
}

impl DonationFormComponent {
    /// Fresh form: empty fields except the donation date, which defaults to
    /// today.
    pub fn new() -> Self {
        let record = DonationRecord {
            date: today_iso(),
            ..Default::default()
        };
        Self {
            record,
            submit_state: SubmitState::Idle,
            validation_errors: Vec::new(),
            receipt_busy: false,
            staff_unlocked: false,
            staff_code: String::new(),
            staff_error: None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submit_state == SubmitState::Submitting
    }
}
