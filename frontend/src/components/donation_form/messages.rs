/// Editable fields of the donation form.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Field {
    Name,
    Date,
    Email,
    DonationType,
    Organization,
    Address,
    Phone,
    EstimatedValue,
    ItemDescription,
}

pub enum Msg {
    UpdateField(Field, String),
    Submit,
    SubmitFinished(Result<(), String>),
    DownloadReceipt,
    ReceiptFinished(Result<Vec<u8>, String>),
    UpdateStaffCode(String),
    VerifyStaff,
    StaffVerified(Result<bool, String>),
}
