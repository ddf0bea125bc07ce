use serde::{Deserialize, Serialize};

use crate::model::donation::DonationRecord;

/// Request payload for `POST /api/save-donation`.
///
/// Carries the donation itself plus optional overrides that let a caller pin
/// the SharePoint destination or supply a bearer token inline instead of
/// relying on server configuration.
#[derive(Deserialize, Serialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct SaveDonationRequest {
    #[serde(flatten)]
    pub record: DonationRecord,
    #[serde(default)]
    pub site_id: Option<String>,
    #[serde(default)]
    pub item_id: Option<String>,
    #[serde(default)]
    pub table_name: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

/// Request payload for the staff verification endpoint.
/// Contains the access code typed into the staff unlock field.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct VerifyStaffRequest {
    pub code: String,
}
