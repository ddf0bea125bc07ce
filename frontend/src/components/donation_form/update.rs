//! Update function for the donation form component.
//!
//! Elm-style `update`: receives the current state, the `Context`, and a
//! `Msg`, mutates the state and returns whether the view should re-render.
//!
//! Key behaviors
//! - Field edits write into the `DonationRecord` and reset the submission
//!   state machine to idle.
//! - Submit runs the shared client-side validation first; the request only
//!   goes out when every rule passes.
//! - Receipt download is independent of persistence: it posts the same
//!   fields to the receipt endpoint and streams the PDF into a blob URL.
//! - Staff verification unlocks the receipts-only staff mode.

use common::model::donation::DonationRecord;
use common::requests::{SaveDonationRequest, VerifyStaffRequest};
use common::validate::validate_donation;
use gloo_console::error;
use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::helpers::save_pdf_bytes;
use super::messages::{Field, Msg};
use super::state::{DonationFormComponent, SubmitState};

pub fn update(
    component: &mut DonationFormComponent,
    ctx: &Context<DonationFormComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::UpdateField(field, value) => {
            apply_field(&mut component.record, field, value);
            // Any edit resets the submission machine.
            component.submit_state = SubmitState::Idle;
            component.validation_errors.clear();
            true
        }
        Msg::Submit => {
            let errors = validate_donation(&component.record);
            if !errors.is_empty() {
                component.validation_errors = errors;
                return true;
            }
            component.submit_state = SubmitState::Submitting;
            let request = SaveDonationRequest {
                record: component.record.clone(),
                ..Default::default()
            };
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::SubmitFinished(post_donation(&request).await));
            });
            true
        }
        Msg::SubmitFinished(result) => {
            component.submit_state = match result {
                Ok(()) => SubmitState::Success,
                Err(msg) => {
                    error!(format!("Failed to save donation: {}", msg));
                    SubmitState::Error
                }
            };
            true
        }
        Msg::DownloadReceipt => {
            if component.record.name.trim().is_empty() {
                component.validation_errors = vec!["Donor name is required.".to_string()];
                return true;
            }
            component.receipt_busy = true;
            let record = component.record.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::ReceiptFinished(fetch_receipt(&record).await));
            });
            true
        }
        Msg::ReceiptFinished(result) => {
            component.receipt_busy = false;
            match result {
                Ok(bytes) => {
                    if let Err(e) =
                        save_pdf_bytes(&bytes, &component.record.receipt_file_name())
                    {
                        error!("Failed to start receipt download:", e);
                    }
                }
                Err(msg) => {
                    error!(format!("Failed to generate receipt: {}", msg));
                    component.submit_state = SubmitState::Error;
                }
            }
            true
        }
        Msg::UpdateStaffCode(code) => {
            component.staff_code = code;
            component.staff_error = None;
            true
        }
        Msg::VerifyStaff => {
            let code = component.staff_code.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::StaffVerified(verify_staff(code).await));
            });
            true
        }
        Msg::StaffVerified(result) => {
            match result {
                Ok(true) => {
                    component.staff_unlocked = true;
                    component.staff_error = None;
                    component.staff_code.clear();
                }
                Ok(false) => {
                    component.staff_error = Some("Invalid access code".to_string());
                }
                Err(msg) => {
                    error!(format!("Staff verification failed: {}", msg));
                    component.staff_error = Some(msg);
                }
            }
            true
        }
    }
}

fn apply_field(record: &mut DonationRecord, field: Field, value: String) {
    match field {
        Field::Name => record.name = value,
        Field::Date => record.date = value,
        Field::Email => record.email = value,
        Field::DonationType => record.donation_type = value,
        Field::Organization => record.organization = value,
        Field::Address => record.address = value,
        Field::Phone => record.phone = value,
        Field::EstimatedValue => record.estimated_value = value,
        Field::ItemDescription => record.item_description = value,
    }
}

async fn post_donation(request: &SaveDonationRequest) -> Result<(), String> {
    let resp = Request::post("/api/save-donation")
        .json(request)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if resp.ok() {
        return Ok(());
    }
    let message = resp
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or_else(|| format!("Request failed with status {}", resp.status()));
    Err(message)
}

async fn fetch_receipt(record: &DonationRecord) -> Result<Vec<u8>, String> {
    let resp = Request::post("/api/receipts")
        .json(record)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !resp.ok() {
        return Err(format!(
            "Receipt request failed with status {}",
            resp.status()
        ));
    }
    resp.binary().await.map_err(|e| e.to_string())
}

async fn verify_staff(code: String) -> Result<bool, String> {
    let resp = Request::post("/api/verify-staff")
        .json(&VerifyStaffRequest { code })
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    match resp.status() {
        200 => Ok(true),
        401 => Ok(false),
        400 => Err("Enter the staff access code first.".to_string()),
        status => Err(format!("Verification failed with status {}", status)),
    }
}
