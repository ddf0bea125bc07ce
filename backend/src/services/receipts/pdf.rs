//! PDF rendering for the donation receipt.
//!
//! Lays out a fixed one-page document: organization header, thank-you text,
//! the donor fields that were actually filled in, the 501(c)(3) disclosure,
//! a signature block and the address footer. The renderer has no business
//! logic; its only failure modes are missing fonts and rendering errors.

use actix_web::http::header;
use actix_web::{web, HttpResponse, Responder};
use common::model::donation::DonationRecord;
use genpdf::elements::{Break, Image as PdfImage, Paragraph};
use genpdf::style::{Style, StyledString};
use genpdf::{Alignment, Document, Element};
use std::error::Error;
use std::path::Path;

const ORG_NAME: &str = "Hope's Corner Inc.";
const ORG_EIN: &str = "47-3754161";
const THANK_YOU: &str = "Thank you for your generous support of Hope's Corner. \
    Your contribution helps us continue our mission.";
const DISCLOSURE: &str = "Hope's Corner Inc. is a 501(c)(3) non-profit organization. \
    Federal Tax Identification Number EIN 47-3754161. No goods or services were \
    provided in exchange for this contribution.";
const FOOTER: &str = "Hope's Corner Inc. | 748 Mercy Street | Mountain View, CA 94043 \
    | (650) 254-1450 | hopes-corner.org";
const FOOTER_THANKS: &str = "Thank you for making a difference!";
const SIGNATURE_TITLE: &str = "Hope's Corner Representative";

/// Optional image assets; the receipt renders without them when absent.
const LOGO_PATH: &str = "./assets/logo.png";
const SIGNATURE_PATH: &str = "./assets/signature.png";

/// Actix web handler for `POST /api/receipts`.
///
/// Returns the rendered receipt as an `application/pdf` attachment, or
/// `503 Service Unavailable` when rendering fails (e.g. fonts missing).
pub async fn process(payload: web::Json<DonationRecord>) -> impl Responder {
    let record = payload.into_inner();
    match render_receipt(&record) {
        Ok(bytes) => HttpResponse::Ok()
            .content_type("application/pdf")
            .insert_header((
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", record.receipt_file_name()),
            ))
            .body(bytes),
        Err(e) => HttpResponse::ServiceUnavailable()
            .body(format!("Receipt generation failed: {}", e)),
    }
}

/// Renders the complete receipt into an in-memory PDF.
pub fn render_receipt(record: &DonationRecord) -> Result<Vec<u8>, Box<dyn Error>> {
    let mut doc = configure_document()?;

    // Header
    if Path::new(LOGO_PATH).exists() {
        doc.push(PdfImage::from_path(LOGO_PATH)?.with_alignment(Alignment::Center));
    }
    doc.push(
        Paragraph::new(ORG_NAME)
            .aligned(Alignment::Center)
            .styled(Style::new().bold().with_font_size(18)),
    );
    doc.push(Paragraph::new("Donation Receipt").aligned(Alignment::Center));
    doc.push(Paragraph::new(format!("EIN: {}", ORG_EIN)).aligned(Alignment::Center));
    doc.push(Break::new(1));

    doc.push(Paragraph::new(THANK_YOU));
    doc.push(Break::new(1));

    // Donor fields; blank ones are omitted.
    push_field(&mut doc, "Donor Name:", &record.name);
    push_field(&mut doc, "Organization:", &record.organization);
    push_field(&mut doc, "Address:", &record.address);
    push_field(&mut doc, "Email:", &record.email);
    push_field(&mut doc, "Phone:", &record.phone);
    push_field(&mut doc, "Date of Donation:", &record.date);
    if !record.estimated_value.is_empty() {
        push_field(
            &mut doc,
            "Estimated Value:",
            &format!("${}", record.estimated_value),
        );
    }
    push_field(&mut doc, "Item Description:", &record.item_description);

    doc.push(Break::new(1));
    doc.push(Paragraph::new(DISCLOSURE));

    // Signature block
    doc.push(Break::new(2));
    if Path::new(SIGNATURE_PATH).exists() {
        doc.push(PdfImage::from_path(SIGNATURE_PATH)?.with_alignment(Alignment::Center));
    }
    doc.push(Paragraph::new(SIGNATURE_TITLE).aligned(Alignment::Center));

    // Footer
    doc.push(Break::new(2));
    doc.push(
        Paragraph::new(FOOTER)
            .aligned(Alignment::Center)
            .styled(Style::new().with_font_size(8)),
    );
    doc.push(
        Paragraph::new(FOOTER_THANKS)
            .aligned(Alignment::Center)
            .styled(Style::new().with_font_size(8)),
    );

    let mut bytes = Vec::new();
    doc.render(&mut bytes)?;
    Ok(bytes)
}

/// Pushes a bold label followed by the value, one paragraph per line so a
/// multi-line item description keeps its line breaks. Blank values are
/// skipped entirely.
fn push_field(doc: &mut Document, label: &str, value: &str) {
    if value.trim().is_empty() {
        return;
    }
    let mut p = Paragraph::new("");
    p.push(StyledString::new(label, Style::new().bold()));
    doc.push(p);
    for line in value.lines() {
        doc.push(Paragraph::new(line));
    }
    doc.push(Break::new(1));
}

/// Load the font family (adjust path/name if needed).
fn load_font() -> Result<genpdf::fonts::FontFamily<genpdf::fonts::FontData>, Box<dyn Error>> {
    // Prefer Arial if its TTFs were added to ./fonts, otherwise fall back to
    // LiberationSans in the same directory.
    if let Ok(family) = genpdf::fonts::from_files("./fonts", "Arial", None) {
        return Ok(family);
    }
    genpdf::fonts::from_files("./fonts", "LiberationSans", None).map_err(Into::into)
}

/// Configure and return a genpdf Document with font and decorator set.
fn configure_document() -> Result<Document, Box<dyn Error>> {
    let font_family = load_font()?;
    let mut doc = Document::new(font_family);
    doc.set_title("Donation Receipt");
    doc.set_font_size(11);

    let mut decorator = genpdf::SimplePageDecorator::new();
    decorator.set_margins(15);
    doc.set_page_decorator(decorator);
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> DonationRecord {
        DonationRecord {
            name: "Jane Donor".to_string(),
            date: "2026-03-14".to_string(),
            donation_type: "Merchandise".to_string(),
            estimated_value: "120.00".to_string(),
            item_description: "Winter coats\nBlankets".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn renders_a_pdf_when_fonts_are_installed() {
        // Fonts are an install-time asset under ./fonts; without them there
        // is nothing to render against.
        if load_font().is_err() {
            return;
        }
        let bytes = render_receipt(&record()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn rendering_with_minimal_fields_also_works() {
        if load_font().is_err() {
            return;
        }
        let minimal = DonationRecord {
            name: "Jane".to_string(),
            date: "2026-03-14".to_string(),
            ..Default::default()
        };
        let bytes = render_receipt(&minimal).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
