use serde::{Deserialize, Serialize};

/// A single donation as entered in the intake form.
///
/// All fields travel as plain strings and default to empty when absent, which
/// matches the spreadsheet contract: every column is text and a missing field
/// becomes an empty cell. `estimated_value` and `item_description` accept the
/// short wire names (`amount`, `description`) that the cash-donation form
/// sends.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DonationRecord {
    #[serde(default)]
    pub name: String,
    /// ISO calendar date (`YYYY-MM-DD`).
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub email: String,
    /// `Cash`, `Merchandise` or `Service`. Not persisted as a column; it only
    /// drives validation and the receipt file name.
    #[serde(default)]
    pub donation_type: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, alias = "amount")]
    pub estimated_value: String,
    /// One donated item per line in the multi-item form.
    #[serde(default, alias = "description")]
    pub item_description: String,
}

impl DonationRecord {
    /// File name offered for the downloaded receipt, e.g.
    /// `donation-receipt-jane-donor-Cash-2026-03-14.pdf`.
    pub fn receipt_file_name(&self) -> String {
        let name_slug = self
            .name
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
            .to_lowercase();
        let kind = if self.donation_type.is_empty() {
            "donation"
        } else {
            self.donation_type.as_str()
        };
        format!("donation-receipt-{}-{}-{}.pdf", name_slug, kind, self.date)
    }

    /// Returns the single spreadsheet row for this donation, in the fixed
    /// column order the SharePoint table expects.
    pub fn row_values(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.date.clone(),
            self.email.clone(),
            self.organization.clone(),
            self.address.clone(),
            self.phone.clone(),
            self.estimated_value.clone(),
            self.item_description.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_values_follow_the_fixed_column_order() {
        let record = DonationRecord {
            name: "Jane Donor".to_string(),
            date: "2026-03-14".to_string(),
            email: "jane@example.org".to_string(),
            donation_type: "Merchandise".to_string(),
            organization: "ACME".to_string(),
            address: "1 Main St".to_string(),
            phone: "650-555-0100".to_string(),
            estimated_value: "120.00".to_string(),
            item_description: "Winter coats".to_string(),
        };
        assert_eq!(
            record.row_values(),
            vec![
                "Jane Donor",
                "2026-03-14",
                "jane@example.org",
                "ACME",
                "1 Main St",
                "650-555-0100",
                "120.00",
                "Winter coats",
            ]
        );
    }

    #[test]
    fn absent_fields_become_empty_cells() {
        let record = DonationRecord::default();
        assert_eq!(record.row_values(), vec![""; 8]);
    }

    #[test]
    fn wire_aliases_map_onto_the_canonical_fields() {
        let record: DonationRecord = serde_json::from_str(
            r#"{ "name": "Jane", "amount": "50", "description": "General donation" }"#,
        )
        .unwrap();
        assert_eq!(record.estimated_value, "50");
        assert_eq!(record.item_description, "General donation");
    }

    #[test]
    fn receipt_file_name_slugifies_the_donor_name() {
        let record = DonationRecord {
            name: "Jane Q. Donor".to_string(),
            date: "2026-03-14".to_string(),
            donation_type: "Cash".to_string(),
            ..Default::default()
        };
        assert_eq!(
            record.receipt_file_name(),
            "donation-receipt-jane-q.-donor-Cash-2026-03-14.pdf"
        );
    }

    #[test]
    fn receipt_file_name_defaults_the_donation_type() {
        let record = DonationRecord {
            name: "Jane".to_string(),
            date: "2026-03-14".to_string(),
            ..Default::default()
        };
        assert_eq!(
            record.receipt_file_name(),
            "donation-receipt-jane-donation-2026-03-14.pdf"
        );
    }
}
