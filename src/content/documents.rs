// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 taxpack contributors

//! Field-specification tables for supply-chain and GST documents.
//!
//! Produces `document_field_summary.csv` plus the per-document field tables
//! (`purchase_requisition_fields.csv`, `purchase_order_fields.csv`).

use crate::content::csv;

const FIELD_SPEC_HEADER: [&str; 5] =
    ["Category", "Field_Name", "Data_Type", "Required", "Max_Length"];

/// One entry of a document field-specification table.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Functional grouping on the form ("Basic Information", "Tax Information", …).
    pub category: &'static str,
    pub field_name: &'static str,
    pub data_type: &'static str,
    pub required: bool,
    /// Maximum length in characters; `None` where length does not apply
    /// (dates, decimals, dropdowns).
    pub max_length: Option<u16>,
}

impl FieldSpec {
    fn cells(&self) -> Vec<String> {
        vec![
            self.category.to_string(),
            self.field_name.to_string(),
            self.data_type.to_string(),
            // The published tables spell booleans in title case.
            if self.required { "True" } else { "False" }.to_string(),
            self.max_length
                .map_or_else(|| "N/A".to_string(), |n| n.to_string()),
        ]
    }
}

/// One row of the document-type summary table.
#[derive(Debug, Clone)]
pub struct DocumentSummary {
    pub category: &'static str,
    pub document_type: &'static str,
    /// Total field count of the full specification, of which the tables
    /// here list the mandatory core.
    pub field_count: u16,
    pub integration_required: bool,
}

impl DocumentSummary {
    fn cells(&self) -> Vec<String> {
        vec![
            self.category.to_string(),
            self.document_type.to_string(),
            self.field_count.to_string(),
            if self.integration_required { "Yes" } else { "No" }.to_string(),
        ]
    }
}

/// Document types covered by the bundle with their field counts.
pub fn document_summaries() -> Vec<DocumentSummary> {
    vec![
        DocumentSummary {
            category: "SUPPLY CHAIN DOCUMENTS",
            document_type: "PURCHASE REQUISITION",
            field_count: 29,
            integration_required: true,
        },
        DocumentSummary {
            category: "SUPPLY CHAIN DOCUMENTS",
            document_type: "PURCHASE ORDER",
            field_count: 61,
            integration_required: true,
        },
        DocumentSummary {
            category: "SUPPLY CHAIN DOCUMENTS",
            document_type: "GOODS RECEIPT NOTE",
            field_count: 40,
            integration_required: true,
        },
        DocumentSummary {
            category: "GST COMPLIANCE DOCUMENTS",
            document_type: "TAX INVOICE",
            field_count: 42,
            integration_required: true,
        },
        DocumentSummary {
            category: "GST COMPLIANCE DOCUMENTS",
            document_type: "ADVANCE RECEIPT VOUCHER",
            field_count: 20,
            integration_required: true,
        },
        DocumentSummary {
            category: "GST COMPLIANCE DOCUMENTS",
            document_type: "CREDIT DEBIT NOTE",
            field_count: 13,
            integration_required: true,
        },
    ]
}

/// Purchase-requisition field specification (mandatory core).
pub fn purchase_requisition_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec {
            category: "Basic Information",
            field_name: "requisition_number",
            data_type: "Alphanumeric",
            required: true,
            max_length: Some(20),
        },
        FieldSpec {
            category: "Basic Information",
            field_name: "requisition_date",
            data_type: "Date",
            required: true,
            max_length: None,
        },
        FieldSpec {
            category: "Basic Information",
            field_name: "priority_level",
            data_type: "Dropdown",
            required: true,
            max_length: None,
        },
        FieldSpec {
            category: "Basic Information",
            field_name: "expected_delivery_date",
            data_type: "Date",
            required: true,
            max_length: None,
        },
        FieldSpec {
            category: "Requestor Information",
            field_name: "requestor_name",
            data_type: "Text",
            required: true,
            max_length: Some(100),
        },
        FieldSpec {
            category: "Requestor Information",
            field_name: "requestor_employee_id",
            data_type: "Alphanumeric",
            required: true,
            max_length: Some(20),
        },
        FieldSpec {
            category: "Requestor Information",
            field_name: "requestor_department",
            data_type: "Dropdown",
            required: true,
            max_length: None,
        },
        FieldSpec {
            category: "Item Details",
            field_name: "item_description",
            data_type: "Text",
            required: true,
            max_length: Some(500),
        },
        FieldSpec {
            category: "Item Details",
            field_name: "hsn_sac_code",
            data_type: "Numeric",
            required: true,
            max_length: Some(8),
        },
        FieldSpec {
            category: "Item Details",
            field_name: "quantity_requested",
            data_type: "Decimal",
            required: true,
            max_length: None,
        },
        FieldSpec {
            category: "Financial Information",
            field_name: "estimated_unit_price",
            data_type: "Decimal",
            required: true,
            max_length: None,
        },
        FieldSpec {
            category: "Financial Information",
            field_name: "budget_code",
            data_type: "Alphanumeric",
            required: true,
            max_length: Some(20),
        },
        FieldSpec {
            category: "Approval Workflow",
            field_name: "business_justification",
            data_type: "Text",
            required: true,
            max_length: Some(1000),
        },
    ]
}

/// Purchase-order field specification (mandatory core).
pub fn purchase_order_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec {
            category: "Document Header",
            field_name: "po_number",
            data_type: "Alphanumeric",
            required: true,
            max_length: Some(16),
        },
        FieldSpec {
            category: "Document Header",
            field_name: "po_date",
            data_type: "Date",
            required: true,
            max_length: None,
        },
        FieldSpec {
            category: "Buyer Information",
            field_name: "buyer_legal_name",
            data_type: "Text",
            required: true,
            max_length: Some(200),
        },
        FieldSpec {
            category: "Buyer Information",
            field_name: "buyer_gstin",
            data_type: "Alphanumeric",
            required: true,
            max_length: Some(15),
        },
        FieldSpec {
            category: "Supplier Information",
            field_name: "supplier_legal_name",
            data_type: "Text",
            required: true,
            max_length: Some(200),
        },
        FieldSpec {
            category: "Supplier Information",
            field_name: "supplier_gstin",
            data_type: "Alphanumeric",
            required: true,
            max_length: Some(15),
        },
        FieldSpec {
            category: "Item Details",
            field_name: "item_description",
            data_type: "Text",
            required: true,
            max_length: Some(500),
        },
        FieldSpec {
            category: "Item Details",
            field_name: "hsn_sac_code",
            data_type: "Numeric",
            required: true,
            max_length: Some(8),
        },
        FieldSpec {
            category: "Item Details",
            field_name: "quantity",
            data_type: "Decimal",
            required: true,
            max_length: None,
        },
        FieldSpec {
            category: "Item Details",
            field_name: "unit_price",
            data_type: "Decimal",
            required: true,
            max_length: None,
        },
        FieldSpec {
            category: "Tax Information",
            field_name: "cgst_rate",
            data_type: "Decimal",
            required: true,
            max_length: None,
        },
        FieldSpec {
            category: "Tax Information",
            field_name: "sgst_rate",
            data_type: "Decimal",
            required: true,
            max_length: None,
        },
        FieldSpec {
            category: "Tax Information",
            field_name: "igst_rate",
            data_type: "Decimal",
            required: true,
            max_length: None,
        },
        FieldSpec {
            category: "Terms and Conditions",
            field_name: "payment_terms",
            data_type: "Dropdown",
            required: true,
            max_length: None,
        },
    ]
}

/// `document_field_summary.csv` content.
pub fn render_field_summary() -> String {
    let rows: Vec<Vec<String>> = document_summaries()
        .iter()
        .map(DocumentSummary::cells)
        .collect();
    csv::render(
        &["Category", "Document Type", "Field Count", "Integration Required"],
        &rows,
    )
}

/// `purchase_requisition_fields.csv` content.
pub fn render_purchase_requisition_fields() -> String {
    let rows: Vec<Vec<String>> = purchase_requisition_fields()
        .iter()
        .map(FieldSpec::cells)
        .collect();
    csv::render(&FIELD_SPEC_HEADER, &rows)
}

/// `purchase_order_fields.csv` content.
pub fn render_purchase_order_fields() -> String {
    let rows: Vec<Vec<String>> = purchase_order_fields()
        .iter()
        .map(FieldSpec::cells)
        .collect();
    csv::render(&FIELD_SPEC_HEADER, &rows)
}

#[cfg(test)]
mod tests {
    use super::{
        document_summaries, purchase_order_fields, purchase_requisition_fields,
        render_field_summary, render_purchase_requisition_fields,
    };

    #[test]
    fn field_summary_covers_all_six_document_types() {
        assert_eq!(document_summaries().len(), 6);

        let text = render_field_summary();
        assert!(text.starts_with("Category,Document Type,Field Count,Integration Required\n"));
        assert!(text.contains("GST COMPLIANCE DOCUMENTS,TAX INVOICE,42,Yes\n"));
    }

    // Lengths that do not apply render as N/A, not as zero or empty.
    #[test]
    fn requisition_table_renders_missing_lengths_as_na() {
        let text = render_purchase_requisition_fields();
        assert!(text.contains("Basic Information,requisition_date,Date,True,N/A\n"));
        assert!(text.contains("Approval Workflow,business_justification,Text,True,1000\n"));
    }

    #[test]
    fn field_tables_have_published_row_counts() {
        assert_eq!(purchase_requisition_fields().len(), 13);
        assert_eq!(purchase_order_fields().len(), 14);
    }

    // GSTIN fields are fixed-width 15-character identifiers.
    #[test]
    fn purchase_order_gstin_fields_are_fifteen_chars() {
        let gstin_lengths: Vec<_> = purchase_order_fields()
            .iter()
            .filter(|f| f.field_name.ends_with("_gstin"))
            .map(|f| f.max_length)
            .collect();
        assert_eq!(gstin_lengths, [Some(15), Some(15)]);
    }
}
