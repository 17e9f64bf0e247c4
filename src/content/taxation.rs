// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 taxpack contributors

//! Income-tax regime slabs and document field structures for FY 2025-26.
//!
//! Produces `indian_taxation_document_structure.json`: both personal
//! income-tax regimes with their slab tables, plus the mandatory-field
//! checklists for supply-chain and GST documents.

use serde::Serialize;
use serde_json::{Value, json};

/// One income band of a personal income-tax regime.
#[derive(Debug, Clone, Serialize)]
pub struct TaxSlab {
    /// Income band in Indian digit grouping (e.g. "4,00,001 - 8,00,000").
    pub income_range: &'static str,
    /// Marginal rate for the band.
    pub tax_rate: &'static str,
}

/// Slab table of the new tax regime, the default from FY 2025-26.
pub fn new_regime_slabs() -> Vec<TaxSlab> {
    vec![
        TaxSlab {
            income_range: "0 - 4,00,000",
            tax_rate: "0%",
        },
        TaxSlab {
            income_range: "4,00,001 - 8,00,000",
            tax_rate: "5%",
        },
        TaxSlab {
            income_range: "8,00,001 - 12,00,000",
            tax_rate: "10%",
        },
        TaxSlab {
            income_range: "12,00,001 - 16,00,000",
            tax_rate: "15%",
        },
        TaxSlab {
            income_range: "16,00,001 - 20,00,000",
            tax_rate: "20%",
        },
        TaxSlab {
            income_range: "20,00,001 - 24,00,000",
            tax_rate: "25%",
        },
        TaxSlab {
            income_range: "Above 24,00,000",
            tax_rate: "30%",
        },
    ]
}

/// Slab table of the old tax regime, selectable on opt-in.
pub fn old_regime_slabs() -> Vec<TaxSlab> {
    vec![
        TaxSlab {
            income_range: "0 - 2,50,000",
            tax_rate: "0%",
        },
        TaxSlab {
            income_range: "2,50,001 - 5,00,000",
            tax_rate: "5%",
        },
        TaxSlab {
            income_range: "5,00,001 - 10,00,000",
            tax_rate: "20%",
        },
        TaxSlab {
            income_range: "Above 10,00,000",
            tax_rate: "30%",
        },
    ]
}

fn supply_chain_documents() -> Value {
    json!({
        "PURCHASE_REQUISITION": {
            "mandatory_fields": [
                "requisition_number", "requisition_date", "requestor_name",
                "requestor_department", "item_description", "quantity_requested",
                "estimated_unit_price", "business_justification", "approval_required"
            ]
        },
        "PURCHASE_ORDER": {
            "mandatory_fields": [
                "po_number", "po_date", "supplier_name", "supplier_gstin",
                "item_description", "hsn_sac_code", "quantity", "unit_price",
                "cgst_rate", "sgst_rate", "igst_rate", "total_amount"
            ]
        },
        "GOODS_RECEIPT_NOTE": {
            "mandatory_fields": [
                "grn_number", "grn_date", "po_reference", "supplier_name",
                "received_quantity", "accepted_quantity", "quality_check_status"
            ]
        }
    })
}

fn gst_compliance_documents() -> Value {
    json!({
        "TAX_INVOICE": {
            "mandatory_fields": [
                "invoice_number", "invoice_date", "supplier_gstin", "buyer_gstin",
                "place_of_supply", "hsn_sac_code", "taxable_value", "gst_amount",
                "irn_number", "qr_code"
            ]
        }
    })
}

/// The complete taxation document structure as one JSON value.
pub fn document_structure() -> Value {
    json!({
        "TAX_REGIMES": {
            "NEW_TAX_REGIME_2025": {
                "applicable_from": "FY 2025-26",
                "default_regime": true,
                "tax_slabs": new_regime_slabs(),
            },
            "OLD_TAX_REGIME": {
                "applicable_from": "Optional from FY 2025-26",
                "default_regime": false,
                "tax_slabs": old_regime_slabs(),
            }
        },
        "SUPPLY_CHAIN_DOCUMENTS": supply_chain_documents(),
        "GST_COMPLIANCE_DOCUMENTS": gst_compliance_documents(),
    })
}

/// Pretty-printed `indian_taxation_document_structure.json` content.
pub fn render_document_structure() -> String {
    format!("{:#}", document_structure())
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::{new_regime_slabs, old_regime_slabs, render_document_structure};

    // FY 2025-26 slab counts: seven bands new regime, four bands old.
    #[test]
    fn slab_tables_have_published_band_counts() {
        assert_eq!(new_regime_slabs().len(), 7);
        assert_eq!(old_regime_slabs().len(), 4);
    }

    #[test]
    fn new_regime_ends_at_thirty_percent_above_24_lakh() {
        let slabs = new_regime_slabs();
        let top = slabs.last().unwrap();
        assert_eq!(top.income_range, "Above 24,00,000");
        assert_eq!(top.tax_rate, "30%");
    }

    #[test]
    fn rendered_structure_is_valid_json_with_both_regimes() {
        let text = render_document_structure();
        let value: Value = serde_json::from_str(&text).unwrap();

        assert_eq!(
            value["TAX_REGIMES"]["NEW_TAX_REGIME_2025"]["default_regime"],
            Value::Bool(true)
        );
        assert_eq!(
            value["TAX_REGIMES"]["OLD_TAX_REGIME"]["default_regime"],
            Value::Bool(false)
        );
        assert_eq!(
            value["TAX_REGIMES"]["NEW_TAX_REGIME_2025"]["tax_slabs"]
                .as_array()
                .unwrap()
                .len(),
            7
        );
    }

    // Key order is part of the published document shape.
    #[test]
    fn rendered_structure_keeps_authoring_order() {
        let text = render_document_structure();
        let regimes = text.find("TAX_REGIMES").unwrap();
        let supply = text.find("SUPPLY_CHAIN_DOCUMENTS").unwrap();
        let gst = text.find("GST_COMPLIANCE_DOCUMENTS").unwrap();
        assert!(regimes < supply && supply < gst);
    }

    #[test]
    fn purchase_order_checklist_requires_gst_fields() {
        let text = render_document_structure();
        let value: Value = serde_json::from_str(&text).unwrap();
        let fields = value["SUPPLY_CHAIN_DOCUMENTS"]["PURCHASE_ORDER"]["mandatory_fields"]
            .as_array()
            .unwrap();

        assert_eq!(fields.len(), 12);
        assert!(fields.iter().any(|f| f == "supplier_gstin"));
        assert!(fields.iter().any(|f| f == "igst_rate"));
    }
}
