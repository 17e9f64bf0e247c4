// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 taxpack contributors

//! Banking instruments, due-date tracking, and RBI 2025 compliance tables.
//!
//! Produces `banking_instruments_compliance_structure.json`,
//! `due_date_tracking_matrix.csv`, and `rbi_compliance_checklist.csv`.

use serde_json::{Value, json};

use crate::content::csv;

/// One row of the due-date tracking matrix.
#[derive(Debug, Clone)]
pub struct DueDateRule {
    /// Transaction channel: B2B, B2C, or B2G.
    pub transaction_type: &'static str,
    pub document: &'static str,
    /// Payment or filing terms ("Net 30", "Monthly 20th", …).
    pub standard_terms: &'static str,
    /// Reminder offsets in days counted from period start; the last two
    /// cross the due date (T+0 and the escalation point).
    pub reminder_days: [u8; 4],
    pub penalty_rate: &'static str,
}

impl DueDateRule {
    fn cells(&self) -> Vec<String> {
        let days: Vec<String> = self.reminder_days.iter().map(u8::to_string).collect();
        vec![
            self.transaction_type.to_string(),
            self.document.to_string(),
            self.standard_terms.to_string(),
            format!("[{}]", days.join(", ")),
            self.penalty_rate.to_string(),
        ]
    }
}

/// One row of the RBI compliance checklist.
#[derive(Debug, Clone)]
pub struct ComplianceCheck {
    pub area: &'static str,
    pub requirement: &'static str,
    pub deadline: &'static str,
    pub penalty: &'static str,
    /// Whether the requirement can be verified automatically.
    pub auto_check: bool,
}

impl ComplianceCheck {
    fn cells(&self) -> Vec<String> {
        vec![
            self.area.to_string(),
            self.requirement.to_string(),
            self.deadline.to_string(),
            self.penalty.to_string(),
            if self.auto_check { "Yes" } else { "No" }.to_string(),
        ]
    }
}

/// Due-date rules per transaction channel and document.
pub fn due_date_rules() -> Vec<DueDateRule> {
    vec![
        DueDateRule {
            transaction_type: "B2B",
            document: "Purchase Order",
            standard_terms: "Net 30",
            reminder_days: [25, 28, 30, 37],
            penalty_rate: "Base+2%",
        },
        DueDateRule {
            transaction_type: "B2B",
            document: "Tax Invoice",
            standard_terms: "Net 45",
            reminder_days: [40, 43, 45, 52],
            penalty_rate: "Base+2%",
        },
        DueDateRule {
            transaction_type: "B2B",
            document: "GST Return",
            standard_terms: "Monthly 20th",
            reminder_days: [15, 18, 20, 25],
            penalty_rate: "18% p.a.",
        },
        DueDateRule {
            transaction_type: "B2B",
            document: "TDS Payment",
            standard_terms: "Monthly 7th",
            reminder_days: [2, 5, 7, 10],
            penalty_rate: "1.5% p.m.",
        },
        DueDateRule {
            transaction_type: "B2C",
            document: "EMI Payment",
            standard_terms: "Monthly",
            reminder_days: [25, 28, 30, 35],
            penalty_rate: "24% p.a.",
        },
        DueDateRule {
            transaction_type: "B2C",
            document: "Credit Card",
            standard_terms: "Monthly 15th",
            reminder_days: [10, 13, 15, 20],
            penalty_rate: "36% p.a.",
        },
        DueDateRule {
            transaction_type: "B2G",
            document: "Government Contract",
            standard_terms: "Net 30",
            reminder_days: [25, 28, 30, 37],
            penalty_rate: "Bank Rate+2%",
        },
        DueDateRule {
            transaction_type: "B2G",
            document: "Tax Payment",
            standard_terms: "Quarterly",
            reminder_days: [85, 88, 90, 95],
            penalty_rate: "12% p.a.",
        },
    ]
}

/// RBI 2025 compliance checklist rows.
pub fn compliance_checks() -> Vec<ComplianceCheck> {
    vec![
        ComplianceCheck {
            area: "Payment Aggregator",
            requirement: "RBI Authorization",
            deadline: "Immediate",
            penalty: "Cease Operations",
            auto_check: true,
        },
        ComplianceCheck {
            area: "Digital Lending",
            requirement: "Fair Practice Code",
            deadline: "Ongoing",
            penalty: "Rs.1 crore",
            auto_check: true,
        },
        ComplianceCheck {
            area: "KYC/AML",
            requirement: "Customer Due Diligence",
            deadline: "At Onboarding",
            penalty: "Rs.5 lakh",
            auto_check: true,
        },
        ComplianceCheck {
            area: "Data Protection",
            requirement: "DPDP Act Compliance",
            deadline: "Ongoing",
            penalty: "Rs.500 crore",
            auto_check: true,
        },
        ComplianceCheck {
            area: "Unified Dashboard",
            requirement: "CMS Implementation",
            deadline: "April 30, 2025",
            penalty: "Regulatory Action",
            auto_check: true,
        },
        ComplianceCheck {
            area: "Project Finance",
            requirement: "New Directions 2025",
            deadline: "June 19, 2025",
            penalty: "Asset Classification",
            auto_check: true,
        },
    ]
}

/// Payment instruments and limits per channel, plus RBI aggregator norms.
pub fn instruments_structure() -> Value {
    json!({
        "BUSINESS_TRANSACTION_TYPES": {
            "B2B_BUSINESS_TO_BUSINESS": {
                "payment_instruments": [
                    "UPI B2B", "RTGS", "NEFT", "IMPS", "Commercial Cards",
                    "Bank Guarantees", "Letters of Credit"
                ],
                "transaction_limits": {
                    "UPI_B2B": "Rs. 1 crore per transaction",
                    "RTGS": "Minimum Rs. 2 lakh",
                    "NEFT": "Up to Rs. 50 lakh per transaction"
                }
            },
            "B2C_BUSINESS_TO_CONSUMER": {
                "payment_instruments": [
                    "UPI", "Cards", "Net Banking", "Mobile Wallets", "BNPL"
                ],
                "transaction_limits": {
                    "UPI": "Rs. 1 lakh per transaction",
                    "Mobile_Wallets": "Rs. 2 lakh per month"
                }
            },
            "B2G_BUSINESS_TO_GOVERNMENT": {
                "payment_instruments": [
                    "RTGS", "e-Kuber", "GeM Payments", "Challan Payments"
                ]
            }
        },
        "RBI_COMPLIANCE_2025": {
            "payment_aggregator_norms": {
                "minimum_net_worth": "Rs. 15 crore",
                "authorization_required": true,
                "escrow_account_mandatory": true
            }
        }
    })
}

/// Pretty-printed `banking_instruments_compliance_structure.json` content.
pub fn render_instruments_structure() -> String {
    format!("{:#}", instruments_structure())
}

/// `due_date_tracking_matrix.csv` content.
pub fn render_due_date_matrix() -> String {
    let rows: Vec<Vec<String>> = due_date_rules().iter().map(DueDateRule::cells).collect();
    csv::render(
        &[
            "Transaction_Type",
            "Document",
            "Standard_Terms",
            "Reminder_Days",
            "Penalty_Rate",
        ],
        &rows,
    )
}

/// `rbi_compliance_checklist.csv` content.
pub fn render_rbi_checklist() -> String {
    let rows: Vec<Vec<String>> = compliance_checks()
        .iter()
        .map(ComplianceCheck::cells)
        .collect();
    csv::render(
        &[
            "Compliance_Area",
            "Requirement",
            "Deadline",
            "Penalty",
            "Auto_Check",
        ],
        &rows,
    )
}
