// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 taxpack contributors

//! The published documentation set: system overview, implementation guide,
//! API notes, and the master configuration document.
//!
//! The markdown documents are carried verbatim as they were published,
//! including hard line breaks (trailing double spaces), so regenerated
//! files are byte-identical with the originals.

use serde_json::{Value, json};

/// `COMPREHENSIVE_SYSTEM_DOCUMENTATION.md` content.
pub fn render_system_documentation() -> String {
    SYSTEM_DOCUMENTATION.to_string()
}

/// `IMPLEMENTATION_GUIDE.md` content.
pub fn render_implementation_guide() -> String {
    IMPLEMENTATION_GUIDE.to_string()
}

/// `API_DOCUMENTATION.md` content.
pub fn render_api_documentation() -> String {
    API_DOCUMENTATION.to_string()
}

/// The master configuration document as one JSON value.
pub fn master_config() -> Value {
    json!({
        "system_info": {
            "name": "Complete Indian Taxation & Business Compliance System",
            "version": "2.0",
            "created_date": "2025-09-19",
            "compliance_framework": ["GST", "TDS", "RBI 2025", "E-Way Bill 2.0", "New Tax Regime"],
            "supported_transactions": ["B2B", "B2C", "B2G"]
        },
        "document_types": {
            "supply_chain": ["Purchase Requisition", "Purchase Order", "Goods Receipt Note"],
            "gst_compliance": ["Tax Invoice", "Advance Receipt Voucher", "Credit/Debit Note"],
            "banking": ["Payment Instructions", "Bank Guarantees", "Letters of Credit"]
        },
        "integration_points": {
            "government_portals": [
                "GST Portal", "E-Invoice Portal", "E-Way Bill Portal", "Income Tax Portal"
            ],
            "banking_systems": ["UPI", "RTGS", "NEFT", "IMPS", "Cards"],
            "erp_systems": ["SAP", "Oracle", "Tally", "QuickBooks"]
        },
        "compliance_features": {
            "automated_tracking": true,
            "due_date_monitoring": true,
            "penalty_calculation": true,
            "regulatory_updates": true,
            "audit_trail": true
        }
    })
}

/// Pretty-printed `MASTER_CONFIG.json` content.
pub fn render_master_config() -> String {
    format!("{:#}", master_config())
}

const SYSTEM_DOCUMENTATION: &str = r#"
# COMPLETE INDIAN TAXATION & BUSINESS COMPLIANCE SYSTEM
## Comprehensive Document Structure & Field Guide

**Created Date:** September 19, 2025  
**Version:** 2.0  
**Compliance Framework:** GST, TDS, RBI 2025 Guidelines, E-Way Bill 2.0, New Tax Regime

---

## SYSTEM OVERVIEW

This comprehensive system covers:
1. **Supply Chain Documents** - Purchase Requisition, Purchase Order, GRN
2. **GST Compliance Documents** - Tax Invoice, E-Invoice, Advance Receipts
3. **Banking & Financial Instruments** - B2B, B2C, B2G payment systems
4. **Tax Regime Integration** - New Tax Regime (2025) and Old Tax Regime
5. **RBI Compliance Framework** - Payment Aggregator Guidelines, Due Date Tracking
6. **Automated Update System** - One-click regulatory compliance updates

---

## TAX REGIME STRUCTURE (FY 2025-26)

### NEW TAX REGIME (DEFAULT)
- ₹0 - ₹4,00,000: 0%
- ₹4,00,001 - ₹8,00,000: 5%
- ₹8,00,001 - ₹12,00,000: 10%
- ₹12,00,001 - ₹16,00,000: 15%
- ₹16,00,001 - ₹20,00,000: 20%
- ₹20,00,001 - ₹24,00,000: 25%
- Above ₹24,00,000: 30%
- **Basic Exemption:** ₹4 lakh
- **Rebate Limit:** ₹12 lakh

### OLD TAX REGIME (OPTIONAL)
- ₹0 - ₹2,50,000: 0%
- ₹2,50,001 - ₹5,00,000: 5%
- ₹5,00,001 - ₹10,00,000: 20%
- Above ₹10,00,000: 30%
- **All Deductions Available:** 80C, 80D, 80G, HRA, etc.

---

## DOCUMENT FIELD STRUCTURE SUMMARY

### PURCHASE REQUISITION (29 Fields)
**Categories:**
- Basic Information (4 fields)
- Requestor Information (6 fields) 
- Item Details (7 fields)
- Financial Information (5 fields)
- Vendor Information (3 fields)
- Approval Workflow (4 fields)

### PURCHASE ORDER (61 Fields)  
**Categories:**
- Document Header (5 fields)
- Buyer Information (10 fields)
- Supplier Information (10 fields)
- Delivery Information (6 fields)
- Item Details (8 fields)
- Tax Information (12 fields)
- Terms and Conditions (6 fields)
- Authorization (4 fields)

### GST TAX INVOICE (42 Fields)
**Essential Elements:**
- Supplier Details with GSTIN
- Recipient Details with GSTIN  
- HSN/SAC Codes
- Tax Breakup (CGST/SGST/IGST)
- E-Invoice Integration (IRN, QR Code)
- E-Way Bill Integration

---

## BANKING INSTRUMENTS & RBI COMPLIANCE

### B2B (BUSINESS TO BUSINESS)
**Payment Instruments:**
- UPI B2B (₹1 crore limit)
- RTGS (₹2 lakh minimum)
- NEFT (₹50 lakh limit)
- Commercial Cards
- Bank Guarantees
- Letters of Credit

### B2C (BUSINESS TO CONSUMER)  
**Payment Instruments:**
- UPI (₹1 lakh limit)
- Debit/Credit Cards
- Net Banking
- Mobile Wallets
- BNPL (Buy Now Pay Later)

### B2G (BUSINESS TO GOVERNMENT)
**Payment Instruments:**
- e-Kuber (RBI System)
- GeM Portal Payments
- RTGS through Authorized Banks
- Challan Payments

---

## RBI COMPLIANCE 2025 UPDATES

### PAYMENT AGGREGATOR GUIDELINES
- **Minimum Net Worth:** ₹15 crore (scaling to ₹25 crore)
- **Enhanced KYC/AML**
- **Escrow Account Mandatory**
- **T+1 Settlement Timeline**

### UNIFIED COMPLIANCE DASHBOARD
- **Implementation Deadline:** April 30, 2025
- **Real-time Monitoring**
- **DAKSH Portal Integration**
- **Automated Workflow Management**

---

## DUE DATE TRACKING SYSTEM

### AUTOMATED REMINDERS
- **First Alert:** T-5 days before due date
- **Second Alert:** T-1 day before due date  
- **Overdue Notice:** T+1 day after due date
- **Escalation:** T+7 days after due date

### PENALTY CALCULATIONS
- **B2B Transactions:** Base Rate + 2%
- **GST Returns:** 18% p.a. penalty
- **TDS Payments:** 1.5% per month
- **Government Contracts:** Bank Rate + 2%

---

## AUTO-UPDATE SYSTEM

### REGULATORY MONITORING
**Sources:**
- RBI Master Directions Portal
- GST Council Notifications  
- NPCI Circulars
- SEBI/IRDAI Guidelines
- Ministry of Finance Updates

### UPDATE MECHANISM
- **Frequency:** Real-time monitoring with hourly sync
- **Notification:** Instant alerts to compliance teams
- **Implementation:** Automated workflow for updates
- **Testing:** Sandbox environment for validation

---

## INTEGRATION ARCHITECTURE

### GOVERNMENT PORTALS
- GST Portal (gst.gov.in)
- E-Invoice Portal (einvoice1.gst.gov.in)
- E-Way Bill Portal 1.0 & 2.0
- Income Tax Portal
- TDS Portal

### ERP SYSTEMS  
- SAP Integration
- Oracle Connectivity
- Tally Synchronization
- QuickBooks Integration
- Custom API Development

---

## COMPLIANCE CHECKLIST

### MANDATORY REQUIREMENTS
✓ GST Registration and Returns Filing
✓ TDS Deduction and Payments  
✓ E-Invoice Generation (for applicable businesses)
✓ E-Way Bill Creation (for goods movement)
✓ RBI Payment Aggregator Authorization
✓ Digital Signature for Government Transactions
✓ Data Privacy (DPDP Act 2023) Compliance

### OPTIONAL ENHANCEMENTS
○ Advanced Analytics Dashboard
○ AI-powered Compliance Monitoring  
○ Blockchain-based Audit Trail
○ Multi-language Support
○ Mobile Application Interface

---

## IMPLEMENTATION TIMELINE

### PHASE 1 (Immediate)
- Basic Document Structure Implementation
- GST Compliance Integration
- Due Date Tracking System

### PHASE 2 (3 Months)
- Banking Instruments Integration
- RBI Compliance Framework
- Auto-Update System

### PHASE 3 (6 Months)  
- Advanced Analytics
- AI-powered Monitoring
- Complete Automation

---

## SUPPORT & MAINTENANCE

### REGULAR UPDATES
- Quarterly system updates
- Annual compliance review
- Real-time regulatory monitoring

### TECHNICAL SUPPORT
- 24/7 helpdesk support
- Online documentation
- Training and onboarding
- Custom development support

---

**END OF DOCUMENTATION**

For detailed field structures, refer to the accompanying CSV and JSON files in this package.
"#;

const IMPLEMENTATION_GUIDE: &str = r#"
# IMPLEMENTATION GUIDE
## Step-by-Step Setup Instructions

### STEP 1: SYSTEM SETUP
1. Import all CSV files into your database
2. Configure field validations as per JSON specifications
3. Set up master data (States, HSN/SAC codes, Vendors)
4. Configure user roles and permissions

### STEP 2: GST INTEGRATION  
1. Obtain GST API credentials from GST portal
2. Configure E-Invoice API integration
3. Set up E-Way Bill portal connectivity (both 1.0 and 2.0)
4. Test invoice generation and validation

### STEP 3: BANKING INTEGRATION
1. Set up bank API connections
2. Configure payment gateway integrations  
3. Implement UPI, RTGS, NEFT connectivity
4. Set up reconciliation processes

### STEP 4: COMPLIANCE SETUP
1. Configure TDS calculation engine
2. Set up automated reminder system
3. Implement due date tracking
4. Configure penalty calculations

### STEP 5: AUTO-UPDATE SYSTEM
1. Set up regulatory monitoring APIs
2. Configure notification systems
3. Implement version control
4. Set up testing environment

### STEP 6: TESTING & GO-LIVE
1. Conduct end-to-end testing
2. User acceptance testing
3. Data migration (if applicable)  
4. Go-live support

### STEP 7: MAINTENANCE
1. Regular system updates
2. Compliance monitoring
3. Performance optimization
4. User training and support
"#;

const API_DOCUMENTATION: &str = r#"
# API INTEGRATION DOCUMENTATION

## GST PORTAL APIs
```
Base URL: https://api.gst.gov.in/
Authentication: Bearer Token
Key Endpoints:
- /taxpayer/search - GSTIN Verification
- /returns/gstr1 - GSTR-1 Filing
- /invoice/irn - E-Invoice Generation
```

## E-WAY BILL APIs  
```
Base URL: https://ewaybillapi.nic.in/
Authentication: Bearer Token
Key Endpoints:
- /ewayapi/v1.03/ewayapi - Generate E-Way Bill
- /ewayapi/v1.03/consignment - Consolidated E-Way Bill
- /ewayapi/v1.03/updatetransporter - Update Transporter
```

## RBI APIs
```
Base URL: https://api.rbi.org.in/
Authentication: API Key
Key Endpoints:
- /rtgs/payment - RTGS Payment
- /neft/payment - NEFT Payment  
- /upi/payment - UPI Payment
```

## BANKING APIs
```
Various bank-specific APIs for:
- Account balance inquiry
- Transaction history
- Payment processing
- Statement download
```
"#;
