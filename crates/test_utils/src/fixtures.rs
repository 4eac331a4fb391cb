//! Pre-built Test Fixtures
//!
//! Ready-to-use backend payloads for common scenarios, consistent and
//! predictable across the test suite.

use serde_json::{json, Value};

use crate::builders::{ClaimPayloadBuilder, DetailPayloadBuilder};

/// Payloads for the claims list endpoint.
pub struct ListFixtures;

impl ListFixtures {
    /// The canonical pending claim row used by the end-to-end scenarios.
    pub fn pending_claim() -> Value {
        ClaimPayloadBuilder::new()
            .with_id("C1")
            .with_document_number("TSR-001")
            .with_requestor("Jane")
            .with_purpose("Travel")
            .with_amount(json!(120.5))
            .with_status("Pending Verification")
            .with_submitted_date("2024-01-05")
            .build()
    }

    /// A list wrapped in the `claims` envelope.
    pub fn wrapped_pending_list() -> Value {
        json!({ "claims": [Self::pending_claim()] })
    }

    /// The same list as a bare array.
    pub fn bare_pending_list() -> Value {
        json!([Self::pending_claim()])
    }

    /// A mixed-status list exercising every badge tone.
    pub fn mixed_status_list() -> Value {
        json!([
            ClaimPayloadBuilder::new().with_id("C1").with_status("Pending Verification").build(),
            ClaimPayloadBuilder::new()
                .with_id("C2")
                .with_document_number("TSR-002")
                .with_status("Approved")
                .build(),
            ClaimPayloadBuilder::new()
                .with_id("C3")
                .with_document_number("TSR-003")
                .with_status("Rejected")
                .build(),
            ClaimPayloadBuilder::new()
                .with_id("C4")
                .with_document_number("TSR-004")
                .with_status("Processed")
                .build(),
        ])
    }
}

/// Payloads for the claim detail endpoint.
pub struct DetailFixtures;

impl DetailFixtures {
    /// A fully-populated travel claim in Pending Verification.
    pub fn pending_travel_claim() -> Value {
        DetailPayloadBuilder::new()
            .with_id("C1")
            .with_document_number("TSR-001")
            .with_status("Pending Verification")
            .with_requestor_name("Jane Lim")
            .with_header_details(json!({
                "documentType": "TSR",
                "documentNumber": "TSR-001",
                "claimForMonthOf": "2024-01-01",
                "staffName": "Jane Lim",
                "staffNo": "E1042",
                "gred": "G7",
                "departmentCode": "FIN",
                "location": "HQ",
            }))
            .with_bank_details(json!({
                "bankName": "First National",
                "accountNumber": "002-118-44",
                "purposeOfClaim": "Quarterly site visit",
            }))
            .with_expense_item(json!({
                "date": "2024-01-03",
                "claimOrTravelDetails": {"from": "HQ", "to": "Site B", "placeOfStay": "Hotel Indah"},
                "officialMileageKM": 150,
                "transport": 42.0,
                "hotelAccommodationAllowance": 180.0,
                "outStationAllowanceMeal": 35.5,
                "miscellaneousAllowance10Percent": 25.75,
                "otherExpenses": 0,
            }))
            .with_fx_rate(json!({
                "date": "2024-01-03",
                "typeOfCurrency": "EUR",
                "sellingRateTTOD": 4.2,
            }))
            .with_financial_summary(json!({
                "totalAdvanceClaimAmount": 433.25,
                "lessAdvanceTaken": 200,
                "lessCorporateCreditCardPayment": 0,
                "balanceClaimRepayment": 233.25,
                "chequeReceiptNo": "RCP-88",
            }))
            .with_declaration(json!({"iDeclare": true, "date": "2024-01-05"}))
            .build()
    }

    /// An approved (terminal) claim.
    pub fn approved_claim() -> Value {
        DetailPayloadBuilder::new()
            .with_id("C2")
            .with_document_number("TSR-002")
            .with_status("Approved")
            .build()
    }

    /// A medical claim with family member flags set.
    pub fn family_medical_claim() -> Value {
        DetailPayloadBuilder::new()
            .with_id("C5")
            .with_document_number("TSR-005")
            .with_status("Pending Approval")
            .with_medical_claim_details(json!({
                "isMedicalClaim": true,
                "applicableMedicalType": "Outpatient",
                "isForFamily": true,
                "familyMemberSpouse": true,
                "familyMemberChildren": false,
                "familyMemberOther": "Parent",
            }))
            .build()
    }
}

/// Payloads for the cancel endpoint.
pub struct CancelFixtures;

impl CancelFixtures {
    /// A successful cancellation of the pending travel claim.
    pub fn cancelled_response() -> Value {
        DetailPayloadBuilder::new()
            .with_id("C1")
            .with_document_number("TSR-001")
            .with_status("Cancelled")
            .with_requestor_name("Jane Lim")
            .build_cancel_response()
    }

    /// The rejection body the backend sends for an already-settled claim.
    pub fn already_processed_error() -> Value {
        json!({ "error": "Already processed" })
    }
}
