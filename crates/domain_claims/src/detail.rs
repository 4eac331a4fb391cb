//! Claim detail record and its nested groups
//!
//! Every nested group defaults to an empty structure when the payload
//! omits it, so display logic treats "missing" uniformly as "field absent"
//! rather than as an error.

use serde_json::{Map, Value};

use core_kernel::{fields, LenientDate, LenientNumber};

/// Fixed attestation text shown under the declaration section.
pub const DECLARATION_STATEMENT: &str = "I hereby declare that all of the information provided \
in the Claim Form, as well as all of the information contained in the supporting documents and \
materials are true and complete. I understand that any false, fraudulent, or incomplete \
information on this Claim Form and the related supporting documents may serve as grounds for \
disciplinary action.";

/// Full claim record backing the detail view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClaimDetail {
    pub id: String,
    pub document_number: Option<String>,
    pub status: String,
    /// Claimant display name, used as the cancel actor
    pub requestor_name: Option<String>,
    pub header_details: HeaderDetails,
    pub bank_details: BankDetails,
    pub medical_claim_details: MedicalClaimDetails,
    pub expense_items: Vec<ExpenseItem>,
    pub fx_rates: Vec<FxRateEntry>,
    pub financial_summary: FinancialSummary,
    pub declaration: Declaration,
}

/// Staff and department identification fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeaderDetails {
    pub document_type: Option<String>,
    pub document_number: Option<String>,
    pub claim_for_month_of: LenientDate,
    pub staff_name: Option<String>,
    pub staff_no: Option<String>,
    pub grade: Option<String>,
    pub staff_type: Option<String>,
    pub executive_status: Option<String>,
    pub department_code: Option<String>,
    pub dept_cost_center_code: Option<String>,
    pub location: Option<String>,
    pub tel_ext: Option<String>,
    pub start_time_from_home: Option<String>,
    pub time_of_arrival_at_home: Option<String>,
}

/// Payout account details.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BankDetails {
    pub bank_name: Option<String>,
    pub account_number: Option<String>,
    pub purpose_of_claim: Option<String>,
}

/// Medical claim sub-record; the section renders only when
/// `is_medical_claim` is set, family rows only when `is_for_family` is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MedicalClaimDetails {
    pub is_medical_claim: bool,
    pub applicable_medical_type: Option<String>,
    pub is_for_family: bool,
    pub family_member_spouse: bool,
    pub family_member_children: bool,
    pub family_member_other: Option<String>,
}

/// Travel descriptor on an expense line: either a structured route or a
/// free-text note, depending on how the claim was captured.
#[derive(Debug, Clone, PartialEq)]
pub enum TravelDetails {
    Route {
        from: Option<String>,
        to: Option<String>,
        place_of_stay: Option<String>,
    },
    Freeform(String),
}

impl TravelDetails {
    fn from_value(value: Option<&Value>) -> Option<Self> {
        match value {
            Some(Value::Object(obj)) => Some(TravelDetails::Route {
                from: fields::opt_string(obj, &["from"]),
                to: fields::opt_string(obj, &["to"]),
                place_of_stay: fields::opt_string(obj, &["place_of_stay", "placeOfStay"]),
            }),
            Some(Value::String(s)) => Some(TravelDetails::Freeform(s.clone())),
            _ => None,
        }
    }

    /// Renders the descriptor as a single line; route parts are joined
    /// with " - " in from/to/stay order.
    pub fn display(&self) -> String {
        match self {
            TravelDetails::Route {
                from,
                to,
                place_of_stay,
            } => [from, to, place_of_stay]
                .into_iter()
                .filter_map(|part| part.as_deref())
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join(" - "),
            TravelDetails::Freeform(s) => s.clone(),
        }
    }
}

/// One expense line entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseItem {
    pub date: LenientDate,
    pub travel: Option<TravelDetails>,
    pub official_mileage_km: LenientNumber,
    pub transport: LenientNumber,
    pub hotel_accommodation: LenientNumber,
    pub meal_allowance: LenientNumber,
    /// The fixed 10% miscellaneous allowance
    pub miscellaneous_allowance: LenientNumber,
    pub other_expenses: LenientNumber,
}

impl ExpenseItem {
    fn from_object(obj: &Map<String, Value>) -> Self {
        Self {
            date: fields::date(obj, &["date"]),
            travel: TravelDetails::from_value(fields::pick(
                obj,
                &["claim_or_travel_details", "claimOrTravelDetails"],
            )),
            official_mileage_km: fields::number(obj, &["official_mileage_km", "officialMileageKM"]),
            transport: fields::number(obj, &["transport"]),
            hotel_accommodation: fields::number(
                obj,
                &["hotel_accommodation_allowance", "hotelAccommodationAllowance"],
            ),
            meal_allowance: fields::number(
                obj,
                &["out_station_allowance_meal", "outStationAllowanceMeal"],
            ),
            miscellaneous_allowance: fields::number(
                obj,
                &[
                    "miscellaneous_allowance_10_percent",
                    "miscellaneousAllowance10Percent",
                ],
            ),
            other_expenses: fields::number(obj, &["other_expenses", "otherExpenses"]),
        }
    }
}

/// One foreign exchange rate disclosure row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FxRateEntry {
    pub date: LenientDate,
    pub currency: Option<String>,
    /// Selling rate (TT/OD), rendered with 4 decimals
    pub selling_rate: LenientNumber,
}

impl FxRateEntry {
    fn from_object(obj: &Map<String, Value>) -> Self {
        Self {
            date: fields::date(obj, &["date"]),
            currency: fields::opt_string(obj, &["type_of_currency", "typeOfCurrency"]),
            selling_rate: fields::number(obj, &["selling_rate_tt_od", "sellingRateTTOD"]),
        }
    }
}

/// Aggregate totals for the claim.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FinancialSummary {
    pub total_advance_claim_amount: LenientNumber,
    pub less_advance_taken: LenientNumber,
    pub less_corporate_credit_card_payment: LenientNumber,
    pub balance_claim_repayment: LenientNumber,
    pub cheque_receipt_no: Option<String>,
}

/// Claimant attestation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Declaration {
    pub declared: bool,
    pub date: LenientDate,
}

impl ClaimDetail {
    /// Normalizes a single claim-detail object. Missing nested groups
    /// become empty defaults; this never fails.
    pub fn from_object(obj: &Map<String, Value>) -> Self {
        let header = fields::group(obj, &["header_details", "headerDetails"]);
        let bank = fields::group(obj, &["bank_details", "bankDetails"]);
        let medical = fields::group(obj, &["medical_claim_details", "medicalClaimDetails"]);
        let financial = fields::group(obj, &["financial_summary", "financialSummary"]);
        let declaration = fields::group(obj, &["declaration"]);

        Self {
            id: fields::opt_string(obj, &["id"]).unwrap_or_default(),
            document_number: fields::opt_string(obj, &["document_number", "documentNumber"]),
            status: fields::string_or(obj, &["status"], ""),
            requestor_name: fields::opt_string(obj, &["requestor_name", "requestorName"]),
            header_details: header.map(HeaderDetails::from_object).unwrap_or_default(),
            bank_details: bank.map(BankDetails::from_object).unwrap_or_default(),
            medical_claim_details: medical
                .map(MedicalClaimDetails::from_object)
                .unwrap_or_default(),
            expense_items: fields::items(obj, &["expense_items", "expenseItems"])
                .iter()
                .filter_map(Value::as_object)
                .map(ExpenseItem::from_object)
                .collect(),
            fx_rates: fields::items(
                obj,
                &[
                    "information_on_foreign_exchange_rate",
                    "informationOnForeignExchangeRate",
                ],
            )
            .iter()
            .filter_map(Value::as_object)
            .map(FxRateEntry::from_object)
            .collect(),
            financial_summary: financial
                .map(FinancialSummary::from_object)
                .unwrap_or_default(),
            declaration: declaration.map(Declaration::from_object).unwrap_or_default(),
        }
    }

    /// The identifier shown to users, document number over raw id.
    pub fn display_id(&self) -> &str {
        self.document_number
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.id)
    }
}

impl HeaderDetails {
    fn from_object(obj: &Map<String, Value>) -> Self {
        Self {
            document_type: fields::opt_string(obj, &["document_type", "documentType"]),
            document_number: fields::opt_string(obj, &["document_number", "documentNumber"]),
            claim_for_month_of: fields::date(obj, &["claim_for_month_of", "claimForMonthOf"]),
            staff_name: fields::opt_string(obj, &["staff_name", "staffName"]),
            staff_no: fields::opt_string(obj, &["staff_no", "staffNo"]),
            grade: fields::opt_string(obj, &["gred", "grade"]),
            staff_type: fields::opt_string(obj, &["staff_type", "staffType"]),
            executive_status: fields::opt_string(obj, &["executive_status", "executiveStatus"]),
            department_code: fields::opt_string(obj, &["department_code", "departmentCode"]),
            dept_cost_center_code: fields::opt_string(
                obj,
                &["dept_cost_center_code", "deptCostCenterCode"],
            ),
            location: fields::opt_string(obj, &["location"]),
            tel_ext: fields::opt_string(obj, &["tel_ext", "telExt"]),
            start_time_from_home: fields::opt_string(
                obj,
                &["start_time_from_home", "startTimeFromHome"],
            ),
            time_of_arrival_at_home: fields::opt_string(
                obj,
                &["time_of_arrival_at_home", "timeOfArrivalAtHome"],
            ),
        }
    }
}

impl BankDetails {
    fn from_object(obj: &Map<String, Value>) -> Self {
        Self {
            bank_name: fields::opt_string(obj, &["bank_name", "bankName"]),
            account_number: fields::opt_string(obj, &["account_number", "accountNumber"]),
            purpose_of_claim: fields::opt_string(obj, &["purpose_of_claim", "purposeOfClaim"]),
        }
    }
}

impl MedicalClaimDetails {
    fn from_object(obj: &Map<String, Value>) -> Self {
        Self {
            is_medical_claim: fields::flag(obj, &["is_medical_claim", "isMedicalClaim"]),
            applicable_medical_type: fields::opt_string(
                obj,
                &["applicable_medical_type", "applicableMedicalType"],
            ),
            is_for_family: fields::flag(obj, &["is_for_family", "isForFamily"]),
            family_member_spouse: fields::flag(obj, &["family_member_spouse", "familyMemberSpouse"]),
            family_member_children: fields::flag(
                obj,
                &["family_member_children", "familyMemberChildren"],
            ),
            family_member_other: fields::opt_string(
                obj,
                &["family_member_other", "familyMemberOther"],
            ),
        }
    }
}

impl FinancialSummary {
    fn from_object(obj: &Map<String, Value>) -> Self {
        Self {
            total_advance_claim_amount: fields::number(
                obj,
                &["total_advance_claim_amount", "totalAdvanceClaimAmount"],
            ),
            less_advance_taken: fields::number(obj, &["less_advance_taken", "lessAdvanceTaken"]),
            less_corporate_credit_card_payment: fields::number(
                obj,
                &[
                    "less_corporate_credit_card_payment",
                    "lessCorporateCreditCardPayment",
                ],
            ),
            balance_claim_repayment: fields::number(
                obj,
                &["balance_claim_repayment", "balanceClaimRepayment"],
            ),
            cheque_receipt_no: fields::opt_string(obj, &["cheque_receipt_no", "chequeReceiptNo"]),
        }
    }
}

impl Declaration {
    fn from_object(obj: &Map<String, Value>) -> Self {
        Self {
            declared: fields::flag(obj, &["i_declare", "iDeclare"]),
            date: fields::date(obj, &["date"]),
        }
    }
}
