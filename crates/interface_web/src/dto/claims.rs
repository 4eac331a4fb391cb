//! Claims view models

use serde::Serialize;

use core_kernel::numeric::{FX_RATE_PRECISION, MILEAGE_PRECISION, MONEY_PRECISION};
use core_kernel::DateStyle;
use domain_claims::{
    badge_label, BadgeTone, ClaimActions, ClaimDetail, ClaimFilter, ClaimSummary, ExpenseItem,
    FxRateEntry, TravelDetails, DECLARATION_STATEMENT,
};

/// Status options offered by the list filter bar.
pub const STATUS_FILTER_OPTIONS: [&str; 4] =
    ["ALL", "Pending Verification", "Approved", "Rejected"];

/// Type options offered by the list filter bar. The documented backend
/// contract never populates a claim type, so these narrow to nothing
/// until it does.
pub const TYPE_FILTER_OPTIONS: [&str; 4] = ["ALL", "Travel", "Accommodation", "Other"];

/// One row of the claims list.
#[derive(Debug, Serialize)]
pub struct ClaimRowView {
    /// Raw backend id, used to build the detail route
    pub id: String,
    /// Document number when assigned, else the raw id
    pub display_id: String,
    pub purpose: String,
    /// "USD 120.50"
    pub amount: String,
    pub status: String,
    pub badge: BadgeTone,
    /// "05 Jan 2024", or "-" when the claim has no submitted date
    pub submitted_date: String,
    pub actions: ClaimActions,
}

impl ClaimRowView {
    pub fn from_summary(claim: &ClaimSummary) -> Self {
        Self {
            id: claim.id.clone(),
            display_id: claim.display_id().to_string(),
            purpose: claim.purpose.clone(),
            amount: format!("USD {}", claim.amount.display_money()),
            status: badge_label(&claim.status),
            badge: BadgeTone::for_status(&claim.status),
            submitted_date: claim.submitted_date.display_or(DateStyle::DayMonthYear, "-"),
            actions: ClaimActions::for_status(&claim.status),
        }
    }
}

/// Echo of the filter the list was rendered with.
#[derive(Debug, Serialize)]
pub struct FilterView {
    pub search: String,
    pub status: String,
    #[serde(rename = "type")]
    pub claim_type: String,
}

/// The claims list page.
#[derive(Debug, Serialize)]
pub struct ClaimsListView {
    pub claims: Vec<ClaimRowView>,
    pub total: usize,
    pub filter: FilterView,
    pub status_options: Vec<&'static str>,
    pub type_options: Vec<&'static str>,
}

impl ClaimsListView {
    /// Projects the filtered summaries into the list page view.
    pub fn build(claims: &[ClaimSummary], filter: &ClaimFilter) -> Self {
        let rows: Vec<ClaimRowView> = filter
            .apply(claims)
            .into_iter()
            .map(ClaimRowView::from_summary)
            .collect();
        Self {
            total: rows.len(),
            claims: rows,
            filter: FilterView {
                search: filter.search.clone(),
                status: filter.status.clone(),
                claim_type: filter.claim_type.clone(),
            },
            status_options: STATUS_FILTER_OPTIONS.to_vec(),
            type_options: TYPE_FILTER_OPTIONS.to_vec(),
        }
    }
}

/// Claim header information section.
#[derive(Debug, Serialize)]
pub struct HeaderSectionView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_number: Option<String>,
    /// "January 2024", "N/A" when absent
    pub claim_for_month_of: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executive_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dept_cost_center_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tel_ext: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time_from_home: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_of_arrival_at_home: Option<String>,
}

/// Bank details section.
#[derive(Debug, Serialize)]
pub struct BankSectionView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose_of_claim: Option<String>,
}

/// Family-member rows, present only when the claim is for family.
#[derive(Debug, Serialize)]
pub struct FamilySectionView {
    /// "Yes" / "No"
    pub for_spouse: String,
    /// "Yes" / "No"
    pub for_children: String,
    /// Free text, "No" when empty
    pub for_other: String,
}

/// Medical claim section, present only when the claim is medical-type.
#[derive(Debug, Serialize)]
pub struct MedicalSectionView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_claim_type: Option<String>,
    /// "Yes" / "No"
    pub is_for_family: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<FamilySectionView>,
}

/// One expense line, fully formatted.
#[derive(Debug, Serialize)]
pub struct ExpenseRowView {
    /// "03 Jan 2024", "N/A" when absent
    pub date: String,
    /// Travel route or free text; empty when the line carries neither
    pub details: String,
    /// Whole kilometres
    pub mileage: String,
    pub transport: String,
    pub hotel_accommodation: String,
    pub meals: String,
    /// The fixed 10% miscellaneous allowance
    pub miscellaneous: String,
    pub other_expenses: String,
}

impl ExpenseRowView {
    fn from_item(item: &ExpenseItem) -> Self {
        Self {
            date: item.date.display(DateStyle::DayMonthYear),
            details: item
                .travel
                .as_ref()
                .map(TravelDetails::display)
                .unwrap_or_default(),
            mileage: item.official_mileage_km.display(MILEAGE_PRECISION),
            transport: item.transport.display(MONEY_PRECISION),
            hotel_accommodation: item.hotel_accommodation.display(MONEY_PRECISION),
            meals: item.meal_allowance.display(MONEY_PRECISION),
            miscellaneous: item.miscellaneous_allowance.display(MONEY_PRECISION),
            other_expenses: item.other_expenses.display(MONEY_PRECISION),
        }
    }
}

/// One foreign exchange rate row.
#[derive(Debug, Serialize)]
pub struct FxRateRowView {
    pub date: String,
    pub currency: String,
    /// Selling rate (TT/OD), four decimals
    pub selling_rate: String,
}

impl FxRateRowView {
    fn from_entry(entry: &FxRateEntry) -> Self {
        Self {
            date: entry.date.display(DateStyle::DayMonthYear),
            currency: entry.currency.clone().unwrap_or_default(),
            selling_rate: entry.selling_rate.display(FX_RATE_PRECISION),
        }
    }
}

/// Financial summary section, all amounts "USD x.xx".
#[derive(Debug, Serialize)]
pub struct FinancialSectionView {
    pub total_advance_claim_amount: String,
    pub less_advance_taken: String,
    pub less_corporate_credit_card_payment: String,
    pub balance_claim_repayment: String,
    pub cheque_receipt_no: String,
}

/// Declaration section.
#[derive(Debug, Serialize)]
pub struct DeclarationSectionView {
    /// "Declared" / "Not Declared"
    pub status: String,
    /// Long-form date, "N/A" when absent
    pub date: String,
    pub statement: &'static str,
}

/// The claim detail page.
#[derive(Debug, Serialize)]
pub struct ClaimDetailView {
    pub id: String,
    pub display_id: String,
    pub status: String,
    pub badge: BadgeTone,
    pub actions: ClaimActions,
    pub header_details: HeaderSectionView,
    pub bank_details: BankSectionView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_claim_details: Option<MedicalSectionView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expense_items: Vec<ExpenseRowView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fx_rates: Vec<FxRateRowView>,
    pub financial_summary: FinancialSectionView,
    pub declaration: DeclarationSectionView,
}

impl ClaimDetailView {
    /// Projects a normalized claim record into the detail page view.
    pub fn from_detail(claim: &ClaimDetail) -> Self {
        let header = &claim.header_details;
        let bank = &claim.bank_details;
        let medical = &claim.medical_claim_details;
        let financial = &claim.financial_summary;

        Self {
            id: claim.id.clone(),
            display_id: claim.display_id().to_string(),
            status: badge_label(&claim.status),
            badge: BadgeTone::for_status(&claim.status),
            actions: ClaimActions::for_status(&claim.status),
            header_details: HeaderSectionView {
                document_type: header.document_type.clone(),
                document_number: header.document_number.clone(),
                claim_for_month_of: header.claim_for_month_of.display(DateStyle::MonthYear),
                staff_name: header.staff_name.clone(),
                staff_no: header.staff_no.clone(),
                grade: header.grade.clone(),
                staff_type: header.staff_type.clone(),
                executive_status: header.executive_status.clone(),
                department_code: header.department_code.clone(),
                dept_cost_center_code: header.dept_cost_center_code.clone(),
                location: header.location.clone(),
                tel_ext: header.tel_ext.clone(),
                start_time_from_home: header.start_time_from_home.clone(),
                time_of_arrival_at_home: header.time_of_arrival_at_home.clone(),
            },
            bank_details: BankSectionView {
                bank_name: bank.bank_name.clone(),
                account_number: bank.account_number.clone(),
                purpose_of_claim: bank.purpose_of_claim.clone(),
            },
            medical_claim_details: medical.is_medical_claim.then(|| MedicalSectionView {
                medical_claim_type: medical.applicable_medical_type.clone(),
                is_for_family: yes_no(medical.is_for_family),
                family: medical.is_for_family.then(|| FamilySectionView {
                    for_spouse: yes_no(medical.family_member_spouse),
                    for_children: yes_no(medical.family_member_children),
                    for_other: medical
                        .family_member_other
                        .clone()
                        .filter(|other| !other.is_empty())
                        .unwrap_or_else(|| "No".to_string()),
                }),
            }),
            expense_items: claim
                .expense_items
                .iter()
                .map(ExpenseRowView::from_item)
                .collect(),
            fx_rates: claim.fx_rates.iter().map(FxRateRowView::from_entry).collect(),
            financial_summary: FinancialSectionView {
                total_advance_claim_amount: usd(&financial.total_advance_claim_amount),
                less_advance_taken: usd(&financial.less_advance_taken),
                less_corporate_credit_card_payment: usd(
                    &financial.less_corporate_credit_card_payment,
                ),
                balance_claim_repayment: usd(&financial.balance_claim_repayment),
                cheque_receipt_no: financial.cheque_receipt_no.clone().unwrap_or_default(),
            },
            declaration: DeclarationSectionView {
                status: if claim.declaration.declared {
                    "Declared".to_string()
                } else {
                    "Not Declared".to_string()
                },
                date: claim.declaration.date.display(DateStyle::Long),
                statement: DECLARATION_STATEMENT,
            },
        }
    }
}

/// Outcome of a successful cancellation: the confirmation notice plus the
/// replacement record.
#[derive(Debug, Serialize)]
pub struct CancelOutcomeView {
    pub notice: String,
    pub claim: ClaimDetailView,
}

impl CancelOutcomeView {
    pub fn new(id: &str, claim: &ClaimDetail) -> Self {
        Self {
            notice: format!("Claim ID {id} has been cancelled."),
            claim: ClaimDetailView::from_detail(claim),
        }
    }
}

fn usd(amount: &core_kernel::LenientNumber) -> String {
    format!("USD {}", amount.display_money())
}

fn yes_no(flag: bool) -> String {
    if flag { "Yes" } else { "No" }.to_string()
}
