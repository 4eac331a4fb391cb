//! Test Payload Builders
//!
//! Builder patterns for constructing backend claim payloads with sensible
//! defaults. Tests specify only the fields they care about; the naming
//! convention switch produces either historical key spelling so dual-key
//! resolution gets exercised both ways.

use serde_json::{json, Map, Value};

/// Which historical field-naming convention a builder emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Naming {
    SnakeCase,
    CamelCase,
}

impl Naming {
    fn key(&self, snake: &'static str, camel: &'static str) -> &'static str {
        match self {
            Naming::SnakeCase => snake,
            Naming::CamelCase => camel,
        }
    }
}

/// Builder for a claim list entry.
pub struct ClaimPayloadBuilder {
    naming: Naming,
    id: Value,
    document_number: Option<String>,
    requestor: String,
    purpose: String,
    amount: Value,
    status: String,
    submitted_date: Option<String>,
    claim_type: Option<String>,
}

impl Default for ClaimPayloadBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimPayloadBuilder {
    /// Creates a builder with default values in camelCase.
    pub fn new() -> Self {
        Self {
            naming: Naming::CamelCase,
            id: json!("C1"),
            document_number: Some("TSR-001".to_string()),
            requestor: "Jane Lim".to_string(),
            purpose: "Quarterly site visit".to_string(),
            amount: json!(120.5),
            status: "Pending Verification".to_string(),
            submitted_date: Some("2024-01-05".to_string()),
            claim_type: None,
        }
    }

    /// Switches the emitted key spelling.
    pub fn with_naming(mut self, naming: Naming) -> Self {
        self.naming = naming;
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = json!(id.into());
        self
    }

    /// Uses a raw JSON value as the id (e.g. a number).
    pub fn with_raw_id(mut self, id: Value) -> Self {
        self.id = id;
        self
    }

    pub fn with_document_number(mut self, number: impl Into<String>) -> Self {
        self.document_number = Some(number.into());
        self
    }

    pub fn without_document_number(mut self) -> Self {
        self.document_number = None;
        self
    }

    pub fn with_requestor(mut self, requestor: impl Into<String>) -> Self {
        self.requestor = requestor.into();
        self
    }

    pub fn with_purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = purpose.into();
        self
    }

    /// Sets the amount as a raw JSON value (number, string, or null).
    pub fn with_amount(mut self, amount: Value) -> Self {
        self.amount = amount;
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn with_submitted_date(mut self, date: impl Into<String>) -> Self {
        self.submitted_date = Some(date.into());
        self
    }

    pub fn without_submitted_date(mut self) -> Self {
        self.submitted_date = None;
        self
    }

    pub fn with_claim_type(mut self, claim_type: impl Into<String>) -> Self {
        self.claim_type = Some(claim_type.into());
        self
    }

    /// Builds the list entry.
    pub fn build(self) -> Value {
        let mut obj = Map::new();
        obj.insert("id".to_string(), self.id);
        if let Some(number) = self.document_number {
            let key = self.naming.key("document_number", "documentNumber");
            obj.insert(key.to_string(), json!(number));
        }
        obj.insert("requestor".to_string(), json!(self.requestor));
        obj.insert("purpose".to_string(), json!(self.purpose));
        obj.insert("amount".to_string(), self.amount);
        obj.insert("status".to_string(), json!(self.status));
        if let Some(date) = self.submitted_date {
            let key = self.naming.key("submitted_date", "submittedDate");
            obj.insert(key.to_string(), json!(date));
        }
        if let Some(claim_type) = self.claim_type {
            obj.insert("type".to_string(), json!(claim_type));
        }
        Value::Object(obj)
    }
}

/// Builder for a claim detail payload.
pub struct DetailPayloadBuilder {
    id: String,
    document_number: Option<String>,
    status: String,
    requestor_name: Option<String>,
    header_details: Option<Value>,
    bank_details: Option<Value>,
    medical_claim_details: Option<Value>,
    expense_items: Vec<Value>,
    fx_rates: Vec<Value>,
    financial_summary: Option<Value>,
    declaration: Option<Value>,
}

impl Default for DetailPayloadBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DetailPayloadBuilder {
    /// Creates a builder with a minimal pending claim.
    pub fn new() -> Self {
        Self {
            id: "C1".to_string(),
            document_number: Some("TSR-001".to_string()),
            status: "Pending Verification".to_string(),
            requestor_name: Some("Jane Lim".to_string()),
            header_details: None,
            bank_details: None,
            medical_claim_details: None,
            expense_items: Vec::new(),
            fx_rates: Vec::new(),
            financial_summary: None,
            declaration: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_document_number(mut self, number: impl Into<String>) -> Self {
        self.document_number = Some(number.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn with_requestor_name(mut self, name: impl Into<String>) -> Self {
        self.requestor_name = Some(name.into());
        self
    }

    pub fn without_requestor_name(mut self) -> Self {
        self.requestor_name = None;
        self
    }

    pub fn with_header_details(mut self, header: Value) -> Self {
        self.header_details = Some(header);
        self
    }

    pub fn with_bank_details(mut self, bank: Value) -> Self {
        self.bank_details = Some(bank);
        self
    }

    pub fn with_medical_claim_details(mut self, medical: Value) -> Self {
        self.medical_claim_details = Some(medical);
        self
    }

    pub fn with_expense_item(mut self, item: Value) -> Self {
        self.expense_items.push(item);
        self
    }

    pub fn with_fx_rate(mut self, rate: Value) -> Self {
        self.fx_rates.push(rate);
        self
    }

    pub fn with_financial_summary(mut self, summary: Value) -> Self {
        self.financial_summary = Some(summary);
        self
    }

    pub fn with_declaration(mut self, declaration: Value) -> Self {
        self.declaration = Some(declaration);
        self
    }

    /// Builds the bare detail object.
    pub fn build(self) -> Value {
        let mut obj = Map::new();
        obj.insert("id".to_string(), json!(self.id));
        if let Some(number) = self.document_number {
            obj.insert("documentNumber".to_string(), json!(number));
        }
        obj.insert("status".to_string(), json!(self.status));
        if let Some(name) = self.requestor_name {
            obj.insert("requestorName".to_string(), json!(name));
        }
        if let Some(header) = self.header_details {
            obj.insert("headerDetails".to_string(), header);
        }
        if let Some(bank) = self.bank_details {
            obj.insert("bankDetails".to_string(), bank);
        }
        if let Some(medical) = self.medical_claim_details {
            obj.insert("medicalClaimDetails".to_string(), medical);
        }
        if !self.expense_items.is_empty() {
            obj.insert("expenseItems".to_string(), Value::Array(self.expense_items));
        }
        if !self.fx_rates.is_empty() {
            obj.insert(
                "informationOnForeignExchangeRate".to_string(),
                Value::Array(self.fx_rates),
            );
        }
        if let Some(summary) = self.financial_summary {
            obj.insert("financialSummary".to_string(), summary);
        }
        if let Some(declaration) = self.declaration {
            obj.insert("declaration".to_string(), declaration);
        }
        Value::Object(obj)
    }

    /// Builds the detail wrapped in the `claimData` envelope.
    pub fn build_wrapped(self) -> Value {
        json!({ "claimData": self.build() })
    }

    /// Builds the detail wrapped in the cancel response `claim` envelope.
    pub fn build_cancel_response(self) -> Value {
        json!({ "claim": self.build() })
    }
}
