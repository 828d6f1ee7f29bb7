//! Wire types and endpoint paths for the farm API
//!
//! Record fields travel as the strings the user typed; the server does
//! the numeric parsing.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::forms::{ExpenseForm, FeedingForm, LoginForm, MortalityForm, RegisterForm};

/// Server-assigned batch identifier
pub type BatchId = u64;

/// A group of farmed animals as listed by `GET /batches/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    pub id: BatchId,
    #[serde(default)]
    pub serial_number: String,
    #[serde(default)]
    pub animal_name: String,
    #[serde(default)]
    pub current_quantity: Option<i64>,
    #[serde(default)]
    pub initial_quantity: Option<u64>,
    #[serde(default)]
    pub arrival_date: Option<String>,
    #[serde(default)]
    pub is_moved_to_shop: bool,
    #[serde(default, deserialize_with = "decimal_text")]
    pub total_cost: Option<String>,
    #[serde(default, deserialize_with = "decimal_text")]
    pub unit_cost: Option<String>,
}

/// Decimal fields arrive as JSON numbers or strings depending on the serializer
fn decimal_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    })
}

/// The batch collection, either bare or wrapped in a paginated envelope
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum BatchListing {
    Paged { results: Vec<Batch> },
    Plain(Vec<Batch>),
}

impl BatchListing {
    pub fn into_batches(self) -> Vec<Batch> {
        match self {
            BatchListing::Paged { results } => results,
            BatchListing::Plain(batches) => batches,
        }
    }
}

/// The kinds of record that can be filed against a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Feeding,
    Expense,
    Mortality,
}

impl RecordKind {
    pub const ALL: [RecordKind; 3] = [
        RecordKind::Feeding,
        RecordKind::Expense,
        RecordKind::Mortality,
    ];

    /// Path segment under `/batches/{id}/`
    pub fn path_segment(&self) -> &'static str {
        match self {
            RecordKind::Feeding => "feeding",
            RecordKind::Expense => "expense",
            RecordKind::Mortality => "mortality",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path_segment())
    }
}

/// Endpoint URLs derived from the configured base URL
#[derive(Debug, Clone)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn register(&self) -> String {
        format!("{}/register/", self.base_url)
    }

    pub fn token(&self) -> String {
        format!("{}/token/", self.base_url)
    }

    pub fn batches(&self) -> String {
        format!("{}/batches/", self.base_url)
    }

    pub fn batch_record(&self, batch_id: BatchId, kind: RecordKind) -> String {
        format!(
            "{}/batches/{}/{}/",
            self.base_url,
            batch_id,
            kind.path_segment()
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
}

impl From<&RegisterForm> for RegisterRequest {
    fn from(form: &RegisterForm) -> Self {
        Self {
            email: form.email.clone(),
            username: form.username.clone(),
            password: form.password.clone(),
        }
    }
}

/// Body of a `/register/` response, success or failure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub success: serde_json::Value,
    #[serde(default)]
    pub error: serde_json::Value,
    /// Field validation errors, e.g. `{"username": ["Username already exists"]}`
    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_json::Value>,
}

impl RegisterResponse {
    /// Whether the `success` flag is set, read the way a loose JSON check would
    pub fn is_success(&self) -> bool {
        match &self.success {
            serde_json::Value::Null => false,
            serde_json::Value::Bool(flag) => *flag,
            serde_json::Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
            serde_json::Value::String(text) => !text.is_empty(),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
        }
    }

    /// The message the server wants shown, if it sent one
    pub fn error_message(&self) -> Option<String> {
        first_text(&self.error).or_else(|| self.fields.values().find_map(first_text))
    }
}

/// First non-empty string in a value, searching arrays and objects in order
fn first_text(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(text) if !text.is_empty() => Some(text.clone()),
        serde_json::Value::Array(items) => items.iter().find_map(first_text),
        serde_json::Value::Object(map) => map.values().find_map(first_text),
        _ => None,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

impl From<&LoginForm> for TokenRequest {
    fn from(form: &LoginForm) -> Self {
        Self {
            username: form.username.clone(),
            password: form.password.clone(),
        }
    }
}

/// Body of a `/token/` response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access: Option<String>,
}

impl TokenResponse {
    pub fn access_token(&self) -> Option<&str> {
        self.access.as_deref().filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedingRequest {
    pub bags: String,
    pub amount: String,
    pub note: String,
}

impl From<&FeedingForm> for FeedingRequest {
    fn from(form: &FeedingForm) -> Self {
        Self {
            bags: form.bags.clone(),
            amount: form.amount.clone(),
            note: form.note.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseRequest {
    pub description: String,
    pub amount: String,
}

impl From<&ExpenseForm> for ExpenseRequest {
    fn from(form: &ExpenseForm) -> Self {
        Self {
            description: form.description.clone(),
            amount: form.amount.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MortalityRequest {
    pub count: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl From<&MortalityForm> for MortalityRequest {
    fn from(form: &MortalityForm) -> Self {
        Self {
            count: form.count.clone(),
            reason: Some(form.reason.clone()).filter(|r| !r.is_empty()),
        }
    }
}
