//! Records exchanged with the banking API
//!
//! Field names follow the wire format: list records use snake_case,
//! request payloads and small responses use camelCase.

use serde::{Deserialize, Serialize};

use crate::types::{Capability, Role};

// ==================== Session ====================

/// Logged-in user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub role: Role,
}

impl User {
    pub fn can(&self, capability: Capability) -> bool {
        self.role.grants(capability)
    }
}

/// Single authorization check used by every view
pub fn authorize(user: Option<&User>, capability: Capability) -> bool {
    user.map_or(false, |u| u.can(capability))
}

// ==================== Records ====================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub account_number: String,
    #[serde(default)]
    pub account_holder_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub balance: Option<f64>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub account_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id: String,
    #[serde(default)]
    pub transaction_date: String,
    #[serde(default)]
    pub account_number: String,
    #[serde(default)]
    pub transaction_type: String,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub note: Option<String>,
}

/// Row of the account summary report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSummaryRow {
    pub account_number: String,
    #[serde(default)]
    pub account_holder_name: String,
    #[serde(default)]
    pub account_type: String,
    #[serde(default)]
    pub balance: Option<f64>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub transaction_count: i64,
}

/// Row of the daily transaction summary report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummaryRow {
    pub transaction_date: String,
    #[serde(default)]
    pub total_transactions: i64,
    #[serde(default)]
    pub total_credits: Option<f64>,
    #[serde(default)]
    pub total_debits: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub total_accounts: i64,
    #[serde(default)]
    pub total_balance: Option<f64>,
    #[serde(default)]
    pub today_transactions: i64,
}

// ==================== Requests ====================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccountRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "type")]
    pub account_type: String,
    pub initial_deposit: f64,
    pub user_id: i64,
}

/// Deposit or withdrawal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashRequest {
    pub account_number: String,
    pub amount: Option<f64>,
    pub note: String,
    pub user_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub from_account: String,
    pub to_account: String,
    pub amount: Option<f64>,
    pub note: String,
    pub user_id: i64,
}

// ==================== Responses ====================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedAccount {
    #[serde(default)]
    pub account_number: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceChange {
    #[serde(default)]
    pub new_balance: Option<f64>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransferResult {
    #[serde(default)]
    pub message: Option<String>,
}
