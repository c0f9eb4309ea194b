//! JSON API client
//!
//! `send` performs one call and classifies the outcome without side effects.
//! `request` is the reporting form every view uses: a failure becomes exactly
//! one alert and the caller gets `None`, which it must treat as "failed,
//! already reported".

use bankdesk_core::{
    Account, AccountSummaryRow, AlertKind, AlertStack, AlertTarget, BalanceChange, CashRequest,
    CreatedAccount, DailySummaryRow, DashboardStats, LoginRequest, LoginResponse, NewAccountRequest,
    Transaction, TransferRequest, TransferResult,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{ApiFailure, TransportError};
use crate::transport::{HttpRequest, Method, TransportRef};

/// Turn a failed call into an alert
pub trait Reported<T> {
    /// Report into the main alert area
    fn reported(self, alerts: &mut AlertStack) -> Option<T>;

    fn reported_to(self, alerts: &mut AlertStack, target: AlertTarget) -> Option<T>;
}

impl<T> Reported<T> for Result<T, ApiFailure> {
    fn reported(self, alerts: &mut AlertStack) -> Option<T> {
        self.reported_to(alerts, AlertTarget::Main)
    }

    fn reported_to(self, alerts: &mut AlertStack, target: AlertTarget) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(failure) => {
                alerts.push(target, AlertKind::Error, failure.alert_message());
                None
            }
        }
    }
}

/// Cheap to clone; clones share the transport
#[derive(Clone)]
pub struct ApiClient {
    transport: TransportRef,
    base_url: String,
}

impl ApiClient {
    pub fn new(transport: TransportRef, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { transport, base_url }
    }

    /// One call; non-2xx, transport failures and non-JSON bodies are errors
    pub async fn send(&self, method: Method, endpoint: &str, body: Option<Value>) -> Result<Value, ApiFailure> {
        log::debug!("{} {}", method, endpoint);
        let request = HttpRequest {
            method,
            url: format!("{}{}", self.base_url, endpoint),
            body,
        };

        let response = self.transport.send(request).await?;
        let parsed: Result<Value, _> = serde_json::from_slice(&response.body);

        if !response.is_success() {
            let message = parsed
                .ok()
                .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
                .unwrap_or_else(|| format!("HTTP error! Status: {}", response.status));
            log::debug!("{} {} failed with {}: {}", method, endpoint, response.status, message);
            return Err(ApiFailure::Status {
                status: response.status,
                message,
            });
        }

        parsed.map_err(|e| ApiFailure::InvalidJson(e.to_string()))
    }

    /// Reporting form of `send`
    pub async fn request(
        &self,
        alerts: &mut AlertStack,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
    ) -> Option<Value> {
        self.send(method, endpoint, body).await.reported(alerts)
    }

    /// `send` plus decoding into a record type
    pub async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&impl Serialize>,
    ) -> Result<T, ApiFailure> {
        let body = match body {
            Some(b) => Some(serde_json::to_value(b).map_err(|e| TransportError::Encode(e.to_string()))?),
            None => None,
        };
        let value = self.send(method, endpoint, body).await?;
        serde_json::from_value(value).map_err(|e| ApiFailure::UnexpectedShape {
            endpoint: endpoint.to_string(),
            message: e.to_string(),
        })
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiFailure> {
        self.call(Method::Get, endpoint, None::<&()>).await
    }

    // ==================== Endpoints ====================

    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiFailure> {
        self.call(Method::Post, "/login", Some(request)).await
    }

    pub async fn accounts(&self, search: Option<&str>, limit: Option<usize>) -> Result<Vec<Account>, ApiFailure> {
        self.get(&accounts_path(search, limit)).await
    }

    pub async fn create_account(&self, request: &NewAccountRequest) -> Result<CreatedAccount, ApiFailure> {
        self.call(Method::Post, "/accounts", Some(request)).await
    }

    pub async fn transactions(
        &self,
        limit: Option<usize>,
        account_number: Option<&str>,
    ) -> Result<Vec<Transaction>, ApiFailure> {
        self.get(&transactions_path(limit, account_number)).await
    }

    pub async fn deposit(&self, request: &CashRequest) -> Result<BalanceChange, ApiFailure> {
        self.call(Method::Post, "/transactions/deposit", Some(request)).await
    }

    pub async fn withdraw(&self, request: &CashRequest) -> Result<BalanceChange, ApiFailure> {
        self.call(Method::Post, "/transactions/withdraw", Some(request)).await
    }

    pub async fn transfer(&self, request: &TransferRequest) -> Result<TransferResult, ApiFailure> {
        self.call(Method::Post, "/transactions/transfer", Some(request)).await
    }

    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ApiFailure> {
        self.get("/reports/dashboard_stats").await
    }

    pub async fn account_summary(&self) -> Result<Vec<AccountSummaryRow>, ApiFailure> {
        self.get("/reports/account_summary").await
    }

    pub async fn daily_summary(&self) -> Result<Vec<DailySummaryRow>, ApiFailure> {
        self.get("/reports/daily_summary").await
    }
}

fn with_query(path: &str, pairs: &[(&str, Option<String>)]) -> String {
    let query: Vec<String> = pairs
        .iter()
        .filter_map(|(k, v)| v.as_ref().map(|v| format!("{}={}", k, urlencoding::encode(v))))
        .collect();
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query.join("&"))
    }
}

/// `/accounts[?search=][&limit=]`; an empty search is omitted
pub fn accounts_path(search: Option<&str>, limit: Option<usize>) -> String {
    with_query(
        "/accounts",
        &[
            ("search", search.filter(|s| !s.is_empty()).map(str::to_string)),
            ("limit", limit.map(|l| l.to_string())),
        ],
    )
}

/// `/transactions[?limit=][&accountNumber=]`; an empty account is omitted
pub fn transactions_path(limit: Option<usize>, account_number: Option<&str>) -> String {
    with_query(
        "/transactions",
        &[
            ("limit", limit.map(|l| l.to_string())),
            ("accountNumber", account_number.filter(|s| !s.is_empty()).map(str::to_string)),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockTransport;
    use bankdesk_core::Role;
    use serde_json::json;
    use std::sync::Arc;

    const BASE: &str = "http://mock/api";

    fn client() -> (ApiClient, Arc<MockTransport>) {
        let mock = Arc::new(MockTransport::new(BASE));
        (ApiClient::new(mock.clone(), format!("{}/", BASE)), mock)
    }

    #[test]
    fn test_paths() {
        assert_eq!(accounts_path(None, None), "/accounts");
        assert_eq!(accounts_path(Some(""), None), "/accounts");
        assert_eq!(accounts_path(Some("ada l"), None), "/accounts?search=ada%20l");
        assert_eq!(accounts_path(None, Some(5)), "/accounts?limit=5");
        assert_eq!(accounts_path(Some("x"), Some(5)), "/accounts?search=x&limit=5");
        assert_eq!(transactions_path(Some(5), None), "/transactions?limit=5");
        assert_eq!(transactions_path(None, Some("100001")), "/transactions?accountNumber=100001");
    }

    #[tokio::test]
    async fn test_success_returns_body_without_alerts() {
        let (api, mock) = client();
        mock.on(Method::Get, "/reports/dashboard_stats", 200, json!({"totalAccounts": 2}));
        let mut alerts = AlertStack::new();

        let body = api.request(&mut alerts, Method::Get, "/reports/dashboard_stats", None).await;
        assert_eq!(body, Some(json!({"totalAccounts": 2})));
        assert!(alerts.is_empty());
        assert_eq!(mock.requests()[0].url, "http://mock/api/reports/dashboard_stats");
    }

    #[tokio::test]
    async fn test_error_status_gives_one_alert_from_body() {
        let (api, mock) = client();
        mock.on(Method::Post, "/transactions/withdraw", 400, json!({"error": "Insufficient funds"}));
        let mut alerts = AlertStack::new();

        let body = api
            .request(&mut alerts, Method::Post, "/transactions/withdraw", Some(json!({"amount": 10})))
            .await;
        assert_eq!(body, None);
        assert_eq!(alerts.len(), 1);
        let alert = alerts.alerts(AlertTarget::Main).next().unwrap();
        assert_eq!(alert.message, "Insufficient funds");
        assert_eq!(alert.kind, AlertKind::Error);
    }

    #[tokio::test]
    async fn test_error_status_without_error_field() {
        let (api, mock) = client();
        mock.on_raw(Method::Get, "/accounts", 500, "<html>boom</html>");
        let mut alerts = AlertStack::new();

        assert_eq!(api.request(&mut alerts, Method::Get, "/accounts", None).await, None);
        assert_eq!(alerts.alerts(AlertTarget::Main).next().unwrap().message, "HTTP error! Status: 500");
    }

    #[tokio::test]
    async fn test_transport_failure_is_network_error() {
        let (api, mock) = client();
        mock.fail(Method::Get, "/accounts", TransportError::Connect("connection refused".to_string()));
        let mut alerts = AlertStack::new();

        assert_eq!(api.request(&mut alerts, Method::Get, "/accounts", None).await, None);
        assert_eq!(alerts.len(), 1);
        assert_eq!(
            alerts.alerts(AlertTarget::Main).next().unwrap().message,
            "Network error: connection refused"
        );
    }

    #[tokio::test]
    async fn test_success_with_non_json_body() {
        let (api, mock) = client();
        mock.on_raw(Method::Get, "/accounts", 200, "not json");
        let failure = api.send(Method::Get, "/accounts", None).await.unwrap_err();
        assert!(matches!(failure, ApiFailure::InvalidJson(_)));
        assert!(failure.alert_message().starts_with("Network error:"));
    }

    #[tokio::test]
    async fn test_typed_login_sends_payload() {
        let (api, mock) = client();
        mock.on(
            Method::Post,
            "/login",
            200,
            json!({"message": "Login successful", "user": {"id": 1, "username": "admin", "role": "admin"}}),
        );
        let response = api
            .login(&LoginRequest { username: "admin".to_string(), password: "admin123".to_string() })
            .await
            .unwrap();
        assert_eq!(response.user.unwrap().role, Role::Admin);
        assert_eq!(
            mock.requests()[0].body,
            Some(json!({"username": "admin", "password": "admin123"}))
        );
    }

    #[tokio::test]
    async fn test_unexpected_shape() {
        let (api, mock) = client();
        mock.on(Method::Get, "/reports/account_summary", 200, json!({"rows": []}));
        let failure = api.account_summary().await.unwrap_err();
        assert!(matches!(failure, ApiFailure::UnexpectedShape { .. }));
    }

    #[tokio::test]
    async fn test_reported_to_login_area() {
        let (api, mock) = client();
        mock.on(Method::Post, "/login", 401, json!({"error": "Invalid username or password"}));
        let mut alerts = AlertStack::new();
        let response = api
            .login(&LoginRequest { username: "x".to_string(), password: "y".to_string() })
            .await
            .reported_to(&mut alerts, AlertTarget::Login);
        assert!(response.is_none());
        assert_eq!(alerts.alerts(AlertTarget::Main).count(), 0);
        assert_eq!(
            alerts.alerts(AlertTarget::Login).next().unwrap().message,
            "Invalid username or password"
        );
    }
}
