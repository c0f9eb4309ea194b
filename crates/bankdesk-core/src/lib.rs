//! Core client state for bankdesk
//!
//! - models: records exchanged with the banking API
//! - types: roles, capabilities, view identifiers
//! - session: persisted login across restarts
//! - page: headless document the views render into
//! - alert: timed user-visible messages

pub mod alert;
pub mod error;
pub mod models;
pub mod page;
pub mod session;
pub mod time;
pub mod types;

pub use alert::{Alert, AlertId, AlertKind, AlertPhase, AlertStack, AlertTarget};
pub use error::{CoreError, CoreResult, ErrorCode, ErrorSeverity};
pub use models::{
    authorize, Account, AccountSummaryRow, BalanceChange, CashRequest, CreatedAccount,
    DailySummaryRow, DashboardStats, LoginRequest, LoginResponse, NewAccountRequest,
    Transaction, TransferRequest, TransferResult, User,
};
pub use page::{Container, Page, Screen};
pub use session::{FileSessionStore, MemorySessionStore, SessionStore, UserSession, SESSION_USER_KEY};
pub use types::{Capability, Direction, Role, ViewId};

/// Application state owned by the shell
///
/// The account list is an advisory cache: it feeds the transfer selectors
/// and nothing that affects balances.
#[derive(Debug, Default)]
pub struct AppState {
    pub user: Option<User>,
    pub accounts: Vec<Account>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn can(&self, capability: Capability) -> bool {
        authorize(self.user.as_ref(), capability)
    }

    /// Id sent as `userId` with mutating requests
    pub fn user_id(&self) -> i64 {
        self.user.as_ref().map_or(0, |u| u.id)
    }

    pub fn cache_accounts(&mut self, accounts: Option<Vec<Account>>) {
        self.accounts = accounts.unwrap_or_default();
    }
}
