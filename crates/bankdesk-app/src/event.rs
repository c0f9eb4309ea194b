//! Events processed by the shell
//!
//! User events mirror what a browser would deliver; the rest are posted back
//! by timers and background fetches.

use bankdesk_client::ApiFailure;
use bankdesk_core::{Account, AlertId, Transaction, ViewId};

use crate::debounce::{SearchField, Ticket};

/// Forms that can be submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form {
    CreateAccount,
    Deposit,
    Withdrawal,
    Transfer,
}

impl Form {
    pub const ALL: [Form; 4] = [Form::CreateAccount, Form::Deposit, Form::Withdrawal, Form::Transfer];

    pub fn id(&self) -> &'static str {
        match self {
            Form::CreateAccount => "createAccountForm",
            Form::Deposit => "depositForm",
            Form::Withdrawal => "withdrawalForm",
            Form::Transfer => "transferForm",
        }
    }

    pub fn view(&self) -> ViewId {
        match self {
            Form::CreateAccount => ViewId::Accounts,
            Form::Deposit | Form::Withdrawal => ViewId::Transactions,
            Form::Transfer => ViewId::Transfer,
        }
    }

    /// Accepts the element id or a short name (`deposit`, `transfer`, ...)
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| {
            f.id() == name || f.id().trim_end_matches("Form").eq_ignore_ascii_case(name)
        })
    }
}

/// Buttons outside forms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    AccountReport,
    DailySummary,
}

impl Button {
    pub const ALL: [Button; 2] = [Button::AccountReport, Button::DailySummary];

    pub fn id(&self) -> &'static str {
        match self {
            Button::AccountReport => "generateAccountReportBtn",
            Button::DailySummary => "generateDailySummaryBtn",
        }
    }

    pub fn view(&self) -> ViewId {
        ViewId::Reports
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.id() == name).or(match name {
            "account_summary" | "accounts" => Some(Button::AccountReport),
            "daily_summary" | "daily" => Some(Button::DailySummary),
            _ => None,
        })
    }
}

/// Result of a background search
#[derive(Debug)]
pub enum SearchOutcome {
    Accounts(Result<Vec<Account>, ApiFailure>),
    Transactions(Result<Vec<Transaction>, ApiFailure>),
}

#[derive(Debug)]
pub enum Event {
    /// Login button; credentials come from the login inputs
    Login,
    Logout,
    TabClicked(ViewId),
    /// Value of an input changed
    Input { field: String, value: String },
    Submit(Form),
    Click(Button),
    /// Quiet window of a search field elapsed
    DebounceElapsed { field: SearchField, ticket: Ticket },
    SearchLoaded { field: SearchField, ticket: Ticket, outcome: SearchOutcome },
    AlertFade(AlertId),
    AlertExpire(AlertId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_parse() {
        assert_eq!(Form::parse("depositForm"), Some(Form::Deposit));
        assert_eq!(Form::parse("deposit"), Some(Form::Deposit));
        assert_eq!(Form::parse("withdrawal"), Some(Form::Withdrawal));
        assert_eq!(Form::parse("createAccount"), Some(Form::CreateAccount));
        assert_eq!(Form::parse("loginForm"), None);
        assert_eq!(Form::Transfer.view(), ViewId::Transfer);
    }

    #[test]
    fn test_button_parse() {
        assert_eq!(Button::parse("generateDailySummaryBtn"), Some(Button::DailySummary));
        assert_eq!(Button::parse("account_summary"), Some(Button::AccountReport));
        assert_eq!(Button::parse("nope"), None);
    }
}
