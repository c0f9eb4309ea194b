//! View controllers and their rendering functions
//!
//! Each view module follows the same structure:
//! - mod.rs: controller (setup on load, form and button handlers)
//! - page.rs: pure rendering from records to markup
//!
//! Controllers run once per fragment load; the markup they bind to is
//! replaced on the next load.

pub mod accounts;
pub mod dashboard;
pub mod reports;
pub mod transactions;
pub mod transfer;

use bankdesk_client::ApiClient;
use bankdesk_config::UiConfig;
use bankdesk_core::{AppState, Page, ViewId};
use bankdesk_utils::escape_html;

use crate::debounce::Searches;
use crate::event::{Button, Form};

/// Everything a controller may touch during one handler turn
pub struct ViewContext<'a> {
    pub page: &'a mut Page,
    pub state: &'a mut AppState,
    pub api: &'a ApiClient,
    pub ui: &'a UiConfig,
    pub searches: &'a mut Searches,
    /// Epoch of the mounted fragment
    pub epoch: u64,
}

/// Run a freshly mounted view's controller
pub async fn setup(view: ViewId, ctx: &mut ViewContext<'_>) {
    match view {
        ViewId::Dashboard => dashboard::setup(ctx).await,
        ViewId::Accounts => accounts::setup(ctx).await,
        ViewId::Transactions => transactions::setup(ctx).await,
        ViewId::Transfer => transfer::setup(ctx).await,
        ViewId::Reports => reports::setup(ctx),
    }
}

pub async fn submit(form: Form, ctx: &mut ViewContext<'_>) {
    match form {
        Form::CreateAccount => accounts::create_account(ctx).await,
        Form::Deposit => transactions::submit(transactions::CashKind::Deposit, ctx).await,
        Form::Withdrawal => transactions::submit(transactions::CashKind::Withdraw, ctx).await,
        Form::Transfer => transfer::submit(ctx).await,
    }
}

pub async fn click(button: Button, ctx: &mut ViewContext<'_>) {
    match button {
        Button::AccountReport => reports::account_summary(ctx).await,
        Button::DailySummary => reports::daily_summary(ctx).await,
    }
}

// ==================== Shared rendering helpers ====================

pub(crate) fn empty_state(message: &str) -> String {
    format!("<p>{}</p>", message)
}

/// `<span class="status-indicator status-active">active</span>`
pub(crate) fn status_indicator(status: &str) -> String {
    format!(
        "<span class=\"status-indicator status-{}\">{}</span>",
        escape_html(&status.to_lowercase()),
        escape_html(status)
    )
}

/// `transfer_in` → `TRANSFER IN`
pub(crate) fn type_label(transaction_type: &str) -> String {
    escape_html(&transaction_type.replacen('_', " ", 1).to_uppercase())
}

/// Amount typed into a form; unparsable input is sent as null
pub(crate) fn parse_amount(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
