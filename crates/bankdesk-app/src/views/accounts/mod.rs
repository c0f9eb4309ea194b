//! Accounts - searchable list and account creation
//!
//! Every fetch of the list refreshes the advisory account cache used by the
//! transfer view.

pub mod page;

use bankdesk_client::{ApiFailure, Reported};
use bankdesk_core::{Account, Capability, NewAccountRequest};

use super::{parse_amount, ViewContext};
use crate::debounce::SearchField;
pub use page::{render_account_list, render_account_list_item};

pub const CREATE_CARD: &str = "createAccountCard";
pub const LIST: &str = "accountsListContainer";

const NEW_ACCOUNT_FIELDS: [&str; 5] = [
    "newAccountName",
    "newAccountEmail",
    "newAccountPhone",
    "newAccountType",
    "initialDeposit",
];

pub async fn setup(ctx: &mut ViewContext<'_>) {
    if !ctx.state.can(Capability::CreateAccount) {
        ctx.page.set_hidden(CREATE_CARD, true);
    }
    fetch_and_render(ctx).await;
}

/// Load the list for the current search box value
pub async fn fetch_and_render(ctx: &mut ViewContext<'_>) {
    let query = ctx.page.field(SearchField::AccountSearch.input_id()).to_string();
    load_list(ctx, Some(&query)).await;
}

async fn load_list(ctx: &mut ViewContext<'_>, search: Option<&str>) {
    // Supersede any debounced search still in flight
    ctx.searches.get_mut(SearchField::AccountSearch).issue(ctx.epoch);

    ctx.page.set_html(LIST, "<p>Loading accounts...</p>");
    let result = ctx.api.accounts(search, None).await;
    render_result(ctx, result);
}

/// Render a list response, reporting a failure once
pub fn render_result(ctx: &mut ViewContext<'_>, result: Result<Vec<Account>, ApiFailure>) {
    let accounts = result.reported(&mut ctx.page.alerts);
    ctx.page.set_html(LIST, render_account_list(accounts.as_deref()));
    ctx.state.cache_accounts(accounts);
}

/// Show the pending state before a debounced search goes out
pub fn show_loading(ctx: &mut ViewContext<'_>) {
    ctx.page.set_html(LIST, "<p>Loading accounts...</p>");
}

pub async fn create_account(ctx: &mut ViewContext<'_>) {
    if !ctx.state.can(Capability::CreateAccount) {
        log::debug!("create account ignored: user lacks capability");
        return;
    }

    let request = NewAccountRequest {
        name: ctx.page.field("newAccountName").to_string(),
        email: ctx.page.field("newAccountEmail").to_string(),
        phone: ctx.page.field("newAccountPhone").to_string(),
        account_type: ctx.page.field("newAccountType").to_string(),
        initial_deposit: parse_amount(ctx.page.field("initialDeposit")).unwrap_or(0.0),
        user_id: ctx.state.user_id(),
    };

    let created = ctx.api.create_account(&request).await.reported(&mut ctx.page.alerts);
    if let Some(number) = created.and_then(|c| c.account_number) {
        log::info!("account {} created", number);
        ctx.page.alerts.success(format!("Account {} created successfully!", number));
        ctx.page.reset_fields(&NEW_ACCOUNT_FIELDS);
        // The new account must show up whatever the search box holds
        load_list(ctx, None).await;
    }
}
