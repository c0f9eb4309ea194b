//! Dashboard - headline stats, recent transactions, accounts overview

pub mod page;

use bankdesk_client::Reported;
use bankdesk_utils::format_currency;

use super::ViewContext;
pub use page::{render_account_status_item, render_accounts_overview, render_recent_transactions, render_transaction_item};

pub async fn setup(ctx: &mut ViewContext<'_>) {
    if let Some(stats) = ctx.api.dashboard_stats().await.reported(&mut ctx.page.alerts) {
        ctx.page.set_text("stat-totalAccounts", &stats.total_accounts.to_string());
        ctx.page.set_text("stat-totalBalance", &format_currency(stats.total_balance));
        ctx.page.set_text("stat-todayTransactions", &stats.today_transactions.to_string());
    }

    let limit = Some(ctx.ui.dashboard_limit);

    let recent = ctx.api.transactions(limit, None).await.reported(&mut ctx.page.alerts);
    ctx.page.set_html("recent-transactions-list", render_recent_transactions(recent.as_deref()));

    let accounts = ctx.api.accounts(None, limit).await.reported(&mut ctx.page.alerts);
    ctx.page.set_html("accounts-overview-list", render_accounts_overview(accounts.as_deref()));
}
