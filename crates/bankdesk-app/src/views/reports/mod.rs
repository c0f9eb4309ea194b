//! Reports - on-demand account and daily summaries
//!
//! Nothing is fetched when the view loads; each report is generated by its
//! button.

pub mod page;

use bankdesk_client::Reported;

use super::ViewContext;
pub use page::{render_account_summary, render_daily_summary};

pub const ACCOUNT_SUMMARY: &str = "accountSummaryContainer";
pub const DAILY_SUMMARY: &str = "dailySummaryContainer";

const GENERATING: &str = "<p>Generating report...</p>";

pub fn setup(ctx: &mut ViewContext<'_>) {
    log::debug!("reports view ready (epoch {})", ctx.epoch);
}

pub async fn account_summary(ctx: &mut ViewContext<'_>) {
    ctx.page.set_html(ACCOUNT_SUMMARY, GENERATING);
    let rows = ctx.api.account_summary().await.reported(&mut ctx.page.alerts);
    ctx.page.set_html(ACCOUNT_SUMMARY, render_account_summary(rows.as_deref()));
}

pub async fn daily_summary(ctx: &mut ViewContext<'_>) {
    ctx.page.set_html(DAILY_SUMMARY, GENERATING);
    let rows = ctx.api.daily_summary().await.reported(&mut ctx.page.alerts);
    ctx.page.set_html(DAILY_SUMMARY, render_daily_summary(rows.as_deref()));
}
