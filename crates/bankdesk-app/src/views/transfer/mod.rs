//! Transfer - move funds between two accounts

pub mod page;

use bankdesk_client::Reported;
use bankdesk_core::TransferRequest;

use super::{parse_amount, ViewContext};
pub use page::render_account_options;

pub const FROM: &str = "fromAccount";
pub const TO: &str = "toAccount";

pub async fn setup(ctx: &mut ViewContext<'_>) {
    if ctx.state.accounts.is_empty() {
        let accounts = ctx.api.accounts(None, None).await.reported(&mut ctx.page.alerts);
        ctx.state.cache_accounts(accounts);
    }

    let options = render_account_options(&ctx.state.accounts);
    ctx.page.set_html(FROM, options.clone());
    ctx.page.set_html(TO, options);
    select_first(ctx);
}

/// A select shows its first option until the user picks another
fn select_first(ctx: &mut ViewContext<'_>) {
    if let Some(first) = ctx.state.accounts.first().map(|a| a.account_number.clone()) {
        ctx.page.set_field(FROM, first.clone());
        ctx.page.set_field(TO, first);
    }
}

pub async fn submit(ctx: &mut ViewContext<'_>) {
    let from = ctx.page.field(FROM).to_string();
    let to = ctx.page.field(TO).to_string();

    if from == to {
        ctx.page.alerts.error("Cannot transfer to the same account.");
        return;
    }

    let request = TransferRequest {
        from_account: from,
        to_account: to,
        amount: parse_amount(ctx.page.field("transferAmount")),
        note: ctx.page.field("transferNote").to_string(),
        user_id: ctx.state.user_id(),
    };

    let result = ctx.api.transfer(&request).await.reported(&mut ctx.page.alerts);
    if let Some(message) = result.and_then(|r| r.message) {
        log::info!("transfer {} -> {} accepted", request.from_account, request.to_account);
        ctx.page.alerts.success(message);
        ctx.page.reset_fields(&["transferAmount", "transferNote"]);
        select_first(ctx);
    }
}
