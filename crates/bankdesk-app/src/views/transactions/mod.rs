//! Transactions - deposit, withdrawal and filtered history

pub mod page;

use bankdesk_client::{ApiFailure, Reported};
use bankdesk_core::{CashRequest, Transaction};
use bankdesk_utils::format_currency;

use super::{parse_amount, ViewContext};
use crate::debounce::SearchField;
pub use page::{render_history, render_transaction_row, render_transaction_table};

pub const HISTORY: &str = "transactionHistoryContainer";

/// Deposit or withdrawal form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CashKind {
    Deposit,
    Withdraw,
}

impl CashKind {
    fn prefix(&self) -> &'static str {
        match self {
            CashKind::Deposit => "deposit",
            CashKind::Withdraw => "withdraw",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            CashKind::Deposit => "Deposit",
            CashKind::Withdraw => "Withdraw",
        }
    }

    fn field(&self, name: &str) -> String {
        format!("{}{}", self.prefix(), name)
    }
}

pub async fn setup(ctx: &mut ViewContext<'_>) {
    fetch_and_render(ctx).await;
}

/// Load history for the current filter value
pub async fn fetch_and_render(ctx: &mut ViewContext<'_>) {
    ctx.searches.get_mut(SearchField::TransactionFilter).issue(ctx.epoch);
    let account = ctx.page.field(SearchField::TransactionFilter.input_id()).to_string();
    let result = ctx.api.transactions(None, Some(&account)).await;
    render_result(ctx, result);
}

pub fn render_result(ctx: &mut ViewContext<'_>, result: Result<Vec<Transaction>, ApiFailure>) {
    let transactions = result.reported(&mut ctx.page.alerts);
    ctx.page.set_html(HISTORY, render_history(transactions.as_deref()));
}

pub async fn submit(kind: CashKind, ctx: &mut ViewContext<'_>) {
    let account_field = kind.field("Account");
    let amount_field = kind.field("Amount");
    let note_field = kind.field("Note");

    let request = CashRequest {
        account_number: ctx.page.field(&account_field).to_string(),
        amount: parse_amount(ctx.page.field(&amount_field)),
        note: ctx.page.field(&note_field).to_string(),
        user_id: ctx.state.user_id(),
    };

    let result = match kind {
        CashKind::Deposit => ctx.api.deposit(&request).await,
        CashKind::Withdraw => ctx.api.withdraw(&request).await,
    };

    if let Some(new_balance) = result.reported(&mut ctx.page.alerts).and_then(|r| r.new_balance) {
        log::info!("{} on {} accepted", kind.prefix(), request.account_number);
        ctx.page.alerts.success(format!(
            "{} successful! New Balance: {}",
            kind.label(),
            format_currency(Some(new_balance))
        ));
        ctx.page.reset_fields(&[&account_field, &amount_field, &note_field]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::testing::Harness;
    use bankdesk_client::Method;
    use bankdesk_core::{Role, ViewId};
    use serde_json::json;

    #[tokio::test]
    async fn test_setup_lists_all_transactions() {
        let mut h = Harness::new(Role::Admin);
        h.mount(ViewId::Transactions);
        h.mock.on(
            Method::Get,
            "/transactions",
            200,
            json!([{"transaction_id": "TXN-1", "transaction_date": "2024-05-01 09:00:00",
                    "account_number": "100001", "transaction_type": "withdrawal", "amount": 20, "note": null}]),
        );

        setup(&mut h.ctx()).await;

        assert!(h.page.html(HISTORY).unwrap().contains("WITHDRAWAL"));
        assert_eq!(h.mock.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_deposit_success() {
        let mut h = Harness::new(Role::Staff("teller".to_string()));
        h.mount(ViewId::Transactions);
        h.mock.on(Method::Post, "/transactions/deposit", 200, json!({"message": "Deposit successful", "newBalance": 1250.0}));
        h.page.set_field("depositAccount", "100001");
        h.page.set_field("depositAmount", "250");
        h.page.set_field("depositNote", "cash");

        submit(CashKind::Deposit, &mut h.ctx()).await;

        assert_eq!(
            h.mock.requests()[0].body,
            Some(json!({"accountNumber": "100001", "amount": 250.0, "note": "cash", "userId": 7}))
        );
        assert_eq!(h.alert_messages(), vec!["Deposit successful! New Balance: $1,250.00".to_string()]);
        assert_eq!(h.page.field("depositAmount"), "");
    }

    #[tokio::test]
    async fn test_withdraw_rejected_by_backend() {
        let mut h = Harness::new(Role::Admin);
        h.mount(ViewId::Transactions);
        h.mock.on(Method::Post, "/transactions/withdraw", 400, json!({"error": "Insufficient funds"}));
        h.page.set_field("withdrawAccount", "100001");
        h.page.set_field("withdrawAmount", "999999");

        submit(CashKind::Withdraw, &mut h.ctx()).await;

        assert_eq!(h.alert_messages(), vec!["Insufficient funds".to_string()]);
        assert_eq!(h.page.field("withdrawAmount"), "999999");
        assert_eq!(h.mock.requests()[0].url, "http://mock/api/transactions/withdraw");
    }

    #[tokio::test]
    async fn test_unparsable_amount_is_sent_as_null() {
        let mut h = Harness::new(Role::Admin);
        h.mount(ViewId::Transactions);
        h.mock.on(Method::Post, "/transactions/deposit", 400, json!({"error": "Invalid amount"}));
        h.page.set_field("depositAmount", "lots");

        submit(CashKind::Deposit, &mut h.ctx()).await;

        assert_eq!(h.mock.requests()[0].body.as_ref().unwrap()["amount"], serde_json::Value::Null);
    }
}
