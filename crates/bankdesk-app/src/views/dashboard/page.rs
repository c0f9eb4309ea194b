//! Dashboard rendering

use bankdesk_core::time::format_date;
use bankdesk_core::{Account, Direction, Transaction};
use bankdesk_utils::{capitalize, escape_html, format_currency};

use crate::views::{empty_state, status_indicator, type_label};

pub fn render_transaction_item(tx: &Transaction) -> String {
    let direction = Direction::classify(&tx.transaction_type);
    format!(
        r#"<div class="transaction-item">
        <div>
            <strong>Account {}</strong><br>
            <small>{} - {}</small>
        </div>
        <div class="{}">
            {}{}
        </div>
    </div>"#,
        escape_html(&tx.account_number),
        type_label(&tx.transaction_type),
        escape_html(&format_date(&tx.transaction_date)),
        direction.css_class(),
        direction.sign(),
        format_currency(tx.amount)
    )
}

pub fn render_account_status_item(acc: &Account) -> String {
    format!(
        r#"<div class="transaction-item">
        <div>
            <strong>{} ({})</strong><br>
            <small>{} Account</small>
        </div>
        {}
    </div>"#,
        escape_html(&acc.account_holder_name),
        escape_html(&acc.account_number),
        escape_html(&capitalize(&acc.account_type)),
        status_indicator(&acc.status)
    )
}

pub fn render_recent_transactions(transactions: Option<&[Transaction]>) -> String {
    match transactions {
        Some(txs) if !txs.is_empty() => txs.iter().map(render_transaction_item).collect(),
        _ => empty_state("No recent transactions."),
    }
}

pub fn render_accounts_overview(accounts: Option<&[Account]>) -> String {
    match accounts {
        Some(accs) if !accs.is_empty() => accs.iter().map(render_account_status_item).collect(),
        _ => empty_state("No accounts found."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(kind: &str, amount: Option<f64>) -> Transaction {
        Transaction {
            transaction_id: "TXN-1".to_string(),
            transaction_date: "2024-01-15 10:05:03".to_string(),
            account_number: "100001".to_string(),
            transaction_type: kind.to_string(),
            amount,
            note: None,
        }
    }

    #[test]
    fn test_credit_item() {
        let html = render_transaction_item(&tx("deposit", Some(1234.5)));
        assert!(html.contains("class=\"amount-positive\""));
        assert!(html.contains("+$1,234.50"));
        assert!(html.contains("DEPOSIT - 1/15/2024"));
    }

    #[test]
    fn test_transfer_in_is_credit_and_withdrawal_is_debit() {
        assert!(render_transaction_item(&tx("transfer_in", Some(5.0))).contains("+$5.00"));
        let html = render_transaction_item(&tx("withdrawal", None));
        assert!(html.contains("class=\"amount-negative\""));
        assert!(html.contains("-$0.00"));
    }

    #[test]
    fn test_account_status_item() {
        let acc = Account {
            account_number: "100002".to_string(),
            account_holder_name: "Grace <Hopper>".to_string(),
            email: String::new(),
            phone: None,
            balance: Some(10.0),
            status: "Frozen".to_string(),
            account_type: "savings".to_string(),
        };
        let html = render_account_status_item(&acc);
        assert!(html.contains("Grace &lt;Hopper&gt; (100002)"));
        assert!(html.contains("Savings Account"));
        assert!(html.contains("status-frozen"));
    }

    #[test]
    fn test_empty_states() {
        assert_eq!(render_recent_transactions(None), "<p>No recent transactions.</p>");
        assert_eq!(render_recent_transactions(Some(&[])), "<p>No recent transactions.</p>");
        assert_eq!(render_accounts_overview(Some(&[])), "<p>No accounts found.</p>");
    }
}
