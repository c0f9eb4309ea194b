//! Report tables

use bankdesk_core::time::format_date;
use bankdesk_core::{AccountSummaryRow, DailySummaryRow};
use bankdesk_utils::{escape_html, format_currency};

use crate::views::{empty_state, status_indicator};

pub const NO_DATA: &str = "No data available.";

pub fn render_account_summary(rows: Option<&[AccountSummaryRow]>) -> String {
    let Some(rows) = rows.filter(|r| !r.is_empty()) else {
        return empty_state(NO_DATA);
    };
    let mut table = String::from(
        "<table><thead><tr>
        <th>Account #</th><th>Holder</th><th>Type</th><th>Balance</th><th>Status</th><th>Transactions</th>
    </tr></thead><tbody>",
    );
    for row in rows {
        table.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&row.account_number),
            escape_html(&row.account_holder_name),
            escape_html(&row.account_type),
            format_currency(row.balance),
            status_indicator(&row.status),
            row.transaction_count
        ));
    }
    table.push_str("</tbody></table>");
    table
}

pub fn render_daily_summary(rows: Option<&[DailySummaryRow]>) -> String {
    let Some(rows) = rows.filter(|r| !r.is_empty()) else {
        return empty_state(NO_DATA);
    };
    let mut table = String::from(
        "<table><thead><tr>
        <th>Date</th><th>Total Txs</th><th>Total Credits</th><th>Total Debits</th>
    </tr></thead><tbody>",
    );
    for row in rows {
        table.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td class=\"amount-positive\">{}</td><td class=\"amount-negative\">{}</td></tr>",
            escape_html(&format_date(&row.transaction_date)),
            row.total_transactions,
            format_currency(row.total_credits),
            format_currency(row.total_debits)
        ));
    }
    table.push_str("</tbody></table>");
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_summary_table() {
        let rows = vec![AccountSummaryRow {
            account_number: "100001".to_string(),
            account_holder_name: "Ada".to_string(),
            account_type: "checking".to_string(),
            balance: Some(-12.5),
            status: "frozen".to_string(),
            transaction_count: 4,
        }];
        let html = render_account_summary(Some(&rows));
        assert!(html.contains("<td>checking</td>"));
        assert!(html.contains("<td>$-12.50</td>"));
        assert!(html.contains("status-frozen"));
        assert!(html.contains("<td>4</td></tr>"));
    }

    #[test]
    fn test_daily_summary_table() {
        let rows = vec![DailySummaryRow {
            transaction_date: "2024-03-09".to_string(),
            total_transactions: 3,
            total_credits: Some(1000.0),
            total_debits: None,
        }];
        let html = render_daily_summary(Some(&rows));
        assert!(html.contains("<td>3/9/2024</td>"));
        assert!(html.contains("<td class=\"amount-positive\">$1,000.00</td>"));
        assert!(html.contains("<td class=\"amount-negative\">$0.00</td>"));
    }

    #[test]
    fn test_no_data() {
        assert_eq!(render_account_summary(Some(&[])), "<p>No data available.</p>");
        assert_eq!(render_daily_summary(None), "<p>No data available.</p>");
    }
}
