//! Transaction history rendering

use bankdesk_core::time::format_date_time;
use bankdesk_core::{Direction, Transaction};
use bankdesk_utils::{escape_html, format_currency};

use crate::views::{empty_state, type_label};

pub fn render_transaction_row(tx: &Transaction) -> String {
    let direction = Direction::classify(&tx.transaction_type);
    format!(
        r#"<tr>
            <td>{}</td>
            <td>{}</td>
            <td>{}</td>
            <td>{}</td>
            <td class="{}">{}</td>
            <td>{}</td>
        </tr>"#,
        escape_html(&tx.transaction_id),
        escape_html(&format_date_time(&tx.transaction_date)),
        escape_html(&tx.account_number),
        type_label(&tx.transaction_type),
        direction.css_class(),
        format_currency(tx.amount),
        escape_html(tx.note.as_deref().unwrap_or(""))
    )
}

pub fn render_transaction_table(transactions: &[Transaction]) -> String {
    let mut table = String::from(
        "<table><thead><tr>
        <th>ID</th><th>Date</th><th>Account</th><th>Type</th><th>Amount</th><th>Note</th>
    </tr></thead><tbody>",
    );
    for tx in transactions {
        table.push_str(&render_transaction_row(tx));
    }
    table.push_str("</tbody></table>");
    table
}

pub fn render_history(transactions: Option<&[Transaction]>) -> String {
    match transactions {
        Some(txs) if !txs.is_empty() => render_transaction_table(txs),
        _ => empty_state("No transactions found for this filter."),
    }
}
