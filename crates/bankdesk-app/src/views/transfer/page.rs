//! Transfer selector rendering

use bankdesk_core::Account;
use bankdesk_utils::escape_html;

/// `<option>` list for the from/to selectors
pub fn render_account_options(accounts: &[Account]) -> String {
    accounts
        .iter()
        .map(|acc| {
            format!(
                "<option value=\"{}\">{} - {}</option>",
                escape_html(&acc.account_number),
                escape_html(&acc.account_holder_name),
                escape_html(&acc.account_number)
            )
        })
        .collect()
}
