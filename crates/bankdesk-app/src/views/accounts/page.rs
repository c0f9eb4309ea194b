//! Accounts list rendering

use bankdesk_core::Account;
use bankdesk_utils::{escape_html, format_currency};

use crate::views::{empty_state, status_indicator};

pub const NO_ACCOUNTS: &str = "No accounts found.";

pub fn render_account_list_item(acc: &Account) -> String {
    let phone = acc.phone.as_deref().filter(|p| !p.is_empty()).unwrap_or("N/A");
    format!(
        r#"<div class="account-list-item">
        <div>
            <strong>{} ({})</strong><br>
            <span>{} | {}</span>
        </div>
        <div>
            <span style="font-weight: bold; font-size: 1.2em;">{}</span><br>
            {}
        </div>
    </div>"#,
        escape_html(&acc.account_holder_name),
        escape_html(&acc.account_number),
        escape_html(&acc.email),
        escape_html(phone),
        format_currency(acc.balance),
        status_indicator(&acc.status)
    )
}

/// List markup, or the empty-state message when there is nothing to show
pub fn render_account_list(accounts: Option<&[Account]>) -> String {
    match accounts {
        Some(accs) if !accs.is_empty() => accs.iter().map(render_account_list_item).collect(),
        _ => empty_state(NO_ACCOUNTS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(phone: Option<&str>) -> Account {
        Account {
            account_number: "100001".to_string(),
            account_holder_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: phone.map(str::to_string),
            balance: Some(2500.0),
            status: "active".to_string(),
            account_type: "checking".to_string(),
        }
    }

    #[test]
    fn test_list_item() {
        let html = render_account_list_item(&account(Some("555-0100")));
        assert!(html.contains("Ada Lovelace (100001)"));
        assert!(html.contains("ada@example.com | 555-0100"));
        assert!(html.contains("$2,500.00"));
        assert!(html.contains("status-active"));
    }

    #[test]
    fn test_missing_phone() {
        assert!(render_account_list_item(&account(None)).contains("| N/A"));
        assert!(render_account_list_item(&account(Some(""))).contains("| N/A"));
    }

    #[test]
    fn test_empty_list_is_only_the_message() {
        assert_eq!(render_account_list(Some(&[])), "<p>No accounts found.</p>");
        assert_eq!(render_account_list(None), "<p>No accounts found.</p>");
    }
}
