//! Basic types: roles, capabilities and view identifiers

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// User role as reported by the backend
///
/// Only `admin` carries meaning for the client; any other role string is
/// kept verbatim for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Staff(String),
}

impl Role {
    /// Whether this role is granted a capability
    pub fn grants(&self, capability: Capability) -> bool {
        match (self, capability) {
            (Role::Admin, _) => true,
            (Role::Staff(_), Capability::CreateAccount) => false,
            (Role::Staff(_), Capability::ViewReports) => false,
        }
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        if s == "admin" {
            Role::Admin
        } else {
            Role::Staff(s)
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.to_string()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Staff(name) => write!(f, "{}", name),
        }
    }
}

/// Actions gated by role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Open new accounts from the accounts view
    CreateAccount,
    /// See the reports tab
    ViewReports,
}

/// Independently loadable screens of the main application
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewId {
    Dashboard,
    Accounts,
    Transactions,
    Transfer,
    Reports,
}

impl ViewId {
    pub const ALL: [ViewId; 5] = [
        ViewId::Dashboard,
        ViewId::Accounts,
        ViewId::Transactions,
        ViewId::Transfer,
        ViewId::Reports,
    ];

    /// Fragment name, also used as the tab's `data-view`
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewId::Dashboard => "dashboard",
            ViewId::Accounts => "accounts",
            ViewId::Transactions => "transactions",
            ViewId::Transfer => "transfer",
            ViewId::Reports => "reports",
        }
    }

    /// Capability needed for the tab to be shown
    pub fn required_capability(&self) -> Option<Capability> {
        match self {
            ViewId::Reports => Some(Capability::ViewReports),
            _ => None,
        }
    }
}

impl Default for ViewId {
    fn default() -> Self {
        ViewId::Dashboard
    }
}

impl std::str::FromStr for ViewId {
    type Err = CoreError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dashboard" => Ok(ViewId::Dashboard),
            "accounts" => Ok(ViewId::Accounts),
            "transactions" => Ok(ViewId::Transactions),
            "transfer" => Ok(ViewId::Transfer),
            "reports" => Ok(ViewId::Reports),
            _ => Err(CoreError::UnknownView { name: s.to_string() }),
        }
    }
}

impl std::fmt::Display for ViewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of a transaction as seen from its account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Credit,
    Debit,
}

impl Direction {
    /// Credit iff the type contains "in" or is exactly "deposit"
    pub fn classify(transaction_type: &str) -> Self {
        if transaction_type.contains("in") || transaction_type == "deposit" {
            Direction::Credit
        } else {
            Direction::Debit
        }
    }

    pub fn sign(&self) -> &'static str {
        match self {
            Direction::Credit => "+",
            Direction::Debit => "-",
        }
    }

    /// Style class applied to the amount cell
    pub fn css_class(&self) -> &'static str {
        match self {
            Direction::Credit => "amount-positive",
            Direction::Debit => "amount-negative",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trips_through_string() {
        let admin: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(admin, Role::Admin);
        let teller: Role = serde_json::from_str("\"customer\"").unwrap();
        assert_eq!(teller, Role::Staff("customer".to_string()));
        assert_eq!(serde_json::to_string(&teller).unwrap(), "\"customer\"");
    }

    #[test]
    fn test_capabilities() {
        assert!(Role::Admin.grants(Capability::CreateAccount));
        assert!(Role::Admin.grants(Capability::ViewReports));
        let manager = Role::Staff("manager".to_string());
        assert!(!manager.grants(Capability::CreateAccount));
        assert!(!manager.grants(Capability::ViewReports));
    }

    #[test]
    fn test_view_id_parse() {
        assert_eq!("accounts".parse::<ViewId>().unwrap(), ViewId::Accounts);
        assert_eq!("Transfer".parse::<ViewId>().unwrap(), ViewId::Transfer);
        assert!("settings".parse::<ViewId>().is_err());
        for view in ViewId::ALL {
            assert_eq!(view.as_str().parse::<ViewId>().unwrap(), view);
        }
    }

    #[test]
    fn test_direction_classify() {
        assert_eq!(Direction::classify("deposit"), Direction::Credit);
        assert_eq!(Direction::classify("transfer_in"), Direction::Credit);
        assert_eq!(Direction::classify("withdrawal"), Direction::Debit);
        assert_eq!(Direction::classify("transfer_out"), Direction::Debit);
        assert_eq!(Direction::Credit.sign(), "+");
        assert_eq!(Direction::Debit.css_class(), "amount-negative");
    }
}
