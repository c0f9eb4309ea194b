//! Debounced search fields
//!
//! Every keystroke takes a new input ticket and schedules a wakeup after the
//! quiet window; only a wakeup still holding the latest ticket issues a
//! request. Requests take a ticket from a separate generation counter and
//! only the response holding the latest one is rendered. Tickets carry the
//! view epoch, so anything issued for replaced markup never matches.

use std::time::Duration;

use bankdesk_core::ViewId;

/// Position in a counter, scoped to a view epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub epoch: u64,
    pub seq: u64,
}

/// Monotonic counter; only the last issued ticket is current
#[derive(Debug, Default, Clone)]
pub struct Generation {
    latest: Option<Ticket>,
}

impl Generation {
    pub fn next(&mut self, epoch: u64) -> Ticket {
        let seq = self.latest.map_or(1, |t| t.seq + 1);
        let ticket = Ticket { epoch, seq };
        self.latest = Some(ticket);
        ticket
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest == Some(ticket)
    }
}

/// Inputs whose changes trigger a debounced fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    /// Accounts view search box
    AccountSearch,
    /// Transactions view account filter
    TransactionFilter,
}

impl SearchField {
    pub const ALL: [SearchField; 2] = [SearchField::AccountSearch, SearchField::TransactionFilter];

    pub fn input_id(&self) -> &'static str {
        match self {
            SearchField::AccountSearch => "searchAccountInput",
            SearchField::TransactionFilter => "transactionFilterAccount",
        }
    }

    pub fn from_input_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.input_id() == id)
    }

    /// View whose fragment contains the input
    pub fn view(&self) -> ViewId {
        match self {
            SearchField::AccountSearch => ViewId::Accounts,
            SearchField::TransactionFilter => ViewId::Transactions,
        }
    }
}

/// Input and request tracking for one field
#[derive(Debug, Clone)]
pub struct Debounce {
    pub delay: Duration,
    input: Generation,
    requests: Generation,
}

impl Debounce {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            input: Generation::default(),
            requests: Generation::default(),
        }
    }

    /// Record a keystroke
    pub fn touch(&mut self, epoch: u64) -> Ticket {
        self.input.next(epoch)
    }

    /// Whether a wakeup should fire its request
    pub fn is_settled(&self, ticket: Ticket) -> bool {
        self.input.is_current(ticket)
    }

    /// Claim the next request generation
    pub fn issue(&mut self, epoch: u64) -> Ticket {
        self.requests.next(epoch)
    }

    /// Whether a response should be rendered
    pub fn accepts(&self, ticket: Ticket) -> bool {
        self.requests.is_current(ticket)
    }
}

/// Debounce state of every search field
#[derive(Debug, Clone)]
pub struct Searches {
    pub accounts: Debounce,
    pub transactions: Debounce,
}

impl Searches {
    pub fn new(accounts_delay: Duration, transactions_delay: Duration) -> Self {
        Self {
            accounts: Debounce::new(accounts_delay),
            transactions: Debounce::new(transactions_delay),
        }
    }

    pub fn get(&self, field: SearchField) -> &Debounce {
        match field {
            SearchField::AccountSearch => &self.accounts,
            SearchField::TransactionFilter => &self.transactions,
        }
    }

    pub fn get_mut(&mut self, field: SearchField) -> &mut Debounce {
        match field {
            SearchField::AccountSearch => &mut self.accounts,
            SearchField::TransactionFilter => &mut self.transactions,
        }
    }
}
