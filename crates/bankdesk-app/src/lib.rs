//! bankdesk application layer
//!
//! - views: per-view controllers and rendering
//! - shell: event loop, login/logout and view routing
//! - debounce: search tickets and response generations
//! - event: everything the shell reacts to

pub mod debounce;
pub mod event;
pub mod shell;
pub mod views;

pub use debounce::{Debounce, Generation, SearchField, Searches, Ticket};
pub use event::{Button, Event, Form, SearchOutcome};
pub use shell::Shell;
