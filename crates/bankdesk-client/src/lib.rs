//! Outbound side of bankdesk: the JSON API client and view fragment sources

pub mod api;
pub mod error;
pub mod fragments;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod transport;

pub use api::{accounts_path, transactions_path, ApiClient, Reported};
pub use error::{ApiFailure, FragmentError, TransportError};
pub use fragments::{DirFragments, EmbeddedFragments, FragmentSource, FragmentSourceRef, HttpFragments};
pub use transport::{HttpRequest, HttpResponse, HyperTransport, Method, Transport, TransportRef};

#[cfg(any(test, feature = "testing"))]
pub use testing::MockTransport;
