//! View fragment sources
//!
//! A fragment is the markup of one view, looked up by the view's name.

use async_trait::async_trait;
use bankdesk_core::ViewId;
use std::path::PathBuf;
use std::sync::Arc;

use crate::error::FragmentError;
use crate::transport::{HttpRequest, Method, TransportRef};

/// Fragment source reference type
pub type FragmentSourceRef = Arc<dyn FragmentSource>;

#[async_trait]
pub trait FragmentSource: Send + Sync {
    async fn load(&self, view: ViewId) -> Result<String, FragmentError>;
}

/// Fragments compiled into the binary
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedFragments;

impl EmbeddedFragments {
    pub fn get(view: ViewId) -> &'static str {
        match view {
            ViewId::Dashboard => include_str!("../views/dashboard.html"),
            ViewId::Accounts => include_str!("../views/accounts.html"),
            ViewId::Transactions => include_str!("../views/transactions.html"),
            ViewId::Transfer => include_str!("../views/transfer.html"),
            ViewId::Reports => include_str!("../views/reports.html"),
        }
    }
}

#[async_trait]
impl FragmentSource for EmbeddedFragments {
    async fn load(&self, view: ViewId) -> Result<String, FragmentError> {
        Ok(Self::get(view).to_string())
    }
}

/// `<dir>/<view>.html`
#[derive(Debug, Clone)]
pub struct DirFragments {
    dir: PathBuf,
}

impl DirFragments {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl FragmentSource for DirFragments {
    async fn load(&self, view: ViewId) -> Result<String, FragmentError> {
        let path = self.dir.join(format!("{}.html", view));
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(FragmentError::NotFound {
                view: view.to_string(),
            }),
            Err(e) => Err(FragmentError::Io(e)),
        }
    }
}

/// `GET <base>/views/<view>.html`
#[derive(Clone)]
pub struct HttpFragments {
    transport: TransportRef,
    base_url: String,
}

impl HttpFragments {
    pub fn new(transport: TransportRef, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl FragmentSource for HttpFragments {
    async fn load(&self, view: ViewId) -> Result<String, FragmentError> {
        let response = self
            .transport
            .send(HttpRequest {
                method: Method::Get,
                url: format!("{}/views/{}.html", self.base_url, view),
                body: None,
            })
            .await?;
        if !response.is_success() {
            return Err(FragmentError::NotFound { view: view.to_string() });
        }
        Ok(String::from_utf8_lossy(&response.body).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockTransport;

    #[tokio::test]
    async fn test_embedded_fragments_declare_their_containers() {
        let accounts = EmbeddedFragments.load(ViewId::Accounts).await.unwrap();
        assert!(accounts.contains("id=\"accountsListContainer\""));
        for view in ViewId::ALL {
            assert!(!EmbeddedFragments::get(view).is_empty());
        }
    }

    #[tokio::test]
    async fn test_dir_fragments() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("reports.html"), "<div id=\"x\"></div>").unwrap();
        let source = DirFragments::new(dir.path());
        assert_eq!(source.load(ViewId::Reports).await.unwrap(), "<div id=\"x\"></div>");
        let err = source.load(ViewId::Dashboard).await.unwrap_err();
        assert!(matches!(err, FragmentError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_http_fragments() {
        let mock = Arc::new(MockTransport::new("http://bank"));
        mock.on_raw(Method::Get, "/views/transfer.html", 200, "<form id=\"transferForm\"></form>");
        let source = HttpFragments::new(mock.clone(), "http://bank/");
        assert!(source.load(ViewId::Transfer).await.unwrap().contains("transferForm"));
        assert!(matches!(
            source.load(ViewId::Reports).await.unwrap_err(),
            FragmentError::NotFound { .. }
        ));
    }
}
