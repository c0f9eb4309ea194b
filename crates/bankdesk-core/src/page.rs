//! Headless document model
//!
//! Holds what a browser would show: the active screen, the tab bar, the view
//! container and the elements of the mounted fragment (markup, visibility,
//! form values), plus the alert areas. Elements are addressed by their `id`
//! attribute exactly as the fragment markup declares them.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::alert::{AlertStack, AlertTarget};
use crate::types::ViewId;

pub const CURRENT_USER: &str = "currentUser";
pub const CURRENT_USER_ROLE: &str = "currentUserRole";
pub const LOGIN_USERNAME: &str = "loginUsername";
pub const LOGIN_PASSWORD: &str = "loginPassword";

/// Top-level screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Main,
}

/// What the view container currently holds
#[derive(Debug, Clone, PartialEq)]
pub enum Container {
    Empty,
    Loading(ViewId),
    Failed(String),
    Mounted { view: ViewId, fragment: String },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub html: String,
    pub hidden: bool,
}

#[derive(Debug)]
pub struct Page {
    screen: Screen,
    container: Container,
    active_tab: Option<ViewId>,
    hidden_tabs: BTreeSet<ViewId>,
    /// Shell-level elements (user labels), never replaced by a fragment
    shell: BTreeMap<String, Element>,
    /// Elements of the mounted fragment
    elements: BTreeMap<String, Element>,
    fields: BTreeMap<String, String>,
    pub alerts: AlertStack,
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Page {
    pub fn new() -> Self {
        let shell = [CURRENT_USER, CURRENT_USER_ROLE]
            .into_iter()
            .map(|id| (id.to_string(), Element::default()))
            .collect();
        let fields = [LOGIN_USERNAME, LOGIN_PASSWORD]
            .into_iter()
            .map(|id| (id.to_string(), String::new()))
            .collect();
        Self {
            screen: Screen::Login,
            container: Container::Empty,
            active_tab: None,
            hidden_tabs: BTreeSet::new(),
            shell,
            elements: BTreeMap::new(),
            fields,
            alerts: AlertStack::new(),
        }
    }

    // ==================== Screens & tabs ====================

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn show_screen(&mut self, screen: Screen) {
        self.screen = screen;
    }

    pub fn active_tab(&self) -> Option<ViewId> {
        self.active_tab
    }

    /// Mark one tab active, clearing every other
    pub fn activate_tab(&mut self, view: ViewId) {
        self.active_tab = Some(view);
    }

    pub fn set_tab_visible(&mut self, view: ViewId, visible: bool) {
        if visible {
            self.hidden_tabs.remove(&view);
        } else {
            self.hidden_tabs.insert(view);
        }
    }

    pub fn is_tab_visible(&self, view: ViewId) -> bool {
        !self.hidden_tabs.contains(&view)
    }

    // ==================== View container ====================

    pub fn container(&self) -> &Container {
        &self.container
    }

    /// Markup currently shown in the view container
    pub fn container_html(&self) -> String {
        match &self.container {
            Container::Empty => String::new(),
            Container::Loading(view) => format!("<p>Loading {}...</p>", view),
            Container::Failed(reason) => format!(
                "<p class=\"alert alert-error\">Error loading view: {}</p>",
                bankdesk_utils::escape_html(reason)
            ),
            Container::Mounted { fragment, .. } => fragment.clone(),
        }
    }

    /// Current mounted view, if any
    pub fn mounted_view(&self) -> Option<ViewId> {
        match &self.container {
            Container::Mounted { view, .. } => Some(*view),
            _ => None,
        }
    }

    pub fn show_loading(&mut self, view: ViewId) {
        self.unmount();
        self.container = Container::Loading(view);
    }

    pub fn show_load_error(&mut self, reason: impl Into<String>) {
        self.unmount();
        self.container = Container::Failed(reason.into());
    }

    /// Replace the container with a fragment and register its elements
    pub fn mount(&mut self, view: ViewId, fragment: String) {
        self.unmount();
        for (id, is_field) in scan_ids(&fragment) {
            if is_field {
                self.fields.insert(id.clone(), String::new());
            }
            self.elements.insert(id, Element::default());
        }
        self.container = Container::Mounted { view, fragment };
    }

    fn unmount(&mut self) {
        for id in std::mem::take(&mut self.elements).into_keys() {
            self.fields.remove(&id);
        }
        self.container = Container::Empty;
    }

    // ==================== Elements ====================

    pub fn has_element(&self, id: &str) -> bool {
        self.elements.contains_key(id) || self.shell.contains_key(id)
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id).or_else(|| self.shell.get(id))
    }

    pub fn html(&self, id: &str) -> Option<&str> {
        self.element(id).map(|e| e.html.as_str())
    }

    /// Replace an element's markup; false if the element does not exist
    pub fn set_html(&mut self, id: &str, html: impl Into<String>) -> bool {
        match self.elements.get_mut(id).or_else(|| self.shell.get_mut(id)) {
            Some(element) => {
                element.html = html.into();
                true
            }
            None => {
                log::debug!("no element '{}' in the current page", id);
                false
            }
        }
    }

    /// Replace an element's content with escaped text
    pub fn set_text(&mut self, id: &str, text: &str) -> bool {
        self.set_html(id, bankdesk_utils::escape_html(text))
    }

    pub fn set_hidden(&mut self, id: &str, hidden: bool) -> bool {
        match self.elements.get_mut(id).or_else(|| self.shell.get_mut(id)) {
            Some(element) => {
                element.hidden = hidden;
                true
            }
            None => false,
        }
    }

    pub fn is_hidden(&self, id: &str) -> bool {
        self.element(id).map_or(false, |e| e.hidden)
    }

    // ==================== Form fields ====================

    /// Value of an input; empty for unknown fields
    pub fn field(&self, id: &str) -> &str {
        self.fields.get(id).map(String::as_str).unwrap_or("")
    }

    pub fn has_field(&self, id: &str) -> bool {
        self.fields.contains_key(id)
    }

    /// Set an input's value; false if no such input is on the page
    pub fn set_field(&mut self, id: &str, value: impl Into<String>) -> bool {
        match self.fields.get_mut(id) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Reset the given inputs to empty
    pub fn reset_fields(&mut self, ids: &[&str]) {
        for id in ids {
            if let Some(slot) = self.fields.get_mut(*id) {
                slot.clear();
            }
        }
    }

    /// Forget everything tied to the main screen
    pub fn clear_main(&mut self) {
        self.unmount();
        self.active_tab = None;
        for element in self.shell.values_mut() {
            *element = Element::default();
        }
    }
}

/// Collect `id="..."` attributes; the flag marks form inputs
fn scan_ids(fragment: &str) -> Vec<(String, bool)> {
    let mut ids = Vec::new();
    let mut tag_start: Option<usize> = None;
    let bytes = fragment.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'<' {
            tag_start = Some(i);
        }
        if bytes[i..].starts_with(b" id=\"") {
            let value_start = i + 5;
            if let Some(len) = fragment[value_start..].find('"') {
                let id = &fragment[value_start..value_start + len];
                // An id in text outside any tag is never a form input
                let tag = tag_start
                    .and_then(|start| fragment.get(start + 1..i))
                    .and_then(|t| t.split_whitespace().next())
                    .unwrap_or("");
                let is_field = matches!(tag, "input" | "select" | "textarea");
                ids.push((id.to_string(), is_field));
                i = value_start + len;
                continue;
            }
        }
        i += 1;
    }
    ids
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for target in [AlertTarget::Login, AlertTarget::Main] {
            for alert in self.alerts.alerts(target) {
                writeln!(f, "[{:?}] {}", alert.kind, alert.message)?;
            }
        }
        match self.screen {
            Screen::Login => {
                writeln!(f, "== Login ==")?;
                writeln!(f, "{}: {}", LOGIN_USERNAME, self.field(LOGIN_USERNAME))
            }
            Screen::Main => {
                writeln!(
                    f,
                    "== {} ({}) ==",
                    self.html(CURRENT_USER).unwrap_or(""),
                    self.html(CURRENT_USER_ROLE).unwrap_or("")
                )?;
                let tabs: Vec<String> = ViewId::ALL
                    .iter()
                    .filter(|v| self.is_tab_visible(**v))
                    .map(|v| {
                        if Some(*v) == self.active_tab {
                            format!("[{}]", v)
                        } else {
                            v.to_string()
                        }
                    })
                    .collect();
                writeln!(f, "{}", tabs.join(" | "))?;
                match &self.container {
                    Container::Mounted { view, .. } => {
                        writeln!(f, "-- {} --", view)?;
                        for (id, element) in &self.elements {
                            if element.hidden {
                                continue;
                            }
                            if let Some(value) = self.fields.get(id) {
                                writeln!(f, "{} = {:?}", id, value)?;
                            } else if !element.html.is_empty() {
                                writeln!(f, "#{}: {}", id, element.html)?;
                            }
                        }
                        Ok(())
                    }
                    _ => writeln!(f, "{}", self.container_html()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAGMENT: &str = r#"<div id="createAccountCard"><form id="createAccountForm">
<input type="text" id="newAccountName"><select id="newAccountType"></select></form></div>
<div id="accountsListContainer"></div>"#;

    #[test]
    fn test_scan_ids() {
        let ids = scan_ids(FRAGMENT);
        assert_eq!(
            ids,
            vec![
                ("createAccountCard".to_string(), false),
                ("createAccountForm".to_string(), false),
                ("newAccountName".to_string(), true),
                ("newAccountType".to_string(), true),
                ("accountsListContainer".to_string(), false),
            ]
        );
    }

    #[test]
    fn test_scan_ids_before_first_tag() {
        assert_eq!(
            scan_ids(" id=\"x\"<div id=\"y\"></div>"),
            vec![("x".to_string(), false), ("y".to_string(), false)]
        );
        assert_eq!(
            scan_ids("é id=\"x\"<input id=\"y\">"),
            vec![("x".to_string(), false), ("y".to_string(), true)]
        );

        let mut page = Page::new();
        page.mount(ViewId::Reports, "é id=\"x\"<div id=\"y\"></div>".to_string());
        assert!(page.has_element("y"));
        assert!(!page.has_field("x"));
    }

    #[test]
    fn test_mount_replaces_previous_fragment() {
        let mut page = Page::new();
        page.mount(ViewId::Accounts, FRAGMENT.to_string());
        assert!(page.set_field("newAccountName", "Ada"));
        assert!(page.set_html("accountsListContainer", "<p>x</p>"));

        page.mount(ViewId::Transfer, "<select id=\"fromAccount\"></select>".to_string());
        assert!(!page.has_element("accountsListContainer"));
        assert!(!page.has_field("newAccountName"));
        assert!(page.has_field("fromAccount"));
        assert!(!page.set_html("accountsListContainer", "late"));
        assert_eq!(page.mounted_view(), Some(ViewId::Transfer));
    }

    #[test]
    fn test_container_states() {
        let mut page = Page::new();
        page.show_loading(ViewId::Reports);
        assert_eq!(page.container_html(), "<p>Loading reports...</p>");
        page.show_load_error("View not found");
        assert_eq!(
            page.container_html(),
            "<p class=\"alert alert-error\">Error loading view: View not found</p>"
        );
        assert_eq!(page.mounted_view(), None);
    }

    #[test]
    fn test_login_fields_survive_mounts() {
        let mut page = Page::new();
        assert!(page.set_field(LOGIN_USERNAME, "admin"));
        page.mount(ViewId::Dashboard, String::new());
        page.clear_main();
        assert_eq!(page.field(LOGIN_USERNAME), "admin");
    }

    #[test]
    fn test_hidden_and_tabs() {
        let mut page = Page::new();
        page.mount(ViewId::Accounts, FRAGMENT.to_string());
        assert!(page.set_hidden("createAccountCard", true));
        assert!(page.is_hidden("createAccountCard"));
        page.set_tab_visible(ViewId::Reports, false);
        assert!(!page.is_tab_visible(ViewId::Reports));
        page.activate_tab(ViewId::Accounts);
        page.activate_tab(ViewId::Transfer);
        assert_eq!(page.active_tab(), Some(ViewId::Transfer));
    }

    #[test]
    fn test_reset_fields() {
        let mut page = Page::new();
        page.mount(ViewId::Accounts, FRAGMENT.to_string());
        page.set_field("newAccountName", "Ada");
        page.reset_fields(&["newAccountName", "missing"]);
        assert_eq!(page.field("newAccountName"), "");
    }
}
