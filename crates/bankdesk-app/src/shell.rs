//! Application shell
//!
//! Owns the page, the application state and the session, and processes one
//! event at a time from an unbounded channel. Timers and background searches
//! run as spawned tasks that post their outcome back into the channel, so
//! every state change happens inside `dispatch`.

use std::time::Duration;

use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use bankdesk_client::{ApiClient, FragmentSourceRef, Reported};
use bankdesk_config::UiConfig;
use bankdesk_core::page::{CURRENT_USER, CURRENT_USER_ROLE, LOGIN_PASSWORD, LOGIN_USERNAME};
use bankdesk_core::{
    AlertKind, AlertTarget, AppState, Capability, LoginRequest, Page, Screen, User, UserSession, ViewId,
};

use crate::debounce::{SearchField, Searches, Ticket};
use crate::event::{Button, Event, Form, SearchOutcome};
use crate::views::{self, accounts, transactions, ViewContext};

pub struct Shell {
    page: Page,
    state: AppState,
    session: UserSession,
    api: ApiClient,
    fragments: FragmentSourceRef,
    ui: UiConfig,
    /// Bumped on every view load and on logout
    epoch: u64,
    searches: Searches,
    tx: UnboundedSender<Event>,
    rx: UnboundedReceiver<Event>,
    /// Debounce wakeups and searches that will still post an event
    pending: usize,
}

impl Shell {
    pub fn new(api: ApiClient, fragments: FragmentSourceRef, session: UserSession, ui: UiConfig) -> Self {
        let (tx, rx) = unbounded_channel();
        Self {
            page: Page::new(),
            state: AppState::new(),
            session,
            api,
            fragments,
            searches: Searches::new(ui.accounts_debounce(), ui.transactions_debounce()),
            ui,
            epoch: 0,
            tx,
            rx,
            pending: 0,
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn session(&self) -> &UserSession {
        &self.session
    }

    /// Pick the initial screen from the stored session
    pub async fn start(&mut self) {
        match self.session.load() {
            Ok(Some(user)) => {
                log::info!("restored session for {}", user.username);
                self.enter_main(user).await;
            }
            Ok(None) => self.page.show_screen(Screen::Login),
            Err(e) => {
                e.log("load session");
                if let Err(e) = self.session.clear() {
                    e.log("clear session");
                }
                self.page.show_screen(Screen::Login);
            }
        }
        self.schedule_alerts();
    }

    /// Wait for the next event posted by a timer or background task
    pub async fn next_event(&mut self) -> Option<Event> {
        self.rx.recv().await
    }

    /// Dispatch every event already queued
    pub async fn pump(&mut self) {
        while let Ok(event) = self.rx.try_recv() {
            self.dispatch(event).await;
        }
    }

    /// Dispatch events until no debounce wakeup or search is outstanding
    ///
    /// Alert timers are not waited for.
    pub async fn settle(&mut self) {
        loop {
            self.pump().await;
            if self.pending == 0 {
                break;
            }
            match self.rx.recv().await {
                Some(event) => self.dispatch(event).await,
                None => break,
            }
        }
    }

    pub async fn dispatch(&mut self, event: Event) {
        match event {
            Event::Login => self.login().await,
            Event::Logout => self.logout(),
            Event::TabClicked(view) => self.tab_clicked(view).await,
            Event::Input { field, value } => self.input(&field, value),
            Event::Submit(form) => self.submit(form).await,
            Event::Click(button) => self.click(button).await,
            Event::DebounceElapsed { field, ticket } => self.debounce_elapsed(field, ticket),
            Event::SearchLoaded { field, ticket, outcome } => self.search_loaded(field, ticket, outcome),
            Event::AlertFade(id) => {
                self.page.alerts.fade(id);
            }
            Event::AlertExpire(id) => {
                self.page.alerts.remove(id);
            }
        }
        self.schedule_alerts();
    }

    fn view_ctx(&mut self) -> ViewContext<'_> {
        ViewContext {
            page: &mut self.page,
            state: &mut self.state,
            api: &self.api,
            ui: &self.ui,
            searches: &mut self.searches,
            epoch: self.epoch,
        }
    }

    // ==================== Session ====================

    async fn login(&mut self) {
        if self.page.screen() != Screen::Login {
            log::debug!("login ignored: already logged in");
            return;
        }

        let request = LoginRequest {
            username: self.page.field(LOGIN_USERNAME).to_string(),
            password: self.page.field(LOGIN_PASSWORD).to_string(),
        };
        let response = self
            .api
            .login(&request)
            .await
            .reported_to(&mut self.page.alerts, AlertTarget::Login);
        let Some(response) = response else {
            return;
        };

        match response.user {
            Some(user) => {
                log::info!("user {} logged in", user.username);
                if let Err(e) = self.session.save(&user) {
                    e.log("save session");
                }
                self.page.reset_fields(&[LOGIN_PASSWORD]);
                self.page.alerts.success("Login successful!");
                self.enter_main(user).await;
            }
            None => {
                self.page.alerts.push(AlertTarget::Login, AlertKind::Error, "Login failed.");
            }
        }
    }

    fn logout(&mut self) {
        if self.page.screen() != Screen::Main {
            log::debug!("logout ignored: not logged in");
            return;
        }
        if let Some(user) = self.state.user.take() {
            log::info!("user {} logged out", user.username);
        }
        self.state.cache_accounts(None);
        if let Err(e) = self.session.clear() {
            e.log("clear session");
        }
        self.epoch += 1;
        self.page.clear_main();
        self.page.reset_fields(&[LOGIN_USERNAME, LOGIN_PASSWORD]);
        self.page.show_screen(Screen::Login);
    }

    async fn enter_main(&mut self, user: User) {
        self.page.set_text(CURRENT_USER, &user.username);
        self.page.set_text(CURRENT_USER_ROLE, &user.role.to_string());
        self.page
            .set_tab_visible(ViewId::Reports, user.can(Capability::ViewReports));
        self.state.user = Some(user);
        self.page.show_screen(Screen::Main);
        self.load_view(ViewId::Dashboard).await;
    }

    // ==================== Views ====================

    async fn tab_clicked(&mut self, view: ViewId) {
        if self.page.screen() != Screen::Main || !self.page.is_tab_visible(view) {
            log::debug!("tab '{}' ignored: not available", view);
            return;
        }
        if let Some(capability) = view.required_capability() {
            if !self.state.can(capability) {
                log::debug!("tab '{}' ignored: user lacks {:?}", view, capability);
                return;
            }
        }
        self.load_view(view).await;
    }

    async fn load_view(&mut self, view: ViewId) {
        self.epoch += 1;
        self.page.activate_tab(view);
        self.page.show_loading(view);

        match self.fragments.load(view).await {
            Ok(fragment) => {
                log::info!("loaded view {}", view);
                self.page.mount(view, fragment);
                views::setup(view, &mut self.view_ctx()).await;
            }
            Err(e) => {
                log::warn!("failed to load view {}: {}", view, e);
                self.page.show_load_error(e.to_string());
            }
        }
    }

    async fn submit(&mut self, form: Form) {
        if self.page.mounted_view() != Some(form.view()) {
            log::debug!("submit of {} ignored: view not loaded", form.id());
            return;
        }
        views::submit(form, &mut self.view_ctx()).await;
    }

    async fn click(&mut self, button: Button) {
        if self.page.mounted_view() != Some(button.view()) {
            log::debug!("click on {} ignored: view not loaded", button.id());
            return;
        }
        views::click(button, &mut self.view_ctx()).await;
    }

    // ==================== Debounced searches ====================

    fn input(&mut self, field: &str, value: String) {
        if !self.page.set_field(field, value) {
            log::debug!("input to '{}' ignored: no such field", field);
            return;
        }
        let Some(search) = SearchField::from_input_id(field) else {
            return;
        };
        if self.page.mounted_view() != Some(search.view()) {
            return;
        }

        let debounce = self.searches.get_mut(search);
        let ticket = debounce.touch(self.epoch);
        let delay = debounce.delay;
        self.pending += 1;
        self.post_after(delay, Event::DebounceElapsed { field: search, ticket });
    }

    fn debounce_elapsed(&mut self, field: SearchField, ticket: Ticket) {
        self.pending = self.pending.saturating_sub(1);
        if ticket.epoch != self.epoch || !self.searches.get(field).is_settled(ticket) {
            return;
        }

        let ticket = self.searches.get_mut(field).issue(self.epoch);
        if field == SearchField::AccountSearch {
            accounts::show_loading(&mut self.view_ctx());
        }

        let query = self.page.field(field.input_id()).to_string();
        log::debug!("search {:?} for '{}'", field, query);
        let api = self.api.clone();
        let tx = self.tx.clone();
        self.pending += 1;
        tokio::spawn(async move {
            let outcome = match field {
                SearchField::AccountSearch => SearchOutcome::Accounts(api.accounts(Some(&query), None).await),
                SearchField::TransactionFilter => {
                    SearchOutcome::Transactions(api.transactions(None, Some(&query)).await)
                }
            };
            let _ = tx.send(Event::SearchLoaded { field, ticket, outcome });
        });
    }

    fn search_loaded(&mut self, field: SearchField, ticket: Ticket, outcome: SearchOutcome) {
        self.pending = self.pending.saturating_sub(1);
        if ticket.epoch != self.epoch || !self.searches.get(field).accepts(ticket) {
            log::debug!("discarding stale {:?} response (epoch {}, seq {})", field, ticket.epoch, ticket.seq);
            return;
        }
        match outcome {
            SearchOutcome::Accounts(result) => accounts::render_result(&mut self.view_ctx(), result),
            SearchOutcome::Transactions(result) => transactions::render_result(&mut self.view_ctx(), result),
        }
    }

    // ==================== Timers ====================

    fn post_after(&self, delay: Duration, event: Event) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(event);
        });
    }

    fn schedule_alerts(&mut self) {
        let visible = self.ui.alert_visible();
        let fade = self.ui.alert_fade();
        for id in self.page.alerts.take_unscheduled() {
            let tx = self.tx.clone();
            tokio::spawn(async move {
                tokio::time::sleep(visible).await;
                let _ = tx.send(Event::AlertFade(id));
                tokio::time::sleep(fade).await;
                let _ = tx.send(Event::AlertExpire(id));
            });
        }
    }
}
