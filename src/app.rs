use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Mutex};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::action::{Action, Screen};
use crate::clock::Clock;
use crate::config::Config;
use crate::event::{Event, Wheel};
use crate::form::SignInForm;
use crate::list::LoadRequest;
use crate::mock::{DailyPerformance, MockDataGenerator};
use crate::session::{Authenticator, MockAuthenticator, Prompt, SessionGate};
use crate::source::{MockSource, RecordSource};
use crate::types::{Campaign, Lead};
use crate::view::ListView;

const PAGE_SIZE: isize = 10;
const PERFORMANCE_DAYS: u64 = 30;

/// Everything the app talks to outside its own state.
#[derive(Debug, Clone)]
pub struct Services {
    pub leads: Arc<dyn RecordSource<Lead>>,
    pub campaigns: Arc<dyn RecordSource<Campaign>>,
    pub authenticator: Arc<dyn Authenticator>,
    pub clock: Arc<dyn Clock>,
    /// Mixed with a campaign id to seed its detail charts.
    pub chart_seed: u64,
}

impl Services {
    pub fn mock(config: &Config, generator: MockDataGenerator, clock: Arc<dyn Clock>) -> Self {
        let generator = Arc::new(Mutex::new(generator));
        Self {
            leads: Arc::new(MockSource::<Lead>::new(
                Arc::clone(&generator),
                Arc::clone(&clock),
                config.latency(),
            )),
            campaigns: Arc::new(MockSource::<Campaign>::new(
                Arc::clone(&generator),
                Arc::clone(&clock),
                config.latency(),
            )),
            authenticator: Arc::new(MockAuthenticator::new(
                Arc::clone(&clock),
                config.auth.latency(),
            )),
            clock,
            chart_seed: config.general.seed.unwrap_or_else(rand::random),
        }
    }
}

pub struct App {
    pub screen: Screen,
    pub leads: ListView<Lead>,
    pub campaigns: ListView<Campaign>,
    /// Charts for the open campaign detail
    pub performance: Vec<DailyPerformance>,
    pub session: SessionGate,
    pub form: SignInForm,
    pub notice: Option<String>,
    pub error: Option<String>,
    pub should_quit: bool,
    services: Services,
    action_tx: mpsc::UnboundedSender<Action>,
}

impl App {
    pub fn new(
        config: &Config,
        session: SessionGate,
        services: Services,
        action_tx: mpsc::UnboundedSender<Action>,
    ) -> Self {
        Self {
            screen: Screen::default(),
            leads: ListView::new(config.lead_list()),
            campaigns: ListView::new(config.campaign_list()),
            performance: Vec::new(),
            session,
            form: SignInForm::default(),
            notice: None,
            error: None,
            should_quit: false,
            services,
            action_tx,
        }
    }

    pub fn handle_event(&self, event: Event) -> Action {
        match event {
            Event::Init => Action::Start,
            Event::Key(key) => self.handle_key(key),
            Event::Wheel(Wheel::Down) if self.session.is_authenticated() => Action::ScrollDown,
            Event::Wheel(Wheel::Up) if self.session.is_authenticated() => Action::ScrollUp,
            _ => Action::None,
        }
    }

    fn handle_key(&self, key: KeyEvent) -> Action {
        if !self.session.is_authenticated() {
            return self.handle_sign_in_key(key);
        }

        if self.is_searching() {
            return match key.code {
                KeyCode::Esc => Action::ClearSearch,
                KeyCode::Enter => Action::ExitSearchMode,
                KeyCode::Backspace => Action::SearchBackspace,
                KeyCode::Char(c) => Action::SearchInput(c),
                _ => Action::None,
            };
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('d') if ctrl => Action::PageDown,
            KeyCode::Char('u') if ctrl => Action::PageUp,
            KeyCode::Char('q') => {
                if self.detail_open() {
                    Action::Back
                } else {
                    Action::Quit
                }
            }
            KeyCode::Esc => Action::Back,
            KeyCode::Char('j') | KeyCode::Down => Action::ScrollDown,
            KeyCode::Char('k') | KeyCode::Up => Action::ScrollUp,
            KeyCode::PageDown => Action::PageDown,
            KeyCode::PageUp => Action::PageUp,
            KeyCode::Char('g') | KeyCode::Home => Action::GoToTop,
            KeyCode::Char('G') | KeyCode::End => Action::GoToBottom,
            KeyCode::Enter => Action::Select,
            KeyCode::Tab => Action::NextScreen,
            KeyCode::BackTab => Action::PrevScreen,
            KeyCode::Char(c @ '1'..='6') => {
                let index = c as usize - '1' as usize;
                Action::SwitchScreen(Screen::ALL[index])
            }
            KeyCode::Char('/') if self.current_list_screen() => Action::EnterSearchMode,
            KeyCode::Char('r') if self.current_list_screen() => Action::RetryLoad,
            KeyCode::Char('o') if self.screen == Screen::Leads => Action::OpenProfile,
            KeyCode::Char('y') if self.screen == Screen::Leads => Action::YankEmail,
            KeyCode::Char('L') => Action::SignOut,
            _ => Action::None,
        }
    }

    fn handle_sign_in_key(&self, key: KeyEvent) -> Action {
        match self.session.prompt() {
            Prompt::Hidden => match key.code {
                KeyCode::Enter => Action::ShowSignIn,
                KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
                _ => Action::None,
            },
            Prompt::Submitting => Action::None,
            Prompt::Visible => match key.code {
                KeyCode::Esc => Action::HideSignIn,
                KeyCode::Tab | KeyCode::Down => Action::SignInNextField,
                KeyCode::BackTab | KeyCode::Up => Action::SignInPrevField,
                KeyCode::Left | KeyCode::Right => Action::SignInToggleMode,
                KeyCode::Enter => Action::SubmitSignIn,
                KeyCode::Backspace => Action::SignInBackspace,
                KeyCode::Char(c) => Action::SignInInput(c),
                _ => Action::None,
            },
        }
    }

    fn current_list_screen(&self) -> bool {
        matches!(self.screen, Screen::Leads | Screen::Campaigns)
    }

    pub fn is_searching(&self) -> bool {
        match self.screen {
            Screen::Leads => self.leads.searching,
            Screen::Campaigns => self.campaigns.searching,
            _ => false,
        }
    }

    fn has_query(&self) -> bool {
        match self.screen {
            Screen::Leads => !self.leads.query.is_empty(),
            Screen::Campaigns => !self.campaigns.query.is_empty(),
            _ => false,
        }
    }

    pub fn detail_open(&self) -> bool {
        match self.screen {
            Screen::Leads => self.leads.selection.is_open(),
            Screen::Campaigns => self.campaigns.selection.is_open(),
            _ => false,
        }
    }

    /// Whether the current table has a page in flight.
    pub fn loading(&self) -> bool {
        match self.screen {
            Screen::Leads => self.leads.list.is_loading(),
            Screen::Campaigns => self.campaigns.list.is_loading(),
            _ => false,
        }
    }

    pub fn update(&mut self, action: Action) {
        if self.error.is_some() && !matches!(action, Action::None | Action::Error(_)) {
            self.error = None;
        }

        match action {
            Action::Start => {
                if let Some(delay) = self.session.prompt_delay() {
                    self.spawn_prompt_timer(delay);
                }
                self.mount(self.screen);
            }
            Action::Quit => {
                self.should_quit = true;
            }
            Action::Back => {
                if self.detail_open() {
                    self.with_current_view(|view| view.selection.dismiss(), |view| {
                        view.selection.dismiss()
                    });
                } else if self.has_query() {
                    self.with_current_view(|view| view.clear_query(), |view| view.clear_query());
                } else if self.screen != Screen::Overview {
                    self.switch_screen(Screen::Overview);
                }
            }
            Action::ScrollUp => self.move_cursor(-1),
            Action::ScrollDown => self.move_cursor(1),
            Action::PageUp => self.move_cursor(-PAGE_SIZE),
            Action::PageDown => self.move_cursor(PAGE_SIZE),
            Action::GoToTop => {
                self.with_current_view(|view| view.cursor_to_top(), |view| view.cursor_to_top());
                self.follow_cursor();
            }
            Action::GoToBottom => {
                self.with_current_view(
                    |view| view.cursor_to_bottom(),
                    |view| view.cursor_to_bottom(),
                );
                self.follow_cursor();
                self.maybe_load_more();
            }
            Action::Select => match self.screen {
                Screen::Leads => self.leads.select_current(),
                Screen::Campaigns => {
                    self.campaigns.select_current();
                    if self.campaigns.selection.is_open() {
                        self.refresh_performance();
                    }
                }
                _ => {}
            },

            Action::NextScreen => self.switch_screen(self.screen.next()),
            Action::PrevScreen => self.switch_screen(self.screen.prev()),
            Action::SwitchScreen(screen) => self.switch_screen(screen),

            Action::LeadsLoaded(result, load_id) => {
                self.leads.complete(load_id, result);
            }
            Action::CampaignsLoaded(result, load_id) => {
                self.campaigns.complete(load_id, result);
            }
            Action::RetryLoad => match self.screen {
                Screen::Leads => {
                    if let Some(request) = self.leads.list.retry() {
                        self.spawn_leads_load(request);
                    }
                }
                Screen::Campaigns => {
                    if let Some(request) = self.campaigns.list.retry() {
                        self.spawn_campaigns_load(request);
                    }
                }
                _ => {}
            },

            Action::EnterSearchMode => {
                self.with_current_view(|view| view.searching = true, |view| view.searching = true);
            }
            Action::ExitSearchMode => {
                self.with_current_view(
                    |view| view.searching = false,
                    |view| view.searching = false,
                );
            }
            Action::SearchInput(c) => {
                self.with_current_view(|view| view.push_query(c), |view| view.push_query(c));
            }
            Action::SearchBackspace => {
                self.with_current_view(|view| view.pop_query(), |view| view.pop_query());
            }
            Action::ClearSearch => {
                self.with_current_view(|view| view.clear_query(), |view| view.clear_query());
            }

            Action::OpenProfile => {
                if let Some(lead) = self.leads.selection.current() {
                    if let Err(err) = open::that(&lead.linkedin_url) {
                        self.error = Some(format!("Could not open browser: {}", err));
                    }
                }
            }
            Action::YankEmail => {
                if let Some(lead) = self.leads.selection.current() {
                    let email = lead.email.clone();
                    match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(email.clone()))
                    {
                        Ok(()) => self.notice = Some(format!("Copied {}", email)),
                        Err(err) => self.error = Some(format!("Clipboard error: {}", err)),
                    }
                }
            }

            Action::ShowSignIn => self.session.show_prompt(),
            Action::HideSignIn => self.session.hide_prompt(),
            Action::SignInInput(c) => {
                if self.session.prompt() == Prompt::Visible {
                    self.form.input(c);
                }
            }
            Action::SignInBackspace => {
                if self.session.prompt() == Prompt::Visible {
                    self.form.backspace();
                }
            }
            Action::SignInNextField => self.form.next_field(),
            Action::SignInPrevField => self.form.prev_field(),
            Action::SignInToggleMode => self.form.toggle_mode(),
            Action::SubmitSignIn => {
                if self.session.prompt() != Prompt::Visible {
                    return;
                }
                let Some(credentials) = self.form.credentials() else {
                    return;
                };
                if self.session.begin_sign_in() {
                    self.spawn_sign_in(credentials);
                }
            }
            Action::SignInFinished(result, method) => {
                if self.session.finish_sign_in(result).is_ok() && self.session.is_authenticated()
                {
                    self.form.clear();
                    self.notice = Some(format!("Welcome to LinkBird! {}", method.welcome()));
                    self.mount(self.screen);
                }
            }
            Action::SignOut => {
                if let Err(err) = self.session.sign_out() {
                    return self.update(err.into());
                }
                self.leads.unmount();
                self.campaigns.unmount();
                self.screen = Screen::Overview;
                self.notice = None;
            }

            Action::Error(msg) => {
                self.error = Some(msg);
            }
            Action::None => {}
        }
    }

    fn with_current_view(
        &mut self,
        on_leads: impl FnOnce(&mut ListView<Lead>),
        on_campaigns: impl FnOnce(&mut ListView<Campaign>),
    ) {
        match self.screen {
            Screen::Leads => on_leads(&mut self.leads),
            Screen::Campaigns => on_campaigns(&mut self.campaigns),
            _ => {}
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        self.with_current_view(|view| view.move_cursor(delta), |view| view.move_cursor(delta));
        self.follow_cursor();
        if delta > 0 {
            self.maybe_load_more();
        }
    }

    /// An open detail tracks the row under the cursor.
    fn follow_cursor(&mut self) {
        if !self.detail_open() {
            return;
        }
        match self.screen {
            Screen::Leads => self.leads.select_current(),
            Screen::Campaigns => {
                self.campaigns.select_current();
                self.refresh_performance();
            }
            _ => {}
        }
    }

    fn maybe_load_more(&mut self) {
        match self.screen {
            Screen::Leads => {
                let signal = self.leads.scroll_signal();
                if let Some(request) = self.leads.list.maybe_load_more(signal) {
                    self.spawn_leads_load(request);
                }
            }
            Screen::Campaigns => {
                let signal = self.campaigns.scroll_signal();
                if let Some(request) = self.campaigns.list.maybe_load_more(signal) {
                    self.spawn_campaigns_load(request);
                }
            }
            _ => {}
        }
    }

    fn switch_screen(&mut self, screen: Screen) {
        if screen == self.screen {
            return;
        }
        match self.screen {
            Screen::Leads => self.leads.unmount(),
            Screen::Campaigns => {
                self.campaigns.unmount();
                self.performance.clear();
            }
            _ => {}
        }
        self.screen = screen;
        self.mount(screen);
    }

    fn mount(&mut self, screen: Screen) {
        if !self.session.is_authenticated() {
            return;
        }
        match screen {
            Screen::Leads => {
                let count = self.leads.list.config().batch_size;
                let ready = self.services.leads.ready_page(0, count);
                if let Some(request) = self.leads.mount(ready) {
                    self.spawn_leads_load(request);
                }
            }
            Screen::Campaigns => {
                let count = self.campaigns.list.config().batch_size;
                let ready = self.services.campaigns.ready_page(0, count);
                if let Some(request) = self.campaigns.mount(ready) {
                    self.spawn_campaigns_load(request);
                }
            }
            _ => {}
        }
    }

    /// Charts get their own generator so page data stays reproducible.
    fn refresh_performance(&mut self) {
        let Some(campaign) = self.campaigns.selection.current() else {
            return;
        };
        let mut hasher = DefaultHasher::new();
        self.services.chart_seed.hash(&mut hasher);
        campaign.id.hash(&mut hasher);
        self.performance = MockDataGenerator::seeded(hasher.finish()).performance(PERFORMANCE_DAYS);
    }

    fn spawn_leads_load(&self, request: LoadRequest) {
        let tx = self.action_tx.clone();
        let source = Arc::clone(&self.services.leads);
        tokio::spawn(async move {
            let result = source.fetch(request.start, request.count).await;
            tx.send(Action::LeadsLoaded(result, request.id)).ok();
        });
    }

    fn spawn_campaigns_load(&self, request: LoadRequest) {
        let tx = self.action_tx.clone();
        let source = Arc::clone(&self.services.campaigns);
        tokio::spawn(async move {
            let result = source.fetch(request.start, request.count).await;
            tx.send(Action::CampaignsLoaded(result, request.id)).ok();
        });
    }

    fn spawn_prompt_timer(&self, delay: std::time::Duration) {
        let tx = self.action_tx.clone();
        let clock = Arc::clone(&self.services.clock);
        tokio::spawn(async move {
            clock.sleep(delay).await;
            tx.send(Action::ShowSignIn).ok();
        });
    }

    fn spawn_sign_in(&self, credentials: crate::session::Credentials) {
        let tx = self.action_tx.clone();
        let authenticator = Arc::clone(&self.services.authenticator);
        tokio::spawn(async move {
            let result = authenticator.authenticate(&credentials).await;
            tx.send(Action::SignInFinished(result, credentials.method)).ok();
        });
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::clock::TokioClock;
    use crate::session::SESSION_KEY;
    use crate::storage::{MemoryStorage, Storage};
    use crate::types::Identity;

    fn app_with(storage: Arc<MemoryStorage>) -> (App, mpsc::UnboundedReceiver<Action>) {
        let config = Config::default();
        let (tx, rx) = mpsc::unbounded_channel();
        let session = SessionGate::start(storage, config.auth.prompt_delay());
        let services = Services::mock(&config, MockDataGenerator::seeded(1), Arc::new(TokioClock));
        (App::new(&config, session, services, tx), rx)
    }

    fn signed_in_app() -> (App, mpsc::UnboundedReceiver<Action>) {
        let storage = Arc::new(MemoryStorage::default());
        let identity = Identity {
            id: "1".to_string(),
            name: "John Smith".to_string(),
            email: "john@example.com".to_string(),
            avatar: String::new(),
        };
        storage
            .set(SESSION_KEY, &serde_json::to_string(&identity).unwrap())
            .unwrap();
        app_with(storage)
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            let action = app.handle_event(key(KeyCode::Char(c)));
            app.update(action);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn first_run_prompts_then_signs_in() {
        let storage = Arc::new(MemoryStorage::default());
        let (mut app, mut rx) = app_with(storage.clone());

        app.update(app.handle_event(Event::Init));
        assert!(!app.session.is_authenticated());
        assert!(!app.session.prompt_visible());

        let action = rx.recv().await.unwrap();
        assert!(matches!(action, Action::ShowSignIn));
        app.update(action);
        assert!(app.session.prompt_visible());

        type_text(&mut app, "ada@example.com");
        app.update(app.handle_event(key(KeyCode::Tab)));
        type_text(&mut app, "secret");
        app.update(app.handle_event(key(KeyCode::Enter)));
        assert_eq!(app.session.prompt(), Prompt::Submitting);

        // A second Enter while submitting does nothing.
        assert!(matches!(app.handle_event(key(KeyCode::Enter)), Action::None));

        let action = rx.recv().await.unwrap();
        app.update(action);
        assert!(app.session.is_authenticated());
        assert!(!app.session.prompt_visible());
        assert_eq!(
            app.notice.as_deref(),
            Some("Welcome to LinkBird! Signed in successfully.")
        );

        let stored: Identity = serde_json::from_str(&storage.get(SESSION_KEY).unwrap()).unwrap();
        assert_eq!(stored.email, "ada@example.com");
        assert_eq!(stored.name, "John Smith");
    }

    #[tokio::test(start_paused = true)]
    async fn stored_session_skips_prompt() {
        let (mut app, mut rx) = signed_in_app();
        app.update(Action::Start);
        assert!(app.session.is_authenticated());

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn empty_email_form_is_not_submitted() {
        let (mut app, _rx) = app_with(Arc::new(MemoryStorage::default()));
        app.update(Action::ShowSignIn);
        app.update(Action::SubmitSignIn);
        assert_eq!(app.session.prompt(), Prompt::Visible);
        assert!(app.form.error.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn leads_page_in_once_per_trigger() {
        let (mut app, mut rx) = signed_in_app();
        app.update(Action::Start);
        app.update(Action::SwitchScreen(Screen::Leads));
        assert_eq!(app.leads.list.len(), 20);

        app.update(Action::GoToBottom);
        assert!(app.loading());
        app.update(Action::ScrollDown);
        app.update(Action::GoToBottom);

        let action = rx.recv().await.unwrap();
        app.update(action);
        assert_eq!(app.leads.list.len(), 40);
        assert!(!app.loading());

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn leaving_view_drops_pending_page() {
        let (mut app, mut rx) = signed_in_app();
        app.update(Action::SwitchScreen(Screen::Leads));
        app.update(Action::GoToBottom);
        app.update(Action::SwitchScreen(Screen::Campaigns));
        assert_eq!(app.campaigns.list.len(), 15);

        let action = rx.recv().await.unwrap();
        assert!(matches!(action, Action::LeadsLoaded(..)));
        app.update(action);
        assert!(app.leads.list.is_empty());
    }

    #[tokio::test]
    async fn select_and_dismiss_detail() {
        let (mut app, _rx) = signed_in_app();
        app.update(Action::SwitchScreen(Screen::Campaigns));
        app.update(Action::ScrollDown);
        app.update(Action::Select);
        assert_eq!(
            app.campaigns.selection.current().map(|c| c.id.as_str()),
            Some("campaign-1")
        );
        assert_eq!(app.performance.len(), 30);

        app.update(Action::ScrollDown);
        app.update(Action::Select);
        assert_eq!(
            app.campaigns.selection.current().map(|c| c.id.as_str()),
            Some("campaign-2")
        );

        assert!(matches!(app.handle_event(key(KeyCode::Char('q'))), Action::Back));
        app.update(Action::Back);
        assert!(!app.detail_open());
        assert_eq!(app.screen, Screen::Campaigns);
    }

    #[tokio::test]
    async fn cursor_moves_switch_open_detail() {
        let (mut app, _rx) = signed_in_app();
        app.update(Action::SwitchScreen(Screen::Campaigns));
        app.update(Action::Select);
        let first = app.performance.clone();

        app.update(app.handle_event(key(KeyCode::Char('j'))));
        assert_eq!(
            app.campaigns.selection.current().map(|c| c.id.as_str()),
            Some("campaign-1")
        );
        assert_ne!(app.performance, first);

        app.update(app.handle_event(key(KeyCode::Char('g'))));
        assert_eq!(
            app.campaigns.selection.current().map(|c| c.id.as_str()),
            Some("campaign-0")
        );
        assert_eq!(app.performance, first);

        app.update(Action::SwitchScreen(Screen::Leads));
        app.update(Action::Select);
        app.update(Action::ScrollDown);
        assert_eq!(
            app.leads.selection.current().map(|l| l.id.as_str()),
            Some("lead-1")
        );
    }

    #[tokio::test]
    async fn closed_detail_ignores_cursor() {
        let (mut app, _rx) = signed_in_app();
        app.update(Action::SwitchScreen(Screen::Campaigns));
        app.update(Action::ScrollDown);
        assert!(!app.detail_open());
        assert!(app.performance.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn opening_detail_leaves_seeded_pages_alone() {
        async fn second_page(open_detail: bool) -> Vec<Campaign> {
            let (mut app, mut rx) = signed_in_app();
            app.update(Action::SwitchScreen(Screen::Campaigns));
            if open_detail {
                app.update(Action::Select);
                app.update(Action::Back);
            }
            app.update(Action::GoToBottom);
            let action = rx.recv().await.unwrap();
            app.update(action);
            app.campaigns.list.records()[15..].to_vec()
        }

        let plain = second_page(false).await;
        let after_detail = second_page(true).await;
        assert_eq!(plain.len(), 15);
        assert_eq!(plain, after_detail);
    }

    #[tokio::test]
    async fn search_keys_edit_query() {
        let (mut app, _rx) = signed_in_app();
        app.update(Action::SwitchScreen(Screen::Leads));
        app.update(app.handle_event(key(KeyCode::Char('/'))));
        assert!(app.is_searching());

        type_text(&mut app, "CEO");
        assert_eq!(app.leads.query, "CEO");
        assert!(app.leads.visible().iter().all(|l| l.title == "CEO"));

        app.update(app.handle_event(key(KeyCode::Esc)));
        assert!(!app.is_searching());
        assert!(app.leads.query.is_empty());
    }

    #[tokio::test]
    async fn number_keys_switch_screens() {
        let (mut app, _rx) = signed_in_app();
        app.update(app.handle_event(key(KeyCode::Char('3'))));
        assert_eq!(app.screen, Screen::Campaigns);
        app.update(app.handle_event(key(KeyCode::Tab)));
        assert_eq!(app.screen, Screen::Messages);
        assert!(app.campaigns.list.is_empty());
    }

    #[tokio::test]
    async fn sign_out_returns_to_prompt() {
        let (mut app, _rx) = signed_in_app();
        app.update(Action::SwitchScreen(Screen::Leads));
        app.update(Action::SignOut);
        assert!(!app.session.is_authenticated());
        assert!(app.session.prompt_visible());
        assert_eq!(app.screen, Screen::Overview);
        assert!(app.leads.list.is_empty());
    }

    #[tokio::test]
    async fn failed_page_is_shown_and_retried() {
        let (mut app, _rx) = signed_in_app();
        app.update(Action::SwitchScreen(Screen::Leads));
        app.update(Action::GoToBottom);
        let load_id = 1;
        app.update(Action::LeadsLoaded(
            Err(crate::error::LinkbirdError::Fetch("timeout".to_string())),
            load_id,
        ));
        assert_eq!(app.leads.list.last_error(), Some("Fetch failed: timeout"));
        assert_eq!(app.leads.list.len(), 20);

        app.update(Action::RetryLoad);
        assert!(app.loading());
    }
}
