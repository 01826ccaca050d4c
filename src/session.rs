//! Sign-in gate.
//!
//! The gate starts from whatever identity the [`Storage`] holds. Without
//! one it stays unauthenticated and the caller is expected to surface the
//! sign-in prompt after [`SessionGate::prompt_delay`]. The credential
//! exchange itself is behind [`Authenticator`]; the bundled
//! [`MockAuthenticator`] accepts everything after a fixed delay.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::clock::Clock;
use crate::error::Result;
use crate::storage::Storage;
use crate::types::Identity;

/// Storage key of the persisted identity
pub const SESSION_KEY: &str = "linkbird_user";

const MOCK_USER_ID: &str = "1";
const MOCK_USER_NAME: &str = "John Smith";
const MOCK_GOOGLE_EMAIL: &str = "john@example.com";
const MOCK_AVATAR: &str = "https://randomuser.me/api/portraits/men/2.jpg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMethod {
    SignIn,
    SignUp,
    Google,
}

impl AuthMethod {
    pub fn welcome(&self) -> &'static str {
        match self {
            AuthMethod::SignIn => "Signed in successfully.",
            AuthMethod::SignUp => "Account created successfully.",
            AuthMethod::Google => "Signed in with Google successfully.",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Credentials {
    pub method: AuthMethod,
    pub email: String,
    pub password: String,
}

#[async_trait]
pub trait Authenticator: Send + Sync + std::fmt::Debug {
    /// Exchange credentials for an identity. A refusal is reported as
    /// [`crate::error::LinkbirdError::AuthRejected`].
    async fn authenticate(&self, credentials: &Credentials) -> Result<Identity>;
}

#[derive(Debug, Clone)]
pub struct MockAuthenticator {
    clock: Arc<dyn Clock>,
    latency: Duration,
}

impl MockAuthenticator {
    pub fn new(clock: Arc<dyn Clock>, latency: Duration) -> Self {
        Self { clock, latency }
    }
}

#[async_trait]
impl Authenticator for MockAuthenticator {
    async fn authenticate(&self, credentials: &Credentials) -> Result<Identity> {
        self.clock.sleep(self.latency).await;

        let email = match credentials.method {
            AuthMethod::Google => MOCK_GOOGLE_EMAIL.to_string(),
            AuthMethod::SignIn | AuthMethod::SignUp => credentials.email.clone(),
        };
        Ok(Identity {
            id: MOCK_USER_ID.to_string(),
            name: MOCK_USER_NAME.to_string(),
            email,
            avatar: MOCK_AVATAR.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    Authenticated(Identity),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    Hidden,
    Visible,
    /// Credentials sent, waiting for the answer.
    Submitting,
}

#[derive(Debug)]
pub struct SessionGate {
    state: SessionState,
    prompt: Prompt,
    message: Option<String>,
    prompt_delay: Duration,
    storage: Arc<dyn Storage>,
}

impl SessionGate {
    pub fn start(storage: Arc<dyn Storage>, prompt_delay: Duration) -> Self {
        let state = match load_identity(storage.as_ref()) {
            Some(identity) => {
                tracing::info!(user = %identity.email, "restored session");
                SessionState::Authenticated(identity)
            }
            None => SessionState::Unauthenticated,
        };

        Self {
            state,
            prompt: Prompt::Hidden,
            message: None,
            prompt_delay,
            storage,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn identity(&self) -> Option<&Identity> {
        match &self.state {
            SessionState::Authenticated(identity) => Some(identity),
            SessionState::Unauthenticated => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity().is_some()
    }

    pub fn prompt(&self) -> Prompt {
        self.prompt
    }

    pub fn prompt_visible(&self) -> bool {
        self.prompt != Prompt::Hidden
    }

    /// Last rejection, shown inside the prompt.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// How long to wait before showing the prompt, if it is needed at all.
    pub fn prompt_delay(&self) -> Option<Duration> {
        (!self.is_authenticated() && self.prompt == Prompt::Hidden).then_some(self.prompt_delay)
    }

    pub fn show_prompt(&mut self) {
        if !self.is_authenticated() && self.prompt == Prompt::Hidden {
            self.prompt = Prompt::Visible;
        }
    }

    pub fn hide_prompt(&mut self) {
        if self.prompt == Prompt::Visible {
            self.prompt = Prompt::Hidden;
        }
    }

    /// Mark a submission as in flight. Returns false if one already is, or
    /// there is nothing to sign in to.
    pub fn begin_sign_in(&mut self) -> bool {
        if self.is_authenticated() || self.prompt == Prompt::Submitting {
            return false;
        }
        self.prompt = Prompt::Submitting;
        self.message = None;
        true
    }

    pub fn finish_sign_in(&mut self, result: Result<Identity>) -> Result<()> {
        if self.prompt != Prompt::Submitting {
            tracing::debug!("ignoring sign-in result without a pending submission");
            return Ok(());
        }

        match result {
            Ok(identity) => {
                match serde_json::to_string(&identity) {
                    Ok(json) => {
                        if let Err(err) = self.storage.set(SESSION_KEY, &json) {
                            tracing::warn!(error = %err, "could not persist session");
                        }
                    }
                    Err(err) => tracing::warn!(error = %err, "could not serialize session"),
                }
                tracing::info!(user = %identity.email, "signed in");
                self.state = SessionState::Authenticated(identity);
                self.prompt = Prompt::Hidden;
                self.message = None;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "sign-in failed");
                self.prompt = Prompt::Visible;
                self.message = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Run the whole exchange in place. A call while another submission is
    /// pending does nothing.
    pub async fn sign_in(
        &mut self,
        authenticator: &dyn Authenticator,
        credentials: &Credentials,
    ) -> Result<()> {
        if !self.begin_sign_in() {
            tracing::debug!("sign-in already pending, ignoring submission");
            return Ok(());
        }
        let result = authenticator.authenticate(credentials).await;
        self.finish_sign_in(result)
    }

    /// Forget the identity, in memory and in storage.
    pub fn sign_out(&mut self) -> Result<()> {
        self.storage.remove(SESSION_KEY)?;
        self.state = SessionState::Unauthenticated;
        self.prompt = Prompt::Visible;
        self.message = None;
        Ok(())
    }
}

fn load_identity(storage: &dyn Storage) -> Option<Identity> {
    let raw = storage.get(SESSION_KEY)?;
    match serde_json::from_str(&raw) {
        Ok(identity) => Some(identity),
        Err(err) => {
            tracing::warn!(error = %err, "ignoring unreadable stored session");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::TokioClock;
    use crate::error::LinkbirdError;
    use crate::storage::MemoryStorage;

    const DELAY: Duration = Duration::from_secs(1);

    #[derive(Debug)]
    struct RejectingAuthenticator;

    #[async_trait]
    impl Authenticator for RejectingAuthenticator {
        async fn authenticate(&self, _credentials: &Credentials) -> Result<Identity> {
            Err(LinkbirdError::AuthRejected("invalid password".to_string()))
        }
    }

    fn credentials(method: AuthMethod) -> Credentials {
        Credentials {
            method,
            email: "ada@example.com".to_string(),
            password: "hunter2".to_string(),
        }
    }

    fn mock_auth() -> MockAuthenticator {
        MockAuthenticator::new(Arc::new(TokioClock), Duration::from_secs(1))
    }

    #[test]
    fn empty_storage_starts_unauthenticated() {
        let gate = SessionGate::start(Arc::new(MemoryStorage::default()), DELAY);
        assert_eq!(gate.state(), &SessionState::Unauthenticated);
        assert!(!gate.prompt_visible());
        assert_eq!(gate.prompt_delay(), Some(DELAY));
    }

    #[test]
    fn stored_identity_starts_authenticated() {
        let storage = Arc::new(MemoryStorage::default());
        storage
            .set(
                SESSION_KEY,
                r#"{"id":"1","name":"John Smith","email":"john@example.com","avatar":""}"#,
            )
            .unwrap();
        let gate = SessionGate::start(storage, DELAY);
        assert_eq!(gate.identity().unwrap().name, "John Smith");
        assert_eq!(gate.prompt_delay(), None);
    }

    #[test]
    fn corrupt_storage_is_ignored() {
        let storage = Arc::new(MemoryStorage::default());
        storage.set(SESSION_KEY, "not json").unwrap();
        let gate = SessionGate::start(storage, DELAY);
        assert!(!gate.is_authenticated());
    }

    #[tokio::test(start_paused = true)]
    async fn sign_in_persists_canned_identity() {
        let storage = Arc::new(MemoryStorage::default());
        let mut gate = SessionGate::start(storage.clone(), DELAY);

        TokioClock.sleep(gate.prompt_delay().unwrap()).await;
        gate.show_prompt();
        assert!(gate.prompt_visible());

        gate.sign_in(&mock_auth(), &credentials(AuthMethod::SignIn))
            .await
            .unwrap();

        let identity = gate.identity().unwrap().clone();
        assert_eq!(identity.id, "1");
        assert_eq!(identity.name, "John Smith");
        assert_eq!(identity.email, "ada@example.com");
        assert!(!gate.prompt_visible());

        let stored: Identity = serde_json::from_str(&storage.get(SESSION_KEY).unwrap()).unwrap();
        assert_eq!(stored, identity);
    }

    #[tokio::test(start_paused = true)]
    async fn google_sign_in_uses_canned_email() {
        let mut gate = SessionGate::start(Arc::new(MemoryStorage::default()), DELAY);
        gate.show_prompt();
        gate.sign_in(&mock_auth(), &credentials(AuthMethod::Google))
            .await
            .unwrap();
        assert_eq!(gate.identity().unwrap().email, "john@example.com");
    }

    #[tokio::test]
    async fn rejection_keeps_prompt_and_storage_empty() {
        let storage = Arc::new(MemoryStorage::default());
        let mut gate = SessionGate::start(storage.clone(), DELAY);
        gate.show_prompt();

        let err = gate
            .sign_in(&RejectingAuthenticator, &credentials(AuthMethod::SignIn))
            .await
            .unwrap_err();
        assert!(matches!(err, LinkbirdError::AuthRejected(_)));
        assert_eq!(gate.state(), &SessionState::Unauthenticated);
        assert_eq!(gate.prompt(), Prompt::Visible);
        assert_eq!(gate.message(), Some("Sign-in rejected: invalid password"));
        assert_eq!(storage.get(SESSION_KEY), None);
    }

    #[test]
    fn second_submission_is_ignored() {
        let mut gate = SessionGate::start(Arc::new(MemoryStorage::default()), DELAY);
        gate.show_prompt();
        assert!(gate.begin_sign_in());
        assert!(!gate.begin_sign_in());
        assert_eq!(gate.prompt(), Prompt::Submitting);
    }

    #[tokio::test]
    async fn sign_in_during_pending_submission_is_not_a_rejection() {
        let storage = Arc::new(MemoryStorage::default());
        let mut gate = SessionGate::start(storage.clone(), DELAY);
        gate.show_prompt();
        assert!(gate.begin_sign_in());

        gate.sign_in(&mock_auth(), &credentials(AuthMethod::SignIn))
            .await
            .unwrap();

        assert_eq!(gate.prompt(), Prompt::Submitting);
        assert!(!gate.is_authenticated());
        assert!(gate.message().is_none());
        assert!(storage.get(SESSION_KEY).is_none());
    }

    #[test]
    fn prompt_cannot_hide_while_submitting() {
        let mut gate = SessionGate::start(Arc::new(MemoryStorage::default()), DELAY);
        gate.show_prompt();
        gate.begin_sign_in();
        gate.hide_prompt();
        assert_eq!(gate.prompt(), Prompt::Submitting);
    }

    #[test]
    fn result_without_submission_is_dropped() {
        let mut gate = SessionGate::start(Arc::new(MemoryStorage::default()), DELAY);
        let identity = Identity {
            id: "1".to_string(),
            name: "John Smith".to_string(),
            email: "john@example.com".to_string(),
            avatar: String::new(),
        };
        gate.finish_sign_in(Ok(identity)).unwrap();
        assert!(!gate.is_authenticated());
    }

    #[tokio::test(start_paused = true)]
    async fn sign_out_clears_storage() {
        let storage = Arc::new(MemoryStorage::default());
        let mut gate = SessionGate::start(storage.clone(), DELAY);
        gate.show_prompt();
        gate.sign_in(&mock_auth(), &credentials(AuthMethod::SignUp))
            .await
            .unwrap();
        assert!(storage.get(SESSION_KEY).is_some());

        gate.sign_out().unwrap();
        assert!(!gate.is_authenticated());
        assert!(gate.prompt_visible());
        assert_eq!(storage.get(SESSION_KEY), None);
    }
}
