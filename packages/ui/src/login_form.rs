//! # Login form — state machine behind the sign-in screen
//!
//! [`LoginForm`] owns the transient form state of one mounted sign-in screen
//! and [`submit`] drives a single submission through it. Neither touches
//! Dioxus directly: the screen stores the form in a `Signal` (see the
//! [`FormCell`] impl below), tests store it in an `Rc<RefCell<_>>`.
//!
//! ## Phases
//!
//! ```text
//! Idle ── begin_submit ──┬── invalid ─────────────────────────────▶ Idle (error)
//!                        └── valid ──▶ Submitting ── finish_submit ─┬─ Ok  ─▶ Navigated
//!                                                                   └─ Err ─▶ Idle (error)
//! ```
//!
//! `finish_submit` is the only way out of `Submitting`, and [`submit`] calls
//! it for every collaborator outcome, so the loading flag cannot stay set
//! after the call returns. The one exception is abandonment: if the screen
//! was unmounted while the call was pending ([`MountGuard`]), the form is
//! dropped untouched.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use api::{AuthError, Authenticator, Role, UserInfo};
use dioxus::prelude::{Navigator, Signal, Writable};
use thiserror::Error;

/// Where a successful sign-in lands.
pub const HOME_ROUTE: &str = "/";
pub const FORGOT_PASSWORD_ROUTE: &str = "/forgot-password";
pub const REGISTER_ROUTE: &str = "/register";

/// Why a submission never reached the authenticator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("A sign-in request is already in progress")]
    InFlight,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Navigated,
}

/// What `begin_submit` hands to the authenticator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    role: Role,
    phase: Phase,
    error: Option<String>,
}

impl LoginForm {
    /// A fresh form whose role comes from the location's query string.
    pub fn from_search(search: &str) -> Self {
        Self {
            role: Role::from_search(search),
            ..Self::default()
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Switch tabs. Typed email and password are shared by every tab.
    pub fn select_role(&mut self, role: Role) {
        self.role = role;
    }

    /// Target of the "Sign up" link, carrying the selected role.
    pub fn register_href(&self) -> String {
        format!("{REGISTER_ROUTE}?role={}", self.role)
    }

    /// Validate and, if the form is complete, enter `Submitting`.
    pub fn begin_submit(&mut self) -> Result<Credentials, FormError> {
        if self.is_loading() {
            return Err(FormError::InFlight);
        }

        self.error = None;
        self.phase = Phase::Idle;

        if self.email.is_empty() || self.password.is_empty() {
            let err = FormError::MissingFields;
            self.error = Some(err.to_string());
            return Err(err);
        }

        self.phase = Phase::Submitting;
        Ok(Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
            role: self.role,
        })
    }

    /// Leave `Submitting` with the authenticator's verdict.
    ///
    /// Returns the route to navigate to when the login succeeded.
    pub fn finish_submit(&mut self, outcome: &Result<UserInfo, AuthError>) -> Option<&'static str> {
        match outcome {
            Ok(_) => {
                self.phase = Phase::Navigated;
                self.error = None;
                Some(HOME_ROUTE)
            }
            Err(e) => {
                self.phase = Phase::Idle;
                self.error = Some(e.to_string());
                None
            }
        }
    }
}

/// Somewhere a [`LoginForm`] lives between events.
pub trait FormCell {
    fn update<R>(&mut self, f: impl FnOnce(&mut LoginForm) -> R) -> R;
}

impl FormCell for Signal<LoginForm> {
    fn update<R>(&mut self, f: impl FnOnce(&mut LoginForm) -> R) -> R {
        f(&mut self.write())
    }
}

impl FormCell for Rc<RefCell<LoginForm>> {
    fn update<R>(&mut self, f: impl FnOnce(&mut LoginForm) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

/// Imperative redirect.
pub trait Navigate {
    fn navigate(&self, path: &str);
}

impl Navigate for Navigator {
    fn navigate(&self, path: &str) {
        if let Some(failure) = self.push(path) {
            tracing::warn!(path, ?failure, "navigation failed");
        }
    }
}

/// Tracks whether the screen that started a submission is still mounted.
#[derive(Clone, Debug)]
pub struct MountGuard(Rc<Cell<bool>>);

impl MountGuard {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_mounted(&self) -> bool {
        self.0.get()
    }

    /// Mark the screen as gone; pending submissions discard their result.
    pub fn release(&self) {
        self.0.set(false);
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// How a call to [`submit`] ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Invalid(FormError),
    SignedIn(UserInfo),
    Failed(AuthError),
    Abandoned,
}

/// Run one submission: validate, call the authenticator, record the
/// outcome, and navigate home on success.
pub async fn submit<F, A, N>(form: &mut F, auth: &A, nav: &N, mount: &MountGuard) -> Submission
where
    F: FormCell,
    A: Authenticator,
    N: Navigate,
{
    let credentials = match form.update(LoginForm::begin_submit) {
        Ok(credentials) => credentials,
        Err(e) => return Submission::Invalid(e),
    };

    tracing::debug!(role = %credentials.role, "submitting sign-in");
    let outcome = auth
        .login(&credentials.email, &credentials.password, credentials.role)
        .await;

    if !mount.is_mounted() {
        tracing::debug!("sign-in screen unmounted before the response; discarding it");
        return Submission::Abandoned;
    }

    if let Some(path) = form.update(|f| f.finish_submit(&outcome)) {
        nav.navigate(path);
    }

    match outcome {
        Ok(user) => Submission::SignedIn(user),
        Err(e) => {
            tracing::warn!(role = %credentials.role, "sign-in failed: {}", e);
            Submission::Failed(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tokio::sync::Notify;

    /// Records every call and answers with a fixed outcome.
    struct RecordingAuth {
        calls: Mutex<Vec<Credentials>>,
        outcome: Result<UserInfo, AuthError>,
        gate: Option<Rc<Notify>>,
    }

    impl RecordingAuth {
        fn answering(outcome: Result<UserInfo, AuthError>) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                outcome,
                gate: None,
            }
        }

        fn gated(outcome: Result<UserInfo, AuthError>, gate: Rc<Notify>) -> Self {
            Self {
                gate: Some(gate),
                ..Self::answering(outcome)
            }
        }

        fn calls(&self) -> Vec<Credentials> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Authenticator for RecordingAuth {
        async fn login(&self, email: &str, password: &str, role: Role) -> Result<UserInfo, AuthError> {
            self.calls.lock().unwrap().push(Credentials {
                email: email.to_string(),
                password: password.to_string(),
                role,
            });
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            self.outcome.clone()
        }
    }

    #[derive(Default)]
    struct RecordingNav(RefCell<Vec<String>>);

    impl Navigate for RecordingNav {
        fn navigate(&self, path: &str) {
            self.0.borrow_mut().push(path.to_string());
        }
    }

    impl RecordingNav {
        fn paths(&self) -> Vec<String> {
            self.0.borrow().clone()
        }
    }

    fn user(role: Role) -> UserInfo {
        UserInfo {
            id: "u1".to_string(),
            email: "someone@example.com".to_string(),
            name: None,
            role,
        }
    }

    fn filled(search: &str, email: &str, password: &str) -> Rc<RefCell<LoginForm>> {
        let mut form = LoginForm::from_search(search);
        form.email = email.to_string();
        form.password = password.to_string();
        Rc::new(RefCell::new(form))
    }

    #[test]
    fn test_role_from_location() {
        assert_eq!(LoginForm::from_search("?role=restaurant").role(), Role::Restaurant);
        assert_eq!(LoginForm::from_search("?role=delivery").role(), Role::Delivery);
        assert_eq!(LoginForm::from_search("").role(), Role::Customer);
        assert_eq!(LoginForm::from_search("?role=admin").role(), Role::Customer);
        assert_eq!(LoginForm::from_search("?role=Customer").role(), Role::Customer);
    }

    #[test]
    fn test_fresh_form_is_idle() {
        let form = LoginForm::from_search("?role=delivery");
        assert_eq!(form.phase(), Phase::Idle);
        assert!(!form.is_loading());
        assert!(form.error().is_none());
        assert!(form.email.is_empty());
        assert!(form.password.is_empty());
    }

    #[test]
    fn test_switching_tabs_keeps_typed_values() {
        let mut form = LoginForm::default();
        form.email = "me@example.com".to_string();
        form.password = "hunter2".to_string();

        form.select_role(Role::Delivery);
        form.select_role(Role::Restaurant);

        assert_eq!(form.role(), Role::Restaurant);
        assert_eq!(form.email, "me@example.com");
        assert_eq!(form.password, "hunter2");
    }

    #[test]
    fn test_register_link_carries_role() {
        let mut form = LoginForm::from_search("?role=delivery");
        assert_eq!(form.register_href(), "/register?role=delivery");
        form.select_role(Role::Restaurant);
        assert_eq!(form.register_href(), "/register?role=restaurant");
        form.select_role(Role::Customer);
        assert_eq!(form.register_href(), "/register?role=customer");
    }

    #[tokio::test]
    async fn test_empty_fields_never_reach_authenticator() {
        for (email, password) in [("", ""), ("me@example.com", ""), ("", "secret")] {
            let mut form = filled("", email, password);
            let auth = RecordingAuth::answering(Ok(user(Role::Customer)));
            let nav = RecordingNav::default();

            let result = submit(&mut form, &auth, &nav, &MountGuard::new()).await;

            assert_eq!(result, Submission::Invalid(FormError::MissingFields));
            assert!(auth.calls().is_empty());
            assert!(nav.paths().is_empty());
            let form = form.borrow();
            assert_eq!(form.error(), Some("Please fill in all fields"));
            assert!(!form.is_loading());
        }
    }

    #[tokio::test]
    async fn test_success_navigates_home() {
        let mut form = filled("?role=delivery", "rider@example.com", "secret");
        let auth = RecordingAuth::answering(Ok(user(Role::Delivery)));
        let nav = RecordingNav::default();

        let result = submit(&mut form, &auth, &nav, &MountGuard::new()).await;

        assert_eq!(result, Submission::SignedIn(user(Role::Delivery)));
        assert_eq!(
            auth.calls(),
            vec![Credentials {
                email: "rider@example.com".to_string(),
                password: "secret".to_string(),
                role: Role::Delivery,
            }]
        );
        assert_eq!(nav.paths(), vec!["/".to_string()]);
        let form = form.borrow();
        assert_eq!(form.phase(), Phase::Navigated);
        assert!(form.error().is_none());
        assert!(!form.is_loading());
    }

    #[tokio::test]
    async fn test_each_submit_calls_login_once() {
        let mut form = filled("", "me@example.com", "wrong");
        let auth = RecordingAuth::answering(Err(AuthError::rejected("Invalid credentials")));
        let nav = RecordingNav::default();
        let mount = MountGuard::new();

        submit(&mut form, &auth, &nav, &mount).await;
        assert_eq!(auth.calls().len(), 1);
        submit(&mut form, &auth, &nav, &mount).await;
        assert_eq!(auth.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_rejection_is_shown_verbatim() {
        let mut form = filled("", "me@example.com", "wrong");
        let auth = RecordingAuth::answering(Err(AuthError::rejected("Invalid credentials")));
        let nav = RecordingNav::default();

        let result = submit(&mut form, &auth, &nav, &MountGuard::new()).await;

        assert_eq!(
            result,
            Submission::Failed(AuthError::rejected("Invalid credentials"))
        );
        assert!(nav.paths().is_empty());
        let form = form.borrow();
        assert_eq!(form.error(), Some("Invalid credentials"));
        assert_eq!(form.phase(), Phase::Idle);
        assert!(!form.is_loading());
    }

    #[tokio::test]
    async fn test_transport_failure_also_clears_loading() {
        let mut form = filled("", "me@example.com", "secret");
        let auth = RecordingAuth::answering(Err(AuthError::Network("connection refused".into())));
        let nav = RecordingNav::default();

        submit(&mut form, &auth, &nav, &MountGuard::new()).await;

        let form = form.borrow();
        assert!(!form.is_loading());
        assert_eq!(
            form.error(),
            Some("Unable to reach the sign-in service: connection refused")
        );
    }

    #[tokio::test]
    async fn test_loading_only_while_request_is_pending() {
        let gate = Rc::new(Notify::new());
        let mut form = filled("", "me@example.com", "secret");
        let observer = form.clone();
        let auth = RecordingAuth::gated(Ok(user(Role::Customer)), gate.clone());
        let nav = RecordingNav::default();
        let mount = MountGuard::new();

        assert!(!observer.borrow().is_loading());

        let (result, seen_while_pending) = tokio::join!(
            submit(&mut form, &auth, &nav, &mount),
            async {
                let loading = observer.borrow().is_loading();
                gate.notify_one();
                loading
            }
        );

        assert!(seen_while_pending);
        assert!(matches!(result, Submission::SignedIn(_)));
        assert!(!observer.borrow().is_loading());
    }

    #[tokio::test]
    async fn test_second_submit_while_pending_is_ignored() {
        let gate = Rc::new(Notify::new());
        let mut form = filled("", "me@example.com", "secret");
        let mut second = form.clone();
        let auth = RecordingAuth::gated(Err(AuthError::rejected("Invalid credentials")), gate.clone());
        let nav = RecordingNav::default();
        let mount = MountGuard::new();

        let (first, again) = tokio::join!(submit(&mut form, &auth, &nav, &mount), async {
            let again = submit(&mut second, &auth, &nav, &mount).await;
            gate.notify_one();
            again
        });

        assert_eq!(again, Submission::Invalid(FormError::InFlight));
        assert!(matches!(first, Submission::Failed(_)));
        assert_eq!(auth.calls().len(), 1);
        assert_eq!(form.borrow().error(), Some("Invalid credentials"));
    }

    #[tokio::test]
    async fn test_unmounted_screen_discards_response() {
        let gate = Rc::new(Notify::new());
        let mut form = filled("", "me@example.com", "secret");
        let observer = form.clone();
        let auth = RecordingAuth::gated(Ok(user(Role::Customer)), gate.clone());
        let nav = RecordingNav::default();
        let mount = MountGuard::new();

        let (result, _) = tokio::join!(submit(&mut form, &auth, &nav, &mount), async {
            mount.release();
            gate.notify_one();
        });

        assert_eq!(result, Submission::Abandoned);
        assert!(nav.paths().is_empty());
        assert_eq!(auth.calls().len(), 1);
        // Nothing was written after the await.
        assert_eq!(observer.borrow().phase(), Phase::Submitting);
    }

    #[tokio::test]
    async fn test_restaurant_suspended_scenario() {
        let mut form = Rc::new(RefCell::new(LoginForm::from_search("?role=restaurant")));
        let auth = RecordingAuth::answering(Err(AuthError::rejected("Account suspended")));
        let nav = RecordingNav::default();
        let mount = MountGuard::new();

        assert_eq!(form.borrow().role(), Role::Restaurant);

        form.borrow_mut().email = "chef@example.com".to_string();
        let result = submit(&mut form, &auth, &nav, &mount).await;
        assert_eq!(result, Submission::Invalid(FormError::MissingFields));
        assert_eq!(form.borrow().error(), Some("Please fill in all fields"));
        assert!(auth.calls().is_empty());

        form.borrow_mut().password = "secret".to_string();
        let result = submit(&mut form, &auth, &nav, &mount).await;
        assert_eq!(result, Submission::Failed(AuthError::rejected("Account suspended")));
        assert_eq!(auth.calls().len(), 1);
        assert_eq!(auth.calls()[0].role, Role::Restaurant);

        let form = form.borrow();
        assert_eq!(form.error(), Some("Account suspended"));
        assert!(!form.is_loading());
        assert!(nav.paths().is_empty());
    }

    #[derive(Clone, Default)]
    struct LogBuffer(std::sync::Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogBuffer {
        type Writer = LogBuffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    #[tokio::test]
    async fn test_rejection_logged_once() {
        let logs = LogBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let mut form = filled("?role=restaurant", "chef@example.com", "secret");
        let auth = RecordingAuth::answering(Err(AuthError::rejected("Account suspended")));
        let nav = RecordingNav::default();

        submit(&mut form, &auth, &nav, &MountGuard::new()).await;

        let output = logs.contents();
        assert_eq!(output.matches("WARN").count(), 1, "{output}");
        assert!(output.contains("Account suspended"));
        assert!(!output.contains("secret"));
    }

    #[tokio::test]
    async fn test_resubmit_clears_previous_error() {
        let mut form = filled("", "me@example.com", "");
        let auth = RecordingAuth::answering(Ok(user(Role::Customer)));
        let nav = RecordingNav::default();
        let mount = MountGuard::new();

        submit(&mut form, &auth, &nav, &mount).await;
        assert!(form.borrow().error().is_some());

        form.borrow_mut().password = "secret".to_string();
        submit(&mut form, &auth, &nav, &mount).await;
        assert!(form.borrow().error().is_none());
        assert_eq!(nav.paths(), vec!["/".to_string()]);
    }
}
