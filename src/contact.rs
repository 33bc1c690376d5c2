//! Contact form submission workflow.
//!
//! The form state (draft fields, status, activity log) lives in a
//! [`ContactState`] accessed through the [`StateCell`] seam so the same
//! coordinator drives both the reactive UI and the native test harness.
//! The outbound email call and all timing go through the [`EmailRelay`]
//! and [`Pacer`] seams.

#[cfg(feature = "hydrate")]
pub mod relay;

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

/// Display name the relay template addresses mail to.
pub const RECIPIENT_NAME: &str = "Vibhor Agarwal";

/// Most recent entries kept in the activity log.
pub const LOG_CAPACITY: usize = 5;

/// UX pacing pause before the payload log entry.
pub const PAYLOAD_PAUSE: Duration = Duration::from_millis(400);
/// UX pacing pause between the success log entry and the status change.
pub const SUCCESS_PAUSE: Duration = Duration::from_millis(600);
/// Delay before an `Error` status reverts to `Idle` on its own.
pub const ERROR_REVERT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

/// In-progress contact form values. Mutated on every keystroke and reset
/// to empty after a successful submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    pub fn set(&mut self, field: Field, value: String) {
        *self.field_mut(field) = value;
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Transmitting,
    Success,
    Error,
}

/// Ordered progress messages, bounded to the [`LOG_CAPACITY`] most recent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityLog {
    entries: VecDeque<String>,
}

impl ActivityLog {
    pub fn push(&mut self, entry: impl Into<String>) {
        if self.entries.len() == LOG_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(entry.into());
    }

    /// Drops all previous entries and starts over with `entry`.
    pub fn restart(&mut self, entry: impl Into<String>) {
        self.entries.clear();
        self.push(entry);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }

    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Everything the contact section owns: the draft, the four-state status,
/// and the activity log shown during transmission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactState {
    pub draft: ContactDraft,
    pub status: SubmissionStatus,
    pub log: ActivityLog,
}

impl ContactState {
    pub fn update_field(&mut self, field: Field, value: String) {
        self.draft.set(field, value);
    }

    /// User-initiated reset back to a pristine `Idle` form.
    pub fn reset(&mut self) {
        self.draft.clear();
        self.log.clear();
        self.status = SubmissionStatus::Idle;
    }
}

/// Relay credentials captured once from the build environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl RelayConfig {
    pub fn new(
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            service_id: service_id.into(),
            template_id: template_id.into(),
            public_key: public_key.into(),
        }
    }

    /// Credentials injected at compile time. Absent variables yield empty
    /// strings, which fail [`RelayConfig::is_complete`] at submit time.
    pub fn from_build_env() -> Self {
        Self {
            service_id: option_env!("SERVICE_ID").unwrap_or_default().to_string(),
            template_id: option_env!("TEMPLATE_ID").unwrap_or_default().to_string(),
            public_key: option_env!("PUBLIC_KEY").unwrap_or_default().to_string(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.service_id.is_empty() && !self.template_id.is_empty() && !self.public_key.is_empty()
    }
}

/// Parameter map the relay template expects, keyed by its field names.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub reply_to: String,
    pub subject: String,
    pub message: String,
    pub user_name: String,
    pub user_email: String,
    pub to_name: String,
}

impl TemplateParams {
    pub fn from_draft(draft: &ContactDraft) -> Self {
        Self {
            from_name: draft.name.clone(),
            from_email: draft.email.clone(),
            reply_to: draft.email.clone(),
            subject: draft.subject.clone(),
            message: draft.message.clone(),
            user_name: draft.name.clone(),
            user_email: draft.email.clone(),
            to_name: RECIPIENT_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayResponse {
    pub status: u16,
    pub text: String,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RelayError {
    /// The provider answered, but not with status 200.
    #[error("server returned status {status}")]
    Status { status: u16, text: String },
    /// The request never produced a provider response.
    #[error("transport failure: {0}")]
    Transport(String),
}

impl RelayError {
    /// Best-effort human-readable message for the activity log.
    pub fn user_message(&self) -> String {
        match self {
            RelayError::Status { status, text } if text.trim().is_empty() => {
                format!("Server returned status {status}")
            }
            RelayError::Status { status, text } => {
                format!("Server returned status {status}: {text}")
            }
            RelayError::Transport(msg) if msg.trim().is_empty() => {
                "Unknown Protocol Error".to_string()
            }
            RelayError::Transport(msg) => msg.clone(),
        }
    }
}

/// Outbound email call. Implemented over HTTPS in [`relay`] and stubbed in
/// tests.
#[allow(async_fn_in_trait)]
pub trait EmailRelay {
    async fn send(
        &self,
        config: &RelayConfig,
        params: &TemplateParams,
    ) -> Result<RelayResponse, RelayError>;
}

/// Timing seam: UX pacing pauses plus deferred one-shot callbacks. Test
/// implementations collapse pauses to nothing and fire callbacks manually.
#[allow(async_fn_in_trait)]
pub trait Pacer {
    async fn pause(&self, dur: Duration);
    fn schedule(&self, dur: Duration, f: Box<dyn FnOnce()>);
}

/// Shared handle to the [`ContactState`]. The UI implements this for
/// `RwSignal<ContactState>`; tests use the `Rc<RefCell<_>>` impl below.
pub trait StateCell: Clone + 'static {
    fn mutate(&self, f: impl FnOnce(&mut ContactState));
    fn read<T>(&self, f: impl FnOnce(&ContactState) -> T) -> T;
}

impl StateCell for Rc<RefCell<ContactState>> {
    fn mutate(&self, f: impl FnOnce(&mut ContactState)) {
        f(&mut self.borrow_mut());
    }

    fn read<T>(&self, f: impl FnOnce(&ContactState) -> T) -> T {
        f(&self.borrow())
    }
}

/// Drives one submission attempt end to end.
///
/// Returns immediately if a submission is already in flight or if the relay
/// credentials are incomplete; otherwise walks the transmit sequence and
/// leaves the state in `Success` or `Error`. On failure a revert to `Idle`
/// is scheduled after [`ERROR_REVERT`]; the scheduled callback is a no-op if
/// the status has moved away from `Error` by the time it fires.
pub async fn submit<S, R, P>(state: &S, config: &RelayConfig, relay: &R, pacer: &P)
where
    S: StateCell,
    R: EmailRelay,
    P: Pacer,
{
    // at most one submission in flight
    if state.read(|s| s.status == SubmissionStatus::Transmitting) {
        return;
    }

    if !config.is_complete() {
        log::error!("relay credentials missing from build environment");
        state.mutate(|s| {
            s.log.push("CRITICAL: Environment configuration missing.");
            s.status = SubmissionStatus::Error;
        });
        return;
    }

    state.mutate(|s| {
        s.status = SubmissionStatus::Transmitting;
        s.log.restart("Initializing SMTP Handshake...");
    });
    state.mutate(|s| s.log.push("Verifying Public Identity..."));

    pacer.pause(PAYLOAD_PAUSE).await;
    state.mutate(|s| s.log.push("Constructing Payload..."));
    let params = state.read(|s| TemplateParams::from_draft(&s.draft));

    state.mutate(|s| s.log.push("Connecting to secure node..."));
    let sent = match relay.send(config, &params).await {
        Ok(res) if res.status == 200 => Ok(()),
        Ok(res) => Err(RelayError::Status {
            status: res.status,
            text: res.text,
        }),
        Err(err) => Err(err),
    };

    match sent {
        Ok(()) => {
            state.mutate(|s| s.log.push("Transmission successful. Status 200."));
            pacer.pause(SUCCESS_PAUSE).await;
            state.mutate(|s| {
                s.status = SubmissionStatus::Success;
                s.draft.clear();
            });
        }
        Err(err) => {
            log::error!("relay send failed: {err}");
            state.mutate(|s| {
                s.log.push(format!("FAIL: {}", err.user_message()));
                s.status = SubmissionStatus::Error;
            });
            let state = state.clone();
            pacer.schedule(
                ERROR_REVERT,
                Box::new(move || {
                    state.mutate(|s| {
                        // superseded by any manual state change
                        if s.status == SubmissionStatus::Error {
                            s.status = SubmissionStatus::Idle;
                        }
                    });
                }),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    type SharedState = Rc<RefCell<ContactState>>;

    fn complete_config() -> RelayConfig {
        RelayConfig::new("service_x", "template_y", "key_z")
    }

    fn filled_draft() -> ContactDraft {
        ContactDraft {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Lovely site".to_string(),
        }
    }

    fn filled_state() -> SharedState {
        Rc::new(RefCell::new(ContactState {
            draft: filled_draft(),
            ..Default::default()
        }))
    }

    #[derive(Clone, Default)]
    struct StubRelay {
        response: Rc<RefCell<Option<Result<RelayResponse, RelayError>>>>,
        calls: Rc<Cell<usize>>,
    }

    impl StubRelay {
        fn respond(result: Result<RelayResponse, RelayError>) -> Self {
            Self {
                response: Rc::new(RefCell::new(Some(result))),
                calls: Rc::default(),
            }
        }
    }

    impl EmailRelay for StubRelay {
        async fn send(
            &self,
            _config: &RelayConfig,
            _params: &TemplateParams,
        ) -> Result<RelayResponse, RelayError> {
            self.calls.set(self.calls.get() + 1);
            self.response
                .borrow_mut()
                .take()
                .expect("stub relay called more than once")
        }
    }

    /// Zero-delay pacer that records scheduled callbacks so tests can act
    /// as the clock.
    #[derive(Clone, Default)]
    struct ManualPacer {
        scheduled: Rc<RefCell<Vec<(Duration, Box<dyn FnOnce()>)>>>,
    }

    impl ManualPacer {
        fn fire_scheduled(&self) {
            let jobs: Vec<_> = self.scheduled.borrow_mut().drain(..).collect();
            for (_, job) in jobs {
                job();
            }
        }

        fn scheduled_after(&self) -> Vec<Duration> {
            self.scheduled.borrow().iter().map(|(d, _)| *d).collect()
        }
    }

    impl Pacer for ManualPacer {
        async fn pause(&self, _dur: Duration) {}

        fn schedule(&self, dur: Duration, f: Box<dyn FnOnce()>) {
            self.scheduled.borrow_mut().push((dur, f));
        }
    }

    /// StateCell wrapper recording every status transition in order.
    #[derive(Clone, Default)]
    struct TracedState {
        inner: SharedState,
        transitions: Rc<RefCell<Vec<SubmissionStatus>>>,
    }

    impl StateCell for TracedState {
        fn mutate(&self, f: impl FnOnce(&mut ContactState)) {
            let before = self.inner.borrow().status;
            f(&mut self.inner.borrow_mut());
            let after = self.inner.borrow().status;
            if before != after {
                self.transitions.borrow_mut().push(after);
            }
        }

        fn read<T>(&self, f: impl FnOnce(&ContactState) -> T) -> T {
            f(&self.inner.borrow())
        }
    }

    #[test]
    fn test_field_updates_are_last_write_wins() {
        let mut state = ContactState::default();
        state.update_field(Field::Name, "first".to_string());
        state.update_field(Field::Name, "second".to_string());
        state.update_field(Field::Email, "a@b.c".to_string());

        assert_eq!(state.draft.get(Field::Name), "second");
        assert_eq!(state.draft.get(Field::Email), "a@b.c");
        assert_eq!(state.draft.get(Field::Subject), "");
        assert_eq!(state.draft.get(Field::Message), "");
    }

    #[test]
    fn test_log_caps_at_five_entries() {
        let mut log = ActivityLog::default();
        for i in 1..=6 {
            log.push(format!("entry {i}"));
        }

        assert_eq!(log.len(), LOG_CAPACITY);
        let entries: Vec<_> = log.entries().collect();
        assert_eq!(
            entries,
            vec!["entry 2", "entry 3", "entry 4", "entry 5", "entry 6"]
        );
    }

    #[test]
    fn test_template_params_map_draft_fields() {
        let params = TemplateParams::from_draft(&filled_draft());

        assert_eq!(params.from_name, "Ada");
        assert_eq!(params.reply_to, "ada@example.com");
        assert_eq!(params.to_name, RECIPIENT_NAME);

        // wire names the relay template expects
        let value = serde_json::to_value(&params).unwrap();
        for key in [
            "from_name",
            "from_email",
            "reply_to",
            "subject",
            "message",
            "user_name",
            "user_email",
            "to_name",
        ] {
            assert!(value.get(key).is_some(), "missing wire field {key}");
        }
    }

    #[tokio::test]
    async fn test_missing_config_skips_network() {
        let state = filled_state();
        let relay = StubRelay::default();
        let pacer = ManualPacer::default();
        let config = RelayConfig::new("service_x", "template_y", "");

        submit(&state, &config, &relay, &pacer).await;

        assert_eq!(relay.calls.get(), 0);
        let snapshot = state.borrow();
        assert_eq!(snapshot.status, SubmissionStatus::Error);
        let entries: Vec<_> = snapshot.log.entries().collect();
        assert_eq!(entries, vec!["CRITICAL: Environment configuration missing."]);
        // configuration errors are terminal; no revert is scheduled
        assert!(pacer.scheduled_after().is_empty());
    }

    #[tokio::test]
    async fn test_successful_submission() {
        let state = TracedState {
            inner: filled_state(),
            ..Default::default()
        };
        let relay = StubRelay::respond(Ok(RelayResponse {
            status: 200,
            text: "OK".to_string(),
        }));
        let pacer = ManualPacer::default();

        submit(&state, &complete_config(), &relay, &pacer).await;

        assert_eq!(relay.calls.get(), 1);
        assert_eq!(
            *state.transitions.borrow(),
            vec![SubmissionStatus::Transmitting, SubmissionStatus::Success]
        );
        let snapshot = state.inner.borrow();
        assert_eq!(snapshot.draft, ContactDraft::default());
        assert_eq!(snapshot.log.last(), Some("Transmission successful. Status 200."));
    }

    #[tokio::test]
    async fn test_relay_failure_reverts_after_timeout() {
        let state = TracedState {
            inner: filled_state(),
            ..Default::default()
        };
        let relay = StubRelay::respond(Ok(RelayResponse {
            status: 500,
            text: "boom".to_string(),
        }));
        let pacer = ManualPacer::default();

        submit(&state, &complete_config(), &relay, &pacer).await;

        assert_eq!(
            *state.transitions.borrow(),
            vec![SubmissionStatus::Transmitting, SubmissionStatus::Error]
        );
        assert_eq!(
            state.inner.borrow().log.last(),
            Some("FAIL: Server returned status 500: boom")
        );
        // draft is kept so the user can retry
        assert_eq!(state.inner.borrow().draft, filled_draft());

        assert_eq!(pacer.scheduled_after(), vec![ERROR_REVERT]);
        pacer.fire_scheduled();
        assert_eq!(state.inner.borrow().status, SubmissionStatus::Idle);
    }

    #[tokio::test]
    async fn test_duplicate_submit_is_ignored() {
        let state = filled_state();
        state.borrow_mut().status = SubmissionStatus::Transmitting;
        let relay = StubRelay::default();
        let pacer = ManualPacer::default();

        submit(&state, &complete_config(), &relay, &pacer).await;

        assert_eq!(relay.calls.get(), 0);
        assert_eq!(state.borrow().status, SubmissionStatus::Transmitting);
        assert!(state.borrow().log.is_empty());
    }

    #[tokio::test]
    async fn test_stale_revert_timer_is_superseded() {
        let state = filled_state();
        let relay = StubRelay::respond(Err(RelayError::Transport("connection refused".into())));
        let pacer = ManualPacer::default();

        submit(&state, &complete_config(), &relay, &pacer).await;
        assert_eq!(state.borrow().status, SubmissionStatus::Error);

        // user resets, then a new attempt starts before the timer fires
        state.borrow_mut().reset();
        state.borrow_mut().status = SubmissionStatus::Transmitting;

        pacer.fire_scheduled();
        assert_eq!(state.borrow().status, SubmissionStatus::Transmitting);
    }

    #[tokio::test]
    async fn test_transport_error_fallback_message() {
        let state = filled_state();
        let relay = StubRelay::respond(Err(RelayError::Transport(String::new())));
        let pacer = ManualPacer::default();

        submit(&state, &complete_config(), &relay, &pacer).await;

        assert_eq!(
            state.borrow().log.last(),
            Some("FAIL: Unknown Protocol Error")
        );
    }

    #[test]
    fn test_reset_clears_draft_and_log() {
        let state = filled_state();
        {
            let mut s = state.borrow_mut();
            s.status = SubmissionStatus::Success;
            s.log.push("Transmission successful. Status 200.");
        }

        state.borrow_mut().reset();

        let snapshot = state.borrow();
        assert_eq!(snapshot.status, SubmissionStatus::Idle);
        assert_eq!(snapshot.draft, ContactDraft::default());
        assert!(snapshot.log.is_empty());
    }
}
