//! Application state and core logic

use crate::config::GiveawayConfig;
use crate::state::{EntryForm, FieldKind, Form, FormEffect, FormEvent, FormPhase};
use crate::submission::{EntrySubmitter, SimulatedSubmitter, SubmitError, TokioClock};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Spinner frames shown on the submit button while processing
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SPINNER_FRAME_MS: u128 = 80;

type Settlement = Result<(), SubmitError>;

/// Main application struct
pub struct App {
    /// The entry form and its state machine
    pub form: EntryForm,
    /// Heading shown above the form
    pub title: String,
    /// Name shown in the footer
    pub organizer: String,
    /// Where validated entries go
    submitter: Arc<dyn EntrySubmitter>,
    /// Expected length of the submission window, used for the progress gauge
    submission_delay: Duration,
    /// When the current submission window opened
    submission_started: Option<Instant>,
    settled_tx: mpsc::UnboundedSender<Settlement>,
    settled_rx: mpsc::UnboundedReceiver<Settlement>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance from user configuration
    pub fn new(config: &GiveawayConfig) -> Self {
        let delay = config.submission_delay();
        let submitter = Arc::new(SimulatedSubmitter::new(Arc::new(TokioClock), delay));
        let mut app = Self::with_submitter(EntryForm::new(config.catalog()), submitter, delay);
        app.title = config.title().to_string();
        app.organizer = config.organizer().to_string();
        app
    }

    /// Create an App around a specific submitter
    pub fn with_submitter(
        form: EntryForm,
        submitter: Arc<dyn EntrySubmitter>,
        submission_delay: Duration,
    ) -> Self {
        let defaults = GiveawayConfig::default();
        let (settled_tx, settled_rx) = mpsc::unbounded_channel();
        Self {
            form,
            title: defaults.title().to_string(),
            organizer: defaults.organizer().to_string(),
            submitter,
            submission_delay,
            submission_started: None,
            settled_tx,
            settled_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Feed an event to the form and run whatever effect it asks for
    pub fn dispatch(&mut self, event: FormEvent) {
        if let Some(effect) = self.form.apply(event) {
            self.run_effect(effect);
        }
        if !self.form.is_loading() {
            self.submission_started = None;
        }
    }

    fn run_effect(&mut self, effect: FormEffect) {
        match effect {
            FormEffect::StartSubmission(entry) => {
                tracing::debug!("Submission window opened");
                self.submission_started = Some(Instant::now());

                let submitter = Arc::clone(&self.submitter);
                let tx = self.settled_tx.clone();
                tokio::spawn(async move {
                    let task = tokio::spawn(async move { submitter.submit(&entry).await });
                    // A submitter that panics still settles the form
                    let result = match task.await {
                        Ok(result) => result,
                        Err(err) => {
                            tracing::error!(error = %err, "Submission task aborted");
                            Err(SubmitError::new(err.to_string()))
                        }
                    };
                    if tx.send(result).is_err() {
                        tracing::warn!("Submission settled after the UI loop exited");
                    }
                });
            }
        }
    }

    /// Apply any submission results that arrived since the last tick.
    /// Returns true if the form changed.
    pub fn poll_submission(&mut self) -> bool {
        let mut changed = false;
        while let Ok(result) = self.settled_rx.try_recv() {
            self.dispatch(FormEvent::SubmissionSettled(result));
            changed = true;
        }
        changed
    }

    /// Block until the in-flight submission settles and apply it
    #[cfg(test)]
    pub async fn wait_for_submission(&mut self) {
        if let Some(result) = self.settled_rx.recv().await {
            self.dispatch(FormEvent::SubmissionSettled(result));
        }
    }

    /// Eased progress through the submission window, 0.0 to 1.0
    pub fn submission_progress(&self) -> Option<f32> {
        let started = self.submission_started?;
        if self.submission_delay.is_zero() {
            return Some(1.0);
        }
        let progress =
            (started.elapsed().as_secs_f32() / self.submission_delay.as_secs_f32()).min(1.0);
        Some(simple_easing::cubic_out(progress))
    }

    /// Current spinner glyph for the processing button
    pub fn spinner_frame(&self) -> &'static str {
        let elapsed = self
            .submission_started
            .map(|s| s.elapsed().as_millis())
            .unwrap_or(0);
        let index = (elapsed / SPINNER_FRAME_MS) as usize % SPINNER_FRAMES.len();
        SPINNER_FRAMES[index]
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.form.phase() {
            FormPhase::Editing => self.handle_editing_key(key),
            // Inputs are locked for the whole submission window
            FormPhase::Submitting => {
                if key.code == KeyCode::Esc {
                    self.quit = true;
                }
            }
            FormPhase::Submitted => self.handle_submitted_key(key),
        }
        Ok(())
    }

    /// Handle keys while the form is editable
    fn handle_editing_key(&mut self, key: KeyEvent) {
        let active = self.form.active_form_field().map(|f| (f.id, f.kind));
        let is_select = matches!(active, Some((_, FieldKind::Select)));
        let is_multiline = matches!(active, Some((_, FieldKind::MultiLine)));
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab => self.form.next_field(),
            KeyCode::BackTab => self.form.prev_field(),
            // Arrow navigation stays inside the multi-line reason
            KeyCode::Down if !is_multiline => self.form.next_field(),
            KeyCode::Up if !is_multiline => self.form.prev_field(),
            KeyCode::Char('s') if crate::platform::is_submit_modifier(key.modifiers) => {
                self.dispatch(FormEvent::Submit);
            }
            KeyCode::Enter => match active {
                Some((id, FieldKind::MultiLine)) => {
                    if let Some(value) = self.form.field(id).with_char('\n') {
                        self.dispatch(FormEvent::FieldChanged { field: id, value });
                    }
                }
                _ => self.dispatch(FormEvent::Submit),
            },
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') if is_select => {
                let event = self.form.cycle_product(true);
                self.dispatch(event);
            }
            KeyCode::Left | KeyCode::Char('h') if is_select => {
                let event = self.form.cycle_product(false);
                self.dispatch(event);
            }
            KeyCode::Char(c) if !ctrl => {
                if let Some((id, _)) = active {
                    if let Some(value) = self.form.field(id).with_char(c) {
                        self.dispatch(FormEvent::FieldChanged { field: id, value });
                    }
                }
            }
            KeyCode::Backspace => {
                if let Some((id, _)) = active {
                    let value = self.form.field(id).without_last_char();
                    self.dispatch(FormEvent::FieldChanged { field: id, value });
                }
            }
            _ => {}
        }
    }

    /// Handle keys on the thank-you view
    fn handle_submitted_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char('n') => self.dispatch(FormEvent::Reset),
            KeyCode::Esc | KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FieldId, FormError, GiveawayEntry, ProductCatalog};
    use crate::submission::{ImmediateClock, MockEntrySubmitter};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
    }

    /// App whose submitter returns immediately through an injected clock
    fn instant_app() -> App {
        let submitter = SimulatedSubmitter::new(
            Arc::new(ImmediateClock::default()),
            Duration::from_millis(1500),
        );
        App::with_submitter(
            EntryForm::default(),
            Arc::new(submitter),
            Duration::from_millis(1500),
        )
    }

    fn mock_app(mock: MockEntrySubmitter) -> App {
        App::with_submitter(EntryForm::default(), Arc::new(mock), Duration::from_millis(1500))
    }

    /// Fill every field through the keyboard, leaving focus on the reason
    fn fill_by_keys(app: &mut App) {
        type_text(app, "user@example.com");
        app.handle_key(key(KeyCode::Tab)).unwrap();
        type_text(app, "tester");
        app.handle_key(key(KeyCode::Tab)).unwrap();
        app.handle_key(key(KeyCode::Right)).unwrap();
        app.handle_key(key(KeyCode::Tab)).unwrap();
        type_text(app, "because");
    }

    mod construction {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_uses_config_values() {
            let config = GiveawayConfig {
                title: Some("Raffle".to_string()),
                organizer: Some("Acme".to_string()),
                products: Some(vec!["Widget".to_string()]),
                ..Default::default()
            };
            let app = App::new(&config);
            assert_eq!(app.title, "Raffle");
            assert_eq!(app.organizer, "Acme");
            assert_eq!(app.form.catalog(), &ProductCatalog::from_names(["Widget"]));
            assert!(!app.should_quit());
        }

        #[test]
        fn test_no_progress_before_submission() {
            let app = instant_app();
            assert_eq!(app.submission_progress(), None);
            assert_eq!(app.spinner_frame(), SPINNER_FRAMES[0]);
        }
    }

    mod typing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_chars_go_to_focused_field() {
            let mut app = instant_app();
            type_text(&mut app, "abc");
            assert_eq!(app.form.email.value(), "abc");
            assert_eq!(app.form.community_name.value(), "");
        }

        #[test]
        fn test_backspace_removes_last_char() {
            let mut app = instant_app();
            type_text(&mut app, "abc");
            app.handle_key(key(KeyCode::Backspace)).unwrap();
            assert_eq!(app.form.email.value(), "ab");
        }

        #[test]
        fn test_enter_in_reason_inserts_newline() {
            let mut app = instant_app();
            app.form.set_active_field(FieldId::Reason.index());
            type_text(&mut app, "line one");
            app.handle_key(key(KeyCode::Enter)).unwrap();
            type_text(&mut app, "two");
            assert_eq!(app.form.reason.value(), "line one\ntwo");
            assert_eq!(app.form.phase(), FormPhase::Editing);
        }

        #[test]
        fn test_select_cycles_with_arrows_and_ignores_chars() {
            let mut app = instant_app();
            app.form.set_active_field(FieldId::Product.index());
            type_text(&mut app, "x");
            assert_eq!(app.form.product.value(), "");

            app.handle_key(key(KeyCode::Right)).unwrap();
            app.handle_key(key(KeyCode::Right)).unwrap();
            assert_eq!(app.form.product.value(), "Microsoft Office 365 E5 Developer");

            app.handle_key(key(KeyCode::Left)).unwrap();
            assert_eq!(
                app.form.product.value(),
                "Canva Pro (Canva For Education Student Access)"
            );

            app.handle_key(key(KeyCode::Backspace)).unwrap();
            assert_eq!(app.form.product.value(), "");
        }

        #[test]
        fn test_ctrl_chars_are_not_typed() {
            let mut app = instant_app();
            app.handle_key(ctrl('x')).unwrap();
            assert_eq!(app.form.email.value(), "");
        }

        #[test]
        fn test_tab_moves_focus() {
            let mut app = instant_app();
            app.handle_key(key(KeyCode::Tab)).unwrap();
            assert_eq!(app.form.active_field_index, 1);
            app.handle_key(key(KeyCode::BackTab)).unwrap();
            app.handle_key(key(KeyCode::BackTab)).unwrap();
            assert!(app.form.is_submit_row_active());
        }

        #[test]
        fn test_arrows_move_focus_between_single_line_fields() {
            let mut app = instant_app();
            app.handle_key(key(KeyCode::Down)).unwrap();
            assert_eq!(app.form.active_field_index, FieldId::CommunityName.index());
            app.handle_key(key(KeyCode::Up)).unwrap();
            assert_eq!(app.form.active_field_index, FieldId::Email.index());
        }

        #[test]
        fn test_arrows_do_not_leave_reason() {
            let mut app = instant_app();
            app.form.set_active_field(FieldId::Reason.index());
            app.handle_key(key(KeyCode::Down)).unwrap();
            assert_eq!(app.form.active_field_index, FieldId::Reason.index());
            app.handle_key(key(KeyCode::Up)).unwrap();
            assert_eq!(app.form.active_field_index, FieldId::Reason.index());

            app.handle_key(key(KeyCode::Tab)).unwrap();
            assert!(app.form.is_submit_row_active());
        }

        #[test]
        fn test_esc_quits() {
            let mut app = instant_app();
            app.handle_key(key(KeyCode::Esc)).unwrap();
            assert!(app.should_quit());
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_invalid_submit_shows_error_without_spawning() {
            let mut mock = MockEntrySubmitter::new();
            mock.expect_submit().times(0);
            let mut app = mock_app(mock);

            app.handle_key(ctrl('s')).unwrap();

            assert_eq!(app.form.form_error(), Some(FormError::MissingEmail));
            assert!(!app.form.is_loading());
            assert_eq!(app.submission_progress(), None);
        }

        #[tokio::test]
        async fn test_valid_entry_reaches_submitted() {
            let mut app = instant_app();
            fill_by_keys(&mut app);

            app.handle_key(ctrl('s')).unwrap();
            assert!(app.form.is_loading());
            assert!(app.submission_progress().is_some());

            app.wait_for_submission().await;

            assert!(app.form.is_submitted());
            assert!(!app.form.is_loading());
            assert_eq!(app.form.form_error(), None);
            assert_eq!(app.submission_progress(), None);
        }

        #[tokio::test]
        async fn test_submitter_receives_untrimmed_entry() {
            let mut mock = MockEntrySubmitter::new();
            mock.expect_submit()
                .withf(|entry: &GiveawayEntry| {
                    entry.email == "user@example.com" && entry.reason == "because "
                })
                .times(1)
                .returning(|_| Ok(()));
            let mut app = mock_app(mock);

            fill_by_keys(&mut app);
            type_text(&mut app, " ");
            app.handle_key(ctrl('s')).unwrap();
            app.wait_for_submission().await;

            assert!(app.form.is_submitted());
        }

        #[tokio::test]
        async fn test_second_submit_while_loading_is_ignored() {
            let mut mock = MockEntrySubmitter::new();
            mock.expect_submit().times(1).returning(|_| Ok(()));
            let mut app = mock_app(mock);

            fill_by_keys(&mut app);
            app.handle_key(ctrl('s')).unwrap();
            app.handle_key(ctrl('s')).unwrap();
            app.handle_key(key(KeyCode::Enter)).unwrap();

            app.wait_for_submission().await;
            tokio::task::yield_now().await;

            assert!(app.form.is_submitted());
            assert!(!app.poll_submission());
        }

        #[tokio::test]
        async fn test_typing_is_locked_while_loading() {
            let mut app = instant_app();
            fill_by_keys(&mut app);
            app.handle_key(ctrl('s')).unwrap();

            type_text(&mut app, "zzz");
            app.handle_key(key(KeyCode::Backspace)).unwrap();
            assert_eq!(app.form.reason.value(), "because");

            app.wait_for_submission().await;
        }

        #[tokio::test]
        async fn test_failed_submission_shows_generic_error() {
            let mut mock = MockEntrySubmitter::new();
            mock.expect_submit()
                .times(1)
                .returning(|_| Err(SubmitError::new("offline")));
            let mut app = mock_app(mock);

            fill_by_keys(&mut app);
            app.handle_key(ctrl('s')).unwrap();
            app.wait_for_submission().await;

            assert_eq!(app.form.phase(), FormPhase::Editing);
            assert!(!app.form.is_loading());
            assert_eq!(app.form.form_error(), Some(FormError::SubmissionFailed));
            assert_eq!(app.form.email.value(), "user@example.com");
        }

        struct PanickingSubmitter;

        #[async_trait::async_trait]
        impl EntrySubmitter for PanickingSubmitter {
            async fn submit(&self, _entry: &GiveawayEntry) -> Result<(), SubmitError> {
                panic!("submitter crashed");
            }
        }

        #[tokio::test]
        async fn test_panicking_submitter_settles_as_failure() {
            let mut app = App::with_submitter(
                EntryForm::default(),
                Arc::new(PanickingSubmitter),
                Duration::from_millis(1500),
            );

            fill_by_keys(&mut app);
            app.handle_key(ctrl('s')).unwrap();
            assert!(app.form.is_loading());
            app.wait_for_submission().await;

            assert_eq!(app.form.phase(), FormPhase::Editing);
            assert_eq!(app.form.form_error(), Some(FormError::SubmissionFailed));
        }

        #[tokio::test]
        async fn test_poll_submission_applies_result() {
            let mut app = instant_app();
            fill_by_keys(&mut app);
            app.handle_key(ctrl('s')).unwrap();

            let mut applied = false;
            for _ in 0..100 {
                tokio::task::yield_now().await;
                if app.poll_submission() {
                    applied = true;
                    break;
                }
            }

            assert!(applied);
            assert!(app.form.is_submitted());
        }
    }

    mod thank_you {
        use super::*;
        use pretty_assertions::assert_eq;

        async fn submitted_app() -> App {
            let mut app = instant_app();
            fill_by_keys(&mut app);
            app.handle_key(ctrl('s')).unwrap();
            app.wait_for_submission().await;
            app
        }

        #[tokio::test]
        async fn test_enter_resets_to_empty_form() {
            let mut app = submitted_app().await;
            app.handle_key(key(KeyCode::Enter)).unwrap();

            assert!(!app.form.is_submitted());
            assert_eq!(app.form.entry(), GiveawayEntry::default());
            assert_eq!(app.form.active_field_index, 0);
        }

        #[tokio::test]
        async fn test_typing_ignored_on_thank_you_view() {
            let mut app = submitted_app().await;
            type_text(&mut app, "abc");
            assert!(app.form.is_submitted());
        }

        #[tokio::test]
        async fn test_q_quits() {
            let mut app = submitted_app().await;
            app.handle_key(key(KeyCode::Char('q'))).unwrap();
            assert!(app.should_quit());
        }
    }
}
