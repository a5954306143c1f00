use log::{info, warn};

use super::relay::{outcome, FormRelay, RelayPayload};
use super::submission::{ContactFields, SubmissionEvent};
use crate::config::{ConfigError, RelayConfig};

/// Drives one submission attempt at a time against a [`FormRelay`].
///
/// State lives with the caller; the controller only emits
/// [`SubmissionEvent`]s through `dispatch`. It does not guard against a
/// second `submit` while one is in flight, the submit button is disabled for
/// that window instead.
pub struct FormController<R> {
    relay: R,
    config: Result<RelayConfig, ConfigError>,
}

impl<R: FormRelay> FormController<R> {
    pub fn new(relay: R, config: Result<RelayConfig, ConfigError>) -> Self {
        if let Err(e) = &config {
            warn!("Contact form disabled: {}", e);
        }
        Self { relay, config }
    }

    /// Returns the terminal event, which is also the last one dispatched.
    /// Callers clear their inputs when it is [`SubmissionEvent::Succeed`].
    pub async fn submit(
        &self,
        fields: &ContactFields,
        dispatch: impl Fn(SubmissionEvent),
    ) -> SubmissionEvent {
        if let Err(e) = fields.validate() {
            return emit(&dispatch, SubmissionEvent::Reject(e.to_string()));
        }
        let config = match &self.config {
            Ok(config) => config,
            Err(e) => return emit(&dispatch, SubmissionEvent::Reject(e.to_string())),
        };

        dispatch(SubmissionEvent::Submit);
        info!("Sending contact message");

        let payload = RelayPayload::new(&config.access_key, fields);
        let result = self.relay.submit(&config.endpoint, &payload).await;
        if let Err(e) = &result {
            warn!("Contact relay failed: {}", e);
        }

        let event = outcome(result);
        match &event {
            SubmissionEvent::Succeed => info!("Contact message delivered"),
            SubmissionEvent::Fail(message) => warn!("Contact message rejected: {}", message),
            _ => {}
        }
        emit(&dispatch, event)
    }

    pub fn reset(&self, dispatch: impl Fn(SubmissionEvent)) {
        dispatch(SubmissionEvent::Reset);
    }
}

fn emit(dispatch: &impl Fn(SubmissionEvent), event: SubmissionEvent) -> SubmissionEvent {
    dispatch(event.clone());
    event
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use futures::executor::block_on;
    use futures::future::LocalBoxFuture;

    use super::*;
    use crate::contact::relay::{RelayError, RelayResponse};
    use crate::contact::submission::{
        clears_fields, transition, Phase, SubmissionState, NETWORK_FAILURE,
    };

    struct FakeRelay {
        reply: Result<RelayResponse, RelayError>,
        calls: Cell<usize>,
        seen: RefCell<Option<(String, RelayPayload)>>,
    }

    impl FakeRelay {
        fn replying(reply: Result<RelayResponse, RelayError>) -> Self {
            Self {
                reply,
                calls: Cell::new(0),
                seen: RefCell::new(None),
            }
        }
    }

    impl FormRelay for &FakeRelay {
        fn submit<'a>(
            &'a self,
            endpoint: &'a str,
            payload: &'a RelayPayload,
        ) -> LocalBoxFuture<'a, Result<RelayResponse, RelayError>> {
            self.calls.set(self.calls.get() + 1);
            *self.seen.borrow_mut() = Some((endpoint.to_string(), payload.clone()));
            let reply = self.reply.clone();
            Box::pin(async move { reply })
        }
    }

    fn config() -> Result<RelayConfig, ConfigError> {
        RelayConfig::new("https://relay.test/submit", Some("test-key"))
    }

    fn jane() -> ContactFields {
        ContactFields::new("Jane", "jane@x.com", "Hi")
    }

    /// Applies each dispatched event to a state and records the phases seen.
    struct Recorder {
        state: RefCell<SubmissionState>,
        phases: RefCell<Vec<Phase>>,
    }

    impl Recorder {
        fn starting_at(state: SubmissionState) -> Self {
            Self {
                state: RefCell::new(state),
                phases: RefCell::new(Vec::new()),
            }
        }

        fn dispatch(&self) -> impl Fn(SubmissionEvent) + '_ {
            move |event| {
                let next = transition(&self.state.borrow(), event);
                self.phases.borrow_mut().push(next.phase());
                *self.state.borrow_mut() = next;
            }
        }
    }

    #[test]
    fn success_passes_through_submitting() {
        let relay = FakeRelay::replying(Ok(RelayResponse { success: true, message: None }));
        let controller = FormController::new(&relay, config());
        let recorder = Recorder::starting_at(SubmissionState::Idle);

        let event = block_on(controller.submit(&jane(), recorder.dispatch()));

        assert_eq!(event, SubmissionEvent::Succeed);
        assert_eq!(*recorder.phases.borrow(), vec![Phase::Submitting, Phase::Succeeded]);
        assert_eq!(relay.calls.get(), 1);

        let (endpoint, payload) = relay.seen.borrow().clone().unwrap();
        assert_eq!(endpoint, "https://relay.test/submit");
        assert_eq!(payload.access_key, "test-key");
        assert_eq!(payload.name, "Jane");
    }

    #[test]
    fn submitting_is_visible_before_relay_resolves() {
        let relay = FakeRelay::replying(Ok(RelayResponse { success: true, message: None }));
        let controller = FormController::new(&relay, config());
        let recorder = Recorder::starting_at(SubmissionState::Failed("Invalid key".into()));
        let calls_at_submit = Cell::new(None);

        let dispatch = |event: SubmissionEvent| {
            if event == SubmissionEvent::Submit {
                calls_at_submit.set(Some(relay.calls.get()));
            }
            (recorder.dispatch())(event);
        };
        block_on(controller.submit(&jane(), dispatch));

        assert_eq!(calls_at_submit.get(), Some(0));
        assert_eq!(recorder.phases.borrow()[0], Phase::Submitting);
    }

    #[test]
    fn relay_rejection_message_is_surfaced() {
        let relay = FakeRelay::replying(Ok(RelayResponse {
            success: false,
            message: Some("Rate limited".into()),
        }));
        let controller = FormController::new(&relay, config());
        let recorder = Recorder::starting_at(SubmissionState::Idle);

        block_on(controller.submit(&jane(), recorder.dispatch()));

        let state = recorder.state.borrow();
        assert_eq!(state.phase(), Phase::Failed);
        assert_eq!(state.error_message(), Some("Rate limited"));
    }

    #[test]
    fn invalid_key_rejection() {
        let relay = FakeRelay::replying(Ok(RelayResponse {
            success: false,
            message: Some("Invalid key".into()),
        }));
        let controller = FormController::new(&relay, config());
        let recorder = Recorder::starting_at(SubmissionState::Idle);

        let event = block_on(controller.submit(&jane(), recorder.dispatch()));

        assert_eq!(event, SubmissionEvent::Fail("Invalid key".into()));
        assert_eq!(recorder.state.borrow().error_message(), Some("Invalid key"));
    }

    #[test]
    fn network_error_uses_generic_text() {
        let relay = FakeRelay::replying(Err(RelayError::Transport("connection refused".into())));
        let controller = FormController::new(&relay, config());
        let recorder = Recorder::starting_at(SubmissionState::Idle);

        block_on(controller.submit(&jane(), recorder.dispatch()));

        let state = recorder.state.borrow();
        assert_eq!(state.phase(), Phase::Failed);
        assert_eq!(state.error_message(), Some(NETWORK_FAILURE));
    }

    #[test]
    fn incomplete_fields_never_reach_the_relay() {
        let relay = FakeRelay::replying(Ok(RelayResponse { success: true, message: None }));
        let controller = FormController::new(&relay, config());
        let recorder = Recorder::starting_at(SubmissionState::Idle);

        let fields = ContactFields::new("Jane", "jane@x.com", "   ");
        block_on(controller.submit(&fields, recorder.dispatch()));

        assert_eq!(relay.calls.get(), 0);
        assert_eq!(*recorder.phases.borrow(), vec![Phase::Failed]);
        assert_eq!(
            recorder.state.borrow().error_message(),
            Some("Please fill in your message.")
        );
    }

    #[test]
    fn missing_access_key_never_reaches_the_relay() {
        let relay = FakeRelay::replying(Ok(RelayResponse { success: true, message: None }));
        let controller = FormController::new(&relay, Err(ConfigError::MissingAccessKey));
        let recorder = Recorder::starting_at(SubmissionState::Idle);

        let event = block_on(controller.submit(&jane(), recorder.dispatch()));

        assert!(matches!(event, SubmissionEvent::Reject(_)));
        assert_eq!(relay.calls.get(), 0);
        assert_eq!(recorder.state.borrow().phase(), Phase::Failed);
    }

    #[test]
    fn reset_after_success_returns_to_idle() {
        let relay = FakeRelay::replying(Ok(RelayResponse { success: true, message: None }));
        let controller = FormController::new(&relay, config());
        let recorder = Recorder::starting_at(SubmissionState::Idle);

        block_on(controller.submit(&jane(), recorder.dispatch()));
        controller.reset(recorder.dispatch());

        let state = recorder.state.borrow();
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.error_message(), None);
    }

    #[test]
    fn inputs_clear_only_after_delivery() {
        let delivered = FakeRelay::replying(Ok(RelayResponse { success: true, message: None }));
        let controller = FormController::new(&delivered, config());
        let recorder = Recorder::starting_at(SubmissionState::Idle);
        let mut fields = jane();

        let event = block_on(controller.submit(&fields, recorder.dispatch()));
        if clears_fields(&event) {
            fields.clear();
        }
        assert_eq!(fields, ContactFields::default());

        let limited = FakeRelay::replying(Ok(RelayResponse {
            success: false,
            message: Some("Rate limited".into()),
        }));
        let controller = FormController::new(&limited, config());
        let mut fields = jane();

        let event = block_on(controller.submit(&fields, recorder.dispatch()));
        if clears_fields(&event) {
            fields.clear();
        }
        assert_eq!(fields, jane());
        assert_eq!(recorder.state.borrow().error_message(), Some("Rate limited"));
    }
}
