use std::rc::Rc;

use thiserror::Error;
use yew::prelude::*;

pub const GENERIC_FAILURE: &str = "Something went wrong";
pub const NETWORK_FAILURE: &str = "Network error. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Lifecycle of one contact submission attempt. Only `Failed` carries a
/// message and that message is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionEvent {
    /// Request is about to be issued.
    Submit,
    /// Relay accepted the submission.
    Succeed,
    /// Relay rejected it or could not be reached.
    Fail(String),
    /// Refused before any request went out.
    Reject(String),
    Reset,
}

impl SubmissionState {
    pub fn phase(&self) -> Phase {
        match self {
            SubmissionState::Idle => Phase::Idle,
            SubmissionState::Submitting => Phase::Submitting,
            SubmissionState::Succeeded => Phase::Succeeded,
            SubmissionState::Failed(_) => Phase::Failed,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmissionState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase() == Phase::Submitting
    }
}

fn failed(message: String) -> SubmissionState {
    if message.trim().is_empty() {
        SubmissionState::Failed(GENERIC_FAILURE.to_string())
    } else {
        SubmissionState::Failed(message)
    }
}

pub fn transition(state: &SubmissionState, event: SubmissionEvent) -> SubmissionState {
    match (state, event) {
        (_, SubmissionEvent::Submit) => SubmissionState::Submitting,
        (_, SubmissionEvent::Reset) => SubmissionState::Idle,
        (_, SubmissionEvent::Reject(message)) => failed(message),
        (SubmissionState::Submitting, SubmissionEvent::Succeed) => SubmissionState::Succeeded,
        (SubmissionState::Submitting, SubmissionEvent::Fail(message)) => failed(message),
        // a resolution arriving outside of Submitting has nothing to resolve
        (current, event) => {
            log::warn!("Ignoring {:?} while {:?}", event, current.phase());
            current.clone()
        }
    }
}

/// A delivered message must not stay resubmittable from the inputs.
pub fn clears_fields(terminal: &SubmissionEvent) -> bool {
    matches!(terminal, SubmissionEvent::Succeed)
}

impl Reducible for SubmissionState {
    type Action = SubmissionEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = transition(&self, action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Please fill in your {}.", .0.label())]
    Missing(Field),
}

impl Field {
    fn label(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email address",
            Field::Message => "message",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    #[cfg(test)]
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// All three fields are required; whitespace alone does not count.
    pub fn validate(&self) -> Result<(), FieldError> {
        let checks = [
            (Field::Name, &self.name),
            (Field::Email, &self.email),
            (Field::Message, &self.message),
        ];
        for (field, value) in checks {
            if value.trim().is_empty() {
                return Err(FieldError::Missing(field));
            }
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}
