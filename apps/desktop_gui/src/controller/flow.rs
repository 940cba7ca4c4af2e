//! Per-flow request state machines. Each flow owns its form input, its last
//! committed result, and an in-flight flag; the two flows never share state
//! and may run concurrently.

use client_core::GeneratedPortrait;
use shared::domain::{clamp_age, Gender};

use crate::backend_bridge::commands::BackendCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    InFlight,
    /// Terminal for one round only; both completed states accept resubmission.
    Succeeded,
    Failed,
}

impl RequestStatus {
    pub fn is_in_flight(self) -> bool {
        matches!(self, RequestStatus::InFlight)
    }
}

/// Name generation flow: preference text in, name batch out.
#[derive(Debug, Default)]
pub struct NameFlow {
    pub preference_input: String,
    pub names: Vec<String>,
    pub suggestions: Vec<String>,
    pub status: RequestStatus,
}

impl NameFlow {
    pub fn can_submit(&self) -> bool {
        !self.status.is_in_flight() && !self.preference_input.trim().is_empty()
    }

    /// Moves to in-flight and returns the command to queue, or `None` when the
    /// input is blank or a request is already running (silent no-op).
    pub fn begin_submit(&mut self) -> Option<BackendCommand> {
        if !self.can_submit() {
            return None;
        }
        self.status = RequestStatus::InFlight;
        Some(BackendCommand::GenerateNames {
            user_input: self.preference_input.clone(),
        })
    }

    pub fn complete_success(&mut self, names: Vec<String>, suggestions: Vec<String>) {
        self.names = names;
        self.suggestions = suggestions;
        self.status = RequestStatus::Succeeded;
    }

    /// Prior results stay untouched; only the in-flight flag clears.
    pub fn complete_failure(&mut self) {
        self.status = RequestStatus::Failed;
    }
}

/// Portrait generation flow: age + gender in, portrait reference out.
#[derive(Debug)]
pub struct PhotoFlow {
    pub age: u8,
    pub gender: Gender,
    pub portrait: Option<GeneratedPortrait>,
    pub status: RequestStatus,
}

impl Default for PhotoFlow {
    fn default() -> Self {
        Self {
            age: 5,
            gender: Gender::Child,
            portrait: None,
            status: RequestStatus::Idle,
        }
    }
}

impl PhotoFlow {
    pub fn can_submit(&self) -> bool {
        !self.status.is_in_flight()
    }

    pub fn begin_submit(&mut self) -> Option<BackendCommand> {
        if !self.can_submit() {
            return None;
        }
        self.status = RequestStatus::InFlight;
        Some(BackendCommand::GeneratePhoto {
            age: self.age,
            gender: self.gender,
        })
    }

    pub fn set_age(&mut self, age: i32) {
        self.age = clamp_age(age);
    }

    pub fn complete_success(&mut self, portrait: GeneratedPortrait) {
        self.portrait = Some(portrait);
        self.status = RequestStatus::Succeeded;
    }

    pub fn complete_failure(&mut self) {
        self.status = RequestStatus::Failed;
    }

    /// Caption for the displayed portrait, pinned to the age it was
    /// generated for rather than the current slider position.
    pub fn caption(&self) -> Option<String> {
        self.portrait
            .as_ref()
            .map(|portrait| format!("Age: {} years", portrait.age))
    }
}
