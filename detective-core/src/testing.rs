//! Testing utilities for Detective Quest.
//!
//! `TestHarness` drives a session from a script of commands and keeps every
//! notice it produced, so scenarios can be checked without a console.

use crate::accusation::Accusation;
use crate::dataset::MansionDataset;
use crate::explore::{Notice, Step, Transition};
use crate::session::{GameSession, SessionConfig, SessionError};

/// Test harness for running scripted investigations.
pub struct TestHarness {
    pub session: GameSession,
    /// Every notice produced so far, opening included.
    pub notices: Vec<Notice>,
    /// Transition of each command, in order.
    pub transitions: Vec<Transition>,
}

impl TestHarness {
    /// A harness over the builtin case.
    pub fn new() -> Self {
        Self::with_config(SessionConfig::new())
    }

    /// A harness over a custom case.
    pub fn with_dataset(dataset: MansionDataset) -> Self {
        Self::with_config(SessionConfig::new().with_dataset(dataset))
    }

    fn with_config(config: SessionConfig) -> Self {
        let session = GameSession::new(config).expect("test dataset should be valid");
        let notices = session.opening().to_vec();
        Self {
            session,
            notices,
            transitions: Vec::new(),
        }
    }

    /// Send one line of input.
    pub fn send(&mut self, input: &str) -> Step {
        let step = self.session.command(input);
        self.notices.extend(step.notices.iter().cloned());
        self.transitions.push(step.transition);
        step
    }

    /// Send several lines of input.
    pub fn play(&mut self, inputs: &[&str]) -> &mut Self {
        for input in inputs {
            self.send(input);
        }
        self
    }

    /// Accuse a suspect.
    pub fn accuse(&self, name: &str) -> Result<Accusation, SessionError> {
        self.session.accuse(name)
    }

    /// The notebook contents in order.
    pub fn clues(&self) -> Vec<String> {
        self.session.final_report().clues
    }

    // ========================================================================
    // Assertions
    // ========================================================================

    /// Assert the player is in the named room.
    pub fn assert_in_room(&self, name: &str) {
        assert_eq!(
            self.session.current_room().name,
            name,
            "expected to be in {name}"
        );
    }

    /// Assert the notebook holds exactly these clues, in this order.
    pub fn assert_clues(&self, expected: &[&str]) {
        assert_eq!(self.clues(), expected, "unexpected notebook contents");
    }

    /// Assert some notice so far equals `notice`.
    pub fn assert_noticed(&self, notice: &Notice) {
        assert!(
            self.notices.contains(notice),
            "expected notice {notice:?}, got {:?}",
            self.notices
        );
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
