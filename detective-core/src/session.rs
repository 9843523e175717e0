//! GameSession - the primary public API for a Detective Quest case.
//!
//! This module wraps the mansion, the suspect table and the running
//! investigation into a single object that a front end can drive one line of
//! input at a time.

use crate::accusation::Accusation;
use crate::dataset::{DatasetError, MansionDataset};
use crate::explore::{Command, Investigation, Notice, Step};
use crate::suspects::{SuspectTable, SuspectTableError, DEFAULT_BUCKETS};
use crate::world::{Mansion, Room};
use std::fmt;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

/// Errors from GameSession operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    #[error("Suspect table error: {0}")]
    SuspectTable(#[from] SuspectTableError),

    #[error("The investigation is still in progress")]
    StillExploring,

    #[error("No clues were collected - an accusation needs evidence")]
    NoEvidence,
}

/// Unique identifier for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Configuration for creating a new game session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// The case to play.
    pub dataset: MansionDataset,

    /// Number of buckets in the suspect table.
    pub buckets: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionConfig {
    /// Play the builtin case.
    pub fn new() -> Self {
        Self {
            dataset: MansionDataset::builtin(),
            buckets: DEFAULT_BUCKETS,
        }
    }

    /// Play a custom case.
    pub fn with_dataset(mut self, dataset: MansionDataset) -> Self {
        self.dataset = dataset;
        self
    }

    /// Set the suspect table bucket count.
    pub fn with_buckets(mut self, buckets: usize) -> Self {
        self.buckets = buckets;
        self
    }
}

/// Summary shown when the investigation closes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalReport {
    /// Collected clues in ascending order.
    pub clues: Vec<String>,
    pub rooms_visited: usize,
    pub discoveries: usize,
}

impl FinalReport {
    pub fn has_evidence(&self) -> bool {
        !self.clues.is_empty()
    }
}

/// A single playthrough.
pub struct GameSession {
    id: SessionId,
    title: String,
    mansion: Mansion,
    suspects: SuspectTable,
    investigation: Investigation,
    opening: Vec<Notice>,
}

impl GameSession {
    /// Build the case and enter the first room.
    pub fn new(config: SessionConfig) -> Result<Self, SessionError> {
        let mansion = Mansion::from_dataset(&config.dataset)?;
        let suspects =
            SuspectTable::from_associations(config.buckets, &config.dataset.associations)?;
        let (investigation, opening) = Investigation::begin(&mansion, &suspects);
        let id = SessionId::new();

        info!(
            session = %id,
            title = %config.dataset.title,
            rooms = mansion.len(),
            associations = suspects.len(),
            "session started"
        );

        Ok(Self {
            id,
            title: config.dataset.title,
            mansion,
            suspects,
            investigation,
            opening,
        })
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Narration for the entry room.
    pub fn opening(&self) -> &[Notice] {
        &self.opening
    }

    /// Handle one line of player input.
    pub fn command(&mut self, input: &str) -> Step {
        self.apply(Command::parse(input))
    }

    /// Apply an already parsed command.
    pub fn apply(&mut self, command: Command) -> Step {
        self.investigation.step(&self.mansion, &self.suspects, command)
    }

    /// Whether the player has ended the investigation.
    pub fn is_over(&self) -> bool {
        self.investigation.is_ended()
    }

    pub fn current_room(&self) -> &Room {
        self.mansion.room(self.investigation.current())
    }

    pub fn mansion(&self) -> &Mansion {
        &self.mansion
    }

    pub fn suspect_table(&self) -> &SuspectTable {
        &self.suspects
    }

    pub fn investigation(&self) -> &Investigation {
        &self.investigation
    }

    /// Names that can be accused.
    pub fn suspects(&self) -> Vec<&str> {
        self.suspects.suspects()
    }

    /// Summary of the investigation so far.
    pub fn final_report(&self) -> FinalReport {
        FinalReport {
            clues: self
                .investigation
                .notebook()
                .iter()
                .map(String::from)
                .collect(),
            rooms_visited: self.investigation.rooms_visited(),
            discoveries: self.investigation.discoveries(),
        }
    }

    /// Accuse a suspect. Only allowed once the investigation has ended with
    /// at least one clue collected.
    pub fn accuse(&self, accused: &str) -> Result<Accusation, SessionError> {
        if !self.is_over() {
            return Err(SessionError::StillExploring);
        }
        let notebook = self.investigation.notebook();
        if notebook.is_empty() {
            return Err(SessionError::NoEvidence);
        }

        let accusation = Accusation::evaluate(notebook, &self.suspects, accused);
        info!(
            session = %self.id,
            accused = %accusation.accused,
            supporting = accusation.match_count(),
            verdict = %accusation.verdict,
            "accusation evaluated"
        );
        Ok(accusation)
    }
}
