//! Detective Quest game engine.
//!
//! This crate provides:
//! - The mansion, a binary tree of rooms that may hold clues
//! - An ordered notebook of collected clues
//! - A clue to suspect lookup table
//! - The exploration state machine and the final accusation
//!
//! # Quick Start
//!
//! ```
//! use detective_core::{GameSession, SessionConfig};
//!
//! let mut session = GameSession::new(SessionConfig::new()).unwrap();
//! session.command("d");
//! session.command("s");
//!
//! let accusation = session.accuse("Sr. Williams").unwrap();
//! assert!(accusation.verdict.is_solved());
//! ```

pub mod accusation;
pub mod clues;
pub mod dataset;
pub mod explore;
pub mod narrative;
pub mod session;
pub mod suspects;
pub mod testing;
pub mod world;

// Primary public API
pub use accusation::{Accusation, Verdict};
pub use clues::ClueBook;
pub use dataset::{DatasetError, MansionDataset};
pub use explore::{Command, Investigation, Notice, Step, Transition};
pub use session::{FinalReport, GameSession, SessionConfig, SessionError, SessionId};
pub use suspects::SuspectTable;
pub use testing::TestHarness;
pub use world::{Direction, Mansion, Room, RoomId};
