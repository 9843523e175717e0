//! Exploration engine.
//!
//! The player walks the mansion one command at a time. Each call to
//! [`Investigation::step`] takes one command, updates the current room and
//! the notebook, and reports what happened as a list of [`Notice`]s. Nothing
//! here does I/O, so a session can be replayed from a script.

use crate::clues::ClueBook;
use crate::suspects::SuspectTable;
use crate::world::{Direction, Mansion, RoomId};
use tracing::{debug, info};

/// A player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Go(Direction),
    End,
    Unrecognized(String),
}

impl Command {
    /// Parse a line of input. The first non-whitespace character decides:
    /// `e` goes left, `d` goes right, `s` ends the session (either case).
    pub fn parse(input: &str) -> Self {
        match input.trim_start().chars().next() {
            Some('e' | 'E') => Command::Go(Direction::Left),
            Some('d' | 'D') => Command::Go(Direction::Right),
            Some('s' | 'S') => Command::End,
            _ => Command::Unrecognized(input.trim().to_string()),
        }
    }
}

/// Something the player should be told.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The player is now in this room.
    Entered { room: String },
    /// The room holds a clue. `suspect` is the association, if any.
    ClueFound {
        clue: String,
        suspect: Option<String>,
        /// False if the notebook already had it.
        new: bool,
    },
    NoClue,
    DeadEnd,
    /// Ways out of the current room, by destination name.
    Exits {
        left: Option<String>,
        right: Option<String>,
    },
    Moving(Direction),
    InvalidMove(Direction),
    Unrecognized(String),
    SessionEnded,
    AlreadyEnded,
}

/// How the state changed after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Moved {
        from: RoomId,
        to: RoomId,
        direction: Direction,
    },
    Stayed,
    Ended,
}

/// Result of one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub transition: Transition,
    pub notices: Vec<Notice>,
}

impl Step {
    fn stayed(notices: Vec<Notice>) -> Self {
        Self {
            transition: Transition::Stayed,
            notices,
        }
    }
}

/// Exploration state: where the player is and what they have found.
#[derive(Debug, Clone)]
pub struct Investigation {
    current: RoomId,
    notebook: ClueBook,
    ended: bool,
    rooms_visited: usize,
    discoveries: usize,
}

impl Investigation {
    /// Start at the mansion entry. Returns the narration for the entry room.
    pub fn begin(mansion: &Mansion, suspects: &SuspectTable) -> (Self, Vec<Notice>) {
        let mut investigation = Self {
            current: mansion.entry(),
            notebook: ClueBook::new(),
            ended: false,
            rooms_visited: 0,
            discoveries: 0,
        };
        let mut notices = Vec::new();
        investigation.enter(mansion, suspects, &mut notices);
        (investigation, notices)
    }

    /// Apply one command.
    pub fn step(&mut self, mansion: &Mansion, suspects: &SuspectTable, command: Command) -> Step {
        if self.ended {
            return Step::stayed(vec![Notice::AlreadyEnded]);
        }

        match command {
            Command::Go(direction) => match mansion.child(self.current, direction) {
                Some(to) => {
                    let from = self.current;
                    debug!(%from, %to, %direction, "moving");
                    self.current = to;
                    let mut notices = vec![Notice::Moving(direction)];
                    self.enter(mansion, suspects, &mut notices);
                    Step {
                        transition: Transition::Moved {
                            from,
                            to,
                            direction,
                        },
                        notices,
                    }
                }
                None => {
                    debug!(room = %self.current, %direction, "no exit");
                    Step::stayed(vec![
                        Notice::InvalidMove(direction),
                        self.exits(mansion),
                    ])
                }
            },
            Command::End => {
                self.ended = true;
                info!(clues = self.notebook.len(), "investigation ended");
                Step {
                    transition: Transition::Ended,
                    notices: vec![Notice::SessionEnded],
                }
            }
            Command::Unrecognized(input) => {
                Step::stayed(vec![Notice::Unrecognized(input), self.exits(mansion)])
            }
        }
    }

    fn enter(&mut self, mansion: &Mansion, suspects: &SuspectTable, notices: &mut Vec<Notice>) {
        let room = mansion.room(self.current);
        self.rooms_visited += 1;
        notices.push(Notice::Entered {
            room: room.name.clone(),
        });

        match &room.clue {
            Some(clue) => {
                let new = self.notebook.insert(clue.as_str());
                self.discoveries += 1;
                let suspect = suspects.lookup(clue).map(String::from);
                info!(room = %room.name, %clue, suspect = ?suspect, "clue found");
                notices.push(Notice::ClueFound {
                    clue: clue.clone(),
                    suspect,
                    new,
                });
            }
            None => notices.push(Notice::NoClue),
        }

        if room.is_dead_end() {
            notices.push(Notice::DeadEnd);
        }
        notices.push(self.exits(mansion));
    }

    fn exits(&self, mansion: &Mansion) -> Notice {
        let name = |id: Option<RoomId>| id.map(|id| mansion.room(id).name.clone());
        let room = mansion.room(self.current);
        Notice::Exits {
            left: name(room.left),
            right: name(room.right),
        }
    }

    pub fn current(&self) -> RoomId {
        self.current
    }

    pub fn notebook(&self) -> &ClueBook {
        &self.notebook
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    /// Rooms entered, the entry room included.
    pub fn rooms_visited(&self) -> usize {
        self.rooms_visited
    }

    /// Clue sightings, repeats included.
    pub fn discoveries(&self) -> usize {
        self.discoveries
    }
}
