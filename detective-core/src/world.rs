//! The mansion: an immutable binary tree of rooms.
//!
//! Rooms live in an arena and refer to their children by `RoomId`. The tree
//! is validated once when it is built from a dataset and never changes after.

use crate::dataset::{DatasetError, MansionDataset};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

// ============================================================================
// Ids and directions
// ============================================================================

/// Index of a room inside its `Mansion`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomId(pub usize);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The two ways out of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// The command key for this direction.
    pub fn key(self) -> char {
        match self {
            Direction::Left => 'e',
            Direction::Right => 'd',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
        }
    }
}

// ============================================================================
// Rooms
// ============================================================================

/// A location in the mansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub name: String,
    pub clue: Option<String>,
    pub left: Option<RoomId>,
    pub right: Option<RoomId>,
}

impl Room {
    pub fn new(name: impl Into<String>, clue: impl Into<String>) -> Self {
        let clue = clue.into();
        Self {
            name: name.into(),
            clue: if clue.is_empty() { None } else { Some(clue) },
            left: None,
            right: None,
        }
    }

    /// The child in the given direction, if any.
    pub fn child(&self, direction: Direction) -> Option<RoomId> {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// A room with no way forward.
    pub fn is_dead_end(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

// ============================================================================
// Mansion
// ============================================================================

/// The mansion tree.
///
/// Deserializes from the dataset JSON format, so a mansion read from disk goes
/// through the same validation as `from_dataset`.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "MansionDataset")]
pub struct Mansion {
    rooms: Vec<Room>,
    entry: RoomId,
}

impl Mansion {
    /// Build and validate the tree described by a dataset.
    pub fn from_dataset(dataset: &MansionDataset) -> Result<Self, DatasetError> {
        let mut index: HashMap<&str, RoomId> = HashMap::with_capacity(dataset.rooms.len());
        for (i, spec) in dataset.rooms.iter().enumerate() {
            if spec.name.trim().is_empty() {
                return Err(DatasetError::EmptyName(spec.id.clone()));
            }
            if index.insert(spec.id.as_str(), RoomId(i)).is_some() {
                return Err(DatasetError::DuplicateRoom(spec.id.clone()));
            }
        }

        let entry = *index
            .get(dataset.entry.as_str())
            .ok_or_else(|| DatasetError::MissingEntry(dataset.entry.clone()))?;

        let resolve = |room: &str, child: &Option<String>| -> Result<Option<RoomId>, DatasetError> {
            match child {
                None => Ok(None),
                Some(id) => index
                    .get(id.as_str())
                    .copied()
                    .map(Some)
                    .ok_or_else(|| DatasetError::UnknownChild {
                        room: room.to_string(),
                        child: id.clone(),
                    }),
            }
        };

        let mut has_parent = vec![false; dataset.rooms.len()];
        let mut rooms = Vec::with_capacity(dataset.rooms.len());
        for spec in &dataset.rooms {
            let mut room = Room::new(&spec.name, &spec.clue);
            room.left = resolve(spec.id.as_str(), &spec.left)?;
            room.right = resolve(spec.id.as_str(), &spec.right)?;

            for child in [room.left, room.right].into_iter().flatten() {
                if child == entry {
                    return Err(DatasetError::EntryIsChild(dataset.entry.clone()));
                }
                if std::mem::replace(&mut has_parent[child.0], true) {
                    return Err(DatasetError::SharedChild(dataset.rooms[child.0].id.clone()));
                }
            }
            rooms.push(room);
        }

        // With one parent per room and a parentless entry, reachability from
        // the entry is all that separates a tree from a forest or a cycle.
        let mut reached = vec![false; rooms.len()];
        let mut stack = vec![entry];
        while let Some(id) = stack.pop() {
            reached[id.0] = true;
            let room: &Room = &rooms[id.0];
            stack.extend(room.left);
            stack.extend(room.right);
        }
        if let Some(orphan) = reached.iter().position(|r| !r) {
            return Err(DatasetError::Unreachable(dataset.rooms[orphan].id.clone()));
        }

        Ok(Self { rooms, entry })
    }

    /// The room where exploration starts.
    pub fn entry(&self) -> RoomId {
        self.entry
    }

    /// Get a room by id.
    ///
    /// Ids are only handed out by this mansion, so lookups always succeed.
    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }

    /// The child of `id` in the given direction.
    pub fn child(&self, id: RoomId, direction: Direction) -> Option<RoomId> {
        self.room(id).child(direction)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Iterate over all rooms with their ids.
    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        self.rooms.iter().enumerate().map(|(i, r)| (RoomId(i), r))
    }

    /// Find a room by display name.
    pub fn find_by_name(&self, name: &str) -> Option<RoomId> {
        self.rooms().find(|(_, r)| r.name == name).map(|(id, _)| id)
    }
}

impl TryFrom<MansionDataset> for Mansion {
    type Error = DatasetError;

    fn try_from(dataset: MansionDataset) -> Result<Self, Self::Error> {
        Self::from_dataset(&dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::RoomSpec;

    fn dataset(rooms: Vec<RoomSpec>) -> MansionDataset {
        MansionDataset {
            title: "Test".to_string(),
            entry: "a".to_string(),
            rooms,
            associations: Vec::new(),
        }
    }

    #[test]
    fn test_builtin_tree() {
        let mansion = Mansion::from_dataset(&MansionDataset::builtin()).unwrap();
        assert_eq!(mansion.len(), 11);

        let hall = mansion.room(mansion.entry());
        assert_eq!(hall.name, "Hall de Entrada");
        assert_eq!(
            hall.clue.as_deref(),
            Some("Uma pegada estranha na entrada principal")
        );

        let library = mansion.child(mansion.entry(), Direction::Left).unwrap();
        assert_eq!(mansion.room(library).name, "Biblioteca");
        let living = mansion.child(mansion.entry(), Direction::Right).unwrap();
        assert_eq!(mansion.room(living).name, "Sala de Estar");

        let music = mansion.find_by_name("Sala de Musica").unwrap();
        assert!(mansion.room(music).clue.is_none());
        assert!(mansion.room(music).left.is_none());

        let vault = mansion.find_by_name("Cofre Secreto").unwrap();
        assert!(mansion.room(vault).is_dead_end());
    }

    #[test]
    fn test_empty_clue_is_none() {
        let room = Room::new("Attic", "");
        assert!(room.clue.is_none());
        assert!(room.is_dead_end());
    }

    #[test]
    fn test_missing_entry() {
        let mut data = dataset(vec![RoomSpec::new("b", "Basement", "")]);
        data.entry = "a".to_string();
        assert!(matches!(
            Mansion::from_dataset(&data),
            Err(DatasetError::MissingEntry(id)) if id == "a"
        ));
    }

    #[test]
    fn test_duplicate_room() {
        let data = dataset(vec![
            RoomSpec::new("a", "Attic", ""),
            RoomSpec::new("a", "Another", ""),
        ]);
        assert!(matches!(
            Mansion::from_dataset(&data),
            Err(DatasetError::DuplicateRoom(_))
        ));
    }

    #[test]
    fn test_empty_name() {
        let data = dataset(vec![RoomSpec::new("a", "  ", "")]);
        assert!(matches!(
            Mansion::from_dataset(&data),
            Err(DatasetError::EmptyName(_))
        ));
    }

    #[test]
    fn test_unknown_child() {
        let data = dataset(vec![RoomSpec::new("a", "Attic", "").with_left("zz")]);
        assert!(matches!(
            Mansion::from_dataset(&data),
            Err(DatasetError::UnknownChild { child, .. }) if child == "zz"
        ));
    }

    #[test]
    fn test_shared_child() {
        let data = dataset(vec![
            RoomSpec::new("a", "Attic", "").with_left("b").with_right("c"),
            RoomSpec::new("b", "Bath", "").with_left("c"),
            RoomSpec::new("c", "Cellar", ""),
        ]);
        assert!(matches!(
            Mansion::from_dataset(&data),
            Err(DatasetError::SharedChild(id)) if id == "c"
        ));
    }

    #[test]
    fn test_entry_cannot_be_child() {
        let data = dataset(vec![
            RoomSpec::new("a", "Attic", "").with_left("b"),
            RoomSpec::new("b", "Bath", "").with_right("a"),
        ]);
        assert!(matches!(
            Mansion::from_dataset(&data),
            Err(DatasetError::EntryIsChild(_))
        ));
    }

    #[test]
    fn test_detached_cycle_is_unreachable() {
        let data = dataset(vec![
            RoomSpec::new("a", "Attic", ""),
            RoomSpec::new("b", "Bath", "").with_left("c"),
            RoomSpec::new("c", "Cellar", "").with_left("b"),
        ]);
        assert!(matches!(
            Mansion::from_dataset(&data),
            Err(DatasetError::Unreachable(_))
        ));
    }

    #[test]
    fn test_deserialize_validates_tree() {
        assert!(serde_json::from_str::<Mansion>(r#"{"rooms":[],"entry":0}"#).is_err());

        let orphan = r#"{
            "title": "Test",
            "entry": "a",
            "rooms": [{ "id": "a", "name": "Attic", "left": "zz" }]
        }"#;
        let err = serde_json::from_str::<Mansion>(orphan).unwrap_err();
        assert!(err.to_string().contains("unknown room 'zz'"));

        let json = serde_json::to_string(&MansionDataset::builtin()).unwrap();
        let mansion: Mansion = serde_json::from_str(&json).unwrap();
        assert_eq!(mansion.len(), 11);
        assert_eq!(mansion.room(mansion.entry()).name, "Hall de Entrada");
    }

    #[test]
    fn test_self_loop_rejected() {
        let data = dataset(vec![
            RoomSpec::new("a", "Attic", "").with_left("b"),
            RoomSpec::new("b", "Bath", "").with_right("b"),
        ]);
        assert!(Mansion::from_dataset(&data).is_err());
    }
}
