//! Static mansion dataset.
//!
//! A dataset is the full description of one case: the rooms of the mansion,
//! how they connect, and which suspect each clue implicates. The builtin case
//! is compiled into the binary; custom cases can be loaded from JSON.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tokio::fs;

/// Errors from loading or validating a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Entry room '{0}' is not defined")]
    MissingEntry(String),

    #[error("Room id '{0}' is defined more than once")]
    DuplicateRoom(String),

    #[error("Room '{0}' has an empty name")]
    EmptyName(String),

    #[error("Room '{room}' points to unknown room '{child}'")]
    UnknownChild { room: String, child: String },

    #[error("Room '{0}' is reachable from more than one parent")]
    SharedChild(String),

    #[error("Entry room '{0}' cannot be the child of another room")]
    EntryIsChild(String),

    #[error("Room '{0}' cannot be reached from the entry")]
    Unreachable(String),
}

/// One room as it appears in the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSpec {
    /// Identifier used by `left`/`right` references.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Clue text; empty means the room has no clue.
    #[serde(default)]
    pub clue: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,
}

impl RoomSpec {
    pub fn new(id: impl Into<String>, name: impl Into<String>, clue: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            clue: clue.into(),
            left: None,
            right: None,
        }
    }

    pub fn with_left(mut self, id: impl Into<String>) -> Self {
        self.left = Some(id.into());
        self
    }

    pub fn with_right(mut self, id: impl Into<String>) -> Self {
        self.right = Some(id.into());
        self
    }
}

/// A clue that implicates a suspect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociationSpec {
    pub clue: String,
    pub suspect: String,
}

impl AssociationSpec {
    pub fn new(clue: impl Into<String>, suspect: impl Into<String>) -> Self {
        Self {
            clue: clue.into(),
            suspect: suspect.into(),
        }
    }
}

/// A complete case: mansion layout plus clue associations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MansionDataset {
    /// Title shown in the banner.
    pub title: String,
    /// Id of the room the player starts in.
    pub entry: String,
    pub rooms: Vec<RoomSpec>,
    #[serde(default)]
    pub associations: Vec<AssociationSpec>,
}

lazy_static::lazy_static! {
    /// The Detective Quest mansion shipped with the game.
    static ref BUILTIN: MansionDataset = MansionDataset {
        title: "Detective Quest - Nivel Mestre".to_string(),
        entry: "hall".to_string(),
        rooms: vec![
            RoomSpec::new("hall", "Hall de Entrada", "Uma pegada estranha na entrada principal")
                .with_left("biblioteca")
                .with_right("sala_estar"),
            RoomSpec::new("biblioteca", "Biblioteca", "Livro sobre venenos deixado aberto na mesa")
                .with_left("escritorio")
                .with_right("sala_musica"),
            RoomSpec::new("sala_estar", "Sala de Estar", "Cinzas ainda quentes na lareira")
                .with_left("cozinha")
                .with_right("jardim"),
            RoomSpec::new("escritorio", "Escritorio", "Carta de ameaca parcialmente queimada")
                .with_left("cofre"),
            RoomSpec::new("sala_musica", "Sala de Musica", "").with_right("piano"),
            RoomSpec::new("cozinha", "Cozinha", "Faca com manchas suspeitas").with_left("despensa"),
            RoomSpec::new("jardim", "Jardim", "Flores venenosas recentemente colhidas")
                .with_right("estufa"),
            RoomSpec::new("cofre", "Cofre Secreto", "Documento com assinatura falsificada"),
            RoomSpec::new("piano", "Piano Antigo", "Partitura com codigo secreto"),
            RoomSpec::new("despensa", "Despensa", "Frasco vazio de arsênico"),
            RoomSpec::new("estufa", "Estufa", "Luvas com residuos toxicos"),
        ],
        associations: vec![
            AssociationSpec::new("Livro sobre venenos deixado aberto na mesa", "Dr. Smith"),
            AssociationSpec::new("Frasco vazio de arsênico", "Dr. Smith"),
            AssociationSpec::new("Flores venenosas recentemente colhidas", "Dr. Smith"),
            AssociationSpec::new("Carta de ameaca parcialmente queimada", "Sra. Johnson"),
            AssociationSpec::new("Documento com assinatura falsificada", "Sra. Johnson"),
            AssociationSpec::new("Uma pegada estranha na entrada principal", "Sr. Williams"),
            AssociationSpec::new("Cinzas ainda quentes na lareira", "Sr. Williams"),
            AssociationSpec::new("Partitura com codigo secreto", "Sr. Williams"),
            AssociationSpec::new("Faca com manchas suspeitas", "Mordomo James"),
            AssociationSpec::new("Luvas com residuos toxicos", "Mordomo James"),
        ],
    };
}

impl MansionDataset {
    /// The builtin case.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Load a dataset from a JSON file.
    pub async fn load_json(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let content = fs::read_to_string(path).await?;
        let dataset: Self = serde_json::from_str(&content)?;
        Ok(dataset)
    }

    /// Write the dataset to a JSON file.
    pub async fn save_json(&self, path: impl AsRef<Path>) -> Result<(), DatasetError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).await?;
        Ok(())
    }

    /// Distinct suspect names, in the order they first appear.
    pub fn suspects(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for association in &self.associations {
            if !seen.contains(&association.suspect.as_str()) {
                seen.push(&association.suspect);
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_shape() {
        let dataset = MansionDataset::builtin();
        assert_eq!(dataset.entry, "hall");
        assert_eq!(dataset.rooms.len(), 11);
        assert_eq!(dataset.associations.len(), 10);

        let music = dataset.rooms.iter().find(|r| r.id == "sala_musica").unwrap();
        assert!(music.clue.is_empty());
        assert_eq!(music.left, None);
        assert_eq!(music.right.as_deref(), Some("piano"));
    }

    #[test]
    fn test_builtin_suspects_in_order() {
        let dataset = MansionDataset::builtin();
        assert_eq!(
            dataset.suspects(),
            vec!["Dr. Smith", "Sra. Johnson", "Sr. Williams", "Mordomo James"]
        );
    }

    #[test]
    fn test_json_defaults() {
        let json = r#"{
            "title": "Tiny",
            "entry": "a",
            "rooms": [{ "id": "a", "name": "Attic" }]
        }"#;
        let dataset: MansionDataset = serde_json::from_str(json).unwrap();
        assert_eq!(dataset.rooms[0].clue, "");
        assert!(dataset.rooms[0].left.is_none());
        assert!(dataset.associations.is_empty());
    }

    #[test]
    fn test_json_skips_missing_children() {
        let room = RoomSpec::new("a", "Attic", "Dust");
        let json = serde_json::to_value(&room).unwrap();
        assert!(json.get("left").is_none());
        assert!(json.get("right").is_none());
    }
}
