use std::collections::BTreeMap;

use crate::record::EntityRecord;
use crate::seed::seed_entities;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchiveError {
    NotFound,
    StorageUnavailable,
    Corrupt(String),
}

impl std::fmt::Display for ArchiveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArchiveError::NotFound => write!(f, "archive row not found"),
            ArchiveError::StorageUnavailable => write!(f, "archive storage unavailable"),
            ArchiveError::Corrupt(msg) => write!(f, "archive row rejected: {msg}"),
        }
    }
}

impl std::error::Error for ArchiveError {}

/// Row fetch/insert boundary.
///
/// The real front-end talks to a remote row store; the rendering core only
/// ever sees the already-resolved record list. Hosts without a backend use
/// [`InMemoryArchive`] seeded with the built-in dataset, matching the
/// original's local fallback behavior.
pub trait ArchiveStore {
    fn list(&self) -> Result<Vec<EntityRecord>, ArchiveError>;
    fn get(&self, id: &str) -> Result<Option<EntityRecord>, ArchiveError>;
    fn insert(&mut self, record: EntityRecord) -> Result<(), ArchiveError>;
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryArchive {
    rows: BTreeMap<String, EntityRecord>,
}

impl InMemoryArchive {
    pub fn new() -> Self {
        Self::default()
    }

    /// An archive pre-populated with the seed dataset.
    pub fn seeded() -> Result<Self, ArchiveError> {
        let mut archive = Self::new();
        let entities =
            seed_entities().map_err(|e| ArchiveError::Corrupt(e.to_string()))?;
        for record in entities {
            archive.insert(record)?;
        }
        Ok(archive)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl ArchiveStore for InMemoryArchive {
    /// Rows in ascending id order (deterministic).
    fn list(&self) -> Result<Vec<EntityRecord>, ArchiveError> {
        Ok(self.rows.values().cloned().collect())
    }

    fn get(&self, id: &str) -> Result<Option<EntityRecord>, ArchiveError> {
        Ok(self.rows.get(id).cloned())
    }

    fn insert(&mut self, record: EntityRecord) -> Result<(), ArchiveError> {
        if record.id.trim().is_empty() {
            return Err(ArchiveError::Corrupt("empty id".to_string()));
        }
        self.rows.insert(record.id.clone(), record);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ArchiveError, ArchiveStore, InMemoryArchive};
    use crate::record::{
        ContainmentClass, EntityKind, EntityRecord, Faction, HazardLevel, MapCoordinates,
    };
    use pretty_assertions::assert_eq;

    fn sample(id: &str) -> EntityRecord {
        EntityRecord {
            id: id.to_string(),
            name: "Test Row".to_string(),
            kind: EntityKind::Artifact,
            faction: Faction::Rscp,
            containment_class: ContainmentClass::Safe,
            hazard_level: HazardLevel::F,
            status: "stored".to_string(),
            resonance: 10.0,
            coordinates: Some(MapCoordinates::new(10.0, 10.0)),
            description: String::new(),
            secret_data: None,
            is_verified: None,
        }
    }

    #[test]
    fn insert_then_list_is_id_ordered() {
        let mut archive = InMemoryArchive::new();
        archive.insert(sample("b2")).unwrap();
        archive.insert(sample("a1")).unwrap();
        let ids: Vec<String> = archive.list().unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["a1".to_string(), "b2".to_string()]);
    }

    #[test]
    fn rejects_empty_id() {
        let mut archive = InMemoryArchive::new();
        let err = archive.insert(sample("  ")).unwrap_err();
        assert!(matches!(err, ArchiveError::Corrupt(_)));
    }

    #[test]
    fn seeded_archive_serves_all_rows() {
        let archive = InMemoryArchive::seeded().unwrap();
        assert_eq!(archive.len(), 6);
        assert!(archive.get("a1").unwrap().is_some());
        assert!(archive.get("zz").unwrap().is_none());
    }
}
