use serde::{Deserialize, Serialize};

/// Closed faction set used for marker coloring.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Faction {
    Union,
    Rscp,
    Observer,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityKind {
    Character,
    Location,
    Artifact,
    Phenomenon,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContainmentClass {
    Safe,
    Euclid,
    Keter,
    Thaumiel,
    Apollyon,
    #[serde(rename = "N/A")]
    NotApplicable,
}

/// Single-letter hazard grades, F (benign) through A, plus S.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HazardLevel {
    F,
    E,
    D,
    C,
    B,
    A,
    S,
}

/// Normalized map position, both axes on a 0-100 scale.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapCoordinates {
    pub x: f64,
    pub y: f64,
}

impl MapCoordinates {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One archive row as exchanged with the row store.
///
/// The rendering core reads `id`, `coordinates`, `faction`, and `resonance`;
/// the remaining fields are carried opaquely for the UI layer. `coordinates`
/// is optional because rows submitted without a map position must not break
/// a render frame; the map renderer skips them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntityKind,
    pub faction: Faction,
    pub containment_class: ContainmentClass,
    pub hazard_level: HazardLevel,
    pub status: String,
    /// 0-100; the map renderer labels entities above its threshold.
    pub resonance: f64,
    #[serde(default)]
    pub coordinates: Option<MapCoordinates>,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
}
