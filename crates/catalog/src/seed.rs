use crate::record::EntityRecord;

/// Built-in archive rows used when no row store is reachable.
///
/// Mirrors the hosted dataset: two containment sites near the meridian, two
/// civilian Union locations, and two anomalies, one of which sits inside the
/// map's pollution region.
const SEED_JSON: &str = r#"[
  {
    "id": "r1",
    "name": "RSCP-001: The Silent Spire",
    "type": "LOCATION",
    "faction": "RSCP",
    "containmentClass": "KETER",
    "hazardLevel": "S",
    "status": "dormant",
    "resonance": 92,
    "coordinates": { "x": 50, "y": 50 },
    "description": "Megastructure of unresolvable material on the prime meridian. No sound propagates within five kilometers.",
    "secretData": "The spire is not absorbing entropy; it is transmitting. Reclassified THREAT-ALPHA."
  },
  {
    "id": "r2",
    "name": "RSCP-204: Chronos Shard",
    "type": "ARTIFACT",
    "faction": "RSCP",
    "containmentClass": "EUCLID",
    "hazardLevel": "A",
    "status": "unstable",
    "resonance": 75,
    "coordinates": { "x": 45, "y": 48 },
    "description": "A frozen fragment of time presenting as a shifting polyhedron. Physical contact induces rapid cellular regression.",
    "secretData": "Quantum resonance detected with the Eternal Walker. Possible catalyst for temporal displacement."
  },
  {
    "id": "u1",
    "name": "Sector Seven: The Warrens",
    "type": "LOCATION",
    "faction": "UNION",
    "containmentClass": "N/A",
    "hazardLevel": "D",
    "status": "active",
    "resonance": 15,
    "coordinates": { "x": 25, "y": 60 },
    "description": "Primary habitation block for Ring-B citizens. Atmospheric filtration at 89 percent.",
    "secretData": "Trace amnestics detected in the reservoir. Compliance is being maintained artificially."
  },
  {
    "id": "u2",
    "name": "Union Truth Broadcast Station",
    "type": "LOCATION",
    "faction": "UNION",
    "containmentClass": "N/A",
    "hazardLevel": "E",
    "status": "broadcasting",
    "resonance": 40,
    "coordinates": { "x": 28, "y": 58 },
    "description": "Round-the-clock ideological broadcasts keeping morale within tolerance."
  },
  {
    "id": "a1",
    "name": "The Pale Walker",
    "type": "PHENOMENON",
    "faction": "OBSERVER",
    "containmentClass": "KETER",
    "hazardLevel": "S",
    "status": "wandering",
    "resonance": 98,
    "coordinates": { "x": 80, "y": 30 },
    "description": "Elongated humanoid silhouette sighted in the red mist, unprotected and uncorroded.",
    "secretData": "No thermal signature. It does not reflect light; it erases it."
  },
  {
    "id": "a2",
    "name": "Echo of Vola",
    "type": "CHARACTER",
    "faction": "OBSERVER",
    "containmentClass": "EUCLID",
    "hazardLevel": "B",
    "status": "manifesting",
    "resonance": 65,
    "coordinates": { "x": 52, "y": 52 },
    "description": "Spontaneous auditory phenomena near the spire ruins, luring listeners toward the center."
  }
]"#;

/// Parses the embedded seed dataset.
pub fn seed_entities() -> Result<Vec<EntityRecord>, serde_json::Error> {
    serde_json::from_str(SEED_JSON)
}
