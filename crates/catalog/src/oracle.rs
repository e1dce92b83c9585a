use serde::{Deserialize, Serialize};

/// Reply contract of the narrative-analysis backend.
///
/// The backend is an external collaborator; this crate only owns the payload
/// shape and the fixed neutral fallback used on any failure, so callers never
/// have to distinguish "no reply" from "bad reply".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OracleReport {
    pub analysis: String,
    /// 0-100.
    pub threat_level: u8,
    pub recommendation: String,
}

impl OracleReport {
    /// The neutral payload substituted on any backend failure.
    pub fn fallback() -> Self {
        Self {
            analysis: "High-dimensional link severed. Local data integrity verified.".to_string(),
            threat_level: 0,
            recommendation: "Retry the connection manually.".to_string(),
        }
    }

    /// Parses a backend reply, tolerating markdown code fences around the
    /// JSON body and clamping the threat level into range.
    pub fn parse_reply(text: &str) -> Result<Self, serde_json::Error> {
        let clean = text
            .replace("```json", "")
            .replace("```", "");
        let mut report: OracleReport = serde_json::from_str(clean.trim())?;
        report.threat_level = report.threat_level.min(100);
        Ok(report)
    }
}
