use std::collections::HashSet;
use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::TimelineError;

/// Declared state of a milestone. Progress ignores it; only dates count.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MilestoneStatus {
    Completed,
    Planned,
}

/// One certification or training event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub id: u32,
    pub title: String,
    pub institution: String,
    /// Day precision, `YYYY-MM-DD` on the wire.
    pub date: NaiveDate,
    pub status: MilestoneStatus,
    pub description: String,
}

/// Wire shape: `{ "timeline": [ ... ] }`.
#[derive(Deserialize)]
struct TimelineDocument {
    timeline: Vec<Milestone>,
}

/// A validated, unordered milestone collection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Timeline {
    milestones: Vec<Milestone>,
}

impl Timeline {
    /// Wrap milestones, rejecting duplicate ids.
    pub fn new(milestones: Vec<Milestone>) -> Result<Self, TimelineError> {
        let mut seen = HashSet::with_capacity(milestones.len());
        for m in &milestones {
            if !seen.insert(m.id) {
                return Err(TimelineError::DuplicateId(m.id));
            }
        }
        Ok(Self { milestones })
    }

    pub fn from_json(src: &str) -> Result<Self, TimelineError> {
        let doc: TimelineDocument = serde_json::from_str(src)?;
        Self::new(doc.timeline)
    }

    pub fn load(path: &Path) -> Result<Self, TimelineError> {
        let src = fs::read_to_string(path).map_err(|source| TimelineError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let timeline = Self::from_json(&src)?;
        debug!(
            "loaded {} milestones from {}",
            timeline.len(),
            path.display()
        );
        Ok(timeline)
    }

    pub fn milestones(&self) -> &[Milestone] {
        &self.milestones
    }

    pub fn len(&self) -> usize {
        self.milestones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.milestones.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DOC: &str = r#"{
        "timeline": [
            {
                "id": 1,
                "title": "AWS Cloud Practitioner",
                "institution": "Amazon Web Services",
                "date": "2023-03-15",
                "status": "completed",
                "description": "Cloud fundamentals"
            },
            {
                "id": 2,
                "title": "Kubernetes Administrator",
                "institution": "CNCF",
                "date": "2026-11-01",
                "status": "planned",
                "description": "Cluster operations"
            }
        ]
    }"#;

    #[test]
    fn parses_document() {
        let t = Timeline::from_json(DOC).unwrap();
        assert_eq!(t.len(), 2);
        let first = &t.milestones()[0];
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2023, 3, 15).unwrap());
        assert_eq!(first.status, MilestoneStatus::Completed);
        assert_eq!(t.milestones()[1].status, MilestoneStatus::Planned);
    }

    #[test]
    fn empty_document_is_valid() {
        assert!(Timeline::from_json(r#"{"timeline": []}"#).unwrap().is_empty());
    }

    #[test]
    fn rejects_unknown_status_and_bad_dates() {
        let bad_status = DOC.replace("\"planned\"", "\"someday\"");
        assert!(matches!(
            Timeline::from_json(&bad_status),
            Err(TimelineError::Json(_))
        ));

        let bad_date = DOC.replace("2023-03-15", "15/03/2023");
        assert!(matches!(
            Timeline::from_json(&bad_date),
            Err(TimelineError::Json(_))
        ));
    }

    #[test]
    fn rejects_missing_timeline_field() {
        assert!(matches!(
            Timeline::from_json(r#"{"items": []}"#),
            Err(TimelineError::Json(_))
        ));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let dup = DOC.replace("\"id\": 2", "\"id\": 1");
        assert!(matches!(
            Timeline::from_json(&dup),
            Err(TimelineError::DuplicateId(1))
        ));
    }
}
