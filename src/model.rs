//! Data model for chord descriptions and their normalized form.
//!
//! A `ChordDescription` is what the caller hands in; a `NormalizedChord` is
//! what validation hands back, with the first fret computed and marks outside
//! the visible fret window removed.

use serde::{Deserialize, Serialize};

/// Per-string marker shown to the left of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StringStatus {
    /// Covered by a mark, nothing drawn
    None,
    /// Played unfretted (hollow circle)
    Open,
    /// Not played (cross)
    Closed,
}

impl StringStatus {
    /// Parse the textual form used in chord descriptions.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "none" => Some(StringStatus::None),
            "open" => Some(StringStatus::Open),
            "closed" => Some(StringStatus::Closed),
            _ => None,
        }
    }
}

/// A fretted position on the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// One finger on one string.
    Clamp { fret: i64, string: i64 },
    /// One finger across the strings `from..=to` (either order).
    Barre { fret: i64, from: i64, to: i64 },
}

impl Mark {
    pub fn fret(&self) -> i64 {
        match *self {
            Mark::Clamp { fret, .. } | Mark::Barre { fret, .. } => fret,
        }
    }

    /// Name of the shape, as used in diagnostics.
    pub fn shape(&self) -> &'static str {
        match self {
            Mark::Clamp { .. } => "clamp",
            Mark::Barre { .. } => "barre",
        }
    }
}

// Marks serialize to the same object shape the parser reads:
// `{"fret":1,"string":2}` and `{"fret":1,"barre":{"from":1,"to":6}}`.
impl Serialize for Mark {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Span {
            from: i64,
            to: i64,
        }

        #[derive(Serialize)]
        #[serde(untagged)]
        enum Repr {
            Clamp { fret: i64, string: i64 },
            Barre { fret: i64, barre: Span },
        }

        let repr = match *self {
            Mark::Clamp { fret, string } => Repr::Clamp { fret, string },
            Mark::Barre { fret, from, to } => Repr::Barre {
                fret,
                barre: Span { from, to },
            },
        };
        repr.serialize(serializer)
    }
}

/// A chord as described by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordDescription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_per_string: Option<Vec<StringStatus>>,
    pub marks: Vec<Mark>,
}

impl ChordDescription {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_statuses(mut self, statuses: Vec<StringStatus>) -> Self {
        self.status_per_string = Some(statuses);
        self
    }

    pub fn with_mark(mut self, mark: Mark) -> Self {
        self.marks.push(mark);
        self
    }
}

/// A validated chord, ready for layout.
///
/// Only `ChordModel::validate` constructs these, so every value upholds:
/// - `status_per_string().len() == string_count()`
/// - every mark has `fret >= 1` and string indices in `1..=string_count()`
/// - `first_fret()` is the minimum fret of the marks *before* window filtering
/// - every kept mark has `fret < first_fret + fret_window`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedChord {
    pub(crate) title: Option<String>,
    pub(crate) status_per_string: Vec<StringStatus>,
    pub(crate) first_fret: Option<i64>,
    pub(crate) marks: Vec<Mark>,
    pub(crate) string_count: usize,
}

impl NormalizedChord {
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn status_per_string(&self) -> &[StringStatus] {
        &self.status_per_string
    }

    /// Lowest fret among the original marks, `None` for a chord without marks.
    pub fn first_fret(&self) -> Option<i64> {
        self.first_fret
    }

    /// Marks inside the visible fret window, in caller order.
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    pub fn string_count(&self) -> usize {
        self.string_count
    }

    /// Reinterpret this chord as a fresh description.
    pub fn to_description(&self) -> ChordDescription {
        ChordDescription {
            title: self.title.clone(),
            status_per_string: Some(self.status_per_string.clone()),
            marks: self.marks.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_serialize_in_input_shape() {
        let clamp = serde_json::to_value(Mark::Clamp { fret: 2, string: 3 }).unwrap();
        assert_eq!(clamp, serde_json::json!({"fret": 2, "string": 3}));

        let barre = serde_json::to_value(Mark::Barre { fret: 3, from: 5, to: 2 }).unwrap();
        assert_eq!(barre, serde_json::json!({"fret": 3, "barre": {"from": 5, "to": 2}}));
    }

    #[test]
    fn status_names() {
        assert_eq!(StringStatus::from_name("open"), Some(StringStatus::Open));
        assert_eq!(StringStatus::from_name("closed"), Some(StringStatus::Closed));
        assert_eq!(StringStatus::from_name("none"), Some(StringStatus::None));
        assert_eq!(StringStatus::from_name("muted"), None);
    }
}
