//! Chord validation and normalization.
//!
//! `ChordModel` turns a `ChordDescription` into a `NormalizedChord`: it checks
//! the per-string statuses and every mark against the configured string count,
//! computes the first fret and drops marks that fall outside the fret window.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;
use crate::model::*;
use crate::parser::{parse_chord_json, parse_chord_value};

pub const DEFAULT_STRING_COUNT: usize = 6;
pub const DEFAULT_FRET_WINDOW: u32 = 3;

/// Instrument shape: how many strings, how many fret rows are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChordConfig {
    pub string_count: usize,
    pub fret_window: u32,
}

impl Default for ChordConfig {
    fn default() -> Self {
        Self {
            string_count: DEFAULT_STRING_COUNT,
            fret_window: DEFAULT_FRET_WINDOW,
        }
    }
}

impl ChordConfig {
    /// Read a (possibly partial) config; missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Validates chord descriptions for one instrument configuration.
#[derive(Debug, Clone, Default)]
pub struct ChordModel {
    config: ChordConfig,
}

impl ChordModel {
    pub fn new(config: ChordConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ChordConfig {
        &self.config
    }

    /// Validate a typed description and normalize it.
    pub fn validate(&self, description: ChordDescription) -> Result<NormalizedChord, ValidationError> {
        let string_count = self.config.string_count;

        let status_per_string = match description.status_per_string {
            Some(statuses) if statuses.len() != string_count => {
                return Err(ValidationError::InvalidStringStatus {
                    index: None,
                    reason: format!("expected {string_count} entries, found {}", statuses.len()),
                });
            }
            Some(statuses) => statuses,
            None => vec![StringStatus::None; string_count],
        };

        for (index, mark) in description.marks.iter().enumerate() {
            check_mark(index, mark, string_count)?;
        }

        let first_fret = first_fret(&description.marks);
        let marks = match first_fret {
            Some(first) => filter_window(description.marks, first, self.config.fret_window),
            None => Vec::new(),
        };

        Ok(NormalizedChord {
            title: description.title,
            status_per_string,
            first_fret,
            marks,
            string_count,
        })
    }

    /// Parse and validate an untyped JSON value.
    pub fn validate_value(&self, value: &Value) -> Result<NormalizedChord, ValidationError> {
        let description = parse_chord_value(value, &self.config)?;
        self.validate(description)
    }

    /// Parse and validate a JSON document.
    pub fn validate_json(&self, json: &str) -> crate::error::Result<NormalizedChord> {
        let description = parse_chord_json(json, &self.config)?;
        Ok(self.validate(description)?)
    }
}

/// Lowest fret among `marks`, `None` when there are none.
pub fn first_fret(marks: &[Mark]) -> Option<i64> {
    marks.iter().map(Mark::fret).min()
}

/// Keep marks less than `fret_window` frets above `first_fret`.
///
/// Every mark has `fret >= first_fret >= 1`, so the offset cannot overflow.
fn filter_window(marks: Vec<Mark>, first_fret: i64, fret_window: u32) -> Vec<Mark> {
    marks
        .into_iter()
        .filter(|mark| {
            let visible = mark.fret() - first_fret < i64::from(fret_window);
            if !visible {
                log::debug!(
                    "dropping {} at fret {}: more than {fret_window} frets above {first_fret}",
                    mark.shape(),
                    mark.fret()
                );
            }
            visible
        })
        .collect()
}

// ─── Field checks (shared with the JSON parser) ──────────────────────

fn check_mark(index: usize, mark: &Mark, string_count: usize) -> Result<(), ValidationError> {
    match *mark {
        Mark::Clamp { fret, string } => {
            check_fret(index, fret)?;
            check_string(index, "string", string, string_count)
        }
        Mark::Barre { fret, from, to } => {
            check_fret(index, fret)?;
            check_string(index, "barre.from", from, string_count)?;
            check_string(index, "barre.to", to, string_count)
        }
    }
}

pub(crate) fn check_fret(index: usize, fret: i64) -> Result<(), ValidationError> {
    if fret < 1 {
        return Err(ValidationError::InvalidFieldValue {
            index,
            field: "fret",
            reason: format!("fret must be at least 1, got {fret}"),
        });
    }
    Ok(())
}

pub(crate) fn check_string(
    index: usize,
    field: &'static str,
    value: i64,
    string_count: usize,
) -> Result<(), ValidationError> {
    if !in_string_range(value, string_count) {
        return Err(ValidationError::InvalidFieldValue {
            index,
            field,
            reason: format!("{value} is outside strings 1..={string_count}"),
        });
    }
    Ok(())
}

fn in_string_range(value: i64, string_count: usize) -> bool {
    usize::try_from(value).is_ok_and(|v| (1..=string_count).contains(&v))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clamp(fret: i64, string: i64) -> Mark {
        Mark::Clamp { fret, string }
    }

    #[test]
    fn first_fret_comes_from_unfiltered_marks() {
        let chord = ChordModel::default()
            .validate(ChordDescription::new().with_mark(clamp(5, 2)).with_mark(clamp(1, 1)))
            .unwrap();
        assert_eq!(chord.first_fret(), Some(1));
        assert_eq!(chord.marks(), &[clamp(1, 1)]);
    }

    #[test]
    fn window_edge_is_exclusive() {
        let chord = ChordModel::default()
            .validate(
                ChordDescription::new()
                    .with_mark(clamp(2, 1))
                    .with_mark(clamp(4, 2))
                    .with_mark(clamp(5, 3)),
            )
            .unwrap();
        assert_eq!(chord.marks(), &[clamp(2, 1), clamp(4, 2)]);
    }

    #[test]
    fn custom_window_and_string_count() {
        let model = ChordModel::new(ChordConfig { string_count: 4, fret_window: 5 });
        let chord = model
            .validate(ChordDescription::new().with_mark(clamp(1, 4)).with_mark(clamp(5, 1)))
            .unwrap();
        assert_eq!(chord.string_count(), 4);
        assert_eq!(chord.status_per_string().len(), 4);
        assert_eq!(chord.marks().len(), 2);

        let err = model
            .validate(ChordDescription::new().with_mark(clamp(1, 5)))
            .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFieldValue { field: "string", .. }));
    }

    #[test]
    fn missing_statuses_default_to_none() {
        let chord = ChordModel::default().validate(ChordDescription::new()).unwrap();
        assert_eq!(chord.status_per_string(), &[StringStatus::None; 6]);
        assert_eq!(chord.first_fret(), None);
        assert!(chord.marks().is_empty());
    }

    #[test]
    fn typed_barre_is_range_checked() {
        let err = ChordModel::default()
            .validate(ChordDescription::new().with_mark(Mark::Barre { fret: 1, from: 1, to: 7 }))
            .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidFieldValue { index: 0, field: "barre.to", .. }
        ));
    }

    #[test]
    fn config_from_partial_json() {
        let config = ChordConfig::from_json(r#"{"stringCount": 4}"#).unwrap();
        assert_eq!(config, ChordConfig { string_count: 4, fret_window: 3 });
    }

    #[test]
    fn window_near_the_top_of_the_fret_range() {
        let chord = ChordModel::default()
            .validate(ChordDescription::new().with_mark(clamp(i64::MAX, 1)))
            .unwrap();
        assert_eq!(chord.first_fret(), Some(i64::MAX));
        assert_eq!(chord.marks(), &[clamp(i64::MAX, 1)]);

        let chord = ChordModel::default()
            .validate(
                ChordDescription::new()
                    .with_mark(clamp(i64::MAX - 1, 1))
                    .with_mark(clamp(i64::MAX, 2)),
            )
            .unwrap();
        assert_eq!(chord.first_fret(), Some(i64::MAX - 1));
        assert_eq!(chord.marks(), &[clamp(i64::MAX - 1, 1), clamp(i64::MAX, 2)]);
    }
}
