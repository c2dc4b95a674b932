// src/settings/criteria.rs
use crate::settings::schema::{Criterion, RichText};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Minimum number of criterion rows the editor starts with
pub const MIN_INITIAL_ROWS: usize = 3;

/// Every criterion carries the same weight
pub const CRITERION_WEIGHT: u32 = 1;

/// Field that receives the "no criteria" error
pub const FIRST_CRITERION_FIELD: &str = "critdesc[0]";

static MARKUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->|<[^>]*>").expect("markup pattern is valid"));

/// Remove tags and comments, keeping the text between them
pub fn strip_tags(text: &str) -> String {
    MARKUP.replace_all(text, "").into_owned()
}

/// True when a description carries no visible text
pub fn is_blank(text: &str) -> bool {
    strip_tags(text)
        .trim_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\r' | '\0' | '\x0B'))
        .is_empty()
}

/// Turn row-indexed editor input into an ordered criteria list.
///
/// Rows whose description is blank once markup is removed are dropped along
/// with their scale. Retained rows are numbered from zero in row order, and
/// the scale is stored as `-abs(scale)` whatever sign it was submitted with.
/// A retained row without a scale selection gets grade 0.
pub fn normalise_criteria(
    descriptions: &BTreeMap<usize, RichText>,
    scales: &BTreeMap<usize, i64>,
) -> Vec<Criterion> {
    descriptions
        .iter()
        .filter(|(_, value)| !is_blank(&value.text))
        .enumerate()
        .map(|(count, (row, value))| Criterion {
            description: value.text.clone(),
            descriptionformat: value.format,
            grade: -scales.get(row).copied().unwrap_or(0).saturating_abs(),
            sortorder: count as u32,
            weight: CRITERION_WEIGHT,
        })
        .collect()
}

/// Rows the editor offers initially for `existing` stored criteria
pub fn initial_row_count(existing: usize) -> usize {
    existing.max(MIN_INITIAL_ROWS)
}

/// Rows added per request, never less than one
pub fn repeat_step(configured: i64) -> usize {
    configured.max(1) as usize
}

/// Rebuild editor rows from stored criteria, in storage order.
///
/// Scales are stored negative, the editor shows them positive.
pub fn criteria_to_rows(
    criteria: &[Criterion],
) -> (BTreeMap<usize, RichText>, BTreeMap<usize, i64>) {
    let mut descriptions = BTreeMap::new();
    let mut scales = BTreeMap::new();

    for (row, criterion) in criteria.iter().enumerate() {
        descriptions.insert(
            row,
            RichText::new(criterion.description.clone(), criterion.descriptionformat),
        );
        scales.insert(row, criterion.scale());
    }

    (descriptions, scales)
}
