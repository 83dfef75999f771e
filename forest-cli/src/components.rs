//! Connected components of an ad-hoc relation given as `a b` pairs.

use std::fmt;

use disjoint_forest::DisjointSets;
use serde::Serialize;
use tracing::debug;

use crate::error::InputError;
use crate::input::strip_comment;

/// Builds the forest for `input`: a two-token line joins both elements, a
/// single-token line registers an element on its own.
pub fn parse_pairs(input: &str) -> Result<DisjointSets<String>, InputError> {
    let mut sets = DisjointSets::new();
    for (i, raw) in input.lines().enumerate() {
        let line = strip_comment(raw);
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.as_slice() {
            [a] => {
                sets.make_set(a.to_string());
            }
            [a, b] => {
                if !sets.union(a.to_string(), b.to_string()) {
                    debug!(line = i + 1, a, b, "pair already connected");
                }
            }
            _ => {
                return Err(InputError::Malformed {
                    line: i + 1,
                    expected: "`a b` or `a`",
                    content: raw.to_string(),
                });
            }
        }
    }
    Ok(sets)
}

#[derive(Debug, Serialize)]
pub struct ComponentsReport {
    pub elements: usize,
    pub count: usize,
    pub groups: Vec<Vec<String>>,
    #[serde(skip)]
    dump: String,
}

impl fmt::Display for ComponentsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "number of groups = {}", self.count)?;
        write!(f, "{}", self.dump)
    }
}

pub fn summarize(sets: &DisjointSets<String>) -> ComponentsReport {
    ComponentsReport {
        elements: sets.len(),
        count: sets.count(),
        groups: sets
            .groups()
            .into_iter()
            .map(|g| g.into_iter().cloned().collect())
            .collect(),
        dump: sets.to_string(),
    }
}
