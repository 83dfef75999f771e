//! Island counting on a character chart.
//!
//! `.` is land, every other byte is sea. Each land cell is joined with the
//! land cell to its left and the one above it, so the number of groups left
//! in the forest is the number of islands.

use std::fmt;

use disjoint_forest::DisjointSets;
use serde::Serialize;
use tracing::debug;

pub const LAND: u8 = b'.';

pub const SAMPLE_CHART: &str = "
  ......   .
  .    ..
       ..
       .....
  ..       .
  .  ..... .
         . .
";

#[derive(Debug, Serialize)]
pub struct IslandsReport {
    pub islands: usize,
    pub land_cells: usize,
}

impl fmt::Display for IslandsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "number of islands = {}", self.islands)
    }
}

/// Land cells keyed by `(column, row)`, joined with their land neighbours.
pub fn scan(chart: &str) -> DisjointSets<(usize, usize)> {
    let lines: Vec<&[u8]> = chart.lines().map(str::as_bytes).collect();
    let mut sets = DisjointSets::new();
    for (y, line) in lines.iter().enumerate() {
        for (x, &cell) in line.iter().enumerate() {
            if cell != LAND {
                continue;
            }
            sets.make_set((x, y));
            if x > 0 && line[x - 1] == LAND {
                sets.union((x, y), (x - 1, y));
            }
            // rows may be ragged
            if y > 0 && lines[y - 1].get(x) == Some(&LAND) {
                sets.union((x, y), (x, y - 1));
            }
        }
    }
    sets
}

pub fn survey(chart: &str) -> IslandsReport {
    let sets = scan(chart);
    debug!(land_cells = sets.len(), "chart scanned");
    IslandsReport {
        islands: sets.count(),
        land_cells: sets.len(),
    }
}
