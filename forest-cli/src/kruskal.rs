//! Kruskal's minimum spanning forest.

use std::fmt;

use disjoint_forest::DisjointSets;
use serde::Serialize;
use tracing::debug;

use crate::error::InputError;
use crate::input::strip_comment;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub weight: i64,
}

impl Edge {
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: i64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.from, self.to)
    }
}

//
//  (1)----4----(2)
//   | \         |
//   1     7     8
//   |         \ |
//  (3)----5----(4)
//   | \         |
//   4     3     6
//   |         \ |
//  (5)----2----(6)
//
const SAMPLE_EDGES: [(u32, u32, i64); 9] = [
    (1, 2, 4),
    (1, 3, 1),
    (2, 4, 8),
    (1, 4, 7),
    (3, 5, 4),
    (3, 4, 5),
    (4, 6, 6),
    (3, 6, 3),
    (5, 6, 2),
];

pub fn sample_graph() -> Vec<Edge> {
    SAMPLE_EDGES
        .iter()
        .map(|&(a, b, w)| Edge::new(a.to_string(), b.to_string(), w))
        .collect()
}

/// Parses one `from to weight` edge per line. Blank lines and `#` comments
/// are skipped.
pub fn parse_edges(input: &str) -> Result<Vec<Edge>, InputError> {
    let mut edges = Vec::new();
    for (i, raw) in input.lines().enumerate() {
        let line = strip_comment(raw);
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        let [from, to, weight] = fields.as_slice() else {
            return Err(InputError::Malformed {
                line: i + 1,
                expected: "`from to weight`",
                content: raw.to_string(),
            });
        };
        let weight = weight.parse::<i64>().map_err(|source| InputError::BadWeight {
            line: i + 1,
            value: weight.to_string(),
            source,
        })?;
        edges.push(Edge::new(*from, *to, weight));
    }
    Ok(edges)
}

#[derive(Debug, Serialize)]
pub struct MstReport {
    pub vertices: usize,
    /// Trees in the spanning forest; 1 when the graph is connected.
    pub components: usize,
    pub total_weight: i64,
    pub edges: Vec<Edge>,
}

impl fmt::Display for MstReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, e) in self.edges.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", e)?;
        }
        writeln!(f, "]")?;
        write!(f, "total weight = {}", self.total_weight)
    }
}

/// Accepts edges in ascending weight order whenever their endpoints are not
/// yet connected. Equal weights keep their input order.
pub fn minimum_spanning_forest(edges: &[Edge]) -> MstReport {
    let mut forest: DisjointSets<&str> = DisjointSets::with_capacity(edges.len() * 2);
    forest.register(edges.iter().flat_map(|e| [e.from.as_str(), e.to.as_str()]));

    let mut sorted: Vec<&Edge> = edges.iter().collect();
    sorted.sort_by_key(|e| e.weight);

    let mut tree = Vec::new();
    for e in sorted {
        if forest.connected(&e.from.as_str(), &e.to.as_str()) {
            debug!(%e, weight = e.weight, "skipping edge that closes a cycle");
            continue;
        }
        forest.union(e.from.as_str(), e.to.as_str());
        debug!(%e, weight = e.weight, "accepted edge");
        tree.push(e.clone());
    }

    MstReport {
        vertices: forest.len(),
        components: forest.count(),
        total_weight: tree.iter().map(|e| e.weight).sum(),
        edges: tree,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(report: &MstReport) -> Vec<(&str, &str)> {
        report
            .edges
            .iter()
            .map(|e| (e.from.as_str(), e.to.as_str()))
            .collect()
    }

    #[test]
    fn sample_graph_tree() {
        let report = minimum_spanning_forest(&sample_graph());
        assert_eq!(
            pairs(&report),
            vec![("1", "3"), ("5", "6"), ("3", "6"), ("1", "2"), ("3", "4")]
        );
        assert_eq!(report.total_weight, 15);
        assert_eq!(report.vertices, 6);
        assert_eq!(report.components, 1);
        assert_eq!(
            report.to_string(),
            "[(1, 3) (5, 6) (3, 6) (1, 2) (3, 4)]\ntotal weight = 15"
        );
    }

    #[test]
    fn weight_does_not_depend_on_input_order() {
        let mut edges = sample_graph();
        edges.reverse();
        let report = minimum_spanning_forest(&edges);
        assert_eq!(report.total_weight, 15);
        assert_eq!(report.edges.len(), 5);

        edges.rotate_left(4);
        assert_eq!(minimum_spanning_forest(&edges).total_weight, 15);
    }

    #[test]
    fn disconnected_graph_gives_forest() {
        let edges = vec![
            Edge::new("a", "b", 3),
            Edge::new("b", "c", 1),
            Edge::new("a", "c", 2),
            Edge::new("x", "y", 9),
        ];
        let report = minimum_spanning_forest(&edges);
        assert_eq!(report.components, 2);
        assert_eq!(report.vertices, 5);
        assert_eq!(report.total_weight, 12);
        assert_eq!(pairs(&report), vec![("b", "c"), ("a", "c"), ("x", "y")]);
    }

    #[test]
    fn self_loops_are_rejected() {
        let edges = vec![Edge::new("a", "a", 0), Edge::new("a", "b", 1)];
        let report = minimum_spanning_forest(&edges);
        assert_eq!(pairs(&report), vec![("a", "b")]);
    }

    #[test]
    fn parse_edge_list() {
        let input = "# sample\n1 2 4\n\n  1 3 1  # cheap\n";
        let edges = parse_edges(input).unwrap();
        assert_eq!(edges, vec![Edge::new("1", "2", 4), Edge::new("1", "3", 1)]);
    }

    #[test]
    fn parse_rejects_bad_lines() {
        let err = parse_edges("1 2 4\n1 2\n").unwrap_err();
        assert!(matches!(err, InputError::Malformed { line: 2, .. }));

        let err = parse_edges("1 2 heavy\n").unwrap_err();
        assert!(matches!(err, InputError::BadWeight { line: 1, .. }));
        assert_eq!(err.to_string(), "line 1: bad weight \"heavy\"");
    }
}
