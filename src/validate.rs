//! Post-hoc certification of reported cliques.
//!
//! The search never relies on these checks; they run once on a finished
//! result, so a caller can refuse to trust a clique the heuristic produced
//! without re-deriving adjacency itself.

use crate::graph::Graph;
use std::fmt;

// ============================================================================
// Public API
// ============================================================================

/// Checks that `clique` is a duplicate-free set of in-range vertices that are
/// pairwise adjacent in `graph`.
///
/// The first violation found is returned; nothing is repaired. An empty slice
/// passes trivially.
///
/// # Errors
/// Returns the violation: a vertex outside the graph, a vertex listed twice,
/// or a pair of members with no edge between them.
pub fn validate_clique(graph: &Graph, clique: &[usize]) -> Result<(), ValidationError> {
    for &v in clique {
        if v >= graph.order() {
            return Err(ValidationError::VertexOutOfRange {
                vertex: v,
                order: graph.order(),
            });
        }
    }

    // Sort a copy; a duplicate shows up as an equal adjacent pair.
    let mut sorted = clique.to_vec();
    sorted.sort_unstable();
    if let Some(w) = sorted.windows(2).find(|w| w[0] == w[1]) {
        return Err(ValidationError::DuplicateVertex { vertex: w[0] });
    }

    for (i, &u) in clique.iter().enumerate() {
        for &v in &clique[i + 1..] {
            if !graph.is_adjacent(u, v) {
                return Err(ValidationError::NotAdjacent { u, v });
            }
        }
    }

    Ok(())
}

/// Convenience predicate over [`validate_clique`].
pub fn is_clique(graph: &Graph, clique: &[usize]) -> bool {
    validate_clique(graph, clique).is_ok()
}

// ============================================================================
// Errors
// ============================================================================

/// Ways a reported clique can fail certification.
///
/// A validation failure is an expected outcome of an unverified heuristic
/// result, not a crash: callers typically report it and move on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// A member does not exist in the graph.
    VertexOutOfRange {
        /// The offending member.
        vertex: usize,
        /// The graph's vertex count.
        order: usize,
    },
    /// A vertex appears more than once in the reported clique.
    DuplicateVertex {
        /// The duplicated vertex.
        vertex: usize,
    },
    /// Two reported members share no edge.
    NotAdjacent {
        /// First member of the non-adjacent pair.
        u: usize,
        /// Second member of the non-adjacent pair.
        v: usize,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::VertexOutOfRange { vertex, order } => write!(
                f,
                "clique member {vertex} is out of range for a graph of {order} vertices"
            ),
            ValidationError::DuplicateVertex { vertex } => {
                write!(f, "duplicated vertex {vertex} in the clique")
            }
            ValidationError::NotAdjacent { u, v } => {
                write!(f, "returned subgraph is not a clique: no edge between {u} and {v}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_with_tail() -> Graph {
        Graph::from_edges(5, [(0, 1), (1, 2), (0, 2), (2, 3), (3, 4)]).unwrap()
    }

    #[test]
    fn accepts_a_real_clique() {
        let graph = triangle_with_tail();
        validate_clique(&graph, &[2, 0, 1]).unwrap();
        assert!(is_clique(&graph, &[0, 1, 2]));
    }

    #[test]
    fn accepts_singletons_and_empty_sets() {
        let graph = triangle_with_tail();
        validate_clique(&graph, &[4]).unwrap();
        validate_clique(&graph, &[]).unwrap();
    }

    #[test]
    fn rejects_a_non_adjacent_pair() {
        let graph = triangle_with_tail();
        let err = validate_clique(&graph, &[1, 2, 3]).unwrap_err();
        assert_eq!(err, ValidationError::NotAdjacent { u: 1, v: 3 });
        assert!(err.to_string().contains("not a clique"));
    }

    #[test]
    fn rejects_duplicates() {
        let graph = triangle_with_tail();
        let err = validate_clique(&graph, &[0, 1, 0]).unwrap_err();
        assert_eq!(err, ValidationError::DuplicateVertex { vertex: 0 });
    }

    #[test]
    fn rejects_out_of_range_members() {
        let graph = triangle_with_tail();
        let err = validate_clique(&graph, &[0, 7]).unwrap_err();
        assert_eq!(
            err,
            ValidationError::VertexOutOfRange {
                vertex: 7,
                order: 5
            }
        );
    }

    #[test]
    fn reports_the_first_violation_only() {
        let graph = triangle_with_tail();
        // Both a duplicate and a missing edge; the duplicate check runs first.
        let err = validate_clique(&graph, &[3, 3, 0]).unwrap_err();
        assert_eq!(err, ValidationError::DuplicateVertex { vertex: 3 });
    }
}
