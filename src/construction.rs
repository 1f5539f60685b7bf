//! Greedy randomized construction of locally maximal cliques.
//!
//! One trial grows a clique outward from a uniformly random start vertex:
//! while some vertex outside the clique is adjacent to every member, one such
//! vertex is drawn uniformly at random and inserted. When no vertex extends
//! the clique and no member violates pairwise adjacency, the clique is locally
//! maximal and the trial ends.

use crate::graph::{Graph, VertexSet};
use crate::search::SearchError;
use rand::Rng;

// ============================================================================
// Clique
// ============================================================================

/// A working clique: an insertion-ordered member list with a membership bitset
/// for O(1) `contains`.
///
/// The growth routine only ever inserts vertices adjacent to every current
/// member, so a `Clique` it returns satisfies pairwise adjacency by
/// construction.
#[derive(Clone, Debug)]
pub struct Clique {
    members: Vec<usize>,
    mask: VertexSet,
}

impl Clique {
    /// Creates an empty clique over the domain `0..domain`.
    pub fn new(domain: usize) -> Self {
        Self {
            members: Vec::new(),
            mask: VertexSet::new(domain),
        }
    }

    /// Returns the number of members.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the clique has no members.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns whether `v` is a member.
    #[inline(always)]
    pub fn contains(&self, v: usize) -> bool {
        self.mask.contains(v)
    }

    /// Returns the members in insertion order.
    #[inline(always)]
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    /// Inserts `v`, returning `true` if it was not already a member.
    pub fn insert(&mut self, v: usize) -> bool {
        if self.mask.insert(v) {
            self.members.push(v);
            true
        } else {
            false
        }
    }

    /// Removes `v`, returning `true` if it was a member.
    pub fn remove(&mut self, v: usize) -> bool {
        if self.mask.remove(v) {
            let idx = self
                .members
                .iter()
                .position(|&m| m == v)
                .expect("mask and member list must agree");
            self.members.remove(idx);
            true
        } else {
            false
        }
    }

    /// Consumes the clique, yielding its members in insertion order.
    pub fn into_vertices(self) -> Vec<usize> {
        self.members
    }
}

// ============================================================================
// Single trial
// ============================================================================

/// Runs one growth trial, returning a locally maximal clique.
///
/// The start vertex is drawn uniformly from `0..graph.order()`. Candidate
/// vertices are collected in ascending index order and one is drawn uniformly
/// per insertion, so a trial's outcome is a deterministic function of the
/// generator state it consumes.
///
/// # Errors
/// Returns [`SearchError::EmptyGraph`] for a graph with no vertices, since no
/// start vertex can be drawn.
pub fn grow_random_clique<R: Rng>(graph: &Graph, rng: &mut R) -> Result<Clique, SearchError> {
    let n = graph.order();
    if n == 0 {
        return Err(SearchError::EmptyGraph);
    }

    let mut clique = Clique::new(n);
    clique.insert(rng.random_range(0..n));

    let mut scratch = VertexSet::new(n);
    let mut candidates = Vec::new();

    loop {
        collect_candidates(graph, &clique, &mut scratch, &mut candidates);

        if !candidates.is_empty() {
            let pick = candidates[rng.random_range(0..candidates.len())];
            clique.insert(pick);
            continue;
        }

        // No vertex extends the clique. The other move of the local search
        // drops a member that is not adjacent to some other member. Insertions
        // above only ever add vertices adjacent to every member, so this sweep
        // finds nothing under the current move set; it is kept so termination
        // means "no move applies" rather than "no candidate exists".
        match find_inconsistent_member(graph, &clique) {
            Some(v) => {
                clique.remove(v);
            }
            None => break,
        }
    }

    Ok(clique)
}

/// Collects every vertex outside `clique` adjacent to all of its members, in
/// ascending index order.
///
/// The candidate set is the intersection of the members' neighbor sets; since
/// no vertex neighbors itself, the members drop out of the intersection on
/// their own.
fn collect_candidates(
    graph: &Graph,
    clique: &Clique,
    scratch: &mut VertexSet,
    out: &mut Vec<usize>,
) {
    out.clear();
    let mut members = clique.members().iter().copied();
    let Some(first) = members.next() else {
        return;
    };

    scratch.copy_from(graph.neighbors(first));
    for m in members {
        scratch.intersect_with(graph.neighbors(m));
        if scratch.is_empty() {
            return;
        }
    }
    out.extend(scratch.iter());
}

/// Returns a member that fails pairwise adjacency with some other member, if
/// any exists.
fn find_inconsistent_member(graph: &Graph, clique: &Clique) -> Option<usize> {
    clique.members().iter().copied().find(|&u| {
        clique
            .members()
            .iter()
            .any(|&v| v != u && !graph.is_adjacent(u, v))
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    fn triangle() -> Graph {
        Graph::from_edges(3, [(0, 1), (1, 2), (0, 2)]).unwrap()
    }

    #[test]
    fn clique_insert_remove_bookkeeping() {
        let mut clique = Clique::new(10);
        assert!(clique.insert(4));
        assert!(clique.insert(7));
        assert!(!clique.insert(4), "second insert must report no change");
        assert_eq!(clique.len(), 2);
        assert!(clique.contains(4));
        assert_eq!(clique.members(), &[4, 7]);

        assert!(clique.remove(4));
        assert!(!clique.remove(4));
        assert_eq!(clique.members(), &[7]);
        assert!(!clique.contains(4));
    }

    #[test]
    fn into_vertices_preserves_insertion_order() {
        let mut clique = Clique::new(10);
        clique.insert(9);
        clique.insert(2);
        clique.insert(5);
        assert_eq!(clique.into_vertices(), vec![9, 2, 5]);
    }

    #[test]
    fn trial_on_triangle_reaches_size_three() {
        let graph = triangle();
        let mut rng = XorShiftRng::seed_from_u64(42);
        for _ in 0..20 {
            let clique = grow_random_clique(&graph, &mut rng).unwrap();
            assert_eq!(clique.len(), 3);
        }
    }

    #[test]
    fn trial_on_edgeless_graph_returns_one_vertex() {
        let graph = Graph::from_edges(4, []).unwrap();
        let mut rng = XorShiftRng::seed_from_u64(7);
        for _ in 0..20 {
            let clique = grow_random_clique(&graph, &mut rng).unwrap();
            assert_eq!(clique.len(), 1);
        }
    }

    #[test]
    fn trial_on_single_vertex_graph_returns_it() {
        let graph = Graph::from_edges(1, []).unwrap();
        let mut rng = XorShiftRng::seed_from_u64(1);
        let clique = grow_random_clique(&graph, &mut rng).unwrap();
        assert_eq!(clique.members(), &[0]);
    }

    #[test]
    fn trial_on_empty_graph_fails_fast() {
        let graph = Graph::from_edges(0, []).unwrap();
        let mut rng = XorShiftRng::seed_from_u64(1);
        let err = grow_random_clique(&graph, &mut rng).unwrap_err();
        assert_eq!(err, SearchError::EmptyGraph);
    }

    #[test]
    fn trial_on_star_graph_always_finds_one_edge() {
        // Center 0 joined to 1..=6, no edges among the leaves.
        let graph = Graph::from_edges(7, (1..7).map(|leaf| (0, leaf))).unwrap();
        let mut rng = XorShiftRng::seed_from_u64(99);
        for _ in 0..50 {
            let clique = grow_random_clique(&graph, &mut rng).unwrap();
            assert_eq!(clique.len(), 2);
            assert!(clique.contains(0), "every edge of a star touches the center");
        }
    }

    #[test]
    fn grown_clique_is_pairwise_adjacent() {
        // Two K4 blocks sharing no edges, joined by a bridge.
        let edges = [
            (0, 1),
            (0, 2),
            (0, 3),
            (1, 2),
            (1, 3),
            (2, 3),
            (4, 5),
            (4, 6),
            (4, 7),
            (5, 6),
            (5, 7),
            (6, 7),
            (3, 4),
        ];
        let graph = Graph::from_edges(8, edges).unwrap();
        let mut rng = XorShiftRng::seed_from_u64(2024);
        for _ in 0..100 {
            let clique = grow_random_clique(&graph, &mut rng).unwrap();
            let members = clique.members();
            for (i, &u) in members.iter().enumerate() {
                for &v in &members[i + 1..] {
                    assert!(graph.is_adjacent(u, v), "members {u} and {v} not adjacent");
                }
            }
        }
    }

    #[test]
    fn grown_clique_is_locally_maximal() {
        let edges = [
            (0, 1),
            (0, 2),
            (1, 2),
            (2, 3),
            (3, 4),
            (3, 5),
            (4, 5),
            (1, 3),
        ];
        let graph = Graph::from_edges(6, edges).unwrap();
        let mut rng = XorShiftRng::seed_from_u64(5);
        for _ in 0..100 {
            let clique = grow_random_clique(&graph, &mut rng).unwrap();
            for v in 0..graph.order() {
                if clique.contains(v) {
                    continue;
                }
                let extends = clique.members().iter().all(|&m| graph.is_adjacent(v, m));
                assert!(!extends, "vertex {v} could still extend the clique");
            }
        }
    }

    #[test]
    fn removal_sweep_finds_nothing_after_growth() {
        let graph = Graph::from_edges(5, [(0, 1), (1, 2), (0, 2), (2, 3), (3, 4)]).unwrap();
        let mut rng = XorShiftRng::seed_from_u64(11);
        for _ in 0..50 {
            let clique = grow_random_clique(&graph, &mut rng).unwrap();
            assert_eq!(find_inconsistent_member(&graph, &clique), None);
        }
    }

    #[test]
    fn candidate_collection_is_ascending_and_excludes_members() {
        let graph = Graph::complete(6);
        let mut clique = Clique::new(6);
        clique.insert(4);
        clique.insert(1);

        let mut scratch = VertexSet::new(6);
        let mut out = Vec::new();
        collect_candidates(&graph, &clique, &mut scratch, &mut out);
        assert_eq!(out, vec![0, 2, 3, 5]);
    }
}
