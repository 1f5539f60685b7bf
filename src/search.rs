//! Repeated-trial search driver: sequential trials over one seeded generator,
//! plus a parallel multi-chain variant.

use crate::construction::{grow_random_clique, Clique};
use crate::graph::Graph;
use rand::prelude::*;
use rand::rngs::SmallRng;
use rayon::prelude::*;
use std::fmt;

// ============================================================================
// Configuration
// ============================================================================

/// Search configuration parameters.
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Number of independent growth trials to run.
    pub iterations: usize,
    /// Randomization strength. Accepted and recorded for interface
    /// compatibility, but not consumed by any move: it has no effect on
    /// search results.
    pub randomization: u32,
    /// Optional deterministic base seed. When absent, a fresh seed is drawn
    /// per run and results are not reproducible across runs.
    pub seed: Option<u64>,
    /// Number of worker chains used by [`search_parallel`]. Ignored by the
    /// sequential [`search`].
    pub chains: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        let chains = std::thread::available_parallelism()
            .map(std::num::NonZero::get)
            .unwrap_or(4);

        Self {
            iterations: 10_000,
            randomization: 0,
            seed: None,
            chains,
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Errors raised by the search entry points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// The graph has no vertices, so no start vertex can be drawn.
    EmptyGraph,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::EmptyGraph => {
                write!(f, "cannot search a graph with no vertices")
            }
        }
    }
}

impl std::error::Error for SearchError {}

// ============================================================================
// Public API
// ============================================================================

/// Runs `cfg.iterations` independent growth trials and returns the largest
/// clique found, as vertex indices in insertion order.
///
/// Every trial starts from a fresh empty clique; no state carries over between
/// trials except the shared generator. The best clique is replaced only when a
/// trial's clique is strictly larger, so on equal sizes the earlier find wins.
///
/// With `cfg.iterations == 0` no trial runs and the returned vector is empty.
/// Given the same graph, seed, and iteration count, repeated calls return
/// identical results; extending only the iteration count never shrinks the
/// returned clique.
///
/// # Errors
/// Returns [`SearchError::EmptyGraph`] if the graph has no vertices.
pub fn search(graph: &Graph, cfg: &SearchConfig) -> Result<Vec<usize>, SearchError> {
    if graph.order() == 0 {
        return Err(SearchError::EmptyGraph);
    }

    let base_seed = cfg.seed.unwrap_or_else(random_u64);
    let mut rng = SmallRng::seed_from_u64(base_seed);

    let best = run_trials(graph, cfg.iterations, &mut rng)?;
    Ok(best.map_or_else(Vec::new, Clique::into_vertices))
}

/// Runs the configured trial budget split across `cfg.chains` parallel worker
/// chains and returns the largest clique found.
///
/// Each chain owns a generator seeded by mixing the base seed with the chain
/// index, and the winner is chosen by size with ties broken toward the lowest
/// chain index. The result is therefore a deterministic function of the graph,
/// seed, iteration count, and chain count, independent of thread scheduling —
/// but it follows a different draw sequence than [`search`], so the two entry
/// points may return different (equally valid) cliques for the same seed.
///
/// # Errors
/// Returns [`SearchError::EmptyGraph`] if the graph has no vertices.
pub fn search_parallel(graph: &Graph, cfg: &SearchConfig) -> Result<Vec<usize>, SearchError> {
    if graph.order() == 0 {
        return Err(SearchError::EmptyGraph);
    }

    let base_seed = cfg.seed.unwrap_or_else(random_u64);
    let chains = cfg.chains.max(1);
    let per_chain = cfg.iterations / chains;
    let remainder = cfg.iterations % chains;

    let best = (0..chains)
        .into_par_iter()
        .map(|chain| {
            // Chains below the remainder take one extra trial so the total
            // matches cfg.iterations exactly.
            let budget = per_chain + usize::from(chain < remainder);
            let mut rng = SmallRng::seed_from_u64(splitmix64(base_seed ^ chain as u64));
            run_trials(graph, budget, &mut rng).map(|best| (chain, best))
        })
        .try_reduce(
            || (usize::MAX, None),
            |a, b| Ok(if chain_beats(&a, &b) { b } else { a }),
        )?;

    Ok(best.1.map_or_else(Vec::new, Clique::into_vertices))
}

/// Returns `true` if candidate `b` should replace the current winner `a`.
///
/// Larger cliques win; on equal size the lower chain index wins, which keeps
/// the reduction order-independent.
fn chain_beats(a: &(usize, Option<Clique>), b: &(usize, Option<Clique>)) -> bool {
    let a_len = a.1.as_ref().map_or(0, Clique::len);
    let b_len = b.1.as_ref().map_or(0, Clique::len);
    b_len > a_len || (b_len == a_len && b_len > 0 && b.0 < a.0)
}

/// Runs `iterations` trials on one generator, keeping the strictly largest
/// clique.
fn run_trials<R: Rng>(
    graph: &Graph,
    iterations: usize,
    rng: &mut R,
) -> Result<Option<Clique>, SearchError> {
    let mut best: Option<Clique> = None;
    for _ in 0..iterations {
        let clique = grow_random_clique(graph, rng)?;
        if best.as_ref().is_none_or(|b| clique.len() > b.len()) {
            best = Some(clique);
        }
    }
    Ok(best)
}

// ============================================================================
// Seeding
// ============================================================================

fn random_u64() -> u64 {
    rand::random::<u64>()
}

/// SplitMix64 mixer for deriving per-chain seeds from a base seed.
#[inline]
fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

// ============================================================================
// Tests
// ============================================================================
