//! DIMACS `.clq` instance parsing.
//!
//! The benchmark instances use the DIMACS clique format: `c` comment lines,
//! one `p edge <vertices> <edges>` problem line, and `e <u> <v>` edge lines
//! with one-indexed endpoints. Edges may be repeated in the file; repeats
//! collapse into a single adjacency entry.

use crate::graph::{Graph, GraphError};
use std::fmt;
use std::path::Path;

// ============================================================================
// Public API
// ============================================================================

/// Parses DIMACS clique text into a [`Graph`].
///
/// Endpoints are one-indexed in the input and zero-indexed in the returned
/// graph. Blank lines are ignored; anything other than `c`, `p`, and `e`
/// lines is rejected.
///
/// # Errors
/// Returns an error for a missing, repeated, or malformed problem line, a
/// malformed or misplaced edge line, an endpoint outside `1..=vertices`, or a
/// self-loop.
pub fn parse_dimacs(text: &str) -> Result<Graph, DimacsError> {
    let mut order: Option<usize> = None;
    let mut edges: Vec<(usize, usize)> = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let content = raw.trim();
        if content.is_empty() {
            continue;
        }

        match content.as_bytes()[0] {
            b'c' => {}
            b'p' => {
                if order.is_some() {
                    return Err(DimacsError::DuplicateProblemLine { line });
                }
                let (n, m) = parse_problem_line(content)
                    .ok_or(DimacsError::MalformedProblemLine { line })?;
                order = Some(n);
                edges.reserve(m);
            }
            b'e' => {
                let Some(n) = order else {
                    return Err(DimacsError::EdgeBeforeProblemLine { line });
                };
                let (u, v) =
                    parse_edge_line(content).ok_or(DimacsError::MalformedEdgeLine { line })?;
                for endpoint in [u, v] {
                    if endpoint == 0 || endpoint > n {
                        return Err(DimacsError::EndpointOutOfRange {
                            line,
                            endpoint,
                            order: n,
                        });
                    }
                }
                if u == v {
                    return Err(DimacsError::SelfLoop { line, endpoint: u });
                }
                edges.push((u - 1, v - 1));
            }
            kind => {
                return Err(DimacsError::UnknownLineKind {
                    line,
                    kind: kind as char,
                });
            }
        }
    }

    let Some(n) = order else {
        return Err(DimacsError::MissingProblemLine);
    };
    Ok(Graph::from_edges(n, edges)?)
}

/// Loads and parses a DIMACS `.clq` file.
///
/// # Errors
/// Returns an error if the file cannot be read or its contents fail
/// [`parse_dimacs`].
pub fn load_dimacs(path: impl AsRef<Path>) -> Result<Graph, DimacsError> {
    let text = std::fs::read_to_string(path).map_err(|e| DimacsError::Io(e.to_string()))?;
    parse_dimacs(&text)
}

// ============================================================================
// Line parsing
// ============================================================================

/// Extracts `(vertices, edges)` from a `p edge <vertices> <edges>` line.
fn parse_problem_line(content: &str) -> Option<(usize, usize)> {
    let mut tokens = content.split_whitespace();
    if tokens.next() != Some("p") {
        return None;
    }
    // The format token is conventionally "edge"; some instances write "col".
    tokens.next()?;
    let n = tokens.next()?.parse().ok()?;
    let m = tokens.next()?.parse().ok()?;
    if tokens.next().is_some() {
        return None;
    }
    Some((n, m))
}

/// Extracts one-indexed `(u, v)` from an `e <u> <v>` line.
fn parse_edge_line(content: &str) -> Option<(usize, usize)> {
    let mut tokens = content.split_whitespace();
    if tokens.next() != Some("e") {
        return None;
    }
    let u = tokens.next()?.parse().ok()?;
    let v = tokens.next()?.parse().ok()?;
    if tokens.next().is_some() {
        return None;
    }
    Some((u, v))
}

// ============================================================================
// Errors
// ============================================================================

/// Errors encountered while reading a DIMACS clique instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DimacsError {
    /// I/O error (file not found, etc.).
    Io(String),
    /// The input has no `p` problem line.
    MissingProblemLine,
    /// A second `p` line was found.
    DuplicateProblemLine {
        /// One-indexed line number.
        line: usize,
    },
    /// A `p` line did not match `p <format> <vertices> <edges>`.
    MalformedProblemLine {
        /// One-indexed line number.
        line: usize,
    },
    /// An `e` line did not match `e <u> <v>`.
    MalformedEdgeLine {
        /// One-indexed line number.
        line: usize,
    },
    /// An `e` line appeared before the `p` line declared the vertex count.
    EdgeBeforeProblemLine {
        /// One-indexed line number.
        line: usize,
    },
    /// An edge endpoint lies outside `1..=vertices`.
    EndpointOutOfRange {
        /// One-indexed line number.
        line: usize,
        /// The offending endpoint as written in the file.
        endpoint: usize,
        /// The declared vertex count.
        order: usize,
    },
    /// An edge joins a vertex to itself.
    SelfLoop {
        /// One-indexed line number.
        line: usize,
        /// The looping endpoint as written in the file.
        endpoint: usize,
    },
    /// A line starts with something other than `c`, `p`, or `e`.
    UnknownLineKind {
        /// One-indexed line number.
        line: usize,
        /// The unrecognized leading character.
        kind: char,
    },
    /// The edge list failed graph construction.
    Graph(GraphError),
}

impl From<GraphError> for DimacsError {
    fn from(e: GraphError) -> Self {
        DimacsError::Graph(e)
    }
}

impl fmt::Display for DimacsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DimacsError::Io(msg) => write!(f, "I/O error: {msg}"),
            DimacsError::MissingProblemLine => {
                write!(f, "no 'p' problem line found")
            }
            DimacsError::DuplicateProblemLine { line } => {
                write!(f, "line {line}: second 'p' problem line")
            }
            DimacsError::MalformedProblemLine { line } => write!(
                f,
                "line {line}: expected 'p <format> <vertices> <edges>'"
            ),
            DimacsError::MalformedEdgeLine { line } => {
                write!(f, "line {line}: expected 'e <u> <v>'")
            }
            DimacsError::EdgeBeforeProblemLine { line } => {
                write!(f, "line {line}: edge listed before the 'p' problem line")
            }
            DimacsError::EndpointOutOfRange {
                line,
                endpoint,
                order,
            } => write!(
                f,
                "line {line}: endpoint {endpoint} is outside 1..={order}"
            ),
            DimacsError::SelfLoop { line, endpoint } => {
                write!(f, "line {line}: self-loop at vertex {endpoint}")
            }
            DimacsError::UnknownLineKind { line, kind } => write!(
                f,
                "line {line}: unknown line kind {kind:?} (expected 'c', 'p', or 'e')"
            ),
            DimacsError::Graph(e) => write!(f, "invalid graph: {e}"),
        }
    }
}

impl std::error::Error for DimacsError {}

// ============================================================================
// Tests
// ============================================================================
