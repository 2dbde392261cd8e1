//! Error types for simplex and cell construction and queries.

/// Result type alias for atom operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by [`Simplex`](crate::simplex::Simplex) and [`Cell`](crate::cell::Cell).
///
/// Node identifiers are rendered through their `Debug` form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
  /// The input collection of a simplex contains the same node twice.
  #[error("a simplex cannot contain duplicate nodes: {nodes}")]
  DuplicateNode { nodes: String },

  /// A cell needs at least two elements to bound a 2-cell.
  #[error("cell must contain at least 2 nodes, got {len}")]
  TooFewElements { len: usize },

  /// A node is the source of two boundary edges of a regular cell.
  #[error("node {node} is repeated multiple times in the input cell, violating the regularity condition")]
  IrregularBoundary { node: String },

  /// Two consecutive elements of a cell are the same node.
  #[error("self loops are not permitted, got ({node}, {node}) as an edge in the cell's boundary")]
  SelfLoop { node: String },

  /// The requested property key was never set.
  #[error("attr {key:?} is not an attr in the atom {atom:?}")]
  PropertyNotFound { key: String, atom: String },

  /// Neither orientation of the edge is part of the cell boundary.
  #[error("the input {edge} is not in the boundary of the cell")]
  NotInBoundary { edge: String },

  /// An edge must consist of exactly two nodes.
  #[error("the input is not a valid edge: expected 2 nodes, got {len}")]
  InvalidEdge { len: usize },
}

impl Error {
  pub fn is_validation(&self) -> bool {
    matches!(
      self,
      Self::DuplicateNode { .. }
        | Self::TooFewElements { .. }
        | Self::IrregularBoundary { .. }
        | Self::SelfLoop { .. }
    )
  }

  pub fn is_lookup(&self) -> bool {
    matches!(
      self,
      Self::PropertyNotFound { .. } | Self::NotInBoundary { .. }
    )
  }
}
