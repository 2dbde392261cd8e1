//! 2-cells bounded by a cyclic sequence of nodes.

use crate::{
  atom::{Atom, Node},
  error::{Error, Result},
  property::{Properties, Value},
  sign::Sign,
};

use itertools::Itertools;
use std::hash::{Hash, Hasher};
use tracing::debug;

pub type Edge<N> = (N, N);

/// A 2-cell of a cell complex.
///
/// The elements `(n_0, ..., n_(k-1))` define the boundary edges
/// `(n_0, n_1), ..., (n_(k-1), n_0)` in cyclic order.
/// A regular cell has no node that is the source of two boundary edges.
/// Self-loops are never allowed.
#[derive(Debug, Clone)]
pub struct Cell<N: Node> {
  elements: Vec<N>,
  regular: bool,
  boundary: Vec<Edge<N>>,
  name: String,
  properties: Properties,
}

impl<N: Node> Cell<N> {
  /// Builds a regular cell.
  pub fn new(elements: impl IntoIterator<Item = N>) -> Result<Self> {
    Self::with_regularity(elements, true)
  }

  /// Builds a cell, enforcing regularity only if `regular` is set.
  pub fn with_regularity(elements: impl IntoIterator<Item = N>, regular: bool) -> Result<Self> {
    let elements: Vec<N> = elements.into_iter().collect();
    if let Err(err) = validate(&elements, regular) {
      debug!(?elements, regular, %err, "rejected cell");
      return Err(err);
    }
    Ok(Self::from_validated(
      elements,
      regular,
      String::new(),
      Properties::new(),
    ))
  }

  fn from_validated(elements: Vec<N>, regular: bool, name: String, properties: Properties) -> Self {
    let boundary = cyclic_edges(&elements)
      .map(|(a, b)| (a.clone(), b.clone()))
      .collect();
    Self {
      elements,
      regular,
      boundary,
      name,
      properties,
    }
  }

  /// Side-effect free version of the construction checks.
  pub fn is_valid_cell(elements: &[N], regular: bool) -> bool {
    validate(elements, regular).is_ok()
  }

  pub fn named(mut self, name: impl Into<String>) -> Self {
    self.name = name.into();
    self
  }
  pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
    self.properties.set(key, value);
    self
  }
  pub fn with_properties(mut self, properties: Properties) -> Self {
    self.properties = properties;
    self
  }

  pub fn elements(&self) -> &[N] {
    &self.elements
  }
  pub fn len(&self) -> usize {
    self.elements.len()
  }
  /// Whether regularity was enforced at construction.
  pub fn is_regular_declared(&self) -> bool {
    self.regular
  }

  /// Whether no node is the source of two boundary edges.
  ///
  /// Trivially true if regularity was enforced at construction.
  pub fn is_regular(&self) -> bool {
    self.regular || self.boundary.iter().map(|(src, _)| src).all_unique()
  }

  /// The boundary edges in cyclic order, starting at the first element.
  pub fn boundary(&self) -> impl ExactSizeIterator<Item = (&N, &N)> + '_ {
    self.boundary.iter().map(|(a, b)| (a, b))
  }
  pub fn boundary_edges(&self) -> &[Edge<N>] {
    &self.boundary
  }

  /// Orientation of `edge` relative to the traversal direction of this cell.
  ///
  /// `edge` must consist of exactly two nodes.
  pub fn sign(&self, edge: &[N]) -> Result<Sign> {
    match edge {
      [src, dst] => self.edge_sign(src, dst),
      _ => Err(Error::InvalidEdge { len: edge.len() }),
    }
  }

  /// `Pos` if `(src, dst)` is a boundary edge, `Neg` if `(dst, src)` is.
  pub fn edge_sign(&self, src: &N, dst: &N) -> Result<Sign> {
    let contains = |a: &N, b: &N| self.boundary.iter().any(|(s, d)| s == a && d == b);
    if contains(src, dst) {
      Ok(Sign::from_traversal(true))
    } else if contains(dst, src) {
      Ok(Sign::from_traversal(false))
    } else {
      Err(Error::NotInBoundary {
        edge: format!("({src:?}, {dst:?})"),
      })
    }
  }

  /// The same cell traversed in the opposite direction.
  pub fn reverse(&self) -> Self {
    let elements = self.elements.iter().rev().cloned().collect();
    Self::from_validated(
      elements,
      self.regular,
      self.name.clone(),
      self.properties.clone(),
    )
  }

  /// Whether the boundaries agree up to cyclic rotation and reversal.
  pub fn is_homotopic_to(&self, other: &Self) -> bool {
    self.is_homotopic_to_sequence(&other.elements)
  }

  /// Same as [`Cell::is_homotopic_to`], for a plain node sequence.
  pub fn is_homotopic_to_sequence(&self, seq: &[N]) -> bool {
    let n = self.len();
    if seq.len() != n {
      return false;
    }
    // multisets with multiplicity, irregular cells may repeat nodes
    if self.elements.iter().counts() != seq.iter().counts() {
      return false;
    }

    let rotation = |r: usize| seq[r..].iter().chain(&seq[..r]);
    (0..n).any(|r| rotation(r).eq(self.elements.iter()))
      || (0..n).any(|r| rotation(r).eq(self.elements.iter().rev()))
  }

  /// Like `clone`, but nested property values are copied instead of shared.
  pub fn deep_clone(&self) -> Self {
    Self {
      properties: self.properties.deep_clone(),
      ..self.clone()
    }
  }
}

fn cyclic_edges<N: Node>(elements: &[N]) -> impl Iterator<Item = (&N, &N)> + '_ {
  elements.iter().circular_tuple_windows::<(_, _)>()
}

fn validate<N: Node>(elements: &[N], regular: bool) -> Result<()> {
  if elements.len() < 2 {
    return Err(Error::TooFewElements {
      len: elements.len(),
    });
  }
  if regular {
    // the sources of the boundary edges are exactly the elements
    if let Some(node) = elements.iter().duplicates().next() {
      return Err(Error::IrregularBoundary {
        node: format!("{node:?}"),
      });
    }
  } else if let Some((node, _)) = cyclic_edges(elements).find(|(a, b)| a == b) {
    return Err(Error::SelfLoop {
      node: format!("{node:?}"),
    });
  }
  Ok(())
}

impl<N: Node> PartialEq for Cell<N> {
  fn eq(&self, other: &Self) -> bool {
    self.elements == other.elements
  }
}
impl<N: Node> Eq for Cell<N> {}
impl<N: Node> Hash for Cell<N> {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.elements.hash(state);
  }
}

impl<N: Node> Atom for Cell<N> {
  type Node = N;

  fn name(&self) -> &str {
    &self.name
  }
  fn properties(&self) -> &Properties {
    &self.properties
  }
  fn properties_mut(&mut self) -> &mut Properties {
    &mut self.properties
  }
  fn atom_nodes(&self) -> &[N] {
    &self.elements
  }
}

impl<N: Node> std::fmt::Display for Cell<N> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(
      f,
      "Cell({})",
      self.elements.iter().map(|n| format!("{n:?}")).join(", ")
    )
  }
}
