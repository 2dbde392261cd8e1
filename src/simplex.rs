//! Simplices: unordered, duplicate-free sets of nodes.

use crate::{
  atom::{Atom, Node},
  error::{Error, Result},
  property::{Properties, Value},
  sign::Sign,
  Dim,
};

use indexmap::IndexSet;
use itertools::Itertools;
use rayon::prelude::*;
use std::{
  borrow::Cow,
  hash::{Hash, Hasher},
};
use tracing::{debug, trace, warn};

/// Eager face trees of simplices with more nodes than this are reported,
/// since they hold `2^n - 1` faces.
pub const LARGE_FACE_TREE: usize = 16;

/// Whether the faces of a simplex are materialized at construction
/// or recomputed whenever they are requested.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FaceTree {
  #[default]
  Eager,
  Lazy,
}

pub type FaceSet<N> = IndexSet<Simplex<N>>;

/// Number of nonempty faces (including itself) of a simplex with `n` nodes,
/// `2^n - 1`. `None` if it does not fit into a `usize`.
pub fn nfaces(n: usize) -> Option<usize> {
  let n = u32::try_from(n).ok()?;
  1usize.checked_shl(n).map(|p| p - 1)
}

/// A face of a simplicial complex.
///
/// The nodes are stored in canonical (sorted) order, so two simplices
/// built from permutations of the same nodes are equal and hash equally.
#[derive(Debug, Clone)]
pub struct Simplex<N: Node> {
  nodes: Vec<N>,
  name: String,
  face_tree: FaceTree,
  faces: Option<FaceSet<N>>,
  properties: Properties,
}

impl<N: Node> Simplex<N> {
  /// Builds a simplex with an eagerly materialized face tree.
  pub fn new(nodes: impl IntoIterator<Item = N>) -> Result<Self> {
    Self::with_face_tree(nodes, FaceTree::Eager)
  }

  pub fn with_face_tree(nodes: impl IntoIterator<Item = N>, face_tree: FaceTree) -> Result<Self> {
    let input: Vec<N> = nodes.into_iter().collect();
    let mut nodes = input.clone();
    nodes.sort_unstable();
    nodes.dedup();
    if nodes.len() != input.len() {
      debug!(?input, "rejected simplex with duplicate nodes");
      return Err(Error::DuplicateNode {
        nodes: format!("{input:?}"),
      });
    }

    let faces = match face_tree {
      FaceTree::Eager => Some(Self::face_closure(&nodes)),
      FaceTree::Lazy => None,
    };

    Ok(Self {
      nodes,
      name: String::new(),
      face_tree,
      faces,
      properties: Properties::new(),
    })
  }

  /// A face: already canonical, no face tree of its own.
  fn from_canonical(nodes: Vec<N>) -> Self {
    debug_assert!(nodes.iter().tuple_windows().all(|(a, b)| a < b));
    Self {
      nodes,
      name: String::new(),
      face_tree: FaceTree::Lazy,
      faces: None,
      properties: Properties::new(),
    }
  }

  /// All nonempty subsets of `nodes`, from the largest to the singletons.
  fn face_closure(nodes: &[N]) -> FaceSet<N> {
    let n = nodes.len();
    if n > LARGE_FACE_TREE {
      warn!(n, nfaces = ?nfaces(n), "materializing a large face tree");
    }
    let faces: FaceSet<N> = (1..=n)
      .rev()
      .flat_map(|k| Self::canonical_faces_of_len(nodes, k))
      .collect();
    trace!(n, nfaces = faces.len(), "materialized face tree");
    faces
  }

  fn canonical_faces_of_len(nodes: &[N], k: usize) -> impl Iterator<Item = Self> + '_ {
    nodes
      .iter()
      .cloned()
      .combinations(k)
      .map(Self::from_canonical)
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

  pub fn nodes(&self) -> &[N] {
    &self.nodes
  }
  pub fn len(&self) -> usize {
    self.nodes.len()
  }
  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty()
  }
  /// The empty simplex has dimension `-1`.
  pub fn dim(&self) -> isize {
    self.len() as isize - 1
  }
  pub fn face_tree(&self) -> FaceTree {
    self.face_tree
  }
  pub fn iter(&self) -> std::slice::Iter<'_, N> {
    self.nodes.iter()
  }

  pub fn contains_node(&self, node: &N) -> bool {
    self.nodes.binary_search(node).is_ok()
  }
  /// Whether `nodes` is a nonempty subset of this simplex.
  pub fn contains_nodes(&self, nodes: &[N]) -> bool {
    !nodes.is_empty() && nodes.iter().all(|n| self.contains_node(n))
  }
  /// Whether `face` is a face of this simplex (possibly itself).
  pub fn contains_face(&self, face: &Self) -> bool {
    self.contains_nodes(&face.nodes)
  }

  /// All nonempty faces, including the simplex itself.
  ///
  /// Borrowed when the face tree was built eagerly, recomputed otherwise.
  pub fn faces(&self) -> Cow<'_, FaceSet<N>> {
    match &self.faces {
      Some(faces) => Cow::Borrowed(faces),
      None => Cow::Owned(Self::face_closure(&self.nodes)),
    }
  }

  /// Faces with exactly `k` nodes.
  pub fn faces_of_len(&self, k: usize) -> FaceSet<N> {
    if k == 0 || k > self.len() {
      return FaceSet::new();
    }
    match &self.faces {
      Some(faces) => faces.iter().filter(|f| f.len() == k).cloned().collect(),
      None => Self::canonical_faces_of_len(&self.nodes, k).collect(),
    }
  }
  /// Faces of dimension `dim`.
  pub fn subsimps(&self, dim: Dim) -> FaceSet<N> {
    self.faces_of_len(dim + 1)
  }

  /// The codimension-1 faces.
  pub fn boundary(&self) -> FaceSet<N> {
    match self.len().checked_sub(1) {
      Some(k) => self.faces_of_len(k),
      None => FaceSet::new(),
    }
  }

  /// The codimension-1 faces with their induced orientation.
  ///
  /// The face omitting the `i`-th node (in canonical order) has sign `(-1)^i`.
  pub fn signed_boundary(&self) -> Vec<(Self, Sign)> {
    if self.len() < 2 {
      return Vec::new();
    }
    (0..self.len())
      .map(|i| {
        let mut nodes = self.nodes.clone();
        nodes.remove(i);
        (Self::from_canonical(nodes), Sign::from_parity(i))
      })
      .collect()
  }

  /// `None` for lazy simplices whose face count overflows a `usize`.
  pub fn face_count(&self) -> Option<usize> {
    match &self.faces {
      Some(faces) => Some(faces.len()),
      None => nfaces(self.len()),
    }
  }

  /// Like `clone`, but nested property values are copied instead of shared.
  pub fn deep_clone(&self) -> Self {
    Self {
      properties: self.properties.deep_clone(),
      ..self.clone()
    }
  }
}

/// Constructs one simplex per node collection in parallel.
///
/// Fails if any collection is rejected. When several are invalid,
/// which of their errors is returned is unspecified.
pub fn build_many<N, C>(collections: Vec<C>, face_tree: FaceTree) -> Result<Vec<Simplex<N>>>
where
  N: Node + Send + Sync,
  C: IntoIterator<Item = N> + Send,
{
  collections
    .into_par_iter()
    .map(|nodes| Simplex::with_face_tree(nodes, face_tree))
    .collect()
}

impl<N: Node> PartialEq for Simplex<N> {
  fn eq(&self, other: &Self) -> bool {
    self.nodes == other.nodes
  }
}
impl<N: Node> Eq for Simplex<N> {}
impl<N: Node> Hash for Simplex<N> {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.nodes.hash(state);
  }
}

/// Graded lexicographical order: first the number of nodes, then the nodes.
impl<N: Node> PartialOrd for Simplex<N> {
  fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
    Some(self.cmp(other))
  }
}
impl<N: Node> Ord for Simplex<N> {
  fn cmp(&self, other: &Self) -> std::cmp::Ordering {
    self
      .len()
      .cmp(&other.len())
      .then_with(|| self.nodes.cmp(&other.nodes))
  }
}

impl<N: Node> Atom for Simplex<N> {
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
    &self.nodes
  }
}

impl<'a, N: Node> IntoIterator for &'a Simplex<N> {
  type Item = &'a N;
  type IntoIter = std::slice::Iter<'a, N>;
  fn into_iter(self) -> Self::IntoIter {
    self.nodes.iter()
  }
}

impl<N: Node> std::fmt::Display for Simplex<N> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "Simplex({})", self.nodes.iter().map(|n| format!("{n:?}")).join(", "))
  }
}
