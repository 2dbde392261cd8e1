//! The contract that containers of atoms (simplicial, cell and
//! combinatorial complexes) fulfill.
//!
//! No container lives in this crate; simplices and cells are what
//! such containers are built from.

use crate::{
  atom::{Atom, Node},
  Dim,
};

use nas::{CooMatrix, CsrMatrix};

pub type SparseMatrix = CsrMatrix<i32>;

pub trait Complex: Clone + std::fmt::Display {
  type Node: Node;
  type Atom: Atom<Node = Self::Node>;

  /// All nodes (0-atoms).
  fn nodes(&self) -> Vec<Self::Node>;
  /// Highest rank of an atom. The empty complex has dimension `-1`.
  fn dim(&self) -> isize;
  /// Number of atoms of each rank, starting at rank 0.
  fn shape(&self) -> Vec<usize>;
  /// All atoms of rank `rank`, in the order used by the matrices.
  fn skeleton(&self, rank: Dim) -> Vec<Self::Atom>;
  /// Number of nodes.
  fn len(&self) -> usize;
  fn iter(&self) -> impl Iterator<Item = &Self::Atom>;
  fn contains(&self, atom: &Self::Atom) -> bool;
  /// The stored atom equal to `atom`, carrying the stored properties.
  fn get(&self, atom: &Self::Atom) -> Option<&Self::Atom>;

  /// Removes the nodes and every atom containing one of them.
  fn remove_nodes(&mut self, nodes: &[Self::Node]);
  fn add_node(&mut self, node: Self::Node);

  /// Signed incidence between `rank - 1` atoms (rows) and `rank` atoms (cols).
  fn incidence_matrix(&self, rank: Dim) -> SparseMatrix;

  /// Rank-`rank` atoms are adjacent if they share a coface of rank `rank + 1`.
  fn adjacency_matrix(&self, rank: Dim) -> SparseMatrix {
    let incidence = self.incidence_matrix(rank + 1);
    let n = self.skeleton(rank).len();
    if incidence.ncols() == 0 {
      return SparseMatrix::zeros(n, n);
    }
    let unsigned = unsigned(&incidence);
    off_diagonal_pattern(&(&unsigned * &unsigned.transpose()))
  }

  /// Rank-`rank` atoms are coadjacent if they share a face of rank `rank - 1`.
  fn coadjacency_matrix(&self, rank: Dim) -> SparseMatrix {
    let incidence = self.incidence_matrix(rank);
    let n = incidence.ncols();
    if incidence.nrows() == 0 {
      return SparseMatrix::zeros(n, n);
    }
    let unsigned = unsigned(&incidence);
    off_diagonal_pattern(&(&unsigned.transpose() * &unsigned))
  }

  fn is_empty(&self) -> bool {
    self.len() == 0
  }
  fn contains_node(&self, node: &Self::Node) -> bool {
    self.nodes().contains(node)
  }
}

fn unsigned(mat: &SparseMatrix) -> SparseMatrix {
  let mut coo = CooMatrix::new(mat.nrows(), mat.ncols());
  for (i, j, v) in mat.triplet_iter() {
    coo.push(i, j, v.abs());
  }
  SparseMatrix::from(&coo)
}

/// Keeps the sparsity pattern off the diagonal, with unit entries.
fn off_diagonal_pattern(mat: &SparseMatrix) -> SparseMatrix {
  let mut coo = CooMatrix::new(mat.nrows(), mat.ncols());
  for (i, j, &v) in mat.triplet_iter() {
    if i != j && v != 0 {
      coo.push(i, j, 1);
    }
  }
  SparseMatrix::from(&coo)
}
