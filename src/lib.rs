//! Atoms of topological complexes: simplices and 2-cells.

extern crate nalgebra_sparse as nas;

pub mod atom;
pub mod cell;
pub mod complex;
pub mod error;
pub mod property;
pub mod sign;
pub mod simplex;

pub use atom::{Atom, Node};
pub use cell::Cell;
pub use complex::Complex;
pub use error::{Error, Result};
pub use property::{Properties, Value};
pub use sign::Sign;
pub use simplex::{FaceTree, Simplex};

pub type Dim = usize;
