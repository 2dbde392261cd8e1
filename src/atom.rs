use crate::{
  error::Result,
  property::{Properties, Value},
};

use std::{fmt::Debug, hash::Hash};

/// Identifier of a node (0-cell).
///
/// `Ord` gives faces a canonical node order.
pub trait Node: Clone + Eq + Hash + Ord + Debug {}
impl<T: Clone + Eq + Hash + Ord + Debug> Node for T {}

/// Shared contract of the building blocks of a complex.
///
/// Identity (`Eq`, `Hash`) is structural and only depends on the nodes,
/// never on the name or the properties.
pub trait Atom: Eq + Hash {
  type Node: Node;

  fn name(&self) -> &str;
  fn properties(&self) -> &Properties;
  fn properties_mut(&mut self) -> &mut Properties;

  /// The constituent nodes, in the order the atom defines them.
  fn atom_nodes(&self) -> &[Self::Node];

  fn get_property(&self, key: &str) -> Result<&Value> {
    self.properties().get(key, self.name())
  }
  fn set_property(&mut self, key: impl Into<String>, value: impl Into<Value>) {
    self.properties_mut().set(key, value);
  }
}
