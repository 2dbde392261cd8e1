//! Property maps attached to atoms.

use crate::error::{Error, Result};

use indexmap::IndexMap;
use std::sync::{Arc, RwLock};

/// A dynamically typed property value.
///
/// Cloning shares the payload of [`Value::Shared`]; use [`Value::deep_clone`]
/// to detach it.
#[derive(Debug, Clone, Default)]
pub enum Value {
  #[default]
  Null,
  Bool(bool),
  Int(i64),
  Float(f64),
  Str(String),
  List(Vec<Value>),
  Shared(Arc<RwLock<Value>>),
}

impl Value {
  /// Wraps `value` into a shared, interiorly mutable container.
  pub fn shared(value: impl Into<Value>) -> Self {
    Self::Shared(Arc::new(RwLock::new(value.into())))
  }

  /// Recursively copies the value, giving every shared payload its own allocation.
  pub fn deep_clone(&self) -> Self {
    match self {
      Self::List(list) => Self::List(list.iter().map(Value::deep_clone).collect()),
      Self::Shared(shared) => {
        let inner = match shared.read() {
          Ok(guard) => guard.deep_clone(),
          Err(poisoned) => poisoned.into_inner().deep_clone(),
        };
        Self::shared(inner)
      }
      other => other.clone(),
    }
  }

  pub fn as_bool(&self) -> Option<bool> {
    match self {
      Self::Bool(b) => Some(*b),
      _ => None,
    }
  }
  pub fn as_i64(&self) -> Option<i64> {
    match self {
      Self::Int(i) => Some(*i),
      _ => None,
    }
  }
  pub fn as_f64(&self) -> Option<f64> {
    match self {
      Self::Float(f) => Some(*f),
      Self::Int(i) => Some(*i as f64),
      _ => None,
    }
  }
  pub fn as_str(&self) -> Option<&str> {
    match self {
      Self::Str(s) => Some(s),
      _ => None,
    }
  }
  pub fn as_list(&self) -> Option<&[Value]> {
    match self {
      Self::List(l) => Some(l),
      _ => None,
    }
  }
  pub fn as_shared(&self) -> Option<&Arc<RwLock<Value>>> {
    match self {
      Self::Shared(s) => Some(s),
      _ => None,
    }
  }
}

impl PartialEq for Value {
  fn eq(&self, other: &Self) -> bool {
    match (self, other) {
      (Self::Null, Self::Null) => true,
      (Self::Bool(a), Self::Bool(b)) => a == b,
      (Self::Int(a), Self::Int(b)) => a == b,
      (Self::Float(a), Self::Float(b)) => a == b,
      (Self::Str(a), Self::Str(b)) => a == b,
      (Self::List(a), Self::List(b)) => a == b,
      (Self::Shared(a), Self::Shared(b)) => {
        if Arc::ptr_eq(a, b) {
          return true;
        }
        match (a.read(), b.read()) {
          (Ok(a), Ok(b)) => *a == *b,
          _ => false,
        }
      }
      _ => false,
    }
  }
}

impl From<bool> for Value {
  fn from(b: bool) -> Self {
    Self::Bool(b)
  }
}
impl From<i64> for Value {
  fn from(i: i64) -> Self {
    Self::Int(i)
  }
}
impl From<i32> for Value {
  fn from(i: i32) -> Self {
    Self::Int(i64::from(i))
  }
}
impl From<f64> for Value {
  fn from(f: f64) -> Self {
    Self::Float(f)
  }
}
impl From<&str> for Value {
  fn from(s: &str) -> Self {
    Self::Str(s.to_owned())
  }
}
impl From<String> for Value {
  fn from(s: String) -> Self {
    Self::Str(s)
  }
}
impl<T: Into<Value>> From<Vec<T>> for Value {
  fn from(v: Vec<T>) -> Self {
    Self::List(v.into_iter().map(Into::into).collect())
  }
}

/// Insertion-ordered map of named property values.
///
/// Keys are restricted to `String`s; values carry the dynamic typing
/// through [`Value`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Properties {
  map: IndexMap<String, Value>,
}

impl Properties {
  pub fn new() -> Self {
    Self::default()
  }

  /// Looks up `key`, failing with [`Error::PropertyNotFound`] attributed to `atom`.
  pub fn get(&self, key: &str, atom: &str) -> Result<&Value> {
    self.map.get(key).ok_or_else(|| Error::PropertyNotFound {
      key: key.to_owned(),
      atom: atom.to_owned(),
    })
  }
  pub fn try_get(&self, key: &str) -> Option<&Value> {
    self.map.get(key)
  }
  pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
    self.map.get_mut(key)
  }

  /// Inserts or overwrites. Returns the previous value.
  pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
    self.map.insert(key.into(), value.into())
  }
  pub fn remove(&mut self, key: &str) -> Option<Value> {
    self.map.shift_remove(key)
  }

  pub fn contains_key(&self, key: &str) -> bool {
    self.map.contains_key(key)
  }
  pub fn len(&self) -> usize {
    self.map.len()
  }
  pub fn is_empty(&self) -> bool {
    self.map.is_empty()
  }
  pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
    self.map.iter()
  }
  pub fn keys(&self) -> impl Iterator<Item = &str> {
    self.map.keys().map(String::as_str)
  }

  pub fn deep_clone(&self) -> Self {
    let map = self
      .map
      .iter()
      .map(|(k, v)| (k.clone(), v.deep_clone()))
      .collect();
    Self { map }
  }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Properties {
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    let map = iter
      .into_iter()
      .map(|(k, v)| (k.into(), v.into()))
      .collect();
    Self { map }
  }
}

impl<'a> IntoIterator for &'a Properties {
  type Item = (&'a String, &'a Value);
  type IntoIter = indexmap::map::Iter<'a, String, Value>;
  fn into_iter(self) -> Self::IntoIter {
    self.map.iter()
  }
}

impl std::fmt::Display for Properties {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{{")?;
    for (i, (k, v)) in self.map.iter().enumerate() {
      if i > 0 {
        write!(f, ", ")?;
      }
      write!(f, "{k:?}: {v:?}")?;
    }
    write!(f, "}}")
  }
}

#[cfg(test)]
mod test {
  use super::{Properties, Value};
  use crate::error::Error;

  #[test]
  fn missing_key_is_lookup_error() {
    let props = Properties::new();
    let err = props.get("weight", "e1").unwrap_err();
    assert_eq!(
      err,
      Error::PropertyNotFound {
        key: "weight".into(),
        atom: "e1".into()
      }
    );
    assert!(err.is_lookup());
  }

  #[test]
  fn set_overwrites() {
    let mut props = Properties::new();
    assert_eq!(props.set("weight", 1), None);
    assert_eq!(props.set("weight", 2.5), Some(Value::Int(1)));
    assert_eq!(props.get("weight", "").unwrap(), &Value::Float(2.5));
    assert_eq!(props.len(), 1);
  }

  #[test]
  fn clone_shares_but_deep_clone_detaches() {
    let mut props = Properties::new();
    props.set("tags", Value::shared(vec!["a"]));

    let shallow = props.clone();
    let deep = props.deep_clone();

    if let Some(Value::Shared(tags)) = props.get_mut("tags") {
      *tags.write().unwrap() = Value::from(vec!["a", "b"]);
    }

    let len_of = |p: &Properties| {
      let shared = p.try_get("tags").unwrap().as_shared().unwrap();
      let inner = shared.read().unwrap();
      inner.as_list().unwrap().len()
    };
    assert_eq!(len_of(&shallow), 2);
    assert_eq!(len_of(&deep), 1);
  }

  #[test]
  fn keeps_insertion_order() {
    let props: Properties = [("b", 1), ("a", 2), ("c", 3)].into_iter().collect();
    assert_eq!(props.keys().collect::<Vec<_>>(), ["b", "a", "c"]);
    assert_eq!(props.to_string(), r#"{"b": Int(1), "a": Int(2), "c": Int(3)}"#);
  }
}
