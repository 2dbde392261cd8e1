//! Concrete scenarios for simplices and cells through the public API.

use topoatoms::{Atom, Cell, Error, FaceTree, Properties, Sign, Simplex, Value};

fn init_tracing() {
  let _ = tracing_subscriber::fmt()
    .with_max_level(tracing::Level::TRACE)
    .with_test_writer()
    .try_init();
}

#[test]
fn triangle_cell() {
  init_tracing();

  let cell = Cell::new([1, 2, 3]).unwrap();
  assert_eq!(cell.boundary_edges(), &[(1, 2), (2, 3), (3, 1)]);

  assert_eq!(cell.sign(&[2, 3]).unwrap().as_i32(), 1);
  assert_eq!(cell.sign(&[3, 2]).unwrap().as_i32(), -1);
  let err = cell.sign(&[1, 3]).unwrap_err();
  assert!(matches!(err, Error::NotInBoundary { .. }));
  assert!(err.is_lookup());

  let homotopic = |seq: [i32; 3]| cell.is_homotopic_to(&Cell::new(seq).unwrap());
  assert!(homotopic([2, 3, 1]));
  assert!(homotopic([3, 2, 1]));
  assert!(homotopic([1, 3, 2]));
  assert!(!homotopic([1, 2, 4]));
}

#[test]
fn self_loop_fails_regardless_of_regularity() {
  init_tracing();

  for regular in [true, false] {
    let err = Cell::with_regularity([1, 1, 2], regular).unwrap_err();
    assert!(err.is_validation());
  }
}

#[test]
fn figure_eight() {
  init_tracing();

  let cell = Cell::with_regularity([1, 2, 1, 2], false).unwrap();
  assert_eq!(cell.boundary().len(), 4);
  assert!(!cell.is_regular());
  assert!(Cell::with_regularity([1, 2, 1, 2], true).is_err());
}

#[test]
fn double_reverse_roundtrip() {
  let cell = Cell::new(["a", "b", "c", "d"]).unwrap();
  assert_eq!(cell.reverse().reverse().elements(), cell.elements());
  assert!(cell.reverse().is_homotopic_to(&cell));
}

#[test]
fn geometric_cell() {
  let square = Cell::new([(0, 0), (1, 0), (1, 1), (0, 1)])
    .unwrap()
    .with_property("type", "square");
  assert_eq!(square.get_property("type").unwrap().as_str(), Some("square"));
  assert_eq!(square.boundary_edges()[3], ((0, 1), (0, 0)));
  assert_eq!(square.edge_sign(&(0, 0), &(0, 1)), Ok(Sign::Neg));
}

#[test]
fn tetrahedron() {
  init_tracing();

  let tet = Simplex::new([1, 2, 4, 5]).unwrap().with_property("weight", 1);
  assert_eq!(tet.dim(), 3);
  assert_eq!(tet.face_count(), Some(15));
  assert_eq!(tet.boundary().len(), 4);
  assert!(tet.boundary().iter().all(|f| f.len() == 3));
  assert_eq!(tet.subsimps(1).len(), 6);
  assert_eq!(tet.get_property("weight").unwrap(), &Value::Int(1));
  assert!(matches!(
    tet.get_property("color"),
    Err(Error::PropertyNotFound { .. })
  ));

  assert!(matches!(
    Simplex::new([1, 2, 2]),
    Err(Error::DuplicateNode { .. })
  ));
}

#[test]
fn faces_usable_as_keys() {
  let a = Simplex::new(["a", "b", "c"]).unwrap();
  let b = Simplex::with_face_tree(["c", "a", "b"], FaceTree::Lazy).unwrap();

  let mut weights = std::collections::HashMap::new();
  weights.insert(a, 1.0);
  weights.insert(b, 2.0);
  assert_eq!(weights.len(), 1);
}

#[test]
fn properties_survive_clone_and_reverse() {
  let props: Properties = [("weight", Value::from(0.5)), ("label", Value::from("f"))]
    .into_iter()
    .collect();
  let cell = Cell::with_regularity([4, 5, 6], false)
    .unwrap()
    .named("face")
    .with_properties(props.clone());

  let cloned = cell.clone();
  assert_eq!(cloned, cell);
  assert_eq!(cloned.properties(), &props);
  assert!(!cloned.is_regular_declared());

  let reversed = cell.reverse();
  assert_eq!(reversed.name(), "face");
  assert_eq!(reversed.properties(), &props);
}

#[test]
fn atoms_are_send_and_sync() {
  fn assert_send_sync<T: Send + Sync>() {}
  assert_send_sync::<Simplex<u64>>();
  assert_send_sync::<Cell<String>>();
}
