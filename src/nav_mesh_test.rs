use glam::{Vec2, Vec3};
use googletest::{expect_eq, verify_eq, verify_that};

use crate::{
  test_meshes::{square_donut, two_islands},
  util::BoundingBox,
};

use super::{NavigationMesh, PortalList, ValidationError};

fn single_triangle() -> NavigationMesh {
  NavigationMesh {
    vertices: vec![
      Vec2::new(0.0, 0.0),
      Vec2::new(3.0, 0.0),
      Vec2::new(0.0, 3.0),
    ],
    vertices_z: vec![0.0, 1.0, 2.0],
    indices: vec![0, 1, 2],
  }
}

#[test]
fn validation_computes_derived_data() {
  let mesh = single_triangle().validate().expect("Validation succeeds.");

  assert_eq!(mesh.triangle_count(), 1);
  assert_eq!(mesh.triangle(0), [0, 1, 2]);
  assert_eq!(mesh.centroid(0), Vec2::new(1.0, 1.0));
  assert_eq!(mesh.vertex_3d(2), Vec3::new(0.0, 3.0, 2.0));
  assert_eq!(
    mesh.bounds(),
    BoundingBox::new_box(Vec2::new(0.0, 0.0), Vec2::new(3.0, 3.0))
  );
  assert_eq!(
    mesh.triangle_bounds(0),
    BoundingBox::new_box(Vec2::new(0.0, 0.0), Vec2::new(3.0, 3.0))
  );
  assert_eq!(mesh.island_count(), 1);
  assert!(mesh.duplicate_vertices().is_empty());
}

#[test]
fn empty_mesh_is_valid() {
  let mesh =
    NavigationMesh::default().validate().expect("Validation succeeds.");

  assert_eq!(mesh.triangle_count(), 0);
  assert_eq!(mesh.island_count(), 0);
  assert_eq!(mesh.bounds(), BoundingBox::Empty);
}

#[test]
fn error_on_mismatched_elevations() {
  let mut mesh = single_triangle();
  mesh.vertices_z.pop();

  assert_eq!(
    mesh.validate().expect_err("Validation fails."),
    ValidationError::ElevationCountMismatch(3, 2)
  );
}

#[test]
fn error_on_partial_triangle() {
  let mut mesh = single_triangle();
  mesh.indices.extend([0, 1]);

  assert_eq!(
    mesh.validate().expect_err("Validation fails."),
    ValidationError::IndexCountNotMultipleOfThree(5)
  );
}

#[test]
fn error_on_out_of_bounds_vertex() {
  let mut mesh = single_triangle();
  mesh.indices.extend([0, 1, 3]);

  assert_eq!(
    mesh.validate().expect_err("Validation fails."),
    ValidationError::InvalidVertexIndex(1)
  );
}

#[test]
fn error_on_repeated_vertex() {
  let mut mesh = single_triangle();
  mesh.indices.extend([2, 1, 2]);

  assert_eq!(
    mesh.validate().expect_err("Validation fails."),
    ValidationError::RepeatedVertexInTriangle(1)
  );
}

#[test]
fn error_on_clockwise_triangle() {
  let mut mesh = single_triangle();
  mesh.indices = vec![0, 2, 1];

  assert_eq!(
    mesh.validate().expect_err("Validation fails."),
    ValidationError::ClockwiseOrDegenerateTriangle(0)
  );
}

#[test]
fn error_on_degenerate_triangle() {
  let mut mesh = single_triangle();
  mesh.vertices.push(Vec2::new(6.0, 0.0));
  mesh.vertices_z.push(0.0);
  mesh.indices.extend([0, 1, 3]);

  assert_eq!(
    mesh.validate().expect_err("Validation fails."),
    ValidationError::ClockwiseOrDegenerateTriangle(1)
  );
}

#[googletest::test]
fn duplicate_vertices_are_reported_but_valid() {
  // Two triangles that would share an edge, except the second uses copies of
  // the shared vertices.
  let mesh = NavigationMesh {
    vertices: vec![
      Vec2::new(0.0, 0.0),
      Vec2::new(1.0, 0.0),
      Vec2::new(1.0, 1.0),
      Vec2::new(0.0, 0.0),
      Vec2::new(1.0, 1.0),
      Vec2::new(0.0, 1.0),
      // Same planar position as vertex 1, but at a different height.
      Vec2::new(1.0, 0.0),
    ],
    vertices_z: vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 3.0],
    indices: vec![0, 1, 2, 3, 4, 5],
  }
  .validate()
  .expect("Validation succeeds.");

  expect_eq!(mesh.duplicate_vertices().to_vec(), vec![(0, 3), (2, 4)]);
  // The copies split the mesh.
  expect_eq!(mesh.island_count(), 2);
}

#[googletest::test]
fn computes_islands() {
  let mesh = two_islands();
  expect_eq!(mesh.island_count(), 2);
  expect_eq!(
    (0..4).map(|triangle| mesh.island_of(triangle)).collect::<Vec<_>>(),
    vec![0, 0, 1, 1]
  );

  let mesh = square_donut();
  expect_eq!(mesh.island_count(), 1);
  expect_eq!(
    (0..8).map(|triangle| mesh.island_of(triangle)).collect::<Vec<_>>(),
    vec![0; 8]
  );
}

#[test]
fn portal_list_flips_single_portal() {
  let mut portals = PortalList::with_capacity(2);
  portals.push(1, 2);
  portals.push(3, 4);
  portals.flip(1);

  assert_eq!(portals.len(), 2);
  assert_eq!(portals.get(0), (1, 2));
  assert_eq!(portals.get(1), (4, 3));
  assert_eq!(portals.iter().collect::<Vec<_>>(), [(1, 2), (4, 3)]);
  assert_eq!(portals.vertices_0, [1, 4]);
  assert_eq!(portals.vertices_1, [2, 3]);
}
