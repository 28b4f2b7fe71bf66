use glam::Vec2;

use crate::{NavigationMesh, ValidNavigationMesh};

fn flat_mesh(vertices: Vec<Vec2>, indices: Vec<usize>) -> NavigationMesh {
  NavigationMesh {
    vertices_z: vec![0.0; vertices.len()],
    vertices,
    indices,
  }
}

/// An L-shaped corridor: a bar along x from 0 to 6 (y from 0 to 2), and a bar
/// along y from 2 to 6 (x from 4 to 6). Vertex 4 at (4, 2) is the inner
/// corner.
pub(crate) fn l_shape() -> ValidNavigationMesh {
  flat_mesh(
    vec![
      Vec2::new(0.0, 0.0),
      Vec2::new(4.0, 0.0),
      Vec2::new(6.0, 0.0),
      Vec2::new(6.0, 2.0),
      Vec2::new(4.0, 2.0),
      Vec2::new(0.0, 2.0),
      Vec2::new(6.0, 6.0),
      Vec2::new(4.0, 6.0),
    ],
    vec![
      0, 1, 4, //
      0, 4, 5, //
      1, 2, 3, //
      1, 3, 4, //
      4, 3, 6, //
      4, 6, 7, //
    ],
  )
  .validate()
  .expect("The mesh is valid.")
}

/// A square from (-4, -4) to (24, 24) with a square hole from (3, 3) to
/// (17, 17). The outer corners are vertices 0 to 3 and the inner corners are
/// vertices 4 to 7, both counter-clockwise from the bottom-left.
pub(crate) fn square_donut() -> ValidNavigationMesh {
  flat_mesh(
    vec![
      Vec2::new(-4.0, -4.0),
      Vec2::new(24.0, -4.0),
      Vec2::new(24.0, 24.0),
      Vec2::new(-4.0, 24.0),
      Vec2::new(3.0, 3.0),
      Vec2::new(17.0, 3.0),
      Vec2::new(17.0, 17.0),
      Vec2::new(3.0, 17.0),
    ],
    vec![
      0, 1, 5, //
      0, 5, 4, //
      1, 2, 6, //
      1, 6, 5, //
      2, 3, 7, //
      2, 7, 6, //
      3, 0, 4, //
      3, 4, 7, //
    ],
  )
  .validate()
  .expect("The mesh is valid.")
}

/// Two 2x2 squares that do not touch. Triangles 0 and 1 form the square at the
/// origin, triangles 2 and 3 the square at (5, 0).
pub(crate) fn two_islands() -> ValidNavigationMesh {
  flat_mesh(
    vec![
      Vec2::new(0.0, 0.0),
      Vec2::new(2.0, 0.0),
      Vec2::new(2.0, 2.0),
      Vec2::new(0.0, 2.0),
      Vec2::new(5.0, 0.0),
      Vec2::new(7.0, 0.0),
      Vec2::new(7.0, 2.0),
      Vec2::new(5.0, 2.0),
    ],
    vec![
      0, 1, 2, //
      0, 2, 3, //
      4, 5, 6, //
      4, 6, 7, //
    ],
  )
  .validate()
  .expect("The mesh is valid.")
}

/// Two identical triangles in plan, one at height 0 and one at height 5.
pub(crate) fn stacked_layers() -> ValidNavigationMesh {
  NavigationMesh {
    vertices: vec![
      Vec2::new(0.0, 0.0),
      Vec2::new(4.0, 0.0),
      Vec2::new(0.0, 4.0),
      Vec2::new(0.0, 0.0),
      Vec2::new(4.0, 0.0),
      Vec2::new(0.0, 4.0),
    ],
    vertices_z: vec![0.0, 0.0, 0.0, 5.0, 5.0, 5.0],
    indices: vec![0, 1, 2, 3, 4, 5],
  }
  .validate()
  .expect("The mesh is valid.")
}
