use std::collections::HashMap;

use disjoint::DisjointSet;
use glam::{Vec2, Vec3};
use log::{debug, warn};
use thiserror::Error;

use crate::{
  geometry::{triangle_area_2, triangle_centroid},
  util::BoundingBox,
};

/// A navigation mesh, as produced by a loader.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavigationMesh {
  /// The planar positions of the vertices.
  pub vertices: Vec<Vec2>,
  /// The elevation of each vertex. Must be the same length as
  /// [`Self::vertices`]. This is only used to disambiguate overlapping
  /// triangles and to find the nearest point for off-mesh queries; all other
  /// work happens on the planar positions.
  pub vertices_z: Vec<f32>,
  /// The triangles of the mesh. Every consecutive triple of indices into
  /// [`Self::vertices`] is one triangle, which must be counter-clockwise.
  pub indices: Vec<usize>,
}

/// An error when validating a navigation mesh.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
  /// Stores the number of vertices and the number of elevations.
  #[error(
    "The mesh has {0} vertices but {1} elevations. There must be exactly one elevation per vertex."
  )]
  ElevationCountMismatch(usize, usize),
  /// Stores the number of indices.
  #[error("The mesh has {0} indices, which is not a multiple of 3.")]
  IndexCountNotMultipleOfThree(usize),
  /// Stores the index of the triangle.
  #[error("The triangle at index {0} references an out-of-bounds vertex.")]
  InvalidVertexIndex(usize),
  /// Stores the index of the triangle.
  #[error("The triangle at index {0} uses the same vertex more than once.")]
  RepeatedVertexInTriangle(usize),
  /// Stores the index of the triangle.
  #[error("The triangle at index {0} is clockwise or has zero area.")]
  ClockwiseOrDegenerateTriangle(usize),
}

impl NavigationMesh {
  /// Ensures required invariants of the navigation mesh, and computes
  /// additional derived properties to produce a validated navigation mesh.
  /// Returns an error if the navigation mesh is invalid in some way.
  ///
  /// Vertices sharing the same position are reported (as a warning and through
  /// [`ValidNavigationMesh::duplicate_vertices`]), but do not fail validation.
  pub fn validate(self) -> Result<ValidNavigationMesh, ValidationError> {
    if self.vertices.len() != self.vertices_z.len() {
      return Err(ValidationError::ElevationCountMismatch(
        self.vertices.len(),
        self.vertices_z.len(),
      ));
    }
    if self.indices.len() % 3 != 0 {
      return Err(ValidationError::IndexCountNotMultipleOfThree(
        self.indices.len(),
      ));
    }

    let triangles = self
      .indices
      .chunks_exact(3)
      .map(|triangle| [triangle[0], triangle[1], triangle[2]])
      .collect::<Vec<_>>();

    for (triangle_index, triangle) in triangles.iter().enumerate() {
      if triangle.iter().any(|&vertex| vertex >= self.vertices.len()) {
        return Err(ValidationError::InvalidVertexIndex(triangle_index));
      }
      if triangle[0] == triangle[1]
        || triangle[1] == triangle[2]
        || triangle[2] == triangle[0]
      {
        return Err(ValidationError::RepeatedVertexInTriangle(triangle_index));
      }
      let area = triangle_area_2(
        self.vertices[triangle[0]],
        self.vertices[triangle[1]],
        self.vertices[triangle[2]],
      );
      if area <= 0.0 || area.is_nan() {
        return Err(ValidationError::ClockwiseOrDegenerateTriangle(
          triangle_index,
        ));
      }
    }

    let duplicate_vertices =
      find_duplicate_vertices(&self.vertices, &self.vertices_z);
    for &(first, second) in duplicate_vertices.iter() {
      warn!(
        "Vertices {first} and {second} share the position {:?}. Triangles using them will not be connected.",
        self.vertices[first].extend(self.vertices_z[first]),
      );
    }

    let (triangle_islands, island_count) = compute_islands(&triangles);
    debug!(
      "Validated navigation mesh with {} triangles in {island_count} island(s).",
      triangles.len()
    );

    let bounds = self
      .vertices
      .iter()
      .fold(BoundingBox::Empty, |acc, &vertex| acc.expand_to_point(vertex));

    let centroids = triangles
      .iter()
      .map(|triangle| {
        triangle_centroid(
          self.vertices[triangle[0]],
          self.vertices[triangle[1]],
          self.vertices[triangle[2]],
        )
      })
      .collect();

    Ok(ValidNavigationMesh {
      bounds,
      vertices: self.vertices,
      vertices_z: self.vertices_z,
      triangles,
      centroids,
      triangle_islands,
      island_count,
      duplicate_vertices,
    })
  }
}

/// Finds every pair of vertices with exactly the same position. This compares
/// all pairs, so it is quadratic in the number of vertices.
fn find_duplicate_vertices(
  vertices: &[Vec2],
  vertices_z: &[f32],
) -> Vec<(usize, usize)> {
  let mut duplicates = Vec::new();
  for first in 0..vertices.len() {
    for second in (first + 1)..vertices.len() {
      if vertices[first] == vertices[second]
        && vertices_z[first] == vertices_z[second]
      {
        duplicates.push((first, second));
      }
    }
  }
  duplicates
}

/// Groups triangles that are connected through shared edges. Returns the
/// island of each triangle (numbered in order of first appearance) and the
/// number of islands.
fn compute_islands(triangles: &[[usize; 3]]) -> (Vec<usize>, usize) {
  let mut island_sets = DisjointSet::with_len(triangles.len());
  let mut edge_to_triangle = HashMap::new();

  for (triangle_index, triangle) in triangles.iter().enumerate() {
    for i in 0..3 {
      let (a, b) = (triangle[i], triangle[(i + 1) % 3]);
      let edge = if a < b { (a, b) } else { (b, a) };
      match edge_to_triangle.get(&edge) {
        Some(&other_triangle) => {
          island_sets.join(other_triangle, triangle_index);
        }
        None => {
          edge_to_triangle.insert(edge, triangle_index);
        }
      }
    }
  }

  let mut root_to_island = HashMap::new();
  let triangle_islands = (0..triangles.len())
    .map(|triangle_index| {
      let root = island_sets.root_of(triangle_index);
      // Decide on the next island index beforehand to get around the borrow
      // checker.
      let next_island = root_to_island.len();
      *root_to_island.entry(root).or_insert(next_island)
    })
    .collect();
  (triangle_islands, root_to_island.len())
}

/// A navigation mesh which has been validated and derived data has been
/// computed. This is immutable, so any number of queries may share it.
#[derive(Clone, Debug)]
pub struct ValidNavigationMesh {
  /// The bounds of the planar vertices.
  pub(crate) bounds: BoundingBox,
  /// The planar positions of the vertices.
  pub(crate) vertices: Vec<Vec2>,
  /// The elevation of each vertex.
  pub(crate) vertices_z: Vec<f32>,
  /// The triangles as indices into `vertices`, counter-clockwise.
  pub(crate) triangles: Vec<[usize; 3]>,
  /// The planar centroid of each triangle.
  pub(crate) centroids: Vec<Vec2>,
  /// The island each triangle belongs to. Triangles in different islands can
  /// never reach each other.
  pub(crate) triangle_islands: Vec<usize>,
  /// The number of distinct islands.
  pub(crate) island_count: usize,
  /// The pairs of vertices that have the same position.
  pub(crate) duplicate_vertices: Vec<(usize, usize)>,
}

impl ValidNavigationMesh {
  /// The number of triangles in the mesh.
  pub fn triangle_count(&self) -> usize {
    self.triangles.len()
  }

  /// The vertex indices of `triangle`.
  pub fn triangle(&self, triangle: usize) -> [usize; 3] {
    self.triangles[triangle]
  }

  /// The planar position of `vertex`.
  pub fn vertex(&self, vertex: usize) -> Vec2 {
    self.vertices[vertex]
  }

  /// The position of `vertex` including its elevation.
  pub fn vertex_3d(&self, vertex: usize) -> Vec3 {
    self.vertices[vertex].extend(self.vertices_z[vertex])
  }

  /// The planar corners of `triangle`.
  pub fn triangle_points(&self, triangle: usize) -> (Vec2, Vec2, Vec2) {
    let [a, b, c] = self.triangles[triangle];
    (self.vertices[a], self.vertices[b], self.vertices[c])
  }

  /// The corners of `triangle` including their elevation.
  pub fn triangle_points_3d(&self, triangle: usize) -> (Vec3, Vec3, Vec3) {
    let [a, b, c] = self.triangles[triangle];
    (self.vertex_3d(a), self.vertex_3d(b), self.vertex_3d(c))
  }

  /// The planar centroid of `triangle`.
  pub fn centroid(&self, triangle: usize) -> Vec2 {
    self.centroids[triangle]
  }

  /// The bounds of the planar vertices.
  pub fn bounds(&self) -> BoundingBox {
    self.bounds
  }

  /// The island that `triangle` belongs to.
  pub fn island_of(&self, triangle: usize) -> usize {
    self.triangle_islands[triangle]
  }

  /// The number of disconnected pieces of the mesh.
  pub fn island_count(&self) -> usize {
    self.island_count
  }

  /// Pairs of vertices that share the same position. These usually come from
  /// an authoring mistake and split the mesh into more islands than intended.
  pub fn duplicate_vertices(&self) -> &[(usize, usize)] {
    &self.duplicate_vertices
  }

  /// The planar bounds of `triangle`.
  pub(crate) fn triangle_bounds(&self, triangle: usize) -> BoundingBox {
    self.triangles[triangle]
      .iter()
      .fold(BoundingBox::Empty, |acc, &vertex| {
        acc.expand_to_point(self.vertices[vertex])
      })
  }
}

/// A list of edges shared between triangles. The two endpoints of the edge at
/// index `i` are `vertices_0[i]` and `vertices_1[i]`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PortalList {
  /// The first endpoint of each portal. After funneling, this is the
  /// right-hand endpoint with respect to the direction of travel.
  pub vertices_0: Vec<usize>,
  /// The second endpoint of each portal.
  pub vertices_1: Vec<usize>,
}

impl PortalList {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_capacity(capacity: usize) -> Self {
    Self {
      vertices_0: Vec::with_capacity(capacity),
      vertices_1: Vec::with_capacity(capacity),
    }
  }

  pub fn push(&mut self, vertex_0: usize, vertex_1: usize) {
    self.vertices_0.push(vertex_0);
    self.vertices_1.push(vertex_1);
  }

  pub fn len(&self) -> usize {
    self.vertices_0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.vertices_0.is_empty()
  }

  /// The endpoints of the portal at `index`.
  pub fn get(&self, index: usize) -> (usize, usize) {
    (self.vertices_0[index], self.vertices_1[index])
  }

  /// Swaps the two endpoints of the portal at `index`.
  pub fn flip(&mut self, index: usize) {
    std::mem::swap(&mut self.vertices_0[index], &mut self.vertices_1[index]);
  }

  pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
    self.vertices_0.iter().copied().zip(self.vertices_1.iter().copied())
  }
}

#[cfg(test)]
#[path = "nav_mesh_test.rs"]
mod test;
