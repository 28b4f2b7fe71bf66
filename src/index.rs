use glam::Vec2;

use crate::{
  nav_mesh::ValidNavigationMesh,
  util::{BoundingBox, BoundingBoxHierarchy},
};

/// Narrows down which triangles of a mesh need to be looked at by adjacency
/// and localization queries.
///
/// Implementations may return extra triangles, but must never leave out a
/// triangle that could match. Candidates are returned in ascending order so
/// that every implementation produces identical query results.
pub trait TriangleIndex {
  /// Returns the triangles that might contain the planar `point`.
  fn triangles_near_point(
    &self,
    mesh: &ValidNavigationMesh,
    point: Vec2,
  ) -> Vec<usize>;

  /// Returns the triangles that might share an edge with `triangle`. May
  /// include `triangle` itself.
  fn triangles_near_triangle(
    &self,
    mesh: &ValidNavigationMesh,
    triangle: usize,
  ) -> Vec<usize>;
}

/// Considers every triangle of the mesh for every query.
#[derive(Clone, Copy, Debug, Default)]
pub struct BruteForce;

impl TriangleIndex for BruteForce {
  fn triangles_near_point(
    &self,
    mesh: &ValidNavigationMesh,
    _point: Vec2,
  ) -> Vec<usize> {
    (0..mesh.triangle_count()).collect()
  }

  fn triangles_near_triangle(
    &self,
    mesh: &ValidNavigationMesh,
    _triangle: usize,
  ) -> Vec<usize> {
    (0..mesh.triangle_count()).collect()
  }
}

/// A bounding box hierarchy over the planar bounds of each triangle. Must only
/// be used with the mesh it was built from.
#[derive(Clone, Debug)]
pub struct TriangleBvh {
  /// The hierarchy of triangle indices. `None` for a mesh without triangles.
  hierarchy: Option<BoundingBoxHierarchy<usize>>,
  /// The number of triangles of the mesh this was built from.
  triangle_count: usize,
}

impl TriangleBvh {
  pub fn new(mesh: &ValidNavigationMesh) -> Self {
    let mut values = (0..mesh.triangle_count())
      .map(|triangle| (mesh.triangle_bounds(triangle), Some(triangle)))
      .collect::<Vec<_>>();
    Self {
      hierarchy: BoundingBoxHierarchy::new(&mut values),
      triangle_count: mesh.triangle_count(),
    }
  }

  fn query(
    &self,
    mesh: &ValidNavigationMesh,
    bounds: BoundingBox,
  ) -> Vec<usize> {
    debug_assert_eq!(
      self.triangle_count,
      mesh.triangle_count(),
      "The index was built from a different mesh."
    );
    let Some(hierarchy) = self.hierarchy.as_ref() else {
      return vec![];
    };
    let mut triangles =
      hierarchy.query_box(bounds).into_iter().copied().collect::<Vec<_>>();
    triangles.sort_unstable();
    triangles
  }
}

impl TriangleIndex for TriangleBvh {
  fn triangles_near_point(
    &self,
    mesh: &ValidNavigationMesh,
    point: Vec2,
  ) -> Vec<usize> {
    self.query(mesh, BoundingBox::new_box(point, point))
  }

  fn triangles_near_triangle(
    &self,
    mesh: &ValidNavigationMesh,
    triangle: usize,
  ) -> Vec<usize> {
    // Triangles sharing an edge share its endpoints, so their bounds must at
    // least touch.
    self.query(mesh, mesh.triangle_bounds(triangle))
  }
}

#[cfg(test)]
#[path = "index_test.rs"]
mod test;
