use crate::{index::TriangleIndex, nav_mesh::ValidNavigationMesh, PortalList};

/// The triangles sharing an edge with some triangle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Adjacency {
  /// The adjacent triangles, in ascending order.
  pub neighbors: Vec<usize>,
  /// The edge shared with each triangle in `neighbors`. The endpoints are in
  /// the order they appear in the queried triangle, which says nothing about
  /// the direction of travel.
  pub portals: PortalList,
}

/// Finds every triangle that shares exactly two vertices (one edge) with
/// `triangle`. Triangles that only share a corner, or that use all the same
/// vertices, are not adjacent.
pub fn adjacent_triangles(
  mesh: &ValidNavigationMesh,
  index: &impl TriangleIndex,
  triangle: usize,
) -> Adjacency {
  let vertices = mesh.triangle(triangle);

  let mut adjacency = Adjacency::default();
  for candidate in index.triangles_near_triangle(mesh, triangle) {
    if candidate == triangle {
      continue;
    }
    let candidate_vertices = mesh.triangle(candidate);

    let mut shared = [0; 3];
    let mut shared_count = 0;
    for vertex in vertices {
      if candidate_vertices.contains(&vertex) {
        shared[shared_count] = vertex;
        shared_count += 1;
      }
    }

    if shared_count == 2 {
      adjacency.neighbors.push(candidate);
      adjacency.portals.push(shared[0], shared[1]);
    }
  }
  adjacency
}

#[cfg(test)]
#[path = "adjacency_test.rs"]
mod test;
