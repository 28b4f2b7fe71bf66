use glam::Vec2;
use log::warn;

use crate::{
  geometry::triangle_area_2, nav_mesh::ValidNavigationMesh,
  pathfinding::TrianglePath, PortalList,
};

/// The result of pulling a path taut through its portals.
#[derive(Clone, Debug, PartialEq)]
pub struct FunnelResult {
  /// The points to walk to in order, ending with the destination. The start
  /// point is not included.
  pub waypoints: Vec<Vec2>,
  /// The portals of the path, ordered so `vertices_0` is on the right and
  /// `vertices_1` is on the left when walking the path.
  pub portals: PortalList,
}

/// Converts a chain of triangles into the shortest sequence of straight lines
/// from `start` to `destination` that stays inside the chain (the "simple
/// stupid funnel algorithm").
///
/// `start` must be in `path.start_triangle` and `destination` must be in the
/// last triangle of the path.
pub fn funnel(
  mesh: &ValidNavigationMesh,
  path: &TrianglePath,
  start: Vec2,
  destination: Vec2,
) -> FunnelResult {
  let mut portals = path.portals.clone();

  // The (right, left) points of each portal. The first entry is the start
  // point, and the last is the destination so the funnel always closes on it.
  let mut portal_points = Vec::with_capacity(portals.len() + 2);
  portal_points.push((start, start));
  for portal_index in 0..portals.len() {
    let from_triangle = if portal_index == 0 {
      path.start_triangle
    } else {
      path.triangles[portal_index - 1]
    };
    // The centroid is strictly inside the triangle being left, so it is never
    // in line with the portal.
    let reference = mesh.centroid(from_triangle);
    let (vertex_0, vertex_1) = portals.get(portal_index);
    if triangle_area_2(reference, mesh.vertex(vertex_0), mesh.vertex(vertex_1))
      <= 0.0
    {
      portals.flip(portal_index);
    }

    let (right_vertex, left_vertex) = portals.get(portal_index);
    let (right, left) = (mesh.vertex(right_vertex), mesh.vertex(left_vertex));
    if right == left {
      warn!(
        "Portal {portal_index} between vertices {right_vertex} and {left_vertex} has zero width. The mesh may be malformed."
      );
    }
    portal_points.push((right, left));
  }
  portal_points.push((destination, destination));

  let mut waypoints = Vec::new();

  let mut apex = start;
  let mut apex_index = 0;
  let (mut right, mut left) = (start, start);
  let (mut right_index, mut left_index) = (0, 0);

  let mut portal_index = 1;
  while portal_index < portal_points.len() {
    let (portal_right, portal_left) = portal_points[portal_index];

    if triangle_area_2(apex, right, portal_right) >= 0.0 {
      if apex == right || triangle_area_2(apex, left, portal_right) < 0.0 {
        right = portal_right;
        right_index = portal_index;
      } else {
        // The right side crossed over the left side, so the left side is a
        // corner of the path.
        if left != apex {
          waypoints.push(left);
        }
        apex = left;
        apex_index = left_index;
        (right, left) = (apex, apex);
        (right_index, left_index) = (apex_index, apex_index);
        portal_index = apex_index + 1;
        continue;
      }
    }

    if triangle_area_2(apex, left, portal_left) <= 0.0 {
      if apex == left || triangle_area_2(apex, right, portal_left) > 0.0 {
        left = portal_left;
        left_index = portal_index;
      } else {
        // The left side crossed over the right side, so the right side is a
        // corner of the path.
        if right != apex {
          waypoints.push(right);
        }
        apex = right;
        apex_index = right_index;
        (right, left) = (apex, apex);
        (right_index, left_index) = (apex_index, apex_index);
        portal_index = apex_index + 1;
        continue;
      }
    }

    portal_index += 1;
  }

  if waypoints.last() != Some(&destination) {
    waypoints.push(destination);
  }

  FunnelResult { waypoints, portals }
}

#[cfg(test)]
#[path = "funnel_test.rs"]
mod test;
