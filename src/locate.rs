use glam::{Vec2, Vec3, Vec3Swizzles};
use log::debug;

use crate::{
  geometry::{
    closest_point_on_triangle_3d, point_distance_from_triangle_3d,
    triangle_contains_point,
  },
  index::TriangleIndex,
  nav_mesh::ValidNavigationMesh,
  FindPathError,
};

/// Finds the triangle containing the planar projection of `position`.
///
/// Where several triangles contain the point (shared edges and corners, or
/// stacked layers), the one nearest to `position` in 3D wins. Returns `None`
/// if the point is outside the mesh.
pub fn containing_triangle(
  mesh: &ValidNavigationMesh,
  index: &impl TriangleIndex,
  position: Vec3,
) -> Option<usize> {
  let point = position.xy();
  let candidates = index
    .triangles_near_point(mesh, point)
    .into_iter()
    .filter(|&triangle| {
      let (a, b, c) = mesh.triangle_points(triangle);
      triangle_contains_point(point, a, b, c)
    })
    .collect::<Vec<_>>();

  match candidates.as_slice() {
    [] => None,
    &[triangle] => Some(triangle),
    candidates => {
      let mut best = None;
      for &triangle in candidates {
        let (a, b, c) = mesh.triangle_points_3d(triangle);
        let distance = point_distance_from_triangle_3d(position, a, b, c);
        let replace = match best {
          None => true,
          Some((_, best_distance)) => distance < best_distance,
        };
        if replace {
          best = Some((triangle, distance));
        }
      }
      best.map(|(triangle, _)| triangle)
    }
  }
}

/// Finds the point on the surface of the mesh nearest to `position`, and the
/// triangle it lies on. Every triangle is checked. Returns `None` only if the
/// mesh has no triangles.
pub fn closest_point_on_mesh(
  mesh: &ValidNavigationMesh,
  position: Vec3,
) -> Option<(Vec3, usize)> {
  let mut best: Option<(Vec3, usize, f32)> = None;
  for triangle in 0..mesh.triangle_count() {
    let (a, b, c) = mesh.triangle_points_3d(triangle);
    let (point, distance) = closest_point_on_triangle_3d(position, a, b, c);
    let replace = match best {
      None => true,
      Some((_, _, best_distance)) => distance < best_distance,
    };
    if replace {
      best = Some((point, triangle, distance));
    }
  }
  best.map(|(point, triangle, _)| (point, triangle))
}

/// The start and destination of a path, resolved onto the mesh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Endpoints {
  /// The triangle the start point is in.
  pub start_triangle: usize,
  /// The triangle the destination point is in.
  pub destination_triangle: usize,
  /// The planar start point. This differs from the requested start point only
  /// if that was off the mesh.
  pub start: Vec2,
  /// The planar destination point. This differs from the requested destination
  /// only if that was off the mesh.
  pub destination: Vec2,
}

/// Resolves a single point onto the mesh, moving it onto the mesh surface if
/// it lies outside the mesh.
fn resolve_point(
  mesh: &ValidNavigationMesh,
  index: &impl TriangleIndex,
  position: Vec3,
) -> Result<(Vec2, usize), FindPathError> {
  if let Some(triangle) = containing_triangle(mesh, index, position) {
    return Ok((position.xy(), triangle));
  }
  let (point, triangle) =
    closest_point_on_mesh(mesh, position).ok_or(FindPathError::EmptyMesh)?;
  debug!(
    "Moved off-mesh point {position} onto triangle {triangle} at {point}."
  );
  Ok((point.xy(), triangle))
}

/// Resolves `start` and `destination` onto triangles of the mesh. Points off
/// the mesh are moved to the closest point on the mesh rather than failing.
pub fn find_valid_start_and_destination(
  mesh: &ValidNavigationMesh,
  index: &impl TriangleIndex,
  start: Vec3,
  destination: Vec3,
) -> Result<Endpoints, FindPathError> {
  let (start, start_triangle) = resolve_point(mesh, index, start)?;
  let (destination, destination_triangle) =
    resolve_point(mesh, index, destination)?;
  Ok(Endpoints { start_triangle, destination_triangle, start, destination })
}

#[cfg(test)]
#[path = "locate_test.rs"]
mod test;
