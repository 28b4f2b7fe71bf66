use glam::{Quat, Vec2, Vec3, Vec3Swizzles};

/// Computes twice the signed area of the triangle (`point_0`, `point_1`,
/// `point_2`). Positive when the points are counter-clockwise.
pub(crate) fn triangle_area_2(
  point_0: Vec2,
  point_1: Vec2,
  point_2: Vec2,
) -> f32 {
  (point_1 - point_0).perp_dot(point_2 - point_0)
}

/// The average of the triangle's three points.
pub fn triangle_centroid(a: Vec2, b: Vec2, c: Vec2) -> Vec2 {
  (a + b + c) / 3.0
}

/// Determines whether `point` is inside (or on the boundary of) the triangle
/// (`a`, `b`, `c`) using barycentric coordinates. The triangle must not be
/// degenerate, otherwise the result is meaningless.
pub fn triangle_contains_point(
  point: Vec2,
  a: Vec2,
  b: Vec2,
  c: Vec2,
) -> bool {
  // Similar to https://blackpawn.com/texts/pointinpoly/
  let v0 = c - a;
  let v1 = b - a;
  let v2 = point - a;

  let dot00 = v0.dot(v0);
  let dot01 = v0.dot(v1);
  let dot02 = v0.dot(v2);
  let dot11 = v1.dot(v1);
  let dot12 = v1.dot(v2);

  let inverse_denominator = 1.0 / (dot00 * dot11 - dot01 * dot01);
  let u = (dot11 * dot02 - dot01 * dot12) * inverse_denominator;
  let v = (dot00 * dot12 - dot01 * dot02) * inverse_denominator;

  u >= 0.0 && v >= 0.0 && u + v <= 1.0
}

/// Projects `point` onto the segment from `a` to `b`, clamping to the
/// endpoints.
pub fn closest_point_on_edge(a: Vec2, b: Vec2, point: Vec2) -> Vec2 {
  let edge = b - a;
  let length_squared = edge.length_squared();
  if length_squared == 0.0 {
    return a;
  }
  let t = (edge.dot(point - a) / length_squared).clamp(0.0, 1.0);
  a + edge * t
}

/// Finds the point in the triangle (`v0`, `v1`, `v2`) nearest to `point`, and
/// the distance to it. Points inside the triangle are returned unchanged.
pub fn closest_point_on_triangle_2d(
  point: Vec2,
  v0: Vec2,
  v1: Vec2,
  v2: Vec2,
) -> (Vec2, f32) {
  if triangle_contains_point(point, v0, v1, v2) {
    return (point, 0.0);
  }

  let mut best_point = closest_point_on_edge(v0, v1, point);
  let mut best_distance = best_point.distance(point);
  for (a, b) in [(v1, v2), (v2, v0)] {
    let edge_point = closest_point_on_edge(a, b, point);
    let distance = edge_point.distance(point);
    if distance < best_distance {
      best_point = edge_point;
      best_distance = distance;
    }
  }
  (best_point, best_distance)
}

/// The rotation taking one axis onto another.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RotationResult {
  /// The rotation exists and is unique up to a twist about the target axis.
  Aligned(Quat),
  /// The axes point in exactly opposite directions, so there is no single
  /// shortest rotation.
  AntiParallel,
}

/// Computes the shortest rotation taking the unit vector `from` onto the unit
/// vector `to`.
pub fn rotation_between_axes(from: Vec3, to: Vec3) -> RotationResult {
  if from.dot(to) <= -1.0 + 1e-6 {
    return RotationResult::AntiParallel;
  }
  RotationResult::Aligned(Quat::from_rotation_arc(from, to))
}

/// A triangle moved so the query point is at the origin and rotated so the
/// triangle's normal is +Z. Every vertex then has the same z, which is the
/// signed offset of the triangle's plane from the query point.
struct AlignedTriangle {
  /// The rotation from the world-space (relative) triangle into the aligned
  /// triangle.
  rotation: Quat,
  vertices: (Vec3, Vec3, Vec3),
}

fn align_triangle_to_point(
  point: Vec3,
  v0: Vec3,
  v1: Vec3,
  v2: Vec3,
) -> AlignedTriangle {
  let (v0, v1, v2) = (v0 - point, v1 - point, v2 - point);
  let normal = (v1 - v0).cross(v2 - v0).normalize();

  match rotation_between_axes(normal, Vec3::Z) {
    RotationResult::Aligned(rotation) => AlignedTriangle {
      rotation,
      vertices: (rotation * v0, rotation * v1, rotation * v2),
    },
    // The triangle is already flat but facing down. Flipping the winding
    // makes it face up without moving any vertex.
    RotationResult::AntiParallel => {
      AlignedTriangle { rotation: Quat::IDENTITY, vertices: (v0, v2, v1) }
    }
  }
}

/// Finds the point on the triangle (`v0`, `v1`, `v2`) nearest to `point` in
/// 3D, and the distance to it.
pub fn closest_point_on_triangle_3d(
  point: Vec3,
  v0: Vec3,
  v1: Vec3,
  v2: Vec3,
) -> (Vec3, f32) {
  let aligned = align_triangle_to_point(point, v0, v1, v2);
  let (a, b, c) = aligned.vertices;
  let plane_offset = a.z;

  let (flat_point, flat_distance) =
    closest_point_on_triangle_2d(Vec2::ZERO, a.xy(), b.xy(), c.xy());

  let aligned_point = flat_point.extend(plane_offset);
  (
    aligned.rotation.inverse() * aligned_point + point,
    flat_distance.hypot(plane_offset),
  )
}

/// Computes the 3D distance from `point` to the triangle (`v0`, `v1`, `v2`).
/// This is [`closest_point_on_triangle_3d`] without mapping the nearest point
/// back into world space.
pub fn point_distance_from_triangle_3d(
  point: Vec3,
  v0: Vec3,
  v1: Vec3,
  v2: Vec3,
) -> f32 {
  let aligned = align_triangle_to_point(point, v0, v1, v2);
  let (a, b, c) = aligned.vertices;
  let (_, flat_distance) =
    closest_point_on_triangle_2d(Vec2::ZERO, a.xy(), b.xy(), c.xy());
  flat_distance.hypot(a.z)
}

#[cfg(test)]
#[path = "geometry_test.rs"]
mod test;
