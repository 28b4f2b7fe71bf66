use glam::{Vec2, Vec3};
use thiserror::Error;

use crate::{
  astar::PathStats,
  funnel::funnel,
  index::{BruteForce, TriangleIndex},
  locate::{find_valid_start_and_destination, Endpoints},
  nav_mesh::ValidNavigationMesh,
  pathfinding::find_triangle_path,
  PathfindingOptions, PortalList,
};

/// An error from finding a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FindPathError {
  #[error("The navigation mesh has no triangles.")]
  EmptyMesh,
  #[error("The start or destination point is not finite.")]
  NonFinitePoint,
  #[error(
    "No path was found from triangle {start_triangle} to triangle {destination_triangle}. They are on disconnected parts of the mesh."
  )]
  NoPathFound { start_triangle: usize, destination_triangle: usize },
  #[error("Gave up finding a path after exploring {0} triangles.")]
  IterationLimitReached(u32),
}

/// A path found across a navigation mesh.
#[derive(Clone, Debug, PartialEq)]
pub struct NavPath {
  /// The points to walk to in order. The start point is not included, and the
  /// last point is always the (resolved) destination.
  pub waypoints: Vec<Vec2>,
  /// Where the start and destination ended up on the mesh.
  pub endpoints: Endpoints,
  /// The triangles entered along the path, ending with the destination
  /// triangle. Empty if the start and destination share a triangle.
  pub corridor: Vec<usize>,
  /// The edge crossed to enter each triangle of `corridor`, with `vertices_0`
  /// on the right-hand side of travel.
  pub portals: PortalList,
  /// Statistics about the search.
  pub stats: PathStats,
}

/// Finds a straight-line path across `mesh` from `start` to `destination`.
///
/// Points off the mesh are first moved to the nearest point on the mesh. The
/// returned points are planar and do not include the start point.
pub fn find_path(
  mesh: &ValidNavigationMesh,
  start: Vec3,
  destination: Vec3,
) -> Result<Vec<Vec2>, FindPathError> {
  find_path_with(
    mesh,
    &BruteForce,
    start,
    destination,
    &PathfindingOptions::default(),
  )
  .map(|path| path.waypoints)
}

/// Same as [`find_path`], but uses `index` to speed up queries and returns the
/// full details of the path.
pub fn find_path_with(
  mesh: &ValidNavigationMesh,
  index: &impl TriangleIndex,
  start: Vec3,
  destination: Vec3,
  options: &PathfindingOptions,
) -> Result<NavPath, FindPathError> {
  if !start.is_finite() || !destination.is_finite() {
    return Err(FindPathError::NonFinitePoint);
  }

  let endpoints =
    find_valid_start_and_destination(mesh, index, start, destination)?;

  // A triangle is convex, so the destination is directly reachable.
  if endpoints.start_triangle == endpoints.destination_triangle {
    return Ok(NavPath {
      waypoints: vec![endpoints.destination],
      endpoints,
      corridor: vec![],
      portals: PortalList::new(),
      stats: PathStats { explored_nodes: 0 },
    });
  }

  let triangle_path = find_triangle_path(
    mesh,
    index,
    endpoints.start_triangle,
    endpoints.destination_triangle,
    options,
  )?;
  let funnel_result =
    funnel(mesh, &triangle_path, endpoints.start, endpoints.destination);

  if funnel_result.waypoints.is_empty() {
    return Err(FindPathError::NoPathFound {
      start_triangle: endpoints.start_triangle,
      destination_triangle: endpoints.destination_triangle,
    });
  }

  Ok(NavPath {
    waypoints: funnel_result.waypoints,
    endpoints,
    corridor: triangle_path.triangles,
    portals: funnel_result.portals,
    stats: triangle_path.stats,
  })
}
