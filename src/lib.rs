#![doc = include_str!("../README.md")]

mod adjacency;
mod astar;
mod funnel;
mod geometry;
mod index;
mod locate;
mod nav_mesh;
mod pathfinding;
mod query;
mod util;

pub use glam::{Vec2, Vec3};

pub use adjacency::{adjacent_triangles, Adjacency};
pub use astar::PathStats;
pub use funnel::{funnel, FunnelResult};
pub use geometry::{
  closest_point_on_edge, closest_point_on_triangle_2d,
  closest_point_on_triangle_3d, point_distance_from_triangle_3d,
  rotation_between_axes, triangle_centroid, triangle_contains_point,
  RotationResult,
};
pub use index::{BruteForce, TriangleBvh, TriangleIndex};
pub use locate::{
  closest_point_on_mesh, containing_triangle,
  find_valid_start_and_destination, Endpoints,
};
pub use nav_mesh::{
  NavigationMesh, PortalList, ValidNavigationMesh, ValidationError,
};
pub use pathfinding::{find_triangle_path, TrianglePath};
pub use query::{find_path, find_path_with, FindPathError, NavPath};
pub use util::BoundingBox;

/// Options for how paths are searched for.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathfindingOptions {
  /// The maximum number of triangles to expand before giving up. `None`
  /// searches until the destination is found or every reachable triangle has
  /// been explored.
  pub iteration_limit: Option<u32>,
}

#[cfg(test)]
mod test_meshes;

#[cfg(test)]
#[path = "lib_test.rs"]
mod test;
