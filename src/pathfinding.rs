use glam::Vec2;
use log::debug;

use crate::{
  adjacency::adjacent_triangles,
  astar::{self, AStarProblem, PathError, PathStats},
  index::TriangleIndex,
  nav_mesh::ValidNavigationMesh,
  FindPathError, PathfindingOptions, PortalList,
};

/// The A* problem of walking from one triangle to another across shared
/// edges.
struct TrianglePathProblem<'a, I: TriangleIndex> {
  /// The navigation mesh to search.
  mesh: &'a ValidNavigationMesh,
  /// The index used to find adjacent triangles.
  index: &'a I,
  /// The triangle the agent is starting from.
  start_triangle: usize,
  /// The triangle the target is in.
  destination_triangle: usize,
  /// The centroid of the destination triangle. This is just a cached point for
  /// easy access.
  destination_centroid: Vec2,
}

/// The cost of moving between two centroids. Squared distance is used for
/// both the step costs and the heuristic, so the two stay comparable.
fn travel_cost(from: Vec2, to: Vec2) -> f32 {
  from.distance_squared(to)
}

impl<I: TriangleIndex> AStarProblem for TrianglePathProblem<'_, I> {
  /// The endpoints of the edge crossed.
  type ActionType = (usize, usize);

  fn state_count(&self) -> usize {
    self.mesh.triangle_count()
  }

  fn initial_state(&self) -> usize {
    self.start_triangle
  }

  fn successors(&self, state: usize) -> Vec<(f32, Self::ActionType, usize)> {
    let adjacency = adjacent_triangles(self.mesh, self.index, state);
    let centroid = self.mesh.centroid(state);
    adjacency
      .neighbors
      .iter()
      .zip(adjacency.portals.iter())
      .map(|(&neighbor, portal)| {
        (travel_cost(centroid, self.mesh.centroid(neighbor)), portal, neighbor)
      })
      .collect()
  }

  fn heuristic(&self, state: usize) -> f32 {
    travel_cost(self.mesh.centroid(state), self.destination_centroid)
  }

  fn is_goal_state(&self, state: usize) -> bool {
    state == self.destination_triangle
  }
}

/// A chain of triangles connecting two triangles.
#[derive(Clone, Debug, PartialEq)]
pub struct TrianglePath {
  /// The triangle the path starts in.
  pub start_triangle: usize,
  /// The triangles entered along the path, ending with the destination
  /// triangle. The start triangle is not included.
  pub triangles: Vec<usize>,
  /// The edge crossed to enter each triangle in `triangles`. The endpoints
  /// are not yet ordered by direction of travel.
  pub portals: PortalList,
  /// Statistics about the search.
  pub stats: PathStats,
}

/// Finds a chain of triangles from `start_triangle` to `destination_triangle`
/// with the A* algorithm. Returns an error if the triangles are not connected.
pub fn find_triangle_path(
  mesh: &ValidNavigationMesh,
  index: &impl TriangleIndex,
  start_triangle: usize,
  destination_triangle: usize,
  options: &PathfindingOptions,
) -> Result<TrianglePath, FindPathError> {
  let problem = TrianglePathProblem {
    mesh,
    index,
    start_triangle,
    destination_triangle,
    destination_centroid: mesh.centroid(destination_triangle),
  };

  let path_result = match astar::find_path(&problem, options.iteration_limit) {
    Ok(path_result) => path_result,
    Err(PathError::Exhausted(stats)) => {
      debug!(
        "No path from triangle {start_triangle} to triangle {destination_triangle} after exploring {} triangles.",
        stats.explored_nodes
      );
      return Err(FindPathError::NoPathFound {
        start_triangle,
        destination_triangle,
      });
    }
    Err(PathError::IterationLimitReached(stats)) => {
      return Err(FindPathError::IterationLimitReached(stats.explored_nodes));
    }
  };

  let mut triangles = Vec::with_capacity(path_result.path.len());
  let mut portals = PortalList::with_capacity(path_result.path.len());
  for (triangle, (vertex_0, vertex_1)) in path_result.path {
    triangles.push(triangle);
    portals.push(vertex_0, vertex_1);
  }

  debug!(
    "Found a path through {} triangles after exploring {} triangles.",
    triangles.len(),
    path_result.stats.explored_nodes
  );

  Ok(TrianglePath {
    start_triangle,
    triangles,
    portals,
    stats: path_result.stats,
  })
}

#[cfg(test)]
#[path = "pathfinding_test.rs"]
mod test;
