/// A generic A* problem over states numbered `0..state_count()`.
pub trait AStarProblem {
  /// The action that allows moving between states.
  type ActionType: Clone;

  /// The number of states. Every state is less than this.
  fn state_count(&self) -> usize;

  /// Creates the initial state for the problem.
  fn initial_state(&self) -> usize;

  /// Creates all possible states that can be reached by a single action from
  /// `state`. The result stores the "cost" of the action, the action taken, and
  /// the resulting state.
  fn successors(&self, state: usize) -> Vec<(f32, Self::ActionType, usize)>;

  /// Computes an estimate of the cost to reach a goal state from `state`. Must
  /// be non-negative and goal states must have an estimate of 0. Must be in the
  /// same units as the costs returned by [`Self::successors`].
  fn heuristic(&self, state: usize) -> f32;

  /// Determines whether `state` is a goal state.
  fn is_goal_state(&self, state: usize) -> bool;
}

/// Where a state is in the search.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum NodeState {
  Unvisited,
  Open,
  Closed,
}

/// Stats about the pathfinding process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathStats {
  /// The number of states that were expanded (taken from the open set).
  pub explored_nodes: u32,
}

/// The result of pathfinding.
#[derive(Debug)]
pub struct PathResult<ActionType> {
  /// Stats about the pathfinding process.
  pub stats: PathStats,
  /// The states entered along the path (excluding the initial state), each
  /// with the action that entered it.
  pub path: Vec<(usize, ActionType)>,
}

/// Why a path could not be found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
  /// Every reachable state was explored without reaching a goal.
  Exhausted(PathStats),
  /// The search stopped after expanding the maximum number of states.
  IterationLimitReached(PathStats),
}

/// Walks the predecessors back from `goal` to the initial state.
fn recover_path<ActionType: Clone>(
  goal: usize,
  predecessors: &[Option<(usize, ActionType)>],
) -> Vec<(usize, ActionType)> {
  let mut path = Vec::new();
  let mut state = goal;
  while let Some((previous_state, action)) = &predecessors[state] {
    path.push((state, action.clone()));
    state = *previous_state;
  }

  path.reverse();
  path
}

/// Finds a path in `problem` to get from the initial state to a goal state.
///
/// The open state with the lowest estimate is expanded first, with ties going
/// to the state that was opened first. The search ends as soon as a goal state
/// is generated as a successor, so goal states are never expanded. Expands at
/// most `iteration_limit` states if provided.
pub fn find_path<ProblemType: AStarProblem>(
  problem: &ProblemType,
  iteration_limit: Option<u32>,
) -> Result<PathResult<ProblemType::ActionType>, PathError> {
  let mut stats = PathStats { explored_nodes: 0 };

  let initial_state = problem.initial_state();
  if problem.is_goal_state(initial_state) {
    return Ok(PathResult { stats, path: vec![] });
  }

  let state_count = problem.state_count();
  let mut node_states = vec![NodeState::Unvisited; state_count];
  let mut predecessors: Vec<Option<(usize, ProblemType::ActionType)>> =
    vec![None; state_count];
  let mut costs = vec![f32::INFINITY; state_count];
  let mut estimates = vec![f32::INFINITY; state_count];
  let mut open_states = vec![initial_state];

  costs[initial_state] = 0.0;
  estimates[initial_state] = problem.heuristic(initial_state);
  node_states[initial_state] = NodeState::Open;

  while !open_states.is_empty() {
    if iteration_limit.is_some_and(|limit| stats.explored_nodes >= limit) {
      return Err(PathError::IterationLimitReached(stats));
    }

    let mut best_open_index = 0;
    for (open_index, &state) in open_states.iter().enumerate().skip(1) {
      if estimates[state] < estimates[open_states[best_open_index]] {
        best_open_index = open_index;
      }
    }
    let current_state = open_states.remove(best_open_index);
    node_states[current_state] = NodeState::Closed;
    stats.explored_nodes += 1;

    let successors = problem.successors(current_state);

    if let Some((_, action, goal_state)) =
      successors.iter().find(|(_, _, state)| problem.is_goal_state(*state))
    {
      predecessors[*goal_state] = Some((current_state, action.clone()));
      return Ok(PathResult {
        stats,
        path: recover_path(*goal_state, &predecessors),
      });
    }

    let current_cost = costs[current_state];
    for (action_cost, action, state) in successors {
      if node_states[state] == NodeState::Closed {
        continue;
      }
      let cost = current_cost + action_cost;
      if cost >= costs[state] {
        continue;
      }
      predecessors[state] = Some((current_state, action));
      costs[state] = cost;
      estimates[state] = cost + problem.heuristic(state);
      if node_states[state] == NodeState::Unvisited {
        node_states[state] = NodeState::Open;
        open_states.push(state);
      }
    }
  }

  Err(PathError::Exhausted(stats))
}

#[cfg(test)]
#[path = "astar_test.rs"]
mod test;
