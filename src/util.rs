use std::mem::swap;

use glam::Vec2;
use ord_subset::OrdVar;

/// A planar bounding box.
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum BoundingBox {
  /// The bounding box has no points in it.
  Empty,
  /// The bounding box has some points in it.
  Box {
    /// The minimum bounds of the bounding box.
    min: Vec2,
    /// The maximum bounds of the bounding box. Must be component-wise greater
    /// than or equal to `min`.
    max: Vec2,
  },
}

impl BoundingBox {
  /// Creates a box already with some data in it. `min` and `max` must already
  /// be valid - this is unchecked.
  pub fn new_box(min: Vec2, max: Vec2) -> Self {
    Self::Box { min, max }
  }

  /// Returns whether the box is empty or not.
  pub fn is_empty(&self) -> bool {
    matches!(self, Self::Empty)
  }

  pub fn center(&self) -> Option<Vec2> {
    match self {
      Self::Empty => None,
      &Self::Box { min, max } => Some((min + max) * 0.5),
    }
  }

  /// Computes the size of the bounding box. Returns 0 if the bounds are empty.
  pub fn size(&self) -> Vec2 {
    match self {
      Self::Empty => Vec2::ZERO,
      &Self::Box { min, max } => max - min,
    }
  }

  /// Expands the bounding box to contain the `other`.
  pub fn expand_to_bounds(&self, other: &Self) -> Self {
    match (self, other) {
      (Self::Empty, Self::Empty) => Self::Empty,
      (Self::Box { .. }, Self::Empty) => *self,
      (Self::Empty, Self::Box { .. }) => *other,
      (
        Self::Box { min, max },
        Self::Box { min: other_min, max: other_max },
      ) => Self::Box { min: min.min(*other_min), max: max.max(*other_max) },
    }
  }

  /// Expands the bounding box to contain `point`. If the box was empty, it will
  /// now hold only the `point`.
  pub fn expand_to_point(&self, point: Vec2) -> Self {
    match self {
      Self::Empty => Self::Box { min: point, max: point },
      &Self::Box { min, max } => {
        Self::Box { min: min.min(point), max: max.max(point) }
      }
    }
  }

  /// Determines if `point` is in `self`.
  pub fn contains_point(&self, point: Vec2) -> bool {
    match self {
      Self::Empty => false,
      Self::Box { min, max } => {
        min.x <= point.x
          && point.x <= max.x
          && min.y <= point.y
          && point.y <= max.y
      }
    }
  }

  /// Determines if `other` intersects `self` at all. Boxes that only touch
  /// count as intersecting.
  pub fn intersects_bounds(&self, other: &Self) -> bool {
    let (other_min, other_max) = match other {
      Self::Empty => return false,
      Self::Box { min, max } => (min, max),
    };
    match self {
      Self::Empty => false,
      Self::Box { min, max } => {
        min.x <= other_max.x
          && other_min.x <= max.x
          && min.y <= other_max.y
          && other_min.y <= max.y
      }
    }
  }
}

/// A binary tree of bounding boxes, where each leaf holds a value.
#[derive(Clone, Debug)]
pub enum BoundingBoxHierarchy<ValueType> {
  Leaf {
    bounds: BoundingBox,
    value: ValueType,
  },
  Branch {
    bounds: BoundingBox,
    children:
      Box<(BoundingBoxHierarchy<ValueType>, BoundingBoxHierarchy<ValueType>)>,
  },
}

impl<ValueType> BoundingBoxHierarchy<ValueType> {
  /// Creates a hierarchy from values and their bounding boxes. The values are
  /// all expected to be Some, and the values will be moved into the hierarchy
  /// (leaving behind None). Returns `None` if there are no values.
  pub fn new(values: &mut [(BoundingBox, Option<ValueType>)]) -> Option<Self> {
    match values.len() {
      0 => return None,
      1 => {
        let mut value = (BoundingBox::Empty, None);
        swap(&mut values[0], &mut value);
        return value.1.map(|value_inner| Self::Leaf {
          bounds: value.0,
          value: value_inner,
        });
      }
      _ => {}
    }

    let bounding_box = values
      .iter()
      .map(|v| &v.0)
      .fold(BoundingBox::Empty, |acc, b| acc.expand_to_bounds(b));
    let bounds_size = bounding_box.size();
    let center_or_zero =
      |bounds: &BoundingBox| bounds.center().unwrap_or(Vec2::ZERO);
    if bounds_size.x > bounds_size.y {
      values.sort_by_key(|v| OrdVar::new_unchecked(center_or_zero(&v.0).x))
    } else {
      values.sort_by_key(|v| OrdVar::new_unchecked(center_or_zero(&v.0).y))
    }

    let split_index = values.len() / 2;
    let (left, right) = values.split_at_mut(split_index);

    match (Self::new(left), Self::new(right)) {
      (Some(left), Some(right)) => Some(Self::Branch {
        bounds: bounding_box,
        children: Box::new((left, right)),
      }),
      (Some(only), None) | (None, Some(only)) => Some(only),
      (None, None) => None,
    }
  }

  #[cfg(test)]
  fn depth(&self) -> u32 {
    match self {
      BoundingBoxHierarchy::Leaf { .. } => 1,
      BoundingBoxHierarchy::Branch { children, .. } => {
        1 + children.0.depth().max(children.1.depth())
      }
    }
  }

  /// Finds the values whose bounds intersect `query`.
  pub fn query_box(&self, query: BoundingBox) -> Vec<&ValueType> {
    let mut result = Vec::new();
    if let BoundingBox::Box { .. } = &query {
      self.query_box_recursive(&query, &mut result);
    }
    result
  }

  fn query_box_recursive<'a, 'b>(
    &'a self,
    query: &'b BoundingBox,
    result: &'b mut Vec<&'a ValueType>,
  ) {
    match self {
      Self::Leaf { bounds, value } => {
        if query.intersects_bounds(bounds) {
          result.push(value);
        }
      }
      Self::Branch { bounds, children } => {
        if query.intersects_bounds(bounds) {
          children.0.query_box_recursive(query, result);
          children.1.query_box_recursive(query, result);
        }
      }
    }
  }
}

#[cfg(test)]
#[path = "util_test.rs"]
mod test;
