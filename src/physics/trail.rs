use crate::physics::math::Vector;
use std::collections::VecDeque;

/// Default number of positions kept per trail
pub const DEFAULT_MAX_TRAIL_LENGTH: usize = 500;

/// Past positions of a body, oldest first
///
/// The trail never holds more than the bound passed to [`Trail::push`] or
/// [`Trail::truncate_front`]; once full, each new point evicts the oldest one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trail {
    points: VecDeque<Vector>,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `position`, then drop the oldest points until at most
    /// `max_points` remain
    pub fn push(&mut self, position: Vector, max_points: usize) {
        self.points.push_back(position);
        self.truncate_front(max_points);
    }

    /// Drop the oldest points until at most `max_points` remain
    pub fn truncate_front(&mut self, max_points: usize) {
        while self.points.len() > max_points {
            self.points.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate from the oldest point to the newest
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Vector> + ExactSizeIterator {
        self.points.iter()
    }

    pub fn oldest(&self) -> Option<Vector> {
        self.points.front().copied()
    }

    pub fn newest(&self) -> Option<Vector> {
        self.points.back().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trail_creation() {
        let trail = Trail::new();

        assert_eq!(trail.len(), 0);
        assert!(trail.is_empty());
        assert_eq!(trail.oldest(), None);
        assert_eq!(trail.newest(), None);
    }

    #[test]
    fn test_trail_push_keeps_oldest_first() {
        let mut trail = Trail::new();
        let pos1 = Vector::new(0.0, 0.0, 0.0);
        let pos2 = Vector::new(1.0, 0.0, 0.0);

        trail.push(pos1, 10);
        trail.push(pos2, 10);

        assert_eq!(trail.len(), 2);
        assert_eq!(trail.oldest(), Some(pos1));
        assert_eq!(trail.newest(), Some(pos2));
    }

    #[test]
    fn test_trail_max_points_limit() {
        let mut trail = Trail::new();

        for i in 0..10 {
            trail.push(Vector::new(i as f64, 0.0, 0.0), 5);
        }

        assert_eq!(trail.len(), 5);
        let xs: Vec<f64> = trail.iter().map(|point| point.x).collect();
        assert_eq!(xs, vec![5.0, 6.0, 7.0, 8.0, 9.0]);
    }

    #[test]
    fn test_trail_truncate_front() {
        let mut trail = Trail::new();
        for i in 0..4 {
            trail.push(Vector::new(0.0, i as f64, 0.0), 100);
        }

        trail.truncate_front(2);

        assert_eq!(trail.len(), 2);
        assert_eq!(trail.oldest(), Some(Vector::new(0.0, 2.0, 0.0)));
    }

    #[test]
    fn test_trail_zero_bound_stays_empty() {
        let mut trail = Trail::new();
        trail.push(Vector::ONE, 0);
        assert!(trail.is_empty());
    }

    #[test]
    fn test_trail_clear() {
        let mut trail = Trail::new();
        trail.push(Vector::X, 3);
        trail.clear();
        assert!(trail.is_empty());
    }
}
