//! Segmented progress indicator shared by the carousel and chunk viewer.

/// One highlighted marker among `total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// 0-based index of the highlighted marker.
    pub current: usize,
    /// Number of markers.
    pub total: usize,
}

impl Progress {
    /// Create a progress indicator.
    pub fn new(current: usize, total: usize) -> Self {
        Self { current, total }
    }

    /// One flag per marker, true for the highlighted one.
    pub fn markers(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.total).map(move |i| i == self.current)
    }

    /// Completed fraction counting the current item, `(current + 1) / total`.
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        (self.current + 1) as f32 / self.total as f32
    }

    /// Whether the last marker is highlighted.
    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_marker_highlighted() {
        let p = Progress::new(2, 5);
        let markers: Vec<bool> = p.markers().collect();
        assert_eq!(markers, vec![false, false, true, false, false]);
    }

    #[test]
    fn fraction_counts_current() {
        assert!((Progress::new(0, 5).fraction() - 0.2).abs() < f32::EPSILON);
        assert!((Progress::new(4, 5).fraction() - 1.0).abs() < f32::EPSILON);
        assert_eq!(Progress::new(0, 0).fraction(), 0.0);
    }

    #[test]
    fn last_marker() {
        assert!(Progress::new(2, 3).is_last());
        assert!(!Progress::new(1, 3).is_last());
    }
}
