use glam::DVec2;
use std::collections::VecDeque;

/// A bounded history of recent positions for one body.
///
/// Points are kept oldest first. The cap is not stored here: every
/// [`Trail::record`] call receives it, so the simulation's
/// [`crate::config::Config::trail_len`] is the single source of the limit.
///
/// The trail is presentation data only: nothing in the force law or the
/// integrator ever reads it.
#[derive(Debug, Clone, Default)]
pub struct Trail {
    points: VecDeque<DVec2>,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a position, then evicts the oldest points past `cap`.
    ///
    /// A zero cap leaves the trail empty.
    ///
    /// ### Parameters
    /// - `pos` - Position to append as the newest point.
    /// - `cap` - Maximum number of points retained after the call.
    pub fn record(&mut self, pos: DVec2, cap: usize) {
        self.points.push_back(pos);
        while self.points.len() > cap {
            self.points.pop_front();
        }
    }

    /// Drops every point.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Oldest retained point, if any.
    pub fn oldest(&self) -> Option<DVec2> {
        self.points.front().copied()
    }

    /// Most recently recorded point, if any.
    pub fn newest(&self) -> Option<DVec2> {
        self.points.back().copied()
    }

    /// Returns an iterator over the points, oldest first.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = DVec2> + '_ {
        self.points.iter().copied()
    }
}
