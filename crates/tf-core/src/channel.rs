//! Channel store: four control-point curves, one per output channel
//!
//! Every channel keeps its points sorted by ascending x and never drops
//! below one point. The store is the only place control points are mutated,
//! so these invariants hold no matter which gesture drove the change.

use crate::error::{TfResult, TransferFunctionError};
use crate::geometry::Point;

/// Number of output channels
pub const NUM_CHANNELS: usize = 4;

/// Default upper bound on control points per channel
pub const DEFAULT_MAX_HANDLES: usize = 20;

/// Smallest handle limit that holds the default curves (the green seed)
pub const MIN_SEEDED_HANDLES: usize = 6;

/// A control point in canvas space: x is the domain fraction, y the output value
pub type ControlPoint = Point;

/// Output channel of the transfer function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl Channel {
    /// All channels in table column order
    pub const ALL: [Channel; NUM_CHANNELS] =
        [Channel::Red, Channel::Green, Channel::Blue, Channel::Alpha];

    /// Column index in the sampled table
    pub const fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
            Channel::Alpha => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Channel::Red => "Red",
            Channel::Green => "Green",
            Channel::Blue => "Blue",
            Channel::Alpha => "Alpha",
        }
    }

    /// Single-letter label used in the export header
    pub fn short_name(self) -> &'static str {
        match self {
            Channel::Red => "R",
            Channel::Green => "G",
            Channel::Blue => "B",
            Channel::Alpha => "A",
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Control points for all four channels
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelStore {
    channels: [Vec<ControlPoint>; NUM_CHANNELS],
    max_handles: usize,
}

impl Default for ChannelStore {
    fn default() -> Self {
        Self::seeded(DEFAULT_MAX_HANDLES)
    }
}

impl ChannelStore {
    /// Create a store seeded with the default curves
    ///
    /// Fails if `max_handles` can't hold the longest default curve.
    pub fn new(max_handles: usize) -> TfResult<Self> {
        if max_handles < MIN_SEEDED_HANDLES {
            return Err(TransferFunctionError::InvalidHandleLimit {
                limit: max_handles,
                min: MIN_SEEDED_HANDLES,
            });
        }
        Ok(Self::seeded(max_handles))
    }

    fn seeded(max_handles: usize) -> Self {
        let channels = [
            vec![
                Point::new(0.625, 0.38),
                Point::new(0.75, 0.5),
                Point::new(0.875, 0.75),
                Point::new(1.0, 1.0),
            ],
            vec![
                Point::new(0.0, 0.0),
                Point::new(0.125, 0.85),
                Point::new(0.25, 1.0),
                Point::new(0.5, 0.88),
                Point::new(0.75, 0.0),
                Point::new(1.0, 0.0),
            ],
            vec![
                Point::new(0.0, 1.0),
                Point::new(0.125, 0.5),
                Point::new(0.24, 0.25),
                Point::new(0.38, 0.125),
            ],
            vec![
                Point::new(0.0, 0.0625),
                Point::new(0.25, 0.0625),
                Point::new(0.5, 0.0625),
                Point::new(0.75, 0.0625),
                Point::new(1.0, 0.0625),
            ],
        ];
        Self {
            channels,
            max_handles,
        }
    }

    /// Create a store from explicit curves
    ///
    /// Points are sorted by x; empty channels get a single point at (0, 0)
    /// and curves longer than `max_handles` are truncated.
    pub fn from_points(points: [Vec<ControlPoint>; NUM_CHANNELS], max_handles: usize) -> Self {
        let max_handles = max_handles.max(1);
        let channels = points.map(|mut pts| {
            if pts.is_empty() {
                pts.push(Point::ORIGIN);
            }
            sort_by_x(&mut pts);
            pts.truncate(max_handles);
            pts
        });
        Self {
            channels,
            max_handles,
        }
    }

    pub fn max_handles(&self) -> usize {
        self.max_handles
    }

    /// Control points of a channel, sorted by x
    pub fn points(&self, channel: Channel) -> &[ControlPoint] {
        &self.channels[channel.index()]
    }

    pub fn len(&self, channel: Channel) -> usize {
        self.channels[channel.index()].len()
    }

    /// True if another point can be inserted into the channel
    pub fn has_room(&self, channel: Channel) -> bool {
        self.len(channel) < self.max_handles
    }

    /// Iterate over `(channel, points)` in column order
    pub fn iter(&self) -> impl Iterator<Item = (Channel, &[ControlPoint])> {
        Channel::ALL
            .into_iter()
            .map(move |c| (c, self.channels[c.index()].as_slice()))
    }

    /// Insert a point and keep the channel sorted
    ///
    /// Returns false (and leaves the channel untouched) if the channel is full
    /// or the point is not strictly inside the unit square.
    pub fn insert(&mut self, channel: Channel, point: ControlPoint) -> bool {
        if !self.has_room(channel) || !point.is_inside_unit() {
            return false;
        }
        let points = &mut self.channels[channel.index()];
        points.push(point);
        sort_by_x(points);
        true
    }

    /// Remove the point at `index` unless it is the last one in the channel
    pub fn remove(&mut self, channel: Channel, index: usize) -> Option<ControlPoint> {
        let points = &mut self.channels[channel.index()];
        if points.len() <= 1 || index >= points.len() {
            return None;
        }
        Some(points.remove(index))
    }

    /// Move the point at `index` towards `target`
    ///
    /// x is clamped between the neighbouring points (or 0 / 1 at the ends) and
    /// y to [0, 1], so the channel stays sorted. Returns the stored position.
    pub fn move_point(
        &mut self,
        channel: Channel,
        index: usize,
        target: ControlPoint,
    ) -> Option<ControlPoint> {
        let points = &mut self.channels[channel.index()];
        if index >= points.len() {
            return None;
        }

        let x_min = if index > 0 { points[index - 1].x } else { 0.0 };
        let x_max = points.get(index + 1).map_or(1.0, |p| p.x);

        let clamped = Point::new(
            target.x.max(x_min).min(x_max),
            target.y.max(0.0).min(1.0),
        );
        points[index] = clamped;
        Some(clamped)
    }
}

/// Stable sort by x; equal x keeps insertion order
fn sort_by_x(points: &mut [ControlPoint]) {
    points.sort_by(|a, b| a.x.total_cmp(&b.x));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_sorted(points: &[ControlPoint]) -> bool {
        points.windows(2).all(|w| w[0].x <= w[1].x)
    }

    #[test]
    fn test_default_curves_valid() {
        let store = ChannelStore::default();
        for (channel, points) in store.iter() {
            assert!(!points.is_empty(), "{} should not be empty", channel);
            assert!(points.len() <= store.max_handles());
            assert!(is_sorted(points), "{} should be sorted", channel);
        }
        assert_eq!(store.points(Channel::Green).len(), MIN_SEEDED_HANDLES);
        assert_eq!(store.points(Channel::Alpha)[0], Point::new(0.0, 0.0625));
    }

    #[test]
    fn test_new_rejects_limit_below_seed_curves() {
        for limit in 0..MIN_SEEDED_HANDLES {
            match ChannelStore::new(limit) {
                Err(TransferFunctionError::InvalidHandleLimit { limit: got, min }) => {
                    assert_eq!(got, limit);
                    assert_eq!(min, MIN_SEEDED_HANDLES);
                }
                other => panic!("limit {} should be rejected, got {:?}", limit, other),
            }
        }

        let store = ChannelStore::new(MIN_SEEDED_HANDLES).unwrap();
        assert_eq!(store.max_handles(), MIN_SEEDED_HANDLES);
        assert!(!store.has_room(Channel::Green));
        assert!(store.has_room(Channel::Red));
    }

    #[test]
    fn test_channel_indices_match_column_order() {
        for (i, channel) in Channel::ALL.iter().enumerate() {
            assert_eq!(channel.index(), i);
        }
        assert_eq!(Channel::Blue.short_name(), "B");
        assert_eq!(Channel::Alpha.to_string(), "Alpha");
    }

    #[test]
    fn test_insert_keeps_order() {
        let mut store = ChannelStore::default();
        assert!(store.insert(Channel::Blue, Point::new(0.2, 0.4)));
        let blue = store.points(Channel::Blue);
        assert_eq!(blue.len(), 5);
        assert!(is_sorted(blue));
        assert_eq!(blue[2], Point::new(0.2, 0.4));
    }

    #[test]
    fn test_insert_equal_x_is_stable() {
        let mut store = ChannelStore::default();
        assert!(store.insert(Channel::Alpha, Point::new(0.5, 0.9)));
        let alpha = store.points(Channel::Alpha);
        // Existing (0.5, 0.0625) stays ahead of the new point
        assert_eq!(alpha[2], Point::new(0.5, 0.0625));
        assert_eq!(alpha[3], Point::new(0.5, 0.9));
    }

    #[test]
    fn test_insert_rejects_boundaries() {
        let mut store = ChannelStore::default();
        let before = store.len(Channel::Red);
        assert!(!store.insert(Channel::Red, Point::new(0.0, 0.5)));
        assert!(!store.insert(Channel::Red, Point::new(1.0, 0.5)));
        assert!(!store.insert(Channel::Red, Point::new(0.5, 0.0)));
        assert!(!store.insert(Channel::Red, Point::new(0.5, 1.0)));
        assert!(!store.insert(Channel::Red, Point::new(1.5, 0.5)));
        assert_eq!(store.len(Channel::Red), before);
    }

    #[test]
    fn test_insert_rejects_when_full() {
        let mut store = ChannelStore::default();
        let mut x = 0.01;
        while store.has_room(Channel::Red) {
            assert!(store.insert(Channel::Red, Point::new(x, 0.5)));
            x += 0.01;
        }
        assert_eq!(store.len(Channel::Red), DEFAULT_MAX_HANDLES);
        assert!(!store.insert(Channel::Red, Point::new(0.55, 0.5)));
        assert_eq!(store.len(Channel::Red), DEFAULT_MAX_HANDLES);
    }

    #[test]
    fn test_remove_never_empties_channel() {
        let mut store = ChannelStore::from_points(
            [
                vec![Point::new(0.5, 0.5)],
                vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)],
                vec![],
                vec![Point::new(0.2, 0.2)],
            ],
            DEFAULT_MAX_HANDLES,
        );
        assert_eq!(store.remove(Channel::Red, 0), None);
        assert_eq!(store.len(Channel::Red), 1);

        assert_eq!(store.remove(Channel::Green, 1), Some(Point::new(1.0, 1.0)));
        assert_eq!(store.remove(Channel::Green, 0), None);

        // Empty input channels are seeded with one point
        assert_eq!(store.len(Channel::Blue), 1);
        assert_eq!(store.remove(Channel::Alpha, 5), None);
    }

    #[test]
    fn test_move_clamps_to_neighbours() {
        let mut store = ChannelStore::from_points(
            [
                vec![Point::new(0.0, 0.0), Point::new(0.4, 0.5), Point::new(0.6, 1.0)],
                vec![Point::ORIGIN],
                vec![Point::ORIGIN],
                vec![Point::ORIGIN],
            ],
            DEFAULT_MAX_HANDLES,
        );

        // Past the right neighbour -> exactly the neighbour's x
        let moved = store.move_point(Channel::Red, 1, Point::new(0.9, 1.7)).unwrap();
        assert_eq!(moved, Point::new(0.6, 1.0));

        // Past the left neighbour -> exactly the neighbour's x
        let moved = store.move_point(Channel::Red, 1, Point::new(-0.3, -0.2)).unwrap();
        assert_eq!(moved, Point::new(0.0, 0.0));

        // Last point is bounded by 1.0
        let moved = store.move_point(Channel::Red, 2, Point::new(3.0, 0.5)).unwrap();
        assert_eq!(moved, Point::new(1.0, 0.5));

        assert!(store.move_point(Channel::Red, 7, Point::ORIGIN).is_none());
        assert!(is_sorted(store.points(Channel::Red)));
    }

    #[test]
    fn test_from_points_sorts_and_truncates() {
        let store = ChannelStore::from_points(
            [
                vec![Point::new(0.9, 0.1), Point::new(0.1, 0.9), Point::new(0.5, 0.5)],
                vec![Point::ORIGIN],
                vec![Point::ORIGIN],
                vec![Point::ORIGIN],
            ],
            2,
        );
        assert_eq!(
            store.points(Channel::Red),
            &[Point::new(0.1, 0.9), Point::new(0.5, 0.5)]
        );
    }
}
