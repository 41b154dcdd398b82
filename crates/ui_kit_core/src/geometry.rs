//! Pure numeric helpers for progress indicators and grouped avatars.

use std::f64::consts::PI;

/// Percentage of `value` over `max`, clamped to `0..=100`.
///
/// A non-positive or non-finite `max` yields `0` rather than dividing by zero.
pub fn fraction(value: f64, max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 || value.is_nan() {
        return 0.0;
    }
    (value / max * 100.0).clamp(0.0, 100.0)
}

/// Stroke parameters for a circular progress ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcGeometry {
    /// Circle radius inside the stroke.
    pub radius: f64,
    /// Full stroke length, used as the dash array.
    pub circumference: f64,
    /// Dash offset hiding the unfilled share; within `0..=circumference`.
    pub dash_offset: f64,
}

impl ArcGeometry {
    /// Computes ring geometry for an outer `size`, a stroke `width`, and a clamped percentage.
    pub fn new(size: f64, stroke_width: f64, percentage: f64) -> Self {
        let radius = ((size - stroke_width) / 2.0).max(0.0);
        let circumference = 2.0 * PI * radius;
        let filled = if percentage.is_nan() {
            0.0
        } else {
            percentage.clamp(0.0, 100.0)
        };
        Self {
            radius,
            circumference,
            dash_offset: circumference * (1.0 - filled / 100.0),
        }
    }

    /// Circle center for an outer `size`.
    pub fn center(size: f64) -> f64 {
        size / 2.0
    }
}

/// Visible/hidden split for a capped item group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupOverflow {
    /// Number of items rendered.
    pub visible: usize,
    /// Number of items folded into the overflow badge; `None` means no badge at all.
    pub hidden: Option<usize>,
}

impl GroupOverflow {
    /// Splits `total` items under a display cap of `max`. A cap below one is treated as one.
    pub fn new(total: usize, max: usize) -> Self {
        let max = max.max(1);
        Self {
            visible: total.min(max),
            hidden: (total > max).then(|| total - max),
        }
    }

    /// Overflow badge text such as `+2`, or `None` when every item is visible.
    pub fn badge_label(&self) -> Option<String> {
        self.hidden.map(|hidden| format!("+{hidden}"))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn fraction_clamps_and_guards_zero_max() {
        assert_eq!(fraction(-10.0, 100.0), 0.0);
        assert_eq!(fraction(150.0, 100.0), 100.0);
        assert_eq!(fraction(40.0, 0.0), 0.0);
        assert_eq!(fraction(25.0, 50.0), 50.0);
        assert_eq!(fraction(5.0, -10.0), 0.0);
        assert_eq!(fraction(f64::NAN, 10.0), 0.0);
    }

    #[test]
    fn arc_offset_tracks_fill() {
        let empty = ArcGeometry::new(48.0, 4.0, 0.0);
        assert_eq!(empty.radius, 22.0);
        assert!((empty.circumference - 2.0 * PI * 22.0).abs() < 1e-9);
        assert_eq!(empty.dash_offset, empty.circumference);

        let full = ArcGeometry::new(48.0, 4.0, 100.0);
        assert_eq!(full.dash_offset, 0.0);

        let half = ArcGeometry::new(48.0, 4.0, 50.0);
        assert!((half.dash_offset - half.circumference / 2.0).abs() < 1e-9);
        assert_eq!(ArcGeometry::center(48.0), 24.0);
    }

    #[test]
    fn arc_offset_stays_in_range_for_out_of_range_input() {
        let arc = ArcGeometry::new(48.0, 4.0, 140.0);
        assert_eq!(arc.dash_offset, 0.0);
        let arc = ArcGeometry::new(2.0, 4.0, 50.0);
        assert_eq!(arc.radius, 0.0);
    }

    #[test]
    fn overflow_badge_only_when_over_cap() {
        let over = GroupOverflow::new(6, 4);
        assert_eq!(over.visible, 4);
        assert_eq!(over.badge_label().as_deref(), Some("+2"));

        let under = GroupOverflow::new(3, 4);
        assert_eq!(under.visible, 3);
        assert_eq!(under.hidden, None);
        assert_eq!(under.badge_label(), None);

        let exact = GroupOverflow::new(4, 4);
        assert_eq!(exact.hidden, None);

        assert_eq!(GroupOverflow::new(3, 0), GroupOverflow::new(3, 1));
    }
}
