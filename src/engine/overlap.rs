//! Overlap test between the dragged item and one neighbor.
//!
//! The test is vertical only and intentionally asymmetric: it fires once the
//! dragged box's top edge sits above the neighbor's midline while the dragged
//! box's own midline sits below the neighbor's top edge. In practice a swap
//! needs roughly half an item height of travel past the neighbor's edge, and
//! a neighbor that has just been displaced no longer satisfies the test at
//! the same pointer position.

use kurbo::Rect;

/// Whether the dragged box has crossed far enough into `neighbor` to swap
pub fn crosses_midline(dragged: Rect, neighbor: Rect) -> bool {
    dragged.y0 < neighbor.y0 + neighbor.height() / 2.0
        && dragged.y0 + dragged.height() / 2.0 > neighbor.y0
}

/// Where a neighbor sat relative to the dragged item when the drag began
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Above,
    Below,
}

impl Side {
    pub(crate) fn of(neighbor: usize, origin: usize) -> Self {
        if neighbor < origin {
            Self::Above
        } else {
            Self::Below
        }
    }

    /// Vertical direction a displaced neighbor moves to clear the path
    pub(crate) fn displacement_sign(self) -> f64 {
        match self {
            Self::Above => 1.0,
            Self::Below => -1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(top: f64) -> Rect {
        Rect::new(0.0, top, 200.0, top + 80.0)
    }

    #[test]
    fn test_no_overlap_at_rest() {
        assert!(!crosses_midline(card(0.0), card(100.0)));
        assert!(!crosses_midline(card(100.0), card(0.0)));
    }

    #[test]
    fn test_overlap_band_moving_down() {
        // Neighbor at 100: band is 60 < top < 140
        assert!(!crosses_midline(card(60.0), card(100.0)));
        assert!(crosses_midline(card(61.0), card(100.0)));
        assert!(crosses_midline(card(139.0), card(100.0)));
        assert!(!crosses_midline(card(140.0), card(100.0)));
    }

    #[test]
    fn test_overlap_band_moving_up() {
        assert!(crosses_midline(card(30.0), card(0.0)));
        assert!(!crosses_midline(card(40.0), card(0.0)));
        assert!(!crosses_midline(card(-40.0), card(0.0)));
    }

    #[test]
    fn test_horizontal_position_is_ignored() {
        let far_right = Rect::new(900.0, 100.0, 1100.0, 180.0);
        assert!(crosses_midline(far_right, card(100.0)));
    }

    #[test]
    fn test_side_signs() {
        assert_eq!(Side::of(0, 2), Side::Above);
        assert_eq!(Side::of(3, 2), Side::Below);
        assert_eq!(Side::Above.displacement_sign(), 1.0);
        assert_eq!(Side::Below.displacement_sign(), -1.0);
    }
}
