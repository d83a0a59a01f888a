//! Geometry supplied by the rendering side.
//!
//! The engine never walks a live element tree. It asks a [`Layout`] for every
//! item's box once, at drag start, and keeps the result as a
//! [`LayoutSnapshot`]. Current boxes during the drag are derived from the
//! snapshot plus the translations the engine itself applied.

use kurbo::{Point, Rect, Size};

/// Per-item bounding boxes in viewport coordinates, in display order
pub trait Layout {
    fn item_count(&self) -> usize;

    fn item_bounds(&self, index: usize) -> Option<Rect>;
}

impl Layout for [Rect] {
    fn item_count(&self) -> usize {
        self.len()
    }

    fn item_bounds(&self, index: usize) -> Option<Rect> {
        self.get(index).copied()
    }
}

/// A uniform vertical stack: equal-size items separated by a fixed gap
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackLayout {
    pub origin: Point,
    pub item_size: Size,
    pub spacing: f64,
    pub count: usize,
}

impl StackLayout {
    pub fn new(origin: Point, item_size: Size, spacing: f64, count: usize) -> Self {
        Self {
            origin,
            item_size,
            spacing,
            count,
        }
    }
}

impl Layout for StackLayout {
    fn item_count(&self) -> usize {
        self.count
    }

    fn item_bounds(&self, index: usize) -> Option<Rect> {
        if index >= self.count {
            return None;
        }
        let top = self.origin.y + index as f64 * (self.item_size.height + self.spacing);
        Some(Rect::from_origin_size(
            Point::new(self.origin.x, top),
            self.item_size,
        ))
    }
}

/// Immutable copy of the item boxes taken when a drag begins
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSnapshot {
    bounds: Vec<Rect>,
    spacing: f64,
}

impl LayoutSnapshot {
    /// Captures every item box.
    ///
    /// Returns `None` when fewer than two items are laid out or any box is
    /// missing or non-finite, since the inter-item spacing cannot be measured.
    pub fn capture<L: Layout + ?Sized>(layout: &L) -> Option<Self> {
        let count = layout.item_count();
        if count < 2 {
            return None;
        }

        let bounds = (0..count)
            .map(|index| layout.item_bounds(index).filter(is_measurable))
            .collect::<Option<Vec<_>>>()?;

        // Overlapping cards report a negative gap; treat them as touching
        let spacing = (bounds[1].y0 - bounds[0].y1).max(0.0);

        Some(Self { bounds, spacing })
    }

    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    pub fn bounds(&self, index: usize) -> Option<Rect> {
        self.bounds.get(index).copied()
    }

    /// Gap between the first two items
    pub fn spacing(&self) -> f64 {
        self.spacing
    }
}

fn is_measurable(rect: &Rect) -> bool {
    rect.is_finite() && rect.height() >= 0.0 && rect.width() >= 0.0
}
