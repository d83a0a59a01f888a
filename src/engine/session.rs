use crate::{
    domain::{ItemId, Order},
    engine::{
        layout::LayoutSnapshot,
        overlap::{crosses_midline, Side},
        visual::{ItemVisual, Placeholder, VisualState},
    },
};
use kurbo::{Point, Rect, Vec2};
use tracing::{debug, warn};

/// A neighbor that changed displacement during one pointer move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeighborShift {
    /// Render index of the neighbor
    pub neighbor: usize,
    /// Displacement state after the move
    pub displaced: bool,
    /// Provisional index of the dragged item after this shift
    pub current_index: usize,
}

/// State of one pointer-down to pointer-up gesture.
///
/// Owns its working copy of the order; nothing here touches the committed
/// order until the engine takes the working copy at pointer-up.
#[derive(Debug, Clone)]
pub struct DragSession {
    origin_index: usize,
    current_index: usize,
    pointer_origin: Point,
    offset: Vec2,
    grabbed: ItemId,
    layout: LayoutSnapshot,
    /// Height of the dragged item plus the inter-item gap
    shift_distance: f64,
    displaced: Vec<bool>,
    working_order: Order,
}

impl DragSession {
    /// Starts a session on `origin_index`, or `None` if the layout does not
    /// describe the order.
    pub(crate) fn begin(
        order: &Order,
        origin_index: usize,
        pointer_origin: Point,
        layout: LayoutSnapshot,
    ) -> Option<Self> {
        if layout.len() != order.len() {
            warn!(
                layout = layout.len(),
                order = order.len(),
                "layout does not match order, drag ignored"
            );
            return None;
        }

        let grabbed = order.get(origin_index)?.id.clone();
        let frame = layout.bounds(origin_index)?;
        let shift_distance = frame.height() + layout.spacing();

        Some(Self {
            origin_index,
            current_index: origin_index,
            pointer_origin,
            offset: Vec2::ZERO,
            grabbed,
            displaced: vec![false; layout.len()],
            layout,
            shift_distance,
            working_order: order.clone(),
        })
    }

    pub fn origin_index(&self) -> usize {
        self.origin_index
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn pointer_origin(&self) -> Point {
        self.pointer_origin
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn grabbed(&self) -> &ItemId {
        &self.grabbed
    }

    pub fn working_order(&self) -> &Order {
        &self.working_order
    }

    pub fn is_displaced(&self, index: usize) -> bool {
        self.displaced.get(index).copied().unwrap_or(false)
    }

    pub(crate) fn into_working_order(self) -> Order {
        self.working_order
    }

    /// Where the dragged item currently appears
    pub fn dragged_frame(&self) -> Rect {
        self.origin_frame() + self.offset
    }

    fn origin_frame(&self) -> Rect {
        self.layout
            .bounds(self.origin_index)
            .unwrap_or(Rect::ZERO)
    }

    fn displacement_of(&self, index: usize) -> Vec2 {
        if !self.is_displaced(index) {
            return Vec2::ZERO;
        }
        let sign = Side::of(index, self.origin_index).displacement_sign();
        Vec2::new(0.0, sign * self.shift_distance)
    }

    fn neighbor_frame(&self, index: usize) -> Option<Rect> {
        Some(self.layout.bounds(index)? + self.displacement_of(index))
    }

    /// Applies a pointer move: updates the dragged offset and runs the
    /// overlap test against every neighbor in render order.
    pub(crate) fn pointer_moved(&mut self, pointer: Point) -> Vec<NeighborShift> {
        self.offset = pointer - self.pointer_origin;
        let dragged = self.dragged_frame();

        let mut shifts = Vec::new();
        for index in 0..self.layout.len() {
            if index == self.origin_index {
                continue;
            }
            let Some(neighbor) = self.neighbor_frame(index) else {
                continue;
            };
            if crosses_midline(dragged, neighbor) {
                shifts.push(self.toggle(index));
            }
        }
        shifts
    }

    fn toggle(&mut self, index: usize) -> NeighborShift {
        let was_displaced = self.displaced[index];
        self.displaced[index] = !was_displaced;

        // Passing a neighbor moves the dragged item toward that neighbor's
        // side; un-displacing it moves back.
        let toward_end = match Side::of(index, self.origin_index) {
            Side::Below => !was_displaced,
            Side::Above => was_displaced,
        };
        let last = self.layout.len() - 1;
        self.current_index = if toward_end {
            (self.current_index + 1).min(last)
        } else {
            self.current_index.saturating_sub(1)
        };

        if let Err(err) = self.working_order.move_to(&self.grabbed, self.current_index) {
            warn!(error = %err, "dragged item missing from working order");
        }

        debug!(
            neighbor = index,
            displaced = !was_displaced,
            current_index = self.current_index,
            "neighbor shifted"
        );

        NeighborShift {
            neighbor: index,
            displaced: !was_displaced,
            current_index: self.current_index,
        }
    }

    /// Visual state for the renderer, indexed by render position
    pub fn visual_state(&self, lifted_z_index: i32) -> VisualState {
        let origin_frame = self.origin_frame();

        let items = (0..self.layout.len())
            .map(|index| {
                if index == self.origin_index {
                    ItemVisual {
                        offset: self.offset,
                        z_index: Some(lifted_z_index),
                        pinned: Some(origin_frame),
                        displaced: false,
                    }
                } else {
                    ItemVisual {
                        offset: self.displacement_of(index),
                        displaced: self.is_displaced(index),
                        ..ItemVisual::default()
                    }
                }
            })
            .collect();

        VisualState {
            items,
            placeholder: Some(Placeholder {
                index: self.origin_index,
                size: origin_frame.size(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Item;
    use crate::engine::layout::StackLayout;
    use kurbo::Size;

    fn order(ids: &[&str]) -> Order {
        Order::new(
            ids.iter()
                .map(|id| Item::new(ItemId::new(*id).unwrap(), *id, ""))
                .collect(),
        )
        .unwrap()
    }

    fn stack(count: usize) -> LayoutSnapshot {
        let layout = StackLayout::new(Point::ZERO, Size::new(200.0, 80.0), 20.0, count);
        LayoutSnapshot::capture(&layout).unwrap()
    }

    #[test]
    fn test_begin_rejects_mismatched_layout() {
        let session = DragSession::begin(&order(&["a", "b", "c"]), 0, Point::ZERO, stack(2));
        assert!(session.is_none());
    }

    #[test]
    fn test_shift_distance_includes_spacing() {
        let mut session =
            DragSession::begin(&order(&["a", "b"]), 0, Point::new(5.0, 40.0), stack(2)).unwrap();

        session.pointer_moved(Point::new(5.0, 110.0));

        assert!(session.is_displaced(1));
        assert_eq!(session.displacement_of(1), Vec2::new(0.0, -100.0));
    }

    #[test]
    fn test_repeat_move_is_idempotent() {
        let mut session =
            DragSession::begin(&order(&["a", "b", "c"]), 0, Point::new(5.0, 40.0), stack(3))
                .unwrap();

        let first = session.pointer_moved(Point::new(5.0, 110.0));
        assert_eq!(first.len(), 1);

        let again = session.pointer_moved(Point::new(5.0, 110.0));
        assert!(again.is_empty());
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn test_visual_state_while_dragging() {
        let mut session =
            DragSession::begin(&order(&["a", "b", "c"]), 0, Point::new(5.0, 40.0), stack(3))
                .unwrap();
        session.pointer_moved(Point::new(15.0, 140.0));

        let visual = session.visual_state(5000);

        let lifted = visual.item(0).unwrap();
        assert_eq!(lifted.offset, Vec2::new(10.0, 100.0));
        assert_eq!(lifted.z_index, Some(5000));
        assert_eq!(lifted.pinned, Some(Rect::new(0.0, 0.0, 200.0, 80.0)));

        let passed = visual.item(1).unwrap();
        assert!(passed.displaced);
        assert_eq!(passed.offset, Vec2::new(0.0, -100.0));

        assert!(visual.item(2).unwrap().is_neutral());
        assert_eq!(
            visual.placeholder,
            Some(Placeholder {
                index: 0,
                size: Size::new(200.0, 80.0)
            })
        );
    }
}
