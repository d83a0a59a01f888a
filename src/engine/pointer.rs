use bitflags::bitflags;
use kurbo::Point;

bitflags! {
    /// Buttons held down while a pointer event fired.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PointerButtons: u8 {
        const PRIMARY = 1;
        const SECONDARY = 1 << 1;
        const AUXILIARY = 1 << 2;
        const BACK = 1 << 3;
        const FORWARD = 1 << 4;
    }
}

/// A pointer sample in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub position: Point,
    pub buttons: PointerButtons,
}

impl PointerEvent {
    pub fn new(x: f64, y: f64, buttons: PointerButtons) -> Self {
        Self {
            position: Point::new(x, y),
            buttons,
        }
    }

    /// Primary-button event at the given position
    pub fn primary(x: f64, y: f64) -> Self {
        Self::new(x, y, PointerButtons::PRIMARY)
    }

    /// True when the primary button is the only one held
    pub fn is_primary_only(&self) -> bool {
        self.buttons == PointerButtons::PRIMARY
    }
}
