use kurbo::{Rect, Size, Vec2};

/// How one rendered item should be drawn right now
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ItemVisual {
    /// Translation from the item's layout position
    pub offset: Vec2,
    /// Stacking order override; `None` keeps the natural order
    pub z_index: Option<i32>,
    /// Fixed frame the lifted item is pinned to, outside normal flow
    pub pinned: Option<Rect>,
    /// Whether this neighbor is shifted out of the dragged item's path
    pub displaced: bool,
}

impl ItemVisual {
    pub fn is_neutral(&self) -> bool {
        *self == Self::default()
    }
}

/// Empty slot kept in the dragged item's flow position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placeholder {
    pub index: usize,
    pub size: Size,
}

/// Declarative styling for the whole container, indexed by render position
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VisualState {
    pub items: Vec<ItemVisual>,
    pub placeholder: Option<Placeholder>,
}

impl VisualState {
    /// Every item in normal flow, no placeholder
    pub fn at_rest(len: usize) -> Self {
        Self {
            items: vec![ItemVisual::default(); len],
            placeholder: None,
        }
    }

    pub fn is_at_rest(&self) -> bool {
        self.placeholder.is_none() && self.items.iter().all(ItemVisual::is_neutral)
    }

    pub fn item(&self, index: usize) -> Option<&ItemVisual> {
        self.items.get(index)
    }
}
