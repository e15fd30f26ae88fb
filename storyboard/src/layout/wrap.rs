use super::Rect;

/// Fixed-size items flowing left to right and wrapping into rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrapLayout {
    pub container_width: u16,
    pub item_width: u16,
    pub item_height: u16,
    pub gap: u16,
}

impl WrapLayout {
    pub fn new(container_width: u16, item_width: u16, item_height: u16, gap: u16) -> Self {
        Self {
            container_width,
            item_width,
            item_height,
            gap,
        }
    }

    /// Items per row. Always at least one, even if nothing fits.
    pub fn columns(&self) -> usize {
        let stride = self.item_width as usize + self.gap as usize;
        if stride == 0 {
            return 1;
        }
        ((self.container_width as usize + self.gap as usize) / stride).max(1)
    }

    /// Row holding the item at `position` in document order.
    pub fn row_of(&self, position: usize) -> usize {
        position / self.columns()
    }

    pub fn rows(&self, count: usize) -> usize {
        count.div_ceil(self.columns())
    }

    /// Top-left corner of the item at `position`, unclamped.
    fn origin(&self, position: usize) -> (usize, usize) {
        let columns = self.columns();
        let x = (position % columns) * (self.item_width as usize + self.gap as usize);
        let y = (position / columns) * (self.item_height as usize + self.gap as usize);
        (x, y)
    }

    /// Centre of the item at `position`, unclamped.
    pub fn center_of(&self, position: usize) -> (usize, usize) {
        let (x, y) = self.origin(position);
        (
            x + self.item_width as usize / 2,
            y + self.item_height as usize / 2,
        )
    }

    /// Rectangle of the item at `position`, relative to the first row.
    pub fn rect_at(&self, position: usize) -> Rect {
        let (x, y) = self.origin(position);
        Rect::new(
            clamp_u16(x),
            clamp_u16(y),
            self.item_width,
            self.item_height,
        )
    }
}

fn clamp_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}
