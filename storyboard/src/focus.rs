use crate::config::StoryboardConfig;
use crate::element::ItemId;
use crate::layout::WrapLayout;

/// Tracks which rendered item currently holds input focus.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<ItemId>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused(&self) -> Option<ItemId> {
        self.focused
    }

    /// Returns true if focus changed.
    pub fn focus(&mut self, id: ItemId) -> bool {
        if self.focused == Some(id) {
            return false;
        }
        self.focused = Some(id);
        true
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        self.focused.take().is_some()
    }
}

/// Direction for row-to-row navigation. Left and right follow document
/// order instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Up,
    Down,
}

/// Spatial lookups over rendered items plus the bring-into-view effect.
///
/// `order` is the live item handles in document order; `from` is always one
/// of them. Lookups return `None` when there is nothing in that direction.
pub trait Geometry {
    /// Previous item in document order.
    fn prev(&self, order: &[ItemId], from: ItemId) -> Option<ItemId> {
        let position = order.iter().position(|&id| id == from)?;
        position.checked_sub(1).map(|p| order[p])
    }

    /// Next item in document order.
    fn next(&self, order: &[ItemId], from: ItemId) -> Option<ItemId> {
        let position = order.iter().position(|&id| id == from)?;
        order.get(position + 1).copied()
    }

    /// Nearest item in the row above.
    fn grid_up(&self, order: &[ItemId], from: ItemId) -> Option<ItemId>;

    /// Nearest item in the row below.
    fn grid_down(&self, order: &[ItemId], from: ItemId) -> Option<ItemId>;

    /// Bring a freshly inserted item into view.
    fn scroll_into_focus(&mut self, order: &[ItemId], item: ItemId);
}

/// Geometry of items wrapped into equal-width rows.
#[derive(Debug, Clone)]
pub struct GridGeometry {
    layout: WrapLayout,
    viewport_rows: usize,
    scroll_row: usize,
}

impl GridGeometry {
    pub fn new(layout: WrapLayout, viewport_rows: u16) -> Self {
        Self {
            layout,
            viewport_rows: viewport_rows.max(1) as usize,
            scroll_row: 0,
        }
    }

    pub fn from_config(config: &StoryboardConfig, container_width: u16) -> Self {
        Self::new(config.layout(container_width), config.viewport_rows)
    }

    pub fn layout(&self) -> &WrapLayout {
        &self.layout
    }

    /// First visible row.
    pub fn scroll_row(&self) -> usize {
        self.scroll_row
    }

    pub fn viewport_rows(&self) -> usize {
        self.viewport_rows
    }

    /// Re-flow for a new container width, e.g. after a terminal resize.
    pub fn set_container_width(&mut self, width: u16) {
        self.layout.container_width = width;
    }

    /// Whether the item at `position` lies in the visible rows.
    pub fn is_visible(&self, position: usize) -> bool {
        let row = self.layout.row_of(position);
        row >= self.scroll_row && row < self.scroll_row + self.viewport_rows
    }

    fn nearest(&self, order: &[ItemId], from: ItemId, direction: NavDirection) -> Option<ItemId> {
        let from_position = order.iter().position(|&id| id == from)?;
        let current = self.layout.center_of(from_position);

        let best = order
            .iter()
            .enumerate()
            .filter(|&(position, _)| position != from_position)
            .filter_map(|(position, &id)| {
                direction_score(current, self.layout.center_of(position), direction)
                    .map(|score| (id, score))
            })
            .min_by_key(|&(_, score)| score)?;

        log::trace!(
            "[focus] nearest {:?} from {} -> {} score={}",
            direction,
            from,
            best.0,
            best.1
        );
        Some(best.0)
    }
}

impl Geometry for GridGeometry {
    fn grid_up(&self, order: &[ItemId], from: ItemId) -> Option<ItemId> {
        self.nearest(order, from, NavDirection::Up)
    }

    fn grid_down(&self, order: &[ItemId], from: ItemId) -> Option<ItemId> {
        self.nearest(order, from, NavDirection::Down)
    }

    fn scroll_into_focus(&mut self, order: &[ItemId], item: ItemId) {
        let Some(position) = order.iter().position(|&id| id == item) else {
            return;
        };
        let row = self.layout.row_of(position);
        if row < self.scroll_row {
            self.scroll_row = row;
        } else if row >= self.scroll_row + self.viewport_rows {
            self.scroll_row = row + 1 - self.viewport_rows;
        }
        log::debug!("[focus] scrolled {} into view, first row {}", item, self.scroll_row);
    }
}

/// Score a candidate centre for the given direction. Lower is better.
/// Returns None if the candidate is not strictly above/below.
fn direction_score(
    from: (usize, usize),
    to: (usize, usize),
    direction: NavDirection,
) -> Option<usize> {
    let in_direction = match direction {
        NavDirection::Up => to.1 < from.1,
        NavDirection::Down => to.1 > from.1,
    };
    if !in_direction {
        return None;
    }

    // Row distance weighs twice the column offset
    let rows = from.1.abs_diff(to.1);
    let columns = from.0.abs_diff(to.0);
    Some(rows.saturating_mul(2).saturating_add(columns))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_rejects_candidates_behind() {
        let from = (5, 11);
        let above = (5, 1);
        assert!(direction_score(from, above, NavDirection::Down).is_none());
        assert!(direction_score(from, above, NavDirection::Up).is_some());
        assert!(direction_score(from, (20, 11), NavDirection::Up).is_none());
    }

    #[test]
    fn score_prefers_aligned_candidates() {
        let from = (15, 11);
        let straight = direction_score(from, (15, 1), NavDirection::Up);
        let diagonal = direction_score(from, (35, 1), NavDirection::Up);
        assert!(straight < diagonal);
    }

    #[test]
    fn score_does_not_overflow_far_down_the_list() {
        let from = (5, 1);
        let far = (5, usize::MAX);
        assert_eq!(direction_score(from, far, NavDirection::Down), Some(usize::MAX));
    }

    #[test]
    fn focus_reports_changes_only() {
        let mut state = FocusState::new();
        assert!(!state.blur());
        assert_eq!(state.focused(), None);
    }
}
