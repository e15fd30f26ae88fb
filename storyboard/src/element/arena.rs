use std::fmt;

use super::RenderedItem;

/// Stable handle to a rendered item.
///
/// Handles stay valid while the item lives; once it is removed the handle
/// resolves to nothing, even if the slot is reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId {
    slot: u32,
    generation: u32,
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item-{}v{}", self.slot, self.generation)
    }
}

#[derive(Debug, Default)]
struct Slot {
    generation: u32,
    item: Option<RenderedItem>,
}

/// Rendered items plus their document order.
#[derive(Debug, Default)]
pub struct ItemArena {
    slots: Vec<Slot>,
    free: Vec<u32>,
    order: Vec<ItemId>,
}

impl ItemArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Handles in document order.
    pub fn order(&self) -> &[ItemId] {
        &self.order
    }

    pub fn get(&self, id: ItemId) -> Option<&RenderedItem> {
        let slot = self.slots.get(id.slot as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.item.as_ref()
    }

    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut RenderedItem> {
        let slot = self.slots.get_mut(id.slot as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.item.as_mut()
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    /// Position of `id` in document order.
    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.order.iter().position(|&candidate| candidate == id)
    }

    /// Items with their handles, in document order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &RenderedItem)> + '_ {
        self.order
            .iter()
            .filter_map(move |&id| self.get(id).map(|item| (id, item)))
    }

    pub fn push(&mut self, item: RenderedItem) -> ItemId {
        let position = self.order.len();
        self.insert(position, item)
    }

    /// Insert `item` so it ends up at `position` in document order.
    /// Positions past the end append.
    pub fn insert(&mut self, position: usize, item: RenderedItem) -> ItemId {
        let id = self.allocate(item);
        let position = position.min(self.order.len());
        self.order.insert(position, id);
        id
    }

    pub fn remove(&mut self, id: ItemId) -> Option<RenderedItem> {
        let position = self.position(id)?;
        self.order.remove(position);

        let slot = self.slots.get_mut(id.slot as usize)?;
        let item = slot.item.take();
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.slot);
        item
    }

    /// Drop every item. Outstanding handles stop resolving.
    pub fn clear(&mut self) {
        for id in std::mem::take(&mut self.order) {
            if let Some(slot) = self.slots.get_mut(id.slot as usize) {
                slot.item = None;
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(id.slot);
            }
        }
    }

    fn allocate(&mut self, item: RenderedItem) -> ItemId {
        if let Some(slot_index) = self.free.pop() {
            let slot = &mut self.slots[slot_index as usize];
            slot.item = Some(item);
            return ItemId {
                slot: slot_index,
                generation: slot.generation,
            };
        }

        let slot_index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            item: Some(item),
        });
        ItemId {
            slot: slot_index,
            generation: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Template;
    use crate::scene::Scene;

    fn item(idea: u64, index: f64) -> RenderedItem {
        Template::default().instantiate(&Scene::new(idea, "t", index))
    }

    #[test]
    fn removed_handle_does_not_resolve_after_slot_reuse() {
        let mut arena = ItemArena::new();
        let first = arena.push(item(1, 1.0));
        arena.remove(first);
        let second = arena.push(item(2, 2.0));

        assert!(arena.get(first).is_none());
        assert_eq!(arena.get(second).map(|i| i.tag().idea_id.0), Some(2));
    }

    #[test]
    fn insert_keeps_document_order() {
        let mut arena = ItemArena::new();
        let a = arena.push(item(1, 1.0));
        let c = arena.push(item(3, 3.0));
        let b = arena.insert(1, item(2, 2.0));

        assert_eq!(arena.order(), &[a, b, c]);
        assert_eq!(arena.position(c), Some(2));
    }

    #[test]
    fn clear_invalidates_all_handles() {
        let mut arena = ItemArena::new();
        let a = arena.push(item(1, 1.0));
        arena.clear();

        assert!(arena.is_empty());
        assert!(!arena.contains(a));
    }
}
