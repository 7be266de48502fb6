//! Slot storage for the tape.
//!
//! Slots are kept in a `Vec` and addressed by `u32` handles. Released
//! handles go onto a free list and are handed out again by the next
//! allocation, so a long-lived tape that inserts and erases repeatedly does
//! not grow its backing store. Each slot carries both neighbour links, which
//! keeps "the slot before the cursor" an O(1) lookup.

use std::ops::{Index, IndexMut};

pub type SlotIdx = u32;

#[derive(Clone, Debug)]
pub struct Slot<T> {
    pub elem: T,
    pub prev: Option<SlotIdx>,
    pub next: Option<SlotIdx>,
}

/// Index arena of tape slots with a free list of released handles.
#[derive(Clone, Debug)]
pub struct SlotArena<T> {
    /// `None` marks a released handle.
    slots: Vec<Option<Slot<T>>>,
    /// Handles of released slots, reused before the vector grows.
    free: Vec<SlotIdx>,
    live: usize,
}

impl<T> Default for SlotArena<T> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<T> SlotArena<T> {
    /// Create an empty arena.
    pub fn new() -> SlotArena<T> {
        return SlotArena {
            slots: Vec::new(),
            free: Vec::new(),
            live: 0,
        };
    }

    /// Create an empty arena with room for `capacity` slots.
    pub fn with_capacity(capacity: usize) -> SlotArena<T> {
        return SlotArena {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            live: 0,
        };
    }

    /// Number of allocated (not yet released) slots.
    #[inline(always)]
    pub fn live(&self) -> usize {
        return self.live;
    }

    /// Allocate an unlinked slot, reusing from the free list if available.
    pub fn alloc(&mut self, elem: T) -> SlotIdx {
        let slot = Slot {
            elem,
            prev: None,
            next: None,
        };
        self.live += 1;
        if let Some(idx) = self.free.pop() {
            self.slots[idx as usize] = Some(slot);
            return idx;
        }
        let idx = next_handle(self.slots.len());
        self.slots.push(Some(slot));
        return idx;
    }

    /// Release a slot and hand back its element.
    ///
    /// Panics if `idx` is not allocated: every slot is released exactly once.
    pub fn release(&mut self, idx: SlotIdx) -> T {
        let slot = self
            .slots
            .get_mut(idx as usize)
            .and_then(Option::take)
            .unwrap_or_else(|| panic!("slot {idx} released twice or never allocated"));
        self.free.push(idx);
        self.live -= 1;
        return slot.elem;
    }

    /// True if `idx` is allocated and not yet released.
    #[inline]
    pub fn contains(&self, idx: SlotIdx) -> bool {
        return matches!(self.slots.get(idx as usize), Some(Some(_)));
    }

    /// The slot at `idx`, or `None` once released.
    #[inline]
    pub fn get(&self, idx: SlotIdx) -> Option<&Slot<T>> {
        return self.slots.get(idx as usize)?.as_ref();
    }

    #[inline]
    pub fn get_mut(&mut self, idx: SlotIdx) -> Option<&mut Slot<T>> {
        return self.slots.get_mut(idx as usize)?.as_mut();
    }

    /// Drop every slot at once. Returns how many were live.
    pub fn clear(&mut self) -> usize {
        let released = self.live;
        self.slots.clear();
        self.free.clear();
        self.live = 0;
        return released;
    }
}

/// Handle for the slot pushed at `len`. Panics once handles run out rather
/// than wrapping onto a live slot.
fn next_handle(len: usize) -> SlotIdx {
    return SlotIdx::try_from(len).unwrap_or_else(|_| panic!("slot arena exhausted at {len} slots"));
}

impl<T> Index<SlotIdx> for SlotArena<T> {
    type Output = Slot<T>;

    fn index(&self, idx: SlotIdx) -> &Slot<T> {
        match self.get(idx) {
            Some(slot) => return slot,
            None => panic!("dangling slot handle {idx}"),
        }
    }
}

impl<T> IndexMut<SlotIdx> for SlotArena<T> {
    fn index_mut(&mut self, idx: SlotIdx) -> &mut Slot<T> {
        match self.get_mut(idx) {
            Some(slot) => return slot,
            None => panic!("dangling slot handle {idx}"),
        }
    }
}
