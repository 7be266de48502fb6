//! Cursor-addressed tape.
//!
//! A tape is an ordered run of slots with one movable cursor. The cursor
//! either addresses a slot or sits at the *stop* position, one past the last
//! slot. On an empty tape the start and stop positions coincide.
//!
//! ```text
//! #-a-[c]-b-#      cursor on `c`
//! #-a-c-b-[]-#     cursor at stop
//! ```
//!
//! Every mutation is relative to the cursor:
//!
//! - `insert_left` puts a slot before the cursor (appends when at stop)
//! - `insert_right` puts a slot after the cursor
//! - `erase` removes the cursor's slot and moves to its successor
//! - `step` moves forward one slot, and stays put at stop
//!
//! Both inserts leave the cursor on the new slot.
//!
//! Slots are stored in a [`SlotArena`] and linked in both directions, so
//! every operation except `copy`, `destroy`, `position` and the
//! representation check is O(1).

use std::fmt;
use std::iter;

use tracing::{debug, error, trace};

use crate::arena::{SlotArena, SlotIdx};
use crate::config::Config;
use crate::error::{Result, TapeError};

pub struct Tape<T> {
    slots: SlotArena<T>,
    /// First slot, `None` when empty.
    head: Option<SlotIdx>,
    /// Last slot, `None` when empty.
    tail: Option<SlotIdx>,
    /// `None` is the stop position.
    cursor: Option<SlotIdx>,
    len: usize,
    config: Config,
}

impl<T> Default for Tape<T> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<T> Tape<T> {
    /// Create an empty tape with the default [`Config`].
    pub fn new() -> Tape<T> {
        return Self::with_config(Config::default());
    }

    /// Create an empty tape that behaves according to `config`.
    pub fn with_config(config: Config) -> Tape<T> {
        let tape = Tape {
            slots: SlotArena::new(),
            head: None,
            tail: None,
            cursor: None,
            len: 0,
            config,
        };
        tape.check_rep("create");
        trace!(mode = ?config.mode, "tape created");
        return tape;
    }

    /// The config this tape was created with.
    #[inline]
    pub fn config(&self) -> &Config {
        return &self.config;
    }

    /// Move the cursor to the first slot, or to stop when empty.
    pub fn rewind(&mut self) -> &mut Self {
        self.check_rep("rewind");
        self.cursor = self.head;
        self.check_rep("rewind");
        return self;
    }

    /// True when the tape holds no slots.
    pub fn is_empty(&self) -> bool {
        self.check_rep("is_empty");
        return self.len == 0;
    }

    /// True when the cursor is on the first slot. Always true when empty.
    pub fn at_start(&self) -> bool {
        self.check_rep("at_start");
        return self.cursor == self.head;
    }

    /// True when the cursor is one past the last slot.
    pub fn at_stop(&self) -> bool {
        self.check_rep("at_stop");
        return self.cursor.is_none();
    }

    /// Number of slots on the tape.
    pub fn len(&self) -> usize {
        self.check_rep("len");
        return self.len;
    }

    /// Number of slots before the cursor. Equals `len()` at stop.
    pub fn position(&self) -> usize {
        self.check_rep("position");
        return self.cursor_offset();
    }

    /// Advance the cursor one slot. A no-op at stop.
    pub fn step(&mut self) -> &mut Self {
        self.check_rep("step");
        if let Some(idx) = self.cursor {
            self.cursor = self.slots[idx].next;
        }
        self.check_rep("step");
        return self;
    }

    /// The element under the cursor.
    pub fn read(&self) -> Result<&T> {
        self.check_rep("read");
        let idx = self.cursor_slot()?;
        return Ok(&self.slots[idx].elem);
    }

    /// Insert before the cursor and move the cursor onto the new slot.
    ///
    /// At stop this appends; on an empty tape the element becomes the only
    /// slot.
    pub fn insert_left(&mut self, elem: T) -> &mut Self {
        self.check_rep("insert_left");
        let prev = match self.cursor {
            Some(idx) => self.slots[idx].prev,
            None => self.tail,
        };
        let next = self.cursor;
        let idx = self.slots.alloc(elem);
        self.link(idx, prev, next);
        self.cursor = Some(idx);
        self.len += 1;
        self.check_rep("insert_left");
        trace!(len = self.len, "insert_left");
        return self;
    }

    /// Insert after the cursor and move the cursor onto the new slot.
    ///
    /// Fails with [`TapeError::CursorAtStop`] if the cursor is at stop on a
    /// non-empty tape. On an empty tape the element becomes the only slot.
    pub fn insert_right(&mut self, elem: T) -> Result<&mut Self> {
        self.check_rep("insert_right");
        let (prev, next) = match self.cursor {
            Some(idx) => (Some(idx), self.slots[idx].next),
            None if self.len == 0 => (None, None),
            None => return Err(self.violation("insert_right", TapeError::CursorAtStop)),
        };
        let idx = self.slots.alloc(elem);
        self.link(idx, prev, next);
        self.cursor = Some(idx);
        self.len += 1;
        self.check_rep("insert_right");
        trace!(len = self.len, "insert_right");
        return Ok(self);
    }

    /// Remove the slot under the cursor and return its element. The cursor
    /// moves to the following slot, which may be stop.
    pub fn erase(&mut self) -> Result<T> {
        self.check_rep("erase");
        let idx = self.cursor_slot()?;
        let (prev, next) = (self.slots[idx].prev, self.slots[idx].next);
        match prev {
            Some(p) => self.slots[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.slots[n].prev = prev,
            None => self.tail = prev,
        }
        self.cursor = next;
        self.len -= 1;
        let elem = self.slots.release(idx);
        self.check_rep("erase");
        trace!(len = self.len, at_stop = self.cursor.is_none(), "erase");
        return Ok(elem);
    }

    /// Consume the tape, releasing every slot. Returns how many were released.
    pub fn destroy(mut self) -> usize {
        self.check_rep("destroy");
        let released = self.slots.clear();
        debug_assert_eq!(released, self.len);
        trace!(released, "tape destroyed");
        return released;
    }

    /// Render the tape, bracketing the cursor's slot.
    pub fn dump(&self) -> String
    where
        T: fmt::Display,
    {
        return self.to_string();
    }

    /// Check the representation: links agree in both directions, `len`
    /// matches the reachable slots and the live arena slots, and the cursor
    /// is either stop or a slot on the tape.
    pub fn validate(&self) -> Result<()> {
        let mut count = 0usize;
        let mut prev = None;
        let mut node = self.head;
        if let Some(idx) = self.cursor {
            if !self.slots.contains(idx) {
                return Err(TapeError::InvariantViolated(
                    "cursor addresses a slot that is not allocated",
                ));
            }
        }
        let mut cursor_found = self.cursor.is_none();
        while let Some(idx) = node {
            let Some(slot) = self.slots.get(idx) else {
                return Err(TapeError::InvariantViolated("link to a released slot"));
            };
            if slot.prev != prev {
                return Err(TapeError::InvariantViolated("back link disagrees with forward link"));
            }
            count += 1;
            if count > self.slots.live() {
                return Err(TapeError::InvariantViolated("cycle in slot links"));
            }
            cursor_found |= self.cursor == Some(idx);
            prev = node;
            node = slot.next;
        }
        if prev != self.tail {
            return Err(TapeError::InvariantViolated("tail is not the last slot"));
        }
        if count != self.len {
            return Err(TapeError::InvariantViolated("length differs from reachable slots"));
        }
        if self.slots.live() != self.len {
            return Err(TapeError::InvariantViolated("allocated slot not on the tape"));
        }
        if !cursor_found {
            return Err(TapeError::InvariantViolated("cursor addresses a slot off the tape"));
        }
        return Ok(());
    }

    fn check_rep(&self, op: &'static str) {
        if !self.config.check_invariants {
            return;
        }
        if let Err(err) = self.validate() {
            error!(op, %err, "tape representation corrupted");
            panic!("{err} (during {op})");
        }
    }

    /// Report a broken precondition according to the configured mode.
    fn violation(&self, op: &'static str, err: TapeError) -> TapeError {
        if self.config.is_strict() {
            error!(op, %err, len = self.len, "tape contract violated");
            panic!("tape contract violated in {op}: {err}");
        }
        debug!(op, %err, len = self.len, "tape contract violated");
        return err;
    }

    /// The slot under the cursor, or the error explaining why there is none.
    fn cursor_slot(&self) -> Result<SlotIdx> {
        return match self.cursor {
            Some(idx) => Ok(idx),
            None if self.len == 0 => Err(self.violation("read/erase", TapeError::EmptyTape)),
            None => Err(self.violation("read/erase", TapeError::CursorAtStop)),
        };
    }

    /// Splice an unlinked slot between `prev` and `next`, which must be
    /// adjacent (or the tape ends).
    fn link(&mut self, idx: SlotIdx, prev: Option<SlotIdx>, next: Option<SlotIdx>) {
        let slot = &mut self.slots[idx];
        slot.prev = prev;
        slot.next = next;
        match prev {
            Some(p) => self.slots[p].next = Some(idx),
            None => self.head = Some(idx),
        }
        match next {
            Some(n) => self.slots[n].prev = Some(idx),
            None => self.tail = Some(idx),
        }
    }

    fn cursor_offset(&self) -> usize {
        let Some(idx) = self.cursor else {
            return self.len;
        };
        return iter::successors(self.slots[idx].prev, |&p| self.slots[p].prev).count();
    }

    fn handles(&self) -> impl Iterator<Item = SlotIdx> + '_ {
        return iter::successors(self.head, |&idx| self.slots[idx].next);
    }

    fn elements(&self) -> impl Iterator<Item = &T> + '_ {
        return self.handles().map(|idx| &self.slots[idx].elem);
    }
}

impl<T: Clone> Tape<T> {
    /// Duplicate the tape into freshly allocated slots.
    ///
    /// The duplicate has the same elements in the same order, its cursor at
    /// the matching position, and the source's config. Nothing is shared, so
    /// later changes to either tape leave the other untouched.
    pub fn copy(&self) -> Tape<T> {
        self.check_rep("copy");
        let mut copy = Tape {
            slots: SlotArena::with_capacity(self.len),
            head: None,
            tail: None,
            cursor: None,
            len: 0,
            config: self.config,
        };
        for idx in self.handles() {
            let new = copy.slots.alloc(self.slots[idx].elem.clone());
            copy.link(new, copy.tail, None);
            copy.len += 1;
            if self.cursor == Some(idx) {
                copy.cursor = Some(new);
            }
        }
        copy.check_rep("copy");
        debug_assert_eq!(copy.len, self.len);
        trace!(len = copy.len, "tape copied");
        return copy;
    }
}

impl<T: Clone> Clone for Tape<T> {
    fn clone(&self) -> Self {
        return self.copy();
    }
}

/// Tapes are equal when they hold equal elements in the same order and their
/// cursors sit at the same position.
impl<T: PartialEq> PartialEq for Tape<T> {
    fn eq(&self, other: &Self) -> bool {
        return self.len == other.len
            && self.cursor_offset() == other.cursor_offset()
            && self.elements().eq(other.elements());
    }
}

impl<T: Eq> Eq for Tape<T> {}

/// Renders `#-a-[c]-b-#`: slots joined by single dashes, the cursor's slot
/// in brackets, and `[]` as a last entry when the cursor is at stop.
impl<T: fmt::Display> fmt::Display for Tape<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("#")?;
        for idx in self.handles() {
            let elem = &self.slots[idx].elem;
            if self.cursor == Some(idx) {
                write!(f, "-[{elem}]")?;
            } else {
                write!(f, "-{elem}")?;
            }
        }
        if self.cursor.is_none() {
            f.write_str("-[]")?;
        }
        return f.write_str("-#");
    }
}

impl<T: fmt::Debug> fmt::Debug for Tape<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f
            .debug_struct("Tape")
            .field("elements", &self.elements().collect::<Vec<_>>())
            .field("position", &self.cursor_offset())
            .field("len", &self.len)
            .field("config", &self.config)
            .finish();
    }
}
