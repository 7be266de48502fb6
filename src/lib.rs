//! A cursor-addressed tape.
//!
//! A [`Tape`] is an ordered sequence of slots with one movable cursor. The
//! cursor addresses a slot or the stop position one past the end. Elements
//! are inserted to the left or right of the cursor, the cursor steps forward
//! one slot at a time, and the slot under the cursor can be read or erased.
//!
//! # Quick Start
//!
//! ```
//! use tape::{Config, Tape, TapeError};
//!
//! let mut tape = Tape::with_config(Config::checked());
//! tape.insert_left('a');
//! tape.insert_right('b')?;
//! tape.insert_left('c');
//! assert_eq!(tape.dump(), "#-a-[c]-b-#");
//!
//! tape.step().step();
//! assert!(tape.at_stop());
//! assert_eq!(tape.read(), Err(TapeError::CursorAtStop));
//! # Ok::<(), TapeError>(())
//! ```
//!
//! # Contract violations
//!
//! Reading or erasing at stop, and inserting right of stop on a non-empty
//! tape, break the operation's precondition. A tape in [`Mode::Checked`]
//! returns a [`TapeError`]; a tape in [`Mode::Strict`] panics. See
//! [`Config`].

pub mod arena;
pub mod config;
pub mod error;
pub mod tape;

pub use config::{Config, Mode};
pub use error::{Result, TapeError};
pub use tape::Tape;
