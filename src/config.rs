//! Per-tape behaviour switches.
//!
//! A tape either reports contract violations as `Err` values
//! ([`Mode::Checked`]) or panics on them ([`Mode::Strict`]). The default
//! mode follows the `strict` cargo feature. Representation checks around
//! every operation are on in debug builds and off in release builds unless
//! requested explicitly.

/// How a tape reacts when a caller breaks an operation's precondition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Return `Err(TapeError)` to the caller.
    Checked,
    /// Log the violation and panic.
    Strict,
}

impl Default for Mode {
    fn default() -> Self {
        if cfg!(feature = "strict") {
            return Mode::Strict;
        }
        return Mode::Checked;
    }
}

/// Behaviour switches fixed when a tape is created and inherited by its copies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Reaction to a broken precondition.
    pub mode: Mode,
    /// Walk the whole tape before and after each public operation.
    pub check_invariants: bool,
}

impl Default for Config {
    fn default() -> Self {
        return Config {
            mode: Mode::default(),
            check_invariants: cfg!(debug_assertions),
        };
    }
}

impl Config {
    /// Default config with [`Mode::Strict`].
    pub fn strict() -> Config {
        return Config {
            mode: Mode::Strict,
            ..Config::default()
        };
    }

    /// Default config with [`Mode::Checked`].
    pub fn checked() -> Config {
        return Config {
            mode: Mode::Checked,
            ..Config::default()
        };
    }

    /// Turn the representation check around each operation on or off.
    pub fn with_invariant_checks(mut self, enabled: bool) -> Config {
        self.check_invariants = enabled;
        return self;
    }

    /// True when contract violations panic.
    #[inline]
    pub fn is_strict(&self) -> bool {
        return self.mode == Mode::Strict;
    }
}
