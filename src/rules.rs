use std::str::FromStr;

use thiserror::Error;

/// Rules of Conway's Game of Life.
pub const B3S23: RuleSet = RuleSet::new(0b1000, 0b1100);

/// # Representation
/// Life rules are represented as
/// ```notrust
/// |------birth------|
/// 0000_0000_0000_0000_0000_0000_0000_0000
///                     |----survival-----|
/// ```
///
/// Bit `i` of a half being on means a neighbor count of `i` triggers that
/// outcome. Conway's b3s23 survives at 2-3 neighbors, which is the same as
/// dying at 1 or fewer, or 4 or more.
///
/// # Examples
/// ```notrust
/// b3s23:                0000_0000_0000_1000_0000_0000_0000_1100
///
/// b0s0:                 0000_0000_0000_0001_0000_0000_0000_0001
/// b012345678s012345678: 0000_0001_1111_1111_0000_0001_1111_1111
/// ```
///
/// See: https://conwaylife.com/wiki/Rulestring
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSet {
    rule: u32,
}

impl Default for RuleSet {
    fn default() -> Self {
        B3S23
    }
}

impl RuleSet {
    /// Create a new `RuleSet` for the given births and survivals. For both `b` and
    /// `s`, numbers are set on a bit basis. For instance if bit `i` in `b` is on, it
    /// means `i` is included in the set of births. Any bit past the 8th is ignored.
    pub const fn new(b: u16, s: u16) -> Self {
        let b = b & 0x1FF;
        let s = s & 0x1FF;

        Self {
            rule: (b as u32) << 16 | s as u32,
        }
    }

    pub fn births(&self) -> u16 {
        ((self.rule & 0x1FF_0000) >> 0x10) as u16
    }

    pub fn survivals(&self) -> u16 {
        (self.rule & 0x1FF) as u16
    }

    /// Whether an empty cell with `n` live neighbors comes alive.
    pub fn born(&self, n: usize) -> bool {
        n <= 8 && self.births() & (1 << n) != 0
    }

    /// Whether an alive cell with `n` live neighbors stays alive.
    pub fn survives(&self, n: usize) -> bool {
        n <= 8 && self.survivals() & (1 << n) != 0
    }
}

#[derive(Debug, Error)]
pub enum RuleError {
    #[error("Invalid character in rule string: '{got}'")]
    InvalidChar { got: char },

    #[error("Neighbor count out of range: {got}")]
    OutOfRange { got: u32 },
}

impl FromStr for RuleSet {
    type Err = RuleError;

    /// Parse rules that look like `b3s23`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        enum State {
            Birth,
            Survival,
        }

        let mut state = State::Birth;
        let mut rule = 0;

        for c in s.chars() {
            match c {
                'b' | 'B' => {
                    state = State::Birth;
                }
                's' | 'S' => {
                    state = State::Survival;
                }
                n => {
                    let n = n.to_digit(10).ok_or(RuleError::InvalidChar { got: c })?;

                    if n > 8 {
                        return Err(RuleError::OutOfRange { got: n });
                    }

                    match state {
                        State::Survival => {
                            rule |= 1 << n;
                        }
                        State::Birth => {
                            rule |= 1 << (n + 0x10);
                        }
                    }
                }
            }
        }

        Ok(RuleSet { rule })
    }
}
