use crate::cell::Cell;
use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Transition function applied to every cell of every generation in a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Ruleset {
    /// `l + c + r`
    Sum,
    /// `(l + c) + (r + c)`
    CrossSum,
    /// Products of the non-zero operands, zero absorbing.
    Multiplicative,
    /// `(r << l) ^ c`
    ShiftRightByLeft,
    /// `(l << r) ^ c`
    ShiftLeftByRight,
    /// `(l | r) ^ c`
    OrXor,
}

impl Ruleset {
    pub const ALL: [Ruleset; 6] = [
        Ruleset::Sum,
        Ruleset::CrossSum,
        Ruleset::Multiplicative,
        Ruleset::ShiftRightByLeft,
        Ruleset::ShiftLeftByRight,
        Ruleset::OrXor,
    ];

    pub fn id(self) -> u8 {
        match self {
            Ruleset::Sum => 1,
            Ruleset::CrossSum => 2,
            Ruleset::Multiplicative => 3,
            Ruleset::ShiftRightByLeft => 4,
            Ruleset::ShiftLeftByRight => 5,
            Ruleset::OrXor => 6,
        }
    }

    pub fn from_id(id: u8) -> Result<Self, ConfigError> {
        Self::ALL
            .into_iter()
            .find(|ruleset| ruleset.id() == id)
            .ok_or_else(|| ConfigError::UnknownRuleset(id.to_string()))
    }

    pub fn name(self) -> &'static str {
        match self {
            Ruleset::Sum => "sum",
            Ruleset::CrossSum => "cross-sum",
            Ruleset::Multiplicative => "multiplicative",
            Ruleset::ShiftRightByLeft => "shift-right",
            Ruleset::ShiftLeftByRight => "shift-left",
            Ruleset::OrXor => "or-xor",
        }
    }

    /// Bit manipulation rules, which grow best from a single start cell.
    pub fn is_bitwise(self) -> bool {
        matches!(
            self,
            Ruleset::ShiftRightByLeft | Ruleset::ShiftLeftByRight | Ruleset::OrXor
        )
    }

    pub fn apply(self, left: Cell, center: Cell, right: Cell) -> Cell {
        let l = u32::from(left.value());
        let c = u32::from(center.value());
        let r = u32::from(right.value());
        let raw = match self {
            Ruleset::Sum => l + c + r,
            Ruleset::CrossSum => (l + c) + (r + c),
            Ruleset::Multiplicative => multiplicative(l, c, r),
            // Shift amounts are at most NUM_STATES - 1, far below u32's width.
            Ruleset::ShiftRightByLeft => (r << l) ^ c,
            Ruleset::ShiftLeftByRight => (l << r) ^ c,
            Ruleset::OrXor => (l | r) ^ c,
        };
        Cell::reduce(raw)
    }
}

fn multiplicative(l: u32, c: u32, r: u32) -> u32 {
    match (l == 0, c == 0, r == 0) {
        (true, true, true) => 0,
        (true, true, false) => r,
        (true, false, true) => c,
        (false, true, true) => l,
        (true, false, false) => c * r,
        (false, false, true) => c * l,
        (false, _, false) => l * r,
    }
}

/// Next state of the cell whose previous neighborhood was `(left, center, right)`.
pub fn transition(left: Cell, center: Cell, right: Cell, ruleset: Ruleset) -> Cell {
    ruleset.apply(left, center, right)
}

impl fmt::Display for Ruleset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Ruleset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(id) = trimmed.parse::<u8>() {
            return Self::from_id(id);
        }
        Self::ALL
            .into_iter()
            .find(|ruleset| ruleset.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ConfigError::UnknownRuleset(trimmed.to_string()))
    }
}
