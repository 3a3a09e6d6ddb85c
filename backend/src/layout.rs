use std::fmt::{Display, Formatter};

/// Direction of a transform. Plans built for one direction never serve the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Forward,
    Inverse,
}

impl Direction {
    /// Host flag convention: `0` is forward, any other value is inverse.
    pub fn from_flag(is_inverse: i32) -> Self {
        if is_inverse != 0 {
            Direction::Inverse
        } else {
            Direction::Forward
        }
    }

    pub fn flag(&self) -> i32 {
        match self {
            Direction::Forward => 0,
            Direction::Inverse => 1,
        }
    }

    pub fn is_inverse(&self) -> bool {
        *self == Direction::Inverse
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Forward => write!(f, "forward"),
            Direction::Inverse => write!(f, "inverse"),
        }
    }
}

/// Complex plans map n complex values to n complex values. Real plans map n
/// real values to n/2+1 complex bins (and back), keyed by the real length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PlanFamily {
    Complex,
    Real,
}

impl Display for PlanFamily {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanFamily::Complex => write!(f, "complex"),
            PlanFamily::Real => write!(f, "real"),
        }
    }
}

/// Identity of a plan: at most one live plan per key within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlanKey {
    pub family: PlanFamily,
    pub n: usize,
    pub direction: Direction,
}

impl PlanKey {
    pub fn new(family: PlanFamily, n: usize, direction: Direction) -> Self {
        Self { family, n, direction }
    }

    /// Number of values the plan consumes.
    pub fn input_len(&self) -> usize {
        match (self.family, self.direction) {
            (PlanFamily::Real, Direction::Inverse) => self.n / 2 + 1,
            _ => self.n,
        }
    }

    /// Number of values the plan produces.
    pub fn output_len(&self) -> usize {
        match (self.family, self.direction) {
            (PlanFamily::Real, Direction::Forward) => self.n / 2 + 1,
            _ => self.n,
        }
    }

    pub(crate) fn entry(&self) -> Entry {
        match (self.family, self.direction) {
            (PlanFamily::Complex, _) => Entry::Complex,
            (PlanFamily::Real, Direction::Forward) => Entry::RealForward,
            (PlanFamily::Real, Direction::Inverse) => Entry::RealInverse,
        }
    }
}

impl Display for PlanKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.family, self.direction, self.n)
    }
}

/// Execution entry points of a [`Backend`](crate::Backend).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    Complex,
    RealForward,
    RealInverse,
}

impl Display for Entry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Entry::Complex => write!(f, "complex"),
            Entry::RealForward => write!(f, "real-to-complex"),
            Entry::RealInverse => write!(f, "complex-to-real"),
        }
    }
}
