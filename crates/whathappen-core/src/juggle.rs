//! Working values of the juggling loop.
//!
//! Three integers are updated in sequence: `a` from the old `b` and `c`, then
//! `b` from the new `a`, then `c` from the new `a` and `b`. The loop runs
//! while `b < c && a < b`. Arithmetic wraps like 32-bit integers.

/// Initial values for a [`Juggle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seed {
    /// First working value.
    pub a: i32,
    /// Second working value.
    pub b: i32,
    /// Third working value.
    pub c: i32,
}

impl Seed {
    /// The fixed seed `(2, 3, 4)`. Converges after exactly one iteration.
    pub const REFERENCE: Self = Self { a: 2, b: 3, c: 4 };
}

impl Default for Seed {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// Loop-local working values. Not part of the client state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Juggle {
    a: i32,
    b: i32,
    c: i32,
}

impl Juggle {
    /// Start from the given seed.
    pub fn new(seed: Seed) -> Self {
        Self { a: seed.a, b: seed.b, c: seed.c }
    }

    /// Loop guard: `b < c && a < b`.
    pub fn should_continue(&self) -> bool {
        self.b < self.c && self.a < self.b
    }

    /// Apply one sequential update.
    pub fn advance(&mut self) {
        self.a = self.c.wrapping_sub(self.b);
        self.b = self.b.wrapping_sub(self.a);
        self.c = self.b.wrapping_mul(self.a);
    }

    /// Combined result `(a * b + c) * length`.
    pub fn handle(&self, length: i32) -> i32 {
        self.a.wrapping_mul(self.b).wrapping_add(self.c).wrapping_mul(length)
    }

    /// Current `(a, b, c)`.
    pub fn values(&self) -> (i32, i32, i32) {
        (self.a, self.b, self.c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_seed_converges_in_one_step() {
        let mut juggle = Juggle::new(Seed::REFERENCE);
        assert!(juggle.should_continue());

        juggle.advance();
        assert_eq!(juggle.values(), (1, 2, 2));
        assert!(!juggle.should_continue());
        assert_eq!(juggle.handle(10), 40);
    }

    #[test]
    fn updates_are_sequential() {
        // a' = 9 - 5 = 4, b' = 5 - 4 = 1 (uses new a), c' = 1 * 4 = 4 (uses new a and b)
        let mut juggle = Juggle::new(Seed { a: 0, b: 5, c: 9 });
        juggle.advance();
        assert_eq!(juggle.values(), (4, 1, 4));
    }

    #[test]
    fn guard_fails_immediately_when_unordered() {
        let juggle = Juggle::new(Seed { a: 3, b: 3, c: 4 });
        assert!(!juggle.should_continue());
        assert_eq!(juggle.handle(10), 130);
    }

    #[test]
    fn arithmetic_wraps() {
        let mut juggle = Juggle::new(Seed { a: i32::MIN, b: i32::MIN + 1, c: i32::MAX });
        assert!(juggle.should_continue());

        // a = MAX - (MIN + 1) wraps to -2, b = (MIN + 1) + 2, c = b * -2 wraps to -6
        juggle.advance();
        assert_eq!(juggle.values(), (-2, i32::MIN + 3, -6));
        assert!(!juggle.should_continue());

        // a * b wraps to -6, plus c is -12, times MAX wraps to 12
        assert_eq!(juggle.handle(i32::MAX), 12);
        assert_eq!(juggle.handle(10), -120);
    }
}
