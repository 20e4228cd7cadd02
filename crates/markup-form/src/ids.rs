//! Synthetic field identifiers
//!
//! Widgets constructed without a label or explicit name still need a name and
//! id attribute. Each [`crate::Form`] owns one generator; standalone widget
//! users can hold their own. There is no process-global counter, so tests and
//! concurrent forms stay deterministic.

/// Monotonically increasing identifier sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IdGen {
    next: u64,
}

impl IdGen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the sequence at `n` instead of zero.
    pub fn starting_at(n: u64) -> Self {
        Self { next: n }
    }

    /// Produce the next identifier: `field0`, `field1`, ...
    pub fn next_id(&mut self) -> String {
        let id = format!("field{}", self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence() {
        let mut ids = IdGen::new();
        assert_eq!(ids.next_id(), "field0");
        assert_eq!(ids.next_id(), "field1");
        assert_eq!(ids.next_id(), "field2");
    }

    #[test]
    fn test_generators_are_independent() {
        let mut a = IdGen::new();
        let mut b = IdGen::new();
        assert_eq!(a.next_id(), "field0");
        assert_eq!(b.next_id(), "field0");
    }

    #[test]
    fn test_starting_at() {
        let mut ids = IdGen::starting_at(7);
        assert_eq!(ids.next_id(), "field7");
    }
}
