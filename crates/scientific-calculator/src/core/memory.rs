//! Single-slot memory register (MS, M+, M-, MR, MC)

use crate::core::{CalcError, CalcResult};

/// Numeric memory register, zero at start
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MemoryRegister {
    value: f64,
}

impl MemoryRegister {
    /// Creates a register holding zero
    #[must_use]
    pub const fn new() -> Self {
        Self { value: 0.0 }
    }

    /// MS: overwrites the register with `current`
    pub fn store(&mut self, current: f64) -> CalcResult<()> {
        self.value = Self::checked(current)?;
        Ok(())
    }

    /// M+: adds `current` to the register
    pub fn add(&mut self, current: f64) -> CalcResult<()> {
        self.update(self.value + Self::checked(current)?)
    }

    /// M-: subtracts `current` from the register
    pub fn subtract(&mut self, current: f64) -> CalcResult<()> {
        self.update(self.value - Self::checked(current)?)
    }

    // An overflowing sum leaves the register untouched
    fn update(&mut self, next: f64) -> CalcResult<()> {
        if !next.is_finite() {
            return Err(CalcError::NonFinite(next));
        }
        self.value = next;
        Ok(())
    }

    /// MR: returns the register value
    #[must_use]
    pub const fn recall(&self) -> f64 {
        self.value
    }

    /// MC: resets the register to zero
    pub fn clear(&mut self) {
        self.value = 0.0;
    }

    // NaN and infinities are refused
    fn checked(current: f64) -> CalcResult<f64> {
        if current.is_finite() {
            Ok(current)
        } else {
            Err(CalcError::InvalidOperand(current))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        assert_eq!(MemoryRegister::new().recall(), 0.0);
        assert_eq!(MemoryRegister::default().recall(), 0.0);
    }

    #[test]
    fn test_store_add_subtract_clear_sequence() {
        let mut memory = MemoryRegister::new();
        memory.store(5.0).unwrap();
        assert_eq!(memory.recall(), 5.0);
        memory.add(3.0).unwrap();
        assert_eq!(memory.recall(), 8.0);
        memory.subtract(10.0).unwrap();
        assert_eq!(memory.recall(), -2.0);
        memory.clear();
        assert_eq!(memory.recall(), 0.0);
    }

    #[test]
    fn test_store_overwrites() {
        let mut memory = MemoryRegister::new();
        memory.store(5.0).unwrap();
        memory.store(7.5).unwrap();
        assert_eq!(memory.recall(), 7.5);
    }

    #[test]
    fn test_recall_does_not_mutate() {
        let mut memory = MemoryRegister::new();
        memory.store(4.0).unwrap();
        let _ = memory.recall();
        assert_eq!(memory.recall(), 4.0);
    }

    #[test]
    fn test_nan_rejected_and_register_unchanged() {
        let mut memory = MemoryRegister::new();
        memory.store(9.0).unwrap();
        assert!(matches!(
            memory.add(f64::NAN),
            Err(CalcError::InvalidOperand(_))
        ));
        assert!(memory.store(f64::INFINITY).is_err());
        assert!(memory.subtract(f64::NEG_INFINITY).is_err());
        assert_eq!(memory.recall(), 9.0);
    }

    #[test]
    fn test_overflowing_sum_rejected() {
        let mut memory = MemoryRegister::new();
        memory.store(f64::MAX).unwrap();
        assert!(matches!(memory.add(f64::MAX), Err(CalcError::NonFinite(_))));
        assert!(memory.subtract(-f64::MAX).is_err());
        assert_eq!(memory.recall(), f64::MAX);
    }
}
