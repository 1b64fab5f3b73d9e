// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Nominal voltage levels.

/// A nominal line-to-line voltage magnitude, in kV.
///
/// `VoltageLevel`s are plain values: elements hold copies, never references,
/// and two levels are equal when both their ids and magnitudes are.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VoltageLevel {
    pub internal_id: u64,
    pub value: f64,
}

impl VoltageLevel {
    /// Creates a new voltage level of `value` kV.
    pub fn new(internal_id: u64, value: f64) -> Self {
        Self { internal_id, value }
    }

    /// Returns the line-to-neutral base voltage in volts, which per-unit
    /// phasor magnitudes are relative to.
    pub fn line_to_neutral_volts(&self) -> f64 {
        self.value * 1000.0 / 3.0_f64.sqrt()
    }
}

impl std::fmt::Display for VoltageLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} kV", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality() {
        assert_eq!(VoltageLevel::new(1, 500.0), VoltageLevel::new(1, 500.0));
        assert_ne!(VoltageLevel::new(1, 500.0), VoltageLevel::new(2, 500.0));
        assert_ne!(VoltageLevel::new(1, 500.0), VoltageLevel::new(1, 230.0));
    }

    #[test]
    fn test_line_to_neutral() {
        let level = VoltageLevel::new(1, 500.0);
        assert!((level.line_to_neutral_volts() - 288_675.134_594_8).abs() < 1e-6);
        assert_eq!(level.to_string(), "500 kV");
    }
}
