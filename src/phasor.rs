// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Voltage phasor records attached to nodes.

use num_complex::Complex64;

use crate::{PhaseConfiguration, VoltageLevel};

/// A single phasor: a magnitude in volts and an angle in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Phasor {
    pub magnitude: f64,
    pub angle_degrees: f64,
}

impl Phasor {
    pub fn new(magnitude: f64, angle_degrees: f64) -> Self {
        Self {
            magnitude,
            angle_degrees,
        }
    }

    /// Returns the phasor in rectangular form.
    pub fn complex(&self) -> Complex64 {
        Complex64::from_polar(self.magnitude, self.angle_degrees.to_radians())
    }

    /// Returns the magnitude relative to the line-to-neutral voltage of
    /// `base`.
    pub fn per_unit_magnitude(&self, base: &VoltageLevel) -> f64 {
        self.magnitude / base.line_to_neutral_volts()
    }

    /// Returns the phasor in rectangular form, relative to the line-to-neutral
    /// voltage of `base`.
    pub fn per_unit_complex(&self, base: &VoltageLevel) -> Complex64 {
        Complex64::from_polar(
            self.per_unit_magnitude(base),
            self.angle_degrees.to_radians(),
        )
    }
}

/// A measured value and its post-processed estimate, for one sequence or
/// phase component.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PhasorChannel {
    /// Raw telemetry.
    pub measurement: Phasor,
    /// Output of the state estimator.
    pub estimate: Phasor,
    /// Whether the measurement may be used by the state estimator.
    pub include_in_estimator: bool,
}

impl PhasorChannel {
    /// Creates a channel with the given measurement, eligible for estimation.
    pub fn measured(magnitude: f64, angle_degrees: f64) -> Self {
        Self {
            measurement: Phasor::new(magnitude, angle_degrees),
            estimate: Phasor::default(),
            include_in_estimator: true,
        }
    }
}

/// The voltage phasors of one node, per sequence and per phase.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VoltagePhasorGroup {
    /// Telemetry status word, as received.
    pub status: u32,
    /// Whether telemetry reported this group during the current cycle.
    pub measurement_was_reported: bool,
    pub positive_sequence: PhasorChannel,
    pub phase_a: PhasorChannel,
    pub phase_b: PhasorChannel,
    pub phase_c: PhasorChannel,
}

impl VoltagePhasorGroup {
    /// Creates a reported group with only a positive-sequence measurement.
    pub fn positive_sequence(magnitude: f64, angle_degrees: f64) -> Self {
        Self {
            measurement_was_reported: true,
            positive_sequence: PhasorChannel::measured(magnitude, angle_degrees),
            ..Default::default()
        }
    }

    /// Returns true if the group has measurements the state estimator can use
    /// under the given phase configuration.
    pub fn is_estimator_eligible(&self, phase_configuration: PhaseConfiguration) -> bool {
        match phase_configuration {
            PhaseConfiguration::PositiveSequence => self.positive_sequence.include_in_estimator,
            PhaseConfiguration::ThreePhase => {
                self.phase_a.include_in_estimator
                    && self.phase_b.include_in_estimator
                    && self.phase_c.include_in_estimator
            }
        }
    }

    /// Copies the status word and measured magnitudes and angles of `source`
    /// into `self`.  Phase measurements are only copied in the three-phase
    /// configuration.
    ///
    /// Returns true if any value of `self` changed.
    pub(crate) fn copy_measurements_from(
        &mut self,
        source: &VoltagePhasorGroup,
        phase_configuration: PhaseConfiguration,
    ) -> bool {
        let before = self.clone();

        self.status = source.status;
        self.positive_sequence.measurement = source.positive_sequence.measurement;
        if phase_configuration == PhaseConfiguration::ThreePhase {
            self.phase_a.measurement = source.phase_a.measurement;
            self.phase_b.measurement = source.phase_b.measurement;
            self.phase_c.measurement = source.phase_c.measurement;
        }

        *self != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_unit() {
        let base = VoltageLevel::new(1, 500.0);
        let phasor = Phasor::new(base.line_to_neutral_volts() * 1.02, 90.0);
        assert!((phasor.per_unit_magnitude(&base) - 1.02).abs() < 1e-12);

        let pu = phasor.per_unit_complex(&base);
        assert!(pu.re.abs() < 1e-12);
        assert!((pu.im - 1.02).abs() < 1e-12);
    }

    #[test]
    fn test_estimator_eligibility() {
        let mut group = VoltagePhasorGroup::positive_sequence(1.0, 0.0);
        assert!(group.is_estimator_eligible(PhaseConfiguration::PositiveSequence));
        assert!(!group.is_estimator_eligible(PhaseConfiguration::ThreePhase));

        group.phase_a.include_in_estimator = true;
        group.phase_b.include_in_estimator = true;
        assert!(!group.is_estimator_eligible(PhaseConfiguration::ThreePhase));
        group.phase_c.include_in_estimator = true;
        assert!(group.is_estimator_eligible(PhaseConfiguration::ThreePhase));
    }

    #[test]
    fn test_copy_measurements() {
        let mut source = VoltagePhasorGroup::positive_sequence(100.0, 10.0);
        source.status = 3;
        source.phase_a = PhasorChannel::measured(101.0, 11.0);

        let mut target = VoltagePhasorGroup::default();
        assert!(target.copy_measurements_from(&source, PhaseConfiguration::PositiveSequence));
        assert_eq!(target.status, 3);
        assert_eq!(target.positive_sequence.measurement, Phasor::new(100.0, 10.0));
        assert_eq!(target.phase_a.measurement, Phasor::default());
        assert!(!target.measurement_was_reported);
        assert!(!target.copy_measurements_from(&source, PhaseConfiguration::PositiveSequence));

        assert!(target.copy_measurements_from(&source, PhaseConfiguration::ThreePhase));
        assert_eq!(target.phase_a.measurement, Phasor::new(101.0, 11.0));
    }
}
