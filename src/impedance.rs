// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Pi-model parameters of series branches.
//!
//! Topology processing never reads these; they are carried for admittance
//! assembly, which happens outside this crate.

use num_complex::Complex64;

use crate::Error;

/// A 3x3 real matrix, indexed `[row][column]` over phases A, B and C.
pub type Matrix3 = [[f64; 3]; 3];

/// A 3x3 complex matrix, indexed `[row][column]` over phases A, B and C.
pub type ComplexMatrix3 = [[Complex64; 3]; 3];

/// Series impedance and shunt susceptance of a pi-model branch, in per-unit.
///
/// The shunt susceptance is split into a from-side and a to-side part, which
/// need not be equal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Impedance {
    pub r1: f64,
    pub x1: f64,
    pub from_b1: f64,
    pub to_b1: f64,
    pub r3: Matrix3,
    pub x3: Matrix3,
    pub from_b3: Matrix3,
    pub to_b3: Matrix3,
}

impl Impedance {
    /// Creates a positive-sequence only impedance with a symmetric shunt.
    pub fn positive_sequence(r1: f64, x1: f64, b1: f64) -> Self {
        Self {
            r1,
            x1,
            from_b1: b1 / 2.0,
            to_b1: b1 / 2.0,
            ..Default::default()
        }
    }

    pub fn positive_sequence_series_impedance(&self) -> Complex64 {
        Complex64::new(self.r1, self.x1)
    }

    /// Returns the inverse of the series impedance, or zero for a branch
    /// without impedance.
    pub fn positive_sequence_series_admittance(&self) -> Complex64 {
        let z = self.positive_sequence_series_impedance();
        if z.norm_sqr() == 0.0 {
            return Complex64::default();
        }
        z.inv()
    }

    pub fn positive_sequence_from_shunt_susceptance(&self) -> Complex64 {
        Complex64::new(0.0, self.from_b1)
    }

    pub fn positive_sequence_to_shunt_susceptance(&self) -> Complex64 {
        Complex64::new(0.0, self.to_b1)
    }

    pub fn three_phase_series_impedance(&self) -> ComplexMatrix3 {
        combine(&self.r3, &self.x3)
    }

    /// Returns the inverse of the three-phase series impedance matrix.
    ///
    /// Returns an error if the matrix is singular.
    pub fn three_phase_series_admittance(&self) -> Result<ComplexMatrix3, Error> {
        invert(&self.three_phase_series_impedance())
    }

    pub fn three_phase_from_shunt_susceptance(&self) -> ComplexMatrix3 {
        combine(&[[0.0; 3]; 3], &self.from_b3)
    }

    pub fn three_phase_to_shunt_susceptance(&self) -> ComplexMatrix3 {
        combine(&[[0.0; 3]; 3], &self.to_b3)
    }
}

/// Two branches in series: series terms and shunt terms both add up.
impl std::ops::Add for Impedance {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let sum = |a: &Matrix3, b: &Matrix3| {
            let mut out = [[0.0; 3]; 3];
            for (i, row) in out.iter_mut().enumerate() {
                for (j, cell) in row.iter_mut().enumerate() {
                    *cell = a[i][j] + b[i][j];
                }
            }
            out
        };
        Self {
            r1: self.r1 + rhs.r1,
            x1: self.x1 + rhs.x1,
            from_b1: self.from_b1 + rhs.from_b1,
            to_b1: self.to_b1 + rhs.to_b1,
            r3: sum(&self.r3, &rhs.r3),
            x3: sum(&self.x3, &rhs.x3),
            from_b3: sum(&self.from_b3, &rhs.from_b3),
            to_b3: sum(&self.to_b3, &rhs.to_b3),
        }
    }
}

impl std::iter::Sum for Impedance {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Impedance::default(), |acc, z| acc + z)
    }
}

fn combine(re: &Matrix3, im: &Matrix3) -> ComplexMatrix3 {
    let mut out = [[Complex64::default(); 3]; 3];
    for (i, row) in out.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = Complex64::new(re[i][j], im[i][j]);
        }
    }
    out
}

/// Inverts a 3x3 complex matrix through its adjugate.
fn invert(m: &ComplexMatrix3) -> Result<ComplexMatrix3, Error> {
    let cofactor = |r: usize, c: usize| {
        let (r1, r2) = ((r + 1) % 3, (r + 2) % 3);
        let (c1, c2) = ((c + 1) % 3, (c + 2) % 3);
        m[r1][c1] * m[r2][c2] - m[r1][c2] * m[r2][c1]
    };

    let det = m[0][0] * cofactor(0, 0) + m[0][1] * cofactor(0, 1) + m[0][2] * cofactor(0, 2);
    if det.norm() < f64::EPSILON {
        return Err(Error::invalid_state(
            "Three-phase series impedance matrix is singular.",
        ));
    }

    let mut out = [[Complex64::default(); 3]; 3];
    for (i, row) in out.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            // adjugate is the transposed cofactor matrix
            *cell = cofactor(j, i) / det;
        }
    }
    Ok(out)
}
