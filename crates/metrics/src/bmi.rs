use std::fmt;
use vitals_core::{round_to, Result, VitalsError};

/// Lower BMI bound of the healthy range.
pub const HEALTHY_BMI_LOW: f64 = 18.5;
/// Upper BMI bound of the healthy range.
pub const HEALTHY_BMI_HIGH: f64 = 24.9;

/// Body-mass index, unrounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bmi(f64);

impl Bmi {
    /// `weight_kg / height_m²`.
    pub fn from_metric(height_cm: f64, weight_kg: f64) -> Result<Self> {
        check_positive("height_cm", height_cm)?;
        check_positive("weight_kg", weight_kg)?;
        let height_m = height_cm / 100.0;
        Ok(Self(weight_kg / (height_m * height_m)))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Value rounded to one decimal place, as displayed.
    pub fn rounded(self) -> f64 {
        round_to(self.0, 1)
    }

    pub fn category(self) -> BmiCategory {
        BmiCategory::of(self.0)
    }
}

impl fmt::Display for Bmi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn of(bmi: f64) -> Self {
        match bmi {
            b if b < 18.5 => Self::Underweight,
            b if b < 25.0 => Self::Normal,
            b if b < 30.0 => Self::Overweight,
            _ => Self::Obese,
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Underweight => "Underweight",
            Self::Normal      => "Normal weight",
            Self::Overweight  => "Overweight",
            Self::Obese       => "Obese",
        })
    }
}

/// Whole-kilogram weight range that keeps BMI within the healthy band
/// for the given height.
pub fn healthy_weight_range(height_cm: f64) -> Result<(f64, f64)> {
    check_positive("height_cm", height_cm)?;
    let height_m = height_cm / 100.0;
    let squared = height_m * height_m;
    Ok(((squared * HEALTHY_BMI_LOW).round(), (squared * HEALTHY_BMI_HIGH).round()))
}

fn check_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(VitalsError::InvalidMeasurement(format!(
            "{name} must be a positive number, got {value}"
        )))
    }
}
