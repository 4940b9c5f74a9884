use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Mantissas (in tenths) of the values a nice ceiling may land on.
///
/// Each entry is a whole multiple of a 1, 2 or 5 step one decade below, so
/// ticks drawn from zero always hit the ceiling exactly.
const NICE_MANTISSA_TENTHS: [u32; 18] = [
    10, 12, 14, 15, 16, 18, 20, 25, 30, 35, 40, 45, 50, 60, 70, 80, 90, 100,
];

const TICK_STEP_FACTORS: [u32; 3] = [1, 2, 5];
const MAX_TICK_INTERVALS: u64 = 10;
const MANTISSA_TOLERANCE: f64 = 1e-9;

/// Linear mapping from a finite domain interval to a pixel range.
///
/// The range may be reversed (`range_start > range_end`), which is how the
/// magnitude axis grows upward on a downward-growing canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        let (domain_start, domain_end) = domain;
        let (range_start, range_end) = range;
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    pub fn map(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        Ok(self.range_start + normalized * (self.range_end - self.range_start))
    }

    pub fn invert(self, pixel: f64) -> ChartResult<f64> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }

        let range_span = self.range_end - self.range_start;
        if range_span == 0.0 {
            return Ok(self.domain_start);
        }
        let normalized = (pixel - self.range_start) / range_span;
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }

    /// Axis ticks from zero up to the larger domain bound.
    #[must_use]
    pub fn ticks(self) -> NiceTicks {
        nice_ticks(self.domain_start.max(self.domain_end))
    }
}

/// Rounds `raw` up to the next readable axis boundary.
///
/// The result is the smallest value of the form `m × 10^k` with `m` taken
/// from a fixed 1/2/5-compatible mantissa ladder that is not below `raw`.
/// Idempotent and monotonic. Non-finite or non-positive input yields `1.0`.
///
/// Near the ends of the `f64` range, where no ladder value is representable
/// or rounding lands below `raw`, the result is `raw` itself (or `f64::MAX`
/// on overflow), so it is always finite, positive and `>= raw`.
#[must_use]
pub fn nice_ceil(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }

    let (tenths, exponent) = decade_mantissa(raw);
    let mantissa = NICE_MANTISSA_TENTHS
        .iter()
        .copied()
        .find(|candidate| f64::from(*candidate) >= tenths - MANTISSA_TOLERANCE)
        .unwrap_or(100);
    let ceiling = scale_by_power_of_ten(f64::from(mantissa), exponent - 1);
    if !ceiling.is_finite() {
        f64::MAX
    } else if ceiling < raw {
        raw
    } else {
        ceiling
    }
}

/// Splits a positive value into a mantissa in tenths (`[10, 100)`) and a
/// decimal exponent, so that `value = tenths × 10^(exponent - 1)`.
fn decade_mantissa(value: f64) -> (f64, i32) {
    let mut exponent = value.log10().floor() as i32;
    let mut tenths = scale_by_power_of_ten(value, 1 - exponent);
    // log10 can land one decade off right at powers of ten.
    if tenths >= 100.0 {
        exponent += 1;
        tenths = scale_by_power_of_ten(value, 1 - exponent);
    } else if tenths < 10.0 {
        exponent -= 1;
        tenths = scale_by_power_of_ten(value, 1 - exponent);
    }
    (tenths, exponent)
}

/// Powers of ten beyond this are applied in two halves.
const SINGLE_STEP_EXPONENT_LIMIT: i32 = 300;

/// `value × 10^exponent`. Large exponents are split so neither power of ten
/// overflows to infinity or underflows to zero.
fn scale_by_power_of_ten(value: f64, exponent: i32) -> f64 {
    if exponent.abs() <= SINGLE_STEP_EXPONENT_LIMIT {
        return apply_power_of_ten(value, exponent);
    }
    let half = exponent / 2;
    apply_power_of_ten(apply_power_of_ten(value, half), exponent - half)
}

fn apply_power_of_ten(value: f64, exponent: i32) -> f64 {
    if exponent >= 0 {
        value * 10f64.powi(exponent)
    } else {
        value / 10f64.powi(-exponent)
    }
}

/// One tick step of the form `factor × 10^exponent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickStep {
    pub factor: u32,
    pub exponent: i32,
}

impl TickStep {
    #[must_use]
    pub fn value(self) -> f64 {
        scale_by_power_of_ten(f64::from(self.factor), self.exponent)
    }

    /// Value of the `index`-th multiple, computed from integers to avoid drift.
    #[must_use]
    pub fn multiple(self, index: u64) -> f64 {
        scale_by_power_of_ten(index as f64 * f64::from(self.factor), self.exponent)
    }

    /// Decimal places needed to print every multiple of this step exactly.
    #[must_use]
    pub fn label_precision(self) -> usize {
        if self.exponent >= 0 {
            0
        } else {
            self.exponent.unsigned_abs() as usize
        }
    }
}

/// Evenly spaced axis ticks from zero to an upper bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NiceTicks {
    pub step: TickStep,
    pub values: Vec<f64>,
}

impl NiceTicks {
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        format!("{value:.*}", self.step.label_precision())
    }
}

/// Builds ticks `0, step, 2·step, …, upper` using the smallest 1/2/5 step
/// that divides `upper` into at most ten intervals.
///
/// Bounds produced by [`nice_ceil`] always divide evenly. Other positive
/// bounds fall back to the single interval `[0, upper]`.
#[must_use]
pub fn nice_ticks(upper: f64) -> NiceTicks {
    let upper = if upper.is_finite() && upper > 0.0 {
        upper
    } else {
        1.0
    };

    let (_, decade) = decade_mantissa(upper);
    for exponent in (decade - 2)..=(decade + 1) {
        for factor in TICK_STEP_FACTORS {
            let step = TickStep { factor, exponent };
            let intervals = upper / step.value();
            let rounded = intervals.round();
            if rounded < 1.0 || rounded > MAX_TICK_INTERVALS as f64 {
                continue;
            }
            if (intervals - rounded).abs() > MANTISSA_TOLERANCE * rounded {
                continue;
            }
            let count = rounded as u64;
            let values = (0..=count).map(|index| step.multiple(index)).collect();
            return NiceTicks { step, values };
        }
    }

    let (tenths, exponent) = decade_mantissa(upper);
    NiceTicks {
        step: TickStep {
            factor: tenths.round() as u32,
            exponent: exponent - 1,
        },
        values: vec![0.0, upper],
    }
}
