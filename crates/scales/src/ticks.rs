//! Axis tick generation.
//!
//! Produces round tick values over an interval, snapped to the classic
//! 1/2/5 progression so labels stay readable at any magnitude.

const SQRT_50: f64 = 7.0710678118654755;
const SQRT_10: f64 = 3.1622776601683795;
const SQRT_2: f64 = 1.4142135623730951;

/// Tick values covering `[start, stop]`, aiming for roughly `count`
/// stops. Returned ascending when `start <= stop`, descending otherwise.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let step = tick_increment(lo, hi, count);
    if step == 0.0 || !step.is_finite() {
        return Vec::new();
    }

    let mut out: Vec<f64> = if step > 0.0 {
        let mut r0 = (lo / step).round();
        let mut r1 = (hi / step).round();
        if r0 * step < lo {
            r0 += 1.0;
        }
        if r1 * step > hi {
            r1 -= 1.0;
        }
        let n = ((r1 - r0 + 1.0).max(0.0)) as usize;
        (0..n).map(|i| (r0 + i as f64) * step).collect()
    } else {
        // A negative increment encodes the reciprocal of a sub-unit step.
        let inv = -step;
        let mut r0 = (lo * inv).round();
        let mut r1 = (hi * inv).round();
        if r0 / inv < lo {
            r0 += 1.0;
        }
        if r1 / inv > hi {
            r1 -= 1.0;
        }
        let n = ((r1 - r0 + 1.0).max(0.0)) as usize;
        (0..n).map(|i| (r0 + i as f64) / inv).collect()
    };

    if reverse {
        out.reverse();
    }
    out
}

/// Step between ticks for roughly `count` stops across `[start, stop]`,
/// snapped to 1, 2 or 5 times a power of ten. Sub-unit steps return the
/// negated reciprocal so callers can divide instead of multiplying by an
/// inexact fraction.
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.max(1) as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= SQRT_50 {
        10.0
    } else if error >= SQRT_10 {
        5.0
    } else if error >= SQRT_2 {
        2.0
    } else {
        1.0
    };
    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -(10f64.powf(-power)) / factor
    }
}

#[cfg(test)]
mod tests {
    use super::{tick_increment, ticks};

    #[test]
    fn unit_interval_splits_into_tenths() {
        let got = ticks(0.0, 1.0, 10);
        let want: Vec<f64> = (0..=10).map(|i| f64::from(i) / 10.0).collect();
        assert_eq!(got, want);
    }

    #[test]
    fn steps_snap_to_one_two_five() {
        assert_eq!(tick_increment(0.0, 10.0, 10), 1.0);
        assert_eq!(tick_increment(0.0, 177.0, 10), 20.0);
        assert_eq!(tick_increment(0.0, 450.0, 10), 50.0);
        assert_eq!(tick_increment(0.0, 1.0, 10), -10.0);
    }

    #[test]
    fn covers_interior_round_values_only() {
        assert_eq!(ticks(2.5, 47.5, 10), vec![
            5.0, 10.0, 15.0, 20.0, 25.0, 30.0, 35.0, 40.0, 45.0,
        ]);
        assert_eq!(ticks(0.0, 177.0, 10), vec![
            0.0, 20.0, 40.0, 60.0, 80.0, 100.0, 120.0, 140.0, 160.0,
        ]);
    }

    #[test]
    fn reversed_interval_reverses_the_ticks() {
        assert_eq!(ticks(10.0, 0.0, 5), vec![10.0, 8.0, 6.0, 4.0, 2.0, 0.0]);
    }

    #[test]
    fn degenerate_requests_are_empty_or_singular() {
        assert_eq!(ticks(3.0, 3.0, 10), vec![3.0]);
        assert!(ticks(0.0, 1.0, 0).is_empty());
    }
}
