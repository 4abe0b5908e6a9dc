//! Axis tick generation.
//!
//! Steps follow the usual 1/2/5 × 10^k progression so that labels land on
//! round numbers.

/// Step between roughly `count` ticks covering `[start, stop]`.
/// Returns `0.0` when the span is empty or not finite.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let raw = (stop - start).abs() / count.max(1) as f64;
    if raw == 0.0 || !raw.is_finite() {
        return 0.0;
    }
    let power = raw.log10().floor();
    let base = 10f64.powf(power);
    let error = raw / base;
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * base
}

/// Decimal places needed to print multiples of `step` exactly.
pub fn step_precision(step: f64) -> usize {
    if step <= 0.0 || step >= 1.0 || !step.is_finite() {
        0
    } else {
        (-step.log10().floor()) as usize
    }
}

/// Multiples of the nice step inside `[start, stop]`, ascending.
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    let (lo, hi) = if start <= stop { (start, stop) } else { (stop, start) };
    let step = tick_step(lo, hi, count);
    if step == 0.0 {
        return if lo.is_finite() && lo == hi { vec![lo] } else { Vec::new() };
    }
    let scale = 10f64.powi(step_precision(step) as i32);
    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;
    (first..=last).map(|i| ((i as f64 * step) * scale).round() / scale).collect()
}

/// Year step for a span of fractional years, never below one year.
pub fn year_step(start_year: f64, stop_year: f64, count: usize) -> i32 {
    (tick_step(start_year, stop_year, count).round() as i32).max(1)
}

/// `18000` -> `18,000`, keeping the decimals `step` needs.
pub fn format_tick_value(value: f64, step: f64) -> String {
    let precision = step_precision(step);
    let formatted = format!("{:.*}", precision, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let negative = value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0');
    let sign = if negative { "-" } else { "" };
    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}
