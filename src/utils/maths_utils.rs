use argminmax::ArgMinMax;

/// Nearest f64 to `mult * 10^exp`.
/// Negative exponents divide instead of multiplying so 3e-1 comes out as 0.3, not 0.30000000000000004.
pub fn scaled_power_of_ten(mult: f64, exp: i32) -> f64 {
    if exp >= 0 {
        mult * 10f64.powi(exp)
    } else {
        mult / 10f64.powi(-exp)
    }
}

/// Minimum and maximum of a slice of finite values. `None` when the slice is empty.
pub fn get_min_max(vec: &[f64]) -> Option<(f64, f64)> {
    if vec.is_empty() {
        return None;
    }
    let (min_index, max_index) = vec.argminmax();
    Some((vec[min_index], vec[max_index]))
}

/// `(actual - predicted) / predicted * 100`
#[inline]
pub fn percent_deviation(actual: f64, predicted: f64) -> f64 {
    (actual - predicted) / predicted * 100.0
}

/// Formats with `decimals` places, then strips trailing zeros (and a dangling dot).
pub fn trim_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    if !formatted.contains('.') {
        return formatted;
    }
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_power_of_ten() {
        assert_eq!(scaled_power_of_ten(3.0, -1), 0.3);
        assert_eq!(scaled_power_of_ten(7.0, -3), 0.007);
        assert_eq!(scaled_power_of_ten(2.0, 3), 2000.0);
        assert_eq!(scaled_power_of_ten(1.0, 0), 1.0);
    }

    #[test]
    fn test_min_max() {
        assert_eq!(get_min_max(&[3.0, -1.0, 7.5, 2.0]), Some((-1.0, 7.5)));
        assert_eq!(get_min_max(&[]), None);
    }

    #[test]
    fn test_trim_decimals() {
        assert_eq!(trim_decimals(1.50, 2), "1.5");
        assert_eq!(trim_decimals(20.0, 1), "20");
        assert_eq!(trim_decimals(123.456, 2), "123.46");
        assert_eq!(trim_decimals(-0.001, 2), "0");
    }
}
