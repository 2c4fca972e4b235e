//! Human-readable byte sizes.

/// Base-1024 unit table, largest unit first matched.
const UNITS: [&str; 9] = ["bytes", "kB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Formats a byte count using the largest base-1024 unit that fits,
/// rounded to at most two decimal places.
///
/// ```
/// use stegocodec_client::convert_size;
///
/// assert_eq!(convert_size(0), "0 bytes");
/// assert_eq!(convert_size(1536), "1.5 kB");
/// assert_eq!(convert_size(1_048_576), "1 MB");
/// ```
#[must_use]
pub fn convert_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 bytes".to_string();
    }

    let exp = ((bytes.ilog2() / 10) as usize).min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exp as i32);
    let rounded = (value * 100.0).round() / 100.0;

    // Two decimals max, trailing zeros dropped (1.50 -> 1.5, 1.00 -> 1).
    let mut text = format!("{rounded:.2}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }

    format!("{} {}", text, UNITS[exp])
}
