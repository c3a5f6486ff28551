// ============================================================================
// NUMBER FORMAT - Locale-aware thousands separators
// ============================================================================
// Matches what `Number.prototype.toLocaleString` produces for the
// supported locales: at most 3 fraction digits, trailing zeros trimmed.
// Digit grouping comes from num-format.
// ============================================================================

use num_format::{Locale, ToFormattedString};

const MAX_FRACTION_DIGITS: u32 = 3;

/// Digit grouping convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberLocale {
    /// Indian grouping: 12,34,567
    #[default]
    EnIn,
    /// Western grouping: 1,234,567
    EnUs,
}

impl NumberLocale {
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "en-us" | "en-gb" | "en" => NumberLocale::EnUs,
            _ => NumberLocale::EnIn,
        }
    }

    pub fn grouping(self) -> Locale {
        match self {
            NumberLocale::EnIn => Locale::en_IN,
            NumberLocale::EnUs => Locale::en,
        }
    }
}

/// Formats an integer, e.g. `1234567` -> `"12,34,567"` under en-IN.
pub fn format_count<N: ToFormattedString>(value: N, locale: NumberLocale) -> String {
    value.to_formatted_string(&locale.grouping())
}

/// Formats any upstream number with at most three fraction digits.
/// Sign and fraction are kept as received.
pub fn format_decimal(value: f64, locale: NumberLocale) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞".to_string() } else { "-∞".to_string() };
    }

    let scale = 10u128.pow(MAX_FRACTION_DIGITS);
    // f64::round is half away from zero, same as Intl's default
    let scaled = (value.abs() * scale as f64).round() as u128;
    let integer = scaled / scale;
    let fraction = scaled % scale;

    let mut out = String::new();
    if value < 0.0 && scaled != 0 {
        out.push('-');
    }
    out.push_str(&format_count(integer, locale));

    if fraction != 0 {
        let digits = format!("{:0width$}", fraction, width = MAX_FRACTION_DIGITS as usize);
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indian_grouping_for_counts() {
        let locale = NumberLocale::EnIn;
        assert_eq!(format_count(1_234_567u64, locale), "12,34,567");
        assert_eq!(format_count(1_000_000u64, locale), "10,00,000");
        assert_eq!(format_count(900_000u64, locale), "9,00,000");
        assert_eq!(format_count(95_000u64, locale), "95,000");
        assert_eq!(format_count(5_000u64, locale), "5,000");
        assert_eq!(format_count(999u64, locale), "999");
        assert_eq!(format_count(0u64, locale), "0");
        assert_eq!(format_count(7_900_000_000u64, locale), "7,90,00,00,000");
    }

    #[test]
    fn western_grouping_for_counts() {
        let locale = NumberLocale::EnUs;
        assert_eq!(format_count(1_234_567u64, locale), "1,234,567");
        assert_eq!(format_count(1_000u64, locale), "1,000");
        assert_eq!(format_count(100u64, locale), "100");
    }

    #[test]
    fn decimals_keep_three_fraction_digits() {
        let locale = NumberLocale::EnIn;
        assert_eq!(format_decimal(890_613.8, locale), "8,90,613.8");
        assert_eq!(format_decimal(88_783.0, locale), "88,783");
        assert_eq!(format_decimal(1.234_56, locale), "1.235");
        assert_eq!(format_decimal(887.4, NumberLocale::EnUs), "887.4");
        assert_eq!(format_decimal(0.0001, locale), "0");
        assert_eq!(format_decimal(7_900_000_000.0, locale), "7,90,00,00,000");
    }

    #[test]
    fn negative_and_non_finite_decimals() {
        let locale = NumberLocale::EnUs;
        assert_eq!(format_decimal(-1234.5, locale), "-1,234.5");
        assert_eq!(format_decimal(-5.0, NumberLocale::EnIn), "-5");
        assert_eq!(format_decimal(-0.0001, locale), "0");
        assert_eq!(format_decimal(f64::NAN, locale), "NaN");
        assert_eq!(format_decimal(f64::INFINITY, locale), "∞");
    }

    #[test]
    fn locale_tags() {
        assert_eq!(NumberLocale::from_tag("en-US"), NumberLocale::EnUs);
        assert_eq!(NumberLocale::from_tag("en_us"), NumberLocale::EnUs);
        assert_eq!(NumberLocale::from_tag("en-IN"), NumberLocale::EnIn);
        assert_eq!(NumberLocale::from_tag("fr-FR"), NumberLocale::EnIn);
        assert_eq!(format_count(1_234_567u64, NumberLocale::from_tag("en")), "1,234,567");
    }
}
