//! Number formatting for SVG attributes.

use std::fmt;

const SIGNIFICANT_DIGITS: usize = 6;

/// A number written with six significant digits, trailing zeros dropped,
/// switching to exponent form for very large or very small magnitudes.
/// This is the `%g` convention, so `99.2283950617284` is written `99.2284`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SvgNumber(pub f64);

impl fmt::Display for SvgNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value == 0.0 || !value.is_finite() {
            return write!(f, "{value}");
        }

        // Round once in exponent form to learn the decimal exponent after rounding
        let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
        let Some((mantissa, exponent)) = scientific
            .split_once('e')
            .and_then(|(m, e)| Some((m, e.parse::<i32>().ok()?)))
        else {
            return write!(f, "{value}");
        };

        if exponent < -4 || exponent >= SIGNIFICANT_DIGITS as i32 {
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(
                f,
                "{}e{sign}{:02}",
                trim_fraction(mantissa),
                exponent.unsigned_abs()
            )
        } else {
            let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - exponent) as usize;
            let fixed = format!("{value:.decimals$}");
            f.write_str(trim_fraction(&fixed))
        }
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(value: f64) -> String {
        SvgNumber(value).to_string()
    }

    #[test]
    fn whole_numbers() {
        assert_eq!(show(0.0), "0");
        assert_eq!(show(50.0), "50");
        assert_eq!(show(-3.0), "-3");
        assert_eq!(show(123456.0), "123456");
    }

    #[test]
    fn six_significant_digits() {
        assert_eq!(show(99.2283950617284), "99.2284");
        assert_eq!(show(0.85), "0.85");
        assert_eq!(show(1.5), "1.5");
        assert_eq!(show(549.9999999), "550");
    }

    #[test]
    fn exponent_form_at_extremes() {
        assert_eq!(show(1234567.0), "1.23457e+06");
        assert_eq!(show(0.00001234), "1.234e-05");
        assert_eq!(show(0.0001234), "0.0001234");
    }
}
