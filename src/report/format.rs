use anyhow::{Result, bail};

/// Number rendering conventions for one locale.
///
/// Passed explicitly into rendering; nothing here touches process-wide locale state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    /// Digit group separator for integers, or `None` to print digits ungrouped.
    pub thousands_separator: Option<char>,
    pub decimal_separator: char,
    /// Fractional digits for percentages.
    pub percent_decimals: usize,
}

impl Default for NumberFormat {
    fn default() -> Self { Self::en_us() }
}

impl NumberFormat {
    pub fn en_us() -> Self {
        Self { thousands_separator: Some(','), decimal_separator: '.', percent_decimals: 2 }
    }

    /// Look up a locale by name, ignoring any `.encoding` suffix (e.g. `en_US.UTF-8`).
    pub fn for_locale(name: &str) -> Result<Self> {
        let base = name.split('.').next().unwrap_or(name);
        let (thousands_separator, decimal_separator) = match base {
            "en_US" | "en_GB" | "en_CA" | "en" => (Some(','), '.'),
            "de_DE" | "es_ES" | "it_IT" | "nl_NL" | "de" => (Some('.'), ','),
            "fr_FR" | "fr" => (Some('\u{202f}'), ','),
            "de_CH" => (Some('\''), '.'),
            "C" | "POSIX" => (None, '.'),
            _ => bail!("[report::format] Unsupported locale '{name}'"),
        };
        Ok(Self { thousands_separator, decimal_separator, percent_decimals: 2 })
    }

    /// Render an integer count with digit grouping.
    pub fn count(&self, value: u64) -> String {
        let digits = value.to_string();
        let Some(sep) = self.thousands_separator else { return digits };

        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 { out.push(sep) }
            out.push(ch);
        }
        out
    }

    /// Render a signed integer with digit grouping.
    pub fn signed(&self, value: i64) -> String {
        let grouped = self.count(value.unsigned_abs());
        if value < 0 { format!("-{grouped}") } else { grouped }
    }

    /// Render a percentage value (already scaled to 0-100) with fixed decimals, without the `%` sign.
    pub fn percent(&self, value: f64) -> String {
        let fixed = format!("{:.prec$}", value, prec = self.percent_decimals);
        if self.decimal_separator == '.' { fixed } else { fixed.replace('.', &self.decimal_separator.to_string()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        let fmt = NumberFormat::en_us();
        assert_eq!(fmt.count(0), "0");
        assert_eq!(fmt.count(999), "999");
        assert_eq!(fmt.count(1_000), "1,000");
        assert_eq!(fmt.count(331_449_281), "331,449,281");
        assert_eq!(fmt.count(12_345_678_901), "12,345,678,901");
    }

    #[test]
    fn signed_values() {
        let fmt = NumberFormat::en_us();
        assert_eq!(fmt.signed(-3), "-3");
        assert_eq!(fmt.signed(-1_234), "-1,234");
        assert_eq!(fmt.signed(42), "42");
    }

    #[test]
    fn percent_uses_locale_decimal_separator() {
        assert_eq!(NumberFormat::en_us().percent(11.8066), "11.81");
        assert_eq!(NumberFormat::for_locale("de_DE.UTF-8").unwrap().percent(11.8066), "11,81");
    }

    #[test]
    fn posix_locale_does_not_group() {
        let fmt = NumberFormat::for_locale("C").unwrap();
        assert_eq!(fmt.count(1_234_567), "1234567");
    }

    #[test]
    fn german_groups_with_dots() {
        let fmt = NumberFormat::for_locale("de_DE").unwrap();
        assert_eq!(fmt.count(1_234_567), "1.234.567");
    }

    #[test]
    fn unknown_locale_is_rejected() {
        assert!(NumberFormat::for_locale("xx_YY").is_err());
    }
}
