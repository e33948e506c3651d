//! Bonus-point display strings.

/// Thousands separator used by the `ru-RU` number format (no-break space).
const GROUP_SEPARATOR: char = '\u{a0}';

/// Format an integer with `ru-RU` digit grouping, e.g. `12345` as `12 345`
/// (with a no-break space).
#[must_use]
pub fn format_grouped(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(c);
    }
    out
}

/// Label shown next to a product, e.g. `+1 500 бонусов`.
///
/// Returns `None` unless the product awards a positive number of points.
#[must_use]
pub fn bonus_label(points: i64) -> Option<String> {
    (points > 0).then(|| format!("+{} бонусов", format_grouped(points)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_numbers_are_not_grouped() {
        assert_eq!(format_grouped(0), "0");
        assert_eq!(format_grouped(999), "999");
    }

    #[test]
    fn test_groups_of_three() {
        assert_eq!(format_grouped(1_500), "1\u{a0}500");
        assert_eq!(format_grouped(1_234_567), "1\u{a0}234\u{a0}567");
    }

    #[test]
    fn test_negative() {
        assert_eq!(format_grouped(-25_000), "-25\u{a0}000");
    }

    #[test]
    fn test_label_only_for_positive_points() {
        assert_eq!(bonus_label(0), None);
        assert_eq!(bonus_label(-10), None);
        assert_eq!(bonus_label(450).as_deref(), Some("+450 бонусов"));
        assert_eq!(
            bonus_label(2_990).as_deref(),
            Some("+2\u{a0}990 бонусов")
        );
    }
}
