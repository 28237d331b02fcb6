/// Normalize decimal and thousands separators so that '.' is the only
/// decimal separator.
///
/// - only ',' present: it is the decimal separator ("1,5" -> "1.5")
/// - both present: whichever comes first is the thousands separator
///   ("1,234.5" -> "1234.5", "1.234,5" -> "1234.5")
///
/// "1,234" is undecidable between 1234 and 1.234 and always reads as 1.234.
pub fn normalize_interpunctuation(s: &str) -> String {
    match (s.find(','), s.find('.')) {
        (Some(_), None) => s.replace(',', "."),
        (Some(comma), Some(dot)) if comma < dot => s.replace(',', ""),
        (Some(_), Some(_)) => s.replace('.', "").replace(',', "."),
        _ => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_interpunctuation() {
        assert_eq!(normalize_interpunctuation(""), "");
        assert_eq!(normalize_interpunctuation("1234"), "1234");
        assert_eq!(normalize_interpunctuation("1.234"), "1.234");
        assert_eq!(normalize_interpunctuation("1,234"), "1.234");
        assert_eq!(normalize_interpunctuation("-1,234.56"), "-1234.56");
        assert_eq!(normalize_interpunctuation("-1.234,56"), "-1234.56");
        assert_eq!(normalize_interpunctuation("1,234,567.8"), "1234567.8");
        assert_eq!(normalize_interpunctuation("1.234.567,8"), "1234567.8");
        assert_eq!(normalize_interpunctuation("1,234.56kΩ"), "1234.56kΩ");
    }
}
