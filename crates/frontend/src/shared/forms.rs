//! Helpers shared by the form view models: every input is a string
//! signal and is converted when the DTO is built.

/// Parses an amount typed into a form; empty input counts as zero.
pub fn parse_amount(label: &str, input: &str) -> Result<f64, String> {
    let cleaned: String = input
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(persian_digit_to_ascii)
        .collect();
    if cleaned.is_empty() {
        return Ok(0.0);
    }
    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(format!("مقدار «{}» باید عدد باشد", label)),
    }
}

/// Month or floor number from a select box
pub fn parse_number(label: &str, input: &str) -> Result<u8, String> {
    input
        .trim()
        .parse::<u8>()
        .map_err(|_| format!("«{}» انتخاب نشده است", label))
}

/// `Some(trimmed)` unless the input is blank
pub fn optional_text(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Amount as shown in an input: no trailing `.0`
pub fn amount_input(value: f64) -> String {
    if value == 0.0 {
        String::new()
    } else if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

/// Comma separated list typed into one input
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split([',', '،'])
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Amounts joined by `+`, `؛` or `;`, e.g. the advance payments of a weaver.
/// Commas stay thousand separators.
pub fn parse_amount_list(label: &str, input: &str) -> Result<Vec<f64>, String> {
    input
        .split(['+', ';', '؛'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| parse_amount(label, s))
        .collect()
}

/// Inverse of `parse_amount_list` for editing
pub fn amount_list_input(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| if *v == 0.0 { "0".to_string() } else { amount_input(*v) })
        .collect::<Vec<_>>()
        .join(" + ")
}

fn persian_digit_to_ascii(c: char) -> char {
    match c {
        '۰'..='۹' => char::from_u32(c as u32 - '۰' as u32 + '0' as u32).unwrap_or(c),
        '٠'..='٩' => char::from_u32(c as u32 - '٠' as u32 + '0' as u32).unwrap_or(c),
        '٫' => '.',
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("مبلغ", "12,500"), Ok(12500.0));
        assert_eq!(parse_amount("مبلغ", " ۱۲۵۰۰ "), Ok(12500.0));
        assert_eq!(parse_amount("مبلغ", "۲٫۵"), Ok(2.5));
        assert_eq!(parse_amount("مبلغ", ""), Ok(0.0));
        assert!(parse_amount("مبلغ", "abc").is_err());
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("ماه", "7"), Ok(7));
        assert!(parse_number("ماه", "").is_err());
    }

    #[test]
    fn test_amount_input_and_lists() {
        assert_eq!(amount_input(0.0), "");
        assert_eq!(amount_input(1500.0), "1500");
        assert_eq!(amount_input(2.5), "2.5");
        assert_eq!(split_list("12, 13،14 ,,"), vec!["12", "13", "14"]);
        assert_eq!(optional_text("  "), None);
        assert_eq!(optional_text(" A ").as_deref(), Some("A"));
    }

    #[test]
    fn test_amount_lists() {
        assert_eq!(
            parse_amount_list("پرداخت", "1,000 + ۲۵۰۰ ; 300"),
            Ok(vec![1000.0, 2500.0, 300.0])
        );
        assert_eq!(parse_amount_list("پرداخت", " "), Ok(vec![]));
        assert!(parse_amount_list("پرداخت", "100 + x").is_err());
        assert_eq!(amount_list_input(&[1000.0, 0.0, 2.5]), "1000 + 0 + 2.5");
    }
}
