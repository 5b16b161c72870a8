//! Lenient readers for form fields.
//!
//! Number and date inputs are never rejected: a blank or malformed value is
//! stored as absent. Numbers may arrive as JSON numbers or as the raw text of
//! the input; text is read by its leading numeric prefix, so `"2.5kg"` is
//! `2.5` and `"abc"` is absent.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawField {
    Number(f64),
    Text(String),
    /// Booleans, arrays and objects; read as absent.
    Other(serde::de::IgnoredAny),
}

/// Reads the longest decimal prefix of `raw`, skipping leading whitespace.
pub fn parse_float(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_start = end;
    end = skip_digits(bytes, end);
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = skip_digits(bytes, end + 1);
        let frac_digits = frac_end - (end + 1);
        if digits + frac_digits > 0 {
            end = frac_end;
            digits += frac_digits;
        }
    }
    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = skip_digits(bytes, exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Reads the longest base-10 integer prefix of `raw`, skipping leading whitespace.
/// Values outside the `i64` range saturate.
pub fn parse_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let end = skip_digits(bytes, sign);
    if end == sign {
        return None;
    }
    match s[..end].parse::<i64>() {
        Ok(n) => Some(n),
        Err(_) if bytes[0] == b'-' => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

fn skip_digits(bytes: &[u8], mut at: usize) -> usize {
    while bytes.get(at).is_some_and(u8::is_ascii_digit) {
        at += 1;
    }
    at
}

pub fn lenient_float<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawField>::deserialize(deserializer)? {
        Some(RawField::Number(n)) => Some(n).filter(|v| v.is_finite()),
        Some(RawField::Text(s)) => parse_float(&s),
        Some(RawField::Other(_)) | None => None,
    })
}

pub fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawField>::deserialize(deserializer)? {
        Some(RawField::Number(n)) if n.is_finite() => Some(n.trunc() as i64),
        Some(RawField::Number(_)) => None,
        Some(RawField::Text(s)) => parse_int(&s),
        Some(RawField::Other(_)) | None => None,
    })
}

pub fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawField>::deserialize(deserializer)? {
        Some(RawField::Text(s)) => parse_date(&s),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floats_read_the_numeric_prefix() {
        assert_eq!(parse_float("3.0"), Some(3.0));
        assert_eq!(parse_float("  2.5kg"), Some(2.5));
        assert_eq!(parse_float("-.5"), Some(-0.5));
        assert_eq!(parse_float("1e3x"), Some(1000.0));
        assert_eq!(parse_float("7e"), Some(7.0));
        assert_eq!(parse_float(""), None);
        assert_eq!(parse_float("."), None);
        assert_eq!(parse_float("abc"), None);
    }

    #[test]
    fn ints_stop_at_the_first_non_digit() {
        assert_eq!(parse_int("0"), Some(0));
        assert_eq!(parse_int("150 crates"), Some(150));
        assert_eq!(parse_int("3.9"), Some(3));
        assert_eq!(parse_int("-12"), Some(-12));
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("-"), None);
    }

    #[test]
    fn oversized_ints_saturate() {
        assert_eq!(parse_int("99999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_int("-99999999999999999999 kg"), Some(i64::MIN));
    }

    #[derive(Deserialize)]
    struct FormFields {
        #[serde(default, deserialize_with = "lenient_float")]
        price: Option<f64>,
        #[serde(default, deserialize_with = "lenient_int")]
        quantity: Option<i64>,
        #[serde(default, deserialize_with = "lenient_date")]
        date: Option<NaiveDate>,
    }

    #[test]
    fn fields_accept_numbers_text_or_nothing() {
        let fields: FormFields =
            serde_json::from_str(r#"{"price": "1.25", "quantity": 4.8, "date": "2025-10-27"}"#)
                .unwrap();
        assert_eq!(fields.price, Some(1.25));
        assert_eq!(fields.quantity, Some(4));
        assert_eq!(fields.date, NaiveDate::from_ymd_opt(2025, 10, 27));

        let fields: FormFields =
            serde_json::from_str(r#"{"price": "", "quantity": null, "date": "soon"}"#).unwrap();
        assert_eq!(fields.price, None);
        assert_eq!(fields.quantity, None);
        assert_eq!(fields.date, None);

        let fields: FormFields =
            serde_json::from_str(r#"{"price": true, "quantity": [1], "date": 20251027}"#).unwrap();
        assert_eq!(fields.price, None);
        assert_eq!(fields.quantity, None);
        assert_eq!(fields.date, None);

        let fields: FormFields = serde_json::from_str("{}").unwrap();
        assert!(fields.price.is_none() && fields.quantity.is_none() && fields.date.is_none());
    }
}
