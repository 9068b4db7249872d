//! Rendering of a single value under a [`FormatSpec`]
//!
//! Floating point output follows C `printf` for `%f`, `%e` and `%g`. A float
//! without a presentation type renders like `%g`, the way an untouched
//! iostream prints it.

use super::error::FormatErrorKind;
use super::spec::{Align, FormatSpec};
use super::value::Value;

const DEFAULT_FLOAT_PRECISION: usize = 6;

/// Parse `raw_spec` for the class of `value` and render it
pub fn format_value(value: &Value<'_>, raw_spec: &str) -> Result<String, FormatErrorKind> {
    let spec = FormatSpec::parse(raw_spec, value.class())?;
    Ok(render_value(value, &spec))
}

/// Render `value` under an already parsed specifier
///
/// The specifier is trusted: a presentation type that does not fit the
/// value class is ignored instead of reported.
pub fn render_value(value: &Value<'_>, spec: &FormatSpec) -> String {
    match *value {
        Value::Signed(v) => render_integral(v < 0, v.unsigned_abs(), spec),
        Value::Unsigned(v) => render_integral(false, v, spec),
        Value::Float(v) => render_floating(v, spec),
        _ => render_text(&value.text(), spec),
    }
}

fn render_integral(negative: bool, magnitude: u128, spec: &FormatSpec) -> String {
    let (digits, prefix) = match spec.presentation {
        Some('b') => (format!("{:b}", magnitude), "0b"),
        Some('o') => (format!("{:o}", magnitude), "0"),
        Some('x') => (format!("{:x}", magnitude), "0x"),
        Some('X') => (format!("{:X}", magnitude), "0X"),
        _ => {
            let digits = magnitude.to_string();
            let digits = if spec.thousands_separator {
                group_thousands(&digits)
            } else {
                digits
            };
            (digits, "")
        }
    };

    // octal zero already starts with its prefix
    let prefix = if spec.alternate_form && !(prefix == "0" && magnitude == 0) {
        prefix
    } else {
        ""
    };

    pad(spec.sign.prefix(negative), prefix, &digits, spec)
}

fn render_floating(v: f64, spec: &FormatSpec) -> String {
    let negative = v.is_sign_negative() && !v.is_nan();
    let magnitude = v.abs();
    let precision = spec.precision.unwrap_or(DEFAULT_FLOAT_PRECISION);

    let mut body = if !magnitude.is_finite() {
        let special = if magnitude.is_nan() { "nan" } else { "inf" };
        special.to_string()
    } else {
        match spec.presentation {
            Some('f' | 'F') => fixed(magnitude, precision, spec.thousands_separator),
            Some('e' | 'E') => scientific(magnitude, precision),
            Some('%') => fixed(magnitude * 100.0, precision, spec.thousands_separator),
            _ => general(magnitude, precision, spec.alternate_form),
        }
    };

    if spec.alternate_form && magnitude.is_finite() && !body.contains('.') {
        match body.find('e') {
            Some(pos) => body.insert(pos, '.'),
            None => body.push('.'),
        }
    }

    if spec.presentation == Some('%') {
        body.push('%');
    }

    if spec.uppercase() {
        body = body.to_uppercase();
    }

    pad(spec.sign.prefix(negative), "", &body, spec)
}

fn render_text(text: &str, spec: &FormatSpec) -> String {
    match spec.precision {
        Some(max) if text.chars().count() > max => {
            let truncated: String = text.chars().take(max).collect();
            pad("", "", &truncated, spec)
        }
        _ => pad("", "", text, spec),
    }
}

/// `%.*f`
fn fixed(v: f64, precision: usize, thousands: bool) -> String {
    let out = format!("{:.*}", precision, v);
    if !thousands {
        return out;
    }
    match out.split_once('.') {
        Some((int_part, frac)) => format!("{}.{}", group_thousands(int_part), frac),
        None => group_thousands(&out),
    }
}

/// `%.*e`: mantissa, sign and at least two exponent digits
fn scientific(v: f64, precision: usize) -> String {
    let formatted = format!("{:.*e}", precision, v);
    let (mantissa, exponent) = split_exponent(&formatted);
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{}e{}{:02}", mantissa, sign, exponent.unsigned_abs())
}

/// `%.*g`, or `%#.*g` when `keep_zeros` is set
fn general(v: f64, precision: usize, keep_zeros: bool) -> String {
    let p = precision.max(1);
    let exponent = if v == 0.0 {
        0
    } else {
        split_exponent(&format!("{:.*e}", p - 1, v)).1
    };

    let p = p as i64;
    let exponent = i64::from(exponent);
    let out = if exponent < p && exponent >= -4 {
        // p - 1 - exponent is non-negative inside this branch
        format!("{:.*}", (p - 1 - exponent) as usize, v)
    } else {
        scientific(v, (p - 1) as usize)
    };

    if keep_zeros {
        out
    } else {
        strip_trailing_zeros(&out)
    }
}

fn split_exponent(formatted: &str) -> (&str, i32) {
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse().unwrap_or(0)),
        None => (formatted, 0),
    }
}

fn strip_trailing_zeros(number: &str) -> String {
    let (mantissa, exponent) = match number.find('e') {
        Some(pos) => number.split_at(pos),
        None => (number, ""),
    };
    let mantissa = if mantissa.contains('.') {
        mantissa.trim_end_matches('0').trim_end_matches('.')
    } else {
        mantissa
    };
    format!("{}{}", mantissa, exponent)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Apply width, fill and alignment around `sign`, `prefix` and `body`
fn pad(sign: &str, prefix: &str, body: &str, spec: &FormatSpec) -> String {
    let len = sign.chars().count() + prefix.chars().count() + body.chars().count();
    if spec.width <= len {
        return format!("{}{}{}", sign, prefix, body);
    }

    let fill: String = std::iter::repeat(spec.fill).take(spec.width - len).collect();
    match spec.align {
        Align::Left => format!("{}{}{}{}", sign, prefix, body, fill),
        Align::SignAware => format!("{}{}{}{}", sign, prefix, fill, body),
        Align::Right | Align::Center => format!("{}{}{}{}", fill, sign, prefix, body),
    }
}
