//! Positional template engine
//!
//! Templates use `{index[:spec]}` placeholders in the style of Python's
//! `str.format`, with `{{` and `}}` escaping literal braces:
//!
//! ```
//! use variadic_logger::format::render;
//!
//! assert_eq!(render("{2} {1}{0}", &[&"!", &"world", &"Hello"]).unwrap(), "Hello world!");
//! assert!(render("{0:#x} {0:>6.2f}", &[&255]).is_err());
//! assert_eq!(render("{0:*=+8.2f}", &[&12.34567]).unwrap(), "+**12.35");
//! ```

pub mod error;
pub mod render;
pub mod spec;
pub mod template;
pub mod value;

pub use error::{FormatError, FormatErrorKind};
pub use render::{format_value, render_value};
pub use spec::{Align, FormatSpec, Sign, MAX_WIDTH};
pub use template::{Segment, Template};
pub use value::{display, Displayed, FormatArg, Value, ValueClass};

/// Render `template` with positional `args`
pub fn render(template: &str, args: &[&dyn FormatArg]) -> Result<String, FormatError> {
    Template::parse(template)?.render(args)
}

/// Render `template` with positional `args`, appending to `out`
pub fn render_into(
    out: &mut String,
    template: &str,
    args: &[&dyn FormatArg],
) -> Result<(), FormatError> {
    Template::parse(template)?.render_into(out, args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reuse_and_reorder() {
        assert_eq!(
            render("{0} {1}! {0}! {0}!", &[&"No", &"way"]).unwrap(),
            "No way! No! No!"
        );
        assert_eq!(
            render("{2} {1}{0}", &[&"!", &"world", &"Hello"]).unwrap(),
            "Hello world!"
        );
    }

    #[test]
    fn test_spec_examples() {
        assert_eq!(render("{0:x}", &[&42]).unwrap(), "2a");
        assert_eq!(render("{0:X}", &[&42]).unwrap(), "2A");
        assert_eq!(render("{0:#X}", &[&42]).unwrap(), "0X2A");
        assert_eq!(render("{0:o}", &[&42]).unwrap(), "52");
        assert_eq!(render("{0:#o}", &[&42]).unwrap(), "052");
        assert_eq!(render("{0:5}", &[&42]).unwrap(), "   42");
        assert_eq!(render("{0:#<5}", &[&42]).unwrap(), "42###");
        assert_eq!(render("{0:=>5}", &[&42]).unwrap(), "===42");
        assert_eq!(render("{0:*=5}", &[&-42]).unwrap(), "-**42");
        assert_eq!(render("{0:+} {1:+}", &[&42, &-42]).unwrap(), "+42 -42");
        assert_eq!(render("{0:f}", &[&42.125]).unwrap(), "42.125000");
        assert_eq!(render("{0:E}", &[&42.0]).unwrap(), "4.200000E+01");
    }

    #[test]
    fn test_exponent_forms() {
        assert_eq!(render("{0:e}", &[&1234.5]).unwrap(), "1.234500e+03");
        assert_eq!(render("{0:.3e}", &[&-0.000125]).unwrap(), "-1.250e-04");
        assert_eq!(render("{0:>12.2E}", &[&6.02e23]).unwrap(), "    6.02E+23");
        assert_eq!(render("{0:g}", &[&0.5]).unwrap(), "0.5");
        assert_eq!(render("{0:g}", &[&1.0e-7]).unwrap(), "1e-07");
        assert_eq!(render("{0:.3G}", &[&123456.0]).unwrap(), "1.23E+05");
        assert_eq!(render("{0}", &[&2.5e20]).unwrap(), "2.5e+20");
    }

    #[test]
    fn test_oversized_numbers_are_errors() {
        let err = render("{0:18446744073709551615}", &[&1]).unwrap_err();
        assert!(matches!(err.kind, FormatErrorKind::NumberTooLarge { .. }));

        let err = render("{0:.99999999f}", &[&1.5]).unwrap_err();
        assert!(matches!(err.kind, FormatErrorKind::NumberTooLarge { .. }));

        assert_eq!(render("{0:65535}", &[&1]).unwrap().len(), MAX_WIDTH);
    }

    #[test]
    fn test_escapes_without_args() {
        assert_eq!(render("{{}}", &[]).unwrap(), "{}");
        assert_eq!(render("plain text", &[]).unwrap(), "plain text");
        assert_eq!(render("", &[]).unwrap(), "");
    }

    #[test]
    fn test_render_into_accumulates() {
        let mut out = String::new();
        render_into(&mut out, "{0}-", &[&1]).unwrap();
        render_into(&mut out, "{0}", &[&2]).unwrap();
        assert_eq!(out, "1-2");
    }

    #[test]
    fn test_errors_name_the_template() {
        let err = render("{0:.2}", &[&5]).unwrap_err();
        assert_eq!(err.kind, FormatErrorKind::PrecisionNotAllowed);
        assert!(err.to_string().contains("'{0:.2}'"));

        let err = render("{0:d}", &[&1.5]).unwrap_err();
        assert!(matches!(err.kind, FormatErrorKind::IncompatibleType { ty: 'd', .. }));
    }
}
