//! Argument values accepted by the format engine

use std::borrow::Cow;
use std::fmt;

/// Value class of an argument
///
/// The class decides the default alignment of a placeholder and which
/// presentation types its specifier may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueClass {
    Integral,
    Floating,
    Other,
}

impl ValueClass {
    pub fn to_str(&self) -> &'static str {
        match self {
            ValueClass::Integral => "integral",
            ValueClass::Floating => "floating-point",
            ValueClass::Other => "non-numeric",
        }
    }

    /// Whether `ty` is a presentation type this class can be rendered with
    pub fn accepts(&self, ty: char) -> bool {
        match self {
            ValueClass::Integral => matches!(ty, 'b' | 'd' | 'o' | 'x' | 'X'),
            ValueClass::Floating => matches!(ty, 'e' | 'E' | 'f' | 'F' | 'g' | 'G' | '%'),
            ValueClass::Other => ty == 's',
        }
    }
}

impl fmt::Display for ValueClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

/// A borrowed, renderable argument
///
/// Integers are widened so that every primitive integer type keeps its
/// magnitude; the sign is rendered separately from the digits.
#[derive(Clone, Copy)]
pub enum Value<'a> {
    Signed(i128),
    Unsigned(u128),
    Float(f64),
    Bool(bool),
    Char(char),
    Str(&'a str),
    Display(&'a dyn fmt::Display),
}

impl Value<'_> {
    pub fn class(&self) -> ValueClass {
        match self {
            Value::Signed(_) | Value::Unsigned(_) => ValueClass::Integral,
            Value::Float(_) => ValueClass::Floating,
            Value::Bool(_) | Value::Char(_) | Value::Str(_) | Value::Display(_) => {
                ValueClass::Other
            }
        }
    }

    /// Plain textual form of a non-numeric value
    pub(crate) fn text(&self) -> Cow<'_, str> {
        match self {
            Value::Str(s) => Cow::Borrowed(s),
            Value::Bool(true) => Cow::Borrowed("true"),
            Value::Bool(false) => Cow::Borrowed("false"),
            Value::Char(c) => Cow::Owned(c.to_string()),
            Value::Display(d) => Cow::Owned(d.to_string()),
            Value::Signed(v) => Cow::Owned(v.to_string()),
            Value::Unsigned(v) => Cow::Owned(v.to_string()),
            Value::Float(v) => Cow::Owned(v.to_string()),
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Signed(v) => f.debug_tuple("Signed").field(v).finish(),
            Value::Unsigned(v) => f.debug_tuple("Unsigned").field(v).finish(),
            Value::Float(v) => f.debug_tuple("Float").field(v).finish(),
            Value::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            Value::Char(v) => f.debug_tuple("Char").field(v).finish(),
            Value::Str(v) => f.debug_tuple("Str").field(v).finish(),
            Value::Display(v) => f.debug_tuple("Display").field(&v.to_string()).finish(),
        }
    }
}

/// Types that can be bound to a template placeholder
///
/// Implemented for the primitive numbers, strings, `bool` and `char`.
/// Anything else that implements [`Display`](fmt::Display) can be passed
/// through [`display`].
pub trait FormatArg {
    fn to_value(&self) -> Value<'_>;
}

macro_rules! impl_format_arg {
    ($variant:ident as $wide:ty: $($t:ty),*) => {
        $(
            impl FormatArg for $t {
                #[inline]
                fn to_value(&self) -> Value<'_> {
                    Value::$variant(*self as $wide)
                }
            }
        )*
    };
}

impl_format_arg!(Signed as i128: i8, i16, i32, i64, i128, isize);
impl_format_arg!(Unsigned as u128: u8, u16, u32, u64, u128, usize);
impl_format_arg!(Float as f64: f32, f64);

impl FormatArg for bool {
    fn to_value(&self) -> Value<'_> {
        Value::Bool(*self)
    }
}

impl FormatArg for char {
    fn to_value(&self) -> Value<'_> {
        Value::Char(*self)
    }
}

impl FormatArg for str {
    fn to_value(&self) -> Value<'_> {
        Value::Str(self)
    }
}

impl FormatArg for String {
    fn to_value(&self) -> Value<'_> {
        Value::Str(self.as_str())
    }
}

impl FormatArg for Cow<'_, str> {
    fn to_value(&self) -> Value<'_> {
        Value::Str(self.as_ref())
    }
}

impl FormatArg for Value<'_> {
    fn to_value(&self) -> Value<'_> {
        *self
    }
}

impl<T: FormatArg + ?Sized> FormatArg for &T {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        (**self).to_value()
    }
}

/// Wrapper binding any `Display` type as a non-numeric argument
#[derive(Debug, Clone, Copy)]
pub struct Displayed<'a, T>(&'a T);

impl<T: fmt::Display> FormatArg for Displayed<'_, T> {
    fn to_value(&self) -> Value<'_> {
        Value::Display(self.0)
    }
}

/// Bind a `Display` value as a template argument
///
/// ```
/// use variadic_logger::format::{display, render};
/// use std::net::Ipv4Addr;
///
/// let addr = Ipv4Addr::LOCALHOST;
/// let out = render("listening on {0}", &[&display(&addr)]).unwrap();
/// assert_eq!(out, "listening on 127.0.0.1");
/// ```
pub fn display<T: fmt::Display>(value: &T) -> Displayed<'_, T> {
    Displayed(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_classes() {
        assert_eq!(42i8.to_value().class(), ValueClass::Integral);
        assert_eq!(42u64.to_value().class(), ValueClass::Integral);
        assert_eq!(1.5f32.to_value().class(), ValueClass::Floating);
        assert_eq!("text".to_value().class(), ValueClass::Other);
        assert_eq!(true.to_value().class(), ValueClass::Other);
        assert_eq!('c'.to_value().class(), ValueClass::Other);
    }

    #[test]
    fn test_integers_keep_magnitude() {
        assert!(matches!(i64::MIN.to_value(), Value::Signed(v) if v == i64::MIN as i128));
        assert!(matches!(u128::MAX.to_value(), Value::Unsigned(u128::MAX)));
    }

    #[test]
    fn test_references_forward() {
        let owned = String::from("abc");
        let by_ref: &String = &owned;
        assert_eq!(by_ref.to_value().text(), "abc");
        assert_eq!((&&7i32).to_value().class(), ValueClass::Integral);
    }

    #[test]
    fn test_accepted_types() {
        assert!(ValueClass::Integral.accepts('X'));
        assert!(!ValueClass::Integral.accepts('f'));
        assert!(ValueClass::Floating.accepts('%'));
        assert!(!ValueClass::Floating.accepts('s'));
        assert!(ValueClass::Other.accepts('s'));
        assert!(!ValueClass::Other.accepts('d'));
    }
}
