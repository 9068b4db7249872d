//! Format specifier parsing
//!
//! Grammar of the text after the `:` of a placeholder:
//!
//! ```text
//! spec  ::= [[fill]align][sign]["#"]["0"][width][","]["." precision][type]
//! align ::= "<" | ">" | "=" | "^"
//! sign  ::= "+" | "-" | " "
//! type  ::= "b" | "d" | "o" | "x" | "X" | "e" | "E" | "f" | "F" | "g" | "G" | "%" | "s"
//! ```

use super::error::FormatErrorKind;
use super::value::ValueClass;

/// Largest width or precision a specifier may request
pub const MAX_WIDTH: usize = u16::MAX as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// Default for text
    Left,
    /// Default for numbers
    Right,
    /// Accepted by the grammar, padded like `Right`
    Center,
    /// Padding goes between the sign (and base prefix) and the digits
    SignAware,
}

impl Align {
    fn from_char(ch: char) -> Option<Self> {
        match ch {
            '<' => Some(Align::Left),
            '>' => Some(Align::Right),
            '^' => Some(Align::Center),
            '=' => Some(Align::SignAware),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sign {
    ShowBoth,
    #[default]
    NegativeOnly,
    SpaceForPositive,
}

impl Sign {
    fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Sign::ShowBoth),
            '-' => Some(Sign::NegativeOnly),
            ' ' => Some(Sign::SpaceForPositive),
            _ => None,
        }
    }

    /// Prefix written in front of a number with the given sign
    pub(crate) fn prefix(&self, negative: bool) -> &'static str {
        match (negative, self) {
            (true, _) => "-",
            (false, Sign::ShowBoth) => "+",
            (false, Sign::SpaceForPositive) => " ",
            (false, Sign::NegativeOnly) => "",
        }
    }
}

/// Parsed form of one placeholder specifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatSpec {
    pub fill: char,
    pub align: Align,
    pub sign: Sign,
    pub alternate_form: bool,
    /// Minimum field width in characters, 0 leaves the field unconstrained
    pub width: usize,
    pub thousands_separator: bool,
    pub precision: Option<usize>,
    pub presentation: Option<char>,
}

impl FormatSpec {
    /// Specifier used when a placeholder has no `:spec` part
    pub fn defaults_for(class: ValueClass) -> Self {
        let align = match class {
            ValueClass::Integral | ValueClass::Floating => Align::Right,
            ValueClass::Other => Align::Left,
        };

        Self {
            fill: ' ',
            align,
            sign: Sign::NegativeOnly,
            alternate_form: false,
            width: 0,
            thousands_separator: false,
            precision: None,
            presentation: None,
        }
    }

    /// Parse `spec` for an argument of the given class
    pub fn parse(spec: &str, class: ValueClass) -> Result<Self, FormatErrorKind> {
        let chars: Vec<char> = spec.chars().collect();
        let mut f = Self::defaults_for(class);
        let mut i = 0;
        let mut explicit_align = false;

        // [[fill]align]
        if let Some(align) = chars.get(1).copied().and_then(Align::from_char) {
            f.fill = chars[0];
            f.align = align;
            explicit_align = true;
            i = 2;
        } else if let Some(align) = chars.first().copied().and_then(Align::from_char) {
            f.align = align;
            explicit_align = true;
            i = 1;
        }

        // [sign]
        if let Some(sign) = chars.get(i).copied().and_then(Sign::from_char) {
            f.sign = sign;
            i += 1;
        }

        // [#]
        if chars.get(i) == Some(&'#') {
            f.alternate_form = true;
            i += 1;
        }

        // [0]
        if chars.get(i) == Some(&'0') {
            if !explicit_align {
                f.fill = '0';
                f.align = Align::SignAware;
            }
            i += 1;
        }

        // [width]
        let digits = take_digits(&chars, &mut i);
        if !digits.is_empty() {
            f.width = parse_number(&digits)?;
        }

        // [,]
        if chars.get(i) == Some(&',') {
            f.thousands_separator = true;
            i += 1;
        }

        // [.precision]
        if chars.get(i) == Some(&'.') {
            i += 1;
            let digits = take_digits(&chars, &mut i);
            if digits.is_empty() {
                return Err(FormatErrorKind::MissingPrecision);
            }
            if class == ValueClass::Integral {
                return Err(FormatErrorKind::PrecisionNotAllowed);
            }
            f.precision = Some(parse_number(&digits)?);
        }

        // [type]
        if let Some(&ty) = chars.get(i) {
            if is_presentation_type(ty) {
                if !class.accepts(ty) {
                    return Err(FormatErrorKind::IncompatibleType { ty, class });
                }
                f.presentation = Some(ty);
                i += 1;
            }
        }

        if i != chars.len() {
            return Err(FormatErrorKind::TrailingCharacters {
                spec: spec.to_string(),
            });
        }

        Ok(f)
    }

    /// Whether digits, exponent markers and special values render in capitals
    pub fn uppercase(&self) -> bool {
        matches!(self.presentation, Some('X' | 'E' | 'F' | 'G'))
    }
}

fn is_presentation_type(ch: char) -> bool {
    matches!(
        ch,
        'b' | 'd' | 'o' | 'x' | 'X' | 'e' | 'E' | 'f' | 'F' | 'g' | 'G' | '%' | 's'
    )
}

fn take_digits(chars: &[char], i: &mut usize) -> String {
    let start = *i;
    while chars.get(*i).is_some_and(char::is_ascii_digit) {
        *i += 1;
    }
    chars[start..*i].iter().collect()
}

fn parse_number(digits: &str) -> Result<usize, FormatErrorKind> {
    match digits.parse::<usize>() {
        Ok(n) if n <= MAX_WIDTH => Ok(n),
        _ => Err(FormatErrorKind::NumberTooLarge {
            digits: digits.to_string(),
        }),
    }
}
