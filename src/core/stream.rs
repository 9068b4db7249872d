//! Tokens accepted by the streaming interface
//!
//! A [`LogWorker`] takes values and manipulators through `<<`. Manipulators
//! change how later values are rendered; they map onto a
//! [`FormatSpec`] so streamed values go through the same interpreter as
//! template arguments.
//!
//! ```
//! use variadic_logger::core::stream::{hex, quote, setfill, setw, showbase, yes_no};
//! use variadic_logger::{LogLevel, Logger};
//!
//! let logger = Logger::console("net", LogLevel::Debug);
//! let _ = logger.debug() << "mask" << hex() << showbase() << 255 << quote() << "eth0";
//! let _ = logger.info() << "up:" << yes_no(true) << setfill('0') << setw(4) << 7;
//! ```

use super::worker::LogWorker;
use crate::format::{Align, FormatArg, FormatSpec, Sign, ValueClass, MAX_WIDTH};

/// Something that can be written to a [`LogWorker`]
pub trait Streamable {
    fn stream_into(self, worker: &mut LogWorker);
}

impl<T: FormatArg> Streamable for T {
    fn stream_into(self, worker: &mut LogWorker) {
        worker.push_value(&self.to_value());
    }
}

/// Stream manipulator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Manip {
    Hex,
    Oct,
    Dec,
    Bin,
    Uppercase,
    NoUppercase,
    ShowBase,
    NoShowBase,
    ShowPos,
    NoShowPos,
    ShowPoint,
    NoShowPoint,
    Fixed,
    Scientific,
    DefaultFloat,
    Left,
    Right,
    Internal,
    /// Wrap the next token in double quotes
    Quote,
    SetPrecision(usize),
    /// Minimum width of the next token only
    SetWidth(usize),
    SetFill(char),
}

impl Streamable for Manip {
    fn stream_into(self, worker: &mut LogWorker) {
        worker.apply(self);
    }
}

pub fn hex() -> Manip {
    Manip::Hex
}

pub fn oct() -> Manip {
    Manip::Oct
}

pub fn dec() -> Manip {
    Manip::Dec
}

pub fn bin() -> Manip {
    Manip::Bin
}

pub fn uppercase() -> Manip {
    Manip::Uppercase
}

pub fn nouppercase() -> Manip {
    Manip::NoUppercase
}

pub fn showbase() -> Manip {
    Manip::ShowBase
}

pub fn noshowbase() -> Manip {
    Manip::NoShowBase
}

pub fn showpos() -> Manip {
    Manip::ShowPos
}

pub fn noshowpos() -> Manip {
    Manip::NoShowPos
}

pub fn showpoint() -> Manip {
    Manip::ShowPoint
}

pub fn noshowpoint() -> Manip {
    Manip::NoShowPoint
}

pub fn fixed() -> Manip {
    Manip::Fixed
}

pub fn scientific() -> Manip {
    Manip::Scientific
}

pub fn defaultfloat() -> Manip {
    Manip::DefaultFloat
}

pub fn left() -> Manip {
    Manip::Left
}

pub fn right() -> Manip {
    Manip::Right
}

pub fn internal() -> Manip {
    Manip::Internal
}

pub fn quote() -> Manip {
    Manip::Quote
}

pub fn setprecision(precision: usize) -> Manip {
    Manip::SetPrecision(precision)
}

pub fn setw(width: usize) -> Manip {
    Manip::SetWidth(width)
}

pub fn setfill(fill: char) -> Manip {
    Manip::SetFill(fill)
}

/// `"yes"` or `"no"`
pub fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Base {
    Bin,
    Oct,
    #[default]
    Dec,
    Hex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum FloatMode {
    #[default]
    General,
    Fixed,
    Scientific,
}

/// Formatting state carried across the tokens of one streamed line
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StreamStyle {
    base: Base,
    float_mode: FloatMode,
    uppercase: bool,
    show_base: bool,
    show_pos: bool,
    show_point: bool,
    precision: Option<usize>,
    width: usize,
    fill: char,
    align: Align,
}

impl Default for StreamStyle {
    fn default() -> Self {
        Self {
            base: Base::default(),
            float_mode: FloatMode::default(),
            uppercase: false,
            show_base: false,
            show_pos: false,
            show_point: false,
            precision: None,
            width: 0,
            fill: ' ',
            align: Align::Right,
        }
    }
}

impl StreamStyle {
    /// Apply a manipulator; `Quote` is handled by the worker
    pub fn apply(&mut self, manip: Manip) {
        match manip {
            Manip::Hex => self.base = Base::Hex,
            Manip::Oct => self.base = Base::Oct,
            Manip::Dec => self.base = Base::Dec,
            Manip::Bin => self.base = Base::Bin,
            Manip::Uppercase => self.uppercase = true,
            Manip::NoUppercase => self.uppercase = false,
            Manip::ShowBase => self.show_base = true,
            Manip::NoShowBase => self.show_base = false,
            Manip::ShowPos => self.show_pos = true,
            Manip::NoShowPos => self.show_pos = false,
            Manip::ShowPoint => self.show_point = true,
            Manip::NoShowPoint => self.show_point = false,
            Manip::Fixed => self.float_mode = FloatMode::Fixed,
            Manip::Scientific => self.float_mode = FloatMode::Scientific,
            Manip::DefaultFloat => self.float_mode = FloatMode::General,
            Manip::Left => self.align = Align::Left,
            Manip::Right => self.align = Align::Right,
            Manip::Internal => self.align = Align::SignAware,
            Manip::SetPrecision(precision) => self.precision = Some(precision.min(MAX_WIDTH)),
            Manip::SetWidth(width) => self.width = width.min(MAX_WIDTH),
            Manip::SetFill(fill) => self.fill = fill,
            Manip::Quote => {}
        }
    }

    /// Specifier for the next value of `class`; consumes the one-shot width
    pub fn next_spec(&mut self, class: ValueClass) -> FormatSpec {
        let mut spec = FormatSpec::defaults_for(class);
        spec.fill = self.fill;
        spec.align = self.align;
        spec.width = std::mem::take(&mut self.width);

        match class {
            ValueClass::Integral => {
                spec.presentation = match (self.base, self.uppercase) {
                    (Base::Bin, _) => Some('b'),
                    (Base::Oct, _) => Some('o'),
                    (Base::Dec, _) => None,
                    (Base::Hex, false) => Some('x'),
                    (Base::Hex, true) => Some('X'),
                };
                spec.alternate_form = self.show_base;
                spec.sign = self.sign();
            }
            ValueClass::Floating => {
                spec.presentation = match (self.float_mode, self.uppercase) {
                    (FloatMode::General, false) => None,
                    (FloatMode::General, true) => Some('G'),
                    (FloatMode::Fixed, false) => Some('f'),
                    (FloatMode::Fixed, true) => Some('F'),
                    (FloatMode::Scientific, false) => Some('e'),
                    (FloatMode::Scientific, true) => Some('E'),
                };
                spec.alternate_form = self.show_point;
                spec.precision = self.precision;
                spec.sign = self.sign();
            }
            ValueClass::Other => {}
        }

        spec
    }

    fn sign(&self) -> Sign {
        if self.show_pos {
            Sign::ShowBoth
        } else {
            Sign::NegativeOnly
        }
    }
}
