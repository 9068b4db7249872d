//! Template splitting and argument binding

use super::error::{FormatError, FormatErrorKind};
use super::render::format_value;
use super::value::FormatArg;

/// One piece of a parsed template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text copied to the output, escapes already resolved
    Literal(String),
    /// `{index[:spec]}`; `raw` is everything between the braces
    Placeholder {
        index: usize,
        spec: String,
        raw: String,
    },
}

/// A parsed template that can be rendered any number of times
///
/// # Example
///
/// ```
/// use variadic_logger::format::Template;
///
/// let template = Template::parse("{0} has {1:>3} items").unwrap();
/// assert_eq!(template.render(&[&"cart", &7]).unwrap(), "cart has   7 items");
/// assert_eq!(template.render(&[&"box", &12]).unwrap(), "box has  12 items");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    pub fn parse(source: &str) -> Result<Self, FormatError> {
        let segments = split(source).map_err(|kind| FormatError::new(source, kind))?;
        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn placeholder_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|segment| matches!(segment, Segment::Placeholder { .. }))
            .count()
    }

    pub fn render(&self, args: &[&dyn FormatArg]) -> Result<String, FormatError> {
        let mut out = String::new();
        self.render_into(&mut out, args)?;
        Ok(out)
    }

    /// Append the rendered template to `out`
    ///
    /// Argument `i` replaces every placeholder whose index is `i`, so one
    /// argument may appear several times and in any order. Placeholders with
    /// no matching argument are written back verbatim. On error `out` is left
    /// untouched.
    pub fn render_into(&self, out: &mut String, args: &[&dyn FormatArg]) -> Result<(), FormatError> {
        let mut rendered: Vec<Option<String>> = vec![None; self.segments.len()];

        for (arg_index, arg) in args.iter().enumerate() {
            let value = arg.to_value();
            for (slot, segment) in rendered.iter_mut().zip(&self.segments) {
                if let Segment::Placeholder { index, spec, .. } = segment {
                    if *index == arg_index {
                        let text = format_value(&value, spec)
                            .map_err(|kind| FormatError::new(self.source.as_str(), kind))?;
                        *slot = Some(text);
                    }
                }
            }
        }

        for (segment, slot) in self.segments.iter().zip(&rendered) {
            match (segment, slot) {
                (_, Some(text)) => out.push_str(text),
                (Segment::Literal(text), None) => out.push_str(text),
                (Segment::Placeholder { raw, .. }, None) => {
                    out.push('{');
                    out.push_str(raw);
                    out.push('}');
                }
            }
        }

        Ok(())
    }
}

fn split(source: &str) -> Result<Vec<Segment>, FormatErrorKind> {
    let bytes = source.as_bytes();
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'{' if bytes.get(i + 1) == Some(&b'{') => {
                literal.push('{');
                i += 2;
            }
            b'}' if bytes.get(i + 1) == Some(&b'}') => {
                literal.push('}');
                i += 2;
            }
            b'{' => {
                let close = source[i + 1..]
                    .find('}')
                    .map(|offset| i + 1 + offset)
                    .ok_or(FormatErrorKind::UnclosedPlaceholder { position: i })?;

                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(parse_placeholder(&source[i + 1..close])?);
                i = close + 1;
            }
            _ => {
                // copy up to the next brace; a lone '}' is kept as text
                let next = source[i..]
                    .char_indices()
                    .skip(1)
                    .find(|&(_, ch)| ch == '{' || ch == '}')
                    .map_or(bytes.len(), |(offset, _)| i + offset);
                literal.push_str(&source[i..next]);
                i = next;
            }
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }

    Ok(segments)
}

fn parse_placeholder(raw: &str) -> Result<Segment, FormatErrorKind> {
    let (index_text, spec) = raw.split_once(':').unwrap_or((raw, ""));

    if index_text.is_empty() {
        return Err(FormatErrorKind::MissingIndex {
            raw: raw.to_string(),
        });
    }

    if !index_text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FormatErrorKind::InvalidIndex {
            index: index_text.to_string(),
        });
    }

    let index = index_text
        .parse()
        .map_err(|_| FormatErrorKind::InvalidIndex {
            index: index_text.to_string(),
        })?;

    Ok(Segment::Placeholder {
        index,
        spec: spec.to_string(),
        raw: raw.to_string(),
    })
}
