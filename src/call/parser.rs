use std::fmt;

use crate::call::Error;
use crate::call::ErrorKind;
use crate::function::Function;
use crate::print::Value;
use crate::span;

/// A single helper invocation read from a call script.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Call {
    pub span: span::Span,
    pub function: Function,
    pub arguments: Vec<Value>,
}

impl fmt::Display for Call {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.function)?;
        for argument in &self.arguments {
            write!(fmt, " {}", argument)?;
        }
        Ok(())
    }
}

/// Parses a call script: one `<function> <argument>...` per line. Blank
/// lines and lines starting with `#` are skipped.
pub fn parse(source: &str) -> Result<Vec<Call>, Error> {
    let mut calls = Vec::new();
    let mut start = span::Point::default();

    for line in source.split('\n') {
        let words = Words::new(line.trim_end_matches('\r'), start);

        match words.peek() {
        | None => (),
        | Some((_, word)) if word.starts_with('#') => (),
        | Some(_) => calls.push(parse_line(words)?),
        }

        start = span::Point {
            idx: start.idx + line.len() + 1,
            row: start.row + 1,
            col: 1,
        };
    }

    Ok(calls)
}

fn parse_line(mut words: Words) -> Result<Call, Error> {
    let (name_span, name) = words.next().ok_or_else(|| Error::new(words.span(), ErrorKind::UnknownFunction))?;

    let function = name
        .parse::<Function>()
        .map_err(|kind| Error::new(name_span, kind))?;

    let words = words.collect::<Vec<_>>();
    let parameters = function.parameters();

    if words.len() != parameters.len() {
        return Err(Error::new(
            name_span,
            ErrorKind::Arity {
                expected: parameters.len(),
                found: words.len(),
            },
        ));
    }

    let arguments = parameters
        .iter()
        .zip(&words)
        .map(|(parameter, (span, word))| parameter.parse(word).map_err(|kind| Error::new(*span, kind)))
        .collect::<Result<Vec<_>, _>>()?;

    let hi = words.last().map_or(name_span.hi, |(span, _)| span.hi);

    Ok(Call {
        span: span::Span::new(name_span.lo, hi),
        function,
        arguments,
    })
}

/// Whitespace-separated words of one line, each with its span.
#[derive(Clone)]
struct Words<'source> {
    line: &'source str,
    start: span::Point,
    offset: usize,
}

impl<'source> Words<'source> {
    fn new(line: &'source str, start: span::Point) -> Self {
        Words { line, start, offset: 0 }
    }

    fn span(&self) -> span::Span {
        let point = self.start.advance(self.offset);
        span::Span::new(point, point)
    }

    fn peek(&self) -> Option<(span::Span, &'source str)> {
        self.clone().next()
    }
}

impl<'source> Iterator for Words<'source> {
    type Item = (span::Span, &'source str);
    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.line[self.offset..];
        let skip = rest.len() - rest.trim_start().len();
        let rest = &rest[skip..];

        if rest.is_empty() {
            self.offset = self.line.len();
            return None;
        }

        let len = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let lo = self.start.advance(self.offset + skip);
        let hi = lo.advance(len);

        self.offset += skip + len;
        Some((span::Span::new(lo, hi), &rest[..len]))
    }
}
