use crate::function::Type;
use crate::span;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Error {
    span: span::Span,
    kind: ErrorKind,
}

impl Error {
    pub fn new(span: span::Span, kind: ErrorKind) -> Self {
        Error { span, kind }
    }

    pub fn span(&self) -> span::Span {
        self.span
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    UnknownFunction,
    InvalidInteger,
    OutOfRange(Type),
    Arity { expected: usize, found: usize },
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorKind::*;
        write!(fmt, "{} error:", self.span)?;
        match &self.kind {
        | UnknownFunction               => write!(fmt, "Unknown function"),
        | InvalidInteger                => write!(fmt, "Invalid integer literal"),
        | OutOfRange(r#type)            => write!(fmt, "Integer literal out of range for {}", r#type),
        | Arity { expected, found }     => write!(fmt, "Expected {} arguments but found {}", expected, found),
        }
    }
}

impl std::error::Error for Error {}
