/// Represents a single point in a call script.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub idx: usize,
    pub row: usize,
    pub col: usize,
}

impl Default for Point {
    fn default() -> Self {
        Point {
            idx: 0,
            row: 1,
            col: 1,
        }
    }
}

impl Point {
    /// Constructs the point `len` characters further along the same line.
    /// Assumes that the skipped characters are ASCII.
    pub fn advance(&self, len: usize) -> Self {
        Point {
            idx: self.idx + len,
            row: self.row,
            col: self.col + len,
        }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{}:{}", self.row, self.col)
    }
}

/// Represents a span of text in a call script.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    pub lo: Point,
    pub hi: Point,
}

impl Span {
    pub fn new(lo: Point, hi: Point) -> Self {
        Span { lo, hi }
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{}", self.lo)
    }
}
