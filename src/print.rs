use std::fmt;
use std::io::Write;

/// A fixed-width integer argument, tagged with its width and signedness.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Value {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
}

impl fmt::Display for Value {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
        | Value::U8(value) => write!(fmt, "{}", value),
        | Value::U16(value) => write!(fmt, "{}", value),
        | Value::U32(value) => write!(fmt, "{}", value),
        | Value::U64(value) => write!(fmt, "{}", value),
        | Value::I8(value) => write!(fmt, "{}", value),
        | Value::I16(value) => write!(fmt, "{}", value),
        | Value::I32(value) => write!(fmt, "{}", value),
        | Value::I64(value) => write!(fmt, "{}", value),
        }
    }
}

/// How a helper renders its argument.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Format {
    /// Decimal according to the argument's own width and signedness.
    #[default]
    Typed,

    /// Decimal according to the C conversion specifier each helper was
    /// originally written with. `%d` on an unsigned 32-bit sum reads the
    /// bits back as signed.
    Printf,
}

/// Writes `value` in decimal followed by a newline.
pub fn write_line<W: Write>(mut writer: W, value: Value) -> std::io::Result<()> {
    writeln!(writer, "{}", value)
}

/// Unsigned 32-bit addition, wrapping mod 2^32.
pub fn sum(x: u32, y: u32) -> u32 {
    x.wrapping_add(y)
}

/// Renders the wrapped sum of `x` and `y` under `format`.
pub fn sum_value(format: Format, x: u32, y: u32) -> Value {
    match format {
    | Format::Typed => Value::U32(sum(x, y)),
    | Format::Printf => Value::I32(sum(x, y) as i32),
    }
}
