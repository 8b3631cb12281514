use std::fmt;
use std::io::Write;
use std::num::IntErrorKind;
use std::str::FromStr;

use crate::abi;
use crate::call::ErrorKind;
use crate::error;
use crate::print;
use crate::print::Format;
use crate::print::Value;

/// Parameter type of an exported helper.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Type {
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
}

impl Type {
    pub fn name(&self) -> &'static str {
        match self {
        | Type::U8 => "u8",
        | Type::U16 => "u16",
        | Type::U32 => "u32",
        | Type::U64 => "u64",
        | Type::I8 => "i8",
        | Type::I16 => "i16",
        | Type::I32 => "i32",
        | Type::I64 => "i64",
        }
    }

    /// Parses decimal `text` as a value of this type.
    pub fn parse(&self, text: &str) -> Result<Value, ErrorKind> {
        let wide = text.parse::<i128>().map_err(|error| match error.kind() {
        | IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ErrorKind::OutOfRange(*self),
        | _ => ErrorKind::InvalidInteger,
        })?;
        let value = match self {
        | Type::U8 => u8::try_from(wide).map(Value::U8).ok(),
        | Type::U16 => u16::try_from(wide).map(Value::U16).ok(),
        | Type::U32 => u32::try_from(wide).map(Value::U32).ok(),
        | Type::U64 => u64::try_from(wide).map(Value::U64).ok(),
        | Type::I8 => i8::try_from(wide).map(Value::I8).ok(),
        | Type::I16 => i16::try_from(wide).map(Value::I16).ok(),
        | Type::I32 => i32::try_from(wide).map(Value::I32).ok(),
        | Type::I64 => i64::try_from(wide).map(Value::I64).ok(),
        };
        value.ok_or(ErrorKind::OutOfRange(*self))
    }

    fn accepts(&self, value: &Value) -> bool {
        matches!(
            (self, value),
            (Type::U8, Value::U8(_))
                | (Type::U16, Value::U16(_))
                | (Type::U32, Value::U32(_))
                | (Type::U64, Value::U64(_))
                | (Type::I8, Value::I8(_))
                | (Type::I16, Value::I16(_))
                | (Type::I32, Value::I32(_))
                | (Type::I64, Value::I64(_))
        )
    }
}

impl fmt::Display for Type {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.name())
    }
}

/// One of the exported print helpers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Function {
    PrintBool,
    Print8,
    Print16,
    Print32,
    Print64,
    PrintS8,
    PrintS16,
    PrintS32,
    PrintS64,
    PrintSum,
}

impl Function {
    pub const ALL: [Function; 10] = [
        Function::PrintBool,
        Function::Print8,
        Function::Print16,
        Function::Print32,
        Function::Print64,
        Function::PrintS8,
        Function::PrintS16,
        Function::PrintS32,
        Function::PrintS64,
        Function::PrintSum,
    ];

    /// Exported symbol name.
    pub fn name(&self) -> &'static str {
        match self {
        | Function::PrintBool => abi::PRINTBOOL,
        | Function::Print8 => abi::PRINT8,
        | Function::Print16 => abi::PRINT16,
        | Function::Print32 => abi::PRINT32,
        | Function::Print64 => abi::PRINT64,
        | Function::PrintS8 => abi::PRINTS8,
        | Function::PrintS16 => abi::PRINTS16,
        | Function::PrintS32 => abi::PRINTS32,
        | Function::PrintS64 => abi::PRINTS64,
        | Function::PrintSum => abi::PRINTSUM,
        }
    }

    pub fn parameters(&self) -> &'static [Type] {
        match self {
        | Function::PrintBool | Function::Print8 => &[Type::U8],
        | Function::Print16 => &[Type::U16],
        | Function::Print32 => &[Type::U32],
        | Function::Print64 => &[Type::U64],
        | Function::PrintS8 => &[Type::I8],
        | Function::PrintS16 => &[Type::I16],
        | Function::PrintS32 => &[Type::I32],
        | Function::PrintS64 => &[Type::I64],
        | Function::PrintSum => &[Type::U32, Type::U32],
        }
    }

    pub fn signature(&self) -> Signature {
        Signature(*self)
    }

    /// Writes exactly the line the exported helper would print.
    pub fn call<W: Write>(
        &self,
        format: Format,
        arguments: &[Value],
        writer: W,
    ) -> Result<(), error::Error> {
        let parameters = self.parameters();

        if parameters.len() != arguments.len()
            || !parameters
                .iter()
                .zip(arguments)
                .all(|(parameter, argument)| parameter.accepts(argument))
        {
            return Err(error::Error::Signature(*self, arguments.to_vec()));
        }

        let value = match (self, arguments) {
        | (Function::PrintSum, [Value::U32(x), Value::U32(y)]) => print::sum_value(format, *x, *y),
        | (_, [value]) => *value,
        | _ => unreachable!(),
        };

        print::write_line(writer, value)?;
        Ok(())
    }
}

impl fmt::Display for Function {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.name())
    }
}

impl FromStr for Function {
    type Err = ErrorKind;
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Function::ALL
            .iter()
            .copied()
            .find(|function| function.name() == name)
            .ok_or(ErrorKind::UnknownFunction)
    }
}

/// Displays a helper as `name(type, ...)`.
pub struct Signature(Function);

impl fmt::Display for Signature {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}(", self.0.name())?;
        for (index, parameter) in self.0.parameters().iter().enumerate() {
            if index > 0 {
                write!(fmt, ", ")?;
            }
            write!(fmt, "{}", parameter)?;
        }
        write!(fmt, ")")
    }
}
