use crate::call;
use crate::function::Function;
use crate::print::Value;

#[derive(Debug)]
pub enum Error {
    Call(call::Error),
    Signature(Function, Vec<Value>),
    IO(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
        | Error::Call(error) => write!(fmt, "{}", error),
        | Error::Signature(function, arguments) => {
            write!(fmt, "Invalid arguments for {}: (", function.signature())?;
            for (index, argument) in arguments.iter().enumerate() {
                if index > 0 {
                    write!(fmt, ", ")?;
                }
                write!(fmt, "{:?}", argument)?;
            }
            write!(fmt, ")")
        }
        | Error::IO(error) => write!(fmt, "{}", error),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::IO(error)
    }
}

impl From<call::Error> for Error {
    fn from(error: call::Error) -> Self {
        Error::Call(error)
    }
}
