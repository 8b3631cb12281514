mod error;
mod parser;

pub use error::{Error, ErrorKind};
pub use parser::{parse, Call};
