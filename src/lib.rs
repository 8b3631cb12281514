pub mod abi;
pub mod call;
mod driver;
mod error;
pub mod function;
pub mod print;
mod span;
mod util;

pub use driver::Driver;
pub use error::Error;
pub use span::{Point, Span};
