//! # C ABI
//!
//! Print helpers exported with unmangled names for linking into foreign
//! programs, e.g. assembly emitted by a compiler under test:
//!
//! ```text
//! cc program.s -L target/release -lintprint -lpthread -ldl
//! ```
//!
//! Every helper writes one decimal line to standard output. Output errors
//! are logged and dropped, since there is no channel to report them through.

use crate::error;
use crate::function::Function;
use crate::print::Format;
use crate::print::Value;

pub const PRINTBOOL: &str = "printbool";
pub const PRINT8: &str = "print8";
pub const PRINT16: &str = "print16";
pub const PRINT32: &str = "print32";
pub const PRINT64: &str = "print64";
pub const PRINTS8: &str = "prints8";
pub const PRINTS16: &str = "prints16";
pub const PRINTS32: &str = "prints32";
pub const PRINTS64: &str = "prints64";
pub const PRINTSUM: &str = "printsum";

pub const LIBRARY: &[&str] = &[
    PRINTBOOL,
    PRINT8,
    PRINT16,
    PRINT32,
    PRINT64,
    PRINTS8,
    PRINTS16,
    PRINTS32,
    PRINTS64,
    PRINTSUM,
];

fn emit(function: Function, arguments: &[Value]) {
    let stdout = std::io::stdout();
    if let Err(error) = function.call(Format::Typed, arguments, stdout.lock()) {
        log::error!("Calling {}: {}", function, error);
    }
}

/// Calls the exported helper matching `function` with `arguments`.
pub fn invoke(function: Function, arguments: &[Value]) -> Result<(), error::Error> {
    match (function, arguments) {
    | (Function::PrintBool, [Value::U8(x)]) => printbool(*x),
    | (Function::Print8, [Value::U8(x)]) => print8(*x),
    | (Function::Print16, [Value::U16(x)]) => print16(*x),
    | (Function::Print32, [Value::U32(x)]) => print32(*x),
    | (Function::Print64, [Value::U64(x)]) => print64(*x),
    | (Function::PrintS8, [Value::I8(x)]) => prints8(*x),
    | (Function::PrintS16, [Value::I16(x)]) => prints16(*x),
    | (Function::PrintS32, [Value::I32(x)]) => prints32(*x),
    | (Function::PrintS64, [Value::I64(x)]) => prints64(*x),
    | (Function::PrintSum, [Value::U32(x), Value::U32(y)]) => printsum(*x, *y),
    | _ => return Err(error::Error::Signature(function, arguments.to_vec())),
    }
    Ok(())
}

#[no_mangle]
pub extern "C" fn printbool(x: u8) {
    emit(Function::PrintBool, &[Value::U8(x)])
}

#[no_mangle]
pub extern "C" fn print8(x: u8) {
    emit(Function::Print8, &[Value::U8(x)])
}

#[no_mangle]
pub extern "C" fn print16(x: u16) {
    emit(Function::Print16, &[Value::U16(x)])
}

#[no_mangle]
pub extern "C" fn print32(x: u32) {
    emit(Function::Print32, &[Value::U32(x)])
}

#[no_mangle]
pub extern "C" fn print64(x: u64) {
    emit(Function::Print64, &[Value::U64(x)])
}

#[no_mangle]
pub extern "C" fn prints8(x: i8) {
    emit(Function::PrintS8, &[Value::I8(x)])
}

#[no_mangle]
pub extern "C" fn prints16(x: i16) {
    emit(Function::PrintS16, &[Value::I16(x)])
}

#[no_mangle]
pub extern "C" fn prints32(x: i32) {
    emit(Function::PrintS32, &[Value::I32(x)])
}

#[no_mangle]
pub extern "C" fn prints64(x: i64) {
    emit(Function::PrintS64, &[Value::I64(x)])
}

/// Prints `x + y`, wrapping mod 2^32.
#[no_mangle]
pub extern "C" fn printsum(x: u32, y: u32) {
    emit(Function::PrintSum, &[Value::U32(x), Value::U32(y)])
}
