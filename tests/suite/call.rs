use intprint::call;
use intprint::call::ErrorKind;
use intprint::function::Function;
use intprint::function::Type;
use intprint::print::Value;

fn error(source: &str) -> call::Error {
    call::parse(source).unwrap_err()
}

#[test]
pub fn parse_script() {
    let source = "\
# marshaling smoke test
print32 42

  prints32   -42
printsum 10 20\r
";

    let calls = call::parse(source).unwrap();
    let summary = calls
        .iter()
        .map(|call| format!("{} {}", call.span, call))
        .collect::<Vec<_>>()
        .join("\n");

    insta::assert_snapshot!(summary, @r###"
    2:1 print32 42
    4:3 prints32 -42
    5:1 printsum 10 20
    "###);

    pretty_assertions::assert_eq!(calls[1].function, Function::PrintS32);
    pretty_assertions::assert_eq!(calls[1].arguments, vec![Value::I32(-42)]);
    pretty_assertions::assert_eq!(calls[2].arguments, vec![Value::U32(10), Value::U32(20)]);
}

#[test]
pub fn parse_empty() {
    assert!(call::parse("").unwrap().is_empty());
    assert!(call::parse("\n\n   \n# only comments\n").unwrap().is_empty());
}

#[test]
pub fn parse_every_type() {
    let calls = call::parse(
        "printbool 1\nprint8 255\nprint16 65535\nprint32 4294967295\nprint64 18446744073709551615\n\
         prints8 -128\nprints16 -32768\nprints32 -2147483648\nprints64 -9223372036854775808\n",
    )
    .unwrap();

    let arguments = calls.into_iter().flat_map(|call| call.arguments).collect::<Vec<_>>();
    pretty_assertions::assert_eq!(
        arguments,
        vec![
            Value::U8(1),
            Value::U8(255),
            Value::U16(u16::MAX),
            Value::U32(u32::MAX),
            Value::U64(u64::MAX),
            Value::I8(i8::MIN),
            Value::I16(i16::MIN),
            Value::I32(i32::MIN),
            Value::I64(i64::MIN),
        ],
    );
}

#[test]
pub fn unknown_function() {
    let error = error("print32 1\n  println 1\n");
    pretty_assertions::assert_eq!(error.kind(), &ErrorKind::UnknownFunction);
    pretty_assertions::assert_eq!(error.to_string(), "2:3 error:Unknown function");
}

#[test]
pub fn invalid_integer() {
    let error = error("print16 0x10");
    pretty_assertions::assert_eq!(error.kind(), &ErrorKind::InvalidInteger);
    pretty_assertions::assert_eq!(error.to_string(), "1:9 error:Invalid integer literal");

    assert_eq!(call::parse("print8 1.5").unwrap_err().kind(), &ErrorKind::InvalidInteger);
}

#[test]
pub fn out_of_range() {
    let error = error("printsum 1 4294967296");
    pretty_assertions::assert_eq!(error.kind(), &ErrorKind::OutOfRange(Type::U32));
    pretty_assertions::assert_eq!(error.to_string(), "1:12 error:Integer literal out of range for u32");

    assert_eq!(call::parse("print8 -1").unwrap_err().kind(), &ErrorKind::OutOfRange(Type::U8));
    assert_eq!(call::parse("prints8 128").unwrap_err().kind(), &ErrorKind::OutOfRange(Type::I8));

    // Wider than any intermediate representation
    let error = self::error("print64 1000000000000000000000000000000000000000000");
    pretty_assertions::assert_eq!(error.kind(), &ErrorKind::OutOfRange(Type::U64));
    pretty_assertions::assert_eq!(error.to_string(), "1:9 error:Integer literal out of range for u64");
    assert_eq!(
        call::parse("prints64 -1000000000000000000000000000000000000000000").unwrap_err().kind(),
        &ErrorKind::OutOfRange(Type::I64),
    );
}

#[test]
pub fn arity() {
    let error = error("printsum 1");
    pretty_assertions::assert_eq!(error.kind(), &ErrorKind::Arity { expected: 2, found: 1 });
    pretty_assertions::assert_eq!(error.to_string(), "1:1 error:Expected 2 arguments but found 1");

    assert_eq!(
        call::parse("print64 1 2").unwrap_err().kind(),
        &ErrorKind::Arity { expected: 1, found: 2 },
    );
}
