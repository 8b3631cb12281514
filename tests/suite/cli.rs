use std::fs;
use std::io::Write as _;

use tempfile::NamedTempFile;

use super::intprint;
use super::stderr;
use super::stdout;

#[test]
pub fn single_call() -> anyhow::Result<()> {
    pretty_assertions::assert_eq!(stdout(intprint(["print32", "42"]))?, "42\n");
    pretty_assertions::assert_eq!(stdout(intprint(["prints32", "-42"]))?, "-42\n");
    pretty_assertions::assert_eq!(stdout(intprint(["printsum", "10", "20"]))?, "30\n");
    pretty_assertions::assert_eq!(stdout(intprint(["printsum", "4294967295", "1"]))?, "0\n");
    Ok(())
}

#[test]
pub fn printf() -> anyhow::Result<()> {
    pretty_assertions::assert_eq!(stdout(intprint(["--printf", "printsum", "4294967295", "0"]))?, "-1\n");
    pretty_assertions::assert_eq!(stdout(intprint(["printsum", "4294967295", "0"]))?, "4294967295\n");
    Ok(())
}

#[test]
pub fn exported() -> anyhow::Result<()> {
    pretty_assertions::assert_eq!(stdout(intprint(["--exported", "print64", "18446744073709551615"]))?, "18446744073709551615\n");
    pretty_assertions::assert_eq!(stdout(intprint(["--exported", "prints8", "-128"]))?, "-128\n");
    pretty_assertions::assert_eq!(stdout(intprint(["--exported", "printsum", "4294967295", "1"]))?, "0\n");
    Ok(())
}

#[test]
pub fn script() -> anyhow::Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(&mut file, "printbool 1")?;
    writeln!(&mut file, "print16 65535")?;
    writeln!(&mut file, "prints64 -9223372036854775808")?;
    let path = file.into_temp_path();
    let path = path.to_string_lossy();

    let typed = stdout(intprint(["--script", &*path]))?;
    let exported = stdout(intprint(["--exported", "--script", &*path]))?;

    insta::assert_snapshot!(typed, @r###"
    1
    65535
    -9223372036854775808
    "###);
    pretty_assertions::assert_eq!(typed, exported);
    Ok(())
}

#[test]
pub fn output_file() -> anyhow::Result<()> {
    let output = NamedTempFile::new()?.into_temp_path();
    let printed = stdout(intprint(["-o", &*output.to_string_lossy(), "print8", "200"]))?;

    pretty_assertions::assert_eq!(printed, "");
    pretty_assertions::assert_eq!(fs::read_to_string(&output)?, "200\n");
    Ok(())
}

#[test]
pub fn list() -> anyhow::Result<()> {
    insta::assert_snapshot!(stdout(intprint(["--list"]))?, @r###"
    printbool(u8)
    print8(u8)
    print16(u16)
    print32(u32)
    print64(u64)
    prints8(i8)
    prints16(i16)
    prints32(i32)
    prints64(i64)
    printsum(u32, u32)
    "###);
    Ok(())
}

#[test]
pub fn failures() -> anyhow::Result<()> {
    assert!(stderr(intprint(["print8", "256"]))?.contains("1:8 error:Integer literal out of range for u8"));
    assert!(stderr(intprint(["printf", "1"]))?.contains("1:1 error:Unknown function"));
    assert!(stderr(intprint(["printsum", "1"]))?.contains("Expected 2 arguments but found 1"));
    assert!(stderr(intprint(Vec::<&str>::new()))?.contains("Expected a helper name"));
    Ok(())
}
