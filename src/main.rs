use std::path::PathBuf;

use anyhow::anyhow;
use anyhow::Context as _;
use clap::Parser;

use intprint::abi;
use intprint::call;
use intprint::function::Function;
use intprint::print::Format;

#[derive(Debug, Parser)]
#[clap(name = "intprint", allow_negative_numbers = true, about = "Print fixed-width integers the way the exported helpers do.")]
struct Command {
    /// Replicate the original C conversion specifiers
    #[clap(long = "printf")]
    printf: bool,

    /// Call the exported C ABI symbols directly (always writes to standard output)
    #[clap(long = "exported", conflicts_with_all = &["printf", "output"])]
    exported: bool,

    /// Write output to this file instead of standard output
    #[clap(short = 'o', long = "output", parse(from_os_str))]
    output: Option<PathBuf>,

    /// Run every call in a script file, one call per line
    #[clap(long = "script", parse(from_os_str), conflicts_with = "call")]
    script: Option<PathBuf>,

    /// List every helper and its signature
    #[clap(long = "list", conflicts_with_all = &["call", "script"])]
    list: bool,

    /// Helper name followed by its arguments
    #[clap(allow_hyphen_values = true)]
    call: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let command = Command::parse();

    if command.list {
        for function in Function::ALL {
            println!("{}", function.signature());
        }
        return Ok(());
    }

    if command.exported {
        let calls = match &command.script {
            Some(script) => std::fs::read_to_string(script)
                .map_err(anyhow::Error::from)
                .and_then(|source| call::parse(&source).map_err(anyhow::Error::from))
                .with_context(|| anyhow!("Reading script: {}", script.display()))?,
            None => parse_arguments(&command.call)?,
        };
        for call in &calls {
            log::debug!("{} {}", call.span, call);
            abi::invoke(call.function, &call.arguments)?;
        }
        return Ok(());
    }

    let format = if command.printf { Format::Printf } else { Format::Typed };
    let driver = intprint::Driver::new(format, command.output.as_deref());

    if let Some(script) = &command.script {
        return driver
            .drive_script(script)
            .with_context(|| anyhow!("Running script: {}", script.display()));
    }

    let calls = parse_arguments(&command.call)?;
    driver.drive(&calls).context("Running call")
}

fn parse_arguments(arguments: &[String]) -> anyhow::Result<Vec<call::Call>> {
    if arguments.is_empty() {
        return Err(anyhow!("Expected a helper name, `--script`, or `--list`"));
    }

    let source = arguments.join(" ");
    call::parse(&source).with_context(|| anyhow!("Parsing call: {}", source))
}
