use std::io::BufWriter;
use std::io::Write;

use crate::call;
use crate::error;
use crate::print::Format;
use crate::util::Tap;

pub struct Driver<'main> {
    format: Format,
    output: Option<&'main std::path::Path>,
}

impl<'main> Driver<'main> {
    /// Writes to `output` if provided, and standard output otherwise.
    pub fn new(format: Format, output: Option<&'main std::path::Path>) -> Self {
        Driver { format, output }
    }

    fn writer(&self) -> Result<Box<dyn Write>, error::Error> {
        match self.output {
        | None => Ok(Box::new(std::io::stdout().lock())),
        | Some(path) => path
            .tap(std::fs::File::create)
            .map(BufWriter::new)
            .map(|writer| Box::new(writer) as Box<dyn Write>)
            .map_err(error::Error::from),
        }
    }

    pub fn drive(&self, calls: &[call::Call]) -> Result<(), error::Error> {
        let mut writer = self.writer()?;

        for call in calls {
            log::debug!("{} {}", call.span, call);
            call.function.call(self.format, &call.arguments, &mut writer)?;
        }

        writer.flush()?;
        Ok(())
    }

    pub fn drive_script(&self, path: &std::path::Path) -> Result<(), error::Error> {
        let source = std::fs::read_to_string(path)?;
        let calls = call::parse(&source)?;
        log::info!("Parsed {} calls from {}", calls.len(), path.display());
        self.drive(&calls)
    }
}
