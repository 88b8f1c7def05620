use anyhow::Result;
use std::io::{self, Write};

/// Printed in place of the generated text when the server sent none.
pub const NO_RESPONSE: &str = "None";

pub trait GenerateEventHandler: Send + Sync {
    fn on_response(&self, response: Option<&str>) -> Result<()>;
}

pub fn render_response(response: Option<&str>) -> &str {
    response.unwrap_or(NO_RESPONSE)
}

/// Write the rendered response as exactly one line.
pub fn write_response<W: Write>(mut writer: W, response: Option<&str>) -> Result<()> {
    writeln!(writer, "{}", render_response(response))?;
    writer.flush()?;
    Ok(())
}

pub struct DefaultGenerateEventHandler;

impl GenerateEventHandler for DefaultGenerateEventHandler {
    fn on_response(&self, response: Option<&str>) -> Result<()> {
        write_response(io::stdout().lock(), response)
    }
}
