use glassdesk_core::{Config, Renderer, ShellAction};
use std::io::{self, BufWriter, Stdout, Write};

/// Writes every shell action to stdout as one JSON document per line.
#[derive(Debug)]
pub struct JsonLinesRenderer {
    out: BufWriter<Stdout>,
}

impl Renderer for JsonLinesRenderer {
    fn new(_: &impl Config) -> Self {
        Self {
            out: BufWriter::new(io::stdout()),
        }
    }

    fn execute_action(&mut self, act: ShellAction) {
        if let Err(err) = write_action(&mut self.out, &act) {
            tracing::error!("Cannot write action: {}", err);
        }
    }

    fn flush(&mut self) {
        if let Err(err) = self.out.flush() {
            tracing::error!("Cannot flush actions: {}", err);
        }
    }
}

fn write_action(out: &mut impl Write, act: &ShellAction) -> io::Result<()> {
    serde_json::to_writer(&mut *out, act)?;
    out.write_all(b"\n")
}
