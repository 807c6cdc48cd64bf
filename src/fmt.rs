use ansiterm::{Colour, Style};
use std::io::{self, Write};

pub fn println_warn<X: Into<String>>(txt: X) {
    tracing::warn!("{}: {}", Colour::Yellow.paint("warning"), txt.into());
}

pub fn bold(text: &str) -> String {
    let style = Style::new().bold();
    format!("{}", style.paint(text))
}

/// Escapes the data part of a workflow command so it survives on one line.
pub fn escape_data(data: &str) -> String {
    data.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Emits `::error::<message>`, which the runner turns into a failed-step annotation.
pub fn write_error_command<W: Write>(writer: &mut W, message: &str) -> io::Result<()> {
    writeln!(writer, "::error::{}", escape_data(message))
}

/// Reports a fatal error the way a failing action step does. The caller sets the exit code.
pub fn set_failed(message: &str) {
    tracing::debug!("error: {}", message);
    let mut stdout = io::stdout().lock();
    if write_error_command(&mut stdout, message).is_err() {
        eprintln!("{message}");
    }
}
