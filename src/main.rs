// src/main.rs

use std::io::{self, BufRead, Write};

use anyhow::Context;
use log::{debug, info, warn};

use pixel_matrix::{CommandRouter, FileSink, RouterStatus, Verb, CONFIG};

/// Main entry point: an interactive command loop over stdin.
fn main() -> anyhow::Result<()> {
    // Default filter comes from the config if RUST_LOG is not set.
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(CONFIG.logging.default_filter.as_str()),
    )
    .format_timestamp_micros()
    .init();

    info!("Starting pixel-matrix...");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "Draw Simple Matrix\n")?;
    if CONFIG.session.show_help_on_start {
        writeln!(out, "Available commands:\n")?;
        writeln!(out, "{}\n", Verb::help_text())?;
    }

    let mut router = CommandRouter::with_config(FileSink, CONFIG.clone());
    let mut input = stdin.lock();

    loop {
        write!(out, "{}", CONFIG.session.prompt)?;
        out.flush().context("Failed to flush prompt")?;

        let Some(line) = read_command(&mut input).context("Failed to read command from stdin")?
        else {
            debug!("End of input");
            break;
        };

        match router.execute(&line) {
            Ok(RouterStatus::Running) => {}
            Ok(RouterStatus::Exit) => break,
            Err(e) => {
                warn!("Command '{}' failed: {}", line.trim(), e);
                writeln!(out, "error: {}", e)?;
            }
        }
    }

    writeln!(out, "\nbye.")?;
    info!("Session ended.");
    Ok(())
}

/// Reads one line, without its line ending. `None` at end of input.
///
/// Bytes that are not valid UTF-8 become U+FFFD, so such a line reaches the
/// router as an ordinary bad command instead of ending the session.
fn read_command(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&buf);
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_command_splits_lines() {
        let mut input: &[u8] = b"I 2 2\r\nL 1 1 A\nX";
        assert_eq!(read_command(&mut input).unwrap().as_deref(), Some("I 2 2"));
        assert_eq!(read_command(&mut input).unwrap().as_deref(), Some("L 1 1 A"));
        assert_eq!(read_command(&mut input).unwrap().as_deref(), Some("X"));
        assert_eq!(read_command(&mut input).unwrap(), None);
    }

    #[test]
    fn test_read_command_tolerates_invalid_utf8() {
        let mut input: &[u8] = b"\xff\xfe\nX\n";
        let line = read_command(&mut input).unwrap().unwrap();
        assert_eq!(line, "\u{FFFD}\u{FFFD}");
        assert_eq!(read_command(&mut input).unwrap().as_deref(), Some("X"));
    }
}
