//! Line input for interactive commands.

use std::io::BufRead;

/// Reads one trimmed line. `None` on EOF or a read error.
///
/// ```rust
/// use std::io::Cursor;
/// use railbird_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new("  raise 150 \n");
/// assert_eq!(read_stdin_line(&mut input).as_deref(), Some("raise 150"));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}
