//! Input helpers shared by interactive commands.

use std::io::BufRead;

/// Read one line from `stdin`, trimmed.
///
/// Returns `None` on EOF or a read error so interactive loops can treat both
/// as the user leaving.
///
/// ```rust
/// # use blackjack_cli::io_utils::read_stdin_line;
/// let mut input = std::io::Cursor::new("  hit \n");
/// assert_eq!(read_stdin_line(&mut input).as_deref(), Some("hit"));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => {
            let trimmed = line.trim();
            Some(trimmed.to_string())
        }
        Err(_) => None, // Read error
    }
}
