//! Helpers for messages written to stderr.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message with a "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_are_applied() {
        let mut buf = Vec::new();
        write_error(&mut buf, "bad seed").unwrap();
        display_warning(&mut buf, "input closed").unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "Error: bad seed\nWARNING: input closed\n");
    }
}
