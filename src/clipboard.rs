//! Clipboard utilities for copying generated content.

use anyhow::Result;

/// Copy text to clipboard using both OSC 52 and the system clipboard.
///
/// OSC 52 reaches the terminal's clipboard even over SSH, where a
/// system clipboard may not exist; the arboard copy covers local
/// sessions whose terminal ignores OSC 52.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    copy_via_osc52(text)?;

    // Also try system clipboard
    use arboard::Clipboard;
    if let Ok(mut clipboard) = Clipboard::new() {
        let _ = clipboard.set_text(text);
    }

    Ok(())
}

/// Copy text to clipboard using OSC 52 escape sequence
fn copy_via_osc52(text: &str) -> Result<()> {
    let sequence = osc52_sequence(text, std::env::var("TMUX").is_ok());

    // Write to stdout
    use std::io::Write;
    let mut stdout = std::io::stdout();
    stdout.write_all(sequence.as_bytes())?;
    stdout.flush()?;

    Ok(())
}

/// Build the OSC 52 sequence, wrapped for tmux passthrough when needed
fn osc52_sequence(text: &str, in_tmux: bool) -> String {
    use base64::Engine;
    let base64_text = base64::engine::general_purpose::STANDARD.encode(text);
    let osc52 = format!("\x1b]52;c;{}\x07", base64_text);

    if in_tmux {
        // Wrap OSC 52 for tmux
        format!("\x1bPtmux;\x1b{}\x1b\\", osc52)
    } else {
        osc52
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sequence_carries_base64_payload() {
        let sequence = osc52_sequence("HOOK: try this", false);
        assert!(sequence.starts_with("\x1b]52;c;"));
        assert!(sequence.ends_with('\x07'));

        let payload = sequence
            .trim_start_matches("\x1b]52;c;")
            .trim_end_matches('\x07');
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(payload)
            .unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), "HOOK: try this");
    }

    #[test]
    fn test_tmux_wraps_in_dcs_passthrough() {
        let sequence = osc52_sequence("caption", true);
        assert!(sequence.starts_with("\x1bPtmux;"));
        assert!(sequence.ends_with("\x1b\\"));
        assert!(sequence.contains("]52;c;"));
    }
}
