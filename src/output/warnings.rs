#![forbid(unsafe_code)]

//! Warning output on the diagnostic stream
//!
//! Warnings are written one per line to stderr, colored yellow when the
//! terminal (or `--color always`) allows it.

use std::fmt;
use std::io;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Warning for a rule that is turned off somewhere but never turned on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnnecessaryOffWarning<'a> {
    pub rule: &'a str,
}

impl fmt::Display for UnnecessaryOffWarning<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[eslint] rule `{}` is never turned on, you can remove the rule from your config",
            self.rule
        )
    }
}

/// Writes warning lines to any `WriteColor` sink
pub struct WarningWriter<W: WriteColor> {
    out: W,
}

impl WarningWriter<StandardStream> {
    /// Writer on stderr honoring the given color choice
    pub fn stderr(choice: ColorChoice) -> Self {
        WarningWriter {
            out: StandardStream::stderr(choice),
        }
    }
}

impl<W: WriteColor> WarningWriter<W> {
    pub fn new(out: W) -> Self {
        WarningWriter { out }
    }

    /// Write a single warning line
    pub fn warn(&mut self, message: &dyn fmt::Display) -> io::Result<()> {
        self.out
            .set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
        write!(self.out, "{message}")?;
        self.out.reset()?;
        writeln!(self.out)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Resolve the `auto` choice against whether stderr is a terminal
pub fn resolve_color_choice(choice: ColorChoice) -> ColorChoice {
    use std::io::IsTerminal;

    match choice {
        ColorChoice::Auto if !io::stderr().is_terminal() => ColorChoice::Never,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::{Ansi, NoColor};

    #[test]
    fn test_warning_message_text() {
        let warning = UnnecessaryOffWarning { rule: "no-console" };
        assert_eq!(
            warning.to_string(),
            "[eslint] rule `no-console` is never turned on, you can remove the rule from your config"
        );
    }

    #[test]
    fn test_plain_writer() {
        let mut writer = WarningWriter::new(NoColor::new(Vec::new()));
        writer.warn(&UnnecessaryOffWarning { rule: "a" }).unwrap();
        writer.warn(&UnnecessaryOffWarning { rule: "b" }).unwrap();

        let text = String::from_utf8(writer.into_inner().into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("`a`"));
        assert!(lines[1].contains("`b`"));
    }

    #[test]
    fn test_ansi_writer_colors_line() {
        let mut writer = WarningWriter::new(Ansi::new(Vec::new()));
        writer.warn(&"careful").unwrap();

        let text = String::from_utf8(writer.into_inner().into_inner()).unwrap();
        assert!(text.starts_with("\x1b["));
        assert!(text.contains("careful"));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_resolve_explicit_choices() {
        assert_eq!(resolve_color_choice(ColorChoice::Never), ColorChoice::Never);
        assert_eq!(resolve_color_choice(ColorChoice::Always), ColorChoice::Always);
    }
}
