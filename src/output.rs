//! Terminal output formatting for the tinct CLI.
//!
//! Status lines go to stderr with right-aligned coloured verbs, Cargo style.
//! Results go to stdout so they can be piped.

use std::io::{self, IsTerminal, Write};

use crate::contrast::{Readability, WcagLevel};
use crate::types::{Colour, Format};

/// ANSI escape codes.
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";

/// Width for right-aligned verb column.
const VERB_WIDTH: usize = 12;

/// Terminal-aware status printer.
///
/// Colour is enabled when stderr is a terminal.
pub struct Printer {
    color: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
        }
    }

    /// A printer that never emits escape codes.
    pub fn plain() -> Self {
        Self { color: false }
    }

    /// Print a status line with a green bold verb.
    pub fn status(&self, verb: &str, message: &str) {
        self.print_line(GREEN, verb, message);
    }

    /// Print a warning line with a yellow bold verb.
    pub fn warning(&self, verb: &str, message: &str) {
        self.print_line(YELLOW, verb, message);
    }

    /// Format a string as dim/grey.
    pub fn dim(&self, text: &str) -> String {
        if self.color {
            format!("{DIM}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    /// A pass/fail label, green or red.
    pub fn verdict(&self, pass: bool) -> String {
        let (label, color) = if pass { ("pass", GREEN) } else { ("fail", RED) };
        if self.color {
            format!("{BOLD}{color}{label}{RESET}")
        } else {
            label.to_string()
        }
    }

    /// Two spaces painted in the colour, or nothing without colour support.
    pub fn swatch(&self, colour: &Colour) -> String {
        if !self.color {
            return String::new();
        }
        let [r, g, b] = colour.rounded_channels().map(|c| c.clamp(0, 255));
        format!("\x1b[48;2;{r};{g};{b}m  {RESET} ")
    }

    fn print_line(&self, color: &str, verb: &str, message: &str) {
        let mut stderr = io::stderr().lock();
        if self.color {
            let _ = writeln!(
                stderr,
                "{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}"
            );
        } else {
            let _ = writeln!(stderr, "{verb:>VERB_WIDTH$} {message}");
        }
    }
}

/// Multi-line description of a colour for `tinct inspect`.
pub fn describe(colour: &Colour, format: Format, printer: &Printer) -> String {
    let mut lines = vec![format!(
        "{}{}",
        printer.swatch(colour),
        colour.to_string_format(format)
    )];
    lines.push(format!("rgb         {}", colour.to_string_format(Format::Rgb)));
    lines.push(format!("hex         {}", colour.to_string_format(Format::Hex)));
    lines.push(format!("brightness  {:.3}", colour.brightness()));
    lines.push(format!("luminance   {:.4}", colour.luminance()));
    lines.push(format!(
        "dark        {}",
        if colour.is_dark() { "yes" } else { "no" }
    ));
    lines.join("\n")
}

/// Ratio and WCAG verdicts for `tinct contrast`.
pub fn describe_readability(readability: &Readability, printer: &Printer) -> String {
    let mut lines = vec![format!("ratio       {:.2}:1", readability.ratio)];
    for level in WcagLevel::ALL {
        lines.push(format!(
            "{:<11} {} {}",
            level.label(),
            printer.verdict(readability.passes(level)),
            printer.dim(&format!("(>= {})", level.min_ratio()))
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn test_describe_plain() {
        let colour = Colour::parse("#333").unwrap();
        assert_snapshot!(describe(&colour, Format::Hex, &Printer::plain()), @r"
        #333333
        rgb         rgb(51,51,51)
        hex         #333333
        brightness  51.000
        luminance   0.0331
        dark        yes
        ");
    }

    #[test]
    fn test_describe_readability_plain() {
        let readability = Colour::black().readability(&Colour::white());
        assert_snapshot!(describe_readability(&readability, &Printer::plain()), @r"
        ratio       21.00:1
        AA large    pass (>= 3)
        AA          pass (>= 4.5)
        AAA large   pass (>= 4.5)
        AAA         pass (>= 7)
        ");
    }

    #[test]
    fn test_plain_swatch_is_empty() {
        assert_eq!(Printer::plain().swatch(&Colour::white()), "");
    }

    #[test]
    fn test_verdict_plain() {
        let printer = Printer::plain();
        assert_eq!(printer.verdict(true), "pass");
        assert_eq!(printer.verdict(false), "fail");
    }
}
