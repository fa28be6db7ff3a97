//! Everything duckgen prints on stdout goes through [`OutputManager`].

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::{OwoColorize, Style};
use serde::Serialize;

use duckgen_core::application::Report;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

#[derive(Debug, Clone, Copy)]
enum Tone {
    Success,
    Warning,
    Info,
    Header,
}

impl Tone {
    fn symbol(self) -> Option<char> {
        match self {
            Tone::Success => Some('\u{2713}'),
            Tone::Warning => Some('\u{26a0}'),
            Tone::Info => Some('\u{2139}'),
            Tone::Header => None,
        }
    }

    fn style(self) -> Style {
        match self {
            Tone::Success => Style::new().green(),
            Tone::Warning => Style::new().yellow(),
            Tone::Info => Style::new().blue(),
            Tone::Header => Style::new().cyan().bold(),
        }
    }
}

pub struct OutputManager {
    format: OutputFormat,
    quiet: bool,
    color: bool,
    term: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let format = match args.output_format {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            chosen => chosen,
        };
        let color = format == OutputFormat::Human && !args.no_color && !config.output.no_color;

        Self {
            format,
            quiet: args.quiet,
            color,
            term: Term::stdout(),
        }
    }

    fn emit(&self, tone: Tone, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let body = if self.color {
            msg.style(tone.style()).to_string()
        } else {
            msg.to_owned()
        };
        let line = match tone.symbol() {
            Some(symbol) if self.color => {
                format!("{} {body}", symbol.style(tone.style().bold()))
            }
            Some(symbol) => format!("{symbol} {body}"),
            None => body,
        };
        self.term.write_line(&line)
    }

    /// Unadorned line; dropped under `--quiet`.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.emit(Tone::Success, msg)
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.emit(Tone::Warning, msg)
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.emit(Tone::Info, msg)
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        self.emit(Tone::Header, text)
    }

    /// Pretty-printed JSON. Written even in quiet mode so pipes stay parseable.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    /// One line per written file, then notices as warnings.
    pub fn report(&self, report: &Report) -> io::Result<()> {
        if self.format == OutputFormat::Json {
            return self.json(report);
        }

        let verb = if report.dry_run { "Would write" } else { "Wrote" };
        for path in &report.written {
            self.success(&format!("{verb} {}", path.display()))?;
        }
        for notice in &report.notices {
            self.warning(&notice.to_string())?;
        }

        if report.dry_run {
            self.info("Dry run, no files were changed")?;
        } else if report.is_noop() {
            self.info("Nothing to do")?;
        }
        Ok(())
    }

    pub fn supports_color(&self) -> bool {
        self.color
    }

    /// Never `Auto`; resolved against stdout at construction.
    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    use duckgen_core::application::Notice;

    fn human_args() -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
            output_format: OutputFormat::Human,
        }
    }

    fn make_manager(quiet: bool, format: OutputFormat) -> OutputManager {
        let args = GlobalArgs {
            quiet,
            output_format: format,
            ..human_args()
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    fn sample_report() -> Report {
        Report {
            written: vec![PathBuf::from("src/redux/modules/todo.js")],
            notices: vec![Notice::WiringSkipped {
                path: PathBuf::from("src/redux/configureStore.js"),
            }],
            dry_run: false,
        }
    }

    #[test]
    fn quiet_manager_still_succeeds() {
        let out = make_manager(true, OutputFormat::Plain);
        assert!(out.print("hello").is_ok());
        assert!(out.warning("careful").is_ok());
    }

    #[test]
    fn only_human_format_is_colored() {
        assert!(make_manager(false, OutputFormat::Human).supports_color());
        assert!(!make_manager(false, OutputFormat::Plain).supports_color());
        assert!(!make_manager(false, OutputFormat::Json).supports_color());
    }

    #[test]
    fn config_can_switch_color_off() {
        let mut config = AppConfig::default();
        config.output.no_color = true;
        let out = OutputManager::new(&human_args(), &config);
        assert!(!out.supports_color());
    }

    #[test]
    fn explicit_format_is_kept() {
        assert_eq!(make_manager(false, OutputFormat::Json).format(), OutputFormat::Json);
    }

    #[test]
    fn report_renders_in_every_format() {
        let report = sample_report();
        for format in [OutputFormat::Plain, OutputFormat::Human, OutputFormat::Json] {
            assert!(make_manager(false, format).report(&report).is_ok());
        }
    }
}
