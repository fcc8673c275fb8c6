//! Output management and formatting.

use std::io::{self, IsTerminal};
use std::path::Path;

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

const BANNER: &str = "
╔═══════════════════════════════════════════════════════════╗
║                                                           ║
║           🚀  PALASIO MONOREPO SETUP  🚀                  ║
║                                                           ║
║   Create a modern Bun-based monorepo with TypeScript      ║
║                                                           ║
╚═══════════════════════════════════════════════════════════╝";

const SUCCESS_BOX: &str = "
╔═══════════════════════════════════════════════════════════╗
║                                                           ║
║           ✨  SUCCESS! YOUR MONOREPO IS READY  ✨         ║
║                                                           ║
╚═══════════════════════════════════════════════════════════╝";

/// Manages CLI output based on configuration.
///
/// Human and plain formats print progress lines; the JSON format prints
/// nothing but the final document.
#[derive(Debug, Clone)]
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if args.output_format == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            args.output_format
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format == OutputFormat::Plain,
            term: Term::stdout(),
        }
    }

    fn silent(&self) -> bool {
        self.quiet || self.resolved_format == OutputFormat::Json
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.silent() {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.silent() {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.silent() {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.silent() {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.silent() {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Welcome banner printed before generation starts.
    pub fn banner(&self) -> io::Result<()> {
        self.header(BANNER)?;
        self.print("")
    }

    /// Success box, location, next steps, and links.
    pub fn success_box(&self, project: &str, root: &Path) -> io::Result<()> {
        if self.silent() {
            return Ok(());
        }
        self.header(SUCCESS_BOX)?;
        self.print("")?;
        self.print(&format!("📂 Project created at: {}", root.display()))?;
        self.print("")?;
        self.print("🚀 Next steps:")?;

        let steps = [
            ("Navigate to your project:", format!("cd {project}")),
            ("Start development:", "bun run dev".to_string()),
            ("Build all packages:", "bun run build".to_string()),
            ("Lint your code:", "bun run lint".to_string()),
        ];
        for (i, (label, command)) in steps.iter().enumerate() {
            self.print("")?;
            self.print(&format!("  {}. {label}", i + 1))?;
            let command = if self.no_color {
                command.clone()
            } else {
                command.cyan().to_string()
            };
            self.print(&format!("     {command}"))?;
        }

        self.print("")?;
        self.print("📚 Learn more:")?;
        self.print("   - Bun: https://bun.sh")?;
        self.print("   - Next.js: https://nextjs.org")?;
        self.print("   - Hono: https://hono.dev")?;
        self.print("")?;
        self.print("Happy coding! 🎉")
    }

    /// Pretty-printed JSON document on stdout, regardless of quiet mode.
    pub fn json<T: Serialize>(&self, value: &T) -> Result<(), crate::error::CliError> {
        let text = serde_json::to_string_pretty(value)?;
        self.term.write_line(&text)?;
        Ok(())
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
