//! Interactive loop.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use log::{debug, info};

use super::input::{is_affirmative, parse_ip_input, IpInput};
use crate::export::export_to_html;
use crate::lookup::LookupClient;
use crate::render::render_console;

const BANNER: &str = r#"
    ██╗██████╗     ██╗███╗   ██╗███████╗ ██████╗
    ██║██╔══██╗    ██║████╗  ██║██╔════╝██╔═══██╗
    ██║██████╔╝    ██║██╔██╗ ██║█████╗  ██║   ██║
    ██║██╔═══╝     ██║██║╚██╗██║██╔══╝  ██║   ██║
    ██║██║         ██║██║ ╚████║██║     ╚██████╔╝
    ╚═╝╚═╝         ╚═╝╚═╝  ╚═══╝╚═╝      ╚═════╝
"#;

const IP_PROMPT: &str = "\n🔍 Enter IP Address (or 'q' to quit): ";
const EXPORT_PROMPT: &str = "\n💾 Export to HTML? (y/n): ";
const CONTINUE_PROMPT: &str = "\n🔁 Check another IP? (y/n): ";
const FAREWELL: &str = "\n👋 Thank you for using the IP Info Tool!";

/// State of the interactive loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for the next IP address
    Prompting,
    /// The user quit, declined to continue, or input ended
    Terminated,
}

/// Summary of a finished session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionReport {
    /// Lookups that produced a result
    pub successful: usize,
    /// Lookups abandoned because of a service or connection error
    pub failed: usize,
    /// Reports written, in order
    pub exports: Vec<PathBuf>,
}

struct Session<'a, R, W> {
    client: &'a LookupClient,
    output_dir: &'a Path,
    input: R,
    output: W,
    report: SessionReport,
}

/// Runs the interactive session until the user quits or input ends.
///
/// Prompts are written to `output` and answers read from `input`, one line each.
/// Lookup and export failures are reported on `output` and end only the current
/// iteration.
///
/// # Errors
///
/// Returns an error only if reading `input` or writing `output` fails.
pub async fn run_session<R, W>(
    client: &LookupClient,
    output_dir: &Path,
    input: R,
    output: W,
) -> Result<SessionReport>
where
    R: BufRead,
    W: Write,
{
    let mut session = Session {
        client,
        output_dir,
        input,
        output,
        report: SessionReport::default(),
    };

    session.greet()?;
    let mut state = SessionState::Prompting;
    while state == SessionState::Prompting {
        state = session.iteration().await?;
        debug!("Session state: {:?}", state);
    }

    info!(
        "Session finished: {} successful, {} failed, {} exported",
        session.report.successful,
        session.report.failed,
        session.report.exports.len()
    );
    Ok(session.report)
}

impl<R, W> Session<'_, R, W>
where
    R: BufRead,
    W: Write,
{
    fn greet(&mut self) -> Result<()> {
        writeln!(self.output, "{}", BANNER.blue().bold())?;
        writeln!(
            self.output,
            "{}",
            "🌟 Welcome to Advanced IP Info Tool 🌟".cyan()
        )?;
        writeln!(
            self.output,
            "{}",
            "----------------------------------------".bright_blue()
        )?;
        Ok(())
    }

    fn farewell(&mut self) -> Result<SessionState> {
        writeln!(self.output, "{}", FAREWELL.magenta())?;
        Ok(SessionState::Terminated)
    }

    /// Writes `prompt` and reads one line. `None` means input has ended.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt.yellow())?;
        self.output.flush().context("Failed to flush prompt")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            debug!("Input ended at prompt {:?}", prompt.trim());
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn report_error(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", format!("🚨 {}", message).red())?;
        Ok(())
    }

    /// One pass of the `Prompting` state.
    async fn iteration(&mut self) -> Result<SessionState> {
        let Some(line) = self.prompt(IP_PROMPT)? else {
            return Ok(SessionState::Terminated);
        };

        let ip = match parse_ip_input(&line) {
            IpInput::Quit => return self.farewell(),
            IpInput::Address(ip) => Some(ip),
            IpInput::PublicIp => match self.client.resolve_public_ip().await {
                Ok(ip) => {
                    writeln!(
                        self.output,
                        "{}",
                        format!("\nℹ Using your public IP: {}", ip).bright_blue()
                    )?;
                    Some(ip)
                }
                Err(e) => {
                    info!("Public IP resolution failed ({}): {}", e.error_type(), e);
                    self.report.failed += 1;
                    self.report_error(&e.to_string())?;
                    None
                }
            },
        };

        if let Some(ip) = ip {
            self.lookup_and_display(&ip).await?;
        }

        match self.prompt(CONTINUE_PROMPT)? {
            Some(answer) if is_affirmative(&answer) => Ok(SessionState::Prompting),
            Some(_) => self.farewell(),
            None => Ok(SessionState::Terminated),
        }
    }

    async fn lookup_and_display(&mut self, ip: &str) -> Result<()> {
        let result = match self.client.fetch_lookup(ip).await {
            Ok(result) => result,
            Err(e) => {
                info!("Lookup for {} failed ({}): {}", ip, e.error_type(), e);
                self.report.failed += 1;
                return self.report_error(&e.to_string());
            }
        };
        self.report.successful += 1;

        write!(self.output, "{}", render_console(&result))?;

        let wants_export = self
            .prompt(EXPORT_PROMPT)?
            .is_some_and(|answer| is_affirmative(&answer));
        if !wants_export {
            return Ok(());
        }

        match export_to_html(&result, self.output_dir) {
            Ok(path) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                writeln!(
                    self.output,
                    "{}",
                    format!("\n✅ Report saved as {}", name).green()
                )?;
                self.report.exports.push(path);
            }
            Err(e) => {
                info!("Export failed ({}): {}", e.error_type(), e);
                self.report_error(&e.to_string())?;
            }
        }
        Ok(())
    }
}
