//! The version command
//!
//! Reports the installed tool version, the project version, or the next
//! project version. Argument parsing lives in the binary; this module takes
//! plain [VersionArgs] so the command can be run without clap.

use std::io::Write;

use tracing::debug;

use crate::domain::{self, Component, Directive, Increment};
use crate::error::{Result, VersionctlError};
use crate::provider::VersionProvider;
use crate::ui;

/// Arguments for the version command
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VersionArgs {
    /// Print tool version, operating system and architecture
    pub report: bool,

    /// Print only the tool version
    pub tool: bool,

    /// Print the project version
    pub project: bool,

    /// Print both the tool and the project version
    pub verbose: bool,

    /// Print only the major component
    pub major: bool,

    /// Print only the minor component
    pub minor: bool,

    /// Print only the patch component
    pub patch: bool,

    /// Increment to apply before printing (MAJOR, MINOR, PATCH or NONE)
    pub next: Option<String>,

    /// Version to use instead of the project's stored version
    pub manual_version: Option<String>,
}

impl VersionArgs {
    fn component(&self) -> Option<Component> {
        if self.major {
            Some(Component::Major)
        } else if self.minor {
            Some(Component::Minor)
        } else if self.patch {
            Some(Component::Patch)
        } else {
            None
        }
    }

    fn wants_project_version(&self) -> bool {
        self.project || self.verbose || self.next.is_some() || self.manual_version.is_some()
    }
}

/// The version command, ready to run against a provider
#[derive(Debug, Clone)]
pub struct VersionCommand {
    args: VersionArgs,
}

impl VersionCommand {
    pub fn new(args: VersionArgs) -> Self {
        VersionCommand { args }
    }

    /// Run the command, writing its output to `out`.
    ///
    /// The provider is only consulted when a project version is needed and
    /// no manual version was given. Lines written before a failure (the
    /// verbose header) stay written.
    pub fn run(&self, provider: &dyn VersionProvider, out: &mut dyn Write) -> Result<()> {
        let args = &self.args;

        if args.report {
            for line in ui::format_report() {
                writeln!(out, "{}", line)?;
            }
            return Ok(());
        }

        if args.verbose {
            writeln!(out, "{}", ui::format_installed_version())?;
        }

        if args.tool {
            writeln!(out, "{}", ui::TOOL_VERSION)?;
            return Ok(());
        }

        if args.wants_project_version() {
            let version = self.resolve_project_version(provider)?;

            match args.component() {
                Some(which) => writeln!(out, "{}", domain::component(&version, which))?,
                None => writeln!(out, "{}", ui::format_project_version(&version, args.verbose))?,
            }
            return Ok(());
        }

        if args.component().is_some() {
            return Err(VersionctlError::ComponentWithoutVersion);
        }

        writeln!(out, "{}", ui::TOOL_VERSION)?;
        Ok(())
    }

    fn resolve_project_version(&self, provider: &dyn VersionProvider) -> Result<domain::Version> {
        let next = self
            .args
            .next
            .as_deref()
            .map(str::parse::<Increment>)
            .transpose()?;

        let (current, directive) = match (&self.args.manual_version, next) {
            // A manual version alone replaces the project version; with an
            // increment it becomes the version being bumped.
            (Some(manual), None) => (String::new(), Directive::Manual(manual.clone())),
            (Some(manual), Some(increment)) => (manual.clone(), Directive::Increment(increment)),
            (None, next) => {
                let current = provider
                    .get_version()?
                    .ok_or(VersionctlError::NoProjectVersion)?;
                (current, Directive::Increment(next.unwrap_or(Increment::None)))
            }
        };

        debug!(current = %current, ?directive, "resolving project version");
        domain::resolve_next(&current, &directive)
    }
}
