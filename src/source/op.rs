//! 1Password CLI source implementation.
//!
//! Shells out to `op list items` and `op get item <uuid>` and decodes their
//! JSON stdout. The command itself is configurable so wrapper scripts and
//! absolute paths work.

use std::io;
use std::process::{Command, Stdio};

use shlex::Shlex;

use crate::item::Item;
use crate::{ExportError, ExportResult};

use super::traits::ItemSource;

/// Item source backed by the `op` command-line tool.
#[derive(Debug, Clone)]
pub struct OpCli {
    program: String,
    base_args: Vec<String>,
}

impl OpCli {
    /// Build a source from a command line, split shell-style.
    ///
    /// `"op"` spawns plain `op`; `"wrapper --account work"` spawns `wrapper`
    /// with `--account work` in front of every subcommand.
    pub fn from_command(command: &str) -> ExportResult<Self> {
        let parts: Vec<String> = Shlex::new(command).collect();
        let (program, base_args) = parts
            .split_first()
            .ok_or_else(|| ExportError::Message(format!("empty op command: {command:?}")))?;
        Ok(OpCli {
            program: program.clone(),
            base_args: base_args.to_vec(),
        })
    }

    /// Run one subcommand and return its stdout.
    fn run(&self, args: &[&str]) -> ExportResult<Vec<u8>> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.base_args);
        cmd.args(args);
        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let output = cmd.output().map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                ExportError::Message(format!("{:?} is not in the PATH", self.program))
            } else {
                ExportError::Message(format!("failed to run {}: {e}", self.program))
            }
        })?;

        if !output.status.success() {
            return Err(ExportError::Message(format!(
                "{} {} failed: status={} stderr={}",
                self.program,
                args.join(" "),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(output.stdout)
    }
}

impl ItemSource for OpCli {
    fn name(&self) -> &str {
        &self.program
    }

    fn version(&self) -> Option<String> {
        Command::new(&self.program)
            .args(&self.base_args)
            .arg("--version")
            .output()
            .ok()
            .filter(|o| o.status.success())
            .and_then(|o| String::from_utf8(o.stdout).ok())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    fn list_items(&self) -> ExportResult<Vec<Item>> {
        let stdout = self.run(&["list", "items"]).map_err(|e| {
            ExportError::Message(format!("{e}, try running \"op list items\" by hand"))
        })?;
        let items: Vec<Item> = serde_json::from_slice(&stdout)
            .map_err(|e| ExportError::Message(format!("failed to parse item listing: {e}")))?;
        Ok(items)
    }

    fn fetch_details(&self, item: &mut Item) -> ExportResult<()> {
        let stdout = self.run(&["get", "item", &item.uuid])?;
        let fetched: Item = serde_json::from_slice(&stdout).map_err(|e| {
            ExportError::Message(format!(
                "failed to parse details for {:?}: {e}",
                item.overview.title
            ))
        })?;
        // The listing stays authoritative for overview data; only the
        // detail block is taken from the fetch.
        item.details = fetched.details;
        Ok(())
    }
}
