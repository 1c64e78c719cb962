use std::ffi::OsString;
use std::fmt;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::Command;

use log::info;

use crate::rig::{Result, RigError};

/// One batch-mode run of the external modeling tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolRequest {
	/// Executable name or path.
	pub program: PathBuf,
	/// Scene-assembly script passed to `--python`.
	pub script: PathBuf,
	/// Working directory for the child process.
	pub working_dir: PathBuf,
}

impl ToolRequest {
	/// Arguments for a non-interactive scripted run.
	pub fn args(&self) -> Vec<OsString> {
		vec!["--background".into(), "--python".into(), self.script.clone().into_os_string()]
	}

	/// Shell-like rendering for logs and messages.
	pub fn command_line(&self) -> String {
		let mut out = self.program.display().to_string();
		for arg in self.args() {
			out.push(' ');
			out.push_str(&arg.to_string_lossy());
		}
		out
	}
}

/// Exit status of a finished tool run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolStatus {
	/// Whether the tool reported success.
	pub success: bool,
	/// Exit code, absent when the process was terminated by a signal.
	pub code: Option<i32>,
}

impl ToolStatus {
	/// Status of a clean exit.
	pub const SUCCESS: Self = Self { success: true, code: Some(0) };
}

impl fmt::Display for ToolStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match (self.success, self.code) {
			(true, _) => f.write_str("exited successfully"),
			(false, Some(code)) => write!(f, "exited with status {code}"),
			(false, None) => f.write_str("terminated by signal"),
		}
	}
}

/// Runs the external modeling tool and waits for it to finish.
pub trait ToolInvoker {
	/// Run `request` once, blocking until the process exits.
	fn invoke(&mut self, request: &ToolRequest) -> Result<ToolStatus>;
}

/// Spawns Blender as a child process with inherited stdio.
#[derive(Debug, Default, Clone, Copy)]
pub struct BlenderInvoker;

impl ToolInvoker for BlenderInvoker {
	fn invoke(&mut self, request: &ToolRequest) -> Result<ToolStatus> {
		info!("running {} in {}", request.command_line(), request.working_dir.display());

		let status = Command::new(&request.program).args(request.args()).current_dir(&request.working_dir).status();

		match status {
			Ok(status) => Ok(ToolStatus {
				success: status.success(),
				code: status.code(),
			}),
			Err(err) if err.kind() == ErrorKind::NotFound => Err(RigError::ToolNotFound {
				program: request.program.display().to_string(),
			}),
			Err(err) => Err(err.into()),
		}
	}
}
