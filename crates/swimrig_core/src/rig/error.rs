use std::path::PathBuf;

use thiserror::Error;

use crate::rig::ToolStatus;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, RigError>;

/// Errors produced while validating assets, invoking Blender, or mounting the UI root.
#[derive(Debug, Error)]
pub enum RigError {
	/// Filesystem or process IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// One or more required assets are absent from the asset directory.
	#[error("missing required asset(s): {}", missing.join(", "))]
	MissingRequired {
		/// File names of the absent required assets, in catalogue order.
		missing: Vec<String>,
	},
	/// External tool executable could not be spawned.
	#[error("external tool not found: {program}")]
	ToolNotFound {
		/// Program name or path that failed to spawn.
		program: String,
	},
	/// Tool ran but the expected output file does not exist.
	#[error("export failed: {} was not produced (tool {status})", output.display())]
	ExportFailed {
		/// Expected output path.
		output: PathBuf,
		/// Exit status reported by the tool.
		status: ToolStatus,
	},
	/// File is not a binary glTF container.
	#[error("invalid glb: {reason}")]
	InvalidGlb {
		/// Short description of the header mismatch.
		reason: String,
	},
	/// Mount element was not found on the rendering surface.
	#[error("mount element not found: #{id}")]
	MountElementMissing {
		/// Requested element identifier.
		id: &'static str,
	},
	/// Root component tree was already attached.
	#[error("root component tree is already mounted")]
	AlreadyMounted,
}
