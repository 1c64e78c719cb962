use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use log::{info, warn};

use crate::rig::{ExportOptions, GlbHeader, PresenceReport, Result, RigError, SWIMMER_ASSETS, ToolInvoker, ToolRequest, ToolStatus, probe_glb, scan};

/// Result of a run whose output artifact exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
	/// Presence report taken before the tool ran.
	pub report: PresenceReport,
	/// Output file path.
	pub output: PathBuf,
	/// Exit status of the tool run.
	pub status: ToolStatus,
	/// Output size in bytes.
	pub size: u64,
	/// Parsed container header, `None` when the output is not a valid GLB.
	pub glb: Option<GlbHeader>,
}

/// Validate the asset directory, run the tool once, and check for the output file.
///
/// `options.dir` is made absolute first. The tool is never run when a required asset is
/// missing. The output file's existence alone decides success; a failing tool status with
/// an existing output only warns.
pub fn export(options: &ExportOptions, invoker: &mut impl ToolInvoker) -> Result<ExportOutcome> {
	let options = options.absolutized()?;
	let report = scan(&options.dir, SWIMMER_ASSETS)?;

	let missing = report.missing_required();
	if !missing.is_empty() {
		return Err(RigError::MissingRequired {
			missing: missing.iter().map(|spec| spec.file_name.to_owned()).collect(),
		});
	}

	info!("combining clips: {}", report.present_animations().join(", "));

	let request = ToolRequest {
		program: options.program.clone(),
		script: options.script_path(),
		working_dir: options.dir.clone(),
	};
	let status = invoker.invoke(&request)?;

	let output = options.output_path();
	let size = match fs::metadata(&output) {
		Ok(meta) if meta.is_file() => meta.len(),
		Ok(_) => return Err(RigError::ExportFailed { output, status }),
		Err(err) if err.kind() == ErrorKind::NotFound => return Err(RigError::ExportFailed { output, status }),
		Err(err) => return Err(err.into()),
	};

	if !status.success {
		warn!("{} {status} but produced {}", request.program.display(), output.display());
	}

	let glb = match probe_glb(&output) {
		Ok(header) => Some(header),
		Err(err) => {
			warn!("{} is not a valid glb: {err}", output.display());
			None
		}
	};

	Ok(ExportOutcome {
		report,
		output,
		status,
		size,
		glb,
	})
}
