use crate::rig::{AssetRole, ExportOptions, PresenceReport};

/// Build remediation text for an asset directory that is not ready for export.
///
/// Lists the absent required files first, then walks through the Mixamo download and
/// Blender batch steps with the file names the catalogue expects.
pub fn setup_instructions(report: &PresenceReport) -> String {
	let mut out = String::new();

	let missing = report.missing_required();
	if !missing.is_empty() {
		out.push_str(&format!("Missing required files in {}:\n", report.dir.display()));
		for spec in missing {
			out.push_str(&format!("  - {}\n", spec.file_name));
		}
		out.push('\n');
	}

	out.push_str("Setup:\n");
	out.push_str("  1. Sign in at https://www.mixamo.com and pick a character.\n");
	out.push_str("     Download it in T-pose as \"FBX for Unity (.fbx)\", skin included.\n");
	out.push_str("  2. Download each swim animation on the same character, \"FBX for Unity\", with skin.\n");
	out.push_str("  3. Save the files under these names:\n");

	for entry in &report.entries {
		let spec = &entry.asset;
		let what = match spec.role {
			AssetRole::Rig => "character rig".to_owned(),
			AssetRole::Animation { action } => format!("clip '{action}'"),
		};
		out.push_str(&format!("       {:<24} {what} ({})\n", spec.file_name, spec.requirement.as_str()));
	}

	out.push_str(&format!("  4. Place them next to {} and run again, or invoke Blender directly:\n", ExportOptions::DEFAULT_SCRIPT));
	out.push_str(&format!("       {} --background --python {}\n", ExportOptions::DEFAULT_PROGRAM, ExportOptions::DEFAULT_SCRIPT));

	out
}
