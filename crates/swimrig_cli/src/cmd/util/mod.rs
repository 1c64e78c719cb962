use serde::Serialize;
use swimrig::rig::{PresenceEntry, PresenceReport};

/// Print one status line per catalogue asset.
pub(crate) fn print_presence(report: &PresenceReport) {
	println!("Checking assets in {}:", report.dir.display());
	for entry in &report.entries {
		println!("{}", presence_line(entry));
	}
}

/// Render the status line for one asset.
pub(crate) fn presence_line(entry: &PresenceEntry) -> String {
	let name = entry.asset.file_name;
	match (entry.present, entry.size) {
		(true, Some(size)) => format!("  [ok]      {name} ({size} bytes)"),
		(true, None) => format!("  [ok]      {name}"),
		(false, _) if entry.asset.is_required() => format!("  [missing] {name}"),
		(false, _) => format!("  [absent]  {name} (optional)"),
	}
}

/// Print `value` as pretty JSON on stdout.
pub(crate) fn print_json(value: &impl Serialize) -> swimrig::Result<()> {
	let text = serde_json::to_string_pretty(value).map_err(std::io::Error::from)?;
	println!("{text}");
	Ok(())
}
