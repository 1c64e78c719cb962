use std::fs;
use std::path::PathBuf;

use serde::Serialize;
use swimrig::rig::{GlbHeader, probe_glb};

use crate::cmd::util::print_json;

#[derive(clap::Args)]
pub struct Args {
	/// Model file to inspect.
	pub path: PathBuf,
	/// Emit the header as JSON.
	#[arg(long)]
	pub json: bool,
}

#[derive(Serialize)]
struct InspectJson<'a> {
	path: &'a PathBuf,
	size: u64,
	#[serde(flatten)]
	header: GlbHeader,
}

/// Print the binary glTF header of a model file.
pub fn run(args: Args) -> swimrig::Result<()> {
	let Args { path, json } = args;

	let size = fs::metadata(&path)?.len();
	let header = probe_glb(&path)?;

	if json {
		return print_json(&InspectJson { path: &path, size, header });
	}

	println!("path: {}", path.display());
	println!("size: {size}");
	println!("glb_version: {}", header.version);
	println!("declared_length: {}", header.length);
	Ok(())
}
