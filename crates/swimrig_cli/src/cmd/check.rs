use std::path::PathBuf;

use swimrig::RigError;
use swimrig::rig::{SWIMMER_ASSETS, scan, setup_instructions};

use crate::cmd::util::{print_json, print_presence};

#[derive(clap::Args)]
pub struct Args {
	/// Asset directory.
	#[arg(long, default_value = ".")]
	pub dir: PathBuf,
	/// Emit the presence report as JSON.
	#[arg(long)]
	pub json: bool,
}

/// Print the presence report and fail when a required asset is absent.
pub fn run(args: Args) -> swimrig::Result<()> {
	let Args { dir, json } = args;

	let report = scan(&dir, SWIMMER_ASSETS)?;
	if json {
		print_json(&report)?;
	} else {
		print_presence(&report);
	}

	let missing = report.missing_required();
	if missing.is_empty() {
		if !json {
			println!("Ready: {} clip(s) will be combined.", report.present_animations().len());
		}
		return Ok(());
	}

	if !json {
		println!();
		print!("{}", setup_instructions(&report));
	}
	Err(RigError::MissingRequired {
		missing: missing.iter().map(|spec| spec.file_name.to_owned()).collect(),
	})
}
