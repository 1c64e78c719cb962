use swimrig::rig::{AssetRole, SWIMMER_ASSETS};

use crate::cmd::util::print_json;

#[derive(clap::Args)]
pub struct Args {
	/// Emit the catalogue as JSON.
	#[arg(long)]
	pub json: bool,
}

/// Print each catalogue file with the clip name it contributes.
pub fn run(args: Args) -> swimrig::Result<()> {
	if args.json {
		return print_json(&SWIMMER_ASSETS);
	}

	for spec in SWIMMER_ASSETS {
		let what = match spec.role {
			AssetRole::Rig => "<rig>",
			AssetRole::Animation { action } => action,
		};
		println!("{:<24} {:<14} {}", spec.file_name, what, spec.requirement.as_str());
	}
	Ok(())
}
