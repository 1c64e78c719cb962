use std::path::PathBuf;

use log::debug;
use swimrig::RigError;
use swimrig::rig::{BlenderInvoker, ExportOptions, SWIMMER_ASSETS, export, scan, setup_instructions};

use crate::cmd::util::print_presence;

#[derive(clap::Args)]
pub struct Args {
	/// Asset directory; also Blender's working directory.
	#[arg(long, default_value = ".")]
	pub dir: PathBuf,
	/// Blender executable.
	#[arg(long, env = "BLENDER", default_value = ExportOptions::DEFAULT_PROGRAM)]
	pub blender: PathBuf,
	/// Scene-assembly script, relative to `--dir` unless absolute.
	#[arg(long, default_value = ExportOptions::DEFAULT_SCRIPT)]
	pub script: PathBuf,
	/// Expected output file, relative to `--dir` unless absolute.
	#[arg(long, default_value = ExportOptions::DEFAULT_OUTPUT)]
	pub output: PathBuf,
}

impl Args {
	fn into_options(self) -> ExportOptions {
		ExportOptions::in_dir(self.dir).with_program(self.blender).with_script(self.script).with_output(self.output)
	}
}

/// Check assets, run Blender once in batch mode, and report the combined model.
pub fn run(args: Args) -> swimrig::Result<()> {
	let options = args.into_options().absolutized()?;
	debug!("export options: {options:?}");

	let report = scan(&options.dir, SWIMMER_ASSETS)?;
	print_presence(&report);

	if !report.is_ready() {
		println!();
		print!("{}", setup_instructions(&report));
		return Err(RigError::MissingRequired {
			missing: report.missing_required().iter().map(|spec| spec.file_name.to_owned()).collect(),
		});
	}

	println!();
	println!(
		"Running Blender in batch mode: {} --background --python {}",
		options.program.display(),
		options.script_path().display()
	);

	let outcome = export(&options, &mut BlenderInvoker)?;

	println!("Success: {} ({} bytes)", outcome.output.display(), outcome.size);
	if !outcome.status.success {
		println!("  warning: blender {}; the output may be left over from an earlier run", outcome.status);
	}
	let clips = outcome.report.present_animations();
	match outcome.glb {
		Some(header) => println!("  glb version {}, {} clip(s): {}", header.version, clips.len(), clips.join(", ")),
		None => println!("  output is not a binary glTF container"),
	}
	Ok(())
}
