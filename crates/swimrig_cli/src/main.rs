#![allow(missing_docs)]

use clap::{ArgAction, Parser, Subcommand};
use env_logger::Env;

mod cmd;

#[derive(Parser)]
#[command(name = "swimrig", about = "Validate swimmer rig assets and export them to GLB through Blender")]
struct Cli {
	/// Raise log verbosity (`-v` info, `-vv` debug). `RUST_LOG` takes precedence.
	#[arg(short, long, action = ArgAction::Count, global = true)]
	verbose: u8,
	#[command(subcommand)]
	command: Option<Commands>,
	#[command(flatten)]
	export: cmd::export::Args,
}

#[derive(Subcommand)]
enum Commands {
	/// Check assets, run Blender once, and verify the combined model (default).
	Export(cmd::export::Args),
	/// Report asset presence without running Blender.
	Check(cmd::check::Args),
	/// Print the stroke-to-clip naming convention.
	Animations(cmd::animations::Args),
	/// Print the GLB header and size of a model file.
	Inspect(cmd::inspect::Args),
}

fn main() {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	if let Err(err) = run(cli) {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run(cli: Cli) -> swimrig::Result<()> {
	match cli.command {
		None => cmd::export::run(cli.export),
		Some(Commands::Export(args)) => cmd::export::run(args),
		Some(Commands::Check(args)) => cmd::check::run(args),
		Some(Commands::Animations(args)) => cmd::animations::run(args),
		Some(Commands::Inspect(args)) => cmd::inspect::run(args),
	}
}

fn init_logging(verbose: u8) {
	let level = match verbose {
		0 => "warn",
		1 => "info",
		_ => "debug",
	};
	env_logger::Builder::from_env(Env::default().default_filter_or(level)).format_timestamp(None).init();
}
