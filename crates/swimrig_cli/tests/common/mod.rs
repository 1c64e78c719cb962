#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};

pub const REQUIRED: &[&str] = &["character.fbx", "swim_freestyle.fbx"];
pub const EVERYTHING: &[&str] = &[
	"character.fbx",
	"swim_freestyle.fbx",
	"swim_breaststroke.fbx",
	"swim_backstroke.fbx",
	"swim_butterfly.fbx",
	"swim_idle.fbx",
	"swim_dive.fbx",
	"swim_turn_flip.fbx",
	"swim_turn_open.fbx",
];

pub fn swimrig(cwd: &Path) -> Command {
	let mut cmd = Command::new(env!("CARGO_BIN_EXE_swimrig"));
	cmd.current_dir(cwd).env_remove("BLENDER").env_remove("RUST_LOG");
	cmd
}

pub fn run_swimrig(cwd: &Path, args: &[&str]) -> Output {
	swimrig(cwd).args(args).output().expect("swimrig command executes")
}

pub fn stdout(output: &Output) -> String {
	String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
	String::from_utf8_lossy(&output.stderr).into_owned()
}
