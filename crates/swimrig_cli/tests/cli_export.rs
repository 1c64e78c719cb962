#![cfg(unix)]
#![allow(missing_docs)]

mod common;

use common::{EVERYTHING, REQUIRED, run_swimrig, stderr, stdout, swimrig};
use swimrig_testkit::{AssetDir, FakeBehavior};

fn export_args<'a>(dir: &'a AssetDir, blender: &'a str) -> Vec<&'a str> {
	let dir = dir.path().to_str().expect("utf-8 tempdir");
	vec!["export", "--dir", dir, "--blender", blender]
}

#[test]
fn missing_required_exits_one_without_spawning_blender() {
	let dir = AssetDir::new().expect("tempdir");
	dir.touch_all(&["swim_freestyle.fbx", "swim_backstroke.fbx"]).expect("touch");
	let fake = dir.fake_blender(FakeBehavior::Produce).expect("fake blender");
	let program = fake.program().to_str().expect("utf-8 path");

	let output = run_swimrig(dir.path(), &export_args(&dir, program));

	assert_eq!(output.status.code(), Some(1));
	let out = stdout(&output);
	assert!(out.contains("  [missing] character.fbx"), "stdout: {out}");
	assert!(out.contains("  [absent]  swim_butterfly.fbx (optional)"), "stdout: {out}");
	assert!(out.contains("Setup:"), "stdout: {out}");
	assert!(stderr(&output).contains("error: missing required asset(s): character.fbx"));
	assert!(fake.invocations().is_empty());
	assert!(!dir.join("swimmer.glb").exists());
}

#[test]
fn complete_asset_set_invokes_blender_once_and_reports_size() {
	let dir = AssetDir::new().expect("tempdir");
	dir.touch_all(EVERYTHING).expect("touch");
	dir.write_script("blender-export.py").expect("script");
	let fake = dir.fake_blender(FakeBehavior::Produce).expect("fake blender");
	let program = fake.program().to_str().expect("utf-8 path");

	let output = run_swimrig(dir.path(), &export_args(&dir, program));

	assert!(output.status.success(), "stderr: {}", stderr(&output));
	let invocations = fake.invocations();
	assert_eq!(invocations.len(), 1);
	assert_eq!(invocations[0], format!("--background --python {}", dir.join("blender-export.py").display()));

	let out = stdout(&output);
	assert!(out.contains(&format!("Success: {} (12 bytes)", dir.join("swimmer.glb").display())), "stdout: {out}");
	assert!(out.contains("glb version 2, 8 clip(s): Swimming, Breaststroke"), "stdout: {out}");
}

#[test]
fn clean_exit_without_output_fails() {
	let dir = AssetDir::new().expect("tempdir");
	dir.touch_all(REQUIRED).expect("touch");
	let fake = dir.fake_blender(FakeBehavior::ProduceNothing).expect("fake blender");
	let program = fake.program().to_str().expect("utf-8 path");

	let output = run_swimrig(dir.path(), &export_args(&dir, program));

	assert_eq!(output.status.code(), Some(1));
	assert_eq!(fake.invocations().len(), 1);
	assert!(stderr(&output).contains("export failed"), "stderr: {}", stderr(&output));
}

#[test]
fn failing_blender_without_output_fails() {
	let dir = AssetDir::new().expect("tempdir");
	dir.touch_all(REQUIRED).expect("touch");
	let fake = dir.fake_blender(FakeBehavior::Fail(3)).expect("fake blender");
	let program = fake.program().to_str().expect("utf-8 path");

	let output = run_swimrig(dir.path(), &export_args(&dir, program));

	assert_eq!(output.status.code(), Some(1));
	assert!(stderr(&output).contains("exited with status 3"), "stderr: {}", stderr(&output));
}

#[test]
fn output_presence_decides_success_over_exit_status() {
	let dir = AssetDir::new().expect("tempdir");
	dir.touch_all(REQUIRED).expect("touch");
	dir.write_script("blender-export.py").expect("script");
	let fake = dir.fake_blender(FakeBehavior::ProduceThenFail(1)).expect("fake blender");
	let program = fake.program().to_str().expect("utf-8 path");

	let output = run_swimrig(dir.path(), &export_args(&dir, program));

	assert!(output.status.success(), "stderr: {}", stderr(&output));
	assert_eq!(fake.invocations().len(), 1);
	let out = stdout(&output);
	assert!(out.contains("Success: "), "stdout: {out}");
	assert!(out.contains("  warning: blender exited with status 1;"), "stdout: {out}");
}

#[test]
fn clean_run_prints_no_status_warning() {
	let dir = AssetDir::new().expect("tempdir");
	dir.touch_all(REQUIRED).expect("touch");
	dir.write_script("blender-export.py").expect("script");
	let fake = dir.fake_blender(FakeBehavior::Produce).expect("fake blender");
	let program = fake.program().to_str().expect("utf-8 path");

	let output = run_swimrig(dir.path(), &export_args(&dir, program));

	assert!(output.status.success(), "stderr: {}", stderr(&output));
	assert!(!stdout(&output).contains("warning:"));
}

#[test]
fn bare_invocation_exports_from_working_directory() {
	let dir = AssetDir::new().expect("tempdir");
	dir.touch_all(REQUIRED).expect("touch");
	dir.write_script("blender-export.py").expect("script");
	let fake = dir.fake_blender(FakeBehavior::Produce).expect("fake blender");

	let output = swimrig(dir.path()).env("BLENDER", fake.program()).output().expect("swimrig command executes");

	assert!(output.status.success(), "stderr: {}", stderr(&output));
	let invocations = fake.invocations();
	assert_eq!(invocations.len(), 1);
	assert!(invocations[0].starts_with("--background --python /"), "args: {}", invocations[0]);
	assert!(invocations[0].ends_with("/blender-export.py"), "args: {}", invocations[0]);
	assert!(stdout(&output).contains("/swimmer.glb (12 bytes)"));
}

#[test]
fn relative_dir_resolves_script_from_blender_working_directory() {
	let root = AssetDir::new().expect("tempdir");
	std::fs::create_dir(root.join("models")).expect("mkdir");
	let names: Vec<String> = REQUIRED.iter().map(|name| format!("models/{name}")).collect();
	let names: Vec<&str> = names.iter().map(String::as_str).collect();
	root.touch_all(&names).expect("touch");
	root.write_script("models/blender-export.py").expect("script");
	let fake = root.fake_blender(FakeBehavior::Produce).expect("fake blender");
	let program = fake.program().to_str().expect("utf-8 path");

	let output = run_swimrig(root.path(), &["export", "--dir", "models", "--blender", program]);

	assert!(output.status.success(), "stdout: {}\nstderr: {}", stdout(&output), stderr(&output));
	let invocations = fake.invocations();
	assert_eq!(invocations.len(), 1);
	assert!(invocations[0].starts_with("--background --python /"), "args: {}", invocations[0]);
	assert!(invocations[0].ends_with("/models/blender-export.py"), "args: {}", invocations[0]);
	assert!(root.join("models/swimmer.glb").is_file());
	assert!(!root.join("models/models").exists());
}

#[test]
fn unknown_blender_executable_fails() {
	let dir = AssetDir::new().expect("tempdir");
	dir.touch_all(REQUIRED).expect("touch");

	let output = run_swimrig(dir.path(), &export_args(&dir, "swimrig-no-such-blender"));

	assert_eq!(output.status.code(), Some(1));
	assert!(stderr(&output).contains("external tool not found: swimrig-no-such-blender"));
}
