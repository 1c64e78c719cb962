//! Shared test helpers for workspace crates.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Minimal valid binary glTF container: 12-byte header and no chunks.
pub fn glb_bytes() -> Vec<u8> {
	let mut out = Vec::with_capacity(12);
	out.extend_from_slice(b"glTF");
	out.extend_from_slice(&2_u32.to_le_bytes());
	out.extend_from_slice(&12_u32.to_le_bytes());
	out
}

/// Temporary asset directory populated with placeholder files.
pub struct AssetDir {
	dir: TempDir,
}

impl AssetDir {
	/// Create an empty asset directory.
	pub fn new() -> io::Result<Self> {
		Ok(Self { dir: TempDir::new()? })
	}

	/// Root path of the directory.
	pub fn path(&self) -> &Path {
		self.dir.path()
	}

	/// Join `name` onto the directory root.
	pub fn join(&self, name: &str) -> PathBuf {
		self.dir.path().join(name)
	}

	/// Write `bytes` into `name`.
	pub fn write(&self, name: &str, bytes: &[u8]) -> io::Result<PathBuf> {
		let path = self.join(name);
		fs::write(&path, bytes)?;
		Ok(path)
	}

	/// Write a placeholder scene-assembly script under `name`.
	pub fn write_script(&self, name: &str) -> io::Result<PathBuf> {
		self.write(name, b"import bpy\n")
	}

	/// Create placeholder asset files with non-empty contents.
	pub fn touch_all(&self, names: &[&str]) -> io::Result<()> {
		for name in names {
			self.write(name, b"Kaydara FBX Binary  \0")?;
		}
		Ok(())
	}

	/// Install a fake Blender executable that records its arguments.
	#[cfg(unix)]
	pub fn fake_blender(&self, behavior: FakeBehavior) -> io::Result<FakeBlender> {
		FakeBlender::install(self.path(), behavior)
	}
}

/// What the fake Blender does when run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeBehavior {
	/// Write a valid GLB to the output path and exit 0. Like Blender, the `--python` script
	/// must resolve from the working directory or the run exits 2 without output.
	Produce,
	/// Exit 0 without writing anything.
	ProduceNothing,
	/// Exit with the given status without writing anything.
	Fail(i32),
	/// Write a valid GLB and still exit with the given status.
	ProduceThenFail(i32),
}

/// Shell script standing in for the Blender executable.
#[cfg(unix)]
pub struct FakeBlender {
	program: PathBuf,
	log: PathBuf,
}

#[cfg(unix)]
impl FakeBlender {
	/// Default output name the fake writes into its working directory.
	pub const OUTPUT: &'static str = "swimmer.glb";

	fn install(root: &Path, behavior: FakeBehavior) -> io::Result<Self> {
		use std::os::unix::fs::PermissionsExt;

		let bin_dir = root.join(".fake-bin");
		fs::create_dir_all(&bin_dir)?;

		let template = bin_dir.join("template.glb");
		fs::write(&template, glb_bytes())?;

		let program = bin_dir.join("blender");
		let log = bin_dir.join("invocations.log");

		let (produce, status) = match behavior {
			FakeBehavior::Produce => (true, 0),
			FakeBehavior::ProduceNothing => (false, 0),
			FakeBehavior::Fail(code) => (false, code),
			FakeBehavior::ProduceThenFail(code) => (true, code),
		};

		let mut script = String::from("#!/bin/sh\n");
		script.push_str(&format!("echo \"$@\" >> '{}'\n", log.display()));
		if produce {
			script.push_str("[ -f \"$3\" ] || { echo \"script not found: $3\" >&2; exit 2; }\n");
			script.push_str(&format!("cp '{}' './{}'\n", template.display(), Self::OUTPUT));
		}
		script.push_str(&format!("exit {status}\n"));

		fs::write(&program, script)?;
		fs::set_permissions(&program, fs::Permissions::from_mode(0o755))?;

		Ok(Self { program, log })
	}

	/// Path to the executable script.
	pub fn program(&self) -> &Path {
		&self.program
	}

	/// Argument lines recorded by each run, oldest first.
	pub fn invocations(&self) -> Vec<String> {
		match fs::read_to_string(&self.log) {
			Ok(text) => text.lines().map(str::to_owned).collect(),
			Err(_) => Vec::new(),
		}
	}
}
