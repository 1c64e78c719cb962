use std::io;
use std::path::{self, Path, PathBuf};

/// Settings for one validate-then-export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
	/// Directory holding the input assets; also the tool's working directory.
	pub dir: PathBuf,
	/// Modeling tool executable.
	pub program: PathBuf,
	/// Scene-assembly script, relative to `dir` unless absolute.
	pub script: PathBuf,
	/// Expected output file, relative to `dir` unless absolute.
	pub output: PathBuf,
}

impl Default for ExportOptions {
	fn default() -> Self {
		Self {
			dir: PathBuf::from("."),
			program: PathBuf::from(Self::DEFAULT_PROGRAM),
			script: PathBuf::from(Self::DEFAULT_SCRIPT),
			output: PathBuf::from(Self::DEFAULT_OUTPUT),
		}
	}
}

impl ExportOptions {
	/// Executable looked up on `PATH` when none is configured.
	pub const DEFAULT_PROGRAM: &'static str = "blender";
	/// Scene-assembly script name.
	pub const DEFAULT_SCRIPT: &'static str = "blender-export.py";
	/// Combined model file name.
	pub const DEFAULT_OUTPUT: &'static str = "swimmer.glb";

	/// Defaults rooted at `dir`.
	pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
		Self {
			dir: dir.into(),
			..Self::default()
		}
	}

	/// Override the tool executable.
	pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
		self.program = program.into();
		self
	}

	/// Override the scene-assembly script.
	pub fn with_script(mut self, script: impl Into<PathBuf>) -> Self {
		self.script = script.into();
		self
	}

	/// Override the expected output file.
	pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
		self.output = output.into();
		self
	}

	/// Copy with `dir` made absolute against the current directory.
	///
	/// The tool runs with `dir` as its working directory, so script and output paths
	/// handed to it must not be relative to the caller's directory.
	pub fn absolutized(&self) -> io::Result<Self> {
		Ok(Self {
			dir: path::absolute(&self.dir)?,
			..self.clone()
		})
	}

	/// Script path resolved against `dir`.
	pub fn script_path(&self) -> PathBuf {
		resolve(&self.dir, &self.script)
	}

	/// Output path resolved against `dir`.
	pub fn output_path(&self) -> PathBuf {
		resolve(&self.dir, &self.output)
	}
}

fn resolve(dir: &Path, path: &Path) -> PathBuf {
	if path.is_absolute() { path.to_path_buf() } else { dir.join(path) }
}
