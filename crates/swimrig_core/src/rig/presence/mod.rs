use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Serialize;

use crate::rig::{AssetSpec, Result};

/// Presence of one catalogue asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresenceEntry {
	/// Catalogue entry that was checked.
	pub asset: AssetSpec,
	/// Whether a regular file with the asset name exists.
	pub present: bool,
	/// File size in bytes when present.
	pub size: Option<u64>,
}

/// Per-asset presence for one asset directory, in catalogue order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresenceReport {
	/// Scanned directory.
	pub dir: PathBuf,
	/// One entry per catalogue asset.
	pub entries: Vec<PresenceEntry>,
}

impl PresenceReport {
	/// Required assets that are absent.
	pub fn missing_required(&self) -> Vec<&AssetSpec> {
		self.entries.iter().filter(|entry| !entry.present && entry.asset.is_required()).map(|entry| &entry.asset).collect()
	}

	/// Return `true` when every required asset is present.
	pub fn is_ready(&self) -> bool {
		self.entries.iter().all(|entry| entry.present || !entry.asset.is_required())
	}

	/// Clip names of present animation assets, in catalogue order.
	pub fn present_animations(&self) -> Vec<&'static str> {
		self.entries.iter().filter(|entry| entry.present).filter_map(|entry| entry.asset.action()).collect()
	}
}

/// Check every asset of `catalogue` for presence inside `dir`.
///
/// Only file names are checked; contents are never read. A path that exists but is not a
/// regular file counts as absent.
pub fn scan(dir: &Path, catalogue: &[AssetSpec]) -> Result<PresenceReport> {
	let mut entries = Vec::with_capacity(catalogue.len());

	for asset in catalogue {
		let path = dir.join(asset.file_name);
		let size = match fs::metadata(&path) {
			Ok(meta) if meta.is_file() => Some(meta.len()),
			Ok(_) => None,
			Err(err) if err.kind() == ErrorKind::NotFound => None,
			Err(err) => return Err(err.into()),
		};

		debug!("scan {}: {}", path.display(), if size.is_some() { "present" } else { "absent" });
		entries.push(PresenceEntry {
			asset: *asset,
			present: size.is_some(),
			size,
		});
	}

	Ok(PresenceReport {
		dir: dir.to_path_buf(),
		entries,
	})
}
