use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Serialize;

use crate::rig::{Result, RigError};

/// Parsed binary glTF container header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GlbHeader {
	/// Container version (`2` for glTF 2.0).
	pub version: u32,
	/// Total container length in bytes, header included.
	pub length: u32,
}

impl GlbHeader {
	/// Fixed header size in bytes.
	pub const SIZE: usize = 12;
	/// Leading magic bytes.
	pub const MAGIC: [u8; 4] = *b"glTF";
	/// Only supported container version.
	pub const VERSION: u32 = 2;

	/// Parse a header from the beginning of `bytes`.
	pub fn parse(bytes: &[u8]) -> Result<Self> {
		let header = bytes.get(..Self::SIZE).ok_or_else(|| invalid(format!("need {} header bytes, have {}", Self::SIZE, bytes.len())))?;

		if header[0..4] != Self::MAGIC {
			return Err(invalid(format!("bad magic {:?}", &header[0..4])));
		}

		let version = read_u32_le(&header[4..8]);
		if version != Self::VERSION {
			return Err(invalid(format!("unsupported version {version}")));
		}

		let length = read_u32_le(&header[8..12]);
		if (length as usize) < Self::SIZE {
			return Err(invalid(format!("declared length {length} is shorter than the header")));
		}

		Ok(Self { version, length })
	}
}

/// Read and validate the GLB header of the file at `path`.
///
/// The declared container length must match the file size.
pub fn probe_glb(path: &Path) -> Result<GlbHeader> {
	let mut file = File::open(path)?;
	let file_len = file.metadata()?.len();

	let mut buf = Vec::with_capacity(GlbHeader::SIZE);
	file.by_ref().take(GlbHeader::SIZE as u64).read_to_end(&mut buf)?;

	let header = GlbHeader::parse(&buf)?;
	if u64::from(header.length) != file_len {
		return Err(invalid(format!("declared length {} but file has {file_len} bytes", header.length)));
	}

	Ok(header)
}

fn read_u32_le(bytes: &[u8]) -> u32 {
	let mut raw = [0_u8; 4];
	raw.copy_from_slice(bytes);
	u32::from_le_bytes(raw)
}

fn invalid(reason: String) -> RigError {
	RigError::InvalidGlb { reason }
}
