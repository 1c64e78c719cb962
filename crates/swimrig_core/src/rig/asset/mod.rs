use serde::Serialize;

/// Whether an asset must be present before export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
	/// Export is refused when absent.
	Required,
	/// Skipped silently when absent.
	Optional,
}

impl Requirement {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Required => "required",
			Self::Optional => "optional",
		}
	}
}

/// What an asset file contributes to the combined model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AssetRole {
	/// Skinned T-pose character carrying the armature.
	Rig,
	/// Animation clip retargeted onto the rig under `action`.
	Animation {
		/// Clip name inside the exported model.
		action: &'static str,
	},
}

/// One entry of the fixed asset catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AssetSpec {
	/// File name expected inside the asset directory.
	pub file_name: &'static str,
	/// Presence requirement.
	pub requirement: Requirement,
	/// Contribution to the combined model.
	pub role: AssetRole,
}

impl AssetSpec {
	const fn rig(file_name: &'static str) -> Self {
		Self {
			file_name,
			requirement: Requirement::Required,
			role: AssetRole::Rig,
		}
	}

	const fn clip(file_name: &'static str, requirement: Requirement, action: &'static str) -> Self {
		Self {
			file_name,
			requirement,
			role: AssetRole::Animation { action },
		}
	}

	/// Return `true` for required assets.
	pub fn is_required(&self) -> bool {
		self.requirement == Requirement::Required
	}

	/// Clip name for animation assets.
	pub fn action(&self) -> Option<&'static str> {
		match self.role {
			AssetRole::Rig => None,
			AssetRole::Animation { action } => Some(action),
		}
	}
}

/// Swimmer catalogue in scan order: the rig first, then strokes, idle, dive, and turns.
pub const SWIMMER_ASSETS: &[AssetSpec] = &[
	AssetSpec::rig("character.fbx"),
	AssetSpec::clip("swim_freestyle.fbx", Requirement::Required, "Swimming"),
	AssetSpec::clip("swim_breaststroke.fbx", Requirement::Optional, "Breaststroke"),
	AssetSpec::clip("swim_backstroke.fbx", Requirement::Optional, "Backstroke"),
	AssetSpec::clip("swim_butterfly.fbx", Requirement::Optional, "Butterfly"),
	AssetSpec::clip("swim_idle.fbx", Requirement::Optional, "Idle"),
	AssetSpec::clip("swim_dive.fbx", Requirement::Optional, "Diving"),
	AssetSpec::clip("swim_turn_flip.fbx", Requirement::Optional, "FlipTurn"),
	AssetSpec::clip("swim_turn_open.fbx", Requirement::Optional, "OpenTurn"),
];

/// Look up a catalogue entry by file name.
pub fn find_asset(file_name: &str) -> Option<&'static AssetSpec> {
	SWIMMER_ASSETS.iter().find(|spec| spec.file_name == file_name)
}
