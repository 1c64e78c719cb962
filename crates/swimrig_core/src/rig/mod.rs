mod asset;
mod error;
mod glb;
mod instructions;
mod mount;
mod options;
mod pipeline;
mod presence;
mod tool;

/// Asset catalogue types and the fixed swimmer catalogue.
pub use asset::{AssetRole, AssetSpec, Requirement, SWIMMER_ASSETS, find_asset};
/// Error and result aliases.
pub use error::{Result, RigError};
/// Binary glTF header probe.
pub use glb::{GlbHeader, probe_glb};
/// Remediation text for incomplete asset directories.
pub use instructions::setup_instructions;
/// Component-tree mount bootstrap.
pub use mount::{Bootstrap, MountSurface, ROOT_ELEMENT_ID, StrictMode, mount_root};
/// Export configuration.
pub use options::ExportOptions;
/// Validate-then-invoke export pipeline.
pub use pipeline::{ExportOutcome, export};
/// Asset presence scan output.
pub use presence::{PresenceEntry, PresenceReport, scan};
/// External tool invocation seam.
pub use tool::{BlenderInvoker, ToolInvoker, ToolRequest, ToolStatus};
