//! Public library API for validating swimmer rig assets and exporting them through Blender.

/// Asset catalogue, presence scanning, tool invocation, export pipeline, and mount bootstrap.
pub mod rig;

pub use rig::{Result, RigError};
