/// Stroke-to-clip naming convention listing.
pub mod animations;
/// Presence-only asset check.
pub mod check;
/// Validate-then-invoke export command.
pub mod export;
/// GLB header inspection command.
pub mod inspect;
mod util;
