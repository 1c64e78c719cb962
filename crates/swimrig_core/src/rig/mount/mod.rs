use std::sync::OnceLock;

use log::debug;

use crate::rig::{Result, RigError};

/// Identifier of the element the root component tree is attached to.
pub const ROOT_ELEMENT_ID: &str = "root";

static ROOT_MOUNTED: OnceLock<()> = OnceLock::new();

/// Component tree wrapped for development-time strictness checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrictMode<T>(pub T);

impl<T> StrictMode<T> {
	/// Unwrap the component tree.
	pub fn into_inner(self) -> T {
		self.0
	}
}

/// Rendering surface able to locate elements and attach component trees to them.
pub trait MountSurface<T> {
	/// Handle to a located element.
	type Element;

	/// Find the element with identifier `id`.
	fn element_by_id(&self, id: &str) -> Option<Self::Element>;

	/// Attach `tree` under `element`.
	fn attach(&mut self, element: Self::Element, tree: StrictMode<T>);
}

/// Attaches one root component tree to the [`ROOT_ELEMENT_ID`] element, at most once.
#[derive(Debug, Default)]
pub struct Bootstrap {
	mounted: bool,
}

impl Bootstrap {
	/// Create an unmounted bootstrap.
	pub fn new() -> Self {
		Self::default()
	}

	/// Return `true` once a tree has been attached.
	pub fn is_mounted(&self) -> bool {
		self.mounted
	}

	/// Wrap `tree` in [`StrictMode`] and attach it to the root element of `surface`.
	///
	/// A missing element leaves the bootstrap unmounted so a later call may retry.
	pub fn mount<T, S: MountSurface<T>>(&mut self, surface: &mut S, tree: T) -> Result<()> {
		if self.mounted {
			return Err(RigError::AlreadyMounted);
		}

		let element = surface.element_by_id(ROOT_ELEMENT_ID).ok_or(RigError::MountElementMissing { id: ROOT_ELEMENT_ID })?;
		surface.attach(element, StrictMode(tree));
		self.mounted = true;
		debug!("mounted root tree at #{ROOT_ELEMENT_ID}");
		Ok(())
	}
}

/// Process-wide entry point: attach `tree` to the root element at most once per process.
pub fn mount_root<T, S: MountSurface<T>>(surface: &mut S, tree: T) -> Result<()> {
	if ROOT_MOUNTED.get().is_some() {
		return Err(RigError::AlreadyMounted);
	}

	let element = surface.element_by_id(ROOT_ELEMENT_ID).ok_or(RigError::MountElementMissing { id: ROOT_ELEMENT_ID })?;
	ROOT_MOUNTED.set(()).map_err(|()| RigError::AlreadyMounted)?;
	surface.attach(element, StrictMode(tree));
	debug!("mounted process root tree at #{ROOT_ELEMENT_ID}");
	Ok(())
}
