//! The screen capability placed on navigation stacks.

use std::fmt;
use std::rc::Rc;

/// A unit that can be presented on a navigation stack.
///
/// The navigator only ever asks a screen for its match path; everything else
/// about a screen is opaque to it.
pub trait Screen {
	/// Returns the path this screen was built for.
	fn match_path(&self) -> &str;
}

/// Shared handle to a presented screen.
///
/// Stacks hold screens by handle so that `push` can keep existing entries
/// without rebuilding them.
pub type ScreenRef = Rc<dyn Screen>;

impl fmt::Debug for dyn Screen {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Screen")
			.field("match_path", &self.match_path())
			.finish_non_exhaustive()
	}
}

/// A screen that carries nothing but its path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathScreen {
	match_path: String,
}

impl PathScreen {
	/// Creates a screen for `match_path`.
	pub fn new(match_path: impl Into<String>) -> Self {
		Self {
			match_path: match_path.into(),
		}
	}

	/// Creates a shared handle for `match_path`.
	pub fn shared(match_path: impl Into<String>) -> ScreenRef {
		Rc::new(Self::new(match_path))
	}
}

impl Screen for PathScreen {
	fn match_path(&self) -> &str {
		&self.match_path
	}
}
