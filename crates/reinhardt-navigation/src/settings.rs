//! Navigator settings.
//!
//! Settings are usually read from a TOML file shipped with
//! the application:
//!
//! ```toml
//! animated = true
//! duplicate_routes = "reject"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{NavigationError, NavigationResult};
use crate::route::{DuplicateRoutePolicy, RouteRegistry};

/// Behavior shared by every navigation call of a [`LinkNavigator`](crate::LinkNavigator).
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorSettings {
	/// Whether push/pop transitions are animated.
	pub animated: bool,

	/// How route registries built from these settings treat duplicates.
	pub duplicate_routes: DuplicateRoutePolicy,
}

impl Default for NavigatorSettings {
	fn default() -> Self {
		Self {
			animated: true,
			duplicate_routes: DuplicateRoutePolicy::KeepFirst,
		}
	}
}

impl NavigatorSettings {
	/// Sets whether transitions are animated.
	pub fn with_animated(mut self, animated: bool) -> Self {
		self.animated = animated;
		self
	}

	/// Sets the duplicate route policy.
	pub fn with_duplicate_routes(mut self, policy: DuplicateRoutePolicy) -> Self {
		self.duplicate_routes = policy;
		self
	}

	/// Load settings from a TOML file.
	///
	/// # Errors
	///
	/// Returns error if file cannot be read or parsed.
	pub fn from_file(path: impl AsRef<Path>) -> NavigationResult<Self> {
		let content =
			std::fs::read_to_string(path.as_ref()).map_err(|e| NavigationError::Io {
				path: path.as_ref().to_path_buf(),
				source: e,
			})?;

		Self::from_toml(&content)
	}

	/// Parse settings from a TOML string.
	pub fn from_toml(content: &str) -> NavigationResult<Self> {
		toml::from_str(content).map_err(|e| NavigationError::InvalidSettings(e.to_string()))
	}

	/// Creates an empty route registry honoring these settings.
	pub fn route_registry<R, T, D>(&self) -> RouteRegistry<R, T, D> {
		RouteRegistry::with_policy(self.duplicate_routes)
	}
}
