//! Error types for navigation configuration.
//!
//! Stack operations on [`Navigator`](crate::Navigator) never fail: unmatched
//! paths are dropped and guard conditions turn into no-ops. The errors below
//! only arise while building inputs (link items, route registries, settings).

use std::path::PathBuf;

use thiserror::Error;

/// Result type for navigation operations.
pub type NavigationResult<T> = Result<T, NavigationError>;

/// Errors that can occur while configuring navigation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NavigationError {
	/// A link item was created without any path.
	///
	/// Every `LinkItem` needs at least one path; the first one is the
	/// target of single-target operations such as `back_or_next`.
	#[error("link item requires at least one path")]
	EmptyPathList,

	/// A route with the same match path is already registered.
	#[error("route already registered: {0}")]
	DuplicateRoute(String),

	/// Navigator settings could not be parsed.
	#[error("invalid navigator settings: {0}")]
	InvalidSettings(String),

	/// Settings file could not be read.
	#[error("failed to read settings file {path}: {source}")]
	Io {
		/// Path of the settings file.
		path: PathBuf,
		/// Underlying IO error.
		#[source]
		source: std::io::Error,
	},
}
