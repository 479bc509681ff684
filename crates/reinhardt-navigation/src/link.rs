//! Link items describing navigation targets.

use serde::{Deserialize, Serialize};

use crate::error::{NavigationError, NavigationResult};

/// A navigation intent: one or more paths plus a payload handed to every
/// route builder that matches.
///
/// The path list is never empty. Its first entry is the primary target used
/// by single-target operations (`back_or_next`, `back_to_last`).
///
/// # Examples
///
/// ```
/// use reinhardt_navigation::LinkItem;
///
/// let item = LinkItem::with_paths(["list", "detail"], 42).unwrap();
/// assert_eq!(item.first_path(), "list");
/// assert_eq!(*item.items(), 42);
///
/// let single: LinkItem = LinkItem::path("home");
/// assert_eq!(single.path_list(), ["home"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawLinkItem<T>")]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct LinkItem<T = ()> {
	path_list: Vec<String>,
	items: T,
}

impl<T> LinkItem<T> {
	/// Creates a link item targeting a single path.
	pub fn new(path: impl Into<String>, items: T) -> Self {
		Self {
			path_list: vec![path.into()],
			items,
		}
	}

	/// Creates a link item targeting several paths in order.
	///
	/// # Errors
	///
	/// Returns [`NavigationError::EmptyPathList`] if `paths` yields nothing.
	pub fn with_paths<I, S>(paths: I, items: T) -> NavigationResult<Self>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let path_list: Vec<String> = paths.into_iter().map(Into::into).collect();
		if path_list.is_empty() {
			return Err(NavigationError::EmptyPathList);
		}

		Ok(Self { path_list, items })
	}

	/// Returns every path in navigation order.
	pub fn path_list(&self) -> &[String] {
		&self.path_list
	}

	/// Returns the primary target path.
	pub fn first_path(&self) -> &str {
		// non-empty by construction
		&self.path_list[0]
	}

	/// Returns the payload passed to route builders.
	pub fn items(&self) -> &T {
		&self.items
	}

	/// Returns `true` if `path` is one of this item's paths.
	pub fn contains(&self, path: &str) -> bool {
		self.path_list.iter().any(|p| p == path)
	}

	/// Consumes the item, returning its paths and payload.
	pub fn into_parts(self) -> (Vec<String>, T) {
		(self.path_list, self.items)
	}
}

impl<T: Default> LinkItem<T> {
	/// Creates a single-path link item with a default payload.
	pub fn path(path: impl Into<String>) -> Self {
		Self::new(path, T::default())
	}
}

#[derive(Deserialize)]
struct RawLinkItem<T> {
	path_list: Vec<String>,
	items: T,
}

impl<T> TryFrom<RawLinkItem<T>> for LinkItem<T> {
	type Error = NavigationError;

	fn try_from(raw: RawLinkItem<T>) -> Result<Self, Self::Error> {
		Self::with_paths(raw.path_list, raw.items)
	}
}
