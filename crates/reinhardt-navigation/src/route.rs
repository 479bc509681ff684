//! Route builders and path resolution.
//!
//! A [`RouteRegistry`] is an ordered list of `(match path, builder)` entries
//! assembled once at startup. Resolving a [`LinkItem`] walks its paths in
//! order, builds one screen per matched path and drops the rest.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{NavigationError, NavigationResult};
use crate::link::LinkItem;
use crate::screen::ScreenRef;

/// Builder function producing a screen from the root, payload and
/// dependency bag.
pub(crate) type BuildFn<R, T, D> = Arc<dyn Fn(&R, &T, &D) -> ScreenRef + Send + Sync>;

/// What a registry does when a match path is registered twice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateRoutePolicy {
	/// Accept the registration; lookups keep returning the first one.
	#[default]
	KeepFirst,
	/// Refuse the registration with [`NavigationError::DuplicateRoute`].
	Reject,
}

/// A single route: a match path and the builder for its screen.
pub struct RouteBuilder<R, T, D> {
	match_path: String,
	build: BuildFn<R, T, D>,
}

impl<R, T, D> Clone for RouteBuilder<R, T, D> {
	fn clone(&self) -> Self {
		Self {
			match_path: self.match_path.clone(),
			build: Arc::clone(&self.build),
		}
	}
}

impl<R, T, D> fmt::Debug for RouteBuilder<R, T, D> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RouteBuilder")
			.field("match_path", &self.match_path)
			.finish_non_exhaustive()
	}
}

impl<R, T, D> RouteBuilder<R, T, D> {
	/// Creates a route for `match_path`.
	pub fn new<F>(match_path: impl Into<String>, build: F) -> Self
	where
		F: Fn(&R, &T, &D) -> ScreenRef + Send + Sync + 'static,
	{
		Self {
			match_path: match_path.into(),
			build: Arc::new(build),
		}
	}

	/// Returns the path this route answers to.
	pub fn match_path(&self) -> &str {
		&self.match_path
	}

	/// Builds the screen for this route.
	pub fn build(&self, root: &R, items: &T, dependency: &D) -> ScreenRef {
		(self.build)(root, items, dependency)
	}
}

/// Ordered collection of route builders.
///
/// Lookup is linear and the first registration for a path wins.
///
/// # Examples
///
/// ```
/// use reinhardt_navigation::{PathScreen, RouteRegistry};
///
/// let routes = RouteRegistry::<(), (), ()>::new()
///     .route("home", |_, _, _| PathScreen::shared("home"))
///     .route("detail", |_, _, _| PathScreen::shared("detail"));
///
/// assert_eq!(routes.len(), 2);
/// assert!(routes.find("home").is_some());
/// assert!(routes.find("missing").is_none());
/// ```
pub struct RouteRegistry<R, T, D> {
	routes: Vec<RouteBuilder<R, T, D>>,
	policy: DuplicateRoutePolicy,
}

impl<R, T, D> Clone for RouteRegistry<R, T, D> {
	fn clone(&self) -> Self {
		Self {
			routes: self.routes.clone(),
			policy: self.policy,
		}
	}
}

impl<R, T, D> fmt::Debug for RouteRegistry<R, T, D> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RouteRegistry")
			.field("paths", &self.paths().collect::<Vec<_>>())
			.field("policy", &self.policy)
			.finish()
	}
}

impl<R, T, D> Default for RouteRegistry<R, T, D> {
	fn default() -> Self {
		Self::new()
	}
}

impl<R, T, D> RouteRegistry<R, T, D> {
	/// Creates an empty registry that keeps the first of duplicate routes.
	pub fn new() -> Self {
		Self::with_policy(DuplicateRoutePolicy::default())
	}

	/// Creates an empty registry with the given duplicate policy.
	pub fn with_policy(policy: DuplicateRoutePolicy) -> Self {
		Self {
			routes: Vec::new(),
			policy,
		}
	}

	/// Returns the duplicate policy.
	pub fn policy(&self) -> DuplicateRoutePolicy {
		self.policy
	}

	/// Appends a route.
	///
	/// Duplicates are always appended here (and shadowed by the earlier
	/// entry); use [`register`](Self::register) to honor
	/// [`DuplicateRoutePolicy::Reject`].
	pub fn route<F>(mut self, match_path: impl Into<String>, build: F) -> Self
	where
		F: Fn(&R, &T, &D) -> ScreenRef + Send + Sync + 'static,
	{
		let route = RouteBuilder::new(match_path, build);
		if self.find(route.match_path()).is_some() {
			tracing::warn!(
				path = %route.match_path(),
				"route registered twice; the first registration wins"
			);
		}
		self.routes.push(route);
		self
	}

	/// Registers a route according to the duplicate policy.
	///
	/// # Errors
	///
	/// Returns [`NavigationError::DuplicateRoute`] if the path is already
	/// registered and the policy is [`DuplicateRoutePolicy::Reject`].
	pub fn register(&mut self, route: RouteBuilder<R, T, D>) -> NavigationResult<()> {
		if self.find(route.match_path()).is_some() {
			match self.policy {
				DuplicateRoutePolicy::Reject => {
					return Err(NavigationError::DuplicateRoute(route.match_path));
				}
				DuplicateRoutePolicy::KeepFirst => {
					tracing::warn!(
						path = %route.match_path(),
						"route registered twice; the first registration wins"
					);
				}
			}
		}
		self.routes.push(route);
		Ok(())
	}

	/// Returns the first route registered for `path`.
	pub fn find(&self, path: &str) -> Option<&RouteBuilder<R, T, D>> {
		self.routes.iter().find(|route| route.match_path == path)
	}

	/// Returns registered match paths in registration order.
	pub fn paths(&self) -> impl Iterator<Item = &str> {
		self.routes.iter().map(RouteBuilder::match_path)
	}

	/// Returns the number of registered routes.
	pub fn len(&self) -> usize {
		self.routes.len()
	}

	/// Returns `true` if no routes are registered.
	pub fn is_empty(&self) -> bool {
		self.routes.is_empty()
	}

	/// Builds one screen per matched path of `item`, in path order.
	///
	/// Paths without a registered route are skipped.
	pub fn resolve(&self, root: &R, item: &LinkItem<T>, dependency: &D) -> Vec<ScreenRef> {
		item.path_list()
			.iter()
			.filter_map(|path| match self.find(path) {
				Some(route) => Some(route.build(root, item.items(), dependency)),
				None => {
					tracing::debug!(path = %path, "no route registered for path, skipping");
					None
				}
			})
			.collect()
	}
}

impl<R, T, D> FromIterator<RouteBuilder<R, T, D>> for RouteRegistry<R, T, D> {
	fn from_iter<I: IntoIterator<Item = RouteBuilder<R, T, D>>>(iter: I) -> Self {
		Self {
			routes: iter.into_iter().collect(),
			policy: DuplicateRoutePolicy::default(),
		}
	}
}

/// The transient inputs of a resolution: the root handed to builders, the
/// registry and the dependency bag.
///
/// A navigator never keeps a context beyond the operation it was passed to.
pub struct RouteContext<'a, R, T, D> {
	root: &'a R,
	routes: &'a RouteRegistry<R, T, D>,
	dependency: &'a D,
}

impl<R, T, D> Clone for RouteContext<'_, R, T, D> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<R, T, D> Copy for RouteContext<'_, R, T, D> {}

impl<'a, R, T, D> RouteContext<'a, R, T, D> {
	/// Bundles a root, registry and dependency bag.
	pub fn new(root: &'a R, routes: &'a RouteRegistry<R, T, D>, dependency: &'a D) -> Self {
		Self {
			root,
			routes,
			dependency,
		}
	}

	/// Returns the root handed to builders.
	pub fn root(&self) -> &'a R {
		self.root
	}

	/// Returns the registry.
	pub fn routes(&self) -> &'a RouteRegistry<R, T, D> {
		self.routes
	}

	/// Returns the dependency bag.
	pub fn dependency(&self) -> &'a D {
		self.dependency
	}

	/// Resolves `item` against the registry.
	pub fn resolve(&self, item: &LinkItem<T>) -> Vec<ScreenRef> {
		self.routes.resolve(self.root, item, self.dependency)
	}
}
