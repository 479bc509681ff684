//! Root navigator facade.
//!
//! [`LinkNavigator`] bundles a [`Navigator`] with the inputs every operation
//! needs (root handle, route registry, dependency bag) so call sites such as
//! reducers and side-effect handlers only pass a [`LinkItem`].

use crate::host::PresentationHost;
use crate::link::LinkItem;
use crate::navigator::Navigator;
use crate::route::{RouteContext, RouteRegistry};
use crate::screen::ScreenRef;
use crate::settings::NavigatorSettings;

/// A navigator that owns its routes and dependency bag.
///
/// Route builders receive `&R`, the root handle given at construction.
///
/// # Examples
///
/// ```
/// use reinhardt_navigation::{LinkItem, LinkNavigator, MemoryHost, PathScreen, RouteRegistry};
///
/// let routes = RouteRegistry::<(), (), ()>::new()
///     .route("home", |_, _, _| PathScreen::shared("home"))
///     .route("list", |_, _, _| PathScreen::shared("list"))
///     .route("detail", |_, _, _| PathScreen::shared("detail"));
///
/// let mut navigator = LinkNavigator::new((), routes, (), LinkItem::path("home"), MemoryHost::new());
/// assert_eq!(navigator.current_paths(), ["home"]);
///
/// navigator.next(&LinkItem::with_paths(["list", "detail"], ()).unwrap());
/// navigator.back_or_next(&LinkItem::path("home"));
/// assert_eq!(navigator.current_paths(), ["home"]);
/// ```
pub struct LinkNavigator<R, T, D, H> {
	root: R,
	routes: RouteRegistry<R, T, D>,
	dependency: D,
	navigator: Navigator<T, H>,
	settings: NavigatorSettings,
}

impl<R, T, D, H: PresentationHost> LinkNavigator<R, T, D, H> {
	/// Creates the navigator and presents `initial_link_item` without
	/// animation.
	pub fn new(
		root: R,
		routes: RouteRegistry<R, T, D>,
		dependency: D,
		initial_link_item: LinkItem<T>,
		host: H,
	) -> Self {
		let mut navigator = Navigator::new(initial_link_item, host);
		navigator.launch(&RouteContext::new(&root, &routes, &dependency), false);
		tracing::debug!(
			host = %navigator.host().host_id(),
			routes = routes.len(),
			stack = ?navigator.current_path(),
			"link navigator launched"
		);

		Self {
			root,
			routes,
			dependency,
			navigator,
			settings: NavigatorSettings::default(),
		}
	}

	/// Replaces the settings used by later operations.
	pub fn with_settings(mut self, settings: NavigatorSettings) -> Self {
		self.settings = settings;
		self
	}

	/// Returns the settings.
	pub fn settings(&self) -> &NavigatorSettings {
		&self.settings
	}

	/// Returns the root handle passed to builders.
	pub fn root(&self) -> &R {
		&self.root
	}

	/// Returns the route registry.
	pub fn routes(&self) -> &RouteRegistry<R, T, D> {
		&self.routes
	}

	/// Returns the dependency bag.
	pub fn dependency(&self) -> &D {
		&self.dependency
	}

	/// Returns the underlying navigator.
	pub fn navigator(&self) -> &Navigator<T, H> {
		&self.navigator
	}

	/// Consumes the facade, returning the underlying navigator.
	pub fn into_navigator(self) -> Navigator<T, H> {
		self.navigator
	}

	/// Returns the match paths of the stack, root first.
	pub fn current_paths(&self) -> Vec<String> {
		self.navigator.current_path()
	}

	/// Returns the lowest presented screen for `path`.
	pub fn find(&self, path: &str) -> Option<&ScreenRef> {
		self.navigator.find(path)
	}

	/// Pushes `item` onto the stack.
	pub fn next(&mut self, item: &LinkItem<T>) {
		let cx = RouteContext::new(&self.root, &self.routes, &self.dependency);
		self.navigator.push(&cx, item, self.settings.animated);
	}

	/// Makes `item` the whole stack.
	pub fn root_next(&mut self, item: &LinkItem<T>) {
		let cx = RouteContext::new(&self.root, &self.routes, &self.dependency);
		self.navigator.replace(&cx, item, self.settings.animated);
	}

	/// Pops the visible screen unless it is the root.
	pub fn back(&mut self) {
		self.navigator.back(self.settings.animated);
	}

	/// Pops back to `item`'s primary path if presented, otherwise pushes
	/// `item`.
	pub fn back_or_next(&mut self, item: &LinkItem<T>) {
		let cx = RouteContext::new(&self.root, &self.routes, &self.dependency);
		self.navigator.back_or_next(&cx, item, self.settings.animated);
	}

	/// Removes every presented screen whose path appears in `item`.
	pub fn remove(&mut self, item: &LinkItem<T>) {
		self.navigator.remove(item);
	}

	/// Pops back to the most recent screen for `item`'s primary path.
	pub fn back_to_last(&mut self, item: &LinkItem<T>) {
		self.navigator.back_to_last(item, self.settings.animated);
	}

	/// Tears the whole stack down.
	pub fn close(&mut self) {
		self.navigator.reset(self.settings.animated);
	}
}

impl<R, T, D, H: PresentationHost> PartialEq for LinkNavigator<R, T, D, H> {
	fn eq(&self, other: &Self) -> bool {
		self.navigator == other.navigator
	}
}
