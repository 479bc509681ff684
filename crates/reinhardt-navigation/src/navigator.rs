//! The navigation stack manager.
//!
//! A [`Navigator`] owns one [`PresentationHost`] and turns [`LinkItem`]s into
//! stack mutations. Every operation computes the new stack synchronously and
//! commits it to the host in a single call, or does nothing at all.
//!
//! | Operation | Effect on the stack |
//! |-----------|---------------------|
//! | [`replace`](Navigator::replace) | resolved item becomes the whole stack |
//! | [`push`](Navigator::push) | resolved item is appended |
//! | [`back`](Navigator::back) | top screen is popped, never the root |
//! | [`back_or_next`](Navigator::back_or_next) | pop to the first match, else push |
//! | [`remove`](Navigator::remove) | matching screens are dropped in place |
//! | [`back_to_last`](Navigator::back_to_last) | pop to the most recent match |
//! | [`reset`](Navigator::reset) | stack is emptied |

use std::fmt;

use crate::host::PresentationHost;
use crate::link::LinkItem;
use crate::route::RouteContext;
use crate::screen::ScreenRef;

/// Manages an ordered stack of screens presented by a host.
///
/// Equality compares host identity only: two navigators are equal when they
/// drive the same host.
///
/// # Examples
///
/// ```
/// use reinhardt_navigation::{
///     LinkItem, MemoryHost, Navigator, PathScreen, RouteContext, RouteRegistry,
/// };
///
/// let routes = RouteRegistry::<(), (), ()>::new()
///     .route("home", |_, _, _| PathScreen::shared("home"))
///     .route("list", |_, _, _| PathScreen::shared("list"));
/// let cx = RouteContext::new(&(), &routes, &());
///
/// let mut navigator = Navigator::new(LinkItem::path("home"), MemoryHost::new());
/// navigator.launch(&cx, false);
/// navigator.push(&cx, &LinkItem::path("list"), true);
/// assert_eq!(navigator.current_path(), ["home", "list"]);
///
/// navigator.back(true);
/// assert_eq!(navigator.current_path(), ["home"]);
/// ```
pub struct Navigator<T, H> {
	initial_link_item: LinkItem<T>,
	host: H,
}

impl<T, H: PresentationHost> Navigator<T, H> {
	/// Creates a navigator driving `host`.
	///
	/// Nothing is presented until [`launch`](Self::launch) commits
	/// `initial_link_item`.
	pub fn new(initial_link_item: LinkItem<T>, host: H) -> Self {
		Self {
			initial_link_item,
			host,
		}
	}

	/// Returns the item used to seed the stack.
	pub fn initial_link_item(&self) -> &LinkItem<T> {
		&self.initial_link_item
	}

	/// Returns the host.
	pub fn host(&self) -> &H {
		&self.host
	}

	/// Consumes the navigator, returning its host.
	pub fn into_host(self) -> H {
		self.host
	}

	/// Returns the presented screens, root first.
	pub fn screens(&self) -> &[ScreenRef] {
		self.host.screens()
	}

	/// Returns the number of presented screens.
	pub fn len(&self) -> usize {
		self.screens().len()
	}

	/// Returns `true` if nothing is presented.
	pub fn is_empty(&self) -> bool {
		self.screens().is_empty()
	}

	/// Returns the visible screen.
	pub fn top(&self) -> Option<&ScreenRef> {
		self.screens().last()
	}

	/// Returns the match paths of the stack, root first.
	pub fn current_path(&self) -> Vec<String> {
		self.screens()
			.iter()
			.map(|screen| screen.match_path().to_string())
			.collect()
	}

	/// Returns the lowest screen whose match path is `path`.
	pub fn find(&self, path: &str) -> Option<&ScreenRef> {
		self.screens()
			.iter()
			.find(|screen| screen.match_path() == path)
	}

	/// Presents the initial link item as the whole stack.
	pub fn launch<R, D>(&mut self, cx: &RouteContext<'_, R, T, D>, animated: bool) {
		let screens = cx.resolve(&self.initial_link_item);
		self.commit(screens, animated);
	}

	/// Replaces the whole stack with the screens resolved from `item`.
	///
	/// Prior history is discarded.
	pub fn replace<R, D>(
		&mut self,
		cx: &RouteContext<'_, R, T, D>,
		item: &LinkItem<T>,
		animated: bool,
	) {
		let screens = cx.resolve(item);
		self.commit(screens, animated);
	}

	/// Appends the screens resolved from `item` to the stack.
	///
	/// Existing entries are kept as they are.
	pub fn push<R, D>(
		&mut self,
		cx: &RouteContext<'_, R, T, D>,
		item: &LinkItem<T>,
		animated: bool,
	) {
		let resolved = cx.resolve(item);
		let mut screens = Vec::with_capacity(self.len() + resolved.len());
		screens.extend(self.screens().iter().cloned());
		screens.extend(resolved);
		self.commit(screens, animated);
	}

	/// Pops the visible screen unless it is the root.
	pub fn back(&mut self, animated: bool) {
		if self.len() <= 1 {
			tracing::debug!(depth = self.len(), "back ignored: nothing above the root");
			return;
		}
		tracing::trace!(host = %self.host.host_id(), animated, "pop one");
		self.host.pop_one(animated);
	}

	/// Pops back to the first screen matching `item`'s primary path, or
	/// pushes `item` when no such screen is presented.
	///
	/// Repeating the call for a presented path leaves the stack unchanged.
	pub fn back_or_next<R, D>(
		&mut self,
		cx: &RouteContext<'_, R, T, D>,
		item: &LinkItem<T>,
		animated: bool,
	) {
		let path = item.first_path();
		let index = self.screens().iter().position(|s| s.match_path() == path);
		match index {
			Some(index) => self.pop_to(index, animated),
			None => self.push(cx, item, animated),
		}
	}

	/// Removes every screen whose match path appears in `item`.
	///
	/// Survivors keep their order. The change is committed without animation,
	/// and nothing is committed when no screen matched.
	pub fn remove(&mut self, item: &LinkItem<T>) {
		let survivors: Vec<ScreenRef> = self
			.screens()
			.iter()
			.filter(|screen| !item.contains(screen.match_path()))
			.cloned()
			.collect();

		if survivors.len() == self.len() {
			tracing::debug!(
				paths = ?item.path_list(),
				"remove ignored: no presented screen matched"
			);
			return;
		}
		self.commit(survivors, false);
	}

	/// Pops back to the most recent screen matching `item`'s primary path.
	///
	/// Does nothing when no such screen is presented.
	pub fn back_to_last(&mut self, item: &LinkItem<T>, animated: bool) {
		let path = item.first_path();
		let index = self.screens().iter().rposition(|s| s.match_path() == path);
		match index {
			Some(index) => self.pop_to(index, animated),
			None => {
				tracing::debug!(path = %path, "back_to_last ignored: path is not presented");
			}
		}
	}

	/// Empties the stack.
	///
	/// Unlike [`back`](Self::back) this also removes the root; it is meant
	/// for tearing a flow down.
	pub fn reset(&mut self, animated: bool) {
		self.commit(Vec::new(), animated);
	}

	fn pop_to(&mut self, index: usize, animated: bool) {
		tracing::trace!(host = %self.host.host_id(), index, animated, "pop to");
		self.host.pop_to(index, animated);
	}

	fn commit(&mut self, screens: Vec<ScreenRef>, animated: bool) {
		tracing::trace!(
			host = %self.host.host_id(),
			depth = screens.len(),
			animated,
			"set entire stack"
		);
		self.host.set_entire_stack(screens, animated);
	}
}

impl<T, H: PresentationHost> PartialEq for Navigator<T, H> {
	fn eq(&self, other: &Self) -> bool {
		self.host.host_id() == other.host.host_id()
	}
}

impl<T, H: PresentationHost> Eq for Navigator<T, H> {}

impl<T: fmt::Debug, H: PresentationHost> fmt::Debug for Navigator<T, H> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Navigator")
			.field("host", &self.host.host_id())
			.field("initial_link_item", &self.initial_link_item)
			.field("current_path", &self.current_path())
			.finish()
	}
}
