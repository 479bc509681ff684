//! Path-based navigation stacks for Reinhardt applications.
//!
//! This crate manages the screen stack of multi-screen applications
//! (mobile shells, desktop windows, terminal UIs). Callers describe where to
//! go with a [`LinkItem`], a list of logical paths plus a payload, and a
//! [`Navigator`] turns it into stack mutations on a [`PresentationHost`].
//!
//! - **Link items**: one or more paths resolved in a single transaction
//! - **Route registry**: ordered path → builder table, first match wins
//! - **Navigator**: replace, push, back, back-or-next, remove, back-to-last, reset
//! - **Hosts**: any container implementing [`PresentationHost`]; [`MemoryHost`]
//!   is provided for headless use and tests
//!
//! Paths without a registered route are skipped, and operations whose guard
//! does not hold (popping the root, removing nothing) leave the host
//! untouched. Neither case is reported as an error; enable `debug` level
//! tracing for `reinhardt_navigation` to see them.
//!
//! # Quick Start
//!
//! ```rust
//! use reinhardt_navigation::prelude::*;
//!
//! let routes = RouteRegistry::<(), (), ()>::new()
//!     .route("home", |_, _, _| PathScreen::shared("home"))
//!     .route("list", |_, _, _| PathScreen::shared("list"))
//!     .route("detail", |_, _, _| PathScreen::shared("detail"));
//!
//! let mut navigator = LinkNavigator::new((), routes, (), LinkItem::path("home"), MemoryHost::new());
//!
//! navigator.next(&LinkItem::with_paths(["list", "detail"], ()).unwrap());
//! assert_eq!(navigator.current_paths(), ["home", "list", "detail"]);
//!
//! navigator.back();
//! assert_eq!(navigator.current_paths(), ["home", "list"]);
//!
//! navigator.back_or_next(&LinkItem::path("home"));
//! assert_eq!(navigator.current_paths(), ["home"]);
//! ```
//!
//! # Custom Screens
//!
//! ```rust
//! use std::rc::Rc;
//! use reinhardt_navigation::{LinkItem, RouteRegistry, Screen, ScreenRef};
//!
//! struct ArticleScreen {
//!     article_id: u64,
//! }
//!
//! impl Screen for ArticleScreen {
//!     fn match_path(&self) -> &str {
//!         "article"
//!     }
//! }
//!
//! struct Api {
//!     base_url: String,
//! }
//!
//! let routes = RouteRegistry::<(), u64, Api>::new().route("article", |_, id, _api| {
//!     Rc::new(ArticleScreen { article_id: *id }) as ScreenRef
//! });
//!
//! let api = Api { base_url: "https://example.com".to_string() };
//! let screens = routes.resolve(&(), &LinkItem::new("article", 42), &api);
//! assert_eq!(screens.len(), 1);
//! ```

pub mod error;
pub mod host;
pub mod link;
pub mod link_navigator;
pub mod navigator;
pub mod route;
pub mod screen;
pub mod settings;

pub use error::{NavigationError, NavigationResult};
pub use host::{HostCommand, HostId, MemoryHost, PresentationHost};
pub use link::LinkItem;
pub use link_navigator::LinkNavigator;
pub use navigator::Navigator;
pub use route::{DuplicateRoutePolicy, RouteBuilder, RouteContext, RouteRegistry};
pub use screen::{PathScreen, Screen, ScreenRef};
pub use settings::NavigatorSettings;

/// Commonly used types.
pub mod prelude {
	pub use crate::error::{NavigationError, NavigationResult};
	pub use crate::host::{MemoryHost, PresentationHost};
	pub use crate::link::LinkItem;
	pub use crate::link_navigator::LinkNavigator;
	pub use crate::navigator::Navigator;
	pub use crate::route::{RouteBuilder, RouteContext, RouteRegistry};
	pub use crate::screen::{PathScreen, Screen, ScreenRef};
	pub use crate::settings::NavigatorSettings;
}
