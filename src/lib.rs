//! # Link Navigator
//!
//! Path-based navigation stacks for multi-screen Rust applications.
//!
//! Screens are addressed by logical paths. A [`LinkItem`] names one or more
//! paths plus a payload, routes turn each path into a screen, and the
//! navigator applies the result to a presentation container in a single
//! transaction.
//!
//! ## Architecture
//!
//! - **LinkNavigator**: root facade owning the routes and the dependency bag
//! - **Navigator**: stack operations over any [`PresentationHost`]
//! - **RouteRegistry**: ordered path to builder table, first match wins
//! - **NavigatorSettings**: animation and duplicate-route policy, loadable from TOML
//!
//! ## Example
//!
//! ```rust
//! use link_navigator::prelude::*;
//!
//! let routes = RouteRegistry::<(), (), ()>::new()
//!     .route("welcome", |_, _, _| PathScreen::shared("welcome"))
//!     .route("terms", |_, _, _| PathScreen::shared("terms"))
//!     .route("home", |_, _, _| PathScreen::shared("home"));
//!
//! let mut navigator =
//!     LinkNavigator::new((), routes, (), LinkItem::path("welcome"), MemoryHost::new());
//! navigator.next(&LinkItem::with_paths(["terms", "home"], ()).unwrap());
//!
//! // Onboarding finished: hide it from back navigation
//! navigator.remove(&LinkItem::with_paths(["welcome", "terms"], ()).unwrap());
//! assert_eq!(navigator.current_paths(), ["home"]);
//! ```

pub use reinhardt_navigation::*;

/// Commonly used types.
pub mod prelude {
	pub use reinhardt_navigation::prelude::*;
}
