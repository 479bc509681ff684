//! Integration tests for the navigation stack
//!
//! These tests drive a `Navigator` over a `MemoryHost` through the flows
//! applications use:
//! 1. Launch, push, back and jump-back in one session
//! 2. Unregistered paths inside multi-hop link items
//! 3. Retroactively hiding finished steps (onboarding)
//! 4. Host commit behavior of no-op operations

use reinhardt_navigation::{
	HostCommand, LinkItem, MemoryHost, Navigator, PathScreen, PresentationHost, RouteContext,
	RouteRegistry,
};
use rstest::*;

type Registry = RouteRegistry<(), (), ()>;

#[fixture]
fn routes() -> Registry {
	Registry::new()
		.route("home", |_, _, _| PathScreen::shared("home"))
		.route("list", |_, _, _| PathScreen::shared("list"))
		.route("detail", |_, _, _| PathScreen::shared("detail"))
}

#[fixture]
fn onboarding_routes() -> Registry {
	Registry::new()
		.route("welcome", |_, _, _| PathScreen::shared("welcome"))
		.route("terms", |_, _, _| PathScreen::shared("terms"))
		.route("profile", |_, _, _| PathScreen::shared("profile"))
		.route("home", |_, _, _| PathScreen::shared("home"))
}

fn link(paths: &[&str]) -> LinkItem {
	LinkItem::with_paths(paths.iter().copied(), ()).unwrap()
}

// ============================================================================
// Session flows
// ============================================================================

/// Replace, push, back, then back-or-next in both directions
#[rstest]
fn test_home_list_detail_session(routes: Registry) {
	let cx = RouteContext::new(&(), &routes, &());
	let mut navigator = Navigator::new(link(&["home"]), MemoryHost::new());

	navigator.replace(&cx, &link(&["home"]), false);
	assert_eq!(navigator.current_path(), ["home"]);

	navigator.push(&cx, &link(&["list", "detail"]), true);
	assert_eq!(navigator.current_path(), ["home", "list", "detail"]);

	navigator.back(true);
	assert_eq!(navigator.current_path(), ["home", "list"]);

	// "home" is presented: pop to it rather than pushing a second one
	navigator.back_or_next(&cx, &link(&["home"]), true);
	assert_eq!(navigator.current_path(), ["home"]);

	// "list" is gone: push it
	navigator.back_or_next(&cx, &link(&["list"]), true);
	assert_eq!(navigator.current_path(), ["home", "list"]);
}

/// Unknown paths are skipped without failing the rest of the item
#[rstest]
fn test_push_skips_unregistered_path(routes: Registry) {
	let cx = RouteContext::new(&(), &routes, &());
	let mut navigator = Navigator::new(link(&["home"]), MemoryHost::new());
	navigator.launch(&cx, false);

	navigator.push(&cx, &link(&["list", "unknown"]), true);

	assert_eq!(navigator.current_path(), ["home", "list"]);
}

/// Replacing with only unknown paths leaves an empty stack
#[rstest]
fn test_replace_with_only_unknown_paths(routes: Registry) {
	let cx = RouteContext::new(&(), &routes, &());
	let mut navigator = Navigator::new(link(&["home"]), MemoryHost::new());
	navigator.launch(&cx, false);

	navigator.replace(&cx, &link(&["unknown", "missing"]), true);

	assert!(navigator.is_empty());
}

/// Repeated back-or-next calls for a presented path collapse history
#[rstest]
fn test_back_or_next_is_idempotent(routes: Registry) {
	let cx = RouteContext::new(&(), &routes, &());
	let mut navigator = Navigator::new(link(&["home", "list", "detail"]), MemoryHost::new());
	navigator.launch(&cx, false);

	navigator.back_or_next(&cx, &link(&["list"]), true);
	let first = navigator.current_path();
	navigator.back_or_next(&cx, &link(&["list"]), true);

	assert_eq!(first, ["home", "list"]);
	assert_eq!(navigator.current_path(), first);
}

// ============================================================================
// Onboarding
// ============================================================================

/// Finished onboarding steps are hidden from back navigation in place
#[rstest]
fn test_onboarding_steps_removed_after_completion(onboarding_routes: Registry) {
	let cx = RouteContext::new(&(), &onboarding_routes, &());
	let mut navigator = Navigator::new(link(&["welcome"]), MemoryHost::new());
	navigator.launch(&cx, false);
	navigator.push(&cx, &link(&["terms", "profile", "home"]), true);

	navigator.remove(&link(&["welcome", "terms", "profile"]));

	assert_eq!(navigator.current_path(), ["home"]);
	assert_eq!(
		navigator.host().commands().last(),
		Some(&HostCommand::SetEntireStack {
			paths: vec!["home".to_string()],
			animated: false,
		})
	);

	// Back cannot leave the root behind
	navigator.back(true);
	assert_eq!(navigator.current_path(), ["home"]);
}

// ============================================================================
// Host commits
// ============================================================================

/// No-op operations never reach the host
#[rstest]
fn test_noop_operations_do_not_commit(routes: Registry) {
	let cx = RouteContext::new(&(), &routes, &());
	let mut navigator = Navigator::new(link(&["home"]), MemoryHost::new());
	navigator.launch(&cx, false);
	let before = navigator.host().commit_count();

	navigator.back(true);
	navigator.remove(&link(&["detail"]));
	navigator.back_to_last(&link(&["list"]), true);

	assert_eq!(navigator.host().commit_count(), before);
	assert_eq!(navigator.current_path(), ["home"]);
}

/// Each effective operation is exactly one host command
#[rstest]
fn test_each_operation_commits_once(routes: Registry) {
	let cx = RouteContext::new(&(), &routes, &());
	let mut navigator = Navigator::new(link(&["home"]), MemoryHost::new());

	navigator.launch(&cx, false);
	navigator.push(&cx, &link(&["list", "detail", "list"]), true);
	navigator.back_to_last(&link(&["list"]), true);
	navigator.back(true);
	navigator.reset(false);

	assert_eq!(
		navigator.host().commands(),
		[
			HostCommand::SetEntireStack {
				paths: vec!["home".to_string()],
				animated: false,
			},
			HostCommand::SetEntireStack {
				paths: vec![
					"home".to_string(),
					"list".to_string(),
					"detail".to_string(),
					"list".to_string(),
				],
				animated: true,
			},
			HostCommand::PopTo {
				index: 3,
				animated: true,
			},
			HostCommand::PopOne { animated: true },
			HostCommand::SetEntireStack {
				paths: vec![],
				animated: false,
			},
		]
	);
}

/// Navigators sharing a host are the same navigator
#[rstest]
fn test_navigator_identity(routes: Registry) {
	let cx = RouteContext::new(&(), &routes, &());
	let host = MemoryHost::new();
	let id = host.host_id();

	let mut first = Navigator::new(link(&["home"]), host);
	first.launch(&cx, false);
	let second: Navigator<(), MemoryHost> =
		Navigator::new(link(&["list"]), MemoryHost::with_id(id));
	let third: Navigator<(), MemoryHost> = Navigator::new(link(&["home"]), MemoryHost::new());

	assert_eq!(first, second);
	assert_ne!(first, third);
}
