//! Presentation host contract.
//!
//! A presentation host is the platform container that actually displays
//! screens (a native navigation controller, a webview stack, a terminal UI
//! pane). The [`Navigator`](crate::Navigator) owns exactly one host and is
//! the only thing that commands it.

use std::fmt;

use uuid::Uuid;

use crate::screen::ScreenRef;

/// Stable identity of a presentation host.
///
/// Two navigators are equal when they drive the same host, regardless of
/// what is currently on their stacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HostId(Uuid);

impl HostId {
	/// Generates a fresh identity.
	pub fn new() -> Self {
		Self(Uuid::new_v4())
	}

	/// Wraps an existing identifier.
	pub fn from_uuid(id: Uuid) -> Self {
		Self(id)
	}

	/// Returns the underlying identifier.
	pub fn as_uuid(&self) -> Uuid {
		self.0
	}
}

impl Default for HostId {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Display for HostId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// Container that displays an ordered stack of screens.
///
/// Index 0 of [`screens`](Self::screens) is the root, the last index is the
/// visible screen.
pub trait PresentationHost {
	/// Returns the identity of this host.
	fn host_id(&self) -> HostId;

	/// Returns the presented screens, oldest first.
	fn screens(&self) -> &[ScreenRef];

	/// Replaces the whole stack in one commit.
	fn set_entire_stack(&mut self, screens: Vec<ScreenRef>, animated: bool);

	/// Removes the top screen.
	fn pop_one(&mut self, animated: bool);

	/// Removes every screen above `index`, keeping `0..=index`.
	fn pop_to(&mut self, index: usize, animated: bool);
}

/// A command received by a [`MemoryHost`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
	/// `set_entire_stack` with the committed paths.
	SetEntireStack {
		/// Paths of the committed screens, oldest first.
		paths: Vec<String>,
		/// Whether the change was animated.
		animated: bool,
	},
	/// `pop_one`.
	PopOne {
		/// Whether the change was animated.
		animated: bool,
	},
	/// `pop_to`.
	PopTo {
		/// Index of the screen that became the top.
		index: usize,
		/// Whether the change was animated.
		animated: bool,
	},
}

/// In-memory presentation host.
///
/// Keeps the stack in a `Vec` and records every command it receives, which
/// makes it suitable for headless use and for asserting on commits in tests.
#[derive(Debug, Default)]
pub struct MemoryHost {
	id: HostId,
	screens: Vec<ScreenRef>,
	commands: Vec<HostCommand>,
}

impl MemoryHost {
	/// Creates an empty host with a fresh identity.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an empty host with the given identity.
	pub fn with_id(id: HostId) -> Self {
		Self {
			id,
			..Self::default()
		}
	}

	/// Returns every command received so far.
	pub fn commands(&self) -> &[HostCommand] {
		&self.commands
	}

	/// Returns the number of commands received so far.
	pub fn commit_count(&self) -> usize {
		self.commands.len()
	}

	/// Forgets recorded commands without touching the stack.
	pub fn clear_commands(&mut self) {
		self.commands.clear();
	}
}

impl PresentationHost for MemoryHost {
	fn host_id(&self) -> HostId {
		self.id
	}

	fn screens(&self) -> &[ScreenRef] {
		&self.screens
	}

	fn set_entire_stack(&mut self, screens: Vec<ScreenRef>, animated: bool) {
		self.commands.push(HostCommand::SetEntireStack {
			paths: screens.iter().map(|s| s.match_path().to_string()).collect(),
			animated,
		});
		self.screens = screens;
	}

	fn pop_one(&mut self, animated: bool) {
		self.commands.push(HostCommand::PopOne { animated });
		self.screens.pop();
	}

	fn pop_to(&mut self, index: usize, animated: bool) {
		self.commands.push(HostCommand::PopTo { index, animated });
		self.screens.truncate(index + 1);
	}
}

#[cfg(test)]
mod tests {
	use rstest::{fixture, rstest};

	use super::*;
	use crate::screen::PathScreen;

	#[fixture]
	fn host() -> MemoryHost {
		let mut host = MemoryHost::new();
		host.set_entire_stack(
			vec![
				PathScreen::shared("a"),
				PathScreen::shared("b"),
				PathScreen::shared("c"),
			],
			false,
		);
		host.clear_commands();
		host
	}

	fn paths(host: &MemoryHost) -> Vec<&str> {
		host.screens().iter().map(|s| s.match_path()).collect()
	}

	#[rstest]
	fn test_host_ids_are_unique() {
		assert_ne!(MemoryHost::new().host_id(), MemoryHost::new().host_id());
	}

	#[rstest]
	fn test_with_id_keeps_identity() {
		let id = HostId::new();
		assert_eq!(MemoryHost::with_id(id).host_id(), id);
	}

	#[rstest]
	fn test_set_entire_stack_records_paths(mut host: MemoryHost) {
		host.set_entire_stack(vec![PathScreen::shared("x")], true);

		assert_eq!(paths(&host), vec!["x"]);
		assert_eq!(
			host.commands(),
			[HostCommand::SetEntireStack {
				paths: vec!["x".to_string()],
				animated: true,
			}]
		);
	}

	#[rstest]
	fn test_pop_one(mut host: MemoryHost) {
		host.pop_one(false);

		assert_eq!(paths(&host), vec!["a", "b"]);
		assert_eq!(host.commit_count(), 1);
	}

	#[rstest]
	#[case(0, vec!["a"])]
	#[case(1, vec!["a", "b"])]
	#[case(2, vec!["a", "b", "c"])]
	fn test_pop_to(mut host: MemoryHost, #[case] index: usize, #[case] expected: Vec<&str>) {
		host.pop_to(index, true);

		assert_eq!(paths(&host), expected);
		assert_eq!(host.commands(), [HostCommand::PopTo { index, animated: true }]);
	}

	#[rstest]
	fn test_host_id_display_is_uuid() {
		let id = HostId::new();
		assert_eq!(id.to_string(), id.as_uuid().to_string());
	}
}
