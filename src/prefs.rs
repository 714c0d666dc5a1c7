//! Durable theme preference, backed by `localStorage` in the browser.

use thiserror::Error;
use web_sys::Storage;

use crate::surface::ThemeLabel;

/// Storage key of the theme flag.
pub const DARK_MODE_KEY: &str = "darkMode";
/// Stored value for dark mode.
pub const ENABLED: &str = "enabled";
/// Stored value for light mode.
pub const DISABLED: &str = "disabled";

/// Failure to reach the preference store.
#[derive(Debug, Error)]
pub enum PrefsError {
	/// The browser exposes no storage.
	#[error("local storage is unavailable")]
	Unavailable,
	/// The storage call threw.
	#[error("storage access failed: {0}")]
	Access(String),
}

/// String key-value store that survives page loads.
pub trait PreferenceStore {
	/// Value under `key`, if any.
	fn get(&self, key: &str) -> Result<Option<String>, PrefsError>;
	/// Store `value` under `key`.
	fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError>;
}

/// Light/dark display choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
	/// Default when nothing is stored.
	#[default]
	Light,
	/// Body carries the dark-mode class.
	Dark,
}

impl Theme {
	/// Anything other than the literal `enabled` means light.
	pub fn from_stored(value: Option<&str>) -> Self {
		match value {
			Some(ENABLED) => Theme::Dark,
			_ => Theme::Light,
		}
	}

	/// Literal written to the store.
	pub fn stored_value(self) -> &'static str {
		match self {
			Theme::Dark => ENABLED,
			Theme::Light => DISABLED,
		}
	}

	/// The other theme.
	pub fn toggled(self) -> Self {
		match self {
			Theme::Light => Theme::Dark,
			Theme::Dark => Theme::Light,
		}
	}

	/// `true` for [`Theme::Dark`].
	pub fn is_dark(self) -> bool {
		self == Theme::Dark
	}

	/// The toggle offers the other theme.
	pub fn toggle_label(self) -> ThemeLabel {
		match self {
			Theme::Light => ThemeLabel {
				icon: "fa-moon",
				text: "Dark Mode",
			},
			Theme::Dark => ThemeLabel {
				icon: "fa-sun",
				text: "Light Mode",
			},
		}
	}
}

/// Read the saved theme.
pub fn load_theme(store: &impl PreferenceStore) -> Result<Theme, PrefsError> {
	let stored = store.get(DARK_MODE_KEY)?;
	Ok(Theme::from_stored(stored.as_deref()))
}

/// Persist `theme`.
pub fn save_theme(store: &mut impl PreferenceStore, theme: Theme) -> Result<(), PrefsError> {
	store.set(DARK_MODE_KEY, theme.stored_value())
}

/// `window.localStorage`. Every call fails with [`PrefsError::Unavailable`]
/// when the browser denies access.
pub struct LocalStore {
	storage: Option<Storage>,
}

impl LocalStore {
	/// Handle on the current window's storage.
	pub fn open() -> Self {
		let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
		Self { storage }
	}

	fn storage(&self) -> Result<&Storage, PrefsError> {
		self.storage.as_ref().ok_or(PrefsError::Unavailable)
	}
}

impl PreferenceStore for LocalStore {
	fn get(&self, key: &str) -> Result<Option<String>, PrefsError> {
		self.storage()?
			.get_item(key)
			.map_err(|e| PrefsError::Access(format!("{:?}", e)))
	}

	fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError> {
		self.storage()?
			.set_item(key, value)
			.map_err(|e| PrefsError::Access(format!("{:?}", e)))
	}
}

#[cfg(test)]
pub(crate) mod memory {
	use std::collections::HashMap;

	use super::*;

	#[derive(Debug, Default)]
	pub struct MemoryStore {
		pub values: HashMap<String, String>,
		pub broken: bool,
	}

	impl MemoryStore {
		pub fn with(key: &str, value: &str) -> Self {
			let mut store = Self::default();
			store.values.insert(key.to_string(), value.to_string());
			store
		}

		pub fn broken() -> Self {
			Self {
				broken: true,
				..Self::default()
			}
		}
	}

	impl PreferenceStore for MemoryStore {
		fn get(&self, key: &str) -> Result<Option<String>, PrefsError> {
			if self.broken {
				return Err(PrefsError::Unavailable);
			}
			Ok(self.values.get(key).cloned())
		}

		fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError> {
			if self.broken {
				return Err(PrefsError::Access("quota exceeded".to_string()));
			}
			self.values.insert(key.to_string(), value.to_string());
			Ok(())
		}
	}
}
