use log::{debug, warn};

use crate::prefs::{PreferenceStore, Theme, load_theme, save_theme};
use crate::surface::{PageSurface, SectionBounds};

/// A section becomes current once the page has scrolled to within this many
/// pixels of its top.
pub const SCROLL_THRESHOLD: f64 = 200.0;

/// Id of the section the reader is in: the last one in document order whose
/// top, less the threshold, has been scrolled past.
pub fn current_section(sections: &[SectionBounds], offset: f64) -> Option<&str> {
	sections
		.iter()
		.filter(|s| offset >= s.top - SCROLL_THRESHOLD)
		.last()
		.map(|s| s.id.as_str())
		.filter(|id| !id.is_empty())
}

/// Index of the first link pointing at `#section`.
pub fn link_for_section(targets: &[Option<String>], section: &str) -> Option<usize> {
	let fragment = format!("#{}", section);
	targets
		.iter()
		.position(|t| t.as_deref() == Some(fragment.as_str()))
}

/// Keeps the navigation highlight and theme in step with the page.
pub struct PageController<S, P> {
	surface: S,
	store: P,
	theme: Theme,
}

impl<S: PageSurface, P: PreferenceStore> PageController<S, P> {
	/// Restores the saved theme onto the page.
	pub fn new(surface: S, store: P) -> Self {
		let theme = load_theme(&store).unwrap_or_else(|e| {
			warn!("could not read theme preference: {}", e);
			Theme::default()
		});
		let mut controller = Self {
			surface,
			store,
			theme,
		};
		controller.apply_theme();
		controller
	}

	/// Theme currently applied.
	pub fn theme(&self) -> Theme {
		self.theme
	}

	/// Surface the controller writes to.
	pub fn surface(&self) -> &S {
		&self.surface
	}

	/// Store holding the theme flag.
	pub fn store(&self) -> &P {
		&self.store
	}

	/// Highlight the clicked link alone.
	pub fn on_link_activated(&mut self, index: usize) {
		self.mark_active(Some(index));
	}

	/// Highlight the link of the section scrolled into.
	pub fn on_scroll(&mut self) {
		let (sections, offset) = (self.surface.sections(), self.surface.scroll_offset());
		let targets = self.surface.nav_link_targets();
		let active = current_section(&sections, offset)
			.and_then(|id| link_for_section(&targets, id));
		self.mark_active(active);
	}

	/// Flip the theme, update the page and save the choice.
	pub fn toggle_theme(&mut self) {
		self.theme = self.theme.toggled();
		debug!("theme: {:?}", self.theme);
		self.apply_theme();
		if let Err(e) = save_theme(&mut self.store, self.theme) {
			warn!("could not save theme preference: {}", e);
		}
	}

	fn apply_theme(&mut self) {
		self.surface.set_dark_mode(self.theme.is_dark());
		self.surface.set_toggle_label(self.theme.toggle_label());
	}

	fn mark_active(&mut self, active: Option<usize>) {
		self.surface.set_active_link(active);
	}
}
