use std::collections::BTreeMap;

use log::debug;

use super::types::{Category, RelationshipKind};
use crate::surface::{DiagramSurface, ElementRef};

/// Scale change per zoom click.
pub const ZOOM_STEP: f64 = 0.1;
/// Zooming out stops here.
pub const MIN_SCALE: f64 = 0.5;
/// Scale on load and after reset.
pub const DEFAULT_SCALE: f64 = 1.0;

/// Transient zoom and filter state of the viewer. Never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
	/// Uniform scale of the diagram root.
	pub scale: f64,
	categories: BTreeMap<Category, bool>,
	relationships: BTreeMap<RelationshipKind, bool>,
}

impl Default for ViewState {
	fn default() -> Self {
		Self {
			scale: DEFAULT_SCALE,
			categories: Category::ALL.iter().map(|c| (*c, true)).collect(),
			relationships: RelationshipKind::FILTERABLE
				.iter()
				.map(|k| (*k, true))
				.collect(),
		}
	}
}

impl ViewState {
	/// One step larger. There is no upper bound.
	pub fn zoomed_in(self) -> Self {
		Self {
			scale: self.scale + ZOOM_STEP,
			..self
		}
	}

	/// One step smaller, never below [`MIN_SCALE`].
	pub fn zoomed_out(self) -> Self {
		Self {
			scale: (self.scale - ZOOM_STEP).max(MIN_SCALE),
			..self
		}
	}

	/// Back to [`DEFAULT_SCALE`].
	pub fn reset_zoom(self) -> Self {
		Self {
			scale: DEFAULT_SCALE,
			..self
		}
	}

	/// Show or hide one category.
	pub fn with_category(mut self, category: Category, visible: bool) -> Self {
		self.categories.insert(category, visible);
		self
	}

	/// Kinds without a filter are left untouched.
	pub fn with_relationship(mut self, kind: RelationshipKind, visible: bool) -> Self {
		if let Some(flag) = self.relationships.get_mut(&kind) {
			*flag = visible;
		}
		self
	}

	/// Whether `category` is shown.
	pub fn category_visible(&self, category: Category) -> bool {
		self.categories.get(&category).copied().unwrap_or(true)
	}

	/// `None` for kinds that cannot be filtered.
	pub fn relationship_visible(&self, kind: RelationshipKind) -> Option<bool> {
		self.relationships.get(&kind).copied()
	}
}

/// Turns zoom clicks and checkbox toggles into surface changes.
///
/// Never reads the diagram data: it only addresses elements by their
/// marker classes, so it relies on the renderer tagging them correctly.
pub struct DiagramController<S> {
	surface: S,
	view: ViewState,
}

impl<S: DiagramSurface> DiagramController<S> {
	/// Starts from the default view.
	pub fn new(surface: S) -> Self {
		Self {
			surface,
			view: ViewState::default(),
		}
	}

	/// Current zoom and filters.
	pub fn view(&self) -> &ViewState {
		&self.view
	}

	/// Surface the controller writes to.
	pub fn surface(&self) -> &S {
		&self.surface
	}

	/// Scale up by [`ZOOM_STEP`].
	pub fn zoom_in(&mut self) {
		self.view = std::mem::take(&mut self.view).zoomed_in();
		self.apply_scale();
	}

	/// Scale down by [`ZOOM_STEP`], clamped to [`MIN_SCALE`].
	pub fn zoom_out(&mut self) {
		self.view = std::mem::take(&mut self.view).zoomed_out();
		self.apply_scale();
	}

	/// Restore [`DEFAULT_SCALE`].
	pub fn reset_zoom(&mut self) {
		self.view = std::mem::take(&mut self.view).reset_zoom();
		self.apply_scale();
	}

	/// Show or hide every node of `category`.
	pub fn set_category_visible(&mut self, category: Category, visible: bool) {
		debug!("{} visible: {}", category, visible);
		self.view = std::mem::take(&mut self.view).with_category(category, visible);
		self.surface
			.set_visible(ElementRef::Category(category), visible);
	}

	/// Show or hide every edge of `kind`. Kinds without a filter are ignored.
	pub fn set_relationship_visible(&mut self, kind: RelationshipKind, visible: bool) {
		if !kind.is_filterable() {
			debug!("no filter for {} relationships", kind);
			return;
		}
		debug!("{} visible: {}", kind, visible);
		self.view = std::mem::take(&mut self.view).with_relationship(kind, visible);
		self.surface
			.set_visible(ElementRef::Relationship(kind), visible);
	}

	fn apply_scale(&mut self) {
		debug!("diagram scale: {:.1}", self.view.scale);
		self.surface
			.set_transform(ElementRef::Surface, self.view.scale);
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::surface::fake::FakeSurface;

	fn controller() -> DiagramController<FakeSurface> {
		DiagramController::new(FakeSurface::default())
	}

	#[test]
	fn zoom_in_has_no_upper_bound() {
		let mut c = controller();
		for _ in 0..50 {
			c.zoom_in();
		}
		assert!(c.view().scale > 5.9);
		assert_eq!(c.surface().transforms.len(), 50);
	}

	#[test]
	fn zoom_out_never_goes_below_minimum() {
		let mut c = controller();
		for _ in 0..20 {
			c.zoom_out();
			assert!(c.view().scale >= MIN_SCALE);
		}
		assert_eq!(c.view().scale, MIN_SCALE);
		assert!(c.surface().transforms.iter().all(|(_, s)| *s >= MIN_SCALE));
	}

	#[test]
	fn reset_restores_exactly_one() {
		let mut c = controller();
		c.zoom_in();
		c.zoom_in();
		c.zoom_out();
		c.zoom_in();
		c.reset_zoom();
		assert_eq!(c.view().scale, 1.0);
		assert_eq!(
			c.surface().transforms.last(),
			Some(&(ElementRef::Surface, 1.0))
		);

		for _ in 0..9 {
			c.zoom_out();
		}
		c.reset_zoom();
		assert_eq!(c.view().scale, 1.0);
	}

	#[test]
	fn hiding_service_touches_only_service_elements() {
		let mut c = controller();
		c.set_category_visible(Category::Service, false);

		let touched: Vec<_> = c.surface().visible.iter().collect();
		assert_eq!(
			touched,
			vec![(&ElementRef::Category(Category::Service), &false)]
		);
		assert!(!c.view().category_visible(Category::Service));
		for other in [Category::Model, Category::Ui, Category::Util] {
			assert!(c.view().category_visible(other));
		}
	}

	#[test]
	fn category_filters_are_independent() {
		let mut c = controller();
		c.set_category_visible(Category::Model, false);
		c.set_category_visible(Category::Ui, false);
		c.set_category_visible(Category::Model, true);

		assert!(c.view().category_visible(Category::Model));
		assert!(!c.view().category_visible(Category::Ui));
		assert_eq!(
			c.surface().visible.get(&ElementRef::Category(Category::Ui)),
			Some(&false)
		);
	}

	#[test]
	fn relationship_filter_toggles_kind() {
		let mut c = controller();
		c.set_relationship_visible(RelationshipKind::Association, false);
		assert_eq!(
			c.view().relationship_visible(RelationshipKind::Association),
			Some(false)
		);
		assert_eq!(
			c.surface()
				.visible
				.get(&ElementRef::Relationship(RelationshipKind::Association)),
			Some(&false)
		);
	}

	#[test]
	fn implementation_has_no_filter() {
		let mut c = controller();
		c.set_relationship_visible(RelationshipKind::Implementation, false);
		assert!(c.surface().visible.is_empty());
		assert_eq!(
			c.view()
				.relationship_visible(RelationshipKind::Implementation),
			None
		);
	}

	#[test]
	fn pure_transitions_leave_filters_alone() {
		let view = ViewState::default()
			.with_category(Category::Util, false)
			.zoomed_in()
			.reset_zoom();
		assert_eq!(view.scale, DEFAULT_SCALE);
		assert!(!view.category_visible(Category::Util));
	}
}
