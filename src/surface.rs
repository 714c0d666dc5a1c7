//! Capabilities the controllers need from the rendering surface.
//!
//! The browser implementation lives in [`crate::dom`]; tests drive the
//! controllers through in-memory fakes.

use crate::components::uml_diagram::{Category, RelationshipKind};

/// Selector of one or more rendered elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ElementRef {
	/// The scalable diagram root.
	Surface,
	/// Every node of one category.
	Category(Category),
	/// Every edge of one relationship kind.
	Relationship(RelationshipKind),
}

impl ElementRef {
	/// CSS selector matching the referenced elements.
	pub fn selector(&self) -> String {
		match self {
			ElementRef::Surface => ".interactive-svg".to_string(),
			ElementRef::Category(c) => format!(".{}", c.marker_class()),
			ElementRef::Relationship(k) => format!(".{}", k.marker_class()),
		}
	}
}

/// A content section as laid out on the page.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
	/// Element id, the target of a `#fragment` link.
	pub id: String,
	/// Offset from the top of the document, in pixels.
	pub top: f64,
}

/// Icon and text shown on the theme toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeLabel {
	/// Font Awesome icon class.
	pub icon: &'static str,
	/// Visible caption.
	pub text: &'static str,
}

impl ThemeLabel {
	/// Inner markup of the toggle button.
	pub fn to_html(&self) -> String {
		format!("<i class=\"fas {}\"></i> {}", self.icon, self.text)
	}
}

/// What the page controller reads from and writes to the page.
pub trait PageSurface {
	/// `href` of every navigation link, in document order.
	fn nav_link_targets(&self) -> Vec<Option<String>>;
	/// Content sections, in document order.
	fn sections(&self) -> Vec<SectionBounds>;
	/// Vertical scroll position of the viewport.
	fn scroll_offset(&self) -> f64;
	/// Mark link `active` and clear every other one. `None` clears all.
	fn set_active_link(&mut self, active: Option<usize>);
	/// Apply or remove the dark-mode body class.
	fn set_dark_mode(&mut self, enabled: bool);
	/// Replace the icon and caption of the theme toggle.
	fn set_toggle_label(&mut self, label: ThemeLabel);
}

/// What the diagram controller writes to the rendered graph.
pub trait DiagramSurface {
	/// Show or hide every element matched by `target`.
	fn set_visible(&mut self, target: ElementRef, visible: bool);
	/// Apply a uniform scale to `target`.
	fn set_transform(&mut self, target: ElementRef, scale: f64);
}

#[cfg(test)]
pub(crate) mod fake {
	use std::collections::BTreeMap;

	use super::*;

	/// Records every call made against it.
	#[derive(Debug, Default)]
	pub struct FakeSurface {
		pub links: Vec<Option<String>>,
		pub active: Vec<bool>,
		pub active_writes: usize,
		pub sections: Vec<SectionBounds>,
		pub offset: f64,
		pub dark_mode: bool,
		pub label: Option<ThemeLabel>,
		pub visible: BTreeMap<ElementRef, bool>,
		pub transforms: Vec<(ElementRef, f64)>,
	}

	impl FakeSurface {
		pub fn with_links(hrefs: &[&str]) -> Self {
			Self {
				links: hrefs.iter().map(|h| Some(h.to_string())).collect(),
				active: vec![false; hrefs.len()],
				..Self::default()
			}
		}

		pub fn with_sections(mut self, sections: &[(&str, f64)]) -> Self {
			self.sections = sections
				.iter()
				.map(|(id, top)| SectionBounds {
					id: id.to_string(),
					top: *top,
				})
				.collect();
			self
		}

		pub fn active_links(&self) -> Vec<usize> {
			self.active
				.iter()
				.enumerate()
				.filter(|(_, a)| **a)
				.map(|(i, _)| i)
				.collect()
		}
	}

	impl PageSurface for FakeSurface {
		fn nav_link_targets(&self) -> Vec<Option<String>> {
			self.links.clone()
		}

		fn sections(&self) -> Vec<SectionBounds> {
			self.sections.clone()
		}

		fn scroll_offset(&self) -> f64 {
			self.offset
		}

		fn set_active_link(&mut self, active: Option<usize>) {
			self.active_writes += 1;
			for (i, slot) in self.active.iter_mut().enumerate() {
				*slot = active == Some(i);
			}
		}

		fn set_dark_mode(&mut self, enabled: bool) {
			self.dark_mode = enabled;
		}

		fn set_toggle_label(&mut self, label: ThemeLabel) {
			self.label = Some(label);
		}
	}

	impl DiagramSurface for FakeSurface {
		fn set_visible(&mut self, target: ElementRef, visible: bool) {
			self.visible.insert(target, visible);
		}

		fn set_transform(&mut self, target: ElementRef, scale: f64) {
			self.transforms.push((target, scale));
		}
	}
}
