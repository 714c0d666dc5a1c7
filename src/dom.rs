//! Browser implementation of the surface traits over `web-sys`.
//!
//! Lookups run against the live document on every call. A missing element
//! is skipped without noise.

use std::cell::{Cell, RefCell};

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CssStyleDeclaration, Document, Element, HtmlElement, SvgElement, Window};

use crate::surface::{DiagramSurface, ElementRef, PageSurface, SectionBounds, ThemeLabel};

/// Navigation links tracked by the page controller. The theme toggle is a
/// button and stays out of this set.
pub const NAV_LINK_SELECTOR: &str = "a.nav-link";
/// Content sections followed on scroll.
pub const SECTION_SELECTOR: &str = ".section";
/// Id of the theme toggle button.
pub const THEME_TOGGLE_ID: &str = "theme-toggle";
/// Class marking the highlighted navigation link.
pub const ACTIVE_CLASS: &str = "active";
/// Body class applied in dark mode.
pub const DARK_MODE_CLASS: &str = "dark-mode-enabled";

/// The live browser document.
pub struct DomSurface {
	window: Window,
	document: Document,
}

impl DomSurface {
	/// `None` outside a browser window.
	pub fn new() -> Option<Self> {
		let window = web_sys::window()?;
		let document = window.document()?;
		Some(Self { window, document })
	}

	fn query_all(&self, selector: &str) -> Vec<Element> {
		let Ok(list) = self.document.query_selector_all(selector) else {
			return Vec::new();
		};
		(0..list.length())
			.filter_map(|i| list.item(i))
			.filter_map(|node| node.dyn_into::<Element>().ok())
			.collect()
	}

	fn query(&self, selector: &str) -> Option<Element> {
		self.document.query_selector(selector).ok().flatten()
	}
}

/// Inline style of an HTML or SVG element.
fn style_of(el: &Element) -> Option<CssStyleDeclaration> {
	if let Some(html) = el.dyn_ref::<HtmlElement>() {
		Some(html.style())
	} else {
		el.dyn_ref::<SvgElement>().map(|svg| svg.style())
	}
}

impl PageSurface for DomSurface {
	fn nav_link_targets(&self) -> Vec<Option<String>> {
		self.query_all(NAV_LINK_SELECTOR)
			.iter()
			.map(|el| el.get_attribute("href"))
			.collect()
	}

	fn sections(&self) -> Vec<SectionBounds> {
		self.query_all(SECTION_SELECTOR)
			.iter()
			.filter_map(|el| {
				let html = el.dyn_ref::<HtmlElement>()?;
				Some(SectionBounds {
					id: el.id(),
					top: html.offset_top() as f64,
				})
			})
			.collect()
	}

	fn scroll_offset(&self) -> f64 {
		self.window.scroll_y().unwrap_or(0.0)
	}

	fn set_active_link(&mut self, active: Option<usize>) {
		for (i, link) in self.query_all(NAV_LINK_SELECTOR).iter().enumerate() {
			let classes = link.class_list();
			let _ = if active == Some(i) {
				classes.add_1(ACTIVE_CLASS)
			} else {
				classes.remove_1(ACTIVE_CLASS)
			};
		}
	}

	fn set_dark_mode(&mut self, enabled: bool) {
		let Some(body) = self.document.body() else {
			return;
		};
		let _ = body.class_list().toggle_with_force(DARK_MODE_CLASS, enabled);
	}

	fn set_toggle_label(&mut self, label: ThemeLabel) {
		if let Some(toggle) = self.document.get_element_by_id(THEME_TOGGLE_ID) {
			toggle.set_inner_html(&label.to_html());
		}
	}
}

impl DiagramSurface for DomSurface {
	fn set_visible(&mut self, target: ElementRef, visible: bool) {
		let display = if visible { "block" } else { "none" };
		for el in self.query_all(&target.selector()) {
			if let Some(style) = style_of(&el) {
				let _ = style.set_property("display", display);
			}
		}
	}

	fn set_transform(&mut self, target: ElementRef, scale: f64) {
		let Some(style) = self.query(&target.selector()).as_ref().and_then(style_of) else {
			return;
		};
		let _ = style.set_property("transform", &format!("scale({})", scale));
	}
}

/// Identifies the scroll handler of one mounted page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListenerToken(u64);

impl ListenerToken {
	/// A token no other page holds.
	pub fn fresh() -> Self {
		NEXT_TOKEN.with(|next| {
			let id = next.get();
			next.set(id + 1);
			ListenerToken(id)
		})
	}
}

struct ScrollListener {
	token: ListenerToken,
	callback: Closure<dyn FnMut()>,
}

thread_local! {
	static SCROLL_LISTENER: RefCell<Option<ScrollListener>> = const { RefCell::new(None) };
	static NEXT_TOKEN: Cell<u64> = const { Cell::new(0) };
}

fn detach(window: &Window, listener: ScrollListener) {
	let _ = window
		.remove_event_listener_with_callback("scroll", listener.callback.as_ref().unchecked_ref());
}

/// Install `cb` as the window scroll handler under `token`, detaching the
/// previous one.
///
/// Each mounted page replaces the handler of the page before it.
pub fn replace_scroll_listener(token: ListenerToken, cb: Closure<dyn FnMut()>) {
	let Some(window) = web_sys::window() else {
		return;
	};
	SCROLL_LISTENER.with(|slot| {
		let mut slot = slot.borrow_mut();
		if let Some(old) = slot.take() {
			detach(&window, old);
		}
		let _ = window.add_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref());
		*slot = Some(ScrollListener {
			token,
			callback: cb,
		});
	});
}

/// Detach the scroll handler installed under `token`. A handler that has
/// since been replaced by another page is left alone.
pub fn remove_scroll_listener(token: ListenerToken) {
	let Some(window) = web_sys::window() else {
		return;
	};
	SCROLL_LISTENER.with(|slot| {
		if let Some(old) = slot.borrow_mut().take_if(|l| l.token == token) {
			detach(&window, old);
		}
	});
}

/// Whether a page currently owns the window scroll handler.
pub fn has_scroll_listener() -> bool {
	SCROLL_LISTENER.with(|slot| slot.borrow().is_some())
}
