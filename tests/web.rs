//! Browser checks for the DOM surface. Run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use leptos::prelude::*;
use panotify_docs::components::uml_diagram::{
	Category, DiagramController, RelationshipKind, UmlViewer,
};
use panotify_docs::dom::{
	DARK_MODE_CLASS, DomSurface, ListenerToken, has_scroll_listener, remove_scroll_listener,
	replace_scroll_listener,
};
use panotify_docs::surface::{DiagramSurface, ElementRef, PageSurface};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

fn fixture(html: &str) {
	let body = web_sys::window().unwrap().document().unwrap().body().unwrap();
	body.set_inner_html(html);
}

fn display_of(id: &str) -> String {
	let doc = web_sys::window().unwrap().document().unwrap();
	let el: HtmlElement = doc.get_element_by_id(id).unwrap().dyn_into().unwrap();
	el.style().get_property_value("display").unwrap()
}

#[wasm_bindgen_test]
fn hides_only_tagged_category() {
	fixture(
		r#"<div class="interactive-svg">
			<div id="a" class="service-class"></div>
			<div id="b" class="model-class"></div>
		</div>"#,
	);
	let mut controller = DiagramController::new(DomSurface::new().unwrap());
	controller.set_category_visible(Category::Service, false);
	assert_eq!(display_of("a"), "none");
	assert_eq!(display_of("b"), "");
}

#[wasm_bindgen_test]
fn zoom_sets_scale_transform() {
	fixture(r#"<div id="svg" class="interactive-svg"></div>"#);
	let mut surface = DomSurface::new().unwrap();
	surface.set_transform(ElementRef::Surface, 0.5);
	let doc = web_sys::window().unwrap().document().unwrap();
	let el: HtmlElement = doc.get_element_by_id("svg").unwrap().dyn_into().unwrap();
	assert_eq!(el.style().get_property_value("transform").unwrap(), "scale(0.5)");
}

#[wasm_bindgen_test]
fn missing_elements_are_skipped() {
	fixture("");
	let mut surface = DomSurface::new().unwrap();
	surface.set_transform(ElementRef::Surface, 2.0);
	surface.set_active_link(Some(3));
	surface.set_toggle_label(panotify_docs::prefs::Theme::Dark.toggle_label());
	assert!(surface.nav_link_targets().is_empty());
}

#[wasm_bindgen_test]
fn dark_mode_class_follows_flag() {
	fixture("");
	let mut surface = DomSurface::new().unwrap();
	let body = web_sys::window().unwrap().document().unwrap().body().unwrap();
	surface.set_dark_mode(true);
	assert!(body.class_list().contains(DARK_MODE_CLASS));
	surface.set_dark_mode(false);
	assert!(!body.class_list().contains(DARK_MODE_CLASS));
}

#[wasm_bindgen_test]
fn relationship_filter_leaves_legend_alone() {
	fixture(
		r#"<svg class="interactive-svg"><g id="edge" class="inheritance-relationship"></g></svg>
		<ul><li id="legend" class="legend-inheritance">Inheritance</li></ul>"#,
	);
	let mut controller = DiagramController::new(DomSurface::new().unwrap());
	controller.set_relationship_visible(RelationshipKind::Inheritance, false);
	assert_eq!(display_of("legend"), "");

	let doc = web_sys::window().unwrap().document().unwrap();
	let edge = doc.get_element_by_id("edge").unwrap();
	let edge: &web_sys::SvgElement = edge.dyn_ref().unwrap();
	assert_eq!(edge.style().get_property_value("display").unwrap(), "none");
}

#[wasm_bindgen_test]
fn viewer_draws_default_diagram() {
	fixture("");
	let body = web_sys::window().unwrap().document().unwrap().body().unwrap();
	leptos::mount::mount_to(body.clone(), || view! { <UmlViewer /> }).forget();

	let count = |selector: &str| body.query_selector_all(selector).unwrap().length();
	assert_eq!(count(".interactive-svg"), 1);
	assert_eq!(count(".model-class"), 8);
	assert_eq!(count(".inheritance-relationship"), 2);
	// The three implementation edges name nodes that do not exist.
	assert_eq!(count(".implementation-relationship"), 0);
}

#[wasm_bindgen_test]
fn unmounted_page_detaches_only_its_own_listener() {
	let (first, second) = (ListenerToken::fresh(), ListenerToken::fresh());
	replace_scroll_listener(first, Closure::new(|| {}));
	replace_scroll_listener(second, Closure::new(|| {}));

	remove_scroll_listener(first);
	assert!(has_scroll_listener());

	remove_scroll_listener(second);
	assert!(!has_scroll_listener());
}
