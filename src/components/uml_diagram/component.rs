use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use super::data::PANOTIFY;
use super::render;
use super::state::DiagramController;
use super::types::{Category, DiagramData, RelationshipKind};
use crate::dom::DomSurface;

type SharedController = Rc<RefCell<Option<DiagramController<DomSurface>>>>;

fn with_controller(controller: &SharedController, f: impl FnOnce(&mut DiagramController<DomSurface>)) {
	if let Some(ref mut c) = *controller.borrow_mut() {
		f(c);
	}
}

/// Zoomable, filterable class diagram with its control panel.
#[component]
pub fn UmlViewer(
	/// Diagram to draw. Defaults to the PaNotify class diagram.
	#[prop(default = &PANOTIFY)]
	data: &'static DiagramData,
) -> impl IntoView {
	let controller: SharedController = Rc::new(RefCell::new(None));

	// Controls address the diagram by class, so attach once it is mounted.
	let controller_init = controller.clone();
	Effect::new(move |_| {
		if controller_init.borrow().is_none() {
			*controller_init.borrow_mut() = DomSurface::new().map(DiagramController::new);
		}
	});

	let (c_in, c_out, c_reset) = (controller.clone(), controller.clone(), controller.clone());

	let category_boxes = Category::ALL
		.iter()
		.map(|&category| {
			let c = controller.clone();
			view! {
				<label class="filter-option">
					<input
						type="checkbox"
						id=category.checkbox_id()
						checked=true
						on:change=move |ev| {
							let visible = event_target_checked(&ev);
							with_controller(&c, |c| c.set_category_visible(category, visible));
						}
					/>
					{category.label()}
				</label>
			}
		})
		.collect_view();

	let relationship_boxes = RelationshipKind::FILTERABLE
		.iter()
		.map(|&kind| {
			let c = controller.clone();
			view! {
				<label class="filter-option">
					<input
						type="checkbox"
						id=kind.checkbox_id()
						checked=true
						on:change=move |ev| {
							let visible = event_target_checked(&ev);
							with_controller(&c, |c| c.set_relationship_visible(kind, visible));
						}
					/>
					{kind.label()}
				</label>
			}
		})
		.collect_view();

	view! {
		<div class="diagram-controls">
			<div class="zoom-controls">
				<button
					id="zoom-in"
					title="Zoom in"
					on:click=move |_| with_controller(&c_in, |c| c.zoom_in())
				>
					<i class="fas fa-search-plus"></i>
				</button>
				<button
					id="zoom-out"
					title="Zoom out"
					on:click=move |_| with_controller(&c_out, |c| c.zoom_out())
				>
					<i class="fas fa-search-minus"></i>
				</button>
				<button
					id="reset-zoom"
					title="Reset zoom"
					on:click=move |_| with_controller(&c_reset, |c| c.reset_zoom())
				>
					<i class="fas fa-undo"></i>
				</button>
			</div>
			<fieldset class="class-filters">
				<legend>"Classes"</legend>
				{category_boxes}
			</fieldset>
			<fieldset class="relationship-filters">
				<legend>"Relationships"</legend>
				{relationship_boxes}
			</fieldset>
		</div>
		<div class="diagram-container">{render::render(data)}</div>
	}
}
