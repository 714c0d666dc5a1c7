use std::cell::RefCell;
use std::rc::Rc;

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use log::info;
use wasm_bindgen::prelude::*;

use super::state::PageController;
use crate::dom::{
	DomSurface, ListenerToken, THEME_TOGGLE_ID, remove_scroll_listener, replace_scroll_listener,
};
use crate::prefs::LocalStore;

type SharedController = Rc<RefCell<Option<PageController<DomSurface, LocalStore>>>>;

/// A navigation entry: a `#fragment` in this page or a path to another.
#[derive(Clone, Copy, Debug)]
pub struct NavItem {
	/// Link target.
	pub href: &'static str,
	/// Link text.
	pub label: &'static str,
}

/// Page shell with the navigation bar, theme toggle and scroll tracking.
#[component]
pub fn DocPage(
	/// Brand text at the left of the navigation bar.
	#[prop(default = "PaNotify")]
	title: &'static str,
	/// Navigation entries, in display order.
	nav: &'static [NavItem],
	/// Page content, normally a run of [`Section`]s.
	children: Children,
) -> impl IntoView {
	let controller: SharedController = Rc::new(RefCell::new(None));
	let scroll_token = ListenerToken::fresh();
	on_cleanup(move || remove_scroll_listener(scroll_token));

	let controller_init = controller.clone();
	Effect::new(move |_| {
		if controller_init.borrow().is_some() {
			return;
		}
		let Some(surface) = DomSurface::new() else {
			return;
		};
		*controller_init.borrow_mut() = Some(PageController::new(surface, LocalStore::open()));
		info!("page controller attached: {}", title);

		let state_scroll = controller_init.clone();
		replace_scroll_listener(scroll_token, Closure::new(move || {
			if let Some(ref mut c) = *state_scroll.borrow_mut() {
				c.on_scroll();
			}
		}));
	});

	let links = nav
		.iter()
		.enumerate()
		.map(|(i, item)| {
			let state_click = controller.clone();
			view! {
				<li>
					<a
						class="nav-link"
						href=item.href
						on:click=move |_| {
							if let Some(ref mut c) = *state_click.borrow_mut() {
								c.on_link_activated(i);
							}
						}
					>
						{item.label}
					</a>
				</li>
			}
		})
		.collect_view();

	let state_toggle = controller.clone();
	let on_toggle = move |_: MouseEvent| {
		if let Some(ref mut c) = *state_toggle.borrow_mut() {
			c.toggle_theme();
		}
	};

	view! {
		<nav class="navbar">
			<div class="nav-container">
				<span class="nav-brand">{title}</span>
				<ul class="nav-menu">{links}</ul>
				<button
					id=THEME_TOGGLE_ID
					class="nav-link"
					style="margin-left: auto;"
					on:click=on_toggle
				>
					<i class="fas fa-moon"></i>
					" Dark Mode"
				</button>
			</div>
		</nav>
		<main class="content">{children()}</main>
	}
}

/// A titled content block the navigation can track.
#[component]
pub fn Section(
	/// Fragment the navigation links to.
	id: &'static str,
	/// Heading text.
	title: &'static str,
	/// Section body.
	children: Children,
) -> impl IntoView {
	view! {
		<section class="section" id=id>
			<h2>{title}</h2>
			{children()}
		</section>
	}
}
