use leptos::prelude::*;

use crate::components::doc_page::{DocPage, NavItem, Section};
use crate::components::uml_diagram::{RelationshipKind, UmlViewer};

const NAV: &[NavItem] = &[
	NavItem {
		href: "/",
		label: "Home",
	},
	NavItem {
		href: "#diagram",
		label: "Diagram",
	},
	NavItem {
		href: "#legend",
		label: "Legend",
	},
];

fn legend_text(kind: RelationshipKind) -> &'static str {
	match kind {
		RelationshipKind::Inheritance => "Solid line, hollow triangle toward the parent class.",
		RelationshipKind::Association => "Solid line with multiplicities at each end.",
		RelationshipKind::Dependency => "Dashed line, open arrow toward the class depended on.",
		RelationshipKind::Implementation => "Dashed line, hollow triangle toward the interface.",
	}
}

/// Interactive class diagram page.
#[component]
pub fn Uml() -> impl IntoView {
	let legend = RelationshipKind::ALL
		.iter()
		.map(|&kind| {
			view! {
				<li class=kind.legend_class()>
					<strong>{kind.label()}</strong>
					" "
					{legend_text(kind)}
				</li>
			}
		})
		.collect_view();

	view! {
		<DocPage title="PaNotify UML" nav=NAV>
			<Section id="diagram" title="Class Diagram">
				<UmlViewer />
			</Section>
			<Section id="legend" title="Legend">
				<ul class="legend">{legend}</ul>
			</Section>
		</DocPage>
	}
}
