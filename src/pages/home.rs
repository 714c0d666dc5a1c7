use leptos::prelude::*;

use crate::components::doc_page::{DocPage, NavItem, Section};
use crate::components::uml_diagram::data::PANOTIFY;
use crate::components::uml_diagram::{Category, DiagramData};

const NAV: &[NavItem] = &[
	NavItem {
		href: "#overview",
		label: "Overview",
	},
	NavItem {
		href: "#architecture",
		label: "Architecture",
	},
	NavItem {
		href: "#models",
		label: "Models",
	},
	NavItem {
		href: "#services",
		label: "Services",
	},
	NavItem {
		href: "#interface",
		label: "Interface",
	},
	NavItem {
		href: "/uml",
		label: "UML Diagram",
	},
];

/// Names of the diagram's classes in one category, in data order.
fn class_names(data: &DiagramData, category: Category) -> Vec<&'static str> {
	data.nodes
		.iter()
		.filter(|n| n.category == category)
		.map(|n| n.name)
		.collect()
}

fn class_list(category: Category) -> impl IntoView {
	let items = class_names(&PANOTIFY, category)
		.into_iter()
		.map(|name| view! { <li><code>{name}</code></li> })
		.collect_view();
	view! { <ul class="class-list">{items}</ul> }
}

/// Documentation overview of the PaNotify application.
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<DocPage nav=NAV>
			<Section id="overview" title="Overview">
				<p>
					"PaNotify is a course and examination platform. Instructors publish courses and "
					"timed exams; students enrol, sit exams and follow their results."
				</p>
			</Section>
			<Section id="architecture" title="Architecture">
				<p>
					"The application is layered: model classes hold state, services own database "
					"access through a shared connection, and dashboards compose tabbed views on top."
				</p>
				<p>
					"See the "<a href="/uml">"interactive UML diagram"</a>
					" for how the classes relate."
				</p>
			</Section>
			<Section id="models" title="Models">
				<p>"Domain entities, with User specialised into Student and Instructor."</p>
				{class_list(Category::Model)}
			</Section>
			<Section id="services" title="Services">
				<p>"Each service wraps one area of persistence and business rules."</p>
				{class_list(Category::Service)}
			</Section>
			<Section id="interface" title="User Interface">
				<p>"Login leads to a student or instructor dashboard built from pluggable tabs."</p>
				{class_list(Category::Ui)}
			</Section>
		</DocPage>
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn services_listed_in_data_order() {
		assert_eq!(
			class_names(&PANOTIFY, Category::Service),
			vec![
				"ExamService",
				"CourseService",
				"UserService",
				"ReportService",
				"AuthenticationService",
			]
		);
	}

	#[test]
	fn fragment_links_name_sections() {
		let fragments: Vec<_> = NAV.iter().filter_map(|n| n.href.strip_prefix('#')).collect();
		assert_eq!(
			fragments,
			vec!["overview", "architecture", "models", "services", "interface"]
		);
	}
}
