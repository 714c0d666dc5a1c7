use leptos::prelude::*;
use log::debug;

use super::types::{DiagramData, Edge, Node, NodeKind, Point, RelationshipKind};

/// Space added right of and below the outermost boxes.
pub const MARGIN: f64 = 50.0;
const LINE_HEIGHT: f64 = 16.0;
const PADDING: f64 = 8.0;
const HEADER_HEIGHT: f64 = 28.0;
const STEREOTYPE_HEIGHT: f64 = 14.0;
const ARROW_SIZE: f64 = 12.0;
const LABEL_OFFSET: f64 = 18.0;

/// Where the segment from the node's center toward `toward` leaves its box.
pub fn border_point(node: &Node, toward: Point) -> Point {
	let c = node.center();
	let (dx, dy) = (toward.x - c.x, toward.y - c.y);
	let (hw, hh) = (node.size.width / 2.0, node.size.height / 2.0);
	let tx = if dx == 0.0 { f64::INFINITY } else { hw / dx.abs() };
	let ty = if dy == 0.0 { f64::INFINITY } else { hh / dy.abs() };
	if !tx.min(ty).is_finite() {
		return c;
	}
	// Snap the side that is hit so it lands exactly on the border.
	if tx <= ty {
		Point {
			x: c.x + hw.copysign(dx),
			y: c.y + dy * tx,
		}
	} else {
		Point {
			x: c.x + dx * ty,
			y: c.y + hh.copysign(dy),
		}
	}
}

/// Visible part of an edge, from border to border. `None` when the boxes
/// share a center and there is nothing to draw.
pub fn edge_segment(source: &Node, target: &Node) -> Option<(Point, Point)> {
	let (sc, tc) = (source.center(), target.center());
	if (sc.x - tc.x).abs() < 0.001 && (sc.y - tc.y).abs() < 0.001 {
		return None;
	}
	Some((border_point(source, tc), border_point(target, sc)))
}

fn unit(from: Point, to: Point) -> (f64, f64) {
	let (dx, dy) = (to.x - from.x, to.y - from.y);
	let len = (dx * dx + dy * dy).sqrt().max(0.001);
	(dx / len, dy / len)
}

/// Arrowhead corners: tip, then the two barbs.
pub fn arrowhead(start: Point, tip: Point) -> [Point; 3] {
	let (ux, uy) = unit(start, tip);
	let back = Point {
		x: tip.x - ux * ARROW_SIZE,
		y: tip.y - uy * ARROW_SIZE,
	};
	let (px, py) = (-uy * ARROW_SIZE * 0.5, ux * ARROW_SIZE * 0.5);
	[
		tip,
		Point {
			x: back.x + px,
			y: back.y + py,
		},
		Point {
			x: back.x - px,
			y: back.y - py,
		},
	]
}

fn points_attr(points: &[Point]) -> String {
	points
		.iter()
		.map(|p| format!("{},{}", p.x, p.y))
		.collect::<Vec<_>>()
		.join(" ")
}

/// Cardinality label anchor near `end`, nudged off the line.
fn label_anchor(end: Point, other: Point) -> Point {
	let (ux, uy) = unit(end, other);
	Point {
		x: end.x + ux * LABEL_OFFSET - uy * 8.0,
		y: end.y + uy * LABEL_OFFSET + ux * 8.0,
	}
}

/// The whole diagram as an `.interactive-svg` element.
pub fn render(data: &'static DiagramData) -> impl IntoView {
	let extent = data.extent();
	let (w, h) = (extent.width + MARGIN, extent.height + MARGIN);

	let edges = data
		.edges
		.iter()
		.filter_map(|edge| match data.endpoints(edge) {
			Some((source, target)) => Some(draw_edge(edge, source, target)),
			None => {
				debug!("not drawing {}: unknown endpoint", edge.id);
				None
			}
		})
		.collect_view();
	let nodes = data.nodes.iter().map(draw_node).collect_view();

	view! {
		<svg
			class="interactive-svg"
			viewBox=format!("0 0 {} {}", w, h)
			width=w.to_string()
			height=h.to_string()
			style="transform-origin: 0 0;"
		>
			<g class="uml-edges">{edges}</g>
			<g class="uml-nodes">{nodes}</g>
		</svg>
	}
}

fn draw_edge(edge: &'static Edge, source: &'static Node, target: &'static Node) -> impl IntoView {
	let Some((start, end)) = edge_segment(source, target) else {
		return ().into_any();
	};

	let head = match edge.kind {
		RelationshipKind::Inheritance | RelationshipKind::Implementation => {
			view! { <polygon class="uml-arrow-hollow" points=points_attr(&arrowhead(start, end)) /> }
				.into_any()
		}
		RelationshipKind::Dependency => {
			let [tip, a, b] = arrowhead(start, end);
			view! { <polyline class="uml-arrow-open" points=points_attr(&[a, tip, b]) /> }
				.into_any()
		}
		RelationshipKind::Association => ().into_any(),
	};

	let source_label = edge.source_label.map(|text| {
		let p = label_anchor(start, end);
		view! { <text class="uml-cardinality" x=p.x.to_string() y=p.y.to_string()>{text}</text> }
	});
	let target_label = edge.target_label.map(|text| {
		let p = label_anchor(end, start);
		view! { <text class="uml-cardinality" x=p.x.to_string() y=p.y.to_string()>{text}</text> }
	});

	view! {
		<g class=edge.kind.marker_class() id=edge.id>
			<line
				class="uml-edge"
				x1=start.x.to_string()
				y1=start.y.to_string()
				x2=end.x.to_string()
				y2=end.y.to_string()
				stroke-dasharray=edge.kind.is_dashed().then_some("6 4")
			/>
			{head}
			{source_label}
			{target_label}
		</g>
	}
	.into_any()
}

fn draw_node(node: &'static Node) -> impl IntoView {
	let (x, y) = (node.position.x, node.position.y);
	let (width, height) = (node.size.width, node.size.height);
	let center_x = (x + width / 2.0).to_string();
	let is_interface = node.kind == NodeKind::Interface;

	let header = if is_interface {
		HEADER_HEIGHT + STEREOTYPE_HEIGHT
	} else {
		HEADER_HEIGHT
	};
	let stereotype = is_interface.then(|| {
		view! {
			<text class="uml-stereotype" x=center_x.clone() y=(y + 16.0).to_string() text-anchor="middle">
				"«interface»"
			</text>
		}
	});

	let divider = move |at: f64| {
		view! {
			<line
				class="uml-divider"
				x1=x.to_string()
				y1=at.to_string()
				x2=(x + width).to_string()
				y2=at.to_string()
			/>
		}
	};
	let rows = move |lines: &'static [&'static str], top: f64| {
		lines
			.iter()
			.enumerate()
			.map(|(i, line)| {
				let baseline = top + LINE_HEIGHT * (i as f64 + 1.0);
				view! {
					<text class="uml-member" x=(x + PADDING).to_string() y=baseline.to_string()>
						{*line}
					</text>
				}
			})
			.collect_view()
	};

	let attributes_top = y + header;
	let methods_top = if node.attributes.is_empty() {
		attributes_top
	} else {
		attributes_top + LINE_HEIGHT * node.attributes.len() as f64 + PADDING
	};
	let attributes = (!node.attributes.is_empty()).then(|| rows(node.attributes, attributes_top));
	let methods_divider = (!node.attributes.is_empty()).then(|| divider(methods_top));

	view! {
		<g class=format!("{} uml-node", node.category.marker_class()) id=node.id>
			<rect
				class="uml-box"
				x=x.to_string()
				y=y.to_string()
				width=width.to_string()
				height=height.to_string()
			/>
			{stereotype}
			<text
				class="uml-name"
				x=center_x
				y=(y + header - 10.0).to_string()
				text-anchor="middle"
			>
				{node.name}
			</text>
			{divider(attributes_top)}
			{attributes}
			{methods_divider}
			{rows(node.methods, methods_top)}
		</g>
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::components::uml_diagram::data::PANOTIFY;

	fn node(id: &str) -> &'static Node {
		PANOTIFY.node(id).unwrap()
	}

	#[test]
	fn border_point_hits_box_edge() {
		// Exam sits directly below Course.
		let (course, exam) = (node("course"), node("exam"));
		let (start, end) = edge_segment(course, exam).unwrap();
		assert_eq!(start, Point { x: 700.0, y: 280.0 });
		assert_eq!(end, Point { x: 700.0, y: 350.0 });
	}

	#[test]
	fn border_point_on_horizontal_edge() {
		// CourseService sits right of Course at the same height.
		let (course, service) = (node("course"), node("courseService"));
		let (start, end) = edge_segment(service, course).unwrap();
		assert_eq!(start, Point { x: 900.0, y: 190.0 });
		assert_eq!(end, Point { x: 800.0, y: 190.0 });
	}

	#[test]
	fn coincident_boxes_have_no_segment() {
		let user = node("user");
		assert_eq!(edge_segment(user, user), None);
		assert_eq!(border_point(user, user.center()), user.center());
	}

	#[test]
	fn arrowhead_is_symmetric_about_the_line() {
		let [tip, a, b] = arrowhead(Point { x: 0.0, y: 0.0 }, Point { x: 100.0, y: 0.0 });
		assert_eq!(tip, Point { x: 100.0, y: 0.0 });
		assert_eq!(a.x, b.x);
		assert_eq!(a.x, 100.0 - ARROW_SIZE);
		assert_eq!(a.y, -b.y);
	}

	#[test]
	fn points_are_space_separated_pairs() {
		let pts = [Point { x: 1.0, y: 2.0 }, Point { x: 3.5, y: 4.0 }];
		assert_eq!(points_attr(&pts), "1,2 3.5,4");
	}
}
