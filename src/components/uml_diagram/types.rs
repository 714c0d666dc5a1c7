use std::fmt;

/// Functional grouping of a diagram node, used for visibility filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
	/// Domain entities.
	Model,
	/// Persistence and business rules.
	Service,
	/// Views and dashboards.
	Ui,
	/// Shared helpers.
	Util,
}

impl Category {
	/// Every category, in checkbox order.
	pub const ALL: [Category; 4] = [
		Category::Model,
		Category::Service,
		Category::Ui,
		Category::Util,
	];

	/// Lowercase name used in classes and ids.
	pub fn as_str(self) -> &'static str {
		match self {
			Category::Model => "model",
			Category::Service => "service",
			Category::Ui => "ui",
			Category::Util => "util",
		}
	}

	/// Class carried by every rendered element of this category.
	pub fn marker_class(self) -> String {
		format!("{}-class", self.as_str())
	}

	/// Id of the checkbox that filters this category.
	pub fn checkbox_id(self) -> String {
		format!("show-{}", self.as_str())
	}

	/// Caption next to the checkbox.
	pub fn label(self) -> &'static str {
		match self {
			Category::Model => "Model",
			Category::Service => "Service",
			Category::Ui => "UI",
			Category::Util => "Utility",
		}
	}
}

impl fmt::Display for Category {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Whether a node is a class or an interface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
	/// Concrete or abstract class.
	Class,
	/// Drawn with an `«interface»` stereotype.
	Interface,
}

/// Kind of a relationship between two nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RelationshipKind {
	/// Subclass to superclass.
	Inheritance,
	/// Structural link with multiplicities.
	Association,
	/// Uses-a.
	Dependency,
	/// Class to interface.
	Implementation,
}

impl RelationshipKind {
	/// Kinds that have a visibility checkbox. `Implementation` has none.
	pub const FILTERABLE: [RelationshipKind; 3] = [
		RelationshipKind::Inheritance,
		RelationshipKind::Association,
		RelationshipKind::Dependency,
	];

	/// Every kind, in legend order.
	pub const ALL: [RelationshipKind; 4] = [
		RelationshipKind::Inheritance,
		RelationshipKind::Association,
		RelationshipKind::Dependency,
		RelationshipKind::Implementation,
	];

	/// Lowercase name used in classes and ids.
	pub fn as_str(self) -> &'static str {
		match self {
			RelationshipKind::Inheritance => "inheritance",
			RelationshipKind::Association => "association",
			RelationshipKind::Dependency => "dependency",
			RelationshipKind::Implementation => "implementation",
		}
	}

	/// Class carried by every rendered edge of this kind.
	pub fn marker_class(self) -> String {
		format!("{}-relationship", self.as_str())
	}

	/// Class of this kind's legend entry. Distinct from [`Self::marker_class`]
	/// so the relationship filters never reach the legend.
	pub fn legend_class(self) -> String {
		format!("legend-{}", self.as_str())
	}

	/// Id of the checkbox that filters this kind.
	pub fn checkbox_id(self) -> String {
		format!("show-{}", self.as_str())
	}

	/// Whether a checkbox exists for this kind.
	pub fn is_filterable(self) -> bool {
		Self::FILTERABLE.contains(&self)
	}

	/// Caption in the filter panel and legend.
	pub fn label(self) -> &'static str {
		match self {
			RelationshipKind::Inheritance => "Inheritance",
			RelationshipKind::Association => "Association",
			RelationshipKind::Dependency => "Dependency",
			RelationshipKind::Implementation => "Implementation",
		}
	}

	/// Drawn with a dashed stroke.
	pub fn is_dashed(self) -> bool {
		matches!(
			self,
			RelationshipKind::Dependency | RelationshipKind::Implementation
		)
	}
}

impl fmt::Display for RelationshipKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Diagram coordinates, in SVG user units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
	/// Horizontal, growing right.
	pub x: f64,
	/// Vertical, growing down.
	pub y: f64,
}

/// Box dimensions, in SVG user units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
	/// Horizontal extent.
	pub width: f64,
	/// Vertical extent.
	pub height: f64,
}

/// A class or interface box in the diagram.
#[derive(Clone, Debug)]
pub struct Node {
	/// Unique identifier, also the element id.
	pub id: &'static str,
	/// Name shown in the header.
	pub name: &'static str,
	/// Class or interface.
	pub kind: NodeKind,
	/// Filter group.
	pub category: Category,
	/// Top-left corner.
	pub position: Point,
	/// Box size.
	pub size: Size,
	/// Attribute lines, in display order.
	pub attributes: &'static [&'static str],
	/// Method signatures, in display order.
	pub methods: &'static [&'static str],
}

impl Node {
	/// Middle of the box.
	pub fn center(&self) -> Point {
		Point {
			x: self.position.x + self.size.width / 2.0,
			y: self.position.y + self.size.height / 2.0,
		}
	}
}

/// A typed relationship between two nodes.
#[derive(Clone, Debug)]
pub struct Edge {
	/// Unique identifier, also the element id.
	pub id: &'static str,
	/// Relationship kind.
	pub kind: RelationshipKind,
	/// Id of the node the edge starts at.
	pub source: &'static str,
	/// Id of the node the edge points to.
	pub target: &'static str,
	/// Multiplicity at the source end.
	pub source_label: Option<&'static str>,
	/// Multiplicity at the target end.
	pub target_label: Option<&'static str>,
	/// Routing points. Always empty in the shipped data.
	pub points: &'static [Point],
}

/// Immutable description of a class diagram.
#[derive(Clone, Debug)]
pub struct DiagramData {
	/// Class and interface boxes.
	pub nodes: &'static [Node],
	/// Relationships between them.
	pub edges: &'static [Edge],
}

impl DiagramData {
	/// Node with the given id.
	pub fn node(&self, id: &str) -> Option<&Node> {
		self.nodes.iter().find(|n| n.id == id)
	}

	/// Resolve both ends of an edge, `None` if either id is unknown.
	pub fn endpoints(&self, edge: &Edge) -> Option<(&Node, &Node)> {
		Some((self.node(edge.source)?, self.node(edge.target)?))
	}

	/// Bottom-right extent of all node boxes.
	pub fn extent(&self) -> Size {
		self.nodes.iter().fold(
			Size {
				width: 0.0,
				height: 0.0,
			},
			|acc, n| Size {
				width: acc.width.max(n.position.x + n.size.width),
				height: acc.height.max(n.position.y + n.size.height),
			},
		)
	}
}
