//! Interactive class diagram: data, rendering and zoom/filter controls.

mod component;
pub mod data;
mod render;
mod state;
mod types;

pub use component::UmlViewer;
pub use state::{DiagramController, ViewState};
pub use types::{Category, DiagramData, Edge, Node, NodeKind, Point, RelationshipKind, Size};
