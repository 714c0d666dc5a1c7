//! Page building blocks.

pub mod doc_page;
pub mod uml_diagram;
