//! Border detection for per-corner color painting.
//!
//! This crate answers one question: which corners sit on the boundary of
//! a face set? The face set is either the host's face selection or a UV
//! island, and the answer drives boundary-limited fills.
//!
//! # Overview
//!
//! - [`EdgeTopology`] - undirected edge to adjacent-face incidence
//! - [`selection_border`] - border corners of the current face selection
//! - [`border_corners`] - border corners of an arbitrary membership set
//! - [`BorderSide`] - inner (member side) vs outer (non-member side)
//!
//! # Quick Start
//!
//! ```
//! use vcolor_border::{selection_border, BorderSide};
//! use vcolor_types::{Face, MeshVertex, PolyMesh};
//!
//! let mut mesh = PolyMesh::new();
//! for i in 0..4 {
//!     mesh.vertices.push(MeshVertex::from_coords(f64::from(i), 0.0, 0.0));
//! }
//! mesh.faces.push(Face::new([0, 1, 2]));
//! mesh.faces.push(Face::new([1, 3, 2]));
//! mesh.faces[0].selected = true;
//! for v in [0, 1, 2] {
//!     mesh.vertices[v].selected = true;
//! }
//!
//! let inner = selection_border(&mesh, BorderSide::Inner);
//! let outer = selection_border(&mesh, BorderSide::Outer);
//! assert_eq!(inner.len(), 3);
//! assert_eq!(outer.len(), 2);
//! ```

mod border;
mod edges;

pub use border::{border_corners, selection_border, BorderSide};
pub use edges::{Edge, EdgeTopology};
