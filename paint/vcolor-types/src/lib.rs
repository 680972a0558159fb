//! Core types for per-corner vertex color painting.
//!
//! This crate provides the foundational types for discrete vertex color
//! workflows:
//!
//! - [`Rgba`] - Linear RGBA color with exact-equality identity semantics
//! - [`PolyMesh`] - A polygon mesh addressed per corner (face-loop)
//! - [`ColorLayer`] - A named, corner-parallel color attribute
//!
//! # Corners
//!
//! A **corner** is one (face, vertex) incidence. Corners are the unit of
//! color storage: two faces sharing a vertex hold independent colors at
//! that vertex, which is what makes hard color boundaries possible.
//! Corners are numbered globally in face order, and color/UV layers are
//! vectors parallel to that numbering.
//!
//! # Color identity
//!
//! Colors are matched by exact component equality (bit-level, no
//! tolerance). The sentinel [`Rgba::BLANK`] (opaque white) marks unpainted
//! corners and is never treated as a paintable identity by the palette
//! layer built on top of this crate.
//!
//! # Example
//!
//! ```
//! use vcolor_types::{Face, MeshVertex, PolyMesh, Rgba};
//!
//! let mut mesh = PolyMesh::new();
//! mesh.vertices.push(MeshVertex::from_coords(0.0, 0.0, 0.0));
//! mesh.vertices.push(MeshVertex::from_coords(1.0, 0.0, 0.0));
//! mesh.vertices.push(MeshVertex::from_coords(0.5, 1.0, 0.0));
//! mesh.faces.push(Face::new([0, 1, 2]));
//!
//! let red = Rgba::new(1.0, 0.0, 0.0, 1.0);
//! let layer = mesh.get_or_create_active_layer();
//! layer.set(0, red);
//! assert_eq!(layer.get(0), Some(red));
//! assert_eq!(layer.count_matching(Rgba::BLANK), 2);
//! ```

mod color;
mod layer;
mod mesh;

pub use color::Rgba;
pub use layer::{ColorLayer, DEFAULT_LAYER_NAME};
pub use mesh::{CornerRef, Face, MeshVertex, PolyMesh};

pub use nalgebra::{Point2, Point3};
