//! Deduplicated, editable color palette synchronized with mesh data.
//!
//! The palette is an ordered index of every distinct non-blank color
//! present on a mesh's active color layer. It is rebuilt wholesale on
//! every refresh (a pure function of the layer, never a source of truth)
//! and edits flow the other way as global find-and-replace over exact
//! color identity:
//!
//! - [`Palette::refresh`] - rescan the mesh, dedup in first-seen order
//! - [`apply_entry_color`] - recolor every corner sharing an entry's color
//! - [`clear_entry_colors`] - reset an entry's corners to blank
//! - [`select_entry_vertices`] - additively select an entry's vertices
//! - [`matching_vertices`] - an entry's vertex membership set
//!
//! # Quick Start
//!
//! ```
//! use vcolor_palette::{LabelFormat, Palette};
//! use vcolor_types::{Face, MeshVertex, PolyMesh, Rgba};
//!
//! let mut mesh = PolyMesh::new();
//! mesh.vertices.push(MeshVertex::from_coords(0.0, 0.0, 0.0));
//! mesh.vertices.push(MeshVertex::from_coords(1.0, 0.0, 0.0));
//! mesh.vertices.push(MeshVertex::from_coords(0.5, 1.0, 0.0));
//! mesh.faces.push(Face::new([0, 1, 2]));
//!
//! let layer = mesh.get_or_create_active_layer();
//! layer.set(0, Rgba::new(1.0, 0.0, 0.0, 1.0));
//!
//! let mut palette = Palette::new();
//! palette.refresh(&mut mesh, LabelFormat::Rgb255);
//! assert_eq!(palette.len(), 1);
//! ```

mod entry;
mod palette;
mod recolor;

pub use entry::{format_label, LabelFormat, PaletteEntry};
pub use palette::Palette;
pub use recolor::{
    apply_entry_color, clear_entry_colors, matching_vertices, select_entry_vertices,
};
