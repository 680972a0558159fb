//! Host-facing vertex color operations.
//!
//! This crate ties the painting toolkit together: it owns the scene
//! model (objects, interaction modes, selection history), the color edit
//! engine, and the batch operations a host UI calls directly:
//!
//! - [`edit_color`] - fill/clear the selection under hard or smooth
//!   boundary interpolation
//! - [`apply_border_color`] - paint the inner or outer selection border
//! - [`generate_uv_colors`] - random color per UV island, whole-shell or
//!   border-only
//! - [`refresh_palette`] - rebuild palettes from mesh data
//! - [`set_palette_entry_color`] / [`delete_palette_entry`] - palette-
//!   driven global recolor and delete
//! - [`select_vertices_by_palette_entry`] - additive selection from a
//!   palette entry
//! - [`to_vertex_group`] - convert a palette entry to a vertex group
//! - [`active_vertex_color`] - read the color under the active vertex
//!
//! Operations are synchronous and sequential over the batch. Recoverable
//! per-object conditions (missing UVs, stale palette ids) are absorbed
//! into the returned [`OpReport`]; only user-input errors on color reads
//! surface as [`OpError`]. Interaction modes are restored on every exit
//! path.
//!
//! # Quick Start
//!
//! ```
//! use vcolor_ops::{
//!     edit_color, refresh_palette, ColorSource, EditKind, PaintSettings, SceneObject,
//! };
//! use vcolor_types::{Face, MeshVertex, PolyMesh, Rgba};
//!
//! let mut mesh = PolyMesh::new();
//! mesh.vertices.push(MeshVertex::from_coords(0.0, 0.0, 0.0));
//! mesh.vertices.push(MeshVertex::from_coords(1.0, 0.0, 0.0));
//! mesh.vertices.push(MeshVertex::from_coords(0.5, 1.0, 0.0));
//! mesh.faces.push(Face::new([0, 1, 2]));
//! mesh.select_all(true);
//!
//! let mut objects = vec![SceneObject::mesh("triangle", mesh)];
//! let settings = PaintSettings {
//!     active_color: Rgba::new(1.0, 0.0, 0.0, 1.0),
//!     ..PaintSettings::default()
//! };
//!
//! let report = edit_color(&mut objects, EditKind::Apply, ColorSource::Active, &settings);
//! assert_eq!(report.affected, 3);
//!
//! let palette = &objects[0].mesh_object().unwrap().palette;
//! assert_eq!(palette.len(), 1);
//! ```

mod edit;
mod error;
mod ops;
mod scene;
mod settings;

pub use edit::{edit_mesh_colors, fill_corners, EditKind, Interpolation};
pub use error::{OpError, OpResult};
pub use ops::{
    active_vertex_color, apply_border_color, delete_palette_entry, edit_color,
    generate_uv_colors, refresh_palette, select_vertices_by_palette_entry,
    set_palette_entry_color, to_vertex_group, BorderColorSource, GenerationMode, OpReport,
};
pub use scene::{
    with_object_mode, ActiveElement, InteractionMode, MeshObject, ObjectData, SceneObject,
    SelectMode, VertexGroup,
};
pub use settings::{ColorSource, PaintSettings};

pub use vcolor_border::BorderSide;
