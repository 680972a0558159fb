//! Host-facing operations.
//!
//! Each operation runs synchronously over a batch of scene objects,
//! skipping non-mesh objects silently, absorbing recoverable conditions
//! into an [`OpReport`], and restoring interaction modes unconditionally.

use hashbrown::HashSet;
use rand::Rng;
use tracing::{debug, info, warn};

use vcolor_border::{border_corners, selection_border, BorderSide, EdgeTopology};
use vcolor_islands::{partition_islands, IslandError};
use vcolor_palette::{
    apply_entry_color, clear_entry_colors, matching_vertices, select_entry_vertices,
};
use vcolor_types::Rgba;

use crate::edit::{edit_mesh_colors, fill_corners, EditKind};
use crate::error::{OpError, OpResult};
use crate::scene::{
    with_object_mode, ActiveElement, InteractionMode, SceneObject, SelectMode, VertexGroup,
};
use crate::settings::{ColorSource, PaintSettings};

/// How island generation picks colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    /// One random color per island, written to the whole island.
    PerUvShell,
    /// One color per island, written to the island's border corners only.
    PerUvBorder,
}

/// Color choice for [`GenerationMode::PerUvBorder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderColorSource {
    /// A fresh random color per island.
    Random,
    /// The host's active color for every island.
    Active,
}

/// Outcome of a batch operation.
///
/// Recoverable per-object conditions land here rather than aborting the
/// batch; `messages` is what the host shows the user.
#[derive(Debug, Clone, Default)]
pub struct OpReport {
    /// Total corners written (or vertices selected) across the batch.
    pub affected: usize,
    /// Names of objects skipped as unsupported (e.g. missing UVs).
    pub skipped_objects: Vec<String>,
    /// User-facing messages accumulated during the batch.
    pub messages: Vec<String>,
}

impl OpReport {
    fn skip(&mut self, name: &str) {
        self.skipped_objects.push(name.to_string());
    }
}

fn refresh_object(object: &mut SceneObject, settings: &PaintSettings) {
    if let Some(mesh_object) = object.mesh_object_mut() {
        mesh_object
            .palette
            .refresh(&mut mesh_object.mesh, settings.label_format);
    }
}

/// Fill the selection of every mesh object in the batch.
///
/// The color request is resolved once against `settings`; the edit kind
/// and the interpolation policy in `settings` decide which corners are
/// written (see [`EditKind`] and [`crate::Interpolation`]). The color
/// layer is created lazily, mutation happens in object mode with the
/// prior mode restored afterward, and a palette refresh follows unless
/// `settings.auto_refresh` is off.
pub fn edit_color(
    objects: &mut [SceneObject],
    kind: EditKind,
    source: ColorSource,
    settings: &PaintSettings,
) -> OpReport {
    let color = source.resolve(settings);
    let mut report = OpReport::default();

    for object in objects.iter_mut() {
        let written = with_object_mode(object, InteractionMode::Object, |object| {
            let Some(mesh_object) = object.mesh_object_mut() else {
                return 0;
            };
            edit_mesh_colors(&mut mesh_object.mesh, kind, color, settings.interpolation)
        });
        debug!(object = %object.name, written, ?kind, "edit_color");
        report.affected += written;

        if settings.auto_refresh {
            refresh_object(object, settings);
        }
    }

    report
}

/// Fill the selection border of every mesh object in the batch.
///
/// Writes the resolved color to exactly the inner or outer border corner
/// set of the current selection; no other corner is touched.
pub fn apply_border_color(
    objects: &mut [SceneObject],
    side: BorderSide,
    source: ColorSource,
    settings: &PaintSettings,
) -> OpReport {
    let color = source.resolve(settings);
    let mut report = OpReport::default();

    for object in objects.iter_mut() {
        let written = with_object_mode(object, InteractionMode::Object, |object| {
            let Some(mesh_object) = object.mesh_object_mut() else {
                return 0;
            };
            let corners = selection_border(&mesh_object.mesh, side);
            fill_corners(&mut mesh_object.mesh, &corners, color)
        });
        debug!(object = %object.name, written, ?side, "apply_border_color");
        report.affected += written;

        if settings.auto_refresh {
            refresh_object(object, settings);
        }
    }

    report
}

/// Generate per-island colors on every mesh object in the batch.
///
/// Meshes without UV coordinates are skipped and reported by name; the
/// rest of the batch proceeds. `rng` drives the random island colors so
/// callers control determinism.
pub fn generate_uv_colors(
    objects: &mut [SceneObject],
    mode: GenerationMode,
    border_source: BorderColorSource,
    settings: &PaintSettings,
    rng: &mut impl Rng,
) -> OpReport {
    let mut report = OpReport::default();

    for object in objects.iter_mut() {
        let name = object.name.clone();
        let outcome: Result<usize, IslandError> =
            with_object_mode(object, InteractionMode::Object, |object| {
            let Some(mesh_object) = object.mesh_object_mut() else {
                return Ok(0);
            };
            let islands = partition_islands(&mesh_object.mesh)?;
            debug!(object = %name, islands = islands.len(), "partitioned UV islands");

            let mut written = 0;
            for island in &islands {
                let random_color =
                    Rgba::new(rng.gen::<f32>(), rng.gen::<f32>(), rng.gen::<f32>(), 1.0);

                match mode {
                    GenerationMode::PerUvShell => {
                        let corners: HashSet<usize> = island
                            .faces()
                            .flat_map(|f| {
                                mesh_object.mesh.face_corner_range(f).unwrap_or(0..0)
                            })
                            .collect();
                        written += fill_corners(&mut mesh_object.mesh, &corners, random_color);
                    }
                    GenerationMode::PerUvBorder => {
                        let color = match border_source {
                            BorderColorSource::Random => random_color,
                            BorderColorSource::Active => settings.active_color,
                        };
                        let topology = EdgeTopology::from_mesh(&mesh_object.mesh);
                        let corners = border_corners(
                            &mesh_object.mesh,
                            &topology,
                            |f| island.contains(f),
                            BorderSide::Inner,
                        );
                        written += fill_corners(&mut mesh_object.mesh, &corners, color);
                    }
                }
            }
            Ok(written)
        });

        match outcome {
            Ok(written) => {
                report.affected += written;
                if settings.auto_refresh {
                    refresh_object(object, settings);
                }
            }
            Err(err) => {
                warn!(object = %object.name, %err, "skipping object");
                report.skip(&object.name);
            }
        }
    }

    if !report.skipped_objects.is_empty() {
        report
            .messages
            .push(format!("UVs not found for: {:?}", report.skipped_objects));
    }

    report
}

/// Rebuild the palette of every mesh object in the batch from its active
/// color layer.
pub fn refresh_palette(objects: &mut [SceneObject], settings: &PaintSettings) -> OpReport {
    for object in objects.iter_mut() {
        refresh_object(object, settings);
        if let Some(mesh_object) = object.mesh_object() {
            debug!(object = %object.name, entries = mesh_object.palette.len(), "refreshed palette");
        }
    }
    OpReport::default()
}

/// Recolor every corner sharing a palette entry's saved color.
///
/// A stale entry id completes with zero corners affected.
pub fn set_palette_entry_color(
    object: &mut SceneObject,
    entry_id: usize,
    new_color: Rgba,
    settings: &PaintSettings,
) -> OpReport {
    let mut report = OpReport::default();
    let Some(mesh_object) = object.mesh_object_mut() else {
        return report;
    };

    report.affected = apply_entry_color(
        &mut mesh_object.mesh,
        &mut mesh_object.palette,
        entry_id,
        new_color,
        settings.label_format,
    );
    info!(object = %object.name, entry_id, affected = report.affected, "set palette color");
    report
}

/// Clear a palette entry's corners to blank and refresh the palette so
/// the entry disappears and ids compact.
pub fn delete_palette_entry(
    object: &mut SceneObject,
    entry_id: usize,
    settings: &PaintSettings,
) -> OpReport {
    let mut report = OpReport::default();
    let Some(mesh_object) = object.mesh_object_mut() else {
        return report;
    };

    report.affected = clear_entry_colors(
        &mut mesh_object.mesh,
        &mesh_object.palette,
        entry_id,
    );
    refresh_object(object, settings);
    report
}

/// Additively select the vertices carrying a palette entry's color.
///
/// Switches the object to vertex select mode; never clears pre-existing
/// selection.
pub fn select_vertices_by_palette_entry(object: &mut SceneObject, entry_id: usize) -> OpReport {
    let mut report = OpReport::default();

    with_object_mode(object, InteractionMode::Object, |object| {
        let Some(mesh_object) = object.mesh_object_mut() else {
            return;
        };
        mesh_object.select_mode = SelectMode::Vertex;
        report.affected =
            select_entry_vertices(&mut mesh_object.mesh, &mesh_object.palette, entry_id);
    });
    report
}

/// Convert a palette entry into a vertex group.
///
/// Collects the deduplicated vertices of every corner holding the entry's
/// color, registers the group on the object (implicit weight 1.0), and
/// returns it. A stale entry id yields `None` and changes nothing.
pub fn to_vertex_group(object: &mut SceneObject, entry_id: usize) -> Option<VertexGroup> {
    with_object_mode(object, InteractionMode::Object, |object| {
        let mesh_object = object.mesh_object_mut()?;
        let entry = mesh_object.palette.entry(entry_id)?;

        let group = VertexGroup {
            name: entry.label.clone(),
            vertices: matching_vertices(&mesh_object.mesh, entry.color),
        };
        mesh_object.vertex_groups.push(group.clone());
        Some(group)
    })
}

/// Read the color under the active vertex.
///
/// The most recent select-history element must be a vertex; otherwise the
/// read is cancelled without mutation. A mesh without a color layer reads
/// as [`Rgba::BLANK`]. When several corners of the vertex disagree, the
/// last one in mesh order wins.
///
/// # Errors
///
/// [`OpError::NoActiveVertex`] when the history is empty,
/// [`OpError::AmbiguousActiveVertex`] when the newest element is not a
/// vertex.
pub fn active_vertex_color(object: &SceneObject) -> OpResult<Rgba> {
    let Some(mesh_object) = object.mesh_object() else {
        return Err(OpError::NoActiveVertex);
    };

    let Some(active) = mesh_object.select_history.last() else {
        return Err(OpError::NoActiveVertex);
    };
    let ActiveElement::Vertex(vertex) = *active else {
        return Err(OpError::AmbiguousActiveVertex);
    };

    let Some(layer) = mesh_object.mesh.active_color_layer() else {
        return Ok(Rgba::BLANK);
    };

    let mut color = Rgba::BLANK;
    for c in mesh_object.mesh.corners() {
        if c.vertex == vertex && mesh_object.mesh.vertices[vertex as usize].selected {
            if let Some(found) = layer.get(c.corner) {
                color = found;
            }
        }
    }
    Ok(color)
}
