//! Palette-driven mesh edits: recolor, delete, match.
//!
//! These are global find-and-replace operations over the active color
//! layer, keyed by exact color identity. A stale or out-of-range entry id
//! is a no-op match failure: the functions complete and report zero
//! affected corners.

use vcolor_types::{PolyMesh, Rgba};

use crate::entry::{format_label, LabelFormat};
use crate::palette::Palette;

/// Recolor every corner matching an entry's `saved_color`.
///
/// This is a global find-and-replace across the whole mesh: editing one
/// palette swatch recolors every corner that shared the old color, not
/// just a local region. The entry's `color` and label are updated;
/// `saved_color` is left for the next refresh, which the caller triggers
/// separately (a collision with another entry's color silently merges the
/// two groups there).
///
/// Returns the number of corners rewritten; zero when the entry id is
/// stale or the mesh has no active layer.
pub fn apply_entry_color(
    mesh: &mut PolyMesh,
    palette: &mut Palette,
    entry_id: usize,
    new_color: Rgba,
    format: LabelFormat,
) -> usize {
    let Some(entry) = palette.entry_mut(entry_id) else {
        return 0;
    };
    let target = entry.saved_color;

    let Some(layer) = mesh.active_color_layer_mut() else {
        return 0;
    };

    let mut affected = 0;
    for corner in 0..layer.len() {
        if layer.get(corner) == Some(target) {
            layer.set(corner, new_color);
            affected += 1;
        }
    }

    entry.color = new_color;
    entry.label = format_label(new_color, format);
    affected
}

/// Reset every corner matching an entry's current color to [`Rgba::BLANK`].
///
/// Returns the number of corners cleared. The caller is expected to
/// refresh the palette afterward so the entry disappears and ids compact.
pub fn clear_entry_colors(mesh: &mut PolyMesh, palette: &Palette, entry_id: usize) -> usize {
    let Some(entry) = palette.entry(entry_id) else {
        return 0;
    };
    let target = entry.color;

    let Some(layer) = mesh.active_color_layer_mut() else {
        return 0;
    };

    let mut affected = 0;
    for corner in 0..layer.len() {
        if layer.get(corner) == Some(target) {
            layer.set(corner, Rgba::BLANK);
            affected += 1;
        }
    }
    affected
}

/// Vertices of every corner holding an exact color, deduplicated, in
/// first-seen mesh order.
#[must_use]
pub fn matching_vertices(mesh: &PolyMesh, color: Rgba) -> Vec<u32> {
    let Some(layer) = mesh.active_color_layer() else {
        return Vec::new();
    };

    let mut vertices = Vec::new();
    for c in mesh.corners() {
        if layer.get(c.corner) == Some(color) && !vertices.contains(&c.vertex) {
            vertices.push(c.vertex);
        }
    }
    vertices
}

/// Additively select every vertex whose corner holds an entry's color.
///
/// Pre-existing selection is never cleared. Returns the number of
/// vertices newly or redundantly marked; zero for a stale entry id.
pub fn select_entry_vertices(mesh: &mut PolyMesh, palette: &Palette, entry_id: usize) -> usize {
    let Some(entry) = palette.entry(entry_id) else {
        return 0;
    };
    let vertices = matching_vertices(mesh, entry.color);
    for &v in &vertices {
        if let Some(vertex) = mesh.vertices.get_mut(v as usize) {
            vertex.selected = true;
        }
    }
    vertices.len()
}
