//! The per-mesh color edit engine.
//!
//! All fills funnel through [`edit_mesh_colors`]: decisions are computed
//! against the mesh snapshot first, then committed to the layer as a
//! unit, so no partially applied state is observable.

use hashbrown::HashSet;
use vcolor_types::{PolyMesh, Rgba};

/// What an edit writes and where.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    /// Write the color at corners of selected vertices.
    Apply,
    /// Write the color at every visited corner.
    ApplyAll,
    /// Write [`Rgba::BLANK`] at corners of selected vertices.
    Clear,
    /// Write [`Rgba::BLANK`] at every visited corner.
    ClearAll,
}

/// Boundary interpolation policy: which faces an edit visits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interpolation {
    /// Every corner of every face is visited; the per-corner vertex
    /// selection check alone gates the write. Color blends across the
    /// selection boundary through shared vertices.
    #[default]
    Smooth,
    /// Only corners of selected faces are visited ([`EditKind::ClearAll`]
    /// visits every face). Color boundaries align exactly with
    /// face-selection boundaries.
    Hard,
}

/// The per-corner decision rule shared by all edit kinds.
fn corner_write(mesh: &PolyMesh, vertex: u32, kind: EditKind, color: Rgba) -> Option<Rgba> {
    let selected = mesh
        .vertices
        .get(vertex as usize)
        .is_some_and(|v| v.selected);
    match kind {
        EditKind::ApplyAll => Some(color),
        EditKind::Apply if selected => Some(color),
        EditKind::ClearAll => Some(Rgba::BLANK),
        EditKind::Clear if selected => Some(Rgba::BLANK),
        _ => None,
    }
}

/// Apply an edit across a mesh's active color layer.
///
/// The layer is created if absent. Returns the number of corners written.
///
/// # Example
///
/// ```
/// use vcolor_ops::{edit_mesh_colors, EditKind, Interpolation};
/// use vcolor_types::{Face, MeshVertex, PolyMesh, Rgba};
///
/// let mut mesh = PolyMesh::new();
/// mesh.vertices.push(MeshVertex::from_coords(0.0, 0.0, 0.0));
/// mesh.vertices.push(MeshVertex::from_coords(1.0, 0.0, 0.0));
/// mesh.vertices.push(MeshVertex::from_coords(0.5, 1.0, 0.0));
/// mesh.faces.push(Face::new([0, 1, 2]));
/// mesh.select_all(true);
///
/// let red = Rgba::new(1.0, 0.0, 0.0, 1.0);
/// let written = edit_mesh_colors(&mut mesh, EditKind::ApplyAll, red, Interpolation::Hard);
/// assert_eq!(written, 3);
/// ```
pub fn edit_mesh_colors(
    mesh: &mut PolyMesh,
    kind: EditKind,
    color: Rgba,
    interpolation: Interpolation,
) -> usize {
    // Stage the writes against the snapshot, then commit as a unit.
    let mut writes: Vec<(usize, Rgba)> = Vec::new();

    for c in mesh.corners() {
        if interpolation == Interpolation::Hard {
            let face_visited = mesh.faces[c.face].selected || kind == EditKind::ClearAll;
            if !face_visited {
                continue;
            }
        }
        if let Some(value) = corner_write(mesh, c.vertex, kind, color) {
            writes.push((c.corner, value));
        }
    }

    let layer = mesh.get_or_create_active_layer();
    for &(corner, value) in &writes {
        layer.set(corner, value);
    }
    writes.len()
}

/// Write one color to an explicit corner set, creating the layer if
/// absent. Returns the number of corners written.
///
/// This is the commit half of border fills: the caller computes the
/// corner set (selection border or island border) and nothing outside it
/// is touched.
pub fn fill_corners(mesh: &mut PolyMesh, corners: &HashSet<usize>, color: Rgba) -> usize {
    let layer = mesh.get_or_create_active_layer();
    let mut written = 0;
    for &corner in corners {
        if layer.set(corner, color) {
            written += 1;
        }
    }
    written
}

#[cfg(test)]
mod tests {
    use super::*;
    use vcolor_types::{Face, MeshVertex};

    const RED: Rgba = Rgba::new(1.0, 0.0, 0.0, 1.0);

    /// Two triangles sharing the edge (1, 2); face 0 selected along with
    /// its vertices, face 1 untouched.
    fn half_selected_pair() -> PolyMesh {
        let mut mesh = PolyMesh::new();
        mesh.vertices.push(MeshVertex::from_coords(0.0, 0.0, 0.0));
        mesh.vertices.push(MeshVertex::from_coords(1.0, 0.0, 0.0));
        mesh.vertices.push(MeshVertex::from_coords(0.5, 1.0, 0.0));
        mesh.vertices.push(MeshVertex::from_coords(1.5, 1.0, 0.0));
        mesh.faces.push(Face::new([0, 1, 2]));
        mesh.faces.push(Face::new([1, 3, 2]));

        mesh.faces[0].selected = true;
        for v in [0, 1, 2] {
            mesh.vertices[v].selected = true;
        }
        mesh
    }

    fn layer_colors(mesh: &PolyMesh) -> Vec<Rgba> {
        mesh.active_color_layer().unwrap().colors().to_vec()
    }

    #[test]
    fn hard_apply_stops_at_face_boundary() {
        let mut mesh = half_selected_pair();
        let written = edit_mesh_colors(&mut mesh, EditKind::Apply, RED, Interpolation::Hard);

        assert_eq!(written, 3);
        let colors = layer_colors(&mesh);
        // Face 0 corners painted...
        assert!(colors[0..3].iter().all(|&c| c == RED));
        // ...face 1 untouched even at the shared vertices 1 and 2.
        assert!(colors[3..6].iter().all(|&c| c == Rgba::BLANK));
    }

    #[test]
    fn smooth_apply_bleeds_through_shared_vertices() {
        let mut mesh = half_selected_pair();
        let written = edit_mesh_colors(&mut mesh, EditKind::Apply, RED, Interpolation::Smooth);

        // Face 0's three corners plus face 1's corners at vertices 1 and 2.
        assert_eq!(written, 5);
        let colors = layer_colors(&mesh);
        assert!(colors[0..3].iter().all(|&c| c == RED));
        assert_eq!(colors[3], RED); // face 1 corner at vertex 1
        assert_eq!(colors[4], Rgba::BLANK); // face 1 corner at vertex 3
        assert_eq!(colors[5], RED); // face 1 corner at vertex 2
    }

    #[test]
    fn apply_all_hard_covers_selected_faces_only() {
        let mut mesh = half_selected_pair();
        let written = edit_mesh_colors(&mut mesh, EditKind::ApplyAll, RED, Interpolation::Hard);

        assert_eq!(written, 3);
        assert!(layer_colors(&mesh)[3..6].iter().all(|&c| c == Rgba::BLANK));
    }

    #[test]
    fn clear_restores_blank() {
        let mut mesh = half_selected_pair();
        edit_mesh_colors(&mut mesh, EditKind::ApplyAll, RED, Interpolation::Smooth);
        let written = edit_mesh_colors(&mut mesh, EditKind::Clear, RED, Interpolation::Smooth);

        assert_eq!(written, 5);
        let colors = layer_colors(&mesh);
        assert!(colors[0..3].iter().all(|&c| c == Rgba::BLANK));
        assert_eq!(colors[4], RED); // vertex 3 never selected
    }

    #[test]
    fn clear_all_hard_visits_unselected_faces() {
        let mut mesh = half_selected_pair();
        edit_mesh_colors(&mut mesh, EditKind::ApplyAll, RED, Interpolation::Smooth);

        let written = edit_mesh_colors(&mut mesh, EditKind::ClearAll, RED, Interpolation::Hard);
        assert_eq!(written, 6);
        assert!(layer_colors(&mesh).iter().all(|&c| c == Rgba::BLANK));
    }

    #[test]
    fn edit_creates_layer_lazily() {
        let mut mesh = half_selected_pair();
        assert!(mesh.active_color_layer().is_none());
        edit_mesh_colors(&mut mesh, EditKind::Apply, RED, Interpolation::Hard);
        assert!(mesh.active_color_layer().is_some());
    }

    #[test]
    fn fill_corners_touches_exactly_the_set() {
        let mut mesh = half_selected_pair();
        let corners: HashSet<usize> = [0, 4].into_iter().collect();

        let written = fill_corners(&mut mesh, &corners, RED);
        assert_eq!(written, 2);

        let colors = layer_colors(&mesh);
        for (i, &c) in colors.iter().enumerate() {
            if corners.contains(&i) {
                assert_eq!(c, RED);
            } else {
                assert_eq!(c, Rgba::BLANK);
            }
        }
    }

    #[test]
    fn fill_out_of_range_corners_is_safe() {
        let mut mesh = half_selected_pair();
        let corners: HashSet<usize> = [0, 99].into_iter().collect();
        assert_eq!(fill_corners(&mut mesh, &corners, RED), 1);
    }
}
