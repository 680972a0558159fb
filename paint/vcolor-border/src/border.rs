//! Border corner detection.
//!
//! A **border edge** separates two faces that disagree on membership in
//! some face set (selection, UV island), or lies on a true mesh boundary.
//! The border corner set is the corners of member (inner) or non-member
//! (outer) faces touching a border edge, at border vertices.

use hashbrown::HashSet;
use vcolor_types::PolyMesh;

use crate::edges::EdgeTopology;

/// Which side of a membership boundary to collect corners from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderSide {
    /// Corners of member faces at the boundary.
    Inner,
    /// Corners of non-member faces at the boundary.
    Outer,
}

fn collect_border_corners(
    mesh: &PolyMesh,
    topology: &EdgeTopology,
    consider_edge: impl Fn(u32, u32) -> bool,
    is_member: impl Fn(usize) -> bool,
    side: BorderSide,
) -> HashSet<usize> {
    let mut border_vertices: HashSet<u32> = HashSet::new();
    let mut linked_faces: HashSet<usize> = HashSet::new();

    for ((v0, v1), faces) in topology.edges() {
        if !consider_edge(v0, v1) {
            continue;
        }
        let is_border = match faces {
            [f0, f1] => is_member(*f0) != is_member(*f1),
            _ => true,
        };
        if is_border {
            border_vertices.insert(v0);
            border_vertices.insert(v1);
            linked_faces.extend(faces.iter().copied());
        }
    }

    let want_member = side == BorderSide::Inner;
    let mut corners = HashSet::new();

    for &face_idx in &linked_faces {
        if is_member(face_idx) != want_member {
            continue;
        }
        for c in mesh.face_corners(face_idx) {
            if border_vertices.contains(&c.vertex) {
                corners.insert(c.corner);
            }
        }
    }

    corners
}

/// Collect the border corners of an arbitrary face-membership set.
///
/// For every edge of the mesh:
///
/// - a true boundary edge (fewer than two adjacent faces), or
/// - an edge whose two adjacent faces disagree on `is_member`
///
/// is a border edge. Its endpoint vertices form the border vertex set and
/// its adjacent faces the linked face set. The result is the global corner
/// indices of linked faces on the requested side whose vertex lies in the
/// border vertex set.
///
/// Used for UV-island borders, where every edge participates. Selection
/// borders go through [`selection_border`], which restricts the sweep to
/// selected edges.
#[must_use]
pub fn border_corners(
    mesh: &PolyMesh,
    topology: &EdgeTopology,
    is_member: impl Fn(usize) -> bool,
    side: BorderSide,
) -> HashSet<usize> {
    collect_border_corners(mesh, topology, |_, _| true, is_member, side)
}

/// Collect the border corners of the current face selection.
///
/// Only selected edges (both endpoint vertices selected) are classified.
/// This keeps far-away mesh boundaries out of the border set: for a
/// selected patch in the middle of a larger surface, the border is exactly
/// the selection rim, not the outer rim of the whole mesh.
///
/// # Example
///
/// ```
/// use vcolor_border::{selection_border, BorderSide};
/// use vcolor_types::{Face, MeshVertex, PolyMesh};
///
/// let mut mesh = PolyMesh::new();
/// for i in 0..4 {
///     mesh.vertices.push(MeshVertex::from_coords(f64::from(i), 0.0, 0.0));
/// }
/// mesh.faces.push(Face::new([0, 1, 2]));
/// mesh.faces.push(Face::new([1, 3, 2]));
/// mesh.faces[0].selected = true;
/// for v in [0, 1, 2] {
///     mesh.vertices[v].selected = true;
/// }
///
/// let inner = selection_border(&mesh, BorderSide::Inner);
/// // All three corners of the selected triangle touch a border edge.
/// assert_eq!(inner.len(), 3);
/// ```
#[must_use]
pub fn selection_border(mesh: &PolyMesh, side: BorderSide) -> HashSet<usize> {
    let topology = EdgeTopology::from_mesh(mesh);
    collect_border_corners(
        mesh,
        &topology,
        |v0, v1| mesh.vertices[v0 as usize].selected && mesh.vertices[v1 as usize].selected,
        |f| mesh.faces[f].selected,
        side,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use vcolor_types::{Face, MeshVertex};

    /// 3x1 strip of quads; vertices laid out
    /// ```text
    /// 4 - 5 - 6 - 7
    /// |   |   |   |
    /// 0 - 1 - 2 - 3
    /// ```
    fn quad_strip() -> PolyMesh {
        let mut mesh = PolyMesh::new();
        for y in 0..2 {
            for x in 0..4 {
                mesh.vertices
                    .push(MeshVertex::from_coords(f64::from(x), f64::from(y), 0.0));
            }
        }
        mesh.faces.push(Face::new([0, 1, 5, 4]));
        mesh.faces.push(Face::new([1, 2, 6, 5]));
        mesh.faces.push(Face::new([2, 3, 7, 6]));
        mesh
    }

    /// 3x3 grid of quads; face 4 is the center, with no mesh-boundary
    /// edges of its own.
    fn quad_grid_3x3() -> PolyMesh {
        let mut mesh = PolyMesh::new();
        for y in 0..4 {
            for x in 0..4 {
                mesh.vertices
                    .push(MeshVertex::from_coords(f64::from(x), f64::from(y), 0.0));
            }
        }
        for y in 0..3u32 {
            for x in 0..3u32 {
                let v = y * 4 + x;
                mesh.faces.push(Face::new([v, v + 1, v + 5, v + 4]));
            }
        }
        mesh
    }

    fn select_face(mesh: &mut PolyMesh, face_idx: usize) {
        mesh.faces[face_idx].selected = true;
        let verts: Vec<u32> = mesh.faces[face_idx].vertices.clone();
        for v in verts {
            mesh.vertices[v as usize].selected = true;
        }
    }

    #[test]
    fn selected_middle_quad_inner() {
        let mut mesh = quad_strip();
        select_face(&mut mesh, 1);

        let inner = selection_border(&mesh, BorderSide::Inner);
        // The middle quad's side edges are membership disagreements and
        // its top/bottom edges are true boundaries, so all four of its
        // corners qualify.
        let face1: HashSet<usize> = mesh.face_corner_range(1).unwrap().collect();
        assert_eq!(inner, face1);
    }

    #[test]
    fn selected_middle_quad_outer() {
        let mut mesh = quad_strip();
        select_face(&mut mesh, 1);

        let outer = selection_border(&mesh, BorderSide::Outer);
        // The unselected neighbors contribute only their corners at the
        // shared vertices (1, 5) and (2, 6).
        let shared: HashSet<u32> = [1, 5, 2, 6].into_iter().collect();
        let mut expected = HashSet::new();
        for &face_idx in &[0usize, 2] {
            for c in mesh.face_corners(face_idx) {
                if shared.contains(&c.vertex) {
                    expected.insert(c.corner);
                }
            }
        }
        assert_eq!(outer.len(), 4);
        assert_eq!(outer, expected);
        assert!(outer.is_disjoint(&mesh.face_corner_range(1).unwrap().collect()));
    }

    #[test]
    fn surrounded_quad_inner_and_outer() {
        let mut mesh = quad_grid_3x3();
        select_face(&mut mesh, 4);

        // Inner: all four edges of the center quad are disagreement
        // borders, so exactly its own corners qualify.
        let inner = selection_border(&mesh, BorderSide::Inner);
        let center: HashSet<usize> = mesh.face_corner_range(4).unwrap().collect();
        assert_eq!(inner, center);

        // Outer: only the four edge-adjacent faces are linked to a border
        // edge. Each contributes its two corners at the shared vertices.
        // Diagonal neighbors share a vertex but no edge and contribute
        // nothing.
        let outer = selection_border(&mesh, BorderSide::Outer);
        let center_verts: HashSet<u32> = mesh.faces[4].vertices.iter().copied().collect();
        let mut expected = HashSet::new();
        for &neighbor in &[1usize, 3, 5, 7] {
            for c in mesh.face_corners(neighbor) {
                if center_verts.contains(&c.vertex) {
                    expected.insert(c.corner);
                }
            }
        }
        assert_eq!(outer.len(), 8);
        assert_eq!(outer, expected);
        assert!(outer.is_disjoint(&center));
    }

    #[test]
    fn membership_parameterization() {
        // Borders of the face set {0} via an explicit membership closure,
        // independent of selection flags; every edge participates.
        let mesh = quad_strip();
        let topology = EdgeTopology::from_mesh(&mesh);

        let inner = border_corners(&mesh, &topology, |f| f == 0, BorderSide::Inner);
        let face0: HashSet<usize> = mesh.face_corner_range(0).unwrap().collect();
        assert_eq!(inner, face0);

        let outer = border_corners(&mesh, &topology, |f| f == 0, BorderSide::Outer);
        assert!(!outer.is_empty());
        assert!(outer.is_disjoint(&face0));
    }

    #[test]
    fn no_selection_yields_no_border() {
        let mesh = quad_strip();
        assert!(selection_border(&mesh, BorderSide::Inner).is_empty());
        assert!(selection_border(&mesh, BorderSide::Outer).is_empty());
    }

    #[test]
    fn fully_selected_border_is_mesh_boundary() {
        let mut mesh = quad_grid_3x3();
        mesh.select_all(true);

        // No membership disagreements remain; only true mesh boundaries
        // classify. The center face touches no boundary edge, so none of
        // its corners appear.
        let inner = selection_border(&mesh, BorderSide::Inner);
        assert!(!inner.is_empty());
        let center: HashSet<usize> = mesh.face_corner_range(4).unwrap().collect();
        assert!(inner.is_disjoint(&center));

        assert!(selection_border(&mesh, BorderSide::Outer).is_empty());
    }
}
