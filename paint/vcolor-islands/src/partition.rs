//! UV island partitioning.

use hashbrown::HashSet;
use vcolor_types::PolyMesh;

use crate::adjacency::UvAdjacency;
use crate::error::IslandResult;

/// A maximal set of faces mutually reachable through UV-connected edges.
///
/// Islands are computed on demand and discarded after use; they hold no
/// identity across mesh edits.
#[derive(Debug, Clone)]
pub struct UvIsland {
    faces: HashSet<usize>,
}

impl UvIsland {
    /// Number of faces in the island.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check whether a face belongs to this island.
    #[must_use]
    pub fn contains(&self, face_idx: usize) -> bool {
        self.faces.contains(&face_idx)
    }

    /// Iterate over the island's face indices.
    pub fn faces(&self) -> impl Iterator<Item = usize> + '_ {
        self.faces.iter().copied()
    }
}

/// Partition a mesh's faces into UV islands.
///
/// Islands are returned in order of their lowest face index, so the
/// partition is deterministic for a given mesh. Every face belongs to
/// exactly one island (an isolated face forms a one-face island).
///
/// # Errors
///
/// Returns [`crate::IslandError::MissingUvs`] if the mesh carries no UV
/// layer.
///
/// # Example
///
/// ```
/// use vcolor_islands::partition_islands;
/// use vcolor_types::{Face, MeshVertex, Point2, PolyMesh};
///
/// let mut mesh = PolyMesh::new();
/// for i in 0..3 {
///     mesh.vertices.push(MeshVertex::from_coords(f64::from(i), 0.0, 0.0));
/// }
/// mesh.faces.push(Face::new([0, 1, 2]));
/// mesh.uvs = Some(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(0.5, 1.0),
/// ]);
///
/// let islands = partition_islands(&mesh).unwrap();
/// assert_eq!(islands.len(), 1);
/// assert!(islands[0].contains(0));
/// ```
pub fn partition_islands(mesh: &PolyMesh) -> IslandResult<Vec<UvIsland>> {
    let adjacency = UvAdjacency::from_mesh(mesh)?;

    let mut assigned: HashSet<usize> = HashSet::new();
    let mut islands = Vec::new();

    for face_idx in 0..mesh.face_count() {
        if assigned.contains(&face_idx) {
            continue;
        }
        let component = adjacency.connected_component(face_idx);
        assigned.extend(component.iter().copied());
        islands.push(UvIsland { faces: component });
    }

    Ok(islands)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vcolor_types::{Face, MeshVertex, Point2};

    /// Two quads with disjoint UV placements (no shared UVs): two islands.
    fn two_island_quads() -> PolyMesh {
        let mut mesh = PolyMesh::new();
        for i in 0..8 {
            mesh.vertices.push(MeshVertex::from_coords(f64::from(i), 0.0, 0.0));
        }
        mesh.faces.push(Face::new([0, 1, 2, 3]));
        mesh.faces.push(Face::new([4, 5, 6, 7]));
        mesh.uvs = Some(vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.4, 0.0),
            Point2::new(0.4, 0.4),
            Point2::new(0.0, 0.4),
            Point2::new(0.6, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 0.4),
            Point2::new(0.6, 0.4),
        ]);
        mesh
    }

    /// A 2x1 strip of quads continuous in UV space: one island.
    fn one_island_strip() -> PolyMesh {
        let mut mesh = PolyMesh::new();
        for i in 0..6 {
            mesh.vertices.push(MeshVertex::from_coords(f64::from(i), 0.0, 0.0));
        }
        mesh.faces.push(Face::new([0, 1, 4, 3]));
        mesh.faces.push(Face::new([1, 2, 5, 4]));
        mesh.uvs = Some(vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.5, 0.0),
            Point2::new(0.5, 1.0),
            Point2::new(0.0, 1.0),
            Point2::new(0.5, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.5, 1.0),
        ]);
        mesh
    }

    #[test]
    fn disjoint_uvs_make_two_islands() {
        let mesh = two_island_quads();
        let islands = partition_islands(&mesh).expect("islands");

        assert_eq!(islands.len(), 2);
        assert!(islands[0].contains(0));
        assert!(islands[1].contains(1));
        assert_eq!(islands[0].face_count(), 1);
        assert_eq!(islands[1].face_count(), 1);
    }

    #[test]
    fn continuous_uvs_make_one_island() {
        let mesh = one_island_strip();
        let islands = partition_islands(&mesh).expect("islands");

        assert_eq!(islands.len(), 1);
        assert_eq!(islands[0].face_count(), 2);
    }

    #[test]
    fn islands_partition_all_faces() {
        let mesh = two_island_quads();
        let islands = partition_islands(&mesh).expect("islands");

        let total: usize = islands.iter().map(UvIsland::face_count).sum();
        assert_eq!(total, mesh.face_count());
    }

    #[test]
    fn missing_uvs_propagates() {
        let mut mesh = two_island_quads();
        mesh.uvs = None;
        assert!(partition_islands(&mesh).is_err());
    }

    #[test]
    fn empty_mesh_has_no_islands() {
        let mut mesh = PolyMesh::new();
        mesh.uvs = Some(Vec::new());
        let islands = partition_islands(&mesh).expect("islands");
        assert!(islands.is_empty());
    }
}
