//! Edge topology for polygon meshes.
//!
//! Maps each undirected edge to the faces that contain it.

use hashbrown::HashMap;
use vcolor_types::PolyMesh;

/// An undirected edge, stored with sorted endpoints.
pub type Edge = (u32, u32);

/// Edge-to-face incidence for a polygon mesh.
///
/// # Example
///
/// ```
/// use vcolor_border::EdgeTopology;
/// use vcolor_types::{Face, MeshVertex, PolyMesh};
///
/// let mut mesh = PolyMesh::new();
/// for i in 0..4 {
///     mesh.vertices.push(MeshVertex::from_coords(f64::from(i), 0.0, 0.0));
/// }
/// mesh.faces.push(Face::new([0, 1, 2]));
/// mesh.faces.push(Face::new([1, 3, 2]));
///
/// let topo = EdgeTopology::from_mesh(&mesh);
/// // The shared edge (1, 2) has two adjacent faces.
/// assert_eq!(topo.adjacent_faces(1, 2), &[0, 1]);
/// assert!(topo.is_boundary((0, 1)));
/// ```
#[derive(Debug, Clone)]
pub struct EdgeTopology {
    edge_faces: HashMap<Edge, Vec<usize>>,
}

impl EdgeTopology {
    /// Build edge incidence from a mesh.
    ///
    /// Walks every face loop; each consecutive vertex pair (wrapping) is
    /// one edge. Endpoints are normalized to sorted order for lookup.
    #[must_use]
    pub fn from_mesh(mesh: &PolyMesh) -> Self {
        let mut edge_faces: HashMap<Edge, Vec<usize>> = HashMap::new();

        for (face_idx, face) in mesh.faces.iter().enumerate() {
            let n = face.vertices.len();
            for i in 0..n {
                let v0 = face.vertices[i];
                let v1 = face.vertices[(i + 1) % n];
                let edge = if v0 < v1 { (v0, v1) } else { (v1, v0) };
                edge_faces.entry(edge).or_default().push(face_idx);
            }
        }

        for faces in edge_faces.values_mut() {
            faces.sort_unstable();
            faces.dedup();
        }

        Self { edge_faces }
    }

    /// Faces adjacent to the edge between two vertices.
    ///
    /// Endpoint order does not matter. Returns an empty slice for edges
    /// not present in the mesh.
    #[must_use]
    pub fn adjacent_faces(&self, v0: u32, v1: u32) -> &[usize] {
        let edge = if v0 < v1 { (v0, v1) } else { (v1, v0) };
        self.edge_faces.get(&edge).map_or(&[], Vec::as_slice)
    }

    /// Check if an edge is a true mesh boundary (fewer than two faces).
    ///
    /// Edges not present in the mesh count as boundary.
    #[must_use]
    pub fn is_boundary(&self, edge: Edge) -> bool {
        self.adjacent_faces(edge.0, edge.1).len() < 2
    }

    /// Number of distinct edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_faces.len()
    }

    /// Iterate over all edges with their adjacent faces.
    pub fn edges(&self) -> impl Iterator<Item = (Edge, &[usize])> {
        self.edge_faces.iter().map(|(&e, f)| (e, f.as_slice()))
    }
}
