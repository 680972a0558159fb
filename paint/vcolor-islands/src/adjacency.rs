//! UV-aware face adjacency.
//!
//! Two faces are UV-connected when they share a mesh edge whose endpoint
//! UV coordinates coincide on both faces. Edges split in UV space (seams)
//! do not connect, even though the 3D topology is contiguous.

use hashbrown::{HashMap, HashSet};
use vcolor_types::{Point2, PolyMesh};

use crate::error::{IslandError, IslandResult};

/// Face-to-face adjacency through UV-connected edges.
#[derive(Debug, Clone)]
pub struct UvAdjacency {
    /// For each face, the list of UV-connected face indices.
    adjacent: Vec<Vec<usize>>,
}

impl UvAdjacency {
    /// Build UV adjacency from a mesh.
    ///
    /// UV coordinates compare by exact value; a seam offset of any size
    /// disconnects the edge.
    ///
    /// # Errors
    ///
    /// Returns [`IslandError::MissingUvs`] if the mesh carries no UV layer.
    pub fn from_mesh(mesh: &PolyMesh) -> IslandResult<Self> {
        if !mesh.has_uvs() {
            return Err(IslandError::MissingUvs);
        }

        // Map each undirected edge to its (face, endpoint UVs) incidences.
        let mut edge_faces: HashMap<(u32, u32), Vec<(usize, Point2<f64>, Point2<f64>)>> =
            HashMap::new();

        let mut start = 0usize;
        for (face_idx, face) in mesh.faces.iter().enumerate() {
            let n = face.vertices.len();
            for i in 0..n {
                let v0 = face.vertices[i];
                let v1 = face.vertices[(i + 1) % n];
                let uv0 = match mesh.corner_uv(start + i) {
                    Some(uv) => uv,
                    None => continue,
                };
                let uv1 = match mesh.corner_uv(start + (i + 1) % n) {
                    Some(uv) => uv,
                    None => continue,
                };
                // Key by sorted vertex pair; keep UVs keyed to the lower
                // vertex first so both sides compare like for like.
                let (edge, lo_uv, hi_uv) = if v0 < v1 {
                    ((v0, v1), uv0, uv1)
                } else {
                    ((v1, v0), uv1, uv0)
                };
                edge_faces.entry(edge).or_default().push((face_idx, lo_uv, hi_uv));
            }
            start += n;
        }

        let mut adjacent: Vec<Vec<usize>> = vec![Vec::new(); mesh.faces.len()];

        for sides in edge_faces.values() {
            if let [(f0, a0, b0), (f1, a1, b1)] = sides.as_slice() {
                if a0 == a1 && b0 == b1 {
                    adjacent[*f0].push(*f1);
                    adjacent[*f1].push(*f0);
                }
            }
            // Boundary and non-manifold edges never connect
        }

        for adj_list in &mut adjacent {
            adj_list.sort_unstable();
            adj_list.dedup();
        }

        Ok(Self { adjacent })
    }

    /// Get the UV-connected neighbors of a face.
    ///
    /// Returns an empty slice if the face index is out of bounds.
    #[must_use]
    pub fn neighbors(&self, face_idx: usize) -> &[usize] {
        self.adjacent.get(face_idx).map_or(&[], Vec::as_slice)
    }

    /// Number of faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.adjacent.len()
    }

    /// All faces reachable from a starting face via UV-connected edges.
    #[must_use]
    pub fn connected_component(&self, start_face: usize) -> HashSet<usize> {
        let mut visited = HashSet::new();
        let mut stack = vec![start_face];

        while let Some(face) = stack.pop() {
            if visited.contains(&face) || face >= self.adjacent.len() {
                continue;
            }
            visited.insert(face);
            for &neighbor in &self.adjacent[face] {
                if !visited.contains(&neighbor) {
                    stack.push(neighbor);
                }
            }
        }

        visited
    }
}
