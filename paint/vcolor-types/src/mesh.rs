//! Polygon mesh with per-corner addressing.

use nalgebra::{Point2, Point3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::layer::ColorLayer;

/// A mesh vertex: position plus host-owned selection flag.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeshVertex {
    /// Position in 3D space.
    pub position: Point3<f64>,
    /// Whether the host currently has this vertex selected.
    pub selected: bool,
}

impl MeshVertex {
    /// Create an unselected vertex at a position.
    #[must_use]
    pub fn new(position: Point3<f64>) -> Self {
        Self {
            position,
            selected: false,
        }
    }

    /// Create an unselected vertex from coordinates.
    #[must_use]
    pub fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Self::new(Point3::new(x, y, z))
    }
}

/// A polygon face: an ordered loop of vertex indices plus a selection flag.
///
/// Each (face, loop slot) incidence is a **corner** and carries its own
/// color independent of other faces sharing the vertex.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Face {
    /// Vertex indices in loop order.
    pub vertices: Vec<u32>,
    /// Whether the host currently has this face selected.
    pub selected: bool,
}

impl Face {
    /// Create an unselected face from a vertex loop.
    #[must_use]
    pub fn new(vertices: impl IntoIterator<Item = u32>) -> Self {
        Self {
            vertices: vertices.into_iter().collect(),
            selected: false,
        }
    }

    /// Number of corners (same as the number of vertices in the loop).
    #[must_use]
    pub fn corner_count(&self) -> usize {
        self.vertices.len()
    }
}

/// A corner reference produced by mesh iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CornerRef {
    /// Global corner index (faces laid out consecutively in order).
    pub corner: usize,
    /// Owning face index.
    pub face: usize,
    /// Slot within the face loop.
    pub slot: usize,
    /// Vertex index at this corner.
    pub vertex: u32,
}

/// A polygon mesh that stores colors per corner.
///
/// Corners are numbered globally in face order: face 0's corners come
/// first, then face 1's, and so on. Color layers and the optional UV layer
/// are corner-parallel vectors addressed by that numbering.
///
/// # Example
///
/// ```
/// use vcolor_types::{Face, MeshVertex, PolyMesh};
///
/// let mut mesh = PolyMesh::new();
/// mesh.vertices.push(MeshVertex::from_coords(0.0, 0.0, 0.0));
/// mesh.vertices.push(MeshVertex::from_coords(1.0, 0.0, 0.0));
/// mesh.vertices.push(MeshVertex::from_coords(0.5, 1.0, 0.0));
/// mesh.faces.push(Face::new([0, 1, 2]));
///
/// assert_eq!(mesh.face_count(), 1);
/// assert_eq!(mesh.corner_count(), 3);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PolyMesh {
    /// Vertex data.
    pub vertices: Vec<MeshVertex>,
    /// Polygon faces.
    pub faces: Vec<Face>,
    /// Optional corner-parallel UV layer.
    pub uvs: Option<Vec<Point2<f64>>>,
    pub(crate) layers: Vec<ColorLayer>,
    pub(crate) active_layer: Option<usize>,
}

impl PolyMesh {
    /// Create an empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check if the mesh has no vertices or no faces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.faces.is_empty()
    }

    /// Total number of corners across all faces.
    #[must_use]
    pub fn corner_count(&self) -> usize {
        self.faces.iter().map(Face::corner_count).sum()
    }

    /// Global corner index of the first corner of a face.
    ///
    /// Returns `None` if the face index is out of bounds.
    #[must_use]
    pub fn face_corner_start(&self, face_idx: usize) -> Option<usize> {
        if face_idx > self.faces.len() {
            return None;
        }
        Some(
            self.faces[..face_idx]
                .iter()
                .map(Face::corner_count)
                .sum(),
        )
    }

    /// Range of global corner indices belonging to a face.
    ///
    /// Returns `None` if the face index is out of bounds.
    #[must_use]
    pub fn face_corner_range(&self, face_idx: usize) -> Option<std::ops::Range<usize>> {
        let face = self.faces.get(face_idx)?;
        let start = self.face_corner_start(face_idx)?;
        Some(start..start + face.corner_count())
    }

    /// Iterate over every corner of every face, in global corner order.
    ///
    /// # Example
    ///
    /// ```
    /// use vcolor_types::{Face, MeshVertex, PolyMesh};
    ///
    /// let mut mesh = PolyMesh::new();
    /// for i in 0..4 {
    ///     mesh.vertices.push(MeshVertex::from_coords(f64::from(i), 0.0, 0.0));
    /// }
    /// mesh.faces.push(Face::new([0, 1, 2]));
    /// mesh.faces.push(Face::new([1, 3, 2]));
    ///
    /// let corners: Vec<_> = mesh.corners().map(|c| c.corner).collect();
    /// assert_eq!(corners, vec![0, 1, 2, 3, 4, 5]);
    /// ```
    pub fn corners(&self) -> impl Iterator<Item = CornerRef> + '_ {
        let mut next = 0usize;
        self.faces.iter().enumerate().flat_map(move |(face, f)| {
            let start = next;
            next += f.vertices.len();
            f.vertices
                .iter()
                .enumerate()
                .map(move |(slot, &vertex)| CornerRef {
                    corner: start + slot,
                    face,
                    slot,
                    vertex,
                })
        })
    }

    /// Iterate over the corners of one face.
    ///
    /// Yields nothing if the face index is out of bounds.
    pub fn face_corners(&self, face_idx: usize) -> impl Iterator<Item = CornerRef> + '_ {
        let start = self.face_corner_start(face_idx).unwrap_or(0);
        self.faces
            .get(face_idx)
            .into_iter()
            .flat_map(move |f| {
                f.vertices
                    .iter()
                    .enumerate()
                    .map(move |(slot, &vertex)| CornerRef {
                        corner: start + slot,
                        face: face_idx,
                        slot,
                        vertex,
                    })
            })
    }

    /// UV coordinate at a global corner index, if the mesh carries UVs.
    #[must_use]
    pub fn corner_uv(&self, corner_idx: usize) -> Option<Point2<f64>> {
        self.uvs.as_ref()?.get(corner_idx).copied()
    }

    /// Whether the mesh carries a UV layer.
    #[must_use]
    pub fn has_uvs(&self) -> bool {
        self.uvs.is_some()
    }

    /// Set the selection flag on every vertex and face.
    pub fn select_all(&mut self, selected: bool) {
        for v in &mut self.vertices {
            v.selected = selected;
        }
        for f in &mut self.faces {
            f.selected = selected;
        }
    }
}
