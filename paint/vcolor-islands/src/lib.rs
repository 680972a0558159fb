//! UV island partitioning for per-corner color generation.
//!
//! A **UV island** is a maximal set of faces connected through shared UV
//! coordinates: two faces join the same island when they share a mesh
//! edge whose endpoint UVs coincide exactly on both sides. Seams (edges
//! split in UV space) separate islands even where the 3D surface is
//! contiguous.
//!
//! Partitions are pure, stateless queries over the current mesh snapshot:
//! compute, consume, discard.
//!
//! # Quick Start
//!
//! ```
//! use vcolor_islands::partition_islands;
//! use vcolor_types::{Face, MeshVertex, Point2, PolyMesh};
//!
//! let mut mesh = PolyMesh::new();
//! for i in 0..3 {
//!     mesh.vertices.push(MeshVertex::from_coords(f64::from(i), 0.0, 0.0));
//! }
//! mesh.faces.push(Face::new([0, 1, 2]));
//! mesh.uvs = Some(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(0.5, 1.0),
//! ]);
//!
//! let islands = partition_islands(&mesh).unwrap();
//! assert_eq!(islands.len(), 1);
//! ```

mod adjacency;
mod error;
mod partition;

pub use adjacency::UvAdjacency;
pub use error::{IslandError, IslandResult};
pub use partition::{partition_islands, UvIsland};
