//! Scene objects: the host-shaped wrapper around mesh data.
//!
//! Operations run against a batch of scene objects the host considers
//! selected. Only mesh objects participate; others are skipped silently.

use vcolor_palette::Palette;
use vcolor_types::PolyMesh;

/// Host interaction modes an object can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// Whole-object manipulation; mesh data is committed here.
    #[default]
    Object,
    /// Component-level mesh editing.
    Edit,
    /// Vertex color painting.
    VertexPaint,
}

/// Which element kind component selection operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectMode {
    /// Vertex selection.
    #[default]
    Vertex,
    /// Edge selection.
    Edge,
    /// Face selection.
    Face,
}

/// The most recently activated selection element, newest last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveElement {
    /// An active vertex by index.
    Vertex(u32),
    /// An active edge by endpoint vertices.
    Edge(u32, u32),
    /// An active face by index.
    Face(usize),
}

/// A named vertex set produced from a palette entry.
///
/// Weights are implicit: every member carries weight 1.0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexGroup {
    /// Group name (the source entry's label).
    pub name: String,
    /// Deduplicated member vertex indices.
    pub vertices: Vec<u32>,
}

/// Mesh payload of a scene object.
#[derive(Debug, Clone, Default)]
pub struct MeshObject {
    /// The mesh and its color layers.
    pub mesh: PolyMesh,
    /// Palette cache rebuilt from the active color layer.
    pub palette: Palette,
    /// Vertex groups registered on this object.
    pub vertex_groups: Vec<VertexGroup>,
    /// Selection history, newest element last.
    pub select_history: Vec<ActiveElement>,
    /// Component selection mode.
    pub select_mode: SelectMode,
}

/// Non-mesh payloads an object may carry instead.
#[derive(Debug, Clone)]
pub enum ObjectData {
    /// A mesh object; the only kind operations touch.
    Mesh(Box<MeshObject>),
    /// A light source.
    Light,
    /// A camera.
    Camera,
    /// An empty transform.
    Empty,
}

/// One object in the host scene.
#[derive(Debug, Clone)]
pub struct SceneObject {
    /// Object name, used in batch reports.
    pub name: String,
    /// Current interaction mode.
    pub mode: InteractionMode,
    /// Object payload.
    pub data: ObjectData,
}

impl SceneObject {
    /// Create a mesh object in object mode.
    #[must_use]
    pub fn mesh(name: impl Into<String>, mesh: PolyMesh) -> Self {
        Self {
            name: name.into(),
            mode: InteractionMode::Object,
            data: ObjectData::Mesh(Box::new(MeshObject {
                mesh,
                ..MeshObject::default()
            })),
        }
    }

    /// Create a non-mesh object.
    #[must_use]
    pub fn other(name: impl Into<String>, data: ObjectData) -> Self {
        Self {
            name: name.into(),
            mode: InteractionMode::Object,
            data,
        }
    }

    /// Mesh payload, if this is a mesh object.
    #[must_use]
    pub fn mesh_object(&self) -> Option<&MeshObject> {
        match &self.data {
            ObjectData::Mesh(m) => Some(m),
            _ => None,
        }
    }

    /// Mutable mesh payload, if this is a mesh object.
    pub fn mesh_object_mut(&mut self) -> Option<&mut MeshObject> {
        match &mut self.data {
            ObjectData::Mesh(m) => Some(m),
            _ => None,
        }
    }
}

/// Run a closure with the object switched into a required interaction
/// mode, restoring the prior mode on the way out.
///
/// Restoration is unconditional: early-report paths inside the closure
/// still exit through the restore. Mesh mutation happens in
/// [`InteractionMode::Object`], matching the host's commit semantics.
pub fn with_object_mode<T>(
    object: &mut SceneObject,
    mode: InteractionMode,
    f: impl FnOnce(&mut SceneObject) -> T,
) -> T {
    let saved = object.mode;
    object.mode = mode;
    let result = f(object);
    object.mode = saved;
    result
}
