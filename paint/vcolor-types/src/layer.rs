//! Per-corner color layers and the get-or-create store contract.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::mesh::PolyMesh;

/// Name given to a color layer created lazily on first edit.
pub const DEFAULT_LAYER_NAME: &str = "Col";

/// A named, corner-parallel color attribute.
///
/// Every corner of the owning mesh has exactly one slot; a freshly created
/// layer initializes every slot to [`Rgba::BLANK`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColorLayer {
    name: String,
    colors: Vec<Rgba>,
}

impl ColorLayer {
    /// Create a layer with every corner set to [`Rgba::BLANK`].
    #[must_use]
    pub fn new(name: impl Into<String>, corner_count: usize) -> Self {
        Self {
            name: name.into(),
            colors: vec![Rgba::BLANK; corner_count],
        }
    }

    /// Layer name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of corner slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Check if the layer has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at a global corner index.
    ///
    /// Returns `None` if the index is out of bounds.
    #[must_use]
    pub fn get(&self, corner_idx: usize) -> Option<Rgba> {
        self.colors.get(corner_idx).copied()
    }

    /// Write a color at a global corner index.
    ///
    /// Returns `false` (without writing) if the index is out of bounds.
    pub fn set(&mut self, corner_idx: usize, color: Rgba) -> bool {
        match self.colors.get_mut(corner_idx) {
            Some(slot) => {
                *slot = color;
                true
            }
            None => false,
        }
    }

    /// All corner colors in global corner order.
    #[must_use]
    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    /// Number of corners currently holding a given color.
    #[must_use]
    pub fn count_matching(&self, color: Rgba) -> usize {
        self.colors.iter().filter(|&&c| c == color).count()
    }
}

impl PolyMesh {
    /// All color layers attached to this mesh.
    #[must_use]
    pub fn color_layers(&self) -> &[ColorLayer] {
        &self.layers
    }

    /// The active color layer, if any.
    #[must_use]
    pub fn active_color_layer(&self) -> Option<&ColorLayer> {
        self.layers.get(self.active_layer?)
    }

    /// Mutable access to the active color layer, if any.
    pub fn active_color_layer_mut(&mut self) -> Option<&mut ColorLayer> {
        self.layers.get_mut(self.active_layer?)
    }

    /// Attach a new blank layer sized to the current corner count and
    /// return its index. Does not change the active layer.
    pub fn add_color_layer(&mut self, name: impl Into<String>) -> usize {
        let layer = ColorLayer::new(name, self.corner_count());
        self.layers.push(layer);
        self.layers.len() - 1
    }

    /// Make a layer active by index.
    ///
    /// Returns `false` if the index is out of bounds.
    pub fn set_active_color_layer(&mut self, index: usize) -> bool {
        if index < self.layers.len() {
            self.active_layer = Some(index);
            true
        } else {
            false
        }
    }

    /// Resolve the active color layer, creating one when the mesh has none.
    ///
    /// When no layer exists, a layer named [`DEFAULT_LAYER_NAME`] is created
    /// with every corner set to [`Rgba::BLANK`] and marked active.
    /// Idempotent: repeated calls return the same layer without touching
    /// existing colors.
    ///
    /// # Example
    ///
    /// ```
    /// use vcolor_types::{Face, MeshVertex, PolyMesh, Rgba};
    ///
    /// let mut mesh = PolyMesh::new();
    /// mesh.vertices.push(MeshVertex::from_coords(0.0, 0.0, 0.0));
    /// mesh.vertices.push(MeshVertex::from_coords(1.0, 0.0, 0.0));
    /// mesh.vertices.push(MeshVertex::from_coords(0.5, 1.0, 0.0));
    /// mesh.faces.push(Face::new([0, 1, 2]));
    ///
    /// let layer = mesh.get_or_create_active_layer();
    /// assert_eq!(layer.name(), "Col");
    /// assert_eq!(layer.get(0), Some(Rgba::BLANK));
    /// ```
    pub fn get_or_create_active_layer(&mut self) -> &mut ColorLayer {
        if self.layers.is_empty() {
            let index = self.add_color_layer(DEFAULT_LAYER_NAME);
            self.active_layer = Some(index);
        } else if self.active_layer.is_none() {
            self.active_layer = Some(0);
        }
        let index = self.active_layer.unwrap_or(0);
        &mut self.layers[index]
    }
}
