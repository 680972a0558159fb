//! The palette: a rebuilt-on-demand index of distinct mesh colors.

use hashbrown::HashSet;
use vcolor_types::{PolyMesh, Rgba};

use crate::entry::{format_label, LabelFormat, PaletteEntry};

/// An ordered sequence of deduplicated color entries for one mesh object.
///
/// The palette is a derived cache, never the source of truth: it is fully
/// rebuilt from the active color layer on every [`Palette::refresh`] and
/// holds no identity across refreshes except by color-value re-matching.
///
/// Invariants after a refresh:
///
/// - no two entries share a color
/// - no entry holds [`Rgba::BLANK`]
/// - `entry.id` equals the entry's position
///
/// # Example
///
/// ```
/// use vcolor_palette::{LabelFormat, Palette};
/// use vcolor_types::{Face, MeshVertex, PolyMesh, Rgba};
///
/// let mut mesh = PolyMesh::new();
/// mesh.vertices.push(MeshVertex::from_coords(0.0, 0.0, 0.0));
/// mesh.vertices.push(MeshVertex::from_coords(1.0, 0.0, 0.0));
/// mesh.vertices.push(MeshVertex::from_coords(0.5, 1.0, 0.0));
/// mesh.faces.push(Face::new([0, 1, 2]));
///
/// let red = Rgba::new(1.0, 0.0, 0.0, 1.0);
/// let layer = mesh.get_or_create_active_layer();
/// for corner in 0..3 {
///     layer.set(corner, red);
/// }
///
/// let mut palette = Palette::new();
/// palette.refresh(&mut mesh, LabelFormat::Rgb255);
/// assert_eq!(palette.len(), 1);
/// assert_eq!(palette.entries()[0].label, "(255, 0, 0, 1.0)");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
    active_index: usize,
}

impl Palette {
    /// Create an empty palette.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All entries in order.
    #[must_use]
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the palette has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry by id.
    #[must_use]
    pub fn entry(&self, id: usize) -> Option<&PaletteEntry> {
        self.entries.get(id)
    }

    /// Mutable entry by id.
    pub fn entry_mut(&mut self, id: usize) -> Option<&mut PaletteEntry> {
        self.entries.get_mut(id)
    }

    /// Index of the active entry.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Make an entry active by id. Out-of-range ids are ignored.
    pub fn set_active(&mut self, id: usize) {
        if id < self.entries.len() {
            self.active_index = id;
        }
    }

    /// The active entry, if the active index is in range.
    #[must_use]
    pub fn active_entry(&self) -> Option<&PaletteEntry> {
        self.entries.get(self.active_index)
    }

    /// Rebuild the palette from the mesh's active color layer.
    ///
    /// Scans every corner in mesh order and collects each distinct
    /// non-[`Rgba::BLANK`] color in first-seen order (no sort; discovery
    /// order is the documented ordering). The active color layer is
    /// created if absent.
    ///
    /// The previously active entry is re-resolved by color value: the
    /// active index is first decremented by one (floored at zero), then
    /// overridden by the entry matching the previously active color, when
    /// one survives.
    pub fn refresh(&mut self, mesh: &mut PolyMesh, format: LabelFormat) {
        let previous_color = self.active_entry().map(|e| e.color);

        self.entries.clear();

        let layer = mesh.get_or_create_active_layer();

        let mut seen: HashSet<Rgba> = HashSet::new();
        for &color in layer.colors() {
            if color.is_blank() || !seen.insert(color) {
                continue;
            }
            let id = self.entries.len();
            self.entries.push(PaletteEntry {
                id,
                color,
                saved_color: color,
                label: format_label(color, format),
            });
        }

        // First correction: indices compact toward the front when entries
        // disappear.
        self.active_index = self.active_index.saturating_sub(1);

        // Value match wins over the positional correction.
        if let Some(previous) = previous_color {
            if let Some(entry) = self.entries.iter().find(|e| e.color == previous) {
                self.active_index = entry.id;
            }
        }
    }
}
