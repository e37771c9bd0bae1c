use egui::Color32;

/// Swatch colors a fresh palette starts with
pub const DEFAULT_SWATCHES: [Color32; 6] = [
    Color32::from_rgb(0x31, 0xd9, 0xa5),
    Color32::from_rgb(0x72, 0xb4, 0xb6),
    Color32::from_rgb(0x6e, 0x85, 0x81),
    Color32::from_rgb(0xfe, 0xff, 0x50),
    Color32::from_rgb(0xff, 0xba, 0x50),
    Color32::from_rgb(0x00, 0x00, 0x00),
];

/// Preset swatches plus the free color picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    swatches: Vec<Color32>,
    defaults: Vec<Color32>,
    picker: Color32,
    picker_default: Color32,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(DEFAULT_SWATCHES.to_vec(), Color32::WHITE)
    }
}

impl Palette {
    pub fn new(swatches: Vec<Color32>, picker: Color32) -> Self {
        Self {
            defaults: swatches.clone(),
            swatches,
            picker,
            picker_default: picker,
        }
    }

    pub fn swatches(&self) -> &[Color32] {
        &self.swatches
    }

    pub fn swatch(&self, index: usize) -> Option<Color32> {
        self.swatches.get(index).copied()
    }

    pub fn picker(&self) -> Color32 {
        self.picker
    }

    pub fn set_picker(&mut self, color: Color32) {
        self.picker = color;
    }

    /// Store the picker's value in swatch `index` and return it
    pub fn assign_picker_to(&mut self, index: usize) -> Option<Color32> {
        let picker = self.picker;
        let slot = self.swatches.get_mut(index)?;
        *slot = picker;
        Some(picker)
    }

    pub fn reset(&mut self) {
        self.swatches.clone_from(&self.defaults);
        self.picker = self.picker_default;
    }
}
