use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;

/// Padding added around detected content unless overridden.
pub const DEFAULT_PADDING: u32 = 20;

/// Per-channel remap of the background difference: `clamp(diff * gain + offset, 0, 255)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContrastStretch {
    pub gain: f32,
    pub offset: f32,
}

impl ContrastStretch {
    #[inline]
    pub fn apply(&self, diff: u8) -> u8 {
        (diff as f32 * self.gain + self.offset).clamp(0.0, 255.0) as u8
    }
}

impl Default for ContrastStretch {
    /// Summing the difference with itself, halving, then subtracting 100:
    /// only channel differences above 100 count as content.
    fn default() -> Self {
        Self {
            gain: 1.0,
            offset: -100.0,
        }
    }
}

/// Crop parameters suitable for preset files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropParams {
    /// Margin in pixels added on every side of the content box
    pub padding: u32,
    /// None disables noise suppression: any difference counts as content
    pub contrast: Option<ContrastStretch>,
}

impl Default for CropParams {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING,
            contrast: Some(ContrastStretch::default()),
        }
    }
}

impl CropParams {
    /// Load a preset. Leading `//` header lines are skipped; JSON starts at the first `{`.
    pub fn load_preset(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let json = content.find('{').map_or(content.as_str(), |i| &content[i..]);
        let params: CropParams = serde_json::from_str(json)?;
        info!("Preset loaded from: {:?}", path);
        Ok(params)
    }

    pub fn save_preset(&self, path: &Path) -> Result<()> {
        let mut content = String::new();
        content.push_str("// trimbox crop preset\n");
        content.push_str(&format!("// Version: {}\n\n", env!("CARGO_PKG_VERSION")));
        content.push_str(&serde_json::to_string_pretty(self)?);
        content.push('\n');
        fs::write(path, content)?;
        info!("Preset saved to: {:?}", path);
        Ok(())
    }
}
