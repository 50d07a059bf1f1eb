// Color palette for chart series
use super::error::ChartError;

pub const DEFAULT_COLORS: &[&str] = &[
    "#F2994A", "#4E74F8", "#7DC56B", "#F16E6E", "#8B72E0", "#2CA3A3", "#E6B32E", "#D96BB2",
    "#5EB7E9", "#A0A06B", "#EB7C4B", "#6B8EA0",
];

/// Ordered color list looked up by series index. Lookups past the end wrap
/// around to the start.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    pub fn new(colors: Vec<String>) -> Result<Self, ChartError> {
        if colors.is_empty() {
            return Err(ChartError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    pub fn color(&self, index: usize) -> &str {
        &self.colors[index % self.colors.len()]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.iter().map(|c| c.to_string()).collect(),
        }
    }
}
