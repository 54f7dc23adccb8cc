use crate::{Error, Result};
use panelview_core::TextAlign;
use serde::{Deserialize, Serialize};

/// Spoke dash pattern (on, off) in device-independent pixels.
pub const SPOKE_DASH_DP: [f64; 2] = [4.0, 6.0];

/// Colors and dp-scaled widths for one chart. Colors are CSS color strings and are passed
/// through to the drawing backend unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartStyle {
    pub outer_ring_fill: String,
    pub inner_ring_fill: String,
    pub data_fill: String,
    pub data_stroke: String,
    pub text_color: String,
    pub spoke_color: String,
    pub spoke_width_dp: f64,
    /// Pixels per dp.
    pub density: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            outer_ring_fill: "#888888".to_string(),
            inner_ring_fill: "#888888".to_string(),
            data_fill: "#888888".to_string(),
            data_stroke: "#888888".to_string(),
            text_color: "#000000".to_string(),
            spoke_color: "#ffffff".to_string(),
            spoke_width_dp: 1.0,
            density: 1.0,
        }
    }
}

impl ChartStyle {
    pub fn validate(&self) -> Result<()> {
        if !self.density.is_finite() || self.density <= 0.0 {
            return Err(Error::InvalidStyle {
                message: format!("density must be positive, got {}", self.density),
            });
        }
        if !self.spoke_width_dp.is_finite() || self.spoke_width_dp < 0.0 {
            return Err(Error::InvalidStyle {
                message: format!(
                    "spokeWidthDp must not be negative, got {}",
                    self.spoke_width_dp
                ),
            });
        }
        Ok(())
    }

    pub fn dp(&self, value: f64) -> f64 {
        value * self.density
    }

    pub fn spoke_dash(&self) -> [f64; 2] {
        SPOKE_DASH_DP.map(|v| self.dp(v))
    }
}

/// Style of a single shape. Built per primitive; nothing carries over between shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Paint {
    Fill {
        color: String,
    },
    Stroke {
        color: String,
        width: f64,
        dash: Option<[f64; 2]>,
    },
}

impl Paint {
    pub fn fill(color: &str) -> Self {
        Self::Fill {
            color: color.to_string(),
        }
    }

    pub fn stroke(color: &str, width: f64) -> Self {
        Self::Stroke {
            color: color.to_string(),
            width,
            dash: None,
        }
    }

    pub fn dashed(color: &str, width: f64, dash: [f64; 2]) -> Self {
        Self::Stroke {
            color: color.to_string(),
            width,
            dash: Some(dash),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPaint {
    pub color: String,
    pub size: f64,
    pub align: TextAlign,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_scales_with_density() {
        let style = ChartStyle {
            density: 2.5,
            ..ChartStyle::default()
        };
        assert_eq!(style.spoke_dash(), [10.0, 15.0]);
        assert_eq!(ChartStyle::default().spoke_dash(), SPOKE_DASH_DP);
    }

    #[test]
    fn non_positive_density_is_rejected() {
        let style = ChartStyle {
            density: 0.0,
            ..ChartStyle::default()
        };
        assert!(matches!(style.validate(), Err(Error::InvalidStyle { .. })));
        assert!(ChartStyle::default().validate().is_ok());
    }

    #[test]
    fn partial_style_json_keeps_other_defaults() {
        let style: ChartStyle =
            serde_json::from_str(r##"{ "dataFill": "#ff000080", "density": 3 }"##).unwrap();
        assert_eq!(style.data_fill, "#ff000080");
        assert_eq!(style.density, 3.0);
        assert_eq!(style.text_color, "#000000");
    }
}
