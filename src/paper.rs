//! Physical paper sizes and page orientation.

use serde::{Deserialize, Serialize};

use crate::cover::CoverMode;

/// A sheet size in millimeters, portrait unless swapped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaperSize {
    pub name: String,
    pub width_mm: f64,
    pub height_mm: f64,
}

impl PaperSize {
    pub fn new(name: impl Into<String>, width_mm: f64, height_mm: f64) -> Self {
        Self {
            name: name.into(),
            width_mm,
            height_mm,
        }
    }

    /// A0-A6 and B0-B6 in portrait, derived from A0/B0 by repeated halving
    /// and rounded down to whole millimeters.
    pub fn presets() -> Vec<PaperSize> {
        let series = [("A", 841.0, 1189.0), ("B", 1000.0, 1414.0)];
        series
            .iter()
            .flat_map(|&(prefix, w0, h0)| {
                (0..=6).map(move |n| {
                    let factor = 2f64.powf(f64::from(n) / 2.0);
                    PaperSize::new(
                        format!("{prefix}{n}"),
                        (w0 / factor).floor(),
                        (h0 / factor).floor(),
                    )
                })
            })
            .collect()
    }

    /// Look up a preset by name, ignoring case.
    pub fn preset(name: &str) -> Option<PaperSize> {
        Self::presets()
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// The preset with exactly these portrait dimensions, if any.
    pub fn matching_preset(width_mm: f64, height_mm: f64) -> Option<PaperSize> {
        Self::presets()
            .into_iter()
            .find(|p| p.width_mm == width_mm && p.height_mm == height_mm)
    }

    /// Same sheet turned sideways.
    pub fn swapped(&self) -> PaperSize {
        PaperSize::new(self.name.clone(), self.height_mm, self.width_mm)
    }
}

impl Default for PaperSize {
    fn default() -> Self {
        PaperSize::new("A4", 210.0, 297.0)
    }
}

/// How sheets are oriented along the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
    /// Choose portrait or landscape per page, whichever covers more route.
    Mixed,
}

impl Orientation {
    /// Paper as laid out for the first choice of this orientation.
    pub fn apply(&self, paper: &PaperSize) -> PaperSize {
        match self {
            Orientation::Landscape => paper.swapped(),
            Orientation::Portrait | Orientation::Mixed => paper.clone(),
        }
    }

    pub fn cover_mode(&self) -> CoverMode {
        match self {
            Orientation::Mixed => CoverMode::Mixed,
            Orientation::Portrait | Orientation::Landscape => CoverMode::Fixed,
        }
    }
}
