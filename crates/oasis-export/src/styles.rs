use oasis_instruments::scoring::Severity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `RRGGBB`, as used by OOXML run colors.
    pub fn hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Components scaled to 0.0–1.0.
    pub fn fractions(&self) -> (f32, f32, f32) {
        (
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        )
    }
}

/// Document styling and branding for exports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStyles {
    /// First line of the header band.
    pub brand_title: String,

    /// Second line of the header band.
    pub report_title: String,

    /// Title size in points.
    pub title_size: usize,

    /// Section header size in points.
    pub section_size: usize,

    /// Body text size in points.
    pub body_size: usize,

    /// Footer size in points.
    pub footer_size: usize,

    pub header_band: Rgb,
    pub section_band: Rgb,
    /// Badge color for `normal` severity.
    pub affirmative: Rgb,
    /// Badge color for `attention-needed` severity.
    pub alert: Rgb,
    pub footer_text: Rgb,
}

impl DocumentStyles {
    pub fn badge_color(&self, severity: Severity) -> Rgb {
        match severity {
            Severity::Normal => self.affirmative,
            Severity::AttentionNeeded => self.alert,
        }
    }
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            brand_title: "OÁSIS CT - SISTEMA DE AVALIAÇÃO FÍSICO FUNCIONAL".to_string(),
            report_title: "RELATÓRIO DE AVALIAÇÃO".to_string(),
            title_size: 16,
            section_size: 12,
            body_size: 10,
            footer_size: 8,
            header_band: Rgb::new(255, 193, 7),
            section_band: Rgb::new(240, 240, 240),
            affirmative: Rgb::new(0, 128, 0),
            alert: Rgb::new(255, 0, 0),
            footer_text: Rgb::new(100, 100, 100),
        }
    }
}
