//! Text rasterization.
//!
//! Glyph coverage comes from `fontdue`; `fontdb` is used to locate a system
//! sans-serif face when no explicit font file is configured.

use std::path::Path;

use crate::scene::TextRun;

/// A grayscale coverage mask for one glyph, positioned relative to the run origin.
///
/// `offset` is the top-left of the mask in y-down pixels, measured from the run's
/// baseline origin.
#[derive(Clone, Debug, PartialEq)]
pub struct RasterizedGlyph {
    pub offset: [f32; 2],
    pub width: u32,
    pub height: u32,
    pub coverage: Vec<u8>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineMetrics {
    pub ascent: f32,
    pub descent: f32,
    pub line_gap: f32,
}

pub trait TextProvider {
    fn rasterize_run(&self, run: &TextRun) -> Vec<RasterizedGlyph>;

    fn line_metrics(&self, px: f32) -> Option<LineMetrics>;

    /// Advance width of `text` at `px`, used for alignment.
    fn measure(&self, text: &str, px: f32) -> f32;
}

/// Grayscale fontdue provider.
pub struct FontdueProvider {
    font: fontdue::Font,
}

impl FontdueProvider {
    pub fn from_bytes(bytes: &[u8]) -> anyhow::Result<Self> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| anyhow::anyhow!(e))?;
        Ok(Self { font })
    }

    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let bytes = std::fs::read(path)
            .map_err(|e| anyhow::anyhow!("failed to read font {}: {e}", path.display()))?;
        Self::from_bytes(&bytes)
    }

    /// Construct from a reasonable system sans-serif font using `fontdb`.
    pub fn from_system_fonts() -> anyhow::Result<Self> {
        use fontdb::{Database, Family, Query, Source, Stretch, Style, Weight};

        let mut db = Database::new();
        db.load_system_fonts();

        let id = db
            .query(&Query {
                families: &[
                    Family::SansSerif,
                    Family::Name("DejaVu Sans".into()),
                    Family::Name("Segoe UI".into()),
                    Family::Name("Arial".into()),
                ],
                weight: Weight::NORMAL,
                stretch: Stretch::Normal,
                style: Style::Normal,
                ..Query::default()
            })
            .ok_or_else(|| anyhow::anyhow!("no suitable system font found"))?;

        let face = db
            .face(id)
            .ok_or_else(|| anyhow::anyhow!("fontdb face missing for system font id"))?;

        let bytes: Vec<u8> = match &face.source {
            Source::File(path) => std::fs::read(path)?,
            Source::Binary(data) => data.as_ref().as_ref().to_vec(),
            Source::SharedFile(_, data) => data.as_ref().as_ref().to_vec(),
        };

        let font = fontdue::Font::from_bytes(
            bytes,
            fontdue::FontSettings {
                collection_index: face.index,
                ..fontdue::FontSettings::default()
            },
        )
        .map_err(|e| anyhow::anyhow!(e))?;
        Ok(Self { font })
    }
}

impl TextProvider for FontdueProvider {
    fn rasterize_run(&self, run: &TextRun) -> Vec<RasterizedGlyph> {
        use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};
        let px = run.size.max(1.0);
        let mut layout = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[&self.font], &TextStyle::new(&run.text, px, 0));

        // Layout positions are relative to the top of the line; shift so the run's
        // origin sits on the baseline.
        let ascent = self.line_metrics(px).map(|m| m.ascent).unwrap_or(px * 0.8);

        let mut out = Vec::new();
        for g in layout.glyphs() {
            let (metrics, bitmap) = self.font.rasterize_indexed(g.key.glyph_index, g.key.px);
            if metrics.width == 0 || metrics.height == 0 {
                continue;
            }
            out.push(RasterizedGlyph {
                offset: [g.x, g.y - ascent],
                width: metrics.width as u32,
                height: metrics.height as u32,
                coverage: bitmap,
            });
        }
        out
    }

    fn line_metrics(&self, px: f32) -> Option<LineMetrics> {
        self.font.horizontal_line_metrics(px).map(|lm| LineMetrics {
            ascent: lm.ascent,
            // Fontdue reports descent as a negative number; normalize to positive magnitude.
            descent: lm.descent.abs(),
            line_gap: lm.line_gap.max(0.0),
        })
    }

    fn measure(&self, text: &str, px: f32) -> f32 {
        text.chars()
            .map(|ch| self.font.metrics(ch, px.max(1.0)).advance_width)
            .sum()
    }
}
