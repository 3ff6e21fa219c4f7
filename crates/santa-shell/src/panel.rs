//! Side panel with the controls, main panel with the titled figure.
//!
//! Layout is computed in logical pixels; [`paint_frame`] scales everything to
//! physical pixels through the painter's root transform, so hit regions in the
//! resulting display list are tested against physical cursor positions.

use santa_core::{
    Brush, Color, DisplayList, Painter, Rect, Stroke, TextProvider, TextRun, Transform2D, Viewport,
};
use santa_figure::{FigureView, TitleStyle};

use crate::shell::Shell;
use crate::ui::{Focus, UiState};

pub const SIDEBAR_HEADER: &str = "Santa Customizer";
pub const PAGE_HEADER: &str = "Interactive Santa Claus";

pub const BACKGROUND: Color = Color::WHITE;
const SIDEBAR_BG: Color = Color::rgb(0xf0, 0xf2, 0xf6);
const TEXT: Color = Color::rgb(0x31, 0x33, 0x3f);
const MUTED: Color = Color::rgb(0x80, 0x84, 0x95);
const TRACK: Color = Color::rgb(0xd5, 0xd8, 0xe0);
const ACCENT: Color = Color::rgb(0xff, 0x4b, 0x4b);
const FIELD_BG: Color = Color::WHITE;
const FOCUS_RING: Color = Color::rgb(0x4b, 0x7b, 0xff);

const PAD: f32 = 20.0;
const SWATCH_COLUMNS: usize = 6;
const SWATCH_GAP: f32 = 8.0;
const FIELD_HEIGHT: f32 = 34.0;
const TRACK_HEIGHT: f32 = 6.0;
const TRACK_HIT_HEIGHT: f32 = 28.0;
const KNOB_RADIUS: f32 = 9.0;

const REGION_HEX_FIELD: u32 = 1;
const REGION_SLIDER_TRACK: u32 = 2;
const REGION_SWATCH_BASE: u32 = 100;

// Z bands keep panel chrome, figure shapes and overlays apart.
const Z_BACKGROUND: i32 = 0;
const Z_CONTROLS: i32 = 10;
const Z_CONTROL_OVERLAY: i32 = 20;
const Z_FIGURE: i32 = 100;
const Z_HITS: i32 = 1000;

/// What a pointer position refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hit {
    Swatch(usize),
    HexField,
    SliderTrack,
}

impl Hit {
    pub fn from_region(id: u32) -> Option<Self> {
        match id {
            REGION_HEX_FIELD => Some(Hit::HexField),
            REGION_SLIDER_TRACK => Some(Hit::SliderTrack),
            id if id >= REGION_SWATCH_BASE => Some(Hit::Swatch((id - REGION_SWATCH_BASE) as usize)),
            _ => None,
        }
    }

    fn region(self) -> u32 {
        match self {
            Hit::HexField => REGION_HEX_FIELD,
            Hit::SliderTrack => REGION_SLIDER_TRACK,
            Hit::Swatch(i) => REGION_SWATCH_BASE + i as u32,
        }
    }
}

/// Logical-pixel geometry of every panel element.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelLayout {
    pub size: [f32; 2],
    pub text_size: f32,
    pub sidebar: Rect,
    pub sidebar_header: [f32; 2],
    pub color_label: [f32; 2],
    pub swatches: Vec<Rect>,
    pub hex_field: Rect,
    pub slider_label: [f32; 2],
    pub slider_track: Rect,
    pub slider_hit: Rect,
    pub range_labels: [f32; 2],
    pub main: Rect,
    pub page_header: [f32; 2],
    pub figure_area: Rect,
}

impl PanelLayout {
    /// Compute the layout for a logical viewport of `size`.
    pub fn compute(size: [f32; 2], sidebar_width: f32, text_size: f32, swatch_count: usize) -> Self {
        let [width, height] = size;
        let sidebar_w = sidebar_width.min(width * 0.5).max(160.0);
        let sidebar = Rect::new(0.0, 0.0, sidebar_w, height);
        let inner_w = sidebar_w - 2.0 * PAD;
        let line = text_size * 1.6;

        let sidebar_header = [PAD, PAD + text_size * 1.3];
        let color_label = [PAD, sidebar_header[1] + line * 1.5];

        let cell = ((inner_w - SWATCH_GAP * (SWATCH_COLUMNS as f32 - 1.0)) / SWATCH_COLUMNS as f32).max(8.0);
        let grid_top = color_label[1] + text_size * 0.8;
        let swatches: Vec<Rect> = (0..swatch_count)
            .map(|i| {
                let col = (i % SWATCH_COLUMNS) as f32;
                let row = (i / SWATCH_COLUMNS) as f32;
                Rect::new(PAD + col * (cell + SWATCH_GAP), grid_top + row * (cell + SWATCH_GAP), cell, cell)
            })
            .collect();
        let rows = swatch_count.div_ceil(SWATCH_COLUMNS) as f32;
        let grid_bottom = grid_top + rows * cell + (rows - 1.0).max(0.0) * SWATCH_GAP;

        let hex_field = Rect::new(PAD, grid_bottom + 12.0, inner_w, FIELD_HEIGHT);

        let slider_label = [PAD, hex_field.y + hex_field.h + line * 1.5];
        let track_y = slider_label[1] + text_size * 1.4;
        let slider_track = Rect::new(PAD + KNOB_RADIUS, track_y, inner_w - 2.0 * KNOB_RADIUS, TRACK_HEIGHT);
        let slider_hit = Rect::new(
            slider_track.x,
            track_y + TRACK_HEIGHT * 0.5 - TRACK_HIT_HEIGHT * 0.5,
            slider_track.w,
            TRACK_HIT_HEIGHT,
        );
        let range_labels = [PAD, track_y + TRACK_HEIGHT + text_size * 1.6];

        let main = Rect::new(sidebar_w, 0.0, (width - sidebar_w).max(0.0), height);
        let page_header = [main.x + 2.0 * PAD, PAD + text_size * 2.0];
        let title_room = text_size * 2.6;
        let area_top = page_header[1] + text_size + title_room;
        let figure_area = Rect::new(
            main.x + 2.0 * PAD,
            area_top,
            (main.w - 4.0 * PAD).max(0.0),
            (height - area_top - PAD).max(0.0),
        );

        Self {
            size,
            text_size,
            sidebar,
            sidebar_header,
            color_label,
            swatches,
            hex_field,
            slider_label,
            slider_track,
            slider_hit,
            range_labels,
            main,
            page_header,
            figure_area,
        }
    }

    /// Track fraction under a logical x coordinate, clamped to [0, 1].
    pub fn slider_fraction_at(&self, x: f32) -> f32 {
        if self.slider_track.w <= 0.0 {
            return 0.0;
        }
        ((x - self.slider_track.x) / self.slider_track.w).clamp(0.0, 1.0)
    }
}

fn solid(c: Color) -> Brush {
    Brush::Solid(c.to_lin_premul())
}

fn text(painter: &mut Painter, s: &str, pos: [f32; 2], size: f32, color: Color, z: i32) {
    painter.text(
        TextRun {
            text: s.to_string(),
            pos,
            size,
            color: color.to_lin_premul(),
        },
        z,
    );
}

fn text_width(provider: Option<&dyn TextProvider>, s: &str, size: f32) -> f32 {
    provider
        .map(|p| p.measure(s, size))
        .unwrap_or(s.chars().count() as f32 * size * 0.55)
}

/// Build the whole window's display list for the current session state.
pub fn paint_frame(
    shell: &Shell,
    ui: &UiState,
    layout: &PanelLayout,
    viewport: Viewport,
    scale_factor: f32,
    provider: Option<&dyn TextProvider>,
) -> DisplayList {
    let mut painter = Painter::begin_frame(viewport);
    painter.push_transform(Transform2D::scale(scale_factor, scale_factor));

    paint_sidebar(&mut painter, shell, ui, layout, provider);
    paint_main(&mut painter, shell, layout, provider);

    for (i, r) in layout.swatches.iter().enumerate() {
        painter.hit_region_rect(Hit::Swatch(i).region(), *r, Z_HITS);
    }
    painter.hit_region_rect(Hit::HexField.region(), layout.hex_field, Z_HITS);
    painter.hit_region_rect(Hit::SliderTrack.region(), layout.slider_hit, Z_HITS);

    painter.pop_transform();
    painter.finish()
}

fn paint_sidebar(
    painter: &mut Painter,
    shell: &Shell,
    ui: &UiState,
    layout: &PanelLayout,
    provider: Option<&dyn TextProvider>,
) {
    let ts = layout.text_size;
    painter.rect(layout.sidebar, solid(SIDEBAR_BG), Z_BACKGROUND);
    text(painter, SIDEBAR_HEADER, layout.sidebar_header, ts * 1.3, TEXT, Z_CONTROLS);

    // Color picker.
    let picker = shell.color_picker();
    text(painter, picker.label(), layout.color_label, ts, TEXT, Z_CONTROLS);
    let selected = picker.selected_swatch();
    for (i, (r, c)) in layout.swatches.iter().zip(picker.swatches()).enumerate() {
        painter.rect(*r, solid(*c), Z_CONTROLS);
        if selected == Some(i) {
            let ring = if c.luminance() > 0.6 { TEXT } else { Color::WHITE };
            let inset = Rect::new(r.x + 3.0, r.y + 3.0, r.w - 6.0, r.h - 6.0);
            painter.stroke_rect(inset, Stroke { width: 2.0 }, solid(ring), Z_CONTROL_OVERLAY);
        }
    }

    let field = layout.hex_field;
    let focused = ui.focus == Some(Focus::HexField);
    painter.rect(field, solid(FIELD_BG), Z_CONTROLS);
    painter.stroke_rect(
        field,
        Stroke { width: if focused { 2.0 } else { 1.0 } },
        solid(if focused { FOCUS_RING } else { TRACK }),
        Z_CONTROL_OVERLAY,
    );
    let chip = Rect::new(field.x + 6.0, field.y + 6.0, field.h - 12.0, field.h - 12.0);
    painter.rect(chip, solid(picker.value()), Z_CONTROL_OVERLAY);
    let shown = if focused {
        format!("{}|", ui.hex_draft)
    } else {
        picker.value().to_hex()
    };
    let baseline = field.y + field.h * 0.5 + ts * 0.35;
    text(painter, &shown, [chip.x + chip.w + 10.0, baseline], ts, TEXT, Z_CONTROL_OVERLAY);

    // Slider.
    let slider = shell.slider();
    text(painter, slider.label(), layout.slider_label, ts, TEXT, Z_CONTROLS);
    let value = slider.display_value();
    let value_w = text_width(provider, &value, ts);
    let value_x = layout.sidebar.w - PAD - value_w;
    text(painter, &value, [value_x, layout.slider_label[1]], ts, ACCENT, Z_CONTROLS);

    let track = layout.slider_track;
    painter.rect(track, solid(TRACK), Z_CONTROLS);
    let filled_w = track.w * slider.fraction();
    painter.rect(Rect::new(track.x, track.y, filled_w, track.h), solid(ACCENT), Z_CONTROL_OVERLAY);
    let knob = [track.x + filled_w, track.y + track.h * 0.5];
    if ui.focus == Some(Focus::Slider) {
        painter.circle(knob, KNOB_RADIUS + 3.0, solid(FOCUS_RING), Z_CONTROL_OVERLAY);
    }
    painter.circle(knob, KNOB_RADIUS, solid(ACCENT), Z_CONTROL_OVERLAY + 1);

    let min = format!("{:.1}", slider.min());
    let max = format!("{:.1}", slider.max());
    let small = ts * 0.85;
    text(painter, &min, layout.range_labels, small, MUTED, Z_CONTROLS);
    let max_x = layout.sidebar.w - PAD - text_width(provider, &max, small);
    text(painter, &max, [max_x, layout.range_labels[1]], small, MUTED, Z_CONTROLS);
}

fn paint_main(painter: &mut Painter, shell: &Shell, layout: &PanelLayout, provider: Option<&dyn TextProvider>) {
    let ts = layout.text_size;
    text(painter, PAGE_HEADER, layout.page_header, ts * 1.8, TEXT, Z_CONTROLS);

    let Some(figure) = shell.figure() else {
        return;
    };
    let view = FigureView::fit(figure.bounds(), layout.figure_area);
    view.paint(
        figure,
        painter,
        Z_FIGURE,
        Some(TitleStyle {
            size: ts * 1.2,
            color: TEXT,
            gap: ts * 0.8,
            measure: provider,
        }),
    );
}
