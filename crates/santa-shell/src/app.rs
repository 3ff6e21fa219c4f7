use anyhow::Result;
use santa_config::{SantaConfig, TextConfig};
use santa_core::dpi::sanitize_scale_factor;
use santa_core::{Color, Compositor, FontdueProvider, HitIndex, Rasterizer, TextProvider, Viewport, wgpu};
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, MouseButton};

use crate::panel::{BACKGROUND, Hit, PanelLayout, paint_frame};
use crate::shell::{ControlEvent, Shell};
use crate::ui::{KeyInput, UiState};
use crate::window::{EventHandler, WindowCtx};

/// Parse the configured swatches, dropping entries that are not colors.
pub fn parse_swatches(entries: &[String]) -> Vec<Color> {
    entries
        .iter()
        .filter_map(|s| match Color::parse(s) {
            Ok(c) => Some(c),
            Err(e) => {
                log::warn!("skipping swatch: {e}");
                None
            }
        })
        .collect()
}

fn load_text_provider(config: &TextConfig) -> Option<FontdueProvider> {
    if let Some(path) = &config.font {
        match FontdueProvider::from_path(path) {
            Ok(p) => return Some(p),
            Err(e) => log::warn!("failed to load font {}: {e:#}; trying system fonts", path.display()),
        }
    }
    match FontdueProvider::from_system_fonts() {
        Ok(p) => Some(p),
        Err(e) => {
            log::warn!("no usable font, labels will not be drawn: {e:#}");
            None
        }
    }
}

/// Window-side driver of one customizer session.
pub struct SantaApp {
    config: SantaConfig,
    shell: Shell,
    ui: UiState,
    text: Option<FontdueProvider>,
    compositor: Option<Compositor>,
    layout: PanelLayout,
    hits: HitIndex,
    scale_factor: f32,
}

impl SantaApp {
    pub fn new(config: SantaConfig) -> Self {
        let mut shell = Shell::new(parse_swatches(&config.panel.swatches));
        shell.set_observer(|from, to| log::trace!("phase {from:?} -> {to:?}"));
        let layout = PanelLayout::compute(
            [config.window.width as f32, config.window.height as f32],
            config.panel.sidebar_width,
            config.text.size,
            shell.color_picker().swatches().len(),
        );
        Self {
            text: load_text_provider(&config.text),
            config,
            shell,
            ui: UiState::default(),
            compositor: None,
            layout,
            hits: HitIndex::default(),
            scale_factor: 1.0,
        }
    }

    fn relayout(&mut self, size: PhysicalSize<u32>, scale_factor: f64) {
        self.scale_factor = sanitize_scale_factor(scale_factor as f32);
        let logical = [
            size.width as f32 / self.scale_factor,
            size.height as f32 / self.scale_factor,
        ];
        self.layout = PanelLayout::compute(
            logical,
            self.config.panel.sidebar_width,
            self.config.text.size,
            self.shell.color_picker().swatches().len(),
        );
    }

    fn apply(&mut self, event: ControlEvent) {
        match self.shell.handle(event) {
            Ok(true) => log::debug!("figure re-rendered ({} total)", self.shell.render_count()),
            Ok(false) => {}
            Err(e) => log::warn!("{e}; keeping the current figure"),
        }
    }

    fn slider_fraction_at_physical(&self, x: f32) -> f32 {
        self.layout.slider_fraction_at(x / self.scale_factor)
    }
}

impl EventHandler for SantaApp {
    fn init(&mut self, ctx: &mut WindowCtx) -> Result<()> {
        self.compositor = Some(Compositor::new(ctx.device_arc(), ctx.surface_config().format));
        self.relayout(ctx.size(), ctx.scale_factor());
        self.apply(ControlEvent::Load);
        Ok(())
    }

    fn on_resize(&mut self, ctx: &mut WindowCtx, size: PhysicalSize<u32>) -> Result<()> {
        self.relayout(size, ctx.scale_factor());
        ctx.request_redraw();
        Ok(())
    }

    fn on_scale_factor_changed(&mut self, ctx: &mut WindowCtx, scale_factor: f64) -> Result<()> {
        self.relayout(ctx.size(), scale_factor);
        ctx.request_redraw();
        Ok(())
    }

    fn on_mouse_move(&mut self, ctx: &mut WindowCtx, pos: [f32; 2]) -> Result<()> {
        if self.ui.dragging {
            let t = self.slider_fraction_at_physical(pos[0]);
            self.apply(ControlEvent::BeardWidthFraction(t));
            ctx.request_redraw();
        }
        Ok(())
    }

    fn on_mouse_input(&mut self, ctx: &mut WindowCtx, state: ElementState, button: MouseButton) -> Result<()> {
        if button != MouseButton::Left {
            return Ok(());
        }
        if state == ElementState::Released {
            self.ui.dragging = false;
            return Ok(());
        }

        let pos = ctx.mouse_pos();
        match self.hits.topmost_at(pos).and_then(|h| Hit::from_region(h.region_id)) {
            Some(Hit::Swatch(i)) => {
                self.ui.blur();
                self.apply(ControlEvent::SuitSwatch(i));
            }
            Some(Hit::HexField) => {
                let current = self.shell.color_picker().value().to_hex();
                self.ui.focus_hex(&current);
            }
            Some(Hit::SliderTrack) => {
                self.ui.focus_slider();
                let t = self.slider_fraction_at_physical(pos[0]);
                self.apply(ControlEvent::BeardWidthFraction(t));
            }
            None => self.ui.blur(),
        }
        ctx.request_redraw();
        Ok(())
    }

    fn on_key(&mut self, ctx: &mut WindowCtx, key: KeyInput) -> Result<()> {
        let slider = self.shell.slider();
        let bounds = (slider.min(), slider.max());
        if let Some(event) = self.ui.on_key(&key, bounds) {
            let submitted = matches!(event, ControlEvent::SuitColor(_));
            match self.shell.handle(event) {
                Ok(changed) => {
                    if changed {
                        log::debug!("figure re-rendered ({} total)", self.shell.render_count());
                    }
                    if submitted {
                        self.ui.blur();
                    }
                }
                // The draft stays focused so it can be corrected.
                Err(e) => log::warn!("{e}; keeping the current figure"),
            }
        }
        ctx.request_redraw();
        Ok(())
    }

    fn on_redraw(&mut self, ctx: &mut WindowCtx) -> Result<()> {
        let size = ctx.size();
        if size.width == 0 || size.height == 0 {
            return Ok(());
        }
        let Some(compositor) = self.compositor.as_mut() else {
            return Ok(());
        };

        let viewport = Viewport {
            width: size.width,
            height: size.height,
        };
        let list = paint_frame(
            &self.shell,
            &self.ui,
            &self.layout,
            viewport,
            self.scale_factor,
            self.text.as_ref().map(|p| p as &dyn TextProvider),
        );
        self.hits = HitIndex::build(&list);

        let mut rasterizer = Rasterizer::new(BACKGROUND);
        if let Some(provider) = self.text.as_ref() {
            rasterizer = rasterizer.with_text_provider(provider);
        }
        let pixmap = rasterizer.rasterize(&list)?;

        let frame = match ctx.acquire_current_frame() {
            Ok(frame) => frame,
            Err(e) => {
                log::warn!("surface unavailable ({e}); reconfiguring");
                ctx.reconfigure_surface();
                ctx.request_redraw();
                return Ok(());
            }
        };
        compositor.upload(ctx.queue(), size.width, size.height, pixmap.data());

        let view = frame.texture.create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = ctx.device().create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("santa-frame"),
        });
        compositor.render(&mut encoder, &view, wgpu::Color::WHITE);
        ctx.queue().submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
