//! winit + wgpu window wrapper.
//!
//! Creates the window, surface and device, keeps the surface configured across
//! resizes, and forwards input to an [`EventHandler`]. The loop waits for events;
//! handlers call [`WindowCtx::request_redraw`] when something changed.

use std::sync::Arc;

use anyhow::{Result, anyhow};
use santa_config::WindowConfig;
use santa_core::{make_surface_config, wgpu};
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{ElementState, Event, MouseButton, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

use crate::events::key_input;
use crate::ui::KeyInput;

struct GpuState {
    // The window is leaked so the surface can borrow it for 'static.
    window: &'static Window,
    _instance: wgpu::Instance,
    surface: wgpu::Surface<'static>,
    _adapter: wgpu::Adapter,
    device: Arc<wgpu::Device>,
    queue: Arc<wgpu::Queue>,
    config: wgpu::SurfaceConfiguration,
    size: PhysicalSize<u32>,
    scale_factor: f64,
    cursor: [f32; 2],
}

impl GpuState {
    fn ctx(&mut self) -> WindowCtx<'_> {
        WindowCtx {
            window: self.window,
            device: &self.device,
            queue: &self.queue,
            surface: &self.surface,
            config: &mut self.config,
            size: self.size,
            scale_factor: self.scale_factor,
            last_cursor_pos: self.cursor,
        }
    }

    fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.size = new_size;
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }
}

pub struct SantaWindow {
    event_loop: EventLoop<()>,
    gpu: GpuState,
}

pub struct WindowCtx<'a> {
    window: &'a Window,
    device: &'a Arc<wgpu::Device>,
    queue: &'a Arc<wgpu::Queue>,
    surface: &'a wgpu::Surface<'static>,
    config: &'a mut wgpu::SurfaceConfiguration,
    size: PhysicalSize<u32>,
    scale_factor: f64,
    last_cursor_pos: [f32; 2],
}

impl<'a> WindowCtx<'a> {
    pub fn device(&self) -> &wgpu::Device { self.device }
    pub fn queue(&self) -> &wgpu::Queue { self.queue }
    pub fn device_arc(&self) -> Arc<wgpu::Device> { self.device.clone() }
    pub fn surface_config(&self) -> &wgpu::SurfaceConfiguration { self.config }
    pub fn size(&self) -> PhysicalSize<u32> { self.size }
    pub fn scale_factor(&self) -> f64 { self.scale_factor }
    /// Last cursor position in physical pixels.
    pub fn mouse_pos(&self) -> [f32; 2] { self.last_cursor_pos }
    pub fn request_redraw(&self) { self.window.request_redraw(); }
    pub fn acquire_current_frame(&self) -> Result<wgpu::SurfaceTexture> {
        Ok(self.surface.get_current_texture()?)
    }
    /// Re-apply the current configuration, e.g. after a lost surface.
    pub fn reconfigure_surface(&self) {
        self.surface.configure(self.device, &*self.config);
    }
}

pub trait EventHandler {
    fn init(&mut self, _ctx: &mut WindowCtx) -> Result<()> { Ok(()) }
    fn on_resize(&mut self, _ctx: &mut WindowCtx, _size: PhysicalSize<u32>) -> Result<()> { Ok(()) }
    /// The surface keeps its physical size; logical geometry changes.
    fn on_scale_factor_changed(&mut self, _ctx: &mut WindowCtx, _scale_factor: f64) -> Result<()> { Ok(()) }
    fn on_mouse_move(&mut self, _ctx: &mut WindowCtx, _pos: [f32; 2]) -> Result<()> { Ok(()) }
    fn on_mouse_input(&mut self, _ctx: &mut WindowCtx, _state: ElementState, _button: MouseButton) -> Result<()> { Ok(()) }
    fn on_key(&mut self, _ctx: &mut WindowCtx, _key: KeyInput) -> Result<()> { Ok(()) }
    fn on_redraw(&mut self, _ctx: &mut WindowCtx) -> Result<()> { Ok(()) }
}

fn report(what: &str, result: Result<()>) {
    if let Err(e) = result {
        log::error!("{what} failed: {e:#}");
    }
}

impl SantaWindow {
    pub fn new(config: &WindowConfig) -> Result<Self> {
        let event_loop = EventLoop::new()?;
        let window = WindowBuilder::new()
            .with_title(&config.title)
            .with_inner_size(LogicalSize::new(config.width, config.height))
            .build(&event_loop)?;
        let window: &'static Window = Box::leak(Box::new(window));

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            force_fallback_adapter: false,
            compatible_surface: Some(&surface),
        }))
        .ok_or_else(|| anyhow!("no suitable GPU adapter found"))?;
        let (device, queue) = pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor::default(), None))?;
        log::info!("using adapter {:?}", adapter.get_info().name);

        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        let surface_config = make_surface_config(&adapter, &surface, size.width, size.height);
        surface.configure(&device, &surface_config);

        Ok(Self {
            event_loop,
            gpu: GpuState {
                window,
                _instance: instance,
                surface,
                _adapter: adapter,
                device: Arc::new(device),
                queue: Arc::new(queue),
                config: surface_config,
                size,
                scale_factor,
                cursor: [0.0, 0.0],
            },
        })
    }

    pub fn run(self, mut handler: impl EventHandler + 'static) -> Result<()> {
        let SantaWindow { event_loop, mut gpu } = self;
        let mut needs_init = true;

        event_loop.run(move |event, elwt| {
            elwt.set_control_flow(ControlFlow::Wait);
            match event {
                Event::Resumed if needs_init => {
                    needs_init = false;
                    let mut ctx = gpu.ctx();
                    report("init", handler.init(&mut ctx));
                    ctx.request_redraw();
                }
                Event::WindowEvent { window_id, event } if window_id == gpu.window.id() => {
                    match event {
                        WindowEvent::CloseRequested => elwt.exit(),
                        WindowEvent::Resized(new_size) => {
                            gpu.resize(new_size);
                            report("resize", handler.on_resize(&mut gpu.ctx(), new_size));
                        }
                        WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                            gpu.scale_factor = scale_factor;
                            report("scale factor", handler.on_scale_factor_changed(&mut gpu.ctx(), scale_factor));
                        }
                        WindowEvent::CursorMoved { position, .. } => {
                            gpu.cursor = [position.x as f32, position.y as f32];
                            let pos = gpu.cursor;
                            report("mouse move", handler.on_mouse_move(&mut gpu.ctx(), pos));
                        }
                        WindowEvent::MouseInput { state, button, .. } => {
                            report("mouse input", handler.on_mouse_input(&mut gpu.ctx(), state, button));
                        }
                        WindowEvent::KeyboardInput { event, .. } => {
                            if let Some(key) = key_input(&event) {
                                report("key", handler.on_key(&mut gpu.ctx(), key));
                            }
                        }
                        WindowEvent::RedrawRequested => {
                            report("redraw", handler.on_redraw(&mut gpu.ctx()));
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        })?;
        Ok(())
    }
}
