use anyhow::{Context, Result};
use castlewalk_common::GameConfig;
use castlewalk_input::{Direction, KeyBindings};
use castlewalk_kernel::{FrameLoop, Simulation};
use castlewalk_mapgen::DoorPlan;
use castlewalk_render::{RenderView, Renderer, SceneGraph};
use castlewalk_render_wgpu::{WgpuFrame, WgpuRenderer};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{CursorGrabMode, Window, WindowId};

#[derive(Parser)]
#[command(name = "castlewalk-desktop", about = "Walk through a small procedural castle")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// YAML file overriding the stock dimensions
    #[arg(long)]
    config: Option<PathBuf>,

    /// Give each room one door chosen from this seed
    #[arg(long)]
    seed: Option<u64>,
}

type Sim = Simulation<KeyCode>;

fn key_bindings() -> KeyBindings<KeyCode> {
    KeyBindings::new(KeyCode::KeyW, KeyCode::KeyS, KeyCode::KeyA, KeyCode::KeyD)
        .bind(KeyCode::ArrowUp, Direction::Forward)
        .bind(KeyCode::ArrowDown, Direction::Back)
        .bind(KeyCode::ArrowLeft, Direction::Left)
        .bind(KeyCode::ArrowRight, Direction::Right)
}

/// Window, surface, and device, created once the event loop resumes.
struct GpuState {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    renderer: WgpuRenderer,
}

impl GpuState {
    fn new(event_loop: &ActiveEventLoop, scene: &SceneGraph) -> Result<Self> {
        let attrs = Window::default_attributes()
            .with_title("Castlewalk")
            .with_inner_size(PhysicalSize::new(1280u32, 720));
        let window = Arc::new(event_loop.create_window(attrs).context("create window")?);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance
            .create_surface(window.clone())
            .context("create surface")?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .context("no compatible GPU adapter")?;

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("castlewalk_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))
        .context("create device")?;

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .context("surface reports no formats")?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let mut renderer = WgpuRenderer::new(&device, surface_format, config.width, config.height);
        renderer.upload_scene(&device, scene);

        tracing::info!(
            "GPU initialized with {} backend",
            adapter.get_info().backend.to_str()
        );

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            renderer,
        })
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        self.config.width = size.width.max(1);
        self.config.height = size.height.max(1);
        self.surface.configure(&self.device, &self.config);
        self.renderer
            .resize(&self.device, self.config.width, self.config.height);
    }

    fn present(&mut self, scene: &SceneGraph, view: &RenderView) {
        let output = match self.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                return;
            }
            Err(e) => {
                tracing::error!("surface error: {e}");
                return;
            }
        };
        let target = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        WgpuFrame {
            renderer: &self.renderer,
            device: &self.device,
            queue: &self.queue,
            target: &target,
        }
        .render(scene, view);

        output.present();
    }

    /// Try to lock the cursor, falling back to confining it.
    fn grab_cursor(&self) -> bool {
        let grabbed = self
            .window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| self.window.set_cursor_grab(CursorGrabMode::Confined));
        match grabbed {
            Ok(()) => {
                self.window.set_cursor_visible(false);
                true
            }
            Err(e) => {
                tracing::warn!("cursor grab refused: {e}");
                false
            }
        }
    }

    fn release_cursor(&self) {
        if let Err(e) = self.window.set_cursor_grab(CursorGrabMode::None) {
            tracing::debug!("cursor release failed: {e}");
        }
        self.window.set_cursor_visible(true);
    }
}

struct CastleApp {
    sim: Sim,
    frame_loop: FrameLoop<Sim>,
    scene: SceneGraph,
    gpu: Option<GpuState>,
}

impl CastleApp {
    fn new(sim: Sim, scene: SceneGraph) -> Self {
        let mut frame_loop = FrameLoop::new();
        frame_loop.on_update(|sim: &mut Sim, dt| {
            sim.step(dt);
        });
        Self {
            sim,
            frame_loop,
            scene,
            gpu: None,
        }
    }

    fn request_capture(&mut self) {
        if self.sim.input().is_captured() {
            return;
        }
        self.sim.input_mut().request_capture();
        let Some(gpu) = &self.gpu else {
            return;
        };
        if gpu.grab_cursor() {
            self.sim.input_mut().capture_engaged();
        } else {
            self.sim.input_mut().capture_lost();
        }
    }

    fn release_capture(&mut self) {
        if let Some(gpu) = &self.gpu {
            gpu.release_cursor();
        }
        self.sim.input_mut().capture_lost();
    }

    fn redraw(&mut self) {
        let gpu = &mut self.gpu;
        let scene = &self.scene;
        self.frame_loop.tick(Instant::now(), &mut self.sim, |sim| {
            if let Some(gpu) = gpu {
                gpu.present(scene, &RenderView::from_player(sim.player()));
                gpu.window.request_redraw();
            }
        });

        let frames = self.frame_loop.frames();
        if frames % 600 == 0 {
            let p = self.sim.player().position;
            tracing::debug!(
                frames,
                fps = self.frame_loop.timer().fps(),
                x = p.x,
                z = p.z,
                "frame stats"
            );
        }
    }
}

impl ApplicationHandler for CastleApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gpu.is_some() {
            return;
        }
        match GpuState::new(event_loop, &self.scene) {
            Ok(gpu) => self.gpu = Some(gpu),
            Err(e) => {
                tracing::error!("failed to start renderer: {e:#}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(new_size);
                }
            }
            WindowEvent::Focused(false) => {
                self.release_capture();
                self.sim.input_mut().release_all();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: key_state,
                        ..
                    },
                ..
            } => {
                let pressed = key_state == ElementState::Pressed;
                if key == KeyCode::Escape {
                    if pressed {
                        self.release_capture();
                    }
                    return;
                }
                self.sim.input_mut().key(key, pressed);
            }
            WindowEvent::MouseInput {
                button: MouseButton::Left,
                state: ElementState::Pressed,
                ..
            } => {
                self.request_capture();
            }
            WindowEvent::RedrawRequested => {
                self.redraw();
            }
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.sim
                .input_mut()
                .mouse_motion(delta.0 as f32, delta.1 as f32);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(gpu) = &self.gpu {
            gpu.window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    tracing::info!(
        backend = castlewalk_render_wgpu::crate_info(),
        "castlewalk-desktop starting"
    );

    let config = GameConfig::load_or_default(cli.config.as_deref())?;
    let plan = cli.seed.map_or(DoorPlan::Baseline, DoorPlan::Seeded);

    let mut scene = SceneGraph::new();
    let map = castlewalk_mapgen::build_castle_with(&mut scene, &config.map, plan)?;
    let sim = Simulation::new(config, map.colliders, key_bindings(), map.spawn);

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = CastleApp::new(sim, scene);
    event_loop.run_app(&mut app)?;

    Ok(())
}
