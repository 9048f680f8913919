use std::time::Instant;

use glam::Vec2;
use lunar_core::{NavRequest, ViewKind, ViewSet};
use winit::{
    event::*,
    event_loop::{ControlFlow, EventLoop},
    keyboard::{Key, NamedKey},
    window::{Window, WindowBuilder},
};

/// Everything the event loop mutates between callbacks.
struct Probe {
    views: ViewSet,
    last_frame: Instant,
    last_title: String,
    /// winit reports position on cursor moves only; button events reuse it.
    cursor: Option<Vec2>,
}

impl Probe {
    fn new(initial: ViewKind, size: Vec2) -> Self {
        let mut views = ViewSet::new(initial);
        views.on_resize(size);
        Self {
            views,
            last_frame: Instant::now(),
            last_title: String::new(),
            cursor: None,
        }
    }

    fn on_cursor_moved(&mut self, pos: Vec2) {
        self.cursor = Some(pos);
        self.views.active_mut().on_pointer_move(pos);
    }

    fn on_cursor_left(&mut self) {
        self.cursor = None;
        self.views.active_mut().on_pointer_leave();
    }

    fn on_left_button(&mut self, state: ElementState) {
        let view = self.views.active_mut();
        match state {
            ElementState::Pressed => {
                if let Some(pos) = self.cursor {
                    if view.on_pointer_down(pos) {
                        log::info!("[mouse] begin pan on {}", view.kind().route());
                    }
                }
            }
            ElementState::Released => view.on_pointer_up(),
        }
    }

    fn on_key(&mut self, key: &Key) {
        let view = self.views.active_mut();
        match key {
            Key::Character(c) => match c.as_str() {
                "+" | "=" => {
                    view.on_zoom_in();
                }
                "-" => {
                    view.on_zoom_out();
                }
                digit => {
                    let Some(index) = digit.parse::<usize>().ok().and_then(|d| d.checked_sub(1))
                    else {
                        return;
                    };
                    let Some(key) = view.overlay_entries().get(index).map(|e| e.key.clone())
                    else {
                        return;
                    };
                    let resource = view.on_select_overlay(&key).to_owned();
                    log::info!("[overlay] {key} -> {resource}");
                }
            },
            Key::Named(NamedKey::Tab) => {
                if let Some(target) = view
                    .navigation_targets()
                    .iter()
                    .copied()
                    .find(|r| matches!(r, NavRequest::Goto(_)))
                {
                    view.request_navigation(target);
                }
            }
            Key::Named(NamedKey::Backspace) => {
                view.request_navigation(NavRequest::Back);
            }
            _ => {}
        }
    }

    fn on_frame(&mut self, window: &Window) {
        let now = Instant::now();
        let dt = now - self.last_frame;
        self.last_frame = now;

        self.views.pump_navigation();
        self.views.active_mut().on_frame(dt);

        let title = self.title();
        if title != self.last_title {
            window.set_title(&title);
            self.last_title = title;
        }
    }

    fn title(&self) -> String {
        let view = self.views.active();
        let coord = match view.current_coordinate() {
            Some(c) => format!("Latitude: {:.2}  Longitude: {:.2}", c.latitude, c.longitude),
            None => "-".to_string(),
        };
        let t = view.current_transform();
        format!(
            "{} | {} | zoom {} pan ({:.0},{:.0})",
            view.kind().label(),
            coord,
            t.scale,
            t.translate.x,
            t.translate.y
        )
    }
}

fn initial_view() -> ViewKind {
    let Some(route) = std::env::args().nth(1) else {
        return ViewKind::Globe;
    };
    ViewKind::from_route(&route).unwrap_or_else(|e| {
        log::warn!("{e}; starting on the globe");
        ViewKind::Globe
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Lunar explorer (native)")
        .build(&event_loop)?;

    let size = window.inner_size();
    let mut probe = Probe::new(
        initial_view(),
        Vec2::new(size.width as f32, size.height as f32),
    );
    log::info!("[view] initial {}", probe.views.active_kind().route());
    if let Some(g) = probe.views.get(ViewKind::Globe).graticule() {
        log::info!("[globe] graticule {} vertices", g.vertex_count());
    }

    event_loop.run(move |event, elwt| {
        elwt.set_control_flow(ControlFlow::Poll);
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::Resized(size) => probe
                    .views
                    .on_resize(Vec2::new(size.width as f32, size.height as f32)),
                WindowEvent::CursorMoved { position, .. } => {
                    probe.on_cursor_moved(Vec2::new(position.x as f32, position.y as f32))
                }
                WindowEvent::CursorLeft { .. } => probe.on_cursor_left(),
                WindowEvent::MouseInput {
                    state,
                    button: MouseButton::Left,
                    ..
                } => probe.on_left_button(state),
                WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                    probe.on_key(&event.logical_key)
                }
                _ => {}
            },
            Event::AboutToWait => probe.on_frame(&window),
            _ => {}
        }
    })?;
    Ok(())
}
