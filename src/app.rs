use crate::{config::Config, core::Core, event::UserEvent, window_icon::window_icon};
use anyhow::Result;
use std::time::Instant;
use winit::{
    dpi::{LogicalSize, Size},
    event::{Event, StartCause, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopBuilder},
    window::{Window, WindowBuilder},
};

const TITLE: &str = "Dev Tools";

pub struct App {
    core: Core,
    event_loop: EventLoop<UserEvent>,
    window: Window,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let event_loop = EventLoopBuilder::<UserEvent>::with_user_event().build();

        let window = WindowBuilder::new()
            .with_inner_size(Size::Logical(LogicalSize::new(1024.0, 720.0)))
            .with_min_inner_size(Size::Logical(LogicalSize::new(360.0, 480.0)))
            .with_title(TITLE)
            .with_window_icon(window_icon())
            .build(&event_loop)?;

        let core = Core::new(&event_loop, &window, &config)?;

        Ok(Self {
            core,
            event_loop,
            window,
        })
    }

    pub fn run(self) {
        let Self {
            core,
            event_loop,
            window,
        } = self;

        let mut core = Some(core);

        event_loop.run(move |event, _, control_flow| {
            if let Event::LoopDestroyed = event {
                if let Some(core) = core.take() {
                    core.shutdown();
                }
                return;
            }

            let Some(core) = core.as_mut() else {
                return;
            };

            match event {
                Event::NewEvents(StartCause::Init) => *control_flow = ControlFlow::Wait,
                Event::NewEvents(StartCause::ResumeTimeReached { .. }) => {
                    *control_flow = ControlFlow::Wait;
                    window.request_redraw();
                }
                Event::RedrawRequested(window_id) if window_id == window.id() => {
                    let repaint_after = core.redraw(&window);

                    if repaint_after.is_zero() {
                        window.request_redraw();
                    } else if let Some(deadline) = Instant::now().checked_add(repaint_after) {
                        // Delayed repaints such as tooltips.
                        if *control_flow != ControlFlow::Exit {
                            *control_flow = ControlFlow::WaitUntil(deadline);
                        }
                    }
                }
                Event::WindowEvent {
                    ref event,
                    window_id,
                } if window_id == window.id() => {
                    if core.handle_window_event(event) {
                        window.request_redraw();
                    }

                    match event {
                        WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                        WindowEvent::Resized(physical_size) => {
                            core.resize(physical_size.width, physical_size.height);
                            window.request_redraw();
                        }
                        WindowEvent::ScaleFactorChanged {
                            scale_factor,
                            new_inner_size,
                        } => {
                            core.rescale(*scale_factor as f32);
                            core.resize(new_inner_size.width, new_inner_size.height);
                            window.request_redraw();
                        }
                        _ => {}
                    }
                }
                Event::UserEvent(event) => {
                    let response = core.handle_user_event(event);

                    if response.exit {
                        *control_flow = ControlFlow::Exit;
                    } else if response.request_redraw {
                        window.request_redraw();
                    }
                }
                _ => {}
            }
        });
    }
}
