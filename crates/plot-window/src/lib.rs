// File: crates/plot-window/src/lib.rs
// Summary: Displays a rendered ChartSpec in a window via RGBA blit (CPU) using winit + softbuffer.

use std::num::NonZeroU32;

use anyhow::{Context, Result};
use plot_core::{ChartRenderer, ChartSpec, RenderOptions};
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

/// Open a window showing `spec`; the process exits when the window closes.
pub fn show(spec: ChartSpec) -> Result<()> {
    // Validate up front so shape errors surface before a window opens.
    spec.validate()?;

    let defaults = RenderOptions::default();
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(spec.title.clone())
        .with_inner_size(LogicalSize::new(defaults.width as f64, defaults.height as f64))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow::anyhow!("softbuffer context: {e}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow::anyhow!("softbuffer surface: {e}"))?;

    let mut size = window.inner_size();

    event_loop.run(move |event, _, cf| {
        // Keep the context alive for the lifetime of the surface.
        let _ = &context;
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *cf = ControlFlow::Exit;
                }
                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state: ElementState::Pressed,
                            virtual_keycode: Some(VirtualKeyCode::Escape),
                            ..
                        },
                    ..
                } => {
                    *cf = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                window.request_redraw();
            }
            Event::RedrawRequested(_) => {
                if let Err(e) = blit(&spec, &mut surface, size.width, size.height) {
                    eprintln!("render error: {e:#}");
                    *cf = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    });
}

/// Render the chart at the current window size and present it.
fn blit(
    spec: &ChartSpec,
    surface: &mut softbuffer::Surface,
    width: u32,
    height: u32,
) -> Result<()> {
    let w = width.max(1);
    let h = height.max(1);
    surface
        .resize(NonZeroU32::new(w).unwrap(), NonZeroU32::new(h).unwrap())
        .map_err(|e| anyhow::anyhow!("resize surface: {e}"))?;

    let mut opts = RenderOptions::default();
    opts.width = w as i32;
    opts.height = h as i32;
    let renderer = ChartRenderer::new(opts);
    let (rgba, _, _, _) = renderer.render_to_rgba8(spec)?;

    let mut frame = surface
        .buffer_mut()
        .map_err(|e| anyhow::anyhow!("frame buffer: {e}"))?;
    let max_px = frame.len().min(rgba.len() / 4);
    for (i, px) in rgba.chunks_exact(4).take(max_px).enumerate() {
        let r = px[0] as u32;
        let g = px[1] as u32;
        let b = px[2] as u32;
        // Softbuffer wants 0RGB with red in the second-highest byte.
        frame[i] = (r << 16) | (g << 8) | b;
    }
    frame
        .present()
        .map_err(|e| anyhow::anyhow!("present frame: {e}"))?;
    Ok(())
}
