use std::sync::Arc;

use winit::{event, event_loop, window};

const FRAME_WIDTH: u32 = 1280;
const FRAME_HEIGHT: u32 = 720;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let event_loop = event_loop::EventLoop::new()?;
    let window = window::WindowBuilder::new()
        .with_title("camera preview")
        .build(&event_loop)?;
    let window = Arc::new(window);

    let mut preview = camera_preview::PreviewSurface::new(window.clone())?;
    let mut frame_number = 0;

    event_loop.run(move |event, elwt| {
        match event {
            event::Event::WindowEvent { event, .. } => match event {
                event::WindowEvent::RedrawRequested => {
                    let frame = moving_gradient(frame_number).unwrap();
                    frame_number += 1;

                    preview.push_frame(&frame).unwrap();
                    preview.redraw();
                },
                event::WindowEvent::Resized(size) => {
                    preview.resized(&size);
                },
                event::WindowEvent::CloseRequested => {
                    elwt.exit();
                },
                _ => {},
            },
            event::Event::AboutToWait => {
                window.request_redraw();
            },
            _ => {},
        }
    })?;

    Ok(())
}

// Stands in for a real camera: a gradient that scrolls one pixel per frame.
fn moving_gradient(frame_number: u64) -> Result<camera_preview::VideoFrame, camera_preview::Error> {
    let capacity = (FRAME_WIDTH * FRAME_HEIGHT * 4) as usize;
    let mut data = Vec::with_capacity(capacity);

    for y in 0..FRAME_HEIGHT {
        for x in 0..FRAME_WIDTH {
            data.push(((x as u64 + frame_number) % 256) as u8);
            data.push((y % 256) as u8);
            data.push(128);
            data.push(255);
        }
    }

    camera_preview::VideoFrame::new(data, FRAME_WIDTH, FRAME_HEIGHT, frame_number)
}
