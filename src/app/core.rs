use rodio::{OutputStream, OutputStreamHandle};
use sdl3::Sdl;
use sdl3::pixels::Color;
use sdl3::render::{Canvas, FRect};
use sdl3::video::Window;

use crate::debugln;
use crate::error::{AppError, Result};
use crate::sim::Simulation;
use crate::utils::FrameClock;
use crate::vec2f::Vec2f;

use super::assets::{self, Overlay, SoundClip};
use super::input::{Input, InputState};
use super::opts::Options;

/// Core of the application: owns the platform handles and drives the
/// simulate/render loop.
pub struct AppCore {
    sdl: Sdl,                  // SDL context.
    canvas: Canvas<Window>,    // Canvas to draw on.
    mixer: OutputStreamHandle, // Fire-and-forget playback entry point.
    _stream: OutputStream,     // Keeps the audio device open while running.
}

impl AppCore {
    /// Window dimensions.
    const WIDTH: u32 = 800;
    const HEIGHT: u32 = 600;

    /// Creates the application core by initializing the SDL context, window,
    /// canvas, and audio output device. Any failure here is fatal and the
    /// main loop is never entered.
    pub fn new() -> Result<Self> {
        let sdl = sdl3::init().map_err(AppError::Sdl)?;
        let video = sdl.video().map_err(AppError::Sdl)?;

        // Let the presentation call pace the loop.
        sdl3::hint::set(sdl3::hint::names::RENDER_VSYNC, "1");

        let window = video
            .window("BOUNCE", Self::WIDTH, Self::HEIGHT)
            .build()
            .map_err(|why| AppError::Window(why.to_string()))?;
        let canvas = window.into_canvas();

        let (stream, mixer) =
            OutputStream::try_default().map_err(|why| AppError::Audio(why.to_string()))?;

        Ok(Self {
            sdl,
            canvas,
            mixer,
            _stream: stream,
        })
    }

    /// Runs the main loop: drain events, advance the simulation by the
    /// elapsed time, apply per-axis bounce effects, and present the frame.
    #[allow(clippy::cast_precision_loss)]
    pub fn run(&mut self, opts: &Options) -> Result<()> {
        let mut event_pump = self.sdl.event_pump().map_err(AppError::Sdl)?;

        let texture_creator = self.canvas.texture_creator();
        let overlay = opts
            .image_path
            .as_deref()
            .and_then(|path| assets::load_overlay(&texture_creator, path));
        let sound = opts.audio_path.as_deref().and_then(SoundClip::load);

        let size = Simulation::size_for(overlay.as_ref().map(|o| o.aspect));
        let bounds = Vec2f(Self::WIDTH as f32, Self::HEIGHT as f32);
        let mut sim = Simulation::new(bounds, size);

        let mut input = InputState::new();
        let mut clock = FrameClock::start();

        'main_loop: loop {
            input.poll(&mut event_pump);
            for event in &input.events {
                match event {
                    Input::Quit => break 'main_loop,
                }
            }

            let bounces = sim.advance(clock.delta());
            if bounces.horizontal {
                sim.resample_color();
                if let Some(clip) = &sound {
                    clip.play(&self.mixer);
                }
            }
            if bounces.vertical {
                sim.resample_color();
                if let Some(clip) = &sound {
                    clip.play(&self.mixer);
                }
            }

            if bounces.any() {
                debugln!(
                    "APP: [{}] Bounce, now at {:?} moving {:?}.",
                    clock.tick(),
                    sim.position(),
                    sim.velocity()
                );
            }

            self.render(&sim, overlay.as_ref());
        }

        Ok(())
    }

    /// Draws a single frame: black clear, colored fill, optional overlay
    /// stretched over the rectangle, then a vsync-paced present.
    fn render(&mut self, sim: &Simulation, overlay: Option<&Overlay>) {
        self.canvas.set_draw_color(Color::RGB(0, 0, 0));
        self.canvas.clear();

        let Vec2f(x, y) = sim.position();
        let Vec2f(w, h) = sim.size();
        let rect = FRect::new(x, y, w, h);

        let (r, g, b) = sim.color_rgb();
        self.canvas.set_draw_color(Color::RGB(r, g, b));
        let _ = self.canvas.fill_rect(rect);

        if let Some(overlay) = overlay {
            let _ = self.canvas.copy(&overlay.texture, None, Some(rect));
        }

        self.canvas.present();
    }
}
