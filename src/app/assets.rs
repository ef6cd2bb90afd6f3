use std::fs::File;
use std::io::BufReader;

use rodio::buffer::SamplesBuffer;
use rodio::{Decoder, OutputStreamHandle, Source};
use sdl3::pixels::PixelFormat;
use sdl3::render::{BlendMode, Texture, TextureCreator};
use sdl3::video::WindowContext;

use crate::debugln;

/// An overlay image uploaded as a texture, plus its source aspect ratio.
pub(crate) struct Overlay<'r> {
    pub texture: Texture<'r>, // Stretched over the rectangle every frame.
    pub aspect: f32,          // Source width divided by source height.
}

/// Decodes an image file and uploads it as a texture. Any failure degrades
/// to running without an overlay.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn load_overlay<'r>(
    creator: &'r TextureCreator<WindowContext>,
    path: &str,
) -> Option<Overlay<'r>> {
    let decoded = match image::open(path) {
        Ok(decoded) => decoded.to_rgba8(),
        Err(why) => {
            debugln!("ASSETS: Skipping overlay {}: {}", path, why);
            return None;
        }
    };

    let (width, height) = decoded.dimensions();
    if width == 0 || height == 0 {
        return None;
    }

    let mut texture = creator
        .create_texture_streaming(PixelFormat::RGBA32, width, height)
        .ok()?;
    texture
        .update(None, decoded.as_raw(), width as usize * 4)
        .ok()?;
    texture.set_blend_mode(BlendMode::Blend);

    Some(Overlay {
        texture,
        aspect: width as f32 / height as f32,
    })
}

/// A fully decoded audio clip that can be triggered any number of times,
/// with overlapping playback.
pub(crate) struct SoundClip {
    channels: u16,     // Interleaved channel count.
    sample_rate: u32,  // Samples per second per channel.
    samples: Vec<i16>, // Decoded PCM data.
}

impl SoundClip {
    /// Decodes an audio file into memory. Any failure degrades to running
    /// without a bounce sound.
    pub fn load(path: &str) -> Option<Self> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(why) => {
                debugln!("ASSETS: Skipping sound {}: {}", path, why);
                return None;
            }
        };

        let decoder = match Decoder::new(BufReader::new(file)) {
            Ok(decoder) => decoder,
            Err(why) => {
                debugln!("ASSETS: Skipping sound {}: {}", path, why);
                return None;
            }
        };

        let channels = decoder.channels();
        let sample_rate = decoder.sample_rate();
        let samples: Vec<i16> = decoder.collect();

        Some(Self {
            channels,
            sample_rate,
            samples,
        })
    }

    /// Queues the clip on the output mixer and returns immediately. Triggers
    /// may overlap; playback errors are ignored.
    pub fn play(&self, output: &OutputStreamHandle) {
        let buffer = SamplesBuffer::new(self.channels, self.sample_rate, self.samples.clone());
        let _ = output.play_raw(buffer.convert_samples());
    }
}
