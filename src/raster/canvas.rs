// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 trifill contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Canvas: an owned RGB pixel surface
//!
//! The canvas is the built-in [`PixelSink`]: it translates centered
//! coordinates to surface space, silently discards out-of-bounds writes,
//! and can export itself as a binary PPM image.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::error::Result;
use super::sink::PixelSink;
use super::types::Color;

/// An RGB pixel surface with centered-coordinate addressing
///
/// Pixels are stored row-major, 3 bytes per pixel, top-left origin. Writes
/// through [`PixelSink`] arrive in centered coordinates (origin at the
/// surface center, y up) and are translated to surface space:
/// `sx = width/2 + x`, `sy = height/2 - y`.
///
/// # Examples
///
/// ```
/// use trifill::raster::{Canvas, Color, PixelSink};
///
/// let mut canvas = Canvas::new(100, 100);
/// canvas.put_pixel(0, 0, Color::WHITE);
///
/// // The centered origin lands at the middle of the surface.
/// assert_eq!(canvas.pixel(50, 50), Some(Color::WHITE));
/// ```
#[derive(Debug)]
pub struct Canvas {
    width: usize,
    height: usize,
    /// RGB, 3 bytes per pixel, row-major from the top-left
    pixels: Vec<u8>,
}

impl Canvas {
    /// Create a canvas cleared to black
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height * 3],
        }
    }

    /// Surface width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Surface height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Fill the whole surface with one color
    pub fn clear(&mut self, color: Color) {
        for chunk in self.pixels.chunks_exact_mut(3) {
            chunk[0] = color.r;
            chunk[1] = color.g;
            chunk[2] = color.b;
        }
    }

    /// Read a pixel in surface coordinates (top-left origin, y down)
    ///
    /// Returns `None` outside the surface.
    pub fn pixel(&self, sx: usize, sy: usize) -> Option<Color> {
        if sx >= self.width || sy >= self.height {
            return None;
        }
        let idx = (sy * self.width + sx) * 3;
        Some(Color::new(
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
        ))
    }

    /// Raw RGB bytes, row-major from the top-left
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Write the surface as a binary PPM (P6) image
    ///
    /// # Arguments
    ///
    /// * `path` - Output file path
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::Io`](super::RasterError::Io) if the file
    /// cannot be created or written.
    pub fn write_ppm<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut out = BufWriter::new(file);

        write!(out, "P6\n{} {}\n255\n", self.width, self.height)?;
        out.write_all(&self.pixels)?;
        out.flush()?;
        Ok(())
    }
}

impl PixelSink for Canvas {
    /// Write a pixel given in centered coordinates
    ///
    /// Translates to surface space and silently discards coordinates that
    /// fall outside the surface.
    fn put_pixel(&mut self, x: i32, y: i32, color: Color) {
        // Origin-at-the-center conversion; y is inverted because
        // mathematical "up" is positive.
        let sx = self.width as i32 / 2 + x;
        let sy = self.height as i32 / 2 - y;

        if sx < 0 || sx >= self.width as i32 || sy < 0 || sy >= self.height as i32 {
            return;
        }

        let idx = (sy as usize * self.width + sx as usize) * 3;
        self.pixels[idx] = color.r;
        self.pixels[idx + 1] = color.g;
        self.pixels[idx + 2] = color.b;
    }
}
