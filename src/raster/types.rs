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

//! Rasterizer type definitions
//!
//! This module contains the value types shared by all drawing operations:
//! vertices ([`Point`]) and colors ([`Color`]).

/// A 2D vertex with an optional shading intensity
///
/// Coordinates are in the centered coordinate system: the origin is the
/// middle of the drawing surface and y increases upward. The intensity
/// scales a base color toward black during filled-triangle shading and is
/// expected to stay in `[0.0, 1.0]`; it is not validated.
///
/// Points are plain `Copy` value data. Vertex reordering inside the drawing
/// operations swaps whole points, intensity included.
///
/// # Examples
///
/// ```
/// use trifill::raster::Point;
///
/// let p = Point::new(10, -20);
/// assert_eq!(p.intensity, 1.0);
///
/// let q = Point::shaded(10, -20, 0.5);
/// assert_eq!(q.intensity, 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X coordinate (centered system)
    pub x: i32,
    /// Y coordinate (centered system, y up)
    pub y: i32,
    /// Shading intensity in `[0.0, 1.0]`
    pub intensity: f32,
}

impl Point {
    /// Create a point with full intensity
    ///
    /// Wireframe call sites that never shade can use this constructor and
    /// ignore intensity entirely.
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            intensity: 1.0,
        }
    }

    /// Create a point with an explicit shading intensity
    pub fn shaded(x: i32, y: i32, intensity: f32) -> Self {
        Self { x, y, intensity }
    }
}

/// An 8-bit RGB color
///
/// # Examples
///
/// ```
/// use trifill::raster::Color;
///
/// let green = Color::new(0, 255, 0);
/// let half = green.shade(0.5);
/// assert_eq!(half, Color::new(0, 127, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Color {
    /// Black (all channels zero)
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };

    /// White (all channels full)
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Create a color from 8-bit channels
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scale the color toward black by an intensity
    ///
    /// Each channel is multiplied by the intensity and truncated toward
    /// zero. Intensities outside `[0.0, 1.0]` saturate at the channel
    /// bounds instead of wrapping.
    ///
    /// # Arguments
    ///
    /// * `intensity` - Scale factor, expected in `[0.0, 1.0]`
    ///
    /// # Examples
    ///
    /// ```
    /// use trifill::raster::Color;
    ///
    /// let c = Color::new(200, 100, 50);
    /// assert_eq!(c.shade(0.0), Color::new(0, 0, 0));
    /// assert_eq!(c.shade(1.0), c);
    /// ```
    pub fn shade(self, intensity: f32) -> Self {
        Self {
            r: (self.r as f32 * intensity) as u8,
            g: (self.g as f32 * intensity) as u8,
            b: (self.b as f32 * intensity) as u8,
        }
    }
}
