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

//! Scene descriptions
//!
//! A scene is a TOML document describing a canvas and a list of triangles
//! to draw on it. It exists for the demo binary; the drawing operations
//! themselves know nothing about scenes.
//!
//! # Format
//!
//! ```toml
//! [canvas]
//! width = 960
//! height = 540
//!
//! [[triangle]]
//! mode = "wireframe"
//! color = [0, 255, 0]
//! vertices = [[-50, -200], [60, 240], [100, -10]]
//!
//! [[triangle]]
//! mode = "fill"
//! color = [0, 255, 0]
//! vertices = [[-200, -250], [200, 50], [20, 250]]
//! intensities = [0.0, 1.0, 0.5]
//! ```

use std::fs;
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use super::canvas::Canvas;
use super::error::{RasterError, Result};
use super::fill::draw_filled_triangle;
use super::triangle::draw_wireframe_triangle;
use super::types::{Color, Point};

/// A renderable scene: one canvas, any number of triangles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    /// Canvas dimensions and background
    pub canvas: CanvasSpec,

    /// Triangles, drawn in order
    #[serde(default, rename = "triangle")]
    pub triangles: Vec<TriangleSpec>,
}

/// Canvas table of a scene description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasSpec {
    /// Surface width in pixels
    pub width: usize,

    /// Surface height in pixels
    pub height: usize,

    /// Background color, black when omitted
    #[serde(default)]
    pub background: Option<[u8; 3]>,
}

/// How a triangle is rasterized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawMode {
    /// Outline only
    Wireframe,
    /// Solid shaded fill
    Fill,
}

/// One triangle entry of a scene description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriangleSpec {
    /// Wireframe or fill
    pub mode: DrawMode,

    /// Base color as `[r, g, b]`
    pub color: [u8; 3],

    /// Three vertices as `[x, y]` in centered coordinates
    pub vertices: [[i32; 2]; 3],

    /// Per-vertex shading intensities; `1.0` for every vertex when omitted
    #[serde(default)]
    pub intensities: Option<[f32; 3]>,
}

impl TriangleSpec {
    /// Resolve the entry into three drawable points
    fn points(&self) -> [Point; 3] {
        let h = self.intensities.unwrap_or([1.0, 1.0, 1.0]);
        [
            Point::shaded(self.vertices[0][0], self.vertices[0][1], h[0]),
            Point::shaded(self.vertices[1][0], self.vertices[1][1], h[1]),
            Point::shaded(self.vertices[2][0], self.vertices[2][1], h[2]),
        ]
    }
}

impl Scene {
    /// Parse a scene from TOML text
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::SceneParse`] for malformed documents.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a scene from a TOML file
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::Io`] if the file cannot be read and
    /// [`RasterError::SceneParse`] if it does not parse.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// The built-in demo scene
    ///
    /// A 960x540 surface with a green wireframe triangle and a
    /// green shaded filled triangle.
    pub fn demo() -> Self {
        Self {
            canvas: CanvasSpec {
                width: 960,
                height: 540,
                background: None,
            },
            triangles: vec![
                TriangleSpec {
                    mode: DrawMode::Wireframe,
                    color: [0, 255, 0],
                    vertices: [[-50, -200], [60, 240], [100, -10]],
                    intensities: None,
                },
                TriangleSpec {
                    mode: DrawMode::Fill,
                    color: [0, 255, 0],
                    vertices: [[-200, -250], [200, 50], [20, 250]],
                    intensities: Some([0.0, 1.0, 0.5]),
                },
            ],
        }
    }

    /// Create the canvas this scene describes
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::InvalidCanvasSize`] for zero-sized surfaces.
    pub fn canvas(&self) -> Result<Canvas> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(RasterError::InvalidCanvasSize {
                width: self.canvas.width,
                height: self.canvas.height,
            });
        }

        let mut canvas = Canvas::new(self.canvas.width, self.canvas.height);
        if let Some([r, g, b]) = self.canvas.background {
            canvas.clear(Color::new(r, g, b));
        }
        Ok(canvas)
    }

    /// Draw every triangle of the scene onto a canvas
    ///
    /// Out-of-range intensities are accepted but logged; the shading math
    /// saturates at the channel bounds.
    pub fn render(&self, canvas: &mut Canvas) {
        for (i, tri) in self.triangles.iter().enumerate() {
            if let Some(h) = tri.intensities {
                if h.iter().any(|v| !(0.0..=1.0).contains(v)) {
                    warn!("Triangle {} has intensities outside [0, 1]: {:?}", i, h);
                }
            }

            let [p0, p1, p2] = tri.points();
            let color = Color::new(tri.color[0], tri.color[1], tri.color[2]);

            match tri.mode {
                DrawMode::Wireframe => draw_wireframe_triangle(p0, p1, p2, color, canvas),
                DrawMode::Fill => draw_filled_triangle(p0, p1, p2, color, canvas),
            }
        }
    }
}
