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

//! Rasterization components
//!
//! This module contains the whole rasterizer:
//! - Interpolator (linear sample sequences)
//! - Line drawing (shallow/steep sweep)
//! - Wireframe triangles (three lines)
//! - Filled triangles (shaded scanline fill)
//! - Pixel sink trait and a canvas implementation
//! - Scene descriptions for the demo binary
//!
//! # Coordinate system
//!
//! All drawing operations take coordinates in a centered system: the origin
//! is the middle of the drawing surface and y increases upward. The
//! [`PixelSink`] implementation is responsible for translating to surface
//! pixel coordinates and for discarding out-of-bounds writes; the drawing
//! operations themselves never bounds-check.

pub mod canvas;
pub mod error;
pub mod fill;
pub mod interpolate;
pub mod line;
pub mod scene;
pub mod sink;
pub mod triangle;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use canvas::Canvas;
pub use error::{RasterError, Result};
pub use fill::draw_filled_triangle;
pub use interpolate::interpolate;
pub use line::draw_line;
pub use scene::Scene;
pub use sink::PixelSink;
pub use triangle::draw_wireframe_triangle;
pub use types::{Color, Point};
