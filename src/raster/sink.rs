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

//! Pixel sink trait
//!
//! The drawing operations never touch a surface directly; they hand every
//! pixel they decide to color to a [`PixelSink`]. [`Canvas`](super::Canvas)
//! is the built-in implementation; tests use recording sinks.

use super::types::Color;

/// Destination for rasterized pixels
///
/// Coordinates are in the centered coordinate system (origin at the surface
/// center, y up). Implementations translate to surface space and must
/// silently discard or clamp out-of-bounds coordinates; the rasterizer
/// performs no bounds checking of its own.
pub trait PixelSink {
    /// Receive one rasterized pixel
    ///
    /// Called once per pixel the rasterizer decides to color. Must not
    /// panic for any coordinate value.
    fn put_pixel(&mut self, x: i32, y: i32, color: Color);
}
