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

//! Rasterizer module tests
//!
//! Tests are organized into the following modules:
//! - `basic`: Value types (points, colors, shading)
//! - `interpolate`: Interpolator sample sequences
//! - `line`: Line sweep classification and pixel coverage
//! - `triangle`: Wireframe and filled triangle rasterization
//! - `canvas`: Coordinate translation, clipping, and PPM export
//! - `properties`: Property-based tests for the coverage laws

mod properties;

use std::collections::HashSet;

use super::sink::PixelSink;
use super::types::Color;

/// Test sink that records every pixel it receives
pub struct RecordingSink {
    pub pixels: Vec<(i32, i32, Color)>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self { pixels: Vec::new() }
    }

    /// Coordinates in emission order
    pub fn coords(&self) -> Vec<(i32, i32)> {
        self.pixels.iter().map(|&(x, y, _)| (x, y)).collect()
    }

    /// Coordinates as a set, for union/equality comparisons
    pub fn coord_set(&self) -> HashSet<(i32, i32)> {
        self.pixels.iter().map(|&(x, y, _)| (x, y)).collect()
    }
}

impl PixelSink for RecordingSink {
    fn put_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.pixels.push((x, y, color));
    }
}
