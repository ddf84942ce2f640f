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

//! Shared fixtures for integration tests

use std::collections::HashSet;

use trifill::raster::{Color, PixelSink};

/// Sink that records every pixel the rasterizer emits
pub struct RecordingSink {
    pub pixels: Vec<(i32, i32, Color)>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self { pixels: Vec::new() }
    }

    /// All pixels emitted on one row, in emission order
    pub fn row(&self, y: i32) -> Vec<(i32, i32, Color)> {
        self.pixels.iter().copied().filter(|&(_, py, _)| py == y).collect()
    }

    /// Coordinates as a set
    pub fn coord_set(&self) -> HashSet<(i32, i32)> {
        self.pixels.iter().map(|&(x, y, _)| (x, y)).collect()
    }
}

impl PixelSink for RecordingSink {
    fn put_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.pixels.push((x, y, color));
    }
}
