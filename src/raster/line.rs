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

//! Line rasterization
//!
//! Implements gap-free line drawing by sweeping along the axis of greatest
//! extent and interpolating the other coordinate.

use std::mem;

use super::interpolate::interpolate;
use super::sink::PixelSink;
use super::types::{Color, Point};

/// Rasterize a line segment between two points
///
/// The line is classified by its dominant axis: if `|dx| > |dy|` it is
/// "shallow" and swept along x, otherwise "steep" and swept along y.
/// Sweeping the axis of greatest extent guarantees exactly one pixel per
/// integer step of that axis, with none skipped or duplicated.
///
/// Interpolated coordinates are truncated toward zero when plotted, matching
/// the interpolator output being cast to an integer.
///
/// # Arguments
///
/// * `p0` - First endpoint
/// * `p1` - Second endpoint
/// * `color` - Line color
/// * `sink` - Destination for rasterized pixels
///
/// # Edge cases
///
/// Coincident endpoints fall into the steep branch, where the
/// single-value interpolation path plots exactly one pixel. No branch can
/// divide by zero: the swept axis only has a zero extent when both axes do.
pub fn draw_line<S: PixelSink>(mut p0: Point, mut p1: Point, color: Color, sink: &mut S) {
    log::trace!(
        "Drawing line: ({}, {}) -> ({}, {}) color=({},{},{})",
        p0.x,
        p0.y,
        p1.x,
        p1.y,
        color.r,
        color.g,
        color.b
    );

    let dx = p1.x - p0.x;
    let dy = p1.y - p0.y;

    if dx.abs() > dy.abs() {
        // Shallow: more horizontal than vertical, sweep along x.
        // Always draw from left to right.
        if p0.x > p1.x {
            mem::swap(&mut p0, &mut p1);
        }

        let ys = interpolate(p0.x, p0.y as f32, p1.x, p1.y as f32);
        for x in p0.x..=p1.x {
            sink.put_pixel(x, ys[(x - p0.x) as usize] as i32, color);
        }
    } else {
        // Steep: more vertical than horizontal, sweep along y.
        // Always draw from bottom to top.
        if p0.y > p1.y {
            mem::swap(&mut p0, &mut p1);
        }

        let xs = interpolate(p0.y, p0.x as f32, p1.y, p1.x as f32);
        for y in p0.y..=p1.y {
            sink.put_pixel(xs[(y - p0.y) as usize] as i32, y, color);
        }
    }
}
