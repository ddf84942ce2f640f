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

//! Filled triangle rasterization
//!
//! Implements the shaded scanline fill. The triangle is bounded on every
//! row by two edges: the "tall" edge spanning the full height, and a
//! composite edge built from the two short edges joined at the middle
//! vertex.
//!
//! # Algorithm
//!
//! 1. Sort the vertices by y
//! 2. Interpolate x and intensity along all three edges
//! 3. Merge the two short edges into one full-height sequence
//! 4. Classify which sequence is the left edge
//! 5. Fill each row between the edges, interpolating intensity across it

use std::mem;

use super::interpolate::interpolate;
use super::sink::PixelSink;
use super::types::{Color, Point};

/// Rasterize a solid, intensity-shaded triangle
///
/// Fills every row from the topmost vertex to the bottommost, shading the
/// base color by the per-pixel intensity interpolated first along the edges
/// and then across each row. Interpolated coordinates are truncated toward
/// zero when converted to pixel positions.
///
/// # Arguments
///
/// * `p0`, `p1`, `p2` - Triangle vertices, in any order
/// * `color` - Base color, scaled per pixel by the interpolated intensity
/// * `sink` - Destination for rasterized pixels
///
/// # Edge cases
///
/// Degenerate triangles (coincident vertices, all vertices on one row,
/// collinear vertices) collapse through the single-value interpolation
/// path: the fill produces a single row, a line, or a point, never a panic.
pub fn draw_filled_triangle<S: PixelSink>(
    mut p0: Point,
    mut p1: Point,
    mut p2: Point,
    color: Color,
    sink: &mut S,
) {
    log::trace!(
        "Drawing filled triangle: ({}, {}), ({}, {}), ({}, {}) color=({},{},{})",
        p0.x,
        p0.y,
        p1.x,
        p1.y,
        p2.x,
        p2.y,
        color.r,
        color.g,
        color.b
    );

    // Sort so that p0.y <= p1.y <= p2.y. Whole points are swapped,
    // intensity included.
    if p1.y < p0.y {
        mem::swap(&mut p1, &mut p0);
    }
    if p2.y < p0.y {
        mem::swap(&mut p2, &mut p0);
    }
    if p2.y < p1.y {
        mem::swap(&mut p2, &mut p1);
    }

    // x and intensity along each edge, one sample per row.
    let mut x01 = interpolate(p0.y, p0.x as f32, p1.y, p1.x as f32);
    let mut h01 = interpolate(p0.y, p0.intensity, p1.y, p1.intensity);

    let x12 = interpolate(p1.y, p1.x as f32, p2.y, p2.x as f32);
    let h12 = interpolate(p1.y, p1.intensity, p2.y, p2.intensity);

    let x02 = interpolate(p0.y, p0.x as f32, p2.y, p2.x as f32);
    let h02 = interpolate(p0.y, p0.intensity, p2.y, p2.intensity);

    // Join the short edges into one sequence spanning the full height.
    // Both edges sample the shared row at p1.y, so the last sample of the
    // top edge is dropped before concatenation.
    x01.pop();
    h01.pop();
    let mut x012 = x01;
    x012.extend_from_slice(&x12);
    let mut h012 = h01;
    h012.extend_from_slice(&h12);

    // One comparison at the midpoint decides left/right for the whole
    // triangle: correctly split edges cannot cross inside the row range.
    let m = x012.len() / 2;
    let (x_left, h_left, x_right, h_right) = if x02[m] < x012[m] {
        (&x02, &h02, &x012, &h012)
    } else {
        (&x012, &h012, &x02, &h02)
    };

    for y in p0.y..=p2.y {
        let row = (y - p0.y) as usize;
        let mut x_l = x_left[row] as i32;
        let mut x_r = x_right[row] as i32;
        let mut h_l = h_left[row];
        let mut h_r = h_right[row];

        // At a vertex row both edges target the same x, but accumulated
        // float error can truncate them to opposite sides of the integer.
        // Reorder so the row still emits its pixels.
        if x_l > x_r {
            mem::swap(&mut x_l, &mut x_r);
            mem::swap(&mut h_l, &mut h_r);
        }

        // Intensity across the row, one sample per pixel.
        let h_segment = interpolate(x_l, h_l, x_r, h_r);

        for x in x_l..=x_r {
            let shaded = color.shade(h_segment[(x - x_l) as usize]);
            sink.put_pixel(x, y, shaded);
        }
    }
}
