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

//! Wireframe triangle rasterization

use super::line::draw_line;
use super::sink::PixelSink;
use super::types::{Color, Point};

/// Rasterize the outline of a triangle
///
/// Draws the three edges `(p0, p1)`, `(p1, p2)` and `(p2, p0)` as
/// independent lines. Pixels at shared vertices are emitted once per edge
/// that touches them; the duplicates carry the same color, so the result is
/// visually idempotent.
///
/// # Arguments
///
/// * `p0`, `p1`, `p2` - Triangle vertices
/// * `color` - Outline color
/// * `sink` - Destination for rasterized pixels
pub fn draw_wireframe_triangle<S: PixelSink>(
    p0: Point,
    p1: Point,
    p2: Point,
    color: Color,
    sink: &mut S,
) {
    log::trace!(
        "Drawing wireframe triangle: ({}, {}), ({}, {}), ({}, {}) color=({},{},{})",
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

    draw_line(p0, p1, color, sink);
    draw_line(p1, p2, color, sink);
    draw_line(p2, p0, color, sink);
}
