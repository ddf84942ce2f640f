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

//! Property-based tests for the coverage laws
//!
//! Float-sensitive assertions use tolerances of one accumulation step; the
//! interpolator accumulates the slope incrementally, so the final sample is
//! close to, but not necessarily exactly, the requested end value.

use proptest::prelude::*;

use super::RecordingSink;
use crate::raster::fill::draw_filled_triangle;
use crate::raster::interpolate::interpolate;
use crate::raster::line::draw_line;
use crate::raster::triangle::draw_wireframe_triangle;
use crate::raster::types::{Color, Point};

proptest! {
    #[test]
    fn interpolate_emits_one_sample_per_step(
        i0 in -300i32..300,
        len in 0usize..200,
        d0 in -1000.0f32..1000.0,
        d1 in -1000.0f32..1000.0,
    ) {
        let i1 = i0 + len as i32;
        let values = interpolate(i0, d0, i1, d1);

        prop_assert_eq!(values.len(), len + 1);
        prop_assert_eq!(values[0], d0);

        if len > 0 {
            let slope = (d1 - d0) / len as f32;
            let last = *values.last().unwrap();
            prop_assert!(
                (last - d1).abs() <= slope.abs() + 0.1,
                "last sample {} drifted from {}",
                last,
                d1
            );
        }
    }

    #[test]
    fn interpolate_degenerate_ignores_second_sample(
        i in -500i32..500,
        d0 in -1000.0f32..1000.0,
        d1 in -1000.0f32..1000.0,
    ) {
        prop_assert_eq!(interpolate(i, d0, i, d1), vec![d0]);
    }

    #[test]
    fn line_covers_dominant_axis_exactly_once(
        x0 in -200i32..200,
        y0 in -200i32..200,
        x1 in -200i32..200,
        y1 in -200i32..200,
    ) {
        let mut sink = RecordingSink::new();
        draw_line(Point::new(x0, y0), Point::new(x1, y1), Color::WHITE, &mut sink);

        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        prop_assert_eq!(sink.pixels.len(), (dx.max(dy) + 1) as usize);

        // One pixel per dominant-axis step, none skipped or repeated.
        let mut dominant: Vec<i32> = if dx > dy {
            sink.coords().iter().map(|&(x, _)| x).collect()
        } else {
            sink.coords().iter().map(|&(_, y)| y).collect()
        };
        dominant.sort_unstable();
        let expected: Vec<i32> = if dx > dy {
            (x0.min(x1)..=x0.max(x1)).collect()
        } else {
            (y0.min(y1)..=y0.max(y1)).collect()
        };
        prop_assert_eq!(dominant, expected);
    }

    #[test]
    fn wireframe_equals_union_of_edges(
        x0 in -100i32..100, y0 in -100i32..100,
        x1 in -100i32..100, y1 in -100i32..100,
        x2 in -100i32..100, y2 in -100i32..100,
    ) {
        let p0 = Point::new(x0, y0);
        let p1 = Point::new(x1, y1);
        let p2 = Point::new(x2, y2);

        let mut wireframe = RecordingSink::new();
        draw_wireframe_triangle(p0, p1, p2, Color::WHITE, &mut wireframe);

        let mut edges = RecordingSink::new();
        draw_line(p0, p1, Color::WHITE, &mut edges);
        draw_line(p1, p2, Color::WHITE, &mut edges);
        draw_line(p2, p0, Color::WHITE, &mut edges);

        prop_assert_eq!(wireframe.coord_set(), edges.coord_set());
    }

    #[test]
    fn filled_triangle_rows_and_bounds(
        x0 in -150i32..150, y0 in -150i32..150,
        x1 in -150i32..150, y1 in -150i32..150,
        x2 in -150i32..150, y2 in -150i32..150,
    ) {
        let mut sink = RecordingSink::new();
        draw_filled_triangle(
            Point::new(x0, y0),
            Point::new(x1, y1),
            Point::new(x2, y2),
            Color::WHITE,
            &mut sink,
        );

        let min_y = y0.min(y1).min(y2);
        let max_y = y0.max(y1).max(y2);
        let min_x = x0.min(x1).min(x2);
        let max_x = x0.max(x1).max(x2);

        // Rows never escape the vertical span, and x stays within the
        // bounding box up to one pixel of interpolation truncation.
        for &(x, y, _) in &sink.pixels {
            prop_assert!((min_y..=max_y).contains(&y));
            prop_assert!((min_x - 1..=max_x + 1).contains(&x));
        }

        // Gap-free coverage: every row of the vertical span receives at
        // least one pixel, including vertex rows where the truncated edge
        // samples can disagree by one.
        let rows: std::collections::HashSet<i32> =
            sink.coords().iter().map(|&(_, y)| y).collect();
        for y in min_y..=max_y {
            prop_assert!(rows.contains(&y), "no pixel on row {}", y);
        }
    }

    #[test]
    fn filled_triangle_shading_never_exceeds_base(
        h0 in 0.0f32..=1.0,
        h1 in 0.0f32..=1.0,
        h2 in 0.0f32..=1.0,
    ) {
        let base = Color::new(40, 200, 120);
        let mut sink = RecordingSink::new();
        draw_filled_triangle(
            Point::shaded(-30, -20, h0),
            Point::shaded(25, 0, h1),
            Point::shaded(0, 30, h2),
            base,
            &mut sink,
        );

        prop_assert!(!sink.pixels.is_empty());
        for &(_, _, c) in &sink.pixels {
            prop_assert!(c.r <= base.r && c.g <= base.g && c.b <= base.b);
        }
    }
}
