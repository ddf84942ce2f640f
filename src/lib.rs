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

//! Software triangle rasterizer library
//!
//! This library converts 2D triangles into exact pixel coverage using only
//! linear interpolation: lines, wireframe triangles, and shaded filled
//! triangles. Pixels are delivered to a caller-supplied [`raster::PixelSink`],
//! so the library has no windowing or display dependencies.
//!
//! # Example
//!
//! ```
//! use trifill::raster::{draw_filled_triangle, Canvas, Color, Point};
//!
//! let mut canvas = Canvas::new(200, 200);
//!
//! // Coordinates are centered: origin at the middle of the canvas, y up.
//! draw_filled_triangle(
//!     Point::new(-50, -50),
//!     Point::new(50, -50),
//!     Point::new(0, 60),
//!     Color::new(0, 255, 0),
//!     &mut canvas,
//! );
//! ```

pub mod raster;
