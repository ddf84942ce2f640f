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

//! Linear interpolation over integer steps
//!
//! The interpolator is the foundation of every drawing operation: given two
//! samples of a linear function, it produces the dependent value for each
//! integer step of the independent variable between them.

/// Interpolate a linear function over every integer step of `[i0, i1]`
///
/// Given the two known samples `d0 = f(i0)` and `d1 = f(i1)`, returns the
/// value of `f` for every integer `i` in `i0..=i1`. Entry `k` of the result
/// corresponds to `i0 + k`, so the result length is `i1 - i0 + 1`.
///
/// Values are produced by accumulating the slope (`d = d + a`) rather than
/// recomputing `d0 + k * a` per step; each next value is one addition away
/// from the previous one.
///
/// # Arguments
///
/// * `i0` - Independent variable of the first sample
/// * `d0` - Dependent value at `i0`
/// * `i1` - Independent variable of the second sample (callers pass `i0 <= i1`)
/// * `d1` - Dependent value at `i1`
///
/// # Returns
///
/// One dependent value per integer step, `vec![d0]` when `i0 == i1`.
///
/// # Examples
///
/// ```
/// use trifill::raster::interpolate;
///
/// let values = interpolate(0, 0.0, 4, 2.0);
/// assert_eq!(values, vec![0.0, 0.5, 1.0, 1.5, 2.0]);
///
/// // Degenerate range: one sample, the second value is ignored.
/// assert_eq!(interpolate(7, 3.0, 7, 100.0), vec![3.0]);
/// ```
pub fn interpolate(i0: i32, d0: f32, i1: i32, d1: f32) -> Vec<f32> {
    // Single step: the slope would divide by zero, and a degenerate
    // point/row has exactly one sample.
    if i0 == i1 {
        return vec![d0];
    }

    let a = (d1 - d0) / (i1 - i0) as f32;
    let mut d = d0;

    let mut values = Vec::with_capacity((i1 - i0 + 1).max(0) as usize);
    for _ in i0..=i1 {
        values.push(d);
        d += a;
    }
    values
}
