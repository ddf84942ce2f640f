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

/// Rasterizer error types
use thiserror::Error;

/// Result type for rasterizer operations
pub type Result<T> = std::result::Result<T, RasterError>;

/// Main error type for the rasterizer
///
/// The drawing operations themselves are infallible; errors only arise at
/// the canvas and scene boundaries (file I/O, scene parsing).
#[derive(Error, Debug)]
pub enum RasterError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scene parse error: {0}")]
    SceneParse(#[from] toml::de::Error),

    #[error("Invalid canvas size: {width}x{height}")]
    InvalidCanvasSize { width: usize, height: usize },
}
