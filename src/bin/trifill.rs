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

use clap::Parser;
use log::{error, info};
use trifill::raster::error::Result;
use trifill::raster::Scene;

/// Scanline triangle rasterizer
#[derive(Parser)]
#[command(name = "trifill")]
#[command(about = "Scanline triangle rasterizer", long_about = None)]
struct Args {
    /// Path to a TOML scene description (renders the built-in demo scene when omitted)
    scene: Option<String>,

    /// Output image path (binary PPM)
    #[arg(short = 'o', long, default_value = "out.ppm")]
    output: String,
}

fn main() -> Result<()> {
    // Load .env configuration if present, then initialize the logger with
    // default level INFO
    dotenvy::dotenv().ok();
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("trifill v{}", env!("CARGO_PKG_VERSION"));

    // Parse command line arguments
    let args = Args::parse();

    let scene = match &args.scene {
        Some(path) => {
            info!("Loading scene from: {}", path);
            match Scene::load(path) {
                Ok(scene) => scene,
                Err(e) => {
                    error!("Failed to load scene: {}", e);
                    return Err(e);
                }
            }
        }
        None => {
            info!("No scene given, rendering the built-in demo");
            Scene::demo()
        }
    };

    info!(
        "Rendering {} triangle(s) on a {}x{} canvas",
        scene.triangles.len(),
        scene.canvas.width,
        scene.canvas.height
    );

    let mut canvas = scene.canvas()?;
    scene.render(&mut canvas);

    canvas.write_ppm(&args.output)?;
    info!(
        "Wrote {}x{} image to {}",
        canvas.width(),
        canvas.height(),
        args.output
    );

    Ok(())
}
