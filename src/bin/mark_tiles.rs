/*
 * Copyright © 2026, the tilemark authors.
 *
 * The "tilemark" software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use anyhow::Result;
use clap::{ArgAction, Parser};
use image::Rgb;
use tilemark::{get_hex_rgb, mark_tile_grid, TilingSpec};

// note that -h is the cell height, not help (which is long-only)
#[derive(Parser)]
#[command(about="overlay a tile grid on an image and label each cell with its linear index", disable_help_flag=true)]
struct Args {
    #[arg(short='r', long="row", default_value="0", help="tiling row count")]
    row: u32,

    #[arg(short='c', long="col", default_value="0", help="tiling col count")]
    col: u32,

    #[arg(short='w', long="cell-width", default_value="0", help="cell width in pixels")]
    cell_width: u32,

    #[arg(short='h', long="cell-height", default_value="0", help="cell height in pixels")]
    cell_height: u32,

    #[arg(short='s', long="cell-size", default_value="0", help="uniform cell size in pixels")]
    cell_size: u32,

    #[arg(long, default_value="10", help="font point size for cell labels")]
    font_size: f32,

    #[arg(long, default_value="ffffff", help="color for grid lines and labels")]
    color: String,

    #[arg(short='i', long, help="filename of input image")]
    input: String,

    #[arg(short='o', long, help="filename of output image")]
    output: String,

    #[arg(long, action=ArgAction::Help, help="print help")]
    help: Option<bool>,
}

fn main()->Result<()> {
    let args = Args::parse();

    let spec = TilingSpec::from_flags( args.cell_size, args.cell_width, args.cell_height, args.row, args.col)?;
    let color = Rgb( get_hex_rgb( &args.color)?);

    mark_tile_grid( &args.input, &args.output, spec, args.font_size, color)?;

    Ok(())
}
