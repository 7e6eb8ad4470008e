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

//! tile grid overlay for images
//! this mostly wraps and extends the external 'image' crate (and related)

use std::path::{Path, PathBuf};

use ab_glyph::{Font, FontVec, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};

mod errors;
pub use errors::{Result, TileMarkError};

/* #region tiling geometry ***********************************************************************************/

/// one of the three mutually exclusive ways to specify grid granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TilingSpec {
    CellSize(u32),
    CellExtent { cell_width: u32, cell_height: u32 },
    GridDim { rows: u32, cols: u32 },
}

impl TilingSpec {
    /// first-match-wins selection over raw flag values, a value of 0 meaning "not set"
    pub fn from_flags (cell_size: u32, cell_width: u32, cell_height: u32, rows: u32, cols: u32)->Result<Self> {
        if cell_size > 0 {
            Ok( TilingSpec::CellSize(cell_size) )
        } else if cell_width > 0 && cell_height > 0 {
            Ok( TilingSpec::CellExtent{ cell_width, cell_height } )
        } else if rows > 0 && cols > 0 {
            Ok( TilingSpec::GridDim{ rows, cols } )
        } else {
            Err( TileMarkError::ConfigError("must set row/col or cell size".into()) )
        }
    }
}

/// the concrete tiling of an image: grid dimensions plus cell extent in pixels.
/// Note that leftover pixels at the right/bottom edge of an image whose dimensions are
/// not evenly divisible do not get a (fractional) tile of their own
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    pub rows: u32,
    pub cols: u32,
    pub cell_width: u32,
    pub cell_height: u32,
}

impl TileGrid {
    pub fn resolve (spec: TilingSpec, width: u32, height: u32)->Self {
        match spec {
            TilingSpec::CellSize(s) => {
                TileGrid{ rows: height / s, cols: width / s, cell_width: s, cell_height: s }
            }
            TilingSpec::CellExtent{ cell_width, cell_height } => {
                TileGrid{ rows: height / cell_height, cols: width / cell_width, cell_width, cell_height }
            }
            TilingSpec::GridDim{ rows, cols } => {
                TileGrid{ rows, cols, cell_width: width / cols, cell_height: height / rows }
            }
        }
    }

    pub fn n_cells (&self)->usize {
        (self.rows * self.cols) as usize
    }
}

/// linear cell index in row-major order
#[inline]
pub fn cell_index (i: u32, j: u32, cols: u32)->u32 {
    i * cols + j
}

pub fn get_hex_rgb (hex_color: &str)->Result<[u8;3]> {
    let v = u32::from_str_radix( hex_color, 16)
        .map_err( |_| TileMarkError::IllegalArgument( format!("invalid hex color spec: {hex_color}")))?;

    let r = (v >> 16) as u8;
    let g = (v >> 8 & 0xff) as u8;
    let b = (v & 0xff) as u8;

    Ok( [r, g, b] )
}

/* #endregion tiling geometry */

/* #region font resources ************************************************************************************/

// checked in order - any reasonably provisioned system should have one of these
const FONT_CANDIDATES: &'static [&'static str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    "/System/Library/Fonts/Helvetica.ttc",
    "C:\\Windows\\Fonts\\arial.ttf",
];

pub fn find_default_font ()->Option<PathBuf> {
    FONT_CANDIDATES.iter().map( |p| Path::new(p)).find( |p| p.is_file()).map( |p| p.to_path_buf())
}

pub fn load_font<P> (path: P)->Result<FontVec> where P: AsRef<Path> {
    let path = path.as_ref();
    if !path.is_file() {
        Err( TileMarkError::FontError( format!("font not found: {}", path.display())) )

    } else {
        let data = std::fs::read( path)?;
        Ok( FontVec::try_from_vec( data)? )
    }
}

pub fn load_default_font ()->Result<FontVec> {
    let path = find_default_font()
        .ok_or( TileMarkError::FontError("no sans-serif font found on this system".into()))?;
    load_font( &path)
}

/* #endregion font resources */

/* #region grid rendering ************************************************************************************/

const DOT_PERIOD: u32 = 2; // 1px on, 1px off

pub fn draw_dotted_hline_mut (img: &mut RgbImage, y: u32, color: Rgb<u8>) {
    let (w, h) = img.dimensions();
    if y >= h { return }

    let mut x = 0;
    while x < w {
        img.put_pixel( x, y, color);
        x += DOT_PERIOD;
    }
}

pub fn draw_dotted_vline_mut (img: &mut RgbImage, x: u32, color: Rgb<u8>) {
    let (w, h) = img.dimensions();
    if x >= w { return }

    let mut y = 0;
    while y < h {
        img.put_pixel( x, y, color);
        y += DOT_PERIOD;
    }
}

/// draw dotted cell separators plus a centered linear index label per cell.
/// Cells are indexed in row-major order starting at 0
pub fn draw_index_grid (img: &mut RgbImage, grid: &TileGrid, pt_size: f32, color: Rgb<u8>)->Result<()> {
    let font = load_default_font()?;
    draw_index_grid_with_font( img, grid, &font, pt_size, color)
}

pub fn draw_index_grid_with_font (img: &mut RgbImage, grid: &TileGrid, font: &FontVec, pt_size: f32, color: Rgb<u8>)->Result<()> {
    let scale: PxScale = font.pt_to_px_scale( pt_size)
        .ok_or( TileMarkError::IllegalArgument("invalid font pt size".to_string()))?;

    for i in 1..grid.rows {
        draw_dotted_hline_mut( img, i * grid.cell_height, color);
    }
    for j in 1..grid.cols {
        draw_dotted_vline_mut( img, j * grid.cell_width, color);
    }

    for i in 0..grid.rows {
        let y = (i * grid.cell_height) as i32;
        for j in 0..grid.cols {
            let x = (j * grid.cell_width) as i32;

            let label = cell_index( i, j, grid.cols).to_string();
            let (tw, th) = text_size( scale, font, label.as_str());

            let tx = x + (grid.cell_width as i32 - tw as i32) / 2;
            let ty = y + (grid.cell_height as i32 - th as i32) / 2;
            draw_text_mut( img, color, tx, ty, scale, font, label.as_str());
        }
    }

    Ok(())
}

/// the full pipeline: load the image, resolve the tiling against its dimensions,
/// draw the annotated grid and save to out_path (format inferred from extension)
pub fn mark_tile_grid<P,Q> (in_path: P, out_path: Q, spec: TilingSpec, pt_size: f32, color: Rgb<u8>)->Result<()>
    where P: AsRef<Path>, Q: AsRef<Path>
{
    let mut img = image::open( in_path.as_ref())?.to_rgb8();
    let grid = TileGrid::resolve( spec, img.width(), img.height());

    draw_index_grid( &mut img, &grid, pt_size, color)?;
    Ok( img.save( out_path.as_ref())? )
}

/* #endregion grid rendering */
