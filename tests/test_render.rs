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
#![allow(unused)]

use image::{Rgb, RgbImage};
use tilemark::{
    draw_dotted_hline_mut, draw_dotted_vline_mut, draw_index_grid, load_default_font,
    mark_tile_grid, TileGrid, TilingSpec,
};

// run with "cargo test test_xx -- --nocapture"

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

#[test]
fn test_dotted_hline() {
    let mut img = RgbImage::new( 10, 8);
    draw_dotted_hline_mut( &mut img, 4, WHITE);

    // 1px on, 1px off along the stroke
    assert_eq!( *img.get_pixel( 0, 4), WHITE);
    assert_eq!( *img.get_pixel( 1, 4), BLACK);
    assert_eq!( *img.get_pixel( 2, 4), WHITE);
    assert_eq!( *img.get_pixel( 9, 4), BLACK);

    // neighboring rows stay untouched
    for x in 0..10 {
        assert_eq!( *img.get_pixel( x, 3), BLACK);
        assert_eq!( *img.get_pixel( x, 5), BLACK);
    }
}

#[test]
fn test_dotted_vline() {
    let mut img = RgbImage::new( 8, 10);
    draw_dotted_vline_mut( &mut img, 3, WHITE);

    assert_eq!( *img.get_pixel( 3, 0), WHITE);
    assert_eq!( *img.get_pixel( 3, 1), BLACK);
    assert_eq!( *img.get_pixel( 3, 8), WHITE);

    for y in 0..10 {
        assert_eq!( *img.get_pixel( 2, y), BLACK);
        assert_eq!( *img.get_pixel( 4, y), BLACK);
    }
}

#[test]
fn test_line_outside_bounds() {
    // lines past the image extent are dropped, not drawn out-of-bounds
    let mut img = RgbImage::new( 10, 10);
    draw_dotted_hline_mut( &mut img, 10, WHITE);
    draw_dotted_vline_mut( &mut img, 200, WHITE);

    assert!( img.pixels().all( |p| *p == BLACK));
}

#[test]
fn test_index_grid_render() {
    if load_default_font().is_err() { return } // skip where no system font is installed

    let mut img = RgbImage::new( 60, 40);
    let grid = TileGrid::resolve( TilingSpec::GridDim{ rows: 2, cols: 3 }, 60, 40);
    assert_eq!( grid, TileGrid{ rows: 2, cols: 3, cell_width: 20, cell_height: 20 });

    draw_index_grid( &mut img, &grid, 10.0, WHITE).unwrap();

    // dotted separators: one horizontal at y=20, verticals at x=20 and x=40
    assert_eq!( *img.get_pixel( 0, 20), WHITE);
    assert_eq!( *img.get_pixel( 2, 20), WHITE);
    assert_eq!( *img.get_pixel( 20, 0), WHITE);
    assert_eq!( *img.get_pixel( 40, 0), WHITE);

    // each cell interior holds label pixels (anti-aliased, so just non-black)
    for i in 0..2u32 {
        for j in 0..3u32 {
            let marked = (j*20+2 .. j*20+18).any( |x| {
                (i*20+2 .. i*20+18).any( |y| *img.get_pixel( x, y) != BLACK)
            });
            assert!( marked, "no label pixels in cell ({i},{j})");
        }
    }

    // image corner stays clear of both separators and labels
    assert_eq!( *img.get_pixel( 1, 1), BLACK);
}

#[test]
fn test_mark_tile_grid_files() {
    if load_default_font().is_err() { return } // skip where no system font is installed

    let in_path = std::env::temp_dir().join("tilemark_in.png");
    let out_path = std::env::temp_dir().join("tilemark_out.png");

    RgbImage::new( 60, 40).save( &in_path).unwrap();
    mark_tile_grid( &in_path, &out_path, TilingSpec::CellSize(20), 10.0, WHITE).unwrap();

    let out = image::open( &out_path).unwrap().to_rgb8();
    assert_eq!( out.dimensions(), (60, 40));
    assert_eq!( *out.get_pixel( 0, 20), WHITE);
    assert_eq!( *out.get_pixel( 20, 0), WHITE);

    std::fs::remove_file( &in_path).unwrap();
    std::fs::remove_file( &out_path).unwrap();
}

#[test]
fn test_empty_grid_render() {
    if load_default_font().is_err() { return } // skip where no system font is installed

    // cell size exceeds the image - nothing to draw, no error
    let mut img = RgbImage::new( 100, 100);
    let grid = TileGrid::resolve( TilingSpec::CellSize(200), 100, 100);

    draw_index_grid( &mut img, &grid, 10.0, WHITE).unwrap();
    assert!( img.pixels().all( |p| *p == BLACK));
}
