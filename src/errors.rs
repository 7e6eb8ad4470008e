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

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TileMarkError>;

#[derive(Error, Debug)]
pub enum TileMarkError {
    #[error("Image error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("IO error: {0}")]
    IOError(#[from] std::io::Error),

    #[error("Invalid font error: {0}")]
    InvalidFont(#[from] ab_glyph::InvalidFont),

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("font error: {0}")]
    FontError(String),

    #[error("illegal argument: {0}")]
    IllegalArgument(String),
}
