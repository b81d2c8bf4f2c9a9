/*
 * Copyright (C) Oscar Shrimpton 2020
 *
 * This program is free software: you can redistribute it and/or modify it
 * under the terms of the GNU General Public License as published by the Free
 * Software Foundation, either version 3 of the License, or (at your option)
 * any later version.
 *
 * This program is distributed in the hope that it will be useful, but WITHOUT
 * ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
 * FITNESS FOR A PARTICULAR PURPOSE.  See the GNU General Public License for
 * more details.
 *
 * You should have received a copy of the GNU General Public License along
 * with this program.  If not, see <http://www.gnu.org/licenses/>.
 */

/// Format tag for 8-bit RGBA pixel data.
pub const FORMAT_RGBA: u32 = 4;

/// A texture embedded in a level, along with its pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    /// Name as referenced by the map, ie `base/wall`
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub format: u32,
    pub data: Box<[u8]>,
}

impl Texture {
    /// The 2x2 magenta/black checkerboard used when an image can't be loaded.
    pub fn placeholder(name: &str) -> Texture {
        #[rustfmt::skip]
        const CHECKERBOARD: [u8; 16] = [
            255, 0, 255, 255,   0, 0, 0, 255,
            0, 0, 0, 255,       255, 0, 255, 255,
        ];

        Texture {
            name: name.to_owned(),
            width: 2,
            height: 2,
            format: FORMAT_RGBA,
            data: Box::new(CHECKERBOARD),
        }
    }

    /// Length of the pixel payload in bytes
    pub fn data_size(&self) -> u32 {
        self.data.len() as u32
    }
}
