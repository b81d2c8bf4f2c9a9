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

//! The brushes section. Each brush is a run of planes.

use byteorder::{LittleEndian, WriteBytesExt};
use std::io::{self, Write};

use crate::helpers::slice_to_u32;
use crate::parts::Brush;

/// The size of one brush record.
pub const BRUSH_SIZE: usize = 4 * 2;

/// Parse the brushes section. Its length must be a multiple of `BRUSH_SIZE`.
pub fn from_data(data: &[u8]) -> Vec<Brush> {
    data.chunks_exact(BRUSH_SIZE)
        .map(|brush| Brush {
            first_plane: slice_to_u32(&brush[0..4]),
            num_planes: slice_to_u32(&brush[4..8]),
        })
        .collect()
}

pub fn write_to<W: Write>(w: &mut W, brushes: &[Brush]) -> io::Result<()> {
    for brush in brushes {
        w.write_u32::<LittleEndian>(brush.first_plane)?;
        w.write_u32::<LittleEndian>(brush.num_planes)?;
    }

    Ok(())
}
