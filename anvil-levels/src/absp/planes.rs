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

use byteorder::{LittleEndian, WriteBytesExt};
use std::io::{self, Write};

use crate::helpers::{slice_to_f32, slice_to_vec3, write_vec3};
use crate::parts::Plane;

pub const PLANE_SIZE: usize = (4 * 3) + 4;

/// Parse the planes section. Its length must be a multiple of `PLANE_SIZE`.
pub fn from_data(data: &[u8]) -> Vec<Plane> {
    data.chunks_exact(PLANE_SIZE)
        .map(|plane| Plane {
            normal: slice_to_vec3(&plane[0..12]),
            dist: slice_to_f32(&plane[12..16]),
        })
        .collect()
}

pub fn write_to<W: Write>(w: &mut W, planes: &[Plane]) -> io::Result<()> {
    for plane in planes {
        write_vec3(w, &plane.normal)?;
        w.write_f32::<LittleEndian>(plane.dist)?;
    }

    Ok(())
}
