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

use crate::helpers::slice_to_u32;
use crate::parts::Face;

pub const FACE_SIZE: usize = 4 * 3;

/// Parse the faces section. Its length must be a multiple of `FACE_SIZE`.
/// Indices are checked by the caller, once every section is loaded.
pub fn from_data(data: &[u8]) -> Vec<Face> {
    data.chunks_exact(FACE_SIZE)
        .map(|face| Face {
            first_vertex: slice_to_u32(&face[0..4]),
            num_vertices: slice_to_u32(&face[4..8]),
            texture_idx: slice_to_u32(&face[8..12]),
        })
        .collect()
}

pub fn write_to<W: Write>(w: &mut W, faces: &[Face]) -> io::Result<()> {
    for face in faces {
        w.write_u32::<LittleEndian>(face.first_vertex)?;
        w.write_u32::<LittleEndian>(face.num_vertices)?;
        w.write_u32::<LittleEndian>(face.texture_idx)?;
    }

    Ok(())
}

#[test]
fn faces_multiple_faces() {
    let buf: &[u8] = &[
        0x00, 0x00, 0x00, 0x00, // first vertex
        0x04, 0x00, 0x00, 0x00, // num vertices
        0x01, 0x00, 0x00, 0x00, // texture
        0x04, 0x00, 0x00, 0x00, //
        0x03, 0x00, 0x00, 0x00, //
        0x00, 0x00, 0x00, 0x00, //
    ];

    let faces = from_data(buf);

    assert_eq!(
        faces,
        vec![
            Face {
                first_vertex: 0,
                num_vertices: 4,
                texture_idx: 1
            },
            Face {
                first_vertex: 4,
                num_vertices: 3,
                texture_idx: 0
            }
        ]
    );
}
