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

use std::io::{self, Write};

use crate::helpers::{slice_to_vec2, slice_to_vec3, write_vec2, write_vec3};
use crate::parts::Vertex;

/// The size of one vertex
pub const VERTEX_SIZE: usize = (4 * 3) + (4 * 2) + (4 * 3);

/// Parse the vertices section. Its length must be a multiple of `VERTEX_SIZE`.
pub fn from_data(data: &[u8]) -> Vec<Vertex> {
    data.chunks_exact(VERTEX_SIZE)
        .map(|vertex| Vertex {
            position: slice_to_vec3(&vertex[0..12]),
            tex: slice_to_vec2(&vertex[12..20]),
            normal: slice_to_vec3(&vertex[20..32]),
        })
        .collect()
}

pub fn write_to<W: Write>(w: &mut W, vertices: &[Vertex]) -> io::Result<()> {
    for vertex in vertices {
        write_vec3(w, &vertex.position)?;
        write_vec2(w, &vertex.tex)?;
        write_vec3(w, &vertex.normal)?;
    }

    Ok(())
}

#[test]
fn vertices_single_vertex() {
    let buf: &[u8] = &[
        0x00, 0x00, 0x80, 0x3f, // position x = 1.0
        0x00, 0x00, 0x00, 0xc0, // position y = -2.0
        0x00, 0x00, 0x00, 0x3f, // position z = 0.5
        0x00, 0x00, 0x00, 0x00, // u = 0.0
        0x00, 0x00, 0x80, 0x3e, // v = 0.25
        0x00, 0x00, 0x00, 0x00, // normal x
        0x00, 0x00, 0x80, 0x3f, // normal y = 1.0
        0x00, 0x00, 0x00, 0x00, // normal z
    ];

    let vertices = from_data(buf);

    assert_eq!(vertices.len(), 1);
    assert_eq!(vertices[0].position, na::Vector3::new(1.0, -2.0, 0.5));
    assert_eq!(vertices[0].tex, na::Vector2::new(0.0, 0.25));
    assert_eq!(vertices[0].normal, na::Vector3::new(0.0, 1.0, 0.0));

    let mut out = Vec::new();
    write_to(&mut out, &vertices).unwrap();
    assert_eq!(out, buf);
}
