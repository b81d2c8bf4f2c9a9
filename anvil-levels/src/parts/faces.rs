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

use super::vertices::VertexRef;
use std::ops::Range;

pub type TextureRef = u32;

/// A convex polygon. Its vertices are a contiguous run in the level's vertex array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    pub first_vertex: VertexRef,
    pub num_vertices: u32,
    pub texture_idx: TextureRef,
}

impl Face {
    pub fn vertices_idx(&self) -> Range<usize> {
        let start = self.first_vertex as usize;
        start..start + self.num_vertices as usize
    }

    /// Triangulate as a fan around the first vertex.
    /// Yields `(0, i, i + 1)` for `i` in `1..n - 1`, offset by `first_vertex`.
    pub fn triangles(&self) -> impl Iterator<Item = [VertexRef; 3]> {
        let base = self.first_vertex;
        (1..self.num_vertices.saturating_sub(1)).map(move |i| [base, base + i, base + i + 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_is_two_triangles() {
        let face = Face {
            first_vertex: 8,
            num_vertices: 4,
            texture_idx: 0,
        };

        let tris: Vec<_> = face.triangles().collect();
        assert_eq!(tris, vec![[8, 9, 10], [8, 10, 11]]);
        assert_eq!(face.vertices_idx(), 8..12);
    }

    #[test]
    fn degenerate_face_has_no_triangles() {
        let face = Face {
            first_vertex: 0,
            num_vertices: 2,
            texture_idx: 0,
        };

        assert_eq!(face.triangles().count(), 0);
    }
}
