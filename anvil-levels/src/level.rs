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

//! A complete level, as produced by the compiler or read back from a file.

use crate::parts::{Brush, Entity, Face, Plane, Texture, Vertex};

/// All the arrays that make up a level.
/// Faces index into `vertices` and `textures`, brushes index into `planes`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Level {
    pub vertices: Vec<Vertex>,
    pub faces: Vec<Face>,
    pub entities: Vec<Entity>,
    pub planes: Vec<Plane>,
    pub brushes: Vec<Brush>,
    pub textures: Vec<Texture>,
}

impl Level {
    pub fn new() -> Level {
        Level::default()
    }

    pub fn face_vertices(&self, face: &Face) -> &[Vertex] {
        &self.vertices[face.vertices_idx()]
    }

    /// Every triangle in the level, as indices into `vertices`.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.faces.iter().flat_map(|face| face.triangles())
    }
}
