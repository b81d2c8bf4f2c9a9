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

use na::{Vector2, Vector3};

pub type VertexRef = u32;

/// A vertex, used to describe a face.
/// Every face owns its own run of vertices, they aren't shared.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Position in level units
    pub position: Vector3<f32>,
    pub tex: Vector2<f32>,

    /// Copied from the plane the face lies on
    pub normal: Vector3<f32>,
}
