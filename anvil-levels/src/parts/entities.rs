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

use na::Vector3;

/// A trigger volume. The only kind of entity that survives compilation.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    /// The entity's classname. Stored in a 64 byte field in the file.
    pub name: String,

    /// Center of the bounding box
    pub position: Vector3<f32>,

    /// Full extent of the bounding box along each axis
    pub size: Vector3<f32>,
}

impl Entity {
    pub fn mins(&self) -> Vector3<f32> {
        self.position - self.size * 0.5
    }

    pub fn maxs(&self) -> Vector3<f32> {
        self.position + self.size * 0.5
    }
}
