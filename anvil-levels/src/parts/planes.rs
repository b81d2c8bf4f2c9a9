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

/// A half-space, `{x : dot(normal, x) <= dist}`. Brushes are made of these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Plane normal, unit length
    pub normal: Vector3<f32>,

    /// Distance from origin to plane along normal
    pub dist: f32,
}

impl Plane {
    /// Signed distance of `point` from the plane. Negative is inside.
    pub fn distance_to(&self, point: &Vector3<f32>) -> f32 {
        self.normal.dot(point) - self.dist
    }

    /// The same plane with its distance multiplied by `scale`.
    pub fn scaled(&self, scale: f32) -> Plane {
        Plane {
            normal: self.normal,
            dist: self.dist * scale,
        }
    }
}
