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

use anvil_levels::parts::Plane;
use na::Vector3;

/// Smallest cross product length that still gives a usable normal.
const MIN_NORMAL_LEN: f32 = 1e-6;

/// The plane through three points of a brush face, already in level axes.
///
/// The normal points out of the brush, so the brush lies on the negative side.
/// Returns `None` if the points are collinear.
pub fn plane_from_points(
    p1: &Vector3<f32>,
    p2: &Vector3<f32>,
    p3: &Vector3<f32>,
) -> Option<Plane> {
    let normal = (p3 - p1).cross(&(p2 - p1)).try_normalize(MIN_NORMAL_LEN)?;

    Some(Plane {
        normal,
        dist: normal.dot(p1),
    })
}
