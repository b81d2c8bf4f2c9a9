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

//! Marker types for different co-ordinate systems, and functions to swizzle between them

use na::base::Scalar;
use na::Vector3;
use std::ops::Neg;

pub trait CoordSystem {}

/// X points East, Y points North, Z points upwards. What `.map` files are written in.
pub struct QuakeSystem;
impl CoordSystem for QuakeSystem {}

/// X points East, Y points upwards, Z points South. Right-handed, what ABSP files are stored in.
pub struct YUpSystem;
impl CoordSystem for YUpSystem {}

pub struct Swizzler;

pub trait SwizzleFromTo<F: CoordSystem, T: CoordSystem> {
    fn swizzle<U: Scalar + Copy + Neg<Output = U>>(vec: &mut Vector3<U>);
}

impl SwizzleFromTo<QuakeSystem, YUpSystem> for Swizzler {
    fn swizzle<U: Scalar + Copy + Neg<Output = U>>(vec: &mut Vector3<U>) {
        let temp = vec.y;
        vec.y = vec.z;
        vec.z = -temp;
    }
}

impl SwizzleFromTo<YUpSystem, QuakeSystem> for Swizzler {
    fn swizzle<U: Scalar + Copy + Neg<Output = U>>(vec: &mut Vector3<U>) {
        let temp = vec.z;
        vec.z = vec.y;
        vec.y = -temp;
    }
}

/// Convert a point read from a map file into level space.
pub fn quake_to_y_up(x: f32, y: f32, z: f32) -> Vector3<f32> {
    let mut v = Vector3::new(x, y, z);
    <Swizzler as SwizzleFromTo<QuakeSystem, YUpSystem>>::swizzle(&mut v);
    v
}
