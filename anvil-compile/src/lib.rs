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

//! Compiles brush-based `.map` files into ABSP levels.
//!
//! Each brush in the map is a set of half-spaces. For every plane of a brush, a huge quad is laid
//! on the plane and clipped by all the other planes of the brush, which leaves the face of the
//! brush on that plane. Faces, planes, textures and trigger volumes are collected into a
//! [`Level`](anvil_levels::Level), which is then written out as an ABSP file.

extern crate nalgebra as na;

#[macro_use]
extern crate derive_builder;

pub mod brush;
pub mod compiler;
pub mod error;
pub mod geometry;
pub mod map;
pub mod options;
pub mod textures;

pub use compiler::{compile_file, compile_map, compile_str, write_level_atomic};
pub use error::CompileError;
pub use options::{CompileOptions, CompileOptionsBuilder};
