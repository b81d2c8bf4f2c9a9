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

//! Level data produced by the anvil map compiler, and the ABSP file format it's stored in.

extern crate nalgebra as na;

pub mod absp;
pub mod coords;
pub mod helpers;
pub mod level;
pub mod parts;
pub mod types;

pub use absp::{AbspFile, FormatVersion};
pub use level::Level;
pub use types::{ParseError, Result};
