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

//! Reading & writing ABSP files.
//!
//! All values are little-endian and tightly packed. The file is a header followed by the
//! vertex, face, entity, plane, brush and texture entry arrays, then the pixel data of every
//! texture in the same order as the texture entries.

mod brushes;
mod entities;
mod faces;
pub mod file;
pub mod header;
mod planes;
mod textures;
mod vertices;
pub mod write;

pub use self::file::AbspFile;
pub use self::header::{DirEntry, Header, Section};
pub use self::write::write_level;

use crate::types::ParseError;
use std::convert::TryFrom;
use std::fmt;

/// The different revisions of the format. Newer versions only ever add to older ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u32)]
pub enum FormatVersion {
    /// No texture count in the header and no texture sections.
    V1 = 1,

    /// Adds the texture count, texture entries and pixel data.
    V2 = 2,

    /// Adds a directory of section offsets & lengths after the header counts.
    V3 = 3,
}

impl FormatVersion {
    pub fn has_textures(self) -> bool {
        self >= FormatVersion::V2
    }

    pub fn has_directory(self) -> bool {
        self >= FormatVersion::V3
    }

    pub fn as_u32(self) -> u32 {
        self as u32
    }
}

impl Default for FormatVersion {
    fn default() -> Self {
        FormatVersion::V2
    }
}

impl TryFrom<u32> for FormatVersion {
    type Error = ParseError;

    fn try_from(version: u32) -> Result<Self, Self::Error> {
        match version {
            1 => Ok(FormatVersion::V1),
            2 => Ok(FormatVersion::V2),
            3 => Ok(FormatVersion::V3),
            v => Err(ParseError::UnsupportedVersion(v)),
        }
    }
}

impl fmt::Display for FormatVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.as_u32())
    }
}
