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

use byteorder::{LittleEndian, WriteBytesExt};
use std::convert::TryFrom;
use std::io::{self, Write};

use super::{brushes, entities, faces, planes, textures, vertices, FormatVersion};
use crate::helpers::slice_to_u32;
use crate::types::{ParseError, Result};

pub const MAGIC_HEADER: &[u8; 4] = b"ABSP";

/// Number of entries in a V3 section directory
pub const SECTION_COUNT: usize = 7;

/// magic + version + 5 counts
const V1_HEADER_LEN: usize = 4 + 4 + (5 * 4);

/// V1 + texture count
const V2_HEADER_LEN: usize = V1_HEADER_LEN + 4;

/// V2 + directory
const V3_HEADER_LEN: usize = V2_HEADER_LEN + (SECTION_COUNT * 4 * 2);

/// The sections of a file, in the order they're stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Vertices = 0,
    Faces = 1,
    Entities = 2,
    Planes = 3,
    Brushes = 4,
    TextureEntries = 5,
    Pixels = 6,
}

impl Section {
    pub fn name(self) -> &'static str {
        match self {
            Section::Vertices => "vertices",
            Section::Faces => "faces",
            Section::Entities => "entities",
            Section::Planes => "planes",
            Section::Brushes => "brushes",
            Section::TextureEntries => "texture entries",
            Section::Pixels => "pixels",
        }
    }
}

/// A directory entry, pointing to a section in the file
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DirEntry {
    /// Offset from beginning of file to start of section
    pub offset: u32,

    /// Length of section in bytes
    pub length: u32,
}

/// The header found at the start of an absp file
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    pub version: FormatVersion,
    pub num_vertices: u32,
    pub num_faces: u32,
    pub num_entities: u32,
    pub num_planes: u32,
    pub num_brushes: u32,

    /// Always 0 for V1 files
    pub num_textures: u32,

    /// Only present in V3 files
    pub dir_entries: Option<[DirEntry; SECTION_COUNT]>,
}

impl Header {
    /// Deserialise from buffer.
    /// # Format
    /// string[4] magic             Magic number. Always "ABSP".
    /// u32 version                 1, 2 or 3.
    /// u32[5] counts               Vertices, faces, entities, planes, brushes.
    /// u32 num_textures            V2 and later.
    /// direntry[7] direntries      V3 and later. Section directory.
    pub fn from(v: &[u8]) -> Result<Header> {
        if v.len() < V1_HEADER_LEN {
            return Err(ParseError::Truncated {
                section: "header",
                needed: V1_HEADER_LEN,
                available: v.len(),
            });
        }

        if &v[0..4] != MAGIC_HEADER {
            let mut magic = [0; 4];
            magic.copy_from_slice(&v[0..4]);
            return Err(ParseError::BadMagic(magic));
        }

        let version = FormatVersion::try_from(slice_to_u32(&v[4..8]))?;
        let header_len = Header::len_for(version);
        if v.len() < header_len {
            return Err(ParseError::Truncated {
                section: "header",
                needed: header_len,
                available: v.len(),
            });
        }

        let num_textures = if version.has_textures() {
            slice_to_u32(&v[28..32])
        } else {
            0
        };

        let dir_entries = if version.has_directory() {
            let entries = &v[V2_HEADER_LEN..V3_HEADER_LEN];
            let mut dir_entries = [DirEntry::default(); SECTION_COUNT];
            for (n, entry) in dir_entries.iter_mut().enumerate() {
                let base = &entries[(n * 8)..(n * 8) + 8];
                *entry = DirEntry {
                    offset: slice_to_u32(&base[0..4]),
                    length: slice_to_u32(&base[4..8]),
                };
            }
            Some(dir_entries)
        } else {
            None
        };

        Ok(Header {
            version,
            num_vertices: slice_to_u32(&v[8..12]),
            num_faces: slice_to_u32(&v[12..16]),
            num_entities: slice_to_u32(&v[16..20]),
            num_planes: slice_to_u32(&v[20..24]),
            num_brushes: slice_to_u32(&v[24..28]),
            num_textures,
            dir_entries,
        })
    }

    pub fn len_for(version: FormatVersion) -> usize {
        match version {
            FormatVersion::V1 => V1_HEADER_LEN,
            FormatVersion::V2 => V2_HEADER_LEN,
            FormatVersion::V3 => V3_HEADER_LEN,
        }
    }

    /// Size of this header in bytes
    pub fn size(&self) -> usize {
        Header::len_for(self.version)
    }

    /// Where each section sits, worked out from the counts.
    /// `pixels_len` is the total size of the pixel data, which the counts can't tell us.
    /// Saturates instead of overflowing, so bogus counts show up as out of bounds sections.
    pub fn computed_layout(&self, pixels_len: u32) -> [DirEntry; SECTION_COUNT] {
        let lengths = [
            self.num_vertices.saturating_mul(vertices::VERTEX_SIZE as u32),
            self.num_faces.saturating_mul(faces::FACE_SIZE as u32),
            self.num_entities.saturating_mul(entities::ENTITY_SIZE as u32),
            self.num_planes.saturating_mul(planes::PLANE_SIZE as u32),
            self.num_brushes.saturating_mul(brushes::BRUSH_SIZE as u32),
            self.num_textures.saturating_mul(textures::TEXTURE_ENTRY_SIZE as u32),
            pixels_len,
        ];

        let mut entries = [DirEntry::default(); SECTION_COUNT];
        let mut offset = self.size() as u32;
        for (entry, length) in entries.iter_mut().zip(lengths.iter()) {
            *entry = DirEntry {
                offset,
                length: *length,
            };
            offset = offset.saturating_add(*length);
        }

        entries
    }

    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(MAGIC_HEADER)?;
        w.write_u32::<LittleEndian>(self.version.as_u32())?;
        w.write_u32::<LittleEndian>(self.num_vertices)?;
        w.write_u32::<LittleEndian>(self.num_faces)?;
        w.write_u32::<LittleEndian>(self.num_entities)?;
        w.write_u32::<LittleEndian>(self.num_planes)?;
        w.write_u32::<LittleEndian>(self.num_brushes)?;

        if self.version.has_textures() {
            w.write_u32::<LittleEndian>(self.num_textures)?;
        }

        if self.version.has_directory() {
            let entries = self.dir_entries.unwrap_or_default();
            for entry in entries.iter() {
                w.write_u32::<LittleEndian>(entry.offset)?;
                w.write_u32::<LittleEndian>(entry.length)?;
            }
        }

        Ok(())
    }
}
