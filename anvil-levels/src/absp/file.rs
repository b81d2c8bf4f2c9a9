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

//! A complete ABSP file

use std::fs;
use std::path::Path;

use super::header::{DirEntry, Header, Section};
use super::*;
use crate::level::Level;
use crate::types::{ParseError, Result};

/// A parsed ABSP file.
#[derive(Debug, Clone, PartialEq)]
pub struct AbspFile {
    pub header: Header,
    pub level: Level,
}

impl AbspFile {
    /// Read and parse the file at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<AbspFile> {
        let data = fs::read(path)?;
        AbspFile::parse_file(&data)
    }

    /// Parse `data` as an absp file, of any supported version.
    pub fn parse_file(data: &[u8]) -> Result<AbspFile> {
        let header = Header::from(data)?;

        let layout = match header.dir_entries {
            Some(entries) => entries,
            None => {
                // Pixel data runs to the end of the file
                let textures_end = header.computed_layout(0)[Section::Pixels as usize].offset;
                let pixels_len = (data.len() as u32).saturating_sub(textures_end);
                header.computed_layout(pixels_len)
            }
        };

        let vertices = vertices::from_data(get_section(
            data,
            &layout,
            Section::Vertices,
            header.num_vertices,
            vertices::VERTEX_SIZE,
        )?);
        let faces = faces::from_data(get_section(
            data,
            &layout,
            Section::Faces,
            header.num_faces,
            faces::FACE_SIZE,
        )?);
        let entities = entities::from_data(get_section(
            data,
            &layout,
            Section::Entities,
            header.num_entities,
            entities::ENTITY_SIZE,
        )?)?;
        let planes = planes::from_data(get_section(
            data,
            &layout,
            Section::Planes,
            header.num_planes,
            planes::PLANE_SIZE,
        )?);
        let brushes = brushes::from_data(get_section(
            data,
            &layout,
            Section::Brushes,
            header.num_brushes,
            brushes::BRUSH_SIZE,
        )?);

        let textures = if header.version.has_textures() {
            let entries = get_section(
                data,
                &layout,
                Section::TextureEntries,
                header.num_textures,
                textures::TEXTURE_ENTRY_SIZE,
            )?;
            let pixels = get_bytes(data, layout[Section::Pixels as usize], Section::Pixels)?;
            textures::from_data(entries, pixels)?
        } else {
            Vec::new()
        };

        let level = Level {
            vertices,
            faces,
            entities,
            planes,
            brushes,
            textures,
        };
        validate(&level, header.version)?;

        Ok(AbspFile { header, level })
    }

    pub fn version(&self) -> FormatVersion {
        self.header.version
    }

    pub fn into_level(self) -> Level {
        self.level
    }
}

/// Get a section holding `count` records of `size` bytes each.
fn get_section<'l>(
    data: &'l [u8],
    layout: &[DirEntry],
    section: Section,
    count: u32,
    size: usize,
) -> Result<&'l [u8]> {
    let entry = layout[section as usize];
    let needed = count as usize * size;
    if entry.length as usize != needed {
        return Err(ParseError::Truncated {
            section: section.name(),
            needed,
            available: entry.length as usize,
        });
    }

    get_bytes(data, entry, section)
}

fn get_bytes(data: &[u8], entry: DirEntry, section: Section) -> Result<&[u8]> {
    let start = entry.offset as usize;
    let end = start + entry.length as usize;
    if end > data.len() {
        return Err(ParseError::Truncated {
            section: section.name(),
            needed: end,
            available: data.len(),
        });
    }

    Ok(&data[start..end])
}

/// Check every index in the level points at something.
fn validate(level: &Level, version: FormatVersion) -> Result<()> {
    for (n, face) in level.faces.iter().enumerate() {
        let end = face.first_vertex as u64 + face.num_vertices as u64;
        if end > level.vertices.len() as u64 {
            return Err(ParseError::InvalidIndex {
                what: "Face",
                index: n,
                target: "vertex",
                value: end - 1,
                len: level.vertices.len(),
            });
        }

        if version.has_textures() && face.texture_idx as usize >= level.textures.len() {
            return Err(ParseError::InvalidIndex {
                what: "Face",
                index: n,
                target: "texture",
                value: face.texture_idx as u64,
                len: level.textures.len(),
            });
        }
    }

    for (n, brush) in level.brushes.iter().enumerate() {
        let end = brush.first_plane as u64 + brush.num_planes as u64;
        if end > level.planes.len() as u64 {
            return Err(ParseError::InvalidIndex {
                what: "Brush",
                index: n,
                target: "plane",
                value: end - 1,
                len: level.planes.len(),
            });
        }
    }

    Ok(())
}
