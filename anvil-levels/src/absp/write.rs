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

//! Serialising a level to an absp file

use log::debug;
use std::io::{self, Write};

use super::header::{Header, Section};
use super::*;
use crate::level::Level;

/// Build the header `level` would be written with.
pub fn header_for(level: &Level, version: FormatVersion) -> Header {
    let mut header = Header {
        version,
        num_vertices: level.vertices.len() as u32,
        num_faces: level.faces.len() as u32,
        num_entities: level.entities.len() as u32,
        num_planes: level.planes.len() as u32,
        num_brushes: level.brushes.len() as u32,
        num_textures: if version.has_textures() {
            level.textures.len() as u32
        } else {
            0
        },
        dir_entries: None,
    };

    if version.has_directory() {
        let pixels_len = level.textures.iter().map(|t| t.data_size()).sum();
        header.dir_entries = Some(header.computed_layout(pixels_len));
    }

    header
}

/// Write `level` in the given format version.
/// V1 files have nowhere to put textures, so they're left out.
pub fn write_level<W: Write>(level: &Level, version: FormatVersion, w: &mut W) -> io::Result<()> {
    let header = header_for(level, version);
    header.write_to(w)?;

    vertices::write_to(w, &level.vertices)?;
    faces::write_to(w, &level.faces)?;
    entities::write_to(w, &level.entities)?;
    planes::write_to(w, &level.planes)?;
    brushes::write_to(w, &level.brushes)?;

    if version.has_textures() {
        textures::write_entries(w, &level.textures)?;
        textures::write_pixels(w, &level.textures)?;
    } else if !level.textures.is_empty() {
        debug!(
            "Leaving out {} textures, {} has no texture section",
            level.textures.len(),
            version
        );
    }

    Ok(())
}

/// Total size in bytes of `level` written in the given format version.
pub fn written_len(level: &Level, version: FormatVersion) -> usize {
    let header = header_for(level, version);
    let pixels_len = if version.has_textures() {
        level.textures.iter().map(|t| t.data_size()).sum()
    } else {
        0
    };
    let end = header.computed_layout(pixels_len)[Section::Pixels as usize];

    end.offset as usize + end.length as usize
}
