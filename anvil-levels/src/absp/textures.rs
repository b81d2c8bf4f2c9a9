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
use std::io::{self, Write};

use crate::helpers::{name_to_bytes, slice_to_name, slice_to_u32, NAME_LEN};
use crate::parts::Texture;
use crate::types::{ParseError, Result};

pub const TEXTURE_ENTRY_SIZE: usize = NAME_LEN + (4 * 4);

/// Parse the texture entries, taking each texture's pixels from the front of `pixels` in turn.
/// # Format
/// Each entry is:
/// string[64] name     Texture name.
/// u32 width
/// u32 height
/// u32 format          Always 4 (RGBA) for now.
/// u32 data_size       Length of this texture's pixel data.
pub fn from_data(entries: &[u8], pixels: &[u8]) -> Result<Vec<Texture>> {
    let mut textures = Vec::with_capacity(entries.len() / TEXTURE_ENTRY_SIZE);
    let mut offset = 0;

    for entry in entries.chunks_exact(TEXTURE_ENTRY_SIZE) {
        let data_size = slice_to_u32(&entry[NAME_LEN + 12..NAME_LEN + 16]) as usize;
        let end = offset + data_size;
        if end > pixels.len() {
            return Err(ParseError::Truncated {
                section: "pixels",
                needed: end,
                available: pixels.len(),
            });
        }

        textures.push(Texture {
            name: slice_to_name(&entry[0..NAME_LEN]).ok_or(ParseError::InvalidName("textures"))?,
            width: slice_to_u32(&entry[NAME_LEN..NAME_LEN + 4]),
            height: slice_to_u32(&entry[NAME_LEN + 4..NAME_LEN + 8]),
            format: slice_to_u32(&entry[NAME_LEN + 8..NAME_LEN + 12]),
            data: pixels[offset..end].into(),
        });
        offset = end;
    }

    Ok(textures)
}

pub fn write_entries<W: Write>(w: &mut W, textures: &[Texture]) -> io::Result<()> {
    for texture in textures {
        w.write_all(&name_to_bytes(&texture.name))?;
        w.write_u32::<LittleEndian>(texture.width)?;
        w.write_u32::<LittleEndian>(texture.height)?;
        w.write_u32::<LittleEndian>(texture.format)?;
        w.write_u32::<LittleEndian>(texture.data_size())?;
    }

    Ok(())
}

pub fn write_pixels<W: Write>(w: &mut W, textures: &[Texture]) -> io::Result<()> {
    for texture in textures {
        w.write_all(&texture.data)?;
    }

    Ok(())
}
