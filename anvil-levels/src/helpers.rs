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

//! Helper functions for reading and writing ABSP records

use byteorder::{LittleEndian, WriteBytesExt};
use log::warn;
use na::{Vector2, Vector3};
use std::convert::TryInto;
use std::io::{self, Write};

/// Length of the fixed name fields used by entities and textures.
pub const NAME_LEN: usize = 64;

/// Turn a slice into a le u32, the int datatype in an absp file.
/// # Panics
/// If slice is not 4 bytes long.
pub fn slice_to_u32(slice: &[u8]) -> u32 {
    u32::from_le_bytes(slice.try_into().unwrap())
}

/// Turn a slice into a le f32, the float datatype in an absp file.
/// # Panics
/// If slice is not 4 bytes long
pub fn slice_to_f32(slice: &[u8]) -> f32 {
    f32::from_bits(slice_to_u32(slice))
}

/// Turn a slice of floats into a 3D vector
/// # Panics
/// If slice isn't 12 bytes long.
pub fn slice_to_vec3(slice: &[u8]) -> Vector3<f32> {
    Vector3::new(
        slice_to_f32(&slice[0..4]),
        slice_to_f32(&slice[4..8]),
        slice_to_f32(&slice[8..12]),
    )
}

/// Turn a slice of floats into a 2D vector
/// # Panics
/// If slice isn't 8 bytes long.
pub fn slice_to_vec2(slice: &[u8]) -> Vector2<f32> {
    Vector2::new(slice_to_f32(&slice[0..4]), slice_to_f32(&slice[4..8]))
}

/// Read a NUL-padded name field. Returns `None` if it isn't valid UTF-8.
pub fn slice_to_name(slice: &[u8]) -> Option<String> {
    let end = slice.iter().position(|b| *b == 0).unwrap_or(slice.len());
    std::str::from_utf8(&slice[..end]).ok().map(str::to_owned)
}

pub fn write_vec3<W: Write>(w: &mut W, v: &Vector3<f32>) -> io::Result<()> {
    w.write_f32::<LittleEndian>(v.x)?;
    w.write_f32::<LittleEndian>(v.y)?;
    w.write_f32::<LittleEndian>(v.z)
}

pub fn write_vec2<W: Write>(w: &mut W, v: &Vector2<f32>) -> io::Result<()> {
    w.write_f32::<LittleEndian>(v.x)?;
    w.write_f32::<LittleEndian>(v.y)
}

/// Pack a name into a NUL-padded field. At most `NAME_LEN - 1` bytes are kept, cut on a
/// character boundary, so the field is always terminated.
pub fn name_to_bytes(name: &str) -> [u8; NAME_LEN] {
    let mut end = name.len().min(NAME_LEN - 1);
    while !name.is_char_boundary(end) {
        end -= 1;
    }

    if end < name.len() {
        warn!(
            "Name `{}` is longer than {} bytes, truncating to `{}`",
            name,
            NAME_LEN - 1,
            &name[..end]
        );
    }

    let mut buf = [0; NAME_LEN];
    buf[..end].copy_from_slice(&name.as_bytes()[..end]);
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_names_are_padded() {
        let buf = name_to_bytes("stone");
        assert_eq!(&buf[..5], b"stone");
        assert!(buf[5..].iter().all(|b| *b == 0));
        assert_eq!(slice_to_name(&buf).unwrap(), "stone");
    }

    #[test]
    fn long_names_are_truncated_and_terminated() {
        let name = "a".repeat(100);
        let buf = name_to_bytes(&name);
        assert_eq!(buf[NAME_LEN - 1], 0);
        assert_eq!(slice_to_name(&buf).unwrap(), "a".repeat(63));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        // 62 ascii bytes then a 2-byte character straddling the limit
        let name = format!("{}é", "b".repeat(62));
        let buf = name_to_bytes(&name);
        assert_eq!(slice_to_name(&buf).unwrap(), "b".repeat(62));
    }

    #[test]
    fn invalid_utf8_names() {
        let mut buf = [0; NAME_LEN];
        buf[0] = 0xff;
        assert!(slice_to_name(&buf).is_none());
    }

    #[test]
    fn read_floats() {
        let bytes = 1.5_f32.to_le_bytes();
        assert_eq!(slice_to_f32(&bytes), 1.5);

        let mut buf = Vec::new();
        write_vec3(&mut buf, &Vector3::new(1.0, -2.0, 3.5)).unwrap();
        assert_eq!(slice_to_vec3(&buf), Vector3::new(1.0, -2.0, 3.5));
    }
}
