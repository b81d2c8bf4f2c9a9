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

use std::io::{self, Write};

use crate::helpers::{name_to_bytes, slice_to_name, slice_to_vec3, write_vec3, NAME_LEN};
use crate::parts::Entity;
use crate::types::{ParseError, Result};

pub const ENTITY_SIZE: usize = NAME_LEN + (4 * 3) + (4 * 3);

/// Try to parse the given buffer as an entities section.
/// # Format
/// Each entity is:
/// string[64] name     Classname, NUL-padded.
/// float[3] position   Center of the bounding box.
/// float[3] size       Extent of the bounding box.
pub fn from_data(data: &[u8]) -> Result<Vec<Entity>> {
    data.chunks_exact(ENTITY_SIZE)
        .map(|entity| {
            Ok(Entity {
                name: slice_to_name(&entity[0..NAME_LEN])
                    .ok_or(ParseError::InvalidName("entities"))?,
                position: slice_to_vec3(&entity[NAME_LEN..NAME_LEN + 12]),
                size: slice_to_vec3(&entity[NAME_LEN + 12..NAME_LEN + 24]),
            })
        })
        .collect()
}

pub fn write_to<W: Write>(w: &mut W, entities: &[Entity]) -> io::Result<()> {
    for entity in entities {
        w.write_all(&name_to_bytes(&entity.name))?;
        write_vec3(w, &entity.position)?;
        write_vec3(w, &entity.size)?;
    }

    Ok(())
}

#[test]
fn entities_single_entity() {
    let mut buf = vec![0; ENTITY_SIZE];
    buf[..16].copy_from_slice(b"trigger_multiple");
    buf[NAME_LEN..NAME_LEN + 4].copy_from_slice(&1.0_f32.to_le_bytes());
    buf[NAME_LEN + 12..NAME_LEN + 16].copy_from_slice(&2.0_f32.to_le_bytes());

    let entities = from_data(&buf).unwrap();

    assert_eq!(entities.len(), 1);
    assert_eq!(entities[0].name, "trigger_multiple");
    assert_eq!(entities[0].position, na::Vector3::new(1.0, 0.0, 0.0));
    assert_eq!(entities[0].size, na::Vector3::new(2.0, 0.0, 0.0));
}
