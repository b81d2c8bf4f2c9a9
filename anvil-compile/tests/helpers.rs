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

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use anvil_compile::{CompileOptions, CompileOptionsBuilder};
use anvil_levels::FormatVersion;

/// Face lines of an axis-aligned cube from `min` to `max` on every axis.
pub fn cube_faces(min: f32, max: f32, textures: [&str; 6]) -> String {
    let (a, b) = (min, max);
    let points = [
        [[a, a, a], [a, b, a], [a, a, b]],
        [[a, a, a], [a, a, b], [b, a, a]],
        [[a, a, a], [b, a, a], [a, b, a]],
        [[b, b, b], [b, a, b], [a, b, b]],
        [[b, b, b], [a, b, b], [b, b, a]],
        [[b, b, b], [b, b, a], [b, a, b]],
    ];

    let mut out = String::from("{\n");
    for (face, texture) in points.iter().zip(textures.iter()) {
        for p in face.iter() {
            out += &format!("( {} {} {} ) ", p[0], p[1], p[2]);
        }
        out += &format!("{} 0 0 0 1 1\n", texture);
    }
    out += "}\n";

    out
}

/// A unit cube, centred on the origin, with every face textured `texture`.
pub fn unit_cube(texture: &str) -> String {
    cube_faces(-0.5, 0.5, [texture; 6])
}

pub fn entity(classname: &str, brushes: &[String]) -> String {
    format!(
        "{{\n\"classname\" \"{}\"\n{}}}\n",
        classname,
        brushes.concat()
    )
}

/// Write `src` to `<dir>/test.map`
pub fn write_map(dir: &Path, src: &str) -> PathBuf {
    let path = dir.join("test.map");
    fs::write(&path, src).unwrap();
    path
}

pub fn options(dir: &Path, version: FormatVersion) -> CompileOptions {
    CompileOptionsBuilder::default()
        .texture_root(dir.join("textures"))
        .format_version(version)
        .build()
        .unwrap()
}
