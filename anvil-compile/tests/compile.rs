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

mod helpers;

use std::fs;

use image::{Rgba, RgbaImage};
use nalgebra::Vector3;

use anvil_compile::{compile_map, compile_str, CompileError};
use anvil_levels::absp::write_level;
use anvil_levels::helpers::{slice_to_u32, slice_to_vec3};
use anvil_levels::parts::{Texture, FORMAT_RGBA};
use anvil_levels::{AbspFile, FormatVersion};

use helpers::*;

const V2_HEADER_LEN: usize = 32;
const VERTEX_SIZE: usize = 32;

#[rustfmt::skip]
const CHECKERBOARD: [u8; 16] = [
    255, 0, 255, 255,   0, 0, 0, 255,
    0, 0, 0, 255,       255, 0, 255, 255,
];

fn no_textures(_: &str) -> Option<RgbaImage> {
    None
}

/// One unit cube in worldspawn, with a texture that doesn't exist.
#[test]
fn unit_cube_missing_texture() {
    let dir = tempfile::tempdir().unwrap();
    let map = write_map(dir.path(), &entity("worldspawn", &[unit_cube("stone")]));
    let out = dir.path().join("world.absp");

    compile_map(&map, &out, &options(dir.path(), FormatVersion::V2)).unwrap();
    let data = fs::read(&out).unwrap();

    assert_eq!(&data[0..4], b"ABSP");
    assert_eq!(slice_to_u32(&data[4..8]), 2);
    assert_eq!(slice_to_u32(&data[8..12]), 24); // vertices
    assert_eq!(slice_to_u32(&data[12..16]), 6); // faces
    assert_eq!(slice_to_u32(&data[16..20]), 0); // entities
    assert_eq!(slice_to_u32(&data[20..24]), 6); // planes
    assert_eq!(slice_to_u32(&data[24..28]), 1); // brushes
    assert_eq!(slice_to_u32(&data[28..32]), 1); // textures

    assert_eq!(
        data.len(),
        V2_HEADER_LEN + 24 * VERTEX_SIZE + 6 * 12 + 6 * 16 + 8 + 80 + 16
    );
    assert_eq!(&data[data.len() - 16..], &CHECKERBOARD);

    for i in 0..24 {
        let start = V2_HEADER_LEN + i * VERTEX_SIZE;
        let position = slice_to_vec3(&data[start..start + 12]);
        for c in position.iter() {
            assert!((c.abs() - 0.05).abs() < 1e-3, "vertex {} at {:?}", i, position);
        }
    }

    let level = AbspFile::open(&out).unwrap().into_level();
    assert_eq!(level.textures, vec![Texture::placeholder("stone")]);
    assert!(level.faces.iter().all(|f| f.texture_idx == 0));
}

#[test]
fn textures_are_deduplicated() {
    let first = cube_faces(-0.5, 0.5, ["stone", "wood", "stone", "wood", "stone", "stone"]);
    let second = cube_faces(4.0, 8.0, ["wood", "wood", "stone", "metal", "stone", "wood"]);
    let src = entity("worldspawn", &[first, second]);

    let level = compile_str(&src, &Default::default(), no_textures).unwrap();
    let names: Vec<&str> = level.textures.iter().map(|t| t.name.as_str()).collect();

    assert_eq!(names, vec!["stone", "wood", "metal"]);
    assert_eq!(level.faces.len(), 12);

    let ids: Vec<u32> = level.faces.iter().map(|f| f.texture_idx).collect();
    assert_eq!(ids, vec![0, 1, 0, 1, 0, 0, 1, 1, 0, 2, 0, 1]);
}

#[test]
fn png_textures_are_embedded() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("textures/base")).unwrap();

    let mut img = RgbaImage::from_pixel(4, 2, Rgba([200, 100, 50, 255]));
    img.put_pixel(3, 1, Rgba([1, 2, 3, 4]));
    img.save(dir.path().join("textures/base/brick.png")).unwrap();

    let map = write_map(dir.path(), &entity("worldspawn", &[unit_cube("base/brick")]));
    let out = dir.path().join("world.absp");
    compile_map(&map, &out, &options(dir.path(), FormatVersion::V2)).unwrap();

    let level = AbspFile::open(&out).unwrap().into_level();
    assert_eq!(level.textures.len(), 1);

    let tex = &level.textures[0];
    assert_eq!(tex.name, "base/brick");
    assert_eq!((tex.width, tex.height), (4, 2));
    assert_eq!(tex.format, FORMAT_RGBA);
    assert_eq!(&tex.data[..], &img.into_raw()[..]);
}

#[test]
fn trigger_entities_are_kept() {
    let src = [
        entity("worldspawn", &[unit_cube("stone")]),
        entity(
            "trigger_multiple",
            &[cube_faces(8.0, 16.0, ["trigger"; 6])],
        ),
        entity("info_player_start", &[]),
    ]
    .concat();

    let dir = tempfile::tempdir().unwrap();
    let map = write_map(dir.path(), &src);
    let out = dir.path().join("world.absp");
    compile_map(&map, &out, &options(dir.path(), FormatVersion::V3)).unwrap();

    let file = AbspFile::open(&out).unwrap();
    assert_eq!(file.version(), FormatVersion::V3);
    assert_eq!(file.level.brushes.len(), 2);
    assert_eq!(file.level.entities.len(), 1);

    let trigger = &file.level.entities[0];
    assert_eq!(trigger.name, "trigger_multiple");
    // Quake (12, 12, 12) is (12, 12, -12) in level axes
    assert!((trigger.position - Vector3::new(1.2, 1.2, -1.2)).norm() < 1e-4);
    assert!((trigger.size - Vector3::new(0.8, 0.8, 0.8)).norm() < 1e-4);
}

#[test]
fn missing_map_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("world.absp");

    let result = compile_map(
        dir.path().join("nope.map"),
        &out,
        &options(dir.path(), FormatVersion::V2),
    );

    assert!(matches!(result, Err(CompileError::MapNotFound(_))));
    assert!(!out.exists());
}

#[test]
fn bad_number_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let src = entity("worldspawn", &[unit_cube("stone").replacen("-0.5", "-0,5", 1)]);
    let map = write_map(dir.path(), &src);
    let out = dir.path().join("world.absp");

    let result = compile_map(&map, &out, &options(dir.path(), FormatVersion::V2));

    match result {
        Err(CompileError::BadNumber { line, token }) => {
            assert_eq!(line, 4);
            assert_eq!(token, "-0,5");
        }
        other => panic!("expected BadNumber, got {:?}", other),
    }
    assert!(!out.exists());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn existing_output_survives_failed_compile() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("world.absp");
    fs::write(&out, b"previous").unwrap();

    let map = write_map(dir.path(), "{\n\"classname\" \"worldspawn\"\n{\n");
    let result = compile_map(&map, &out, &options(dir.path(), FormatVersion::V2));

    assert!(matches!(result, Err(CompileError::UnexpectedEof { .. })));
    assert_eq!(fs::read(&out).unwrap(), b"previous");
}

#[test]
fn written_level_reads_back_identically() {
    let src = [
        entity(
            "worldspawn",
            &[
                unit_cube("stone"),
                cube_faces(-64.0, 64.0, ["a", "b", "c", "d", "e", "f"]),
            ],
        ),
        entity("trigger_once", &[unit_cube("trigger")]),
    ]
    .concat();

    for &version in [FormatVersion::V1, FormatVersion::V2, FormatVersion::V3].iter() {
        let dir = tempfile::tempdir().unwrap();
        let map = write_map(dir.path(), &src);
        let out = dir.path().join("world.absp");

        let level = compile_map(&map, &out, &options(dir.path(), version)).unwrap();
        let data = fs::read(&out).unwrap();
        let file = AbspFile::parse_file(&data).unwrap();

        assert_eq!(file.version(), version);
        assert_eq!(file.level.vertices, level.vertices);
        assert_eq!(file.level.faces, level.faces);
        assert_eq!(file.level.planes, level.planes);
        assert_eq!(file.level.brushes, level.brushes);
        assert_eq!(file.level.entities, level.entities);
        if version.has_textures() {
            assert_eq!(file.level.textures, level.textures);
        } else {
            assert!(file.level.textures.is_empty());
        }

        let mut rewritten = Vec::new();
        write_level(&file.level, version, &mut rewritten).unwrap();
        assert_eq!(rewritten, data);
    }
}
