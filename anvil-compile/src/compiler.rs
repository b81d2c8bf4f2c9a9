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

//! Compiling map files into level files

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;
use tempfile::NamedTempFile;

use anvil_levels::absp::write_level;
use anvil_levels::{FormatVersion, Level};

use crate::error::CompileError;
use crate::map::parse_map;
use crate::options::CompileOptions;
use crate::textures::{FsResolver, TextureResolver};

/// Compile map source, loading textures through `resolver`.
pub fn compile_str<R: TextureResolver>(
    src: &str,
    opts: &CompileOptions,
    resolver: R,
) -> Result<Level, CompileError> {
    let level = parse_map(src, opts, resolver)?;

    info!(
        "{} brushes, {} planes, {} faces, {} vertices, {} triggers, {} textures",
        level.brushes.len(),
        level.planes.len(),
        level.faces.len(),
        level.vertices.len(),
        level.entities.len(),
        level.textures.len()
    );

    Ok(level)
}

/// Compile the map at `path`, loading textures from the filesystem.
pub fn compile_file<P: AsRef<Path>>(path: P, opts: &CompileOptions) -> Result<Level, CompileError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(CompileError::MapNotFound(path.to_path_buf()));
    }

    info!("Compiling {:?}", path);
    let src = fs::read_to_string(path).map_err(|source| CompileError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    compile_str(&src, opts, FsResolver::new(opts))
}

/// Write `level` to `path`. The file only appears once it has been completely written.
pub fn write_level_atomic<P: AsRef<Path>>(
    level: &Level,
    path: P,
    version: FormatVersion,
) -> Result<(), CompileError> {
    let path = path.as_ref();
    let write_err = |source: std::io::Error| CompileError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;

    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        write_level(level, version, &mut writer).map_err(write_err)?;
        writer.flush().map_err(write_err)?;
    }
    tmp.as_file().sync_all().map_err(write_err)?;

    tmp.persist(path).map_err(|e| write_err(e.error))?;
    info!("Wrote {} level to {:?}", version, path);

    Ok(())
}

/// Compile the map at `input` and write it to `output`.
/// Nothing is written if compilation fails.
pub fn compile_map<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    opts: &CompileOptions,
) -> Result<Level, CompileError> {
    let level = compile_file(input, opts)?;
    write_level_atomic(&level, output, opts.format_version)?;

    Ok(level)
}
