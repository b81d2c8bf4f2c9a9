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

//! Command-line front end for the map compiler

use std::convert::TryFrom;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;

use anvil_compile::error::full_error_display;
use anvil_compile::{compile_map, CompileOptionsBuilder};
use anvil_levels::{AbspFile, FormatVersion};

#[derive(Parser, Debug)]
#[command(name = "anvil-compile", version, about)]
struct Cli {
    /// More logging. Pass twice for everything.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile a .map file into a level
    Map {
        input: PathBuf,

        #[arg(short, long, default_value = "world.absp")]
        output: PathBuf,

        /// Directory to load <texture>.png files from
        #[arg(long, default_value = "textures")]
        textures: PathBuf,

        /// Level format version to write (1 has no textures, 3 adds a section directory)
        #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..=3))]
        format_version: u32,

        /// Apply per-face texture offset, rotation and scale
        #[arg(long)]
        apply_alignment: bool,
    },

    /// Print what's in a level file
    Info { file: PathBuf },
}

fn main() {
    if let Err(err) = try_main() {
        eprintln!("{}", full_error_display(err));
        process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();

    let level = match (cli.quiet, cli.verbose) {
        (true, _) => LevelFilter::Warn,
        (false, 0) => LevelFilter::Info,
        (false, 1) => LevelFilter::Debug,
        (false, _) => LevelFilter::Trace,
    };
    simplelog::TermLogger::init(
        level,
        simplelog::ConfigBuilder::new()
            .set_max_level(LevelFilter::Debug)
            .build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .context("Error initialising logger")?;

    match cli.command {
        Command::Map {
            input,
            output,
            textures,
            format_version,
            apply_alignment,
        } => {
            let format_version = FormatVersion::try_from(format_version)?;
            let opts = CompileOptionsBuilder::default()
                .texture_root(textures)
                .format_version(format_version)
                .apply_texture_alignment(apply_alignment)
                .build()
                .context("Error building compile options")?;

            compile_map(&input, &output, &opts)
                .with_context(|| format!("Error compiling {:?}", input))?;
        }
        Command::Info { file } => print_info(&file)?,
    }

    Ok(())
}

fn print_info(path: &Path) -> Result<()> {
    let file = AbspFile::open(path).with_context(|| format!("Error loading {:?}", path))?;
    let header = &file.header;
    let level = &file.level;

    println!("{:?}: ABSP {}", path, file.version());
    println!("  vertices: {}", header.num_vertices);
    println!("  faces:    {}", header.num_faces);
    println!("  entities: {}", header.num_entities);
    println!("  planes:   {}", header.num_planes);
    println!("  brushes:  {}", header.num_brushes);
    println!("  textures: {}", level.textures.len());

    if let Some(dir) = &header.dir_entries {
        println!("  directory:");
        for (i, entry) in dir.iter().enumerate() {
            println!("    {:>2}: {:>8} +{}", i, entry.offset, entry.length);
        }
    }

    for (i, tex) in level.textures.iter().enumerate() {
        println!(
            "  texture {}: {} ({}x{}, format {}, {} bytes)",
            i,
            tex.name,
            tex.width,
            tex.height,
            tex.format,
            tex.data_size()
        );
    }

    for ent in level.entities.iter() {
        let mins = ent.mins();
        let maxs = ent.maxs();
        println!(
            "  {}: ({}, {}, {}) to ({}, {}, {})",
            ent.name, mins.x, mins.y, mins.z, maxs.x, maxs.y, maxs.z
        );
    }

    Ok(())
}
