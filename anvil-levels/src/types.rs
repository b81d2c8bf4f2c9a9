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

//! Error types used when reading ABSP files.

use thiserror::Error;

/// An error encountered while parsing.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Not an ABSP file (magic was {0:?})")]
    BadMagic([u8; 4]),

    #[error("Unsupported ABSP version {0}")]
    UnsupportedVersion(u32),

    #[error("Section `{section}` is truncated: needed {needed} bytes, {available} available")]
    Truncated {
        section: &'static str,
        needed: usize,
        available: usize,
    },

    #[error("{what} {index} references {target} {value}, but there are only {len}")]
    InvalidIndex {
        what: &'static str,
        index: usize,
        target: &'static str,
        value: u64,
        len: usize,
    },

    #[error("Name in section `{0}` is not valid UTF-8")]
    InvalidName(&'static str),

    #[error("I/O error reading level")]
    Io(#[from] std::io::Error),
}

/// Standard result type.
pub type Result<T> = std::result::Result<T, ParseError>;
