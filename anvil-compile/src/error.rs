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

//! Error types

use std::path::PathBuf;
use thiserror::Error;

/// An error that stops a map from compiling.
#[derive(Error, Debug)]
pub enum CompileError {
    #[error("Map not found: {0:?}")]
    MapNotFound(PathBuf),

    #[error("Error reading map {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line}: expected {expected}, found `{found}`")]
    UnexpectedToken {
        line: usize,
        found: String,
        expected: &'static str,
    },

    #[error("Line {line}: `{token}` is not a number")]
    BadNumber { line: usize, token: String },

    #[error("Unexpected end of map, expected {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("Line {line}: unterminated string")]
    UnterminatedString { line: usize },

    #[error("Line {line}: `}}` without a matching `{{`")]
    UnbalancedBrace { line: usize },

    #[error("Line {line}: `{token}` definitions are not supported")]
    UnsupportedDefinition { line: usize, token: String },

    #[error("Error writing level to {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Displays an error with all of its causes
pub fn full_error_display(err: anyhow::Error) -> String {
    let cont = err
        .chain()
        .skip(1)
        .map(|cause| format!("    caused by: {}", cause))
        .collect::<Vec<String>>()
        .join("\n");

    format!("Error: {}\n{}", err, cont)
}
