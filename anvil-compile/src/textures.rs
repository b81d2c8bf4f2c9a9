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

//! Loading and de-duplicating the textures a map uses

use std::collections::HashMap;

use image::RgbaImage;
use log::{debug, warn};

use anvil_levels::parts::{Texture, TextureRef, FORMAT_RGBA};

use crate::options::CompileOptions;

/// Somewhere to get the pixels of a texture from, given its name.
pub trait TextureResolver {
    /// Returns `None` if the texture can't be found or loaded.
    fn resolve(&mut self, name: &str) -> Option<RgbaImage>;
}

impl<F> TextureResolver for F
where
    F: FnMut(&str) -> Option<RgbaImage>,
{
    fn resolve(&mut self, name: &str) -> Option<RgbaImage> {
        (self)(name)
    }
}

/// Loads textures from image files under the options' texture root.
#[derive(Debug, Clone)]
pub struct FsResolver<'a> {
    opts: &'a CompileOptions,
}

impl<'a> FsResolver<'a> {
    pub fn new(opts: &'a CompileOptions) -> FsResolver<'a> {
        FsResolver { opts }
    }
}

impl TextureResolver for FsResolver<'_> {
    fn resolve(&mut self, name: &str) -> Option<RgbaImage> {
        let path = self.opts.texture_path(name);

        match image::open(&path) {
            Ok(img) => Some(img.into_rgba8()),
            Err(e) => {
                debug!("Couldn't load {:?}: {}", path, e);
                None
            }
        }
    }
}

/// Every texture a level uses, in the order they were first referenced.
pub struct TextureRegistry<R> {
    resolver: R,
    indices: HashMap<String, TextureRef>,
    textures: Vec<Texture>,
}

impl<R: TextureResolver> TextureRegistry<R> {
    pub fn new(resolver: R) -> Self {
        TextureRegistry {
            resolver,
            indices: HashMap::new(),
            textures: Vec::new(),
        }
    }

    /// Get the index of the texture called `name`, loading it the first time it's seen.
    /// Textures that can't be loaded are replaced with a checkerboard.
    pub fn resolve(&mut self, name: &str) -> TextureRef {
        if let Some(&idx) = self.indices.get(name) {
            return idx;
        }

        let texture = match self.resolver.resolve(name) {
            Some(img) => Texture {
                name: name.to_owned(),
                width: img.width(),
                height: img.height(),
                format: FORMAT_RGBA,
                data: img.into_raw().into_boxed_slice(),
            },
            None => {
                warn!("Texture {} not found, using placeholder", name);
                Texture::placeholder(name)
            }
        };

        let idx = self.textures.len() as TextureRef;
        self.textures.push(texture);
        self.indices.insert(name.to_owned(), idx);

        idx
    }

    pub fn into_textures(self) -> Vec<Texture> {
        self.textures
    }
}
