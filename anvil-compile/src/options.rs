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

//! Options controlling how a map is compiled

use std::path::PathBuf;

pub use anvil_levels::FormatVersion;

/// Source units are multiplied by this to get level units.
pub const DEFAULT_UNIT_SCALE: f32 = 0.1;

/// Texture coordinates per source unit.
pub const DEFAULT_TEXTURE_DENSITY: f32 = 0.01;

/// Points this close to a plane count as on it, in source units.
pub const DEFAULT_CLIP_EPSILON: f32 = 0.01;

/// Half-size of the quad every face starts out as, in source units.
pub const DEFAULT_SEED_EXTENT: f32 = 10_000.0;

#[derive(Builder, Debug, Clone, PartialEq)]
pub struct CompileOptions {
    #[builder(default = "DEFAULT_UNIT_SCALE")]
    pub unit_scale: f32,

    #[builder(default = "DEFAULT_TEXTURE_DENSITY")]
    pub texture_density: f32,

    #[builder(default = "DEFAULT_CLIP_EPSILON")]
    pub clip_epsilon: f32,

    #[builder(default = "DEFAULT_SEED_EXTENT")]
    pub seed_extent: f32,

    /// Textures are loaded from `<texture_root>/<name>.<texture_extension>`
    #[builder(setter(into), default = "PathBuf::from(\"textures\")")]
    pub texture_root: PathBuf,

    #[builder(setter(into), default = "\"png\".to_string()")]
    pub texture_extension: String,

    #[builder(default)]
    pub format_version: FormatVersion,

    /// Entities whose classname contains this are kept as trigger volumes.
    #[builder(setter(into), default = "\"trigger\".to_string()")]
    pub trigger_substring: String,

    /// Apply the per-face offset, rotation and scale to texture coordinates.
    #[builder(default = "false")]
    pub apply_texture_alignment: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        CompileOptions {
            unit_scale: DEFAULT_UNIT_SCALE,
            texture_density: DEFAULT_TEXTURE_DENSITY,
            clip_epsilon: DEFAULT_CLIP_EPSILON,
            seed_extent: DEFAULT_SEED_EXTENT,
            texture_root: PathBuf::from("textures"),
            texture_extension: "png".to_string(),
            format_version: FormatVersion::default(),
            trigger_substring: "trigger".to_string(),
            apply_texture_alignment: false,
        }
    }
}

impl CompileOptions {
    /// Where the texture called `name` would be loaded from.
    pub fn texture_path(&self, name: &str) -> PathBuf {
        self.texture_root
            .join(format!("{}.{}", name, self.texture_extension))
    }

    pub fn is_trigger(&self, classname: &str) -> bool {
        classname.contains(self.trigger_substring.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_match_default() {
        let built = CompileOptionsBuilder::default().build().unwrap();
        assert_eq!(built, CompileOptions::default());
    }

    #[test]
    fn builder_overrides() {
        let opts = CompileOptionsBuilder::default()
            .texture_root("assets/tex")
            .format_version(FormatVersion::V3)
            .build()
            .unwrap();

        assert_eq!(opts.format_version, FormatVersion::V3);
        assert_eq!(
            opts.texture_path("stone"),
            PathBuf::from("assets/tex/stone.png")
        );
        assert!(opts.is_trigger("trigger_multiple"));
        assert!(!opts.is_trigger("worldspawn"));
    }
}
