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

//! Turning the planes of a brush into faces

use log::{debug, trace};
use na::{Vector2, Vector3};

use anvil_levels::parts::{Brush, Face, Plane, Vertex};
use anvil_levels::Level;

use crate::geometry::Winding;
use crate::options::CompileOptions;

/// Fewest planes that can enclose a volume
pub const MIN_BRUSH_PLANES: usize = 4;

/// Texture offset, rotation and scale given after a face's texture name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TexAlignment {
    pub offset: Vector2<f32>,

    /// Degrees, anticlockwise
    pub rotation: f32,
    pub scale: Vector2<f32>,
}

impl TexAlignment {
    /// Transform a projected coordinate, in source units.
    pub fn apply(&self, coord: Vector2<f32>) -> Vector2<f32> {
        let (sin, cos) = self.rotation.to_radians().sin_cos();
        let rotated = Vector2::new(
            coord.x * cos - coord.y * sin,
            coord.x * sin + coord.y * cos,
        );

        let scale_x = if self.scale.x == 0.0 { 1.0 } else { self.scale.x };
        let scale_y = if self.scale.y == 0.0 { 1.0 } else { self.scale.y };

        Vector2::new(rotated.x / scale_x, rotated.y / scale_y) + self.offset
    }
}

/// One plane of a brush, with what's painted on it.
#[derive(Debug, Clone, PartialEq)]
pub struct BrushSide {
    /// In source units
    pub plane: Plane,
    pub texture_idx: u32,
    pub alignment: Option<TexAlignment>,
}

/// The polygon left on side `idx` once it's clipped by every other side.
pub fn face_winding(sides: &[BrushSide], idx: usize, opts: &CompileOptions) -> Winding {
    let mut winding = Winding::base_for(&sides[idx].plane, opts.seed_extent);

    for (i, side) in sides.iter().enumerate() {
        if i == idx {
            continue;
        }

        winding = winding.clip(&side.plane, opts.clip_epsilon);
        if winding.is_empty() {
            break;
        }
    }

    winding
}

/// Project `point` onto the axis plane closest to facing `normal`.
fn project(point: &Vector3<f32>, normal: &Vector3<f32>) -> Vector2<f32> {
    if normal.y.abs() > 0.5 {
        Vector2::new(point.x, point.z)
    } else {
        Vector2::new(point.x, point.y)
    }
}

fn tex_coord(point: &Vector3<f32>, side: &BrushSide, opts: &CompileOptions) -> Vector2<f32> {
    let mut coord = project(point, &side.plane.normal);

    if opts.apply_texture_alignment {
        if let Some(alignment) = &side.alignment {
            coord = alignment.apply(coord);
        }
    }

    coord * opts.texture_density
}

/// Add a brush, its planes, and the faces it ends up with to `level`.
/// Returns how many faces were added.
pub fn emit_brush(sides: &[BrushSide], opts: &CompileOptions, level: &mut Level) -> usize {
    if sides.len() < MIN_BRUSH_PLANES {
        debug!(
            "Dropping brush with {} planes, need at least {}",
            sides.len(),
            MIN_BRUSH_PLANES
        );
        return 0;
    }

    level.brushes.push(Brush {
        first_plane: level.planes.len() as u32,
        num_planes: sides.len() as u32,
    });
    level
        .planes
        .extend(sides.iter().map(|s| s.plane.scaled(opts.unit_scale)));

    let mut emitted = 0;
    for (i, side) in sides.iter().enumerate() {
        let winding = face_winding(sides, i, opts);
        if winding.is_degenerate() {
            debug!("Side {} clipped away ({} points left)", i, winding.len());
            continue;
        }
        trace!("Side {} has {} points", i, winding.len());

        level.faces.push(Face {
            first_vertex: level.vertices.len() as u32,
            num_vertices: winding.len() as u32,
            texture_idx: side.texture_idx,
        });
        level
            .vertices
            .extend(winding.points().iter().map(|point| Vertex {
                position: point * opts.unit_scale,
                tex: tex_coord(point, side, opts),
                normal: side.plane.normal,
            }));
        emitted += 1;
    }

    emitted
}
