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

//! Convex polygons, and clipping them against planes

use anvil_levels::parts::Plane;
use na::Vector3;

/// An ordered list of points making up a convex polygon.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Winding {
    points: Vec<Vector3<f32>>,
}

/// Two unit vectors perpendicular to `normal` and to each other.
pub fn tangent_basis(normal: &Vector3<f32>) -> (Vector3<f32>, Vector3<f32>) {
    let up = if normal.y.abs() > 0.99 {
        Vector3::new(1.0, 0.0, 0.0)
    } else {
        Vector3::new(0.0, 1.0, 0.0)
    };
    let right = normal.cross(&up).normalize();
    let up = right.cross(normal);

    (right, up)
}

impl Winding {
    /// A square lying on `plane`, centred on the point closest to the origin and reaching `extent`
    /// units along both tangent axes.
    /// Wound clockwise when looking down at the plane from the side its normal points to.
    pub fn base_for(plane: &Plane, extent: f32) -> Winding {
        let (right, up) = tangent_basis(&plane.normal);
        let centre = plane.normal * plane.dist;
        let right = right * extent;
        let up = up * extent;

        Winding {
            points: vec![
                centre + right + up,
                centre - right + up,
                centre - right - up,
                centre + right - up,
            ],
        }
    }

    /// The part of this polygon on the negative side of `plane`.
    /// Points within `epsilon` of the plane are kept.
    pub fn clip(&self, plane: &Plane, epsilon: f32) -> Winding {
        let mut points = Vec::with_capacity(self.points.len() + 1);

        for (i, p1) in self.points.iter().enumerate() {
            let p2 = &self.points[(i + 1) % self.points.len()];
            let d1 = plane.distance_to(p1);
            let d2 = plane.distance_to(p2);

            if d1 <= epsilon {
                points.push(*p1);
            }

            if (d1 > epsilon && d2 < -epsilon) || (d1 < -epsilon && d2 > epsilon) {
                let t = d1 / (d1 - d2);
                points.push(p1 + (p2 - p1) * t);
            }
        }

        Winding { points }
    }

    pub fn points(&self) -> &[Vector3<f32>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Fewer than 3 points, ie no area.
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 3
    }
}

impl From<Vec<Vector3<f32>>> for Winding {
    fn from(points: Vec<Vector3<f32>>) -> Self {
        Winding { points }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.01;

    fn plane(x: f32, y: f32, z: f32, dist: f32) -> Plane {
        Plane {
            normal: Vector3::new(x, y, z).normalize(),
            dist,
        }
    }

    fn square() -> Winding {
        Winding::from(vec![
            Vector3::new(1.0, 0.0, 1.0),
            Vector3::new(-1.0, 0.0, 1.0),
            Vector3::new(-1.0, 0.0, -1.0),
            Vector3::new(1.0, 0.0, -1.0),
        ])
    }

    #[test]
    fn base_winding_lies_on_plane() {
        let planes = [
            plane(0.0, 1.0, 0.0, 16.0),
            plane(1.0, 0.0, 0.0, -32.0),
            plane(1.0, 1.0, 0.0, 8.0),
            plane(0.3, -0.2, 0.9, 100.0),
        ];

        for p in planes.iter() {
            let w = Winding::base_for(p, 10_000.0);
            assert_eq!(w.len(), 4);

            for point in w.points() {
                assert!(p.distance_to(point).abs() < EPSILON);
            }

            // Clockwise seen from the front
            let e0 = w.points()[1] - w.points()[0];
            let e1 = w.points()[2] - w.points()[1];
            assert!(e0.cross(&e1).dot(&p.normal) < 0.0);
        }
    }

    #[test]
    fn clip_halves_square() {
        let clipped = square().clip(&plane(1.0, 0.0, 0.0, 0.0), EPSILON);

        assert_eq!(
            clipped.points(),
            &[
                Vector3::new(0.0, 0.0, 1.0),
                Vector3::new(-1.0, 0.0, 1.0),
                Vector3::new(-1.0, 0.0, -1.0),
                Vector3::new(0.0, 0.0, -1.0),
            ]
        );
    }

    #[test]
    fn clip_keeps_points_inside_epsilon() {
        // Plane grazes the +X edge
        let clipped = square().clip(&plane(1.0, 0.0, 0.0, 0.995), EPSILON);
        assert_eq!(clipped, square());
    }

    #[test]
    fn clip_away_everything() {
        let clipped = square().clip(&plane(0.0, 0.0, -1.0, -5.0), EPSILON);
        assert!(clipped.is_empty());
        assert!(clipped.is_degenerate());
    }

    #[test]
    fn clip_is_idempotent() {
        let planes = [
            plane(1.0, 0.0, 0.0, 0.0),
            plane(1.0, 0.0, 1.0, 0.5),
            plane(-1.0, 0.0, 0.3, 0.2),
            plane(0.0, 0.0, 1.0, 3.0),
            plane(0.0, 1.0, 0.0, -1.0),
        ];
        let windings = [square(), Winding::base_for(&plane(0.2, 1.0, 0.1, 4.0), 100.0)];

        for w in windings.iter() {
            for p in planes.iter() {
                let once = w.clip(p, EPSILON);
                let twice = once.clip(p, EPSILON);
                assert_eq!(once, twice);
            }
        }
    }
}
