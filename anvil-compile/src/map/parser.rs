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

//! Parsing map source into a level
//!
//! A map is a list of entities. Each entity is a `{ }` block of `"key" "value"` pairs and
//! brushes, and each brush is a `{ }` block of face lines:
//!
//! ```text
//! ( x1 y1 z1 ) ( x2 y2 z2 ) ( x3 y3 z3 ) texture xoff yoff rotation xscale yscale
//! ```

use std::iter::Peekable;

use log::{debug, trace};
use na::{Vector2, Vector3};

use anvil_levels::coords::quake_to_y_up;
use anvil_levels::parts::Entity;
use anvil_levels::Level;

use super::tokens::{Token, TokenKind, Tokenizer};
use crate::brush::{emit_brush, BrushSide, TexAlignment};
use crate::error::CompileError;
use crate::geometry::plane_from_points;
use crate::options::CompileOptions;
use crate::textures::{TextureRegistry, TextureResolver};

type Result<T> = std::result::Result<T, CompileError>;

/// Axis-aligned box around every point seen, in source units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub mins: Vector3<f32>,
    pub maxs: Vector3<f32>,
}

impl Bounds {
    pub fn new(point: Vector3<f32>) -> Bounds {
        Bounds {
            mins: point,
            maxs: point,
        }
    }

    pub fn add_point(&mut self, point: &Vector3<f32>) {
        self.mins = self.mins.inf(point);
        self.maxs = self.maxs.sup(point);
    }

    pub fn center(&self) -> Vector3<f32> {
        (self.mins + self.maxs) * 0.5
    }

    pub fn size(&self) -> Vector3<f32> {
        self.maxs - self.mins
    }
}

/// What's been seen of the entity currently being parsed.
#[derive(Debug, Default)]
struct EntityScope {
    line: usize,
    pairs: Vec<(String, String)>,
    bounds: Option<Bounds>,
    brushes: usize,
}

impl EntityScope {
    fn classname(&self) -> &str {
        self.pairs
            .iter()
            .find(|(k, _)| k == "classname")
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }

    fn add_point(&mut self, point: &Vector3<f32>) {
        self.bounds = Some(match self.bounds {
            Some(mut b) => {
                b.add_point(point);
                b
            }
            None => Bounds::new(*point),
        });
    }
}

/// Parses a map, building up a level as it goes.
pub struct MapParser<'a, R> {
    tokens: Peekable<Tokenizer<'a>>,
    opts: &'a CompileOptions,
    textures: TextureRegistry<R>,
    level: Level,
}

impl<'a, R: TextureResolver> MapParser<'a, R> {
    pub fn new(src: &'a str, opts: &'a CompileOptions, resolver: R) -> Self {
        MapParser {
            tokens: Tokenizer::new(src).peekable(),
            opts,
            textures: TextureRegistry::new(resolver),
            level: Level::new(),
        }
    }

    /// Parse the whole map, returning the finished level.
    pub fn parse(mut self) -> Result<Level> {
        while let Some(tok) = self.next_token()? {
            match tok.kind {
                TokenKind::OpenBrace => self.parse_entity(tok.line)?,
                TokenKind::CloseBrace => {
                    return Err(CompileError::UnbalancedBrace { line: tok.line })
                }
                _ => return Err(unexpected(&tok, "`{`")),
            }
        }

        let mut level = self.level;
        level.textures = self.textures.into_textures();

        Ok(level)
    }

    fn next_token(&mut self) -> Result<Option<Token<'a>>> {
        self.tokens.next().transpose()
    }

    fn expect_token(&mut self, expected: &'static str) -> Result<Token<'a>> {
        self.next_token()?
            .ok_or(CompileError::UnexpectedEof { expected })
    }

    /// Parse an entity, after its opening brace.
    fn parse_entity(&mut self, line: usize) -> Result<()> {
        let mut scope = EntityScope {
            line,
            ..EntityScope::default()
        };

        loop {
            let tok = self.expect_token("`}`")?;
            match tok.kind {
                TokenKind::CloseBrace => break,
                TokenKind::OpenBrace => {
                    self.parse_brush(&mut scope)?;
                    scope.brushes += 1;
                }
                TokenKind::Quoted(key) => {
                    let value = self.expect_token("a value")?;
                    match value.kind {
                        TokenKind::Quoted(v) | TokenKind::Word(v) => {
                            scope.pairs.push((key.to_string(), v.to_string()))
                        }
                        _ => return Err(unexpected(&value, "a value")),
                    }
                }
                _ => return Err(unexpected(&tok, "a key, a brush or `}`")),
            }
        }

        self.finish_entity(scope);

        Ok(())
    }

    /// Emit a trigger volume for the entity if it is one.
    fn finish_entity(&mut self, scope: EntityScope) {
        let classname = scope.classname();

        if !self.opts.is_trigger(classname) {
            debug!(
                "Discarding entity `{}` from line {} ({} brushes, {} keys)",
                classname,
                scope.line,
                scope.brushes,
                scope.pairs.len()
            );
            return;
        }

        match scope.bounds {
            Some(bounds) => {
                trace!("Trigger `{}` covers {:?}", classname, bounds);
                self.level.entities.push(Entity {
                    name: classname.to_string(),
                    position: bounds.center() * self.opts.unit_scale,
                    size: bounds.size() * self.opts.unit_scale,
                });
            }
            None => debug!(
                "Trigger `{}` on line {} has no brushes, skipping",
                classname, scope.line
            ),
        }
    }

    /// Parse a brush, after its opening brace.
    fn parse_brush(&mut self, scope: &mut EntityScope) -> Result<()> {
        let mut sides = Vec::new();

        loop {
            let tok = self.expect_token("`}`")?;
            match tok.kind {
                TokenKind::CloseBrace => break,
                TokenKind::OpenParen => {
                    if let Some(side) = self.parse_face(scope)? {
                        sides.push(side);
                    }
                }
                TokenKind::Word(w) => {
                    return Err(CompileError::UnsupportedDefinition {
                        line: tok.line,
                        token: w.to_string(),
                    })
                }
                _ => return Err(unexpected(&tok, "a face or `}`")),
            }
        }

        emit_brush(&sides, self.opts, &mut self.level);

        Ok(())
    }

    /// Parse a face line, after its first opening parenthesis.
    /// Returns `None` if the face's points don't make a plane.
    fn parse_face(&mut self, scope: &mut EntityScope) -> Result<Option<BrushSide>> {
        let first = self.parse_point()?;
        let second = self.parse_point_in_parens()?;
        let third = self.parse_point_in_parens()?;

        for p in [first, second, third].iter() {
            scope.add_point(p);
        }

        let tex_tok = self.expect_token("a texture name")?;
        let tex_name = match tex_tok.kind {
            TokenKind::Word(s) | TokenKind::Quoted(s) => s,
            _ => return Err(unexpected(&tex_tok, "a texture name")),
        };
        let alignment = self.parse_alignment(tex_tok.line)?;
        let texture_idx = self.textures.resolve(tex_name);

        let plane = match plane_from_points(&first, &second, &third) {
            Some(p) => p,
            None => {
                debug!(
                    "Line {}: face points are in a line, dropping face",
                    tex_tok.line
                );
                return Ok(None);
            }
        };

        Ok(Some(BrushSide {
            plane,
            texture_idx,
            alignment,
        }))
    }

    fn parse_point_in_parens(&mut self) -> Result<Vector3<f32>> {
        let tok = self.expect_token("`(`")?;
        if tok.kind != TokenKind::OpenParen {
            return Err(unexpected(&tok, "`(`"));
        }

        self.parse_point()
    }

    /// Parse `x y z )`, remapping into level axes.
    fn parse_point(&mut self) -> Result<Vector3<f32>> {
        let x = self.parse_number()?;
        let y = self.parse_number()?;
        let z = self.parse_number()?;

        let tok = self.expect_token("`)`")?;
        if tok.kind != TokenKind::CloseParen {
            return Err(unexpected(&tok, "`)`"));
        }

        Ok(quake_to_y_up(x, y, z))
    }

    fn parse_number(&mut self) -> Result<f32> {
        let tok = self.expect_token("a number")?;
        match tok.kind {
            TokenKind::Word(s) => match s.parse::<f32>() {
                Ok(n) if n.is_finite() => Ok(n),
                _ => Err(CompileError::BadNumber {
                    line: tok.line,
                    token: s.to_string(),
                }),
            },
            _ => Err(unexpected(&tok, "a number")),
        }
    }

    /// Consume the rest of a face line.
    /// If it starts with five numbers, they're read as texture offset, rotation and scale.
    fn parse_alignment(&mut self, line: usize) -> Result<Option<TexAlignment>> {
        let mut rest = Vec::new();
        while let Some(Ok(tok)) = self.tokens.peek() {
            if tok.line != line {
                break;
            }
            match tok.kind {
                TokenKind::Word(_)
                | TokenKind::Quoted(_)
                | TokenKind::OpenBracket
                | TokenKind::CloseBracket => rest.push(tok.kind),
                _ => break,
            }
            self.tokens.next();
        }

        // Surface an error the peek stopped on
        if let Some(Err(_)) = self.tokens.peek() {
            self.next_token()?;
        }

        let numbers: Vec<f32> = rest
            .iter()
            .take(5)
            .map_while(|kind| match kind {
                TokenKind::Word(s) => s.parse::<f32>().ok().filter(|n| n.is_finite()),
                _ => None,
            })
            .collect();

        if numbers.len() < 5 {
            if !rest.is_empty() {
                trace!("Line {}: ignoring {} trailing tokens", line, rest.len());
            }
            return Ok(None);
        }

        Ok(Some(TexAlignment {
            offset: Vector2::new(numbers[0], numbers[1]),
            rotation: numbers[2],
            scale: Vector2::new(numbers[3], numbers[4]),
        }))
    }
}

fn unexpected(tok: &Token<'_>, expected: &'static str) -> CompileError {
    CompileError::UnexpectedToken {
        line: tok.line,
        found: tok.to_string(),
        expected,
    }
}

/// Parse `src`, loading textures through `resolver`.
pub fn parse_map<R: TextureResolver>(
    src: &str,
    opts: &CompileOptions,
    resolver: R,
) -> Result<Level> {
    MapParser::new(src, opts, resolver).parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    const CUBE: &str = "\
{
( -0.5 -0.5 -0.5 ) ( -0.5 0.5 -0.5 ) ( -0.5 -0.5 0.5 ) stone 0 0 0 1 1
( -0.5 -0.5 -0.5 ) ( -0.5 -0.5 0.5 ) ( 0.5 -0.5 -0.5 ) stone 0 0 0 1 1
( -0.5 -0.5 -0.5 ) ( 0.5 -0.5 -0.5 ) ( -0.5 0.5 -0.5 ) stone 0 0 0 1 1
( 0.5 0.5 0.5 ) ( 0.5 -0.5 0.5 ) ( -0.5 0.5 0.5 ) stone 0 0 0 1 1
( 0.5 0.5 0.5 ) ( -0.5 0.5 0.5 ) ( 0.5 0.5 -0.5 ) stone 0 0 0 1 1
( 0.5 0.5 0.5 ) ( 0.5 0.5 -0.5 ) ( 0.5 -0.5 0.5 ) stone 0 0 0 1 1
}
";

    fn no_textures(_: &str) -> Option<RgbaImage> {
        None
    }

    fn parse(src: &str) -> Result<Level> {
        parse_map(src, &CompileOptions::default(), no_textures)
    }

    fn entity(classname: &str, brushes: &[&str]) -> String {
        format!(
            "{{\n\"classname\" \"{}\"\n{}}}\n",
            classname,
            brushes.concat()
        )
    }

    #[test]
    fn worldspawn_cube() {
        let level = parse(&entity("worldspawn", &[CUBE])).unwrap();

        assert_eq!(level.brushes.len(), 1);
        assert_eq!(level.planes.len(), 6);
        assert_eq!(level.faces.len(), 6);
        assert_eq!(level.vertices.len(), 24);
        assert_eq!(level.textures.len(), 1);
        assert!(level.entities.is_empty());
    }

    #[test]
    fn trigger_covers_all_its_brushes() {
        let moved = CUBE.replace("0.5", "2.5").replace("-2.5", "1.5");
        let level = parse(&entity("trigger_once", &[CUBE, &moved])).unwrap();

        assert_eq!(level.brushes.len(), 2);
        assert_eq!(level.entities.len(), 1);

        let trigger = &level.entities[0];
        assert_eq!(trigger.name, "trigger_once");
        // Quake (-0.5..2.5) on every axis, remapped and scaled
        assert!((trigger.position - Vector3::new(0.1, 0.1, -0.1)).norm() < 1e-5);
        assert!((trigger.size - Vector3::new(0.3, 0.3, 0.3)).norm() < 1e-5);
    }

    #[test]
    fn trigger_without_brushes_is_skipped() {
        let level = parse(&entity("trigger_multiple", &[])).unwrap();
        assert!(level.entities.is_empty());
    }

    #[test]
    fn small_brush_is_dropped() {
        let three_sides: String = CUBE.lines().take(4).collect::<Vec<_>>().join("\n") + "\n}\n";
        let level = parse(&entity("worldspawn", &[&three_sides])).unwrap();

        assert!(level.brushes.is_empty());
        assert!(level.faces.is_empty());
        assert!(level.planes.is_empty());
    }

    #[test]
    fn collinear_face_is_dropped() {
        let src = entity(
            "worldspawn",
            &[&CUBE.replacen(
                "( -0.5 -0.5 -0.5 ) ( -0.5 0.5 -0.5 ) ( -0.5 -0.5 0.5 )",
                "( 0 0 0 ) ( 1 1 1 ) ( 2 2 2 )",
                1,
            )],
        );
        let level = parse(&src).unwrap();

        // The remaining 5 planes leave the cube open on one side
        assert_eq!(level.brushes.len(), 1);
        assert_eq!(level.planes.len(), 5);
    }

    #[test]
    fn collinear_face_keeps_its_texture() {
        let src = entity(
            "worldspawn",
            &[&CUBE.replacen(
                "( -0.5 -0.5 -0.5 ) ( -0.5 0.5 -0.5 ) ( -0.5 -0.5 0.5 ) stone",
                "( 0 0 0 ) ( 1 1 1 ) ( 2 2 2 ) moss",
                1,
            )],
        );
        let level = parse(&src).unwrap();

        let names: Vec<&str> = level.textures.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["moss", "stone"]);
        assert!(level.faces.iter().all(|f| f.texture_idx == 1));
    }

    #[test]
    fn alignment_is_read() {
        let opts = CompileOptions::default();
        let mut parser = MapParser::new(
            "base/wall 16 -8 45 0.5 2 // comment\n(",
            &opts,
            no_textures,
        );
        parser.next_token().unwrap();
        let alignment = parser.parse_alignment(1).unwrap().unwrap();

        assert_eq!(alignment.offset, Vector2::new(16.0, -8.0));
        assert_eq!(alignment.rotation, 45.0);
        assert_eq!(alignment.scale, Vector2::new(0.5, 2.0));
        assert_eq!(parser.next_token().unwrap().unwrap().kind, TokenKind::OpenParen);
    }

    #[test]
    fn valve_alignment_is_ignored() {
        let opts = CompileOptions::default();
        let mut parser = MapParser::new(
            "wall [ 1 0 0 0 ] [ 0 -1 0 0 ] 0 1 1\n}",
            &opts,
            no_textures,
        );
        parser.next_token().unwrap();

        assert_eq!(parser.parse_alignment(1).unwrap(), None);
        assert_eq!(parser.next_token().unwrap().unwrap().kind, TokenKind::CloseBrace);
    }

    #[test]
    fn bad_number_has_line() {
        let src = entity("worldspawn", &[&CUBE.replacen("0.5", "0.5x", 1)]);

        match parse(&src) {
            Err(CompileError::BadNumber { line, token }) => {
                assert_eq!(line, 4);
                assert_eq!(token, "-0.5x");
            }
            other => panic!("expected BadNumber, got {:?}", other),
        }
    }

    #[test]
    fn non_finite_numbers_are_rejected() {
        for bad in ["nan", "inf", "-infinity", "1e40"].iter() {
            let src = entity(
                "worldspawn",
                &[&CUBE.replacen("( -0.5 -0.5 -0.5 )", &format!("( {} -0.5 -0.5 )", bad), 1)],
            );

            match parse(&src) {
                Err(CompileError::BadNumber { line, token }) => {
                    assert_eq!(line, 4);
                    assert_eq!(token, *bad);
                }
                other => panic!("expected BadNumber for {}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn non_finite_alignment_is_ignored() {
        let opts = CompileOptions::default();
        let mut parser = MapParser::new("wall 0 0 nan 1 1\n}", &opts, no_textures);
        parser.next_token().unwrap();

        assert_eq!(parser.parse_alignment(1).unwrap(), None);
    }

    #[test]
    fn structural_errors() {
        assert!(matches!(
            parse("{\n}\n}"),
            Err(CompileError::UnbalancedBrace { line: 3 })
        ));
        assert!(matches!(
            parse("{\n\"classname\" \"worldspawn\"\n"),
            Err(CompileError::UnexpectedEof { .. })
        ));
        assert!(matches!(
            parse("{\n( 0 0 0 ) ( 1 0 0 ) ( 0 1 0 ) wall\n}"),
            Err(CompileError::UnexpectedToken { line: 2, .. })
        ));
        assert!(matches!(
            parse("{\n{\npatchDef2\n{\n}\n}\n}"),
            Err(CompileError::UnsupportedDefinition { line: 3, .. })
        ));
        assert!(matches!(
            parse("{\n{\n\"classname\" \"x\"\n}\n}"),
            Err(CompileError::UnexpectedToken { line: 3, .. })
        ));
    }

    #[test]
    fn empty_map() {
        assert_eq!(parse("// nothing here\n").unwrap(), Level::new());
    }
}
