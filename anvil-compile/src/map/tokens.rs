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

//! Splitting map source into tokens

use std::fmt;
use std::iter::Peekable;
use std::str::CharIndices;

use crate::error::CompileError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind<'a> {
    OpenBrace,
    CloseBrace,
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,

    /// A quoted string, without its quotes
    Quoted(&'a str),

    /// Anything else, up to the next whitespace
    Word(&'a str),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'a> {
    pub kind: TokenKind<'a>,

    /// 1-based
    pub line: usize,
}

impl<'a> Token<'a> {
    /// The text of this token, as it would be shown in an error.
    pub fn text(&self) -> &'a str {
        match self.kind {
            TokenKind::OpenBrace => "{",
            TokenKind::CloseBrace => "}",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::OpenBracket => "[",
            TokenKind::CloseBracket => "]",
            TokenKind::Quoted(s) | TokenKind::Word(s) => s,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Quoted(s) => write!(f, "\"{}\"", s),
            _ => f.write_str(self.text()),
        }
    }
}

/// Iterator over the tokens in some map source.
/// `//` comments are skipped.
pub struct Tokenizer<'a> {
    src: &'a str,
    chars: Peekable<CharIndices<'a>>,
    line: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(src: &'a str) -> Self {
        Tokenizer {
            src,
            chars: src.char_indices().peekable(),
            line: 1,
        }
    }

    /// Skip whitespace and comments.
    fn skip_blank(&mut self) {
        while let Some(&(i, c)) = self.chars.peek() {
            if c == '\n' {
                self.line += 1;
                self.chars.next();
            } else if c.is_whitespace() {
                self.chars.next();
            } else if self.src[i..].starts_with("//") {
                while let Some(&(_, c)) = self.chars.peek() {
                    if c == '\n' {
                        break;
                    }
                    self.chars.next();
                }
            } else {
                break;
            }
        }
    }

    fn quoted(&mut self, start: usize) -> Result<Token<'a>, CompileError> {
        // Opening quote
        self.chars.next();

        while let Some((i, c)) = self.chars.next() {
            match c {
                '"' => {
                    return Ok(Token {
                        kind: TokenKind::Quoted(&self.src[start + 1..i]),
                        line: self.line,
                    })
                }
                '\n' => break,
                _ => {}
            }
        }

        Err(CompileError::UnterminatedString { line: self.line })
    }

    fn word(&mut self, start: usize) -> Token<'a> {
        let mut end = self.src.len();
        while let Some(&(i, c)) = self.chars.peek() {
            if c.is_whitespace() {
                end = i;
                break;
            }
            self.chars.next();
        }

        let text = &self.src[start..end];
        let kind = match text {
            "{" => TokenKind::OpenBrace,
            "}" => TokenKind::CloseBrace,
            "(" => TokenKind::OpenParen,
            ")" => TokenKind::CloseParen,
            "[" => TokenKind::OpenBracket,
            "]" => TokenKind::CloseBracket,
            _ => TokenKind::Word(text),
        };

        Token {
            kind,
            line: self.line,
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Result<Token<'a>, CompileError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_blank();

        let &(start, c) = self.chars.peek()?;
        if c == '"' {
            Some(self.quoted(start))
        } else {
            Some(Ok(self.word(start)))
        }
    }
}
