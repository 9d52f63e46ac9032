//! Phrase templates for the magnitude table.
//!
//! A template is a short string with two placeholders:
//!
//! | Escape | Meaning                                          |
//! |--------|--------------------------------------------------|
//! | `%s`   | the direction label (`"ago"`, `"from now"`, ...) |
//! | `%d`   | the delta divided by the bucket's divisor        |
//! | `%%`   | a literal `%`                                    |
//!
//! Everything else is copied through verbatim. Templates are parsed once
//! into [`Piece`]s, so rendering never re-scans the source text.

use crate::error::{HumaneError, Result};
use std::fmt;

/// Escape character that introduces a placeholder.
pub const ESCAPE: char = '%';

/// One parsed element of a [`Template`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece<'a> {
    /// Text copied to the output unchanged.
    Literal(&'a str),
    /// Insert the direction label.
    Label,
    /// Insert the scaled delta.
    Scaled,
}

/// A pre-parsed phrase template.
///
/// Covariant in `'a`, so a template parsed from a short-lived string
/// compares directly against the `'static` built-in ones.
#[derive(Debug, Clone)]
pub struct Template<'a> {
    pieces: Pieces<'a>,
}

#[derive(Debug, Clone)]
enum Pieces<'a> {
    Static(&'a [Piece<'a>]),
    Parsed(Vec<Piece<'a>>),
}

impl<'a> Pieces<'a> {
    fn as_slice(&self) -> &[Piece<'a>] {
        match self {
            Pieces::Static(pieces) => pieces,
            Pieces::Parsed(pieces) => pieces,
        }
    }
}

impl<'a> Template<'a> {
    /// Wraps pieces that are already in parsed form.
    ///
    /// Used to build the built-in table at compile time.
    pub const fn from_pieces(pieces: &'a [Piece<'a>]) -> Self {
        Self {
            pieces: Pieces::Static(pieces),
        }
    }

    /// Parses a template, rejecting unknown escapes and a dangling `%`.
    ///
    /// # Examples
    ///
    /// ```
    /// use libhumane::times::{Piece, Template};
    ///
    /// let template = Template::parse("%dm %s").unwrap();
    /// assert_eq!(
    ///     template.pieces(),
    ///     &[Piece::Scaled, Piece::Literal("m "), Piece::Label]
    /// );
    /// assert!(Template::parse("%q").is_err());
    /// ```
    pub fn parse(source: &'a str) -> Result<Self> {
        let (pieces, flaw) = scan(source);
        match flaw {
            None => Ok(Self::parsed(pieces)),
            Some(Flaw::UnknownEscape(ch)) => Err(HumaneError::template(
                format!("unknown escape '{ESCAPE}{ch}'"),
                source,
            )),
            Some(Flaw::Dangling) => Err(HumaneError::template("dangling escape at end", source)),
        }
    }

    /// Parses a template, silently dropping unknown escapes.
    ///
    /// An unknown `%x` consumes both characters and inserts nothing, and a
    /// trailing lone `%` is discarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use libhumane::times::Template;
    ///
    /// let template = Template::parse_lossy("%d%qh %s");
    /// assert_eq!(template.render("ago", 3), "3h ago");
    /// ```
    pub fn parse_lossy(source: &'a str) -> Self {
        let (pieces, _) = scan(source);
        Self::parsed(pieces)
    }

    fn parsed(pieces: Vec<Piece<'a>>) -> Self {
        Self {
            pieces: Pieces::Parsed(pieces),
        }
    }

    /// Returns the parsed pieces.
    pub fn pieces(&self) -> &[Piece<'a>] {
        self.pieces.as_slice()
    }

    /// Returns true if the template inserts the direction label.
    pub fn uses_label(&self) -> bool {
        self.pieces().contains(&Piece::Label)
    }

    /// Returns true if the template inserts the scaled delta.
    pub fn uses_scaled(&self) -> bool {
        self.pieces().contains(&Piece::Scaled)
    }

    /// Renders the template into a new string.
    ///
    /// # Examples
    ///
    /// ```
    /// use libhumane::times::Template;
    ///
    /// let template = Template::parse("%d%% done, %s").unwrap();
    /// assert_eq!(template.render("so far", 40), "40% done, so far");
    /// ```
    pub fn render(&self, label: &str, scaled: i64) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_to(&mut out, label, scaled);
        out
    }

    /// Renders the template into any [`fmt::Write`] sink.
    pub fn write_to<W: fmt::Write>(&self, out: &mut W, label: &str, scaled: i64) -> fmt::Result {
        for piece in self.pieces() {
            match piece {
                Piece::Literal(text) => out.write_str(text)?,
                Piece::Label => out.write_str(label)?,
                Piece::Scaled => write!(out, "{}", scaled)?,
            }
        }
        Ok(())
    }
}

/// Templates are equal when their pieces are, however they were built.
impl<'b> PartialEq<Template<'b>> for Template<'_> {
    fn eq(&self, other: &Template<'b>) -> bool {
        self.pieces() == other.pieces()
    }
}

impl Eq for Template<'_> {}

/// Writes the template back in source form, re-escaping literal `%`.
impl fmt::Display for Template<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for piece in self.pieces() {
            match piece {
                Piece::Literal(text) => {
                    for ch in text.chars() {
                        if ch == ESCAPE {
                            write!(f, "{ESCAPE}{ESCAPE}")?;
                        } else {
                            write!(f, "{ch}")?;
                        }
                    }
                }
                Piece::Label => write!(f, "{ESCAPE}s")?,
                Piece::Scaled => write!(f, "{ESCAPE}d")?,
            }
        }
        Ok(())
    }
}

/// First problem found while scanning a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flaw {
    UnknownEscape(char),
    Dangling,
}

/// Scans `source` left to right with an escaped flag.
///
/// Literal pieces borrow from `source`. A `%%` becomes its own one-character
/// literal so that no allocation is needed. Unknown escapes and a trailing
/// lone `%` are skipped; the first one is reported alongside the pieces.
fn scan(source: &str) -> (Vec<Piece<'_>>, Option<Flaw>) {
    let mut pieces = Vec::new();
    let mut flaw = None;
    let mut run_start = 0;
    let mut escaped = false;

    for (idx, ch) in source.char_indices() {
        if !escaped {
            if ch == ESCAPE {
                if run_start < idx {
                    pieces.push(Piece::Literal(&source[run_start..idx]));
                }
                escaped = true;
            }
            continue;
        }

        escaped = false;
        let next = idx + ch.len_utf8();
        match ch {
            ESCAPE => pieces.push(Piece::Literal(&source[idx..next])),
            's' => pieces.push(Piece::Label),
            'd' => pieces.push(Piece::Scaled),
            other => {
                flaw.get_or_insert(Flaw::UnknownEscape(other));
            }
        }
        run_start = next;
    }

    if escaped {
        flaw.get_or_insert(Flaw::Dangling);
    } else if run_start < source.len() {
        pieces.push(Piece::Literal(&source[run_start..]));
    }

    (pieces, flaw)
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
