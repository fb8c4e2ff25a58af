//! Media-condition definitions and their CSS predicate text.
//!
//! A [`MediaQuery`] is a set of optional viewport bounds. It can be written as
//! a camelCase JSON object (`{"maxWidth": 800}`) or as CSS predicate text
//! (`(max-width: 800px) and (min-height: 300px)`), parsed here with a small
//! logos lexer.

use std::fmt;

use logos::Logos;
use serde::{Deserialize, Serialize};

/// Errors from parsing media-query text or a media-query registry.
#[derive(Debug, thiserror::Error)]
pub enum MediaQueryError {
    #[error("empty media query")]
    Empty,
    #[error("unexpected character at byte {position}")]
    UnexpectedCharacter { position: usize },
    #[error("unexpected token at byte {position}: {message}")]
    UnexpectedToken { position: usize, message: String },
    #[error("unexpected end of media query: {0}")]
    UnexpectedEof(String),
    #[error("unsupported media feature: {0}")]
    UnknownFeature(String),
    #[error("invalid length `{0}`")]
    InvalidLength(String),
    #[error("invalid media query for `{key}`: {source}")]
    InvalidEntry {
        key: String,
        #[source]
        source: Box<MediaQueryError>,
    },
    #[error("invalid media configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Viewport bounds, all in pixels and inclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MediaQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_height: Option<f64>,
}

impl MediaQuery {
    /// A query with no bounds (always matches).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_width(mut self, px: f64) -> Self {
        self.min_width = Some(px);
        self
    }

    pub fn max_width(mut self, px: f64) -> Self {
        self.max_width = Some(px);
        self
    }

    pub fn min_height(mut self, px: f64) -> Self {
        self.min_height = Some(px);
        self
    }

    pub fn max_height(mut self, px: f64) -> Self {
        self.max_height = Some(px);
        self
    }

    /// Parse CSS predicate text, e.g. `screen and (max-width: 800px)`.
    pub fn parse(input: &str) -> Result<Self, MediaQueryError> {
        Parser::new(input)?.parse()
    }

    /// Returns `true` if a viewport of `width` x `height` satisfies every bound.
    pub fn matches(&self, width: f64, height: f64) -> bool {
        self.min_width.is_none_or(|min| width >= min)
            && self.max_width.is_none_or(|max| width <= max)
            && self.min_height.is_none_or(|min| height >= min)
            && self.max_height.is_none_or(|max| height <= max)
    }

    /// The CSS predicate for this query; `all` when there are no bounds.
    pub fn to_css(&self) -> String {
        let features = [
            ("min-width", self.min_width),
            ("max-width", self.max_width),
            ("min-height", self.min_height),
            ("max-height", self.max_height),
        ];
        let parts: Vec<String> = features
            .iter()
            .filter_map(|(name, value)| value.map(|v| format!("({name}: {v}px)")))
            .collect();
        if parts.is_empty() {
            "all".into()
        } else {
            parts.join(" and ")
        }
    }
}

impl fmt::Display for MediaQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

// ---------------------------------------------------------------------------
// Lexer / parser
// ---------------------------------------------------------------------------

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\n\r\f]+")]
enum Token {
    #[token("and")]
    And,

    /// Length: `800`, `800px`, `37.5px`.
    #[regex(r"[0-9]+(\.[0-9]+)?(px)?")]
    Length,

    /// Media feature or media type name.
    #[regex(r"[a-zA-Z][a-zA-Z0-9-]*")]
    Ident,

    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token(":")]
    Colon,
}

struct Lexeme<'a> {
    token: Token,
    text: &'a str,
    position: usize,
}

struct Parser<'a> {
    tokens: Vec<Lexeme<'a>>,
    cursor: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Result<Self, MediaQueryError> {
        let mut tokens = Vec::new();
        for (result, span) in Token::lexer(input).spanned() {
            let token = result.map_err(|_| MediaQueryError::UnexpectedCharacter {
                position: span.start,
            })?;
            tokens.push(Lexeme {
                token,
                text: &input[span.clone()],
                position: span.start,
            });
        }
        Ok(Self { tokens, cursor: 0 })
    }

    fn peek(&self) -> Option<&Lexeme<'a>> {
        self.tokens.get(self.cursor)
    }

    fn expect(&mut self, expected: Token) -> Result<&'a str, MediaQueryError> {
        match self.tokens.get(self.cursor) {
            Some(lexeme) if lexeme.token == expected => {
                self.cursor += 1;
                Ok(lexeme.text)
            }
            Some(lexeme) => Err(MediaQueryError::UnexpectedToken {
                position: lexeme.position,
                message: format!("expected {expected:?}, got '{}'", lexeme.text),
            }),
            None => Err(MediaQueryError::UnexpectedEof(format!("expected {expected:?}"))),
        }
    }

    fn parse(mut self) -> Result<MediaQuery, MediaQueryError> {
        if self.tokens.is_empty() {
            return Err(MediaQueryError::Empty);
        }

        let mut query = MediaQuery::new();

        // Optional leading media type: `screen and (...)`, `all`.
        if let Some(Lexeme {
            token: Token::Ident,
            ..
        }) = self.peek()
        {
            self.cursor += 1;
            if self.peek().is_none() {
                return Ok(query);
            }
            self.expect(Token::And)?;
        }

        loop {
            self.parse_feature(&mut query)?;
            match self.peek() {
                None => return Ok(query),
                Some(_) => {
                    self.expect(Token::And)?;
                }
            }
        }
    }

    fn parse_feature(&mut self, query: &mut MediaQuery) -> Result<(), MediaQueryError> {
        self.expect(Token::ParenOpen)?;
        let name = self.expect(Token::Ident)?;
        self.expect(Token::Colon)?;
        let length = self.expect(Token::Length)?;
        self.expect(Token::ParenClose)?;

        let px: f64 = length
            .trim_end_matches("px")
            .parse()
            .map_err(|_| MediaQueryError::InvalidLength(length.to_string()))?;

        match name {
            "min-width" => query.min_width = Some(px),
            "max-width" => query.max_width = Some(px),
            "min-height" => query.min_height = Some(px),
            "max-height" => query.max_height = Some(px),
            other => return Err(MediaQueryError::UnknownFeature(other.to_string())),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ── Parsing ──────────────────────────────────────────────────────

    #[test]
    fn parse_single_feature() {
        let q = MediaQuery::parse("(max-width: 800px)").unwrap();
        assert_eq!(q, MediaQuery::new().max_width(800.0));
    }

    #[test]
    fn parse_unitless_and_fractional() {
        let q = MediaQuery::parse("(min-width: 37.5) and (max-height: 600px)").unwrap();
        assert_eq!(q, MediaQuery::new().min_width(37.5).max_height(600.0));
    }

    #[test]
    fn parse_with_media_type() {
        let q = MediaQuery::parse("screen and (min-height: 300px)").unwrap();
        assert_eq!(q, MediaQuery::new().min_height(300.0));
        assert_eq!(MediaQuery::parse("all").unwrap(), MediaQuery::new());
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(MediaQuery::parse(""), Err(MediaQueryError::Empty)));
        assert!(matches!(
            MediaQuery::parse("(orientation: 1)"),
            Err(MediaQueryError::UnknownFeature(name)) if name == "orientation"
        ));
        assert!(matches!(
            MediaQuery::parse("(max-width 800px)"),
            Err(MediaQueryError::UnexpectedToken { .. })
        ));
        assert!(matches!(
            MediaQuery::parse("(max-width: 800px"),
            Err(MediaQueryError::UnexpectedEof(_))
        ));
        assert!(matches!(
            MediaQuery::parse("(max-width: 800px) & (min-width: 1px)"),
            Err(MediaQueryError::UnexpectedCharacter { position: 19 })
        ));
    }

    // ── Rendering ────────────────────────────────────────────────────

    #[test]
    fn to_css_joins_features() {
        let q = MediaQuery::new().min_width(800.0).max_width(1200.0);
        insta::assert_snapshot!(q.to_css(), @"(min-width: 800px) and (max-width: 1200px)");
    }

    #[test]
    fn to_css_without_bounds_is_all() {
        assert_eq!(MediaQuery::new().to_css(), "all");
        assert_eq!(MediaQuery::new().to_string(), "all");
    }

    #[test]
    fn parse_to_css_round_trip() {
        let text = "(min-width: 640px) and (max-height: 480px)";
        assert_eq!(MediaQuery::parse(text).unwrap().to_css(), text);
    }

    // ── Matching ─────────────────────────────────────────────────────

    #[test]
    fn matches_inclusive_bounds() {
        let q = MediaQuery::new().min_width(400.0).max_width(800.0);
        assert!(q.matches(400.0, 0.0));
        assert!(q.matches(800.0, 0.0));
        assert!(!q.matches(399.0, 0.0));
        assert!(!q.matches(801.0, 0.0));
    }

    #[test]
    fn matches_height() {
        let q = MediaQuery::new().max_height(500.0);
        assert!(q.matches(10_000.0, 500.0));
        assert!(!q.matches(10.0, 501.0));
    }

    // ── Serde ────────────────────────────────────────────────────────

    #[test]
    fn deserializes_camel_case() {
        let q: MediaQuery = serde_json::from_str(r#"{"maxWidth": 660, "minHeight": 10}"#).unwrap();
        assert_eq!(q, MediaQuery::new().max_width(660.0).min_height(10.0));
    }

    #[test]
    fn rejects_unknown_fields() {
        let q: Result<MediaQuery, _> = serde_json::from_str(r#"{"maxWdth": 660}"#);
        assert!(q.is_err());
    }
}
