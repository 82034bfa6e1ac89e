// ABOUTME: Role-marker tokenizer for the kidase-slides application
// ABOUTME: Splits a language's text into plain and marker tokens in one left-to-right pass

use crate::keywords::KeywordClassifier;
use crate::style::Rgb;

/// A non-empty run of text carrying one color assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    /// `Some` when the token is a role marker.
    pub marker_color: Option<Rgb>,
}

impl Token {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            marker_color: None,
        }
    }

    pub fn marker(text: impl Into<String>, color: Rgb) -> Self {
        Self {
            text: text.into(),
            marker_color: Some(color),
        }
    }

    pub fn is_marker(&self) -> bool {
        self.marker_color.is_some()
    }

    /// Marker color, or `default` for plain text.
    pub fn color_or(&self, default: Rgb) -> Rgb {
        self.marker_color.unwrap_or(default)
    }
}

/// Split `text` at every role marker, keeping the markers as their own tokens.
///
/// At each position the longest marker wins. Joining the token texts gives back
/// `text` unchanged.
pub fn tokenize(text: &str, classifier: &KeywordClassifier) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut plain_start = 0;
    let mut pos = 0;

    while pos < text.len() {
        let rest = &text[pos..];
        if let Some(marker) = classifier.match_prefix(rest) {
            if plain_start < pos {
                tokens.push(Token::plain(&text[plain_start..pos]));
            }
            tokens.push(Token::marker(marker.text.as_str(), marker.color));
            pos += marker.text.len();
            plain_start = pos;
        } else {
            // Step one whole char so slicing stays on a boundary
            pos += rest.chars().next().map_or(1, char::len_utf8);
        }
    }

    if plain_start < text.len() {
        tokens.push(Token::plain(&text[plain_start..]));
    }

    tokens
}
