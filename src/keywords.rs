// ABOUTME: Speaker-role marker vocabulary for the kidase-slides application
// ABOUTME: Maps literal role markers (Ge'ez, Tigrinya, English) to highlight colors

use crate::errors::{KidaseError, Result};
use crate::style::Rgb;
use std::collections::HashMap;

/// Participant who speaks the text following a marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Priest,
    AssistantPriest,
    Deacon,
    AssistantDeacon,
    Assembly,
}

impl Role {
    /// Red for priests, green for deacons, gold for the people.
    pub fn color(&self) -> Rgb {
        match self {
            Role::Priest | Role::AssistantPriest => Rgb::RED,
            Role::Deacon | Role::AssistantDeacon => Rgb::GREEN,
            Role::Assembly => Rgb::GOLD,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Role::Priest => "priest",
            Role::AssistantPriest => "assistant priest",
            Role::Deacon => "deacon",
            Role::AssistantDeacon => "assistant deacon",
            Role::Assembly => "assembly",
        }
    }
}

/// Markers as they appear in the source workbook.
const LITURGY_MARKERS: &[(&str, Role)] = &[
    // ግእዝ
    ("፠ ካህን፡", Role::Priest),
    ("፠ ንፍቅ ካህን፡", Role::AssistantPriest),
    ("፠ ዲያቆን፡", Role::Deacon),
    ("፠ ንፍቅ ዲያቆን፡", Role::AssistantDeacon),
    ("፠ ሕዝብ፡", Role::Assembly),
    // ትግርኛ
    ("፠ ካህን፦", Role::Priest),
    ("፠ ንፍቅ ካህን፦", Role::AssistantPriest),
    ("፠ ዲያቆን፦", Role::Deacon),
    ("፠ ንፍቅ ዲያቆን፦", Role::AssistantDeacon),
    ("፠ ህዝቢ፦", Role::Assembly),
    // english
    ("፠ Priest:", Role::Priest),
    ("፠ Assistant Priest:", Role::AssistantPriest),
    ("፠ Deacon:", Role::Deacon),
    ("፠ Assistant Deacon:", Role::AssistantDeacon),
    ("፠ People:", Role::Assembly),
    ("፠ Assembly:", Role::Assembly),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub text: String,
    pub role: Role,
    pub color: Rgb,
}

/// Immutable marker-to-color table.
///
/// Markers are held longest first and bucketed by their first character,
/// so a scan only ever tries the candidates that can start at a position.
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    markers: Vec<Marker>,
    by_first_char: HashMap<char, Vec<usize>>,
    by_text: HashMap<String, usize>,
}

impl KeywordClassifier {
    /// Build a classifier from `(marker, role)` pairs. A repeated marker keeps the later role.
    pub fn new<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Role)>,
        S: Into<String>,
    {
        let mut unique: HashMap<String, Role> = HashMap::new();
        for (text, role) in entries {
            let text = text.into();
            if text.is_empty() {
                return Err(KidaseError::ConfigError(
                    "Role markers must not be empty".to_string(),
                ));
            }
            unique.insert(text, role);
        }
        Ok(Self::build(unique))
    }

    fn build(unique: HashMap<String, Role>) -> Self {
        let mut markers: Vec<Marker> = unique
            .into_iter()
            .map(|(text, role)| Marker {
                text,
                role,
                color: role.color(),
            })
            .collect();
        // Longest first; ties broken lexically so the order is deterministic
        markers.sort_by(|a, b| b.text.len().cmp(&a.text.len()).then(a.text.cmp(&b.text)));

        let mut by_first_char: HashMap<char, Vec<usize>> = HashMap::new();
        let mut by_text = HashMap::new();
        for (i, marker) in markers.iter().enumerate() {
            if let Some(first) = marker.text.chars().next() {
                by_first_char.entry(first).or_default().push(i);
            }
            by_text.insert(marker.text.clone(), i);
        }

        Self {
            markers,
            by_first_char,
            by_text,
        }
    }

    /// Color for an exact marker string, `None` for anything else.
    pub fn classify(&self, token_text: &str) -> Option<Rgb> {
        self.lookup(token_text).map(|m| m.color)
    }

    pub fn role(&self, token_text: &str) -> Option<Role> {
        self.lookup(token_text).map(|m| m.role)
    }

    fn lookup(&self, token_text: &str) -> Option<&Marker> {
        self.by_text.get(token_text).map(|&i| &self.markers[i])
    }

    /// Longest marker that `rest` starts with.
    pub fn match_prefix(&self, rest: &str) -> Option<&Marker> {
        let first = rest.chars().next()?;
        self.by_first_char
            .get(&first)?
            .iter()
            .map(|&i| &self.markers[i])
            .find(|m| rest.starts_with(m.text.as_str()))
    }

    /// All markers, longest first.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::build(
            LITURGY_MARKERS
                .iter()
                .map(|&(text, role)| (text.to_string(), role))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_exact_markers() {
        let classifier = KeywordClassifier::default();
        assert_eq!(classifier.classify("፠ Priest:"), Some(Rgb::RED));
        assert_eq!(classifier.classify("፠ ዲያቆን፡"), Some(Rgb::GREEN));
        assert_eq!(classifier.classify("፠ ህዝቢ፦"), Some(Rgb::GOLD));
        assert_eq!(classifier.role("፠ Assistant Deacon:"), Some(Role::AssistantDeacon));
    }

    #[test]
    fn test_classify_is_exact_and_case_sensitive() {
        let classifier = KeywordClassifier::default();
        assert_eq!(classifier.classify("፠ priest:"), None);
        assert_eq!(classifier.classify("Priest:"), None);
        assert_eq!(classifier.classify("፠ Priest: "), None);
    }

    #[test]
    fn test_markers_sorted_longest_first() {
        let classifier = KeywordClassifier::default();
        let lengths: Vec<usize> = classifier.markers().iter().map(|m| m.text.len()).collect();
        assert!(lengths.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_match_prefix_prefers_longest() {
        let classifier =
            KeywordClassifier::new(vec![("P:", Role::Priest), ("P: A:", Role::Assembly)]).unwrap();
        let found = classifier.match_prefix("P: A: amen").unwrap();
        assert_eq!(found.text, "P: A:");
        assert_eq!(found.color, Rgb::GOLD);
        assert!(classifier.match_prefix("amen").is_none());
    }

    #[test]
    fn test_duplicate_marker_keeps_later_role() {
        let classifier =
            KeywordClassifier::new(vec![("X:", Role::Priest), ("X:", Role::Deacon)]).unwrap();
        assert_eq!(classifier.len(), 1);
        assert_eq!(classifier.role("X:"), Some(Role::Deacon));
    }

    #[test]
    fn test_empty_marker_rejected() {
        let err = KeywordClassifier::new(vec![("", Role::Priest)]).unwrap_err();
        assert!(err.is_configuration_error());
    }
}
