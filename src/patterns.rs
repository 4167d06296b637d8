//! Pattern library for structure classification.
//!
//! Every textual cue the classifier reacts to lives in a [`PatternTable`]:
//! one entry per `{script, construct}` pair, compiled once. The built-in
//! table covers Arabic and Latin script; a replacement table can be loaded
//! from JSON so that new scripts or house styles need no code changes.
//!
//! ```
//! use docaudit::patterns::{Construct, PatternTable};
//!
//! let table = PatternTable::builtin();
//! assert!(table.is_match(Construct::Marker, "[Figure 1] comparative results"));
//! assert!(table.is_match(Construct::ReferenceSection, "References"));
//! ```

use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Writing system a pattern targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Script {
    /// Latin script (English)
    Latin,
    /// Arabic script
    Arabic,
    /// Script-neutral (digits, punctuation)
    Any,
}

/// Textual construct a pattern recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Construct {
    /// Title of the references/bibliography section
    ReferenceSection,
    /// Figure/table/image marker paragraph
    Marker,
    /// Explicit caption prefix
    Caption,
    /// Numbered heading (`1.`, `1.1`, Arabic numerals or letters)
    NumberedHeading,
    /// Leading dotted enumeration; group 1 holds the number
    Enumeration,
    /// Single-letter enumeration in a non-Latin alphabet
    LetterEnumeration,
    /// Leading bullet glyph
    Bullet,
    /// Parenthesized four-digit year
    Year,
}

impl Construct {
    /// Stable name used in messages.
    pub fn name(&self) -> &'static str {
        match self {
            Construct::ReferenceSection => "reference_section",
            Construct::Marker => "marker",
            Construct::Caption => "caption",
            Construct::NumberedHeading => "numbered_heading",
            Construct::Enumeration => "enumeration",
            Construct::LetterEnumeration => "letter_enumeration",
            Construct::Bullet => "bullet",
            Construct::Year => "year",
        }
    }
}

impl fmt::Display for Construct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Serializable description of one pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternSpec {
    /// Target script
    pub script: Script,
    /// Recognised construct
    pub construct: Construct,
    /// Regular expression source
    pub pattern: String,
}

impl PatternSpec {
    /// Create a new pattern spec.
    pub fn new(script: Script, construct: Construct, pattern: impl Into<String>) -> Self {
        Self {
            script,
            construct,
            pattern: pattern.into(),
        }
    }

    fn compile(self) -> Result<PatternEntry> {
        let regex = Regex::new(&self.pattern).map_err(|e| Error::Pattern {
            construct: self.construct.name().to_string(),
            message: e.to_string(),
        })?;
        Ok(PatternEntry { spec: self, regex })
    }
}

/// A compiled pattern.
#[derive(Debug, Clone)]
struct PatternEntry {
    spec: PatternSpec,
    regex: Regex,
}

// Arabic letters alef-hamza through yeh, and both Arabic-Indic digit blocks.
const BUILTIN: &[(Script, Construct, &str)] = &[
    // References section titles
    (
        Script::Latin,
        Construct::ReferenceSection,
        r"(?i)^\s*(?:references?|bibliography|works\s+cited|literature\s+cited|sources)\s*:?\s*$",
    ),
    (
        Script::Arabic,
        Construct::ReferenceSection,
        r"^\s*(?:المراجع|المصادر|قائمة\s+المراجع|قائمة\s+المصادر|المصادر\s+والمراجع|المراجع\s+والمصادر|ثبت\s+المراجع)\s*:?\s*$",
    ),
    // Figure/table/image markers
    (Script::Arabic, Construct::Marker, r"^\[(?:الشكل|الصورة|الجدول)\s*\d+\]"),
    (Script::Arabic, Construct::Marker, r"^(?:الشكل|الصورة|الجدول)\s*\(\d+\)"),
    (Script::Arabic, Construct::Marker, r"^(?:الشكل|الصورة|الجدول|شكل|صورة|جدول)\s*\d+"),
    (Script::Latin, Construct::Marker, r"(?i)^\[(?:figure|table|image)\s*\d+\]"),
    (Script::Latin, Construct::Marker, r"(?i)^(?:figure|table|image)\s*\(\d+\)"),
    (Script::Latin, Construct::Marker, r"(?i)^(?:figure|table|image)\s*\d+"),
    // Caption prefixes
    (
        Script::Latin,
        Construct::Caption,
        r"(?i)^(?:figure|fig\.?|table|image|caption|source|note)\s*[:\-–—]",
    ),
    (Script::Arabic, Construct::Caption, r"^(?:ال)?(?:شكل|صورة|جدول|مصدر)\s*[:\-–—]"),
    (Script::Arabic, Construct::Caption, r"^(?:ملاحظة|تعليق)\s*[:\-–—]"),
    // Numbered headings
    (Script::Any, Construct::NumberedHeading, r"^\d+\.\s+\S"),
    (Script::Any, Construct::NumberedHeading, r"^\d+(?:\.\d+)+\.?\s+\S"),
    (Script::Arabic, Construct::NumberedHeading, r"^[٠-٩۰-۹]+\s*[.)\-–]\s*\S"),
    (Script::Arabic, Construct::NumberedHeading, r"^[ء-ي]\s*[.)\-–]\s+\S"),
    // Enumeration depth (group 1)
    (Script::Any, Construct::Enumeration, r"^(\d+(?:\.\d+)*)(?:\s*[.)\-–]\s*|\s+)\S"),
    (Script::Arabic, Construct::LetterEnumeration, r"^[ء-ي]\s*[.)\-–]\s+\S"),
    // Bullets
    (Script::Any, Construct::Bullet, r"^[•●○■□◆◇▪▫►▻➢➤✓✔❖◦‣⁃]"),
    // Years
    (Script::Any, Construct::Year, r"\(\s*\d{4}\s*(?:[a-z]|م|هـ)?\s*\)"),
];

static BUILTIN_TABLE: LazyLock<PatternTable> = LazyLock::new(|| {
    let specs = BUILTIN
        .iter()
        .map(|(script, construct, pattern)| PatternSpec::new(*script, *construct, *pattern))
        .collect();
    PatternTable::from_specs(specs).expect("built-in pattern table compiles")
});

/// Compiled set of classification patterns.
#[derive(Debug, Clone)]
pub struct PatternTable {
    entries: Vec<PatternEntry>,
}

impl PatternTable {
    /// The built-in Arabic/Latin table.
    pub fn builtin() -> &'static PatternTable {
        &BUILTIN_TABLE
    }

    /// Compile a table from pattern specs.
    pub fn from_specs(specs: Vec<PatternSpec>) -> Result<Self> {
        let entries = specs
            .into_iter()
            .map(PatternSpec::compile)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { entries })
    }

    /// Compile a table from a JSON array of pattern specs.
    pub fn from_json(json: &str) -> Result<Self> {
        let specs: Vec<PatternSpec> = serde_json::from_str(json)?;
        Self::from_specs(specs)
    }

    /// Load a table from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Add one more pattern.
    pub fn with_spec(mut self, spec: PatternSpec) -> Result<Self> {
        self.entries.push(spec.compile()?);
        Ok(self)
    }

    /// The specs this table was built from, in order.
    pub fn specs(&self) -> Vec<PatternSpec> {
        self.entries.iter().map(|e| e.spec.clone()).collect()
    }

    /// Render the table as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.specs())?)
    }

    /// Number of patterns.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table has no patterns.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entries_for(&self, construct: Construct) -> impl Iterator<Item = &PatternEntry> {
        self.entries
            .iter()
            .filter(move |e| e.spec.construct == construct)
    }

    /// Check if any pattern for `construct` matches.
    pub fn is_match(&self, construct: Construct, text: &str) -> bool {
        self.entries_for(construct).any(|e| e.regex.is_match(text))
    }

    /// Script of the first pattern for `construct` that matches.
    pub fn matching_script(&self, construct: Construct, text: &str) -> Option<Script> {
        self.entries_for(construct)
            .find(|e| e.regex.is_match(text))
            .map(|e| e.spec.script)
    }

    /// First capture group (or whole match) of the first matching pattern.
    pub fn capture<'t>(&self, construct: Construct, text: &'t str) -> Option<&'t str> {
        self.entries_for(construct).find_map(|e| {
            e.regex
                .captures(text)
                .and_then(|caps| caps.get(1).or_else(|| caps.get(0)))
                .map(|m| m.as_str())
        })
    }
}

impl Default for PatternTable {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_compiles() {
        let table = PatternTable::builtin();
        assert_eq!(table.len(), BUILTIN.len());
    }

    #[test]
    fn test_reference_section_titles() {
        let table = PatternTable::builtin();
        assert!(table.is_match(Construct::ReferenceSection, "References"));
        assert!(table.is_match(Construct::ReferenceSection, "BIBLIOGRAPHY:"));
        assert!(table.is_match(Construct::ReferenceSection, "المراجع"));
        assert!(table.is_match(Construct::ReferenceSection, "قائمة المراجع"));
        assert!(!table.is_match(Construct::ReferenceSection, "References to prior work are sparse"));
    }

    #[test]
    fn test_markers() {
        let table = PatternTable::builtin();
        assert!(table.is_match(Construct::Marker, "[Figure 1] comparative results"));
        assert!(table.is_match(Construct::Marker, "table 3 summary"));
        assert!(table.is_match(Construct::Marker, "Image (2)"));
        assert!(table.is_match(Construct::Marker, "[الشكل 1] النتائج"));
        assert!(table.is_match(Construct::Marker, "الجدول (2)"));
        assert!(table.is_match(Construct::Marker, "صورة 4"));
        assert_eq!(
            table.matching_script(Construct::Marker, "[الصورة 3]"),
            Some(Script::Arabic)
        );
        assert!(!table.is_match(Construct::Marker, "The figure shows"));
    }

    #[test]
    fn test_caption_prefixes() {
        let table = PatternTable::builtin();
        assert!(table.is_match(Construct::Caption, "Figure: distribution of samples"));
        assert!(table.is_match(Construct::Caption, "Source: field survey"));
        assert!(table.is_match(Construct::Caption, "المصدر: وزارة التخطيط"));
        assert!(!table.is_match(Construct::Caption, "Figure 1 shows"));
    }

    #[test]
    fn test_numbered_headings() {
        let table = PatternTable::builtin();
        assert!(table.is_match(Construct::NumberedHeading, "1. Introduction"));
        assert!(table.is_match(Construct::NumberedHeading, "2.3 Methodology"));
        assert!(table.is_match(Construct::NumberedHeading, "١. مقدمة"));
        assert!(table.is_match(Construct::NumberedHeading, "٢) النتائج"));
        assert!(table.is_match(Construct::NumberedHeading, "أ. الخلفية"));
        assert!(!table.is_match(Construct::NumberedHeading, "2019 was a good year"));
    }

    #[test]
    fn test_enumeration_capture() {
        let table = PatternTable::builtin();
        assert_eq!(table.capture(Construct::Enumeration, "2.3 Methodology"), Some("2.3"));
        assert_eq!(table.capture(Construct::Enumeration, "1. Introduction"), Some("1"));
        assert_eq!(table.capture(Construct::Enumeration, "1.2.3. Details"), Some("1.2.3"));
        assert_eq!(table.capture(Construct::Enumeration, "Introduction"), None);
    }

    #[test]
    fn test_years() {
        let table = PatternTable::builtin();
        assert!(table.is_match(Construct::Year, "Smith, J. (2019). Title."));
        assert!(table.is_match(Construct::Year, "Doe (2020a)"));
        assert!(table.is_match(Construct::Year, "علي (٢٠١٩)"));
        assert!(!table.is_match(Construct::Year, "Doe (19)"));
    }

    #[test]
    fn test_json_roundtrip_preserves_matching() {
        let json = PatternTable::builtin().to_json().unwrap();
        let table = PatternTable::from_json(&json).unwrap();
        assert_eq!(table.len(), PatternTable::builtin().len());
        assert!(table.is_match(Construct::Bullet, "• Overview"));
    }

    #[test]
    fn test_invalid_pattern() {
        let spec = PatternSpec::new(Script::Latin, Construct::Caption, "(unclosed");
        let result = PatternTable::default().with_spec(spec);
        assert!(matches!(result, Err(Error::Pattern { .. })));
    }

    #[test]
    fn test_custom_entry() {
        let table = PatternTable::default()
            .with_spec(PatternSpec::new(
                Script::Latin,
                Construct::Marker,
                r"(?i)^chart\s*\d+",
            ))
            .unwrap();
        assert!(table.is_match(Construct::Marker, "Chart 2 growth"));
    }
}
