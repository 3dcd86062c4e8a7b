//! Static table of Azerbaijani legal codes.
//!
//! Maps the extracted source filenames to short statute codes and bilingual
//! names. The table is an immutable value; the chunker receives it at
//! construction instead of reaching for global state.

use std::collections::HashMap;
use std::path::Path;

use serde::Serialize;

/// Code used for statutes missing from the table.
pub const UNKNOWN_CODE: &str = "unknown";

/// Azerbaijani placeholder name for unknown statutes.
pub const UNKNOWN_NAME_AZ: &str = "Naməlum Məcəllə";

/// English placeholder name for unknown statutes.
pub const UNKNOWN_NAME_EN: &str = "Unknown Code";

/// One legal code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatuteInfo {
    /// Short code (e.g. "civil").
    pub code: String,

    /// Azerbaijani name.
    pub name_az: String,

    /// English name.
    pub name_en: String,

    /// Source filename the code is registered under (e.g. "civil_law_code.pdf").
    pub filename: String,
}

impl StatuteInfo {
    /// Create a statute entry.
    #[must_use]
    pub fn new(
        filename: impl Into<String>,
        code: impl Into<String>,
        name_az: impl Into<String>,
        name_en: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name_az: name_az.into(),
            name_en: name_en.into(),
            filename: filename.into(),
        }
    }

    /// Placeholder entry for a code missing from the table.
    #[must_use]
    pub fn unknown(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name_az: UNKNOWN_NAME_AZ.to_string(),
            name_en: UNKNOWN_NAME_EN.to_string(),
            filename: String::new(),
        }
    }

    /// Whether this entry is the placeholder for an unknown statute.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.filename.is_empty()
    }
}

/// Immutable code and filename lookup.
#[derive(Debug, Clone, Default)]
pub struct StatuteTable {
    entries: Vec<StatuteInfo>,
    by_code: HashMap<String, usize>,
    by_stem: HashMap<String, usize>,
}

/// Filename, code, Azerbaijani name, English name.
const AZERBAIJANI_CODES: &[(&str, &str, &str, &str)] = &[
    ("family-law-code.pdf", "family", "Ailə Məcəlləsi", "Family Law Code"),
    ("criminal_law_code.pdf", "criminal", "Cinayət Məcəlləsi", "Criminal Law Code"),
    ("civil_law_code.pdf", "civil", "Mülki Məcəllə", "Civil Law Code"),
    (
        "criminal_procedure_law_code.pdf",
        "criminal_procedure",
        "Cinayət Prosessual Məcəlləsi",
        "Criminal Procedure Code",
    ),
    (
        "civil_procedure_law_code.pdf",
        "civil_procedure",
        "Mülki Prosessual Məcəllə",
        "Civil Procedure Code",
    ),
    ("labor_law_code.pdf", "labor", "Əmək Məcəlləsi", "Labor Law Code"),
    (
        "administrative_offenses_law_code.pdf",
        "administrative_offenses",
        "İnzibati Xətalar Məcəlləsi",
        "Administrative Offenses Code",
    ),
    (
        "administrative_procedure_law_code.pdf",
        "administrative_procedure",
        "İnzibati Prosedur Məcəlləsi",
        "Administrative Procedure Code",
    ),
    ("competition_law_code.pdf", "competition", "Rəqabət Məcəlləsi", "Competition Law Code"),
    ("customs_law_code.pdf", "customs", "Gömrük Məcəlləsi", "Customs Code"),
    ("election_law_code.pdf", "election", "Seçki Məcəlləsi", "Election Code"),
    (
        "execution_of_sentences_law_code.pdf",
        "execution",
        "Cəzaların İcrası Məcəlləsi",
        "Execution of Sentences Code",
    ),
    ("forest_law_code.pdf", "forest", "Meşə Məcəlləsi", "Forest Code"),
    ("housing_law_code.pdf", "housing", "Mənzil Məcəlləsi", "Housing Code"),
    ("land_law_code.pdf", "land", "Torpaq Məcəlləsi", "Land Code"),
    (
        "merchant_shipping_law_code.pdf",
        "merchant_shipping",
        "Ticarət Gəmiçiliyi Məcəlləsi",
        "Merchant Shipping Code",
    ),
    ("migration_law_code.pdf", "migration", "Miqrasiya Məcəlləsi", "Migration Code"),
    (
        "urban_planning_and_construction_law_code.pdf",
        "urban_planning",
        "Şəhərsalma və Tikinti Məcəlləsi",
        "Urban Planning and Construction Code",
    ),
    ("water_law_code.pdf", "water", "Su Məcəlləsi", "Water Code"),
];

/// File stem used as the filename key ("civil_law_code.pdf" -> "civil_law_code").
fn file_stem(filename: &str) -> String {
    Path::new(filename)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| filename.to_string())
}

impl StatuteTable {
    /// Build a table from explicit entries. Later duplicates win.
    #[must_use]
    pub fn new(entries: impl IntoIterator<Item = StatuteInfo>) -> Self {
        let mut table = Self::default();
        for info in entries {
            let idx = table.entries.len();
            table.by_code.insert(info.code.clone(), idx);
            table.by_stem.insert(file_stem(&info.filename), idx);
            table.entries.push(info);
        }
        table
    }

    /// The 19 Azerbaijani codes.
    #[must_use]
    pub fn azerbaijani_codes() -> Self {
        Self::new(
            AZERBAIJANI_CODES
                .iter()
                .map(|(file, code, az, en)| StatuteInfo::new(*file, *code, *az, *en)),
        )
    }

    /// Look up a statute by its short code.
    #[must_use]
    pub fn by_code(&self, code: &str) -> Option<&StatuteInfo> {
        self.by_code.get(code).map(|&idx| &self.entries[idx])
    }

    /// Look up a statute by source filename.
    ///
    /// Only the stem is compared, so an extracted `civil_law_code.txt`
    /// resolves the same as `civil_law_code.pdf`.
    #[must_use]
    pub fn by_filename(&self, filename: &str) -> Option<&StatuteInfo> {
        let name = Path::new(filename)
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| filename.to_string());
        self.by_stem.get(&file_stem(&name)).map(|&idx| &self.entries[idx])
    }

    /// Resolve a code, falling back to the unknown placeholder.
    #[must_use]
    pub fn resolve(&self, code: &str) -> StatuteInfo {
        self.by_code(code)
            .cloned()
            .unwrap_or_else(|| StatuteInfo::unknown(code))
    }

    /// Resolve a filename, falling back to the `unknown` code.
    #[must_use]
    pub fn resolve_filename(&self, filename: &str) -> StatuteInfo {
        self.by_filename(filename)
            .cloned()
            .unwrap_or_else(|| StatuteInfo::unknown(UNKNOWN_CODE))
    }

    /// All entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &StatuteInfo> {
        self.entries.iter()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
