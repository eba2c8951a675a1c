//! Symbol Tables - static lookup data for lexing and canonicalization
//!
//! Holds the reserved-word and function inventories, the punctuation
//! substitution table, and the schema/system object whitelists. Built once at
//! startup and passed explicitly to the tokenizer and mutation engine; never
//! mutated afterwards, so a `SymbolTables` behind an `Arc` may be shared by
//! any number of threads without synchronization.

pub(crate) mod data;

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SqlMorphError};

/// Category of a whitelisted schema or system object.
///
/// Each category maps to the placeholder the canonicalizer emits in place of
/// any of the category's concrete names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectCategory {
    /// System databases (mysql, information_schema, ...)
    SysDatabase,
    /// System tables
    SysTable,
    /// Information-schema columns
    SysColumn,
    /// Session/server variables
    SysVariable,
    /// System views
    SysView,
    /// Stored system routines
    SysRoutine,
    /// User-schema tables
    UserTable,
    /// User-schema columns
    UserColumn,
}

impl ObjectCategory {
    /// Placeholder token emitted for names in this category.
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::SysDatabase => "SYS_DB",
            Self::SysTable => "SYSTBL",
            Self::SysColumn => "SYSCOL",
            Self::SysVariable => "SYSVAR",
            Self::SysView => "SYSVIEW",
            Self::SysRoutine => "SYSSTORED",
            Self::UserTable => "USRTBL",
            Self::UserColumn => "USRCOL",
        }
    }

    /// All categories, in substitution order (system before user).
    pub fn all() -> [Self; 8] {
        [
            Self::SysDatabase,
            Self::SysTable,
            Self::SysColumn,
            Self::SysVariable,
            Self::SysView,
            Self::SysRoutine,
            Self::UserTable,
            Self::UserColumn,
        ]
    }
}

/// Paths to the externally supplied whitelist files.
///
/// Each file is line-oriented, one identifier per line. Absent entries leave
/// the corresponding category empty.
#[derive(Debug, Clone, Default)]
pub struct WhitelistFiles {
    pub system_tables: Option<PathBuf>,
    pub info_schema_columns: Option<PathBuf>,
    pub variables: Option<PathBuf>,
    pub views: Option<PathBuf>,
    pub routines: Option<PathBuf>,
}

/// Immutable lookup tables shared by the tokenizer and the mutation catalog.
#[derive(Debug, Clone)]
pub struct SymbolTables {
    keywords: HashSet<String>,
    objects: Vec<(ObjectCategory, Vec<String>)>,
}

impl SymbolTables {
    /// Tables with the embedded data only: reserved words, functions,
    /// punctuation, system databases, and the default user schema
    /// (table `TAB`, columns `COL1`..`COL6`).
    pub fn builtin() -> Self {
        let mut keywords: HashSet<String> =
            data::RESERVED_WORDS.iter().map(|w| w.to_string()).collect();
        keywords.extend(data::BUILTIN_FUNCTIONS.iter().map(|w| w.to_string()));

        let mut tables = Self {
            keywords,
            objects: ObjectCategory::all()
                .iter()
                .map(|c| (*c, Vec::new()))
                .collect(),
        };
        tables.set_category(
            ObjectCategory::SysDatabase,
            ["MYSQL", "INFORMATION_SCHEMA", "SYS", "PERFORMANCE_SCHEMA"]
                .iter()
                .map(|s| s.to_string()),
        );
        tables.set_category(
            ObjectCategory::UserTable,
            ["TAB"].iter().map(|s| s.to_string()),
        );
        tables.set_category(
            ObjectCategory::UserColumn,
            ["COL1", "COL2", "COL3", "COL4", "COL5", "COL6"]
                .iter()
                .map(|s| s.to_string()),
        );
        tables
    }

    /// Builtin tables plus the system-object whitelists read from files.
    pub fn with_whitelists(files: &WhitelistFiles) -> Result<Self> {
        let mut tables = Self::builtin();
        let pairs = [
            (ObjectCategory::SysTable, &files.system_tables),
            (ObjectCategory::SysColumn, &files.info_schema_columns),
            (ObjectCategory::SysVariable, &files.variables),
            (ObjectCategory::SysView, &files.views),
            (ObjectCategory::SysRoutine, &files.routines),
        ];
        for (category, path) in pairs {
            if let Some(path) = path {
                tables.load_category(category, path)?;
            }
        }
        Ok(tables)
    }

    /// Replace a category's name set. Names are trimmed, uppercased,
    /// deduplicated, and ordered longest-first so that substitution never
    /// matches a name that is a prefix of a longer whitelisted name.
    pub fn set_category<I>(&mut self, category: ObjectCategory, names: I)
    where
        I: IntoIterator<Item = String>,
    {
        let normalized = normalize_names(names);
        if let Some(slot) = self.objects.iter_mut().find(|(c, _)| *c == category) {
            slot.1 = normalized;
        }
    }

    /// Load a category from a line-oriented whitelist file.
    pub fn load_category(&mut self, category: ObjectCategory, path: &Path) -> Result<()> {
        let text = fs::read_to_string(path).map_err(|source| SqlMorphError::WhitelistIo {
            path: path.to_path_buf(),
            source,
        })?;
        self.set_category(category, text.lines().map(|l| l.to_string()));
        Ok(())
    }

    /// Whether `word` is a reserved word or built-in function
    /// (case-insensitive).
    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word.to_uppercase().as_str())
    }

    /// Whether `word` belongs to the common-keyword set that the
    /// case-randomization operator is allowed to touch (case-insensitive).
    pub fn is_common_keyword(&self, word: &str) -> bool {
        let upper = word.to_uppercase();
        data::COMMON_KEYWORDS.contains(&upper.as_str())
    }

    /// Object categories with their normalized name sets, in substitution
    /// order.
    pub fn objects(&self) -> &[(ObjectCategory, Vec<String>)] {
        &self.objects
    }

    /// The ordered punctuation substitution table.
    pub fn punctuation(&self) -> &'static [(&'static str, &'static str)] {
        data::PUNCTUATION
    }

    /// The full canonical token alphabet, in stable order: reserved words,
    /// functions, punctuation names, object placeholders, literal classes.
    ///
    /// The index of a token in this list is stable across runs for a given
    /// table version, which is what downstream feature extractors key on.
    pub fn token_alphabet(&self) -> Vec<&'static str> {
        let mut seen = HashSet::new();
        let mut alphabet = Vec::new();
        let mut push = |tok: &'static str, out: &mut Vec<&'static str>| {
            if seen.insert(tok) {
                out.push(tok);
            }
        };
        for word in data::RESERVED_WORDS {
            push(word, &mut alphabet);
        }
        for func in data::BUILTIN_FUNCTIONS {
            push(func, &mut alphabet);
        }
        for (_, name) in data::PUNCTUATION {
            push(name, &mut alphabet);
        }
        for category in ObjectCategory::all() {
            push(category.placeholder(), &mut alphabet);
        }
        for tok in data::NUMBER_TOKENS {
            push(tok, &mut alphabet);
        }
        push("STR", &mut alphabet);
        push("CHR", &mut alphabet);
        alphabet
    }
}

impl Default for SymbolTables {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Trim, drop empties, uppercase, deduplicate, order longest-first
/// (ties alphabetical for determinism).
fn normalize_names<I>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let unique: HashSet<String> = names
        .into_iter()
        .map(|n| n.trim().to_uppercase())
        .filter(|n| !n.is_empty())
        .collect();
    let mut out: Vec<String> = unique.into_iter().collect();
    out.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    out
}
