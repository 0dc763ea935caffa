//! Keyword vocabulary used to tell keywords from identifiers.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Postgres reserved and type-name words recognised by default.
const POSTGRES_KEYWORDS: &str = "\
    all analyse analyze and any array as asc asymmetric authorization between bigint binary bit \
    boolean both case cast character check collate collation column concurrently constraint create \
    cross current_catalog current_date current_role current_schema current_time current_timestamp \
    current_user dec decimal default deferrable desc distinct do else end except exists extract \
    false fetch float for foreign freeze from full grant group grouping having ilike in initially \
    inner inout int integer intersect interval into is isnull join lateral leading least left like \
    limit localtime localtimestamp national natural nchar none not notnull null nullif numeric offset \
    on only or order out outer overlaps overlay placing position precision primary real references \
    returning right row select session_user setof similar smallint some symmetric table tablesample \
    then time timestamp to trailing treat trim true union unique user using values variadic verbose \
    when where window with xmlattributes xmlconcat xmlelement xmlexists xmlforest xmlnamespaces \
    xmlparse xmlpi xmlroot xmlserialize xmltable";

static POSTGRES: LazyLock<KeywordSet> = LazyLock::new(|| KeywordSet::from_words(POSTGRES_KEYWORDS));

/// A case-insensitive set of keywords.
///
/// Words are stored lowercased. A custom set replaces the default one
/// wholesale; there is no merging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet {
    words: HashSet<String>,
}

impl KeywordSet {
    /// Returns the shared default Postgres keyword set.
    ///
    /// The set is static, so the returned reference may take any lifetime.
    #[must_use]
    pub fn postgres<'a>() -> &'a Self {
        &POSTGRES
    }

    /// Builds a set from a whitespace-separated word list.
    #[must_use]
    pub fn from_words(list: &str) -> Self {
        list.split_whitespace().collect()
    }

    /// Returns true if `word` is a keyword, ignoring case.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Adds a word to the set.
    pub fn insert(&mut self, word: &str) -> bool {
        self.words.insert(word.to_lowercase())
    }

    /// Returns the number of words in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the set holds no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates over the lowercased words in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::default();
        for word in iter {
            set.insert(word.as_ref());
        }
        set
    }
}
