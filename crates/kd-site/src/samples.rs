//! Code sample registry.
//!
//! Each documented API operation has a [`SampleSet`]: one source snippet per
//! client SDK language, shown to readers as tabs. Snippets are opaque display
//! strings and are never rewritten.
//!
//! A missing topic or language is an expected condition (not every topic has
//! every language); callers omit the corresponding tab.

use std::collections::BTreeMap;
use std::collections::HashSet;
use std::fmt;

use serde::Deserialize;
use serde::de::{self, MapAccess, Visitor};

/// Source snippet for one SDK language.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snippet {
    /// Language identifier (e.g. "python", "csharp").
    pub language: String,
    /// Source code as authored.
    pub code: String,
}

/// Per-language code examples for one topic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SampleSet {
    topic: String,
    group: Option<String>,
    snippets: Vec<Snippet>,
}

impl SampleSet {
    /// Create a sample set, keeping snippets in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError`] if the topic or a language identifier is empty,
    /// a language repeats, a snippet is blank, or there are no snippets.
    pub fn new(
        topic: impl Into<String>,
        group: Option<String>,
        snippets: impl IntoIterator<Item = (String, String)>,
    ) -> Result<Self, SampleError> {
        let topic = topic.into();
        if topic.trim().is_empty() {
            return Err(SampleError::EmptyTopic);
        }

        let mut seen = HashSet::new();
        let mut collected = Vec::new();
        for (language, code) in snippets {
            if language.trim().is_empty() {
                return Err(SampleError::EmptyLanguage { topic });
            }
            if !seen.insert(language.clone()) {
                return Err(SampleError::DuplicateLanguage { topic, language });
            }
            if code.trim().is_empty() {
                return Err(SampleError::EmptySnippet { topic, language });
            }
            collected.push(Snippet { language, code });
        }

        if collected.is_empty() {
            return Err(SampleError::NoSnippets { topic });
        }

        Ok(Self {
            topic,
            group,
            snippets: collected,
        })
    }

    /// Parse a sample set from a YAML mapping of language to snippet.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::Parse`] for malformed YAML and the errors of
    /// [`SampleSet::new`] for invalid content.
    pub fn from_yaml(
        topic: impl Into<String>,
        group: Option<String>,
        content: &str,
    ) -> Result<Self, SampleError> {
        let topic = topic.into();
        let entries: LanguageEntries =
            serde_yaml::from_str(content).map_err(|e| SampleError::Parse {
                topic: topic.clone(),
                message: e.to_string(),
            })?;
        Self::new(topic, group, entries.0)
    }

    /// Topic key (e.g. "unset-channel-data").
    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Group the topic belongs to (e.g. "objects").
    #[must_use]
    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    /// Snippets in authored order.
    #[must_use]
    pub fn snippets(&self) -> &[Snippet] {
        &self.snippets
    }

    /// Language identifiers in authored order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.snippets.iter().map(|s| s.language.as_str())
    }

    /// Snippet for a language, `None` if not available for this topic.
    #[must_use]
    pub fn snippet(&self, language: &str) -> Option<&str> {
        self.snippets
            .iter()
            .find(|s| s.language == language)
            .map(|s| s.code.as_str())
    }

    /// Check if a language is available.
    #[must_use]
    pub fn has_language(&self, language: &str) -> bool {
        self.snippet(language).is_some()
    }
}

/// Ordered `language: snippet` pairs.
struct LanguageEntries(Vec<(String, String)>);

impl<'de> Deserialize<'de> for LanguageEntries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = LanguageEntries;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a mapping of language to code snippet")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((language, code)) = map.next_entry::<String, String>()? {
                    entries.push((language, code));
                }
                Ok(LanguageEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// Benign lookup miss.
///
/// Neither case is fatal: the UI omits the tab.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupMiss {
    /// No sample set for the topic.
    #[error("unknown topic `{0}`")]
    UnknownTopic(String),
    /// The topic has no snippet in the requested language.
    #[error("language `{language}` is not available for topic `{topic}`")]
    UnknownLanguage {
        /// Topic key.
        topic: String,
        /// Requested language.
        language: String,
    },
}

/// Sample content error raised at load time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SampleError {
    /// Sample file is not a valid language mapping.
    #[error("invalid samples for `{topic}`: {message}")]
    Parse {
        /// Topic key.
        topic: String,
        /// Parser message.
        message: String,
    },
    /// Topic key is empty.
    #[error("sample topic cannot be empty")]
    EmptyTopic,
    /// Language identifier is empty.
    #[error("empty language identifier in `{topic}`")]
    EmptyLanguage {
        /// Topic key.
        topic: String,
    },
    /// A language appears twice in one set.
    #[error("language `{language}` appears more than once in `{topic}`")]
    DuplicateLanguage {
        /// Topic key.
        topic: String,
        /// Repeated language.
        language: String,
    },
    /// A snippet is blank.
    #[error("snippet for `{language}` in `{topic}` is empty")]
    EmptySnippet {
        /// Topic key.
        topic: String,
        /// Language of the blank snippet.
        language: String,
    },
    /// A set has no snippets at all.
    #[error("`{topic}` has no snippets")]
    NoSnippets {
        /// Topic key.
        topic: String,
    },
    /// Two sets share a topic key.
    #[error("duplicate sample topic `{0}`")]
    DuplicateTopic(String),
}

/// Registry of sample sets keyed by topic.
#[derive(Clone, Debug, Default)]
pub struct SampleRegistry {
    sets: BTreeMap<String, SampleSet>,
}

impl SampleRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from sample sets.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::DuplicateTopic`] if two sets share a topic.
    pub fn from_sets(sets: impl IntoIterator<Item = SampleSet>) -> Result<Self, SampleError> {
        let mut registry = Self::new();
        for set in sets {
            registry.insert(set)?;
        }
        Ok(registry)
    }

    /// Add a sample set.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::DuplicateTopic`] if the topic is already registered.
    pub fn insert(&mut self, set: SampleSet) -> Result<(), SampleError> {
        if self.sets.contains_key(set.topic()) {
            return Err(SampleError::DuplicateTopic(set.topic().to_owned()));
        }
        self.sets.insert(set.topic().to_owned(), set);
        Ok(())
    }

    /// Sample set for a topic, `None` if unknown.
    #[must_use]
    pub fn topic(&self, topic: &str) -> Option<&SampleSet> {
        self.sets.get(topic)
    }

    /// Snippet for a topic and language.
    ///
    /// # Errors
    ///
    /// Returns [`LookupMiss`] if the topic or the language is not available.
    pub fn lookup(&self, topic: &str, language: &str) -> Result<&str, LookupMiss> {
        let set = self
            .topic(topic)
            .ok_or_else(|| LookupMiss::UnknownTopic(topic.to_owned()))?;
        set.snippet(language)
            .ok_or_else(|| LookupMiss::UnknownLanguage {
                topic: topic.to_owned(),
                language: language.to_owned(),
            })
    }

    /// All sample sets ordered by topic.
    pub fn iter(&self) -> impl Iterator<Item = &SampleSet> {
        self.sets.values()
    }

    /// Number of topics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}
