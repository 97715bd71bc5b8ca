//! Content loading.
//!
//! Loads the sidebar tree and the code samples, validates them once, and
//! returns an immutable [`Content`] value shared by every render.
//!
//! # Layout
//!
//! ```text
//! content/
//! ├── sidebar.yaml
//! └── samples/
//!     ├── objects/
//!     │   └── unset-channel-data.yaml
//!     └── users/
//!         └── bulk-delete.yaml
//! ```
//!
//! The topic key is the file stem; the group is the directory under `samples/`.
//! The same layout is compiled into the crate and served by [`Content::builtin`].

use std::path::{Path, PathBuf};

use crate::navigation::{NavNode, Navigation, NavigationError};
use crate::samples::{SampleError, SampleRegistry, SampleSet};

/// Sidebar file name inside a content directory.
pub const SIDEBAR_FILENAME: &str = "sidebar.yaml";

/// Samples directory name inside a content directory.
pub const SAMPLES_DIRNAME: &str = "samples";

const BUILTIN_SIDEBAR: &str = include_str!("../content/sidebar.yaml");

/// Built-in samples as `(group, topic, yaml)`.
const BUILTIN_SAMPLES: &[(&str, &str, &str)] = &[
    (
        "objects",
        "unset-channel-data",
        include_str!("../content/samples/objects/unset-channel-data.yaml"),
    ),
    (
        "users",
        "bulk-delete",
        include_str!("../content/samples/users/bulk-delete.yaml"),
    ),
    (
        "users",
        "set-channel-data",
        include_str!("../content/samples/users/set-channel-data.yaml"),
    ),
    (
        "users",
        "set-channel-data-push",
        include_str!("../content/samples/users/set-channel-data-push.yaml"),
    ),
    (
        "workflows",
        "cancel",
        include_str!("../content/samples/workflows/cancel.yaml"),
    ),
];

/// Where content was loaded from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentSource {
    /// Compiled into the binary.
    Builtin,
    /// Read from a content directory.
    Directory(PathBuf),
}

/// Content loading error.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// Content directory does not exist.
    #[error("Content directory not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error reading a content file.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// Sidebar file is not valid YAML.
    #[error("Invalid sidebar in {}: {source}", path.display())]
    Yaml {
        /// Sidebar file.
        path: PathBuf,
        /// Parser error.
        #[source]
        source: serde_yaml::Error,
    },
    /// Sample file or group directory name is not valid UTF-8.
    #[error("Sample name is not valid UTF-8: {}", .0.display())]
    InvalidName(PathBuf),
    /// Sample discovery pattern is invalid.
    #[error("Invalid samples pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    /// Navigation tree failed validation.
    #[error("Invalid navigation: {0}")]
    Navigation(#[from] NavigationError),
    /// Sample content failed validation.
    #[error("Invalid samples: {0}")]
    Samples(#[from] SampleError),
}

/// Validated, read-only site content.
#[derive(Debug)]
pub struct Content {
    navigation: Navigation,
    samples: SampleRegistry,
    source: ContentSource,
}

impl Content {
    /// Create content from already validated parts.
    #[must_use]
    pub fn new(navigation: Navigation, samples: SampleRegistry, source: ContentSource) -> Self {
        Self {
            navigation,
            samples,
            source,
        }
    }

    /// Load content from a directory, or the built-in content when `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] if a file cannot be read or any content fails
    /// validation.
    pub fn load(source_dir: Option<&Path>) -> Result<Self, ContentError> {
        match source_dir {
            Some(dir) => Self::load_dir(dir),
            None => Self::builtin(),
        }
    }

    /// Load the content compiled into the crate.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] if the built-in content fails validation.
    pub fn builtin() -> Result<Self, ContentError> {
        let tree = parse_sidebar(BUILTIN_SIDEBAR, Path::new(SIDEBAR_FILENAME))?;
        let navigation = Navigation::new(tree)?;

        let sets = BUILTIN_SAMPLES
            .iter()
            .map(|(group, topic, yaml)| SampleSet::from_yaml(*topic, Some((*group).to_owned()), yaml))
            .collect::<Result<Vec<_>, _>>()?;
        let samples = SampleRegistry::from_sets(sets)?;

        let content = Self::new(navigation, samples, ContentSource::Builtin);
        content.log_loaded();
        Ok(content)
    }

    /// Load content from a directory.
    ///
    /// Reads `sidebar.yaml` and every `*.yaml` file under `samples/`. A missing
    /// `samples/` directory yields an empty registry.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] if the directory or sidebar is missing, a file
    /// cannot be read, or any content fails validation.
    pub fn load_dir(dir: &Path) -> Result<Self, ContentError> {
        if !dir.is_dir() {
            return Err(ContentError::NotFound(dir.to_path_buf()));
        }

        let sidebar_path = dir.join(SIDEBAR_FILENAME);
        let sidebar = read_file(&sidebar_path)?;
        let tree = parse_sidebar(&sidebar, &sidebar_path)?;
        let navigation = Navigation::new(tree)?;

        let samples_dir = dir.join(SAMPLES_DIRNAME);
        let mut samples = SampleRegistry::new();
        for path in discover_samples(&samples_dir)? {
            let (topic, group) = sample_key(&samples_dir, &path)?;

            let yaml = read_file(&path)?;
            samples.insert(SampleSet::from_yaml(topic, group, &yaml)?)?;
        }

        let content = Self::new(
            navigation,
            samples,
            ContentSource::Directory(dir.to_path_buf()),
        );
        content.log_loaded();
        Ok(content)
    }

    /// Navigation index.
    #[must_use]
    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    /// Sample registry.
    #[must_use]
    pub fn samples(&self) -> &SampleRegistry {
        &self.samples
    }

    /// Where the content came from.
    #[must_use]
    pub fn source(&self) -> &ContentSource {
        &self.source
    }

    fn log_loaded(&self) {
        tracing::info!(
            source = ?self.source,
            nav_entries = self.navigation.len(),
            topics = self.samples.len(),
            "Content loaded"
        );
    }
}

fn read_file(path: &Path) -> Result<String, ContentError> {
    std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_sidebar(content: &str, path: &Path) -> Result<Vec<NavNode>, ContentError> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_yaml::from_str(content).map_err(|source| ContentError::Yaml {
        path: path.to_path_buf(),
        source,
    })
}

/// Topic key (file stem) and group (directory under `samples/`) of a sample file.
fn sample_key(samples_dir: &Path, path: &Path) -> Result<(String, Option<String>), ContentError> {
    let invalid = || ContentError::InvalidName(path.to_path_buf());

    let topic = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(invalid)?
        .to_owned();

    let group = match path.parent().and_then(|p| p.strip_prefix(samples_dir).ok()) {
        Some(rel) if rel.as_os_str().is_empty() => None,
        Some(rel) => Some(rel.to_str().ok_or_else(invalid)?.replace('\\', "/")),
        None => None,
    };

    Ok((topic, group))
}

/// File name pattern for sample files.
const SAMPLE_PATTERN: &str = "*.yaml";

/// Find sample files under `dir`, sorted by path.
///
/// Hidden entries are skipped. A name that is not valid UTF-8 is an error.
fn discover_samples(dir: &Path) -> Result<Vec<PathBuf>, ContentError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let pattern = glob::Pattern::new(SAMPLE_PATTERN)?;
    let mut paths = Vec::new();
    walk_samples(dir, &pattern, &mut paths)?;
    paths.sort();
    Ok(paths)
}

fn walk_samples(
    dir: &Path,
    pattern: &glob::Pattern,
    paths: &mut Vec<PathBuf>,
) -> Result<(), ContentError> {
    let io_error = |source: std::io::Error| ContentError::Io {
        path: dir.to_path_buf(),
        source,
    };

    for entry in std::fs::read_dir(dir).map_err(io_error)? {
        let entry = entry.map_err(io_error)?;
        let path = entry.path();
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            return Err(ContentError::InvalidName(path));
        };
        if name.starts_with('.') {
            continue;
        }

        if entry.file_type().map_err(io_error)?.is_dir() {
            walk_samples(&path, pattern, paths)?;
        } else if pattern.matches(name) {
            paths.push(path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    static_assertions::assert_impl_all!(super::Content: Send, Sync);

    const SIDEBAR: &str = r"
- title: Send & manage data
  slug: /send-and-manage-data
  pages:
    - { slug: /users, title: Users }
    - { slug: /objects, title: Objects }
";

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_builtin_content_loads() {
        let content = Content::builtin().unwrap();

        assert_eq!(content.source(), &ContentSource::Builtin);
        assert_eq!(content.samples().len(), BUILTIN_SAMPLES.len());
        assert!(content.navigation().find("/send-notifications").is_some());
    }

    #[test]
    fn test_load_none_uses_builtin() {
        let content = Content::load(None).unwrap();

        assert_eq!(content.source(), &ContentSource::Builtin);
    }

    #[test]
    fn test_load_dir_reads_sidebar_and_samples() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(&temp_dir.path().join(SIDEBAR_FILENAME), SIDEBAR);
        write(
            &temp_dir.path().join("samples/users/bulk-delete.yaml"),
            "ruby: |\n  Knock::Users.bulk_delete(user_ids: user_ids)\n",
        );
        write(
            &temp_dir.path().join("samples/cancel.yaml"),
            "python: |\n  client.workflows.cancel(key=key)\n",
        );

        let content = Content::load_dir(temp_dir.path()).unwrap();

        assert_eq!(
            content.source(),
            &ContentSource::Directory(temp_dir.path().to_path_buf())
        );
        assert_eq!(content.navigation().len(), 3);
        let bulk = content.samples().topic("bulk-delete").unwrap();
        assert_eq!(bulk.group(), Some("users"));
        assert_eq!(
            bulk.snippet("ruby"),
            Some("Knock::Users.bulk_delete(user_ids: user_ids)\n")
        );
        assert_eq!(content.samples().topic("cancel").unwrap().group(), None);
    }

    #[test]
    fn test_load_dir_without_samples_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(&temp_dir.path().join(SIDEBAR_FILENAME), SIDEBAR);

        let content = Content::load_dir(temp_dir.path()).unwrap();

        assert!(content.samples().is_empty());
    }

    #[test]
    fn test_load_dir_missing_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let missing = temp_dir.path().join("missing");

        let err = Content::load_dir(&missing).unwrap_err();

        assert!(matches!(err, ContentError::NotFound(_)));
    }

    #[test]
    fn test_load_dir_missing_sidebar() {
        let temp_dir = tempfile::tempdir().unwrap();

        let err = Content::load_dir(temp_dir.path()).unwrap_err();

        assert!(matches!(err, ContentError::Io { .. }));
        assert!(err.to_string().contains(SIDEBAR_FILENAME));
    }

    #[test]
    fn test_load_dir_invalid_sidebar_yaml() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(&temp_dir.path().join(SIDEBAR_FILENAME), "- title: [unclosed\n");

        let err = Content::load_dir(temp_dir.path()).unwrap_err();

        assert!(matches!(err, ContentError::Yaml { .. }));
    }

    #[test]
    fn test_load_dir_duplicate_path_fails_fast() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(
            &temp_dir.path().join(SIDEBAR_FILENAME),
            r"
- { slug: /users, title: Users }
- { slug: /people, title: People, path: /users }
",
        );

        let err = Content::load_dir(temp_dir.path()).unwrap_err();

        assert!(matches!(
            err,
            ContentError::Navigation(NavigationError::DuplicatePath { .. })
        ));
    }

    #[test]
    fn test_load_dir_duplicate_topic_across_groups() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(&temp_dir.path().join(SIDEBAR_FILENAME), SIDEBAR);
        write(
            &temp_dir.path().join("samples/objects/set-channel-data.yaml"),
            "go: x\n",
        );
        write(
            &temp_dir.path().join("samples/users/set-channel-data.yaml"),
            "go: y\n",
        );

        let err = Content::load_dir(temp_dir.path()).unwrap_err();

        assert!(matches!(
            err,
            ContentError::Samples(SampleError::DuplicateTopic(_))
        ));
    }

    #[test]
    fn test_load_dir_empty_snippet_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(&temp_dir.path().join(SIDEBAR_FILENAME), SIDEBAR);
        write(&temp_dir.path().join("samples/cancel.yaml"), "python: \"\"\n");

        let err = Content::load_dir(temp_dir.path()).unwrap_err();

        assert!(matches!(
            err,
            ContentError::Samples(SampleError::EmptySnippet { .. })
        ));
    }

    #[test]
    fn test_empty_sidebar_is_empty_navigation() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(&temp_dir.path().join(SIDEBAR_FILENAME), "\n");

        let content = Content::load_dir(temp_dir.path()).unwrap();

        assert!(content.navigation().is_empty());
    }

    #[test]
    fn test_load_dir_with_glob_characters_in_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().join("docs[v1]");
        write(&dir.join(SIDEBAR_FILENAME), SIDEBAR);
        write(
            &dir.join("samples/workflows/cancel.yaml"),
            "python: |\n  client.workflows.cancel(key=key)\n",
        );

        let content = Content::load_dir(&dir).unwrap();

        assert_eq!(content.samples().len(), 1);
        assert_eq!(
            content.samples().topic("cancel").unwrap().group(),
            Some("workflows")
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_load_dir_non_utf8_sample_name_fails() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp_dir = tempfile::tempdir().unwrap();
        write(&temp_dir.path().join(SIDEBAR_FILENAME), SIDEBAR);
        let name = OsStr::from_bytes(b"bad\xff.yaml");
        write(
            &temp_dir.path().join(SAMPLES_DIRNAME).join(name),
            "python: x\n",
        );

        let err = Content::load_dir(temp_dir.path()).unwrap_err();

        assert!(matches!(err, ContentError::InvalidName(_)));
    }
}
