//! Sidebar navigation tree.
//!
//! The authored outline is a tree of [`NavNode`] values. [`Navigation`] is the
//! validated, read-only index built from it once at load time.
//!
//! # Architecture
//!
//! Nodes are flattened in pre-order into a `Vec<NavEntry>` with parent/children
//! relationships tracked by indices. This provides:
//! - O(1) URL path lookups via `path_index` `HashMap`
//! - O(d) ancestor chains and breadcrumbs where d is the node depth
//!
//! # Path Resolution
//!
//! A node's path is its parent's path joined with its own slug. A slug of `/`
//! is the landing page of its parent section and resolves to the parent's path.
//! An explicit `path` on a node replaces the computed path and becomes the base
//! for its children.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// Deepest nesting accepted in a navigation tree.
pub const MAX_DEPTH: usize = 6;

/// Node in the authored navigation tree.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "NavNodeRaw")]
pub struct NavNode {
    /// Display title.
    pub title: String,
    /// URL path segment, usually with a leading slash (e.g. "/quick-start").
    pub slug: String,
    /// Short summary shown on section overviews.
    pub description: Option<String>,
    /// Absolute path that replaces the computed one.
    pub path: Option<String>,
    /// Leaf page or section with children.
    pub kind: NavKind,
}

/// Whether a node is a leaf or owns children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavKind {
    /// Leaf page.
    Page,
    /// Section with ordered children.
    Section(Vec<NavNode>),
}

/// Node as written in `sidebar.yaml`.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct NavNodeRaw {
    title: String,
    slug: String,
    #[serde(default, alias = "description")]
    desc: Option<String>,
    #[serde(default)]
    path: Option<String>,
    #[serde(default)]
    pages: Option<Vec<NavNode>>,
}

impl From<NavNodeRaw> for NavNode {
    fn from(raw: NavNodeRaw) -> Self {
        Self {
            title: raw.title,
            slug: raw.slug,
            description: raw.desc,
            path: raw.path,
            kind: raw.pages.map_or(NavKind::Page, NavKind::Section),
        }
    }
}

impl NavNode {
    /// Create a leaf page.
    pub fn page(title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            slug: slug.into(),
            description: None,
            path: None,
            kind: NavKind::Page,
        }
    }

    /// Create a section with children.
    pub fn section(
        title: impl Into<String>,
        slug: impl Into<String>,
        children: Vec<NavNode>,
    ) -> Self {
        Self {
            title: title.into(),
            slug: slug.into(),
            description: None,
            path: None,
            kind: NavKind::Section(children),
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set an absolute path override.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Children of a section, empty for pages.
    #[must_use]
    pub fn children(&self) -> &[NavNode] {
        match &self.kind {
            NavKind::Page => &[],
            NavKind::Section(children) => children,
        }
    }

    /// Check if this node is a section.
    #[must_use]
    pub fn is_section(&self) -> bool {
        matches!(self.kind, NavKind::Section(_))
    }

    /// Check if the slug is the root segment (`/`).
    #[must_use]
    pub fn is_root_slug(&self) -> bool {
        !self.slug.is_empty() && self.slug.trim_matches('/').is_empty()
    }
}

/// Flattened node with its resolved path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavEntry {
    /// Display title.
    pub title: String,
    /// Resolved absolute path (e.g. "/send-notifications/triggering-workflows").
    pub path: String,
    /// Description from the authored node.
    pub description: Option<String>,
    /// Nesting depth, 0 for top-level nodes.
    pub depth: usize,
    /// Index of the parent entry.
    pub parent: Option<usize>,
    /// True if the node is a section.
    pub is_section: bool,
    /// True if the node is the landing page of its parent section.
    pub is_index: bool,
}

/// Navigation item with children for UI tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Display title.
    pub title: String,
    /// Link target path.
    pub path: String,
    /// Section summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Child navigation items.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
}

/// Breadcrumb navigation item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BreadcrumbItem {
    /// Display title.
    pub title: String,
    /// Link target path.
    pub path: String,
}

/// Matched node for a path together with its ancestors.
#[derive(Debug)]
pub struct ActiveChain<'a> {
    entries: &'a [NavEntry],
    ancestors: Vec<usize>,
    leaf: usize,
}

impl<'a> ActiveChain<'a> {
    /// The matched node.
    #[must_use]
    pub fn leaf(&self) -> &'a NavEntry {
        &self.entries[self.leaf]
    }

    /// Index of the matched node.
    #[must_use]
    pub fn leaf_index(&self) -> usize {
        self.leaf
    }

    /// Ancestors of the matched node, root first.
    pub fn ancestors(&self) -> impl Iterator<Item = &'a NavEntry> + '_ {
        self.ancestors.iter().map(|&i| &self.entries[i])
    }

    /// Check if the entry at `idx` is the matched node or one of its ancestors.
    #[must_use]
    pub fn contains(&self, idx: usize) -> bool {
        self.leaf == idx || self.ancestors.contains(&idx)
    }
}

/// Navigation configuration error.
///
/// Raised once while building [`Navigation`]; a tree that fails validation is
/// never served.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    /// A node has no title.
    #[error("navigation node `{slug}` under {parent} has an empty title")]
    EmptyTitle {
        /// Path of the parent.
        parent: String,
        /// Slug of the offending node.
        slug: String,
    },
    /// A node has no slug.
    #[error("navigation node `{title}` has an empty slug")]
    EmptySlug {
        /// Title of the offending node.
        title: String,
    },
    /// Two siblings share a slug.
    #[error("duplicate slug `{slug}` under {parent}")]
    DuplicateSlug {
        /// Path of the parent.
        parent: String,
        /// Repeated slug.
        slug: String,
    },
    /// A path override is not absolute.
    #[error("path `{path}` on `{title}` must start with '/'")]
    InvalidPath {
        /// Title of the offending node.
        title: String,
        /// Override as written.
        path: String,
    },
    /// The tree nests deeper than [`MAX_DEPTH`].
    #[error("`{title}` is nested deeper than {max} levels", max = MAX_DEPTH)]
    TooDeep {
        /// Title of the first node past the limit.
        title: String,
    },
    /// Two nodes in different branches resolve to the same path.
    #[error("`{first}` and `{second}` both resolve to {path}")]
    DuplicatePath {
        /// Resolved path.
        path: String,
        /// Title of the node registered first.
        first: String,
        /// Title of the conflicting node.
        second: String,
    },
}

/// Normalize a URL path to `/a/b` form.
///
/// Repeated and trailing slashes are dropped; the root is `/`.
///
/// # Examples
///
/// ```
/// use kd_site::normalize_path;
///
/// assert_eq!(normalize_path("guide/setup/"), "/guide/setup");
/// assert_eq!(normalize_path("//"), "/");
/// ```
#[must_use]
pub fn normalize_path(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    format!("/{}", segments.join("/"))
}

/// Join a slug onto a resolved parent path.
fn join_slug(base: &str, slug: &str) -> String {
    normalize_path(&format!("{base}/{slug}"))
}

/// Validated navigation index.
///
/// Immutable after construction; safe to share across concurrent renders.
#[derive(Debug)]
pub struct Navigation {
    tree: Vec<NavNode>,
    entries: Vec<NavEntry>,
    children: Vec<Vec<usize>>,
    roots: Vec<usize>,
    path_index: HashMap<String, usize>,
}

impl Navigation {
    /// Build and validate the navigation index.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError`] for empty titles or slugs, duplicate sibling
    /// slugs, relative path overrides, excessive depth, or two nodes resolving
    /// to the same path (other than a landing page sharing its section's path).
    pub fn new(tree: Vec<NavNode>) -> Result<Self, NavigationError> {
        let mut builder = NavigationBuilder::default();
        builder.add_nodes(&tree, None, "/", 0)?;
        builder.build(tree)
    }

    /// The authored tree.
    #[must_use]
    pub fn tree(&self) -> &[NavNode] {
        &self.tree
    }

    /// All entries in pre-order, including sections shadowed by a landing page.
    #[must_use]
    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    /// Get entry by index.
    #[must_use]
    pub fn entry(&self, idx: usize) -> Option<&NavEntry> {
        self.entries.get(idx)
    }

    /// Indices of top-level entries.
    #[must_use]
    pub fn roots(&self) -> &[usize] {
        &self.roots
    }

    /// Indices of the children of an entry.
    #[must_use]
    pub fn children(&self, idx: usize) -> &[usize] {
        self.children.get(idx).map_or(&[], Vec::as_slice)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the tree is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Site-wide link list in pre-order.
    ///
    /// Every node appears with its resolved path, except a section whose
    /// landing page (slug `/`) answers for the same path; that path is listed
    /// once, under the landing page. Paths in the result are unique.
    #[must_use]
    pub fn flatten(&self) -> Vec<&NavEntry> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(idx, entry)| self.path_index.get(&entry.path) == Some(idx))
            .map(|(_, entry)| entry)
            .collect()
    }

    /// Find the entry serving a path.
    #[must_use]
    pub fn find(&self, path: &str) -> Option<&NavEntry> {
        self.index_of(path).map(|i| &self.entries[i])
    }

    /// Find the entry serving a path together with its ancestors.
    ///
    /// Accepts paths with or without leading and trailing slashes.
    #[must_use]
    pub fn active_chain(&self, path: &str) -> Option<ActiveChain<'_>> {
        let leaf = self.index_of(path)?;

        let mut ancestors = Vec::new();
        let mut current = self.entries[leaf].parent;
        while let Some(i) = current {
            ancestors.push(i);
            current = self.entries[i].parent;
        }
        ancestors.reverse();

        Some(ActiveChain {
            entries: &self.entries,
            ancestors,
            leaf,
        })
    }

    /// Build breadcrumbs for a given path.
    ///
    /// Returns "Home" followed by the ancestors of the matched node. The node
    /// itself is not included, nor is a section its landing page stands in for. Unknown paths get `[Home]`, the root gets nothing.
    #[must_use]
    pub fn breadcrumbs(&self, path: &str) -> Vec<BreadcrumbItem> {
        let path = normalize_path(path);
        if path == "/" {
            return Vec::new();
        }

        let mut breadcrumbs = vec![BreadcrumbItem {
            title: "Home".to_owned(),
            path: "/".to_owned(),
        }];

        if let Some(chain) = self.active_chain(&path) {
            let leaf_path = &chain.leaf().path;
            breadcrumbs.extend(
                chain
                    .ancestors()
                    .filter(|entry| entry.path != *leaf_path)
                    .map(|entry| BreadcrumbItem {
                        title: entry.title.clone(),
                        path: entry.path.clone(),
                    }),
            );
        }

        breadcrumbs
    }

    /// Build the navigation tree for UI presentation.
    #[must_use]
    pub fn items(&self) -> Vec<NavItem> {
        self.roots.iter().map(|&i| self.build_item(i)).collect()
    }

    fn build_item(&self, idx: usize) -> NavItem {
        let entry = &self.entries[idx];
        NavItem {
            title: entry.title.clone(),
            path: entry.path.clone(),
            description: entry.description.clone(),
            children: self.children[idx]
                .iter()
                .map(|&c| self.build_item(c))
                .collect(),
        }
    }

    fn index_of(&self, path: &str) -> Option<usize> {
        self.path_index.get(&normalize_path(path)).copied()
    }
}

/// Builder that flattens and validates a tree.
#[derive(Default)]
struct NavigationBuilder {
    entries: Vec<NavEntry>,
    children: Vec<Vec<usize>>,
    roots: Vec<usize>,
}

impl NavigationBuilder {
    fn add_nodes(
        &mut self,
        nodes: &[NavNode],
        parent: Option<usize>,
        base: &str,
        depth: usize,
    ) -> Result<(), NavigationError> {
        let mut seen = HashSet::new();

        for node in nodes {
            if depth >= MAX_DEPTH {
                return Err(NavigationError::TooDeep {
                    title: node.title.clone(),
                });
            }
            if node.slug.is_empty() {
                return Err(NavigationError::EmptySlug {
                    title: node.title.clone(),
                });
            }
            if node.title.trim().is_empty() {
                return Err(NavigationError::EmptyTitle {
                    parent: base.to_owned(),
                    slug: node.slug.clone(),
                });
            }
            if !seen.insert(node.slug.trim_matches('/')) {
                return Err(NavigationError::DuplicateSlug {
                    parent: base.to_owned(),
                    slug: node.slug.clone(),
                });
            }

            let path = match &node.path {
                Some(path) if path.starts_with('/') => normalize_path(path),
                Some(path) => {
                    return Err(NavigationError::InvalidPath {
                        title: node.title.clone(),
                        path: path.clone(),
                    });
                }
                None => join_slug(base, &node.slug),
            };

            let idx = self.add_entry(NavEntry {
                title: node.title.clone(),
                path,
                description: node.description.clone(),
                depth,
                parent,
                is_section: node.is_section(),
                is_index: parent.is_some() && node.path.is_none() && node.is_root_slug(),
            });

            let path = self.entries[idx].path.clone();
            self.add_nodes(node.children(), Some(idx), &path, depth + 1)?;
        }

        Ok(())
    }

    fn add_entry(&mut self, entry: NavEntry) -> usize {
        let idx = self.entries.len();
        match entry.parent {
            Some(parent) => self.children[parent].push(idx),
            None => self.roots.push(idx),
        }
        self.entries.push(entry);
        self.children.push(Vec::new());
        idx
    }

    fn build(self, tree: Vec<NavNode>) -> Result<Navigation, NavigationError> {
        let mut path_index: HashMap<String, usize> = HashMap::with_capacity(self.entries.len());

        for (idx, entry) in self.entries.iter().enumerate() {
            if let Some(&existing) = path_index.get(&entry.path) {
                // A landing page takes over its section's path
                if !(entry.is_index && entry.parent == Some(existing)) {
                    return Err(NavigationError::DuplicatePath {
                        path: entry.path.clone(),
                        first: self.entries[existing].title.clone(),
                        second: entry.title.clone(),
                    });
                }
            }
            path_index.insert(entry.path.clone(), idx);
        }

        Ok(Navigation {
            tree,
            entries: self.entries,
            children: self.children,
            roots: self.roots,
            path_index,
        })
    }
}
