//! State path representation for locating values in the state tree.
//!
//! This module provides [`StatePath`] and [`PathSegment`]. Paths are built
//! leaf-first: an assertion reports errors at the root path and every
//! enclosing `object`/`array` prepends its key or index as the result
//! bubbles up.

use std::fmt::{self, Display};

/// A segment of a state path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// An object key or module name (e.g., `user`, `todos`)
    Key(String),
    /// An array index (e.g., `[0]`, `[42]`)
    Index(usize),
}

impl PathSegment {
    /// Creates a new key segment.
    pub fn key(name: impl Into<String>) -> Self {
        PathSegment::Key(name.into())
    }

    /// Creates a new index segment.
    pub fn index(idx: usize) -> Self {
        PathSegment::Index(idx)
    }
}

impl From<&str> for PathSegment {
    fn from(name: &str) -> Self {
        PathSegment::Key(name.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(name: String) -> Self {
        PathSegment::Key(name)
    }
}

impl From<usize> for PathSegment {
    fn from(idx: usize) -> Self {
        PathSegment::Index(idx)
    }
}

/// A path to a value in the state tree.
///
/// `StatePath` renders the way the assertion report addresses state: every
/// key is written as `.key` and every index as `[index]`, so the path
/// `todos, 0, title` displays as `.todos[0].title` and the root path as the
/// empty string.
///
/// # Example
///
/// ```rust
/// use state_assert::StatePath;
///
/// let path = StatePath::root()
///     .prepend_key("title")
///     .prepend_index(0)
///     .prepend_key("todos");
///
/// assert_eq!(path.to_string(), ".todos[0].title");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct StatePath {
    segments: Vec<PathSegment>,
}

impl StatePath {
    /// Creates an empty path representing the root value.
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates a path from a sequence of segments, outermost first.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<PathSegment>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns a new path with `segment` placed in front of the existing ones.
    ///
    /// This method does not modify the original path; it returns a new one.
    pub fn prepend(&self, segment: PathSegment) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.push(segment);
        segments.extend(self.segments.iter().cloned());
        Self { segments }
    }

    /// Returns a new path with a key segment placed in front.
    pub fn prepend_key(&self, name: impl Into<String>) -> Self {
        self.prepend(PathSegment::Key(name.into()))
    }

    /// Returns a new path with an index segment placed in front.
    pub fn prepend_index(&self, index: usize) -> Self {
        self.prepend(PathSegment::Index(index))
    }

    /// Returns true if this is the root path (no segments).
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments in this path.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if this path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over the path segments, outermost first.
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }

    /// Returns the first (outermost) segment, or None if this is root.
    pub fn first(&self) -> Option<&PathSegment> {
        self.segments.first()
    }

    /// Returns the last (innermost) segment, or None if this is root.
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }
}

impl Display for StatePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            match segment {
                PathSegment::Key(name) => write!(f, ".{}", name)?,
                PathSegment::Index(idx) => write!(f, "[{}]", idx)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_path_is_empty() {
        let path = StatePath::root();
        assert!(path.is_root());
        assert!(path.is_empty());
        assert_eq!(path.len(), 0);
        assert_eq!(path.to_string(), "");
    }

    #[test]
    fn test_single_key() {
        let path = StatePath::root().prepend_key("user");
        assert_eq!(path.to_string(), ".user");
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn test_single_index() {
        let path = StatePath::root().prepend_index(0);
        assert_eq!(path.to_string(), "[0]");
    }

    #[test]
    fn test_prepend_builds_outward() {
        let path = StatePath::root().prepend_key("bar").prepend_key("foo");
        assert_eq!(path.to_string(), ".foo.bar");
    }

    #[test]
    fn test_index_then_keys() {
        let path = StatePath::from_segments([
            PathSegment::index(10),
            PathSegment::key("a"),
            PathSegment::key("b"),
        ]);
        assert_eq!(path.to_string(), "[10].a.b");
    }

    #[test]
    fn test_path_immutability() {
        let base = StatePath::root().prepend_key("title");
        let path_a = base.prepend_index(0);
        let path_b = base.prepend_index(1);

        assert_eq!(base.to_string(), ".title");
        assert_eq!(path_a.to_string(), "[0].title");
        assert_eq!(path_b.to_string(), "[1].title");
    }

    #[test]
    fn test_first_and_last_segment() {
        let path = StatePath::from_segments(["todos"]).prepend_key("app");
        assert_eq!(path.first(), Some(&PathSegment::key("app")));
        assert_eq!(path.last(), Some(&PathSegment::key("todos")));

        let root = StatePath::root();
        assert_eq!(root.first(), None);
        assert_eq!(root.last(), None);
    }

    #[test]
    fn test_segment_conversions() {
        assert_eq!(PathSegment::from("a"), PathSegment::Key("a".to_string()));
        assert_eq!(
            PathSegment::from("b".to_string()),
            PathSegment::Key("b".to_string())
        );
        assert_eq!(PathSegment::from(3usize), PathSegment::Index(3));
    }

    #[test]
    fn test_equality() {
        let path1 = StatePath::root().prepend_index(0).prepend_key("a");
        let path2 = StatePath::from_segments([PathSegment::key("a"), PathSegment::index(0)]);
        let path3 = StatePath::root().prepend_index(1).prepend_key("a");

        assert_eq!(path1, path2);
        assert_ne!(path1, path3);
    }
}
