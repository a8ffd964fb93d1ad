//! Property paths recording how a value was reached from the render root.
//!
//! A [`PropertyPath`] is an immutable persistent list: extending it with
//! [`PropertyPath::child`] shares the parent's segments instead of copying
//! them, so every read can carry its own path without touching the data.

use std::fmt;
use std::sync::Arc;

#[cfg(test)]
#[path = "path_tests.rs"]
mod tests;

/// Separator used when a path is rendered for humans.
pub const PATH_SEPARATOR: &str = " > ";

#[derive(Debug)]
struct Segment {
    name: Box<str>,
    parent: Option<Arc<Segment>>,
}

/// Ordered sequence of property names from the render root to a value.
///
/// The root path is empty. Each child path is one segment longer than its
/// parent and shares the parent's segments.
///
/// # Examples
///
/// ```rust
/// use mustache_validator::PropertyPath;
///
/// let root = PropertyPath::root();
/// let path = root.child("tops").child("0").child("tname");
///
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.to_string(), "tops > 0 > tname");
/// assert!(root.is_empty());
/// ```
#[derive(Clone, Default)]
pub struct PropertyPath {
    last: Option<Arc<Segment>>,
    len: usize,
}

impl PropertyPath {
    /// Returns the empty path of the render root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a new path with `name` appended. `self` is left unchanged.
    pub fn child(&self, name: &str) -> Self {
        Self {
            last: Some(Arc::new(Segment {
                name: name.into(),
                parent: self.last.clone(),
            })),
            len: self.len + 1,
        }
    }

    /// Number of segments in the path.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The final segment, if any.
    pub fn last(&self) -> Option<&str> {
        self.last.as_deref().map(|segment| &*segment.name)
    }

    /// Collects the segments in root-to-leaf order.
    pub fn segments(&self) -> Vec<String> {
        let mut segments = Vec::with_capacity(self.len);
        let mut cursor = self.last.as_deref();
        while let Some(segment) = cursor {
            segments.push(segment.name.to_string());
            cursor = segment.parent.as_deref();
        }
        segments.reverse();
        segments
    }

    /// Joins the segments with `separator`.
    pub fn join(&self, separator: &str) -> String {
        self.segments().join(separator)
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join(PATH_SEPARATOR))
    }
}

impl fmt::Debug for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.segments()).finish()
    }
}

impl PartialEq for PropertyPath {
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }
        let mut left = self.last.as_deref();
        let mut right = other.last.as_deref();
        while let (Some(l), Some(r)) = (left, right) {
            if std::ptr::eq(l, r) {
                return true;
            }
            if l.name != r.name {
                return false;
            }
            left = l.parent.as_deref();
            right = r.parent.as_deref();
        }
        true
    }
}

impl Eq for PropertyPath {}

impl<S: AsRef<str>> FromIterator<S> for PropertyPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::root(), |path, segment| path.child(segment.as_ref()))
    }
}
