//! Path pattern matching.
//!
//! # Responsibilities
//! - Normalize requested paths into segments
//! - Parse declared route paths into literal and dynamic segments
//! - Match a pattern against the front of a segment list
//!
//! # Design Decisions
//! - Matching is case-sensitive
//! - Query string and fragment are ignored
//! - Empty segments are dropped, so `/a//b/` equals `/a/b`
//! - `:name` matches exactly one non-empty segment
//! - No regex in the matching path

use std::collections::BTreeMap;

use thiserror::Error;

/// Parameters captured from dynamic segments.
pub type Params = BTreeMap<String, String>;

/// One segment of a declared path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Param(String),
}

/// Reasons a declared path is rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("dynamic segment without a name")]
    EmptyParamName,

    #[error("parameter '{0}' declared twice")]
    DuplicateParam(String),
}

/// A parsed route path, relative or absolute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathPattern {
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parse a declared path. Leading and trailing slashes are not significant.
    pub fn parse(path: &str) -> Result<Self, PatternError> {
        let mut segments = Vec::new();
        for raw in split_segments(path) {
            match raw.strip_prefix(':') {
                Some("") => return Err(PatternError::EmptyParamName),
                Some(name) => {
                    let duplicate = segments
                        .iter()
                        .any(|s| matches!(s, Segment::Param(p) if p == name));
                    if duplicate {
                        return Err(PatternError::DuplicateParam(name.to_string()));
                    }
                    segments.push(Segment::Param(name.to_string()));
                }
                None => segments.push(Segment::Literal(raw.to_string())),
            }
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Index pattern (declared with an empty path).
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn literal_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::Literal(_)))
            .count()
    }

    /// Names of the dynamic segments, in order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Match this pattern against the front of `input`.
    ///
    /// Returns the number of consumed segments, pushing captures into `params`.
    /// On failure `params` is left untouched.
    pub fn match_prefix(&self, input: &[&str], params: &mut Params) -> Option<usize> {
        if input.len() < self.segments.len() {
            return None;
        }

        let mut captured = Vec::new();
        for (segment, actual) in self.segments.iter().zip(input) {
            match segment {
                Segment::Literal(expected) if expected == actual => {}
                Segment::Literal(_) => return None,
                Segment::Param(name) => captured.push((name.clone(), (*actual).to_string())),
            }
        }

        params.extend(captured);
        Some(self.segments.len())
    }

    /// Shape used to detect conflicting declarations: parameter names erased.
    pub fn shape(&self) -> String {
        self.segments
            .iter()
            .map(|s| match s {
                Segment::Literal(lit) => lit.as_str(),
                Segment::Param(_) => ":",
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// Split a requested path into segments, dropping query, fragment and empty parts.
pub fn normalize(path: &str) -> Vec<&str> {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    split_segments(&path[..end]).collect()
}

/// Canonical string form of a requested path, e.g. `/big-data/collection`.
pub fn canonical(path: &str) -> String {
    format!("/{}", normalize(path).join("/"))
}

/// Join a parent's absolute path with a child's relative path.
pub fn join_paths(parent: &str, child: &str) -> String {
    let child = child.trim_matches('/');
    if child.is_empty() {
        return parent.to_string();
    }
    let parent = parent.trim_end_matches('/');
    format!("{}/{}", parent, child)
}

fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}
