//! Compiled route table and path resolution.
//!
//! # Responsibilities
//! - Flatten the declared route tree into an arena of nodes
//! - Validate names and absolute paths
//! - Resolve a requested path to the stack of matched routes
//! - Build paths for named routes
//!
//! # Design Decisions
//! - Immutable after construction; shared via `Arc`
//! - Depth-first traversal; every full match is a candidate
//! - Most specific candidate wins: compared segment by segment from the left,
//!   a literal beats a parameter; then deeper stack, then declaration order
//! - Explicit `NoMatch` rather than a silent fallback

use std::collections::HashMap;

use crate::routing::component::ComponentRef;
use crate::routing::error::{NavigationError, NavigationResult, RouteTableError};
use crate::routing::matcher::{self, Params, PathPattern, Segment};
use crate::routing::route::Route;

/// Index of a route inside its table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteId(usize);

/// A compiled route.
#[derive(Debug)]
pub struct RouteNode {
    id: RouteId,
    name: String,
    path: String,
    full_path: String,
    pattern: PathPattern,
    full_pattern: PathPattern,
    component: ComponentRef,
    parent: Option<RouteId>,
    children: Vec<RouteId>,
    depth: usize,
}

impl RouteNode {
    pub fn id(&self) -> RouteId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path as declared (relative for children).
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Path joined with every ancestor's path.
    pub fn full_path(&self) -> &str {
        &self.full_path
    }

    pub fn component(&self) -> &ComponentRef {
        &self.component
    }

    pub fn parent(&self) -> Option<RouteId> {
        self.parent
    }

    pub fn children(&self) -> &[RouteId] {
        &self.children
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_index(&self) -> bool {
        self.parent.is_some() && self.pattern.is_empty()
    }
}

/// One entry of a resolved route stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedRoute {
    pub id: RouteId,
    pub name: String,
    pub full_path: String,
}

/// Result of resolving a path: routes from root to leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    /// Normalized requested path.
    pub path: String,
    /// Name of the leaf route.
    pub name: String,
    pub params: Params,
    pub matched: Vec<MatchedRoute>,
}

impl RouteMatch {
    pub fn names(&self) -> Vec<&str> {
        self.matched.iter().map(|m| m.name.as_str()).collect()
    }
}

/// Flat view of one route, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatRoute {
    pub name: String,
    pub full_path: String,
    pub depth: usize,
    pub lazy: bool,
}

struct Candidate {
    stack: Vec<RouteId>,
    params: Params,
    /// Per consumed segment: true if matched by a literal.
    literals: Vec<bool>,
}

/// Immutable route table.
#[derive(Debug)]
pub struct RouteTable {
    nodes: Vec<RouteNode>,
    roots: Vec<RouteId>,
    by_name: HashMap<String, RouteId>,
}

impl RouteTable {
    /// Compile and validate a declared route tree.
    pub fn new(routes: Vec<Route>) -> Result<Self, RouteTableError> {
        let mut table = Self {
            nodes: Vec::new(),
            roots: Vec::new(),
            by_name: HashMap::new(),
        };
        let mut shapes: HashMap<String, Vec<RouteId>> = HashMap::new();

        for route in routes {
            let id = table.insert(route, None, &mut shapes)?;
            table.roots.push(id);
        }

        tracing::debug!(routes = table.nodes.len(), "Route table compiled");
        Ok(table)
    }

    fn insert(
        &mut self,
        route: Route,
        parent: Option<RouteId>,
        shapes: &mut HashMap<String, Vec<RouteId>>,
    ) -> Result<RouteId, RouteTableError> {
        let Route {
            path,
            name,
            component,
            children,
        } = route;

        let invalid = |reason: &str| RouteTableError::InvalidPath {
            name: name.clone(),
            path: path.clone(),
            reason: reason.to_string(),
        };

        let (full_path, depth) = match parent {
            None if !path.starts_with('/') => {
                return Err(invalid("top-level paths must start with '/'"));
            }
            None => (matcher::canonical(&path), 0),
            Some(_) if path.starts_with('/') => {
                return Err(invalid("child paths must be relative"));
            }
            Some(parent_id) => {
                let parent_node = self.node(parent_id);
                (
                    matcher::join_paths(&parent_node.full_path, &path),
                    parent_node.depth + 1,
                )
            }
        };

        let pattern = PathPattern::parse(&path).map_err(|e| invalid(&e.to_string()))?;
        let full_pattern = PathPattern::parse(&full_path).map_err(|e| invalid(&e.to_string()))?;

        if self.by_name.contains_key(&name) {
            return Err(RouteTableError::DuplicateName(name));
        }

        let id = RouteId(self.nodes.len());
        let siblings = shapes.entry(full_pattern.shape()).or_default();
        if let Some(&other) = siblings.iter().find(|&&other| !self.is_ancestor(other, parent)) {
            return Err(RouteTableError::DuplicatePath {
                path: full_path,
                first: self.node(other).name.clone(),
                second: name,
            });
        }
        siblings.push(id);

        self.by_name.insert(name.clone(), id);
        self.nodes.push(RouteNode {
            id,
            name,
            path,
            full_path,
            pattern,
            full_pattern,
            component,
            parent,
            children: Vec::new(),
            depth,
        });

        for child in children {
            let child_id = self.insert(child, Some(id), shapes)?;
            self.nodes[id.0].children.push(child_id);
        }

        Ok(id)
    }

    /// True if `candidate` is `start` or one of its ancestors.
    fn is_ancestor(&self, candidate: RouteId, start: Option<RouteId>) -> bool {
        let mut current = start;
        while let Some(id) = current {
            if id == candidate {
                return true;
            }
            current = self.node(id).parent;
        }
        false
    }

    /// Look up a node by id.
    ///
    /// # Panics
    /// If `id` was issued by a different table.
    pub fn node(&self, id: RouteId) -> &RouteNode {
        &self.nodes[id.0]
    }

    pub fn find_by_name(&self, name: &str) -> Option<&RouteNode> {
        self.by_name.get(name).map(|&id| self.node(id))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Resolve an absolute path to the matched route stack.
    pub fn resolve(&self, path: &str) -> NavigationResult<RouteMatch> {
        let segments = matcher::normalize(path);
        let mut best = None;
        let mut stack = Vec::new();
        let mut literals = Vec::with_capacity(segments.len());
        self.collect(
            &self.roots,
            &segments,
            &Params::new(),
            &mut literals,
            &mut stack,
            &mut best,
        );

        let Some(Candidate { stack, params, .. }) = best else {
            return Err(NavigationError::NoMatch {
                path: matcher::canonical(path),
            });
        };

        let matched: Vec<MatchedRoute> = stack
            .iter()
            .map(|&id| {
                let node = self.node(id);
                MatchedRoute {
                    id,
                    name: node.name.clone(),
                    full_path: node.full_path.clone(),
                }
            })
            .collect();
        let name = matched.last().map(|m| m.name.clone()).unwrap_or_default();

        Ok(RouteMatch {
            path: matcher::canonical(path),
            name,
            params,
            matched,
        })
    }

    fn collect(
        &self,
        ids: &[RouteId],
        input: &[&str],
        params: &Params,
        literals: &mut Vec<bool>,
        stack: &mut Vec<RouteId>,
        best: &mut Option<Candidate>,
    ) {
        for &id in ids {
            let node = self.node(id);
            let mut captured = params.clone();
            let Some(consumed) = node.pattern.match_prefix(input, &mut captured) else {
                continue;
            };
            let rest = &input[consumed..];
            let mark = literals.len();
            literals.extend(
                node.pattern
                    .segments()
                    .iter()
                    .map(|s| matches!(s, Segment::Literal(_))),
            );

            stack.push(id);
            if rest.is_empty() {
                // Full matches consume the same segments, so the masks have equal
                // length; comparing them left to right prefers the longer literal prefix.
                let better = match best {
                    None => true,
                    Some(current) => {
                        (literals.as_slice(), stack.len())
                            > (current.literals.as_slice(), current.stack.len())
                    }
                };
                if better {
                    *best = Some(Candidate {
                        stack: stack.clone(),
                        params: captured.clone(),
                        literals: literals.clone(),
                    });
                }
            }
            self.collect(&node.children, rest, &captured, literals, stack, best);
            stack.pop();
            literals.truncate(mark);
        }
    }

    /// Build the absolute path of a named route.
    pub fn path_for(&self, name: &str, params: &Params) -> NavigationResult<String> {
        let node = self
            .find_by_name(name)
            .ok_or_else(|| NavigationError::UnknownRoute(name.to_string()))?;

        let mut parts = Vec::with_capacity(node.full_pattern.segments().len());
        for segment in node.full_pattern.segments() {
            match segment {
                Segment::Literal(lit) => parts.push(lit.as_str()),
                Segment::Param(param) => match params.get(param) {
                    Some(value) if !value.is_empty() => parts.push(value.as_str()),
                    _ => {
                        return Err(NavigationError::MissingParam {
                            route: name.to_string(),
                            param: param.clone(),
                        })
                    }
                },
            }
        }
        Ok(format!("/{}", parts.join("/")))
    }

    /// Every route with its absolute path, in declaration order.
    pub fn flatten(&self) -> Vec<FlatRoute> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut pending: Vec<RouteId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = pending.pop() {
            let node = self.node(id);
            out.push(FlatRoute {
                name: node.name.clone(),
                full_path: node.full_path.clone(),
                depth: node.depth,
                lazy: node.component.is_lazy(),
            });
            pending.extend(node.children.iter().rev());
        }
        out
    }
}
