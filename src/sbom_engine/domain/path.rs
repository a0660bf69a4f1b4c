use super::component::Component;
use std::fmt;

const COMPONENTS_SEGMENT: &str = ".components[";

/// Location of a node in the component forest, as child indices from the top.
///
/// `[0, 2, 1]` is "top-level component 0, its child 2, that child's child 1"
/// and renders as `$.components[0].components[2].components[1]`. The rendered
/// form is what UIs parse back to highlight a node, so it must stay stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentPath(Vec<usize>);

impl ComponentPath {
    pub fn new(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    /// Path of a top-level component.
    pub fn top(index: usize) -> Self {
        Self(vec![index])
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    pub fn parent(&self) -> Option<Self> {
        match self.0.split_last() {
            Some((_, rest)) if !rest.is_empty() => Some(Self(rest.to_vec())),
            _ => None,
        }
    }

    /// Finds the addressed component. Stale or out-of-range paths give `None`.
    pub fn resolve<'a>(&self, forest: &'a [Component]) -> Option<&'a Component> {
        let (first, rest) = self.0.split_first()?;
        rest.iter()
            .try_fold(forest.get(*first)?, |node, &i| node.components.get(i))
    }

    pub fn resolve_mut<'a>(&self, forest: &'a mut [Component]) -> Option<&'a mut Component> {
        let (first, rest) = self.0.split_first()?;
        let mut node = forest.get_mut(*first)?;
        for &i in rest {
            node = node.components.get_mut(i)?;
        }
        Some(node)
    }

    /// Parses a rendered path (`$.components[i].components[j]…`).
    ///
    /// Returns `None` for anything that does not address a forest node,
    /// including document-level paths such as `$.bomFormat`.
    pub fn parse(path: &str) -> Option<Self> {
        let mut rest = path.strip_prefix('$')?;
        let mut indices = Vec::new();
        while !rest.is_empty() {
            rest = rest.strip_prefix(COMPONENTS_SEGMENT)?;
            let end = rest.find(']')?;
            let digits = &rest[..end];
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            indices.push(digits.parse().ok()?);
            rest = &rest[end + 1..];
        }
        if indices.is_empty() {
            return None;
        }
        Some(Self(indices))
    }
}

impl fmt::Display for ComponentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for index in &self.0 {
            write!(f, "{}{}]", COMPONENTS_SEGMENT, index)?;
        }
        Ok(())
    }
}

/// Visits every component of the forest in pre-order (document order).
pub fn walk_forest<'a, F>(forest: &'a [Component], mut visit: F)
where
    F: FnMut(&ComponentPath, &'a Component),
{
    fn walk<'a, F>(nodes: &'a [Component], parent: Option<&ComponentPath>, visit: &mut F)
    where
        F: FnMut(&ComponentPath, &'a Component),
    {
        for (i, node) in nodes.iter().enumerate() {
            let path = match parent {
                Some(p) => p.child(i),
                None => ComponentPath::top(i),
            };
            visit(&path, node);
            walk(&node.components, Some(&path), visit);
        }
    }

    walk(forest, None, &mut visit);
}
