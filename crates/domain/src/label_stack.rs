use std::sync::Arc;

/// Suffixes of a target name, TLD first, growing toward the leaf.
///
/// `www.example.com.` yields `com.`, `example.com.`, `www.example.com.`.
/// The root is never part of the stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelStack {
    suffixes: Vec<Arc<str>>,
}

impl LabelStack {
    /// Builds the stack from a normalized name.
    pub fn new(name: &str) -> Self {
        let bare = name.strip_suffix('.').unwrap_or(name);
        if bare.is_empty() {
            return Self {
                suffixes: Vec::new(),
            };
        }

        let labels: Vec<&str> = bare.split('.').collect();
        let suffixes = (0..labels.len())
            .rev()
            .map(|start| {
                let mut suffix = labels[start..].join(".");
                suffix.push('.');
                Arc::from(suffix)
            })
            .collect();

        Self { suffixes }
    }

    /// TLD first.
    pub fn suffixes(&self) -> &[Arc<str>] {
        &self.suffixes
    }

    /// Most specific suffix first; this is the order zone cuts are checked in.
    pub fn deepest_first(&self) -> impl Iterator<Item = &Arc<str>> {
        self.suffixes.iter().rev()
    }

    pub fn contains(&self, zone: &str) -> bool {
        self.suffixes.iter().any(|s| s.as_ref() == zone)
    }

    pub fn len(&self) -> usize {
        self.suffixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }
}
