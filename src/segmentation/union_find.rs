use std::fmt;

/// Disjoint-set forest over provisional component labels
///
/// Label 0 is reserved for background and is never handed out. Unions always
/// attach the larger root beneath the smaller one, so every parent is less
/// than or equal to its child and `flatten` resolves all labels in one
/// ascending sweep.
#[derive(Clone, Debug)]
pub struct UnionFind {
    parent: Vec<u32>,
}

impl Default for UnionFind {
    fn default() -> Self {
        Self::new()
    }
}

impl UnionFind {
    /// Create a forest holding only the background label
    pub fn new() -> Self {
        Self { parent: vec![0] }
    }

    /// Allocate a fresh label that is its own root
    pub fn make_label(&mut self) -> u32 {
        let label = self.parent.len() as u32;
        self.parent.push(label);
        label
    }

    /// Number of labels allocated, excluding background
    pub fn len(&self) -> usize {
        self.parent.len() - 1
    }

    /// Whether no labels have been allocated
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Root of the class containing `label`
    ///
    /// Unknown labels are their own root.
    pub fn find(&self, label: u32) -> u32 {
        let mut current = label;
        while let Some(&parent) = self.parent.get(current as usize) {
            if parent == current {
                break;
            }
            current = parent;
        }
        current
    }

    /// Point every node on the path from `label` at `root`
    fn set_root(&mut self, label: u32, root: u32) {
        let mut current = label;
        while let Some(&parent) = self.parent.get(current as usize) {
            if parent == current {
                break;
            }
            if let Some(slot) = self.parent.get_mut(current as usize) {
                *slot = root;
            }
            current = parent;
        }
        if let Some(slot) = self.parent.get_mut(current as usize) {
            *slot = root;
        }
    }

    /// Merge the classes of `a` and `b`, returning the surviving root
    pub fn union(&mut self, a: u32, b: u32) -> u32 {
        let root = self.find(a).min(self.find(b));
        self.set_root(a, root);
        self.set_root(b, root);
        root
    }

    /// Resolve every label directly to its root
    pub fn flatten(&mut self) {
        for index in 1..self.parent.len() {
            let parent = self.parent.get(index).copied().unwrap_or(0);
            let grandparent = self.parent.get(parent as usize).copied().unwrap_or(parent);
            if let Some(slot) = self.parent.get_mut(index) {
                *slot = grandparent;
            }
        }
    }
}

impl fmt::Display for UnionFind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UnionFind({} labels)", self.len())
    }
}
