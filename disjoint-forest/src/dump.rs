//! Diagnostic views of the forest: grouping by root and a one-line dump.

use std::collections::HashMap;
use std::fmt;

use crate::forest::DisjointSets;

impl<T> DisjointSets<T> {
    /// Registered elements grouped by their current representative.
    ///
    /// Groups appear in the order their first member was registered and
    /// members keep registration order. Nothing is relinked, so this only
    /// needs a shared borrow.
    pub fn groups(&self) -> Vec<Vec<&T>> {
        let mut slot_of_root: HashMap<usize, usize> = HashMap::new();
        let mut groups: Vec<Vec<&T>> = Vec::new();
        for idx in 0..self.len() {
            let root = self.root_of(idx);
            let slot = *slot_of_root.entry(root).or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });
            groups[slot].push(self.element_at(idx));
        }
        groups
    }
}

/// Renders each group as `[a b c]`, groups separated by a space.
impl<T: fmt::Display> fmt::Display for DisjointSets<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, group) in self.groups().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str("[")?;
            for (j, x) in group.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", x)?;
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}
