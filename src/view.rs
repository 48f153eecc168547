// SPDX-License-Identifier: GPL-3.0-only

//! The pad's widget tree.
//!
//! A [`KeyPad`] stores its keys in one flat arena and describes their
//! arrangement with a [`ViewNode`] tree of groups. Tree nodes refer into the
//! arena by [`KeyId`], so walking the tree never needs back pointers from a
//! key to its container.
//!
//! [`KeyPad`]: crate::pad::KeyPad

/// Index of a key in its pad's arena.
///
/// Ids are only meaningful within the pad that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyId(pub(crate) usize);

/// One node of a pad's widget tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewNode {
    /// A container holding child nodes in display order.
    Group(Vec<ViewNode>),
    /// A leaf referring to a key in the pad's arena.
    Key(KeyId),
}

impl ViewNode {
    /// Appends every key under this node to `out`, depth-first, visiting
    /// each group's children in display order.
    pub fn collect_keys(&self, out: &mut Vec<KeyId>) {
        match self {
            ViewNode::Group(children) => {
                for child in children {
                    child.collect_keys(out);
                }
            }
            ViewNode::Key(id) => out.push(*id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Collection runs depth-first, so keys inside a nested group come out
    /// before later siblings of that group.
    #[test]
    fn test_collect_keys_depth_first_order() {
        let tree = ViewNode::Group(vec![
            ViewNode::Key(KeyId(0)),
            ViewNode::Group(vec![
                ViewNode::Key(KeyId(1)),
                ViewNode::Group(vec![ViewNode::Key(KeyId(2))]),
                ViewNode::Key(KeyId(3)),
            ]),
            ViewNode::Key(KeyId(4)),
        ]);

        let mut ids = Vec::new();
        tree.collect_keys(&mut ids);
        assert_eq!(ids, vec![KeyId(0), KeyId(1), KeyId(2), KeyId(3), KeyId(4)]);
    }

    #[test]
    fn test_collect_keys_empty_group() {
        let tree = ViewNode::Group(vec![ViewNode::Group(Vec::new())]);
        let mut ids = Vec::new();
        tree.collect_keys(&mut ids);
        assert!(ids.is_empty());
    }
}
