//! A node struct used in the ID3 algorithm.
use std::fmt;
use std::mem;
use std::collections::BTreeMap;

use crate::Example;
use super::entropy::value_of;


/// A node of an ID3 decision tree.
///
/// A `Branch` tests one attribute and owns one child
/// per attribute value observed in its training subset.
/// A `Leaf` outputs a fixed label.
///
/// Both variants remember the majority class of the training examples
/// that reached them; pruning turns a `Branch` into a `Leaf`
/// that predicts this label.
#[derive(Clone, PartialEq)]
pub enum Node {
    /// An internal node.
    Branch {
        /// The attribute tested at this node.
        attribute: String,
        /// Observed attribute value to child.
        children:  BTreeMap<String, Box<Node>>,
        /// The label returned for an attribute value
        /// that has no child.
        fallback:  String,
        /// The most frequent class label at this node.
        majority:  String,
    },
    /// A terminal node.
    Leaf {
        /// A display label of this leaf.
        /// This is not an attribute name:
        /// it holds the attribute value of the parent's split
        /// that led here, or the default label at the root.
        tag:      Option<String>,
        /// The label this leaf predicts.
        answer:   Option<String>,
        /// The most frequent class label at this node.
        /// `None` if no training example reached here.
        majority: Option<String>,
    },
}


impl Node {
    /// Construct a branch node.
    /// The fallback label is the majority class.
    #[inline]
    pub(crate) fn branch(
        attribute: &str,
        children:  BTreeMap<String, Box<Node>>,
        majority:  String,
    ) -> Self
    {
        Self::Branch {
            attribute: attribute.to_string(),
            children,
            fallback: majority.clone(),
            majority,
        }
    }


    /// Construct a leaf node.
    #[inline]
    pub(crate) fn leaf(
        tag:      Option<String>,
        answer:   Option<String>,
        majority: Option<String>,
    ) -> Self
    {
        Self::Leaf { tag, answer, majority, }
    }


    /// Returns `true` if this node is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }


    /// Returns the tested attribute of a branch,
    /// or the display tag of a leaf.
    #[inline]
    pub fn split_attribute(&self) -> Option<&str> {
        match self {
            Self::Branch { attribute, .. } => Some(attribute.as_str()),
            Self::Leaf { tag, .. } => tag.as_deref(),
        }
    }


    /// Returns the label used when the traversal stops at this node.
    #[inline]
    pub fn fallback(&self) -> Option<&str> {
        match self {
            Self::Branch { fallback, .. } => Some(fallback.as_str()),
            Self::Leaf { answer, .. } => answer.as_deref(),
        }
    }


    /// Returns the majority class of the training examples
    /// that reached this node.
    #[inline]
    pub fn majority(&self) -> Option<&str> {
        match self {
            Self::Branch { majority, .. } => Some(majority.as_str()),
            Self::Leaf { majority, .. } => majority.as_deref(),
        }
    }


    /// Returns the pairs of attribute value and child.
    /// A leaf has no child.
    pub fn children(&self) -> impl Iterator<Item = (&str, &Node)> {
        let children = match self {
            Self::Branch { children, .. } => Some(children),
            Self::Leaf { .. } => None,
        };
        children.into_iter()
            .flat_map(|map| map.iter())
            .map(|(value, child)| (value.as_str(), child.as_ref()))
    }


    /// Predicts the label of `example`.
    /// An attribute absent from `example` takes `missing_value`.
    /// If the example takes an attribute value unseen in training,
    /// the fallback label of that branch is returned.
    pub fn predict(&self, example: &Example, missing_value: &str)
        -> Option<&str>
    {
        match self {
            Self::Branch { attribute, children, fallback, .. } => {
                let value = value_of(example, attribute, missing_value);
                match children.get(value) {
                    Some(child) => child.predict(example, missing_value),
                    None => Some(fallback.as_str()),
                }
            },
            Self::Leaf { answer, .. } => answer.as_deref(),
        }
    }


    /// Predicts the label of `example`
    /// as if the node at `path` were collapsed to its majority class.
    /// `path` is the sequence of attribute values from this node.
    pub(crate) fn predict_collapsed(
        &self,
        example: &Example,
        missing_value: &str,
        path: &[String],
    ) -> Option<&str>
    {
        let Some((head, rest)) = path.split_first() else {
            return self.majority();
        };
        match self {
            Self::Branch { attribute, children, fallback, .. } => {
                let value = value_of(example, attribute, missing_value);
                match children.get(value) {
                    Some(child) if value == head.as_str() => {
                        child.predict_collapsed(example, missing_value, rest)
                    },
                    Some(child) => child.predict(example, missing_value),
                    None => Some(fallback.as_str()),
                }
            },
            Self::Leaf { .. } => self.predict(example, missing_value),
        }
    }


    /// Returns the descendant at `path`.
    pub(crate) fn find(&self, path: &[String]) -> Option<&Node> {
        let Some((head, rest)) = path.split_first() else {
            return Some(self);
        };
        match self {
            Self::Branch { children, .. } => children.get(head)?.find(rest),
            Self::Leaf { .. } => None,
        }
    }


    /// Returns the mutable descendant at `path`.
    pub(crate) fn find_mut(&mut self, path: &[String]) -> Option<&mut Node> {
        let Some((head, rest)) = path.split_first() else {
            return Some(self);
        };
        match self {
            Self::Branch { children, .. } => {
                children.get_mut(head)?.find_mut(rest)
            },
            Self::Leaf { .. } => None,
        }
    }


    /// Converts this branch into a leaf that predicts its majority class.
    /// The removed sub-tree is dropped.
    /// Returns `false` if this node is already a leaf.
    pub(crate) fn collapse(&mut self) -> bool {
        let Self::Branch { attribute, majority, .. } = self else {
            return false;
        };
        let tag = mem::take(attribute);
        let majority = mem::take(majority);
        *self = Self::leaf(
            Some(tag), Some(majority.clone()), Some(majority)
        );
        true
    }


    /// Returns the depth of this sub-tree.
    /// A leaf has depth `0`.
    pub fn depth(&self) -> usize {
        self.children()
            .map(|(_, child)| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }


    /// Returns the number of leaves of this sub-tree.
    pub fn n_leaves(&self) -> usize {
        match self {
            Self::Branch { children, .. } => {
                children.values().map(|child| child.n_leaves()).sum()
            },
            Self::Leaf { .. } => 1,
        }
    }


    /// Returns the number of nodes of this sub-tree.
    pub fn n_nodes(&self) -> usize {
        1 + self.children()
            .map(|(_, child)| child.n_nodes())
            .sum::<usize>()
    }


    pub(crate) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Self::Branch { attribute, children, .. } => {
                let mut info = vec![
                    format!("\tnode_{id} [ label = \"{attribute} ?\" ];\n")
                ];

                let mut next_id = id + 1;
                for (value, child) in children {
                    let child_id = next_id;
                    let (mut child_info, ret_id) = child.to_dot_info(child_id);
                    info.append(&mut child_info);
                    info.push(format!(
                        "\tnode_{id} -- node_{child_id} [ label = \"{value}\" ];\n"
                    ));
                    next_id = ret_id;
                }

                (info, next_id)
            },
            Self::Leaf { answer, .. } => {
                let answer = answer.as_deref().unwrap_or("-");
                let info = format!(
                    "\tnode_{id} [ label = \"{answer}\", shape = box ];\n",
                );

                (vec![info], id + 1)
            },
        }
    }
}


impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Branch { attribute, children, fallback, majority } => {
                f.debug_struct("Branch")
                    .field("attribute", attribute)
                    .field("fallback", fallback)
                    .field("majority", majority)
                    .field("children", children)
                    .finish()
            },
            Self::Leaf { tag, answer, majority } => {
                f.debug_struct("Leaf")
                    .field("tag", tag)
                    .field("answer", answer)
                    .field("majority", majority)
                    .finish()
            },
        }
    }
}
