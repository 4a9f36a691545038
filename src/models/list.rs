//! Doubly-linked paragraph node list
//!
//! Nodes live in an arena and are addressed by stable `NodeId`s. Links are
//! stored on each slot, so splicing touches only the two neighbours. A removed
//! node's slot is vacated and never reused, which keeps ids held by a running
//! pass from ever aliasing a different node.

use super::core::ContentNode;
use serde::{Deserialize, Serialize};

/// Stable handle to a node in a `NodeList`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

#[derive(Debug, Clone)]
struct Slot {
    node: Option<ContentNode>,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

/// Ordered, doubly-linked sequence of content nodes
#[derive(Debug, Clone, Default)]
pub struct NodeList {
    slots: Vec<Slot>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl NodeList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list holding `nodes` in order
    pub fn from_nodes<I: IntoIterator<Item = ContentNode>>(nodes: I) -> Self {
        let mut list = Self::new();
        for node in nodes {
            list.push_back(node);
        }
        list
    }

    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    pub fn tail(&self) -> Option<NodeId> {
        self.tail
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn slot(&self, id: NodeId) -> Option<&Slot> {
        self.slots.get(id.0 as usize).filter(|slot| slot.node.is_some())
    }

    fn slot_mut(&mut self, id: NodeId) -> Option<&mut Slot> {
        self.slots.get_mut(id.0 as usize).filter(|slot| slot.node.is_some())
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.slot(id).is_some()
    }

    pub fn get(&self, id: NodeId) -> Option<&ContentNode> {
        self.slot(id).and_then(|slot| slot.node.as_ref())
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut ContentNode> {
        self.slot_mut(id).and_then(|slot| slot.node.as_mut())
    }

    pub fn prev(&self, id: NodeId) -> Option<NodeId> {
        self.slot(id).and_then(|slot| slot.prev)
    }

    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.slot(id).and_then(|slot| slot.next)
    }

    fn allocate(&mut self, node: ContentNode) -> NodeId {
        let id = NodeId(self.slots.len() as u32);
        self.slots.push(Slot { node: Some(node), prev: None, next: None });
        self.len += 1;
        id
    }

    /// Append a node at the end of the list
    pub fn push_back(&mut self, node: ContentNode) -> NodeId {
        let id = self.allocate(node);
        match self.tail {
            Some(tail) => {
                self.slots[tail.0 as usize].next = Some(id);
                self.slots[id.0 as usize].prev = Some(tail);
            }
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        id
    }

    /// Insert `node` immediately before `anchor`
    ///
    /// Returns `None` (and drops the node) if `anchor` is not in the list.
    pub fn insert_before(&mut self, anchor: NodeId, node: ContentNode) -> Option<NodeId> {
        let before = self.slot(anchor)?.prev;
        let id = self.allocate(node);

        // id.prev = anchor.prev, id.next = anchor
        self.slots[id.0 as usize].prev = before;
        self.slots[id.0 as usize].next = Some(anchor);
        self.slots[anchor.0 as usize].prev = Some(id);

        match before {
            Some(before) => self.slots[before.0 as usize].next = Some(id),
            None => self.head = Some(id),
        }
        Some(id)
    }

    /// Insert `node` immediately after `anchor`
    pub fn insert_after(&mut self, anchor: NodeId, node: ContentNode) -> Option<NodeId> {
        let after = self.slot(anchor)?.next;
        let id = self.allocate(node);

        self.slots[id.0 as usize].prev = Some(anchor);
        self.slots[id.0 as usize].next = after;
        self.slots[anchor.0 as usize].next = Some(id);

        match after {
            Some(after) => self.slots[after.0 as usize].prev = Some(id),
            None => self.tail = Some(id),
        }
        Some(id)
    }

    /// Unlink and destroy a node, returning its content
    ///
    /// The head and tail move if the removed node was at either end.
    pub fn remove(&mut self, id: NodeId) -> Option<ContentNode> {
        let slot = self.slot_mut(id)?;
        let prev = slot.prev.take();
        let next = slot.next.take();
        let node = slot.node.take();

        match prev {
            Some(prev) => self.slots[prev.0 as usize].next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.slots[next.0 as usize].prev = prev,
            None => self.tail = prev,
        }
        self.len -= 1;
        node
    }

    /// Ids in list order
    pub fn ids(&self) -> Ids<'_> {
        Ids { list: self, cursor: self.head }
    }

    /// Nodes in list order
    pub fn iter(&self) -> impl Iterator<Item = &ContentNode> + '_ {
        self.ids().filter_map(move |id| self.get(id))
    }

    /// Clone the nodes out in list order
    pub fn to_vec(&self) -> Vec<ContentNode> {
        self.iter().cloned().collect()
    }

    /// Verify forward and backward links agree
    ///
    /// Returns a description of the first inconsistency found.
    pub fn check_links(&self) -> Result<(), String> {
        let mut prev: Option<NodeId> = None;
        let mut cursor = self.head;
        let mut count = 0;

        while let Some(id) = cursor {
            let slot = self.slot(id).ok_or_else(|| format!("{:?} is linked but vacated", id))?;
            if slot.prev != prev {
                return Err(format!("{:?}.prev is {:?}, expected {:?}", id, slot.prev, prev));
            }
            count += 1;
            if count > self.len {
                return Err("cycle in forward links".to_string());
            }
            prev = Some(id);
            cursor = slot.next;
        }

        if prev != self.tail {
            return Err(format!("tail is {:?}, last reachable node is {:?}", self.tail, prev));
        }
        if count != self.len {
            return Err(format!("{} nodes reachable, len is {}", count, self.len));
        }
        Ok(())
    }
}

/// Iterator over node ids in list order
pub struct Ids<'a> {
    list: &'a NodeList,
    cursor: Option<NodeId>,
}

impl Iterator for Ids<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.cursor?;
        self.cursor = self.list.next(id);
        Some(id)
    }
}
