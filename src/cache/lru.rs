//! Recency Order Module
//!
//! Implements the most-recently-used ordering used for LRU eviction.

use crate::cache::CacheEntry;

/// Handle to a node inside a [`RecencyList`].
pub type NodeId = usize;

#[derive(Debug)]
struct Node<K, V> {
    entry: CacheEntry<K, V>,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

// == Recency List ==
/// Doubly linked list of cache entries, threaded through a slab.
///
/// Entries are stored in a Vec of slots where:
/// - Head = Most recently used
/// - Tail = Least recently used
///
/// Vacated slots are recycled through a free list, so handles stay stable
/// for as long as their entry is linked.
#[derive(Debug)]
pub struct RecencyList<K, V> {
    slots: Vec<Option<Node<K, V>>>,
    free: Vec<NodeId>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl<K, V> RecencyList<K, V> {
    // == Constructor ==
    /// Creates a new empty list.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    // == Push Front ==
    /// Links a new entry in the most recently used position.
    pub fn push_front(&mut self, entry: CacheEntry<K, V>) -> NodeId {
        let node = Node {
            entry,
            prev: None,
            next: None,
        };

        let id = match self.free.pop() {
            Some(id) => {
                self.slots[id] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        };

        self.link_front(id);
        self.len += 1;
        id
    }

    // == Move To Front ==
    /// Marks an entry as most recently used.
    ///
    /// No-op for a handle that is not linked.
    pub fn move_to_front(&mut self, id: NodeId) {
        if self.head == Some(id) || self.node(id).is_none() {
            return;
        }
        self.unlink(id);
        self.link_front(id);
    }

    // == Remove ==
    /// Unlinks an entry and hands it back to the caller.
    pub fn remove(&mut self, id: NodeId) -> Option<CacheEntry<K, V>> {
        self.node(id)?;
        self.unlink(id);

        let node = self.slots[id].take()?;
        self.free.push(id);
        self.len -= 1;
        Some(node.entry)
    }

    // == Pop Back ==
    /// Removes and returns the least recently used entry.
    ///
    /// Returns None if the list is empty.
    pub fn pop_back(&mut self) -> Option<CacheEntry<K, V>> {
        let id = self.tail?;
        self.remove(id)
    }

    pub fn get(&self, id: NodeId) -> Option<&CacheEntry<K, V>> {
        self.node(id).map(|node| &node.entry)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut CacheEntry<K, V>> {
        self.node_mut(id).map(|node| &mut node.entry)
    }

    // == Clear ==
    /// Drops every entry and releases the slab.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    // == Length ==
    /// Returns the number of linked entries.
    pub fn len(&self) -> usize {
        self.len
    }

    // == Iteration ==
    /// Walks the entries from most to least recently used.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            list: self,
            next: self.head,
        }
    }

    fn node(&self, id: NodeId) -> Option<&Node<K, V>> {
        self.slots.get(id).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<K, V>> {
        self.slots.get_mut(id).and_then(Option::as_mut)
    }

    fn unlink(&mut self, id: NodeId) {
        let (prev, next) = match self.node(id) {
            Some(node) => (node.prev, node.next),
            None => return,
        };

        match prev {
            Some(p) => {
                if let Some(node) = self.node_mut(p) {
                    node.next = next;
                }
            }
            None => self.head = next,
        }

        match next {
            Some(n) => {
                if let Some(node) = self.node_mut(n) {
                    node.prev = prev;
                }
            }
            None => self.tail = prev,
        }

        if let Some(node) = self.node_mut(id) {
            node.prev = None;
            node.next = None;
        }
    }

    fn link_front(&mut self, id: NodeId) {
        let old_head = self.head;

        if let Some(node) = self.node_mut(id) {
            node.prev = None;
            node.next = old_head;
        }

        match old_head {
            Some(h) => {
                if let Some(node) = self.node_mut(h) {
                    node.prev = Some(id);
                }
            }
            None => self.tail = Some(id),
        }

        self.head = Some(id);
    }
}

// == Iterator ==
/// Iterator over `(handle, entry)` pairs, most recently used first.
pub struct Iter<'a, K, V> {
    list: &'a RecencyList<K, V>,
    next: Option<NodeId>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (NodeId, &'a CacheEntry<K, V>);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let node = self.list.node(id)?;
        self.next = node.next;
        Some((id, &node.entry))
    }
}
