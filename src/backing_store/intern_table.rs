//! A unique table based on a monotone arena and robin-hood hashing.
//! This is the primary store for all diagram nodes: the arena index is the
//! node id, so the reverse map comes for free.

use std::hash::Hash;
use std::mem;

use crate::backing_store::{NodeHasher, StoreError};
use crate::repr::node::NodeId;

/// The load factor of the index, i.e. how full the probing table will be
/// when it automatically resizes
const LOAD_FACTOR: f64 = 0.7;
const DEFAULT_SIZE: usize = 16384;

/// data structure stored inside of the probing index
#[derive(Clone, Debug, Copy)]
struct IndexEntry {
    /// id of the interned value, `None` for an empty slot
    id: Option<NodeId>,
    /// precomputed hash of the value
    hash: u64,
    /// the psl is the *probe sequence length*: it is the distance of this
    /// item from the location that it hashes to in the table.
    psl: u8,
}

impl Default for IndexEntry {
    fn default() -> Self {
        IndexEntry {
            id: None,
            hash: 0,
            psl: 0,
        }
    }
}

impl IndexEntry {
    fn new(id: NodeId, hash: u64, psl: u8) -> IndexEntry {
        IndexEntry {
            id: Some(id),
            hash,
            psl,
        }
    }

    #[inline]
    fn is_occupied(&self) -> bool {
        self.id.is_some()
    }
}

/// Insert `itm` into `v` starting from `pos`, stealing slots from entries
/// that probe shorter. Used while growing and after a slot has been robbed
/// during `get_or_insert`.
fn propagate(v: &mut [IndexEntry], cap: usize, itm: IndexEntry, pos: usize) {
    let mut searcher = itm;
    let mut pos = pos;
    loop {
        if v[pos].is_occupied() {
            let cur_itm = v[pos];
            // check if this item's position is closer than ours
            if cur_itm.psl < searcher.psl {
                // swap the searcher and this item
                v[pos] = searcher;
                searcher = cur_itm;
            }
            searcher.psl += 1;
            pos = (pos + 1) % cap; // wrap to the beginning of the array
        } else {
            // place the element in the current spot, we're done
            v[pos] = searcher;
            return;
        }
    }
}

/// A persistent value-to-id interner.
///
/// Values live in a growable arena whose index is the id, so ids are handed
/// out monotonically from 0 and `get` is a plain vector access. A
/// robin-hood linear-probing index over precomputed hashes maps values back
/// to their ids.
pub struct InternTable<T>
where
    T: Hash + PartialEq + Eq + Clone,
{
    /// arena of interned values; `values[id]` is the value of `id`
    values: Vec<T>,
    /// probing index which stores ids keyed by value hash
    tbl: Vec<IndexEntry>,
    /// the length of `tbl`
    cap: usize,
    /// # interner hits
    hits: usize,
}

impl<T> InternTable<T>
where
    T: Hash + PartialEq + Eq + Clone,
{
    pub fn new() -> InternTable<T> {
        InternTable {
            values: Vec::new(),
            tbl: vec![IndexEntry::default(); DEFAULT_SIZE],
            cap: DEFAULT_SIZE,
            hits: 0,
        }
    }

    /// number of distinct values interned since the last `clear`
    pub fn num_interned(&self) -> usize {
        self.values.len()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Drops every interned value and resets the id counter to 0. Ids
    /// issued before the clear are stale afterwards.
    pub fn clear(&mut self) {
        self.values.clear();
        self.tbl = vec![IndexEntry::default(); DEFAULT_SIZE];
        self.cap = DEFAULT_SIZE;
    }

    /// Expands the capacity of the probing index
    fn grow(&mut self) {
        let new_sz = (self.cap + 1).next_power_of_two();
        self.cap = new_sz;
        let old = mem::replace(&mut self.tbl, vec![IndexEntry::default(); new_sz]);
        let c = self.cap;
        for i in old.iter().filter(|e| e.is_occupied()) {
            propagate(&mut self.tbl, c, *i, (i.hash as usize) % c);
        }
    }

    fn push_value(&mut self, elem: T) -> NodeId {
        let id = NodeId::new(self.values.len());
        self.values.push(elem);
        id
    }

    /// Returns the id of `elem`, interning it under `elem_hash` if it has
    /// not been seen since the last `clear`.
    pub fn get_or_insert_by_hash(&mut self, elem: T, elem_hash: u64) -> NodeId {
        if (self.values.len() + 1) as f64 > (self.cap as f64 * LOAD_FACTOR) {
            self.grow();
        }

        // the current index into the array
        let mut pos: usize = (elem_hash as usize) % self.cap;
        // the distance this item is from its desired location
        let mut psl = 0;

        loop {
            if self.tbl[pos].is_occupied() {
                let cur_itm = self.tbl[pos];
                // first check the hashes to see if these elements could
                // possibly be equal; if they are, check the values and
                // return the existing id on a match
                if elem_hash == cur_itm.hash {
                    let id = cur_itm.id.unwrap();
                    if self.values[id.value_usize()] == elem {
                        self.hits += 1;
                        return id;
                    }
                }

                // not equal; begin probing
                if cur_itm.psl < psl {
                    // elem is not in the table; insert it at pos and
                    // reinsert the item that is currently here
                    propagate(&mut self.tbl, self.cap, cur_itm, pos);
                    let id = self.push_value(elem);
                    self.tbl[pos] = IndexEntry::new(id, elem_hash, psl);
                    return id;
                }
                psl += 1;
                pos = (pos + 1) % self.cap; // wrap to the beginning of the array
            } else {
                // this element is unique, so place it in the current spot
                let id = self.push_value(elem);
                self.tbl[pos] = IndexEntry::new(id, elem_hash, psl);
                return id;
            }
        }
    }

    pub fn get_or_insert<H: NodeHasher<T>>(&mut self, item: T, hasher: &H) -> NodeId {
        let hash = hasher.u64hash(&item);
        self.get_or_insert_by_hash(item, hash)
    }

    /// Reverse lookup. Every id issued since the last `clear` resolves.
    pub fn try_get(&self, id: NodeId) -> Result<&T, StoreError> {
        self.values
            .get(id.value_usize())
            .ok_or(StoreError::StaleNodeId(id.value_usize()))
    }

    /// Reverse lookup that treats a stale id as a fatal error.
    pub fn get(&self, id: NodeId) -> &T {
        match self.try_get(id) {
            Ok(v) => v,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> Default for InternTable<T>
where
    T: Hash + PartialEq + Eq + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
