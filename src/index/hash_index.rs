//! Fixed-size chained hash index
//!
//! Every secondary index in the store is a `HashIndex`: an array of buckets,
//! each an append-only list of `(key, value)` rows. Many rows may share a key.
//! The bucket count is fixed at construction; there is no resizing and no
//! deletion.

use crate::graph::{AuthorId, PaperId};
use rustc_hash::FxHashSet;
use std::borrow::Borrow;
use std::hash::Hash;

/// Hashing strategy for index keys, resolved at compile time.
///
/// Equal keys must produce equal hashes, including across `Borrow` forms
/// (`String` and `str` hash the same bytes).
pub trait BucketKey: Eq {
    fn bucket_hash(&self) -> u32;
}

/// Integer avalanche mix for 64-bit ids
#[inline]
pub fn mix_u64(id: u64) -> u32 {
    let mut x = (id ^ (id >> 32)) as u32;
    x = ((x >> 16) ^ x).wrapping_mul(0x45d9_f3b);
    x = ((x >> 16) ^ x).wrapping_mul(0x45d9_f3b);
    (x >> 16) ^ x
}

/// djb2 string hash: `hash * 33 + byte`
#[inline]
pub fn djb2(bytes: &[u8]) -> u32 {
    bytes
        .iter()
        .fold(5381u32, |hash, &b| hash.wrapping_mul(33).wrapping_add(b as u32))
}

impl BucketKey for PaperId {
    fn bucket_hash(&self) -> u32 {
        mix_u64(self.0)
    }
}

impl BucketKey for AuthorId {
    fn bucket_hash(&self) -> u32 {
        mix_u64(self.0)
    }
}

impl BucketKey for str {
    fn bucket_hash(&self) -> u32 {
        djb2(self.as_bytes())
    }
}

impl BucketKey for String {
    fn bucket_hash(&self) -> u32 {
        djb2(self.as_bytes())
    }
}

/// Chained hash index with a fixed number of buckets
#[derive(Debug, Clone)]
pub struct HashIndex<K, V> {
    buckets: Vec<Vec<(K, V)>>,
    len: usize,
}

impl<K: BucketKey, V> HashIndex<K, V> {
    /// Create an index with `bucket_count` buckets (at least one)
    pub fn new(bucket_count: usize) -> Self {
        let bucket_count = bucket_count.max(1);
        let mut buckets = Vec::with_capacity(bucket_count);
        buckets.resize_with(bucket_count, Vec::new);
        Self { buckets, len: 0 }
    }

    #[inline]
    fn slot<Q: BucketKey + ?Sized>(&self, key: &Q) -> usize {
        key.bucket_hash() as usize % self.buckets.len()
    }

    /// Append a row to the key's bucket
    pub fn insert(&mut self, key: K, value: V) {
        let slot = self.slot(&key);
        self.buckets[slot].push((key, value));
        self.len += 1;
    }

    /// First value stored under `key`
    pub fn find<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: BucketKey + ?Sized,
    {
        self.buckets[self.slot(key)]
            .iter()
            .find(|(k, _)| <K as Borrow<Q>>::borrow(k) == key)
            .map(|(_, v)| v)
    }

    pub fn find_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: BucketKey + ?Sized,
    {
        let slot = self.slot(key);
        self.buckets[slot]
            .iter_mut()
            .find(|(k, _)| <K as Borrow<Q>>::borrow(k) == key)
            .map(|(_, v)| v)
    }

    /// Every value stored under `key`, in insertion order
    pub fn find_all<'a, Q>(&'a self, key: &'a Q) -> impl Iterator<Item = &'a V> + 'a
    where
        K: Borrow<Q>,
        Q: BucketKey + ?Sized,
    {
        self.buckets[self.slot(key)]
            .iter()
            .filter(move |(k, _)| <K as Borrow<Q>>::borrow(k) == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: BucketKey + ?Sized,
    {
        self.find(key).is_some()
    }

    /// The value under `key`, inserting `default()` first if the key is absent
    pub fn get_or_insert_with(&mut self, key: K, default: impl FnOnce() -> V) -> &mut V {
        let slot = self.slot(&key);
        let bucket = &mut self.buckets[slot];
        match bucket.iter().position(|(k, _)| *k == key) {
            Some(pos) => &mut bucket[pos].1,
            None => {
                let pos = bucket.len();
                bucket.push((key, default()));
                self.len += 1;
                &mut bucket[pos].1
            }
        }
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Length of the longest bucket
    pub fn max_bucket_len(&self) -> usize {
        self.buckets.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Number of distinct keys. Equal keys always share a bucket, so each
    /// bucket is deduplicated on its own.
    pub fn distinct_keys(&self) -> usize
    where
        K: Hash,
    {
        let mut seen: FxHashSet<&K> = FxHashSet::default();
        self.buckets
            .iter()
            .map(|bucket| {
                seen.clear();
                bucket.iter().filter(|&(k, _)| seen.insert(k)).count()
            })
            .sum()
    }

    /// All rows, bucket by bucket
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.iter().map(|(k, v)| (k, v)))
    }

    /// Drop every row, keeping the bucket array
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.len = 0;
    }
}
