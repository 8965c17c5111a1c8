//! `Lookup`: the result of `to_group_map`, a key -> elements map that keeps
//! keys in first-occurrence order.

use std::collections::HashMap;
use std::hash::Hash;

use seqflow_operators::join::Grouping;

#[derive(Debug, Clone)]
pub struct Lookup<K, E> {
    groups: Vec<Grouping<K, E>>,
    index: HashMap<K, usize>,
}

impl<K, E> Lookup<K, E>
where
    K: Hash + Eq + Clone,
{
    pub(crate) fn from_groups(groups: Vec<(K, Vec<E>)>) -> Self {
        let mut index = HashMap::with_capacity(groups.len());
        let groups: Vec<Grouping<K, E>> = groups
            .into_iter()
            .enumerate()
            .map(|(slot, (key, elements))| {
                index.insert(key.clone(), slot);
                Grouping::new(key, elements)
            })
            .collect();
        Self { groups, index }
    }

    /// Elements sharing `key`; empty when the key never occurred.
    pub fn get(&self, key: &K) -> &[E] {
        match self.index.get(key) {
            Some(&slot) => self.groups[slot].elements(),
            None => &[],
        }
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.groups.iter().map(Grouping::key)
    }
}

impl<K, E> Lookup<K, E> {
    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Grouping<K, E>> {
        self.groups.iter()
    }

    pub fn into_groupings(self) -> Vec<Grouping<K, E>> {
        self.groups
    }
}

impl<'l, K, E> IntoIterator for &'l Lookup<K, E> {
    type Item = &'l Grouping<K, E>;
    type IntoIter = std::slice::Iter<'l, Grouping<K, E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
