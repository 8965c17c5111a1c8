//! `group_by`: one full pass into an insertion-ordered key -> elements map,
//! then one [`Grouping`] per distinct key in first-occurrence order.

use std::collections::HashMap;
use std::hash::Hash;

use seqflow_core::metrics;
use seqflow_core::sequence::RandomAccess;
use seqflow_core::source::VecSource;
use seqflow_core::Sequence;

/// A key and the elements that share it, in upstream order.
#[derive(Debug, Clone, PartialEq)]
pub struct Grouping<K, E> {
    key: K,
    elements: VecSource<E>,
}

impl<K, E> Grouping<K, E> {
    pub fn new(key: K, elements: Vec<E>) -> Self {
        Self {
            key,
            elements: VecSource::new(elements),
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn len(&self) -> usize {
        self.elements.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn elements(&self) -> &[E] {
        self.elements.as_slice()
    }

    pub fn into_parts(self) -> (K, Vec<E>) {
        (self.key, self.elements.into_inner())
    }
}

impl<K, E: Clone> Sequence for Grouping<K, E> {
    type Item = E;
    type Cursor<'a>
        = <VecSource<E> as Sequence>::Cursor<'a>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Cursor<'_> {
        self.elements.iterate()
    }

    fn random_access(&self) -> Option<&dyn RandomAccess<Item = E>> {
        self.elements.random_access()
    }
}

#[derive(Clone)]
pub struct GroupBy<S, FK, FE> {
    source: S,
    key: FK,
    element: FE,
}

impl<S, FK, FE> GroupBy<S, FK, FE> {
    pub(crate) fn new(source: S, key: FK, element: FE) -> Self {
        Self {
            source,
            key,
            element,
        }
    }
}

impl<S, FK, FE, K, E> Sequence for GroupBy<S, FK, FE>
where
    S: Sequence,
    FK: Fn(&S::Item) -> K,
    FE: Fn(S::Item) -> E,
    K: Hash + Eq + Clone,
{
    type Item = Grouping<K, E>;
    type Cursor<'a>
        = GroupByCursor<'a, S, FK, FE, K, E>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Cursor<'_> {
        GroupByCursor {
            seq: self,
            groups: None,
        }
    }
}

pub struct GroupByCursor<'a, S, FK, FE, K, E> {
    seq: &'a GroupBy<S, FK, FE>,
    groups: Option<std::vec::IntoIter<(K, Vec<E>)>>,
}

impl<'a, S, FK, FE, K, E> Iterator for GroupByCursor<'a, S, FK, FE, K, E>
where
    S: Sequence,
    FK: Fn(&S::Item) -> K,
    FE: Fn(S::Item) -> E,
    K: Hash + Eq + Clone,
{
    type Item = Grouping<K, E>;

    fn next(&mut self) -> Option<Grouping<K, E>> {
        let seq = self.seq;
        let groups = self
            .groups
            .get_or_insert_with(|| group_ordered(&seq.source, &seq.key, &seq.element).into_iter());
        let (key, elements) = groups.next()?;
        Some(Grouping::new(key, elements))
    }
}

/// Group `source` by `key`, keeping keys in first-occurrence order.
pub fn group_ordered<S, FK, FE, K, E>(source: &S, key: &FK, element: &FE) -> Vec<(K, Vec<E>)>
where
    S: Sequence,
    FK: Fn(&S::Item) -> K,
    FE: Fn(S::Item) -> E,
    K: Hash + Eq + Clone,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<E>)> = Vec::new();
    for item in source.iterate() {
        let k = key(&item);
        let slot = match index.get(&k) {
            Some(&slot) => slot,
            None => {
                index.insert(k.clone(), groups.len());
                groups.push((k, Vec::new()));
                groups.len() - 1
            }
        };
        groups[slot].1.push(element(item));
    }
    metrics::emit("group_by_materialized", &[("groups", groups.len())]);
    groups
}

#[cfg(test)]
mod tests {
    use seqflow_core::source::from;
    use seqflow_core::value::Value;
    use serde_json::json;

    use super::*;

    fn rows() -> Vec<Value> {
        match Value::from(json!([
            {"team": "red", "score": 3},
            {"team": "blue", "score": 5},
            {"team": "red", "score": 1},
            {"score": 9},
            {"team": "blue", "score": 2},
        ])) {
            Value::List(items) => items,
            other => vec![other],
        }
    }

    #[test]
    fn groups_keep_first_occurrence_order() {
        let source = from(rows());
        let groups = group_ordered(&source, &|r: &Value| r.field("team"), &|r: Value| {
            r.field("score").as_i64()
        });
        assert_eq!(
            groups,
            vec![
                (Value::from("red"), vec![Some(3), Some(1)]),
                (Value::from("blue"), vec![Some(5), Some(2)]),
                (Value::Null, vec![Some(9)]),
            ]
        );
    }

    #[test]
    fn group_by_is_reiterable_and_indexable_per_group() {
        let grouped = GroupBy::new(from(rows()), |r: &Value| r.field("team"), |r: Value| r);
        let first_pass: Vec<usize> = grouped.iterate().map(|g| g.len()).collect();
        let second_pass: Vec<usize> = grouped.iterate().map(|g| g.len()).collect();
        assert_eq!(first_pass, vec![2, 2, 1]);
        assert_eq!(first_pass, second_pass);

        let red = grouped.iterate().next().expect("red group");
        assert_eq!(red.key(), &Value::from("red"));
        let view = red.random_access().expect("groups are indexable");
        assert_eq!(view.get(1).map(|r| r.field("score")), Some(Value::Int(1)));
    }
}
