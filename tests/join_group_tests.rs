mod common;

use common::{counted, records};
use seqflow::prelude::*;
use serde_json::json;

#[test]
fn test_join_pairs_with_first_match_only() {
    let orders = from(vec![(1, "tea"), (2, "milk"), (3, "jam"), (1, "bun")]);
    let customers = from(vec![(1, "ann"), (3, "cid"), (1, "ann-dup")]);

    let out = orders
        .join(customers, |o| o.0, |c| c.0, |o, c| format!("{}:{}", c.1, o.1))
        .to_vec();
    assert_eq!(out, vec!["ann:tea", "cid:jam", "ann:bun"]);
}

#[test]
fn test_join_drops_unmatched_outer_elements() {
    let out = from(vec![7, 8])
        .join(vec![1, 2], |x| *x, |y| *y, |x, y| x + y)
        .to_vec();
    assert!(out.is_empty());
}

#[test]
fn test_group_join_collects_all_matches() {
    let teams = from(vec!["red", "blue", "green"]);
    let players = from(vec![("red", "ann"), ("blue", "bob"), ("red", "cid")]);

    let out = teams
        .group_join(players, |t| *t, |p| p.0, |team, members| {
            (team, members.map(|p| p.1).to_vec())
        })
        .to_vec();
    assert_eq!(
        out,
        vec![
            ("red", vec!["ann", "cid"]),
            ("blue", vec!["bob"]),
            ("green", vec![]),
        ]
    );
}

#[test]
fn test_join_drains_inner_before_pulling_outer_lazily() {
    let (outer, outer_pulls) = counted(vec![1, 2, 3, 4]);
    let (inner, inner_pulls) = counted(vec![2, 4]);
    let joined = outer.join(inner, |o| *o, |i| *i, |o, i| o * i);
    assert_eq!(inner_pulls.get(), 0);

    assert_eq!(joined.first().expect("first pair"), 4);
    assert_eq!(inner_pulls.get(), 2);
    assert_eq!(outer_pulls.get(), 2);
}

#[test]
fn test_group_by_uses_first_occurrence_order() {
    let groups = from(vec!["pear", "apple", "plum", "avocado", "kiwi", "peach"])
        .group_by(|w| w.chars().next())
        .to_vec();

    let keys: Vec<_> = groups.iter().map(|g| *g.key()).collect();
    assert_eq!(keys, vec![Some('p'), Some('a'), Some('k')]);
    assert_eq!(groups[0].elements(), &["pear", "plum", "peach"]);
    assert_eq!(groups[1].len(), 2);
    assert_eq!(groups[2].to_vec(), vec!["kiwi"]);
}

#[test]
fn test_group_by_with_projects_elements() {
    let rows = records(json!([
        {"dept": "ops", "name": "ann", "pay": 10},
        {"dept": "dev", "name": "bob", "pay": 20},
        {"dept": "ops", "name": "cid", "pay": 30},
    ]));

    let totals = rows
        .group_by_with(|r| r.field("dept"), |r| r.field("pay"))
        .map(|g| {
            let total = g.sum().expect("numeric pay");
            (g.key().to_string(), total)
        })
        .to_vec();
    assert_eq!(
        totals,
        vec![
            ("ops".to_string(), Number::Int(40)),
            ("dev".to_string(), Number::Int(20)),
        ]
    );
}

#[test]
fn test_groupings_are_sequences() {
    let groups = range(0, 10).group_by(|x| x % 3).to_vec();
    assert_eq!(groups.len(), 3);

    let zero = &groups[0];
    assert_eq!(*zero.key(), 0);
    assert_eq!(zero.count(), 4);
    assert_eq!(zero.element_at(1).expect("second"), 3);
    assert_eq!(zero.clone().reverse().to_vec(), vec![9, 6, 3, 0]);

    let (key, items) = groups[2].clone().into_parts();
    assert_eq!((key, items), (2, vec![2, 5, 8]));
}
