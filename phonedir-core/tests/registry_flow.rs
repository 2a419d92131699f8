//! End-to-end registry flows across add, rank, bump, remove, and rebuild.

use phonedir_core::Registry;

#[test]
fn full_lifecycle_of_a_single_entry() {
    let mut registry = Registry::new();

    let added = registry.add("foo", "+359878123456", 20).unwrap();
    assert_eq!(added.number.as_str(), "+359878123456");
    assert_eq!(added.calls, 20);

    let fetched = registry.get("foo").unwrap();
    assert_eq!(fetched.name, "foo");
    assert_eq!(fetched.calls, 20);

    assert!(registry.record_calls("foo", 20));
    let bumped = registry.get("foo").unwrap();
    assert_eq!(bumped.number.as_str(), "+359878123456");
    assert_eq!(bumped.calls, 40);

    assert!(registry.remove("foo"));
    assert!(registry.get("foo").is_none());
}

#[test]
fn ranking_survives_churn() {
    let mut registry = Registry::new();
    let raw = |i: usize| format!("0878{:06}", 200000 + i);

    for i in 0..8 {
        registry
            .add(format!("caller{i}"), &raw(i), (i as u64) * 10)
            .unwrap();
    }

    // Adds only: the five largest counts, descending.
    let counts: Vec<u64> = registry.top_calls().iter().map(|e| e.calls).collect();
    assert_eq!(counts, [70, 60, 50, 40, 30]);

    // Bump a mid-ranked entry to the top.
    assert!(registry.record_calls("caller4", 100));
    let top = registry.top_calls();
    assert_eq!(top[0].name, "caller4");
    assert_eq!(top[0].calls, 140);

    // Removing the leader forces a rebuild that surfaces caller2, which
    // the incremental ranking had evicted long ago.
    assert!(registry.remove("caller4"));
    let counts: Vec<u64> = registry.top_calls().iter().map(|e| e.calls).collect();
    assert_eq!(counts, [70, 60, 50, 30, 20]);

    // A repeat read with no mutation in between is identical.
    let again: Vec<u64> = registry.top_calls().iter().map(|e| e.calls).collect();
    assert_eq!(again, counts);
}

#[test]
fn print_all_is_name_ordered() {
    let mut registry = Registry::new();
    registry.add("bob", "0888234567", 1).unwrap();
    registry.add("alice", "+359878123456", 20).unwrap();
    registry.add("carol", "00359897555555", 7).unwrap();

    let mut sink = Vec::new();
    registry.print_all(&mut sink).unwrap();
    let text = String::from_utf8(sink).unwrap();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("alice "));
    assert!(lines[1].starts_with("bob "));
    assert!(lines[2].starts_with("carol "));
    assert!(lines[0].contains("+359878123456"));
    assert!(lines[0].contains("20"));
}
