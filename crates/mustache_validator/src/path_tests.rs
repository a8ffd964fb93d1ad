use super::*;

#[test]
fn test_root_path_is_empty() {
    let root = PropertyPath::root();
    assert!(root.is_empty());
    assert_eq!(root.len(), 0);
    assert_eq!(root.last(), None);
    assert!(root.segments().is_empty());
    assert_eq!(root.to_string(), "");
}

#[test]
fn test_child_extends_by_one_segment() {
    let parent = PropertyPath::root().child("a").child("b");
    let child = parent.child("c");

    assert_eq!(child.len(), parent.len() + 1);
    assert_eq!(child.last(), Some("c"));
    assert_eq!(child.segments(), vec!["a", "b", "c"]);
}

#[test]
fn test_child_leaves_parent_unchanged() {
    let parent = PropertyPath::root().child("subject");
    let _first = parent.child("name");
    let _second = parent.child("names");

    assert_eq!(parent.segments(), vec!["subject"]);
}

#[test]
fn test_sibling_paths_do_not_collide() {
    let parent = PropertyPath::root().child("items");
    let left = parent.child("0");
    let right = parent.child("1");

    assert_eq!(left.to_string(), "items > 0");
    assert_eq!(right.to_string(), "items > 1");
    assert_ne!(left, right);
}

#[test]
fn test_display_uses_separator() {
    let path: PropertyPath = ["tops", "0", "middles", "0", "tname"].into_iter().collect();
    assert_eq!(path.to_string(), "tops > 0 > middles > 0 > tname");
}

#[test]
fn test_join_with_custom_separator() {
    let path: PropertyPath = ["subject", "name"].into_iter().collect();
    assert_eq!(path.join("."), "subject.name");
}

#[test]
fn test_equality_compares_segments_not_routes() {
    let built_once: PropertyPath = ["a", "b"].into_iter().collect();
    let built_twice = PropertyPath::root().child("a").child("b");
    let different: PropertyPath = ["a", "c"].into_iter().collect();
    let shorter: PropertyPath = ["a"].into_iter().collect();

    assert_eq!(built_once, built_twice);
    assert_ne!(built_once, different);
    assert_ne!(built_once, shorter);
}

#[test]
fn test_debug_lists_segments() {
    let path: PropertyPath = ["a", "b"].into_iter().collect();
    assert_eq!(format!("{path:?}"), r#"["a", "b"]"#);
}
