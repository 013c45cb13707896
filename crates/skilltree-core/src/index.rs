//! Derived parent -> children index.
//!
//! Skills only store parent references. The inverse view is computed here on
//! demand instead of being kept on each record, so it can never go stale.

use std::collections::HashMap;

use skilltree_types::skill::Skill;

/// Build a map from each parent id to the ids of the skills that list it.
///
/// Every skill id gets an entry, possibly empty. Parent ids that match no
/// skill in `skills` get entries too. Children appear in input order and at
/// most once per parent.
pub fn children_index<'a, I>(skills: I) -> HashMap<String, Vec<String>>
where
    I: IntoIterator<Item = &'a Skill>,
{
    let mut index: HashMap<String, Vec<String>> = HashMap::new();

    for skill in skills {
        index.entry(skill.id.clone()).or_default();

        for parent in &skill.parents {
            let children = index.entry(parent.clone()).or_default();
            if !children.contains(&skill.id) {
                children.push(skill.id.clone());
            }
        }
    }

    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_gives_empty_index() {
        let skills: Vec<Skill> = Vec::new();
        assert!(children_index(&skills).is_empty());
    }

    #[test]
    fn test_leaf_and_root_entries() {
        let skills = vec![
            Skill::new("a", "A"),
            Skill::new("b", "B").with_parents(["a"]),
            Skill::new("c", "C").with_parents(["a"]),
        ];

        let index = children_index(&skills);
        assert_eq!(index["a"], vec!["b", "c"]);
        assert!(index["b"].is_empty());
        assert!(index["c"].is_empty());
    }

    #[test]
    fn test_multiple_parents() {
        let skills = vec![
            Skill::new("a", "A"),
            Skill::new("b", "B"),
            Skill::new("c", "C").with_parents(["a", "b"]),
        ];

        let index = children_index(&skills);
        assert_eq!(index["a"], vec!["c"]);
        assert_eq!(index["b"], vec!["c"]);
    }

    #[test]
    fn test_dangling_parent_gets_entry() {
        let skills = vec![Skill::new("b", "B").with_parents(["ghost"])];

        let index = children_index(&skills);
        assert_eq!(index["ghost"], vec!["b"]);
        assert!(index["b"].is_empty());
    }

    #[test]
    fn test_repeated_parent_lists_child_once() {
        let skills = vec![
            Skill::new("a", "A"),
            Skill::new("b", "B").with_parents(["a", "a"]),
        ];

        let index = children_index(&skills);
        assert_eq!(index["a"], vec!["b"]);
    }

    #[test]
    fn test_child_declared_before_parent() {
        let skills = vec![
            Skill::new("b", "B").with_parents(["a"]),
            Skill::new("a", "A"),
        ];

        let index = children_index(&skills);
        assert_eq!(index["a"], vec!["b"]);
        assert_eq!(index.len(), 2);
    }
}
