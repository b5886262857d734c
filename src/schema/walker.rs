//! Breadth-first traversal of the record types reachable from a root.

use std::collections::{HashSet, VecDeque};
use std::iter::FusedIterator;

use super::RecordSchema;

/// Lazily yields every record type reachable from a root record.
///
/// The root is yielded first, followed by the record types nested in its
/// fields (directly, or as list elements) in breadth-first order. Each
/// record is yielded exactly once, even when the type graph is cyclic.
/// The walker is consumed by iteration and cannot be restarted.
///
/// # Example
///
/// ```
/// use prosper_rs::models::{ACCOUNT, AMOUNTS_BY_RATING};
/// use prosper_rs::schema::ModelTreeWalker;
///
/// let names: Vec<_> = ModelTreeWalker::new(&ACCOUNT).map(|s| s.name).collect();
/// assert_eq!(names, vec![ACCOUNT.name, AMOUNTS_BY_RATING.name]);
/// ```
#[derive(Debug)]
pub struct ModelTreeWalker {
    queue: VecDeque<&'static RecordSchema>,
    seen: HashSet<&'static str>,
}

impl ModelTreeWalker {
    /// Start a walk at `root`.
    pub fn new(root: &'static RecordSchema) -> Self {
        let mut seen = HashSet::new();
        seen.insert(root.name);
        Self {
            queue: VecDeque::from([root]),
            seen,
        }
    }
}

impl Iterator for ModelTreeWalker {
    type Item = &'static RecordSchema;

    fn next(&mut self) -> Option<Self::Item> {
        let schema = self.queue.pop_front()?;

        // Primitive and enum fields have nothing to expand and are never queued.
        for field in schema.fields {
            if let Some(nested) = field.kind.nested_record() {
                if self.seen.insert(nested.name) {
                    self.queue.push_back(nested);
                }
            }
        }

        Some(schema)
    }
}

impl FusedIterator for ModelTreeWalker {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldKind, FieldSchema, ValueKind};

    // Department -> [Team] -> Employee -> Department, plus Employee -> Employee.
    static DEPARTMENT: RecordSchema = RecordSchema {
        name: "Department",
        fields: &[
            FieldSchema { name: "name", kind: FieldKind::Single(ValueKind::Str), optional: false },
            FieldSchema { name: "teams", kind: FieldKind::List(ValueKind::Record(&TEAM)), optional: false },
            FieldSchema { name: "head", kind: FieldKind::Single(ValueKind::Record(&EMPLOYEE)), optional: true },
        ],
    };

    static TEAM: RecordSchema = RecordSchema {
        name: "Team",
        fields: &[
            FieldSchema { name: "lead", kind: FieldKind::Single(ValueKind::Record(&EMPLOYEE)), optional: false },
            FieldSchema { name: "size", kind: FieldKind::Single(ValueKind::Integer), optional: false },
        ],
    };

    static EMPLOYEE: RecordSchema = RecordSchema {
        name: "Employee",
        fields: &[
            FieldSchema { name: "department", kind: FieldKind::Single(ValueKind::Record(&DEPARTMENT)), optional: true },
            FieldSchema { name: "manager", kind: FieldKind::Single(ValueKind::Record(&EMPLOYEE)), optional: true },
            FieldSchema { name: "mentor", kind: FieldKind::Single(ValueKind::Record(&MENTOR)), optional: true },
        ],
    };

    static MENTOR: RecordSchema = RecordSchema {
        name: "Mentor",
        fields: &[FieldSchema { name: "years", kind: FieldKind::Single(ValueKind::Integer), optional: false }],
    };

    static LEAF: RecordSchema = RecordSchema {
        name: "Leaf",
        fields: &[FieldSchema { name: "value", kind: FieldKind::Single(ValueKind::Number), optional: false }],
    };

    fn names(root: &'static RecordSchema) -> Vec<&'static str> {
        ModelTreeWalker::new(root).map(|schema| schema.name).collect()
    }

    #[test]
    fn test_root_is_yielded_first() {
        assert_eq!(ModelTreeWalker::new(&TEAM).next().map(|s| s.name), Some("Team"));
    }

    #[test]
    fn test_leaf_record_yields_only_itself() {
        assert_eq!(names(&LEAF), vec!["Leaf"]);
    }

    #[test]
    fn test_breadth_first_order_and_uniqueness() {
        assert_eq!(names(&DEPARTMENT), vec!["Department", "Team", "Employee", "Mentor"]);
    }

    #[test]
    fn test_cycle_terminates_from_any_entry_point() {
        assert_eq!(names(&EMPLOYEE), vec!["Employee", "Department", "Mentor", "Team"]);
        assert_eq!(names(&TEAM), vec!["Team", "Employee", "Department", "Mentor"]);
    }

    #[test]
    fn test_walker_is_not_restartable() {
        let mut walker = ModelTreeWalker::new(&TEAM);
        assert_eq!(walker.by_ref().count(), 4);
        assert!(walker.next().is_none());
        assert!(walker.next().is_none());
    }
}
