//! Merge-on-omission updates shared by every record kind.

/// A set of optional field values that can be laid over a stored record.
///
/// Fields that were supplied replace the stored value, fields that were
/// omitted keep it.
pub trait Patch<R> {
    /// Return `existing` with every supplied field replaced.
    fn merge(self, existing: R) -> R;
}

/// Implement [Patch] for a patch type whose fields are `Option`s of the
/// record's fields with the same names.
///
/// Fields of the record that are not listed (e.g., the ID) are never changed.
macro_rules! impl_patch {
    ($patch:ty => $record:ident { $($field:ident),+ $(,)? }) => {
        impl $crate::merge::Patch<$record> for $patch {
            fn merge(self, existing: $record) -> $record {
                $record {
                    $($field: self.$field.unwrap_or(existing.$field),)+
                    ..existing
                }
            }
        }
    };
}

pub(crate) use impl_patch;

#[cfg(test)]
mod tests {
    use super::{Patch, impl_patch};

    #[derive(Debug, PartialEq)]
    struct Record {
        id: i64,
        name: String,
        note: Option<String>,
    }

    #[derive(Default)]
    struct RecordPatch {
        name: Option<String>,
        note: Option<Option<String>>,
    }

    impl_patch!(RecordPatch => Record { name, note });

    fn record() -> Record {
        Record {
            id: 7,
            name: "original".to_owned(),
            note: Some("kept".to_owned()),
        }
    }

    #[test]
    fn empty_patch_keeps_record() {
        assert_eq!(RecordPatch::default().merge(record()), record());
    }

    #[test]
    fn supplied_fields_replace_stored_values() {
        let patch = RecordPatch {
            name: Some("new".to_owned()),
            note: Some(None),
        };

        let merged = patch.merge(record());

        assert_eq!(
            merged,
            Record {
                id: 7,
                name: "new".to_owned(),
                note: None,
            }
        );
    }
}
