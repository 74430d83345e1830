use crate::decoder::Record;
use crate::model::TagId;
use crate::registry::TagRegistry;

/// Looks up every registry tag in `record`, in registry order, keeping only
/// the ones that are present with a non-empty value. Duplicate registry
/// entries produce duplicate pairs.
pub fn extract<R: Record>(record: &R, registry: &TagRegistry) -> Vec<(TagId, String)> {
    registry
        .identities()
        .iter()
        .filter_map(|&tag| {
            record
                .value(tag)
                .filter(|value| !value.is_empty())
                .map(|value| (tag, value))
        })
        .collect()
}
