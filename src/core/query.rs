use crate::domain::model::{FruitCatalog, FruitRecord, SortKey};

/// Produces the ordered, filtered view the presentation layer renders.
///
/// Keeps every record whose name contains `name_filter` case-insensitively
/// (an empty filter keeps everything), then orders the survivors by the
/// nutrition field selected by `sort_key`, highest value first. Ties keep
/// their relative order from the filter step. The catalog is never mutated;
/// the result is a fresh sequence of borrows into it, recomputed in full on
/// every call.
pub fn view<'a>(
    catalog: &'a FruitCatalog,
    name_filter: &str,
    sort_key: SortKey,
) -> Vec<&'a FruitRecord> {
    let needle = name_filter.to_lowercase();

    let mut matches: Vec<&FruitRecord> = catalog
        .iter()
        .filter(|record| record.name.to_lowercase().contains(&needle))
        .collect();

    // total_cmp keeps the ordering total even for NaN payload values, and
    // sort_by is stable, so equal keys keep filter order.
    matches.sort_by(|a, b| {
        sort_key
            .value(&b.nutritions)
            .total_cmp(&sort_key.value(&a.nutritions))
    });

    matches
}
