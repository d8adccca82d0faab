use metcat_model::DetailRecord;

/// Keep only records that can be shown as cards.
///
/// Failed fetches (`None`) and records without a primary image are
/// dropped; survivors keep their input order.
pub fn filter_displayable<I>(batch: I) -> Vec<DetailRecord>
where
    I: IntoIterator<Item = Option<DetailRecord>>,
{
    batch
        .into_iter()
        .flatten()
        .filter(DetailRecord::has_primary_image)
        .collect()
}
