use crate::shared::Result;

/// EolRepository port for looking up end-of-life dates
///
/// This port abstracts the external data source (e.g., endoflife.date)
/// used to stamp dependency records with the date their release line stops
/// receiving updates.
pub trait EolRepository {
    /// Fetches the end-of-life date of `version` of `product`
    ///
    /// # Arguments
    /// * `product` - Product identifier as known to the data source (e.g. `java`)
    /// * `version` - Full version of the dependency (e.g. `21.0.1`)
    ///
    /// # Returns
    /// `Some(date)` with an RFC 3339 date, or `None` when the release line is
    /// unknown or has no scheduled end of life
    ///
    /// # Errors
    /// Returns an error if:
    /// - The network request fails
    /// - The API returns an error status code
    /// - The response cannot be parsed
    fn eol_date(&self, product: &str, version: &str) -> Result<Option<String>>;
}
