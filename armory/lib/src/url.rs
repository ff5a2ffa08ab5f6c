//! Request URL composition.
//!
//! Paths are spliced in as-is. Realm slugs and character names are
//! expected to already be URL-safe; nothing is percent-encoded here.

use crate::region::Region;

/// Host suffix shared by every regional API endpoint.
const API_HOST: &str = "api.blizzard.com";

/// Builds the fully-qualified URL for a request.
///
/// ## Examples
///
/// ```
/// use armory_lib::{Region, build_api_url};
///
/// let url = build_api_url(Region::Eu, "/data/wow/pvp-season/index", "dynamic-eu", "en_GB");
/// assert_eq!(
///     url,
///     "https://eu.api.blizzard.com/data/wow/pvp-season/index?namespace=dynamic-eu&locale=en_GB"
/// );
/// ```
pub fn build_api_url(region: Region, path: &str, namespace: &str, locale: &str) -> String {
    let region = region.code();
    format!("https://{region}.{API_HOST}{path}?namespace={namespace}&locale={locale}")
}
