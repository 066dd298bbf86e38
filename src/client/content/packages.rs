//! Package listing and detail fetching for ContentClient.

use super::ContentClient;
use super::schema::{PackageResponse, PackagesResponse, RawPackage};
use crate::domain::{ContentError, PackageCategory, PackageDetail, PackageSummary};

impl ContentClient {
    /// Fetch the packages listed under a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    pub async fn get_packages(
        &self,
        category: PackageCategory,
    ) -> Result<Vec<PackageSummary>, ContentError> {
        let response: PackagesResponse = self.get_json(&category.endpoint()).await?;
        Ok(response
            .packages
            .into_iter()
            .map(RawPackage::into_summary)
            .collect())
    }

    /// Fetch one package with its itinerary and gallery.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::NotFound` when the API answers 404 or omits the
    /// package, `ContentError::InvalidInput` for ids that cannot form a path
    /// segment, and other variants for transport or parse failures.
    pub async fn get_package(&self, id: &str) -> Result<PackageDetail, ContentError> {
        let id = validate_package_id(id)?;
        let endpoint = format!("/api/packages/{id}");

        let response: PackageResponse = match self.get_json::<PackageResponse>(&endpoint).await {
            Err(ContentError::Status { status: 404, .. }) => {
                return Err(ContentError::not_found("package", id));
            }
            other => other?,
        };

        response
            .package
            .map(RawPackage::into_detail)
            .ok_or_else(|| ContentError::not_found("package", id))
    }
}

/// Package ids become a single path segment; reject anything that would not.
pub(crate) fn validate_package_id(id: &str) -> Result<&str, ContentError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(ContentError::invalid_input("Package id is empty"));
    }
    if id
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '/' | '?' | '#' | '%'))
    {
        return Err(ContentError::invalid_input(format!(
            "Package id '{id}' contains characters that are not allowed"
        )));
    }
    Ok(id)
}
