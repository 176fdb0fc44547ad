//! Addresses of the remote catalog API.
//!
//! The app this one replaces carried two diverging base URLs across copies of
//! its screens. Every request now goes through the builders here so there is
//! exactly one host to change.

/// Canonical host of the product catalog service.
pub const BASE_URL: &str = "https://api-produtos-6p7n.onrender.com";

pub fn products_url() -> String {
    format!("{}/products", BASE_URL)
}

pub fn locations_url() -> String {
    format!("{}/locations", BASE_URL)
}

pub fn categories_url() -> String {
    format!("{}/categories", BASE_URL)
}

/// Categories are created through a dedicated `/categories/add` path.
pub fn categories_add_url() -> String {
    format!("{}/categories/add", BASE_URL)
}

/// Resolves the relative `image` field of a product record against the API
/// host. Tolerates a leading slash in the stored path.
pub fn image_url(relative: &str) -> String {
    format!("{}/{}", BASE_URL, relative.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_urls_share_the_canonical_host() {
        assert_eq!(products_url(), format!("{}/products", BASE_URL));
        assert_eq!(locations_url(), format!("{}/locations", BASE_URL));
        assert_eq!(categories_url(), format!("{}/categories", BASE_URL));
        assert_eq!(categories_add_url(), format!("{}/categories/add", BASE_URL));
    }

    #[test]
    fn image_url_joins_relative_paths() {
        assert_eq!(
            image_url("uploads/produto.jpg"),
            format!("{}/uploads/produto.jpg", BASE_URL)
        );
    }

    #[test]
    fn image_url_does_not_double_slashes() {
        assert_eq!(
            image_url("/uploads/produto.jpg"),
            format!("{}/uploads/produto.jpg", BASE_URL)
        );
    }
}
