use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::{
    filter, product::InvalidProductName, Color, Product, Size, Specification,
};

/// An ordered collection of products.
///
/// Insertion order is preserved, and is the order in which filtered results
/// are produced.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Versions")]
pub struct Catalog {
    products: Vec<Product>,
}

/// Errors that can occur when loading a catalog file.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog {}: {source}", path.display())]
    Read {
        /// Path of the catalog file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The catalog file is not a valid catalog.
    #[error("failed to parse catalog {}: {source}", path.display())]
    Parse {
        /// Path of the catalog file.
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },
}

impl Catalog {
    /// Creates a catalog from a list of products.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The built-in catalog: a green apple, a green tree, and a blue house.
    #[must_use]
    pub fn default_products() -> Self {
        let products = [
            ("Apple", Color::Green, Size::Small),
            ("Tree", Color::Green, Size::Large),
            ("House", Color::Blue, Size::Large),
        ]
        .into_iter()
        .filter_map(|(name, color, size)| {
            Product::new(name, color, size)
                .inspect_err(|e| tracing::warn!("Skipping built-in product '{name}': {e}"))
                .ok()
        })
        .collect();

        Self { products }
    }

    /// Loads a catalog from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, or if it is not a valid
    /// catalog (unknown colour or size, empty product name, wrong shape).
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog: Self = toml::from_str(&content).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::trace!(
            "Loaded {} products from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// The products, in insertion order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Iterate over the products in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    /// The number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Lazily select the products satisfying `spec`.
    pub fn filter<'a, S>(&'a self, spec: &'a S) -> impl Iterator<Item = &'a Product>
    where
        S: Specification<Product> + ?Sized,
    {
        filter(&self.products, spec)
    }
}

impl FromIterator<Product> for Catalog {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The serialized versions of the catalog.
#[derive(Debug, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default)]
        products: Vec<ProductRecord>,
    },
}

#[derive(Debug, Deserialize)]
struct ProductRecord {
    name: String,
    color: Color,
    size: Size,
}

impl TryFrom<Versions> for Catalog {
    type Error = InvalidProductName;

    fn try_from(versions: Versions) -> Result<Self, Self::Error> {
        match versions {
            Versions::V1 { products } => products
                .into_iter()
                .map(|record| Product::new(record.name, record.color, record.size))
                .collect::<Result<Vec<_>, _>>()
                .map(Self::new),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::domain::{ColorSpecification, SizeSpecification, SpecificationExt};

    fn write_catalog(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn default_catalog_has_three_products_in_order() {
        let catalog = Catalog::default_products();
        let names: Vec<_> = catalog.iter().map(Product::name).collect();
        assert_eq!(names, ["Apple", "Tree", "House"]);
    }

    #[test]
    fn filter_delegates_to_specification() {
        let catalog = Catalog::default_products();
        let spec = ColorSpecification::new(Color::Blue).and(SizeSpecification::new(Size::Large));
        let names: Vec<_> = catalog.filter(&spec).map(Product::name).collect();
        assert_eq!(names, ["House"]);
    }

    #[test]
    fn load_reads_valid_file() {
        let file = write_catalog(
            "_version = \"1\"\n\n[[products]]\nname = \"Kettle\"\ncolor = \"red\"\nsize = \"small\"\n\n[[products]]\nname = \"Barn\"\ncolor = \"red\"\nsize = \"huge\"\n",
        );

        let catalog = Catalog::load(file.path()).unwrap();

        assert_eq!(
            catalog,
            Catalog::new(vec![
                Product::new("Kettle", Color::Red, Size::Small).unwrap(),
                Product::new("Barn", Color::Red, Size::Huge).unwrap(),
            ])
        );
    }

    #[test]
    fn load_without_products_is_empty() {
        let file = write_catalog("_version = \"1\"\n");
        assert!(Catalog::load(file.path()).unwrap().is_empty());
    }

    #[test]
    fn unknown_color_is_a_parse_error() {
        let file = write_catalog(
            "_version = \"1\"\n[[products]]\nname = \"Plum\"\ncolor = \"purple\"\nsize = \"small\"\n",
        );
        let error = Catalog::load(file.path()).unwrap_err();
        assert!(matches!(error, CatalogError::Parse { .. }));
    }

    #[test]
    fn empty_name_is_a_parse_error() {
        let file = write_catalog(
            "_version = \"1\"\n[[products]]\nname = \"\"\ncolor = \"red\"\nsize = \"small\"\n",
        );
        let error = Catalog::load(file.path()).unwrap_err();
        assert!(error.to_string().contains("product name must not be empty"));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let tmp = tempfile::tempdir().unwrap();
        let error = Catalog::load(&tmp.path().join("missing.toml")).unwrap_err();
        assert!(matches!(error, CatalogError::Read { .. }));
    }
}
