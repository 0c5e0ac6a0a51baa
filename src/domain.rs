//! Domain models.
//!
//! This module contains the specification combinators and the filter, the
//! product records they are usually applied to, and the journal and
//! relationship types used by the other demos.

/// Generic specification trait and its combinators.
pub mod specification;
pub use specification::{
    AndSpecification, Everything, NotSpecification, OrSpecification, Specification,
    SpecificationExt,
};

/// Lazy filtering of sequences by specification.
pub mod filter;
pub use filter::{filter, Filter, SpecificationFilter};

/// Products and the leaf specifications that test their attributes.
pub mod product;
pub use product::{
    Color, ColorSpecification, InvalidProductName, NameSpecification, ParseAttributeError,
    Product, Size, SizeSpecification,
};

mod catalog;
pub use catalog::{Catalog, CatalogError};

mod config;
pub use config::Config;

/// Numbered journal entries.
pub mod journal;
pub use journal::{Error as JournalError, Journal};

/// People, the relationships between them, and research over those
/// relationships.
pub mod relationship;
pub use relationship::{
    InvalidPersonName, Person, Relationship, RelationshipBrowser, Relationships, Research,
};
