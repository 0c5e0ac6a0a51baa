//! Composable specifications over in-memory records
//!
//! A [`Specification`] answers one question about a record. Specifications
//! compose with AND, OR and NOT, and the [`filter`] function applies one to a
//! sequence lazily. Around this core sit a handful of small collaborators: a
//! product [`Catalog`], a numbered [`Journal`] with its own persistence, and a
//! relationship store browsed through an abstraction.

pub mod domain;
pub use domain::{
    filter, AndSpecification, Catalog, CatalogError, Color, ColorSpecification, Config,
    Everything, Filter, InvalidPersonName, InvalidProductName, Journal, JournalError, NameSpecification, NotSpecification,
    OrSpecification, Person, Product, Relationship, RelationshipBrowser, Relationships,
    Research, Size, SizeSpecification, Specification, SpecificationExt, SpecificationFilter,
};

/// Filesystem persistence for journals.
pub mod storage;
pub use storage::{LoadError, Persistence, SaveError};
