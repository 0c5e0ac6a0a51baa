//! Relationships between people.
//!
//! [`Relationships`] is the low-level store. It knows how the links are kept
//! (a directed graph keyed by person UUID) and nothing about what anyone wants
//! to learn from them. [`Research`] is the high-level consumer. It only sees
//! the [`RelationshipBrowser`] trait, so the store can change its
//! representation without touching the research code.

use std::collections::HashMap;

use non_empty_string::NonEmptyString;
use petgraph::graphmap::DiGraphMap;
use uuid::Uuid;

/// A person, identified by a stable UUID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    uuid: Uuid,
    name: NonEmptyString,
}

/// Error returned when a person is given an empty name.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("person name must not be empty")]
pub struct InvalidPersonName;

impl Person {
    /// Creates a person with a freshly generated UUID.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPersonName`] if `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, InvalidPersonName> {
        let name = NonEmptyString::new(name.into()).map_err(|_| InvalidPersonName)?;
        Ok(Self {
            uuid: Uuid::new_v4(),
            name,
        })
    }

    /// The person's unique identifier.
    #[must_use]
    pub const fn uuid(&self) -> Uuid {
        self.uuid
    }

    /// The person's name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

/// How one person relates to another.
///
/// An edge `a -> b` labelled `Parent` reads "a is the parent of b".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relationship {
    /// The source is the parent of the target.
    Parent,
    /// The source is the child of the target.
    Child,
    /// The source and target are siblings.
    Sibling,
}

/// Read access to a set of relationships.
pub trait RelationshipBrowser {
    /// Find every child of every person called `name`.
    fn find_all_children_of(&self, name: &str) -> Vec<&Person>;
}

/// An in-memory store of people and the relationships between them.
#[derive(Debug, Default)]
pub struct Relationships {
    /// People, keyed by UUID.
    people: HashMap<Uuid, Person>,

    /// Relationship graph. Nodes are UUIDs, each edge is labelled with how the
    /// source relates to the target. Nodes and edges iterate in insertion
    /// order.
    graph: DiGraphMap<Uuid, Relationship>,
}

impl Relationships {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `parent` is the parent of `child`.
    ///
    /// Both directions are stored: `parent -> child` as
    /// [`Relationship::Parent`] and `child -> parent` as
    /// [`Relationship::Child`].
    pub fn add_parent_and_child(&mut self, parent: &Person, child: &Person) {
        let parent = self.insert_person(parent);
        let child = self.insert_person(child);
        self.graph.add_edge(parent, child, Relationship::Parent);
        self.graph.add_edge(child, parent, Relationship::Child);
    }

    /// Record that `a` and `b` are siblings.
    pub fn add_siblings(&mut self, a: &Person, b: &Person) {
        let a = self.insert_person(a);
        let b = self.insert_person(b);
        self.graph.add_edge(a, b, Relationship::Sibling);
        self.graph.add_edge(b, a, Relationship::Sibling);
    }

    /// Look up a person by UUID.
    #[must_use]
    pub fn person(&self, uuid: Uuid) -> Option<&Person> {
        self.people.get(&uuid)
    }

    /// Iterate over every stored relationship as `(from, relationship, to)`,
    /// in the order the links were added.
    pub fn relations(&self) -> impl Iterator<Item = (&Person, Relationship, &Person)> + '_ {
        self.graph.all_edges().filter_map(|(from, to, relationship)| {
            Some((self.person(from)?, *relationship, self.person(to)?))
        })
    }

    fn insert_person(&mut self, person: &Person) -> Uuid {
        let uuid = person.uuid();
        self.people.entry(uuid).or_insert_with(|| person.clone());
        self.graph.add_node(uuid);
        uuid
    }
}

impl RelationshipBrowser for Relationships {
    fn find_all_children_of(&self, name: &str) -> Vec<&Person> {
        self.relations()
            .filter(|(parent, relationship, _)| {
                *relationship == Relationship::Parent && parent.name() == name
            })
            .map(|(_, _, child)| child)
            .collect()
    }
}

/// Research over a set of relationships.
///
/// This depends only on [`RelationshipBrowser`], not on any particular store.
pub struct Research<'b> {
    browser: &'b dyn RelationshipBrowser,
}

impl<'b> Research<'b> {
    /// Creates a research session over `browser`.
    #[must_use]
    pub fn new(browser: &'b dyn RelationshipBrowser) -> Self {
        Self { browser }
    }

    /// Describe each child of every person called `name`, one line per child.
    #[must_use]
    pub fn children_of(&self, name: &str) -> Vec<String> {
        self.browser
            .find_all_children_of(name)
            .into_iter()
            .map(|child| format!("{name} has a child called {}", child.name()))
            .collect()
    }
}
