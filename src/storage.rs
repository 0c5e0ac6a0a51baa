mod persistence;

pub use persistence::{LoadError, Persistence, SaveError};
