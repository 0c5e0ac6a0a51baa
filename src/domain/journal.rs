use std::fmt;

/// An ordered list of numbered text entries.
///
/// Entries are stored as `"{number}: {text}"`. Numbers come from a counter
/// owned by the journal; removing an entry never rewinds it, so a number is
/// never handed out twice by the same journal.
///
/// Saving and loading are handled separately, by
/// [`Persistence`](crate::storage::Persistence).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Journal {
    entries: Vec<String>,
    count: usize,
}

/// Errors that can occur when editing a journal.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// The index does not refer to an entry.
    #[error("no entry at index {index} (journal has {len} entries)")]
    IndexOutOfRange {
        /// The index that was requested.
        index: usize,
        /// The number of entries in the journal.
        len: usize,
    },
    /// The entry text spans more than one line.
    #[error("journal entries must fit on one line: {0:?}")]
    MultilineEntry(String),
}

impl Journal {
    /// Creates an empty journal.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            count: 0,
        }
    }

    /// Rebuilds a journal from previously stored entries.
    ///
    /// The counter resumes from the highest entry number found, so entries
    /// added afterwards continue the sequence. Entries without a leading
    /// number are kept but do not affect the counter.
    #[must_use]
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let entries: Vec<String> = entries.into_iter().map(Into::into).collect();
        let count = entries
            .iter()
            .filter_map(|entry| entry_number(entry))
            .max()
            .unwrap_or(0);
        Self { entries, count }
    }

    /// Appends an entry and returns the number it was given.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MultilineEntry`] if `text` contains a line break. The
    /// journal is left unchanged and the counter is not advanced.
    pub fn add_entry(&mut self, text: impl AsRef<str>) -> Result<usize, Error> {
        let text = text.as_ref();
        if text.contains(['\n', '\r']) {
            return Err(Error::MultilineEntry(text.to_string()));
        }
        self.count += 1;
        self.entries.push(format!("{}: {text}", self.count));
        Ok(self.count)
    }

    /// Removes the entry at `index` (zero-based position) and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if there is no entry at `index`.
    pub fn remove_entry(&mut self, index: usize) -> Result<String, Error> {
        if index >= self.entries.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(index))
    }

    /// The entries, in the order they were added.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// The number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the journal has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Journal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.entries.join("\n"))
    }
}

/// Parses the number from an entry of the form `"{number}: {text}"`.
///
/// Returns `None` if the entry does not start with a number followed by `": "`.
#[must_use]
pub fn entry_number(entry: &str) -> Option<usize> {
    let (number, _) = entry.split_once(": ")?;
    number.parse().ok()
}
