// crates/phonebook-core/src/store.rs - Flat-file contact store
//
// The store is the data access layer of the phone book. It knows HOW to read
// and rewrite the backing file but makes no decisions about what a contact
// should look like: lines are stored exactly as given.
//
// ACCESS MODEL:
// - Every operation opens the file, reads or writes it completely, and closes it
// - No locking between operations; concurrent writers race (last writer wins)
// - The whole file is held in memory for the duration of one operation
//
// LINE HANDLING:
// - Reads return lines with surrounding whitespace trimmed
// - Edits preserve untouched lines byte-for-byte, including their line endings

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::contact::SearchCriteria;

/// Errors that can occur while accessing the contact file
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Contact file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store over a single text file, one contact per line
///
/// The path is fixed at construction; nothing about the store is global.
///
/// EXAMPLE USAGE:
/// ```rust,no_run
/// use phonebook_core::{ContactStore, Field, SearchCriteria};
///
/// let store = ContactStore::new("contacts.pb");
/// store.add("Иванов,Иван,Иванович,Orga,111,222")?;
/// let first_page = store.list_page(1, 10)?;
/// let found = store.search(&SearchCriteria::new().with(Field::Surname, "Иванов"))?;
/// # Ok::<(), phonebook_core::StoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ContactStore {
    path: PathBuf,
}

impl ContactStore {
    /// Create a store for the given file
    ///
    /// Construction never touches the file system. A missing file is only
    /// reported when an operation needs to read it.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every line of the file, trimmed, in file order
    pub fn read_all(&self) -> StoreResult<Vec<String>> {
        let content = self.read_raw()?;
        let lines: Vec<String> = content.lines().map(|line| line.trim().to_string()).collect();
        debug!(path = %self.path.display(), lines = lines.len(), "read contact file");
        Ok(lines)
    }

    /// Return one page of contacts
    ///
    /// Pages are 1-based: page `n` covers lines `[(n-1)*size, n*size)`.
    /// Pages past the end of the file, page 0 and a zero page size all
    /// produce an empty result rather than an error.
    pub fn list_page(&self, page: usize, page_size: usize) -> StoreResult<Vec<String>> {
        let lines = self.read_all()?;

        if page == 0 || page_size == 0 {
            return Ok(Vec::new());
        }

        let start = (page - 1).saturating_mul(page_size);
        let result: Vec<String> = lines.into_iter().skip(start).take(page_size).collect();

        debug!(
            path = %self.path.display(),
            page,
            page_size,
            returned = result.len(),
            "listed contact page"
        );
        Ok(result)
    }

    /// Append a contact line
    ///
    /// The line is written as given followed by a newline. The file is
    /// created if it does not exist yet. Field count is not checked.
    pub fn add(&self, contact_line: &str) -> StoreResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;

        file.write_all(format!("{contact_line}\n").as_bytes())
            .map_err(|e| self.io_error(e))?;

        debug!(path = %self.path.display(), "appended contact");
        Ok(())
    }

    /// Replace every line whose trimmed content equals `old_line`
    ///
    /// Matching lines become `new_line` plus a newline; all other lines are
    /// copied unchanged. Returns the number of replaced lines. When nothing
    /// matches the file is left untouched.
    pub fn edit(&self, old_line: &str, new_line: &str) -> StoreResult<usize> {
        let content = self.read_raw()?;

        let mut replaced = 0;
        let mut rewritten = String::with_capacity(content.len());
        for line in content.split_inclusive('\n') {
            if line.trim() == old_line {
                rewritten.push_str(new_line);
                rewritten.push('\n');
                replaced += 1;
            } else {
                rewritten.push_str(line);
            }
        }

        if replaced > 0 {
            fs::write(&self.path, rewritten).map_err(|e| self.io_error(e))?;
        }

        debug!(path = %self.path.display(), replaced, "edited contacts");
        Ok(replaced)
    }

    /// Find all lines satisfying every criterion, in file order
    pub fn search(&self, criteria: &SearchCriteria) -> StoreResult<Vec<String>> {
        let found: Vec<String> = self
            .read_all()?
            .into_iter()
            .filter(|line| criteria.matches(line))
            .collect();

        debug!(
            path = %self.path.display(),
            criteria = criteria.len(),
            matches = found.len(),
            "searched contacts"
        );
        Ok(found)
    }

    fn read_raw(&self) -> StoreResult<String> {
        fs::read_to_string(&self.path).map_err(|e| self.io_error(e))
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        if source.kind() == io::ErrorKind::NotFound {
            StoreError::NotFound(self.path.clone())
        } else {
            StoreError::Io {
                path: self.path.clone(),
                source,
            }
        }
    }
}
