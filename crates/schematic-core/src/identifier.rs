//! Interned identifiers for qualified cluster paths.
//!
//! Cluster labels repeat a lot in architecture diagrams (`Models`, `user`,
//! `index.ts`), so the qualified path of every cluster is stored as an [`Id`]
//! backed by a process-wide string interner.

use std::{
    fmt,
    sync::{Mutex, MutexGuard, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Separator placed between path segments.
pub const PATH_SEPARATOR: &str = "::";

/// Global string interner for identifier storage.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn interner() -> MutexGuard<'static, DefaultStringInterner> {
    INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Interned identifier, cheap to copy and compare.
///
/// # Examples
///
/// ```
/// use schematic_core::identifier::Id;
///
/// let server = Id::new("Server");
/// let models = server.create_nested(Id::new("Models"));
/// assert_eq!(models, "Server::Models");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from a string slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use schematic_core::identifier::Id;
    ///
    /// let client = Id::new("Client");
    /// assert_eq!(client, "Client");
    /// ```
    pub fn new(name: &str) -> Self {
        Self(interner().get_or_intern(name))
    }

    /// Creates a nested ID by joining this ID and `child_id` with [`PATH_SEPARATOR`].
    ///
    /// # Examples
    ///
    /// ```
    /// use schematic_core::identifier::Id;
    ///
    /// let client = Id::new("Client");
    /// let pages = client.create_nested(Id::new("Pages"));
    /// assert_eq!(pages, "Client::Pages");
    /// ```
    pub fn create_nested(&self, child_id: Id) -> Self {
        let mut interner = interner();
        let nested_name = format!(
            "{}{PATH_SEPARATOR}{}",
            interner.resolve(self.0).unwrap_or_default(),
            interner.resolve(child_id.0).unwrap_or_default(),
        );
        Self(interner.get_or_intern(nested_name))
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = interner();
        write!(f, "{}", interner.resolve(self.0).unwrap_or_default())
    }
}

impl From<&str> for Id {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    /// Allows direct comparison with string slices: `id == "string"`
    fn eq(&self, other: &str) -> bool {
        let interner = interner();
        interner.resolve(self.0) == Some(other)
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let id1 = Id::new("Routes");
        let id2 = Id::new("Routes");
        let id3 = Id::new("Services");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
        assert_eq!(id1, "Routes");
    }

    #[test]
    fn test_create_nested() {
        let client = Id::new("Client");
        let server = Id::new("Server");
        let models = Id::new("Models");

        let client_models = client.create_nested(models);
        let server_models = server.create_nested(models);

        assert_ne!(client_models, server_models);
        assert_eq!(client_models, "Client::Models");
        assert_eq!(server_models, "Server::Models");
    }

    #[test]
    fn test_to_string() {
        let id: Id = "Server::Routes".into();
        assert_eq!(id.to_string(), "Server::Routes");
    }
}
