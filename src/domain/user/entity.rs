//! User entity and related types

/// User identifier assigned by storage on creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(i32);

impl UserId {
    /// Wrap a storage-assigned id
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    /// Get the inner integer value
    pub fn as_i32(&self) -> i32 {
        self.0
    }
}

impl From<i32> for UserId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored user record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Unique identifier, immutable once assigned
    id: UserId,
    /// Display name
    name: String,
    /// Contact address; no uniqueness constraint is enforced
    email: String,
    /// Salted one-way digest of the submitted password; never the plaintext
    password_hash: String,
}

impl User {
    /// Reconstruct a user from persisted fields
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }
}

/// The field set written on create and update. Edits overwrite all three
/// fields; there is no partial update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

impl NewUser {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
        }
    }
}
