//! Typed form payloads
//!
//! Form fields are deserialized into a struct at the boundary instead of
//! being read out of a dynamic map inside the handlers. Field names are the
//! wire names of the HTML forms.

use serde::Deserialize;

/// Payload of the create and edit forms. Missing fields deserialize as
/// empty strings so an incomplete submission reaches the completeness
/// check instead of failing extraction.
#[derive(Debug, Clone, Deserialize)]
pub struct UserForm {
    #[serde(default)]
    pub nome: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub senha: String,
}

impl UserForm {
    /// Presence check applied on the create path: all three fields must be
    /// non-empty. The edit path does not consult this.
    pub fn is_complete(&self) -> bool {
        !self.nome.is_empty() && !self.email.is_empty() && !self.senha.is_empty()
    }
}
