use serde::{Deserialize, Serialize};

/// Email of the bootstrap administrator. Never deletable from the panel.
pub const PROTECTED_ACCOUNT_EMAIL: &str = "assistente@painel.com";

/// Account role. `Assistente` is the administrative role.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Role {
    /// Read-only broker account
    #[default]
    Corretor,
    /// Administrative account: edits content and manages brokers
    Assistente,
}

impl Role {
    /// Wire/display name of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Corretor => "Corretor",
            Role::Assistente => "Assistente",
        }
    }

    /// Whether this role may edit content and manage accounts.
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Assistente)
    }

    /// Parse a wire role name. Unknown names fall back to the read-only role.
    pub fn from_wire(value: &str) -> Self {
        match value {
            "Assistente" => Role::Assistente,
            _ => Role::Corretor,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A login-capable panel account as stored in the `users` collection.
///
/// The password is stored and compared in plaintext; the backend's own
/// credential service holds the real secret.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    /// Backend-assigned document id
    pub id: String,
    pub nome: String,
    pub email: String,
    pub senha: String,
    pub role: Role,
}

impl Account {
    /// First word of the account name, used in the greeting.
    pub fn first_name(&self) -> &str {
        self.nome.split_whitespace().next().unwrap_or("")
    }

    /// Whether the account has the administrative role.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// An account document before the backend assigns it an id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewAccount {
    pub nome: String,
    pub email: String,
    pub senha: String,
    pub role: Role,
}

impl NewAccount {
    /// A new read-only broker account.
    pub fn corretor(nome: impl Into<String>, email: impl Into<String>, senha: impl Into<String>) -> Self {
        Self {
            nome: nome.into(),
            email: email.into(),
            senha: senha.into(),
            role: Role::Corretor,
        }
    }

    /// Attach the backend-assigned id.
    pub fn with_id(self, id: impl Into<String>) -> Account {
        Account {
            id: id.into(),
            nome: self.nome,
            email: self.email,
            senha: self.senha,
            role: self.role,
        }
    }
}
