use catalog_framework::{catalog_id, Criterion, FieldValue, Filter, Operation, Record};
use serde::{Deserialize, Serialize};

catalog_id!(Account, "account");

/// A registered catalogue user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Account {
    pub id: AccountId,
    pub username: String,
    pub email: String,
}

/// Payload for creating or replacing an account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountChange {
    pub username: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AccountFilter {
    pub username: Option<String>,
    pub email: Option<String>,
    pub operation: Option<Operation>,
}

impl Account {
    /// Builds the account from an already validated change.
    pub fn new(id: AccountId, change: AccountChange) -> Self {
        Self {
            id,
            username: change.username.unwrap_or_default(),
            email: change.email.unwrap_or_default(),
        }
    }
}

impl Record for Account {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "username" => Some(self.username.as_str().into()),
            "email" => Some(self.email.as_str().into()),
            _ => None,
        }
    }
}

impl Filter<Account> for AccountFilter {
    fn criteria(&self) -> Vec<Criterion> {
        vec![
            Criterion::matching("username", self.username.as_deref(), self.operation),
            Criterion::matching("email", self.email.as_deref(), self.operation),
        ]
    }
}
