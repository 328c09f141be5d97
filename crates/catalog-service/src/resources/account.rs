use super::Resource;
use crate::model::{Account, AccountChange, AccountFilter, AccountId};
use async_trait::async_trait;
use catalog_framework::{CatalogEntity, Checks, InputError, Outcome, Validator};

#[derive(Debug, Default, Clone, Copy)]
pub struct AccountValidator;

/// Shape check only: `local@host.tld`, no whitespace.
fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

impl Validator<AccountChange> for AccountValidator {
    fn check(&self, request: &AccountChange) -> Outcome {
        let mut checks = Checks::new(Account::KIND);

        checks.text("USERNAME", "username", request.username.as_deref());

        match request.email.as_deref() {
            Some(email) if !email.trim().is_empty() => {
                checks.rule(is_email(email), "EMAIL", "email", "must be a valid address");
            }
            email => {
                checks.text("EMAIL", "email", email);
            }
        }

        checks.finish()
    }
}

#[async_trait]
impl CatalogEntity for Account {
    const KIND: &'static str = "ACCOUNT";
    type Id = AccountId;
    type Create = AccountChange;
    type Update = AccountChange;
    type Context = ();

    fn id(&self) -> &AccountId {
        &self.id
    }

    fn from_create_params(id: AccountId, params: AccountChange) -> Result<Self, InputError> {
        AccountValidator.validate(&params)?;
        Ok(Account::new(id, params))
    }

    fn duplicate(&self, id: AccountId) -> Self {
        Self { id, ..self.clone() }
    }

    async fn on_update(&mut self, update: AccountChange, _ctx: &()) -> Result<(), InputError> {
        AccountValidator.validate(&update)?;
        *self = Account::new(self.id, update);
        Ok(())
    }
}

impl Resource for Account {
    type Filter = AccountFilter;
    type Validator = AccountValidator;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(username: Option<&str>, email: Option<&str>) -> AccountChange {
        AccountChange {
            username: username.map(String::from),
            email: email.map(String::from),
        }
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_email("ada@example.org"));
        assert!(!is_email("ada.example.org"));
        assert!(!is_email("@example.org"));
        assert!(!is_email("ada@example"));
        assert!(!is_email("ada@@example.org"));
        assert!(!is_email("ada lovelace@example.org"));
    }

    #[test]
    fn test_null_then_empty_then_not_valid() {
        let outcome = AccountValidator.check(&request(None, Some(" ")));
        assert_eq!(outcome.codes(), vec!["ACCOUNT_USERNAME_NULL", "ACCOUNT_EMAIL_EMPTY"]);

        let outcome = AccountValidator.check(&request(Some("ada"), Some("nope")));
        assert_eq!(outcome.codes(), vec!["ACCOUNT_EMAIL_NOT_VALID"]);
    }

    #[test]
    fn test_short_username_passes_without_events() {
        let outcome = AccountValidator
            .validate(&request(Some("al"), Some("al@example.org")))
            .unwrap();
        assert!(outcome.is_ok());
        assert!(outcome.events().is_empty());
    }
}
