use chrono::{DateTime, Utc};
use shared_kernel::{non_empty_string, uuid_key};

uuid_key!(UserId);

non_empty_string!(UserName);
non_empty_string!(UserEmailInner);

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct UserEmail(UserEmailInner);

impl AsRef<str> for UserEmail {
    fn as_ref(&self) -> &str {
        self.0.as_ref()
    }
}

impl TryFrom<String> for UserEmail {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        use validator::validate_email;
        let non_empty_string = UserEmailInner::try_from(value)?;

        let is_valid = validate_email(non_empty_string.as_ref());
        if is_valid {
            return Ok(UserEmail(non_empty_string));
        }
        Err(format!("{} is an invalid email", non_empty_string.as_ref()))
    }
}

#[derive(Clone, Debug)]
pub struct User {
    pub id: UserId,
    pub name: UserName,
    pub email: UserEmail,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Registration payload; the repository assigns the id and creation time.
pub struct NewUser {
    pub name: UserName,
    pub email: UserEmail,
    pub password_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_well_formed_email() {
        let email = UserEmail::try_from("john@doe.com".to_string());
        assert!(email.is_ok());
    }

    #[test]
    fn rejects_malformed_emails() {
        for candidate in ["", "   ", "just-an-email.com", "john@", "@doe.com"] {
            let email = UserEmail::try_from(candidate.to_string());
            assert!(email.is_err(), "{candidate:?} should be rejected");
        }
    }
}
