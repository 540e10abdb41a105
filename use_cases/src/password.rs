use anyhow::Context;
#[cfg(test)]
use mockall::automock;

/// Port for one-way password hashing. Verification is expected to carry the
/// constant-time comparison semantics of the underlying algorithm.
#[cfg_attr(test, automock)]
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, plaintext: &str) -> anyhow::Result<String>;

    fn verify(&self, plaintext: &str, hash: &str) -> anyhow::Result<bool>;
}

#[derive(Clone, Copy, Debug)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, plaintext: &str) -> anyhow::Result<String> {
        bcrypt::hash(plaintext, self.cost).context("Failed to hash password")
    }

    fn verify(&self, plaintext: &str, hash: &str) -> anyhow::Result<bool> {
        bcrypt::verify(plaintext, hash).context("Failed to verify password")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_round_trips_through_verify() {
        let hasher = BcryptPasswordHasher::with_cost(4);
        let hash = hasher.hash("123456").unwrap();

        assert_ne!(hash, "123456");
        assert!(hasher.verify("123456", &hash).unwrap());
        assert!(!hasher.verify("123123", &hash).unwrap());
    }
}
