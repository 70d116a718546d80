use anyhow::{Context, Result};
use bcrypt::hash;
use std::path::Path;
use tokio::fs;

use crate::config::AuthConfig;
use crate::models::user::{User, UserSeed};

/// Static set of accounts allowed to sign in. Built once at start-up, never mutated.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    /// Loads the seed from `auth.users_file` when configured, otherwise the demo users.
    pub async fn load(config: &AuthConfig) -> Result<Self> {
        let seeds = match &config.users_file {
            Some(path) => read_seed_file(Path::new(path)).await?,
            None => {
                tracing::debug!("No users file configured, using demo users");
                demo_seeds()
            }
        };

        let directory = Self::from_seeds(seeds, config.bcrypt_cost)?;
        tracing::info!("User directory ready with {} users", directory.len());
        Ok(directory)
    }

    /// Hashes every seed password with the given bcrypt cost.
    pub fn from_seeds(seeds: Vec<UserSeed>, bcrypt_cost: u32) -> Result<Self> {
        let users = seeds
            .into_iter()
            .map(|seed| {
                let password_hash = hash(&seed.password, bcrypt_cost)
                    .with_context(|| format!("Failed to hash password for {}", seed.email))?;
                Ok(User {
                    id: seed.id,
                    name: seed.name,
                    email: seed.email,
                    password_hash,
                    image: seed.image,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { users })
    }

    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|user| user.email == email)
    }

    pub fn find_by_id(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

async fn read_seed_file(path: &Path) -> Result<Vec<UserSeed>> {
    tracing::info!("Loading users from {}", path.display());

    let contents = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read users file {}", path.display()))?;

    serde_json::from_str(&contents).context("Failed to deserialize users file")
}

pub fn demo_seeds() -> Vec<UserSeed> {
    let demo = |id: &str, name: &str, email: &str| UserSeed {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        password: "password123".to_string(),
        image: Some(format!("https://avatars.githubusercontent.com/u/{}?v=4", id)),
    };

    vec![
        demo("1", "Demo User", "demo@example.com"),
        demo("2", "Test User", "test@example.com"),
    ]
}
