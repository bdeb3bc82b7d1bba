use tracing::{info, warn};

use crate::db::UserStorage;
use crate::error::AdrError;
use crate::service::password::{generate_password, hash_password};

/// Make sure the admin account exists. An existing account is never touched.
///
/// Without a configured password a random one is generated and logged once,
/// so the operator can sign in on first start.
pub async fn ensure_admin(
    users: &UserStorage,
    username: &str,
    password: Option<&str>,
) -> Result<bool, AdrError> {
    if users.find_by_username(username).await?.is_some() {
        return Ok(false);
    }
    let password = match password {
        Some(p) => p.to_string(),
        None => {
            let generated = generate_password();
            warn!(
                username = %username,
                password = %generated,
                "ADR_ADMIN_PASSWORD not set; generated an initial admin password"
            );
            generated
        }
    };
    let hash = hash_password(&password)?;
    let created = users.seed_admin(username, &hash).await?;
    if created {
        info!(username = %username, "seeded admin account");
    }
    Ok(created)
}
