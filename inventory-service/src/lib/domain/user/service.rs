use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use chrono::Utc;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::AccessToken;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::SignupCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::AuthServicePort;
use crate::domain::user::ports::UserRepository;

/// Domain service orchestrating signup and login.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Credential store implementation
    /// * `authenticator` - Password hashing and token issuance
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }

    /// Remove a user whose token could not be issued.
    async fn roll_back_signup(&self, user_id: &UserId) {
        if let Err(e) = self.repository.delete(user_id).await {
            tracing::error!(
                user_id = %user_id,
                error = %e,
                "Failed to roll back user after token issuance failure"
            );
        }
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn signup(&self, command: SignupCommand) -> Result<AccessToken, UserError> {
        let authenticator = Arc::clone(&self.authenticator);
        let password = command.password;
        let password_hash =
            tokio::task::spawn_blocking(move || authenticator.hash_password(password.expose()))
                .await
                .map_err(|e| UserError::TaskFailed(e.to_string()))??;

        let user = User {
            id: UserId::new(),
            email: command.email,
            password_hash,
            created_at: Utc::now(),
        };

        let created_user = self.repository.create(user).await?;

        let subject = created_user.id.to_string();
        match self.authenticator.issue_token(Some(&subject)) {
            Ok(issued) => {
                tracing::info!(user_id = %created_user.id, "User signed up");
                Ok(issued.into())
            }
            Err(e) => {
                tracing::error!(
                    user_id = %created_user.id,
                    error = %e,
                    "Token issuance failed after signup"
                );
                self.roll_back_signup(&created_user.id).await;
                Err(e.into())
            }
        }
    }

    async fn login(&self, command: LoginCommand) -> Result<AccessToken, UserError> {
        let user = self.repository.find_by_email(&command.email).await?;

        let authenticator = Arc::clone(&self.authenticator);
        let password = command.password;
        let (user_id, issued) = tokio::task::spawn_blocking(move || match user {
            Some(user) => authenticator
                .authenticate(&password, &user.password_hash, &user.id.to_string())
                .map(|issued| (user.id, issued)),
            None => Err(authenticator.reject_unknown_user(&password)),
        })
        .await
        .map_err(|e| UserError::TaskFailed(e.to_string()))?
        .map_err(|e| match e {
            AuthenticationError::InvalidCredentials => UserError::InvalidCredentials,
            AuthenticationError::PasswordError(err) => UserError::Password(err),
            AuthenticationError::JwtError(err) => UserError::Token(err),
        })?;

        tracing::info!(user_id = %user_id, "User logged in");

        Ok(issued.into())
    }
}
