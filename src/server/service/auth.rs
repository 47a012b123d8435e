//! Login, registration, logout and the initial admin account.

use chrono::Utc;
use entity::user_role::Role;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{session::SessionRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::user::{AuthUser, CreateUserParams, LoginParams, LoginResult, RegisterParams},
    util::password::{generate_token, hash_password, hash_token, verify_password},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Verifies credentials and issues an access token.
    ///
    /// Expired sessions are pruned on every successful login.
    ///
    /// # Arguments
    /// - `params` - Login and password
    /// - `token_ttl` - Lifetime of the issued token
    ///
    /// # Returns
    /// - `Ok(LoginResult)` - Plain token and the signed-in user
    /// - `Err(AuthError::InvalidCredentials)` - Unknown login or wrong password
    pub async fn login(
        &self,
        params: LoginParams,
        token_ttl: chrono::Duration,
    ) -> Result<LoginResult, AppError> {
        let user_repo = UserRepository::new(self.db);
        let session_repo = SessionRepository::new(self.db);

        let Some(credentials) = user_repo.find_credentials_by_login(&params.login).await? else {
            return Err(AuthError::InvalidCredentials(params.login).into());
        };

        if !verify_password(&params.password, &credentials.password_hash) {
            return Err(AuthError::InvalidCredentials(params.login).into());
        }

        let user = user_repo
            .find_auth_user(credentials.user_id)
            .await?
            .ok_or(AuthError::UserNotInDatabase(credentials.user_id))?;

        let now = Utc::now();
        let expires_at = now
            .checked_add_signed(token_ttl)
            .ok_or_else(|| AppError::InternalError("Token lifetime out of range".to_string()))?;
        session_repo.delete_expired(now).await?;

        let token = generate_token();
        session_repo
            .create(user.user_id, hash_token(&token), now, expires_at)
            .await?;

        tracing::info!("User {} logged in", user.login);

        Ok(LoginResult {
            access_token: token,
            user,
        })
    }

    /// Creates a user who can sign in with the given role.
    ///
    /// # Returns
    /// - `Ok(AuthUser)` - Created user
    /// - `Err(AppError::BadRequest)` - Empty login or password
    /// - `Err(AppError::Conflict)` - Login already taken
    pub async fn register(&self, params: RegisterParams) -> Result<AuthUser, AppError> {
        let login = params.login.trim().to_string();

        if login.is_empty() || params.password.is_empty() {
            return Err(AppError::BadRequest(
                "Login and password must not be empty".to_string(),
            ));
        }

        let user_repo = UserRepository::new(self.db);

        if user_repo.login_exists(&login).await? {
            return Err(AppError::Conflict(format!(
                "Login '{}' is already taken",
                login
            )));
        }

        let user = user_repo
            .create(CreateUserParams {
                surname: params.surname,
                name: params.name,
                patronymic: params.patronymic,
                credentials: Some((login.clone(), hash_password(&params.password)?)),
                role: Some(params.role),
            })
            .await
            .map_err(|err| {
                AppError::conflict_on_unique(err, || format!("Login '{}' is already taken", login))
            })?;

        user_repo
            .find_auth_user(user.user_id)
            .await?
            .ok_or_else(|| AppError::InternalError("User not found after creation".to_string()))
    }

    /// Revokes a token; unknown tokens are ignored.
    pub async fn logout(&self, token: &str) -> Result<(), AppError> {
        SessionRepository::new(self.db)
            .delete_by_token_hash(&hash_token(token))
            .await?;

        Ok(())
    }

    /// Creates the admin account when no admin exists yet.
    ///
    /// # Arguments
    /// - `login` - Admin login, from configuration
    /// - `password` - Admin password, from configuration
    ///
    /// # Returns
    /// - `Ok(true)` - Admin account created
    /// - `Ok(false)` - An admin already exists, or no credentials were configured
    pub async fn ensure_admin(
        &self,
        login: Option<&str>,
        password: Option<&str>,
    ) -> Result<bool, AppError> {
        if UserRepository::new(self.db).admin_exists().await? {
            return Ok(false);
        }

        let (Some(login), Some(password)) = (login, password) else {
            tracing::warn!(
                "No admin user exists; set ADMIN_LOGIN and ADMIN_PASSWORD to create one on startup"
            );
            return Ok(false);
        };

        self.register(RegisterParams {
            login: login.to_string(),
            password: password.to_string(),
            role: Role::Admin,
            surname: "Administrator".to_string(),
            name: String::new(),
            patronymic: String::new(),
        })
        .await?;

        tracing::info!("Created admin user '{}'", login);

        Ok(true)
    }
}
