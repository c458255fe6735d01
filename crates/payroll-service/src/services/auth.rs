//! Authentication service
//!
//! Handles registration (with employee-code linking), login, token
//! refresh, and logout. Refresh tokens are persisted as digests so
//! logout actually revokes them.

use chrono::{Duration, Utc};
use payroll_common::auth::{
    hash_password, token_digest, validate_password_strength, verify_password,
};
use payroll_core::entities::User;
use payroll_core::value_objects::Role;
use payroll_core::{DomainError, Snowflake};
use tracing::{info, instrument, warn};

use crate::dto::{
    AuthResponse, CurrentUserResponse, LoginRequest, RefreshTokenRequest, RegisterRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::role::RoleService;

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user linked to an existing employee record
    ///
    /// Employees in the accountant position are granted the accountant
    /// role as part of registration.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        if request.password != request.confirm_password {
            return Err(ServiceError::validation("Passwords do not match"));
        }
        validate_password_strength(&request.password).map_err(ServiceError::from)?;

        if self
            .ctx
            .user_repo()
            .username_exists(&request.username)
            .await?
        {
            return Err(DomainError::UsernameTaken.into());
        }

        // The code is the only way registration can name an employee
        let employee = self
            .ctx
            .employee_repo()
            .find_by_code(&request.employee_code)
            .await?
            .ok_or(DomainError::InvalidEmployeeCode)?;

        if self.ctx.user_repo().employee_linked(employee.id).await? {
            return Err(DomainError::EmployeeAlreadyLinked.into());
        }

        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let user_id = self.ctx.generate_id();
        let user = User::new(user_id, request.username, Some(employee.id));

        self.ctx.user_repo().create(&user, &password_hash).await?;

        let is_accountant = employee.holds_accountant_position();
        if is_accountant {
            RoleService::new(self.ctx)
                .grant(user_id, Role::Accountant)
                .await?;
        }

        info!(user_id = %user_id, employee_id = %employee.id, "User registered successfully");

        let token_pair = self.issue_tokens(user_id).await?;

        Ok(AuthResponse::new(
            token_pair.access_token,
            token_pair.refresh_token,
            token_pair.expires_in,
            CurrentUserResponse::from_user(&user, is_accountant),
        ))
    }

    /// Login with username and password
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| {
                warn!(username = %request.username, "Login failed: user not found");
                ServiceError::App(payroll_common::AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(payroll_common::AppError::InvalidCredentials)
            })?;

        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(ServiceError::App(
                payroll_common::AppError::InvalidCredentials,
            ));
        }

        info!(user_id = %user.id, "User logged in successfully");

        let token_pair = self.issue_tokens(user.id).await?;
        let is_accountant = RoleService::new(self.ctx).is_accountant(user.id).await?;

        Ok(AuthResponse::new(
            token_pair.access_token,
            token_pair.refresh_token,
            token_pair.expires_in,
            CurrentUserResponse::from_user(&user, is_accountant),
        ))
    }

    /// Rotate tokens using a valid refresh token
    #[instrument(skip(self, request))]
    pub async fn refresh_tokens(&self, request: RefreshTokenRequest) -> ServiceResult<AuthResponse> {
        // Stateless checks first (signature, expiry, token type)
        self.ctx
            .jwt_service()
            .validate_refresh_token(&request.refresh_token)
            .map_err(ServiceError::from)?;

        // Then the revocation check against the stored digest
        let digest = token_digest(&request.refresh_token);
        let user_id = self
            .ctx
            .refresh_token_repo()
            .validate(&digest)
            .await?
            .ok_or(ServiceError::App(payroll_common::AppError::InvalidToken))?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        // Rotation: the old token dies with this call
        self.ctx.refresh_token_repo().revoke(&digest).await?;

        let token_pair = self.issue_tokens(user.id).await?;
        let is_accountant = RoleService::new(self.ctx).is_accountant(user.id).await?;

        info!(user_id = %user.id, "Tokens refreshed successfully");

        Ok(AuthResponse::new(
            token_pair.access_token,
            token_pair.refresh_token,
            token_pair.expires_in,
            CurrentUserResponse::from_user(&user, is_accountant),
        ))
    }

    /// Logout user by revoking refresh tokens
    #[instrument(skip(self, refresh_token))]
    pub async fn logout(
        &self,
        user_id: Snowflake,
        refresh_token: Option<String>,
    ) -> ServiceResult<()> {
        if let Some(token) = refresh_token {
            self.ctx
                .refresh_token_repo()
                .revoke(&token_digest(&token))
                .await?;
        } else {
            self.ctx
                .refresh_token_repo()
                .revoke_all_for_user(user_id)
                .await?;
        }

        info!(user_id = %user_id, "User logged out successfully");
        Ok(())
    }

    /// Validate an access token and return the user ID
    #[instrument(skip(self, token))]
    pub async fn validate_token(&self, token: &str) -> ServiceResult<Snowflake> {
        let claims = self
            .ctx
            .jwt_service()
            .validate_access_token(token)
            .map_err(ServiceError::from)?;

        claims.user_id().map_err(ServiceError::from)
    }

    /// Get the current user's account view
    #[instrument(skip(self))]
    pub async fn current_user(&self, user_id: Snowflake) -> ServiceResult<CurrentUserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        let is_accountant = RoleService::new(self.ctx).is_accountant(user_id).await?;

        Ok(CurrentUserResponse::from_user(&user, is_accountant))
    }

    /// Generate a token pair and persist the refresh token digest
    async fn issue_tokens(
        &self,
        user_id: Snowflake,
    ) -> ServiceResult<payroll_common::auth::TokenPair> {
        let token_pair = self
            .ctx
            .jwt_service()
            .generate_token_pair(user_id)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        let expires_at =
            Utc::now() + Duration::seconds(self.ctx.jwt_service().refresh_token_expiry());
        self.ctx
            .refresh_token_repo()
            .store(user_id, &token_digest(&token_pair.refresh_token), expires_at)
            .await?;

        Ok(token_pair)
    }
}
