//! User entity <-> model mapper

use payroll_core::entities::User;
use payroll_core::Snowflake;

use crate::models::UserModel;

/// Convert UserModel to User entity (password hash never leaves this layer)
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Snowflake::new(model.id),
            username: model.username,
            employee_id: model.employee_id.map(Snowflake::new),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
