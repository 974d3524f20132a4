use crate::server::{
    data::user::UserRepository,
    error::{data::DataError, AppError},
    model::user::CreateUserParam,
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod get_by_id;

/// Builds create parameters with a fixed password and active flag.
fn param(email: &str) -> CreateUserParam {
    CreateUserParam {
        email: email.to_string(),
        password: "opensesame".to_string(),
        is_active: true,
    }
}
