pub mod entities;
pub mod routes;

pub mod health_check;

pub mod create_role;
pub mod delete_role;
pub mod get_role_by_id;
pub mod get_roles;
pub mod update_role;

pub mod create_user_role;
pub mod delete_user_role;
pub mod get_user_role_by_id;
pub mod get_user_roles;
pub mod lookup_user_roles;

pub mod diseases;
pub mod locations;
