use sqlx::FromRow;

/// A sign-up that passed validation; `password` is still clear text
#[derive(Debug, Clone, PartialEq)]
pub struct NewAccount {
    pub full_name: String,
    pub name_with_initials: String,
    pub nic: String,
    pub email: String,
    pub username: String,
    pub password: String,
}

/// Sign-in lookup row
#[derive(Debug, Clone, FromRow)]
pub struct Credentials {
    pub account_id: i32,
    pub username: String,
    pub full_name: String,
    pub password_hash: String,
}
