use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// A member account as stored.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub birthdate: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub phone: Option<String>,
    pub blacklist: bool,
    pub active: bool,
    pub role_id: i32,
    pub address_id: Option<i32>,
}

/// Registration input before validation; the password is still plain text.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    /// `None` assigns the member role
    pub role_id: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(length(max = 255))]
    pub email: String,
    #[validate(length(max = 128))]
    pub password: String,
    pub confirm_password: String,
    #[validate(length(max = 90))]
    pub first_name: String,
    #[validate(length(max = 90))]
    pub last_name: String,
}

impl RegisterRequest {
    /// Splits the form into the account data and the confirmation field.
    pub fn into_parts(self) -> (NewUser, String) {
        (
            NewUser {
                email: self.email,
                password: self.password,
                first_name: self.first_name,
                last_name: self.last_name,
                role_id: None,
            },
            self.confirm_password,
        )
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(max = 255))]
    pub email: String,
    #[validate(length(max = 128))]
    pub password: String,
}

/// Profile or admin edit form.
///
/// Absent and empty strings both mean "leave unchanged". `blacklist` and
/// `active` are only read for admin edits, where a missing flag means `false`.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct ProfileUpdate {
    #[validate(length(max = 90))]
    pub first_name: Option<String>,
    #[validate(length(max = 90))]
    pub last_name: Option<String>,
    #[validate(length(max = 255))]
    pub email: Option<String>,
    pub confirm_email: Option<String>,
    #[validate(length(max = 128))]
    pub password: Option<String>,
    pub confirm_password: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<String>,
    /// ISO date, e.g. `1990-04-21`
    pub birthdate: Option<String>,
    #[serde(default)]
    pub blacklist: bool,
    #[serde(default)]
    pub active: bool,
    /// Kept as text so a non-numeric value maps to `INVALID_ROLE_ID`
    pub role_id: Option<String>,
}

/// Changes accepted by validation, applied in one step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<Gender>,
    pub birthdate: Option<NaiveDate>,
    pub admin: Option<AdminPatch>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminPatch {
    pub blacklist: bool,
    pub active: bool,
    pub role_id: Option<i32>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply(self, user: &mut User) {
        if let Some(first_name) = self.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            user.last_name = last_name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(hash) = self.password_hash {
            user.password_hash = hash;
        }
        if let Some(phone) = self.phone {
            user.phone = Some(phone);
        }
        if let Some(gender) = self.gender {
            user.gender = Some(gender);
        }
        if let Some(birthdate) = self.birthdate {
            user.birthdate = Some(birthdate);
        }
        if let Some(admin) = self.admin {
            user.blacklist = admin.blacklist;
            user.active = admin.active;
            if let Some(role_id) = admin.role_id {
                user.role_id = role_id;
            }
        }
    }
}

/// User as returned by the API, without the password hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: i32,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub birthdate: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub phone: Option<String>,
    pub blacklist: bool,
    pub active: bool,
    pub role_id: i32,
    pub address_id: Option<i32>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            birthdate: user.birthdate,
            gender: user.gender,
            phone: user.phone,
            blacklist: user.blacklist,
            active: user.active,
            role_id: user.role_id,
            address_id: user.address_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Role {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RoleInput {
    #[validate(length(max = 50))]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserSearch {
    /// Case-insensitive match on first name, last name or email
    pub search_query: Option<String>,
    /// 1-based page number
    pub page: Option<usize>,
}

/// One page of the admin user list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UsersPage {
    pub users: Vec<UserResponse>,
    pub page: usize,
    pub total_pages: usize,
    pub total_users: usize,
    pub search_query: Option<String>,
}
