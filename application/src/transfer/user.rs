use kernel::prelude::entity::{
    DestructUser, DestructUserPage, SelectLimit, SelectOffset, User, UserPage, UserRole,
    UserStatistics, UserStatus,
};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct UserDto {
    pub id: String,
    pub username: String,
    pub email: String,
    pub is_admin: bool,
    pub active: bool,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let DestructUser {
            id,
            name,
            email,
            role,
            status,
        } = value.into_destruct();
        Self {
            id: id.into(),
            username: name.into(),
            email: email.into(),
            is_admin: role.is_admin(),
            active: status.is_active(),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct UserPageDto {
    pub users: Vec<UserDto>,
    pub total: usize,
}

impl From<UserPage> for UserPageDto {
    fn from(value: UserPage) -> Self {
        let DestructUserPage { users, total } = value.into_destruct();
        Self {
            users: users.into_iter().map(UserDto::from).collect(),
            total,
        }
    }
}

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct UserStatisticsDto {
    pub total: usize,
    pub admins: usize,
    pub active: usize,
}

impl From<UserStatistics> for UserStatisticsDto {
    fn from(value: UserStatistics) -> Self {
        Self {
            total: *value.total(),
            admins: *value.admins(),
            active: *value.active(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchUsersDto {
    pub search: Option<String>,
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
    pub limit: SelectLimit,
    pub offset: SelectOffset,
}

pub struct CreateUserDto {
    pub username: String,
    pub email: String,
    pub password: String,
    pub is_admin: bool,
    pub active: bool,
}

pub struct UpdateUserDto {
    pub id: String,
    pub username: String,
    pub email: String,
    pub is_admin: bool,
    pub active: bool,
}

pub struct DeleteUserDto {
    pub id: String,
}
