mod access;
mod email;
mod id;
mod name;
mod password;

pub use self::{access::*, email::*, id::*, name::*, password::*};

use destructure::Destructure;
use vodca::References;

use crate::entity::{SelectLimit, SelectOffset};
use crate::validation::{ValidationIssue, ValidationIssues};

/// An account as listed by the user directory.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct User {
    id: UserId,
    name: UserName,
    email: Email,
    role: UserRole,
    status: UserStatus,
}

impl User {
    pub fn new(
        id: UserId,
        name: UserName,
        email: Email,
        role: UserRole,
        status: UserStatus,
    ) -> Self {
        Self {
            id,
            name,
            email,
            role,
            status,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationIssues> {
        profile_issues(&self.name, &self.email).into_checked()
    }
}

/// An account that does not exist yet.
#[derive(Debug, Clone, Eq, PartialEq, References)]
pub struct NewUser {
    name: UserName,
    email: Email,
    password: Password,
    role: UserRole,
    status: UserStatus,
}

impl NewUser {
    pub fn new(
        name: UserName,
        email: Email,
        password: Password,
        role: UserRole,
        status: UserStatus,
    ) -> Self {
        Self {
            name,
            email,
            password,
            role,
            status,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationIssues> {
        let mut issues = profile_issues(&self.name, &self.email);
        issues.check(!self.password.is_blank(), ValidationIssue::MissingPassword);
        issues.into_checked()
    }
}

fn profile_issues(name: &UserName, email: &Email) -> ValidationIssues {
    let mut issues = ValidationIssues::new();
    issues.check(!name.is_blank(), ValidationIssue::MissingUsername);
    if email.is_blank() {
        issues.push(ValidationIssue::MissingEmail);
    } else {
        issues.check(email.is_well_formed(), ValidationIssue::InvalidEmail);
    }
    issues
}

/// Search box plus role and status drop-downs of the user screen.
#[derive(Debug, Clone, Default, Eq, PartialEq, References)]
pub struct UserFilter {
    search: Option<String>,
    role: Option<UserRole>,
    status: Option<UserStatus>,
}

impl UserFilter {
    pub fn new(
        search: Option<String>,
        role: Option<UserRole>,
        status: Option<UserStatus>,
    ) -> Self {
        let search = search
            .map(|term| term.trim().to_lowercase())
            .filter(|term| !term.is_empty());
        Self {
            search,
            role,
            status,
        }
    }

    pub fn matches(&self, user: &User) -> bool {
        let matches_search = self.search.as_ref().map_or(true, |term| {
            let fields: [&String; 2] = [user.name.as_ref(), user.email.as_ref()];
            fields
                .into_iter()
                .any(|field| field.to_lowercase().contains(term.as_str()))
        });
        let matches_role = self.role.map_or(true, |role| user.role == role);
        let matches_status = self.status.map_or(true, |status| user.status == status);
        matches_search && matches_role && matches_status
    }
}

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct UserPage {
    users: Vec<User>,
    total: usize,
}

impl UserPage {
    pub fn paginate(
        users: Vec<User>,
        filter: &UserFilter,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> Self {
        let matched = users
            .into_iter()
            .filter(|user| filter.matches(user))
            .collect::<Vec<User>>();
        let total = matched.len();
        let users = matched
            .into_iter()
            .skip(offset.as_count())
            .take(limit.as_count())
            .collect();
        Self { users, total }
    }
}

#[derive(Debug, Clone, Default, Eq, PartialEq, References)]
pub struct UserStatistics {
    total: usize,
    admins: usize,
    active: usize,
}

impl UserStatistics {
    pub fn collect<'a>(users: impl IntoIterator<Item = &'a User>) -> Self {
        users.into_iter().fold(Self::default(), |mut stats, user| {
            stats.total += 1;
            if user.role.is_admin() {
                stats.admins += 1;
            }
            if user.status.is_active() {
                stats.active += 1;
            }
            stats
        })
    }
}
