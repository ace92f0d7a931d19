use error_stack::Report;

use kernel::interface::directory::{DependOnUserDirectory, UserDirectory};
use kernel::prelude::entity::{
    Email, NewUser, Password, Session, User, UserFilter, UserId, UserName, UserPage, UserRole,
    UserStatistics, UserStatus,
};
use kernel::KernelError;

use crate::transfer::{
    CreateUserDto, DeleteUserDto, SearchUsersDto, UpdateUserDto, UserPageDto, UserStatisticsDto,
};

#[async_trait::async_trait]
pub trait ListUsersService: 'static + Sync + Send + DependOnUserDirectory {
    async fn search_users(
        &self,
        session: &Session,
        dto: SearchUsersDto,
    ) -> error_stack::Result<UserPageDto, KernelError> {
        let users = self.user_directory().find_all(session).await?;
        let filter = UserFilter::new(dto.search, dto.role, dto.status);
        let page = UserPage::paginate(users, &filter, &dto.limit, &dto.offset);
        Ok(UserPageDto::from(page))
    }

    async fn user_statistics(
        &self,
        session: &Session,
    ) -> error_stack::Result<UserStatisticsDto, KernelError> {
        let users = self.user_directory().find_all(session).await?;
        Ok(UserStatisticsDto::from(UserStatistics::collect(&users)))
    }
}

impl<T> ListUsersService for T where T: DependOnUserDirectory {}

#[async_trait::async_trait]
pub trait CreateUserService: 'static + Sync + Send + DependOnUserDirectory {
    /// Incomplete input is refused before anything is sent.
    async fn create_user(
        &self,
        session: &Session,
        dto: CreateUserDto,
    ) -> error_stack::Result<Option<String>, KernelError> {
        let user = NewUser::new(
            UserName::new(dto.username.trim()),
            Email::new(dto.email.trim()),
            Password::new(dto.password),
            UserRole::from_admin_flag(dto.is_admin),
            UserStatus::from_active_flag(dto.active),
        );
        user.validate()
            .map_err(|issues| Report::new(KernelError::Invalid).attach(issues))?;

        let id = self.user_directory().create(session, &user).await?;
        tracing::info!(username = ?user.name(), "User created");
        Ok(id.map(String::from))
    }
}

impl<T> CreateUserService for T where T: DependOnUserDirectory {}

#[async_trait::async_trait]
pub trait UpdateUserService: 'static + Sync + Send + DependOnUserDirectory {
    async fn update_user(
        &self,
        session: &Session,
        dto: UpdateUserDto,
    ) -> error_stack::Result<(), KernelError> {
        let user = User::new(
            UserId::new(dto.id),
            UserName::new(dto.username.trim()),
            Email::new(dto.email.trim()),
            UserRole::from_admin_flag(dto.is_admin),
            UserStatus::from_active_flag(dto.active),
        );
        user.validate()
            .map_err(|issues| Report::new(KernelError::Invalid).attach(issues))?;

        self.user_directory().update(session, &user).await?;
        tracing::info!(id = ?user.id(), "User updated");
        Ok(())
    }
}

impl<T> UpdateUserService for T where T: DependOnUserDirectory {}

#[async_trait::async_trait]
pub trait DeleteUserService: 'static + Sync + Send + DependOnUserDirectory {
    async fn delete_user(
        &self,
        session: &Session,
        dto: DeleteUserDto,
    ) -> error_stack::Result<(), KernelError> {
        let id = UserId::new(dto.id);
        self.user_directory().delete(session, &id).await?;
        tracing::info!(id = ?id, "User deleted");
        Ok(())
    }
}

impl<T> DeleteUserService for T where T: DependOnUserDirectory {}

#[cfg(test)]
mod test {
    use std::sync::Mutex;

    use kernel::interface::directory::{DependOnUserDirectory, UserDirectory};
    use kernel::prelude::entity::{
        AccessToken, Email, NewUser, Session, User, UserId, UserName, UserRole, UserStatus,
    };
    use kernel::prelude::failure::SaveError;
    use kernel::KernelError;

    use super::{CreateUserService, DeleteUserService, ListUsersService, UpdateUserService};
    use crate::transfer::{CreateUserDto, DeleteUserDto, SearchUsersDto, UpdateUserDto};

    #[derive(Default)]
    struct FakeDirectory {
        users: Mutex<Vec<User>>,
        created: Mutex<Vec<NewUser>>,
    }

    #[async_trait::async_trait]
    impl UserDirectory for FakeDirectory {
        async fn find_all(
            &self,
            _session: &Session,
        ) -> error_stack::Result<Vec<User>, KernelError> {
            Ok(self.users.lock().unwrap().clone())
        }

        async fn create(
            &self,
            _session: &Session,
            user: &NewUser,
        ) -> error_stack::Result<Option<UserId>, KernelError> {
            self.created.lock().unwrap().push(user.clone());
            Ok(Some(UserId::new("9")))
        }

        async fn update(
            &self,
            _session: &Session,
            user: &User,
        ) -> error_stack::Result<(), KernelError> {
            let mut users = self.users.lock().unwrap();
            if let Some(slot) = users.iter_mut().find(|slot| slot.id() == user.id()) {
                *slot = user.clone();
            }
            Ok(())
        }

        async fn delete(
            &self,
            _session: &Session,
            id: &UserId,
        ) -> error_stack::Result<(), KernelError> {
            self.users.lock().unwrap().retain(|user| user.id() != id);
            Ok(())
        }
    }

    impl DependOnUserDirectory for FakeDirectory {
        type UserDirectory = Self;
        fn user_directory(&self) -> &Self::UserDirectory {
            self
        }
    }

    fn session() -> Session {
        Session::new(AccessToken::new("token"))
    }

    fn directory() -> FakeDirectory {
        let user = |id: &str, name: &str, role, status| {
            User::new(
                UserId::new(id),
                UserName::new(name),
                Email::new(format!("{name}@biblioteca.gov.co")),
                role,
                status,
            )
        };
        FakeDirectory {
            users: Mutex::new(vec![
                user("1", "ana", UserRole::Admin, UserStatus::Active),
                user("2", "bruno", UserRole::Member, UserStatus::Active),
                user("3", "carla", UserRole::Member, UserStatus::Inactive),
            ]),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn search_and_count_users() {
        let directory = directory();
        let page = directory
            .search_users(
                &session(),
                SearchUsersDto {
                    status: Some(UserStatus::Active),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(page.total, 2);
        assert_eq!(page.users[0].username, "ana");
        assert!(page.users[0].is_admin);

        let stats = directory.user_statistics(&session()).await.unwrap();
        assert_eq!((stats.total, stats.admins, stats.active), (3, 1, 2));
    }

    #[tokio::test]
    async fn incomplete_user_is_not_sent() {
        let directory = directory();
        let report = directory
            .create_user(
                &session(),
                CreateUserDto {
                    username: "diana".into(),
                    email: "diana".into(),
                    password: "secret".into(),
                    is_admin: false,
                    active: true,
                },
            )
            .await
            .unwrap_err();
        assert_eq!(report.current_context(), &KernelError::Invalid);
        assert_eq!(
            SaveError::from_report(&report).message(),
            "Enter a valid email address"
        );
        assert!(directory.created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn created_user_is_trimmed() {
        let directory = directory();
        let id = directory
            .create_user(
                &session(),
                CreateUserDto {
                    username: "  diana ".into(),
                    email: "diana@biblioteca.gov.co ".into(),
                    password: "secret".into(),
                    is_admin: true,
                    active: true,
                },
            )
            .await
            .unwrap();
        assert_eq!(id.as_deref(), Some("9"));
        let created = directory.created.lock().unwrap();
        assert_eq!(created[0].name(), &UserName::new("diana"));
        assert!(created[0].role().is_admin());
    }

    #[tokio::test]
    async fn update_then_delete() {
        let directory = directory();
        directory
            .update_user(
                &session(),
                UpdateUserDto {
                    id: "3".into(),
                    username: "carla".into(),
                    email: "carla@biblioteca.gov.co".into(),
                    is_admin: false,
                    active: true,
                },
            )
            .await
            .unwrap();
        let stats = directory.user_statistics(&session()).await.unwrap();
        assert_eq!(stats.active, 3);

        directory
            .delete_user(&session(), DeleteUserDto { id: "1".into() })
            .await
            .unwrap();
        let stats = directory.user_statistics(&session()).await.unwrap();
        assert_eq!((stats.total, stats.admins), (2, 0));
    }
}
