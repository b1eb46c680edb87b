use tokio::io::{AsyncBufRead, AsyncWrite};

use crate::db::queries::users;
use crate::db::{DbError, User};

use super::{Console, Flow};

/// Identity of the operator between a successful login and logout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: i64,
    pub username: String,
    pub is_admin: bool,
}

impl From<User> for Session {
    fn from(user: User) -> Self {
        Self {
            user_id: user.id,
            username: user.username,
            is_admin: user.is_admin,
        }
    }
}

fn role_name(is_admin: bool) -> &'static str {
    if is_admin {
        "admin"
    } else {
        "user"
    }
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    async fn read_credentials(&mut self) -> anyhow::Result<Option<(String, String)>> {
        let Some(username) = self.prompt("Enter Username: ").await? else {
            return Ok(None);
        };
        let Some(password) = self.prompt("Enter Password: ").await? else {
            return Ok(None);
        };
        Ok(Some((username, password)))
    }

    pub(super) async fn sign_up(&mut self, is_admin: bool) -> anyhow::Result<Flow> {
        let Some((username, password)) = self.read_credentials().await? else {
            return Ok(Flow::Exit);
        };
        match users::sign_up(&self.pool, &username, &password, is_admin).await {
            Ok(id) => {
                tracing::info!(id, role = role_name(is_admin), "Account created");
                let message = if is_admin {
                    "Admin account created successfully."
                } else {
                    "User account created successfully."
                };
                self.line(message).await?;
            }
            Err(DbError::UsernameTaken(_)) => self.line("Username already exists.").await?,
            Err(err) => self.report("creating the account", err).await?,
        }
        Ok(Flow::Continue)
    }

    pub(super) async fn log_in(&mut self, is_admin: bool) -> anyhow::Result<Flow> {
        let Some((username, password)) = self.read_credentials().await? else {
            return Ok(Flow::Exit);
        };
        let user = match users::login(&self.pool, &username, &password, is_admin).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                tracing::info!(%username, role = role_name(is_admin), "Login rejected");
                let message = format!(
                    "Invalid username or password for {}.",
                    role_name(is_admin)
                );
                self.line(&message).await?;
                return Ok(Flow::Continue);
            }
            Err(err) => {
                self.report("logging in", err).await?;
                return Ok(Flow::Continue);
            }
        };

        let session = Session::from(user);
        tracing::info!(user_id = session.user_id, role = role_name(is_admin), "Logged in");
        if session.is_admin {
            self.line("Admin login successful.").await?;
            self.line(&format!("Welcome, {}.", session.username)).await?;
            self.admin_menu(&session).await
        } else {
            self.line("User login successful.").await?;
            self.line(&format!("Welcome, {}.", session.username)).await?;
            self.user_menu(&session).await
        }
    }
}
