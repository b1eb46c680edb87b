mod admin;
mod auth;
pub mod menu;
mod user;

use sqlx::SqlitePool;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::db::DbError;

pub use auth::Session;
use menu::{MainChoice, MAIN_MENU};

const INVALID_INPUT: &str = "Invalid input. Please enter a valid number.";
const INVALID_OPTION: &str = "Invalid option. Try again.";
const NOT_AVAILABLE: &str = "This option is not available yet.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

enum Selection<C> {
    Chosen(C),
    Retry,
    Closed,
}

/// Menu-driven front end over the quiz store.
///
/// Reads one line per prompt from `input` and writes everything meant for
/// the operator to `output`. End of input ends the session like Exit.
pub struct Console<R, W> {
    pool: SqlitePool,
    input: R,
    output: W,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(pool: SqlitePool, input: R, output: W) -> Self {
        Self {
            pool,
            input,
            output,
        }
    }

    #[cfg(test)]
    pub(crate) fn into_output(self) -> W {
        self.output
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            let choice = match self.select::<MainChoice>(MAIN_MENU).await? {
                Selection::Chosen(choice) => choice,
                Selection::Retry => continue,
                Selection::Closed => break,
            };
            let flow = match choice {
                MainChoice::SignupAdmin => self.sign_up(true).await?,
                MainChoice::SignupUser => self.sign_up(false).await?,
                MainChoice::LoginAdmin => self.log_in(true).await?,
                MainChoice::LoginUser => self.log_in(false).await?,
                MainChoice::Exit => {
                    self.line("Exiting the system.").await?;
                    Flow::Exit
                }
            };
            if flow == Flow::Exit {
                break;
            }
        }
        tracing::info!("Console closed");
        self.output.flush().await?;
        Ok(())
    }

    async fn select<C: TryFrom<i64>>(&mut self, menu: &str) -> anyhow::Result<Selection<C>> {
        self.write(menu).await?;
        let Some(line) = self.prompt("Enter your choice: ").await? else {
            return Ok(Selection::Closed);
        };
        let Ok(number) = line.trim().parse::<i64>() else {
            self.line(INVALID_INPUT).await?;
            return Ok(Selection::Retry);
        };
        match C::try_from(number) {
            Ok(choice) => Ok(Selection::Chosen(choice)),
            Err(_) => {
                self.line(INVALID_OPTION).await?;
                Ok(Selection::Retry)
            }
        }
    }

    /// Returns `None` once the input is exhausted.
    async fn prompt(&mut self, label: &str) -> anyhow::Result<Option<String>> {
        self.write(label).await?;
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf).await? == 0 {
            return Ok(None);
        }
        // undecodable bytes become U+FFFD and fail parsing like any other bad input
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_owned()))
    }

    async fn write(&mut self, text: &str) -> anyhow::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await?;
        Ok(())
    }

    async fn line(&mut self, text: &str) -> anyhow::Result<()> {
        self.write(text).await?;
        self.write("\n").await
    }

    async fn report(&mut self, action: &str, err: DbError) -> anyhow::Result<()> {
        tracing::error!("Failed {action}: {err}");
        self.line(&format!("Something went wrong while {action}.")).await
    }
}
