use tokio::io::{AsyncBufRead, AsyncWrite};

use super::menu::{UserChoice, USER_MENU};
use super::{Console, Flow, Selection, Session, NOT_AVAILABLE};

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub(super) async fn user_menu(&mut self, session: &Session) -> anyhow::Result<Flow> {
        loop {
            let choice = match self.select::<UserChoice>(USER_MENU).await? {
                Selection::Chosen(choice) => choice,
                Selection::Retry => continue,
                Selection::Closed => return Ok(Flow::Exit),
            };
            let flow = match choice {
                UserChoice::ViewScores => self.view_scores(Some(session.user_id)).await?,
                UserChoice::TakeQuiz | UserChoice::ResetPassword => {
                    self.line(NOT_AVAILABLE).await?;
                    Flow::Continue
                }
                UserChoice::Logout => {
                    tracing::info!(user_id = session.user_id, "User logged out");
                    self.line("Logged out.").await?;
                    return Ok(Flow::Continue);
                }
            };
            if flow == Flow::Exit {
                return Ok(Flow::Exit);
            }
        }
    }
}
