use tokio::io::{AsyncBufRead, AsyncWrite};

use crate::db::queries::{questions, results};

use super::menu::{AdminChoice, ADMIN_MENU};
use super::{Console, Flow, Selection, Session, NOT_AVAILABLE};

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub(super) async fn admin_menu(&mut self, session: &Session) -> anyhow::Result<Flow> {
        loop {
            let choice = match self.select::<AdminChoice>(ADMIN_MENU).await? {
                Selection::Chosen(choice) => choice,
                Selection::Retry => continue,
                Selection::Closed => return Ok(Flow::Exit),
            };
            let flow = match choice {
                AdminChoice::AddQuestion => self.add_question().await?,
                AdminChoice::ViewAllQuestions => self.view_questions().await?,
                AdminChoice::ViewScores => self.view_scores(None).await?,
                AdminChoice::EditQuestion
                | AdminChoice::DeleteQuestion
                | AdminChoice::GenerateReport => {
                    self.line(NOT_AVAILABLE).await?;
                    Flow::Continue
                }
                AdminChoice::Logout => {
                    tracing::info!(user_id = session.user_id, "Admin logged out");
                    self.line("Logged out.").await?;
                    return Ok(Flow::Continue);
                }
            };
            if flow == Flow::Exit {
                return Ok(Flow::Exit);
            }
        }
    }

    async fn add_question(&mut self) -> anyhow::Result<Flow> {
        let Some(quiz_id) = self.prompt("Enter Quiz ID: ").await? else {
            return Ok(Flow::Exit);
        };
        let Some(question) = self.prompt("Enter Question: ").await? else {
            return Ok(Flow::Exit);
        };
        let Some(answer) = self.prompt("Enter Answer: ").await? else {
            return Ok(Flow::Exit);
        };
        match questions::add_question(&self.pool, &quiz_id, &question, &answer).await {
            Ok(id) => {
                tracing::info!(id, %quiz_id, "Question added");
                self.line("Question added successfully.").await?;
            }
            Err(err) => self.report("adding the question", err).await?,
        }
        Ok(Flow::Continue)
    }

    async fn view_questions(&mut self) -> anyhow::Result<Flow> {
        let Some(quiz_id) = self.prompt("Enter Quiz ID: ").await? else {
            return Ok(Flow::Exit);
        };
        let questions = match questions::get_questions_by_quiz(&self.pool, &quiz_id).await {
            Ok(questions) => questions,
            Err(err) => {
                self.report("loading questions", err).await?;
                return Ok(Flow::Continue);
            }
        };
        if questions.is_empty() {
            self.line(&format!("No questions found for quiz '{quiz_id}'.")).await?;
            return Ok(Flow::Continue);
        }
        self.line(&format!("Questions for quiz '{quiz_id}':")).await?;
        for (n, question) in questions.iter().enumerate() {
            let text = format!("{}. {} (answer: {})", n + 1, question.question, question.answer);
            self.line(&text).await?;
        }
        Ok(Flow::Continue)
    }

    /// Lists results for a quiz, restricted to one user when `only_user` is set.
    pub(super) async fn view_scores(&mut self, only_user: Option<i64>) -> anyhow::Result<Flow> {
        let Some(quiz_id) = self.prompt("Enter Quiz ID: ").await? else {
            return Ok(Flow::Exit);
        };
        let scores: Vec<_> = match results::get_results_by_quiz(&self.pool, &quiz_id).await {
            Ok(scores) => scores
                .into_iter()
                .filter(|r| only_user.map_or(true, |id| r.user_id == id))
                .collect(),
            Err(err) => {
                self.report("loading scores", err).await?;
                return Ok(Flow::Continue);
            }
        };
        if scores.is_empty() {
            self.line(&format!("No scores recorded for quiz '{quiz_id}'.")).await?;
            return Ok(Flow::Continue);
        }
        self.line(&format!("Scores for quiz '{quiz_id}':")).await?;
        for result in scores {
            let text = format!(
                "User #{} scored {} on {}",
                result.user_id, result.score, result.date_taken
            );
            self.line(&text).await?;
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use crate::console::tests::run_script;
    use crate::db::queries::{questions, results, users};
    use crate::db::test_pool;

    const ADMIN_LOGIN: &str = "3\nroot\npw\n";

    #[tokio::test]
    async fn admin_adds_and_lists_questions() {
        let pool = test_pool().await;
        users::sign_up(&pool, "root", "pw", true).await.unwrap();

        let script = format!("{ADMIN_LOGIN}1\nQ1\n2+2?\n4\n4\nQ1\n7\n5\n");
        let output = run_script(&pool, &script).await;

        assert!(output.contains("Admin login successful."));
        assert!(output.contains("Question added successfully."));
        assert!(output.contains("Questions for quiz 'Q1':\n1. 2+2? (answer: 4)\n"));
        assert!(output.contains("Logged out."));
        assert!(output.contains("Exiting the system."));

        let stored = questions::get_questions_by_quiz(&pool, "Q1").await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].answer, "4");
    }

    #[tokio::test]
    async fn admin_sees_every_score_for_a_quiz() {
        let pool = test_pool().await;
        users::sign_up(&pool, "root", "pw", true).await.unwrap();
        let alice = users::sign_up(&pool, "alice", "pw", false).await.unwrap();
        let bob = users::sign_up(&pool, "bob", "pw", false).await.unwrap();
        results::record_result(&pool, alice, "Q1", 4, "2024-05-01").await.unwrap();
        results::record_result(&pool, bob, "Q1", 2, "2024-05-02").await.unwrap();

        let script = format!("{ADMIN_LOGIN}5\nQ1\n5\nQ9\n7\n5\n");
        let output = run_script(&pool, &script).await;

        assert!(output.contains(&format!("User #{alice} scored 4 on 2024-05-01")));
        assert!(output.contains(&format!("User #{bob} scored 2 on 2024-05-02")));
        assert!(output.contains("No scores recorded for quiz 'Q9'."));
    }

    #[tokio::test]
    async fn unimplemented_admin_options_are_reported() {
        let pool = test_pool().await;
        users::sign_up(&pool, "root", "pw", true).await.unwrap();

        let script = format!("{ADMIN_LOGIN}2\n3\n6\nxyz\n8\n7\n5\n");
        let output = run_script(&pool, &script).await;

        assert_eq!(output.matches("This option is not available yet.").count(), 3);
        assert!(output.contains("Invalid input. Please enter a valid number."));
        assert!(output.contains("Invalid option. Try again."));
        assert_eq!(output.matches("Admin Menu").count(), 6);
    }

    #[tokio::test]
    async fn empty_quiz_has_no_questions() {
        let pool = test_pool().await;
        users::sign_up(&pool, "root", "pw", true).await.unwrap();

        let script = format!("{ADMIN_LOGIN}4\nnothing\n7\n5\n");
        let output = run_script(&pool, &script).await;

        assert!(output.contains("No questions found for quiz 'nothing'."));
    }

    #[tokio::test]
    async fn end_of_input_inside_admin_menu_exits() {
        let pool = test_pool().await;
        users::sign_up(&pool, "root", "pw", true).await.unwrap();

        let output = run_script(&pool, ADMIN_LOGIN).await;

        assert!(output.ends_with("Enter your choice: "));
        assert_eq!(output.matches("Main Menu").count(), 1);
    }
}
