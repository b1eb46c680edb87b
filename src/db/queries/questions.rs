use sqlx::SqlitePool;

use crate::db::DbError;

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Question {
    pub id: i64,
    pub quiz_id: String,
    pub question: String,
    pub answer: String,
}

#[tracing::instrument(skip(pool))]
pub async fn add_question(
    pool: &SqlitePool,
    quiz_id: &str,
    question: &str,
    answer: &str,
) -> Result<i64, DbError> {
    let mut conn = pool.acquire().await?;

    let id = sqlx::query(
        r#"
        INSERT INTO questions (quiz_id, question, answer) VALUES (?1, ?2, ?3)
        "#,
    )
    .bind(quiz_id)
    .bind(question)
    .bind(answer)
    .execute(&mut *conn)
    .await?
    .last_insert_rowid();

    Ok(id)
}

#[tracing::instrument(skip(pool))]
pub async fn get_questions_by_quiz(
    pool: &SqlitePool,
    quiz_id: &str,
) -> Result<Vec<Question>, DbError> {
    let questions = sqlx::query_as::<_, Question>(
        r#"
        SELECT id, quiz_id, question, answer FROM questions
        WHERE questions.quiz_id = ?1
        ORDER BY id
        "#,
    )
    .bind(quiz_id)
    .fetch_all(pool)
    .await?;
    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    #[tokio::test]
    async fn added_question_is_returned_for_its_quiz() {
        let pool = test_pool().await;

        let id = add_question(&pool, "Q1", "2+2?", "4").await.unwrap();
        let questions = get_questions_by_quiz(&pool, "Q1").await.unwrap();

        assert_eq!(
            questions,
            vec![Question {
                id,
                quiz_id: "Q1".into(),
                question: "2+2?".into(),
                answer: "4".into(),
            }]
        );
    }

    #[tokio::test]
    async fn questions_keep_insertion_order_and_quiz_boundaries() {
        let pool = test_pool().await;
        add_question(&pool, "math", "1+1?", "2").await.unwrap();
        add_question(&pool, "geo", "Capital of France?", "Paris").await.unwrap();
        add_question(&pool, "math", "3*3?", "9").await.unwrap();

        let math: Vec<String> = get_questions_by_quiz(&pool, "math")
            .await
            .unwrap()
            .into_iter()
            .map(|q| q.question)
            .collect();

        assert_eq!(math, vec!["1+1?", "3*3?"]);
        assert!(get_questions_by_quiz(&pool, "history").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn duplicate_questions_are_accepted() {
        let pool = test_pool().await;
        add_question(&pool, "Q1", "2+2?", "4").await.unwrap();
        add_question(&pool, "Q1", "2+2?", "4").await.unwrap();

        assert_eq!(get_questions_by_quiz(&pool, "Q1").await.unwrap().len(), 2);
    }
}
