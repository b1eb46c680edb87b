use sqlx::SqlitePool;

use crate::db::DbError;

/// One recorded attempt of a user at a quiz.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct QuizResult {
    pub id: i64,
    pub user_id: i64,
    pub quiz_id: String,
    pub score: i64,
    pub date_taken: String,
}

#[tracing::instrument(skip(pool))]
pub async fn record_result(
    pool: &SqlitePool,
    user_id: i64,
    quiz_id: &str,
    score: i64,
    date_taken: &str,
) -> Result<i64, DbError> {
    let mut conn = pool.acquire().await?;

    let id = sqlx::query(
        r#"
        INSERT INTO results (user_id, quiz_id, score, date_taken) VALUES (?1, ?2, ?3, ?4)
        "#,
    )
    .bind(user_id)
    .bind(quiz_id)
    .bind(score)
    .bind(date_taken)
    .execute(&mut *conn)
    .await
    .map_err(|err| {
        if is_foreign_key_violation(&err) {
            DbError::UnknownUser(user_id)
        } else {
            DbError::Database(err)
        }
    })?
    .last_insert_rowid();

    Ok(id)
}

#[tracing::instrument(skip(pool))]
pub async fn get_results_by_quiz(
    pool: &SqlitePool,
    quiz_id: &str,
) -> Result<Vec<QuizResult>, DbError> {
    let results = sqlx::query_as::<_, QuizResult>(
        r#"
        SELECT id, user_id, quiz_id, score, date_taken FROM results
        WHERE results.quiz_id = ?1
        ORDER BY id
        "#,
    )
    .bind(quiz_id)
    .fetch_all(pool)
    .await?;
    Ok(results)
}

fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    err.as_database_error().is_some_and(|db_err| db_err.is_foreign_key_violation())
}
