use sqlx::SqlitePool;

use super::DbError;

// no UNIQUE on username, uniqueness is checked at signup
const CREATE_USERS: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL,
    password TEXT NOT NULL,
    is_admin BOOLEAN NOT NULL
)
"#;

const CREATE_QUESTIONS: &str = r#"
CREATE TABLE IF NOT EXISTS questions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    quiz_id TEXT NOT NULL,
    question TEXT NOT NULL,
    answer TEXT NOT NULL
)
"#;

const CREATE_RESULTS: &str = r#"
CREATE TABLE IF NOT EXISTS results (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL,
    quiz_id TEXT NOT NULL,
    score INTEGER NOT NULL,
    date_taken TEXT NOT NULL,
    FOREIGN KEY(user_id) REFERENCES users(id)
)
"#;

pub async fn initialize_schema(pool: &SqlitePool) -> Result<(), DbError> {
    for statement in [CREATE_USERS, CREATE_QUESTIONS, CREATE_RESULTS] {
        sqlx::query(statement).execute(pool).await?;
    }
    tracing::debug!("Schema is ready");
    Ok(())
}
