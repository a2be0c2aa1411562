use async_trait::async_trait;
use sqlx::FromRow;
use sqlx::MySqlPool;

use crate::domain::session::models::CredentialRecord;
use crate::domain::session::models::UserId;
use crate::domain::session::ports::CredentialRepository;
use crate::session::errors::SessionError;

pub struct MySqlCredentialRepository {
    pool: MySqlPool,
}

impl MySqlCredentialRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CredentialRow {
    id: i64,
    email: String,
    password: String,
    role: String,
    firstname: Option<String>,
    name: Option<String>,
}

impl From<CredentialRow> for CredentialRecord {
    fn from(row: CredentialRow) -> Self {
        CredentialRecord {
            id: UserId(row.id),
            email: row.email,
            password_hash: row.password,
            role: row.role,
            firstname: row.firstname,
            name: row.name,
        }
    }
}

#[async_trait]
impl CredentialRepository for MySqlCredentialRepository {
    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<CredentialRecord>, SessionError> {
        // The connection goes back to the pool when `connection` drops, on every path
        let mut connection = self.pool.acquire().await?;

        let row = sqlx::query_as::<_, CredentialRow>(
            r#"
            SELECT id, email, password, role, firstname, name
            FROM `USER`
            WHERE email = ?
            LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(&mut *connection)
        .await?;

        Ok(row.map(CredentialRecord::from))
    }
}
