//! User repository: CRUD over the `users` table.

use chrono::Utc;

use roster_core::entities::{NewUser, User};

use crate::error::DatabaseError;
use crate::helpers::{classify_write_error, parse_datetime};
use crate::service::RosterService;
use crate::updates::user::UserUpdate;

const USER_COLUMNS: &str = "id, email, first_name, last_name, created_at, updated_at";

fn row_to_user(row: &libsql::Row) -> Result<User, DatabaseError> {
    Ok(User {
        id: row.get::<i64>(0)?,
        email: row.get::<String>(1)?,
        first_name: row.get::<String>(2)?,
        last_name: row.get::<String>(3)?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
        updated_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}

impl RosterService {
    /// Insert a user and return the stored row.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Conflict` when the email is already taken.
    pub async fn create_user(&self, new_user: &NewUser) -> Result<User, DatabaseError> {
        let now = Utc::now().to_rfc3339();
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "INSERT INTO users (email, first_name, last_name, created_at, updated_at)
                     VALUES (?1, ?2, ?3, ?4, ?5)
                     RETURNING {USER_COLUMNS}"
                ),
                libsql::params![
                    new_user.email.as_str(),
                    new_user.first_name.as_str(),
                    new_user.last_name.as_str(),
                    now.as_str(),
                    now.as_str()
                ],
            )
            .await
            .map_err(classify_write_error)?;
        let row = rows
            .next()
            .await
            .map_err(classify_write_error)?
            .ok_or(DatabaseError::NoResult)?;
        let user = row_to_user(&row)?;
        tracing::debug!(id = user.id, "user created");
        Ok(user)
    }

    pub async fn get_user(&self, id: i64) -> Result<Option<User>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?1"),
                [id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    /// All users, ordered by id ascending.
    pub async fn list_users(&self) -> Result<Vec<User>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {USER_COLUMNS} FROM users ORDER BY id ASC"),
                (),
            )
            .await?;
        let mut users = Vec::new();
        while let Some(row) = rows.next().await? {
            users.push(row_to_user(&row)?);
        }
        Ok(users)
    }

    /// Apply a partial update. Returns `None` when no user has that id.
    ///
    /// An empty update returns the current row untouched.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Conflict` when the new email is already taken.
    pub async fn update_user(
        &self,
        id: i64,
        update: &UserUpdate,
    ) -> Result<Option<User>, DatabaseError> {
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1;

        if let Some(ref email) = update.email {
            sets.push(format!("email = ?{idx}"));
            params.push(email.as_str().into());
            idx += 1;
        }
        if let Some(ref first_name) = update.first_name {
            sets.push(format!("first_name = ?{idx}"));
            params.push(first_name.as_str().into());
            idx += 1;
        }
        if let Some(ref last_name) = update.last_name {
            sets.push(format!("last_name = ?{idx}"));
            params.push(last_name.as_str().into());
            idx += 1;
        }

        if sets.is_empty() {
            return self.get_user(id).await;
        }

        sets.push(format!("updated_at = ?{idx}"));
        params.push(Utc::now().to_rfc3339().into());
        idx += 1;

        params.push(id.into());
        let sql = format!("UPDATE users SET {} WHERE id = ?{idx}", sets.join(", "));

        let changed = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await
            .map_err(classify_write_error)?;
        if changed == 0 {
            return Ok(None);
        }

        tracing::debug!(id, "user updated");
        self.get_user(id).await
    }

    /// Returns `true` when a row was removed.
    pub async fn delete_user(&self, id: i64) -> Result<bool, DatabaseError> {
        let changed = self
            .db()
            .conn()
            .execute("DELETE FROM users WHERE id = ?1", [id])
            .await?;
        if changed > 0 {
            tracing::debug!(id, "user deleted");
        }
        Ok(changed > 0)
    }

    pub async fn count_users(&self) -> Result<u64, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query("SELECT COUNT(*) FROM users", ())
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let count = row.get::<i64>(0)?;
        u64::try_from(count).map_err(|e| DatabaseError::Query(format!("negative count: {e}")))
    }
}
