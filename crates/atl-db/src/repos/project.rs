//! Project repository.

use atl_core::entities::Project;
use atl_core::errors::CoreError;
use atl_core::ids::PREFIX_PROJECT;
use chrono::Utc;

use crate::error::DatabaseError;
use crate::helpers::parse_datetime;
use crate::service::AtlService;

const SELECT_COLS: &str = "id, name, created_at";

fn row_to_project(row: &libsql::Row) -> Result<Project, DatabaseError> {
    Ok(Project {
        id: row.get(0)?,
        name: row.get(1)?,
        created_at: parse_datetime(&row.get::<String>(2)?)?,
    })
}

pub(crate) async fn load_projects(conn: &libsql::Connection) -> Result<Vec<Project>, DatabaseError> {
    let mut rows = conn
        .query(&format!("SELECT {SELECT_COLS} FROM projects ORDER BY name, id"), ())
        .await?;
    let mut projects = Vec::new();
    while let Some(row) = rows.next().await? {
        projects.push(row_to_project(&row)?);
    }
    Ok(projects)
}

impl AtlService {
    pub async fn create_project(&self, name: &str) -> Result<Project, DatabaseError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::Validation("project name is empty".into()).into());
        }
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_PROJECT).await?;
        self.db()
            .conn()
            .execute(
                &format!("INSERT INTO projects ({SELECT_COLS}) VALUES (?1, ?2, ?3)"),
                libsql::params![id.as_str(), name, now.to_rfc3339()],
            )
            .await?;
        tracing::debug!(%id, name, "created project");
        Ok(Project {
            id,
            name: name.to_string(),
            created_at: now,
        })
    }

    pub async fn get_project(&self, id: &str) -> Result<Project, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM projects WHERE id = ?1"), [id])
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("project", id))?;
        row_to_project(&row)
    }

    pub async fn list_projects(&self) -> Result<Vec<Project>, DatabaseError> {
        load_projects(self.db().conn()).await
    }
}
