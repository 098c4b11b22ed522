//! Profile repository.

use atl_core::entities::Profile;
use atl_core::errors::CoreError;
use atl_core::ids::PREFIX_PROFILE;

use crate::error::DatabaseError;
use crate::service::AtlService;

fn row_to_profile(row: &libsql::Row) -> Result<Profile, DatabaseError> {
    Ok(Profile {
        id: row.get(0)?,
        display_name: row.get(1)?,
    })
}

pub(crate) async fn load_profiles(conn: &libsql::Connection) -> Result<Vec<Profile>, DatabaseError> {
    let mut rows = conn
        .query("SELECT id, display_name FROM profiles ORDER BY display_name, id", ())
        .await?;
    let mut profiles = Vec::new();
    while let Some(row) = rows.next().await? {
        profiles.push(row_to_profile(&row)?);
    }
    Ok(profiles)
}

impl AtlService {
    /// Add a person. A generated `usr-` id is used when `id` is `None`.
    pub async fn add_profile(
        &self,
        display_name: &str,
        id: Option<&str>,
    ) -> Result<Profile, DatabaseError> {
        let display_name = display_name.trim();
        if display_name.is_empty() {
            return Err(CoreError::Validation("display name is empty".into()).into());
        }
        let id = match id.map(str::trim) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => self.db().generate_id(PREFIX_PROFILE).await?,
        };
        self.db()
            .conn()
            .execute(
                "INSERT INTO profiles (id, display_name) VALUES (?1, ?2)",
                libsql::params![id.as_str(), display_name],
            )
            .await?;
        tracing::debug!(%id, display_name, "added profile");
        Ok(Profile {
            id,
            display_name: display_name.to_string(),
        })
    }

    pub async fn get_profile(&self, id: &str) -> Result<Profile, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query("SELECT id, display_name FROM profiles WHERE id = ?1", [id])
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("profile", id))?;
        row_to_profile(&row)
    }

    pub async fn list_profiles(&self) -> Result<Vec<Profile>, DatabaseError> {
        load_profiles(self.db().conn()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::test_service;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn add_profile_with_generated_id() {
        let svc = test_service().await;
        let profile = svc.add_profile("Marta Ruiz", None).await.unwrap();
        assert!(profile.id.starts_with("usr-"));
        assert_eq!(svc.get_profile(&profile.id).await.unwrap(), profile);
    }

    #[tokio::test]
    async fn add_profile_with_explicit_id() {
        let svc = test_service().await;
        let profile = svc.add_profile("Ines", Some("ines")).await.unwrap();
        assert_eq!(profile.id, "ines");

        let duplicate = svc.add_profile("Ines again", Some("ines")).await;
        assert!(duplicate.is_err());
    }

    #[tokio::test]
    async fn blank_display_name_rejected() {
        let svc = test_service().await;
        let blank = svc.add_profile("   ", None).await;
        assert!(matches!(blank, Err(DatabaseError::Core(CoreError::Validation(_)))));
        assert!(svc.list_profiles().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_profiles_sorted_by_name() {
        let svc = test_service().await;
        svc.add_profile("Zoe", None).await.unwrap();
        svc.add_profile("Ada", None).await.unwrap();
        let names: Vec<String> = svc
            .list_profiles()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.display_name)
            .collect();
        assert_eq!(names, vec!["Ada", "Zoe"]);
    }
}
