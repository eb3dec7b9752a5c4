use crate::error::{Error, Result};
use crate::models::activity::Activity;
use crate::models::candidate::Candidate;
use crate::models::cv::{Cv, NewCv};
use crate::models::hiring_manager::HiringManager;
use crate::models::job::{Job, NewJob};
use crate::models::project::Project;
use crate::models::response::{
    CandidateBulkResponse, CommandResponse, MutationResponse, ProjectBulkResponse,
};
use crate::models::status::{AnalyticsSummary, SystemStatus};
use bytes::Bytes;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value as JsonValue};
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Typed client for the recruitment tracker REST API. One method per
/// consumed endpoint; the wire contracts are owned by the server.
#[derive(Clone)]
pub struct ApiClient {
    base: Url,
    http: Client,
}

impl ApiClient {
    pub fn new(base: Url, timeout: Duration) -> Self {
        let http = Client::builder().timeout(timeout).build().unwrap();
        Self { base, http }
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base
            .join(path)
            .map_err(|e| Error::Config(format!("Invalid endpoint {}: {}", path, e)))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let resp = self.http.get(self.endpoint(path)?).send().await?;
        if !resp.status().is_success() {
            return Err(Error::Status {
                status: resp.status(),
                path: path.to_string(),
            });
        }
        Ok(resp.json::<T>().await?)
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self.http.post(self.endpoint(path)?).json(body).send().await?;
        if !resp.status().is_success() {
            return Err(Error::Status {
                status: resp.status(),
                path: path.to_string(),
            });
        }
        Ok(resp.json::<T>().await?)
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let resp = self.http.post(self.endpoint(path)?).send().await?;
        if !resp.status().is_success() {
            return Err(Error::Status {
                status: resp.status(),
                path: path.to_string(),
            });
        }
        Ok(resp.json::<T>().await?)
    }

    // System

    pub async fn system_status(&self) -> Result<SystemStatus> {
        self.get_json("/api/system/status").await
    }

    pub async fn start_monitoring(&self) -> Result<MutationResponse> {
        self.post_empty("/api/system/start_monitoring").await
    }

    pub async fn stop_monitoring(&self) -> Result<MutationResponse> {
        self.post_empty("/api/system/stop_monitoring").await
    }

    /// Activity feed. The payload must be a JSON array; anything else is
    /// reported as a shape error so the caller can keep its stale render.
    pub async fn email_activities(&self) -> Result<Vec<Activity>> {
        let value: JsonValue = self.get_json("/api/email/activities").await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn analytics_summary(&self) -> Result<AnalyticsSummary> {
        self.get_json("/api/analytics/summary").await
    }

    // Jobs

    pub async fn list_jobs(&self) -> Result<Vec<Job>> {
        self.get_json("/api/jobs").await
    }

    pub async fn create_job(&self, job: &NewJob) -> Result<MutationResponse> {
        self.post_json("/api/jobs", job).await
    }

    // CVs

    pub async fn list_cvs(&self) -> Result<Vec<Cv>> {
        self.get_json("/api/cvs").await
    }

    pub async fn create_cv(&self, cv: &NewCv) -> Result<MutationResponse> {
        self.post_json("/api/cvs", cv).await
    }

    // Hiring managers

    pub async fn list_hiring_managers(&self) -> Result<Vec<HiringManager>> {
        self.get_json("/api/hiring_managers").await
    }

    pub async fn create_hiring_manager(&self, hm: &HiringManager) -> Result<MutationResponse> {
        self.post_json("/api/hiring_managers", hm).await
    }

    // Projects. Single create posts an object, bulk create posts a bare
    // array of names; the server distinguishes by shape.

    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        self.get_json("/api/projects").await
    }

    pub async fn create_project(&self, project: &Project) -> Result<MutationResponse> {
        self.post_json("/api/projects", project).await
    }

    pub async fn create_projects_bulk(&self, names: &[String]) -> Result<ProjectBulkResponse> {
        self.post_json("/api/projects", names).await
    }

    // Candidates

    pub async fn list_candidates(&self) -> Result<Vec<Candidate>> {
        self.get_json("/api/candidates").await
    }

    pub async fn create_candidate(&self, candidate: &Candidate) -> Result<MutationResponse> {
        self.post_json("/api/candidates", candidate).await
    }

    pub async fn create_candidates_bulk(
        &self,
        candidates: &[Candidate],
    ) -> Result<CandidateBulkResponse> {
        self.post_json("/api/candidates/bulk", candidates).await
    }

    // Assistant

    pub async fn ai_command(&self, command: &str) -> Result<CommandResponse> {
        self.post_json("/api/ai/command", &json!({ "command": command }))
            .await
    }

    pub async fn save_ai_key(&self, api_key: &str) -> Result<MutationResponse> {
        self.post_json("/api/config/ai_key", &json!({ "api_key": api_key }))
            .await
    }

    /// Download a server-generated export into `dir` and return the written
    /// path.
    pub async fn export(&self, kind: &str, dir: &Path) -> Result<PathBuf> {
        let path = format!("/api/export/{}", kind);
        let resp = self.http.get(self.endpoint(&path)?).send().await?;
        if !resp.status().is_success() {
            return Err(Error::Status {
                status: resp.status(),
                path,
            });
        }
        let body: Bytes = resp.bytes().await?;
        let target = dir.join(format!("{}_export.xlsx", kind));
        tokio::fs::write(&target, &body).await?;
        Ok(target)
    }
}
