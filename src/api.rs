//! Remote API Bindings
//!
//! The four operations the remote task collection exposes. Network
//! failures, non-2xx statuses and malformed bodies all collapse into a
//! single `Err(String)` outcome; callers log and move on.

use reqwest::Client;

use crate::models::{Created, NewTask, Task, TaskId};

/// Fixed base location of the remote collection resource
pub const API_BASE: &str = "http://127.0.0.1:8000";

/// The remote collection, seen as four request/response round trips
pub trait TodoApi {
    async fn list(&self) -> Result<Vec<Task>, String>;
    async fn create(&self, task: &NewTask) -> Result<Created, String>;
    async fn update(&self, task: &Task) -> Result<(), String>;
    async fn delete(&self, id: TaskId) -> Result<(), String>;
}

/// HTTP implementation against `API_BASE`
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpApi;

impl TodoApi for HttpApi {
    async fn list(&self) -> Result<Vec<Task>, String> {
        let resp = Client::new()
            .get(format!("{API_BASE}/"))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        resp.error_for_status()
            .map_err(|e| e.to_string())?
            .json::<Vec<Task>>()
            .await
            .map_err(|e| e.to_string())
    }

    async fn create(&self, task: &NewTask) -> Result<Created, String> {
        let resp = Client::new()
            .post(format!("{API_BASE}/"))
            .json(task)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        resp.error_for_status()
            .map_err(|e| e.to_string())?
            .json::<Created>()
            .await
            .map_err(|e| e.to_string())
    }

    async fn update(&self, task: &Task) -> Result<(), String> {
        let resp = Client::new()
            .put(format!("{API_BASE}/{}", task.id))
            .json(task)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        resp.error_for_status().map_err(|e| e.to_string())?;
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> Result<(), String> {
        let resp = Client::new()
            .delete(format!("{API_BASE}/{id}"))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        resp.error_for_status().map_err(|e| e.to_string())?;
        Ok(())
    }
}
