use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::storage::{
    error::{StorageError, StorageResult},
    records::{MoodRecord, MoodsByWeek, ProjectRecord, StoredProject},
};

use super::ProjectRepository;

#[derive(Debug, Default)]
struct MemoryState {
    /// 建立順序
    order: Vec<String>,
    projects: HashMap<String, ProjectRecord>,
    moods: HashMap<String, MoodsByWeek>,
}

/// 進程內專案儲存庫
///
/// 與 Redis 實現的鍵佈局一致：心情與專案分開存放，
/// 對不存在的專案寫入心情也會保留，直到該專案被刪除。
#[derive(Debug, Default)]
pub struct InMemoryProjectRepository {
    state: RwLock<MemoryState>,
}

impl InMemoryProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn read_projects(&self) -> StorageResult<Vec<StoredProject>> {
        let state = self.state.read().await;

        Ok(state
            .order
            .iter()
            .filter_map(|id| {
                let project = state.projects.get(id)?;
                Some(StoredProject {
                    id: id.clone(),
                    project: project.clone(),
                    moods: state.moods.get(id).cloned().unwrap_or_default(),
                })
            })
            .collect())
    }

    async fn read_project(&self, id: &str) -> StorageResult<StoredProject> {
        let state = self.state.read().await;

        let project = state
            .projects
            .get(id)
            .ok_or_else(|| StorageError::NotFound(id.to_string()))?;
        Ok(StoredProject {
            id: id.to_string(),
            project: project.clone(),
            moods: state.moods.get(id).cloned().unwrap_or_default(),
        })
    }

    async fn write_project(
        &self,
        id: &str,
        project: &ProjectRecord,
        moods: &MoodsByWeek,
    ) -> StorageResult<()> {
        let mut state = self.state.write().await;

        if !state.order.iter().any(|existing| existing == id) {
            state.order.push(id.to_string());
        }
        state.projects.insert(id.to_string(), project.clone());
        if moods.is_empty() {
            state.moods.remove(id);
        } else {
            state.moods.insert(id.to_string(), moods.clone());
        }
        Ok(())
    }

    async fn delete_project(&self, id: &str) -> StorageResult<()> {
        let mut state = self.state.write().await;

        state.order.retain(|existing| existing != id);
        state.projects.remove(id);
        state.moods.remove(id);
        Ok(())
    }

    async fn write_mood(&self, id: &str, week: &str, mood: &MoodRecord) -> StorageResult<()> {
        let mut state = self.state.write().await;

        state
            .moods
            .entry(id.to_string())
            .or_default()
            .insert(week.to_string(), mood.clone());
        Ok(())
    }

    async fn check_health(&self) -> bool {
        true
    }
}
