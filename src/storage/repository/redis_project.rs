use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use deadpool_redis::redis::{pipe, AsyncCommands};
use tracing::{debug, warn};

use crate::redis::RedisPool;
use crate::storage::{
    error::{StorageError, StorageResult},
    keys::{moods_key, project_key, PROJECTS_KEY},
    records::{moods_from_fields, MoodRecord, MoodsByWeek, ProjectRecord, StoredProject},
};

use super::ProjectRepository;

type Fields = HashMap<String, String>;

/// Redis 專案儲存庫實現
pub struct RedisProjectRepository<P: RedisPool> {
    pool: P,
}

impl<P: RedisPool> RedisProjectRepository<P> {
    pub fn new(pool: P) -> Self {
        Self { pool }
    }

    fn to_stored(id: &str, project: &Fields, moods: &Fields) -> StorageResult<StoredProject> {
        Ok(StoredProject {
            id: id.to_string(),
            project: ProjectRecord::from_fields(&project_key(id), project)?,
            moods: moods_from_fields(&moods_key(id), moods)?,
        })
    }
}

#[async_trait]
impl<P: RedisPool> ProjectRepository for RedisProjectRepository<P> {
    async fn read_projects(&self) -> StorageResult<Vec<StoredProject>> {
        let mut conn = self.pool.get_conn().await?;

        let ids: Vec<String> = conn.zrange(PROJECTS_KEY, 0, -1).await?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut pipeline = pipe();
        for id in &ids {
            pipeline.hgetall(project_key(id)).hgetall(moods_key(id));
        }
        let hashes: Vec<Fields> = pipeline.query_async(&mut conn).await?;

        let mut projects = Vec::with_capacity(ids.len());
        for (id, pair) in ids.iter().zip(hashes.chunks(2)) {
            let [project, moods] = pair else {
                return Err(StorageError::Corrupt {
                    key: PROJECTS_KEY.to_string(),
                    reason: "管線回應數量不符".to_string(),
                });
            };
            if project.is_empty() {
                warn!("專案 {} 在列表中但沒有欄位，略過", id);
                continue;
            }
            projects.push(Self::to_stored(id, project, moods)?);
        }

        debug!("讀取 {} 個專案", projects.len());
        Ok(projects)
    }

    async fn read_project(&self, id: &str) -> StorageResult<StoredProject> {
        let mut conn = self.pool.get_conn().await?;

        let (project, moods): (Fields, Fields) = pipe()
            .hgetall(project_key(id))
            .hgetall(moods_key(id))
            .query_async(&mut conn)
            .await?;

        if project.is_empty() {
            return Err(StorageError::NotFound(id.to_string()));
        }
        Self::to_stored(id, &project, &moods)
    }

    async fn write_project(
        &self,
        id: &str,
        project: &ProjectRecord,
        moods: &MoodsByWeek,
    ) -> StorageResult<()> {
        let mood_fields = moods
            .iter()
            .map(|(week, mood)| Ok((week.clone(), mood.to_json()?)))
            .collect::<StorageResult<Vec<(String, String)>>>()?;

        let project_fields = project.to_fields()?;
        let project_key = project_key(id);
        let moods_key = moods_key(id);

        let mut pipeline = pipe();
        pipeline
            .atomic()
            // NX 保留首次建立時間，覆寫不改變列表順序
            .cmd("ZADD")
            .arg(PROJECTS_KEY)
            .arg("NX")
            .arg(Utc::now().timestamp_millis())
            .arg(id)
            .ignore()
            .del(&project_key)
            .ignore()
            .hset_multiple(&project_key, &project_fields[..])
            .ignore()
            .del(&moods_key)
            .ignore();
        if !mood_fields.is_empty() {
            pipeline.hset_multiple(&moods_key, &mood_fields[..]).ignore();
        }

        let mut conn = self.pool.get_conn().await?;
        pipeline.query_async::<()>(&mut conn).await?;

        debug!("寫入專案 {}，心情 {} 筆", id, mood_fields.len());
        Ok(())
    }

    async fn delete_project(&self, id: &str) -> StorageResult<()> {
        let mut conn = self.pool.get_conn().await?;

        pipe()
            .atomic()
            .zrem(PROJECTS_KEY, id)
            .ignore()
            .del(vec![project_key(id), moods_key(id)])
            .ignore()
            .query_async::<()>(&mut conn)
            .await?;

        debug!("刪除專案 {}", id);
        Ok(())
    }

    async fn write_mood(&self, id: &str, week: &str, mood: &MoodRecord) -> StorageResult<()> {
        let raw = mood.to_json()?;
        let mut conn = self.pool.get_conn().await?;

        let _: () = conn.hset(moods_key(id), week, raw).await?;

        debug!("寫入專案 {} 第 {} 週心情", id, week);
        Ok(())
    }

    async fn check_health(&self) -> bool {
        self.pool.check_health().await
    }
}
