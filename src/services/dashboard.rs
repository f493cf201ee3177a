//! Dashboard coordinator.
//!
//! Owns the in-memory snapshot of all three collections. Every load goes
//! through [`DashboardService::refresh`]; mutations go to the record store
//! and then invalidate the snapshot, so the next render refetches
//! everything.

use std::sync::Arc;

use studio_models::{Course, Instructor, Participant, Record, RecordFields, RecordId};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::error::{Error, Result};
use crate::services::RecordClient;

/// All three collections as of one successful load.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub courses: Vec<Record<Course>>,
    pub instructors: Vec<Record<Instructor>>,
    pub participants: Vec<Record<Participant>>,
}

#[derive(Clone)]
pub struct DashboardService {
    records: Arc<RecordClient>,
    snapshot: Arc<RwLock<Option<Arc<Snapshot>>>>,
}

impl DashboardService {
    pub fn new(records: Arc<RecordClient>) -> Self {
        Self {
            records,
            snapshot: Arc::new(RwLock::new(None)),
        }
    }

    /// Fetch all three collections concurrently and replace the snapshot.
    ///
    /// The first failure fails the whole load; the previous snapshot is
    /// left untouched in that case.
    pub async fn refresh(&self) -> Result<Arc<Snapshot>> {
        let courses = self.spawn_list::<Course>();
        let instructors = self.spawn_list::<Instructor>();
        let participants = self.spawn_list::<Participant>();

        let loaded = tokio::try_join!(joined(courses), joined(instructors), joined(participants));

        let (courses, instructors, participants) = match loaded {
            Ok(collections) => collections,
            Err(err) => {
                error!(error = %err, "Failed to load dashboard data");
                return Err(err);
            }
        };

        info!(
            courses = courses.len(),
            instructors = instructors.len(),
            participants = participants.len(),
            "Dashboard data loaded"
        );

        let snapshot = Arc::new(Snapshot {
            courses,
            instructors,
            participants,
        });
        *self.snapshot.write().await = Some(snapshot.clone());
        Ok(snapshot)
    }

    /// The current snapshot, loading it first when there is none.
    pub async fn current(&self) -> Result<Arc<Snapshot>> {
        if let Some(snapshot) = self.snapshot.read().await.as_ref() {
            return Ok(snapshot.clone());
        }
        self.refresh().await
    }

    /// Drop the snapshot so the next read refetches.
    pub async fn invalidate(&self) {
        *self.snapshot.write().await = None;
    }

    /// Fetch one record straight from the store. A 404 from the store is
    /// [`Error::NotFound`].
    pub async fn get<F: RecordFields>(&self, id: &RecordId) -> Result<Record<F>> {
        match self.records.get::<F>(id).await {
            Err(Error::Status { status: 404, .. }) => {
                Err(Error::NotFound(format!("{} {}", F::COLLECTION, id)))
            }
            result => result,
        }
    }

    /// Create or update a record, then invalidate the snapshot.
    pub async fn save<F: RecordFields>(
        &self,
        id: Option<&RecordId>,
        fields: &F,
    ) -> Result<Record<F>> {
        let record = self.records.save(id, fields).await?;
        debug!(collection = %F::COLLECTION, id = %record.id, "Record saved");
        self.invalidate().await;
        Ok(record)
    }

    /// Delete a record, then invalidate the snapshot.
    pub async fn delete<F: RecordFields>(&self, id: &RecordId) -> Result<()> {
        self.records.delete::<F>(id).await?;
        debug!(collection = %F::COLLECTION, %id, "Record deleted");
        self.invalidate().await;
        Ok(())
    }

    fn spawn_list<F: RecordFields>(&self) -> JoinHandle<Result<Vec<Record<F>>>> {
        let records = self.records.clone();
        tokio::spawn(async move { records.list::<F>().await })
    }
}

/// Await a spawned fetch; a task that died without a result is an unknown
/// error.
async fn joined<T>(handle: JoinHandle<Result<T>>) -> Result<T> {
    handle.await.map_err(|_| Error::Unknown)?
}
