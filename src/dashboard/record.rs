use crate::dashboard::{Fetcher, Project};
use crate::facts::ProviderResult;
use crate::facts::ci::CiData;
use crate::facts::gems::GemData;
use crate::facts::hosting::HostingData;
use serde::Serialize;
use tokio::sync::Mutex;

/// The latest metrics fetched for one project.
///
/// Each slot is `None` until assigned. Once `fetched` is set, every slot holds an outcome, possibly
/// [`ProviderResult::Unavailable`] or [`ProviderResult::Error`].
#[derive(Debug, Clone, Default)]
pub struct MetricsRecord {
    pub gem: Option<ProviderResult<GemData>>,
    pub travis: Option<ProviderResult<CiData>>,
    pub github: Option<ProviderResult<HostingData>>,
    fetched: bool,
}

impl MetricsRecord {
    #[must_use]
    pub const fn is_fetched(&self) -> bool {
        self.fetched
    }

    /// Whether all three slots have been assigned.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.gem.is_some() && self.travis.is_some() && self.github.is_some()
    }

    /// Mark the record as fetched. Only meaningful once every slot is assigned.
    pub fn mark_fetched(&mut self) {
        debug_assert!(self.is_complete(), "a record is only fetched once every slot is assigned");
        self.fetched = self.is_complete();
    }

    /// Empty every slot and forget the record was ever fetched.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Where a record is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordState {
    /// Not fetched since start-up or since the last clear. Slots may be partially filled.
    Empty,

    /// A fetch is in flight.
    Fetching,

    /// Every slot is assigned.
    Populated,
}

/// Point-in-time copy of a project and its metrics, in the shape handed to the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectSnapshot {
    #[serde(flatten)]
    pub project: Project,

    pub gem: Option<ProviderResult<GemData>>,
    pub travis: Option<ProviderResult<CiData>>,
    pub github: Option<ProviderResult<HostingData>>,

    #[serde(skip)]
    pub state: RecordState,
}

impl ProjectSnapshot {
    fn new(project: &Project, record: &MetricsRecord, state: RecordState) -> Self {
        Self {
            project: project.clone(),
            gem: record.gem.clone(),
            travis: record.travis.clone(),
            github: record.github.clone(),
            state,
        }
    }

    #[must_use]
    pub fn is_fetched(&self) -> bool {
        self.state == RecordState::Populated
    }
}

/// A project together with its cached record.
///
/// The gate admits one fetcher or clearer at a time, so a clear never lands in the middle of a fetch and
/// concurrent lookups of the same project fetch once. The record itself sits behind a separate lock that is only
/// held for copies, so readers never wait for a fetch.
#[derive(Debug)]
pub struct ProjectEntry {
    project: Project,
    gate: Mutex<()>,
    record: Mutex<MetricsRecord>,
}

impl ProjectEntry {
    #[must_use]
    pub fn new(project: Project) -> Self {
        Self {
            project,
            gate: Mutex::new(()),
            record: Mutex::new(MetricsRecord::default()),
        }
    }

    #[must_use]
    pub const fn project(&self) -> &Project {
        &self.project
    }

    /// Fetch the record if it isn't populated, then return a snapshot taken before anyone else can clear it.
    pub async fn fetched_snapshot(&self, fetcher: &Fetcher) -> ProjectSnapshot {
        let _gate = self.gate.lock().await;

        let mut record = self.record.lock().await.clone();
        if !record.is_fetched() {
            fetcher.fetch(&self.project, &mut record).await;
            self.record.lock().await.clone_from(&record);
        }

        ProjectSnapshot::new(&self.project, &record, RecordState::Populated)
    }

    /// Snapshot of whatever is cached right now, without fetching.
    pub async fn snapshot(&self) -> ProjectSnapshot {
        let fetching = self.gate.try_lock().is_err();
        let record = self.record.lock().await;

        let state = if fetching {
            RecordState::Fetching
        } else if record.is_fetched() {
            RecordState::Populated
        } else {
            RecordState::Empty
        };

        ProjectSnapshot::new(&self.project, &record, state)
    }

    /// Clear the record, waiting for any in-flight fetch to finish first.
    pub async fn clear(&self) {
        let _gate = self.gate.lock().await;
        self.record.lock().await.clear();
    }
}
