//! Shared test doubles for runtime integration tests.
#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use tokio::sync::{Notify, Semaphore};

use game_core::{GameCandidate, GameResult, RecordId, WinningLine, WinningParty};
use runtime::repository::Result;
use runtime::{
    Clock, GAME_HISTORY_KEY, HistoryRuntime, IdGenerator, InMemoryKeyValueStore, KeyValueStore,
    RepositoryError,
};

/// In-memory store that counts calls and fails on demand.
#[derive(Default)]
pub struct FaultyStore {
    inner: InMemoryKeyValueStore,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    reads: AtomicUsize,
    writes: AtomicUsize,
}

impl FaultyStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Store pre-populated with a raw history document.
    pub fn with_raw(raw: &str) -> Arc<Self> {
        Arc::new(Self {
            inner: InMemoryKeyValueStore::with_item(GAME_HISTORY_KEY, raw),
            ..Self::default()
        })
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Peek at the stored document without counting a read.
    pub async fn raw(&self) -> Option<String> {
        self.inner.get_item(GAME_HISTORY_KEY).await.unwrap()
    }
}

#[async_trait]
impl KeyValueStore for FaultyStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(RepositoryError::Unavailable("read rejected".into()));
        }
        self.inner.get_item(key).await
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(RepositoryError::Unavailable("write rejected".into()));
        }
        self.inner.set_item(key, value).await
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        self.inner.remove_item(key).await
    }
}

/// Store whose reads block until the test releases them.
pub struct GatedStore {
    inner: InMemoryKeyValueStore,
    gate: Semaphore,
    entered: Notify,
}

impl GatedStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            inner: InMemoryKeyValueStore::new(),
            gate: Semaphore::new(0),
            entered: Notify::new(),
        })
    }

    /// Wait until a read is blocked on the gate.
    pub async fn wait_for_read(&self) {
        self.entered.notified().await;
    }

    /// Let `n` blocked or future reads through.
    pub fn release(&self, n: usize) {
        self.gate.add_permits(n);
    }
}

#[async_trait]
impl KeyValueStore for GatedStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.entered.notify_one();
        let permit = self
            .gate
            .acquire()
            .await
            .map_err(|_| RepositoryError::Unavailable("gate closed".into()))?;
        permit.forget();
        self.inner.get_item(key).await
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.inner.set_item(key, value).await
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        self.inner.remove_item(key).await
    }
}

/// Clock frozen at a known instant.
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn at_noon() -> Arc<Self> {
        Arc::new(Self(Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap()))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Ids `game-0`, `game-1`, ...
#[derive(Default)]
pub struct SequentialIds(AtomicUsize);

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> RecordId {
        RecordId::new(format!("game-{}", self.0.fetch_add(1, Ordering::SeqCst)))
    }
}

pub fn surrender_by_b(moves: Vec<u32>) -> GameCandidate {
    GameCandidate::new(moves, GameResult::surrender(WinningParty::PlayerA))
}

pub fn win(party: WinningParty, line: WinningLine, moves: Vec<u32>) -> GameCandidate {
    GameCandidate::new(moves, GameResult::new(party, Some(line)))
}

pub fn undecided(moves: Vec<u32>) -> GameCandidate {
    GameCandidate::new(moves, GameResult::undecided())
}

pub async fn runtime_over(store: Arc<dyn KeyValueStore>) -> HistoryRuntime {
    HistoryRuntime::builder()
        .store(store)
        .id_generator(Arc::new(SequentialIds::default()))
        .clock(FixedClock::at_noon())
        .build()
        .await
        .expect("runtime should build")
}
