use std::{
    collections::VecDeque,
    sync::{Mutex, MutexGuard},
};

use anyhow::Result;

use crate::{
    domain::event::InboundEvent,
    infra::{contracts::NameStore, error::StoreError},
    usecases::contracts::{ReplySender, UpdateSource},
};

static ENV_LOCK: Mutex<()> = Mutex::new(());

pub fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().expect("env lock should not be poisoned")
}

/// Gateway double: replays a scripted event sequence and records every
/// reply sent through it.
pub struct ScriptedGateway {
    events: VecDeque<InboundEvent>,
    pub sent: Vec<(i64, String)>,
}

impl ScriptedGateway {
    pub fn from(events: Vec<InboundEvent>) -> Self {
        Self {
            events: events.into(),
            sent: Vec::new(),
        }
    }
}

impl UpdateSource for ScriptedGateway {
    fn next_event(&mut self) -> Result<Option<InboundEvent>> {
        Ok(self.events.pop_front())
    }
}

impl ReplySender for ScriptedGateway {
    fn send_reply(&mut self, chat_id: i64, text: &str) -> Result<()> {
        self.sent.push((chat_id, text.to_owned()));
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryNameStore {
    pub rows: Vec<String>,
}

impl NameStore for MemoryNameStore {
    fn append(&mut self, name: &str) -> Result<(), StoreError> {
        self.rows.push(name.to_owned());
        Ok(())
    }
}

/// Name store whose every append fails, as an unwritable path would.
pub struct FailingNameStore;

impl NameStore for FailingNameStore {
    fn append(&mut self, _name: &str) -> Result<(), StoreError> {
        Err(StoreError::Open {
            path: "unwritable/names.csv".into(),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        })
    }
}
