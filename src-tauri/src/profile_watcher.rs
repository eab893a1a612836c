//! Profile Watcher
//!
//! Polls the current user's profile and emits `current-user-profile-changed`
//! when its display name changes.

use std::sync::Arc;
use std::time::Duration;

use line_item_board_core::ProfileRecord;
use tauri::{AppHandle, Emitter};

use crate::org::OrgApi;

pub const PROFILE_CHANGED_EVENT: &str = "current-user-profile-changed";

/// Last display name seen by the watcher
#[derive(Debug, Default)]
pub struct ProfileTracker {
    /// `None` until the first successful poll
    last: Option<Option<String>>,
}

impl ProfileTracker {
    /// Record `current`; true on the first successful poll and whenever the
    /// name differs from the previous one. Boards whose own lookup failed pick
    /// the profile up from that first event.
    pub fn observe(&mut self, current: &ProfileRecord) -> bool {
        let name = current.display_name().map(str::to_string);
        match self.last.replace(name.clone()) {
            None => true,
            Some(previous) => previous != name,
        }
    }
}

pub fn spawn(app: AppHandle, org: Arc<dyn OrgApi>, every: Duration) {
    tauri::async_runtime::spawn(async move {
        let mut tracker = ProfileTracker::default();
        loop {
            match org.current_profile().await {
                Ok(profile) => {
                    if tracker.observe(&profile) {
                        log::info!("[ProfileWatcher] profile changed to {:?}", profile.display_name());
                        if let Err(e) = app.emit(PROFILE_CHANGED_EVENT, &profile) {
                            log::error!("[ProfileWatcher] failed to emit: {}", e);
                        }
                    }
                }
                Err(e) => log::warn!("[ProfileWatcher] poll failed: {}", e),
            }
            tokio::time::sleep(every).await;
        }
    });
}
