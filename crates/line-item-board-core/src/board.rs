//! Board Controller
//!
//! Owns the board state and runs the three flows against the collaborators:
//! profile resolution, line item loading and the delete confirmation flow.
//! Every state change goes through `emit`, which hands a snapshot to the
//! renderer.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, error, warn};

use crate::columns::{columns_for, ColumnDescriptor, RowAction};
use crate::config::BoardConfig;
use crate::error::{BoardError, GatewayError};
use crate::gateway::{LineItemGateway, Navigator, Notifier, ProfileSource, ProfileSubscription, Severity};
use crate::lifetime::Lifetime;
use crate::model::{build_rows, ErrorBanner, ViewRow};
use crate::profile::{ProfileRecord, UserProfile};

/// Delete confirmation state. The modal is open exactly when a line id is held.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DeletionIntent {
    #[default]
    Idle,
    /// Modal open, waiting for confirm or cancel
    Confirming { line_id: String },
    /// Confirmed; the delete call has not settled yet
    Deleting { line_id: String },
}

impl DeletionIntent {
    pub fn is_modal_open(&self) -> bool {
        !matches!(self, DeletionIntent::Idle)
    }

    pub fn line_to_delete(&self) -> Option<&str> {
        match self {
            DeletionIntent::Idle => None,
            DeletionIntent::Confirming { line_id } | DeletionIntent::Deleting { line_id } => Some(line_id),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, DeletionIntent::Deleting { .. })
    }
}

/// Everything the board renders
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardState {
    pub rows: Vec<ViewRow>,
    pub banner: ErrorBanner,
    pub profile: UserProfile,
    pub deletion: DeletionIntent,
    pub loading: bool,
}

impl BoardState {
    pub fn has_lines(&self) -> bool {
        !self.rows.is_empty()
    }

    pub fn is_admin_or_commercial(&self) -> bool {
        self.profile.is_admin_or_commercial()
    }

    pub fn columns(&self, config: &BoardConfig) -> Vec<ColumnDescriptor> {
        columns_for(&self.profile, &config.labels)
    }

    fn row(&self, row_id: &str) -> Option<&ViewRow> {
        self.rows.iter().find(|row| row.id == row_id)
    }
}

/// Collaborators the controller calls out to
#[derive(Clone)]
pub struct BoardServices {
    pub line_items: Rc<dyn LineItemGateway>,
    pub profiles: Rc<dyn ProfileSource>,
    pub notifier: Rc<dyn Notifier>,
    pub navigator: Rc<dyn Navigator>,
}

type RenderFn = Box<dyn Fn(&BoardState)>;

pub struct BoardController {
    record_id: String,
    services: BoardServices,
    config: BoardConfig,
    state: RefCell<BoardState>,
    lifetime: Lifetime,
    load_seq: Cell<u64>,
    subscription: RefCell<Option<Box<dyn ProfileSubscription>>>,
    render: RefCell<Option<RenderFn>>,
}

impl BoardController {
    pub fn new(record_id: impl Into<String>, services: BoardServices, config: BoardConfig) -> Self {
        Self {
            record_id: record_id.into(),
            services,
            config,
            state: RefCell::new(BoardState::default()),
            lifetime: Lifetime::new(),
            load_seq: Cell::new(0),
            subscription: RefCell::new(None),
            render: RefCell::new(None),
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn lifetime(&self) -> &Lifetime {
        &self.lifetime
    }

    pub fn snapshot(&self) -> BoardState {
        self.state.borrow().clone()
    }

    /// Install the renderer and push the current state to it
    pub fn on_change(&self, render: impl Fn(&BoardState) + 'static) {
        *self.render.borrow_mut() = Some(Box::new(render));
        self.emit();
    }

    fn emit(&self) {
        if !self.lifetime.is_alive() {
            return;
        }
        let state = self.state.borrow();
        if let Some(render) = self.render.borrow().as_ref() {
            render(&state);
        }
    }

    fn update(&self, f: impl FnOnce(&mut BoardState)) {
        f(&mut self.state.borrow_mut());
        self.emit();
    }

    /// Initial profile resolution followed by the first load
    pub async fn mount(&self) {
        self.resolve_profile().await;
        // Load failures are already surfaced through the notifier
        let _ = self.load().await;
    }

    pub async fn resolve_profile(&self) {
        let result = self.services.profiles.current_profile().await;
        if !self.lifetime.is_alive() {
            debug!("[Board] dropping profile response after teardown");
            return;
        }
        self.apply_profile(result);
    }

    /// Entry point for profile updates pushed by a subscription
    pub fn apply_profile(&self, result: Result<ProfileRecord, GatewayError>) {
        if !self.lifetime.is_alive() {
            return;
        }
        let profile = UserProfile::resolve(result, &self.config.profiles);
        debug!("[Board] profile resolved: {:?}", profile.display_name());
        self.update(|state| state.profile = profile);
    }

    /// Keep `subscription` until teardown. A subscription arriving after
    /// teardown is released immediately.
    pub fn attach_subscription(&self, subscription: Box<dyn ProfileSubscription>) {
        if !self.lifetime.is_alive() {
            subscription.unsubscribe();
            return;
        }
        if let Some(previous) = self.subscription.borrow_mut().replace(subscription) {
            previous.unsubscribe();
        }
    }

    /// Fetch line items and rebuild rows and banner.
    ///
    /// On failure the previous rows are kept and the error is notified. Only the
    /// most recently issued load applies its result.
    pub async fn load(&self) -> Result<(), BoardError> {
        let seq = self.load_seq.get() + 1;
        self.load_seq.set(seq);
        self.update(|state| state.loading = true);

        let result = self.services.line_items.fetch_line_items(&self.record_id).await;

        if !self.lifetime.is_alive() {
            debug!("[Board] dropping load #{} after teardown", seq);
            return Ok(());
        }
        if self.load_seq.get() != seq {
            debug!("[Board] dropping stale load #{}", seq);
            return Ok(());
        }

        match result {
            Ok(records) => {
                let rows = build_rows(&records, &self.config.styles);
                let banner = ErrorBanner::from_rows(&rows, &self.config.messages.overstock_warning);
                debug!(
                    "[Board] loaded {} lines for {} (overstock: {})",
                    rows.len(),
                    self.record_id,
                    banner.has_error
                );
                self.update(|state| {
                    state.rows = rows;
                    state.banner = banner;
                    state.loading = false;
                });
                Ok(())
            }
            Err(e) => {
                error!("[Board] loading lines for {} failed: {}", self.record_id, e);
                self.update(|state| state.loading = false);
                self.notify_error(&e);
                Err(e.into())
            }
        }
    }

    pub fn handle_row_action(&self, action: RowAction, row_id: &str) -> Result<(), BoardError> {
        match action {
            RowAction::Delete => self.request_delete(row_id),
            RowAction::ViewProduct => self.view_product(row_id),
        }
    }

    /// Open the confirmation modal for `row_id`
    pub fn request_delete(&self, row_id: &str) -> Result<(), BoardError> {
        let mut state = self.state.borrow_mut();
        if state.deletion.is_modal_open() {
            return Err(BoardError::DeletionPending);
        }
        if state.row(row_id).is_none() {
            return Err(BoardError::RowNotFound(row_id.to_string()));
        }
        debug!("[Board] confirm delete of {}", row_id);
        state.deletion = DeletionIntent::Confirming {
            line_id: row_id.to_string(),
        };
        drop(state);
        self.emit();
        Ok(())
    }

    pub fn cancel_delete(&self) -> Result<(), BoardError> {
        let mut state = self.state.borrow_mut();
        match state.deletion {
            DeletionIntent::Idle => return Err(BoardError::NoPendingDeletion),
            DeletionIntent::Deleting { .. } => return Err(BoardError::DeletionPending),
            DeletionIntent::Confirming { .. } => {}
        }
        state.deletion = DeletionIntent::Idle;
        drop(state);
        self.emit();
        Ok(())
    }

    /// Delete the line awaiting confirmation, then reload.
    ///
    /// The modal is closed once the delete call settles, whatever its outcome,
    /// and also if this future is dropped before that.
    pub async fn confirm_delete(&self) -> Result<(), BoardError> {
        let line_id = {
            let mut state = self.state.borrow_mut();
            let line_id = match &state.deletion {
                DeletionIntent::Confirming { line_id } => line_id.clone(),
                DeletionIntent::Deleting { .. } => return Err(BoardError::DeletionPending),
                DeletionIntent::Idle => return Err(BoardError::NoPendingDeletion),
            };
            state.deletion = DeletionIntent::Deleting {
                line_id: line_id.clone(),
            };
            line_id
        };
        self.emit();

        let result = {
            let _close = CloseModal { board: self };
            self.services.line_items.delete_line_item(&line_id).await
        };

        if !self.lifetime.is_alive() {
            debug!("[Board] dropping delete result for {} after teardown", line_id);
            return Ok(());
        }

        match result {
            Ok(()) => {
                debug!("[Board] deleted {}", line_id);
                let messages = &self.config.messages;
                self.services
                    .notifier
                    .notify(&messages.success_title, &messages.deleted, Severity::Success);
                // A failed reload notifies on its own and keeps the stale rows
                let _ = self.load().await;
                Ok(())
            }
            Err(e) => {
                error!("[Board] deleting {} failed: {}", line_id, e);
                self.notify_error(&e);
                Err(e.into())
            }
        }
    }

    /// Open the linked product. Administrator profile only.
    pub fn view_product(&self, row_id: &str) -> Result<(), BoardError> {
        let product_id = {
            let state = self.state.borrow();
            if !state.profile.can_view_product() {
                warn!("[Board] viewProduct rejected for profile {:?}", state.profile.display_name());
                return Err(BoardError::NotPermitted(RowAction::ViewProduct.as_str()));
            }
            let row = state
                .row(row_id)
                .ok_or_else(|| BoardError::RowNotFound(row_id.to_string()))?;
            row.product_id.clone()
        };

        if product_id.is_empty() {
            warn!("[Board] line {} has no linked product", row_id);
            return Ok(());
        }
        self.services.navigator.open_record(&product_id);
        Ok(())
    }

    /// End the component lifetime: release the profile subscription and the
    /// renderer, and make in-flight calls drop their results.
    pub fn teardown(&self) {
        self.lifetime.end();
        if let Some(subscription) = self.subscription.borrow_mut().take() {
            subscription.unsubscribe();
        }
        self.render.borrow_mut().take();
        debug!("[Board] torn down for {}", self.record_id);
    }

    fn notify_error(&self, e: &GatewayError) {
        self.services
            .notifier
            .notify(&self.config.messages.error_title, &e.message, Severity::Error);
    }
}

/// Returns the board to `Idle` when dropped
struct CloseModal<'a> {
    board: &'a BoardController,
}

impl Drop for CloseModal<'_> {
    fn drop(&mut self) {
        self.board.state.borrow_mut().deletion = DeletionIntent::Idle;
        self.board.emit();
    }
}
