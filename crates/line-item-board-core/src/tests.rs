//! Board Controller Tests
//!
//! Scenario tests for BoardController with in-memory collaborators.

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;
    use std::rc::Rc;

    use async_trait::async_trait;
    use tokio::sync::oneshot;

    use crate::{
        BoardConfig, BoardController, BoardError, BoardServices, BoardState, DeletionIntent,
        GatewayError, LineItemGateway, LineItemRecord, Navigator, Notifier, ProductSummary,
        ProfileRecord, ProfileRules, ProfileSource, ProfileSubscription, RowAction, RowStyles, Severity,
        SALES_PROFILE, SYSTEM_ADMINISTRATOR,
    };

    type FetchResult = Result<Vec<LineItemRecord>, GatewayError>;

    enum Fetch {
        Ready(FetchResult),
        Pending(oneshot::Receiver<FetchResult>),
    }

    struct FakeGateway {
        queued: RefCell<VecDeque<Fetch>>,
        /// Returned once the queue is empty
        fallback: RefCell<FetchResult>,
        fetch_calls: Cell<usize>,
        delete_result: RefCell<Result<(), GatewayError>>,
        delete_gate: RefCell<Option<oneshot::Receiver<Result<(), GatewayError>>>>,
        deleted: RefCell<Vec<String>>,
    }

    impl FakeGateway {
        fn new(records: Vec<LineItemRecord>) -> Self {
            Self {
                queued: RefCell::new(VecDeque::new()),
                fallback: RefCell::new(Ok(records)),
                fetch_calls: Cell::new(0),
                delete_result: RefCell::new(Ok(())),
                delete_gate: RefCell::new(None),
                deleted: RefCell::new(Vec::new()),
            }
        }

        fn set_records(&self, result: FetchResult) {
            *self.fallback.borrow_mut() = result;
        }

        fn queue_pending(&self) -> oneshot::Sender<FetchResult> {
            let (tx, rx) = oneshot::channel();
            self.queued.borrow_mut().push_back(Fetch::Pending(rx));
            tx
        }

        fn gate_delete(&self) -> oneshot::Sender<Result<(), GatewayError>> {
            let (tx, rx) = oneshot::channel();
            *self.delete_gate.borrow_mut() = Some(rx);
            tx
        }
    }

    #[async_trait(?Send)]
    impl LineItemGateway for FakeGateway {
        async fn fetch_line_items(&self, _opportunity_id: &str) -> FetchResult {
            self.fetch_calls.set(self.fetch_calls.get() + 1);
            let next = self.queued.borrow_mut().pop_front();
            match next {
                Some(Fetch::Ready(result)) => result,
                Some(Fetch::Pending(rx)) => rx
                    .await
                    .unwrap_or_else(|_| Err(GatewayError::new("fetch abandoned"))),
                None => self.fallback.borrow().clone(),
            }
        }

        async fn delete_line_item(&self, line_item_id: &str) -> Result<(), GatewayError> {
            self.deleted.borrow_mut().push(line_item_id.to_string());
            let gate = self.delete_gate.borrow_mut().take();
            match gate {
                Some(rx) => rx
                    .await
                    .unwrap_or_else(|_| Err(GatewayError::new("delete abandoned"))),
                None => self.delete_result.borrow().clone(),
            }
        }
    }

    struct FakeProfiles {
        result: RefCell<Result<ProfileRecord, GatewayError>>,
    }

    #[async_trait(?Send)]
    impl ProfileSource for FakeProfiles {
        async fn current_profile(&self) -> Result<ProfileRecord, GatewayError> {
            self.result.borrow().clone()
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        events: RefCell<Vec<(String, String, Severity)>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, title: &str, message: &str, severity: Severity) {
            self.events
                .borrow_mut()
                .push((title.to_string(), message.to_string(), severity));
        }
    }

    #[derive(Default)]
    struct RecordingNavigator {
        opened: RefCell<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn open_record(&self, record_id: &str) {
            self.opened.borrow_mut().push(record_id.to_string());
        }
    }

    struct FakeSubscription {
        released: Rc<Cell<bool>>,
    }

    impl ProfileSubscription for FakeSubscription {
        fn unsubscribe(self: Box<Self>) {
            self.released.set(true);
        }
    }

    struct Harness {
        board: BoardController,
        gateway: Rc<FakeGateway>,
        notifier: Rc<RecordingNotifier>,
        navigator: Rc<RecordingNavigator>,
        renders: Rc<RefCell<Vec<BoardState>>>,
    }

    fn record(id: &str, quantity: f64, stock: f64) -> LineItemRecord {
        LineItemRecord {
            id: id.to_string(),
            opportunity_id: Some("006000000000001AAA".to_string()),
            product2_id: Some(format!("01t-{}", id)),
            product2: Some(ProductSummary {
                name: format!("Product {}", id),
                quantity_in_stock: Some(stock),
            }),
            unit_price: 100.0,
            total_price: 100.0 * quantity,
            quantity,
        }
    }

    fn setup(records: Vec<LineItemRecord>, profile: Result<ProfileRecord, GatewayError>) -> Harness {
        setup_with(records, profile, BoardConfig::default())
    }

    fn setup_with(
        records: Vec<LineItemRecord>,
        profile: Result<ProfileRecord, GatewayError>,
        config: BoardConfig,
    ) -> Harness {
        let gateway = Rc::new(FakeGateway::new(records));
        let notifier = Rc::new(RecordingNotifier::default());
        let navigator = Rc::new(RecordingNavigator::default());
        let services = BoardServices {
            line_items: gateway.clone(),
            profiles: Rc::new(FakeProfiles {
                result: RefCell::new(profile),
            }),
            notifier: notifier.clone(),
            navigator: navigator.clone(),
        };
        let board = BoardController::new("006000000000001AAA", services, config);

        let renders = Rc::new(RefCell::new(Vec::new()));
        let sink = renders.clone();
        board.on_change(move |state: &BoardState| sink.borrow_mut().push(state.clone()));

        Harness {
            board,
            gateway,
            notifier,
            navigator,
            renders,
        }
    }

    fn admin() -> Result<ProfileRecord, GatewayError> {
        Ok(ProfileRecord::from_display_name(SYSTEM_ADMINISTRATOR))
    }

    fn three_lines() -> Vec<LineItemRecord> {
        vec![record("a", 2.0, 5.0), record("b", 5.0, 5.0), record("c", 6.0, 4.0)]
    }

    fn assert_modal_invariant(renders: &[BoardState]) {
        for state in renders {
            assert_eq!(
                state.deletion.is_modal_open(),
                state.deletion.line_to_delete().is_some()
            );
        }
    }

    #[tokio::test]
    async fn test_mount_flags_overstocked_row() {
        let h = setup(three_lines(), admin());
        h.board.mount().await;

        let state = h.board.snapshot();
        let styles = RowStyles::default();
        assert_eq!(state.rows.len(), 3);
        assert_eq!(state.rows[0].quantity_style, styles.quantity_ok);
        assert_eq!(state.rows[1].quantity_style, styles.quantity_ok);
        assert_eq!(state.rows[2].quantity_style, styles.quantity_overstock);
        assert_eq!(state.rows[2].delete_style, styles.delete_warning);
        assert!(state.banner.has_error);
        assert_eq!(state.banner.message, BoardConfig::default().messages.overstock_warning);
        assert!(!state.loading);
        assert!(state.has_lines());
        assert!(h.notifier.events.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_reload_clears_banner() {
        let h = setup(three_lines(), admin());
        h.board.load().await.unwrap();
        assert!(h.board.snapshot().banner.has_error);

        h.gateway.set_records(Ok(vec![record("a", 2.0, 5.0)]));
        h.board.load().await.unwrap();

        let state = h.board.snapshot();
        assert!(!state.banner.has_error);
        assert!(state.banner.message.is_empty());
    }

    #[tokio::test]
    async fn test_confirmed_delete_notifies_and_reloads() {
        let h = setup(three_lines(), admin());
        h.board.mount().await;

        h.board.handle_row_action(RowAction::Delete, "c").unwrap();
        let state = h.board.snapshot();
        assert!(state.deletion.is_modal_open());
        assert_eq!(state.deletion.line_to_delete(), Some("c"));

        h.gateway
            .set_records(Ok(vec![record("a", 2.0, 5.0), record("b", 5.0, 5.0)]));
        h.board.confirm_delete().await.unwrap();

        assert_eq!(*h.gateway.deleted.borrow(), vec!["c".to_string()]);
        assert_eq!(
            *h.notifier.events.borrow(),
            vec![("Succès".to_string(), "Produit supprimé.".to_string(), Severity::Success)]
        );
        assert_eq!(h.gateway.fetch_calls.get(), 2);

        let state = h.board.snapshot();
        assert_eq!(state.deletion, DeletionIntent::Idle);
        assert_eq!(state.rows.len(), 2);
        assert!(!state.banner.has_error);
        assert_modal_invariant(&h.renders.borrow());
    }

    #[tokio::test]
    async fn test_failed_delete_still_closes_modal() {
        let h = setup(three_lines(), admin());
        h.board.mount().await;
        *h.gateway.delete_result.borrow_mut() = Err(GatewayError::new("entity is locked"));

        h.board.request_delete("a").unwrap();
        let err = h.board.confirm_delete().await.unwrap_err();

        assert_eq!(err, BoardError::Gateway(GatewayError::new("entity is locked")));
        assert_eq!(
            *h.notifier.events.borrow(),
            vec![("Erreur".to_string(), "entity is locked".to_string(), Severity::Error)]
        );
        let state = h.board.snapshot();
        assert!(!state.deletion.is_modal_open());
        assert_eq!(state.deletion.line_to_delete(), None);
        assert_eq!(state.rows.len(), 3);
        assert_eq!(h.gateway.fetch_calls.get(), 1);
        assert_modal_invariant(&h.renders.borrow());
    }

    #[tokio::test]
    async fn test_cancelled_delete_never_calls_endpoint() {
        let h = setup(three_lines(), admin());
        h.board.mount().await;

        h.board.request_delete("b").unwrap();
        h.board.cancel_delete().unwrap();

        assert!(h.gateway.deleted.borrow().is_empty());
        let state = h.board.snapshot();
        assert!(!state.deletion.is_modal_open());
        assert_eq!(state.deletion.line_to_delete(), None);
        assert_eq!(h.board.cancel_delete(), Err(BoardError::NoPendingDeletion));
        assert_eq!(h.board.confirm_delete().await, Err(BoardError::NoPendingDeletion));
    }

    #[tokio::test]
    async fn test_delete_requests_rejected_while_pending() {
        let h = setup(three_lines(), admin());
        h.board.mount().await;

        h.board.request_delete("a").unwrap();
        assert_eq!(h.board.request_delete("b"), Err(BoardError::DeletionPending));
        assert_eq!(
            h.board.request_delete("missing"),
            Err(BoardError::DeletionPending)
        );

        let release = h.gateway.gate_delete();
        let (confirmed, _) = tokio::join!(h.board.confirm_delete(), async {
            tokio::task::yield_now().await;
            assert!(h.board.snapshot().deletion.is_in_flight());
            assert_eq!(h.board.request_delete("b"), Err(BoardError::DeletionPending));
            assert_eq!(h.board.cancel_delete(), Err(BoardError::DeletionPending));
            assert_eq!(h.board.confirm_delete().await, Err(BoardError::DeletionPending));
            release.send(Ok(())).unwrap();
        });

        assert_eq!(confirmed, Ok(()));
        assert_eq!(*h.gateway.deleted.borrow(), vec!["a".to_string()]);
        assert_eq!(h.board.snapshot().deletion, DeletionIntent::Idle);
    }

    #[tokio::test]
    async fn test_dropped_confirm_closes_modal() {
        let h = setup(three_lines(), admin());
        h.board.mount().await;
        h.board.request_delete("a").unwrap();
        let _release = h.gateway.gate_delete();

        tokio::select! {
            biased;
            _ = h.board.confirm_delete() => panic!("delete should still be in flight"),
            _ = tokio::task::yield_now() => {}
        }

        assert_eq!(h.board.snapshot().deletion, DeletionIntent::Idle);
        assert_modal_invariant(&h.renders.borrow());
    }

    #[tokio::test]
    async fn test_unknown_row_rejected() {
        let h = setup(three_lines(), admin());
        h.board.mount().await;

        assert_eq!(
            h.board.handle_row_action(RowAction::Delete, "zzz"),
            Err(BoardError::RowNotFound("zzz".to_string()))
        );
        assert_eq!(h.board.snapshot().deletion, DeletionIntent::Idle);
    }

    #[tokio::test]
    async fn test_fetch_failure_keeps_rows() {
        let h = setup(three_lines(), admin());
        h.board.mount().await;
        let before = h.board.snapshot().rows;

        h.gateway
            .set_records(Err(GatewayError::new("Service unavailable")));
        let err = h.board.load().await.unwrap_err();

        assert_eq!(err, BoardError::Gateway(GatewayError::new("Service unavailable")));
        assert_eq!(
            *h.notifier.events.borrow(),
            vec![("Erreur".to_string(), "Service unavailable".to_string(), Severity::Error)]
        );
        let state = h.board.snapshot();
        assert_eq!(state.rows, before);
        assert!(state.banner.has_error);
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_late_results_ignored_after_teardown() {
        let h = setup(Vec::new(), admin());
        let respond = h.gateway.queue_pending();

        let (loaded, _) = tokio::join!(h.board.load(), async {
            tokio::task::yield_now().await;
            h.board.teardown();
            let renders = h.renders.borrow().len();
            respond
                .send(Err(GatewayError::new("Service unavailable")))
                .unwrap();
            renders
        });

        assert_eq!(loaded, Ok(()));
        assert!(h.notifier.events.borrow().is_empty());
        assert!(h.board.snapshot().rows.is_empty());
        assert!(!h.board.lifetime().is_alive());
    }

    #[tokio::test]
    async fn test_overlapping_loads_apply_latest() {
        let h = setup(Vec::new(), admin());
        let first = h.gateway.queue_pending();
        let second = h.gateway.queue_pending();

        let (a, b, _) = tokio::join!(h.board.load(), h.board.load(), async {
            tokio::task::yield_now().await;
            second.send(Ok(vec![record("new", 1.0, 1.0)])).unwrap();
            tokio::task::yield_now().await;
            first.send(Ok(vec![record("old", 9.0, 1.0)])).unwrap();
        });

        assert_eq!((a, b), (Ok(()), Ok(())));
        let state = h.board.snapshot();
        assert_eq!(state.rows.len(), 1);
        assert_eq!(state.rows[0].id, "new");
        assert!(!state.banner.has_error);
    }

    #[tokio::test]
    async fn test_view_product_admin_only() {
        let h = setup(three_lines(), admin());
        h.board.mount().await;
        h.board.handle_row_action(RowAction::ViewProduct, "b").unwrap();
        assert_eq!(*h.navigator.opened.borrow(), vec!["01t-b".to_string()]);

        let sales = setup(three_lines(), Ok(ProfileRecord::from_display_name(SALES_PROFILE)));
        sales.board.mount().await;
        let state = sales.board.snapshot();
        assert!(state.is_admin_or_commercial());
        assert!(state
            .columns(&BoardConfig::default())
            .iter()
            .all(|c| c.action != Some(RowAction::ViewProduct)));
        assert_eq!(
            sales.board.view_product("b"),
            Err(BoardError::NotPermitted("viewProduct"))
        );
        assert!(sales.navigator.opened.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_configured_administrator_profile() {
        let mut config = BoardConfig::default();
        config.profiles = ProfileRules {
            administrator: "Directeur commercial".to_string(),
            admin_or_commercial: vec!["Directeur commercial".to_string()],
        };

        let h = setup_with(
            three_lines(),
            Ok(ProfileRecord::from_display_name("Directeur commercial")),
            config.clone(),
        );
        h.board.mount().await;
        let state = h.board.snapshot();
        assert!(state.is_admin_or_commercial());
        assert_eq!(
            state.columns(h.board.config()).last().and_then(|c| c.action),
            Some(RowAction::ViewProduct)
        );
        h.board.handle_row_action(RowAction::ViewProduct, "c").unwrap();
        assert_eq!(*h.navigator.opened.borrow(), vec!["01t-c".to_string()]);

        let builtin = setup_with(three_lines(), admin(), config);
        builtin.board.mount().await;
        assert!(!builtin.board.snapshot().is_admin_or_commercial());
        assert_eq!(
            builtin.board.view_product("c"),
            Err(BoardError::NotPermitted("viewProduct"))
        );
    }

    #[tokio::test]
    async fn test_view_product_without_linked_product() {
        let mut orphan = record("a", 1.0, 1.0);
        orphan.product2_id = None;
        let h = setup(vec![orphan], admin());
        h.board.mount().await;

        assert_eq!(h.board.view_product("a"), Ok(()));
        assert!(h.navigator.opened.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_profile_failure_degrades_silently() {
        let h = setup(three_lines(), Err(GatewayError::new("no access")));
        h.board.mount().await;

        let state = h.board.snapshot();
        assert_eq!(state.rows.len(), 3);
        assert!(!state.is_admin_or_commercial());
        assert!(state
            .columns(h.board.config())
            .iter()
            .all(|c| c.action != Some(RowAction::ViewProduct)));
        assert!(h.notifier.events.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_subscription_lifecycle() {
        let h = setup(three_lines(), Err(GatewayError::new("not yet")));
        h.board.mount().await;

        let released = Rc::new(Cell::new(false));
        h.board.attach_subscription(Box::new(FakeSubscription {
            released: released.clone(),
        }));
        h.board.apply_profile(admin());
        let columns = h.board.snapshot().columns(h.board.config());
        assert_eq!(columns.last().and_then(|c| c.action), Some(RowAction::ViewProduct));
        assert_eq!(
            h.renders.borrow().last().map(|s| s.profile.can_view_product()),
            Some(true)
        );

        h.board.teardown();
        assert!(released.get());

        let late = Rc::new(Cell::new(false));
        h.board.attach_subscription(Box::new(FakeSubscription {
            released: late.clone(),
        }));
        assert!(late.get());

        let renders = h.renders.borrow().len();
        h.board.apply_profile(Ok(ProfileRecord::from_display_name("Standard User")));
        assert_eq!(h.renders.borrow().len(), renders);
        assert!(h.board.snapshot().profile.can_view_product());
    }
}
