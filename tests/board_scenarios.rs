//! End-to-end scenarios driving the board through its public API.

use std::cell::RefCell;
use std::rc::Rc;

use projboard::app::drag::{DragPayload, DragTarget, TEXT_PLAIN};
use projboard::app::list::ProjectList;
use projboard::app::FormField;
use projboard::{
    handle_event, initialize, Action, AppState, Config, Event, InputMode, Project, ProjectStatus, ProjectStore,
};
use rstest::{fixture, rstest};

type Deliveries = Rc<RefCell<Vec<Vec<Project>>>>;

fn record(store: &mut ProjectStore) -> Deliveries {
    let deliveries: Deliveries = Rc::default();
    let sink = Rc::clone(&deliveries);
    store.subscribe(move |snapshot| sink.borrow_mut().push(snapshot));
    deliveries
}

#[fixture]
fn board() -> AppState {
    let mut state = initialize(&Config::default());
    state.set_viewport(24, 80);
    state
}

fn send(state: &mut AppState, events: &[Event]) -> Vec<Action> {
    events
        .iter()
        .flat_map(|event| handle_event(state, event).unwrap().1)
        .collect()
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        handle_event(state, &Event::Char(c)).unwrap();
    }
}

fn add_through_form(state: &mut AppState, title: &str, description: &str, manday: &str) -> Vec<Action> {
    send(state, &[Event::EditForm]);
    type_text(state, title);
    send(state, &[Event::NextField]);
    type_text(state, description);
    send(state, &[Event::NextField]);
    type_text(state, manday);
    send(state, &[Event::SubmitForm])
}

#[test]
fn build_bridge_is_added_then_finished() {
    let mut store = ProjectStore::new();
    let deliveries = record(&mut store);

    let id = store.add_project(
        "Build Bridge".to_string(),
        "Construct a bridge over river".to_string(),
        30.0,
    );

    {
        let seen = deliveries.borrow();
        assert_eq!(seen.len(), 1);
        let project = &seen[0][0];
        assert_eq!(seen[0].len(), 1);
        assert_eq!(project.id(), id);
        assert_eq!(project.status(), ProjectStatus::Active);
        assert!((project.manday() - 30.0).abs() < f64::EPSILON);
    }

    assert!(store.move_project(&id, ProjectStatus::Finished));

    let seen = deliveries.borrow();
    assert_eq!(seen.len(), 2);
    let before = &seen[0][0];
    let after = &seen[1][0];
    assert_eq!(after.status(), ProjectStatus::Finished);
    assert_eq!(after.id(), before.id());
    assert_eq!(after.title(), before.title());
    assert_eq!(after.description(), before.description());
    assert!((after.manday() - before.manday()).abs() < f64::EPSILON);
}

#[test]
fn mutating_a_snapshot_does_not_leak_into_the_next() {
    let mut store = ProjectStore::new();
    let tampered = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&tampered);
    store.subscribe(move |mut snapshot: Vec<Project>| {
        snapshot.clear();
        sink.borrow_mut().push(snapshot.len());
    });
    let deliveries = record(&mut store);

    store.add_project("One".to_string(), "First project".to_string(), 3.0);
    store.add_project("Two".to_string(), "Second project".to_string(), 4.0);

    assert_eq!(*tampered.borrow(), vec![0, 0]);
    let seen = deliveries.borrow();
    assert_eq!(seen[0].len(), 1);
    assert_eq!(seen[1].len(), 2);
    assert_eq!(store.len(), 2);
}

#[test]
fn observers_hear_in_subscription_order_until_unsubscribed() {
    let mut store = ProjectStore::new();
    let order = Rc::new(RefCell::new(Vec::new()));

    let first = Rc::clone(&order);
    let first_id = store.subscribe(move |_| first.borrow_mut().push("first"));
    let second = Rc::clone(&order);
    store.subscribe(move |_| second.borrow_mut().push("second"));

    store.add_project("A".to_string(), "Alpha project".to_string(), 2.0);
    assert!(store.unsubscribe(first_id));
    store.add_project("B".to_string(), "Beta project".to_string(), 2.0);

    assert_eq!(*order.borrow(), vec!["first", "second", "second"]);
}

#[test]
fn no_op_moves_stay_silent() {
    let mut store = ProjectStore::new();
    let id = store.add_project("Solo".to_string(), "Only project".to_string(), 8.0);
    let deliveries = record(&mut store);

    assert!(!store.move_project(&id, ProjectStatus::Active));
    assert!(!store.move_project(&projboard::ProjectId::new(), ProjectStatus::Finished));

    assert!(deliveries.borrow().is_empty());
    assert_eq!(store.get(&id).map(Project::status), Some(ProjectStatus::Active));
}

#[rstest]
fn form_adds_a_project_and_renames_the_pane(mut board: AppState) {
    let actions = add_through_form(&mut board, "Build Bridge", "Construct a bridge over river", "30");

    assert_eq!(
        actions,
        vec![Action::RenamePane {
            title: "Project Board (1)".to_string()
        }]
    );
    assert_eq!(board.input_mode, InputMode::Normal);
    assert_eq!(board.list(ProjectStatus::Active).len(), 1);
    assert!(board.list(ProjectStatus::Finished).is_empty());
    for field in FormField::ALL {
        assert_eq!(board.form().field(field), "");
    }
}

#[rstest]
#[case("", "Construct a bridge", "30")]
#[case("Bridge", "Tiny", "30")]
#[case("Bridge", "Construct a bridge", "0")]
#[case("Bridge", "Construct a bridge", "1001")]
#[case("Bridge", "Construct a bridge", "thirty")]
fn invalid_form_input_leaves_the_store_untouched(
    mut board: AppState,
    #[case] title: &str,
    #[case] description: &str,
    #[case] manday: &str,
) {
    let actions = add_through_form(&mut board, title, description, manday);

    assert!(actions.is_empty());
    assert!(board.store().is_empty());
    let notice = board.notice.as_ref().unwrap();
    assert!(notice.is_error);
    assert_eq!(notice.message, "Invalid input, please try again!");
    assert_eq!(board.form().field(FormField::Title), title);
}

#[rstest]
fn keyboard_drag_moves_a_project_to_finished(mut board: AppState) {
    add_through_form(&mut board, "Build Bridge", "Construct a bridge over river", "30");

    send(&mut board, &[Event::PickUp]);
    assert!(board.is_dragging());
    assert!(board.list(ProjectStatus::Active).is_droppable());

    send(&mut board, &[Event::FocusList(ProjectStatus::Finished)]);
    assert!(!board.list(ProjectStatus::Active).is_droppable());
    assert!(board.list(ProjectStatus::Finished).is_droppable());

    send(&mut board, &[Event::Drop]);

    assert!(!board.is_dragging());
    assert!(board.list(ProjectStatus::Active).is_empty());
    let finished = board.list(ProjectStatus::Finished).assigned();
    assert_eq!(finished.len(), 1);
    assert_eq!(finished[0].title(), "Build Bridge");
    assert!(!board.list(ProjectStatus::Finished).is_droppable());
    assert_eq!(
        board.notice.as_ref().map(|n| n.message.as_str()),
        Some("Moved \"Build Bridge\" to Finished Projects")
    );
}

#[rstest]
fn escape_cancels_a_drag_without_moving(mut board: AppState) {
    add_through_form(&mut board, "Build Bridge", "Construct a bridge over river", "30");

    send(&mut board, &[Event::PickUp, Event::ToggleList, Event::Escape]);

    assert!(!board.is_dragging());
    assert_eq!(board.list(ProjectStatus::Active).len(), 1);
    assert!(!board.list(ProjectStatus::Finished).is_droppable());
}

#[rstest]
fn mouse_drag_moves_a_project_between_panels(mut board: AppState) {
    add_through_form(&mut board, "Build Bridge", "Construct a bridge over river", "30");
    let layout = board.viewport();
    let item_row = layout.list_start_row();
    let active_col = layout.panel_start_col(ProjectStatus::Active) + 2;
    let finished_col = layout.panel_start_col(ProjectStatus::Finished) + 2;

    send(&mut board, &[Event::MouseDown { row: item_row, col: active_col }]);
    assert!(board.is_dragging());

    send(&mut board, &[Event::MouseDrag { row: item_row + 2, col: finished_col }]);
    assert!(board.list(ProjectStatus::Finished).is_droppable());

    send(&mut board, &[Event::MouseUp { row: item_row + 2, col: finished_col }]);

    assert!(board.list(ProjectStatus::Active).is_empty());
    assert_eq!(board.list(ProjectStatus::Finished).len(), 1);
    assert_eq!(board.focused_list, ProjectStatus::Finished);
}

#[rstest]
fn releasing_outside_the_lists_cancels(mut board: AppState) {
    add_through_form(&mut board, "Build Bridge", "Construct a bridge over river", "30");
    let layout = board.viewport();
    let item_row = layout.list_start_row();
    let col = layout.panel_start_col(ProjectStatus::Active) + 2;

    send(
        &mut board,
        &[
            Event::MouseDown { row: item_row, col },
            Event::MouseUp { row: layout.header_row(), col },
        ],
    );

    assert!(!board.is_dragging());
    assert_eq!(board.list(ProjectStatus::Active).len(), 1);
}

#[rstest]
fn lists_partition_projects_by_status() {
    let mut store = ProjectStore::new();
    let active = ProjectList::mount(ProjectStatus::Active, &mut store);
    let finished = ProjectList::mount(ProjectStatus::Finished, &mut store);

    let a = store.add_project("A".to_string(), "Alpha project".to_string(), 5.0);
    store.add_project("B".to_string(), "Beta project".to_string(), 6.0);
    store.move_project(&a, ProjectStatus::Finished);

    let titles = |list: &ProjectList| -> Vec<String> {
        list.assigned().iter().map(|p| p.title().to_string()).collect()
    };
    assert_eq!(titles(&active), vec!["B"]);
    assert_eq!(titles(&finished), vec!["A"]);
}

#[rstest]
#[case("text/html")]
#[case("application/json")]
fn lists_reject_foreign_payload_formats(#[case] format: &str) {
    let mut store = ProjectStore::new();
    let id = store.add_project("A".to_string(), "Alpha project".to_string(), 5.0);
    let mut finished = ProjectList::mount(ProjectStatus::Finished, &mut store);

    let payload = DragPayload::new(format, id.to_string());
    assert!(!finished.drag_over(&payload));
    assert!(!finished.is_droppable());
    assert!(!finished.drop_project(&mut store, &payload));
    assert_eq!(store.get(&id).map(Project::status), Some(ProjectStatus::Active));

    let accepted = DragPayload::new(TEXT_PLAIN, id.to_string());
    assert!(finished.drag_over(&accepted));
    assert!(finished.drop_project(&mut store, &accepted));
    assert_eq!(finished.len(), 1);
}

#[rstest]
fn permission_grant_titles_the_pane(mut board: AppState) {
    let denied = send(&mut board, &[Event::PermissionsResult { granted: false }]);
    let granted = send(&mut board, &[Event::PermissionsResult { granted: true }]);

    assert!(denied.is_empty());
    assert_eq!(
        granted,
        vec![Action::RenamePane {
            title: "Project Board (0)".to_string()
        }]
    );
}
