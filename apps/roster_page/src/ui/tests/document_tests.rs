use super::*;

fn workers() -> Vec<WorkerSummary> {
    vec![
        WorkerSummary::new(WorkerId(7), "김철수", false),
        WorkerSummary::new(WorkerId(3), "이영희", true),
        WorkerSummary::new(WorkerId(9), "박지민", false),
    ]
}

#[test]
fn render_populates_typed_state_and_labels() {
    let list = WorkerList::render(&workers(), Locale::Ko).expect("render");

    assert_eq!(list.worker_ids(), vec![WorkerId(7), WorkerId(3), WorkerId(9)]);
    let off = list.item(WorkerId(3)).expect("worker 3");
    assert!(off.has_class(WORKER_ITEM_CLASS));
    assert!(off.has_class(OFF_DUTY_CLASS));
    assert!(off.toggle().is_off());
    assert_eq!(off.toggle().label(), "OFF 해제");

    let on = list.item(WorkerId(7)).expect("worker 7");
    assert!(!on.has_class(OFF_DUTY_CLASS));
    assert_eq!(on.toggle().label(), "OFF 설정");
    assert_eq!(on.toggle().class(), TOGGLE_BUTTON_CLASS);
}

#[test]
fn render_rejects_duplicate_worker_rows() {
    let mut rows = workers();
    rows.push(WorkerSummary::new(WorkerId(7), "dup", false));
    assert_eq!(
        WorkerList::render(&rows, Locale::Ko),
        Err(DocumentError::DuplicateWorker(WorkerId(7)))
    );
}

#[test]
fn move_item_behaves_like_a_sortable_drop() {
    let mut list = WorkerList::render(&workers(), Locale::En).expect("render");

    list.move_item(0, 2).expect("move down");
    assert_eq!(list.worker_ids(), vec![WorkerId(3), WorkerId(9), WorkerId(7)]);

    list.move_item(2, 0).expect("move up");
    assert_eq!(list.worker_ids(), vec![WorkerId(7), WorkerId(3), WorkerId(9)]);
}

#[test]
fn move_item_out_of_bounds_leaves_list_untouched() {
    let mut list = WorkerList::render(&workers(), Locale::En).expect("render");
    let before = list.clone();

    assert_eq!(
        list.move_item(1, 3),
        Err(DocumentError::OutOfBounds { index: 3, len: 3 })
    );
    assert_eq!(list, before);
}

#[test]
fn apply_duty_state_updates_class_label_and_cache_together() {
    let mut list = WorkerList::render(&workers(), Locale::En).expect("render");
    let item = list.item_mut(WorkerId(7)).expect("worker 7");

    item.apply_duty_state(DutyState::OffDuty, Locale::En);
    assert!(item.has_class(OFF_DUTY_CLASS));
    assert_eq!(item.toggle().label(), "Clear OFF");
    assert_eq!(item.duty_state(), DutyState::OffDuty);

    item.apply_duty_state(DutyState::OnDuty, Locale::En);
    assert!(!item.has_class(OFF_DUTY_CLASS));
    assert!(item.has_class(WORKER_ITEM_CLASS));
    assert_eq!(item.toggle().label(), "Set OFF");
    assert!(!item.toggle().is_off());
}

#[test]
fn document_without_list_is_valid() {
    let document = Document::new();
    assert!(document.worker_list().is_none());
}
