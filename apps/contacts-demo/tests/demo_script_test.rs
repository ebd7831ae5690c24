use contacts_demo::script::{demo_script, perform, Step};
use contacts_demo::{load_contacts, ContactList, ROW_WIDTH};
use swiperow_core::Looper;
use swiperow_ui::{SwipeContext, SwipePhase};

fn bound_list() -> (Looper, ContactList) {
    let looper = Looper::new();
    let context = SwipeContext::new(looper.handle());
    let list = ContactList::bind(&context, load_contacts()).expect("bind");
    (looper, list)
}

#[test]
fn every_row_starts_closed() {
    let (_looper, list) = bound_list();
    assert_eq!(list.len(), 6);
    assert!(list.open_rows().is_empty());
    for index in 0..list.len() {
        assert_eq!(list.row(index).expect("row").foreground_offset(), 0);
    }
}

#[test]
fn scripted_session_leaves_only_the_last_row_open() {
    let (looper, list) = bound_list();

    for step in demo_script() {
        assert!(perform(&list, &step, looper.now_millis()), "{step:?}");
        looper.run_until_idle();
        assert!(!list.intercept_disallowed(), "{step:?}");
        assert!(list.open_rows().len() <= 1, "{step:?}");
    }

    assert_eq!(list.open_rows(), vec![8]);
    assert_eq!(list.clicked(), vec![4]);
    let last = list.row(5).expect("row");
    assert_eq!(last.foreground_offset(), -ROW_WIDTH);
    assert!(list.render().contains("Delete"));
}

#[test]
fn short_swipe_settles_back() {
    let (looper, list) = bound_list();
    perform(&list, &Step::Swipe { row: 0, dx: -90.0 }, 0);
    let session = list.session(1).expect("session");
    assert_eq!(session.phase(), SwipePhase::Animating);

    looper.run_until_idle();
    assert_eq!(session.phase(), SwipePhase::Idle);
    assert!(session.is_at_rest());
    assert_eq!(list.row(0).expect("row").foreground_offset(), 0);
}

#[test]
fn unbind_detaches_every_row() {
    let (looper, mut list) = bound_list();
    perform(&list, &Step::Swipe { row: 2, dx: -300.0 }, 0);
    list.unbind();

    assert_eq!(looper.pending_task_count(), 0);
    assert!(!perform(&list, &Step::Tap { row: 2 }, 0));
    assert!(list.clicked().is_empty());
}
