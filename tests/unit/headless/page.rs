use super::*;
use crate::foundation::core::Progress;

fn recorder() -> (Rc<RefCell<Vec<TriggerEvent>>>, TriggerCallback) {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    (events, Box::new(move |e| sink.borrow_mut().push(e)))
}

#[test]
fn selectors_match_classes_and_ids_in_document_order() {
    let page = HeadlessPage::stacked(100.0, 3);
    let wrap = page.query_selector(".scroll_wrap").unwrap();
    let triggers = page.query_selector_all(&wrap, ".scroll_trigger");
    assert_eq!(triggers.len(), 3);
    let tops: Vec<_> = triggers.iter().map(HeadlessElement::top).collect();
    assert_eq!(tops, vec![0.0, 100.0, 200.0]);

    let smooth = page.append(HeadlessElement::with_id("smooth-wrapper", 0.0, 0.0));
    assert!(page.query_selector("#smooth-wrapper").unwrap().same(&smooth));
    assert!(page.query_selector("div").is_none());
}

#[test]
fn mismatched_page_has_independent_counts() {
    let page = HeadlessPage::with_counts(100.0, 3, 2);
    assert_eq!(page.find_all(".scroll_trigger").len(), 3);
    assert_eq!(page.find_all(".scroll_item").len(), 2);
}

#[test]
fn scroller_delivers_progress_then_leave_back() {
    let page = HeadlessPage::stacked(100.0, 2);
    let trigger = page.find_all(".scroll_trigger").remove(1);
    let mut scroller = HeadlessScroller::new(100.0);
    let (events, cb) = recorder();
    let _sub = scroller
        .observe(&trigger, TriggerRegion::PANEL, cb)
        .unwrap();

    scroller.scroll_to(50.0);
    scroller.scroll_to(150.0);
    scroller.scroll_to(150.0);
    scroller.scroll_to(400.0);
    scroller.scroll_to(20.0);

    let p = |v| TriggerEvent::Progress(Progress::new(v).unwrap());
    assert_eq!(
        *events.borrow(),
        vec![p(0.5), p(1.0), TriggerEvent::LeaveBack]
    );
}

#[test]
fn dropping_subscription_stops_delivery() {
    let page = HeadlessPage::stacked(100.0, 1);
    let trigger = page.find_all(".scroll_trigger").remove(0);
    let mut scroller = HeadlessScroller::new(100.0);
    let (events, cb) = recorder();
    let sub = scroller
        .observe(&trigger, TriggerRegion::PANEL, cb)
        .unwrap();
    assert_eq!(scroller.active_subscriptions(), 1);

    drop(sub);
    assert_eq!(scroller.active_subscriptions(), 0);
    scroller.scroll_to(50.0);
    assert!(events.borrow().is_empty());
}

#[test]
fn unready_scroller_refuses_observation() {
    let page = HeadlessPage::stacked(100.0, 1);
    let trigger = page.find_all(".scroll_trigger").remove(0);
    let mut scroller = HeadlessScroller::new(100.0);
    scroller.set_ready(false);
    let (_events, cb) = recorder();
    assert!(matches!(
        scroller.observe(&trigger, TriggerRegion::PANEL, cb),
        Err(WipeError::DependencyMissing(_))
    ));
}

#[test]
fn clip_writes_are_recorded() {
    let el = HeadlessElement::new("scroll_item", 0.0, 10.0);
    assert_eq!(el.clip(), None);
    el.apply_clip(&ClipGeometry::COLLAPSED_TOP);
    el.apply_clip(&ClipGeometry::FULL_OPEN);
    assert_eq!(el.clip(), Some(ClipGeometry::FULL_OPEN));
    assert_eq!(el.clip_writes(), 2);
}

#[test]
fn smoother_records_settings() {
    let mut smoother = HeadlessSmoother::default();
    smoother.create(&SmoothScrollConfig::default()).unwrap();
    assert_eq!(smoother.installed().unwrap().content, "#smooth-content");
    assert!(HeadlessSmoother::missing()
        .create(&SmoothScrollConfig::default())
        .is_err());
}
