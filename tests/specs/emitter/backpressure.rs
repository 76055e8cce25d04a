//! Backpressure specs
//!
//! Backpressure is the count of values queued for a listener that it has not
//! pulled yet; aggregates report the slowest listener.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[tokio::test]
async fn idle_listener_accumulates_backlog() {
    let emitter = StreamEmitter::new();
    let mut consumer = emitter.listen("foo");

    for i in 0..10 {
        emitter.emit("foo", i);
    }
    assert_eq!(emitter.listener_backpressure(consumer.id()), 10);

    for _ in 0..4 {
        consumer.next().await.unwrap();
    }
    assert_eq!(emitter.listener_backpressure(consumer.id()), 6);
}

#[tokio::test]
async fn five_and_five_reports_five() {
    let emitter = StreamEmitter::new();
    let mut foo = emitter.listen("foo");
    let _bar = emitter.listen("bar");

    for i in 0..5 {
        emitter.emit("foo", format!("foo{}", i));
        emitter.emit("bar", format!("bar{}", i));
    }

    assert_eq!(emitter.listener_backpressure(Selector::All), 5);
    assert_eq!(emitter.listener_backpressure("foo"), 5);
    assert_eq!(emitter.listener_backpressure("bar"), 5);

    assert_eq!(foo.next().await.as_deref(), Some("foo0"));
    assert_eq!(emitter.listener_backpressure("foo"), 4);
    assert_eq!(emitter.listener_backpressure(Selector::All), 5);
}

#[tokio::test]
async fn ten_on_one_listener_then_one_consumed() {
    let emitter = StreamEmitter::new();
    let mut consumer = emitter.listen("foo");

    for i in 0..10 {
        emitter.emit("foo", i);
    }
    assert_eq!(emitter.listener_backpressure(Selector::All), 10);

    consumer.next().await;
    assert_eq!(emitter.listener_backpressure(Selector::All), 9);
}

#[tokio::test]
async fn skewed_backlogs_report_the_maximum() {
    let emitter = StreamEmitter::new();
    let _listeners: Vec<_> = ["a", "b", "c", "d"]
        .iter()
        .map(|name| emitter.listen(name))
        .collect();

    for (name, count) in [("a", 1), ("b", 12), ("c", 3), ("d", 0)] {
        for i in 0..count {
            emitter.emit(name, i);
        }
    }

    assert_eq!(emitter.listener_backpressure(Selector::All), 12);
    assert_eq!(emitter.listener_backpressure("c"), 3);
    assert_eq!(emitter.listener_backpressure("d"), 0);
}

#[tokio::test]
async fn backlog_is_released_by_kill() {
    let emitter = StreamEmitter::new();
    let consumer = emitter.listen("foo");
    for i in 0..5 {
        emitter.emit("foo", i);
    }

    emitter.kill_listeners(consumer.id());

    assert_eq!(emitter.listener_backpressure(Selector::All), 0);
    assert_eq!(emitter.listener_backpressure(consumer.id()), 0);
}

#[tokio::test]
async fn stats_expose_per_listener_backpressure() {
    let emitter = StreamEmitter::new();
    let mut a = emitter.listen("foo");
    let b = emitter.listen("foo");

    emitter.emit("foo", 1);
    emitter.emit("foo", 2);
    a.next().await;

    assert_eq!(
        emitter.listener_consumer_stats("foo"),
        vec![
            ConsumerStats {
                id: a.id(),
                stream: "foo".to_string(),
                backpressure: 1,
            },
            ConsumerStats {
                id: b.id(),
                stream: "foo".to_string(),
                backpressure: 2,
            },
        ]
    );
}
