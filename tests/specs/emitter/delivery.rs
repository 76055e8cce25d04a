//! Delivery specs
//!
//! Ordering and multicast behavior of emitted values.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[tokio::test]
async fn values_arrive_in_emit_order() {
    let emitter = StreamEmitter::new();
    let collector = collect(emitter.listen("foo"));
    settle().await;

    for i in 0..20 {
        emitter.emit("foo", i);
    }
    emitter.close_listeners("foo");

    assert_eq!(collector.await.unwrap(), (0..20).collect::<Vec<_>>());
}

#[tokio::test]
async fn each_listener_gets_the_full_sequence() {
    let emitter = StreamEmitter::new();
    let first = collect(emitter.listen("foo"));
    let second = collect(emitter.listen("foo"));
    settle().await;

    emitter.emit("foo", "a");
    emitter.emit("foo", "b");
    emitter.close_listeners(Selector::All);

    assert_eq!(first.await.unwrap(), vec!["a", "b"]);
    assert_eq!(second.await.unwrap(), vec!["a", "b"]);
}

#[tokio::test]
async fn late_listener_misses_earlier_values() {
    let emitter = StreamEmitter::new();
    let early = collect(emitter.listen("foo"));
    emitter.emit("foo", 1);

    let late = collect(emitter.listen("foo"));
    emitter.emit("foo", 2);
    emitter.close_listeners("foo");

    assert_eq!(early.await.unwrap(), vec![1, 2]);
    assert_eq!(late.await.unwrap(), vec![2]);
}

#[tokio::test]
async fn events_do_not_leak_between_names() {
    let emitter = StreamEmitter::new();
    let foo = collect(emitter.listen("foo"));
    let bar = collect(emitter.listen("bar"));

    emitter.emit("foo", "f1");
    emitter.emit("bar", "b1");
    emitter.emit("baz", "nobody");
    emitter.emit("foo", "f2");
    emitter.close_listeners(Selector::All);

    assert_eq!(foo.await.unwrap(), vec!["f1", "f2"]);
    assert_eq!(bar.await.unwrap(), vec!["b1"]);
}

#[tokio::test]
async fn slow_listener_does_not_hold_back_fast_one() {
    let emitter = StreamEmitter::new();
    let fast = collect(emitter.listen("foo"));
    let slow = emitter.listen("foo");

    for i in 0..3 {
        emitter.emit("foo", i);
    }
    settle().await;

    assert_eq!(slow.backpressure(), 3);
    assert_eq!(emitter.listener_backpressure(slow.id()), 3);

    emitter.close_listeners("foo");
    assert_eq!(fast.await.unwrap(), vec![0, 1, 2]);
    assert_eq!(collect(slow).await.unwrap(), vec![0, 1, 2]);
}
