use std::cell::RefCell;
use std::rc::Rc;

use nexus_observer::{Error, ObserverArray, Registry};

// =============================================================================
// Single-element changes around a live cursor
// =============================================================================

#[test]
fn removal_ahead_of_cursor_yields_remaining_once() {
    let array = ObserverArray::from(vec!['A', 'B', 'C', 'D']);
    let mut cursor = array.cursor();
    assert_eq!(cursor.next(), Some('A'));
    assert_eq!(cursor.position(), 1);

    assert_eq!(array.remove(2), Ok('C'));
    assert_eq!(cursor.position(), 1);
    assert_eq!(cursor.collect::<Vec<_>>(), vec!['B', 'D']);
}

#[test]
fn insertion_before_cursor_neither_repeats_nor_skips() {
    let array = ObserverArray::from(vec!['A', 'B', 'C']);
    let mut cursor = array.cursor();
    assert_eq!(cursor.next(), Some('A'));

    array.insert(0, 'X').unwrap();
    assert_eq!(cursor.position(), 2);

    // 'A' is not seen again and 'B' is not skipped.
    assert_eq!(cursor.collect::<Vec<_>>(), vec!['B', 'C']);
}

#[test]
fn change_after_cursor_leaves_position() {
    let array = ObserverArray::from(vec!['A', 'B', 'C', 'D']);
    let mut cursor = array.cursor();
    cursor.next();

    array.insert(3, 'X').unwrap();
    assert_eq!(cursor.position(), 1);
}

#[test]
fn clear_resets_all_cursors() {
    let mut registry = Registry::new();
    let keys = [registry.link(0), registry.link(2), registry.link(4)];

    registry.clear_cursors();
    for key in keys {
        assert_eq!(registry.position(key), Some(0));
    }
}

#[test]
fn clear_through_array_resets_every_kind() {
    let array: ObserverArray<u32> = (0..6).collect();
    let mut forward = array.cursor();
    let mut limited = array.end_limited_cursor();
    let mut backward = array.backward_cursor();
    forward.next();
    forward.next();
    limited.next();
    backward.next();

    array.clear();
    assert_eq!(forward.position(), 0);
    assert_eq!(limited.position(), 0);
    assert_eq!(limited.end(), 0);
    assert_eq!(backward.position(), 0);
    assert_eq!(array.cursor_count(), 4);
}

#[test]
fn concurrent_cursors_adjust_by_own_position() {
    let array: ObserverArray<u32> = (0..8).collect();
    let mut early = array.cursor();
    let mut late = array.cursor();
    early.next();
    for _ in 0..5 {
        late.next();
    }

    array.remove(3).unwrap();
    assert_eq!(early.position(), 1);
    assert_eq!(late.position(), 4);

    array.insert(1, 100).unwrap();
    assert_eq!(early.position(), 1);
    assert_eq!(late.position(), 5);
}

#[test]
fn unlink_of_dead_key_is_harmless() {
    let mut registry = Registry::new();
    let a = registry.link(1);
    let b = registry.link(2);

    assert!(registry.unlink(a));
    assert!(!registry.unlink(a));

    registry.adjust_cursors(0, 1);
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.position(b), Some(3));
}

#[test]
#[should_panic(expected = "invalid adjustment")]
fn multi_element_adjustment_is_rejected() {
    let mut registry = Registry::new();
    registry.link(4);
    registry.adjust_cursors(1, -2);
}

#[test]
fn out_of_bounds_is_an_error() {
    let array: ObserverArray<u32> = ObserverArray::new();
    assert_eq!(array.remove(0), Err(Error::OutOfBounds { index: 0, len: 0 }));
    assert_eq!(
        array.insert(1, 7),
        Err(Error::OutOfBounds { index: 1, len: 0 })
    );
}

// =============================================================================
// Dispatch with re-entrant listeners
// =============================================================================

type Listener = Rc<dyn Fn(&Bus)>;

struct Bus {
    listeners: ObserverArray<Listener>,
    log: RefCell<Vec<&'static str>>,
}

impl Bus {
    fn new() -> Self {
        Self {
            listeners: ObserverArray::new(),
            log: RefCell::new(Vec::new()),
        }
    }

    fn emit(&self) {
        self.listeners.notify(|listener| listener(self));
    }

    fn log(&self, entry: &'static str) {
        self.log.borrow_mut().push(entry);
    }
}

fn listener<F: Fn(&Bus) + 'static>(f: F) -> Listener {
    Rc::new(f)
}

#[test]
fn listener_removes_itself() {
    let bus = Bus::new();
    bus.listeners.push(listener(|bus| {
        bus.log("once");
        bus.listeners.remove(0).unwrap();
    }));
    bus.listeners.push(listener(|bus| bus.log("always")));

    bus.emit();
    bus.emit();

    assert_eq!(*bus.log.borrow(), vec!["once", "always", "always"]);
}

#[test]
fn listener_removes_a_later_listener() {
    let bus = Bus::new();
    bus.listeners.push(listener(|bus| {
        bus.log("first");
        bus.listeners.remove(1).unwrap();
    }));
    bus.listeners.push(listener(|bus| bus.log("removed")));
    bus.listeners.push(listener(|bus| bus.log("third")));

    bus.emit();
    assert_eq!(*bus.log.borrow(), vec!["first", "third"]);
}

#[test]
fn listener_added_during_dispatch_waits() {
    let bus = Bus::new();
    bus.listeners.push(listener(|bus| {
        bus.log("adder");
        bus.listeners.push(listener(|bus| bus.log("added")));
    }));

    bus.emit();
    assert_eq!(*bus.log.borrow(), vec!["adder"]);
    assert_eq!(bus.listeners.len(), 2);
}

#[test]
fn listener_clears_during_dispatch() {
    let bus = Bus::new();
    bus.listeners.push(listener(|bus| {
        bus.log("clearer");
        bus.listeners.clear();
    }));
    bus.listeners.push(listener(|bus| bus.log("never")));

    bus.emit();
    assert_eq!(*bus.log.borrow(), vec!["clearer"]);
    assert!(bus.listeners.is_empty());
    assert_eq!(bus.listeners.cursor_count(), 0);
}

#[test]
fn nested_dispatch() {
    let bus = Bus::new();
    let depth = Rc::new(RefCell::new(0));
    let d = Rc::clone(&depth);
    bus.listeners.push(listener(move |bus| {
        bus.log("outer");
        *d.borrow_mut() += 1;
        if *d.borrow() == 1 {
            // Inner dispatch while the outer walk is still live.
            bus.emit();
        }
    }));
    bus.listeners.push(listener(|bus| bus.log("tail")));

    bus.emit();
    assert_eq!(
        *bus.log.borrow(),
        vec!["outer", "outer", "tail", "tail"]
    );
    assert_eq!(bus.listeners.cursor_count(), 0);
}
