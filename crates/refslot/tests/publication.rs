//! Cross-Thread Ordering and Atomicity
//!
//! The reference assertion sequences run single-threaded; these tests
//! exercise the contracts that only matter when threads actually race:
//! release/acquire publication, indivisibility of compare-and-swap
//! under contention, and the permutation property of atomic swap.

use std::sync::Arc;
use std::thread;

use refslot::{access, ClassLayout, ObjectInstance, RefArray, SlotLocation, NULL_REF};

fn holder() -> (Arc<ObjectInstance>, SlotLocation) {
    let layout = Arc::new(
        ClassLayout::builder("pub_holder")
            .ref_field("payload")
            .ref_field("flag")
            .build()
            .unwrap(),
    );
    let object = Arc::new(ObjectInstance::new(layout));
    let slot = SlotLocation::instance_field(&object, "payload").unwrap();
    (object, slot)
}

#[test]
fn release_store_publishes_to_acquire_load() {
    let layout = Arc::new(
        ClassLayout::builder("pub_release_acquire")
            .ref_field("payload")
            .ref_field("flag")
            .build()
            .unwrap(),
    );
    let object = Arc::new(ObjectInstance::new(layout));

    let payload = SlotLocation::instance_field(&object, "payload").unwrap();
    let flag = SlotLocation::instance_field(&object, "flag").unwrap();

    static DATA: u8 = 7;
    static READY: u8 = 8;
    let data = &DATA as *const u8 as usize;
    let ready = &READY as *const u8 as usize;

    let writer_object = Arc::clone(&object);
    let writer = thread::spawn(move || unsafe {
        // Plain payload write, then release store on the flag: the
        // acquire load that sees the flag must also see the payload.
        access::put_plain(payload, data);
        access::put_release(flag, ready);
        drop(writer_object);
    });

    let reader_object = Arc::clone(&object);
    let reader = thread::spawn(move || {
        unsafe {
            while access::get_acquire(flag) != ready {
                std::hint::spin_loop();
            }
            let observed = access::get_plain(payload);
            drop(reader_object);
            observed
        }
    });

    writer.join().unwrap();
    let observed = reader.join().unwrap();
    assert_eq!(observed, data, "acquire reader missed released payload");
}

#[test]
fn volatile_write_is_seen_by_volatile_readers() {
    let (object, slot) = holder();

    static TOKEN: u8 = 5;
    let token = &TOKEN as *const u8 as usize;

    let writer_object = Arc::clone(&object);
    let writer = thread::spawn(move || unsafe {
        access::put_volatile(slot, token);
        drop(writer_object);
    });

    let mut readers = Vec::new();
    for _ in 0..4 {
        let reader_object = Arc::clone(&object);
        readers.push(thread::spawn(move || unsafe {
            loop {
                let observed = access::get_volatile(slot);
                if observed != NULL_REF {
                    drop(reader_object);
                    return observed;
                }
                std::hint::spin_loop();
            }
        }));
    }

    writer.join().unwrap();
    for reader in readers {
        assert_eq!(reader.join().unwrap(), token);
    }
}

#[test]
fn contended_cas_from_null_has_exactly_one_winner() {
    let array = Arc::new(RefArray::new(1));
    let slot = SlotLocation::array_element(&array, 0).unwrap();

    let mut handles = Vec::new();
    for i in 0..8usize {
        let array = Arc::clone(&array);
        handles.push(thread::spawn(move || {
            let token = Box::into_raw(Box::new(i as u64)) as usize;
            let won = unsafe { access::compare_and_swap(slot, NULL_REF, token) };
            drop(array);
            (token, won)
        }));
    }

    let results: Vec<(usize, bool)> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let winners: Vec<usize> = results
        .iter()
        .filter(|(_, won)| *won)
        .map(|(token, _)| *token)
        .collect();

    assert_eq!(winners.len(), 1, "strong CAS from null must have one winner");
    assert_eq!(unsafe { access::get_volatile(slot) }, winners[0]);
}

#[test]
fn concurrent_swaps_form_a_permutation_chain() {
    let array = Arc::new(RefArray::new(1));
    let slot = SlotLocation::array_element(&array, 0).unwrap();

    let mut handles = Vec::new();
    for i in 0..8usize {
        let array = Arc::clone(&array);
        handles.push(thread::spawn(move || {
            let token = Box::into_raw(Box::new(i as u64)) as usize;
            let previous = unsafe { access::get_and_set(slot, token) };
            drop(array);
            (token, previous)
        }));
    }

    let results: Vec<(usize, usize)> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let last = unsafe { access::get_volatile(slot) };

    // Each swap consumes the prior value; collectively the previous
    // values plus the surviving final value are exactly the initial
    // null plus every token, each seen once.
    let mut seen: Vec<usize> = results.iter().map(|(_, previous)| *previous).collect();
    seen.push(last);
    seen.sort_unstable();

    let mut expected: Vec<usize> = results.iter().map(|(token, _)| *token).collect();
    expected.push(NULL_REF);
    expected.sort_unstable();

    assert_eq!(seen, expected, "swap chain lost or duplicated a value");
}
