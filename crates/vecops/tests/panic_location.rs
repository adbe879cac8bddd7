//! Fatal paths report the caller's location, not a line inside the crate.
//!
//! Kept in its own test binary since it swaps the global panic hook.

use std::cell::RefCell;
use std::panic;

use vecops::config::{OpsConfig, ViolationPolicy};
use vecops::ops::{div, dot};
use vecops::Vector;

thread_local! {
    static PANIC_FILE: RefCell<Option<String>> = RefCell::new(None);
}

fn panic_file<F>(f: F) -> String
where
    F: FnOnce() + panic::UnwindSafe,
{
    panic::set_hook(Box::new(|info| {
        let file = info.location().map(|loc| loc.file().to_string());
        PANIC_FILE.with(|slot| *slot.borrow_mut() = file);
    }));
    let result = panic::catch_unwind(f);
    let _ = panic::take_hook();
    assert!(result.is_err(), "expected a panic");
    PANIC_FILE
        .with(|slot| slot.borrow_mut().take())
        .expect("panic hook did not record a location")
}

// ---------------------------------------------------------------------------
// Caller location
// ---------------------------------------------------------------------------

#[test]
fn fatal_paths_point_at_caller() {
    let a = Vector::from_vec(vec![1.0, 2.0]);
    let short = Vector::from_vec(vec![1.0]);
    let zeros = Vector::zeros(2);

    let files = [
        panic_file(|| {
            let _ = &a + &short;
        }),
        panic_file(|| {
            let _ = &a - &short;
        }),
        panic_file(|| {
            let _ = &a * &short;
        }),
        panic_file(|| {
            let _ = &a / &zeros;
        }),
        panic_file(|| {
            let cfg = OpsConfig::new(ViolationPolicy::Panic);
            let _ = cfg.enforce(dot(&a, &short));
        }),
        panic_file(|| {
            let cfg = OpsConfig::new(ViolationPolicy::Panic);
            let _ = cfg.enforce(div(&a, &zeros));
        }),
    ];

    for file in files.iter() {
        assert!(
            file.ends_with("panic_location.rs"),
            "panic reported at {} instead of the calling test",
            file
        );
    }
}
