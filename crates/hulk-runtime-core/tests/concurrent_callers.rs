//! Concurrent callers sharing one `Concatenator` and one set of inputs.

use std::ffi::CString;
use std::thread;

use hulk_runtime_core::{ConcatConfig, ConcatError, Concatenator};
use hulk_runtime_test_utils::{storage_disjoint, CONCAT_CASES};

const THREADS: usize = 8;
const ROUNDS: usize = 200;

#[test]
fn shared_concatenator_across_threads() {
    let concatenator = Concatenator::default();
    let inputs: Vec<(CString, CString, &[u8])> = CONCAT_CASES
        .iter()
        .map(|&(a, b, expected)| (CString::new(a).unwrap(), CString::new(b).unwrap(), expected))
        .collect();

    thread::scope(|s| {
        for _ in 0..THREADS {
            s.spawn(|| {
                for _ in 0..ROUNDS {
                    for (a, b, expected) in &inputs {
                        let out = concatenator.concat(a, b).unwrap();
                        assert_eq!(out.as_bytes(), *expected);
                        assert!(storage_disjoint(out.as_bytes_with_nul(), a.as_bytes_with_nul()));
                        assert!(storage_disjoint(out.as_bytes_with_nul(), b.as_bytes_with_nul()));
                    }
                }
            });
        }
    });

    // Shared inputs are untouched after every thread finished.
    for ((a, b, _), &(orig_a, orig_b, _)) in inputs.iter().zip(CONCAT_CASES) {
        assert_eq!(a.as_bytes(), orig_a);
        assert_eq!(b.as_bytes(), orig_b);
    }
}

#[test]
fn failures_on_one_thread_do_not_affect_others() {
    let tight = Concatenator::new(ConcatConfig::with_max_output_len(3)).unwrap();
    let roomy = Concatenator::default();

    thread::scope(|s| {
        let failing = s.spawn(|| {
            (0..ROUNDS)
                .map(|_| tight.concat(c"foo", c"bar"))
                .filter(|r| *r == Err(ConcatError::AllocationFailed { requested: 7 }))
                .count()
        });
        let succeeding = s.spawn(|| {
            (0..ROUNDS)
                .filter(|_| roomy.concat(c"foo", c"bar").is_ok_and(|out| out.as_bytes() == b"foobar"))
                .count()
        });
        assert_eq!(failing.join().unwrap(), ROUNDS);
        assert_eq!(succeeding.join().unwrap(), ROUNDS);
    });
}
