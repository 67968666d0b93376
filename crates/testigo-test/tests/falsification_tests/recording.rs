//! Falsification Tests: Category A - Access Recording (F001-F020)

use proptest::prelude::*;
use testigo_core::{AccessKind, MemberError, Proxy, RESERVED_MEMBERS, Value};
use testigo_test::ScriptedTarget;

/// Scripted target with two properties and two methods.
fn probe_target() -> ScriptedTarget {
    ScriptedTarget::builder()
        .with_name("probe")
        .with_property("level", 3)
        .with_property("label", "alpha")
        .with_method("tick", |_| Ok(Value::Unset))
        .with_method("echo", |args| Ok(Value::list(args.to_vec())))
        .build()
}

// =============================================================================
// F001-F005: Log Append Claims
// =============================================================================

/// F001: A fresh proxy has recorded nothing
///
/// # Falsification Attempt
/// Construct a proxy and interrogate every query surface; any non-empty
/// answer falsifies the claim.
#[test]
fn f001_new_proxy_records_nothing() {
    let proxy = Proxy::new(probe_target());
    assert!(
        proxy.messages().is_empty(),
        "F001 FALSIFIED: fresh proxy reported messages {:?}",
        proxy.messages()
    );
    assert!(!proxy.is_called("level"));
    assert_eq!(proxy.number_of_times_called("level"), 0);
    assert!(proxy.log().is_empty());
}

/// F002: Every forwarded access appends exactly one entry
///
/// # Falsification Attempt
/// Mix reads, writes, calls, and failures; the log length must equal the
/// number of forwarded accesses, with no extras and no omissions.
#[test]
fn f002_every_access_appends_exactly_one_entry() {
    let mut proxy = Proxy::new(probe_target());
    let _ = proxy.get("level");
    let _ = proxy.set("label", "beta");
    let _ = proxy.call("tick", &[]);
    let _ = proxy.get("missing");
    let _ = proxy.call("missing", &[]);
    assert_eq!(
        proxy.log().len(),
        5,
        "F002 FALSIFIED: 5 accesses produced {} entries",
        proxy.log().len()
    );
}

/// F003: The log preserves access order
///
/// # Falsification Attempt
/// Interleave member names and compare the recorded sequence with the
/// access sequence, element by element.
#[test]
fn f003_log_preserves_access_order() {
    let mut proxy = Proxy::new(probe_target());
    let _ = proxy.get("label");
    let _ = proxy.call("tick", &[]);
    let _ = proxy.set("level", 9);
    let _ = proxy.get("label");
    let _ = proxy.call("echo", &[Value::Int(1)]);
    assert_eq!(
        proxy.messages(),
        vec!["label", "tick", "level", "label", "echo"],
        "F003 FALSIFIED: recorded order diverges from access order"
    );
}

/// F004: Duplicate accesses are all kept
///
/// # Falsification Attempt
/// Access the same member repeatedly; any deduplication falsifies the
/// claim.
#[test]
fn f004_duplicate_accesses_are_all_kept() {
    let mut proxy = Proxy::new(probe_target());
    for _ in 0..3 {
        proxy.call("tick", &[]).unwrap();
    }
    assert_eq!(proxy.messages(), vec!["tick", "tick", "tick"]);
    assert_eq!(proxy.number_of_times_called("tick"), 3);
}

/// F005: A failed lookup is still logged, as the last entry
///
/// # Falsification Attempt
/// Access a name no target knows; if the log misses the attempt or the
/// error hides the name, the claim is falsified.
#[test]
fn f005_failed_lookup_still_logged_as_last_entry() {
    let proxy = Proxy::new(probe_target());
    let _ = proxy.get("level");
    let err = proxy.get("no_such_member").unwrap_err();
    assert_eq!(err, MemberError::not_found("probe", "no_such_member"));

    let last = proxy.log().last().unwrap();
    assert_eq!(
        last.member, "no_such_member",
        "F005 FALSIFIED: failed lookup left no record"
    );
    assert_eq!(last.kind, AccessKind::Get);
}

// =============================================================================
// F006-F010: Reserved Names and Query Claims
// =============================================================================

/// F006: Reserved reads bypass the log
///
/// # Falsification Attempt
/// Read every reserved name; a single log entry falsifies the claim.
#[test]
fn f006_reserved_reads_bypass_log() {
    let proxy = Proxy::new(probe_target());
    for name in RESERVED_MEMBERS {
        proxy.get(name).unwrap();
    }
    assert!(
        proxy.messages().is_empty(),
        "F006 FALSIFIED: reserved reads were logged: {:?}",
        proxy.messages()
    );
}

/// F007: Reserved names reject writes and calls without logging
///
/// # Falsification Attempt
/// Write to and call every reserved name; success, or any log entry,
/// falsifies the claim.
#[test]
fn f007_reserved_writes_and_calls_rejected_unlogged() {
    let mut proxy = Proxy::new(probe_target());
    for name in RESERVED_MEMBERS {
        assert!(proxy.set(name, 1).is_err());
        assert!(proxy.call(name, &[]).is_err());
    }
    assert!(proxy.messages().is_empty());
}

/// F008: `is_called` holds exactly when the count is positive
///
/// # Falsification Attempt
/// Compare both query surfaces for accessed and never-accessed names.
#[test]
fn f008_is_called_iff_count_positive() {
    let mut proxy = Proxy::new(probe_target());
    let _ = proxy.get("level");
    let _ = proxy.call("tick", &[]);
    let _ = proxy.call("tick", &[]);

    for name in ["level", "label", "tick", "echo", "missing"] {
        let count = proxy.number_of_times_called(name);
        assert_eq!(
            proxy.is_called(name),
            count > 0,
            "F008 FALSIFIED: is_called({name}) disagrees with count {count}"
        );
    }
}

/// F009: A cloned log handle observes later accesses
///
/// # Falsification Attempt
/// Take a handle before any access; if it misses entries appended
/// afterwards, the claim is falsified.
#[test]
fn f009_cloned_log_handle_sees_later_accesses() {
    let proxy = Proxy::new(probe_target());
    let handle = proxy.log().clone();
    let _ = proxy.get("level");
    let _ = proxy.get("label");
    assert_eq!(
        handle.messages(),
        vec!["level", "label"],
        "F009 FALSIFIED: handle missed accesses appended after cloning"
    );
}

proptest! {
    /// F010: The recorded sequence equals the access sequence
    ///
    /// # Falsification Attempt
    /// Drive the proxy with arbitrary member-name sequences, valid and
    /// invalid mixed; any divergence between input and record falsifies
    /// the claim.
    #[test]
    fn f010_recorded_sequence_equals_access_sequence(
        names in prop::collection::vec(
            prop::sample::select(vec!["level", "label", "tick", "echo", "missing"]),
            0..48,
        )
    ) {
        let proxy = Proxy::new(probe_target());
        for name in &names {
            let _ = proxy.get(name);
        }
        prop_assert_eq!(proxy.messages(), names);
    }
}
