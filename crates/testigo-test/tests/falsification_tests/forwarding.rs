//! Falsification Tests: Category B - Transparent Forwarding (F021-F040)

use testigo_core::{Proxy, Target, Value};
use testigo_subjects::{Greed, Television, Text};
use testigo_test::ScriptedTarget;

// =============================================================================
// F021-F025: Transparency Claims
// =============================================================================

/// F021: A proxied read answers the same as a direct read
///
/// # Falsification Attempt
/// Put identical subjects in front of and behind a proxy; any difference
/// between their answers falsifies transparency.
#[test]
fn f021_proxied_read_equals_direct_read() {
    let mut subject = Television::new();
    subject.set_value(7);
    let proxy = Proxy::new(subject.clone());

    assert_eq!(
        proxy.get("value").unwrap(),
        subject.get_member("value").unwrap(),
        "F021 FALSIFIED: proxied read diverges from direct read"
    );
    assert_eq!(proxy.get("value").unwrap(), Value::Int(7));
}

/// F022: A proxied call answers the same as a direct call
#[test]
fn f022_proxied_call_equals_direct_call() {
    let mut direct = Television::new();
    let mut proxy = Proxy::new(Television::new());

    direct.toggle();
    proxy.call("toggle", &[]).unwrap();

    assert_eq!(
        proxy.call("is_on", &[]).unwrap(),
        Value::Bool(direct.is_on()),
        "F022 FALSIFIED: proxied call diverges from direct call"
    );
}

/// F023: A write through the proxy reaches the target
///
/// # Falsification Attempt
/// Write through the proxy, then unwrap the target and read it directly.
#[test]
fn f023_write_through_proxy_reaches_target() {
    let mut proxy = Proxy::new(Television::new());
    proxy.set("value", 10).unwrap();

    let target = proxy.into_target();
    assert_eq!(
        target.get_member("value").unwrap(),
        Value::Int(10),
        "F023 FALSIFIED: the write never reached the target"
    );
}

/// F024: Reading a method member executes nothing
///
/// # Falsification Attempt
/// Read `toggle` without calling it; if the power flipped, the read had
/// a side effect and the claim is falsified.
#[test]
fn f024_reading_method_member_executes_nothing() {
    let mut proxy = Proxy::new(Television::new());
    let handle = proxy.get("toggle").unwrap();
    assert_eq!(handle, Value::method("toggle"));
    assert_eq!(
        proxy.call("is_on", &[]).unwrap(),
        Value::Bool(false),
        "F024 FALSIFIED: reading the method flipped the power"
    );
    // Both the read and the probing call were still recorded.
    assert_eq!(proxy.messages(), vec!["toggle", "is_on"]);
}

/// F025: Replacing the target switches behavior, not the log
///
/// # Falsification Attempt
/// Swap a television for a text mid-stream; earlier entries must stay,
/// new accesses must resolve against the new target only.
#[test]
fn f025_replace_target_switches_behavior_keeps_log() {
    let mut proxy = Proxy::new(Television::new());
    let _ = proxy.get("value");

    proxy.replace_target(Text::new("after swap"));

    assert_eq!(
        proxy.call("split_operation", &[]).unwrap(),
        Value::text_list(["after", "swap"])
    );
    // The old target's members are gone; the attempt is still recorded.
    assert!(proxy.get("value").is_err());
    assert_eq!(
        proxy.messages(),
        vec!["value", "split_operation", "value"],
        "F025 FALSIFIED: log lost entries across the target swap"
    );
}

// =============================================================================
// F026-F030: Rebinding and Boundary Claims
// =============================================================================

/// F026: A target swap is not an access
///
/// # Falsification Attempt
/// Swap targets twice in a row; any new log entry falsifies the claim.
#[test]
fn f026_replace_target_is_not_an_access() {
    let mut proxy = Proxy::new(Television::new());
    proxy.call("toggle", &[]).unwrap();

    proxy.replace_target(Television::new());
    proxy.replace_target(Greed::new());

    assert_eq!(
        proxy.messages(),
        vec!["toggle"],
        "F026 FALSIFIED: target swap appeared in the log"
    );
}

/// F027: Results can feed replacement targets
///
/// # Falsification Attempt
/// Uppercase a text through the proxy, rebind the proxy to the result,
/// split through the same proxy. Wrong words or wrong messages falsify
/// the pipeline claim.
#[test]
fn f027_result_feeds_replacement_target() {
    let mut proxy = Proxy::new(Text::new("Code Mash 2009"));

    let upper = proxy.call("upper_operation", &[]).unwrap();
    proxy.replace_target(Text::new(upper.as_text().unwrap()));
    let words = proxy.call("split_operation", &[]).unwrap();

    assert_eq!(words, Value::text_list(["CODE", "MASH", "2009"]));
    assert_eq!(
        proxy.messages(),
        vec!["upper_operation", "split_operation"],
        "F027 FALSIFIED: pipeline recorded the wrong messages"
    );
}

/// F028: One proxy serves unrelated targets over its lifetime
#[test]
fn f028_same_proxy_serves_unrelated_targets() {
    let mut proxy = Proxy::new(Television::new());
    proxy.call("toggle", &[]).unwrap();

    proxy.replace_target(Greed::new());
    let score = proxy
        .call("score", &[Value::Int(5), Value::Int(5), Value::Int(5)])
        .unwrap();

    assert_eq!(score, Value::Int(500));
    assert_eq!(proxy.messages(), vec!["toggle", "score"]);
}

/// F029: Call arguments pass through untouched
///
/// # Falsification Attempt
/// Echo the arguments back through a scripted method; any reordering or
/// alteration falsifies the claim.
#[test]
fn f029_call_arguments_pass_through_untouched() {
    let mut proxy = Proxy::new(
        ScriptedTarget::builder()
            .with_method("echo", |args| Ok(Value::list(args.to_vec())))
            .build(),
    );

    let args = [Value::Int(3), Value::text("x"), Value::Bool(true)];
    let result = proxy.call("echo", &args).unwrap();
    assert_eq!(
        result,
        Value::list(args.to_vec()),
        "F029 FALSIFIED: arguments were altered in transit"
    );
}

/// F030: Errors carry the target and member names through the proxy
#[test]
fn f030_error_names_survive_the_proxy() {
    let proxy = Proxy::new(Television::new());
    let err = proxy.get("antenna").unwrap_err();
    assert_eq!(err.target(), "television");
    assert_eq!(err.member(), "antenna");
    assert_eq!(err.to_string(), "`television` has no member `antenna`");
}
