use insta::assert_debug_snapshot;

use carrier::{Channel, Error, Optional, Outcome, Sequence};

fn parse(s: &str) -> Outcome<i64, String> {
    Outcome::from(s.parse::<i64>()).map_err(|e| format!("{s}: {e}"))
}

fn lookup<'a>(pairs: &'a Sequence<(&str, &str)>, key: &str) -> Optional<&'a str> {
    pairs.find(|(k, _)| *k == key).map(|(_, v)| *v)
}

#[test]
fn test_parse_and_sum() {
    let total = Sequence::from(["1", "2", "3"])
        .try_fold(0, |acc, s| parse(s).map(|n| acc + n));
    assert_debug_snapshot!(total, @r"
    Success(
        6,
    )
    ");
}

#[test]
fn test_parse_and_sum_stops_at_bad_input() {
    let total = Sequence::from(["1", "x", "3"])
        .try_fold(0, |acc, s| parse(s).map(|n| acc + n));
    assert_debug_snapshot!(total, @r#"
    Failure(
        "x: invalid digit found in string",
    )
    "#);
}

#[test]
fn test_collect_outcomes() {
    let outcomes: Sequence<Outcome<i32, &str>> =
        Sequence::from([Outcome::success(1), Outcome::success(2)]);
    let collected = outcomes.try_fold(Vec::new(), |mut acc, outcome| {
        outcome.map(move |v| {
            acc.push(v);
            acc
        })
    });
    assert_eq!(collected, Outcome::success(vec![1, 2]));
}

#[test]
fn test_optional_lookup_into_outcome() {
    let pairs = Sequence::from([("port", "8080"), ("host", "localhost"), ("retries", "many")]);

    let port = lookup(&pairs, "port")
        .ok_or("missing port".to_string())
        .and_then(parse);
    assert_eq!(port, Outcome::success(8080));

    let missing = lookup(&pairs, "timeout")
        .ok_or("missing timeout".to_string())
        .and_then(parse);
    assert_eq!(missing, Outcome::failure("missing timeout".to_string()));

    let retries = lookup(&pairs, "retries").map(parse).transpose();
    assert_eq!(
        retries,
        Outcome::failure("many: invalid digit found in string".to_string())
    );

    let optional_timeout = lookup(&pairs, "timeout").map(parse).transpose();
    assert_eq!(optional_timeout, Outcome::success(Optional::absent()));
}

#[test]
fn test_words_pipeline() {
    let lines = Sequence::from(["the quick brown", "", "fox jumps"]);
    let words = lines
        .filter(|line| !line.is_empty())
        .flat_map(|line| line.split(' ').collect())
        .enumerate()
        .filter_map(|(i, word)| Optional::then_some(i % 2 == 0, word.to_uppercase()));
    assert_debug_snapshot!(words, @r#"
    Sequence {
        items: [
            "THE",
            "BROWN",
            "JUMPS",
        ],
    }
    "#);
}

#[test]
fn test_fold_over_optionals() {
    let readings = Sequence::from([Optional::present(3), Optional::absent(), Optional::present(4)]);
    let present: Sequence<i32> = readings.clone().flat_map(Optional::into_sequence);
    assert_eq!(present.fold(0, |a, b| a + b), 7);
    assert_eq!(readings.position(Optional::is_absent), Optional::present(1));
}

#[test]
fn test_contract_violations_are_distinguishable() {
    let s = Sequence::from([1, 2, 3]);
    assert_debug_snapshot!(s.nth(4), @r"
    Err(
        IndexOutOfRange {
            index: 4,
            len: 3,
        },
    )
    ");

    let failed: Outcome<i32, &str> = Outcome::failure("boom");
    let error = failed.unwrap().unwrap_err();
    assert_eq!(error.expected_channel(), Some(Channel::Success));
    assert!(matches!(error, Error::UnwrapOnWrongVariant { .. }));

    let absent: Optional<i32> = Optional::absent();
    assert!(matches!(
        absent.expect("config loaded"),
        Err(Error::UnwrapOnAbsent { message: Some(m) }) if m == "config loaded"
    ));

    assert!(matches!(
        s.step_by(0),
        Err(Error::InvalidArgument { name: "step", .. })
    ));
}

#[test]
fn test_receiver_untouched_by_queries() {
    let s = Sequence::from([5, 6, 7]);
    let before = s.clone();
    let _ = s.find(|n| *n > 5);
    let _ = s.any(|n| *n > 6);
    let _ = s.position(|n| *n == 7);
    let _ = s.next_if(|n| *n == 5);
    let _ = s.try_for_each(|n| Outcome::<(), i32>::failure(*n));
    assert_eq!(s, before);
}
