//! End-to-end do-block scenarios through the public API.

use outcome::aggregate::{collect, collect_keyed, collect_tuple, sequence};
use outcome::prelude::*;
use std::cell::Cell;
use std::collections::BTreeMap;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Debug, Clone, PartialEq)]
enum ConfigError {
    Missing(&'static str),
    Invalid { key: &'static str, value: String },
}

fn lookup(env: &BTreeMap<&'static str, String>, key: &'static str) -> Outcome<String, ConfigError> {
    success_if_some(env.get(key).cloned(), || ConfigError::Missing(key))
}

fn parse_port(raw: String) -> Outcome<u16, ConfigError> {
    match raw.parse::<u16>() {
        Ok(port) if port > 0 => success(port),
        _ => failure(ConfigError::Invalid { key: "port", value: raw }),
    }
}

fn non_empty(key: &'static str, raw: String) -> Outcome<String, ConfigError> {
    success_if(raw, |raw| !raw.trim().is_empty(), |value| ConfigError::Invalid { key, value })
}

fn env(pairs: &[(&'static str, &str)]) -> BTreeMap<&'static str, String> {
    pairs.iter().map(|(k, v)| (*k, v.to_string())).collect()
}

#[test]
fn program_form_reads_and_validates_config() {
    init_logging();

    let host_of = |env: &BTreeMap<&'static str, String>| {
        run(init(lookup(env, "host"), once(|raw: String| non_empty("host", raw)).map_return(Pure)))
    };

    assert_eq!(host_of(&env(&[("host", "example.org")])), success("example.org".to_string()));
    assert_eq!(host_of(&env(&[])), failure(ConfigError::Missing("host")));
    assert_eq!(
        host_of(&env(&[("host", "  ")])),
        failure(ConfigError::Invalid { key: "host", value: "  ".to_string() })
    );

    let port = host_of(&env(&[("host", "8080")])).chain(parse_port);
    assert_eq!(port, success(8080));
}

#[test]
fn closure_form_stops_before_later_lookups() {
    init_logging();
    let lookups = Cell::new(0);
    let counted = |env: &BTreeMap<&'static str, String>, key| {
        lookups.set(lookups.get() + 1);
        lookup(env, key)
    };

    let address = |env: &BTreeMap<&'static str, String>| -> Outcome<String, ConfigError> {
        attempt(|| {
            let host = counted(env, "host").bind()?;
            let port = counted(env, "port").chain(parse_port).bind()?;
            Ok(format!("{host}:{port}"))
        })
    };

    assert_eq!(address(&env(&[("host", "localhost"), ("port", "80")])), success("localhost:80".to_string()));
    assert_eq!(lookups.get(), 2);

    lookups.set(0);
    assert_eq!(address(&env(&[("port", "80")])), failure(ConfigError::Missing("host")));
    assert_eq!(lookups.get(), 1);
}

#[test]
fn aggregates_combine_independent_lookups() {
    init_logging();
    let full = env(&[("host", "example.org"), ("port", "443"), ("user", "admin")]);

    let all = collect(["host", "user"].map(|key| lookup(&full, key)));
    assert_eq!(all, success(vec!["example.org".to_string(), "admin".to_string()]));

    let keyed: Outcome<BTreeMap<_, _>, _> =
        collect_keyed(["host", "user", "group"].map(|key| (key, lookup(&full, key))));
    assert_eq!(keyed, failure(ConfigError::Missing("group")));

    let tuple = collect_tuple::<ConfigError, _>((lookup(&full, "host"), lookup(&full, "port").chain(parse_port)));
    assert_eq!(tuple, success(("example.org".to_string(), 443)));
}

#[test]
fn sequence_runs_tasks_until_the_first_failure() {
    init_logging();
    let started = Cell::new(0);
    let task = |n: i32| {
        let started = &started;
        move || {
            started.set(started.get() + 1);
            success_if(n, |n| *n < 3, |n| format!("{n} rejected"))
        }
    };

    assert_eq!(sequence([task(1), task(2)]), success(vec![1, 2]));
    started.set(0);
    assert_eq!(sequence([task(1), task(5), task(2)]), failure("5 rejected".to_string()));
    assert_eq!(started.get(), 2);
}

#[cfg(feature = "async")]
#[test]
fn async_forms_agree_with_sync_forms() {
    use futures::executor::block_on;
    use std::future::ready;

    init_logging();
    let config = env(&[("host", ""), ("port", "not-a-port")]);

    let sync = run(init(lookup(&config, "host"), once(|raw: String| non_empty("host", raw)).map_return(Pure)));
    let program = init(
        ready(lookup(&config, "host")),
        once(|raw: String| ready(non_empty("host", raw))).map_return(Pure),
    );
    assert_eq!(block_on(run_async(program)), sync);

    let port = block_on(attempt_async(|| async {
        let raw = ready(lookup(&config, "port")).await.bind()?;
        Ok::<_, ConfigError>(parse_port(raw).bind()?)
    }));
    assert_eq!(port, parse_port("not-a-port".to_string()));
}
