use crate::catalog;
use crate::config::{Config, TestArgs};
use crate::parser_api::ParserApiClient;
use crate::store::SessionStore;
use crate::types::{TestOutcome, TestRequest};
use anyhow::Result;
use log::{debug, info};
use regex::Regex;
use std::time::Duration;

pub async fn run(config: &Config, args: &TestArgs) -> Result<()> {
    let request = resolve_request(args)?;

    let store = SessionStore::new();
    let mut updates = store.subscribe();
    // Log state transitions in the background while the request runs.
    let watcher = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let state = updates.borrow_and_update().clone();
            debug!(
                "session state: loading={} error={:?}",
                state.is_loading, state.error
            );
        }
    });

    let result = submit_and_render(config, &request, &store).await;

    drop(store);
    let _ = watcher.await;

    result
}

async fn submit_and_render(
    config: &Config,
    request: &TestRequest,
    store: &SessionStore,
) -> Result<()> {
    store.set_error(None);

    if request.pattern.trim().is_empty() {
        return Err(fail(store, "Regex pattern is required"));
    }

    if request.sample.trim().is_empty() {
        return Err(fail(store, "Test string is required"));
    }

    if !validate_pattern(&request.pattern) {
        return Err(fail(store, "Invalid regex pattern"));
    }

    let client = ParserApiClient::new(&config.api_url, Duration::from_millis(config.timeout_ms))?;

    info!("Submitting pattern to {}", config.api_url);
    store.set_loading(true);
    let outcome = client.submit(request).await;
    store.set_loading(false);

    match outcome {
        Ok(outcome) => {
            render_outcome(&outcome);
            Ok(())
        }
        Err(err) => {
            store.set_error(Some(err.to_string()));
            Err(err.into())
        }
    }
}

fn fail(store: &SessionStore, message: &str) -> anyhow::Error {
    store.set_error(Some(message.to_string()));
    anyhow::anyhow!("{}", message)
}

fn resolve_request(args: &TestArgs) -> Result<TestRequest> {
    let mut request = match &args.example {
        Some(id) => match catalog::find(id) {
            Some((_, entry)) => entry.to_request(),
            None => anyhow::bail!("Unknown example id: {}", id),
        },
        None => TestRequest {
            pattern: String::new(),
            time_format: None,
            sample: String::new(),
        },
    };

    // Apply CLI overrides
    if let Some(ref pattern) = args.pattern {
        request.pattern = pattern.clone();
    }

    if let Some(ref time_format) = args.time_format {
        request.time_format = Some(time_format.clone());
    }

    if let Some(ref sample) = args.sample {
        request.sample = sample.clone();
    }

    Ok(request)
}

// A pattern may arrive with or without its wrapping slashes; only the bare
// expression is compiled.
fn validate_pattern(pattern: &str) -> bool {
    let bare = pattern.strip_prefix('/').unwrap_or(pattern);
    let bare = bare.strip_suffix('/').unwrap_or(bare);
    Regex::new(bare).is_ok()
}

fn render_outcome(outcome: &TestOutcome) {
    if !outcome.field_errors.is_empty() {
        println!("Parser warnings:");
        for warning in &outcome.field_errors {
            println!("  ! {}", warning);
        }
    }

    if let Some(ref parsed_time) = outcome.parsed_timestamp {
        println!("Parsed timestamp: {}", parsed_time);
    }

    if outcome.extracted_fields.is_empty() {
        if outcome.field_errors.is_empty() && outcome.parsed_timestamp.is_none() {
            println!("No fields were parsed from the test string.");
            println!("Check your regex pattern and try again.");
        }
        return;
    }

    println!("Extracted fields ({}):", outcome.extracted_fields.len());
    let width = outcome
        .extracted_fields
        .keys()
        .map(|name| name.len())
        .max()
        .unwrap_or(0);
    for (name, value) in &outcome.extracted_fields {
        println!("  {:width$}  {}", name, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_slash_wrapped_patterns() {
        assert!(validate_pattern("/^(?<all>.*)$/"));
        assert!(validate_pattern("^(?<all>.*)$"));
        assert!(validate_pattern("/abc"));
    }

    #[test]
    fn rejects_broken_patterns() {
        assert!(!validate_pattern("/(unclosed/"));
        assert!(!validate_pattern("(?<dup>a)(?<dup>b)"));
    }

    #[test]
    fn example_flags_override_catalog_values() {
        let args = TestArgs {
            example: Some("apache-common".to_string()),
            pattern: None,
            time_format: Some("%s".to_string()),
            sample: None,
        };

        let request = resolve_request(&args).expect("resolve");
        assert!(request.pattern.starts_with("/^"));
        assert_eq!(request.time_format.as_deref(), Some("%s"));
        assert!(!request.sample.is_empty());
    }

    #[test]
    fn unknown_example_id_is_an_error() {
        let args = TestArgs {
            example: Some("no-such-entry".to_string()),
            pattern: None,
            time_format: None,
            sample: None,
        };

        let err = resolve_request(&args).expect_err("must fail");
        assert!(err.to_string().contains("Unknown example id"));
    }
}
