use log_capture::{bootstrap_tracing, container, set_log_level, Level, Metadata, METADATA_KEY_CONFLICT};

#[test]
fn captures_events_by_target() {
    bootstrap_tracing().unwrap();
    let container = container("bridge.basic");
    container.reset();

    tracing::info!(target: "bridge.basic", old = 0, new = 20, "value changed");
    tracing::debug!(target: "bridge.basic", "below the default level");

    let messages = container.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(
        messages[0].to_string(),
        "info value changed|new=20;old=0|tracing_bridge.rs|tracing_bridge"
    );
    assert!(messages[0].line() > 0);
}

#[test]
fn bootstrap_tracing_is_idempotent() {
    bootstrap_tracing().unwrap();
    bootstrap_tracing().unwrap();
    assert!(tracing::subscriber::set_global_default(tracing_subscriber::registry()).is_err());
}

#[test]
fn span_fields_act_as_logger_metadata() {
    bootstrap_tracing().unwrap();
    let container = container("bridge.span");
    container.reset();

    let outer = tracing::info_span!("outer", request_id = "r-1", user = tracing::field::Empty);
    let _outer = outer.enter();
    outer.record("user", "ana");
    let inner = tracing::info_span!("inner", step = 2);
    let _inner = inner.enter();

    tracing::warn!(target: "bridge.span", attempt = 1, "retrying");
    tracing::warn!(target: "bridge.span", user = "bob", step = 3, "clashing fields");

    let messages = container.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(
        messages[0].metadata(),
        Some(&Metadata::from([
            ("attempt".to_string(), "1".to_string()),
            ("request_id".to_string(), "r-1".to_string()),
            ("step".to_string(), "2".to_string()),
            ("user".to_string(), "ana".to_string()),
        ]))
    );
    assert_eq!(messages[0].level(), Level::Warning);
    assert_eq!(
        messages[1].metadata(),
        Some(&Metadata::from([(
            METADATA_KEY_CONFLICT.to_string(),
            "step,user".to_string()
        )]))
    );
}

#[test]
fn label_levels_filter_events() {
    bootstrap_tracing().unwrap();
    let container = container("bridge.filtered");
    container.reset();

    set_log_level(Level::Error, "bridge.filtered");
    tracing::warn!(target: "bridge.filtered", "dropped");
    tracing::error!(target: "bridge.filtered", "kept");

    set_log_level(Level::Trace, "bridge.filtered");
    tracing::trace!(target: "bridge.filtered", "kept too");

    let texts: Vec<String> = container
        .messages()
        .iter()
        .map(|m| m.message().to_string())
        .collect();
    assert_eq!(texts, vec!["kept", "kept too"]);
}

#[test]
fn own_diagnostics_are_not_captured() {
    bootstrap_tracing().unwrap();
    set_log_level(Level::Trace, "log_capture");
    let own = container("log_capture");
    own.reset();

    let other = container("bridge.own_diagnostics");
    other.reset();
    set_log_level(Level::Info, "bridge.own_diagnostics");

    assert!(own.is_empty());
    assert!(other.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn events_from_many_tasks_are_all_captured() {
    bootstrap_tracing().unwrap();
    let container = container("bridge.async");
    container.reset();

    let tasks: Vec<_> = (0..8)
        .map(|task| {
            tokio::spawn(async move {
                for i in 0..50 {
                    tracing::info!(target: "bridge.async", task, i, "tick");
                    tokio::task::yield_now().await;
                }
            })
        })
        .collect();
    for task in tasks {
        task.await.unwrap();
    }

    assert_eq!(container.len(), 8 * 50);
}
