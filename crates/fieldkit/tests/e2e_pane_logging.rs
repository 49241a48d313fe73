//! End-to-end: fields, appender, and dialog working through one UI queue.

use std::path::PathBuf;
use std::sync::{Arc, Mutex, Weak};

use log::{Level, LevelFilter};

use fieldkit::prelude::dialog::open_error;
use fieldkit::prelude::fields::{PathField, TextField};
use fieldkit::prelude::log::{LogRecord, TextPaneAppender};
use fieldkit::prelude::observe::{FnObserver, Observable, Observer};
use fieldkit::prelude::surface::{TextPane, UiQueue};

#[test]
fn field_change_drives_log_pane() {
    let queue = UiQueue::spawn();
    let pane = TextPane::new();
    let appender = Arc::new(TextPaneAppender::attached(pane.clone(), queue.handle()));

    // A field observer that logs every change through the appender.
    let field = TextField::new("Server");
    let appender_for_obs = Arc::clone(&appender);
    let obs: Arc<dyn Observer<Option<String>>> =
        Arc::new(FnObserver::new(move |v: &Option<String>| {
            let value = v.as_deref().unwrap_or("<cleared>");
            appender_for_obs.append(LogRecord::new(
                Level::Info,
                format!("server changed to {value}"),
            ));
        }));
    let handle: Weak<dyn Observer<Option<String>>> = Arc::downgrade(&obs);
    field.register_observer(handle).unwrap();

    field.set_value(Some("alpha.example".into()));
    field.set_value(None);
    queue.shutdown();

    assert_eq!(
        pane.text(),
        "INFO  - server changed to alpha.example\nINFO  - server changed to <cleared>\n"
    );
}

#[test]
fn warn_threshold_keeps_only_the_error() {
    let appender = TextPaneAppender::new();
    appender.append(LogRecord::new(Level::Info, "a"));
    appender.append(LogRecord::new(Level::Error, "b"));
    appender.append(LogRecord::new(Level::Info, "c"));
    appender.set_threshold(LevelFilter::Warn);

    assert_eq!(appender.log_text(), "ERROR - b\n");
}

#[test]
fn browse_failure_surfaces_via_error_dialog() {
    let queue = UiQueue::spawn();
    let pane = TextPane::new();

    let field = PathField::file("Config").with_chooser(|_| Some(PathBuf::from("/nope/app.toml")));
    let chosen = Arc::new(Mutex::new(None));
    let chosen_clone = Arc::clone(&chosen);
    let obs: Arc<dyn Observer<Option<PathBuf>>> =
        Arc::new(FnObserver::new(move |v: &Option<PathBuf>| {
            *chosen_clone.lock().unwrap() = v.clone();
        }));
    let handle: Weak<dyn Observer<Option<PathBuf>>> = Arc::downgrade(&obs);
    field.register_observer(handle).unwrap();

    field.browse();
    assert_eq!(*chosen.lock().unwrap(), Some(PathBuf::from("/nope/app.toml")));

    // Pretend the pick failed downstream and surface the error.
    let err = std::io::Error::new(std::io::ErrorKind::NotFound, "/nope/app.toml not found");
    open_error(&err, &pane, &queue.handle());
    queue.shutdown();

    let text = pane.text();
    assert!(text.starts_with("Error\n"));
    assert!(text.contains("/nope/app.toml not found"));
}
