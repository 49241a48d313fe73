//! Labeled free-text preference field.

use std::sync::Weak;

use fieldkit_observe::{Observable, Observer, Result};

use crate::field::FieldCore;
use crate::line::labeled_line;

/// A labeled text field with a placeholder hint for the empty value.
///
/// The field owns the value and the change notification; the host wires it to
/// an actual input widget. Observers receive the new value (or `None` when
/// the field was cleared) on every notifying set.
pub struct TextField {
    core: FieldCore<String>,
    label: String,
    hint: String,
}

impl TextField {
    /// Create an empty field. Usable immediately; no further setup calls.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            core: FieldCore::new(),
            label: label.into(),
            hint: String::new(),
        }
    }

    /// Set the placeholder shown while the field holds no value.
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }

    /// Set an initial value without notifying anyone.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.core = FieldCore::with_value(value.into());
        self
    }

    /// Field label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Placeholder hint.
    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> Option<String> {
        self.core.value()
    }

    /// Replace the value and notify observers. Returns the previous value.
    pub fn set_value(&self, value: Option<String>) -> Option<String> {
        self.set_value_notify(value, true)
    }

    /// Replace the value, optionally notifying. Returns the previous value.
    pub fn set_value_notify(&self, value: Option<String>, notify: bool) -> Option<String> {
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "field.set", label = %self.label, notify);
        self.core.set_value_notify(value, notify)
    }

    /// Multi-value convenience; only the first element is stored.
    pub fn set_values(&self, values: &[String], notify: bool) -> Vec<String> {
        self.core.set_values(values, notify)
    }

    /// Current values (zero or one element).
    #[must_use]
    pub fn values(&self) -> Vec<String> {
        self.core.values()
    }

    /// One display line: `label: value` (hint when empty), clipped to
    /// `max_width` cells.
    #[must_use]
    pub fn render_line(&self, max_width: usize) -> String {
        let value = self.core.value();
        let content = value.as_deref().unwrap_or(&self.hint);
        labeled_line(&self.label, content, max_width)
    }
}

impl Observable<Option<String>> for TextField {
    fn register_observer(&self, observer: Weak<dyn Observer<Option<String>>>) -> Result<()> {
        self.core.register_observer(observer)
    }

    fn unregister_observer(&self, observer: &Weak<dyn Observer<Option<String>>>) -> Result<()> {
        self.core.unregister_observer(observer)
    }
}

impl std::fmt::Debug for TextField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextField")
            .field("label", &self.label)
            .field("value", &self.core.value())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldkit_observe::FnObserver;
    use std::sync::{Arc, Mutex};

    #[test]
    fn constructed_field_is_immediately_usable() {
        let field = TextField::new("Name").with_hint("<unset>");
        assert_eq!(field.value(), None);
        assert_eq!(field.render_line(40), "Name: <unset>");
    }

    #[test]
    fn set_value_notifies_with_new_value() {
        let field = TextField::new("Name");
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = Arc::clone(&seen);
        let obs: Arc<dyn Observer<Option<String>>> =
            Arc::new(FnObserver::new(move |v: &Option<String>| {
                seen_clone.lock().unwrap().push(v.clone());
            }));
        let handle: Weak<dyn Observer<Option<String>>> = Arc::downgrade(&obs);
        field.register_observer(handle).unwrap();

        let old = field.set_value(Some("alice".into()));
        assert_eq!(old, None);
        assert_eq!(*seen.lock().unwrap(), vec![Some("alice".to_string())]);
    }

    #[test]
    fn silent_set_does_not_notify() {
        let field = TextField::new("Name");
        let count = Arc::new(Mutex::new(0));
        let count_clone = Arc::clone(&count);
        let obs: Arc<dyn Observer<Option<String>>> =
            Arc::new(FnObserver::new(move |_: &Option<String>| {
                *count_clone.lock().unwrap() += 1;
            }));
        let handle: Weak<dyn Observer<Option<String>>> = Arc::downgrade(&obs);
        field.register_observer(handle).unwrap();

        field.set_value_notify(Some("x".into()), false);
        assert_eq!(*count.lock().unwrap(), 0);
    }

    #[test]
    fn render_line_prefers_value_over_hint() {
        let field = TextField::new("Name").with_hint("<unset>").with_value("bob");
        assert_eq!(field.render_line(40), "Name: bob");
    }

    #[test]
    fn render_line_clips_to_width() {
        let field = TextField::new("Name").with_value("a-very-long-value");
        assert_eq!(field.render_line(8), "Name: a-");
    }
}
