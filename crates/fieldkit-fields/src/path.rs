//! File and directory preference fields.
//!
//! The native chooser dialog is an external collaborator, injected as a
//! callback. `browse()` seeds the chooser from the current value (falling
//! back to the process working directory), stores an accepted pick, and
//! notifies observers — mirroring the select-button flow of a picker widget.

use std::path::PathBuf;
use std::sync::Weak;

use fieldkit_observe::{Observable, Observer, Result};

use crate::field::FieldCore;
use crate::line::labeled_line;

/// What the chooser should pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// A regular file.
    File,
    /// A directory.
    Directory,
}

/// Extension filter for file choosers, e.g. `("*.toml", "Config files")`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileFilter {
    /// Glob-style extension patterns.
    pub extensions: Vec<String>,
    /// Human-readable names, parallel to `extensions`.
    pub names: Vec<String>,
    /// Index of the pattern selected by default.
    pub default_index: usize,
}

impl FileFilter {
    /// Build a filter from parallel pattern/name pairs.
    #[must_use]
    pub fn new(
        extensions: impl IntoIterator<Item = impl Into<String>>,
        names: impl IntoIterator<Item = impl Into<String>>,
        default_index: usize,
    ) -> Self {
        Self {
            extensions: extensions.into_iter().map(Into::into).collect(),
            names: names.into_iter().map(Into::into).collect(),
            default_index,
        }
    }
}

/// Everything a chooser callback needs to present its dialog.
#[derive(Debug, Clone)]
pub struct ChooseRequest {
    /// File or directory selection.
    pub kind: PathKind,
    /// Directory to open the dialog in.
    pub start: PathBuf,
    /// Message/hint text for the dialog.
    pub hint: String,
    /// Extension filter; always `None` for directory choosers.
    pub filter: Option<FileFilter>,
}

type Chooser = Box<dyn Fn(&ChooseRequest) -> Option<PathBuf> + Send + Sync>;

/// A labeled path field bound to a file or directory chooser.
pub struct PathField {
    core: FieldCore<PathBuf>,
    kind: PathKind,
    label: String,
    hint: String,
    filter: Option<FileFilter>,
    chooser: Option<Chooser>,
}

impl PathField {
    /// Create a file field.
    #[must_use]
    pub fn file(label: impl Into<String>) -> Self {
        Self::new(PathKind::File, label)
    }

    /// Create a directory field. Directory fields never carry an extension
    /// filter.
    #[must_use]
    pub fn directory(label: impl Into<String>) -> Self {
        Self::new(PathKind::Directory, label)
    }

    fn new(kind: PathKind, label: impl Into<String>) -> Self {
        Self {
            core: FieldCore::new(),
            kind,
            label: label.into(),
            hint: String::new(),
            filter: None,
            chooser: None,
        }
    }

    /// Set the hint shown while no path is selected; also passed to the
    /// chooser as its dialog message.
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }

    /// Set the extension filter. Ignored on directory fields.
    #[must_use]
    pub fn with_filter(mut self, filter: FileFilter) -> Self {
        if self.kind == PathKind::File {
            self.filter = Some(filter);
        }
        self
    }

    /// Inject the chooser callback standing in for the native dialog.
    #[must_use]
    pub fn with_chooser(
        mut self,
        chooser: impl Fn(&ChooseRequest) -> Option<PathBuf> + Send + Sync + 'static,
    ) -> Self {
        self.chooser = Some(Box::new(chooser));
        self
    }

    /// Field label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Selection kind.
    #[must_use]
    pub fn kind(&self) -> PathKind {
        self.kind
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> Option<PathBuf> {
        self.core.value()
    }

    /// Replace the value and notify observers. Returns the previous value.
    pub fn set_value(&self, value: Option<PathBuf>) -> Option<PathBuf> {
        self.set_value_notify(value, true)
    }

    /// Replace the value, optionally notifying. Returns the previous value.
    pub fn set_value_notify(&self, value: Option<PathBuf>, notify: bool) -> Option<PathBuf> {
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "field.set", label = %self.label, notify);
        self.core.set_value_notify(value, notify)
    }

    /// Multi-value convenience; only the first element is stored.
    pub fn set_values(&self, values: &[PathBuf], notify: bool) -> Vec<PathBuf> {
        self.core.set_values(values, notify)
    }

    /// Current values (zero or one element).
    #[must_use]
    pub fn values(&self) -> Vec<PathBuf> {
        self.core.values()
    }

    /// Clear the selection and notify observers.
    pub fn clear_value(&self) {
        self.set_value(None);
    }

    /// Run the chooser and store an accepted pick.
    ///
    /// The dialog is seeded with the current value, or the process working
    /// directory when the field is empty. Returns the accepted path, if any;
    /// a cancelled dialog (or a field with no chooser) leaves the value
    /// untouched and notifies nobody.
    pub fn browse(&self) -> Option<PathBuf> {
        let chooser = self.chooser.as_ref()?;
        let start = self
            .core
            .value()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
        let request = ChooseRequest {
            kind: self.kind,
            start,
            hint: self.hint.clone(),
            filter: self.filter.clone(),
        };
        let picked = chooser(&request)?;
        self.set_value(Some(picked.clone()));
        Some(picked)
    }

    /// One display line: `label: path` (hint when empty), clipped to
    /// `max_width` cells.
    #[must_use]
    pub fn render_line(&self, max_width: usize) -> String {
        let value = self.core.value();
        let content = value
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| self.hint.clone());
        labeled_line(&self.label, &content, max_width)
    }
}

impl Observable<Option<PathBuf>> for PathField {
    fn register_observer(&self, observer: Weak<dyn Observer<Option<PathBuf>>>) -> Result<()> {
        self.core.register_observer(observer)
    }

    fn unregister_observer(&self, observer: &Weak<dyn Observer<Option<PathBuf>>>) -> Result<()> {
        self.core.unregister_observer(observer)
    }
}

impl std::fmt::Debug for PathField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PathField")
            .field("label", &self.label)
            .field("kind", &self.kind)
            .field("value", &self.core.value())
            .field("has_chooser", &self.chooser.is_some())
            .finish()
    }
}
