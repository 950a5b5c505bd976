//! Type-safe key bindings with help metadata.
//!
//! Both the select and table components expose their navigation through
//! [`Binding`] values grouped into keymap structs. A binding pairs the key
//! combinations that trigger an action with the short help text a host
//! application can surface, and can be disabled without being removed so
//! help output stays stable.

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single action bound to one or more key combinations.
///
/// # Examples
///
/// ```
/// use backoffice_widgets::key::Binding;
/// use crossterm::event::KeyCode;
///
/// let next = Binding::new(vec![KeyCode::Right, KeyCode::Char('l')])
///     .with_help("→/l", "next page");
/// assert_eq!(next.help_key, "→/l");
/// ```
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<(KeyCode, KeyModifiers)>,
    /// Short key label shown in help output (e.g. "↑/k").
    pub help_key: String,
    /// Action description shown in help output (e.g. "up").
    pub help_desc: String,
    enabled: bool,
}

impl Binding {
    /// Creates a binding that matches any of the given keys without modifiers.
    pub fn new(keys: Vec<KeyCode>) -> Self {
        Self {
            keys: keys.into_iter().map(|k| (k, KeyModifiers::NONE)).collect(),
            help_key: String::new(),
            help_desc: String::new(),
            enabled: true,
        }
    }

    /// Adds a modified key combination (e.g. ctrl+a) to the binding.
    pub fn with_chord(mut self, key: KeyCode, modifiers: KeyModifiers) -> Self {
        self.keys.push((key, modifiers));
        self
    }

    /// Sets the help label and description for this binding.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help_key = key.into();
        self.help_desc = desc.into();
        self
    }

    /// Returns the binding in a disabled state.
    ///
    /// Disabled bindings never match and are skipped by help renderers,
    /// but keep their position in a keymap.
    pub fn with_disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Enables or disables the binding in place.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Returns whether the binding is currently enabled.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Returns true if the key message matches this binding.
    ///
    /// Plain (unmodified) bindings also accept the shift modifier for
    /// character keys, since uppercase input arrives as `char + SHIFT`.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        if !self.enabled {
            return false;
        }
        self.keys.iter().any(|(key, modifiers)| {
            if *key != msg.key {
                return false;
            }
            if *modifiers == msg.modifiers {
                return true;
            }
            modifiers.is_empty()
                && msg.modifiers == KeyModifiers::SHIFT
                && matches!(msg.key, KeyCode::Char(_))
        })
    }
}

/// Help metadata provider implemented by component keymaps.
///
/// `short_help` supplies the handful of bindings worth showing inline;
/// `full_help` groups every binding into columns for an expanded view.
pub trait KeyMap {
    /// Bindings for a compact, single-line help display.
    fn short_help(&self) -> Vec<&Binding>;

    /// All bindings, grouped into columns of related actions.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}
