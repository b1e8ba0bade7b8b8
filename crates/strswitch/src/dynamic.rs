//! # Runtime-Checked String Switch
//!
//! Runtime counterpart of the typestate switch for cases where the arms are
//! not known at compile time, for example a dispatch table deserialized from
//! configuration. The invariants the typestate API enforces statically are
//! enforced here at runtime: every misuse category maps to exactly one
//! [`SwitchError`] variant returned as a `Result`.
//!
//! For switches whose shape is known at compile time, prefer the typestate
//! API ([`StringSwitch`](crate::StringSwitch)), which rejects the same
//! misuses at compile time.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from runtime-checked switch construction and evaluation.
///
/// Each variant corresponds to a misuse the typestate API rejects at
/// compile time, plus [`DuplicateLabel`](SwitchError::DuplicateLabel),
/// which the typestate API resolves silently (first registration wins)
/// and this form rejects explicitly.
#[derive(Error, Debug)]
pub enum SwitchError {
    /// A case arm for this label is already registered.
    #[error("case label {0:?} is already registered")]
    DuplicateLabel(String),

    /// A default arm is already registered.
    #[error("a default arm is already registered")]
    DuplicateDefault,

    /// Evaluation was attempted with no case arms and no default.
    #[error("switch has no case arms and no default")]
    Empty,

    /// `evaluate()` was called but no subject was bound at creation.
    #[error("no subject was bound at creation; supply one with evaluate_with")]
    SubjectUnbound,

    /// `evaluate_with()` was called but a subject was bound at creation.
    #[error("subject {0:?} was already bound at creation")]
    SubjectRebound(String),
}

/// A string switch whose invariants are checked at runtime.
///
/// Semantics match the typestate form: exact-match lookup on the string
/// contents, first default wins, lookup misses resolve to the default if
/// one is present. Because default presence is not part of the type here,
/// evaluation always produces `Option<R>`; a switch with a default simply
/// never produces `None`.
///
/// Serializable, so a dispatch table can be stored and reloaded. Fields
/// stay private: the arms and default are only reachable through the
/// registration methods.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DynStringSwitch<R> {
    subject: Option<String>,
    arms: HashMap<String, R>,
    default: Option<R>,
}

impl<R> DynStringSwitch<R> {
    /// Create a switch whose subject will be supplied at evaluation time.
    pub fn new() -> Self {
        Self {
            subject: None,
            arms: HashMap::new(),
            default: None,
        }
    }

    /// Create a switch bound to `subject`.
    pub fn with_subject(subject: impl Into<String>) -> Self {
        Self {
            subject: Some(subject.into()),
            arms: HashMap::new(),
            default: None,
        }
    }

    pub(crate) fn from_parts(
        subject: Option<String>,
        arms: HashMap<String, R>,
        default: Option<R>,
    ) -> Self {
        Self {
            subject,
            arms,
            default,
        }
    }

    /// Register a case arm.
    ///
    /// Unlike the typestate form, a duplicate label is rejected rather than
    /// silently keeping the first value.
    pub fn try_when(&mut self, label: impl Into<String>, result: R) -> Result<(), SwitchError> {
        let label = label.into();
        if self.arms.contains_key(&label) {
            return Err(SwitchError::DuplicateLabel(label));
        }
        self.arms.insert(label, result);
        Ok(())
    }

    /// Register the default arm. A second registration is rejected.
    pub fn try_on_default(&mut self, result: R) -> Result<(), SwitchError> {
        if self.default.is_some() {
            return Err(SwitchError::DuplicateDefault);
        }
        self.default = Some(result);
        Ok(())
    }

    /// Number of registered case arms. The default is not counted.
    pub fn len(&self) -> usize {
        self.arms.len()
    }

    /// Whether no case arm has been registered.
    pub fn is_empty(&self) -> bool {
        self.arms.is_empty()
    }

    /// Whether a default arm has been registered.
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// Whether `label` has a registered case arm.
    pub fn contains(&self, label: &str) -> bool {
        self.arms.contains_key(label)
    }

    /// The creation-bound subject, if one was supplied.
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    /// Evaluation is meaningless with nothing to match against.
    fn check_armed(&self) -> Result<(), SwitchError> {
        if self.arms.is_empty() && self.default.is_none() {
            return Err(SwitchError::Empty);
        }
        Ok(())
    }
}

impl<R: Clone> DynStringSwitch<R> {
    /// Evaluate against the subject captured at creation.
    ///
    /// Fails with [`SwitchError::SubjectUnbound`] if the switch was created
    /// without a subject, or [`SwitchError::Empty`] if nothing has been
    /// registered.
    pub fn evaluate(&self) -> Result<Option<R>, SwitchError> {
        self.check_armed()?;
        match &self.subject {
            Some(subject) => Ok(self.lookup(subject)),
            None => Err(SwitchError::SubjectUnbound),
        }
    }

    /// Evaluate against `subject`.
    ///
    /// Fails with [`SwitchError::SubjectRebound`] if a subject was already
    /// bound at creation, or [`SwitchError::Empty`] if nothing has been
    /// registered.
    pub fn evaluate_with(&self, subject: &str) -> Result<Option<R>, SwitchError> {
        self.check_armed()?;
        if let Some(bound) = &self.subject {
            return Err(SwitchError::SubjectRebound(bound.clone()));
        }
        Ok(self.lookup(subject))
    }

    fn lookup(&self, subject: &str) -> Option<R> {
        self.arms
            .get(subject)
            .cloned()
            .or_else(|| self.default.clone())
    }
}

impl<R> Default for DynStringSwitch<R> {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
