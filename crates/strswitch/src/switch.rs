//! # String Switch Typestate Machine
//!
//! Implements the string switch builder using the typestate pattern.
//! Each builder stage is a distinct type, and the set of available methods
//! changes as the match subject, the cases, and the optional default are
//! supplied. Invalid call sequences are compile errors, not runtime checks.
//!
//! ## States
//!
//! ```text
//! StringSwitch ──create()───────▶ SwitchBuilder<Unbound>
//! StringSwitch ──create_with(s)─▶ SwitchBuilder<Bound>
//!
//! SwitchBuilder<S> ──when(l, r)─────▶ SwitchArms<S, NoDefault>
//! SwitchBuilder<S> ──on_default(r)──▶ SwitchArms<S, HasDefault>
//!
//! SwitchArms<S, D> ──when(l, r)─────▶ SwitchArms<S, D>          (self-loop)
//! SwitchArms<S, NoDefault> ──on_default(r)──▶ SwitchArms<S, HasDefault>
//! ```
//!
//! `evaluate` exists only on [`SwitchArms`], so a switch with no cases and
//! no default cannot be evaluated. Exactly one `evaluate` signature exists
//! for a given subject binding: `evaluate()` when the subject was captured
//! at creation, `evaluate(subject)` when it was deferred. A second
//! `on_default` has no method to resolve to.
//!
//! ## Result Type
//!
//! Default presence selects the evaluation result type at compile time:
//! a switch with a default always produces an `R`, a switch without one
//! produces an `Option<R>`. See [`DefaultBinding::Output`].
//!
//! ## Compile-Time Safety Example
//!
//! The following does not compile: the builder has no cases and no default,
//! so there is no `evaluate` method to call.
//!
//! ```compile_fail
//! use strswitch::StringSwitch;
//!
//! // ERROR: no method named `evaluate` found for `SwitchBuilder<i32, Bound>`
//! let _ = StringSwitch::<i32>::create_with("apple").evaluate();
//! ```

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use crate::dynamic::DynStringSwitch;

// ─── Binding Markers (each is a distinct type at compile time) ───────

/// Subject binding: the match subject was captured when the switch was
/// created. `evaluate()` takes no argument.
#[derive(Debug, Clone, Copy)]
pub struct Bound;

/// Subject binding: the match subject is supplied at evaluation time.
/// `evaluate(subject)` takes the subject as an argument.
#[derive(Debug, Clone, Copy)]
pub struct Unbound;

/// Default binding: no fallback has been registered. Evaluation produces
/// `Option<R>` and a lookup miss yields `None`.
#[derive(Debug, Clone, Copy)]
pub struct NoDefault;

/// Default binding: a fallback has been registered. Evaluation produces a
/// plain `R` and a lookup miss yields the fallback.
#[derive(Debug, Clone, Copy)]
pub struct HasDefault;

// ─── Sealed Traits ───────────────────────────────────────────────────

mod private {
    pub trait Sealed {}
    impl Sealed for super::Bound {}
    impl Sealed for super::Unbound {}
    impl Sealed for super::NoDefault {}
    impl Sealed for super::HasDefault {}
}

/// Marker trait for the two subject binding states.
///
/// Sealed: only [`Bound`] and [`Unbound`] implement it. External crates
/// cannot add binding states.
pub trait SubjectBinding: private::Sealed {
    /// What the builder stores for the subject: `String` when the subject
    /// was captured at creation, nothing when it is deferred.
    type Storage: Clone;

    /// The canonical name of this binding state (e.g., "BOUND").
    fn name() -> &'static str;

    /// The stored subject, if this binding state carries one.
    fn subject(storage: &Self::Storage) -> Option<&str>;
}

impl SubjectBinding for Bound {
    type Storage = String;

    fn name() -> &'static str {
        "BOUND"
    }

    fn subject(storage: &String) -> Option<&str> {
        Some(storage)
    }
}

impl SubjectBinding for Unbound {
    type Storage = ();

    fn name() -> &'static str {
        "UNBOUND"
    }

    fn subject(_storage: &()) -> Option<&str> {
        None
    }
}

/// Marker trait for the two default binding states.
///
/// Sealed: only [`NoDefault`] and [`HasDefault`] implement it. The
/// associated [`Output`](DefaultBinding::Output) type is the mechanism by
/// which default presence changes the evaluation result type.
pub trait DefaultBinding<R>: private::Sealed {
    /// What the accumulator stores for the fallback arm.
    type Storage: Clone;

    /// The evaluation result type: `R` with a default, `Option<R>` without.
    type Output;

    /// The canonical name of this binding state (e.g., "DEFAULT").
    fn name() -> &'static str;

    /// Wrap a matched case value into the result type.
    fn on_match(result: R) -> Self::Output;

    /// Resolve a lookup miss from the stored fallback.
    fn on_miss(storage: &Self::Storage) -> Self::Output;

    /// The fallback value, if this binding state carries one.
    fn into_default(storage: Self::Storage) -> Option<R>;
}

impl<R> DefaultBinding<R> for NoDefault {
    type Storage = ();
    type Output = Option<R>;

    fn name() -> &'static str {
        "NO_DEFAULT"
    }

    fn on_match(result: R) -> Option<R> {
        Some(result)
    }

    fn on_miss(_storage: &()) -> Option<R> {
        None
    }

    fn into_default(_storage: ()) -> Option<R> {
        None
    }
}

impl<R: Clone> DefaultBinding<R> for HasDefault {
    type Storage = R;
    type Output = R;

    fn name() -> &'static str {
        "DEFAULT"
    }

    fn on_match(result: R) -> R {
        result
    }

    fn on_miss(storage: &R) -> R {
        storage.clone()
    }

    fn into_default(storage: R) -> Option<R> {
        Some(storage)
    }
}

// ─── Entry Point ─────────────────────────────────────────────────────

/// Entry point of the string switch state machine.
///
/// This type is never instantiated; it exists so the two constructors are
/// the only way to reach the builder states.
///
/// ```
/// use strswitch::StringSwitch;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Fruit {
///     Apple,
///     Mango,
///     Orange,
///     Unknown,
/// }
///
/// let fruit = StringSwitch::<Fruit>::create_with("mango")
///     .when("apple", Fruit::Apple)
///     .when("mango", Fruit::Mango)
///     .when("orange", Fruit::Orange)
///     .on_default(Fruit::Unknown)
///     .evaluate();
/// assert_eq!(fruit, Fruit::Mango);
/// ```
pub struct StringSwitch<R> {
    _result: PhantomData<R>,
}

impl<R> StringSwitch<R> {
    /// Begin a switch whose subject will be supplied at evaluation time.
    pub fn create() -> SwitchBuilder<R, Unbound> {
        SwitchBuilder {
            subject: (),
            _result: PhantomData,
        }
    }

    /// Begin a switch bound to `subject`. The subject is owned by the
    /// builder and `evaluate()` takes no argument.
    pub fn create_with(subject: impl Into<String>) -> SwitchBuilder<R, Bound> {
        SwitchBuilder {
            subject: subject.into(),
            _result: PhantomData,
        }
    }
}

// ─── Intermediate State ──────────────────────────────────────────────

/// Intermediate builder state holding only the subject binding decision.
///
/// The only way forward is to register the first case with
/// [`when`](SwitchBuilder::when) or a default with
/// [`on_default`](SwitchBuilder::on_default). There is no `evaluate` on
/// this type: a switch with no cases and no default cannot be evaluated.
pub struct SwitchBuilder<R, S: SubjectBinding> {
    subject: S::Storage,
    _result: PhantomData<R>,
}

impl<R, S: SubjectBinding> SwitchBuilder<R, S> {
    /// Register the first case, producing the accumulator state.
    pub fn when(self, label: impl Into<String>, result: R) -> SwitchArms<R, S, NoDefault> {
        let mut arms = HashMap::new();
        arms.insert(label.into(), result);
        SwitchArms {
            arms,
            subject: self.subject,
            default: (),
        }
    }

    /// Register a default without any case. A default-only switch is valid
    /// and always evaluates to the default.
    pub fn on_default(self, result: R) -> SwitchArms<R, S, HasDefault>
    where
        R: Clone,
    {
        SwitchArms {
            arms: HashMap::new(),
            subject: self.subject,
            default: result,
        }
    }
}

impl<R, S: SubjectBinding> Clone for SwitchBuilder<R, S> {
    fn clone(&self) -> Self {
        Self {
            subject: self.subject.clone(),
            _result: PhantomData,
        }
    }
}

impl<R, S: SubjectBinding> fmt::Debug for SwitchBuilder<R, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwitchBuilder")
            .field("subject", &S::name())
            .finish()
    }
}

// ─── Accumulator State ───────────────────────────────────────────────

/// Accumulator state holding the case arms and, per the type, the subject
/// and the default.
///
/// Adding cases is a self-loop on the same type. Registering a default is
/// a one-way transition to `SwitchArms<R, S, HasDefault>`, after which no
/// `on_default` method exists: a second default is a compile error.
///
/// ```compile_fail
/// use strswitch::StringSwitch;
///
/// // ERROR: no method named `on_default` found after the first default
/// let _ = StringSwitch::<i32>::create()
///     .when("a", 1)
///     .on_default(0)
///     .on_default(2);
/// ```
///
/// Evaluation never mutates, so once the last `when`/`on_default` call has
/// been made the accumulator may be evaluated repeatedly, including through
/// shared references from multiple threads.
pub struct SwitchArms<R, S: SubjectBinding, D: DefaultBinding<R>> {
    arms: HashMap<String, R>,
    subject: S::Storage,
    default: D::Storage,
}

impl<R, S: SubjectBinding, D: DefaultBinding<R>> SwitchArms<R, S, D> {
    /// Register another case. Returns the same accumulator type, so calls
    /// chain freely.
    ///
    /// If `label` is already registered the existing value is kept and
    /// `result` is discarded: the first registration of a label wins.
    pub fn when(mut self, label: impl Into<String>, result: R) -> Self {
        self.arms.entry(label.into()).or_insert(result);
        self
    }

    /// Number of registered case arms. The default is not counted.
    pub fn len(&self) -> usize {
        self.arms.len()
    }

    /// Whether no case arm has been registered. Only reachable for
    /// default-only switches.
    pub fn is_empty(&self) -> bool {
        self.arms.is_empty()
    }

    /// Whether `label` has a registered case arm.
    pub fn contains(&self, label: &str) -> bool {
        self.arms.contains_key(label)
    }

    /// The creation-bound subject, if one was supplied.
    pub fn subject(&self) -> Option<&str> {
        S::subject(&self.subject)
    }

    /// The canonical name of the subject binding state.
    pub fn subject_binding(&self) -> &'static str {
        S::name()
    }

    /// The canonical name of the default binding state.
    pub fn default_binding(&self) -> &'static str {
        D::name()
    }

    /// Exact-match lookup with fallback resolution. Matching is byte-exact
    /// on the string contents; no case folding is applied.
    fn lookup(&self, subject: &str) -> D::Output
    where
        R: Clone,
    {
        match self.arms.get(subject) {
            Some(result) => D::on_match(result.clone()),
            None => D::on_miss(&self.default),
        }
    }

    /// Decompose into subject, arms, and default for the runtime form.
    pub(crate) fn into_parts(self) -> (Option<String>, HashMap<String, R>, Option<R>) {
        let subject = S::subject(&self.subject).map(str::to_owned);
        (subject, self.arms, D::into_default(self.default))
    }
}

impl<R: Clone, S: SubjectBinding> SwitchArms<R, S, NoDefault> {
    /// Register the default. One-way transition: the resulting type has no
    /// `on_default` method, and its `evaluate` returns a plain `R` instead
    /// of `Option<R>`.
    pub fn on_default(self, result: R) -> SwitchArms<R, S, HasDefault> {
        SwitchArms {
            arms: self.arms,
            subject: self.subject,
            default: result,
        }
    }
}

impl<R: Clone, D: DefaultBinding<R>> SwitchArms<R, Unbound, D> {
    /// Evaluate the switch against `subject`.
    ///
    /// On an exact label match the mapped value is returned; on a miss the
    /// default resolves (a plain value for `HasDefault`, `None` for
    /// [`NoDefault`]). Only available when no subject was bound at creation.
    ///
    /// ```
    /// use strswitch::StringSwitch;
    ///
    /// let arms = StringSwitch::<i32>::create()
    ///     .when("apple", 0)
    ///     .when("mango", 1);
    /// assert_eq!(arms.evaluate("mango"), Some(1));
    /// assert_eq!(arms.evaluate("pear"), None);
    /// ```
    pub fn evaluate(&self, subject: &str) -> D::Output {
        self.lookup(subject)
    }
}

impl<R: Clone, D: DefaultBinding<R>> SwitchArms<R, Bound, D> {
    /// Evaluate the switch against the subject captured at creation.
    ///
    /// Only available when the subject was bound at creation; supplying a
    /// second subject here is a compile error.
    ///
    /// ```compile_fail
    /// use strswitch::StringSwitch;
    ///
    /// // ERROR: the subject was already bound at creation
    /// let _ = StringSwitch::<i32>::create_with("apple")
    ///     .when("apple", 0)
    ///     .evaluate("mango");
    /// ```
    pub fn evaluate(&self) -> D::Output {
        self.lookup(&self.subject)
    }
}

impl<R: Clone, S: SubjectBinding, D: DefaultBinding<R>> Clone for SwitchArms<R, S, D> {
    fn clone(&self) -> Self {
        Self {
            arms: self.arms.clone(),
            subject: self.subject.clone(),
            default: self.default.clone(),
        }
    }
}

impl<R, S: SubjectBinding, D: DefaultBinding<R>> fmt::Debug for SwitchArms<R, S, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwitchArms")
            .field("subject", &S::name())
            .field("default", &D::name())
            .field("arms", &self.arms.len())
            .finish()
    }
}

/// Convert the compile-time checked form into the runtime-checked form.
///
/// The conversion is lossless: the arms, the creation-bound subject (if
/// any), and the default (if any) carry over unchanged.
impl<R, S: SubjectBinding, D: DefaultBinding<R>> From<SwitchArms<R, S, D>> for DynStringSwitch<R> {
    fn from(arms: SwitchArms<R, S, D>) -> Self {
        let (subject, arms, default) = arms.into_parts();
        DynStringSwitch::from_parts(subject, arms, default)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
