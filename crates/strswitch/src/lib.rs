//! # strswitch — Typestate-Encoded String Switch
//!
//! A `switch` statement over string labels, mapping labels to values of an
//! arbitrary result type, built so that misuse is a compile error rather
//! than a runtime failure. The semantics match a switch statement:
//!
//! - A subject to match against is required, either at creation or at
//!   evaluation, and never both.
//! - At least one case or default must exist before evaluation.
//! - The default may not repeat.
//!
//! Each rule is encoded in the type system. The builder moves through
//! distinct types as the subject, the cases, and the default are supplied,
//! and the methods available on each type are exactly the legal operations:
//!
//! ```text
//! StringSwitch ─create()/create_with(s)─▶ SwitchBuilder ─when()/on_default()─▶ SwitchArms
//! ```
//!
//! `SwitchBuilder` has no `evaluate` method. `SwitchArms` has exactly one
//! `evaluate` signature, selected by the subject binding. A switch with a
//! default evaluates to `R`; one without evaluates to `Option<R>`.
//!
//! ```
//! use strswitch::StringSwitch;
//!
//! let color = StringSwitch::<&str>::create()
//!     .when("apple", "red")
//!     .when("mango", "yellow")
//!     .on_default("unknown");
//!
//! assert_eq!(color.evaluate("mango"), "yellow");
//! assert_eq!(color.evaluate("durian"), "unknown");
//! ```
//!
//! ## Modules
//!
//! - **Typestate switch** (`switch.rs`): the compile-time checked builder.
//!   No runtime error paths; invalid call sequences do not compile.
//!
//! - **Runtime switch** (`dynamic.rs`): the same semantics for arms known
//!   only at runtime (deserialized dispatch tables). Each statically
//!   rejected misuse maps to a [`SwitchError`] variant.
//!
//! ## Design
//!
//! State is encoded in marker types behind sealed traits, so the set of
//! binding states is closed. Lookup is a single exact-match hash lookup;
//! no case folding, no pattern matching. Evaluation never mutates, so a
//! fully built switch may be evaluated repeatedly, including through
//! shared references from multiple threads.

pub mod dynamic;
pub mod switch;

// ─── Typestate switch re-exports ─────────────────────────────────────

pub use switch::{
    Bound, DefaultBinding, HasDefault, NoDefault, StringSwitch, SubjectBinding, SwitchArms,
    SwitchBuilder, Unbound,
};

// ─── Runtime switch re-exports ───────────────────────────────────────

pub use dynamic::{DynStringSwitch, SwitchError};
