#![deny(missing_docs)]
//! # tangent — forward-mode automatic differentiation with sparse partials
//!
//! This crate computes exact derivatives alongside values, with no symbolic
//! differentiation and no finite-difference error. The core abstraction is
//! the [`Jet`]: a value paired with a sparse mapping from independent-variable
//! identity to partial derivative. Build an arbitrary
//! arithmetic/transcendental expression over [`Jet::variable`]s, then read
//! the value and any partial derivative back out of the result.
//!
//! Because the partial map is keyed by variable *identity*, an expression
//! only pays for the variables that actually reach it — there is no global
//! gradient vector to size up front, and no registration step. Any number
//! of variables can participate, and querying a variable that never touched
//! an expression simply yields zero.
//!
//! # Single-variable differentiation
//!
//! ```
//! use tangent::Jet;
//!
//! // f(x) = x² + 2x at x = 3
//! let x = Jet::variable(3.0_f64);
//! let f = x.clone() * x.clone() + 2.0 * x.clone();
//!
//! assert_eq!(f.value(), 15.0);    // f(3) = 15
//! assert_eq!(f.partial(&x), 8.0); // f′(3) = 2·3 + 2
//! ```
//!
//! # Many variables, one pass
//!
//! ```
//! use tangent::Jet;
//!
//! let x = Jet::variable(2.0);
//! let y = Jet::variable(3.0);
//! let z = Jet::variable(4.0);
//!
//! // f = x·y + y/z
//! let f = x.clone() * y.clone() + y.clone() / z.clone();
//!
//! assert_eq!(f.partial(&x), 3.0);          // y
//! assert_eq!(f.partial(&y), 2.0 + 0.25);   // x + 1/z
//! assert_eq!(f.partial(&z), -3.0 / 16.0);  // -y/z²
//! ```
//!
//! Or use [`gradient`] to seed the variables and collect the partials in
//! one call:
//!
//! ```
//! use tangent::{gradient, Jet};
//!
//! let f = |vars: [Jet<f64>; 2]| {
//!     let [x, y] = vars;
//!     x.clone() * x + y.clone() * y
//! };
//! let (value, grad) = gradient(f, [3.0, 4.0]);
//!
//! assert_eq!(value, 25.0);
//! assert_eq!(grad, [6.0, 8.0]);
//! ```
//!
//! # Transcendental functions
//!
//! `sin`, `cos`, `tan`, `exp`, `sqrt`, `ln`, `abs`, `recip`, `powi` and a
//! numerically-stable normalized `sinc` are available as methods; the chain
//! rule is applied automatically.
//!
//! ```
//! use tangent::Jet;
//!
//! let x = Jet::variable(0.0_f64);
//! let s = x.clone().sinc();
//! assert_eq!(s.value(), 1.0);      // sinc(0) = 1, no 0/0
//! assert_eq!(s.partial(&x), 0.0);
//! ```
//!
//! # Scope and behavior
//!
//! - Forward mode only: derivatives propagate with the computation. There
//!   is no tape and no backward pass.
//! - Correctness-oriented reference semantics: jets are plain values, every
//!   operation is synchronous arithmetic, and nothing here is tuned for
//!   throughput.
//! - No error paths in normal operation: `x/0` and `0/0` follow IEEE
//!   infinity/NaN semantics and propagate silently through subsequent
//!   partials, exactly as ordinary floating-point values would.
//! - Variable identifiers come from an [`IdentSource`]; the process-wide
//!   default never reissues an identifier (see [`IdentSource::issue`] for
//!   the exhaustion policy).

pub mod ident;
pub mod jet;

mod func;

pub use ident::{IdentSource, VarId};
pub use jet::{gradient, Jet};
