//! Sparse dual numbers for forward-mode automatic differentiation.
//!
//! A [`Jet`] carries a value together with a sparse mapping from
//! variable identity to partial derivative. Building an expression out of
//! jets therefore computes, in one forward pass, both the expression's value
//! and its exact partial derivative with respect to *every* independent
//! variable that participated — with no symbolic manipulation and no
//! finite-difference error.
//!
//! # Mathematical Background
//!
//! Writing `⟨a, ∂a⟩` for a value and its partial map, arithmetic obeys:
//!
//! - `⟨a, ∂a⟩ + ⟨b, ∂b⟩ = ⟨a+b, ∂a ∪₊ ∂b⟩` (coefficients added keywise)
//! - `⟨a, ∂a⟩ − ⟨b, ∂b⟩ = ⟨a−b, ∂a ∪₋ ∂b⟩`
//! - `⟨a, ∂a⟩ · ⟨b, ∂b⟩ = ⟨ab, b·∂a ∪₊ a·∂b⟩` (product rule)
//! - `⟨a, ∂a⟩ / ⟨b, ∂b⟩ = ⟨a/b, (∂a ∪₋ (a/b)·∂b) / b⟩` (quotient rule)
//!
//! A key absent from a partial map is a coefficient of exactly zero, so the
//! maps only ever hold entries for variables that actually reached this part
//! of the computation. The chain rule for function composition is a single
//! rescale of all coefficients by the outer derivative; see the
//! transcendental methods on [`Jet`] (`sin`, `exp`, `sinc`, …).
//!
//! # Example
//!
//! ```
//! use tangent::Jet;
//!
//! // f(x, y) = x·y + sin(x) at (2, 3)
//! let x = Jet::variable(2.0_f64);
//! let y = Jet::variable(3.0);
//! let f = x.clone() * y.clone() + x.clone().sin();
//!
//! assert_eq!(f.value(), 6.0 + 2.0_f64.sin());
//! assert_eq!(f.partial(&x), 3.0 + 2.0_f64.cos()); // ∂f/∂x = y + cos(x)
//! assert_eq!(f.partial(&y), 2.0);                 // ∂f/∂y = x
//! ```

use num_traits::{Float, One, Zero};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::ident::{process_source, IdentSource, VarId};

/// A dual number holding a value and a sparse map of partial derivatives.
///
/// A jet is created either as a [`constant`](Jet::constant) (no partials) or
/// as a fresh independent [`variable`](Jet::variable) (one partial: itself,
/// with coefficient 1). Combining jets through arithmetic or the
/// transcendental methods produces *derived* jets: their partial maps are
/// merged under the chain rule and they are no longer variables themselves,
/// but they remember the sensitivities to every variable they were built
/// from.
///
/// Operators take their operands by value; clone a variable when it is used
/// in more than one place, and keep the original around to query partials
/// afterwards.
///
/// # Examples
///
/// ## Product rule
///
/// ```
/// use tangent::Jet;
///
/// let x = Jet::variable(2.0);
/// let y = Jet::variable(3.0);
/// let z = x.clone() * y.clone();
///
/// assert_eq!(z.value(), 6.0);
/// assert_eq!(z.partial(&x), 3.0); // ∂(xy)/∂x = y
/// assert_eq!(z.partial(&y), 2.0); // ∂(xy)/∂y = x
/// ```
///
/// ## Variables never referenced have zero partials
///
/// ```
/// use tangent::Jet;
///
/// let x = Jet::variable(2.0);
/// let unused = Jet::variable(7.0);
/// let z = x.clone() * x.clone();
///
/// assert_eq!(z.partial(&x), 4.0);
/// assert_eq!(z.partial(&unused), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Jet<T> {
    value: T,
    ident: Option<VarId>,
    partials: BTreeMap<VarId, T>,
}

impl<T> Jet<T> {
    /// Create a constant: no identity, no partials.
    ///
    /// # Examples
    ///
    /// ```
    /// use tangent::Jet;
    ///
    /// let c = Jet::constant(5.0);
    /// assert_eq!(c.value(), 5.0);
    /// ```
    pub fn constant(value: T) -> Self {
        Jet {
            value,
            ident: None,
            partials: BTreeMap::new(),
        }
    }

    /// Create a fresh independent variable using the process-wide
    /// identifier source.
    ///
    /// The new jet's partial map holds exactly one entry — itself, with
    /// coefficient 1 (`∂x/∂x = 1`).
    ///
    /// # Examples
    ///
    /// ```
    /// use tangent::Jet;
    ///
    /// let x = Jet::variable(3.0);
    /// assert_eq!(x.value(), 3.0);
    /// assert_eq!(x.partial(&x), 1.0);
    /// ```
    pub fn variable(value: T) -> Self
    where
        T: One,
    {
        Self::variable_in(process_source(), value)
    }

    /// Create a fresh independent variable from an explicit identifier
    /// source.
    ///
    /// Use this to isolate identifier sequences (e.g. in tests). Jets
    /// seeded from different sources must not be mixed in one expression;
    /// see [`IdentSource`].
    ///
    /// # Examples
    ///
    /// ```
    /// use tangent::{IdentSource, Jet};
    ///
    /// let source = IdentSource::new();
    /// let x = Jet::variable_in(&source, 1.5);
    /// let y = Jet::variable_in(&source, 2.5);
    /// let sum = x.clone() + y.clone();
    /// assert_eq!(sum.partial(&x), 1.0);
    /// assert_eq!(sum.partial(&y), 1.0);
    /// ```
    pub fn variable_in(source: &IdentSource, value: T) -> Self
    where
        T: One,
    {
        let id = source.issue();
        let mut partials = BTreeMap::new();
        partials.insert(id, T::one());
        Jet {
            value,
            ident: Some(id),
            partials,
        }
    }

    /// The scalar value of this jet.
    pub fn value(&self) -> T
    where
        T: Copy,
    {
        self.value
    }

    /// The partial derivative of this jet with respect to `var`.
    ///
    /// Returns zero when `var` never participated in the computation that
    /// produced this jet, and also when `var` is itself a constant or a
    /// derived quantity rather than an independent variable.
    ///
    /// # Examples
    ///
    /// ```
    /// use tangent::Jet;
    ///
    /// let x = Jet::variable(4.0);
    /// let y = Jet::variable(2.0);
    /// let w = x.clone() / y.clone();
    ///
    /// assert_eq!(w.value(), 2.0);
    /// assert_eq!(w.partial(&x), 0.5);  // 1/y
    /// assert_eq!(w.partial(&y), -1.0); // -x/y²
    ///
    /// // A derived quantity is not a variable: querying against it is
    /// // well-defined and yields zero.
    /// assert_eq!(w.partial(&w), 0.0);
    /// ```
    pub fn partial(&self, var: &Jet<T>) -> T
    where
        T: Copy + Zero,
    {
        match var.ident {
            Some(id) => self.partials.get(&id).copied().unwrap_or_else(T::zero),
            None => T::zero(),
        }
    }

    /// Rescale every partial coefficient by `scale`.
    ///
    /// This is the chain-rule step shared by every transcendental function:
    /// for `y = f(x)`, every `∂x/∂v` becomes `f′(x)·∂x/∂v`.
    pub(crate) fn push_forward(&mut self, scale: T)
    where
        T: Copy + Mul<Output = T>,
    {
        for coeff in self.partials.values_mut() {
            *coeff = *coeff * scale;
        }
    }

    /// Turn this jet into a derived quantity with the given outer value,
    /// rescaling its partials by the outer derivative `slope`.
    pub(crate) fn chain(mut self, value: T, slope: T) -> Self
    where
        T: Copy + Mul<Output = T>,
    {
        self.ident = None;
        self.value = value;
        self.push_forward(slope);
        self
    }
}

/// A zero-valued constant, mirroring `Jet::constant(0)`.
impl<T: Zero> Default for Jet<T> {
    fn default() -> Self {
        Jet::constant(T::zero())
    }
}

/// Promote a bare scalar to a constant jet.
impl<T> From<T> for Jet<T> {
    fn from(value: T) -> Self {
        Jet::constant(value)
    }
}

/// Render the scalar value only; partial derivatives are not part of the
/// textual form. Format specifiers pass through to the value.
impl<T: fmt::Display> fmt::Display for Jet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

// In-place compound assignment is the primitive form of each operator; the
// by-value binary operators below are copy-then-assign on top of it. Each
// assignment clears the identity tag: the result is a derived quantity even
// when an operand was a fresh variable.

/// `a += b`: add values, merge `b`'s coefficients keywise into `a`'s.
impl<T: Copy + Zero> AddAssign for Jet<T> {
    fn add_assign(&mut self, rhs: Jet<T>) {
        self.ident = None;
        self.value = self.value + rhs.value;
        for (id, p) in rhs.partials {
            let slot = self.partials.entry(id).or_insert_with(T::zero);
            *slot = *slot + p;
        }
    }
}

/// `a -= b`: subtract values, merge `b`'s coefficients negated.
impl<T: Copy + Zero + Sub<Output = T>> SubAssign for Jet<T> {
    fn sub_assign(&mut self, rhs: Jet<T>) {
        self.ident = None;
        self.value = self.value - rhs.value;
        for (id, p) in rhs.partials {
            let slot = self.partials.entry(id).or_insert_with(T::zero);
            *slot = *slot - p;
        }
    }
}

/// `a *= b` (product rule): scale `a`'s coefficients by `b`'s value, fold in
/// `b`'s coefficients scaled by `a`'s value, and only then overwrite the
/// value — the old `a` is still needed while merging.
impl<T: Copy + Zero + Mul<Output = T>> MulAssign for Jet<T> {
    fn mul_assign(&mut self, rhs: Jet<T>) {
        self.ident = None;
        for coeff in self.partials.values_mut() {
            *coeff = *coeff * rhs.value;
        }
        for (id, p) in rhs.partials {
            let slot = self.partials.entry(id).or_insert_with(T::zero);
            *slot = *slot + p * self.value;
        }
        self.value = self.value * rhs.value;
    }
}

/// `a /= b` (quotient rule): `d(a/b) = (da − (a/b)·db) / b`. The quotient
/// value is computed first so the divisor's coefficients can be folded in
/// against it, then everything is divided through by `b`'s value.
///
/// Division by a zero-valued jet is not special-cased: the result follows
/// IEEE semantics (infinity or NaN) and propagates silently.
impl<T: Float> DivAssign for Jet<T> {
    fn div_assign(&mut self, rhs: Jet<T>) {
        self.ident = None;
        self.value = self.value / rhs.value;
        for (id, p) in rhs.partials {
            let slot = self.partials.entry(id).or_insert_with(T::zero);
            *slot = *slot - p * self.value;
        }
        for coeff in self.partials.values_mut() {
            *coeff = *coeff / rhs.value;
        }
    }
}

impl<T: Copy + Zero> Add for Jet<T> {
    type Output = Jet<T>;

    fn add(mut self, rhs: Self) -> Jet<T> {
        self += rhs;
        self
    }
}

impl<T: Copy + Zero + Sub<Output = T>> Sub for Jet<T> {
    type Output = Jet<T>;

    fn sub(mut self, rhs: Self) -> Jet<T> {
        self -= rhs;
        self
    }
}

impl<T: Copy + Zero + Mul<Output = T>> Mul for Jet<T> {
    type Output = Jet<T>;

    fn mul(mut self, rhs: Self) -> Jet<T> {
        self *= rhs;
        self
    }
}

impl<T: Float> Div for Jet<T> {
    type Output = Jet<T>;

    fn div(mut self, rhs: Self) -> Jet<T> {
        self /= rhs;
        self
    }
}

/// Negate the value and every partial coefficient. The result is a derived
/// quantity, even when the operand was a fresh variable.
impl<T: Copy + Neg<Output = T>> Neg for Jet<T> {
    type Output = Jet<T>;

    fn neg(mut self) -> Jet<T> {
        self.ident = None;
        self.value = -self.value;
        for coeff in self.partials.values_mut() {
            *coeff = -*coeff;
        }
        self
    }
}

// Mixed jet/scalar arithmetic: the bare scalar is promoted to a constant.

impl<T: Copy + Zero> Add<T> for Jet<T> {
    type Output = Jet<T>;

    fn add(self, rhs: T) -> Jet<T> {
        self + Jet::constant(rhs)
    }
}

impl<T: Copy + Zero + Sub<Output = T>> Sub<T> for Jet<T> {
    type Output = Jet<T>;

    fn sub(self, rhs: T) -> Jet<T> {
        self - Jet::constant(rhs)
    }
}

impl<T: Copy + Zero + Mul<Output = T>> Mul<T> for Jet<T> {
    type Output = Jet<T>;

    fn mul(self, rhs: T) -> Jet<T> {
        self * Jet::constant(rhs)
    }
}

impl<T: Float> Div<T> for Jet<T> {
    type Output = Jet<T>;

    fn div(self, rhs: T) -> Jet<T> {
        self / Jet::constant(rhs)
    }
}

impl<T: Copy + Zero> AddAssign<T> for Jet<T> {
    fn add_assign(&mut self, rhs: T) {
        *self += Jet::constant(rhs);
    }
}

impl<T: Copy + Zero + Sub<Output = T>> SubAssign<T> for Jet<T> {
    fn sub_assign(&mut self, rhs: T) {
        *self -= Jet::constant(rhs);
    }
}

impl<T: Copy + Zero + Mul<Output = T>> MulAssign<T> for Jet<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self *= Jet::constant(rhs);
    }
}

impl<T: Float> DivAssign<T> for Jet<T> {
    fn div_assign(&mut self, rhs: T) {
        *self /= Jet::constant(rhs);
    }
}

// Scalar on the left. Coherence rules out a blanket `impl Add<Jet<T>> for T`,
// so these are generated per float type.
macro_rules! impl_scalar_lhs {
    ($T:ty) => {
        impl Add<Jet<$T>> for $T {
            type Output = Jet<$T>;

            fn add(self, rhs: Jet<$T>) -> Jet<$T> {
                Jet::constant(self) + rhs
            }
        }

        impl Sub<Jet<$T>> for $T {
            type Output = Jet<$T>;

            fn sub(self, rhs: Jet<$T>) -> Jet<$T> {
                Jet::constant(self) - rhs
            }
        }

        impl Mul<Jet<$T>> for $T {
            type Output = Jet<$T>;

            fn mul(self, rhs: Jet<$T>) -> Jet<$T> {
                Jet::constant(self) * rhs
            }
        }

        impl Div<Jet<$T>> for $T {
            type Output = Jet<$T>;

            fn div(self, rhs: Jet<$T>) -> Jet<$T> {
                Jet::constant(self) / rhs
            }
        }
    };
}

impl_scalar_lhs!(f32);
impl_scalar_lhs!(f64);

/// Compute the value and gradient of a scalar multivariable function in a
/// single forward pass.
///
/// Seeds one fresh variable per input, evaluates `f` once, and reads each
/// partial derivative back out of the result.
///
/// # Examples
///
/// ```
/// use tangent::{gradient, Jet};
///
/// // f(x, y) = x² + 2xy + y² at (3, 4)
/// let f = |vars: [Jet<f64>; 2]| {
///     let [x, y] = vars;
///     x.clone() * x.clone() + 2.0 * x * y.clone() + y.clone() * y
/// };
///
/// let (value, grad) = gradient(f, [3.0, 4.0]);
/// assert_eq!(value, 49.0);   // 9 + 24 + 16
/// assert_eq!(grad[0], 14.0); // ∂f/∂x = 2x + 2y
/// assert_eq!(grad[1], 14.0); // ∂f/∂y = 2x + 2y
/// ```
pub fn gradient<T, F, const N: usize>(f: F, point: [T; N]) -> (T, [T; N])
where
    T: Float,
    F: Fn([Jet<T>; N]) -> Jet<T>,
{
    let vars: [Jet<T>; N] = std::array::from_fn(|i| Jet::variable(point[i]));
    let result = f(vars.clone());
    let grad = std::array::from_fn(|i| result.partial(&vars[i]));
    (result.value(), grad)
}
