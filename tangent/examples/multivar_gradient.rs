//! Example demonstrating multivariable automatic differentiation.
//!
//! This showcases how sparse jets compute gradients of scalar multivariable
//! functions (f: ℝⁿ → ℝ) in a **single forward pass**, paying only for the
//! variables each subexpression actually touches.
//!
//! Run with: `cargo run --example multivar_gradient`

use tangent::{gradient, Jet};

fn main() {
    println!("=== Multivariable Automatic Differentiation ===\n");

    // Example 1: Simple quadratic
    // f(x, y) = x² + 2xy + y² at (3, 4)
    println!("Example 1: f(x, y) = x² + 2xy + y² at (3, 4)");
    let f = |vars: [Jet<f64>; 2]| {
        let [x, y] = vars;
        x.clone() * x.clone() + 2.0 * x * y.clone() + y.clone() * y
    };
    let (value, grad) = gradient(f, [3.0, 4.0]);
    println!("  f(3, 4) = {}", value);
    println!("  ∂f/∂x = {} (expected: 2x + 2y = 14)", grad[0]);
    println!("  ∂f/∂y = {} (expected: 2x + 2y = 14)", grad[1]);
    println!();

    // Example 2: Rosenbrock function (optimization benchmark)
    // f(x, y) = (1-x)² + 100(y-x²)²
    println!("Example 2: Rosenbrock f(x, y) = (1-x)² + 100(y-x²)²");
    let rosenbrock = |vars: [Jet<f64>; 2]| {
        let [x, y] = vars;
        let term1 = 1.0 - x.clone();
        let term2 = y - x.clone() * x;
        term1.clone() * term1 + 100.0 * term2.clone() * term2
    };

    println!("  At minimum (1, 1):");
    let (value, grad) = gradient(rosenbrock, [1.0, 1.0]);
    println!("    f(1, 1) = {}", value);
    println!(
        "    ∇f = [{}, {}] (gradient is zero at minimum)",
        grad[0], grad[1]
    );

    println!("  At starting point (0, 0):");
    let (value, grad) = gradient(rosenbrock, [0.0, 0.0]);
    println!("    f(0, 0) = {}", value);
    println!("    ∇f = [{}, {}]", grad[0], grad[1]);
    println!();

    // Example 3: Euclidean norm (important for gradient descent)
    // f(x, y, z) = √(x² + y² + z²) at (3, 4, 0)
    println!("Example 3: Euclidean norm f(x, y, z) = √(x² + y² + z²) at (3, 4, 0)");
    let euclidean_norm = |vars: [Jet<f64>; 3]| {
        let [x, y, z] = vars;
        (x.clone() * x + y.clone() * y + z.clone() * z).sqrt()
    };
    let (value, grad) = gradient(euclidean_norm, [3.0, 4.0, 0.0]);
    println!("  ‖(3, 4, 0)‖ = {}", value);
    println!("  ∇f = [{}, {}, {}]", grad[0], grad[1], grad[2]);
    println!("  (Gradient points in direction of steepest ascent)");
    println!();

    // Example 4: Variables can also be seeded by hand, without the helper —
    // any variable that never touches an expression has partial 0.
    println!("Example 4: manual seeding, f = x·sin(y), with an unused z");
    let x = Jet::variable(2.0);
    let y = Jet::variable(std::f64::consts::PI);
    let z = Jet::variable(123.0);
    let f = x.clone() * y.clone().sin();
    println!("  f = {}", f);
    println!("  ∂f/∂x = {} (expected: sin(π) ≈ 0)", f.partial(&x));
    println!("  ∂f/∂y = {} (expected: x·cos(π) = -2)", f.partial(&y));
    println!("  ∂f/∂z = {} (z never participated)", f.partial(&z));
    println!();

    // Example 5: Softmax-like ratio (for ML)
    // f(x, y) = x / (x + y) at (3, 1)
    println!("Example 5: Ratio f(x, y) = x/(x+y) at (3, 1)");
    let f = |vars: [Jet<f64>; 2]| {
        let [x, y] = vars;
        x.clone() / (x + y)
    };
    let (value, grad) = gradient(f, [3.0, 1.0]);
    println!("  f(3, 1) = {}", value);
    println!("  ∂f/∂x = {} (expected: y/(x+y)² = 0.0625)", grad[0]);
    println!("  ∂f/∂y = {} (expected: -x/(x+y)² = -0.1875)", grad[1]);
    println!();

    println!("=== Key Insights ===");
    println!("• Sparse jets compute ALL partial derivatives in a single forward pass");
    println!("• Partials are keyed by variable identity — no fixed dimension to declare");
    println!("• Unreferenced variables cost nothing and read back as zero");
    println!("• Works seamlessly with transcendental functions and complex compositions");
}
