//! Example demonstrating automatic differentiation with transcendental functions.
//!
//! This showcases how jets automatically compute derivatives of expressions
//! involving exp, ln, sin, cos, sqrt and the numerically-stable sinc.
//!
//! Run with: `cargo run --example jet_transcendentals`

use tangent::Jet;

fn main() {
    println!("=== Jets: Transcendental Functions ===\n");

    // Example 1: Exponential function
    // f(x) = e^x at x=0
    println!("Example 1: f(x) = e^x at x=0");
    let x = Jet::variable(0.0_f64);
    let f = x.clone().exp();
    println!("  f(0) = {}", f);
    println!("  f'(0) = {} (expected: 1.0)", f.partial(&x));
    println!();

    // Example 2: Natural logarithm
    // f(x) = ln(x) at x=2
    println!("Example 2: f(x) = ln(x) at x=2");
    let x = Jet::variable(2.0_f64);
    let f = x.clone().ln();
    println!("  f(2) = {}", f);
    println!("  f'(2) = {} (expected: 0.5)", f.partial(&x));
    println!();

    // Example 3: Sine function
    // f(x) = sin(x) at x=π/2
    println!("Example 3: f(x) = sin(x) at x=π/2");
    let x = Jet::variable(std::f64::consts::PI / 2.0);
    let f = x.clone().sin();
    println!("  f(π/2) = {}", f);
    println!("  f'(π/2) = {} (expected: ~0.0)", f.partial(&x));
    println!();

    // Example 4: Sigmoid function (ML activation)
    // σ(x) = 1 / (1 + e^(-x)) at x=0
    println!("Example 4: Sigmoid σ(x) = 1/(1 + e^(-x)) at x=0");
    let x = Jet::variable(0.0_f64);
    let sigmoid = 1.0 / (1.0 + (-x.clone()).exp());
    println!("  σ(0) = {}", sigmoid);
    println!("  σ'(0) = {} (expected: 0.25)", sigmoid.partial(&x));
    println!();

    // Example 5: Gaussian function
    // f(x) = e^(-x²) at x=1
    println!("Example 5: Gaussian f(x) = e^(-x²) at x=1");
    let x = Jet::variable(1.0_f64);
    let gaussian = (-(x.clone() * x.clone())).exp();
    println!("  f(1) = {}", gaussian);
    println!(
        "  f'(1) = {} (expected: -2/e ≈ {:.6})",
        gaussian.partial(&x),
        -2.0 / 1.0_f64.exp()
    );
    println!();

    // Example 6: Composition of multiple functions
    // f(x) = ln(sin(e^x)) at x=0
    println!("Example 6: f(x) = ln(sin(e^x)) at x=0");
    let x = Jet::variable(0.0_f64);
    let f = x.clone().exp().sin().ln();
    println!("  f(0) = ln(sin(1)) = {}", f);
    println!("  f'(0) = {}", f.partial(&x));
    println!("  (Triple chain rule automatically applied!)");
    println!();

    // Example 7: Normalized sinc near and at zero
    // sinc(x) = sin(x)/x, continued with sinc(0) = 1
    println!("Example 7: sinc(x) = sin(x)/x at x=0 and x=1e-9");
    let x = Jet::variable(0.0_f64);
    let s = x.clone().sinc();
    println!("  sinc(0) = {} (no 0/0!)", s);
    println!("  sinc'(0) = {} (expected: 0.0)", s.partial(&x));

    let x = Jet::variable(1e-9_f64);
    let s = x.clone().sinc();
    println!("  sinc(1e-9) = {}", s);
    println!(
        "  sinc'(1e-9) = {:e} (expected: ~-x/3 = ~-3.3e-10)",
        s.partial(&x)
    );
    println!();

    println!("=== Key Insights ===");
    println!("• Jets compute derivatives automatically via operator overloading");
    println!("• Chain rule emerges naturally from function composition");
    println!("• sinc switches to a Taylor expansion near zero for stability");
    println!("• Forward-mode AD: compute derivative alongside function value");
}
