use super::*;

#[test]
fn test_step_descends_along_gradient() {
    let p = Parameter::new(1.0);
    p.set_grad(0.5);
    let mut optimizer = SgdOptimizer::new([p.clone()], 0.1);
    optimizer.step().unwrap();
    assert_eq!(p.data(), 0.95);
    // The gradient itself is untouched by the update.
    assert_eq!(p.grad(), 0.5);
}

#[test]
fn test_zero_grad_clears_all() {
    let a = Parameter::new(1.0);
    let b = Parameter::new(2.0);
    a.set_grad(3.0);
    b.set_grad(-4.0);
    let mut optimizer = SgdOptimizer::new([a.clone(), b.clone()], 0.1);
    optimizer.zero_grad();
    assert_eq!(a.grad(), 0.0);
    assert_eq!(b.grad(), 0.0);
}

#[test]
fn test_zero_gradient_is_a_fixed_point() {
    let p = Parameter::new(0.25);
    let mut optimizer = SgdOptimizer::new([p.clone()], 1.0);
    optimizer.step().unwrap();
    assert_eq!(p.data(), 0.25);
}

#[test]
fn test_set_lr() {
    let mut optimizer = SgdOptimizer::new([], 0.1);
    assert_eq!(optimizer.lr(), 0.1);
    optimizer.set_lr(0.01);
    assert_eq!(optimizer.lr(), 0.01);
}
