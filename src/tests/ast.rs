use crate::ast::{walk, Expr, Step};
use crate::parser::parse;
use crate::util::BinaryOperator::{Add, Mul, Sub};

#[test]
fn leaf() {
    let expr = Expr::leaf("x");
    assert!(expr.is_leaf());
    assert_eq!(expr.depth(), 1);
    assert_eq!(expr.leaves(), vec!["x"]);
    assert!(expr.operators().is_empty());
}

#[test]
fn binary_op() {
    let expr = Expr::binary_op(Expr::leaf("3"), Add, Expr::leaf("2"));
    assert!(!expr.is_leaf());
    assert_eq!(expr.depth(), 2);
    assert_eq!(expr.leaves(), vec!["3", "2"]);
    assert_eq!(expr.operators(), vec![Add]);
}

#[test]
fn pattern_match_parsed_tree() {
    let expr = parse("3 + 2 * 6").unwrap();
    match &expr {
        Expr::BinaryOp(lhs, Add, rhs) => {
            assert_eq!(**lhs, Expr::leaf("3"));
            match &**rhs {
                Expr::BinaryOp(lhs, Mul, rhs) => {
                    assert_eq!(**lhs, Expr::Leaf("2".to_owned()));
                    assert_eq!(**rhs, Expr::Leaf("6".to_owned()));
                }
                other => panic!("Expected multiplication, got {other:?}"),
            }
        }
        other => panic!("Expected addition, got {other:?}"),
    }
}

#[test]
fn depth_of_left_deep_tree() {
    let expr = parse("a - b - c - d").unwrap();
    assert_eq!(expr.depth(), 4);
    assert_eq!(expr.operators(), vec![Sub, Sub, Sub]);
}

#[test]
fn walk_visits_in_source_order() {
    let expr = parse("3 * 2 + 6").unwrap();
    let mut steps = vec![];
    walk(&expr, |step| steps.push(step));
    assert_eq!(
        steps,
        vec![
            Step::Open,
            Step::Open,
            Step::Leaf("3"),
            Step::Op(Mul),
            Step::Leaf("2"),
            Step::Close,
            Step::Op(Add),
            Step::Leaf("6"),
            Step::Close,
        ]
    );
}

#[test]
fn walk_single_leaf() {
    let expr = Expr::leaf("x");
    let mut steps = vec![];
    walk(&expr, |step| steps.push(step));
    assert_eq!(steps, vec![Step::Leaf("x")]);
}

#[test]
fn clone_is_equal_and_independent() {
    let expr = parse("a - b * c").unwrap();
    let copy = expr.clone();
    drop(expr);
    assert_eq!(copy, parse("a - b * c").unwrap());
    assert_ne!(copy, parse("a - b / c").unwrap());
    assert_ne!(copy, parse("a - b").unwrap());
}

#[test]
fn debug_output() {
    let expr = parse("3 + 2").unwrap();
    assert_eq!(format!("{expr:?}"), r#"BinaryOp(Leaf("3"), +, Leaf("2"))"#);
}
