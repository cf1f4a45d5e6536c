use pretty_assertions::assert_eq;
use proptest::prelude::*;
use reckon::{
    evaluate,
    util::{glyph::normalize_glyphs, num::format_result},
};

#[test]
fn integral_results_drop_the_fraction() {
    assert_eq!(format_result(14.0), "14");
    assert_eq!(format_result(-5.0), "-5");
    assert_eq!(format_result(0.0), "0");
    assert_eq!(format_result(-0.0), "0");
}

#[test]
fn fractional_results_use_shortest_form() {
    assert_eq!(format_result(11.5), "11.5");
    assert_eq!(format_result(-2.5), "-2.5");
    assert_eq!(format_result(1.0 / 3.0), "0.3333333333333333");
    assert_eq!(format_result(1e-7), "0.0000001");
}

#[test]
fn keypad_glyphs_evaluate() {
    let expression = normalize_glyphs("6×7÷2−1");
    assert_eq!(evaluate(&expression), Ok(20.0));
    assert_eq!(normalize_glyphs("(1–2)·3∕4"), "(1-2)*3/4");
}

#[test]
fn displayed_results_evaluate_to_themselves() {
    for src in ["2+3*4", "2+(3*4)-(5/2)", "1/3", "-7.25", "0.1+0.2", "1/-8"] {
        let value = evaluate(src).unwrap();
        let shown = format_result(value);
        assert_eq!(evaluate(&shown), Ok(value), "{src:?} displayed as {shown:?}");
    }
}

proptest! {
    #[test]
    fn format_round_trips(value in prop::num::f64::NORMAL
                                   | prop::num::f64::SUBNORMAL
                                   | prop::num::f64::ZERO) {
        let shown = format_result(value);
        prop_assert_eq!(evaluate(&shown), Ok(value), "displayed as {}", shown);
    }

    #[test]
    fn integer_arithmetic_matches_rust(a in -1000i32..1000,
                                       b in -1000i32..1000,
                                       c in 1i32..1000) {
        let src = format!("{a}+{b}*{c}-{a}/{c}");
        let expected = f64::from(a) + f64::from(b) * f64::from(c) - f64::from(a) / f64::from(c);
        prop_assert_eq!(evaluate(&src), Ok(expected));
    }
}
