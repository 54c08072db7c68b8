//! End-to-end scenarios: the division pipeline from the crate docs,
//! display rendering and the dual access surface.

use pretty_assertions::assert_eq;
use rstest::rstest;
use upshot::{AccessError, IntoUpshot, Upshot, UpshotState};

fn div(a: f64, b: f64) -> Upshot<f64, String> {
    if b == 0.0 {
        Upshot::from_error("Division by zero error".to_string())
    } else {
        Upshot::from_value(a / b)
    }
}

#[test]
fn division_succeeds_and_renders() {
    let res = div(10.0, 2.0);
    assert_eq!(res.success(), Some(&5.0));
    insta::assert_snapshot!(res.to_string(), @"5");
}

#[test]
fn division_by_zero_reports_error() {
    let res = div(5.0, 0.0);
    assert_eq!(
        res.error().map(String::as_str),
        Some("Division by zero error")
    );
    insta::assert_snapshot!(res.to_string(), @"Division by zero error");
}

#[test]
fn or_else_recovers_division_by_zero_to_infinity() {
    let res: Upshot<f64, String> = div(5.0, 0.0).or_else(|_| Upshot::from_value(f64::INFINITY));
    assert_eq!(res.success(), Some(&f64::INFINITY));
}

#[test]
fn chained_pipeline_squares_the_doubled_quotient() {
    let res = div(12.0, 3.0)
        .and_then(|x| {
            if x > 0.0 {
                Upshot::from_value(x * 2.0)
            } else {
                Upshot::from_error("negative".to_string())
            }
        })
        .map(|y| y * y);
    assert_eq!(res.success(), Some(&64.0));
}

#[test]
fn map_error_appends_context() {
    let res: Upshot<i32, String> = Upshot::from_error("bad".to_string());
    let mapped = res.map_error(|e| format!("{e} (mapped)"));
    assert_eq!(mapped.error().map(String::as_str), Some("bad (mapped)"));
}

#[test]
fn empty_renders_as_the_empty_string() {
    let res: Upshot<f64, String> = Upshot::empty();
    insta::assert_snapshot!(res.to_string(), @"");
}

#[rstest]
#[case::success(div(9.0, 3.0), UpshotState::Success)]
#[case::error(div(1.0, 0.0), UpshotState::Error)]
#[case::empty(Upshot::empty(), UpshotState::Empty)]
fn state_tag_matches_construction(
    #[case] res: Upshot<f64, String>,
    #[case] expected: UpshotState,
) {
    assert_eq!(res.state(), expected);
}

#[rstest]
#[case::error(div(1.0, 0.0))]
#[case::empty(Upshot::empty())]
fn value_fails_outside_success(#[case] res: Upshot<f64, String>) {
    let err = res.value().unwrap_err();
    assert_eq!(
        err,
        AccessError::InvalidState {
            actual: res.state()
        }
    );
}

#[test]
fn parse_pipeline_through_extension_trait() {
    let port = "8080"
        .parse::<u16>()
        .into_upshot()
        .map_error(|e| e.to_string())
        .value_or(80);
    assert_eq!(port, 8080);
}

#[test]
fn transform_collapses_error_into_success_encoding() {
    let rendered = div(1.0, 0.0).transform(|res| match res {
        Upshot::Success(v) => Upshot::<String, String>::from_value(format!("= {v}")),
        Upshot::Error(e) => Upshot::from_value(format!("! {e}")),
        Upshot::Empty => Upshot::empty(),
    });
    assert_eq!(
        rendered.success().map(String::as_str),
        Some("! Division by zero error")
    );
}
