use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{SAMPLE_2026, cal, write_dataset};

#[test]
fn test_check_valid_dataset() {
    let data = write_dataset("check_valid", SAMPLE_2026);

    cal()
        .args(["--data", &data, "check"])
        .assert()
        .success()
        .stdout(contains("is valid"));
}

#[test]
fn test_check_reports_every_issue() {
    let data = write_dataset(
        "check_invalid",
        r#"{"year": 2026, "months": [
            {"id": 1, "name": "Enero", "events": [
                {"date": "2026-13-99", "title": "bad", "tag": ""},
                {"date": "2026-02-01", "title": "misplaced", "tag": ""}
            ]},
            {"id": 1, "name": "Enero otra vez"}
        ]}"#,
    );

    cal()
        .args(["--data", &data, "check"])
        .assert()
        .failure()
        .stderr(
            contains("malformed date '2026-13-99'")
                .and(contains("does not belong"))
                .and(contains("appears more than once")),
        );
}

#[test]
fn test_bad_date_does_not_break_the_month_view() {
    let data = write_dataset(
        "check_view_survives",
        r#"{"year": 2026, "months": [
            {"id": 1, "name": "Enero", "events": [
                {"date": "2026-01-05", "title": "A", "tag": "cumple"},
                {"date": "2026-1-7", "title": "broken", "tag": ""}
            ]}
        ]}"#,
    );

    cal()
        .args(["--data", &data, "month", "1"])
        .assert()
        .success()
        .stdout(contains("Enero 05 A").and(contains("fecha inválida")))
        .stderr(contains("malformed date"));
}
