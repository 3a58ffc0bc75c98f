//! Tests reading plan files from disk and running the planner on them.

use std::collections::BTreeSet;
use std::io::Write;

use leave_planner::date;
use leave_planner::input::{Config, ConfigError};
use leave_planner::planner::PlanError;
use leave_planner::time::Year;

use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

mod common;

fn write_plan_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("should be able to create a temporary file");
    file.write_all(contents.as_bytes())
        .expect("should be able to write the plan file");
    file
}

#[test]
fn test_plan_from_file() {
    let file = write_plan_file(&common::make_plan_file(2024, 1));

    let config = Config::try_from_toml_file(file.path())
        .expect("plan file should be valid")
        .build()
        .expect("config should be valid");
    let plan = config.plan().unwrap();

    assert_eq!(plan.leave_dates(), &BTreeSet::from([date!(2024:01:05)]));
    assert_eq!(
        plan.statistics().to_string(),
        "Statistics for 2024: Paid Leaves Used: 1/1 | National Holidays: 0 | Custom Holidays: 0 | Total Days Off: 105 (28.7%) | Working Days: 261 | Efficiency: 1.00 extra days per leave"
    );
}

#[test]
fn test_override_budget_and_start() {
    let file = write_plan_file(&common::make_plan_file(2024, 30));

    let mut builder = Config::try_from_toml_file(file.path()).expect("plan file should be valid");
    builder.paid_leaves(1).start(date!(2024:01:06));

    let plan = builder.build().unwrap().plan().unwrap();

    // the monday after the first weekend
    assert_eq!(plan.leave_dates(), &BTreeSet::from([date!(2024:01:08)]));
    assert_eq!(plan.statistics().allocated_leaves(), 1);
}

#[test]
fn test_unsatisfiable_plan_file() {
    let plan = common::plan_from_toml(
        &(common::make_plan_file(2024, 3)
            + concat!(
                //
                "[constraints]\n",
                "minimum_paid_leaves_in_row = 10\n",
            )),
    );

    assert_eq!(
        plan,
        Err(PlanError::UnsatisfiableMandatoryConstraint { threshold: 10 })
    );
}

#[test]
fn test_holidays_from_file() {
    let plan = common::plan_from_toml(
        &(common::make_plan_file(2024, 1)
            + concat!(
                "[holidays]\n",
                "preset = \"germany\"\n",
                "custom = [2024-12-24]\n",
            )),
    )
    .unwrap();

    assert_eq!(plan.leave_dates(), &BTreeSet::from([date!(2024:03:28)]));
    assert_eq!(plan.statistics().national_holidays(), 9);
    assert_eq!(plan.statistics().custom_holidays(), 1);
}

#[test]
fn test_plan_as_json() {
    let plan = common::plan_from_toml(&common::make_plan_file(2024, 1)).unwrap();

    let json = serde_json::to_value(&plan).expect("plan should be serializable");

    assert_eq!(json["leave_dates"], serde_json::json!(["2024-01-05"]));
    assert_eq!(json["statistics"]["total_days_off"], serde_json::json!(105));
    assert_eq!(json["statistics"]["year"], serde_json::json!(2024));
    assert_eq!(
        json["committed"][0]["anchor"],
        serde_json::json!("2024-01-05")
    );
}

#[test]
fn test_negative_budget() {
    let file = write_plan_file(&common::make_plan_file(2024, -5));

    let result = Config::try_from_toml_file(file.path())
        .expect("plan file should be valid")
        .build();

    assert_eq!(
        result.unwrap_err(),
        ConfigError::Plan(PlanError::InvalidBudget {
            input: "-5".to_string()
        })
    );
}

#[test]
fn test_budget_that_is_not_a_whole_number() {
    for (value, input) in [("2.5", "2.5"), ("\"ten\"", "ten")] {
        let file = write_plan_file(&format!(
            concat!(
                //
                "[general]\n",
                "year = 2024\n",
                "paid_leaves = {}\n",
            ),
            value
        ));

        let result = Config::try_from_toml_file(file.path())
            .expect("plan file should be valid")
            .build();

        assert_eq!(
            result.unwrap_err(),
            ConfigError::Plan(PlanError::InvalidBudget {
                input: input.to_string()
            })
        );
    }
}

#[test]
fn test_year_too_large() {
    let file = write_plan_file(&common::make_plan_file(10000, 1));

    assert!(Config::try_from_toml_file(file.path()).is_err());
}

#[test]
fn test_holiday_outside_year() {
    let file = write_plan_file(
        &(common::make_plan_file(2024, 5)
            + concat!(
                //
                "[holidays]\n",
                "national = [2023-12-25]\n",
            )),
    );

    let result = Config::try_from_toml_file(file.path())
        .expect("plan file should be valid")
        .build();

    assert_eq!(
        result.unwrap_err(),
        ConfigError::DateOutsideYear {
            kind: "national holiday",
            date: date!(2023:12:25),
            year: Year::new(2024),
        }
    );
}

#[test]
fn test_invalid_files() {
    assert!(Config::try_from_toml_file("does/not/exist.toml").is_err());

    let file = write_plan_file(
        &(common::make_plan_file(2024, 5)
            + concat!(
                //
                "[constraints]\n",
                "maximum_days_off = 7\n",
            )),
    );
    assert!(Config::try_from_toml_file(file.path()).is_err());
}
