use leave_planner::input::toml_input::PlanFile;
use leave_planner::input::Config;
use leave_planner::planner::{Calendar, Constraints, Plan, PlanError, PlannerOptions};
use leave_planner::time::{HolidayPreset, Year};

/// A calendar where only weekends are off.
#[must_use]
pub fn weekends_only(year: usize) -> Calendar {
    Calendar::new(Year::new(year))
}

/// A calendar with the nationwide german holidays.
#[must_use]
#[allow(dead_code)]
pub fn germany(year: usize) -> Calendar {
    let year = Year::new(year);

    Calendar::new(year).with_national_holidays(
        HolidayPreset::Germany
            .holidays(year)
            .into_iter()
            .map(|holiday| holiday.date()),
    )
}

#[allow(dead_code)]
pub fn plan(
    calendar: &Calendar,
    paid_leaves: usize,
    constraints: Constraints,
) -> Result<Plan, PlanError> {
    leave_planner::plan_leaves(
        calendar,
        &PlannerOptions::new(paid_leaves).with_constraints(constraints),
    )
}

#[must_use]
#[allow(dead_code)]
pub fn make_plan_file(year: usize, paid_leaves: i64) -> String {
    format!(
        concat!(
            //
            "[general]\n",
            "year = {}\n",
            "paid_leaves = {}\n",
            "\n",
        ),
        year, paid_leaves
    )
}

#[allow(dead_code)]
pub fn plan_from_toml(contents: &str) -> Result<Plan, PlanError> {
    let plan: PlanFile = toml::from_str(contents).expect("toml should be valid");

    Config::try_from_toml(plan)
        .build()
        .expect("config should be valid")
        .plan()
}
