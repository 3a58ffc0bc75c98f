use std::env;
use std::ffi::OsStr;

use log::info;
use seahorse::{App, Command, Context, Flag, FlagType};

use leave_planner::input::Config;
use leave_planner::planner::{parse_budget, Plan};
use leave_planner::time::{Date, HolidayPreset, Year};

fn set_env_if_absent<K: AsRef<OsStr>, V: AsRef<OsStr>>(var: K, default: impl FnOnce() -> V) {
    if env::var(var.as_ref()).is_err() {
        env::set_var(var, default());
    }
}

fn main() {
    set_env_if_absent("RUST_APP_LOG", || "info");
    color_backtrace::install();
    pretty_env_logger::init_custom_env("RUST_APP_LOG");

    let args: Vec<String> = env::args().collect();
    let binary = args.first().cloned().unwrap_or_default();

    let plan_command = Command::new("plan")
        .usage(format!(
            "{} plan --plan <file> [--budget <n>] [--start <YYYY-MM-DD>] [--json]",
            binary
        ))
        .description("Plans the paid leaves of the year described by the plan file.")
        .flag(Flag::new("plan", FlagType::String).description("Path to the plan file."))
        .flag(
            Flag::new("budget", FlagType::String)
                .description("[optional] Overrides the amount of paid leaves in the plan file."),
        )
        .flag(
            Flag::new("start", FlagType::String)
                .description("[optional] Overrides the first date that can be taken off."),
        )
        .flag(
            Flag::new("json", FlagType::Bool)
                .description("[optional] Prints the plan as json. Default: false"),
        )
        .action(|context: &Context| exit_on_error(plan(context)));

    let holidays_command = Command::new("holidays")
        .usage(format!("{} holidays --year <n> --preset <name>", binary))
        .description("Lists the holidays of a built-in preset.")
        .flag(Flag::new("year", FlagType::String).description("The year to list."))
        .flag(
            Flag::new("preset", FlagType::String)
                .description("The preset, one of: germany, baden-wuerttemberg"),
        )
        .action(|context: &Context| exit_on_error(holidays(context)));

    let app = App::new(env!("CARGO_PKG_NAME"))
        .description(env!("CARGO_PKG_DESCRIPTION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .usage(format!("{} [args]", binary))
        .command(plan_command)
        .command(holidays_command);

    app.run(args);
}

mod seahorse_exts {
    use core::fmt;
    use std::path::PathBuf;

    use log::error;
    use seahorse::Context;

    pub trait ErrorLike: Send + Sync + fmt::Debug + 'static {}

    impl<E: Send + Sync + fmt::Debug + 'static> ErrorLike for E {}

    /// Seahorse actions can not return errors, so they are logged and the
    /// process exits.
    pub fn exit_on_error<E: ErrorLike>(result: Result<(), E>) {
        if let Err(e) = result {
            error!("{:?}", e);
            ::std::process::exit(1);
        }
    }

    pub trait ContextExt {
        fn context(&self) -> &Context;

        fn optional_string_flag(&self, name: &str) -> Option<String> {
            self.context().string_flag(name).ok()
        }

        fn required_string_flag(&self, name: &str) -> Result<String, anyhow::Error> {
            self.context()
                .string_flag(name)
                .map_err(|e| anyhow::anyhow!("missing required flag \"{}\": {:?}", name, e))
        }

        fn required_path_flag(&self, name: &str) -> Result<PathBuf, anyhow::Error> {
            self.required_string_flag(name).map(PathBuf::from)
        }
    }

    impl ContextExt for Context {
        fn context(&self) -> &Context {
            self
        }
    }
}

use seahorse_exts::{exit_on_error, ContextExt};

fn build_config(context: &Context) -> anyhow::Result<Config> {
    let path = context.required_path_flag("plan")?;
    let mut builder = Config::try_from_toml_file(&path)?;

    if let Some(budget) = context.optional_string_flag("budget") {
        builder.paid_leaves(parse_budget(&budget)?);
    }

    if let Some(start) = context.optional_string_flag("start") {
        builder.start(start.parse::<Date>()?);
    }

    let config = builder.build()?;

    info!("finished building config from \"{}\"", path.display());

    Ok(config)
}

fn print_plan(plan: &Plan) {
    for opportunity in plan.committed() {
        let dates = opportunity
            .leave_dates()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        println!(
            "{} - {}: {} paid leave(s) for {} days off ({})",
            opportunity.anchor(),
            opportunity.last_day_off(),
            opportunity.required_leaves(),
            opportunity.total_days_off(),
            dates
        );
    }

    println!("{}", plan.statistics());
}

fn plan(context: &Context) -> anyhow::Result<()> {
    let config = build_config(context)?;

    let plan = match config.plan() {
        Ok(plan) => plan,
        Err(reason) => {
            println!("{}", reason);
            ::std::process::exit(1);
        }
    };

    if context.bool_flag("json") {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print_plan(&plan);
    }

    Ok(())
}

fn holidays(context: &Context) -> anyhow::Result<()> {
    let year = Year::try_from(context.required_string_flag("year")?.trim().parse::<usize>()?)?;
    let preset = context.required_string_flag("preset")?.parse::<HolidayPreset>()?;

    for holiday in preset.holidays(year) {
        println!("{} ({})", holiday, holiday.date().week_day());
    }

    Ok(())
}
