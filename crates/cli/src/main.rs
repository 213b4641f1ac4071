//! FitTrack CLI - fitness dashboard over a seeded session.

mod config;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use fittrack_core::{DailyRecord, ItemId, MealId, MetricKind, WorkoutId};
use fittrack_metrics::{bmi, daily_progress, day_over_day, weekly_summary, weight_trend};
use fittrack_session::{seed, DietPlan, ProfileEditor, WeekCalendar, WorkoutSession};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fittrack")]
#[command(about = "Fitness tracking dashboard", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Treat this date as today (YYYY-MM-DD)
    #[arg(long)]
    today: Option<NaiveDate>,
}

#[derive(Subcommand)]
enum Commands {
    /// Weekly totals and averages
    Summary {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Weight change over the configured window
    Trend,
    /// Today vs. yesterday
    Compare {
        /// Metric to compare (all when omitted)
        #[arg(long, value_enum)]
        metric: Option<MetricArg>,
    },
    /// Body-mass index
    Bmi {
        /// Weight in kg (profile weight when omitted)
        #[arg(long)]
        weight: Option<f64>,
        /// Height in cm (profile height when omitted)
        #[arg(long)]
        height: Option<f64>,
    },
    /// Diet plan with nutrition totals
    Diet {
        /// Check off meal items, as MEAL:ITEM
        #[arg(long, value_parser = parse_meal_item)]
        check: Vec<(MealId, ItemId)>,
        /// Glasses of water to add
        #[arg(long, default_value = "0")]
        water: u32,
    },
    /// Workout exercise checklist
    Workout {
        /// Workout ID
        id: WorkoutId,
        /// Exercise IDs to check off
        #[arg(long)]
        done: Vec<ItemId>,
    },
    /// Week view and activities for a day
    Calendar {
        /// Day to show (today when omitted)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Today's workout, diet and water progress
    Progress,
}

#[derive(Clone, Copy, ValueEnum)]
enum MetricArg {
    Steps,
    Minutes,
    Calories,
    Water,
}

impl From<MetricArg> for MetricKind {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::Steps => MetricKind::Steps,
            MetricArg::Minutes => MetricKind::WorkoutMinutes,
            MetricArg::Calories => MetricKind::Calories,
            MetricArg::Water => MetricKind::Water,
        }
    }
}

fn parse_meal_item(s: &str) -> Result<(MealId, ItemId), String> {
    let (meal, item) = s
        .split_once(':')
        .ok_or_else(|| format!("expected MEAL:ITEM, got '{s}'"))?;
    let meal = meal.parse().map_err(|e| format!("bad meal id '{meal}': {e}"))?;
    let item = item.parse().map_err(|e| format!("bad item id '{item}': {e}"))?;
    Ok((meal, item))
}

/// Most recent `days` records, or all of them when fewer were tracked.
fn weight_window(records: &[DailyRecord], days: usize) -> &[DailyRecord] {
    &records[..days.min(records.len())]
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let config = config::load(cli.config.as_deref())?;
    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    info!(%today, "Starting session");

    let records = seed::progress_records(today, &config)?;
    for record in &records {
        record.validate(&config)?;
    }

    match cli.command {
        Commands::Summary { json } => {
            let summary = weekly_summary(&records)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
                return Ok(());
            }
            println!("Weekly Summary ({} days)", records.len());
            println!("  Workouts:     {}", summary.total_workouts);
            println!("  Active time:  {} min", summary.total_workout_minutes);
            println!("  Total steps:  {}", render::thousands(summary.total_steps));
            println!("  Water intake: {} glasses", summary.total_water);
            println!("  Avg calories: {} kcal", summary.avg_calories.round() as i64);
        }
        Commands::Trend => {
            let window = weight_window(&records, config.weight_window_days);
            let trend = weight_trend(window)?;
            println!("Current weight: {} kg", records[0].weight_kg);
            println!("{}", render::weight_line(&trend, window.len()));
        }
        Commands::Compare { metric } => {
            let (today_record, yesterday) = match records.as_slice() {
                [today_record, yesterday, ..] => (today_record, yesterday),
                _ => anyhow::bail!("need at least two days of records to compare"),
            };
            let metrics: Vec<MetricKind> = match metric {
                Some(arg) => vec![arg.into()],
                None => MetricKind::ALL.to_vec(),
            };

            println!("Today vs. Yesterday");
            for kind in metrics {
                let comparison = day_over_day(today_record, yesterday, kind);
                println!("  {}", render::comparison_line(&comparison));
            }
        }
        Commands::Bmi { weight, height } => {
            let profile = seed::profile();
            let weight = weight.unwrap_or(profile.weight_kg);
            let height = height.unwrap_or(profile.height_cm);
            let value = bmi(weight, height)?;
            println!("BMI: {value:.1} ({weight} kg, {height} cm)");
        }
        Commands::Diet { check, water } => {
            let mut plan =
                DietPlan::new(seed::meals(), &config).with_water(seed::INITIAL_WATER_GLASSES);
            for (meal, item) in check {
                plan.toggle_meal_item(meal, item)?;
            }
            for _ in 0..water {
                if !plan.add_water_glass() {
                    break;
                }
            }
            print_diet(&plan)?;
        }
        Commands::Workout { id, done } => {
            let workout = seed::workout(id).with_context(|| format!("workout {id} not found"))?;
            let mut session = WorkoutSession::new(workout);
            for exercise in done {
                session.toggle_exercise(exercise)?;
            }

            let workout = session.workout();
            println!("{} - {}", workout.title, workout.subtitle);
            println!("  {} min, {} cal", workout.duration_minutes, workout.calories);
            println!(
                "  {}/{} exercises ({})",
                session.completed_count(),
                session.exercises().len(),
                render::percent(session.completion_percentage()?)
            );
            for exercise in session.exercises() {
                println!(
                    "  [{}] {} - {} sets x {} {}",
                    if exercise.item.completed { "x" } else { " " },
                    exercise.item.label,
                    exercise.sets,
                    exercise.reps,
                    exercise.unit.label()
                );
            }
        }
        Commands::Calendar { date } => {
            let mut calendar = WeekCalendar::new(today, &config)?;
            if let Some(date) = date {
                calendar.select(date)?;
            }
            print_calendar(&calendar);
        }
        Commands::Progress => {
            let plan = DietPlan::new(seed::meals(), &config).with_water(seed::INITIAL_WATER_GLASSES);
            let workout = seed::todays_workout();
            let progress = daily_progress(&workout, plan.meals(), plan.water_glasses(), &config)?;

            println!("Daily Progress");
            println!("  Workout: {}", render::percent(progress.workout_percent));
            println!("  Diet:    {}", render::percent(progress.diet_percent));
            println!(
                "  Water:   {} ({}/{} glasses)",
                render::percent(progress.water_percent),
                plan.water_glasses(),
                plan.water_target()
            );

            let editor = ProfileEditor::new(seed::profile());
            let goals = editor.goals();
            println!(
                "  Goals:   {} workouts/week, {} kcal/day, {} kg target, BMI {:.1}",
                goals.weekly_workouts_target,
                goals.daily_calories_target,
                goals.target_weight_kg,
                editor.bmi()?
            );
        }
    }

    Ok(())
}

fn print_diet(plan: &DietPlan) -> Result<()> {
    use fittrack_core::Checklist;

    let totals = plan.nutrition();
    println!("Diet Plan");
    println!(
        "  {} kcal | protein {}g | carbs {}g | fat {}g",
        totals.calories, totals.protein, totals.carbs, totals.fat
    );
    println!(
        "  Meals done: {}/{} ({})",
        plan.completed_meals(),
        plan.meals().len(),
        render::percent(plan.completion_percentage()?)
    );
    println!("  Water: {}/{} glasses", plan.water_glasses(), plan.water_target());

    for meal in plan.meals() {
        println!(
            "  {} {} ({} kcal){}",
            meal.time.format("%H:%M"),
            meal.name,
            meal.calories,
            if meal.is_completed() { " - done" } else { "" }
        );
        for item in &meal.items {
            println!(
                "    [{}] {}:{} {}",
                if item.completed { "x" } else { " " },
                meal.id,
                item.id,
                item.label
            );
        }
    }
    Ok(())
}

fn print_calendar(calendar: &WeekCalendar) {
    println!("{}", calendar.title());
    let days: Vec<String> = calendar
        .days()
        .iter()
        .map(|day| {
            let label = day.format("%a %d").to_string();
            if calendar.is_selected(*day) {
                format!("[{label}]")
            } else if calendar.is_today(*day) {
                format!("*{label}*")
            } else {
                label
            }
        })
        .collect();
    println!("  {}", days.join("  "));

    let selected = calendar.selected();
    println!("{}", selected.format("%A, %B %-d"));
    for activity in seed::activities_for(selected) {
        let mut line = format!(
            "  {}-{} {:<18} {:<8} {} min",
            activity.start_time.format("%H:%M"),
            activity.end_time.format("%H:%M"),
            activity.title,
            activity.kind.as_str(),
            activity.scheduled_minutes()
        );
        if let Some(calories) = activity.calories {
            line.push_str(&format!(", {calories} cal"));
        }
        if activity.completed {
            line.push_str(" - done");
        } else if let Some(progress) = activity.progress {
            line.push_str(&format!(" - {}", render::percent(progress)));
        }
        println!("{line}");
    }
}
