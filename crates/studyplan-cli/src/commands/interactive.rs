//! Guided prompt flow: asks for courses, hours, days and start date.

use std::io::{self, BufRead, Write};

use studyplan_core::output::{print_plan, save_to_file};
use studyplan_core::{parse_date, Config, Course, PlanRequest, StudyPlan};

const NOT_ELIGIBLE: &str = "Sorry, this service is only for engineering students.";
const NEED_ONE_COURSE: &str = "You need to have at least one course.";
const BAD_COURSE_COUNT: &str = "Please enter a valid number for courses.";
const BAD_UNITS: &str = "Please enter a valid number of units.";
const BAD_NUMBER: &str = "Invalid input. Please make sure you enter numeric values where appropriate.";
const BAD_DATE: &str = "Invalid date format. Please enter the date in YYYY-MM-DD format.";

/// Reads answers from `input`, writing prompts and messages to `out`.
struct Prompter<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before all questions were answered",
            ));
        }
        Ok(line.trim().to_string())
    }

    fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{message}")
    }
}

/// Collect a plan request from the prompts.
///
/// Returns `Ok(None)` when the flow stops early; the reason has already been
/// written to `out`.
fn collect_request<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    config: &Config,
) -> io::Result<Option<PlanRequest>> {
    if config.eligibility.engineering_only {
        let answer = p.ask("Are you studying engineering? (yes/no): ")?;
        if answer.to_lowercase() != "yes" {
            p.say(NOT_ELIGIBLE)?;
            return Ok(None);
        }
    }

    let count = match p
        .ask("How many courses do you have in the semester? ")?
        .parse::<i64>()
    {
        Ok(n) if n <= 0 => {
            p.say(NEED_ONE_COURSE)?;
            return Ok(None);
        }
        Ok(n) => n,
        Err(_) => {
            p.say(BAD_COURSE_COUNT)?;
            return Ok(None);
        }
    };

    let mut courses = Vec::new();
    for _ in 0..count {
        let name = p.ask("Enter course name: ")?;
        let units = p.ask(&format!("Enter the number of units for {name}: "))?;
        match units.parse::<u32>().map_err(|e| e.to_string()).and_then(|units| {
            Course::new(name.as_str(), units).map_err(|e| e.to_string())
        }) {
            Ok(course) => courses.push(course),
            Err(reason) => {
                tracing::debug!(%name, %units, %reason, "skipping course");
                p.say(BAD_UNITS)?;
            }
        }
    }

    let hours = p.ask("Enter the number of hours you can study per day: ")?;
    let Ok(daily_hours) = hours.parse::<f64>() else {
        p.say(BAD_NUMBER)?;
        return Ok(None);
    };
    let days = p.ask("Enter the total number of days in your semester: ")?;
    let Ok(total_days) = days.parse::<u64>() else {
        p.say(BAD_NUMBER)?;
        return Ok(None);
    };
    let start_date = p.ask("Enter the semester start date (YYYY-MM-DD): ")?;
    if parse_date(&start_date).is_err() {
        p.say(BAD_DATE)?;
        return Ok(None);
    }

    Ok(Some(
        PlanRequest::new(courses, daily_hours, total_days, start_date)
            .with_order(config.entry_order()),
    ))
}

/// Run the prompts and generate the plan.
fn prompt_for_plan<R: BufRead, W: Write>(
    input: R,
    out: W,
    config: &Config,
) -> Result<Option<StudyPlan>, Box<dyn std::error::Error>> {
    let mut prompter = Prompter { input, out };
    match collect_request(&mut prompter, config)? {
        Some(request) => Ok(Some(request.generate()?)),
        None => Ok(None),
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let stdin = io::stdin();
    let Some(plan) = prompt_for_plan(stdin.lock(), io::stdout(), &config)? else {
        return Ok(());
    };

    if config.output.write_file {
        save_to_file(&plan, &config.output.filename)?;
    }
    if config.output.print_console {
        print_plan(&plan)?;
    }
    Ok(())
}
