use crate::config::ResolvedSettings;
use crate::domain::{group_and_order, parse_date, Task, TaskEdit, TaskMap, Urgency};
use crate::error::TaskError;
use crate::input::Prompt;
use crate::persistence::{load_tasks, parse_selection, process_tasks, save_tasks, LogOutcome};
use crate::ui::Renderer;
use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use std::io::{BufRead, Write};

/// "1: late, 2: critical, ..." as offered in prompts
fn urgency_choices() -> String {
    Urgency::all()
        .iter()
        .map(|urgency| format!("{}: {}", urgency.id() + 1, urgency.name()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Everything a command needs for one invocation
pub struct Session {
    pub settings: ResolvedSettings,
    pub renderer: Renderer,
    /// Wall-clock instant the invocation started at
    pub now: NaiveDateTime,
}

impl Session {
    pub fn new(settings: ResolvedSettings, renderer: Renderer, now: NaiveDateTime) -> Self {
        Self {
            settings,
            renderer,
            now,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.now.date()
    }

    fn load(&self) -> Result<TaskMap> {
        load_tasks(&self.settings.task_file, self.today())
    }

    fn save(&self, tasks: &TaskMap) -> Result<()> {
        save_tasks(&self.settings.task_file, tasks)
    }
}

/// Print the grouped task listing
pub fn run_read<W: Write>(session: &Session, out: &mut W) -> Result<()> {
    let tasks = session.load()?;
    let groups = group_and_order(&tasks);
    let listing = session.renderer.render_listing(&groups, session.today());
    out.write_all(listing.as_bytes())
        .context("Failed to write task listing")?;
    Ok(())
}

/// Prompt for new tasks until the user declines to add another
pub fn run_write<R: BufRead, W: Write>(session: &Session, prompt: &mut Prompt<R, W>) -> Result<()> {
    prompt.say("Instructions:\n")?;
    prompt.say(" Task name can be anything, type q to quit.")?;
    prompt.say(" Deadline date must be in the format DD-MM-YY.")?;
    prompt.say(&format!(" Urgency status: {}.\n", urgency_choices()))?;

    let mut tasks = session.load()?;

    loop {
        let task = ask_new_task(session.today(), prompt)?;
        let id = tasks.keys().next_back().map_or(1, |last| last + 1);
        tasks.insert(id, task);
        session.save(&tasks)?;
        prompt.say("\nTask written successfully.")?;

        let again = prompt.ask("\nWrite another task? (y/n) ")?;
        if matches!(again.trim().to_lowercase().as_str(), "n" | "no") {
            return Ok(());
        }
    }
}

/// Read one task; an empty deadline means today, an empty urgency means normal
fn ask_new_task<R: BufRead, W: Write>(today: NaiveDate, prompt: &mut Prompt<R, W>) -> Result<Task> {
    let name = prompt.ask("Task name: ")?;
    if name.trim().eq_ignore_ascii_case("q") {
        return Err(TaskError::Aborted.into());
    }

    let deadline = prompt.ask("Deadline: ")?;
    let end_date = if deadline.trim().is_empty() {
        today
    } else {
        parse_date(&deadline)?
    };

    let choice = prompt.ask("Urgency status: ")?;
    let urgency = if choice.trim().is_empty() {
        Urgency::Normal
    } else {
        Urgency::parse_choice(&choice)?
    };

    Ok(Task::new(name, today, end_date, urgency, today)?)
}

/// Log the selected tasks with `outcome` and drop them from the task file
pub fn run_process<R: BufRead, W: Write>(
    session: &Session,
    prompt: &mut Prompt<R, W>,
    outcome: LogOutcome,
) -> Result<()> {
    let mut tasks = session.load()?;
    if tasks.is_empty() {
        prompt.say("No tasks.")?;
        return Ok(());
    }

    list_tasks(prompt, &tasks)?;
    prompt.say("\nInstructions: ")?;
    prompt.say(" Select task numbers only.")?;
    prompt.say(" Separate tasks with a comma and no space.")?;
    prompt.say(" Type q to quit.\n")?;

    let answer = prompt.ask_non_empty("Select tasks: ")?;
    if answer.trim() == "q" {
        return Err(TaskError::Aborted.into());
    }

    let ids = parse_selection(&answer)?;
    process_tasks(&ids, &mut tasks, &session.settings.log_file, outcome, session.now)?;
    session.save(&tasks)?;

    prompt.say(&format!("\n Tasks successfully logged as {}.", outcome.describe()))?;
    Ok(())
}

/// Replace one task with an edited copy; empty answers keep the old field
pub fn run_edit<R: BufRead, W: Write>(session: &Session, prompt: &mut Prompt<R, W>) -> Result<()> {
    let mut tasks = session.load()?;
    if tasks.is_empty() {
        prompt.say("No tasks.")?;
        return Ok(());
    }

    list_tasks(prompt, &tasks)?;
    prompt.say("\nInstructions: ")?;
    prompt.say(" Select one task number only.")?;
    prompt.say(" Press enter to leave field unchanged.")?;
    prompt.say(" Type q to quit.\n")?;

    let answer = prompt.ask_non_empty("Select task: ")?;
    if answer.trim() == "q" {
        return Err(TaskError::Aborted.into());
    }

    let id: usize = answer
        .trim()
        .parse()
        .map_err(|_| TaskError::invalid_selection(answer.trim()))?;
    let task = tasks.get(&id).ok_or(TaskError::UnknownTask { id })?;

    let mut edit = TaskEdit::default();

    let name = prompt.ask("Enter new task: ")?;
    if !name.trim().is_empty() {
        edit.name = Some(name);
    }

    let deadline = prompt.ask("New deadline (DD-MM-YY): ")?;
    if !deadline.trim().is_empty() {
        edit.end_date = Some(parse_date(&deadline)?);
    }

    let choice = prompt.ask(&format!("New urgency status ({}): ", urgency_choices()))?;
    if !choice.trim().is_empty() {
        edit.urgency = Some(Urgency::parse_choice(&choice)?);
    }

    if edit.is_empty() {
        prompt.say("\n Task unchanged.")?;
        return Ok(());
    }

    let edited = task.edited(&edit, session.today())?;
    tasks.insert(id, edited);
    session.save(&tasks)?;

    prompt.say("\n Task edited successfully.")?;
    Ok(())
}

/// Print " id: name" for every task
fn list_tasks<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>, tasks: &TaskMap) -> Result<()> {
    prompt.say("Available tasks\n")?;
    for (id, task) in tasks {
        prompt.say(&format!(" {}: {}", id, task.name()))?;
    }
    Ok(())
}
