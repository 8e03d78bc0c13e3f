//! The built-in command catalog.
//!
//! Commands are fixed at build time and grouped into families for help
//! rendering. The catalog is initialized once and cached for the lifetime
//! of the process.

use once_cell::sync::OnceCell;

/// The family a command belongs to, used to group help output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandFamily {
    Navigation,
    Tasks,
    Time,
    Calendar,
    Notes,
    System,
}

impl CommandFamily {
    /// Display label for help headings.
    pub fn label(&self) -> &'static str {
        match self {
            CommandFamily::Navigation => "NAVIGATION",
            CommandFamily::Tasks => "TASKS",
            CommandFamily::Time => "TIME TRACKING",
            CommandFamily::Calendar => "CALENDAR",
            CommandFamily::Notes => "NOTES",
            CommandFamily::System => "SYSTEM",
        }
    }

    /// All families, in help display order.
    pub fn all() -> &'static [CommandFamily] {
        &[
            CommandFamily::Navigation,
            CommandFamily::Tasks,
            CommandFamily::Time,
            CommandFamily::Calendar,
            CommandFamily::Notes,
            CommandFamily::System,
        ]
    }
}

/// A built-in console command.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    /// Command name as typed (dotted form).
    pub name: &'static str,
    /// Usage format shown in help listings.
    pub usage: &'static str,
    /// One-line description.
    pub description: &'static str,
    pub family: CommandFamily,
    /// Detailed help text for `help <command>`, if any.
    pub detail: Option<&'static str>,
}

impl CommandSpec {
    const fn new(
        name: &'static str,
        usage: &'static str,
        description: &'static str,
        family: CommandFamily,
        detail: Option<&'static str>,
    ) -> Self {
        Self {
            name,
            usage,
            description,
            family,
            detail,
        }
    }
}

/// Static storage for the catalog (initialized once).
static CATALOG: OnceCell<Vec<CommandSpec>> = OnceCell::new();

/// Returns the full command catalog.
pub fn catalog() -> &'static [CommandSpec] {
    CATALOG.get_or_init(|| {
        vec![
            CommandSpec::new(
                "nav.dashboard",
                "nav.dashboard",
                "Switch to the dashboard view",
                CommandFamily::Navigation,
                Some("Aliases: goto.dashboard. The previous view is pushed onto the back stack."),
            ),
            CommandSpec::new(
                "nav.todos",
                "nav.todos",
                "Switch to the todos view",
                CommandFamily::Navigation,
                Some("Aliases: goto.todos, nav.tasks, goto.tasks."),
            ),
            CommandSpec::new(
                "nav.timelog",
                "nav.timelog",
                "Switch to the time log view",
                CommandFamily::Navigation,
                Some("Aliases: goto.timelog."),
            ),
            CommandSpec::new(
                "nav.calendar",
                "nav.calendar",
                "Switch to the calendar view",
                CommandFamily::Navigation,
                Some("Aliases: goto.calendar."),
            ),
            CommandSpec::new(
                "nav.notes",
                "nav.notes",
                "Switch to the notes view",
                CommandFamily::Navigation,
                Some("Aliases: goto.notes."),
            ),
            CommandSpec::new(
                "nav.back",
                "nav.back",
                "Return to the previous view",
                CommandFamily::Navigation,
                Some("Pops the back stack; reports an error when the stack is empty."),
            ),
            CommandSpec::new(
                "todo.add",
                "todo.add <text> [-p low|medium|high]",
                "Create a task",
                CommandFamily::Tasks,
                Some("Priority defaults to medium. Quotes around the text are stripped."),
            ),
            CommandSpec::new(
                "todo.list",
                "todo.list [-p <priority>]",
                "List tasks, optionally filtered by priority",
                CommandFamily::Tasks,
                None,
            ),
            CommandSpec::new(
                "todo.complete",
                "todo.complete <id>",
                "Mark a task complete",
                CommandFamily::Tasks,
                Some("Accepts the shortened id shown by todo.list."),
            ),
            CommandSpec::new(
                "todo.delete",
                "todo.delete <id>",
                "Delete a task",
                CommandFamily::Tasks,
                Some("Accepts the shortened id shown by todo.list."),
            ),
            CommandSpec::new(
                "time.start",
                "time.start <activity>",
                "Start tracking an activity",
                CommandFamily::Time,
                Some(
                    "If a timer is already running it is stopped first and its elapsed \
                     whole minutes are logged as a time entry.",
                ),
            ),
            CommandSpec::new(
                "time.stop",
                "time.stop",
                "Stop the active timer and log the elapsed time",
                CommandFamily::Time,
                None,
            ),
            CommandSpec::new(
                "time.status",
                "time.status",
                "Show the active timer",
                CommandFamily::Time,
                None,
            ),
            CommandSpec::new(
                "time.log",
                "time.log <activity> <minutes>",
                "Log a time entry manually",
                CommandFamily::Time,
                Some("Bypasses the timer entirely; minutes must be an integer."),
            ),
            CommandSpec::new(
                "time.today",
                "time.today",
                "Summarize today's tracked time",
                CommandFamily::Time,
                Some("Shows the total and the five most recent entries."),
            ),
            CommandSpec::new(
                "cal.add",
                "cal.add <title> [-d YYYY-MM-DD]",
                "Add a calendar event",
                CommandFamily::Calendar,
                Some("Date defaults to today."),
            ),
            CommandSpec::new(
                "cal.today",
                "cal.today",
                "List today's events",
                CommandFamily::Calendar,
                None,
            ),
            CommandSpec::new(
                "note.add",
                "note.add <title> <content> [-t a,b,c]",
                "Save a note",
                CommandFamily::Notes,
                Some("First word is the title, the rest is the content. Tags are comma-separated."),
            ),
            CommandSpec::new(
                "note.search",
                "note.search <keyword>",
                "Search notes by keyword",
                CommandFamily::Notes,
                Some("Case-insensitive substring match over titles and content."),
            ),
            CommandSpec::new(
                "help",
                "help [command]",
                "List commands, or show detailed help for one",
                CommandFamily::System,
                None,
            ),
            CommandSpec::new(
                "history",
                "history",
                "Show the last 10 submitted commands",
                CommandFamily::System,
                None,
            ),
            CommandSpec::new(
                "clear",
                "clear",
                "Clear the transcript",
                CommandFamily::System,
                None,
            ),
            CommandSpec::new(
                "theme.change",
                "theme.change <green|purple|red|black>",
                "Change the display theme",
                CommandFamily::System,
                Some("The theme persists across restarts. A leading '-' on the name is accepted."),
            ),
            CommandSpec::new(
                "sys.status",
                "sys.status",
                "Show system status",
                CommandFamily::System,
                None,
            ),
            CommandSpec::new(
                "sys.reload",
                "sys.reload",
                "Reload the whole surface",
                CommandFamily::System,
                Some("Takes effect immediately; nothing is appended to the transcript."),
            ),
        ]
    })
}

/// Finds a command by its canonical name or `goto.*` alias.
pub fn find_command(name: &str) -> Option<&'static CommandSpec> {
    let canonical = name.strip_prefix("goto.").map(|rest| format!("nav.{rest}"));
    let lookup = canonical.as_deref().unwrap_or(name);
    catalog().iter().find(|spec| spec.name == lookup)
}

/// All command names, for completion in front ends.
pub fn command_names() -> Vec<&'static str> {
    catalog().iter().map(|spec| spec.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_initialized() {
        let commands = catalog();
        assert!(!commands.is_empty());
        assert!(commands.iter().any(|c| c.name == "help"));
        assert!(commands.iter().any(|c| c.name == "time.start"));
    }

    #[test]
    fn test_every_family_represented() {
        for family in CommandFamily::all() {
            assert!(
                catalog().iter().any(|c| c.family == *family),
                "no commands in {:?}",
                family
            );
        }
    }

    #[test]
    fn test_find_command() {
        assert!(find_command("todo.add").is_some());
        assert!(find_command("nonexistent").is_none());
    }

    #[test]
    fn test_goto_alias_resolves() {
        let spec = find_command("goto.calendar").unwrap();
        assert_eq!(spec.name, "nav.calendar");
    }

    #[test]
    fn test_names_unique() {
        let names = command_names();
        let mut deduped = names.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(names.len(), deduped.len());
    }
}
