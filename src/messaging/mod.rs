/// Messaging module for the command-driven controller
///
/// Input never touches the game directly. A reader turns each line into a
/// [`Command`] and sends it over a channel; the executor owns the session
/// and is the only writer.
///
/// ## Architecture
///
/// ```text
/// ┌─────────┐     Command      ┌──────────┐   snapshot   ┌───────────┐
/// │  stdin  │ ───────────────> │ Executor │ ───────────> │ Presenter │
/// │ thread  │                  │          │              │           │
/// └─────────┘                  └──────────┘              └───────────┘
///                                   ^
///                                   │ tick
///                              ┌──────────┐
///                              │  ticker  │
///                              └──────────┘
/// ```
///
/// ## Usage
///
/// ```rust,ignore
/// let (tx, rx) = crossbeam_channel::unbounded();
/// tx.send(Command::parse("start")?)?;
///
/// let mut executor = CommandExecutor::new(session, config);
/// executor.run(rx, Duration::from_millis(100), &mut ConsoleView::new(io::stdout()))?;
/// ```

pub mod commands;
pub mod executor;

// Re-export commonly used types
pub use commands::{Command, CommandResult};
pub use executor::CommandExecutor;
