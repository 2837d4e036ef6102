//! Delegated program execution.

pub mod command;
pub mod interrupt;
pub mod mock;

pub use command::{
    is_executable, resolve_tool_path, CommandOptions, CommandSpec, ProcessResult, Spawner,
    SystemSpawner,
};
pub use interrupt::{install_interrupt_handler, ChildGuard, INTERRUPTED_EXIT_CODE};
pub use mock::{Invocation, RecordingSpawner, SpawnHook};
