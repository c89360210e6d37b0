use crate::domain::model::{AppDescriptor, SeedLayout, UpdateStatus};
use crate::utils::error::Result;
use std::path::Path;

pub trait ConfigProvider {
    fn apps(&self) -> &[AppDescriptor];
    fn layout(&self) -> &SeedLayout;
}

/// Runs the dependency manager's update step in the project root.
pub trait DependencyUpdater {
    fn update(&self, project_root: &Path) -> Result<UpdateStatus>;
}

/// Line-oriented console the installer talks to the user through.
pub trait Console {
    fn write(&mut self, line: &str);
}

#[derive(Debug, Default)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn write(&mut self, line: &str) {
        println!("{}", line);
    }
}

/// Keeps every line in memory.
#[derive(Debug, Default, Clone)]
pub struct BufferConsole {
    pub lines: Vec<String>,
}

impl BufferConsole {
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }
}

impl Console for BufferConsole {
    fn write(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}
