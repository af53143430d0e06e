//! Starts applications detached from our own terminal and keeps track of them.
use crate::errors::{PlaceError, Result};
use crate::models::LaunchResult;
use std::collections::HashMap;
use std::os::unix::process::CommandExt;
use std::process::{Child, Command, Stdio};

/// Starts an application and returns its pid without waiting for it.
pub trait Launcher {
    /// # Errors
    ///
    /// Errors if the command line is empty or the program cannot be executed.
    fn launch(&mut self, command_line: &[String]) -> Result<LaunchResult>;
}

impl<T: Launcher + ?Sized> Launcher for &mut T {
    fn launch(&mut self, command_line: &[String]) -> Result<LaunchResult> {
        (**self).launch(command_line)
    }
}

/// Spawns with null stdio in a new process group, so the child neither blocks on our
/// streams nor receives the SIGINT of our terminal.
#[derive(Debug, Default)]
pub struct DetachedLauncher {
    children: Children,
}

impl DetachedLauncher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn children(&self) -> &Children {
        &self.children
    }
}

impl Launcher for DetachedLauncher {
    fn launch(&mut self, command_line: &[String]) -> Result<LaunchResult> {
        let (program, args) = command_line.split_first().ok_or(PlaceError::EmptyCommand)?;
        let program = shellexpand::tilde(program);

        let child = Command::new(&*program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .process_group(0)
            .spawn()
            .map_err(|source| PlaceError::Launch {
                command: command_line.join(" "),
                source,
            })?;

        let pid = child.id();
        tracing::debug!("Spawned {:?} with pid {}", command_line, pid);
        self.children.remove_finished_children();
        self.children.insert(child);

        Ok(LaunchResult {
            pid,
            command_line: command_line.to_vec(),
        })
    }
}

/// Launched applications that may still be running, by pid.
#[derive(Debug, Default)]
pub struct Children {
    inner: HashMap<u32, Child>,
}

impl Children {
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn insert(&mut self, child: Child) {
        self.inner.insert(child.id(), child);
    }

    /// Reaps the applications that already exited.
    fn remove_finished_children(&mut self) {
        self.inner
            .retain(|_, child| child.try_wait().map_or(true, |status| status.is_none()));
    }
}
