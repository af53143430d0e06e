/// A freshly spawned application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchResult {
    pub pid: u32,
    pub command_line: Vec<String>,
}
