//! Scripted stand-in for external tools
//!
//! Replays queued responses instead of spawning idf.py or esptool, and records
//! every command it was asked to run.

#![allow(dead_code)]

use esp_merge::utils::{CommandOutput, CommandRunner, CommandSpec};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::PathBuf;

/// One scripted tool behaviour
#[derive(Debug, Clone)]
pub enum ToolResponse {
    /// Program is not installed
    NotFound,
    /// Program exits with `code` and the given output
    Exit {
        code: i32,
        stdout: String,
        stderr: String,
    },
    /// Program succeeds and writes `size` bytes to `path`
    Writes { path: PathBuf, size: usize },
    /// Program succeeds without writing anything
    SucceedsSilently,
}

impl ToolResponse {
    pub fn fails_with(code: i32, stderr: &str) -> Self {
        ToolResponse::Exit {
            code,
            stdout: String::new(),
            stderr: stderr.to_string(),
        }
    }
}

#[derive(Default)]
pub struct ScriptedRunner {
    responses: RefCell<VecDeque<ToolResponse>>,
    calls: RefCell<Vec<CommandSpec>>,
}

impl ScriptedRunner {
    pub fn new(responses: impl IntoIterator<Item = ToolResponse>) -> Self {
        Self {
            responses: RefCell::new(responses.into_iter().collect()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<CommandSpec> {
        self.calls.borrow().clone()
    }

    pub fn programs(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|c| c.program.clone()).collect()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, spec: &CommandSpec) -> io::Result<CommandOutput> {
        self.calls.borrow_mut().push(spec.clone());

        let response = self
            .responses
            .borrow_mut()
            .pop_front()
            .unwrap_or(ToolResponse::NotFound);

        match response {
            ToolResponse::NotFound => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", spec.program),
            )),
            ToolResponse::Exit {
                code,
                stdout,
                stderr,
            } => Ok(CommandOutput {
                success: code == 0,
                code: Some(code),
                stdout,
                stderr,
            }),
            ToolResponse::Writes { path, size } => {
                fs::write(&path, vec![0u8; size])?;
                Ok(CommandOutput {
                    success: true,
                    code: Some(0),
                    ..Default::default()
                })
            }
            ToolResponse::SucceedsSilently => Ok(CommandOutput {
                success: true,
                code: Some(0),
                ..Default::default()
            }),
        }
    }
}
