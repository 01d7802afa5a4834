//! Scripted command runners standing in for the real VTEX CLI.

use std::sync::Mutex;

use async_trait::async_trait;

use vtexctl::vtex::{CommandRunner, VtexError};

/// Runner that replays one canned response and records every invocation.
pub struct ScriptedRunner {
    pub calls: Mutex<Vec<Vec<String>>>,
    response: Result<String, String>,
}

impl ScriptedRunner {
    pub fn ok(response: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            response: Ok(response.to_string()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            response: Err(message.to_string()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_call(&self) -> Option<Vec<String>> {
        self.calls.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl CommandRunner for ScriptedRunner {
    async fn run(&self, args: &[&str]) -> Result<String, VtexError> {
        self.calls
            .lock()
            .unwrap()
            .push(args.iter().map(|s| s.to_string()).collect());
        self.response.clone().map_err(VtexError::CommandFailed)
    }
}
