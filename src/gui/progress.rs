// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use crate::progress::{Progress, Stage};

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn stage(&mut self, stage: Stage) {
        let msg = match stage {
            Stage::Idle => "Reading report…",
            Stage::Parsed => "Parsed; locating failed test cases…",
            Stage::Extracted => "Grouping failures…",
            Stage::Aggregated => "Preparing table…",
            // terminal messages come from Outcome::message()
            Stage::Presented | Stage::NoFailures => return,
        };
        self.set_status(msg);
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
}
