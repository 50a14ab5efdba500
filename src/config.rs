use log::warn;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use crate::simulator::Scheduler;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub workload: PathBuf,
    pub quantum: u64,
    pub schedulers: Vec<Scheduler>,
    pub output: OutputFormat,
    pub timeline: bool,
}

impl Config {
    /// Reads the config file, if no file is found or it can't be read or
    /// parsed the default config is used
    pub fn load(path: &Path) -> Self {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(error) if error.kind() == ErrorKind::NotFound => return Config::default(),
            Err(error) => {
                warn!("cannot read {}: {}", path.display(), error);
                return Config::default();
            }
        };

        match serde_json::from_reader(BufReader::new(file)) {
            Ok(config) => config,
            Err(error) => {
                warn!("ignoring {}: {}", path.display(), error);
                Config::default()
            }
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workload: PathBuf::from("workload.txt"),
            quantum: 4,
            schedulers: vec![Scheduler::FCFS, Scheduler::SJF, Scheduler::RR],
            output: OutputFormat::Table,
            timeline: false,
        }
    }
}
