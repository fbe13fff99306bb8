//! The question flow that fills in an [`InstallConfig`].
//!
//! Each gate is a yes/no question; declining keeps the current values for
//! everything behind it. Gates run once, in order, with no way back.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::validators;
use crate::domain::{AppError, InstallConfig, join_groups, split_groups};
use crate::ports::Prompter;

/// Above this many groups the wizard asks for free text instead of a menu.
pub const MENU_GROUP_LIMIT: u32 = 10;

pub struct Wizard<'p, P: Prompter> {
    prompter: &'p mut P,
    config: InstallConfig,
}

impl<'p, P: Prompter> Wizard<'p, P> {
    pub fn new(prompter: &'p mut P, config: InstallConfig) -> Self {
        Self { prompter, config }
    }

    /// Walk every gate and return the resulting configuration.
    pub fn run(mut self) -> Result<InstallConfig, AppError> {
        if self.wants_to_change_install_dir()? {
            self.change_install_dir()?;
        }
        self.config.derive_subdirectories();

        if self.gate("Change dgraph's subdirectories?")? {
            self.change_subdirectories()?;
        }
        if self.gate("Change dgraph's ports config?")? {
            self.change_ports()?;
        }
        if self.gate("Change dgraph's engine config?")? {
            self.change_engine()?;
        }
        if self.gate("Change dgraph's cluster config?")? {
            self.change_cluster()?;
        }
        Ok(self.config)
    }

    fn gate(&mut self, message: &str) -> Result<bool, AppError> {
        let entered = self.prompter.confirm(message, false)?;
        debug!(gate = message, entered, "gate answered");
        Ok(entered)
    }

    fn wants_to_change_install_dir(&mut self) -> Result<bool, AppError> {
        let message =
            format!("Change dgraph's base directory? [{}]", self.config.install_dir.display());
        self.gate(&message)
    }

    fn change_install_dir(&mut self) -> Result<(), AppError> {
        let current = self.config.install_dir.display().to_string();
        let answer = self.prompter.ask_string(
            "The directory to store data folders and config files",
            Some(&current),
            &validators::non_empty,
        )?;
        self.config.install_dir = expand_home(&answer);
        Ok(())
    }

    fn change_subdirectories(&mut self) -> Result<(), AppError> {
        let postings = self.config.postings_dir.clone();
        self.config.postings_dir =
            self.ask_path("The directory to store posting lists?", &postings)?;
        let wal = self.config.wal_dir.clone();
        self.config.wal_dir = self.ask_path("The directory to store write-ahead logs?", &wal)?;
        let export = self.config.export_dir.clone();
        self.config.export_dir = self.ask_path("The directory to store exports?", &export)?;
        Ok(())
    }

    fn change_ports(&mut self) -> Result<(), AppError> {
        self.config.port = self.ask_port("The port to serve http?", self.config.port)?;
        self.config.grpc_port = self.ask_port("The port to serve grpc?", self.config.grpc_port)?;
        let worker_port =
            self.ask_port("The port for worker communication?", self.config.worker_port())?;
        self.config.set_worker_port(worker_port);
        Ok(())
    }

    fn change_engine(&mut self) -> Result<(), AppError> {
        self.config.memory_mb = self.prompter.ask_float(
            "Estimated memory the process can take",
            self.config.memory_mb,
            &validators::minimum_memory,
        )?;
        self.config.debug_mode = self.prompter.confirm("Debug Mode?", self.config.debug_mode)?;
        self.config.gentle_commit = self.prompter.ask_float(
            "Fraction of dirty posting lists to commit every few seconds",
            self.config.gentle_commit,
            &validators::unit_fraction,
        )?;
        self.config.trace = self.prompter.ask_float(
            "The ratio of queries to trace",
            self.config.trace,
            &validators::unit_fraction,
        )?;
        Ok(())
    }

    fn change_cluster(&mut self) -> Result<(), AppError> {
        self.config.bind_all = true;
        self.change_raft_id()?;
        if !self.prompter.confirm("Is this the first server in the cluster?", false)? {
            self.change_peer()?;
        }
        self.change_total_groups()?;
        self.change_my_ip()
    }

    fn change_raft_id(&mut self) -> Result<(), AppError> {
        let raft_id = self.prompter.ask_integer(
            "RAFT ID that this server will use to join RAFT groups?",
            as_i64(self.config.raft_id),
            &validators::positive_integer,
        )?;
        self.config.raft_id = convert(raft_id, "raft id")?;
        Ok(())
    }

    fn change_peer(&mut self) -> Result<(), AppError> {
        let current = self.config.peer_ip().to_string();
        let peer_ip = self.prompter.ask_string(
            "The IP of a healthy peer in the cluster?",
            Some(&current),
            &validators::ipv4_address,
        )?;
        self.config.set_peer_ip(peer_ip);

        let peer_port =
            self.ask_port("The workerport of the same peer", self.config.peer_port())?;
        self.config.set_peer_port(peer_port);
        Ok(())
    }

    fn change_total_groups(&mut self) -> Result<(), AppError> {
        let total = self.prompter.ask_integer(
            "The total number of groups?",
            i64::from(self.config.total_groups),
            &validators::minimum_group_count,
        )?;
        self.config.total_groups = convert(total, "total groups")?;
        self.change_selected_groups()
    }

    fn change_selected_groups(&mut self) -> Result<(), AppError> {
        if self.config.total_groups > MENU_GROUP_LIMIT {
            self.change_groups_text()
        } else {
            self.change_groups_menu()
        }
    }

    fn change_groups_text(&mut self) -> Result<(), AppError> {
        let in_range = validators::groups_in_range(self.config.total_groups);
        let current = self.config.groups.clone();
        let groups = self.prompter.ask_string(
            "Enter the groups for this server (comma separated ints and int ranges accepted)",
            Some(&current),
            &in_range,
        )?;
        self.config.selected_groups = split_groups(&groups);
        self.config.groups = groups;
        Ok(())
    }

    fn change_groups_menu(&mut self) -> Result<(), AppError> {
        let selected = self.prompter.multi_select_range(
            "Select the groups (must choose at least one option)",
            0,
            self.config.total_groups,
        )?;
        self.config.groups = join_groups(&selected);
        self.config.selected_groups = selected;
        Ok(())
    }

    fn change_my_ip(&mut self) -> Result<(), AppError> {
        let current = self.config.my_ip().to_string();
        let my_ip = self.prompter.ask_string(
            "The IP of this server?",
            Some(&current),
            &validators::ipv4_address,
        )?;
        self.config.set_my_ip(my_ip);
        Ok(())
    }

    fn ask_path(&mut self, message: &str, current: &Path) -> Result<PathBuf, AppError> {
        let current = current.display().to_string();
        let answer =
            self.prompter.ask_string(message, Some(&current), &validators::always_valid)?;
        Ok(PathBuf::from(answer))
    }

    fn ask_port(&mut self, message: &str, current: u16) -> Result<u16, AppError> {
        let port =
            self.prompter.ask_integer(message, i64::from(current), &validators::port_number)?;
        convert(port, message)
    }
}

/// Expand a leading `~/` against `$HOME`.
fn expand_home(answer: &str) -> PathBuf {
    match (answer.strip_prefix("~/"), std::env::var_os("HOME")) {
        (Some(rest), Some(home)) => PathBuf::from(home).join(rest),
        _ => PathBuf::from(answer),
    }
}

fn as_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Narrow a validated integer answer to its field type.
fn convert<T: TryFrom<i64>>(value: i64, field: &str) -> Result<T, AppError> {
    T::try_from(value).map_err(|_| AppError::Prompt(format!("{} out of range: {}", field, value)))
}
