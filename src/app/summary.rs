//! Confirmation table shown before anything is installed.

use std::path::Path;

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::domain::InstallConfig;

#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct SummaryRow {
    #[tabled(rename = "Key")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
    #[tabled(rename = "Default")]
    pub default: String,
    #[tabled(rename = "Description")]
    pub description: String,
    #[tabled(rename = "Destination")]
    pub destination: String,
}

fn row(key: &str, value: String, default: String, description: &str, dest: &str) -> SummaryRow {
    SummaryRow {
        key: key.to_string(),
        value,
        default,
        description: description.to_string(),
        destination: dest.to_string(),
    }
}

fn float(value: f64) -> String {
    format!("{:.2}", value)
}

fn path(value: &Path) -> String {
    value.display().to_string()
}

/// One row per configurable field, compared against `defaults`.
pub fn summary_rows(config: &InstallConfig, defaults: &InstallConfig) -> Vec<SummaryRow> {
    let (c, d) = (config, defaults);
    let yaml = path(&c.config_path());
    let (p, w, export) = (path(&c.postings_dir), path(&c.wal_dir), path(&c.export_dir));
    vec![
        row("install_dir", path(&c.install_dir), path(&d.install_dir), "Base directory", &yaml),
        row("p", p.clone(), path(&d.postings_dir), "Postings Files Directory", &p),
        row("w", w.clone(), path(&d.wal_dir), "Write-Ahead Logs Directory", &w),
        row("export", export.clone(), path(&d.export_dir), "Exports Directory", &export),
        row("port", c.port.to_string(), d.port.to_string(), "HTTP port", &yaml),
        row("grpc_port", c.grpc_port.to_string(), d.grpc_port.to_string(), "gRPC port", &yaml),
        row(
            "workerport",
            c.worker_port().to_string(),
            d.worker_port().to_string(),
            "Internal worker port",
            &yaml,
        ),
        row("idx", c.raft_id.to_string(), d.raft_id.to_string(), "Raft ID for groups", &yaml),
        row(
            "total groups",
            c.total_groups.to_string(),
            d.total_groups.to_string(),
            "The total number of groups",
            "-",
        ),
        row("groups", c.groups.clone(), d.groups.clone(), "Groups for this server", &yaml),
        row("memory_mb", float(c.memory_mb), float(d.memory_mb), "Estimated Memory in MB", &yaml),
        row(
            "gentlecommit",
            float(c.gentle_commit),
            float(d.gentle_commit),
            "Dirty posting commit freq",
            &yaml,
        ),
        row("trace", float(c.trace), float(d.trace), "Ratio of queries to trace", &yaml),
        row("debugmode", c.debug_mode.to_string(), d.debug_mode.to_string(), "Debug mode", &yaml),
        row(
            "bindall",
            c.bind_all.to_string(),
            d.bind_all.to_string(),
            c.server_host_description(),
            &c.bindall_flag(),
        ),
        row("peer", c.peer().to_string(), d.peer().to_string(), "Healthy peer address", "--peer"),
        row("my", c.my().to_string(), d.my().to_string(), "This server's address", "--my"),
    ]
}

pub fn render_summary(config: &InstallConfig, defaults: &InstallConfig) -> String {
    Table::new(summary_rows(config, defaults)).with(Style::psql()).to_string()
}
