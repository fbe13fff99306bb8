//! The installer's configuration record.

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::AppError;

pub const DEFAULT_INSTALL_DIR: &str = "/var/lib/dgraph";
pub const CONFIG_FILENAME: &str = "config.yaml";

const POSTINGS_SUBDIR: &str = "p";
const WAL_SUBDIR: &str = "w";
const EXPORTS_SUBDIR: &str = "exports";

/// Formats `ip:port`, or an empty string when no IP is set.
pub fn compose_address(ip: &str, port: u16) -> String {
    if ip.is_empty() { String::new() } else { format!("{}:{}", ip, port) }
}

/// Every decision collected by the wizard plus the fields derived from them.
///
/// Peer and own addresses are cached strings; the setters for their IP and
/// port parts recompute them immediately.
#[derive(Debug, Clone, PartialEq)]
pub struct InstallConfig {
    pub install_dir: PathBuf,
    pub yaml_filename: String,
    pub total_groups: u32,
    pub selected_groups: Vec<u32>,

    /// Directory to store posting lists.
    pub postings_dir: PathBuf,
    /// Directory to store raft write-ahead logs.
    pub wal_dir: PathBuf,
    /// Directory to store exports.
    pub export_dir: PathBuf,
    /// Port to run the HTTP service on.
    pub port: u16,
    /// Port to run the gRPC service on.
    pub grpc_port: u16,
    /// RAFT ID this server uses to join RAFT groups.
    pub raft_id: u64,
    /// RAFT groups handled by this server.
    pub groups: String,
    /// Fraction of dirty posting lists to commit every few seconds.
    pub gentle_commit: f64,
    /// Ratio of queries to trace.
    pub trace: f64,
    pub debug_mode: bool,
    /// Estimated memory the process can take, in MB.
    pub memory_mb: f64,

    /// Listen on every interface instead of loopback only.
    pub bind_all: bool,

    worker_port: u16,
    peer_ip: String,
    peer_port: u16,
    my_ip: String,
    peer: String,
    my: String,
}

impl Default for InstallConfig {
    fn default() -> Self {
        let mut config = Self {
            install_dir: PathBuf::from(DEFAULT_INSTALL_DIR),
            yaml_filename: CONFIG_FILENAME.to_string(),
            total_groups: 2,
            selected_groups: Vec::new(),
            postings_dir: PathBuf::new(),
            wal_dir: PathBuf::new(),
            export_dir: PathBuf::new(),
            port: 8080,
            grpc_port: 9080,
            raft_id: 1,
            groups: "0,1".to_string(),
            gentle_commit: 0.1,
            trace: 0.33,
            debug_mode: false,
            memory_mb: 1024.00,
            bind_all: false,
            worker_port: 12345,
            peer_ip: String::new(),
            peer_port: 12345,
            my_ip: String::new(),
            peer: String::new(),
            my: String::new(),
        };
        config.derive_subdirectories();
        config
    }
}

impl InstallConfig {
    /// Defaults rooted at a different install directory.
    pub fn with_install_dir(install_dir: impl Into<PathBuf>) -> Self {
        let mut config = Self { install_dir: install_dir.into(), ..Self::default() };
        config.derive_subdirectories();
        config
    }

    /// Resets the postings, WAL, and export directories under `install_dir`.
    pub fn derive_subdirectories(&mut self) {
        self.postings_dir = self.install_dir.join(POSTINGS_SUBDIR);
        self.wal_dir = self.install_dir.join(WAL_SUBDIR);
        self.export_dir = self.install_dir.join(EXPORTS_SUBDIR);
    }

    pub fn config_path(&self) -> PathBuf {
        self.install_dir.join(&self.yaml_filename)
    }

    pub fn data_dirs(&self) -> [&Path; 3] {
        [&self.postings_dir, &self.wal_dir, &self.export_dir]
    }

    pub fn worker_port(&self) -> u16 {
        self.worker_port
    }

    pub fn peer_ip(&self) -> &str {
        &self.peer_ip
    }

    pub fn peer_port(&self) -> u16 {
        self.peer_port
    }

    pub fn my_ip(&self) -> &str {
        &self.my_ip
    }

    /// `ip:port` of a healthy peer, empty when this is the first server.
    pub fn peer(&self) -> &str {
        &self.peer
    }

    /// `ip:port` other servers use to reach this one.
    pub fn my(&self) -> &str {
        &self.my
    }

    pub fn set_worker_port(&mut self, port: u16) {
        self.worker_port = port;
        self.update_my();
    }

    pub fn set_peer_ip(&mut self, ip: impl Into<String>) {
        self.peer_ip = ip.into();
        self.update_peer();
    }

    pub fn set_peer_port(&mut self, port: u16) {
        self.peer_port = port;
        self.update_peer();
    }

    pub fn set_my_ip(&mut self, ip: impl Into<String>) {
        self.my_ip = ip.into();
        self.update_my();
    }

    pub fn update_peer(&mut self) {
        self.peer = compose_address(&self.peer_ip, self.peer_port);
    }

    pub fn update_my(&mut self) {
        self.my = compose_address(&self.my_ip, self.worker_port);
    }

    pub fn server_host_description(&self) -> &'static str {
        if self.bind_all { "Server host is 0.0.0.0" } else { "Server host is 127.0.0.1" }
    }

    pub fn bindall_flag(&self) -> String {
        format!("--bindall={}", self.bind_all)
    }

    pub fn config_flag(&self) -> String {
        format!("--config={}", self.config_path().display())
    }

    /// Command line that starts the server with this configuration.
    pub fn launch_command(&self, binary: &Path) -> String {
        let mut command =
            format!("{} {} {}", binary.display(), self.bindall_flag(), self.config_flag());
        if !self.peer.is_empty() {
            command.push_str(&format!(" --peer={}", self.peer));
        }
        if !self.my.is_empty() {
            command.push_str(&format!(" --my={}", self.my));
        }
        command
    }

    /// Renders the persisted fields as the server's `config.yaml`.
    pub fn to_yaml(&self) -> Result<String, AppError> {
        Ok(serde_yaml::to_string(&ConfigFile::from(self))?)
    }
}

/// Field layout of the generated `config.yaml`.
#[derive(Debug, Serialize)]
struct ConfigFile<'a> {
    p: &'a Path,
    w: &'a Path,
    export: &'a Path,
    port: u16,
    grpc_port: u16,
    workerport: u16,
    idx: u64,
    groups: &'a str,
    gentlecommit: f64,
    trace: f64,
    debugmode: bool,
    memory_mb: f64,
}

impl<'a> From<&'a InstallConfig> for ConfigFile<'a> {
    fn from(config: &'a InstallConfig) -> Self {
        Self {
            p: &config.postings_dir,
            w: &config.wal_dir,
            export: &config.export_dir,
            port: config.port,
            grpc_port: config.grpc_port,
            workerport: config.worker_port,
            idx: config.raft_id,
            groups: &config.groups,
            gentlecommit: config.gentle_commit,
            trace: config.trace,
            debugmode: config.debug_mode,
            memory_mb: config.memory_mb,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_address_requires_ip() {
        assert_eq!(compose_address("", 9999), "");
        assert_eq!(compose_address("10.0.0.1", 9999), "10.0.0.1:9999");
    }

    #[test]
    fn defaults_derive_subdirectories() {
        let config = InstallConfig::default();
        assert_eq!(config.postings_dir, PathBuf::from("/var/lib/dgraph/p"));
        assert_eq!(config.wal_dir, PathBuf::from("/var/lib/dgraph/w"));
        assert_eq!(config.export_dir, PathBuf::from("/var/lib/dgraph/exports"));
        assert_eq!(config.config_path(), PathBuf::from("/var/lib/dgraph/config.yaml"));
    }

    #[test]
    fn peer_tracks_ip_and_port() {
        let mut config = InstallConfig::default();
        assert_eq!(config.peer(), "");

        config.set_peer_port(7000);
        assert_eq!(config.peer(), "");

        config.set_peer_ip("10.0.0.1");
        assert_eq!(config.peer(), "10.0.0.1:7000");

        config.set_peer_port(9999);
        assert_eq!(config.peer(), "10.0.0.1:9999");

        config.set_peer_ip("");
        assert_eq!(config.peer(), "");
    }

    #[test]
    fn my_tracks_ip_and_worker_port() {
        let mut config = InstallConfig::default();
        config.set_my_ip("192.168.1.4");
        assert_eq!(config.my(), "192.168.1.4:12345");

        config.set_worker_port(7080);
        assert_eq!(config.my(), "192.168.1.4:7080");
    }

    #[test]
    fn default_yaml_contains_server_defaults() {
        let yaml = InstallConfig::default().to_yaml().unwrap();
        assert!(yaml.contains("port: 8080"));
        assert!(yaml.contains("grpc_port: 9080"));
        assert!(yaml.contains("workerport: 12345"));
        assert!(yaml.lines().any(|line| line == "memory_mb: 1024.0"));
        assert!(yaml.lines().any(|line| line == "gentlecommit: 0.1"));

        let parsed: serde_yaml::Mapping = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.get("groups").and_then(|v| v.as_str()), Some("0,1"));
        assert_eq!(parsed.get("p").and_then(|v| v.as_str()), Some("/var/lib/dgraph/p"));
        assert_eq!(parsed.get("debugmode").and_then(|v| v.as_bool()), Some(false));
        assert_eq!(parsed.get("memory_mb").and_then(|v| v.as_f64()), Some(1024.0));
        assert_eq!(parsed.len(), 12);
    }

    #[test]
    fn yaml_keys_follow_declared_order() {
        let yaml = InstallConfig::default().to_yaml().unwrap();
        let keys: Vec<&str> =
            yaml.lines().filter_map(|line| line.split(':').next()).collect();
        assert_eq!(
            keys,
            vec![
                "p",
                "w",
                "export",
                "port",
                "grpc_port",
                "workerport",
                "idx",
                "groups",
                "gentlecommit",
                "trace",
                "debugmode",
                "memory_mb"
            ]
        );
    }

    #[test]
    fn launch_command_defaults() {
        let config = InstallConfig::default();
        assert_eq!(
            config.launch_command(Path::new("/usr/local/bin/dgraph")),
            "/usr/local/bin/dgraph --bindall=false --config=/var/lib/dgraph/config.yaml"
        );
    }

    #[test]
    fn launch_command_includes_cluster_addresses() {
        let mut config = InstallConfig::with_install_dir("/opt/dgraph");
        config.bind_all = true;
        config.set_peer_ip("10.0.0.1");
        config.set_my_ip("10.0.0.2");
        assert_eq!(
            config.launch_command(Path::new("/usr/local/bin/dgraph")),
            "/usr/local/bin/dgraph --bindall=true --config=/opt/dgraph/config.yaml \
             --peer=10.0.0.1:12345 --my=10.0.0.2:12345"
        );
        assert_eq!(config.server_host_description(), "Server host is 0.0.0.0");
    }
}
