use crate::builders::reporter::Report;
use crate::builders::{hooks, objects};
use crate::core::config;
use crate::core::git::GitClient;
use crate::core::version::{self, HTTP_HELPER};

pub const SYSTEM_INFO: &str = "System Info";
pub const CONFIG_INFO: &str = "Safelisted Config Info";
pub const HOOKS: &str = "Configured Hooks";
pub const LOOSE_OBJECTS: &str = "Loose Object Counts";
pub const PACKED_OBJECTS: &str = "Packed Object Summary";
pub const OBJECT_INFO: &str = "Object Info Summary";
pub const ALTERNATES: &str = "Alternates";

const NO_OBJECT_STORE: &str = "not run from a git repository - no object store to inspect\n";

/// Runs every collector, in order, against one repository context.
pub struct ReportEngine<'a> {
    git: &'a dyn GitClient,
    shell: Option<String>,
    http_helper: Vec<String>,
}

impl<'a> ReportEngine<'a> {
    pub fn new(git: &'a dyn GitClient) -> Self {
        Self {
            git,
            shell: std::env::var("SHELL").ok(),
            http_helper: HTTP_HELPER.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn with_shell(mut self, shell: Option<String>) -> Self {
        self.shell = shell;
        self
    }

    pub fn with_http_helper(mut self, argv: &[&str]) -> Self {
        self.http_helper = argv.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn build(&self) -> Report {
        let mut report = Report::new();

        let helper: Vec<&str> = self.http_helper.iter().map(String::as_str).collect();
        report.add_section(SYSTEM_INFO, version::system_info(self.shell.as_deref(), &helper));
        report.add_section(CONFIG_INFO, self.config_info());
        report.add_section(HOOKS, hooks::configured_hooks(self.git));

        match self.git.object_dir() {
            Some(object_dir) => {
                tracing::debug!("inspecting object store {}", object_dir.display());
                report.add_section(LOOSE_OBJECTS, objects::loose_object_counts(&object_dir));
                report.add_section(PACKED_OBJECTS, objects::packed_object_summary(&object_dir));
                report.add_section(OBJECT_INFO, objects::object_info_summary(&object_dir));
                report.add_section(ALTERNATES, objects::alternates_summary(&object_dir));
            }
            None => {
                for title in [LOOSE_OBJECTS, PACKED_OBJECTS, OBJECT_INFO, ALTERNATES] {
                    report.add_section(title, NO_OBJECT_STORE);
                }
            }
        }

        report
    }

    fn config_info(&self) -> String {
        match self.git.config_entries() {
            Ok(entries) => config::safelisted_config_info(&entries),
            Err(err) => {
                tracing::warn!("config enumeration failed: {err:#}");
                format!("could not read configuration: {err:#}\n")
            }
        }
    }
}
