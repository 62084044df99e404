//! The editor state file operations act on.

use std::path::PathBuf;

use nbe_format::FormatContext;
use nbe_project::Project;

use crate::paths::save_load_directory;
use crate::settings::Settings;

#[derive(Debug, Clone)]
pub struct EditorSession {
    pub project: Project,
    pub settings: Settings,
}

impl EditorSession {
    pub fn new(settings: Settings) -> Self {
        Self {
            project: Project::new("Untitled"),
            settings,
        }
    }

    /// Directory the file pickers open in.
    pub fn browse_directory(&self) -> PathBuf {
        save_load_directory(
            self.settings.get("save_directory"),
            self.settings.get_bool("installed"),
        )
    }

    pub fn format_context(&self) -> FormatContext {
        match self.settings.get("export_mod_name").trim() {
            "" => FormatContext::default(),
            name => FormatContext {
                mod_name: name.to_string(),
            },
        }
    }

    /// Makes `project` the live document with its first node selected.
    pub fn replace_project(&mut self, project: Project) {
        self.project = project;
        self.project.select_node(0);
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
