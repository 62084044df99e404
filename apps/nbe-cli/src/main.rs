mod console;

use clap::{Parser, Subcommand};
use console::{ConsoleHost, ScriptedPicker};
use nbe_app::{
    AppError, AppResult, DialogOutcome, EditorSession, FileDialog, WindowConfig, config_path,
    detect_install_mode, load_settings,
};
use nbe_format::{FormatType, Registry};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nbe-cli")]
#[command(about = "NodeBoxEditor CLI - open, convert and export node box projects", long_about = None)]
struct Cli {
    /// Settings file to use instead of the detected one
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a project file
    Info {
        /// Path to the project file
        project_path: PathBuf,
    },
    /// Read a project and write it in the format of the output extension
    Convert {
        input: PathBuf,
        output: PathBuf,
    },
    /// Export a project with a specific writer
    Export {
        project_path: PathBuf,
        /// Output file; the format's extension is appended when missing
        output: PathBuf,
        /// Writer to use (nbe, json, lua, cpp); defaults to the output extension
        #[arg(short, long)]
        format: Option<FormatType>,
    },
    /// Print generated code for a project
    Show {
        project_path: PathBuf,
        #[arg(short, long, default_value = "lua")]
        format: FormatType,
    },
    /// Merge the nodes of another project and save the result
    Import {
        project_path: PathBuf,
        /// Project whose nodes are merged in
        other: PathBuf,
        output: PathBuf,
    },
    /// Write the project's decoded images into a directory
    Textures {
        project_path: PathBuf,
        directory: PathBuf,
    },
    /// Show the resolved settings and window configuration
    Config {
        /// Write the resolved settings back to the settings file
        #[arg(long)]
        save: bool,
    },
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let cwd = std::env::current_dir()?;
    let layout = detect_install_mode(&cwd);
    let settings_path = cli.config.unwrap_or_else(|| match &layout.working_dir {
        Some(dir) => dir.join(config_path(layout.installed)),
        None => config_path(layout.installed),
    });
    let settings = load_settings(layout.installed, &settings_path)?;
    let mut session = EditorSession::new(settings);

    match cli.command {
        Commands::Info { project_path } => cmd_info(&mut session, &project_path),
        Commands::Convert { input, output } => cmd_convert(&mut session, &input, &output),
        Commands::Export {
            project_path,
            output,
            format,
        } => cmd_export(&mut session, &project_path, &output, format),
        Commands::Show {
            project_path,
            format,
        } => cmd_show(&mut session, &project_path, format),
        Commands::Import {
            project_path,
            other,
            output,
        } => cmd_import(&mut session, &project_path, &other, &output),
        Commands::Textures {
            project_path,
            directory,
        } => cmd_textures(&mut session, &project_path, &directory),
        Commands::Config { save } => cmd_config(&session, &settings_path, save),
    }
}

/// Runs one dialog operation with the picker answering `answers` in order.
fn with_dialog<F>(session: &mut EditorSession, answers: Vec<PathBuf>, op: F) -> AppResult<()>
where
    F: FnOnce(&mut FileDialog<'_>) -> DialogOutcome,
{
    let registry = Registry::new(session.format_context());
    let mut picker = ScriptedPicker::new(answers);
    let mut host = ConsoleHost;
    let mut dialog = FileDialog::new(session, &registry, &mut picker, &mut host);

    match op(&mut dialog) {
        DialogOutcome::Completed => Ok(()),
        DialogOutcome::Cancelled => Err(AppError::Cancelled),
        DialogOutcome::Failed(failure) => Err(failure.into()),
    }
}

fn open(session: &mut EditorSession, project_path: &Path) -> AppResult<()> {
    with_dialog(session, vec![project_path.to_path_buf()], |dialog| {
        dialog.open_project()
    })
}

fn output_format(output: &Path, explicit: Option<FormatType>) -> AppResult<FormatType> {
    explicit
        .or_else(|| {
            output
                .extension()
                .and_then(|ext| ext.to_str())
                .and_then(FormatType::from_extension)
        })
        .ok_or_else(|| AppError::UnknownFormat(output.to_path_buf()))
}

fn cmd_info(session: &mut EditorSession, project_path: &Path) -> AppResult<()> {
    open(session, project_path)?;
    let project = &session.project;

    println!("Project: {}", project.name);
    println!("Nodes:");
    for (node, mesh) in project.nodes.iter().zip(project.meshes()) {
        print!(
            "  {} at ({}, {}, {}) - {} boxes",
            node.name,
            node.position.x,
            node.position.y,
            node.position.z,
            node.boxes.len()
        );
        match mesh.bounds {
            Some((lo, hi)) => println!(
                ", bounds ({}, {}, {}) to ({}, {}, {})",
                lo.x, lo.y, lo.z, hi.x, hi.y, hi.z
            ),
            None => println!(),
        }
    }

    if !project.media.is_empty() {
        println!("Images:");
        for image in project.media.images() {
            match image.get() {
                Some(bitmap) => {
                    println!("  {} ({}x{})", image.name, bitmap.width(), bitmap.height())
                }
                None => println!("  {} (no data)", image.name),
            }
        }
    }
    Ok(())
}

fn cmd_convert(session: &mut EditorSession, input: &Path, output: &Path) -> AppResult<()> {
    let ty = output_format(output, None)?;
    open(session, input)?;
    with_dialog(session, vec![output.to_path_buf()], |dialog| dialog.export(ty))?;
    println!("✓ Converted {} to {}", input.display(), output.display());
    Ok(())
}

fn cmd_export(
    session: &mut EditorSession,
    project_path: &Path,
    output: &Path,
    format: Option<FormatType>,
) -> AppResult<()> {
    let ty = output_format(output, format)?;
    open(session, project_path)?;
    with_dialog(session, vec![output.to_path_buf()], |dialog| dialog.export(ty))?;
    println!("✓ Exported {} as {}", project_path.display(), ty);
    Ok(())
}

fn cmd_show(session: &mut EditorSession, project_path: &Path, format: FormatType) -> AppResult<()> {
    open(session, project_path)?;
    with_dialog(session, Vec::new(), |dialog| dialog.show_code(format))
}

fn cmd_import(
    session: &mut EditorSession,
    project_path: &Path,
    other: &Path,
    output: &Path,
) -> AppResult<()> {
    let ty = output_format(output, Some(FormatType::Nbe).filter(|_| output.extension().is_none()))?;
    open(session, project_path)?;
    let before = session.project.nodes.len();
    with_dialog(session, vec![other.to_path_buf()], |dialog| {
        dialog.import_project()
    })?;
    with_dialog(session, vec![output.to_path_buf()], |dialog| dialog.export(ty))?;
    println!(
        "✓ Imported {} nodes from {}",
        session.project.nodes.len() - before,
        other.display()
    );
    Ok(())
}

fn cmd_textures(session: &mut EditorSession, project_path: &Path, directory: &Path) -> AppResult<()> {
    open(session, project_path)?;
    with_dialog(session, vec![directory.to_path_buf()], |dialog| {
        dialog.export_textures()
    })?;
    println!("✓ Exported images to {}", directory.display());
    Ok(())
}

fn cmd_config(session: &EditorSession, settings_path: &Path, save: bool) -> AppResult<()> {
    println!("Settings file: {}", settings_path.display());
    println!("Browse directory: {}", session.browse_directory().display());
    for (key, value) in session.settings.iter() {
        println!("  {} = {}", key, value);
    }

    let window = WindowConfig::from_settings(&session.settings);
    println!(
        "Window: {:?} {}x{}{}{}",
        window.driver,
        window.width,
        window.height,
        if window.fullscreen { ", fullscreen" } else { "" },
        if window.vsync { ", vsync" } else { "" }
    );

    if save {
        session.settings.save(settings_path)?;
        println!("✓ Saved settings to {}", settings_path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nbe_format::{FileFormat, NbeFormat};
    use nbe_project::{Node, NodeBox, Project};

    fn saved_project(dir: &Path) -> PathBuf {
        let mut project = Project::new("Cli");
        project.add_node(Node::new("crate", nalgebra::Vector3::zeros()).with_box(NodeBox::full("body")));
        let path = dir.join("cli.nbe");
        NbeFormat.write(&project, &path).unwrap();
        path
    }

    #[test]
    fn output_format_prefers_explicit() {
        assert_eq!(
            output_format(Path::new("x.lua"), Some(FormatType::Cpp)).unwrap(),
            FormatType::Cpp
        );
        assert_eq!(output_format(Path::new("x.LUA"), None).unwrap(), FormatType::Lua);
        assert!(output_format(Path::new("x.obj"), None).is_err());
        assert!(output_format(Path::new("x"), None).is_err());
    }

    #[test]
    fn convert_to_json_and_back() {
        let dir = tempfile::tempdir().unwrap();
        let input = saved_project(dir.path());
        let json = dir.path().join("cli.json");

        let mut session = EditorSession::default();
        cmd_convert(&mut session, &input, &json).unwrap();

        let mut reloaded = EditorSession::default();
        open(&mut reloaded, &json).unwrap();
        assert_eq!(reloaded.project, session.project);
    }

    #[test]
    fn import_without_extension_saves_native() {
        let dir = tempfile::tempdir().unwrap();
        let input = saved_project(dir.path());
        let output = dir.path().join("merged");

        let mut session = EditorSession::default();
        cmd_import(&mut session, &input, &input, &output).unwrap();

        let merged = NbeFormat.load(&dir.path().join("merged.nbe")).unwrap();
        assert_eq!(merged.nodes.len(), 2);
        assert_eq!(merged.nodes[1].name, "crate_2");
    }

    #[test]
    fn open_failure_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = EditorSession::default();
        let err = open(&mut session, &dir.path().join("absent.nbe")).unwrap_err();
        assert!(matches!(err, AppError::Format(_)));

        let err = open(&mut session, &dir.path().join("absent.obj")).unwrap_err();
        assert!(matches!(err, AppError::UnknownFormat(_)));
    }
}
