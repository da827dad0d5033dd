//! Desktop install flow
//!
//! The "install" here is a user launcher entry, so the app shows up in the
//! system menu like any other installed program. The capability to run the
//! flow is granted at most once per run and only while no entry exists.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use jot_core::host::{InstallChoice, InstallPrompt};
use jot_core::Result;

const LAUNCHER_FILE_NAME: &str = "jot.desktop";

/// Returns the install capability when the app is not yet installed.
///
/// The prompt itself asks the user and writes the launcher entry on
/// acceptance; either way the token is spent.
pub fn installability() -> Option<InstallPrompt> {
    let target = launcher_path()?;
    if target.exists() {
        tracing::debug!("Launcher entry already present at {}", target.display());
        return None;
    }
    Some(InstallPrompt::new(move || run_install_flow(&target)))
}

fn run_install_flow(target: &Path) -> Result<InstallChoice> {
    let confirmed = rfd::MessageDialog::new()
        .set_title("Install Jot")
        .set_description("Add Jot to your application launcher?")
        .set_buttons(rfd::MessageButtons::YesNo)
        .show();

    if confirmed != rfd::MessageDialogResult::Yes {
        tracing::info!("Install dismissed");
        return Ok(InstallChoice::Dismissed);
    }

    write_launcher_entry(target)?;
    tracing::info!("Launcher entry written to {}", target.display());
    Ok(InstallChoice::Accepted)
}

fn write_launcher_entry(target: &Path) -> Result<()> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(target, launcher_entry())?;
    Ok(())
}

fn launcher_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("applications").join(LAUNCHER_FILE_NAME))
}

fn launcher_entry() -> String {
    let exec = env::current_exe().map_or_else(
        |_| "jot-desktop".to_string(),
        |path| path.display().to_string(),
    );
    format!(
        "[Desktop Entry]\n\
         Type=Application\n\
         Name=Jot\n\
         Comment=Offline-capable notes\n\
         Exec={exec}\n\
         Terminal=false\n\
         Categories=Utility;\n"
    )
}
