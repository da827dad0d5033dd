//! UI Components
//!
//! Reusable UI components for the desktop application.

mod install_button;
mod note_composer;
mod note_list;
mod note_row;
mod note_viewer;
mod offline_banner;

pub use install_button::InstallButton;
pub use note_composer::NoteComposer;
pub use note_list::NoteList;
pub use note_row::NoteRow;
pub use note_viewer::NoteViewer;
pub use offline_banner::OfflineBanner;
