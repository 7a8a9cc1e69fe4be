pub mod command;
pub mod forms;
pub mod navigation;
pub mod state;
pub mod update;

pub use command::{Command, Secret};
pub use forms::{AgentForm, LoginForm, TextField, UploadForm};
pub use navigation::handle_key;
pub use state::{AppState, Banner, BannerKind, Loading};
pub use update::update;
