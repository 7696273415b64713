mod root;
mod state;

pub(crate) use state::{LoginForm, Page, Preferences};

pub use root::App;
