mod format;
mod spawn;
mod time_utils;

pub use format::{format_grouped, sign_prefix};
pub use spawn::{MaybeSend, Spawner};
pub use time_utils::{AppInstant, STANDARD_DATE_FORMAT, short_date_label};
