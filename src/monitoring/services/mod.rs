mod cursor_token;
mod environment_flattener;
mod stream_key_deriver;

pub use cursor_token::CursorToken;
pub use environment_flattener::EnvironmentFlattener;
pub use stream_key_deriver::StreamKeyDeriver;
