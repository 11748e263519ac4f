pub mod dependencies;
pub mod events;
pub mod filename;
pub mod process;
pub mod ytdlp;
