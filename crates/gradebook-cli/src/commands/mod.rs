//! One module per `gradebook` subcommand.

pub mod add;
pub mod export;
pub mod ignore;
pub mod import;
pub mod init;
pub mod show;
pub mod validate;
