use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "patch_robot")]
#[command(
    about = "Insert a noindex/nofollow robots meta tag after <head> in HTML files",
    long_about = None
)]
pub struct Cli {
    /// HTML files to patch in place
    pub files: Vec<PathBuf>,
}
