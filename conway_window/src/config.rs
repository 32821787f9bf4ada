use std::io::BufRead;

use anyhow::anyhow;
use conway::{GridSize, Result};
use structopt::StructOpt;

#[derive(Debug, Clone, StructOpt)]
#[structopt(name = "game_of_life", about = "Conway's Game of Life on a torus")]
pub struct LifeOpt {
    #[structopt(long, env, default_value = "conway=info,conway_window=info")]
    pub rust_log: String,

    /// Side length of the square grid. Read from standard input when absent.
    #[structopt(long, env = "LIFE_SIZE")]
    pub size: Option<i64>,
}

impl LifeOpt {
    pub fn grid_size(&self) -> Result<GridSize> {
        match self.size {
            Some(size) => GridSize::new(size),
            None => read_size(std::io::stdin().lock()),
        }
    }
}

/// First whitespace-separated token of `input`, as a grid size.
pub fn read_size(mut input: impl BufRead) -> Result<GridSize> {
    let mut buf = String::new();
    while buf.trim().is_empty() {
        if input.read_line(&mut buf)? == 0 {
            break;
        }
    }

    let token = buf
        .split_whitespace()
        .next()
        .ok_or(anyhow!("grid size is missing from standard input"))?;
    GridSize::new(token.parse()?)
}
