// main.rs - Game of Life window driven by the torus automaton
// The generation loop runs on a tokio runtime, the window on the main thread.

use anyhow::anyhow;
use eframe::egui;
use egui::Color32;
use log::{debug, info};
use std::time::Duration;
use structopt::StructOpt;
use tokio::sync::watch;

use conway::{
    Automaton, BoardSnapshot, Driver, DriverConfig, DriverHandle, GenerationFrame, GridSize,
    LatestBoard,
};

mod config;
mod ui;

fn main() -> conway::Result<()> {
    let opt = config::LifeOpt::from_args();
    env_logger::Builder::new().parse_filters(&opt.rust_log).init();
    debug!("start game_of_life with config: {:#?}", opt);

    let size = opt.grid_size()?;
    let runtime = tokio::runtime::Runtime::new()?;

    let (presenter, board) = LatestBoard::channel(size);
    let driver = Driver::new(Automaton::new(size), DriverConfig::default(), presenter);
    let control = driver.handle();
    runtime.spawn(driver.run());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([500.0, 560.0]),
        ..Default::default()
    };

    let window = GameWindow::new(size, board, control.clone());
    let result = eframe::run_native(
        "Game Of Life",
        options,
        Box::new(move |_cc| Box::new(window)),
    );

    info!("window closed, stopping the generation loop");
    control.shutdown();
    runtime.shutdown_timeout(Duration::from_millis(500));

    result.map_err(|e| anyhow!("window error: {}", e))?;
    Ok(())
}

/// What the window shows, copied from the latest board the driver published.
pub struct GameWindow {
    size: GridSize,
    board: Vec<bool>,                // Row-major, true = alive
    generation: u32,                 // Remaining generations label
    alive: usize,
    pub live_color: Color32,
    pub dead_color: Color32,
    latest: watch::Receiver<BoardSnapshot>,
    control: DriverHandle,
}

impl GameWindow {
    pub fn new(size: GridSize, latest: watch::Receiver<BoardSnapshot>, control: DriverHandle) -> Self {
        Self {
            size,
            board: vec![false; size.cells()],
            generation: 0,
            alive: 0,
            live_color: Color32::BLACK,
            dead_color: Color32::GRAY,
            latest,
            control,
        }
    }

    /// Pick up the newest board if the generation loop published one since
    /// the last frame.
    pub fn refresh(&mut self) {
        if !self.latest.has_changed().unwrap_or(false) {
            return;
        }
        let snapshot = self.latest.borrow_and_update().clone();
        self.apply(&snapshot);
    }

    pub fn apply(&mut self, snapshot: &BoardSnapshot) {
        self.generation = snapshot.generation;
        match &snapshot.frame {
            Some(frame) => self.apply_frame(frame),
            None => self.rebuild(snapshot.size),
        }
    }

    fn apply_frame(&mut self, frame: &GenerationFrame) {
        if frame.size != self.size {
            self.rebuild(frame.size);
        }
        for update in &frame.updates {
            self.board[self.size.index(update.coord)] = update.alive;
            self.alive = update.alive_so_far;
        }
    }

    fn rebuild(&mut self, size: GridSize) {
        debug!("rebuilding {} board", size);
        self.size = size;
        self.board = vec![false; size.cells()];
        self.alive = 0;
    }
}
