// presenter.rs - What the generation loop tells the display

use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::watch;

use crate::automaton::GenerationFrame;
use crate::grid::GridSize;

/// Receiver of everything the display has to draw.
///
/// Called from the generation loop's thread with the driver's state locked,
/// so implementations hand the data over and never call back into the driver.
pub trait Presenter: Send + Sync {
    /// Remaining generations, shown as "Generation #N".
    fn generation_changed(&self, remaining: u32);

    /// Statuses of the whole grid after a commit.
    fn cells_committed(&self, frame: GenerationFrame);

    /// The grid was (re)allocated; throw away the old board.
    fn grid_rebuilt(&self, size: GridSize);
}

/// What a display needs to draw right now. Holds at most one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub size: GridSize,
    pub generation: u32,
    /// Latest committed frame; `None` until the first commit after a rebuild.
    pub frame: Option<GenerationFrame>,
}

impl BoardSnapshot {
    pub fn empty(size: GridSize) -> Self {
        Self { size, generation: 0, frame: None }
    }
}

/// Keeps only the newest board: a slow or hidden display skips the
/// generations it missed instead of queueing them.
pub struct LatestBoard {
    board: watch::Sender<BoardSnapshot>,
}

impl LatestBoard {
    pub fn channel(size: GridSize) -> (Self, watch::Receiver<BoardSnapshot>) {
        let (board, rx) = watch::channel(BoardSnapshot::empty(size));
        (Self { board }, rx)
    }
}

impl Presenter for LatestBoard {
    fn generation_changed(&self, remaining: u32) {
        self.board.send_modify(|snapshot| snapshot.generation = remaining);
    }

    fn cells_committed(&self, frame: GenerationFrame) {
        self.board.send_modify(|snapshot| {
            snapshot.size = frame.size;
            snapshot.frame = Some(frame);
        });
    }

    fn grid_rebuilt(&self, size: GridSize) {
        self.board.send_modify(|snapshot| {
            snapshot.size = size;
            snapshot.frame = None;
        });
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    GenerationChanged(u32),
    CellsCommitted(GenerationFrame),
    GridRebuilt(GridSize),
}

/// Every notification, in order. Nothing is dropped, so the receiver has to
/// keep up; use [`LatestBoard`] for a display.
impl Presenter for UnboundedSender<Notification> {
    fn generation_changed(&self, remaining: u32) {
        let _ = self.send(Notification::GenerationChanged(remaining));
    }

    fn cells_committed(&self, frame: GenerationFrame) {
        let _ = self.send(Notification::CellsCommitted(frame));
    }

    fn grid_rebuilt(&self, size: GridSize) {
        let _ = self.send(Notification::GridRebuilt(size));
    }
}
