mod app;
mod stats;

use std::path::PathBuf;

use anyhow::Context;
use winit::dpi::LogicalSize;

use warboard_board::BoardConfig;
use warboard_engine::device::GpuInit;
use warboard_engine::logging::{init_logging, LoggingConfig};
use warboard_engine::text::{FontId, FontSystem};
use warboard_engine::window::{Runtime, RuntimeConfig};

use crate::app::BoardApp;

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let config = BoardConfig::default();
    config.validate().context("board configuration rejected")?;

    let window = RuntimeConfig {
        title: "warboard".to_string(),
        initial_size: LogicalSize::new(1280.0, 720.0),
    };
    let aspect = (window.initial_size.width / window.initial_size.height) as f32;

    log::info!(
        "starting warboard: {}x{} board, {} base sizes",
        config.board_size.x,
        config.board_size.y,
        config.base_sizes.len()
    );

    let mut fonts = FontSystem::new();
    let label_font = load_label_font(&mut fonts);

    Runtime::run(window, GpuInit::default(), BoardApp::new(&config, aspect, fonts, label_font))
}

/// System fonts tried for the button labels, in order.
const LABEL_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// `WARBOARD_FONT` first, then the system candidates. The board still runs
/// without labels when none of them loads.
fn load_label_font(fonts: &mut FontSystem) -> Option<FontId> {
    let candidates: Vec<PathBuf> = std::env::var_os("WARBOARD_FONT")
        .map(PathBuf::from)
        .into_iter()
        .chain(LABEL_FONT_CANDIDATES.iter().map(|p| PathBuf::from(*p)))
        .collect();

    match fonts.load_first(&candidates) {
        Ok(id) => Some(id),
        Err(err) => {
            log::warn!("{err}; button labels disabled");
            None
        }
    }
}
