//! Tile-Tester (Headless).
//!
//! Lädt eine Sitzung, protokolliert eine Zusammenfassung und rendert den
//! Inhalt optional als PNG.
//!
//! Aufruf: `tile-tester <sitzung.json> [--thumbnail <ausgabe.png>]`

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tile_tester::render::{render_region, RegionLayers};
use tile_tester::{load_from_file, SwatchRenderer, TileTesterOptions};

/// Lädt eine Tile-Tester-Sitzung und gibt eine Zusammenfassung aus.
#[derive(Parser, Debug)]
#[command(name = "tile-tester", version, about = "Tile-Tester (Headless)")]
struct CliArgs {
    /// Sitzungsdatei (JSON, Version 1 oder 2)
    #[arg(value_name = "SITZUNG.json")]
    session: PathBuf,

    /// Sichtbaren Inhalt zusätzlich als PNG rendern
    #[arg(long, value_name = "AUSGABE.png")]
    thumbnail: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Tile-Tester v{} startet...", env!("CARGO_PKG_VERSION"));

    let args = CliArgs::parse();

    // Optionen aus TOML laden (oder Standardwerte)
    let options = TileTesterOptions::load_from_file(&TileTesterOptions::config_path());
    let swatch = SwatchRenderer::new(options.swatch_palette.clone()).with_default_catalog();

    let loaded = load_from_file(&args.session, &swatch, options.growth_chunk)?;
    let grid = &loaded.grid;

    for (index, layer) in grid.stack().layers().iter().enumerate() {
        log::info!(
            "Layer {} '{}': {} Einträge, sichtbar={}, Deckkraft={:.2}",
            index,
            layer.name,
            layer.entry_count(),
            layer.visible,
            layer.opacity()
        );
    }
    log::info!(
        "Raum {}x{} (Ursprung {},{}), {} Composites",
        grid.space().width,
        grid.space().height,
        grid.space().origin_x,
        grid.space().origin_y,
        loaded.composites.len()
    );

    let Some(bounds) = grid.content_bounds(true) else {
        log::info!("Sitzung enthält keine sichtbaren Kacheln");
        return Ok(());
    };
    log::info!("Inhalt: {} bis {}", bounds.min, bounds.max);

    if let Some(out) = args.thumbnail {
        let cell_px = options.cell_size_px.round().max(1.0) as u32;
        let image = render_region(grid, bounds, RegionLayers::Visible, &swatch, &swatch, cell_px);
        image
            .save(&out)
            .with_context(|| format!("PNG konnte nicht nach {} geschrieben werden", out.display()))?;
        log::info!(
            "Vorschau gespeichert: {} ({}x{})",
            out.display(),
            image.width(),
            image.height()
        );
    }

    Ok(())
}
