//! `tile_raster`: Pixel-Seite des Tile-Testers.
//!
//! Enthält alles, was mit fertigen Pixeln arbeitet, aber nichts über
//! Kachel-Referenzen oder Layer weiß:
//! - `RasterSnapshot`: unveränderlicher RGBA-Schnappschuss (Merged-Zellen)
//! - Alpha-Compositing mit Layer-Deckkraft (`blend_over`, `flatten_stack`)
//! - Thumbnail-Skalierung
//!
//! # Beispiel
//! ```
//! use image::{Rgba, RgbaImage};
//! use tile_raster::{flatten_stack, RasterSnapshot};
//!
//! let red = RgbaImage::from_pixel(4, 4, Rgba([255, 0, 0, 255]));
//! let blue = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 255, 255]));
//! let flat = flatten_stack(4, [(&red, 1.0), (&blue, 0.5)]);
//! let snapshot = RasterSnapshot::new(flat);
//! let url = snapshot.to_data_url()?;
//! assert_eq!(RasterSnapshot::from_data_url(&url)?, snapshot);
//! # Ok::<(), tile_raster::RasterError>(())
//! ```

pub mod blend;
mod error;
pub mod snapshot;
pub mod thumbnail;

pub use blend::{blend_over, blend_over_at, flatten_stack};
pub use error::RasterError;
pub use snapshot::RasterSnapshot;
pub use thumbnail::fit_thumbnail;
