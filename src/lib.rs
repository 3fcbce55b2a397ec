//! # tk_misc
//!
//! Small building blocks shared by the widgets of a Tk-style toolkit
//! binding:
//! - Color values with conversion between RGB, HEX, HSL, HSV and CMYK
//! - Screen distances in pixels, millimeters, centimeters and inches
//! - Clipboard, cursor and screen queries through a [`Toolkit`]
//!
//! Anything that needs the windowing system goes through the [`Toolkit`]
//! trait; [`HeadlessToolkit`] implements it in memory.
//!
//! ## Example
//!
//! ```rust
//! use tk_misc::{Color, HeadlessToolkit, Screen, ScreenDistance};
//!
//! let teal = Color::from_hex("#008080")?;
//! assert_eq!(teal.hsv(), (180, 100, 50));
//!
//! let tk = HeadlessToolkit::default();
//! let margin = ScreenDistance::from_mm(&tk, 5.0)?;
//! println!("{}px on a {} screen", margin.px(), Screen::aspect_ratio(&tk)?);
//! # Ok::<(), tk_misc::MiscError>(())
//! ```

pub mod clipboard;
pub mod color;
pub mod config;
pub mod constants;
pub mod cursor;
pub mod distance;
pub mod error;
pub mod headless;
pub mod screen;
pub mod toolkit;

pub use clipboard::{Clipboard, ClipboardContent};
pub use color::{Color, ColorArgs, ColorInput, ColorSpace};
pub use config::DisplayProfile;
pub use cursor::Cursor;
pub use distance::{DistanceParts, ScreenDistance, Unit};
pub use error::{MiscError, Result};
pub use headless::HeadlessToolkit;
pub use screen::Screen;
pub use toolkit::{ClipboardImage, FromTcl, Platform, ToTcl, Toolkit, ToolkitExt};
