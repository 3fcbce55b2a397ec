//! Mouse cursor shapes and pointer position

use std::fmt;
use std::str::FromStr;

use crate::toolkit::{Platform, ToTcl, Toolkit, ToolkitExt};
use crate::{MiscError, Result};

/// Cursor shapes, named after their CSS equivalents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cursor {
    Crosshair,
    Default,
    EResize,
    Help,
    Move,
    NResize,
    NeSwResize,
    NotAllowed,
    NsResize,
    NwSeResize,
    Pointer,
    Progress,
    SResize,
    Text,
    WResize,
    Wait,
    WeResize,
    /// No visible cursor
    Hidden,
}

impl Cursor {
    pub const ALL: [Cursor; 18] = [
        Cursor::Crosshair,
        Cursor::Default,
        Cursor::EResize,
        Cursor::Help,
        Cursor::Move,
        Cursor::NResize,
        Cursor::NeSwResize,
        Cursor::NotAllowed,
        Cursor::NsResize,
        Cursor::NwSeResize,
        Cursor::Pointer,
        Cursor::Progress,
        Cursor::SResize,
        Cursor::Text,
        Cursor::WResize,
        Cursor::Wait,
        Cursor::WeResize,
        Cursor::Hidden,
    ];

    /// CSS-style name
    pub fn name(self) -> &'static str {
        match self {
            Cursor::Crosshair => "crosshair",
            Cursor::Default => "default",
            Cursor::EResize => "e-resize",
            Cursor::Help => "help",
            Cursor::Move => "move",
            Cursor::NResize => "n-resize",
            Cursor::NeSwResize => "ne-sw-resize",
            Cursor::NotAllowed => "not-allowed",
            Cursor::NsResize => "ns-resize",
            Cursor::NwSeResize => "nw-se-resize",
            Cursor::Pointer => "pointer",
            Cursor::Progress => "progress",
            Cursor::SResize => "s-resize",
            Cursor::Text => "text",
            Cursor::WResize => "w-resize",
            Cursor::Wait => "wait",
            Cursor::WeResize => "we-resize",
            Cursor::Hidden => "none",
        }
    }

    /// Toolkit cursor name on `platform`
    pub fn to_tcl(self, platform: Platform) -> &'static str {
        if platform == Platform::Windows {
            if let Some(name) = self.windows_name() {
                return name;
            }
        }

        match self {
            Cursor::Crosshair => "crosshair",
            Cursor::Default => "arrow",
            Cursor::EResize => "right_side",
            Cursor::Help => "question_arrow",
            Cursor::Move => "fleur",
            Cursor::NResize => "top_side",
            Cursor::NeSwResize => "top_right_corner",
            Cursor::NotAllowed => "circle",
            Cursor::NsResize => "sb_v_double_arrow",
            Cursor::NwSeResize => "top_left_corner",
            Cursor::Pointer => "hand2",
            // "arrow" everywhere but Windows, which has a busy-arrow cursor
            Cursor::Progress => "arrow",
            Cursor::SResize => "bottom_side",
            Cursor::Text => "xterm",
            Cursor::WResize => "left_side",
            Cursor::Wait => "watch",
            Cursor::WeResize => "sb_h_double_arrow",
            Cursor::Hidden => "none",
        }
    }

    fn windows_name(self) -> Option<&'static str> {
        match self {
            Cursor::NotAllowed => Some("no"),
            Cursor::Progress => Some("starting"),
            Cursor::NeSwResize => Some("size_ne_sw"),
            Cursor::NsResize => Some("size_ns"),
            Cursor::NwSeResize => Some("size_nw_se"),
            Cursor::Wait => Some("wait"),
            Cursor::WeResize => Some("size_we"),
            _ => None,
        }
    }

    /// Decode a toolkit cursor name on `platform`
    ///
    /// Where two shapes share a toolkit name the first in [`Cursor::ALL`]
    /// wins, so `"arrow"` is [`Cursor::Default`].
    pub fn from_tcl(platform: Platform, name: &str) -> Result<Cursor> {
        Cursor::ALL
            .into_iter()
            .find(|cursor| cursor.to_tcl(platform) == name)
            .ok_or_else(|| MiscError::invalid_parameter("cursor", name))
    }

    /// Pointer x coordinate on the screen
    pub fn x<T: Toolkit + ?Sized>(tk: &T) -> Result<i64> {
        tk.call_as(&["winfo", "pointerx", "."])
    }

    /// Pointer y coordinate on the screen
    pub fn y<T: Toolkit + ?Sized>(tk: &T) -> Result<i64> {
        tk.call_as(&["winfo", "pointery", "."])
    }

    pub fn position<T: Toolkit + ?Sized>(tk: &T) -> Result<(i64, i64)> {
        Ok((Self::x(tk)?, Self::y(tk)?))
    }

    pub fn set_x<T: Toolkit + ?Sized>(tk: &T, x: i64) -> Result<()> {
        let y = Self::y(tk)?;
        warp(tk, x, y)
    }

    pub fn set_y<T: Toolkit + ?Sized>(tk: &T, y: i64) -> Result<()> {
        let x = Self::x(tk)?;
        warp(tk, x, y)
    }

    /// Move the pointer to `(x, y)`
    pub fn set_position<T: Toolkit + ?Sized>(tk: &T, (x, y): (i64, i64)) -> Result<()> {
        warp(tk, x, y)
    }
}

/// Generate a warping motion event, then let the toolkit process it
fn warp<T: Toolkit + ?Sized>(tk: &T, x: i64, y: i64) -> Result<()> {
    let (x, y) = (x.to_tcl(), y.to_tcl());
    tk.call_unit(&[
        "event",
        "generate",
        ".",
        "<Motion>",
        "-warp",
        "1",
        "-x",
        x.as_str(),
        "-y",
        y.as_str(),
    ])?;
    tk.call_unit(&["update", "idletasks"])
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Cursor {
    type Err = MiscError;

    fn from_str(s: &str) -> Result<Self> {
        Cursor::ALL
            .into_iter()
            .find(|cursor| cursor.name() == s)
            .ok_or_else(|| MiscError::invalid_parameter("cursor", s))
    }
}
