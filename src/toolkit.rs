//! Toolkit collaborator interface
//!
//! Everything in this crate that touches the windowing system goes through
//! a [`Toolkit`]: a command interpreter that takes a command as a list of
//! words and replies with a string. Replies are decoded with [`FromTcl`],
//! values are encoded for commands with [`ToTcl`].

use serde::{Deserialize, Serialize};

use crate::{MiscError, Result};

/// Operating system family, used to pick platform-specific names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
}

impl Platform {
    /// Platform this binary was compiled for
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Linux
        }
    }

    /// Whether the clipboard can be read as an image
    pub fn supports_image_grab(self) -> bool {
        matches!(self, Platform::Windows | Platform::MacOs)
    }
}

/// Raw RGBA image taken from the clipboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// A command interpreter driving the windowing system
pub trait Toolkit {
    /// Evaluate one command and return its result string
    ///
    /// # Errors
    ///
    /// Returns [`MiscError::Toolkit`] when the interpreter rejects the command
    fn call(&self, args: &[&str]) -> Result<String>;

    /// Platform identification
    fn platform(&self) -> Platform {
        Platform::current()
    }

    /// Read the clipboard as an image, if it holds one
    fn grab_clipboard_image(&self) -> Option<ClipboardImage> {
        None
    }
}

impl<T: Toolkit + ?Sized> Toolkit for &T {
    fn call(&self, args: &[&str]) -> Result<String> {
        (**self).call(args)
    }

    fn platform(&self) -> Platform {
        (**self).platform()
    }

    fn grab_clipboard_image(&self) -> Option<ClipboardImage> {
        (**self).grab_clipboard_image()
    }
}

/// Typed calls on top of [`Toolkit::call`]
pub trait ToolkitExt: Toolkit {
    /// Evaluate a command and decode its reply
    fn call_as<T: FromTcl>(&self, args: &[&str]) -> Result<T> {
        T::from_tcl(&self.call(args)?)
    }

    /// Evaluate a command for its side effect only
    fn call_unit(&self, args: &[&str]) -> Result<()> {
        self.call(args).map(|_| ())
    }
}

impl<T: Toolkit + ?Sized> ToolkitExt for T {}

/// Encode a value as a toolkit word
pub trait ToTcl {
    fn to_tcl(&self) -> String;
}

/// Decode a value from a toolkit reply
pub trait FromTcl: Sized {
    fn from_tcl(value: &str) -> Result<Self>;
}

fn mismatch(expected: &'static str, found: &str) -> MiscError {
    MiscError::TypeMismatch {
        expected,
        found: found.to_string(),
    }
}

impl FromTcl for String {
    fn from_tcl(value: &str) -> Result<Self> {
        Ok(value.to_string())
    }
}

impl FromTcl for i64 {
    fn from_tcl(value: &str) -> Result<Self> {
        value.trim().parse().map_err(|_| mismatch("integer", value))
    }
}

impl FromTcl for f64 {
    fn from_tcl(value: &str) -> Result<Self> {
        value.trim().parse().map_err(|_| mismatch("float", value))
    }
}

impl ToTcl for i64 {
    fn to_tcl(&self) -> String {
        self.to_string()
    }
}

impl ToTcl for f64 {
    fn to_tcl(&self) -> String {
        self.to_string()
    }
}
