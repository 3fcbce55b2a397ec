//! In-memory toolkit
//!
//! [`HeadlessToolkit`] answers the subset of toolkit commands used by this
//! crate from a [`DisplayProfile`], keeping clipboard and pointer state in
//! memory. It lets screen, cursor and clipboard code run without a display.

use std::cell::{Cell, RefCell};

use crate::config::DisplayProfile;
use crate::constants::units;
use crate::distance::parse_distance;
use crate::toolkit::{ClipboardImage, Platform, Toolkit};
use crate::{MiscError, Result};

/// A display-less [`Toolkit`]
#[derive(Debug)]
pub struct HeadlessToolkit {
    profile: DisplayProfile,
    clipboard: RefCell<Option<String>>,
    clipboard_image: RefCell<Option<ClipboardImage>>,
    pointer: Cell<(i64, i64)>,
    history: RefCell<Vec<String>>,
}

impl Default for HeadlessToolkit {
    fn default() -> Self {
        Self::new(DisplayProfile::default_desktop())
    }
}

impl HeadlessToolkit {
    /// Answer queries from `profile`, with empty clipboard
    pub fn new(profile: DisplayProfile) -> Self {
        let pointer = Cell::new(profile.pointer);
        Self {
            profile,
            clipboard: RefCell::new(None),
            clipboard_image: RefCell::new(None),
            pointer,
            history: RefCell::new(Vec::new()),
        }
    }

    /// Put an image on the clipboard, replacing any text
    pub fn set_clipboard_image(&self, image: ClipboardImage) {
        self.clipboard.replace(None);
        self.clipboard_image.replace(Some(image));
    }

    /// Every command evaluated so far, words joined by spaces
    pub fn history(&self) -> Vec<String> {
        self.history.borrow().clone()
    }

    fn fpixels(&self, value: &str) -> Result<f64> {
        let dpi = self.profile.dpi;

        if let Some(points) = value.strip_suffix('p') {
            let amount = points
                .parse::<f64>()
                .map_err(|_| MiscError::invalid_parameter("distance", value))?;
            return Ok(amount * dpi / units::POINTS_PER_INCH);
        }

        let (amount, unit) = parse_distance(value)?;
        Ok(amount * unit.pixels_per_unit(dpi))
    }

    fn warp(&self, args: &[&str], options: &[&str]) -> Result<String> {
        let mut warp = false;
        let (mut x, mut y) = self.pointer.get();

        for pair in options.chunks(2) {
            let [option, value] = pair else {
                return Err(rejected(args, "value for option missing"));
            };
            let number = || {
                value
                    .parse::<i64>()
                    .map_err(|_| rejected(args, &format!("expected integer but got {:?}", value)))
            };
            match *option {
                "-warp" => warp = *value == "1",
                "-x" => x = number()?,
                "-y" => y = number()?,
                other => return Err(rejected(args, &format!("bad option {:?}", other))),
            }
        }

        if warp {
            self.pointer.set((x, y));
        }
        Ok(String::new())
    }
}

fn rejected(args: &[&str], message: &str) -> MiscError {
    MiscError::Toolkit {
        command: args.join(" "),
        message: message.to_string(),
    }
}

impl Toolkit for HeadlessToolkit {
    fn call(&self, args: &[&str]) -> Result<String> {
        log::debug!("headless toolkit: {}", args.join(" "));
        self.history.borrow_mut().push(args.join(" "));

        let profile = &self.profile;
        match args {
            ["clipboard", "clear"] => {
                self.clipboard.replace(None);
                self.clipboard_image.replace(None);
                Ok(String::new())
            }
            ["clipboard", "append", text] => {
                self.clipboard_image.replace(None);
                self.clipboard
                    .borrow_mut()
                    .get_or_insert_with(String::new)
                    .push_str(text);
                Ok(String::new())
            }
            ["clipboard", "get"] => self.clipboard.borrow().clone().ok_or_else(|| {
                rejected(
                    args,
                    "CLIPBOARD selection doesn't exist or form \"STRING\" not defined",
                )
            }),
            ["winfo", "screenwidth", _] => Ok(profile.width.to_string()),
            ["winfo", "screenheight", _] => Ok(profile.height.to_string()),
            ["winfo", "screendepth", _] => Ok(profile.depth.to_string()),
            ["winfo", "pointerx", _] => Ok(self.pointer.get().0.to_string()),
            ["winfo", "pointery", _] => Ok(self.pointer.get().1.to_string()),
            ["winfo", "fpixels", _, distance] => Ok(self.fpixels(distance)?.to_string()),
            ["event", "generate", _, "<Motion>", options @ ..] => self.warp(args, options),
            ["update"] | ["update", "idletasks"] => Ok(String::new()),
            _ => Err(rejected(args, "invalid command name")),
        }
    }

    fn platform(&self) -> Platform {
        self.profile.platform()
    }

    fn grab_clipboard_image(&self) -> Option<ClipboardImage> {
        self.clipboard_image.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toolkit::ToolkitExt;

    #[test]
    fn test_clipboard_commands() {
        let tk = HeadlessToolkit::default();
        assert!(tk.call(&["clipboard", "get"]).is_err());

        tk.call(&["clipboard", "append", "foo"]).unwrap();
        tk.call(&["clipboard", "append", "bar"]).unwrap();
        assert_eq!(tk.call(&["clipboard", "get"]).unwrap(), "foobar");

        tk.call(&["clipboard", "clear"]).unwrap();
        assert!(tk.call(&["clipboard", "get"]).is_err());
    }

    #[test]
    fn test_fpixels() {
        let tk = HeadlessToolkit::default();
        assert_eq!(tk.call_as::<f64>(&["winfo", "fpixels", ".", "1i"]).unwrap(), 96.0);
        assert_eq!(tk.call_as::<f64>(&["winfo", "fpixels", ".", "72p"]).unwrap(), 96.0);
        assert_eq!(tk.call_as::<f64>(&["winfo", "fpixels", ".", "12"]).unwrap(), 12.0);
        assert!(tk.call(&["winfo", "fpixels", ".", "xyz"]).is_err());
    }

    #[test]
    fn test_warp_moves_pointer() {
        let tk = HeadlessToolkit::default();
        tk.call(&["event", "generate", ".", "<Motion>", "-warp", "1", "-x", "5", "-y", "7"])
            .unwrap();
        assert_eq!(tk.call(&["winfo", "pointerx", "."]).unwrap(), "5");
        assert_eq!(tk.call(&["winfo", "pointery", "."]).unwrap(), "7");
    }

    #[test]
    fn test_motion_without_warp_keeps_pointer() {
        let tk = HeadlessToolkit::default();
        tk.call(&["event", "generate", ".", "<Motion>", "-x", "5", "-y", "7"]).unwrap();
        assert_eq!(tk.call(&["winfo", "pointerx", "."]).unwrap(), "0");
    }

    #[test]
    fn test_bad_event_options() {
        let tk = HeadlessToolkit::default();
        assert!(tk.call(&["event", "generate", ".", "<Motion>", "-x"]).is_err());
        assert!(tk.call(&["event", "generate", ".", "<Motion>", "-x", "left"]).is_err());
        assert!(tk.call(&["event", "generate", ".", "<Motion>", "-z", "1"]).is_err());
    }

    #[test]
    fn test_unknown_command() {
        let tk = HeadlessToolkit::default();
        let err = tk.call(&["wm", "title", "."]).unwrap_err();
        assert!(matches!(err, MiscError::Toolkit { .. }));
        assert_eq!(tk.history(), vec!["wm title ."]);
    }
}
