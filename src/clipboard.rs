//! System clipboard access
//!
//! Text goes through the toolkit's `clipboard` command. When the toolkit
//! cannot read the current content as text, [`Clipboard::get`] falls back
//! to grabbing an image on platforms that support it.

use crate::toolkit::{ClipboardImage, Toolkit, ToolkitExt};
use crate::Result;

/// Clipboard content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardContent {
    Text(String),
    Image(ClipboardImage),
}

impl ClipboardContent {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ClipboardContent::Text(text) => Some(text),
            ClipboardContent::Image(_) => None,
        }
    }
}

/// The process-wide clipboard
pub struct Clipboard;

impl Clipboard {
    pub fn clear<T: Toolkit + ?Sized>(tk: &T) -> Result<()> {
        tk.call_unit(&["clipboard", "clear"])
    }

    /// Add text after the current content
    pub fn append<T: Toolkit + ?Sized>(tk: &T, content: &str) -> Result<()> {
        tk.call_unit(&["clipboard", "append", content])
    }

    /// Current content, or `None` if it is neither text nor a readable image
    ///
    /// Never fails: a rejected text read is answered with the image
    /// fallback instead.
    pub fn get<T: Toolkit + ?Sized>(tk: &T) -> Option<ClipboardContent> {
        match tk.call(&["clipboard", "get"]) {
            Ok(text) => Some(ClipboardContent::Text(text)),
            Err(err) => {
                let platform = tk.platform();
                log::debug!("clipboard text read failed ({}), trying image grab", err);

                if !platform.supports_image_grab() {
                    log::debug!("image grab is not available on {:?}", platform);
                    return None;
                }
                tk.grab_clipboard_image().map(ClipboardContent::Image)
            }
        }
    }

    /// Replace the content with `content`
    pub fn set<T: Toolkit + ?Sized>(tk: &T, content: &str) -> Result<()> {
        Self::clear(tk)?;
        Self::append(tk, content)
    }

    pub fn content<T: Toolkit + ?Sized>(tk: &T) -> Option<ClipboardContent> {
        Self::get(tk)
    }

    pub fn set_content<T: Toolkit + ?Sized>(tk: &T, content: &str) -> Result<()> {
        Self::set(tk, content)
    }

    /// Debug-style summary of the current content
    pub fn describe<T: Toolkit + ?Sized>(tk: &T) -> String {
        format!("Clipboard(content={:?})", Self::get(tk))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toolkit::Platform;
    use crate::MiscError;
    use std::cell::RefCell;

    /// Records commands and refuses every clipboard read
    struct Refusing {
        platform: Platform,
        log: RefCell<Vec<String>>,
    }

    impl Toolkit for Refusing {
        fn call(&self, args: &[&str]) -> Result<String> {
            self.log.borrow_mut().push(args.join(" "));
            if args == ["clipboard", "get"] {
                return Err(MiscError::Toolkit {
                    command: args.join(" "),
                    message: "CLIPBOARD selection doesn't exist".into(),
                });
            }
            Ok(String::new())
        }

        fn platform(&self) -> Platform {
            self.platform
        }

        fn grab_clipboard_image(&self) -> Option<ClipboardImage> {
            Some(ClipboardImage {
                width: 1,
                height: 1,
                rgba: vec![0, 0, 0, 255],
            })
        }
    }

    fn refusing(platform: Platform) -> Refusing {
        Refusing {
            platform,
            log: RefCell::new(Vec::new()),
        }
    }

    #[test]
    fn test_set_clears_then_appends() {
        let tk = refusing(Platform::Linux);
        Clipboard::set(&tk, "hello").unwrap();
        assert_eq!(
            *tk.log.borrow(),
            vec!["clipboard clear", "clipboard append hello"]
        );
    }

    #[test]
    fn test_get_falls_back_to_image() {
        let tk = refusing(Platform::Windows);
        match Clipboard::get(&tk) {
            Some(ClipboardContent::Image(image)) => assert_eq!(image.width, 1),
            other => panic!("expected image, got {:?}", other),
        }
    }

    #[test]
    fn test_get_without_image_support_is_none() {
        let tk = refusing(Platform::Linux);
        assert_eq!(Clipboard::get(&tk), None);
    }
}
