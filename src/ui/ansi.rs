// Shared ANSI/VT100 control sequences used across the UI.

/// Clear from cursor to end of line.
pub const CLEAR_LINE_REST: &str = crate::csi!("0K");
/// Move the cursor up one line.
pub const CURSOR_UP_ONE: &str = crate::csi!("1A");

/// Reset terminal styling to defaults.
pub const STYLE_RESET: &str = crate::csi!("0m");
/// Bold text.
pub const STYLE_BOLD: &str = crate::csi!("1m");
/// Italic text.
pub const STYLE_ITALIC: &str = crate::csi!("3m");
/// Light gray foreground.
pub const FG_LIGHT_GRAY: &str = crate::csi!("37m");
/// Yellow foreground, used for the roman symbol strip in the banner.
pub const FG_GOLD: &str = crate::csi!("33m");
/// Dark gray background with white text for input prompts.
pub const PROMPT_STYLE: &str = crate::csi2!("38;5;15m", "48;5;236m");
