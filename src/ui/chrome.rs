use crate::ui::ansi::{
    CLEAR_LINE_REST, CURSOR_UP_ONE, FG_GOLD, FG_LIGHT_GRAY, PROMPT_STYLE, STYLE_BOLD,
    STYLE_ITALIC, STYLE_RESET,
};
use crate::ui::width_util::WidthUtil;
use std::io::{self, Write};

const BANNER_WIDTH: usize = 50;

/// Screen-level helpers (banner, prompts).
#[derive(Debug, Default, Clone)]
pub struct UiChrome {
    util: WidthUtil,
}

impl UiChrome {
    pub fn new() -> Self {
        Self {
            util: WidthUtil::default(),
        }
    }

    pub fn print_banner(&self) {
        for line in self.banner_lines() {
            println!("{line}");
        }
    }

    /// Banner box, shifted right to sit in the middle of the terminal.
    pub fn banner_lines(&self) -> Vec<String> {
        let version = env!("CARGO_PKG_VERSION");
        let title = format!(
            "{STYLE_BOLD}G A L A C T I C{STYLE_RESET} {FG_LIGHT_GRAY}(v{version}){STYLE_RESET}"
        );
        let subtitle = format!("{STYLE_ITALIC}Roman numerals for merchants{STYLE_RESET}");
        let symbols = format!("{FG_GOLD}I V X L C D M{STYLE_RESET}");
        let margin = " ".repeat(self.util.center_pad(BANNER_WIDTH + 2));

        let mut lines = vec![format!("╭{}╮", "─".repeat(BANNER_WIDTH))];
        lines.push(format!("│{}│", " ".repeat(BANNER_WIDTH)));
        for content in [&title, &subtitle, &symbols] {
            lines.push(format!("│{}│", self.center_in_box(content, BANNER_WIDTH)));
        }
        lines.push(format!("│{}│", " ".repeat(BANNER_WIDTH)));
        lines.push(format!("╰{}╯", "─".repeat(BANNER_WIDTH)));
        lines.into_iter().map(|l| format!("{margin}{l}")).collect()
    }

    pub fn print_prompt(&self, prompt: &str) {
        const PROMPT_TOP_PADDING_LINES: usize = 1;
        for _ in 0..PROMPT_TOP_PADDING_LINES {
            self.print_prompt_padding_line();
        }
        print!("{PROMPT_STYLE}{prompt}{CLEAR_LINE_REST}{STYLE_RESET}\n");
        print!("{PROMPT_STYLE}{CLEAR_LINE_REST}{STYLE_RESET}");
        let column = self.util.visible_width(prompt) + 1;
        print!("{CURSOR_UP_ONE}\x1B[{column}G{PROMPT_STYLE}");
        let _ = io::stdout().flush();
    }

    pub fn print_prompt_bottom_padding(&self) {
        self.print_prompt_padding_line();
        let _ = io::stdout().flush();
    }

    fn print_prompt_padding_line(&self) {
        print!("{PROMPT_STYLE}{CLEAR_LINE_REST}{STYLE_RESET}\n");
    }

    pub fn center_in_box(&self, content: &str, width: usize) -> String {
        let content_width = self.util.visible_width(content);
        if content_width >= width {
            return content.to_string();
        }
        let left = (width - content_width) / 2;
        let right = width - content_width - left;
        format!("{}{}{}", " ".repeat(left), content, " ".repeat(right))
    }
}
