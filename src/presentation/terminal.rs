//! Terminal capability detection

use is_terminal::IsTerminal;

/// When to color output
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Whether stdout gets ANSI colors
pub fn use_color(when: Option<ColorWhen>) -> bool {
    use_color_impl(
        when,
        |key| std::env::var(key).ok(),
        std::io::stdout().is_terminal(),
    )
}

fn use_color_impl(
    when: Option<ColorWhen>,
    get_env: impl Fn(&str) -> Option<String>,
    is_tty: bool,
) -> bool {
    match when {
        Some(ColorWhen::Always) => true,
        Some(ColorWhen::Never) => false,
        Some(ColorWhen::Auto) | None => {
            let term = get_env("TERM").unwrap_or_default();
            let no_color = get_env("NO_COLOR").is_some();
            is_tty && !no_color && !term.eq_ignore_ascii_case("dumb")
        }
    }
}
