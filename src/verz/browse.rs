//! Interactive full-screen mode. Owns the terminal for the life of the
//! session; the cursor lives exactly as long as the session, after which
//! all browsing state is gone.

use console::{Key, Term};
use verz::browser::{Action, Browser};
use verz::error::{Result, VerzError};

const KEY_HELP: &str = "←/→ page   j jump   / search   r random   q quit";

pub fn run(browser: &mut Browser, chapter: Option<usize>) -> Result<()> {
    let term = Term::stdout();

    let mut result = match chapter {
        Some(n) => browser.dispatch(Action::Jump(n)),
        None => browser.dispatch(Action::Refresh),
    };

    loop {
        draw(&term, &result)?;

        let action = match term.read_key().map_err(VerzError::Io)? {
            Key::ArrowLeft | Key::Char('p') => Some(Action::Previous),
            Key::ArrowRight | Key::Char('n') => Some(Action::Next),
            Key::Char('j') => prompt(&term, "chapter")?
                .trim()
                .parse()
                .ok()
                .map(Action::Jump),
            Key::Char('/') | Key::Char('s') => Some(Action::Search(prompt(&term, "search")?)),
            Key::Char('r') => Some(Action::Random),
            Key::Char('q') | Key::Escape => break,
            _ => None,
        };

        if let Some(action) = action {
            result = browser.dispatch(action);
        }
    }

    term.clear_screen().map_err(VerzError::Io)?;
    Ok(())
}

fn draw(term: &Term, result: &verz::commands::CmdResult) -> Result<()> {
    term.clear_screen().map_err(VerzError::Io)?;

    if result.page.is_none() && result.spotlight.is_none() && result.messages.is_empty() {
        println!("{}", console::style("No verses to display.").dim());
    } else {
        crate::print_result(result);
    }

    println!();
    println!("{}", console::style(KEY_HELP).dim());
    Ok(())
}

/// Reads one line of input below the page. Enter submits. Interpreting the
/// line (number parsing, blank-query handling) is the caller's business.
fn prompt(term: &Term, label: &str) -> Result<String> {
    term.write_str(&format!("{}: ", label))
        .map_err(VerzError::Io)?;
    term.read_line().map_err(VerzError::Io)
}
