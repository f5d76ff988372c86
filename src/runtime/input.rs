//! Script input parsing
//!
//! Each non-empty line of a script is one input event. Lines starting with
//! `#` are comments.
//!
//! ```text
//! container 1200 800
//! viewport 1200
//! minimize insights
//! press 600 300
//! move 720 300
//! release
//! show
//! ```

use documint_layout::messages::PanelMsg;
use documint_layout::panel::PanelId;

/// One event read from the script
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Header button or restore control, addressed by panel name
    Panel(PanelMsg),
    /// Pointer pressed at a point in the layout area
    Press { x: f32, y: f32 },
    /// Pointer moved
    Move { x: f32, y: f32 },
    /// Pointer released
    Release,
    /// Viewport width changed
    Viewport { width: f32 },
    /// Layout area size changed
    Container { width: f32, height: f32 },
    /// Mobile tab selected by name
    Tab(PanelId),
    /// Print the current layout
    Show,
    Quit,
}

/// Parse one script line; blank lines and comments yield `None`
pub fn parse_line(line: &str) -> Result<Option<InputEvent>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut parts = line.split_whitespace();
    let Some(command) = parts.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = parts.collect();

    let event = match command.to_ascii_lowercase().as_str() {
        "expand" => InputEvent::Panel(PanelMsg::Expand(panel_arg(command, &args)?)),
        "minimize" => InputEvent::Panel(PanelMsg::Minimize(panel_arg(command, &args)?)),
        "restore" => InputEvent::Panel(PanelMsg::Restore(panel_arg(command, &args)?)),
        "restore-all" => {
            expect_args(command, &args, 0)?;
            InputEvent::Panel(PanelMsg::RestoreAll)
        }
        "press" => {
            let (x, y) = point_args(command, &args)?;
            InputEvent::Press { x, y }
        }
        "move" => {
            let (x, y) = point_args(command, &args)?;
            InputEvent::Move { x, y }
        }
        "release" => {
            expect_args(command, &args, 0)?;
            InputEvent::Release
        }
        "viewport" => {
            expect_args(command, &args, 1)?;
            InputEvent::Viewport {
                width: number(command, args[0])?,
            }
        }
        "container" => {
            let (width, height) = point_args(command, &args)?;
            InputEvent::Container { width, height }
        }
        "tab" => InputEvent::Tab(panel_arg(command, &args)?),
        "show" => {
            expect_args(command, &args, 0)?;
            InputEvent::Show
        }
        "quit" | "exit" => InputEvent::Quit,
        other => return Err(format!("Unknown command '{}'", other)),
    };

    Ok(Some(event))
}

fn expect_args(command: &str, args: &[&str], count: usize) -> Result<(), String> {
    if args.len() == count {
        Ok(())
    } else {
        Err(format!(
            "'{}' takes {} argument(s), got {}",
            command,
            count,
            args.len()
        ))
    }
}

fn panel_arg(command: &str, args: &[&str]) -> Result<PanelId, String> {
    expect_args(command, args, 1)?;
    PanelId::from_name(args[0]).ok_or_else(|| format!("Unknown panel '{}'", args[0]))
}

fn point_args(command: &str, args: &[&str]) -> Result<(f32, f32), String> {
    expect_args(command, args, 2)?;
    Ok((number(command, args[0])?, number(command, args[1])?))
}

fn number(command: &str, raw: &str) -> Result<f32, String> {
    raw.parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("'{}': '{}' is not a number", command, raw))
}
