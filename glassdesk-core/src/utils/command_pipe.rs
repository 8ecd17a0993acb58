//! Reads line-oriented external commands from any async reader.
use crate::models::{AppId, Position, Severity, Size, WidgetData, WidgetId, WidgetKind};
use crate::{Command, InputEvent};
use serde::Deserialize;
use std::error::Error;
use std::str::FromStr;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::mpsc;

/// Holds the receiving end of the command channel.
#[derive(Debug)]
pub struct CommandPipe {
    rx: mpsc::UnboundedReceiver<Command>,
}

impl CommandPipe {
    /// Start reading commands from `reader`, one per line, until it ends.
    /// Must be called from within a tokio runtime.
    pub fn new<T>(reader: T) -> Self
    where
        T: AsyncRead + Unpin + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(async move {
            read_from_pipe(reader, &tx).await;
        });
        Self { rx }
    }

    /// The next command, or `None` once the reader is exhausted.
    pub async fn read_command(&mut self) -> Option<Command> {
        self.rx.recv().await
    }
}

async fn read_from_pipe<T>(reader: T, tx: &mpsc::UnboundedSender<Command>) -> Option<()>
where
    T: AsyncRead + Unpin,
{
    let mut lines = BufReader::new(reader).lines();

    while let Some(line) = lines.next_line().await.ok()? {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let cmd = match parse_command(line) {
            Ok(cmd) => cmd,
            Err(err) => {
                tracing::error!("An error occurred while parsing the command {:?}: {}", line, err);
                continue;
            }
        };
        tx.send(cmd).ok()?;
    }

    Some(())
}

/// Parse one command line. Unknown command names become [`Command::Other`].
///
/// # Errors
///
/// Will error if a known command is missing an argument or an argument
/// does not parse.
pub fn parse_command(s: &str) -> Result<Command, Box<dyn Error>> {
    let (head, rest) = s.split_once(' ').unwrap_or((s, ""));
    let rest = rest.trim();
    match head {
        "LaunchApp" => Ok(Command::LaunchApp(build_app(rest)?)),
        "CloseApp" => Ok(Command::CloseApp(build_app(rest)?)),
        "MinimizeApp" => Ok(Command::MinimizeApp(build_app(rest)?)),
        "FocusApp" => Ok(Command::FocusApp(build_app(rest)?)),
        "MoveWindow" => build_move_window(rest),
        "AddWidget" => build_add_widget(rest),
        "RemoveWidget" => Ok(Command::RemoveWidget(build_widget_id(rest)?)),
        "MoveWidget" => build_move_widget(rest),
        "UpdateWidgetData" => build_update_widget_data(rest),
        "SetWallpaper" => Ok(Command::SetWallpaper(
            (!rest.is_empty()).then(|| rest.to_owned()),
        )),
        "Notify" => build_notify(rest),
        "DismissNotification" => {
            if rest.is_empty() {
                return Err("missing argument notification id".into());
            }
            Ok(Command::DismissNotification(rest.to_owned()))
        }
        "ClearNotifications" => Ok(Command::ClearNotifications),
        "MarkNotificationsRead" => Ok(Command::MarkNotificationsRead),
        "DumpState" => Ok(Command::DumpState),
        "Shutdown" => Ok(Command::Shutdown),
        "Reboot" => Ok(Command::Reboot),
        "Input" => build_input(rest),
        _ => Ok(Command::Other(s.into())),
    }
}

fn build_app(raw: &str) -> Result<AppId, Box<dyn Error>> {
    if raw.is_empty() {
        return Err("missing argument app id".into());
    }
    Ok(AppId::from_str(raw)?)
}

fn build_widget_id(raw: &str) -> Result<WidgetId, Box<dyn Error>> {
    if raw.is_empty() {
        return Err("missing argument widget id".into());
    }
    Ok(WidgetId::from(raw))
}

fn build_numbers<const N: usize>(parts: &[&str]) -> Result<[f64; N], Box<dyn Error>> {
    if parts.len() != N {
        return Err(format!("expected {} numbers, got {}", N, parts.len()).into());
    }
    let mut numbers = [0.0; N];
    for (number, part) in numbers.iter_mut().zip(parts) {
        *number = f64::from_str(part)?;
        if !number.is_finite() {
            return Err(format!("{part} is not a finite number").into());
        }
    }
    Ok(numbers)
}

fn build_move_window(raw: &str) -> Result<Command, Box<dyn Error>> {
    let parts: Vec<&str> = raw.split_whitespace().collect();
    let (id, coords) = parts.split_first().ok_or("missing argument app id")?;
    let [x, y] = build_numbers::<2>(coords)?;
    Ok(Command::MoveWindow {
        id: AppId::from_str(id)?,
        position: Position::new(x, y),
    })
}

fn build_add_widget(raw: &str) -> Result<Command, Box<dyn Error>> {
    if raw.is_empty() {
        return Err("missing argument widget kind".into());
    }
    Ok(Command::AddWidget(WidgetKind::from_str(raw)?))
}

fn build_move_widget(raw: &str) -> Result<Command, Box<dyn Error>> {
    let parts: Vec<&str> = raw.split_whitespace().collect();
    let (id, numbers) = parts.split_first().ok_or("missing argument widget id")?;
    let [x, y, width, height] = build_numbers::<4>(numbers)?;
    Ok(Command::MoveWidget {
        id: WidgetId::from(*id),
        position: Position::new(x, y),
        size: Size::new(width, height),
    })
}

fn build_update_widget_data(raw: &str) -> Result<Command, Box<dyn Error>> {
    let (id, json) = raw.split_once(' ').ok_or("missing argument data")?;
    let data: WidgetData = serde_json::from_str(json)?;
    Ok(Command::UpdateWidgetData {
        id: build_widget_id(id)?,
        data,
    })
}

#[derive(Deserialize)]
struct NotifyArgs {
    title: String,
    #[serde(default)]
    message: String,
    #[serde(default)]
    severity: Severity,
}

fn build_notify(raw: &str) -> Result<Command, Box<dyn Error>> {
    if raw.is_empty() {
        return Err("missing argument notification".into());
    }
    let args: NotifyArgs = serde_json::from_str(raw)?;
    Ok(Command::Notify {
        title: args.title,
        message: args.message,
        severity: args.severity,
    })
}

fn build_input(raw: &str) -> Result<Command, Box<dyn Error>> {
    if raw.is_empty() {
        return Err("missing argument input event".into());
    }
    let event: InputEvent = serde_json::from_str(raw)?;
    Ok(Command::Input(event))
}
