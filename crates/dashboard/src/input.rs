use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::warn;
use vitals_core::Message;
use vitals_metrics::workout::WEEKDAYS;

/// Parse one line typed on stdin into a dashboard message.
///
/// Accepted commands (case-insensitive):
/// - `+` / `water+`: log a glass of water
/// - `-` / `water-`: remove a glass
/// - `day <mon..sun>`: pick the workout day
/// - `quit` / `q`: shut down
pub fn parse_command(line: &str) -> Option<Message> {
    let line = line.trim().to_ascii_lowercase();
    let mut words = line.split_whitespace();

    match words.next()? {
        "+" | "water+" => Some(Message::WaterGlassAdded),
        "-" | "water-" => Some(Message::WaterGlassRemoved),
        "quit" | "q" => Some(Message::Shutdown),
        "day" => {
            let day = words.next()?;
            WEEKDAYS
                .iter()
                .position(|d| d.eq_ignore_ascii_case(day))
                .map(|i| Message::WorkoutDaySelected(i as u8))
        }
        _ => None,
    }
}

/// Spawn a task reading commands from stdin. Stops at EOF or when the
/// receiver is dropped.
pub fn spawn_input() -> mpsc::Receiver<Message> {
    let (tx, rx) = mpsc::channel(8);

    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            match parse_command(&line) {
                Some(message) => {
                    if tx.send(message).await.is_err() {
                        return; // receiver dropped
                    }
                }
                None if line.trim().is_empty() => {}
                None => warn!("Unknown command: {}", line.trim()),
            }
        }
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn water_commands() {
        assert!(matches!(parse_command("+"), Some(Message::WaterGlassAdded)));
        assert!(matches!(parse_command(" Water- "), Some(Message::WaterGlassRemoved)));
    }

    #[test]
    fn day_selection() {
        assert!(matches!(parse_command("day fri"), Some(Message::WorkoutDaySelected(4))));
        assert!(matches!(parse_command("DAY Mon"), Some(Message::WorkoutDaySelected(0))));
        assert!(parse_command("day someday").is_none());
        assert!(parse_command("day").is_none());
    }

    #[test]
    fn quit_and_unknown() {
        assert!(matches!(parse_command("q"), Some(Message::Shutdown)));
        assert!(parse_command("dance").is_none());
        assert!(parse_command("   ").is_none());
    }
}
