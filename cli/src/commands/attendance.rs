//! Attendance clock commands.

use tienda_cli::{OutputFormatter, Result};
use tienda_link::models::{Attendance, AttendanceEvent, AttendanceQuery, ClockRequest};
use tienda_link::TiendaClient;

use crate::args::AttendanceCommand;

const HEADERS: &[&str] = &["ID", "USER", "DATE", "IN", "OUT", "HOURS"];

fn row(record: &Attendance) -> Vec<String> {
    let user = record
        .user
        .as_ref()
        .map(|u| u.name.clone())
        .unwrap_or_else(|| record.user_id.clone());
    vec![
        record.id.clone(),
        user,
        record.date.clone(),
        record.clock_in.clone(),
        record.clock_out.clone().unwrap_or_else(|| "-".into()),
        record
            .hours_worked
            .map(|h| format!("{:.2}", h))
            .unwrap_or_else(|| "-".into()),
    ]
}

async fn register(
    client: &TiendaClient,
    fmt: &OutputFormatter,
    user_id: &str,
    event: AttendanceEvent,
) -> Result<()> {
    let record = client
        .attendance()
        .register(&ClockRequest {
            user_id: user_id.to_string(),
            event,
        })
        .await?;
    let verb = match event {
        AttendanceEvent::ClockIn => "Clocked in",
        AttendanceEvent::ClockOut => "Clocked out",
    };
    fmt.note(&format!("{} {} on {}", verb, record.user_id, record.date));
    fmt.detail(
        &record,
        vec![
            ("id", record.id.clone()),
            ("user", record.user_id.clone()),
            ("date", record.date.clone()),
            ("in", record.clock_in.clone()),
            ("out", record.clock_out.clone().unwrap_or_else(|| "-".into())),
        ],
    )
}

pub async fn handle(
    client: &TiendaClient,
    fmt: &OutputFormatter,
    command: &AttendanceCommand,
) -> Result<()> {
    match command {
        AttendanceCommand::In { user_id } => {
            register(client, fmt, user_id, AttendanceEvent::ClockIn).await
        }
        AttendanceCommand::Out { user_id } => {
            register(client, fmt, user_id, AttendanceEvent::ClockOut).await
        }
        AttendanceCommand::List { user, date } => {
            let records = client
                .attendance()
                .list(&AttendanceQuery {
                    user_id: user.clone(),
                    date: date.clone(),
                })
                .await?;
            fmt.list(&records, HEADERS, row)
        }
    }
}
