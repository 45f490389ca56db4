//! Terminal output for command results.
//!
//! Every `render_*` function returns a `String` so the layout can be tested
//! without a terminal; `print_*` wrappers write it to stdout.

use colored::Colorize;
use pethotel::api::{BookingDetail, CmdMessage, Listed, MessageLevel, PageInfo};
use pethotel::config::HotelConfig;
use pethotel::error::HotelError;
use pethotel::model::{format_date, Booking, Customer, Pet};
use pethotel::schedule::Schedule;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const DAY_WIDTH: usize = 3;
const ROOM_WIDTH: usize = 6;
const COLLISION: &str = "  !";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// Error text for stderr. A validation failure lists every field with its
/// short hint.
pub(super) fn render_error(error: &HotelError) -> String {
    let HotelError::Validation(report) = error else {
        return format!("Error: {}\n", error);
    };
    let mut out = "Error: Validation failed:\n".to_string();
    for field in report.errors() {
        let hint = format!("({}: {})", field.field.label(), field.hint);
        out.push_str(&format!("  {} {}\n", field.message, hint.dimmed()));
    }
    out
}

pub(super) fn print(text: String) {
    if !text.is_empty() {
        print!("{}", text);
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    let cut = truncate_to_width(s, width);
    let padding = width.saturating_sub(cut.width());
    format!("{}{}", cut, " ".repeat(padding))
}

/// Renders rows of cells as left-aligned columns sized to their content.
/// The last column takes whatever is left of the line.
fn render_rows(rows: &[(usize, Vec<String>)]) -> String {
    let columns = rows.first().map(|(_, cells)| cells.len()).unwrap_or(0);
    let mut widths = vec![0; columns];
    for (_, cells) in rows {
        for (i, cell) in cells.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }
    let position_width = rows
        .iter()
        .map(|(p, _)| format!("{}.", p).width())
        .max()
        .unwrap_or(0);
    if columns > 0 {
        let used: usize = position_width
            + 4
            + widths[..columns - 1].iter().map(|w| w + 2).sum::<usize>();
        widths[columns - 1] = widths[columns - 1].min(LINE_WIDTH.saturating_sub(used));
    }

    let mut out = String::new();
    for (position, cells) in rows {
        let idx = format!("{:>width$}", format!("{}.", position), width = position_width);
        let line: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, w)| pad_to_width(cell, *w))
            .collect();
        out.push_str(&format!(
            "  {}  {}\n",
            idx.yellow(),
            line.join("  ").trim_end()
        ));
    }
    out
}

fn render_footer(page: Option<PageInfo>, noun: &str) -> String {
    let Some(page) = page else {
        return String::new();
    };
    let mut parts = vec![format!("{} {}", page.total, noun)];
    if page.has_prev || page.has_next {
        parts.push(format!("page {}", page.number));
    }
    if page.has_prev {
        parts.push(format!("prev: --page {}", page.number - 1));
    }
    if page.has_next {
        parts.push(format!("next: --page {}", page.number + 1));
    }
    format!("{}\n", parts.join(" · ").dimmed())
}

pub(super) fn render_customers(listed: &[Listed<Customer>], page: Option<PageInfo>) -> String {
    if listed.is_empty() {
        return "No customers found.\n".to_string();
    }
    let rows: Vec<(usize, Vec<String>)> = listed
        .iter()
        .map(|l| {
            let c = &l.record;
            (
                l.position,
                vec![
                    c.full_name(),
                    c.postcode.clone(),
                    c.phone.clone(),
                    c.email.clone(),
                ],
            )
        })
        .collect();
    format!("{}{}", render_rows(&rows), render_footer(page, "customers"))
}

pub(super) fn render_pets(listed: &[Listed<Pet>], page: Option<PageInfo>) -> String {
    if listed.is_empty() {
        return "No pets found.\n".to_string();
    }
    let rows: Vec<(usize, Vec<String>)> = listed
        .iter()
        .map(|l| {
            let p = &l.record;
            (
                l.position,
                vec![
                    format!("{} ({})", p.name, p.species),
                    format!("age {}", p.age),
                    p.diet.clone(),
                ],
            )
        })
        .collect();
    format!("{}{}", render_rows(&rows), render_footer(page, "pets"))
}

pub(super) fn render_bookings(listed: &[Listed<Booking>], page: Option<PageInfo>) -> String {
    if listed.is_empty() {
        return "No bookings found.\n".to_string();
    }
    let rows: Vec<(usize, Vec<String>)> = listed
        .iter()
        .map(|l| {
            let b = &l.record;
            (
                l.position,
                vec![
                    b.room.clone(),
                    format!("{} - {}", format_date(b.start), format_date(b.end)),
                    format!("{} / {}", b.drop_off, b.collect),
                ],
            )
        })
        .collect();
    format!("{}{}", render_rows(&rows), render_footer(page, "bookings"))
}

pub(super) fn render_booking_detail(detail: &BookingDetail) -> String {
    let b = &detail.booking;
    let missing = || "(deleted)".to_string();
    let pet = match (&detail.pet_name, &detail.pet_species) {
        (Some(name), Some(species)) => format!("{} ({})", name, species),
        _ => missing(),
    };
    let fields = [
        ("Booking", format!("#{} ({})", b.number, detail.tier)),
        ("Customer", detail.customer_name.clone().unwrap_or_else(missing)),
        ("Pet", pet),
        ("Room", b.room.clone()),
        ("Start", format_date(b.start)),
        ("End", format_date(b.end)),
        ("Drop off", b.drop_off.clone()),
        ("Collect", b.collect.clone()),
    ];
    let mut out = String::new();
    for (label, value) in fields {
        out.push_str(&format!("{:<10} {}\n", format!("{}:", label).bold(), value));
    }
    out
}

pub(super) fn render_rooms(rooms: &[String]) -> String {
    if rooms.is_empty() {
        return "All rooms are currently booked.\n".to_string();
    }
    format!("{}\n", rooms.join(" "))
}

/// One row per room, one `DAY_WIDTH` cell per day. Spans print their label
/// inside brackets across the days they cover. Spans that share a day with
/// another booking in the same room are drawn cell by cell instead, with
/// `COLLISION` on each shared day.
pub(super) fn render_schedule(schedule: &Schedule) -> String {
    let days = schedule.days() as usize;
    let mut out = format!("{}\n", schedule.month.label().bold());

    let header: String = (1..=days)
        .map(|d| format!("{:>width$}", d, width = DAY_WIDTH))
        .collect();
    out.push_str(&format!("{}{}\n", " ".repeat(ROOM_WIDTH), header.dimmed()));

    let mut collided = false;
    for row in &schedule.rows {
        let mut cells: Vec<String> = vec!["  ·".to_string(); days];
        let mut load = vec![0usize; days];
        for span in &row.spans {
            for count in &mut load[span.from_day as usize - 1..span.to_day as usize] {
                *count += 1;
            }
        }
        for span in &row.spans {
            let from = span.from_day as usize - 1;
            let to = span.to_day as usize;
            if load[from..to].iter().any(|&n| n > 1) {
                collided = true;
                for (cell, &n) in cells[from..to].iter_mut().zip(&load[from..to]) {
                    *cell = if n > 1 {
                        COLLISION.on_yellow().to_string()
                    } else {
                        "  =".on_red().to_string()
                    };
                }
                continue;
            }
            let width = (to - from) * DAY_WIDTH;
            let inner = pad_to_width(&span.label, width.saturating_sub(2));
            let text = format!("[{}]", inner);
            cells[from] = text.on_red().to_string();
            for cell in cells.iter_mut().take(to).skip(from + 1) {
                cell.clear();
            }
        }
        out.push_str(&format!(
            "{}{}\n",
            pad_to_width(&row.room, ROOM_WIDTH),
            cells.concat()
        ));
    }
    if collided {
        out.push_str(&format!("{}\n", "! more than one booking on that day".dimmed()));
    }
    out
}

pub(super) fn render_config(config: &HotelConfig) -> String {
    let mut out = String::new();
    for key in HotelConfig::KEYS {
        if let Some(value) = config.get(key) {
            out.push_str(&format!("{} = {}\n", key.bold(), value));
        }
    }
    out
}
