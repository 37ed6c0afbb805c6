//! UI rendering for the terminal user interface.
//!
//! `draw` renders the whole application with `ratatui` and returns a
//! [`HitMap`] describing where each clickable element ended up, so the
//! runtime can turn mouse clicks into `UiEvent`s.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph},
};

use crate::account::KeyValueStore;
use crate::app::{App, Element};
use crate::config::{ControlsSettings, UiSettings};
use crate::playback::{ACCENT, ACTIVE_FILL, ControlStyle, CoverArt, MediaHandle, NEUTRAL, PlayIcon};
use crate::shell::{FormField, NoticeKind, Overlay, Shell};

mod hit;

pub use hit::HitMap;


const KEY_HELP: [(&str, &str); 11] = [
    ("space/p", "play/pause"),
    ("h/l", "prev/next"),
    ("j/k", "up/down"),
    ("enter", "play selected"),
    ("1-9", "featured"),
    ("s", "shuffle"),
    ("r", "repeat"),
    ("+/-", "volume"),
    ("u", "login"),
    ("o", "logout"),
    ("q", "quit"),
];

/// Render the help line, incorporating scrub seconds.
fn controls_text(scrub_seconds: u64) -> String {
    let mut parts: Vec<String> = KEY_HELP
        .iter()
        .map(|(k, v)| format!("[{k}] {v}"))
        .collect();
    parts.insert(2, format!("[H/L] scrub -/+{scrub_seconds}s"));
    parts.join(" | ")
}

/// Parse `#rrggbb` into a terminal color. Anything else is the terminal
/// default.
fn hex_color(hex: &str) -> Color {
    let digits = hex.trim_start_matches('#');
    if digits.len() != 6 {
        return Color::Reset;
    }
    match u32::from_str_radix(digits, 16) {
        Ok(v) => Color::Rgb((v >> 16) as u8, (v >> 8) as u8, v as u8),
        Err(_) => Color::Reset,
    }
}

fn accent() -> Color {
    hex_color(ACCENT)
}

fn control_style(style: ControlStyle) -> Style {
    let bg = style.background().map(hex_color).unwrap_or(Color::Reset);
    Style::default().fg(hex_color(style.color())).bg(bg)
}

fn text_width(s: &str) -> u16 {
    u16::try_from(s.chars().count()).unwrap_or(u16::MAX)
}

/// One-line row `offset` lines below the top of `area`, if it fits.
fn line_at(area: Rect, offset: u16) -> Option<Rect> {
    let y = area.y.checked_add(offset)?;
    (y < area.bottom()).then_some(Rect {
        x: area.x,
        y,
        width: area.width,
        height: 1,
    })
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(5);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
    .intersection(r)
}

/// Render the entire UI into `frame` and report where everything went.
pub fn draw<M: MediaHandle, S: KeyValueStore>(
    frame: &mut Frame,
    app: &App<M, S>,
    ui_settings: &UiSettings,
    controls_settings: &ControlsSettings,
) -> HitMap {
    let mut hits = HitMap::new();
    let area = frame.area();
    let [header, now_playing, featured, tracks, progress, controls, notice] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(5),
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(area);

    draw_header(frame, header, &app.shell, ui_settings, &mut hits);
    draw_now_playing(frame, now_playing, app);
    draw_quick_picks(frame, featured, app, ui_settings.quick_picks, &mut hits);
    draw_tracks(frame, tracks, app, &mut hits);
    draw_progress(frame, progress, app, &mut hits);
    draw_controls(frame, controls, app, &mut hits);
    draw_notice(frame, notice, &app.shell, controls_settings);

    draw_overlay(frame, area, &app.shell, &mut hits);
    draw_logout_prompt(frame, area, &app.shell, &mut hits);
    hits
}

fn draw_header(
    frame: &mut Frame,
    area: Rect,
    shell: &Shell,
    ui_settings: &UiSettings,
    hits: &mut HitMap,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(ui_settings.header_text.as_str())
        .title_alignment(Alignment::Center);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(row) = line_at(inner, 0) else {
        return;
    };
    // Right to left: the user icon, then the greeting when logged in.
    let mut items = vec![("[ user ]".to_string(), Element::UserIcon)];
    if let Some(greeting) = shell.greeting() {
        items.push((greeting, Element::Greeting));
    }
    let mut right = row.right();
    for (label, element) in items {
        let width = text_width(&label).min(right.saturating_sub(row.x));
        if width == 0 {
            break;
        }
        let rect = Rect {
            x: right - width,
            width,
            ..row
        };
        frame.render_widget(
            Paragraph::new(label).style(Style::default().fg(accent())),
            rect,
        );
        hits.add(rect, element);
        right = rect.x.saturating_sub(2);
    }
}

fn draw_now_playing<M: MediaHandle, S: KeyValueStore>(
    frame: &mut Frame,
    area: Rect,
    app: &App<M, S>,
) {
    let np = app.engine.now_playing();
    let cover = match &np.cover {
        CoverArt::File(path) => path.display().to_string(),
        CoverArt::Placeholder(reference) => reference.clone(),
    };
    let lines = vec![
        Line::from(Span::styled(
            np.title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(np.artist.as_str()),
        match app.engine.source_error() {
            Some(reason) => Line::from(Span::styled(reason, Style::default().fg(Color::Red))),
            None => Line::from(Span::styled(
                format!("cover: {cover}"),
                Style::default().add_modifier(Modifier::DIM),
            )),
        },
    ];
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" now playing "),
    );
    frame.render_widget(paragraph, area);
}

/// Numbered shortcut slots. More slots than tracks simply wrap around.
fn draw_quick_picks<M: MediaHandle, S: KeyValueStore>(
    frame: &mut Frame,
    area: Rect,
    app: &App<M, S>,
    slots: usize,
    hits: &mut HitMap,
) {
    let block = Block::default().borders(Borders::ALL).title(" featured ");
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let Some(row) = line_at(inner, 0) else {
        return;
    };

    let mut x = row.x;
    let picks = app.engine.catalog().tracks().iter().cycle().take(slots);
    for (slot, track) in picks.enumerate() {
        let label = format!("[{} {}]", slot + 1, track.title);
        let width = text_width(&label);
        if x.saturating_add(width) > row.right() {
            break;
        }
        let rect = Rect { x, width, ..row };
        frame.render_widget(Paragraph::new(label), rect);
        hits.add(rect, Element::QuickPick(slot));
        x = x.saturating_add(width + 1);
    }
}

fn draw_tracks<M: MediaHandle, S: KeyValueStore>(
    frame: &mut Frame,
    area: Rect,
    app: &App<M, S>,
    hits: &mut HitMap,
) {
    let block = Block::default().borders(Borders::ALL).title(" tracks ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Scroll just enough to keep the cursor visible.
    let height = usize::from(inner.height);
    let start = (app.cursor + 1).saturating_sub(height);

    let rows = app.engine.track_list().rows();
    for (line, (index, row)) in rows.iter().enumerate().skip(start).take(height).enumerate() {
        let Some(rect) = line_at(inner, line as u16) else {
            break;
        };
        let mut style = if row.active {
            Style::default().fg(accent()).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        if index == app.cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }

        let marker = if row.active { ">" } else { " " };
        let [left, right] = Layout::horizontal([Constraint::Min(1), Constraint::Length(7)]).areas(rect);
        frame.render_widget(
            Paragraph::new(format!(
                "{marker} {:>2}  {}  ·  {}",
                row.number, row.title, row.artist
            ))
            .style(style),
            left,
        );
        frame.render_widget(
            Paragraph::new(row.duration.as_str())
                .alignment(Alignment::Right)
                .style(style),
            right,
        );
        hits.add(rect, Element::TrackRow(index));
    }
}

fn draw_progress<M: MediaHandle, S: KeyValueStore>(
    frame: &mut Frame,
    area: Rect,
    app: &App<M, S>,
    hits: &mut HitMap,
) {
    let block = Block::default().borders(Borders::ALL).title(" progress ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [elapsed, bar, total] = Layout::horizontal([
        Constraint::Length(6),
        Constraint::Min(1),
        Constraint::Length(6),
    ])
    .areas(inner);

    frame.render_widget(Paragraph::new(app.progress.elapsed_label()), elapsed);
    // Dim the bar until the media reports a length.
    let fill = match app.progress.duration() {
        Some(_) => accent(),
        None => hex_color(NEUTRAL),
    };
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(fill).bg(hex_color(ACTIVE_FILL)))
        .ratio((app.progress.progress_percent() / 100.0).clamp(0.0, 1.0))
        .label("");
    frame.render_widget(gauge, bar);
    frame.render_widget(
        Paragraph::new(app.progress.duration_label()).alignment(Alignment::Right),
        total,
    );
    hits.add(bar, Element::ProgressBar);
}

fn draw_controls<M: MediaHandle, S: KeyValueStore>(
    frame: &mut Frame,
    area: Rect,
    app: &App<M, S>,
    hits: &mut HitMap,
) {
    let block = Block::default().borders(Borders::ALL).title(" controls ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let transport = app.engine.transport();
    let play_label = match transport.play_icon {
        PlayIcon::Play => "[ play ]",
        PlayIcon::Pause => "[pause ]",
    };
    let plain = Style::default().add_modifier(Modifier::BOLD);
    let buttons = [
        ("[shuffle]", control_style(transport.shuffle), Element::Shuffle),
        ("[ |< ]", plain, Element::Prev),
        (play_label, plain.fg(accent()), Element::Play),
        ("[ >| ]", plain, Element::Next),
        ("[repeat]", control_style(transport.repeat), Element::Repeat),
    ];

    let [row, volume_label, volume_bar, volume_value] = Layout::horizontal([
        Constraint::Length(44),
        Constraint::Length(5),
        Constraint::Min(4),
        Constraint::Length(5),
    ])
    .areas(inner);

    let mut x = row.x;
    for (label, style, element) in buttons {
        let width = text_width(label).min(row.right().saturating_sub(x));
        let rect = Rect { x, width, ..row };
        frame.render_widget(Paragraph::new(label).style(style), rect);
        hits.add(rect, element);
        x = x.saturating_add(width + 1);
    }

    frame.render_widget(Paragraph::new(" vol"), volume_label);
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(hex_color(NEUTRAL)))
        .ratio((app.progress.volume_percent() / 100.0).clamp(0.0, 1.0))
        .label("");
    frame.render_widget(gauge, volume_bar);
    frame.render_widget(
        Paragraph::new(format!("{:.0}%", app.progress.volume_percent())).alignment(Alignment::Right),
        volume_value,
    );
    hits.add(volume_bar, Element::VolumeBar);
}

fn draw_notice(frame: &mut Frame, area: Rect, shell: &Shell, controls: &ControlsSettings) {
    let line = match shell.notice() {
        Some(notice) => {
            let color = match notice.kind {
                NoticeKind::Info => accent(),
                NoticeKind::Error => Color::Red,
            };
            Line::from(Span::styled(notice.text.as_str(), Style::default().fg(color)))
        }
        None => Line::from(Span::styled(
            controls_text(controls.scrub_seconds),
            Style::default().add_modifier(Modifier::DIM),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_overlay(frame: &mut Frame, area: Rect, shell: &Shell, hits: &mut HitMap) {
    let (title, submit, link) = match shell.overlay() {
        Overlay::Hidden => return,
        Overlay::Login => (
            " Login ",
            ("[ Login ]", Element::LoginSubmit),
            ("Don't have an account? Sign up", Element::ShowSignup),
        ),
        Overlay::Signup => (
            " Sign Up ",
            ("[ Sign Up ]", Element::SignupSubmit),
            ("Already have an account? Login", Element::ShowLogin),
        ),
    };
    hits.add(area, Element::Backdrop);

    let fields = FormField::of(shell.overlay());
    let rows = fields.len() as u16 + 3;
    let modal = centered_rect_sized(44, rows + 2, area);
    frame.render_widget(Clear, modal);
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(modal);
    frame.render_widget(block, modal);
    hits.add(modal, Element::OverlayBody);

    let close = Rect {
        x: modal.right().saturating_sub(4),
        y: modal.y,
        width: 3,
        height: 1,
    }
    .intersection(modal);
    frame.render_widget(Paragraph::new("[x]"), close);
    hits.add(close, Element::CloseOverlay);

    for (offset, &field) in fields.iter().enumerate() {
        let Some(rect) = line_at(inner, offset as u16) else {
            break;
        };
        let value = shell.field_value(field);
        let shown = if field.is_secret() {
            "*".repeat(value.chars().count())
        } else {
            value.to_string()
        };
        let focused = shell.focused() == Some(field);
        let (label_style, cursor) = if focused {
            (Style::default().fg(accent()), "_")
        } else {
            (Style::default(), "")
        };
        let line = Line::from(vec![
            Span::styled(format!("{:<10}", format!("{}:", field.label())), label_style),
            Span::raw(format!("{shown}{cursor}")),
        ]);
        frame.render_widget(Paragraph::new(line), rect);
        hits.add(rect, Element::Field(field));
    }

    let base = fields.len() as u16;
    for (offset, (label, element), style) in [
        (base + 1, submit, Style::default().fg(accent()).add_modifier(Modifier::BOLD)),
        (base + 2, link, Style::default().add_modifier(Modifier::UNDERLINED)),
    ] {
        let Some(row) = line_at(inner, offset) else {
            continue;
        };
        let rect = Rect {
            width: text_width(label).min(row.width),
            ..row
        };
        frame.render_widget(Paragraph::new(label).style(style), rect);
        hits.add(rect, element);
    }
}

fn draw_logout_prompt(frame: &mut Frame, area: Rect, shell: &Shell, hits: &mut HitMap) {
    if !shell.confirming_logout() {
        return;
    }
    hits.add(area, Element::ConfirmNo);

    let modal = centered_rect_sized(38, 5, area);
    frame.render_widget(Clear, modal);
    let block = Block::default().borders(Borders::ALL).title(" Logout ");
    let inner = block.inner(modal);
    frame.render_widget(block, modal);
    hits.add(modal, Element::OverlayBody);

    if let Some(row) = line_at(inner, 0) {
        frame.render_widget(Paragraph::new("Are you sure you want to logout?"), row);
    }
    let Some(row) = line_at(inner, 2) else {
        return;
    };
    let yes = Rect {
        width: 7.min(row.width),
        ..row
    };
    let no = Rect {
        x: row.x.saturating_add(10),
        width: 6,
        ..row
    }
    .intersection(row);
    frame.render_widget(
        Paragraph::new("[ yes ]").style(Style::default().fg(accent())),
        yes,
    );
    frame.render_widget(Paragraph::new("[ no ]"), no);
    hits.add(yes, Element::ConfirmYes);
    hits.add(no, Element::ConfirmNo);
}
