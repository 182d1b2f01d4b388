//! TUI rendering — orchestrates all tabs and overlays.

pub mod dashboard;
pub mod modal;
pub mod queries;
pub mod results;
pub mod tables;
pub mod voting;

use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Paragraph, Tabs},
};

use crate::app::{AlertKind, App, Tab};

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw(f: &mut Frame, app: &App) {
  let area = f.area();

  // Vertical stack: tab bar, body, status bar.
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // tab bar
      Constraint::Min(0),    // body
      Constraint::Length(1), // status bar
    ])
    .split(area);

  draw_tab_bar(f, rows[0], app);
  draw_body(f, rows[1], app);
  draw_status(f, rows[2], app);

  // Overlays render last, on top of the active panel.
  if let Some(form) = &app.form {
    modal::draw_form(f, form);
  }
  if let Some(pending) = &app.confirm {
    modal::draw_confirm(f, pending);
  }
}

// ─── Tab bar ──────────────────────────────────────────────────────────────────

fn draw_tab_bar(f: &mut Frame, area: Rect, app: &App) {
  let titles: Vec<Line> =
    Tab::ALL.iter().map(|t| Line::from(t.title())).collect();
  let selected = Tab::ALL.iter().position(|t| *t == app.tab).unwrap_or(0);

  let tabs = Tabs::new(titles)
    .select(selected)
    .style(Style::default().fg(Color::Gray).bg(Color::DarkGray))
    .highlight_style(
      Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD),
    )
    .divider("|");

  f.render_widget(tabs, area);
}

// ─── Body ─────────────────────────────────────────────────────────────────────

fn draw_body(f: &mut Frame, area: Rect, app: &App) {
  match app.tab {
    Tab::Dashboard => dashboard::draw(f, area, app),
    Tab::Parties | Tab::Candidates | Tab::Voters | Tab::Elections => {
      tables::draw(f, area, app)
    }
    Tab::Results => results::draw(f, area, app),
    Tab::Voting => voting::draw(f, area, app),
    Tab::Queries => queries::draw(f, area, app),
  }
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
  let (mode_label, hints) = if app.form.is_some() {
    ("FORM", "Tab/↑↓ field  ←→ option  Enter save  Esc cancel")
  } else if app.confirm.is_some() {
    ("CONFIRM", "y delete  n cancel")
  } else if app.filter_active {
    ("FILTER", "Type to filter  Enter apply  Esc clear")
  } else {
    match app.tab {
      Tab::Dashboard => ("NORMAL", "Tab/Shift-Tab switch panel  q quit"),
      Tab::Results => (
        "NORMAL",
        "↑↓/jk navigate  a add vote  d delete  / filter  x export  g report  q quit",
      ),
      Tab::Parties | Tab::Candidates | Tab::Voters | Tab::Elections => (
        "NORMAL",
        "↑↓/jk navigate  a add  e edit  d delete  / filter  x export  q quit",
      ),
      Tab::Voting => (
        "NORMAL",
        "←→/hl pane  ↑↓/jk move  Space select  s submit  q quit",
      ),
      Tab::Queries => ("NORMAL", "1-6 run report  Tab switch panel  q quit"),
    }
  };

  // A live alert replaces the hints until it expires.
  let (status, status_style) = match &app.alert {
    Some(alert) => (
      alert.message.clone(),
      match alert.kind {
        AlertKind::Success => Style::default().fg(Color::Green),
        AlertKind::Danger => Style::default().fg(Color::Red),
      },
    ),
    None => (hints.to_string(), Style::default().fg(Color::DarkGray)),
  };

  let mode_span = Span::styled(
    format!(" {mode_label} "),
    Style::default()
      .fg(Color::Black)
      .bg(Color::Cyan)
      .add_modifier(Modifier::BOLD),
  );
  let status_span = Span::styled(format!("  {status}"), status_style);

  let line = Line::from(vec![mode_span, status_span]);
  f.render_widget(
    Paragraph::new(line).style(Style::default().bg(Color::Black)),
    area,
  );
}
