pub mod barchart;
pub mod radar;
pub mod screen;

use itertools::Itertools;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        canvas::{self, Canvas, Points},
        Bar, BarChart, BarGroup, Paragraph, Widget, Wrap,
    },
};
use unicode_width::UnicodeWidthStr;

use crate::analysis::{Analysis, WodOutcome};
use crate::score::Field;
use crate::summary::{answered_per_category, radar_series, subtitle};
use crate::{App, AppState};

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 1;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.state {
            AppState::Form => render_form(self, area, buf),
            AppState::Results => render_results(self, area, buf),
            AppState::Summary => render_summary(self, area, buf),
        }
    }
}

fn dim_style() -> Style {
    Style::default().add_modifier(Modifier::DIM)
}

fn bold_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

fn italic_style() -> Style {
    Style::default().add_modifier(Modifier::ITALIC)
}

fn render_form(app: &App, area: Rect, buf: &mut Buffer) {
    let name_width = app
        .form
        .iter()
        .map(|e| e.wod.name.width())
        .max()
        .unwrap_or(0);

    let mut lines: Vec<Line> = vec![
        Line::styled("enter your scores", bold_style()).alignment(Alignment::Center),
        Line::default(),
    ];

    let groups = app
        .form
        .iter()
        .enumerate()
        .chunk_by(|(_, e)| e.wod.category.display());
    for (category, rows) in &groups {
        lines.push(Line::styled(
            format!("{category}"),
            Style::default()
                .fg(category.color())
                .add_modifier(Modifier::BOLD),
        ));

        for (idx, entry) in rows {
            let selected = idx == app.selected;
            let marker = if selected { "> " } else { "  " };
            let row_style = if selected { bold_style() } else { dim_style() };

            let mut spans = vec![
                Span::styled(marker.to_string(), row_style),
                Span::styled(
                    format!("{:<width$}  ", entry.wod.name, width = name_width),
                    row_style,
                ),
            ];

            let active = |field: Field| {
                if selected && app.field == field {
                    bold_style().add_modifier(Modifier::UNDERLINED)
                } else {
                    row_style
                }
            };

            if entry.wod.score_type.is_time() {
                spans.push(Span::styled(
                    format!("{:>3}", pad_blank(&entry.minutes)),
                    active(Field::Minutes),
                ));
                spans.push(Span::styled(":", row_style));
                spans.push(Span::styled(
                    format!("{:<2}", pad_blank(&entry.seconds)),
                    active(Field::Seconds),
                ));
            } else {
                spans.push(Span::styled(
                    format!("{:>4}", pad_blank(&entry.score)),
                    active(Field::Score),
                ));
                spans.push(Span::styled(format!(" {}", entry.wod.unit), dim_style()));
            }

            lines.push(Line::from(spans));
        }
        lines.push(Line::default());
    }

    if let Some(analysis) = app.analysis.as_ref().filter(|a| !a.is_settled()) {
        lines.push(Line::styled(
            format!(
                "analyzing... {}/{}",
                analysis.settled_count(),
                analysis.total()
            ),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::ITALIC),
        ));
    } else {
        lines.push(Line::styled(
            format!(
                "(0-9) edit / (tab) min:sec / (enter) analyze / (g)ender: {} / (esc)ape",
                app.gender
            ),
            italic_style(),
        ));
    }

    Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .render(margins(area), buf);
}

fn render_results(app: &App, area: Rect, buf: &mut Buffer) {
    let Some(analysis) = app.analysis.as_ref() else {
        return;
    };
    let rows = analysis.display_rows();
    if rows.is_empty() {
        Paragraph::new(Line::styled(
            "no results - every request failed; (b)ack to the form",
            dim_style(),
        ))
        .alignment(Alignment::Center)
        .render(margins(area), buf);
        return;
    }

    let cursor = app.results_cursor.min(rows.len() - 1);
    let (wod, outcome) = rows[cursor];
    let accent_style = Style::default()
        .fg(wod.category.color())
        .add_modifier(Modifier::BOLD);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(1), // percentile sentence
            Constraint::Length(1), // padding
            Constraint::Min(1),    // chart
            Constraint::Length(1), // legend
        ])
        .split(area);

    let title = Line::from(vec![
        Span::styled(wod.name, accent_style),
        Span::styled(
            format!("   [{}/{}]", cursor + 1, rows.len()),
            dim_style(),
        ),
    ])
    .alignment(Alignment::Center);
    Paragraph::new(title).render(chunks[0], buf);

    match outcome {
        WodOutcome::Ok(report) => {
            let sentence = Line::from(vec![
                Span::raw("A score of "),
                Span::styled(report.score_display.clone(), accent_style),
                Span::raw(" puts you in the "),
                Span::styled(format!("{}th percentile", report.percentile()), accent_style),
                Span::raw("!"),
            ])
            .alignment(Alignment::Center);
            Paragraph::new(sentence).render(chunks[1], buf);

            let colors = barchart::bar_colors(report);
            let bars: Vec<Bar> = report
                .response
                .chart_labels
                .iter()
                .zip(&report.response.chart_data)
                .zip(colors)
                .map(|((label, count), color)| {
                    Bar::default()
                        .value(*count)
                        .label(Line::from(barchart::bucket_tick(label).to_string()))
                        .style(Style::default().fg(color))
                })
                .collect();

            BarChart::default()
                .data(BarGroup::default().bars(&bars))
                .bar_width(5)
                .bar_gap(1)
                .render(chunks[3], buf);
        }
        WodOutcome::ServerError(error) => {
            let message = Paragraph::new(Line::styled(
                format!("Error: {error}"),
                Style::default().fg(Color::LightRed),
            ))
            .alignment(Alignment::Center);
            message.render(chunks[1], buf);
        }
        WodOutcome::Failed => {}
    }

    Paragraph::new(Line::styled(
        "(h/l or arrows) workout / (s)ummary / (b)ack / (r)e-analyze / (esc)ape",
        italic_style(),
    ))
    .render(chunks[4], buf);
}

fn render_summary(app: &App, area: Rect, buf: &mut Buffer) {
    let entries = app
        .analysis
        .as_ref()
        .map(Analysis::summary)
        .unwrap_or_default();
    let (labels, series) = radar_series(&entries);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Min(1),    // radar canvas
            Constraint::Length(1), // subtitle
            Constraint::Length(1), // category legend
            Constraint::Length(1), // key legend
        ])
        .split(area);

    Paragraph::new(Line::styled(
        "Overall Performance Profile",
        bold_style(),
    ))
    .alignment(Alignment::Center)
    .render(chunks[0], buf);

    let axes = labels.len();
    Canvas::default()
        .x_bounds([-200.0, 200.0])
        .y_bounds([-140.0, 140.0])
        .paint(|ctx| {
            let grid = Color::DarkGray;
            for ring_radius in [25.0, 50.0, 75.0, radar::FULL_SCALE] {
                let ring = radar::ring(axes, ring_radius);
                for pair in ring.windows(2) {
                    ctx.draw(&canvas::Line {
                        x1: pair[0].0,
                        y1: pair[0].1,
                        x2: pair[1].0,
                        y2: pair[1].1,
                        color: grid,
                    });
                }
            }
            for axis in 0..axes {
                let (x, y) = radar::polar(axis, axes, radar::FULL_SCALE);
                ctx.draw(&canvas::Line {
                    x1: 0.0,
                    y1: 0.0,
                    x2: x,
                    y2: y,
                    color: grid,
                });
            }

            for s in &series {
                let color = s.category.color();
                for segment in radar::series_segments(&s.values) {
                    for pair in segment.windows(2) {
                        ctx.draw(&canvas::Line {
                            x1: pair[0].0,
                            y1: pair[0].1,
                            x2: pair[1].0,
                            y2: pair[1].1,
                            color,
                        });
                    }
                }
                let markers = radar::series_points(&s.values);
                ctx.draw(&Points {
                    coords: &markers,
                    color: Color::White,
                });
            }

            ctx.layer();
            for (axis, label) in labels.iter().enumerate() {
                let (x, y) = radar::polar(axis, axes, radar::LABEL_RADIUS);
                // left-hand labels grow leftwards from their anchor
                let x = if x < -1.0 {
                    x - label.width() as f64 * 4.0
                } else {
                    x
                };
                ctx.print(x, y, Line::styled(label.to_string(), dim_style()));
            }
        })
        .render(chunks[1], buf);

    Paragraph::new(Line::styled(subtitle(&entries), italic_style()))
        .alignment(Alignment::Center)
        .render(chunks[2], buf);

    let mut legend_spans: Vec<Span> = Vec::new();
    for (category, count) in answered_per_category(&entries) {
        legend_spans.push(Span::styled(
            format!("■ {category} ({count})  "),
            Style::default().fg(category.color()),
        ));
    }
    Paragraph::new(Line::from(legend_spans))
        .alignment(Alignment::Center)
        .render(chunks[3], buf);

    Paragraph::new(Line::styled(
        "(b)ack to results / (esc)ape",
        italic_style(),
    ))
    .render(chunks[4], buf);
}

fn margins(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([Constraint::Min(1)])
        .split(area);
    chunks[0]
}

fn pad_blank(s: &str) -> &str {
    if s.is_empty() {
        "_"
    } else {
        s
    }
}
